//! One questionnaire step: progress gauge, prompt, four options.

use ratatui::Frame;
use ratatui::layout::Constraint;
use ratatui::layout::Layout;
use ratatui::layout::Rect;
use ratatui::style::Stylize;
use ratatui::text::Line;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui::widgets::Gauge;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Wrap;
use roiwiz_core::catalog::QUESTION_COUNT;
use roiwiz_core::catalog::question_at;
use roiwiz_core::wizard::WizardStep;

use crate::app::App;

pub(crate) fn draw(frame: &mut Frame, area: Rect, app: &App, index: usize) {
    let Some(question) = question_at(index) else {
        return;
    };
    let [gauge_area, body_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(format!(
            " Question {index} of {QUESTION_COUNT} · {} ",
            question.section
        )))
        .ratio(WizardStep::Question(index).progress())
        .label(format!("{index}/{QUESTION_COUNT}"));
    frame.render_widget(gauge, gauge_area);

    let mut lines: Vec<Line> = vec![
        Line::from(""),
        Line::from(question.prompt.bold()),
        Line::from(""),
    ];
    for option in &question.options {
        lines.push(Line::from(format!("  {}", option.label)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from("a-d or 1-4 to answer · Esc quit").dim());

    let body = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(format!(
            " {} | {} ",
            app.form.organization_industry, app.form.department
        )));
    frame.render_widget(body, body_area);
}
