//! Review and confirm screen, doubling as the computing screen while the
//! single ROI request is in flight.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Stylize;
use ratatui::text::Line;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Wrap;
use roiwiz_core::wizard::WizardStep;

use crate::app::App;

pub(crate) fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.form;
    let mut lines: Vec<Line> = vec![
        Line::from("Assessment complete".bold()),
        Line::from(""),
        Line::from(format!("  Industry        {}", form.organization_industry)),
        Line::from(format!("  Department      {}", form.department)),
        Line::from(format!("  Team size       {} employees", form.human_count)),
        Line::from(format!("  Task volume     {}/month", form.monthly_task_volume)),
        Line::from(format!("  Coverage        {}", form.coverage_hours)),
        Line::from(""),
        Line::from(format!(
            "  {} data points collected.",
            form.data_point_count()
        )),
        Line::from(""),
    ];

    if app.step == WizardStep::Computing {
        lines.push(Line::from("  Analyzing market data...".cyan().bold()));
        lines.push(Line::from(
            "  Comparing against live salary and infrastructure benchmarks.".dim(),
        ));
    } else {
        lines.push(Line::from("  [ Generate strategy report ]".bold().cyan()));
        lines.push(Line::from(""));
        lines.push(Line::from("Enter to generate · Esc quit").dim());
    }

    let body = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" Review "));
    frame.render_widget(body, area);
}
