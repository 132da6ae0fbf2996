//! Intake form: industry, company size, department, team shape.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Stylize;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Wrap;
use roiwiz_core::catalog::COMPANY_SIZES;
use roiwiz_core::catalog::INDUSTRIES;

use crate::app::App;
use crate::app::IntakeFocus;

pub(crate) fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let focus = app.intake.focus;
    let mut lines: Vec<Line> = vec![
        Line::from("AI Workforce ROI Assessment".bold()),
        Line::from("Tell us about the team you are evaluating.".dim()),
        Line::from(""),
    ];

    lines.push(select_row(
        "Industry",
        app.intake.industry_idx.map(|i| INDUSTRIES[i].name),
        focus == IntakeFocus::Industry,
    ));
    lines.push(select_row(
        "Company size",
        app.intake.size_idx.map(|i| COMPANY_SIZES[i]),
        focus == IntakeFocus::CompanySize,
    ));

    let department = if app.intake.loading_departments {
        Some("loading suggestions...")
    } else {
        app.intake
            .department_idx
            .and_then(|i| app.intake.departments.get(i))
            .map(String::as_str)
    };
    lines.push(select_row(
        "Department",
        department,
        focus == IntakeFocus::Department,
    ));

    if app.intake.other_selected() {
        lines.push(text_row(
            "Custom department",
            &app.intake.custom_department,
            focus == IntakeFocus::CustomDepartment,
        ));
    }

    let team_size = app.form.human_count.to_string();
    lines.push(select_row(
        "Team size",
        Some(team_size.as_str()),
        focus == IntakeFocus::HumanCount,
    ));

    if !app.intake.tools.is_empty() {
        lines.push(tools_row(app, focus == IntakeFocus::Tools));
    }

    lines.push(text_row(
        "Notes",
        &app.form.description,
        focus == IntakeFocus::Description,
    ));

    lines.push(Line::from(""));
    lines.push(if focus == IntakeFocus::Submit {
        Line::from("  [ Start assessment ]".bold().cyan())
    } else {
        Line::from("  [ Start assessment ]".dim())
    });

    lines.push(Line::from(""));
    lines.push(
        Line::from("Tab next field · ←/→ change value · Space toggle tool · Esc quit").dim(),
    );

    let body = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" roiwiz "));
    frame.render_widget(body, area);
}

fn select_row(label: &str, value: Option<&str>, focused: bool) -> Line<'static> {
    let value = value.unwrap_or("‹ select ›");
    row(label, value.to_string(), focused)
}

fn text_row(label: &str, value: &str, focused: bool) -> Line<'static> {
    let mut value = value.to_string();
    if focused {
        value.push('▏');
    }
    row(label, value, focused)
}

fn row(label: &str, value: String, focused: bool) -> Line<'static> {
    let marker = if focused { "› " } else { "  " };
    let label = format!("{marker}{label:<18}");
    if focused {
        Line::from(vec![label.cyan().bold(), Span::from(value).bold()])
    } else {
        Line::from(vec![label.dim(), Span::from(value)])
    }
}

fn tools_row(app: &App, focused: bool) -> Line<'static> {
    let mut spans: Vec<Span> = Vec::with_capacity(app.intake.tools.len() + 1);
    let marker = if focused { "› " } else { "  " };
    let label = format!("{marker}{:<18}", "Current tools");
    spans.push(if focused {
        label.cyan().bold()
    } else {
        label.dim()
    });
    for (i, tool) in app.intake.tools.iter().enumerate() {
        let checked = app.form.current_tools.iter().any(|t| t == tool);
        let cell = format!("[{}] {tool}  ", if checked { 'x' } else { ' ' });
        spans.push(if focused && i == app.intake.tool_idx {
            cell.bold().underlined()
        } else {
            Span::from(cell)
        });
    }
    Line::from(spans)
}
