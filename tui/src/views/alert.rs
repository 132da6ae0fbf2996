//! Centered modal alert. Shown over whatever step is active; the app
//! dismisses it on the next key press.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Stylize;
use ratatui::text::Line;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Clear;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Wrap;
use unicode_width::UnicodeWidthStr;

pub(crate) fn draw(frame: &mut Frame, area: Rect, text: &str) {
    let inner_width = (text.width() as u16 + 4).max(24).min(area.width);
    let lines = 1 + text.width() as u16 / inner_width.saturating_sub(4).max(1);
    let height = (lines + 4).min(area.height);
    let popup = centered(area, inner_width, height);

    let body = Paragraph::new(vec![
        Line::from(""),
        Line::from(text.to_string()),
        Line::from(""),
        Line::from("press any key".dim()),
    ])
    .wrap(Wrap { trim: false })
    .centered()
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    frame.render_widget(Clear, popup);
    frame.render_widget(body, popup);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
