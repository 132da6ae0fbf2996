//! Rendered strategy report: metric cards, cost tables, comparison chart.

use ratatui::Frame;
use ratatui::layout::Constraint;
use ratatui::layout::Layout;
use ratatui::layout::Rect;
use ratatui::style::Stylize;
use ratatui::text::Line;
use ratatui::widgets::BarChart;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Row;
use ratatui::widgets::Table;
use ratatui::widgets::Wrap;
use roiwiz_core::report::CostTable;
use roiwiz_core::report::ReportDocument;

use crate::app::App;

pub(crate) fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let Some(doc) = &app.rendered else {
        return;
    };
    let [header_area, cards_area, tables_area, chart_area, risks_area, hints_area] =
        Layout::vertical([
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Length(8),
            Constraint::Min(6),
            Constraint::Length(6),
            Constraint::Length(1),
        ])
        .areas(area);

    let header = Paragraph::new(vec![
        Line::from(doc.title.bold()),
        Line::from(doc.subtitle.clone().dim()),
        Line::from(format!("Confidence: {}", doc.confidence)),
    ])
    .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, header_area);

    let card_areas: [Rect; 3] = Layout::horizontal([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .areas(cards_area);
    for (card, card_area) in doc.cards.iter().zip(card_areas) {
        let widget = Paragraph::new(vec![
            Line::from(card.value.clone().bold().green()),
            Line::from(card.caption.dim()),
        ])
        .centered()
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(widget, card_area);
    }

    let [human_area, ai_area] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .areas(tables_area);
    frame.render_widget(cost_table(&doc.human_costs), human_area);
    frame.render_widget(cost_table(&doc.ai_costs), ai_area);

    frame.render_widget(comparison_chart(doc), chart_area);

    let mut risk_lines: Vec<Line> = vec![Line::from("Risk Mitigation".bold())];
    for risk in &doc.risks {
        risk_lines.push(Line::from(format!("• {}: {}", risk.heading, risk.body)));
    }
    risk_lines.push(Line::from(doc.footnote.dim()));
    let risks = Paragraph::new(risk_lines).wrap(Wrap { trim: false });
    frame.render_widget(risks, risks_area);

    frame.render_widget(
        Paragraph::new(Line::from("s save HTML report · r start over · q quit").dim()),
        hints_area,
    );
}

fn cost_table(table: &CostTable) -> Table<'_> {
    let mut rows: Vec<Row> = table
        .rows
        .iter()
        .map(|r| Row::new([r.item.clone(), r.amount.clone()]))
        .collect();
    rows.push(Row::new([table.total.item.clone(), table.total.amount.clone()]).bold());
    Table::new(
        rows,
        [Constraint::Min(24), Constraint::Length(12)],
    )
    .block(Block::default().borders(Borders::ALL).title(table.title))
}

fn comparison_chart(doc: &ReportDocument) -> BarChart<'_> {
    BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Annual Cost Comparison "),
        )
        .direction(ratatui::layout::Direction::Horizontal)
        .bar_gap(1)
        .data(
            ratatui::widgets::BarGroup::default().bars(&[
                ratatui::widgets::Bar::default()
                    .label(Line::from(doc.comparison.labels[0]))
                    .value(doc.comparison.values[0]),
                ratatui::widgets::Bar::default()
                    .label(Line::from(doc.comparison.labels[1]))
                    .value(doc.comparison.values[1])
                    .style(ratatui::style::Style::new().green()),
            ]),
        )
}
