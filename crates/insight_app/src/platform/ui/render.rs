use insight_core::{
    AppViewModel, BarsView, ChartView, SERIES_TIPS, SERIES_WORDS, TIPS_UNIT, WORDS_UNIT,
};
use insight_logging::insight_error;
use ratatui::prelude::*;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Wrap};

use super::constants::*;
use super::layout;

pub(crate) fn render(frame: &mut Frame, view: &AppViewModel) {
    let surfaces = layout::surfaces(frame.size());
    render_container(frame, surfaces.container, view);
    render_status(frame, surfaces.status, view);
}

fn render_container(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Content Insights");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match &view.chart {
        ChartView::Loading => {
            let waiting = Paragraph::new("Waiting for item data…")
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(waiting, inner);
        }
        ChartView::Fault { message } => {
            frame.render_widget(error_display(message), inner);
        }
        ChartView::Bars(bars) => {
            let Some(canvas) = layout::canvas(inner) else {
                insight_error!(
                    "chart canvas unavailable: container interior {}x{} is too small",
                    inner.width,
                    inner.height
                );
                return;
            };
            frame.render_widget(legend_line(), canvas.legend);
            frame.render_widget(bar_chart(bars), canvas.plot);
        }
    }
}

/// Error display that replaces the container content on a data fault.
fn error_display(message: &str) -> Paragraph<'static> {
    Paragraph::new(vec![
        Line::styled(
            "Error",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Line::raw(message.to_string()),
    ])
    .wrap(Wrap { trim: true })
}

fn legend_line() -> Paragraph<'static> {
    Paragraph::new(Line::from(vec![
        Span::styled(format!("■ {SERIES_WORDS}"), Style::default().fg(WORDS_COLOR)),
        Span::raw("   "),
        Span::styled(format!("■ {SERIES_TIPS}"), Style::default().fg(TIPS_COLOR)),
    ]))
}

/// Grouped two-series vertical bar chart: one group per item. The axis
/// maximum is pinned to the final values so the reveal animation grows bars
/// without rescaling; bar values are integers, so the baseline is zero with
/// whole-number steps.
fn bar_chart(bars: &BarsView) -> BarChart<'static> {
    let mut chart = BarChart::default()
        .bar_width(BAR_WIDTH)
        .bar_gap(BAR_GAP)
        .group_gap(GROUP_GAP)
        .max(u64::from(bars.max_value.max(1)));

    for row in &bars.rows {
        let words = scaled(row.words, bars.progress_pct);
        let tips = scaled(row.tips, bars.progress_pct);
        let group = BarGroup::default()
            .label(Line::from(row.label.clone()))
            .bars(&[
                Bar::default()
                    .value(words)
                    .text_value(format!("{words} {WORDS_UNIT}"))
                    .style(Style::default().fg(WORDS_COLOR)),
                Bar::default()
                    .value(tips)
                    .text_value(format!("{tips} {TIPS_UNIT}"))
                    .style(Style::default().fg(TIPS_COLOR)),
            ]);
        chart = chart.data(group);
    }
    chart
}

/// Scales a bar value by the reveal progress, in whole percent.
fn scaled(value: u32, progress_pct: u16) -> u64 {
    u64::from(value) * u64::from(progress_pct.min(100)) / 100
}

fn render_status(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    let phase = match &view.chart {
        ChartView::Loading => "loading",
        ChartView::Fault { .. } => "error",
        ChartView::Bars(bars) if bars.progress_pct < 100 => "animating",
        ChartView::Bars(_) => "ready",
    };
    let text = format!(
        "Items: {} | Chart: {} | Keys: r rebuild, q quit",
        view.item_count, phase
    );
    let status = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(status, area);
}
