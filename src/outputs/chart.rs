//! Keyword frequency bar chart.
//!
//! [`build_keyword_chart`] turns the tally into a labelled series; a
//! [`ChartRenderer`] displays it. [`TerminalChart`] draws it with ratatui's
//! bar chart widget into an off-screen buffer and prints the buffer, so the
//! chart lands in the normal scrollback instead of an alternate screen:
//!
//! ```text
//! ┌──────Article Counts by Keyword───────┐
//! │bank    ████████████████████████████4 │
//! │crisis  ██████████████2               │
//! │economy 0                             │
//! └Keywords──────────Number of Articles──┘
//! ```

use crate::error::Result;
use crate::models::KeywordCounts;
use ratatui::buffer::Buffer;
use ratatui::layout::{Direction, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Bar, BarGroup, Block, Borders, Widget};
use std::io::{self, Write};
use tracing::{info, instrument};
use unicode_width::UnicodeWidthStr;

pub const CHART_TITLE: &str = "Article Counts by Keyword";
pub const X_LABEL: &str = "Keywords";
pub const Y_LABEL: &str = "Number of Articles";

/// A titled, labelled (label, value) series in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarChart {
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub bars: Vec<(String, usize)>,
}

/// One bar per keyword, in keyword input order.
pub fn build_keyword_chart(counts: &KeywordCounts) -> BarChart {
    BarChart {
        title: CHART_TITLE,
        x_label: X_LABEL,
        y_label: Y_LABEL,
        bars: counts
            .iter()
            .map(|entry| (entry.keyword.clone(), entry.count))
            .collect(),
    }
}

/// Displays a [`BarChart`].
pub trait ChartRenderer {
    fn render(&mut self, chart: &BarChart) -> Result<()>;
}

/// Renders the chart on stdout. `width` is the room given to the longest bar.
#[derive(Debug, Clone)]
pub struct TerminalChart {
    width: u16,
}

impl TerminalChart {
    pub fn new(width: u16) -> Self {
        Self { width }
    }
}

impl Default for TerminalChart {
    fn default() -> Self {
        Self::new(40)
    }
}

impl ChartRenderer for TerminalChart {
    #[instrument(level = "info", skip_all, fields(bars = chart.bars.len()))]
    fn render(&mut self, chart: &BarChart) -> Result<()> {
        let buffer = render_chart(chart, self.width);
        let stdout = io::stdout();
        let mut out = stdout.lock();
        for line in buffer_lines(&buffer) {
            writeln!(out, "{line}")?;
        }
        out.flush()?;
        info!("Rendered keyword chart");
        Ok(())
    }
}

/// Draw `chart` as a horizontal ratatui bar chart into a fresh buffer.
///
/// The bordered block carries the chart title on top and the axis labels
/// along the bottom edge; each keyword gets one row in input order.
pub fn render_chart(chart: &BarChart, bar_width: u16) -> Buffer {
    let label_width = chart
        .bars
        .iter()
        .map(|(label, _)| label.width())
        .max()
        .unwrap_or(0);
    let inner_width = (label_width as u16 + 1 + bar_width)
        .max((chart.x_label.width() + chart.y_label.width() + 2) as u16)
        .max(chart.title.width() as u16);
    let area = Rect::new(0, 0, inner_width + 2, chart.bars.len() as u16 + 2);

    let bars: Vec<Bar> = chart
        .bars
        .iter()
        .map(|(label, value)| {
            Bar::default()
                .label(Line::from(label.as_str()))
                .value(*value as u64)
                .text_value(value.to_string())
        })
        .collect();
    let max_value = chart.bars.iter().map(|(_, v)| *v as u64).max().unwrap_or(0);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(chart.title).centered())
        .title_bottom(Line::from(chart.x_label).left_aligned())
        .title_bottom(Line::from(chart.y_label).right_aligned());

    let mut buffer = Buffer::empty(area);
    ratatui::widgets::BarChart::default()
        .block(block)
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .max(max_value.max(1))
        .data(BarGroup::default().bars(&bars))
        .render(area, &mut buffer);
    buffer
}

/// Plain text rows of a rendered buffer, trailing blanks trimmed.
pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let width = buffer.area.width.max(1) as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| {
            let mut line = String::new();
            let mut hidden = 0;
            for cell in row {
                // Cells covered by a preceding wide grapheme.
                if hidden > 0 {
                    hidden -= 1;
                    continue;
                }
                let symbol = cell.symbol();
                hidden = symbol.width().saturating_sub(1);
                line.push_str(symbol);
            }
            line.trim_end().to_string()
        })
        .collect()
}
