//! Terminal line chart
//!
//! Draws income (green) and expense (red) over the series' date index and
//! waits for a key press before restoring the terminal.

use std::io::{self, Stdout};
use std::panic;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    style::{Color, Style},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame, Terminal,
};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Category, DateFormat};
use crate::services::DailySeries;

use super::{chart_points, ChartSink};

const TITLE: &str = "Income and Expenses Over Time";

/// Full-screen chart in the alternate screen buffer
pub struct TerminalChart {
    date_format: DateFormat,
}

impl TerminalChart {
    pub fn new(date_format: DateFormat) -> Self {
        Self { date_format }
    }
}

impl ChartSink for TerminalChart {
    fn render(&mut self, series: &DailySeries) -> LedgerResult<()> {
        if series.is_empty() {
            return Ok(());
        }

        let mut terminal = init_terminal().map_err(chart_error)?;
        let result = show_until_key(&mut terminal, series, &self.date_format);
        restore_terminal().map_err(chart_error)?;
        result.map_err(chart_error)
    }
}

/// Draw the chart for `series` into the whole frame
pub fn draw_chart(frame: &mut Frame, series: &DailySeries, date_format: &DateFormat) {
    let income = chart_points(series, Category::Income);
    let expense = chart_points(series, Category::Expense);

    let datasets = vec![
        Dataset::default()
            .name("Income")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Green))
            .data(&income),
        Dataset::default()
            .name("Expense")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Red))
            .data(&expense),
    ];

    let x_max = (series.len().saturating_sub(1) as f64).max(1.0);
    let y_max = series.max_value().as_f64().max(1.0);

    let (first, last) = match series.span() {
        Some((first, last)) => (date_format.format(first), date_format.format(last)),
        None => (String::new(), String::new()),
    };

    let chart = Chart::new(datasets)
        .block(Block::default().title(TITLE).borders(Borders::ALL))
        .x_axis(
            Axis::default()
                .title("Date")
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, x_max])
                .labels(vec![Span::raw(first), Span::raw(last)]),
        )
        .y_axis(
            Axis::default()
                .title("Amount")
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, y_max])
                .labels(vec![Span::raw("0"), Span::raw(format!("{:.2}", y_max))]),
        );

    frame.render_widget(chart, frame.area());
}

type Tui = Terminal<CrosstermBackend<Stdout>>;

fn show_until_key(terminal: &mut Tui, series: &DailySeries, date_format: &DateFormat) -> io::Result<()> {
    loop {
        terminal.draw(|frame| draw_chart(frame, series, date_format))?;

        // Redraw on resize, leave on any key press
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}

fn init_terminal() -> io::Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    Terminal::new(CrosstermBackend::new(stdout))
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

fn chart_error(err: io::Error) -> LedgerError {
    LedgerError::Chart(err.to_string())
}
