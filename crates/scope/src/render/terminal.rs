//! Full-screen terminal chart

use crossterm::{
    cursor::Show,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::Constraint,
    style::{Color, Style},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Terminal,
};
use sampler::{Frame, FrameSink, Shutdown, SinkError};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::info;

/// Chart title
pub const TITLE: &str = "Data Visualization";
/// Legend entry for the raw trace
pub const RAW_LABEL: &str = "Original Data";
/// Legend entry for the median trace
pub const FILTERED_LABEL: &str = "Filtered Data";

/// Draws each frame as a two-line chart on the alternate screen
///
/// Quits (by cancelling the shared [`Shutdown`]) on `q`, `Esc` or Ctrl-C;
/// raw mode swallows SIGINT, so the key has to be handled here.
pub struct TerminalRenderer {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    shutdown: Shutdown,
}

impl TerminalRenderer {
    /// Switch the terminal to raw mode and the alternate screen
    pub fn new(shutdown: Shutdown) -> Result<Self, SinkError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e.into());
        }

        // Drop never runs if construction fails, so undo the screen setup here
        let terminal = match open_terminal(stdout) {
            Ok(terminal) => terminal,
            Err(e) => {
                let _ = disable_raw_mode();
                let _ = leave_screen(&mut io::stdout());
                return Err(e.into());
            }
        };
        info!("Terminal renderer ready");

        Ok(Self { terminal, shutdown })
    }

    fn poll_keys(&self) -> io::Result<()> {
        while event::poll(Duration::ZERO)? {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }

            let ctrl_c =
                key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);
            if ctrl_c || matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                info!("Quit key pressed");
                self.shutdown.cancel();
            }
        }
        Ok(())
    }
}

impl FrameSink for TerminalRenderer {
    fn render(&mut self, frame: &Frame) -> Result<(), SinkError> {
        self.poll_keys()?;

        let raw = frame.raw_points();
        let filtered = frame.filtered_points();
        self.terminal.draw(|f| {
            f.render_widget(build_chart(frame, &raw, &filtered), f.size());
        })?;
        Ok(())
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = leave_screen(self.terminal.backend_mut());
    }
}

fn open_terminal(stdout: Stdout) -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.hide_cursor()?;
    Ok(terminal)
}

/// Back to the main screen with the cursor visible
fn leave_screen<W: io::Write>(out: &mut W) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen, Show)
}

/// Raw trace in blue, median in red, axes fitted to the frame's ranges
pub fn build_chart<'a>(
    frame: &Frame,
    raw: &'a [(f64, f64)],
    filtered: &'a [(f64, f64)],
) -> Chart<'a> {
    let datasets = vec![
        Dataset::default()
            .name(RAW_LABEL)
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Blue))
            .data(raw),
        Dataset::default()
            .name(FILTERED_LABEL)
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Red))
            .data(filtered),
    ];

    let (x_lo, x_hi) = frame.x_range;
    let (y_lo, y_hi) = frame.y_range;

    Chart::new(datasets)
        .block(Block::default().title(TITLE).borders(Borders::ALL))
        .x_axis(
            Axis::default()
                .title("Time")
                .style(Style::default().fg(Color::Gray))
                .bounds([x_lo, x_hi])
                .labels(axis_labels(x_lo, x_hi).into_iter().map(Span::raw).collect()),
        )
        .y_axis(
            Axis::default()
                .title("Amplitude")
                .style(Style::default().fg(Color::Gray))
                .bounds([y_lo, y_hi])
                .labels(axis_labels(y_lo, y_hi).into_iter().map(Span::raw).collect()),
        )
        .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)))
}

/// Low, middle and high tick labels
fn axis_labels(lo: f64, hi: f64) -> Vec<String> {
    [lo, (lo + hi) / 2.0, hi]
        .iter()
        .map(|v| format!("{v:.1}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use signal_source::Sample;

    fn frame() -> Frame {
        let raw: Vec<Sample> = (0..50)
            .map(|i| {
                let t = i as f64 * 0.1;
                Sample::new(t, (8.0 * t).sin())
            })
            .collect();
        Frame {
            step: 49,
            time: 4.9,
            filtered: raw.clone(),
            raw,
            x_range: (0.0, 20.0),
            y_range: (-2.0, 2.0),
        }
    }

    #[test]
    fn test_axis_labels() {
        assert_eq!(axis_labels(0.0, 20.0), vec!["0.0", "10.0", "20.0"]);
        assert_eq!(axis_labels(-1.4, 3.0), vec!["-1.4", "0.8", "3.0"]);
    }

    #[test]
    fn test_leave_screen_restores_cursor() {
        let mut out = Vec::new();
        leave_screen(&mut out).unwrap();

        let written = String::from_utf8(out).unwrap();
        let leave = written.find("\x1b[?1049l").expect("leaves alternate screen");
        let show = written.find("\x1b[?25h").expect("shows cursor");
        assert!(leave < show);
    }

    #[test]
    fn test_chart_draws_on_test_backend() {
        let frame = frame();
        let raw = frame.raw_points();
        let filtered = frame.filtered_points();

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|f| f.render_widget(build_chart(&frame, &raw, &filtered), f.size()))
            .unwrap();
    }
}
