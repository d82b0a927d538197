/// Dashboard rendering
///
/// Main telemetry pane, event log pane, and the welcome/help modals.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::View;
use crate::cli::VERSION_WITH_BUILD;
use crate::core::alerts::AlignmentStatus;
use crate::core::event_log::{EventLog, Severity};
use crate::core::metrics::{AxisDelta, DisplayModel, SignalQuality};
use crate::utils::centered_rect;

const KEY_HINTS: &str = "Q=Quit  L=Toggle Logging  H=Help";

/// What the main pane currently shows
#[derive(Debug, Clone, PartialEq)]
pub enum Panel {
    /// No poll has completed yet
    Waiting,
    Live(Box<DisplayModel>),
    Unreachable(String),
}

pub struct Dashboard {
    title: String,
    panel: Panel,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Dashboard {
    pub fn new() -> Self {
        Self {
            title: format!(" 🌌 StarWatch v{} ", env!("CARGO_PKG_VERSION")),
            panel: Panel::Waiting,
        }
    }

    pub fn update_model(&mut self, model: Box<DisplayModel>) {
        self.panel = Panel::Live(model);
    }

    pub fn update_unreachable(&mut self, message: String) {
        self.panel = Panel::Unreachable(message);
    }

    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    pub fn render(&self, frame: &mut Frame, view: View, event_log: &EventLog) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Ratio(4, 5), Constraint::Ratio(1, 5)])
            .split(frame.size());

        self.render_main(frame, chunks[0]);
        render_event_log(frame, chunks[1], event_log);

        match view {
            View::Welcome => render_welcome(frame),
            View::Help => render_help(frame),
            View::Dashboard => {}
        }
    }

    fn render_main(&self, frame: &mut Frame, area: Rect) {
        let lines = match &self.panel {
            Panel::Waiting => vec![Line::from(Span::styled(
                "Waiting for first dish status...",
                Style::default().fg(Color::Gray),
            ))],
            Panel::Live(model) => dashboard_lines(model),
            Panel::Unreachable(message) => vec![Line::from(Span::styled(
                message.clone(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ))],
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(Span::styled(
                self.title.clone(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let split = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(inner);

        frame.render_widget(Paragraph::new(lines), split[0]);
        frame.render_widget(
            Paragraph::new(KEY_HINTS).style(Style::default().fg(Color::DarkGray)),
            split[1],
        );
    }
}

fn label(text: &str, color: Color) -> Span<'static> {
    Span::styled(text.to_string(), Style::default().fg(color))
}

fn value(text: String) -> Span<'static> {
    Span::styled(text, Style::default().fg(Color::White))
}

fn axis_text(axis: &AxisDelta) -> String {
    format!(
        "{:.2}° → {:.2}° ({:.2}°{})",
        axis.current_deg,
        axis.desired_deg,
        axis.magnitude_deg,
        axis.direction.glyph()
    )
}

fn alignment_color(status: AlignmentStatus) -> Color {
    match status {
        AlignmentStatus::Ok => Color::Green,
        AlignmentStatus::Marginal => Color::Yellow,
        AlignmentStatus::NeedsAdjustment => Color::Red,
    }
}

/// Main pane text for a live model
pub fn dashboard_lines(model: &DisplayModel) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    if let Some(alert) = model.obstruction_alert {
        lines.push(Line::from(Span::styled(
            alert.message(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
    }

    let signal_color = match model.signal {
        SignalQuality::AboveNoiseFloor => Color::Green,
        SignalQuality::BelowNoiseFloor => Color::Red,
    };

    lines.push(Line::from(vec![
        label("Dish State: ", Color::Yellow),
        value(model.state.label().to_string()),
        label("   Uptime: ", Color::Yellow),
        value(format!("{:.2} hrs", model.uptime_hours)),
        label("   Boot Count: ", Color::Yellow),
        value(model.boot_count.to_string()),
        label("   Signal Quality: ", Color::Yellow),
        Span::styled(model.signal.label(), Style::default().fg(signal_color)),
    ]));
    lines.push(Line::from(""));

    lines.push(Line::from(vec![
        label("POP Latency : ", Color::Green),
        value(format!("{:.2} ms", model.pop_latency_ms)),
    ]));
    lines.push(Line::from(vec![
        label("Downlink    : ", Color::Green),
        value(format!("{:.2} kbps", model.downlink_kbps)),
    ]));
    lines.push(Line::from(vec![
        label("Uplink      : ", Color::Green),
        value(format!("{:.2} kbps", model.uplink_kbps)),
    ]));
    lines.push(Line::from(vec![
        label("Obstruct %  : ", Color::Green),
        value(format!("{:.2}%", model.obstruction_percent)),
    ]));
    lines.push(Line::from(vec![
        label("Obstruction Data Time: ", Color::Green),
        value(format!("{:.0} s", model.obstruction_valid_s)),
        label("   Samples: ", Color::Green),
        value(model.patches_valid.to_string()),
    ]));
    lines.push(Line::from(vec![
        label("Recent Obstruction Duration: ", Color::Green),
        value(model.time_obstructed.clone()),
        label("   Avg Interval Between Obstructions: ", Color::Green),
        value(model.avg_obstruction_interval.clone()),
    ]));
    lines.push(Line::from(""));

    lines.push(Line::from(vec![
        label("Alignment     : ", Color::Cyan),
        Span::styled(
            model.alignment.to_string(),
            Style::default()
                .fg(alignment_color(model.alignment))
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::from(vec![
        label("Tilt          : ", Color::Cyan),
        value(axis_text(&model.tilt)),
    ]));
    lines.push(Line::from(vec![
        label("Rotation      : ", Color::Cyan),
        value(axis_text(&model.rotation)),
    ]));
    lines.push(Line::from(vec![
        label("Uncertainty   : ", Color::Cyan),
        value(format!("{:.2}°", model.attitude_uncertainty_deg)),
    ]));
    lines.push(Line::from(""));

    lines.push(Line::from(vec![
        label("GPS Valid     : ", Color::Blue),
        value(model.gps_valid.to_string()),
        label("   Sats: ", Color::Blue),
        value(model.gps_sats.to_string()),
    ]));
    lines.push(Line::from(vec![
        label("Connected Router : ", Color::Blue),
        value(model.routers_summary()),
    ]));
    lines.push(Line::from(""));

    lines.push(Line::from(label(
        &format!(
            "HW: {} | SW: {} | Build ID: {}",
            model.hardware_version, model.software_version, model.build_id
        ),
        Color::Gray,
    )));
    lines.push(Line::from(label(
        &format!(
            "Logging: {} | Time: {}",
            model.logging_enabled,
            model.timestamp.format("%H:%M:%S %Z %m/%d")
        ),
        Color::Gray,
    )));

    lines
}

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Info => Color::Yellow,
        Severity::Warning => Color::Magenta,
        Severity::Alert | Severity::Error => Color::Red,
    }
}

fn render_event_log(frame: &mut Frame, area: Rect, event_log: &EventLog) {
    // Newest entries stay in view
    let visible = area.height.saturating_sub(2) as usize;
    let skip = event_log.len().saturating_sub(visible);

    let lines: Vec<Line> = event_log
        .entries()
        .skip(skip)
        .map(|entry| {
            Line::from(vec![
                Span::styled(
                    format!("{} ", entry.timestamp.format("%H:%M:%S")),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(entry.message.clone(), Style::default().fg(severity_color(entry.severity))),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" 📜 Event Log "),
    );
    frame.render_widget(widget, area);
}

fn render_modal(frame: &mut Frame, title: &str, lines: Vec<Line>, width: u16, height: u16) {
    let area = centered_rect(width, height, frame.size());
    frame.render_widget(Clear, area);

    let widget = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(Span::styled(
                    title.to_string(),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                )),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(widget, area);
}

fn render_welcome(frame: &mut Frame) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Welcome to StarWatch!",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("Version {}", VERSION_WITH_BUILD)),
        Line::from(""),
        Line::from("Press 'H' at any time for help."),
        Line::from(""),
        Line::from(Span::styled(
            "[ OK ]  (Enter)",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
    ];
    render_modal(frame, " StarWatch ", lines, 60, 10);
}

fn render_help(frame: &mut Frame) {
    let lines = vec![
        Line::from(Span::styled(
            "Legend & Help",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Tilt: Dish vertical aim (elevation)"),
        Line::from("Rotation: Dish horizontal aim (azimuth)"),
        Line::from("Signal Quality: Above/Below usable signal threshold"),
        Line::from("Obstruct: Percent of time signal is blocked"),
        Line::from(""),
        Line::from(Span::styled("Keys:", Style::default().fg(Color::Gray))),
        Line::from("Q = Quit"),
        Line::from("L = Toggle CSV Logging"),
        Line::from("H = Toggle Help"),
        Line::from(""),
        Line::from(Span::styled(
            "[ Close ]  (Enter / Esc)",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
    ];
    render_modal(frame, " Help ", lines, 64, 16);
}
