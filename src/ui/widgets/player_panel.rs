//! Player panel widget
//!
//! Stand-in for the video surface: a live badge with the backend status,
//! a loading or error overlay, and a readout of what the backend actually
//! received.

use ratatui::{
    Frame,
    prelude::*,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::media::BackendStatus;
use crate::ui::components;
use crate::ui::symbols::{badge, overlay};
use crate::ui::theme::{badge as badge_colors, player as colors};

/// Everything the panel shows
#[derive(Debug, Clone)]
pub struct PlayerPanel<'a> {
    /// Stream title
    pub title: &'a str,
    pub status: &'a BackendStatus,
    /// Backend-specific state (readiness step, active source)
    pub detail: String,
    /// Volume as the backend sees it, once it is live
    pub readout: Option<String>,
}

fn status_color(status: &BackendStatus) -> Color {
    match status {
        BackendStatus::Loading => badge_colors::LOADING,
        BackendStatus::Ready => badge_colors::READY,
        BackendStatus::Error(_) => badge_colors::ERROR,
    }
}

/// Badge row: `● LIVE <title>  [<status>]`
pub fn build_badge_line(title: &str, status: &BackendStatus) -> Line<'static> {
    let color = status_color(status);
    Line::from(vec![
        Span::styled(format!("{} LIVE", badge::LIVE), Style::default().fg(Color::Red).bold()),
        Span::raw(" "),
        Span::styled(title.to_string(), Style::default().bold()),
        Span::raw("  "),
        Span::styled(
            format!("[{}]", status.label()),
            Style::default().fg(color),
        ),
    ])
}

/// Overlay lines for a status that is not `Ready`
pub fn build_overlay_lines(status: &BackendStatus) -> Vec<Line<'static>> {
    match status {
        BackendStatus::Ready => Vec::new(),
        BackendStatus::Loading => vec![Line::from(Span::styled(
            format!("{} Loading stream...", overlay::LOADING),
            Style::default().fg(colors::LOADING),
        ))],
        BackendStatus::Error(err) => vec![
            Line::from(Span::styled(
                format!("{} {err}", overlay::ERROR),
                Style::default().fg(colors::ERROR).bold(),
            )),
            Line::from(Span::styled(
                "Press r to remount the player",
                Style::default().fg(colors::ERROR_HINT),
            )),
        ],
    }
}

/// All panel lines
pub fn build_panel_lines(panel: &PlayerPanel) -> Vec<Line<'static>> {
    let mut lines = vec![build_badge_line(panel.title, panel.status), Line::from("")];

    lines.extend(build_overlay_lines(panel.status));
    if let Some(readout) = &panel.readout
        && panel.status.is_ready()
    {
        lines.push(Line::from(Span::styled(
            readout.clone(),
            Style::default().fg(colors::READOUT),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(panel.detail.clone()).dark_gray());
    lines
}

pub fn render_player_panel(frame: &mut Frame, area: Rect, panel: &PlayerPanel) {
    let block = components::panel_block("Player", status_color(panel.status));
    frame.render_widget(
        Paragraph::new(build_panel_lines(panel))
            .block(block)
            .wrap(Wrap { trim: false }),
        area,
    );
}
