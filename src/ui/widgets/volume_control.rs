//! Volume control widget
//!
//! One row: mute button with the level icon, a slider, and an optional
//! percentage label.
//!
//! ```text
//!  🔉  █████████░░░░░░░░░░   50%
//! ```

use ratatui::{
    prelude::*,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::control::VolumeController;
use crate::model::MAX_LEVEL;
use crate::ui::symbols::slider;
use crate::ui::theme::volume_control as colors;

/// Width reserved for the percentage label ("Muted" / "100%")
const LABEL_WIDTH: usize = 5;

/// Number of filled cells for `level` on a slider `width` cells wide
pub fn filled_cells(level: u8, width: usize) -> usize {
    usize::from(level.min(MAX_LEVEL)) * width / usize::from(MAX_LEVEL)
}

/// Build the slider spans (filled part, empty part)
pub fn build_slider(level: u8, width: usize, muted: bool) -> Vec<Span<'static>> {
    let filled = if muted { 0 } else { filled_cells(level, width) };
    let filled_color = if muted {
        colors::SLIDER_MUTED
    } else {
        colors::SLIDER_FILLED
    };

    vec![
        Span::styled(
            slider::FILLED.to_string().repeat(filled),
            Style::default().fg(filled_color),
        ),
        Span::styled(
            slider::EMPTY.to_string().repeat(width - filled),
            Style::default().fg(colors::SLIDER_EMPTY),
        ),
    ]
}

/// Build the full control row for a given total width
pub fn build_volume_line(
    controller: &VolumeController,
    width: u16,
    show_percentage: bool,
) -> Line<'static> {
    let button = Span::styled(
        format!(" {} ", controller.icon().glyph()),
        Style::default().bg(colors::BUTTON_BG),
    );

    let label_width = if show_percentage { LABEL_WIDTH + 1 } else { 0 };
    let slider_width = usize::from(width)
        .saturating_sub(button.width() + 1)
        .saturating_sub(label_width);

    let mut spans = vec![button, Span::raw(" ")];
    spans.extend(build_slider(
        controller.level(),
        slider_width,
        controller.is_muted(),
    ));

    if show_percentage {
        spans.push(Span::styled(
            format!(" {:>LABEL_WIDTH$}", controller.percentage_label()),
            Style::default().fg(colors::PERCENTAGE).bold(),
        ));
    }

    Line::from(spans)
}

/// Render the control row into `area` (first line only)
pub fn render_volume_control(
    frame: &mut Frame,
    area: Rect,
    controller: &VolumeController,
    show_percentage: bool,
) {
    let line = build_volume_line(controller, area.width, show_percentage);
    frame.render_widget(Paragraph::new(line), area);
}
