//! Player story rendering

use ratatui::{
    Frame,
    prelude::*,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::{Backend, PlayerKind, PlayerView};
use crate::ui::theme::player as colors;
use crate::ui::widgets::PlayerPanel;
use crate::ui::{components, widgets};

impl PlayerView {
    /// Backend state line under the badge
    pub(super) fn detail(&self) -> String {
        match &self.backend {
            Backend::Embed { adapter, .. } => {
                let adapter = adapter.borrow();
                match adapter.mount_id() {
                    Some(mount) => format!("{} · {mount}", adapter.state().label()),
                    None => adapter.state().label().to_string(),
                }
            }
            Backend::Video {
                element, sources, ..
            } => match element {
                None => "unmounted".to_string(),
                Some(element) => match element.borrow().active_source() {
                    Some(src) => format!("source: {src}"),
                    None => format!("trying {} source(s)", sources.len()),
                },
            },
        }
    }

    /// What the backend itself reports
    pub(super) fn readout(&self) -> Option<String> {
        let (volume, muted) = match &self.backend {
            Backend::Embed { player, .. } => {
                let player = player.borrow();
                if !player.alive {
                    return None;
                }
                (player.volume.to_string(), player.muted)
            }
            Backend::Video { element, .. } => {
                let element = element.as_ref()?.borrow();
                (format!("{:.2}", element.volume()), element.is_muted())
            }
        };

        let muted = if muted { ", muted" } else { "" };
        Some(format!("backend volume {volume}{muted}"))
    }

    /// Story-specific info box lines
    pub(super) fn info_lines(&self) -> Vec<Line<'static>> {
        match (&self.backend, self.kind()) {
            (Backend::Embed { adapter, .. }, _) => {
                let adapter = adapter.borrow();
                vec![
                    Line::from(format!("Video id: {}", adapter.options().video_id)),
                    Line::from(format!("Script:   {}", adapter.script_src())),
                ]
            }
            (Backend::Video { sources, .. }, PlayerKind::LocalVideo) => {
                let mut lines = vec![
                    Line::from("Using a local MP4 file").bold(),
                    Line::from("Step 1: put your MP4 file in the public/ folder"),
                    Line::from("Step 2: list its path first under [local_video] sources"),
                    Line::from(Span::styled(
                        "Tip: the online sample plays until a local file is found",
                        Style::default().fg(colors::INFO),
                    )),
                ];
                lines.extend(sources.iter().map(|src| Line::from(format!("  {src}")).dark_gray()));
                lines
            }
            (Backend::Video { sources, .. }, _) => sources
                .iter()
                .enumerate()
                .map(|(i, src)| Line::from(format!("Source {}: {src}", i + 1)))
                .collect(),
        }
    }

    /// Render the view
    pub fn render(&self, frame: &mut Frame, area: Rect, show_percentage: bool) {
        let info = self.info_lines();
        let info_height = u16::try_from(info.len()).unwrap_or(u16::MAX).saturating_add(2);
        let chunks = Layout::vertical([
            Constraint::Min(6),
            Constraint::Length(3),
            Constraint::Length(info_height),
        ])
        .split(area);

        let status = self.status();
        let panel = PlayerPanel {
            title: self.title(),
            status: &status,
            detail: self.detail(),
            readout: self.readout(),
        };
        widgets::render_player_panel(frame, chunks[0], &panel);

        let control = components::panel_block("Volume", Color::Cyan);
        let inner = control.inner(chunks[1]);
        frame.render_widget(control, chunks[1]);
        widgets::render_volume_control(frame, inner, &self.controller, show_percentage);

        frame.render_widget(
            Paragraph::new(info)
                .block(components::panel_block("Info", Color::DarkGray))
                .wrap(Wrap { trim: false }),
            chunks[2],
        );
    }
}

#[cfg(test)]
mod tests {
    use crate::config::VideoConfig;
    use crate::ui::views::{PlayerKind, PlayerView};

    fn view(kind: PlayerKind) -> PlayerView {
        let config = VideoConfig {
            sources: vec!["https://cdn.example/a.mp4".into()],
            initial_volume: 40,
            load_ticks: 0,
        };
        PlayerView::video(kind, &config)
    }

    #[test]
    fn test_detail_follows_lifecycle() {
        let mut view = view(PlayerKind::Video);
        assert_eq!(view.detail(), "unmounted");
        view.mount();
        assert_eq!(view.detail(), "trying 1 source(s)");
        view.tick();
        assert_eq!(view.detail(), "source: https://cdn.example/a.mp4");
    }

    #[test]
    fn test_readout_shows_backend_volume() {
        let mut view = view(PlayerKind::Video);
        assert_eq!(view.readout(), None);
        view.mount();
        view.tick();
        assert_eq!(view.readout().as_deref(), Some("backend volume 0.40"));
    }

    #[test]
    fn test_local_video_has_guide() {
        let lines: Vec<String> = view(PlayerKind::LocalVideo)
            .info_lines()
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();
        assert!(lines[0].contains("local MP4"));
        assert_eq!(lines.last().map(String::as_str), Some("  https://cdn.example/a.mp4"));
    }
}
