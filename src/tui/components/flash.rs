//! "Menu updated" flash
//!
//! A non-blocking overlay that acknowledges a change to the menu and
//! dismisses itself. It ramps in for the first part of its lifetime, then
//! fades; a newer flash simply replaces an older one.

use crate::tui::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};

/// Share of the lifetime spent at full strength (700ms of the default 1200ms)
const RAMP_IN_SHARE: f64 = 700.0 / 1200.0;

/// A transient acknowledgment that auto-dismisses
#[derive(Debug, Clone)]
pub struct Flash {
    pub message: String,
    created_at: Instant,
    duration: Duration,
}

impl Flash {
    pub fn new(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            message: message.into(),
            created_at: Instant::now(),
            duration,
        }
    }

    /// Check if the flash has run its course and should be removed
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }

    /// Fraction of the lifetime elapsed, clamped to 0.0..=1.0
    pub fn progress(&self) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.created_at.elapsed().as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Whether the flash is past its ramp-in and fading out
    pub fn is_fading(&self) -> bool {
        self.progress() > RAMP_IN_SHARE
    }

    /// Render centered at the top of `area`, on top of other content.
    /// Skipped when `area` is too short to hold the box.
    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        // 2 border columns plus 2 columns of padding each side
        let width = (self.message.chars().count() as u16 + 6).min(area.width);
        let height = 3;

        let x = area.x + area.width.saturating_sub(width) / 2;
        let y = area.y + 1;
        let flash_area = Rect::new(x, y, width, height).intersection(area);
        if flash_area.height < height {
            return;
        }

        let modifier = if self.is_fading() {
            Modifier::DIM
        } else {
            Modifier::BOLD
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.flash))
            .style(Style::default().bg(theme.background));

        let text = Paragraph::new(self.message.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.flash).add_modifier(modifier))
            .block(block);

        f.render_widget(Clear, flash_area);
        f.render_widget(text, flash_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_duration_expires_immediately() {
        let flash = Flash::new("Menu updated", Duration::ZERO);
        assert!(flash.is_expired());
        assert_eq!(flash.progress(), 1.0);
        assert!(flash.is_fading());
    }

    #[test]
    fn test_short_area_skips_render() {
        use ratatui::{backend::TestBackend, Terminal};

        let flash = Flash::new("Menu updated", Duration::from_secs(60));
        let theme = Theme::default();
        for height in 1..=3 {
            let mut terminal = Terminal::new(TestBackend::new(40, height)).unwrap();
            terminal.draw(|f| flash.render(f, f.area(), &theme)).unwrap();
        }

        let mut terminal = Terminal::new(TestBackend::new(40, 4)).unwrap();
        terminal.draw(|f| flash.render(f, f.area(), &theme)).unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("Menu updated"));
    }

    #[test]
    fn test_fresh_flash_is_live() {
        let flash = Flash::new("Menu updated", Duration::from_secs(60));
        assert!(!flash.is_expired());
        assert!(!flash.is_fading());
    }
}
