//! Theme toggle button

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Widget},
};

use crate::theme::Theme;

/// Button offering a switch to the other theme
pub struct ThemeToggleButton {
    theme: Theme,
    focused: bool,
}

impl ThemeToggleButton {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Label naming the theme a press switches to
    pub fn label(&self) -> &'static str {
        match self.theme {
            Theme::Light => "☾ Dark",
            Theme::Dark => "☀ Light",
        }
    }
}

impl Widget for ThemeToggleButton {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let palette = self.theme.palette();
        let border_color = if self.focused { palette.accent } else { palette.border };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(palette.background));

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let label = self.label();
        let label_len = label.chars().count() as u16;
        let x = inner.x + inner.width.saturating_sub(label_len) / 2;
        let y = inner.y + inner.height.saturating_sub(1) / 2;

        let mut style = Style::default().fg(palette.text);
        if self.focused {
            style = style.add_modifier(Modifier::BOLD);
        }
        buf.set_stringn(x, y, label, inner.width as usize, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::widgets::test_util::row;

    #[test]
    fn test_label_offers_other_theme() {
        assert_eq!(ThemeToggleButton::new(Theme::Light).label(), "☾ Dark");
        assert_eq!(ThemeToggleButton::new(Theme::Dark).label(), "☀ Light");
    }

    #[test]
    fn test_render_centered_label() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 14, 3));
        ThemeToggleButton::new(Theme::Dark).focused(true).render(buf.area, &mut buf);
        assert!(row(&buf, 1).contains("Light"));
    }
}
