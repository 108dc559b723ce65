//! XP progress bar widget
//!
//! Renders the level, a filled/empty cell bar and the XP numbers:
//!
//! ```text
//! ┌XP──────────────────────┐
//! │Lv.2 ██████████░░░░░░░░░│
//! │150/300 XP           50%│
//! └────────────────────────┘
//! ```

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Widget},
};

use crate::progression::{compute_progress, Experience, ProgressResult};
use crate::theme::Palette;

const FILLED: char = '█';
const EMPTY: char = '░';

/// Format an XP amount, dropping the decimals of whole numbers
pub fn format_xp(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

/// Widget for rendering level progress
pub struct XpBar<'a> {
    level: i32,
    progress: ProgressResult,
    title: &'a str,
    palette: Palette,
    show_numbers: bool,
}

impl<'a> XpBar<'a> {
    pub fn new(current_xp: f64, current_level: i32) -> Self {
        Self {
            level: current_level,
            progress: compute_progress(current_xp, current_level),
            title: "XP",
            palette: Palette::default(),
            show_numbers: true,
        }
    }

    pub fn from_experience(experience: &Experience) -> Self {
        Self::new(experience.total_xp(), experience.level())
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn show_numbers(mut self, show: bool) -> Self {
        self.show_numbers = show;
        self
    }

    pub fn progress(&self) -> &ProgressResult {
        &self.progress
    }
}

impl<'a> Widget for XpBar<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let palette = self.palette;
        let block = Block::default()
            .title(self.title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border))
            .style(Style::default().bg(palette.background));

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        // Level label then the bar in the remaining width
        let label = format!("Lv.{} ", self.level);
        let label_style = Style::default().fg(palette.text).add_modifier(Modifier::BOLD);
        let (bar_x, _) = buf.set_stringn(inner.x, inner.y, &label, inner.width as usize, label_style);

        let bar_width = (inner.x + inner.width).saturating_sub(bar_x);
        let filled = (bar_width as f64 * self.progress.fill_ratio()).round() as u16;
        for i in 0..bar_width {
            let (glyph, color) = if i < filled {
                (FILLED, palette.xp_filled)
            } else {
                (EMPTY, palette.xp_empty)
            };
            if let Some(cell) = buf.cell_mut((bar_x + i, inner.y)) {
                cell.set_char(glyph).set_style(Style::default().fg(color));
            }
        }

        if !self.show_numbers || inner.height < 2 {
            return;
        }

        let y = inner.y + 1;
        let numbers = format!(
            "{}/{} XP",
            format_xp(self.progress.xp_in_current_level),
            format_xp(self.progress.xp_needed_for_next_level)
        );
        buf.set_stringn(inner.x, y, &numbers, inner.width as usize, Style::default().fg(palette.text_muted));

        let percent = format!("{:.0}%", self.progress.progress_percentage);
        let percent_len = percent.chars().count() as u16;
        if percent_len + (numbers.chars().count() as u16) < inner.width {
            let x = inner.x + inner.width - percent_len;
            buf.set_string(x, y, &percent, Style::default().fg(palette.accent));
        }
    }
}
