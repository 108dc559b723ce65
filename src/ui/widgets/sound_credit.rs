//! Placeholder alert crediting a sound's author

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::config::SoundCreditConfig;
use crate::theme::Palette;

/// Attribution alert for the ambient sound
pub struct SoundCredit<'a> {
    title: &'a str,
    author: &'a str,
    source: Option<&'a str>,
    palette: Palette,
}

impl<'a> SoundCredit<'a> {
    pub fn new(title: &'a str, author: &'a str) -> Self {
        Self {
            title,
            author,
            source: None,
            palette: Palette::default(),
        }
    }

    pub fn from_config(config: &'a SoundCreditConfig) -> Self {
        Self::new(&config.title, &config.author).source(config.source.as_deref())
    }

    pub fn source(mut self, source: Option<&'a str>) -> Self {
        self.source = source;
        self
    }

    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }
}

impl<'a> Widget for SoundCredit<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let palette = self.palette;
        let block = Block::default()
            .title(" ♪ Sound ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.alert_border))
            .style(Style::default().bg(palette.background));

        let mut lines = vec![Line::from(vec![
            Span::styled(self.title, Style::default().fg(palette.text).add_modifier(Modifier::BOLD)),
            Span::styled(" by ", Style::default().fg(palette.text_muted)),
            Span::styled(self.author, Style::default().fg(palette.accent)),
        ])];
        if let Some(source) = self.source {
            lines.push(Line::from(Span::styled(
                format!("via {}", source),
                Style::default().fg(palette.text_muted),
            )));
        }

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
