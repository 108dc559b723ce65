//! Demo UI Application
//!
//! Hosts the XP bar, theme toggle and sound credit, and maps keys to actions.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::config::AppConfig;
use crate::progression::Experience;
use crate::theme::{ThemeStore, ThemeToggle};
use crate::ui::widgets::{SoundCredit, ThemeToggleButton, XpBar, format_xp};

/// Demo application state
pub struct App<S: ThemeStore> {
    config: AppConfig,
    experience: Experience,
    theme: ThemeToggle<S>,
    /// Last status line shown under the widgets
    status: String,
}

impl<S: ThemeStore> App<S> {
    pub fn new(config: AppConfig, store: S) -> Self {
        let experience = Experience::from_total(config.starting_xp);
        let theme = ThemeToggle::new(store);
        Self {
            config,
            experience,
            theme,
            status: String::from("Press space to earn XP"),
        }
    }

    pub fn experience(&self) -> &Experience {
        &self.experience
    }

    pub fn theme(&self) -> &ThemeToggle<S> {
        &self.theme
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Grant the configured XP for one action
    pub fn earn_xp(&mut self) {
        let amount = self.config.xp_per_action;
        let gained = self.experience.add_xp(amount);
        self.status = if gained > 0 {
            log::info!("Reached level {}", self.experience.level());
            format!("Level up! Now level {}", self.experience.level())
        } else {
            format!("+{} XP", format_xp(amount))
        };
    }

    pub fn reset_xp(&mut self) {
        self.experience = Experience::new();
        self.status = String::from("XP reset");
    }

    pub fn toggle_theme(&mut self) {
        self.status = match self.theme.toggle() {
            Ok(theme) => format!("{} theme", theme.name()),
            Err(e) => {
                log::warn!("Failed to persist theme: {}", e);
                format!("{} theme (not saved: {})", self.theme.theme().name(), e)
            }
        };
    }

    /// Handle a key press. Returns true when the app should quit.
    pub fn handle_input(&mut self, key: KeyEvent) -> Result<bool> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return Ok(true),
            KeyCode::Char(' ') | KeyCode::Char('x') => self.earn_xp(),
            KeyCode::Char('t') => self.toggle_theme(),
            KeyCode::Char('r') => self.reset_xp(),
            _ => {}
        }
        Ok(false)
    }

    pub fn render(&self, frame: &mut Frame) {
        let theme = self.theme.theme();
        let palette = theme.palette();
        let area = frame.area();

        frame.render_widget(Block::default().style(Style::default().bg(palette.background)), area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Length(4), // XP bar
                Constraint::Length(4), // Sound credit
                Constraint::Length(3), // Theme button + help
                Constraint::Length(1), // Status
                Constraint::Min(0),
            ])
            .split(area);

        let header = Line::from(vec![
            Span::styled("Cafe", Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)),
            Span::styled(" progress", Style::default().fg(palette.text)),
        ]);
        frame.render_widget(Paragraph::new(header), rows[0]);

        frame.render_widget(
            XpBar::from_experience(&self.experience).palette(palette),
            rows[1],
        );

        frame.render_widget(
            SoundCredit::from_config(&self.config.sound_credit).palette(palette),
            rows[2],
        );

        let controls = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(12), Constraint::Min(0)])
            .split(rows[3]);
        frame.render_widget(ThemeToggleButton::new(theme).focused(true), controls[0]);

        let help = vec![
            Line::default(),
            Line::from(Span::styled(
                " [space] earn XP  [t] theme  [r] reset  [q] quit",
                Style::default().fg(palette.text_muted),
            )),
        ];
        frame.render_widget(Paragraph::new(help), controls[1]);

        frame.render_widget(
            Paragraph::new(Span::styled(self.status.as_str(), Style::default().fg(palette.text))),
            rows[4],
        );
    }
}
