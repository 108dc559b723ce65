//! UI widgets

pub mod xp_bar;
pub mod theme_button;
pub mod sound_credit;

pub use xp_bar::{XpBar, format_xp};
pub use theme_button::ThemeToggleButton;
pub use sound_credit::SoundCredit;

#[cfg(test)]
pub(crate) mod test_util {
    use ratatui::buffer::Buffer;

    /// Symbols of one buffer row, concatenated
    pub fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(buf.area.x + x, y)].symbol()).collect()
    }

    /// All rows joined with newlines
    pub fn dump(buf: &Buffer) -> String {
        (buf.area.y..buf.area.y + buf.area.height)
            .map(|y| row(buf, y))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
