//! Color palettes and the 24-bit ANSI sequences built from them.
//!
//! Two palettes ship with the binary, `shelf-dark` (the default) and
//! `shelf-light`. Any other palette can be supplied as a TOML file with every
//! color as a `#rrggbb` string; only `header_bg` may be left out:
//!
//! ```toml
//! name = "paperback"
//!
//! [colors]
//! header_fg = "#f2e8d5"
//! header_bg = "#3b2f2a"
//! text_normal = "#e6dccb"
//! text_dim = "#8c8073"
//! border = "#5a4a40"
//! title_fg = "#f6c177"
//! label_fg = "#9ccfd8"
//! wishlist_fg = "#eb6f92"
//! page_current_fg = "#1f1a17"
//! page_current_bg = "#f6c177"
//! disabled_fg = "#5a4a40"
//! empty_state_fg = "#9ccfd8"
//! error_fg = "#eb6f92"
//! loading_fg = "#f6c177"
//! ```
//!
//! ```rust
//! use shelfwise::ui::Theme;
//!
//! let theme = Theme::from_name("shelf-light").unwrap();
//! let title = format!("{}{}Moby Dick{}", Theme::fg(&theme.colors.title_fg), Theme::bold(), Theme::reset());
//! assert!(title.ends_with("\u{1b}[0m"));
//! ```

use crate::domain::error::{Result, ShelfError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "shelf-dark";

/// A named palette.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Hex colors for each screen element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    /// Title bar fill; the terminal background shows through when absent.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Body text.
    pub text_normal: String,
    /// Secondary text such as authors and key hints.
    pub text_dim: String,
    /// Rules between screen regions.
    pub border: String,

    /// Book title color on cards and in the detail panel.
    pub title_fg: String,
    /// Field label color ("Author:", "Genre:").
    pub label_fg: String,
    /// Active wishlist marker color.
    pub wishlist_fg: String,

    /// Current page button foreground.
    pub page_current_fg: String,
    /// Current page button background.
    pub page_current_bg: String,
    /// Disabled pagination button color.
    pub disabled_fg: String,

    /// "No books found" and similar placeholders.
    pub empty_state_fg: String,
    /// Failed loads and rejected commands.
    pub error_fg: String,
    pub loading_fg: String,
}

impl Theme {
    /// Looks up a bundled palette; `None` for names that do not ship.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let source = match name {
            "shelf-dark" => include_str!("../../themes/shelf-dark.toml"),
            "shelf-light" => include_str!("../../themes/shelf-light.toml"),
            _ => return None,
        };

        toml::from_str(source).ok()
    }

    /// Reads a palette from a TOML file.
    ///
    /// # Errors
    ///
    /// [`ShelfError::Theme`] when the file is unreadable or does not describe
    /// a complete palette.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)
            .map_err(|e| ShelfError::Theme(format!("cannot read {}: {e}", path.display())))?;

        toml::from_str(&source).map_err(|e| ShelfError::Theme(format!("{}: {e}", path.display())))
    }

    /// Malformed colors come out white.
    fn rgb(hex: &str) -> (u8, u8, u8) {
        const WHITE: (u8, u8, u8) = (255, 255, 255);

        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.is_ascii() {
            return WHITE;
        }

        let channel = |at: usize| u8::from_str_radix(&digits[at..at + 2], 16).unwrap_or(255);
        (channel(0), channel(2), channel(4))
    }

    /// Truecolor foreground sequence for `hex`.
    ///
    /// ```rust
    /// use shelfwise::ui::Theme;
    ///
    /// assert_eq!(Theme::fg("#ff8000"), "\u{1b}[38;2;255;128;0m");
    /// ```
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// Truecolor background sequence for `hex`.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Clears every attribute set so far.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }

    fn fallback() -> Self {
        Self {
            name: DEFAULT_THEME.to_string(),
            colors: ThemeColors {
                header_fg: "#f2e8d5".to_string(),
                header_bg: Some("#3b2f2a".to_string()),
                text_normal: "#e6dccb".to_string(),
                text_dim: "#8c8073".to_string(),
                border: "#5a4a40".to_string(),
                title_fg: "#f6c177".to_string(),
                label_fg: "#9ccfd8".to_string(),
                wishlist_fg: "#eb6f92".to_string(),
                page_current_fg: "#1f1a17".to_string(),
                page_current_bg: "#f6c177".to_string(),
                disabled_fg: "#5a4a40".to_string(),
                empty_state_fg: "#9ccfd8".to_string(),
                error_fg: "#eb6f92".to_string(),
                loading_fg: "#f6c177".to_string(),
            },
        }
    }
}

impl Default for Theme {
    /// Returns the `shelf-dark` theme.
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).unwrap_or_else(Self::fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn builtin_themes_parse() {
        for name in ["shelf-dark", "shelf-light"] {
            let theme = Theme::from_name(name).unwrap();
            assert_eq!(theme.name, name);
        }
        assert!(Theme::from_name("no-such-theme").is_none());
    }

    #[test]
    fn default_matches_builtin_dark() {
        assert_eq!(Theme::default(), Theme::from_name("shelf-dark").unwrap());
        assert_eq!(Theme::default(), Theme::fallback());
    }

    #[test]
    fn hex_conversion() {
        assert_eq!(Theme::rgb("#ff8000"), (255, 128, 0));
        assert_eq!(Theme::rgb("00ff00"), (0, 255, 0));
        assert_eq!(Theme::rgb("#fff"), (255, 255, 255));
        assert_eq!(Theme::bg("#000000"), "\u{1b}[48;2;0;0;0m");
    }

    #[test]
    fn theme_file_round_trip_and_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");

        let mut theme = Theme::default();
        theme.name = "custom".to_string();
        std::fs::write(&path, toml::to_string(&theme).unwrap()).unwrap();
        assert_eq!(Theme::from_file(&path).unwrap(), theme);

        std::fs::write(&path, "name = \"broken\"").unwrap();
        assert!(matches!(Theme::from_file(&path), Err(ShelfError::Theme(_))));
        assert!(matches!(
            Theme::from_file(dir.path().join("missing.toml")),
            Err(ShelfError::Theme(_))
        ));
    }
}
