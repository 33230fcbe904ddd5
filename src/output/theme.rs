//! Light/dark theme for the dashboard.
//!
//! The theme flag is session state only. It changes colors and nothing
//! else.

use std::fmt;
use std::str::FromStr;

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::tier::TierAccent;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ThemeError {
    #[error("invalid theme mode: {0} (expected dark|light)")]
    InvalidMode(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    #[must_use]
    pub const fn palette(self) -> Palette {
        match self {
            Self::Dark => Palette::DARK,
            Self::Light => Palette::LIGHT,
        }
    }

    /// Glyph for the toggle hint: shows the mode you would switch to.
    #[must_use]
    pub const fn toggle_glyph(self) -> &'static str {
        match self {
            Self::Dark => "☀",
            Self::Light => "☾",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dark => f.write_str("dark"),
            Self::Light => f.write_str("light"),
        }
    }
}

impl FromStr for ThemeMode {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            _ => Err(ThemeError::InvalidMode(s.to_string())),
        }
    }
}

/// Concrete colors for one mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub primary: Color,
    pub border: Color,
    pub focus: Color,
    pub highlight: Color,
    pub today: Color,
    pub timer: Color,
}

impl Palette {
    pub const DARK: Self = Self {
        background: Color::Rgb(15, 23, 42),
        foreground: Color::Rgb(226, 232, 240),
        muted: Color::Rgb(148, 163, 184),
        primary: Color::Rgb(96, 165, 250),
        border: Color::DarkGray,
        focus: Color::Yellow,
        highlight: Color::Rgb(42, 45, 52),
        today: Color::Rgb(74, 222, 128),
        timer: Color::Rgb(96, 165, 250),
    };

    pub const LIGHT: Self = Self {
        background: Color::Rgb(248, 250, 252),
        foreground: Color::Rgb(15, 23, 42),
        muted: Color::Rgb(100, 116, 139),
        primary: Color::Rgb(37, 99, 235),
        border: Color::Gray,
        focus: Color::Rgb(202, 138, 4),
        highlight: Color::Rgb(226, 232, 240),
        today: Color::Rgb(22, 163, 74),
        timer: Color::Rgb(37, 99, 235),
    };

    #[must_use]
    pub const fn accent(&self, accent: TierAccent) -> Color {
        match accent {
            TierAccent::Gray => Color::Rgb(156, 163, 175),
            TierAccent::Blue => Color::Rgb(59, 130, 246),
            TierAccent::Purple => Color::Rgb(168, 85, 247),
            TierAccent::Orange => Color::Rgb(249, 115, 22),
            TierAccent::Gold => Color::Rgb(250, 204, 21),
        }
    }

    /// Badge style: white text on the accent color.
    #[must_use]
    pub fn badge(&self, accent: TierAccent) -> Style {
        Style::default()
            .fg(Color::White)
            .bg(self.accent(accent))
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn base(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.background)
    }

    #[must_use]
    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.focus)
        } else {
            Style::default().fg(self.border)
        }
    }
}
