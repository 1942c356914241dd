use std::io::IsTerminal;

use clap::ValueEnum;
use comfy_table::Color as ComfyColor;
use crossterm::style::Color;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorMode {
  Always,
  Auto,
  Never,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ThemeMode {
  Dark,
  Light,
  Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
  Dark,
  Light,
}

/// Terminal palette for one theme. Every role is `Color::Reset` when color is off.
#[derive(Debug, Clone, Copy)]
pub struct Colors {
  enabled: bool,
  theme: Theme,
}

impl Colors {
  pub const fn new(enabled: bool, theme: Theme) -> Self {
    Self { enabled, theme }
  }

  const fn pick(&self, dark: (u8, u8, u8), light: (u8, u8, u8)) -> Color {
    if !self.enabled {
      return Color::Reset;
    }
    let (r, g, b) = match self.theme {
      Theme::Dark => dark,
      Theme::Light => light,
    };
    Color::Rgb { r, g, b }
  }

  pub const fn timestamp(&self) -> Color {
    self.pick((118, 166, 166), (92, 62, 38))
  }

  /// Table headers and statistic labels.
  pub const fn heading(&self) -> Color {
    self.pick((217, 164, 4), (176, 103, 66))
  }

  /// Model and operation names.
  pub const fn name(&self) -> Color {
    self.pick((242, 211, 56), (199, 146, 76))
  }

  pub const fn method(&self) -> Color {
    self.pick((166, 84, 55), (211, 99, 70))
  }

  pub const fn text(&self) -> Color {
    self.pick((191, 126, 4), (70, 42, 25))
  }

  pub const fn muted(&self) -> Color {
    self.pick((118, 166, 166), (40, 111, 170))
  }

  pub const fn warning(&self) -> Color {
    self.pick((214, 93, 72), (178, 48, 36))
  }

  pub const fn success(&self) -> Color {
    self.pick((118, 166, 166), (34, 142, 90))
  }
}

/// Converts a crossterm color into the equivalent comfy-table color.
pub fn table_color(color: Color) -> ComfyColor {
  match color {
    Color::Rgb { r, g, b } => ComfyColor::Rgb { r, g, b },
    Color::AnsiValue(value) => ComfyColor::AnsiValue(value),
    _ => ComfyColor::Reset,
  }
}

pub fn colors_enabled(mode: ColorMode) -> bool {
  match mode {
    ColorMode::Always => true,
    ColorMode::Never => false,
    ColorMode::Auto => std::io::stdout().is_terminal(),
  }
}

pub fn detect_theme(mode: ThemeMode) -> Theme {
  match mode {
    ThemeMode::Dark => Theme::Dark,
    ThemeMode::Light => Theme::Light,
    ThemeMode::Auto => theme_from_env(std::env::var("COLORFGBG").ok().as_deref()),
  }
}

/// Reads the background index from a `COLORFGBG` value such as `15;0`.
fn theme_from_env(colorfgbg: Option<&str>) -> Theme {
  if let Some(value) = colorfgbg
    && let Some(bg) = value.split(';').next_back()
    && let Ok(bg) = bg.parse::<u8>()
    && bg >= 8
  {
    return Theme::Light;
  }
  Theme::Dark
}
