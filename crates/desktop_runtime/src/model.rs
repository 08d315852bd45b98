use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use system_ui::IconName;
use thiserror::Error;

/// Stacking value the registry counter starts from before any window has opened.
pub const DEFAULT_BASE_Z_INDEX: u32 = 21;

/// Identifier of an embeddable desktop application. The set is closed at build time.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum WindowId {
    About,
    Essays,
    Calculator,
    Chess,
    Snake,
    Sudoku,
    Solitaire,
    Breakout,
    NowPlaying,
}

impl WindowId {
    /// Number of known windows.
    pub const COUNT: usize = 9;

    /// Every window id in canonical (desktop icon) order.
    pub const ALL: [WindowId; Self::COUNT] = [
        Self::About,
        Self::Essays,
        Self::Calculator,
        Self::Chess,
        Self::Snake,
        Self::Sudoku,
        Self::Solitaire,
        Self::Breakout,
        Self::NowPlaying,
    ];

    /// Dense index into fixed-size per-window tables.
    pub const fn index(self) -> usize {
        match self {
            Self::About => 0,
            Self::Essays => 1,
            Self::Calculator => 2,
            Self::Chess => 3,
            Self::Snake => 4,
            Self::Sudoku => 5,
            Self::Solitaire => 6,
            Self::Breakout => 7,
            Self::NowPlaying => 8,
        }
    }

    /// Stable token used by config, deep links and DOM hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Essays => "essays",
            Self::Calculator => "calculator",
            Self::Chess => "chess",
            Self::Snake => "snake",
            Self::Sudoku => "sudoku",
            Self::Solitaire => "solitaire",
            Self::Breakout => "breakout",
            Self::NowPlaying => "now-playing",
        }
    }

    /// Static title and icon for this window.
    pub const fn descriptor(self) -> WindowDescriptor {
        let (title, icon) = match self {
            Self::About => ("About Me", IconName::Person),
            Self::Essays => ("Essays", IconName::Document),
            Self::Calculator => ("Calculator", IconName::Calculator),
            Self::Chess => ("Chess", IconName::ChessKnight),
            Self::Snake => ("Snake", IconName::Snake),
            Self::Sudoku => ("Sudoku", IconName::Grid),
            Self::Solitaire => ("Solitaire", IconName::Cards),
            Self::Breakout => ("Breakout", IconName::Bricks),
            Self::NowPlaying => ("Now Playing", IconName::Music),
        };
        WindowDescriptor { title, icon }
    }

    pub const fn title(self) -> &'static str {
        self.descriptor().title
    }

    pub const fn icon(self) -> IconName {
        self.descriptor().icon
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown window id `{0}`")]
pub struct UnknownWindowId(pub String);

impl FromStr for WindowId {
    type Err = UnknownWindowId;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let needle = raw.trim();
        Self::ALL
            .into_iter()
            .find(|id| id.token().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownWindowId(raw.to_string()))
    }
}

/// Immutable per-window metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowDescriptor {
    pub title: &'static str,
    pub icon: IconName,
}

/// Registry-owned lifecycle record for one window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowState {
    pub is_open: bool,
    /// Stacking key; `0` means never assigned. Stale (but harmless) while closed.
    pub z_index: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset_from(self, origin: Point) -> Point {
        Point {
            x: self.x - origin.x,
            y: self.y - origin.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn clamped_min(self, min: Size) -> Self {
        Self {
            width: self.width.max(min.width),
            height: self.height.max(min.height),
        }
    }
}

/// Visible desktop area windows are clamped into (everything above the taskbar).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn index_matches_canonical_order() {
        for (position, id) in WindowId::ALL.into_iter().enumerate() {
            assert_eq!(id.index(), position);
        }
    }

    #[test]
    fn tokens_round_trip_through_from_str() {
        for id in WindowId::ALL {
            assert_eq!(id.token().parse::<WindowId>(), Ok(id));
        }
        assert_eq!(" About ".parse::<WindowId>(), Ok(WindowId::About));
    }

    #[test]
    fn unknown_token_is_rejected() {
        assert_eq!(
            "abuot".parse::<WindowId>(),
            Err(UnknownWindowId("abuot".to_string()))
        );
    }

    #[test]
    fn serde_uses_kebab_case_tokens() {
        let json = serde_json::to_string(&WindowId::NowPlaying).unwrap();
        assert_eq!(json, "\"now-playing\"");
    }
}
