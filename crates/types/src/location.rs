//! Location codes and the shelf level encoded inside them.
//!
//! A location code such as `A01-02-1` is opaque except for one convention:
//! the 4th character carries the shelf level. Levels 1 and 2 select a
//! directional arrow on the printed label; every other value means "no arrow".

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of leading characters skipped before the level digit.
const LEVEL_PREFIX_LEN: usize = 3;

/// An opaque warehouse location identifier, kept exactly as it was read.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationCode(String);

impl LocationCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn level(&self) -> Level {
        Level::parse(&self.0)
    }
}

impl fmt::Display for LocationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LocationCode {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for LocationCode {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// The shelf level read from a location code; `0` when none is present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Level(u8);

impl Level {
    pub const NONE: Level = Level(0);

    /// Reads the level digit at the 4th character. Total: never fails.
    pub fn parse(code: &str) -> Level {
        code.chars()
            .nth(LEVEL_PREFIX_LEN)
            .filter(char::is_ascii_digit)
            .and_then(|c| c.to_digit(10))
            .map(|d| Level(d as u8))
            .unwrap_or(Level::NONE)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Level 1 points down, level 2 points up, anything else has no arrow.
    pub fn arrow_direction(self) -> Option<ArrowDirection> {
        match self.0 {
            1 => Some(ArrowDirection::Down),
            2 => Some(ArrowDirection::Up),
            _ => None,
        }
    }
}

impl From<u8> for Level {
    fn from(value: u8) -> Self {
        Level(value)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrowDirection {
    Up,
    Down,
}

impl ArrowDirection {
    /// Parses `"up"` or `"down"`; any other name has no direction.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "up" => Some(ArrowDirection::Up),
            "down" => Some(ArrowDirection::Down),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ArrowDirection::Up => "up",
            ArrowDirection::Down => "down",
        }
    }
}

/// One label to print: the raw code plus the level derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelRow {
    pub code: LocationCode,
    pub level: Level,
}

impl LabelRow {
    pub fn new(code: impl Into<LocationCode>) -> Self {
        let code = code.into();
        let level = code.level();
        Self { code, level }
    }

    pub fn text(&self) -> &str {
        self.code.as_str()
    }

    pub fn arrow(&self) -> Option<ArrowDirection> {
        self.level.arrow_direction()
    }
}

/// One of the two label positions on a page, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SlotIndex {
    Top,
    Bottom,
}

impl SlotIndex {
    pub const COUNT: usize = 2;

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(SlotIndex::Top),
            1 => Some(SlotIndex::Bottom),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        match self {
            SlotIndex::Top => 0,
            SlotIndex::Bottom => 1,
        }
    }
}
