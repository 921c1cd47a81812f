//! crates/plog/src/level.rs
//! Severity levels, their display labels, and level conversions.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Expands to a level name wrapped in an SGR color and a reset.
macro_rules! sgr {
    ($code:literal, $name:literal) => {
        concat!("\x1b[", $code, "m", $name, "\x1b[0m")
    };
}

/// Label rendered for level values outside the defined range.
pub const INVALID_LABEL: &str = "INVALID";

/// Severity of a log message.
///
/// Levels are totally ordered from [`Level::Debug`] (most verbose) to
/// [`Level::Fatal`]. A [`Logger`](crate::Logger) configured with a minimum
/// level suppresses every message whose level compares below it.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
#[repr(u8)]
pub enum Level {
    /// Output all logs.
    Debug = 0,
    /// Output all logs except debug logs.
    Info = 1,
    /// Warnings, errors and fatal errors only.
    Warn = 2,
    /// Errors and fatal errors only.
    Error = 3,
    /// Fatal errors only.
    Fatal = 4,
}

impl Level {
    /// Every level in ascending severity order.
    pub const ALL: [Self; 5] = [
        Self::Debug,
        Self::Info,
        Self::Warn,
        Self::Error,
        Self::Fatal,
    ];

    /// Returns the uppercase name used in log lines.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
        }
    }

    /// Returns the name wrapped in the level's ANSI color.
    #[must_use]
    pub const fn colored_str(self) -> &'static str {
        match self {
            Self::Debug => sgr!("34", "DEBUG"),
            Self::Info => sgr!("32", "INFO"),
            Self::Warn => sgr!("33", "WARN"),
            Self::Error => sgr!("31", "ERROR"),
            Self::Fatal => sgr!("1;31", "FATAL"),
        }
    }

    /// Returns the label for this level, decorated when `colored` is set.
    #[must_use]
    pub const fn label(self, colored: bool) -> &'static str {
        if colored {
            self.colored_str()
        } else {
            self.as_str()
        }
    }

    /// Returns the numeric value of the level (`0` for debug through `4` for fatal).
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Looks up a level from its numeric value.
    #[must_use]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Debug),
            1 => Some(Self::Info),
            2 => Some(Self::Warn),
            3 => Some(Self::Error),
            4 => Some(Self::Fatal),
            _ => None,
        }
    }
}

/// Returns the label for a raw level value.
///
/// Values outside `0..=4` render as [`INVALID_LABEL`] regardless of `colored`.
#[must_use]
pub fn label_for_raw(raw: i64, colored: bool) -> &'static str {
    RawLevel::new(raw).label(colored)
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a value does not name one of the five levels.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("level value `{value}` is out of range; expected 0-4 or debug, info, warn, error, fatal")]
pub struct InvalidLevel {
    value: String,
}

impl InvalidLevel {
    /// Creates the error for the rejected `value`.
    pub fn new(value: impl fmt::Display) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    /// Returns the rejected value as it was supplied.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl FromStr for Level {
    type Err = InvalidLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(raw) = trimmed.parse::<i64>() {
            return Self::try_from(raw);
        }

        Self::ALL
            .into_iter()
            .find(|level| trimmed.eq_ignore_ascii_case(level.as_str()))
            .ok_or_else(|| InvalidLevel::new(s))
    }
}

macro_rules! impl_try_from_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl TryFrom<$ty> for Level {
                type Error = InvalidLevel;

                fn try_from(value: $ty) -> Result<Self, InvalidLevel> {
                    u8::try_from(value)
                        .ok()
                        .and_then(Self::from_u8)
                        .ok_or_else(|| InvalidLevel::new(value))
                }
            }
        )*
    };
}

impl_try_from_int!(i8, i16, i32, i64, u16, u32, u64, usize, isize);

impl TryFrom<u8> for Level {
    type Error = InvalidLevel;

    fn try_from(value: u8) -> Result<Self, InvalidLevel> {
        Self::from_u8(value).ok_or_else(|| InvalidLevel::new(value))
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.as_u8()
    }
}

/// Level value as passed to an emission call.
///
/// Unlike [`Level`], a raw level may lie outside `0..=4`. Emission compares
/// it numerically against the logger's minimum, so values below the range
/// are filtered like any other low level, while values above it are written
/// with the [`INVALID_LABEL`] marker.
///
/// ```
/// use plog::level::{INVALID_LABEL, Level, RawLevel};
///
/// assert_eq!(RawLevel::from(Level::Warn).level(), Some(Level::Warn));
/// assert_eq!(RawLevel::new(7).label(false), INVALID_LABEL);
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct RawLevel(i64);

impl RawLevel {
    /// Wraps a raw level value.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Returns the defined level with this value, if any.
    #[must_use]
    pub fn level(self) -> Option<Level> {
        u8::try_from(self.0).ok().and_then(Level::from_u8)
    }

    /// Reports whether the value falls below `minimum`.
    #[must_use]
    pub fn is_below(self, minimum: Level) -> bool {
        self.0 < i64::from(minimum.as_u8())
    }

    /// Returns the level label, or [`INVALID_LABEL`] for out-of-range values.
    #[must_use]
    pub fn label(self, colored: bool) -> &'static str {
        self.level()
            .map_or(INVALID_LABEL, |level| level.label(colored))
    }
}

impl fmt::Display for RawLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.level() {
            Some(level) => f.write_str(level.as_str()),
            None => write!(f, "{INVALID_LABEL}({})", self.0),
        }
    }
}

impl From<Level> for RawLevel {
    fn from(level: Level) -> Self {
        Self(i64::from(level.as_u8()))
    }
}

macro_rules! impl_raw_from_lossless {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for RawLevel {
                fn from(value: $ty) -> Self {
                    Self(i64::from(value))
                }
            }
        )*
    };
}

impl_raw_from_lossless!(i8, i16, i32, i64, u8, u16, u32);

// Values too large for i64 are far above the defined range either way.
macro_rules! impl_raw_from_saturating {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for RawLevel {
                fn from(value: $ty) -> Self {
                    Self(i64::try_from(value).unwrap_or(i64::MAX))
                }
            }
        )*
    };
}

impl_raw_from_saturating!(u64, usize, isize);

/// Conversion into a validated [`Level`].
///
/// Implemented for [`Level`] itself (always valid), the primitive integer
/// types (range checked against `0..=4`), and level names. The logger's
/// constructor and [`Logger::set_level`](crate::Logger::set_level) accept
/// any implementor so callers holding raw values from configuration get
/// [`InvalidLevel`] instead of a panic.
pub trait IntoLevel {
    /// Validates and converts `self`.
    fn into_level(self) -> Result<Level, InvalidLevel>;
}

impl IntoLevel for Level {
    fn into_level(self) -> Result<Level, InvalidLevel> {
        Ok(self)
    }
}

impl IntoLevel for &str {
    fn into_level(self) -> Result<Level, InvalidLevel> {
        self.parse()
    }
}

impl IntoLevel for &String {
    fn into_level(self) -> Result<Level, InvalidLevel> {
        self.parse()
    }
}

macro_rules! impl_into_level_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoLevel for $ty {
                fn into_level(self) -> Result<Level, InvalidLevel> {
                    Level::try_from(self)
                }
            }
        )*
    };
}

impl_into_level_int!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);
