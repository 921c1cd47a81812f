//! crates/plog/src/metadata.rs
//! Bitmask selecting which metadata fields prefix each log line.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use std::str::FromStr;

use thiserror::Error;

/// Set of metadata fields rendered in front of every message.
///
/// The mask is a thin wrapper around a `u32`. Bits outside
/// [`Metadata::ALL`] are preserved by [`Metadata::from_bits_retain`] so a
/// mask read back from the logger matches what was stored, but the
/// formatter ignores them.
///
/// ```
/// use plog::Metadata;
///
/// let mask = Metadata::LEVEL | Metadata::TIMESTAMP;
/// assert!(mask.contains(Metadata::LEVEL));
/// assert!(!mask.contains(Metadata::CALLER));
/// assert_eq!(mask.to_string(), "timestamp|level");
/// ```
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Metadata(u32);

impl Metadata {
    /// No metadata; lines start with `- `.
    pub const NONE: Self = Self(0);
    /// Wall-clock timestamp.
    pub const TIMESTAMP: Self = Self(1);
    /// Level name.
    pub const LEVEL: Self = Self(1 << 1);
    /// Caller file, line and function.
    pub const CALLER: Self = Self(1 << 2);
    /// Every known field.
    pub const ALL: Self = Self(Self::TIMESTAMP.0 | Self::LEVEL.0 | Self::CALLER.0);

    const NAMED: [(Self, &'static str); 3] = [
        (Self::TIMESTAMP, "timestamp"),
        (Self::LEVEL, "level"),
        (Self::CALLER, "caller"),
    ];

    /// Wraps raw bits, keeping unknown bits intact.
    #[must_use]
    pub const fn from_bits_retain(bits: u32) -> Self {
        Self(bits)
    }

    /// Returns the raw bits.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Reports whether every bit of `other` is set in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Reports whether at least one known field is selected.
    #[must_use]
    pub const fn any_known(self) -> bool {
        self.0 & Self::ALL.0 != 0
    }

    /// Returns the mask with unknown bits cleared.
    #[must_use]
    pub const fn known(self) -> Self {
        Self(self.0 & Self::ALL.0)
    }
}

impl From<u32> for Metadata {
    fn from(bits: u32) -> Self {
        Self::from_bits_retain(bits)
    }
}

impl From<Metadata> for u32 {
    fn from(mask: Metadata) -> Self {
        mask.bits()
    }
}

impl BitOr for Metadata {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Metadata {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for Metadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.any_known() {
            return f.write_str("none");
        }

        let mut first = true;
        for (field, name) in Self::NAMED {
            if self.contains(field) {
                if !first {
                    f.write_str("|")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Error returned when a metadata token is not recognised.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unknown metadata field `{token}`; expected timestamp, level, caller, all or none")]
pub struct MetadataParseError {
    token: String,
}

impl MetadataParseError {
    /// Returns the rejected token.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl FromStr for Metadata {
    type Err = MetadataParseError;

    /// Parses a comma or `|` separated list of field names.
    ///
    /// Accepted tokens are `timestamp`, `level`, `caller`, `all` and `none`
    /// in any ASCII case. A bare integer is taken as raw bits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(bits) = trimmed.parse::<u32>() {
            return Ok(Self::from_bits_retain(bits));
        }

        let mut mask = Self::NONE;
        for token in trimmed.split([',', '|']).map(str::trim) {
            if token.is_empty() {
                continue;
            }
            if token.eq_ignore_ascii_case("all") {
                mask |= Self::ALL;
                continue;
            }
            if token.eq_ignore_ascii_case("none") {
                continue;
            }
            let field = Self::NAMED
                .into_iter()
                .find(|(_, name)| token.eq_ignore_ascii_case(name))
                .map(|(field, _)| field)
                .ok_or_else(|| MetadataParseError {
                    token: token.to_owned(),
                })?;
            mask |= field;
        }
        Ok(mask)
    }
}
