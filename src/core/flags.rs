//! Format flags selecting the optional fields of a log line
//!
//! Flags combine with `|`:
//!
//! ```
//! use rust_logx::Flags;
//!
//! let flags = Flags::DATE | Flags::TIME | Flags::SHORT_FILE;
//! assert!(flags.contains(Flags::TIME));
//! assert_eq!(flags.to_string(), "date|time|shortfile");
//! ```

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};
use std::str::FromStr;
use std::sync::atomic::{AtomicU32, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Flags(u32);

impl Flags {
    /// No optional fields: `LEVEL [prefix] [tags] message`
    pub const NONE: Flags = Flags(0);
    /// Date in the local time zone: `2009/01/23`
    pub const DATE: Flags = Flags(1 << 0);
    /// Time in the local time zone: `01:23:23`
    pub const TIME: Flags = Flags(1 << 1);
    /// Microsecond resolution: `01:23:23.123123`. Implies `TIME`.
    pub const MICROSECONDS: Flags = Flags(1 << 2);
    /// Full file name and line number: `/a/b/c/d.rs:23`
    pub const LONG_FILE: Flags = Flags(1 << 3);
    /// Final file name element and line number: `d.rs:23`. Overrides `LONG_FILE`.
    pub const SHORT_FILE: Flags = Flags(1 << 4);
    /// Use UTC rather than the local time zone
    pub const UTC: Flags = Flags(1 << 5);
    /// Collapse whitespace runs in the message to a single space
    pub const COMPACT: Flags = Flags(1 << 6);
    /// Default for new loggers
    pub const STD: Flags = Flags::SHORT_FILE;

    const NAMES: [(&'static str, Flags); 7] = [
        ("date", Flags::DATE),
        ("time", Flags::TIME),
        ("microseconds", Flags::MICROSECONDS),
        ("longfile", Flags::LONG_FILE),
        ("shortfile", Flags::SHORT_FILE),
        ("utc", Flags::UTC),
        ("compact", Flags::COMPACT),
    ];

    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Unknown bits are dropped.
    #[inline]
    pub const fn from_bits_truncate(bits: u32) -> Self {
        Flags(bits & 0x7f)
    }

    #[inline]
    pub const fn contains(self, other: Flags) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub const fn intersects(self, other: Flags) -> bool {
        self.0 & other.0 != 0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Whether any clock reading is needed to render a line
    #[inline]
    pub const fn needs_clock(self) -> bool {
        self.intersects(Flags(Self::DATE.0 | Self::TIME.0 | Self::MICROSECONDS.0 | Self::UTC.0))
    }

    /// Whether a caller location field is rendered
    #[inline]
    pub const fn needs_location(self) -> bool {
        self.intersects(Flags(Self::LONG_FILE.0 | Self::SHORT_FILE.0))
    }
}

impl BitOr for Flags {
    type Output = Flags;

    fn bitor(self, rhs: Flags) -> Flags {
        Flags(self.0 | rhs.0)
    }
}

impl BitOrAssign for Flags {
    fn bitor_assign(&mut self, rhs: Flags) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Flags {
    type Output = Flags;

    fn bitand(self, rhs: Flags) -> Flags {
        Flags(self.0 & rhs.0)
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (name, flag) in Self::NAMES {
            if self.contains(flag) {
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

impl FromStr for Flags {
    type Err = LoggerError;

    /// Parse `"date|time|shortfile"`; `,` and whitespace also separate names.
    /// `"std"` names the default set and an empty string yields no flags.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut flags = Flags::NONE;
        for part in s.split(|c: char| c == '|' || c == ',' || c.is_whitespace()) {
            if part.is_empty() {
                continue;
            }
            let lower = part.to_ascii_lowercase();
            if lower == "std" {
                flags |= Flags::STD;
                continue;
            }
            let flag = Self::NAMES
                .iter()
                .find(|(name, _)| *name == lower)
                .map(|(_, flag)| *flag)
                .ok_or_else(|| LoggerError::invalid_flag(part))?;
            flags |= flag;
        }
        Ok(flags)
    }
}

impl TryFrom<String> for Flags {
    type Error = LoggerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Flags> for String {
    fn from(flags: Flags) -> Self {
        flags.to_string()
    }
}

/// Flags cell that can be swapped at runtime while lines are being written
#[derive(Debug)]
pub struct AtomicFlags(AtomicU32);

impl AtomicFlags {
    pub const fn new(flags: Flags) -> Self {
        Self(AtomicU32::new(flags.bits()))
    }

    #[inline]
    pub fn load(&self) -> Flags {
        Flags::from_bits_truncate(self.0.load(Ordering::Acquire))
    }

    #[inline]
    pub fn store(&self, flags: Flags) {
        self.0.store(flags.bits(), Ordering::Release);
    }
}
