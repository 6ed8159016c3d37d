//! Output target bitmask

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Set of outputs a block is dispatched to.
///
/// Each bit is checked independently, so `BOTH` produces two writes of the
/// same block. Unknown bits are retained and ignored by dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogTarget(u8);

impl LogTarget {
    pub const NONE: LogTarget = LogTarget(0b00);
    pub const CONSOLE: LogTarget = LogTarget(0b01);
    pub const FILE: LogTarget = LogTarget(0b10);
    pub const BOTH: LogTarget = LogTarget(0b11);

    /// Accept any bit pattern as-is.
    #[inline]
    pub const fn from_bits_retain(bits: u8) -> Self {
        LogTarget(bits)
    }

    #[inline]
    pub const fn bits(&self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn contains(&self, other: LogTarget) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 & Self::BOTH.0 == 0
    }
}

impl BitOr for LogTarget {
    type Output = LogTarget;

    fn bitor(self, rhs: LogTarget) -> LogTarget {
        LogTarget(self.0 | rhs.0)
    }
}

impl BitOrAssign for LogTarget {
    fn bitor_assign(&mut self, rhs: LogTarget) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for LogTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.contains(Self::CONSOLE), self.contains(Self::FILE)) {
            (true, true) => write!(f, "CONSOLE|FILE"),
            (true, false) => write!(f, "CONSOLE"),
            (false, true) => write!(f, "FILE"),
            (false, false) => write!(f, "NONE"),
        }
    }
}
