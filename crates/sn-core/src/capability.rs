//! Capability flags carried by world objects.
//!
//! Flags are orthogonal: an object may be detectable, autonomous, both or
//! neither.  Guards are usually both, since one guard can spot another.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Bit set of object capabilities.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Capabilities(u8);

impl Capabilities {
    pub const NONE: Capabilities = Capabilities(0);
    /// The object can be perceived by a Sight.
    pub const DETECTABLE: Capabilities = Capabilities(1 << 0);
    /// The object runs its own Sight and habit.
    pub const AUTONOMOUS: Capabilities = Capabilities(1 << 1);

    #[inline]
    pub fn contains(self, other: Capabilities) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub fn is_detectable(self) -> bool {
        self.contains(Self::DETECTABLE)
    }

    #[inline]
    pub fn is_autonomous(self) -> bool {
        self.contains(Self::AUTONOMOUS)
    }

    #[inline]
    pub fn insert(&mut self, other: Capabilities) {
        self.0 |= other.0;
    }

    #[inline]
    pub fn remove(&mut self, other: Capabilities) {
        self.0 &= !other.0;
    }
}

impl BitOr for Capabilities {
    type Output = Capabilities;
    fn bitor(self, rhs: Capabilities) -> Capabilities {
        Capabilities(self.0 | rhs.0)
    }
}

impl BitOrAssign for Capabilities {
    fn bitor_assign(&mut self, rhs: Capabilities) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.is_detectable(), self.is_autonomous()) {
            (false, false) => f.write_str("inert"),
            (true, false)  => f.write_str("detectable"),
            (false, true)  => f.write_str("autonomous"),
            (true, true)   => f.write_str("detectable+autonomous"),
        }
    }
}
