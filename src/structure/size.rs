// Tue Jan 13 2026 - Alex

use std::fmt;

/// Declared byte size of a structure. Zero means the size is unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Size {
    value: u64,
}

impl Size {
    pub fn new(value: u64) -> Self {
        Self { value }
    }

    pub fn unknown() -> Self {
        Self { value: 0 }
    }

    pub fn is_known(&self) -> bool {
        self.value != 0
    }

    pub fn as_u64(&self) -> u64 {
        self.value
    }

    pub fn known(&self) -> Option<u64> {
        self.is_known().then_some(self.value)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:X}", self.value)
    }
}

