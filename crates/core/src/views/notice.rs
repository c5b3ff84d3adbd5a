//! User-facing notices raised by controllers

use std::fmt;

use roster_domain::constants::{SAVED_MESSAGE, WRITE_FAILED_MESSAGE};

/// One-shot message for the user after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// Profile changes were saved.
    Saved,
    /// The change is visible but the store rejected the write.
    WriteFailed,
}

impl Notice {
    pub const fn message(self) -> &'static str {
        match self {
            Self::Saved => SAVED_MESSAGE,
            Self::WriteFailed => WRITE_FAILED_MESSAGE,
        }
    }

    pub const fn is_warning(self) -> bool {
        matches!(self, Self::WriteFailed)
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
