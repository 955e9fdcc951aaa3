// src/exit.rs
//! Standardized process exit codes for `tally`.
//!
//! Provides a stable contract for scripts and automation.

use crate::error::TallyError;
use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum TallyExit {
    /// Operation completed successfully.
    Success = 0,
    /// Generic error (e.g. IO, config).
    Error = 1,
    /// Request named an unsupported field or unknown category.
    InvalidInput = 2,
    /// Requested value does not occur in the target collection.
    NotFound = 3,
    /// Nothing to render.
    EmptyData = 4,
}

impl TallyExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn exit(self) -> ! {
        std::process::exit(self.code())
    }

    /// Maps an error chain to an exit code by its innermost `TallyError`, if any.
    #[must_use]
    pub fn for_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<TallyError>() {
            Some(TallyError::UnsupportedField(_) | TallyError::MissingCategory(_)) => {
                Self::InvalidInput
            }
            Some(TallyError::ValueNotFound { .. }) => Self::NotFound,
            Some(TallyError::EmptyDataset(_)) => Self::EmptyData,
            Some(TallyError::Config(_) | TallyError::Io { .. }) | None => Self::Error,
        }
    }
}

impl Termination for TallyExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_map_to_codes() {
        let not_found = anyhow::Error::new(TallyError::ValueNotFound {
            field: "code".into(),
            value: "9".into(),
        });
        assert_eq!(TallyExit::for_error(&not_found), TallyExit::NotFound);
        assert_eq!(TallyExit::for_error(&not_found).code(), 3);

        let bad_field = anyhow::Error::new(TallyError::UnsupportedField("x".into()));
        assert_eq!(TallyExit::for_error(&bad_field), TallyExit::InvalidInput);

        let other = anyhow::anyhow!("boom");
        assert_eq!(TallyExit::for_error(&other), TallyExit::Error);
    }
}
