use thiserror::Error;

/// The two ways a move can be rejected by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidAction,
    InvalidIndex,
}

/// Errors surfaced to callers of the engine.
///
/// Both variants describe a malformed or out-of-turn move rather than an
/// internal fault. A rejected move leaves the game state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeartsError {
    #[error("invalid action: {0}")]
    InvalidAction(String),
    #[error("invalid index: {0}")]
    InvalidIndex(String),
}

impl HeartsError {
    pub fn invalid_action(message: impl Into<String>) -> Self {
        HeartsError::InvalidAction(message.into())
    }

    pub fn invalid_index(message: impl Into<String>) -> Self {
        HeartsError::InvalidIndex(message.into())
    }

    pub const fn kind(&self) -> ErrorKind {
        match self {
            HeartsError::InvalidAction(_) => ErrorKind::InvalidAction,
            HeartsError::InvalidIndex(_) => ErrorKind::InvalidIndex,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            HeartsError::InvalidAction(message) | HeartsError::InvalidIndex(message) => message,
        }
    }
}

pub type Result<T> = std::result::Result<T, HeartsError>;

/// Checks that `index` addresses one of `len` slots.
pub fn check_index(index: usize, len: usize, what: &str) -> Result<usize> {
    if index >= len {
        return Err(HeartsError::invalid_index(format!(
            "{what} index {index} must be less than {len}"
        )));
    }
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::{ErrorKind, HeartsError, check_index};

    #[test]
    fn display_carries_kind_prefix() {
        let err = HeartsError::invalid_action("it is not the passing phase");
        assert_eq!(err.to_string(), "invalid action: it is not the passing phase");
        assert_eq!(err.kind(), ErrorKind::InvalidAction);
        assert_eq!(err.message(), "it is not the passing phase");
    }

    #[test]
    fn check_index_rejects_upper_bound() {
        assert_eq!(check_index(3, 4, "seat"), Ok(3));
        let err = check_index(4, 4, "seat").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidIndex);
    }
}
