use alloc::string::String;
use core::fmt::{Display, Formatter};

/// `CacheError` is the errors of this crate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CacheError {
    /// Invalid cache size, the capacity must be greater than zero.
    InvalidSize(usize),
    /// The builder was finalized without an eviction policy.
    MissingPolicy,
    /// The given name does not match any [`Policy`].
    ///
    /// [`Policy`]: enum.Policy.html
    UnknownPolicy(String),
}

impl Display for CacheError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            CacheError::InvalidSize(size) => write!(f, "invalid cache size {}", *size),
            CacheError::MissingPolicy => write!(f, "eviction policy is not set"),
            CacheError::UnknownPolicy(name) => write!(f, "unknown eviction policy {:?}", name),
        }
    }
}

cfg_std! {
    impl std::error::Error for CacheError {}
}

pub(crate) fn check_size(size: usize) -> Result<(), CacheError> {
    if size == 0 {
        Err(CacheError::InvalidSize(0))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::string::ToString;

    #[test]
    fn test_display() {
        assert_eq!(CacheError::InvalidSize(0).to_string(), "invalid cache size 0");
        assert_eq!(
            CacheError::MissingPolicy.to_string(),
            "eviction policy is not set"
        );
        assert_eq!(
            CacheError::UnknownPolicy("fifo".to_string()).to_string(),
            "unknown eviction policy \"fifo\""
        );
    }

    #[test]
    fn test_check_size() {
        assert_eq!(check_size(0), Err(CacheError::InvalidSize(0)));
        assert_eq!(check_size(1), Ok(()));
    }
}
