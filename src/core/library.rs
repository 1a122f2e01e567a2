use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
pub enum LibraryError {
    DuplicateKey {
        message: String,
    },
    NotFound {
        message: String,
    },
    Serialization {
        message: String,
    },
    // Raised when the shared store can no longer be trusted, e.g. a writer
    // panicked while holding the lock.
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn duplicate_key(message: &str) -> LibraryError {
        LibraryError::DuplicateKey { message: message.to_string() }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::DuplicateKey { message } => {
                write!(f, "{}", message)
            }
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for the book store and catalog.
pub type LibraryResult<T> = Result<T, LibraryError>;

/// Read status label of a book, derived from its `is_read` flag.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum ReadStatus {
    Read,
    Unread,
}

impl From<bool> for ReadStatus {
    fn from(is_read: bool) -> Self {
        if is_read {
            ReadStatus::Read
        } else {
            ReadStatus::Unread
        }
    }
}

impl From<String> for ReadStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Read" => ReadStatus::Read,
            _ => ReadStatus::Unread,
        }
    }
}

impl Display for ReadStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            ReadStatus::Read => write!(f, "Read"),
            ReadStatus::Unread => write!(f, "Unread"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::{LibraryError, ReadStatus};

    #[tokio::test]
    async fn test_should_create_duplicate_key_error() {
        assert!(matches!(LibraryError::duplicate_key("test"), LibraryError::DuplicateKey{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_not_found_error() {
        assert!(matches!(LibraryError::not_found("test"), LibraryError::NotFound{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_serialization_error() {
        assert!(matches!(LibraryError::serialization("test"), LibraryError::Serialization{ message: _ }));
        let json_err = serde_json::from_str::<u32>("nope").expect_err("should not parse");
        assert!(matches!(LibraryError::from(json_err), LibraryError::Serialization{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_runtime_error() {
        assert!(matches!(LibraryError::runtime("test", None), LibraryError::Runtime{ message: _, reason_code: _ }));
    }

    #[tokio::test]
    async fn test_should_display_error_message() {
        assert_eq!("book 7 not found", LibraryError::not_found("book 7 not found").to_string());
        assert_eq!("lock poisoned Some(\"500\")",
                   LibraryError::runtime("lock poisoned", Some("500".to_string())).to_string());
    }

    #[tokio::test]
    async fn test_should_format_read_status() {
        for status in vec![ReadStatus::Read, ReadStatus::Unread] {
            let str = status.to_string();
            assert_eq!(status, ReadStatus::from(str));
        }
        assert_eq!(ReadStatus::Read, ReadStatus::from(true));
        assert_eq!(ReadStatus::Unread, ReadStatus::from(false));
    }
}
