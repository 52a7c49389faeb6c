//! 位置编码值对象

use derive_more::Display;
use errors::AppError;
use serde::{Deserialize, Serialize};

/// 位置编码
///
/// 可由 LocationResolver 解析的位置标识（如 "ZWOLLE-001"）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("{_0}")]
pub struct LocationCode(pub String);

impl LocationCode {
    /// 创建新的位置编码
    pub fn new(code: impl Into<String>) -> Result<Self, LocationCodeError> {
        let code = code.into().trim().to_string();

        if code.is_empty() {
            return Err(LocationCodeError::Empty);
        }
        if code.len() > 40 {
            return Err(LocationCodeError::TooLong(code));
        }

        Ok(Self(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// 位置编码错误
#[derive(Debug, thiserror::Error)]
pub enum LocationCodeError {
    #[error("Location code cannot be empty")]
    Empty,
    #[error("Location code cannot exceed 40 characters: {0}")]
    TooLong(String),
}

impl From<LocationCodeError> for AppError {
    fn from(err: LocationCodeError) -> Self {
        AppError::validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_code() {
        let code = LocationCode::new("ZWOLLE-001");
        assert!(code.is_ok());
        assert_eq!(code.unwrap().as_str(), "ZWOLLE-001");
    }

    #[test]
    fn test_empty_code() {
        assert!(LocationCode::new("").is_err());
        assert!(LocationCode::new(" \t ").is_err());
    }

    #[test]
    fn test_too_long_code() {
        assert!(LocationCode::new("L".repeat(41)).is_err());
    }

    #[test]
    fn test_display() {
        let code = LocationCode::new("AMSTERDAM-002").unwrap();
        assert_eq!(code.to_string(), "AMSTERDAM-002");
    }
}
