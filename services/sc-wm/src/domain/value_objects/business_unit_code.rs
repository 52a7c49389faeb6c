//! 业务单元编码值对象

use derive_more::Display;
use errors::AppError;
use serde::{Deserialize, Serialize};

/// 业务单元编码
///
/// 仓库的业务主键（如 "MWH.001"），创建后不可变更
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("{_0}")]
pub struct BusinessUnitCode(pub String);

impl BusinessUnitCode {
    /// 创建新的业务单元编码
    pub fn new(code: impl Into<String>) -> Result<Self, BusinessUnitCodeError> {
        let code = code.into().trim().to_string();

        if code.is_empty() {
            return Err(BusinessUnitCodeError::Empty);
        }
        if code.len() > 40 {
            return Err(BusinessUnitCodeError::TooLong(code));
        }

        Ok(Self(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// 业务单元编码错误
#[derive(Debug, thiserror::Error)]
pub enum BusinessUnitCodeError {
    #[error("Business unit code cannot be empty")]
    Empty,
    #[error("Business unit code cannot exceed 40 characters: {0}")]
    TooLong(String),
}

impl From<BusinessUnitCodeError> for AppError {
    fn from(err: BusinessUnitCodeError) -> Self {
        AppError::validation(err.to_string())
    }
}
