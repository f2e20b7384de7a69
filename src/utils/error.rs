use thiserror::Error;

#[derive(Error, Debug)]
pub enum AlgoError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Invalid expression: {message}")]
    InvalidExpression { message: String },

    #[error("Mismatched parentheses in the infix expression: {expression}")]
    ParenthesesMismatch { expression: String },

    #[error("Validation error for '{field}' (value: '{value}'): {reason}")]
    Validation {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AlgoError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AlgoError::InvalidArgument { .. }
            | AlgoError::InvalidExpression { .. }
            | AlgoError::ParenthesesMismatch { .. } => ErrorCategory::Input,
            AlgoError::Validation { .. } | AlgoError::Config { .. } => {
                ErrorCategory::Configuration
            }
            AlgoError::Io(_) | AlgoError::Serialization(_) | AlgoError::Csv(_) => {
                ErrorCategory::System
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AlgoError::InvalidArgument { .. } => "提供非負整數作為輸入",
            AlgoError::InvalidExpression { .. } => {
                "只使用單字元運算元 (a-z, A-Z, 0-9) 以及 + - * / % ^ ( ) ;"
            }
            AlgoError::ParenthesesMismatch { .. } => "檢查左右括號是否成對",
            AlgoError::Validation { .. } => "修正設定檔中標示的欄位後再試一次",
            AlgoError::Config { .. } => "確認設定檔存在且為合法的 TOML 格式",
            AlgoError::Io(_) => "檢查檔案路徑與讀寫權限",
            AlgoError::Serialization(_) | AlgoError::Csv(_) => "請回報此問題並附上輸入資料",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AlgoError::InvalidArgument { message } => format!("輸入參數錯誤: {}", message),
            AlgoError::InvalidExpression { message } => format!("運算式無效: {}", message),
            AlgoError::ParenthesesMismatch { expression } => {
                format!("括號不匹配: {}", expression)
            }
            AlgoError::Validation { field, reason, .. } => {
                format!("設定驗證失敗 ({}): {}", field, reason)
            }
            AlgoError::Config { message } => format!("設定載入失敗: {}", message),
            other => format!("系統錯誤: {}", other),
        }
    }

    /// CLI 依錯誤嚴重程度決定退出碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium | ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, AlgoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_errors_are_medium_severity() {
        let err = AlgoError::InvalidArgument {
            message: "negative".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_io_error_is_critical() {
        let err: AlgoError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err.category(), ErrorCategory::System);
        assert_eq!(err.exit_code(), 3);
        assert!(err.user_friendly_message().contains("gone"));
    }
}
