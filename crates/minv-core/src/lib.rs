//! # Matrix Inversion Core
//!
//! 核心資料模型與類型定義

pub mod config;
pub mod matrix;

// Re-export 主要類型
pub use config::InversionOptions;
pub use matrix::Matrix;

/// 矩陣求逆錯誤類型
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MinvError {
    #[error("空矩陣無法求逆")]
    Empty,

    #[error("矩陣不是方陣: {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("矩陣維度不符: 預期 {expected}x{expected}，實際 {actual}x{actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("矩陣含非有限值: ({row}, {col})")]
    NonFinite { row: usize, col: usize },

    #[error("奇異矩陣: 第 {index} 列主元過小 (值: {value})")]
    Singular { index: usize, value: f64 },

    #[error("配置錯誤: {0}")]
    Config(String),

    #[error("快取鎖已中毒")]
    LockPoisoned,
}

impl MinvError {
    /// 是否為矩陣本身無法求逆的錯誤
    pub fn is_invalid_matrix(&self) -> bool {
        matches!(
            self,
            MinvError::Empty
                | MinvError::NotSquare { .. }
                | MinvError::DimensionMismatch { .. }
                | MinvError::NonFinite { .. }
                | MinvError::Singular { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, MinvError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_matrix_category() {
        assert!(MinvError::Empty.is_invalid_matrix());
        assert!(MinvError::NotSquare { rows: 2, cols: 3 }.is_invalid_matrix());
        assert!(MinvError::Singular { index: 1, value: 0.0 }.is_invalid_matrix());
        assert!(!MinvError::Config("bad".to_string()).is_invalid_matrix());
        assert!(!MinvError::LockPoisoned.is_invalid_matrix());
    }
}
