//! 求逆參數配置

use serde::{Deserialize, Serialize};

use crate::{MinvError, Result};

/// 預設主元容差（相對於矩陣最大絕對值）
pub const DEFAULT_PIVOT_TOLERANCE: f64 = 1e-12;

/// 求逆參數
///
/// 快取層不解讀這些參數，只原樣轉交給求逆實作。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InversionOptions {
    /// 主元容差：|主元| <= 容差 * max|A| 時視為奇異
    pub pivot_tolerance: f64,

    /// 預期維度（如果指定，矩陣必須是此維度的方陣）
    pub expected_dimension: Option<usize>,
}

impl InversionOptions {
    /// 創建預設參數
    pub fn new() -> Self {
        Self {
            pivot_tolerance: DEFAULT_PIVOT_TOLERANCE,
            expected_dimension: None,
        }
    }

    /// 建構器模式：設置主元容差
    ///
    /// 此處不驗證，求逆前由 [`InversionOptions::validate`] 檢查。
    pub fn with_pivot_tolerance(mut self, tolerance: f64) -> Self {
        self.pivot_tolerance = tolerance;
        self
    }

    /// 建構器模式：設置預期維度
    ///
    /// # 範例
    /// ```
    /// # use minv_core::InversionOptions;
    /// let options = InversionOptions::new().with_expected_dimension(3);
    /// assert_eq!(options.expected_dimension, Some(3));
    /// ```
    pub fn with_expected_dimension(mut self, dimension: usize) -> Self {
        self.expected_dimension = Some(dimension);
        self
    }

    /// 從 JSON 解析參數，缺少的欄位使用預設值
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self =
            serde_json::from_str(json).map_err(|e| MinvError::Config(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// 檢查參數：主元容差必須為非負有限值
    pub fn validate(&self) -> Result<()> {
        if !self.pivot_tolerance.is_finite() || self.pivot_tolerance < 0.0 {
            return Err(MinvError::Config(format!(
                "主元容差必須為非負有限值: {}",
                self.pivot_tolerance
            )));
        }
        Ok(())
    }
}

impl Default for InversionOptions {
    fn default() -> Self {
        Self::new()
    }
}
