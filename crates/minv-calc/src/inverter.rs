//! 求逆介面

use minv_core::{InversionOptions, Matrix, Result};

/// 求逆原語
///
/// 實作者負責全部的矩陣驗證；失敗時返回錯誤，不得返回部分結果。
pub trait Inverter {
    /// 計算 `matrix` 的逆矩陣
    fn invert(&self, matrix: &Matrix, options: &InversionOptions) -> Result<Matrix>;
}

impl<T: Inverter + ?Sized> Inverter for &T {
    #[inline]
    fn invert(&self, matrix: &Matrix, options: &InversionOptions) -> Result<Matrix> {
        (**self).invert(matrix, options)
    }
}

impl<T: Inverter + ?Sized> Inverter for Box<T> {
    #[inline]
    fn invert(&self, matrix: &Matrix, options: &InversionOptions) -> Result<Matrix> {
        (**self).invert(matrix, options)
    }
}
