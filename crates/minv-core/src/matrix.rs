//! 矩陣模型與輔助函數

use ndarray::Array2;

/// 雙精度二維矩陣
pub type Matrix = Array2<f64>;

/// 方陣維度，非方陣返回 None
pub fn square_dimension(matrix: &Matrix) -> Option<usize> {
    let (rows, cols) = matrix.dim();
    (rows == cols).then_some(rows)
}

/// 逐元素近似相等
pub fn approx_eq(a: &Matrix, b: &Matrix, tolerance: f64) -> bool {
    a.dim() == b.dim() && a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() <= tolerance)
}

/// 檢查 `matrix * inverse` 是否近似單位矩陣
pub fn is_inverse_of(matrix: &Matrix, inverse: &Matrix, tolerance: f64) -> bool {
    match square_dimension(matrix) {
        Some(n) if inverse.dim() == (n, n) => {
            approx_eq(&matrix.dot(inverse), &Matrix::eye(n), tolerance)
        }
        _ => false,
    }
}
