//! LU 分解求逆（nalgebra，部分主元）
//!
//! 先按每行最大絕對值做行均衡，再把 U 的對角元與均衡後所在列的最大值比較。
//! 只有秩虧或數值上接近秩虧的矩陣會被判定為奇異，行列尺度差異本身不會。

use minv_core::matrix::square_dimension;
use minv_core::{InversionOptions, Matrix, MinvError, Result};
use nalgebra::DMatrix;

use crate::Inverter;

/// LU 求逆器
#[derive(Debug, Clone, Copy, Default)]
pub struct LuInverter;

impl LuInverter {
    /// 創建新的求逆器
    pub fn new() -> Self {
        Self
    }

    /// 驗證參數與矩陣並返回維度
    fn validate(matrix: &Matrix, options: &InversionOptions) -> Result<usize> {
        options.validate()?;

        let (rows, cols) = matrix.dim();
        if rows == 0 || cols == 0 {
            return Err(MinvError::Empty);
        }

        let n = square_dimension(matrix).ok_or(MinvError::NotSquare { rows, cols })?;

        if let Some(expected) = options.expected_dimension {
            if expected != n {
                return Err(MinvError::DimensionMismatch {
                    expected,
                    actual: n,
                });
            }
        }

        if let Some(((row, col), _)) = matrix.indexed_iter().find(|(_, v)| !v.is_finite()) {
            return Err(MinvError::NonFinite { row, col });
        }

        Ok(n)
    }

    /// 每行最大絕對值；全零行直接判定奇異
    fn row_magnitudes(matrix: &Matrix) -> Result<Vec<f64>> {
        matrix
            .rows()
            .into_iter()
            .enumerate()
            .map(|(i, row)| {
                let max = row.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
                if max == 0.0 {
                    Err(MinvError::Singular {
                        index: i,
                        value: 0.0,
                    })
                } else {
                    Ok(max)
                }
            })
            .collect()
    }
}

impl Inverter for LuInverter {
    fn invert(&self, matrix: &Matrix, options: &InversionOptions) -> Result<Matrix> {
        let n = Self::validate(matrix, options)?;
        tracing::debug!("開始求逆：{}x{}", n, n);

        // B = R⁻¹A，其中 R = diag(row_max)；A⁻¹ = B⁻¹R⁻¹
        let row_max = Self::row_magnitudes(matrix)?;
        let equilibrated = DMatrix::from_fn(n, n, |i, j| matrix[[i, j]] / row_max[i]);
        let column_max: Vec<f64> = (0..n).map(|j| equilibrated.column(j).amax()).collect();

        let lu = equilibrated.lu();
        let u = lu.u();
        for (k, &scale) in column_max.iter().enumerate() {
            let pivot = u[(k, k)];
            if pivot == 0.0 || pivot.abs() <= options.pivot_tolerance * scale {
                tracing::debug!("第 {} 個主元過小: {}", k, pivot);
                return Err(MinvError::Singular {
                    index: k,
                    value: pivot,
                });
            }
        }

        let inverse = lu.try_inverse().ok_or(MinvError::Singular {
            index: n - 1,
            value: 0.0,
        })?;

        tracing::debug!("求逆完成：{}x{}", n, n);
        Ok(Matrix::from_shape_fn((n, n), |(i, j)| {
            inverse[(i, j)] / row_max[j]
        }))
    }
}
