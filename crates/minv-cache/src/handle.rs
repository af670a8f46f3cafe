//! 矩陣快取句柄

use std::sync::Arc;

use minv_calc::LuInverter;
use minv_core::{InversionOptions, Matrix, Result};
use uuid::Uuid;

use crate::{CachedInverter, TracingNotifier};

/// 快取槽狀態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheState {
    /// 尚未計算（創建後或替換矩陣後）
    Absent,
    /// 已存放當前矩陣的逆矩陣
    Populated,
}

/// 矩陣快取句柄
///
/// 持有一個矩陣及其延遲計算的逆矩陣。快取只要存在，就一定是當前矩陣的逆；
/// 任何替換矩陣的操作都會在同一步清除快取。
#[derive(Debug, Clone)]
pub struct CachedMatrixHandle {
    /// 句柄ID（僅用於日誌）
    id: Uuid,

    /// 當前矩陣
    matrix: Matrix,

    /// 已快取的逆矩陣
    cached_inverse: Option<Arc<Matrix>>,

    /// 矩陣版本，每次替換加一
    version: u64,
}

impl CachedMatrixHandle {
    /// 創建新的句柄，快取為空
    ///
    /// 不驗證矩陣形狀，驗證延遲到求逆時。
    pub fn new(initial: Matrix) -> Self {
        Self {
            id: Uuid::new_v4(),
            matrix: initial,
            cached_inverse: None,
            version: 0,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// 當前矩陣
    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// 替換矩陣並清除快取
    pub fn set_matrix(&mut self, matrix: Matrix) {
        self.cached_inverse = None;
        self.matrix = matrix;
        self.version += 1;
        tracing::debug!(handle_id = %self.id, version = self.version, "矩陣已替換，快取清除");
    }

    /// 已快取的逆矩陣（未計算時為 None）
    pub fn cached_inverse(&self) -> Option<Arc<Matrix>> {
        self.cached_inverse.clone()
    }

    /// 存入逆矩陣
    ///
    /// 句柄不驗證 `inverse` 確實是當前矩陣的逆，由呼叫方保證。
    pub fn set_cached_inverse(&mut self, inverse: impl Into<Arc<Matrix>>) {
        let inverse = inverse.into();
        debug_assert_eq!(
            inverse.dim(),
            self.matrix.dim(),
            "cached inverse shape must match the current matrix"
        );
        self.cached_inverse = Some(inverse);
    }

    pub fn cache_state(&self) -> CacheState {
        if self.cached_inverse.is_some() {
            CacheState::Populated
        } else {
            CacheState::Absent
        }
    }

    /// 以預設求逆器與 tracing 通知取得逆矩陣
    pub fn get_or_compute_inverse(&mut self, options: &InversionOptions) -> Result<Arc<Matrix>> {
        CachedInverter::new(LuInverter, TracingNotifier).get_or_compute_inverse(self, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_new_handle_is_absent() {
        let handle = CachedMatrixHandle::new(array![[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(handle.cache_state(), CacheState::Absent);
        assert!(handle.cached_inverse().is_none());
        assert_eq!(handle.version(), 0);
        assert_eq!(handle.matrix(), &array![[1.0, 2.0], [3.0, 4.0]]);
    }

    #[test]
    fn test_set_cached_inverse() {
        let mut handle = CachedMatrixHandle::new(array![[2.0, 0.0], [0.0, 2.0]]);
        let inverse = Arc::new(array![[0.5, 0.0], [0.0, 0.5]]);

        handle.set_cached_inverse(Arc::clone(&inverse));

        assert_eq!(handle.cache_state(), CacheState::Populated);
        let cached = handle.cached_inverse().unwrap();
        assert!(Arc::ptr_eq(&cached, &inverse));
    }

    #[test]
    fn test_set_matrix_clears_cache() {
        let mut handle = CachedMatrixHandle::new(array![[2.0, 0.0], [0.0, 2.0]]);
        handle.set_cached_inverse(array![[0.5, 0.0], [0.0, 0.5]]);

        handle.set_matrix(array![[4.0, 0.0], [0.0, 4.0]]);

        assert_eq!(handle.cache_state(), CacheState::Absent);
        assert!(handle.cached_inverse().is_none());
        assert_eq!(handle.version(), 1);
        assert_eq!(handle.matrix(), &array![[4.0, 0.0], [0.0, 4.0]]);
    }

    #[test]
    fn test_set_matrix_accepts_non_square() {
        let mut handle = CachedMatrixHandle::new(Matrix::eye(2));
        handle.set_matrix(Matrix::zeros((2, 3)));
        assert_eq!(handle.matrix().dim(), (2, 3));
    }

    #[test]
    fn test_default_get_or_compute() {
        let mut handle = CachedMatrixHandle::new(array![[4.0]]);
        let options = InversionOptions::default();

        let first = handle.get_or_compute_inverse(&options).unwrap();
        let second = handle.get_or_compute_inverse(&options).unwrap();

        assert_eq!(*first, array![[0.25]]);
        assert!(Arc::ptr_eq(&first, &second));
    }
}
