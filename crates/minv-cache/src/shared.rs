//! 跨執行緒共享的快取句柄
//!
//! 整個「查快取、計算、存入」序列在同一把鎖內完成，
//! 因此同一矩陣版本最多只會計算一次逆矩陣。

use std::sync::{Arc, Mutex, MutexGuard};

use minv_calc::Inverter;
use minv_core::{InversionOptions, Matrix, MinvError, Result};

use crate::{CacheNotifier, CacheState, CachedInverter, CachedMatrixHandle};

/// 共享快取句柄
#[derive(Debug, Clone)]
pub struct SharedMatrixHandle {
    inner: Arc<Mutex<CachedMatrixHandle>>,
}

impl SharedMatrixHandle {
    /// 創建新的共享句柄
    pub fn new(initial: Matrix) -> Self {
        Self::from_handle(CachedMatrixHandle::new(initial))
    }

    /// 包裝既有句柄（保留其快取）
    pub fn from_handle(handle: CachedMatrixHandle) -> Self {
        Self {
            inner: Arc::new(Mutex::new(handle)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, CachedMatrixHandle>> {
        self.inner.lock().map_err(|_| MinvError::LockPoisoned)
    }

    /// 當前矩陣的副本
    pub fn matrix(&self) -> Result<Matrix> {
        Ok(self.lock()?.matrix().clone())
    }

    /// 替換矩陣並清除快取
    pub fn set_matrix(&self, matrix: Matrix) -> Result<()> {
        self.lock()?.set_matrix(matrix);
        Ok(())
    }

    pub fn cached_inverse(&self) -> Result<Option<Arc<Matrix>>> {
        Ok(self.lock()?.cached_inverse())
    }

    pub fn cache_state(&self) -> Result<CacheState> {
        Ok(self.lock()?.cache_state())
    }

    pub fn version(&self) -> Result<u64> {
        Ok(self.lock()?.version())
    }

    /// 取得逆矩陣，持鎖期間完成整個查詢與計算
    pub fn get_or_compute_inverse<I, N>(
        &self,
        cache: &CachedInverter<I, N>,
        options: &InversionOptions,
    ) -> Result<Arc<Matrix>>
    where
        I: Inverter,
        N: CacheNotifier,
    {
        let mut handle = self.lock()?;
        cache.get_or_compute_inverse(&mut handle, options)
    }
}
