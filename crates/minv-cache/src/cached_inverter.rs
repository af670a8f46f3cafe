//! 逆矩陣快取策略：先查快取，未命中才計算並存入

use std::sync::Arc;

use minv_calc::{LuInverter, Inverter};
use minv_core::{InversionOptions, Matrix, Result};

use crate::{CacheEvent, CacheNotifier, CachedMatrixHandle, TracingNotifier};

/// 帶快取的求逆器
#[derive(Debug, Clone, Default)]
pub struct CachedInverter<I = LuInverter, N = TracingNotifier> {
    inverter: I,
    notifier: N,
}

impl<I: Inverter, N: CacheNotifier> CachedInverter<I, N> {
    /// 創建新的快取求逆器
    pub fn new(inverter: I, notifier: N) -> Self {
        Self { inverter, notifier }
    }

    pub fn inverter(&self) -> &I {
        &self.inverter
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// 取得句柄當前矩陣的逆矩陣
    ///
    /// 命中時返回同一個 `Arc`，不重新計算；未命中時呼叫求逆原語並存入快取。
    /// 求逆失敗時錯誤原樣返回，快取保持為空。
    pub fn get_or_compute_inverse(
        &self,
        handle: &mut CachedMatrixHandle,
        options: &InversionOptions,
    ) -> Result<Arc<Matrix>> {
        if let Some(cached) = handle.cached_inverse() {
            self.notifier.notify(handle.id(), CacheEvent::Hit);
            return Ok(cached);
        }

        self.notifier.notify(handle.id(), CacheEvent::Miss);
        let inverse = Arc::new(self.inverter.invert(handle.matrix(), options)?);
        handle.set_cached_inverse(Arc::clone(&inverse));

        Ok(inverse)
    }
}
