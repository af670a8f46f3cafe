//! # Matrix Inversion Cache
//!
//! 逆矩陣快取：句柄、通知通道與「先查後算」策略

pub mod cached_inverter;
pub mod handle;
pub mod notify;
pub mod shared;

// Re-export 主要類型
pub use cached_inverter::CachedInverter;
pub use handle::{CacheState, CachedMatrixHandle};
pub use notify::{CacheEvent, CacheNotifier, RecordingNotifier, TracingNotifier};
pub use shared::SharedMatrixHandle;
