//! # minv
//!
//! 帶快取的矩陣求逆：對同一矩陣只計算一次逆矩陣，替換矩陣後才重新計算。
//!
//! ```
//! use minv::{CachedMatrixHandle, InversionOptions};
//! use ndarray::array;
//!
//! let mut handle = CachedMatrixHandle::new(array![[2.0, 0.0], [0.0, 2.0]]);
//! let inverse = handle.get_or_compute_inverse(&InversionOptions::default()).unwrap();
//! assert_eq!(*inverse, array![[0.5, 0.0], [0.0, 0.5]]);
//! ```

pub use minv_cache::{
    CacheEvent, CacheNotifier, CacheState, CachedInverter, CachedMatrixHandle,
    RecordingNotifier, SharedMatrixHandle, TracingNotifier,
};
pub use minv_calc::{LuInverter, Inverter};
pub use minv_core::{matrix, InversionOptions, Matrix, MinvError, Result};
