//! # Matrix Inversion Engine
//!
//! 求逆原語：快取層依賴的外部計算協作者

pub mod inverter;
pub mod lu;

// Re-export 主要類型
pub use inverter::Inverter;
pub use lu::LuInverter;
