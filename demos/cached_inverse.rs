//! 快取求逆示例

use minv::{CachedMatrixHandle, InversionOptions};
use ndarray::array;
use std::sync::Arc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== 快取求逆示例 ===\n");

    let options = InversionOptions::default();
    let mut handle = CachedMatrixHandle::new(array![[4.0, 7.0], [2.0, 6.0]]);

    // 第一次：計算並快取
    let first = handle.get_or_compute_inverse(&options)?;
    println!("逆矩陣:\n{}\n", first);

    // 第二次：直接命中快取
    let second = handle.get_or_compute_inverse(&options)?;
    println!("同一實例: {}\n", Arc::ptr_eq(&first, &second));

    // 替換矩陣後重新計算
    handle.set_matrix(array![[2.0, 0.0], [0.0, 2.0]]);
    let third = handle.get_or_compute_inverse(&options)?;
    println!("新逆矩陣:\n{}\n", third);

    // 奇異矩陣：錯誤原樣返回
    handle.set_matrix(array![[1.0, 2.0], [2.0, 4.0]]);
    match handle.get_or_compute_inverse(&options) {
        Ok(_) => println!("意外成功"),
        Err(e) => println!("求逆失敗: {}", e),
    }
    println!("快取狀態: {:?}", handle.cache_state());

    Ok(())
}
