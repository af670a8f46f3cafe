//! 快取通知通道

use std::sync::Mutex;

use uuid::Uuid;

/// 快取事件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheEvent {
    /// 命中：直接返回已快取的逆矩陣
    Hit,
    /// 未命中：即將呼叫求逆原語
    Miss,
}

impl CacheEvent {
    /// 人類可讀訊息
    pub fn message(&self) -> &'static str {
        match self {
            CacheEvent::Hit => "getting cached result",
            CacheEvent::Miss => "initialising cached result",
        }
    }
}

impl std::fmt::Display for CacheEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// 通知接收端
pub trait CacheNotifier {
    fn notify(&self, handle_id: Uuid, event: CacheEvent);
}

impl<T: CacheNotifier + ?Sized> CacheNotifier for &T {
    #[inline]
    fn notify(&self, handle_id: Uuid, event: CacheEvent) {
        (**self).notify(handle_id, event);
    }
}

/// 寫入 tracing 日誌的通知器（預設）
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl CacheNotifier for TracingNotifier {
    fn notify(&self, handle_id: Uuid, event: CacheEvent) {
        tracing::info!(%handle_id, "{}", event.message());
    }
}

/// 在記憶體中記錄事件的通知器
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    events: Mutex<Vec<CacheEvent>>,
}

impl RecordingNotifier {
    /// 創建新的記錄器
    pub fn new() -> Self {
        Self::default()
    }

    /// 已記錄的事件（按發生順序）
    pub fn events(&self) -> Vec<CacheEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// 最後一個事件
    pub fn last(&self) -> Option<CacheEvent> {
        self.events().last().copied()
    }

    /// 清除記錄
    pub fn clear(&self) {
        match self.events.lock() {
            Ok(mut events) => events.clear(),
            Err(poisoned) => poisoned.into_inner().clear(),
        }
    }
}

impl CacheNotifier for RecordingNotifier {
    fn notify(&self, _handle_id: Uuid, event: CacheEvent) {
        match self.events.lock() {
            Ok(mut events) => events.push(event),
            Err(poisoned) => poisoned.into_inner().push(event),
        }
    }
}
