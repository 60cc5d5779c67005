use crate::domain::{BookTitle, MemberId};
use crate::ports::notifier::{Notifier as NotifierTrait, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::{Mutex, PoisonError};

/// 通知の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Borrow,
    Return,
}

/// 送信済みの通知
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub member_id: MemberId,
    pub title: BookTitle,
    pub sent_at: DateTime<Utc>,
}

/// Notifierのログ出力実装
///
/// 実際の配信は行わず、tracingにログを出して送信履歴を保持する。
pub struct LoggingNotifier {
    sent: Mutex<Vec<Notification>>,
}

impl LoggingNotifier {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
        }
    }

    /// 送信済みの通知を送信順に返す
    pub fn sent(&self) -> Vec<Notification> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn record(&self, kind: NotificationKind, member_id: MemberId, title: &BookTitle) -> Result<()> {
        let notification = Notification {
            kind,
            member_id,
            title: title.clone(),
            sent_at: Utc::now(),
        };
        self.sent
            .lock()
            .map_err(|_| "notifier lock poisoned")?
            .push(notification);
        Ok(())
    }
}

impl Default for LoggingNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotifierTrait for LoggingNotifier {
    async fn notify_borrow(&self, member_id: MemberId, title: &BookTitle) -> Result<()> {
        tracing::info!("[notify] member {} borrowed '{}'", member_id, title);
        self.record(NotificationKind::Borrow, member_id, title)
    }

    async fn notify_return(&self, member_id: MemberId, title: &BookTitle) -> Result<()> {
        tracing::info!("[notify] member {} returned '{}'", member_id, title);
        self.record(NotificationKind::Return, member_id, title)
    }
}
