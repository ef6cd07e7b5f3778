//! # Notice Side-Channel
//!
//! Failed mutations never surface as return values. Instead the manager
//! emits exactly one [`Notice`] per failed operation through a
//! [`Notifier`], and the consumer renders it however it likes (toast,
//! console line, log entry).
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Notice Flow                                       │
//! │                                                                         │
//! │  add(1) ──► stock lookup fails ──► notifier.notify(AddFailed)          │
//! │  add(1) ──► stock bound hit    ──► notifier.notify(OutOfStock)         │
//! │                                                                         │
//! │  Implementations:                                                       │
//! │    LogNotifier      - tracing::warn!, for headless use                 │
//! │    ChannelNotifier  - tokio mpsc, for a UI event loop                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use serde::Serialize;
use tokio::sync::mpsc;
use tracing::warn;
use ts_rs::TS;

// =============================================================================
// Notice
// =============================================================================

/// A user-facing failure report, one per failed operation.
///
/// The messages are deliberately generic: a consumer is told *which*
/// operation failed, not why. Diagnostic detail goes to the logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum Notice {
    /// Adding a product to the cart failed.
    AddFailed,

    /// Removing a product from the cart failed.
    RemoveFailed,

    /// Changing a product's quantity failed.
    UpdateFailed,

    /// The requested quantity exceeds the seller's stock.
    OutOfStock,
}

impl Notice {
    /// The message shown to the user.
    pub fn message(&self) -> &'static str {
        match self {
            Notice::AddFailed => "Could not add the product to the cart",
            Notice::RemoveFailed => "Could not remove the product from the cart",
            Notice::UpdateFailed => "Could not change the product quantity",
            Notice::OutOfStock => "Requested quantity is not available in stock",
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

// =============================================================================
// Notifier Trait
// =============================================================================

/// Sink for user-facing failure notices.
///
/// Emitting a notice must never fail and never block: the cart has already
/// settled by the time a notice goes out.
pub trait Notifier: Send + Sync {
    /// Delivers one notice to the consumer.
    fn notify(&self, notice: Notice);
}

// =============================================================================
// Implementations
// =============================================================================

/// Notifier that writes each notice to the log at WARN level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: Notice) {
        warn!(notice = ?notice, "{}", notice.message());
    }
}

/// Notifier that forwards notices over an unbounded tokio channel.
///
/// Intended for UI event loops: the receiving half drains notices and
/// renders them. A closed receiver drops notices silently.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    tx: mpsc::UnboundedSender<Notice>,
}

impl ChannelNotifier {
    /// Creates a notifier and the receiving half of its channel.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Notice>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (ChannelNotifier { tx }, rx)
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, notice: Notice) {
        if self.tx.send(notice).is_err() {
            warn!(notice = ?notice, "Notice receiver dropped, discarding");
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_messages_are_user_facing() {
        assert_eq!(
            Notice::OutOfStock.to_string(),
            "Requested quantity is not available in stock"
        );
        assert_eq!(
            Notice::AddFailed.to_string(),
            "Could not add the product to the cart"
        );
    }

    #[test]
    fn test_channel_notifier_delivers_in_order() {
        let (notifier, mut rx) = ChannelNotifier::channel();

        notifier.notify(Notice::AddFailed);
        notifier.notify(Notice::OutOfStock);

        assert_eq!(rx.try_recv().unwrap(), Notice::AddFailed);
        assert_eq!(rx.try_recv().unwrap(), Notice::OutOfStock);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_channel_notifier_survives_dropped_receiver() {
        let (notifier, rx) = ChannelNotifier::channel();
        drop(rx);

        // Must not panic
        notifier.notify(Notice::RemoveFailed);
    }
}
