// SPDX-FileCopyrightText: 2026 Tgmark Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Transport trait for delivering finished messages.

use async_trait::async_trait;

use crate::error::TgmarkError;
use crate::types::{DeliveryReceipt, OutboundMessage};

/// Delivers a finished message body to a chat.
///
/// Implementations own rate limiting, retries and size limits. The text is
/// treated as opaque bytes.
#[async_trait]
pub trait MessageTransport: Send + Sync {
    /// Returns the human-readable name of this transport.
    fn name(&self) -> &str;

    /// Sends one message.
    async fn send(&self, msg: &OutboundMessage) -> Result<DeliveryReceipt, TgmarkError>;
}
