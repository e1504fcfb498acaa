// SPDX-FileCopyrightText: 2026 Tgmark Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `--send` delivery.

use tgmark_core::{DeliveryReceipt, MessageTransport, OutboundMessage, TgmarkError};
use tgmark_markdown::StyledText;
use tracing::info;

/// Wraps `body` in a MarkdownV2 message for `chat_id` and hands it to
/// `transport`.
pub async fn deliver(
    transport: &dyn MessageTransport,
    chat_id: &str,
    body: StyledText,
    disable_notification: bool,
) -> Result<DeliveryReceipt, TgmarkError> {
    let msg = OutboundMessage::markdown_v2(chat_id, body).with_notification(!disable_notification);

    let receipt = transport.send(&msg).await?;
    info!(
        transport = transport.name(),
        chat_id,
        message_id = receipt.message_id.0,
        entities = ?receipt.entity_types,
        "message delivered"
    );
    Ok(receipt)
}
