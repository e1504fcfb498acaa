// SPDX-FileCopyrightText: 2026 Tgmark Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared types for tgmark.
//!
//! This crate provides the error type, the message types, and the
//! [`MessageTransport`] trait that sit between the MarkdownV2 builders in
//! `tgmark-markdown` and a concrete delivery backend.

pub mod error;
pub mod traits;
pub mod types;

pub use error::TgmarkError;
pub use traits::MessageTransport;
pub use types::{DeliveryReceipt, MessageId, OutboundMessage, ParseMode};

#[cfg(test)]
mod tests {
    use std::str::FromStr;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use tgmark_markdown::{bold_text, combine_with_space, hashtag};

    use super::*;

    #[test]
    fn tgmark_error_variants_display() {
        let config = TgmarkError::Config("telegram.bot_token is required".into());
        assert_eq!(
            config.to_string(),
            "configuration error: telegram.bot_token is required"
        );

        let api = TgmarkError::Api {
            code: 400,
            description: "Bad Request: can't parse entities".into(),
        };
        assert_eq!(
            api.to_string(),
            "telegram API error 400: Bad Request: can't parse entities"
        );

        let too_long = TgmarkError::MessageTooLong {
            length: 5000,
            max: 4096,
        };
        assert_eq!(
            too_long.to_string(),
            "message is 5000 characters long, the limit is 4096"
        );

        let transport = TgmarkError::transport("connect failed", std::io::Error::other("refused"));
        assert!(matches!(
            transport,
            TgmarkError::Transport { source: Some(_), .. }
        ));
        assert_eq!(transport.to_string(), "transport error: connect failed");

        assert_eq!(
            TgmarkError::InvalidInput("empty delimiter".into()).to_string(),
            "invalid input: empty delimiter"
        );
        assert_eq!(
            TgmarkError::Internal("missing result".into()).to_string(),
            "internal error: missing result"
        );
    }

    #[test]
    fn parse_mode_names_match_bot_api() {
        assert_eq!(ParseMode::MarkdownV2.to_string(), "MarkdownV2");
        assert_eq!(ParseMode::Markdown.to_string(), "Markdown");
        assert_eq!(ParseMode::Html.to_string(), "HTML");
        assert_eq!(ParseMode::from_str("HTML").unwrap(), ParseMode::Html);
        assert_eq!(ParseMode::default(), ParseMode::MarkdownV2);
    }

    #[test]
    fn parse_mode_serialization() {
        let json = serde_json::to_string(&ParseMode::Html).expect("should serialize");
        assert_eq!(json, "\"HTML\"");
        let parsed: ParseMode = serde_json::from_str("\"MarkdownV2\"").expect("should deserialize");
        assert_eq!(parsed, ParseMode::MarkdownV2);
    }

    #[test]
    fn outbound_message_from_styled_text() {
        let body = combine_with_space([hashtag("tash tag"), bold_text("hi!")]);
        let msg = OutboundMessage::markdown_v2("12345", body);
        assert_eq!(msg.chat_id, "12345");
        assert_eq!(msg.text, "\\#tash\\_tag *hi\\!*");
        assert_eq!(msg.parse_mode, ParseMode::MarkdownV2);
        assert!(msg.disable_notification);

        let loud = msg.with_notification(true);
        assert!(!loud.disable_notification);
    }

    #[test]
    fn visible_len_ignores_markdown_v2_escapes() {
        let msg = OutboundMessage::markdown_v2("1", tgmark_markdown::text("héllo..."));
        assert_eq!(msg.text, "héllo\\.\\.\\.");
        assert_eq!(msg.visible_len(), 8);

        let bold = OutboundMessage::markdown_v2("1", bold_text("a.b"));
        assert_eq!(bold.visible_len(), 3);

        let html = OutboundMessage {
            parse_mode: ParseMode::Html,
            ..bold
        };
        assert_eq!(html.visible_len(), html.text.chars().count());
    }

    struct RecordingTransport {
        sent: Mutex<Vec<OutboundMessage>>,
    }

    #[async_trait]
    impl MessageTransport for RecordingTransport {
        fn name(&self) -> &str {
            "recording"
        }

        async fn send(&self, msg: &OutboundMessage) -> Result<DeliveryReceipt, TgmarkError> {
            let mut sent = self.sent.lock().unwrap();
            sent.push(msg.clone());
            Ok(DeliveryReceipt {
                message_id: MessageId(sent.len() as i64),
                entity_types: vec!["bold".into()],
            })
        }
    }

    #[tokio::test]
    async fn transport_is_object_safe() {
        let transport = RecordingTransport {
            sent: Mutex::new(Vec::new()),
        };
        let dyn_transport: &dyn MessageTransport = &transport;
        let msg = OutboundMessage::markdown_v2("1", bold_text("x"));

        let receipt = dyn_transport.send(&msg).await.unwrap();
        assert_eq!(receipt.message_id, MessageId(1));
        assert_eq!(dyn_transport.name(), "recording");
        assert_eq!(transport.sent.lock().unwrap()[0].text, "*x*");
    }
}
