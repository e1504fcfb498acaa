// SPDX-FileCopyrightText: 2026 Tgmark Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait definitions shared by tgmark transports.

pub mod transport;

pub use transport::MessageTransport;
