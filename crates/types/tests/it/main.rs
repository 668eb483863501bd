// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use oidcse_types::{Message, UserMessage};

mod requests;
mod sign_request;
mod user_message;

const ENGLISH: &str = "Hello, please log in";
const SWEDISH: &str = "Hej, var god logga in";
const DEFAULT: &str = "Default message";

/// A user message with a default, an English and a Swedish variant.
fn user_message() -> UserMessage {
    UserMessage::from_messages([
        Message::new(DEFAULT),
        Message::parse(ENGLISH, "en").expect("valid language tag"),
        Message::parse(SWEDISH, "sv").expect("valid language tag"),
    ])
    .expect("no duplicate variants")
}

/// Parse a JSON object from a string.
fn object(json: &str) -> serde_json::Map<String, serde_json::Value> {
    serde_json::from_str(json).expect("valid JSON object")
}
