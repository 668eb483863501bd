// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use std::{
    collections::HashSet,
    hash::{DefaultHasher, Hash, Hasher},
};

use assert_matches::assert_matches;
use oidcse_types::{
    Message, UserMessage,
    user_message::{ParseError, UserMessageError},
};

use crate::{DEFAULT, ENGLISH, SWEDISH, object, user_message};

fn hash(user_message: &UserMessage) -> u64 {
    let mut hasher = DefaultHasher::new();
    user_message.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn lookup_by_language() {
    let user_message = user_message();

    assert_eq!(user_message.message_for(Some("en")), Some(ENGLISH));
    assert_eq!(user_message.message_for(Some("en-GB")), Some(ENGLISH));
    assert_eq!(user_message.message_for(Some("SV-se")), Some(SWEDISH));
    assert_eq!(user_message.message_for(Some("de")), Some(DEFAULT));
    assert_eq!(user_message.message_for(None), Some(DEFAULT));
    assert_eq!(user_message.message_for(Some("not a tag")), None);
}

#[test]
fn wire_round_trip() {
    let user_message = user_message().with_mime_type(UserMessage::MARKDOWN_MIME_TYPE);

    let json = serde_json::to_string(&user_message).unwrap();
    assert_eq!(
        json,
        r#"{"message":"Default message","message#en":"Hello, please log in","message#sv":"Hej, var god logga in","mime_type":"text/markdown"}"#
    );

    let parsed: UserMessage = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, user_message);
    assert_eq!(parsed.to_string(), user_message.to_string());
    assert_eq!(hash(&parsed), hash(&user_message));
}

#[test]
fn parse_ignores_unknown_fields() {
    let user_message = UserMessage::parse(&object(
        r#"{"foo":"bar","message#en":"Hello","other":42}"#,
    ))
    .unwrap();

    assert_eq!(user_message.len(), 1);
    assert_eq!(user_message.default_message(), None);
    assert_eq!(user_message.message_for(Some("en-US")), Some("Hello"));
    assert_eq!(user_message.message_for(None), None);
    assert_eq!(user_message.mime_type(), None);
}

#[test]
fn parse_errors() {
    assert_matches!(
        UserMessage::parse(&object(r#"{"mime_type":"text/plain"}"#)),
        Err(ParseError::MissingMessages)
    );

    assert_matches!(
        UserMessage::parse(&object(r#"{"message":42}"#)),
        Err(ParseError::InvalidFieldType { .. })
    );

    assert_matches!(
        UserMessage::parse(&object(r#"{"message#":"Hello"}"#)),
        Err(ParseError::InvalidLanguageTag { .. })
    );

    assert_matches!(
        UserMessage::parse(&object(r#"{"message#en":"Hello","message#en-US":"Howdy"}"#)),
        Err(ParseError::InvalidMessage(UserMessageError::DuplicateLanguage { .. }))
    );

    assert!(serde_json::from_str::<UserMessage>(r#"["message"]"#).is_err());
}

#[test]
fn equality_follows_insertion_order() {
    let en = || Message::parse(ENGLISH, "en").unwrap();
    let sv = || Message::parse(SWEDISH, "sv").unwrap();

    let first = UserMessage::from_messages([en(), sv()]).unwrap();
    let second = UserMessage::from_messages([sv(), en()]).unwrap();
    assert_ne!(first, second);

    let set: HashSet<UserMessage> = [first.clone(), first.clone(), second].into_iter().collect();
    assert_eq!(set.len(), 2);
    assert!(set.contains(&first));
}

#[test]
fn rejects_duplicates() {
    let mut user_message = user_message();
    let len = user_message.len();

    assert_matches!(
        user_message.add_message(Message::new("Another default")),
        Err(UserMessageError::DuplicateDefault)
    );
    assert_matches!(
        user_message.add_message(Message::parse("Hallå", "sv-FI").unwrap()),
        Err(UserMessageError::DuplicateLanguage { .. })
    );
    assert_eq!(user_message.len(), len);

    user_message
        .add_message(Message::parse("Hallo", "de").unwrap())
        .unwrap();
    assert_eq!(user_message.len(), len + 1);
}
