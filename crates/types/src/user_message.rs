// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

//! The [Client Provided User Message] request parameter.
//!
//! [Client Provided User Message]: https://www.oidc.se/specifications/request-parameter-extensions.html#client-provided-user-message

use std::{
    fmt,
    hash::{Hash, Hasher},
};

use language_tags::LanguageTag;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::{
    language::{self, InvalidLanguageTag, parse_language_tag},
    parameters,
};

const MESSAGE_KEY: &str = "message";
const MESSAGE_KEY_PREFIX: &str = "message#";
const MIME_TYPE_KEY: &str = "mime_type";

/// A single message text, optionally associated with a language.
///
/// A message without a language is the *default* message.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Message {
    text: String,
    language: Option<LanguageTag>,
}

impl Message {
    /// Create a default message, which has no language.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            language: None,
        }
    }

    /// Create a message for the given language.
    #[must_use]
    pub fn with_language(text: impl Into<String>, language: LanguageTag) -> Self {
        Self {
            text: text.into(),
            language: Some(language),
        }
    }

    /// Create a message for a language given as a string.
    ///
    /// # Errors
    ///
    /// Returns an error if `language` is not a valid language tag.
    pub fn parse(text: impl Into<String>, language: &str) -> Result<Self, InvalidLanguageTag> {
        let language = parse_language_tag(language)?;
        Ok(Self::with_language(text, language))
    }

    /// The message text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The language of the message, `None` for the default message.
    #[must_use]
    pub fn language(&self) -> Option<&LanguageTag> {
        self.language.as_ref()
    }

    /// Whether this is the default message.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.language.is_none()
    }

    /// Whether this message matches the given language, according to
    /// [`language::matches`].
    ///
    /// The default message never matches.
    #[must_use]
    pub fn matches(&self, language: &LanguageTag) -> bool {
        self.language
            .as_ref()
            .is_some_and(|own| language::matches(own, language))
    }
}

/// An error returned when adding a [`Message`] to a [`UserMessage`].
#[derive(Debug, Error)]
pub enum UserMessageError {
    /// There already is a message without a language.
    #[error("a default message has already been added")]
    DuplicateDefault,

    /// There already is a message matching this language.
    #[error("a message matching the language {tag:?} has already been added")]
    DuplicateLanguage {
        /// The language of the rejected message.
        tag: String,
    },
}

/// An error returned when parsing a [`UserMessage`] from its JSON encoding.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A field has a value which is not a string.
    #[error("field {field} expected to be a string")]
    InvalidFieldType {
        /// The name of the field.
        field: String,
    },

    /// The suffix of a `message#<tag>` field is not a valid language tag.
    #[error("field {field} does not contain a valid language tag")]
    InvalidLanguageTag {
        /// The name of the field.
        field: String,

        /// Why the language tag was rejected.
        #[source]
        source: InvalidLanguageTag,
    },

    /// No message was found.
    #[error("missing message field(s)")]
    MissingMessages,

    /// The messages could not be combined.
    #[error(transparent)]
    InvalidMessage(#[from] UserMessageError),
}

/// A set of localized messages to display to the user, and the MIME type they
/// are written in.
///
/// At most one message has no language (the *default* message), and no two
/// messages have [matching](language::matches) languages.
///
/// Equality and hashing are defined on the [`Display`](fmt::Display)
/// rendering, which follows the order in which the localized messages were
/// added: two sets holding the same messages added in a different order are
/// not equal.
#[derive(Debug, Clone, Default)]
pub struct UserMessage {
    // The default message, if any, is always the first one.
    messages: Vec<Message>,
    mime_type: Option<String>,
}

impl UserMessage {
    /// The name of the request parameter carrying a user message.
    pub const PARAMETER_NAME: &'static str = parameters::USER_MESSAGE;

    /// The `text/plain` MIME type.
    pub const TEXT_MIME_TYPE: &'static str = "text/plain";

    /// The `text/markdown` MIME type.
    pub const MARKDOWN_MIME_TYPE: &'static str = "text/markdown";

    /// Create an empty user message.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a user message from a list of messages.
    ///
    /// # Errors
    ///
    /// Returns an error if the messages can't be added together, see
    /// [`UserMessage::add_message`].
    pub fn from_messages(
        messages: impl IntoIterator<Item = Message>,
    ) -> Result<Self, UserMessageError> {
        let mut this = Self::new();
        for message in messages {
            this.add_message(message)?;
        }
        Ok(this)
    }

    /// Set the MIME type.
    #[must_use]
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// Add a message.
    ///
    /// # Errors
    ///
    /// Returns an error if the message has no language and there already is a
    /// default message, or if its language matches the one of an existing
    /// message.
    pub fn add_message(&mut self, message: Message) -> Result<(), UserMessageError> {
        match message.language() {
            None => {
                if self.default_entry().is_some() {
                    return Err(UserMessageError::DuplicateDefault);
                }
                self.messages.insert(0, message);
            }

            Some(language) => {
                if self.messages.iter().any(|m| m.matches(language)) {
                    return Err(UserMessageError::DuplicateLanguage {
                        tag: language.to_string(),
                    });
                }
                self.messages.push(message);
            }
        }

        Ok(())
    }

    fn default_entry(&self) -> Option<&Message> {
        self.messages.first().filter(|m| m.is_default())
    }

    /// Get the message for the given language.
    ///
    /// With no language, this is the default message. Otherwise, this is the
    /// first message matching the language, falling back to the default
    /// message.
    #[must_use]
    pub fn message(&self, language: Option<&LanguageTag>) -> Option<&str> {
        let Some(language) = language else {
            return self.default_message();
        };

        self.messages
            .iter()
            .find(|m| m.matches(language))
            .or_else(|| self.default_entry())
            .map(Message::text)
    }

    /// Get the message for a language given as a string.
    ///
    /// Same as [`UserMessage::message`], except that a malformed language tag
    /// gives `None`.
    #[must_use]
    pub fn message_for(&self, language: Option<&str>) -> Option<&str> {
        match language {
            None => self.default_message(),
            Some(language) => {
                let language = parse_language_tag(language).ok()?;
                self.message(Some(&language))
            }
        }
    }

    /// Get the default message, the one without a language.
    #[must_use]
    pub fn default_message(&self) -> Option<&str> {
        self.default_entry().map(Message::text)
    }

    /// Iterate over all the messages, the default one first.
    pub fn messages(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }

    /// The number of messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether there are no messages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// The MIME type of the messages, if set.
    #[must_use]
    pub fn mime_type(&self) -> Option<&str> {
        self.mime_type.as_deref()
    }

    /// Replace the MIME type.
    pub fn set_mime_type(&mut self, mime_type: Option<String>) {
        self.mime_type = mime_type;
    }

    /// Encode as a JSON object.
    ///
    /// The default message goes in the `message` field, the others in
    /// `message#<tag>` fields.
    #[must_use]
    pub fn to_json_object(&self) -> Map<String, Value> {
        let mut object = Map::new();

        for message in &self.messages {
            let key = match message.language() {
                None => MESSAGE_KEY.to_owned(),
                Some(language) => format!("{MESSAGE_KEY_PREFIX}{}", language.as_str()),
            };
            object.insert(key, Value::String(message.text.clone()));
        }

        if let Some(mime_type) = &self.mime_type {
            object.insert(MIME_TYPE_KEY.to_owned(), Value::String(mime_type.clone()));
        }

        object
    }

    /// Parse a user message from its JSON encoding.
    ///
    /// # Errors
    ///
    /// Returns an error if a field has the wrong type, if a language tag is
    /// invalid, if there are no messages or if the messages conflict with each
    /// other.
    pub fn parse(object: &Map<String, Value>) -> Result<Self, ParseError> {
        let mut this = Self::new();

        if let Some(value) = object.get(MESSAGE_KEY) {
            let text = string_field(MESSAGE_KEY, value)?;
            this.add_message(Message::new(text))?;
        }

        for (key, value) in object {
            let Some(language) = key.strip_prefix(MESSAGE_KEY_PREFIX) else {
                continue;
            };

            let text = string_field(key, value)?;
            let language =
                parse_language_tag(language).map_err(|source| ParseError::InvalidLanguageTag {
                    field: key.clone(),
                    source,
                })?;

            this.add_message(Message::with_language(text, language))?;
        }

        if this.is_empty() {
            return Err(ParseError::MissingMessages);
        }

        if let Some(value) = object.get(MIME_TYPE_KEY) {
            let mime_type = string_field(MIME_TYPE_KEY, value)?;
            this.mime_type = Some(mime_type.to_owned());
        }

        Ok(this)
    }
}

fn string_field<'a>(field: &str, value: &'a Value) -> Result<&'a str, ParseError> {
    value.as_str().ok_or_else(|| ParseError::InvalidFieldType {
        field: field.to_owned(),
    })
}

impl fmt::Display for UserMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for message in &self.messages {
            match message.language() {
                None => write!(f, "{MESSAGE_KEY}={}, ", message.text)?,
                Some(language) => write!(f, "{MESSAGE_KEY_PREFIX}{language}={}, ", message.text)?,
            }
        }

        write!(
            f,
            "{MIME_TYPE_KEY}={}",
            self.mime_type.as_deref().unwrap_or("not-set")
        )
    }
}

impl PartialEq for UserMessage {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

impl Eq for UserMessage {}

impl Hash for UserMessage {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl Serialize for UserMessage {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_json_object().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for UserMessage {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let object = Map::deserialize(deserializer)?;
        Self::parse(&object).map_err(D::Error::custom)
    }
}
