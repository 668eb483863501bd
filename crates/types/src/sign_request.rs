// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

//! The [Signature Request] parameter.
//!
//! [Signature Request]: https://www.oidc.se/specifications/oidc-signature-extension.html#signature-request-parameter

use std::fmt;

use base64ct::{Base64, Base64Unpadded, Encoding};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::{parameters, user_message::UserMessage};

const TBS_DATA_KEY: &str = "tbs_data";
const SIGN_MESSAGE_KEY: &str = "sign_message";

/// An error returned when a string is not valid Base64.
#[derive(Debug, Error)]
#[error("invalid Base64 string")]
pub struct InvalidBase64 {
    #[source]
    source: base64ct::Error,
}

/// An error returned when parsing a [`SignRequest`] from its JSON encoding.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A required field is missing.
    #[error("missing required field {field}")]
    MissingField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// The `tbs_data` field is not a string.
    #[error("field tbs_data expected to be a string")]
    InvalidTbsDataType,

    /// The `tbs_data` field is not valid Base64.
    #[error("tbs_data does not contain a valid Base64 string")]
    InvalidTbsData(#[source] InvalidBase64),

    /// The `sign_message` field is not an object.
    #[error("invalid type for sign_message")]
    InvalidSignMessageType,

    /// The `sign_message` field is not a valid user message.
    #[error(transparent)]
    SignMessage(#[from] crate::user_message::ParseError),
}

/// Decode standard Base64, with or without padding.
fn decode_base64(value: &str) -> Result<Vec<u8>, InvalidBase64> {
    Base64::decode_vec(value)
        .or_else(|_| Base64Unpadded::decode_vec(value))
        .map_err(|source| InvalidBase64 { source })
}

/// A request to sign some data.
///
/// It holds the data to be signed (the *TBS data*), and the message displayed
/// to the user while signing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SignRequest {
    tbs_data: Vec<u8>,
    sign_message: UserMessage,
}

impl SignRequest {
    /// The name of the request parameter carrying a sign request.
    pub const PARAMETER_NAME: &'static str = parameters::SIGN_REQUEST;

    /// Create a sign request from the raw data to be signed.
    #[must_use]
    pub fn new(tbs_data: impl Into<Vec<u8>>, sign_message: UserMessage) -> Self {
        Self {
            tbs_data: tbs_data.into(),
            sign_message,
        }
    }

    /// Create a sign request from the Base64 encoded data to be signed.
    ///
    /// # Errors
    ///
    /// Returns an error if `tbs_data` is not valid Base64.
    pub fn from_base64(tbs_data: &str, sign_message: UserMessage) -> Result<Self, InvalidBase64> {
        let tbs_data = decode_base64(tbs_data)?;
        Ok(Self::new(tbs_data, sign_message))
    }

    /// The data to be signed, Base64 encoded.
    #[must_use]
    pub fn tbs_data(&self) -> String {
        Base64::encode_string(&self.tbs_data)
    }

    /// The raw data to be signed.
    #[must_use]
    pub fn tbs_data_contents(&self) -> &[u8] {
        &self.tbs_data
    }

    /// The message to display to the user while signing.
    #[must_use]
    pub fn sign_message(&self) -> &UserMessage {
        &self.sign_message
    }

    /// Encode as a JSON object.
    #[must_use]
    pub fn to_json_object(&self) -> Map<String, Value> {
        let mut object = Map::new();
        object.insert(TBS_DATA_KEY.to_owned(), Value::String(self.tbs_data()));
        object.insert(
            SIGN_MESSAGE_KEY.to_owned(),
            Value::Object(self.sign_message.to_json_object()),
        );
        object
    }

    /// Parse a sign request from its JSON encoding.
    ///
    /// # Errors
    ///
    /// Returns an error if a field is missing or invalid.
    pub fn parse(object: &Map<String, Value>) -> Result<Self, ParseError> {
        let tbs_data = object
            .get(TBS_DATA_KEY)
            .ok_or(ParseError::MissingField {
                field: TBS_DATA_KEY,
            })?
            .as_str()
            .ok_or(ParseError::InvalidTbsDataType)?;
        let tbs_data = decode_base64(tbs_data).map_err(ParseError::InvalidTbsData)?;

        let sign_message = object
            .get(SIGN_MESSAGE_KEY)
            .ok_or(ParseError::MissingField {
                field: SIGN_MESSAGE_KEY,
            })?
            .as_object()
            .ok_or(ParseError::InvalidSignMessageType)?;
        let sign_message = UserMessage::parse(sign_message)?;

        Ok(Self::new(tbs_data, sign_message))
    }
}

impl fmt::Display for SignRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{TBS_DATA_KEY}={}, {SIGN_MESSAGE_KEY}=[{}]",
            self.tbs_data(),
            self.sign_message
        )
    }
}

impl Serialize for SignRequest {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_json_object().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SignRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let object = Map::deserialize(deserializer)?;
        Self::parse(&object).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;
    use crate::{
        Message,
        test_utils::{assert_serde_json, object},
        user_message::{self, UserMessageError},
    };

    fn sign_message() -> UserMessage {
        UserMessage::from_messages([
            Message::parse("Godkänn underskrift", "sv").unwrap(),
            Message::parse("Approve signature", "en").unwrap(),
        ])
        .unwrap()
        .with_mime_type(UserMessage::TEXT_MIME_TYPE)
    }

    #[test]
    fn create_and_get() {
        let sign_request =
            SignRequest::from_base64("VGhpcyBpcyB0aGUgdGV4dCB0byBzaWdu", sign_message()).unwrap();

        assert_eq!(sign_request.tbs_data(), "VGhpcyBpcyB0aGUgdGV4dCB0byBzaWdu");
        assert_eq!(
            sign_request.tbs_data_contents(),
            b"This is the text to sign".as_slice()
        );
        assert_eq!(sign_request.sign_message(), &sign_message());
        assert_eq!(
            sign_request,
            SignRequest::new(b"This is the text to sign".as_slice(), sign_message())
        );

        assert_eq!(
            sign_request.to_string(),
            format!(
                "tbs_data=VGhpcyBpcyB0aGUgdGV4dCB0byBzaWdu, sign_message=[{}]",
                sign_message()
            )
        );
    }

    #[test]
    fn unpadded_base64() {
        let padded = SignRequest::from_base64("VEJTMQ==", sign_message()).unwrap();
        let unpadded = SignRequest::from_base64("VEJTMQ", sign_message()).unwrap();
        assert_eq!(padded.tbs_data_contents(), b"TBS1".as_slice());
        assert_eq!(padded, unpadded);
        assert_eq!(unpadded.tbs_data(), "VEJTMQ==");

        assert!(SignRequest::from_base64("VEJTMQ=", sign_message()).is_err());
        assert!(SignRequest::from_base64("VEJT-Q==", sign_message()).is_err());
    }

    #[test]
    fn encode_sign_request() {
        let sign_request = SignRequest::new("This is the text to sign", sign_message());
        insta::assert_json_snapshot!(sign_request.to_json_object(), @r###"
        {
          "tbs_data": "VGhpcyBpcyB0aGUgdGV4dCB0byBzaWdu",
          "sign_message": {
            "message#sv": "Godkänn underskrift",
            "message#en": "Approve signature",
            "mime_type": "text/plain"
          }
        }
        "###);
    }

    #[test]
    fn round_trip() {
        let sign_request = SignRequest::new("This is the text to sign", sign_message());
        let parsed = SignRequest::parse(&sign_request.to_json_object()).unwrap();
        assert_eq!(parsed, sign_request);

        assert_serde_json(
            &sign_request,
            json!({
                "tbs_data": "VGhpcyBpcyB0aGUgdGV4dCB0byBzaWdu",
                "sign_message": {
                    "message#sv": "Godkänn underskrift",
                    "message#en": "Approve signature",
                    "mime_type": "text/plain",
                },
            }),
        );
    }

    #[test]
    fn parse_errors() {
        let mut json = object(json!({ "hello": "foo" }));
        let error = SignRequest::parse(&json).unwrap_err();
        assert_eq!(error.to_string(), "missing required field tbs_data");

        json.insert("tbs_data".to_owned(), json!(42));
        assert_matches!(
            SignRequest::parse(&json),
            Err(ParseError::InvalidTbsDataType)
        );

        json.insert("tbs_data".to_owned(), json!("This is not base64"));
        let error = SignRequest::parse(&json).unwrap_err();
        assert_eq!(
            error.to_string(),
            "tbs_data does not contain a valid Base64 string"
        );

        json.insert("tbs_data".to_owned(), json!("VEJT"));
        let error = SignRequest::parse(&json).unwrap_err();
        assert_eq!(error.to_string(), "missing required field sign_message");

        json.insert("sign_message".to_owned(), json!("text"));
        let error = SignRequest::parse(&json).unwrap_err();
        assert_eq!(error.to_string(), "invalid type for sign_message");

        json.insert(
            "sign_message".to_owned(),
            Value::Object(sign_message().to_json_object()),
        );
        let sign_request = SignRequest::parse(&json).unwrap();
        assert_eq!(sign_request.tbs_data_contents(), b"TBS".as_slice());
    }

    #[test]
    fn invalid_base64_is_checked_first() {
        let json = object(json!({ "tbs_data": "not-base64!!", "sign_message": "text" }));
        assert_matches!(
            SignRequest::parse(&json),
            Err(ParseError::InvalidTbsData(_))
        );

        let json = object(json!({ "tbs_data": "not-base64!!" }));
        assert_matches!(
            SignRequest::parse(&json),
            Err(ParseError::InvalidTbsData(_))
        );
    }

    #[test]
    fn sign_message_errors_propagate() {
        let json = object(json!({ "tbs_data": "VEJT", "sign_message": {} }));
        let error = SignRequest::parse(&json).unwrap_err();
        assert_matches!(
            &error,
            ParseError::SignMessage(user_message::ParseError::MissingMessages)
        );
        assert_eq!(error.to_string(), "missing message field(s)");

        let json = object(json!({
            "tbs_data": "VEJT",
            "sign_message": { "message": "a", "message#sv": "b", "message#sv-SE": "c" },
        }));
        assert_matches!(
            SignRequest::parse(&json),
            Err(ParseError::SignMessage(user_message::ParseError::InvalidMessage(
                UserMessageError::DuplicateLanguage { .. }
            )))
        );
    }

    #[test]
    fn equality() {
        let en = || UserMessage::from_messages([Message::parse("English", "en").unwrap()]).unwrap();
        let sv = UserMessage::from_messages([Message::parse("Swedish", "sv").unwrap()]).unwrap();

        let first = SignRequest::new("data", en());
        assert_eq!(first, first.clone());
        assert_ne!(first, SignRequest::new("data2", en()));
        assert_ne!(first, SignRequest::new("data", sv));
    }
}
