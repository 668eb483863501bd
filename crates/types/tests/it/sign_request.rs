// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use assert_matches::assert_matches;
use oidcse_types::{SignRequest, sign_request::ParseError};

use crate::{SWEDISH, object, user_message};

#[test]
fn wire_round_trip() {
    let sign_request = SignRequest::new(b"\x00\x01\x02 to be signed".as_slice(), user_message());

    let value = serde_json::to_value(&sign_request).unwrap();
    assert_eq!(value["tbs_data"], "AAECIHRvIGJlIHNpZ25lZA==");
    assert_eq!(value["sign_message"]["message#sv"], SWEDISH);

    let parsed: SignRequest = serde_json::from_value(value).unwrap();
    assert_eq!(parsed, sign_request);
    assert_eq!(parsed.tbs_data_contents(), b"\x00\x01\x02 to be signed");
    assert_eq!(parsed.sign_message().message_for(Some("sv")), Some(SWEDISH));
}

#[test]
fn parse_from_json() {
    let sign_request = SignRequest::parse(&object(
        r#"{"tbs_data":"VEJT","sign_message":{"message":"Sign this"},"extra":true}"#,
    ))
    .unwrap();

    assert_eq!(sign_request.tbs_data(), "VEJT");
    assert_eq!(sign_request.tbs_data_contents(), b"TBS");
    assert_eq!(sign_request.sign_message().default_message(), Some("Sign this"));
}

#[test]
fn parse_errors() {
    assert_matches!(
        SignRequest::parse(&object(r#"{"sign_message":{"message":"x"}}"#)),
        Err(ParseError::MissingField { field: "tbs_data" })
    );

    assert_matches!(
        SignRequest::parse(&object(r#"{"tbs_data":"VEJT"}"#)),
        Err(ParseError::MissingField {
            field: "sign_message"
        })
    );

    assert_matches!(
        SignRequest::parse(&object(r#"{"tbs_data":"%%%","sign_message":{"message":"x"}}"#)),
        Err(ParseError::InvalidTbsData(_))
    );

    assert_matches!(
        SignRequest::parse(&object(r#"{"tbs_data":"VEJT","sign_message":{}}"#)),
        Err(ParseError::SignMessage(_))
    );
}
