// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use assert_matches::assert_matches;
use oidcse_types::{
    SignRequest, UserMessage,
    discovery::{ProviderMetadataExtensions, UnsupportedExtension},
    parameters,
    requests::{RequestParameterError, RequestParameterExtensions},
    scope::{self, Scope, claims_for_scope},
};

use crate::{ENGLISH, user_message};

#[test]
fn authorization_request_round_trip() {
    let extensions = RequestParameterExtensions::default()
        .with_user_message(user_message())
        .with_sign_request(SignRequest::new("TBS", user_message()))
        .with_authn_provider("https://idp.example.com".to_owned());

    let mut query: Vec<(String, String)> = vec![
        ("response_type".to_owned(), "code".to_owned()),
        ("client_id".to_owned(), "client".to_owned()),
    ];
    query.extend(
        extensions
            .to_parameters()
            .into_iter()
            .map(|(name, value)| (name.to_owned(), value)),
    );

    let parsed = RequestParameterExtensions::from_parameters(query).unwrap();
    assert_eq!(parsed, extensions);
    assert_eq!(
        parsed
            .user_message
            .as_ref()
            .and_then(|message| message.message_for(Some("en-US"))),
        Some(ENGLISH)
    );
}

#[test]
fn invalid_parameter_is_reported() {
    let error = RequestParameterExtensions::from_parameters([(
        parameters::USER_MESSAGE,
        r#"{"message#en":"a","message#en-GB":"b"}"#,
    )])
    .unwrap_err();

    assert_matches!(error, RequestParameterError::UserMessage(_));
    assert_eq!(
        error.to_string(),
        "invalid https://id.oidc.se/param/userMessage parameter"
    );
}

#[test]
fn provider_support() {
    let metadata: ProviderMetadataExtensions = serde_json::from_str(
        r#"{
            "issuer": "https://op.example.com",
            "https://id.oidc.se/disco/userMessageSupported": true,
            "https://id.oidc.se/disco/userMessageSupportedMimeTypes": ["text/plain", "text/markdown"],
            "https://id.oidc.se/disco/authnProviderSupported": true
        }"#,
    )
    .unwrap();

    let extensions = RequestParameterExtensions::default()
        .with_user_message(user_message().with_mime_type(UserMessage::MARKDOWN_MIME_TYPE))
        .with_authn_provider("https://idp.example.com".to_owned());
    assert_eq!(metadata.check_request(&extensions), Ok(()));

    let extensions = extensions.with_original_client_id("client".to_owned());
    assert_eq!(
        metadata.check_request(&extensions),
        Err(UnsupportedExtension::NotSupported {
            parameter: parameters::ORIGINAL_CLIENT_ID
        })
    );
}

#[test]
fn claims_of_requested_scopes() {
    let requested: Scope = "openid https://id.oidc.se/scope/naturalPersonNumber"
        .parse()
        .unwrap();
    let claims = claims_for_scope(&requested, scope::KNOWN_SCOPES);

    assert!(claims.contains("sub"));
    assert!(claims.contains("https://id.oidc.se/claim/personalIdentityNumber"));
    assert!(!claims.contains("email"));
}
