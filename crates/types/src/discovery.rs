// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

//! Provider metadata advertising support for the request parameter
//! extensions.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use thiserror::Error;

use crate::{parameters, requests::RequestParameterExtensions, user_message::UserMessage};

/// An error returned when a request uses an extension that the provider
/// doesn't support.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnsupportedExtension {
    /// The parameter is not supported by the provider.
    #[error("parameter {parameter} is not supported by the provider")]
    NotSupported {
        /// The name of the parameter.
        parameter: &'static str,
    },

    /// The MIME type of the user message is not supported by the provider.
    #[error("MIME type {mime_type:?} is not supported for user messages")]
    UnsupportedMimeType {
        /// The MIME type of the message.
        mime_type: String,
    },
}

/// The provider metadata defined by the request parameter extensions.
///
/// This is meant to be flattened into the rest of the provider metadata.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderMetadataExtensions {
    /// Whether the [`UserMessage`] parameter is supported.
    ///
    /// Defaults to `false`.
    #[serde(rename = "https://id.oidc.se/disco/userMessageSupported")]
    pub user_message_supported: Option<bool>,

    /// The MIME types supported for user messages.
    ///
    /// Defaults to `["text/plain"]`.
    #[serde(rename = "https://id.oidc.se/disco/userMessageSupportedMimeTypes")]
    pub user_message_supported_mime_types: Option<Vec<String>>,

    /// Whether the `authnProvider` parameter is supported.
    ///
    /// Defaults to `false`.
    #[serde(rename = "https://id.oidc.se/disco/authnProviderSupported")]
    pub authn_provider_supported: Option<bool>,

    /// Whether the `originalClientId` parameter is supported.
    ///
    /// Defaults to `false`.
    #[serde(rename = "https://id.oidc.se/disco/originalClientIdSupported")]
    pub original_client_id_supported: Option<bool>,

    /// Whether the `originalClientToken` parameter is supported.
    ///
    /// Defaults to `false`.
    #[serde(rename = "https://id.oidc.se/disco/originalClientTokenSupported")]
    pub original_client_token_supported: Option<bool>,
}

impl ProviderMetadataExtensions {
    /// Whether the [`UserMessage`] parameter is supported.
    #[must_use]
    pub fn user_message_supported(&self) -> bool {
        self.user_message_supported.unwrap_or(false)
    }

    /// The MIME types supported for user messages.
    pub fn user_message_supported_mime_types(&self) -> impl Iterator<Item = &str> {
        let (configured, default) = match &self.user_message_supported_mime_types {
            Some(mime_types) => (Some(mime_types.iter().map(String::as_str)), None),
            None => (None, Some(UserMessage::TEXT_MIME_TYPE)),
        };
        configured.into_iter().flatten().chain(default)
    }

    /// Whether the `authnProvider` parameter is supported.
    #[must_use]
    pub fn authn_provider_supported(&self) -> bool {
        self.authn_provider_supported.unwrap_or(false)
    }

    /// Whether the `originalClientId` parameter is supported.
    #[must_use]
    pub fn original_client_id_supported(&self) -> bool {
        self.original_client_id_supported.unwrap_or(false)
    }

    /// Whether the `originalClientToken` parameter is supported.
    #[must_use]
    pub fn original_client_token_supported(&self) -> bool {
        self.original_client_token_supported.unwrap_or(false)
    }

    /// Check that the provider accepts the given user message.
    ///
    /// A message without a MIME type is treated as `text/plain`.
    ///
    /// # Errors
    ///
    /// Returns an error if user messages are not supported, or if the MIME
    /// type of the message is not supported.
    pub fn check_user_message(&self, user_message: &UserMessage) -> Result<(), UnsupportedExtension> {
        if !self.user_message_supported() {
            return Err(UnsupportedExtension::NotSupported {
                parameter: parameters::USER_MESSAGE,
            });
        }

        let mime_type = user_message
            .mime_type()
            .unwrap_or(UserMessage::TEXT_MIME_TYPE);

        if !self.supports_mime_type(mime_type) {
            return Err(UnsupportedExtension::UnsupportedMimeType {
                mime_type: mime_type.to_owned(),
            });
        }

        Ok(())
    }

    /// Whether the MIME type is among the ones supported for user messages,
    /// ignoring case.
    #[must_use]
    pub fn supports_mime_type(&self, mime_type: &str) -> bool {
        self.user_message_supported_mime_types()
            .any(|supported| supported.eq_ignore_ascii_case(mime_type))
    }

    /// Check that the provider accepts all the extension parameters of a
    /// request.
    ///
    /// The sign request parameter is not advertised through these metadata,
    /// and is not checked.
    ///
    /// # Errors
    ///
    /// Returns an error on the first parameter the provider doesn't accept.
    pub fn check_request(
        &self,
        request: &RequestParameterExtensions,
    ) -> Result<(), UnsupportedExtension> {
        if let Some(user_message) = &request.user_message {
            self.check_user_message(user_message)?;
        }

        let checks = [
            (
                request.authn_provider.is_some(),
                self.authn_provider_supported(),
                parameters::AUTHN_PROVIDER,
            ),
            (
                request.original_client_id.is_some(),
                self.original_client_id_supported(),
                parameters::ORIGINAL_CLIENT_ID,
            ),
            (
                request.original_client_token.is_some(),
                self.original_client_token_supported(),
                parameters::ORIGINAL_CLIENT_TOKEN,
            ),
        ];

        for (present, supported, parameter) in checks {
            if present && !supported {
                return Err(UnsupportedExtension::NotSupported { parameter });
            }
        }

        Ok(())
    }
}
