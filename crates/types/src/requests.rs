// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

//! The extension parameters of an authentication request.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::skip_serializing_none;
use thiserror::Error;

use crate::{
    parameters, sign_request,
    sign_request::SignRequest,
    user_message::{self, UserMessage},
};

/// An error returned when reading the extension parameters of a request.
#[derive(Debug, Error)]
pub enum RequestParameterError {
    /// The parameter was given more than once.
    #[error("parameter {parameter} was given more than once")]
    Repeated {
        /// The name of the parameter.
        parameter: &'static str,
    },

    /// The parameter value is not a JSON object.
    #[error("parameter {parameter} is not a valid JSON object")]
    InvalidJson {
        /// The name of the parameter.
        parameter: &'static str,

        /// The JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The user message parameter is invalid.
    #[error("invalid {} parameter", parameters::USER_MESSAGE)]
    UserMessage(#[source] user_message::ParseError),

    /// The sign request parameter is invalid.
    #[error("invalid {} parameter", parameters::SIGN_REQUEST)]
    SignRequest(#[source] sign_request::ParseError),
}

/// The extension parameters of an authentication request.
///
/// When serialized with `serde`, this gives the members to add to a request
/// object. [`RequestParameterExtensions::to_parameters`] gives the plain
/// request parameters instead, where objects are JSON-encoded.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestParameterExtensions {
    /// A message to display to the user during authentication.
    #[serde(rename = "https://id.oidc.se/param/userMessage")]
    pub user_message: Option<UserMessage>,

    /// A request to sign data during authentication.
    #[serde(rename = "https://id.oidc.se/param/signRequest")]
    pub sign_request: Option<SignRequest>,

    /// The authentication provider the user should use.
    #[serde(rename = "https://id.oidc.se/param/authnProvider")]
    pub authn_provider: Option<String>,

    /// The ID of the client on whose behalf the request is made.
    #[serde(rename = "https://id.oidc.se/param/originalClientId")]
    pub original_client_id: Option<String>,

    /// A token of the client on whose behalf the request is made.
    #[serde(rename = "https://id.oidc.se/param/originalClientToken")]
    pub original_client_token: Option<String>,
}

impl RequestParameterExtensions {
    /// Set the `user_message` field.
    #[must_use]
    pub fn with_user_message(mut self, user_message: UserMessage) -> Self {
        self.user_message = Some(user_message);
        self
    }

    /// Set the `sign_request` field.
    #[must_use]
    pub fn with_sign_request(mut self, sign_request: SignRequest) -> Self {
        self.sign_request = Some(sign_request);
        self
    }

    /// Set the `authn_provider` field.
    #[must_use]
    pub fn with_authn_provider(mut self, authn_provider: String) -> Self {
        self.authn_provider = Some(authn_provider);
        self
    }

    /// Set the `original_client_id` field.
    #[must_use]
    pub fn with_original_client_id(mut self, original_client_id: String) -> Self {
        self.original_client_id = Some(original_client_id);
        self
    }

    /// Set the `original_client_token` field.
    #[must_use]
    pub fn with_original_client_token(mut self, original_client_token: String) -> Self {
        self.original_client_token = Some(original_client_token);
        self
    }

    /// Whether no extension parameter is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// The request parameters to add to the authentication request, as name
    /// and value pairs.
    #[must_use]
    pub fn to_parameters(&self) -> Vec<(&'static str, String)> {
        let mut parameters = Vec::new();

        if let Some(user_message) = &self.user_message {
            parameters.push((
                parameters::USER_MESSAGE,
                Value::Object(user_message.to_json_object()).to_string(),
            ));
        }

        if let Some(sign_request) = &self.sign_request {
            parameters.push((
                parameters::SIGN_REQUEST,
                Value::Object(sign_request.to_json_object()).to_string(),
            ));
        }

        if let Some(authn_provider) = &self.authn_provider {
            parameters.push((parameters::AUTHN_PROVIDER, authn_provider.clone()));
        }

        if let Some(original_client_id) = &self.original_client_id {
            parameters.push((parameters::ORIGINAL_CLIENT_ID, original_client_id.clone()));
        }

        if let Some(original_client_token) = &self.original_client_token {
            parameters.push((
                parameters::ORIGINAL_CLIENT_TOKEN,
                original_client_token.clone(),
            ));
        }

        parameters
    }

    /// Read the extension parameters out of the parameters of an
    /// authentication request.
    ///
    /// Parameters which are not extension parameters are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if an extension parameter is repeated or invalid.
    pub fn from_parameters<I, K, V>(parameters: I) -> Result<Self, RequestParameterError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut this = Self::default();

        for (name, value) in parameters {
            let value = value.as_ref();
            match name.as_ref() {
                parameters::USER_MESSAGE => {
                    ensure_unset(this.user_message.as_ref(), parameters::USER_MESSAGE)?;
                    let object = json_object(parameters::USER_MESSAGE, value)?;
                    let user_message =
                        UserMessage::parse(&object).map_err(RequestParameterError::UserMessage)?;
                    this.user_message = Some(user_message);
                }

                parameters::SIGN_REQUEST => {
                    ensure_unset(this.sign_request.as_ref(), parameters::SIGN_REQUEST)?;
                    let object = json_object(parameters::SIGN_REQUEST, value)?;
                    let sign_request =
                        SignRequest::parse(&object).map_err(RequestParameterError::SignRequest)?;
                    this.sign_request = Some(sign_request);
                }

                parameters::AUTHN_PROVIDER => set_once(
                    &mut this.authn_provider,
                    parameters::AUTHN_PROVIDER,
                    value.to_owned(),
                )?,

                parameters::ORIGINAL_CLIENT_ID => set_once(
                    &mut this.original_client_id,
                    parameters::ORIGINAL_CLIENT_ID,
                    value.to_owned(),
                )?,

                parameters::ORIGINAL_CLIENT_TOKEN => set_once(
                    &mut this.original_client_token,
                    parameters::ORIGINAL_CLIENT_TOKEN,
                    value.to_owned(),
                )?,

                _ => {}
            }
        }

        Ok(this)
    }
}

fn json_object(
    parameter: &'static str,
    value: &str,
) -> Result<Map<String, Value>, RequestParameterError> {
    serde_json::from_str(value)
        .map_err(|source| RequestParameterError::InvalidJson { parameter, source })
}

fn ensure_unset<T>(
    field: Option<&T>,
    parameter: &'static str,
) -> Result<(), RequestParameterError> {
    if field.is_some() {
        return Err(RequestParameterError::Repeated { parameter });
    }
    Ok(())
}

fn set_once<T>(
    field: &mut Option<T>,
    parameter: &'static str,
    value: T,
) -> Result<(), RequestParameterError> {
    ensure_unset(field.as_ref(), parameter)?;
    *field = Some(value);
    Ok(())
}
