// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use oidcse_types::UserMessage;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize, de::Error as _, de::Unexpected};

use crate::{ConfigurationSection, schema, util::error_on_field};

fn default_supported_mime_types() -> Vec<String> {
    vec![UserMessage::TEXT_MIME_TYPE.to_owned()]
}

fn is_default_supported_mime_types(value: &[String]) -> bool {
    value == [UserMessage::TEXT_MIME_TYPE]
}

/// Configuration of the user message request parameter
#[derive(Clone, Debug, Deserialize, JsonSchema, Serialize)]
pub struct UserMessageConfig {
    /// Whether user messages are accepted in authentication requests.
    /// Defaults to `false`.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub enabled: bool,

    /// The MIME types accepted for user messages. Defaults to `text/plain`.
    #[schemars(with = "Vec<schema::MimeType>")]
    #[serde(
        default = "default_supported_mime_types",
        skip_serializing_if = "is_default_supported_mime_types"
    )]
    pub supported_mime_types: Vec<String>,
}

impl Default for UserMessageConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            supported_mime_types: default_supported_mime_types(),
        }
    }
}

impl UserMessageConfig {
    /// Returns true if the configuration is the default one
    pub(crate) fn is_default(&self) -> bool {
        !self.enabled && is_default_supported_mime_types(&self.supported_mime_types)
    }

    /// Whether messages of the given MIME type can be displayed, ignoring
    /// case. Messages without a MIME type are `text/plain`.
    #[must_use]
    pub fn supports_mime_type(&self, mime_type: Option<&str>) -> bool {
        let mime_type = mime_type.unwrap_or(UserMessage::TEXT_MIME_TYPE);
        self.supported_mime_types
            .iter()
            .any(|supported| supported.eq_ignore_ascii_case(mime_type))
    }
}

impl ConfigurationSection for UserMessageConfig {
    const PATH: Option<&'static str> = Some("user_message");

    fn validate(
        &self,
        figment: &figment::Figment,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
        if !self.enabled {
            return Ok(());
        }

        let section = Self::PATH.unwrap_or_default();

        if self.supported_mime_types.is_empty() {
            let error = figment::error::Error::invalid_length(0, &"at least one MIME type");
            return Err(error_on_field(figment, section, "supported_mime_types", error).into());
        }

        for mime_type in &self.supported_mime_types {
            if mime_type.parse::<mime::Mime>().is_err() {
                let error = figment::error::Error::invalid_value(
                    Unexpected::Str(mime_type),
                    &"a MIME type",
                );
                return Err(error_on_field(figment, section, "supported_mime_types", error).into());
            }
        }

        Ok(())
    }
}
