// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use oidcse_types::SignRequest;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize, de::Error as _, de::Unexpected};

use crate::{ConfigurationSection, util::error_on_field};

/// Configuration of the sign request parameter
#[derive(Clone, Debug, Default, Deserialize, JsonSchema, Serialize)]
pub struct SignRequestConfig {
    /// Whether sign requests are accepted in authentication requests.
    /// Defaults to `false`.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub enabled: bool,

    /// The maximum size, in bytes, of the data to be signed. No limit if not
    /// set.
    #[schemars(range(min = 1))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tbs_data_size: Option<usize>,
}

impl SignRequestConfig {
    /// Returns true if the configuration is the default one
    pub(crate) fn is_default(&self) -> bool {
        !self.enabled && self.max_tbs_data_size.is_none()
    }

    /// Whether the given sign request would be accepted
    #[must_use]
    pub fn accepts(&self, sign_request: &SignRequest) -> bool {
        self.enabled
            && self
                .max_tbs_data_size
                .is_none_or(|max| sign_request.tbs_data_contents().len() <= max)
    }
}

impl ConfigurationSection for SignRequestConfig {
    const PATH: Option<&'static str> = Some("sign_request");

    fn validate(
        &self,
        figment: &figment::Figment,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
        if self.max_tbs_data_size == Some(0) {
            let error =
                figment::error::Error::invalid_value(Unexpected::Unsigned(0), &"a positive size");
            return Err(error_on_field(
                figment,
                Self::PATH.unwrap_or_default(),
                "max_tbs_data_size",
                error,
            )
            .into());
        }

        Ok(())
    }
}
