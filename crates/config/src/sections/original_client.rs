// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ConfigurationSection;

/// Configuration of the request parameters identifying the client on whose
/// behalf a request is made
#[derive(Clone, Debug, Default, Deserialize, JsonSchema, Serialize)]
pub struct OriginalClientConfig {
    /// Whether the `originalClientId` parameter is accepted. Defaults to
    /// `false`.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub client_id: bool,

    /// Whether the `originalClientToken` parameter is accepted. Defaults to
    /// `false`.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub client_token: bool,
}

impl OriginalClientConfig {
    pub(crate) fn is_default(&self) -> bool {
        !self.client_id && !self.client_token
    }
}

impl ConfigurationSection for OriginalClientConfig {
    const PATH: Option<&'static str> = Some("original_client");
}
