// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ConfigurationSection;

/// Configuration of the authentication provider request parameter
#[derive(Clone, Debug, Default, Deserialize, JsonSchema, Serialize)]
pub struct AuthnProviderConfig {
    /// Whether clients can ask for a specific authentication provider.
    /// Defaults to `false`.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub enabled: bool,
}

impl AuthnProviderConfig {
    pub(crate) fn is_default(&self) -> bool {
        !self.enabled
    }
}

impl ConfigurationSection for AuthnProviderConfig {
    const PATH: Option<&'static str> = Some("authn_provider");
}
