// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use oidcse_types::{SignRequest, discovery::ProviderMetadataExtensions};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

mod authn_provider;
mod original_client;
mod sign_request;
mod user_message;

pub use self::{
    authn_provider::AuthnProviderConfig, original_client::OriginalClientConfig,
    sign_request::SignRequestConfig, user_message::UserMessageConfig,
};
use crate::util::ConfigurationSection;

/// Application configuration root
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct RootConfig {
    /// Configuration of the user message request parameter
    #[serde(default, skip_serializing_if = "UserMessageConfig::is_default")]
    pub user_message: UserMessageConfig,

    /// Configuration of the sign request parameter
    #[serde(default, skip_serializing_if = "SignRequestConfig::is_default")]
    pub sign_request: SignRequestConfig,

    /// Configuration of the authentication provider request parameter
    #[serde(default, skip_serializing_if = "AuthnProviderConfig::is_default")]
    pub authn_provider: AuthnProviderConfig,

    /// Configuration of the original client request parameters
    #[serde(default, skip_serializing_if = "OriginalClientConfig::is_default")]
    pub original_client: OriginalClientConfig,
}

impl ConfigurationSection for RootConfig {
    fn validate(
        &self,
        figment: &figment::Figment,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
        self.user_message.validate(figment)?;
        self.sign_request.validate(figment)?;
        self.authn_provider.validate(figment)?;
        self.original_client.validate(figment)?;

        Ok(())
    }
}

impl RootConfig {
    /// The provider metadata advertising the extensions enabled by this
    /// configuration
    #[must_use]
    pub fn provider_metadata(&self) -> ProviderMetadataExtensions {
        let user_message = &self.user_message;

        ProviderMetadataExtensions {
            user_message_supported: user_message.enabled.then_some(true),
            user_message_supported_mime_types: user_message
                .enabled
                .then(|| user_message.supported_mime_types.clone()),
            authn_provider_supported: self.authn_provider.enabled.then_some(true),
            original_client_id_supported: self.original_client.client_id.then_some(true),
            original_client_token_supported: self.original_client.client_token.then_some(true),
        }
    }

    /// Whether the given sign request would be accepted.
    ///
    /// Besides the limits of the sign request section, the sign message must
    /// use one of the MIME types supported for user messages. This applies
    /// even when the user message parameter itself is disabled.
    #[must_use]
    pub fn accepts_sign_request(&self, sign_request: &SignRequest) -> bool {
        self.sign_request.accepts(sign_request)
            && self
                .user_message
                .supports_mime_type(sign_request.sign_message().mime_type())
    }
}

#[cfg(test)]
mod tests {
    use figment::{
        Figment, Jail,
        providers::{Env, Format, Yaml},
    };
    use oidcse_types::{Message, UserMessage};

    use super::*;

    fn sign_request(mime_type: Option<&str>) -> SignRequest {
        let mut sign_message = UserMessage::from_messages([Message::new("Sign")]).unwrap();
        sign_message.set_mime_type(mime_type.map(ToOwned::to_owned));
        SignRequest::new("TBS", sign_message)
    }

    #[test]
    fn empty_config() {
        let config = RootConfig::default();
        assert_eq!(
            config.provider_metadata(),
            ProviderMetadataExtensions::default()
        );

        insta::assert_json_snapshot!(config, @"{}");
    }

    #[test]
    fn provider_metadata() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "config.yaml",
                r"
                    user_message:
                      enabled: true
                      supported_mime_types: [text/plain, text/markdown]
                    original_client:
                      client_id: true
                ",
            )?;

            let figment = Figment::new().merge(Yaml::file("config.yaml"));
            let config = figment.extract::<RootConfig>()?;
            let metadata = config.provider_metadata();

            insta::assert_json_snapshot!(metadata, @r###"
            {
              "https://id.oidc.se/disco/userMessageSupported": true,
              "https://id.oidc.se/disco/userMessageSupportedMimeTypes": [
                "text/plain",
                "text/markdown"
              ],
              "https://id.oidc.se/disco/originalClientIdSupported": true
            }
            "###);

            let markdown = UserMessage::from_messages([Message::new("**Hi**")])
                .unwrap()
                .with_mime_type(UserMessage::MARKDOWN_MIME_TYPE);
            assert_eq!(metadata.check_user_message(&markdown), Ok(()));

            Ok(())
        });
    }

    #[test]
    fn environment_overrides() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "config.yaml",
                r"
                    authn_provider:
                      enabled: false
                ",
            )?;
            jail.set_env("OIDCSE_AUTHN_PROVIDER__ENABLED", "true");
            jail.set_env("OIDCSE_SIGN_REQUEST__ENABLED", "true");

            let figment = Figment::new()
                .merge(Yaml::file("config.yaml"))
                .merge(Env::prefixed("OIDCSE_").split("__"));
            let config = figment.extract::<RootConfig>()?;

            assert!(config.authn_provider.enabled);
            assert!(config.sign_request.enabled);
            assert!(!config.user_message.enabled);

            Ok(())
        });
    }

    #[test]
    fn sign_message_mime_type() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "config.yaml",
                r"
                    sign_request:
                      enabled: true
                ",
            )?;

            let figment = Figment::new().merge(Yaml::file("config.yaml"));
            let config = figment.extract::<RootConfig>()?;

            assert!(config.accepts_sign_request(&sign_request(None)));
            assert!(config.accepts_sign_request(&sign_request(Some("Text/Plain"))));
            assert!(!config.accepts_sign_request(&sign_request(Some("text/markdown"))));

            jail.create_file(
                "config.yaml",
                r"
                    sign_request:
                      enabled: true
                    user_message:
                      supported_mime_types: [text/markdown]
                ",
            )?;

            let figment = Figment::new().merge(Yaml::file("config.yaml"));
            let config = figment.extract::<RootConfig>()?;

            assert!(config.accepts_sign_request(&sign_request(Some("text/markdown"))));
            assert!(!config.accepts_sign_request(&sign_request(None)));

            Ok(())
        });
    }
}
