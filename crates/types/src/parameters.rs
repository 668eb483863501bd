// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

//! Names of the authentication request parameters and discovery metadata
//! defined by the [Authentication Request Parameter Extensions] and the
//! [Signature Extension].
//!
//! [Authentication Request Parameter Extensions]: https://www.oidc.se/specifications/request-parameter-extensions.html
//! [Signature Extension]: https://www.oidc.se/specifications/oidc-signature-extension.html

/// Prefix of all the request parameter names.
pub const PARAMETER_PREFIX: &str = "https://id.oidc.se/param/";

/// Prefix of all the discovery metadata names.
pub const DISCOVERY_PREFIX: &str = "https://id.oidc.se/disco/";

/// A message to display to the user during authentication.
pub const USER_MESSAGE: &str = "https://id.oidc.se/param/userMessage";

/// Whether the provider supports the [`USER_MESSAGE`] parameter.
pub const USER_MESSAGE_SUPPORTED: &str = "https://id.oidc.se/disco/userMessageSupported";

/// The MIME types the provider supports for the [`USER_MESSAGE`] parameter.
pub const USER_MESSAGE_SUPPORTED_MIME_TYPES: &str =
    "https://id.oidc.se/disco/userMessageSupportedMimeTypes";

/// The authentication provider the user should be authenticated with.
pub const AUTHN_PROVIDER: &str = "https://id.oidc.se/param/authnProvider";

/// Whether the provider supports the [`AUTHN_PROVIDER`] parameter.
pub const AUTHN_PROVIDER_SUPPORTED: &str = "https://id.oidc.se/disco/authnProviderSupported";

/// The client ID of the client on whose behalf the request is made.
pub const ORIGINAL_CLIENT_ID: &str = "https://id.oidc.se/param/originalClientId";

/// Whether the provider supports the [`ORIGINAL_CLIENT_ID`] parameter.
pub const ORIGINAL_CLIENT_ID_SUPPORTED: &str =
    "https://id.oidc.se/disco/originalClientIdSupported";

/// A token identifying the client on whose behalf the request is made.
pub const ORIGINAL_CLIENT_TOKEN: &str = "https://id.oidc.se/param/originalClientToken";

/// Whether the provider supports the [`ORIGINAL_CLIENT_TOKEN`] parameter.
pub const ORIGINAL_CLIENT_TOKEN_SUPPORTED: &str =
    "https://id.oidc.se/disco/originalClientTokenSupported";

/// A request to sign data, see [`SignRequest`](crate::SignRequest).
pub const SIGN_REQUEST: &str = "https://id.oidc.se/param/signRequest";
