// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

//! Types for the [Swedish OpenID Connect Profile] extensions.
//!
//! This covers the request parameters defined by the profile, namely the
//! [user message] and the [sign request], as well as the claim, parameter and
//! scope names it registers.
//!
//! [Swedish OpenID Connect Profile]: https://www.oidc.se/specifications/
//! [user message]: https://www.oidc.se/specifications/request-parameter-extensions.html
//! [sign request]: https://www.oidc.se/specifications/oidc-signature-extension.html

#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod claims;
pub mod discovery;
pub mod language;
pub mod parameters;
pub mod requests;
pub mod scope;
pub mod sign_request;
pub mod user_message;

pub use language_tags::LanguageTag;

pub use self::{
    sign_request::SignRequest,
    user_message::{Message, UserMessage},
};

#[cfg(test)]
mod test_utils;
