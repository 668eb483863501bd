// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

//! Claim names.
//!
//! The claims registered by the [Attribute Specification for the Swedish
//! OpenID Connect Profile], and the [standard claims] from OpenID Connect Core
//! that the scopes in [`crate::scope`] refer to.
//!
//! [Attribute Specification for the Swedish OpenID Connect Profile]: https://www.oidc.se/specifications/swedish-oidc-attribute-specification.html
//! [standard claims]: https://openid.net/specs/openid-connect-core-1_0.html#StandardClaims

/// Prefix of all the claims registered by the Swedish profile.
pub const PREFIX: &str = "https://id.oidc.se/claim/";

/// Swedish civic registration number (personnummer).
pub const PERSONAL_IDENTITY_NUMBER: &str = "https://id.oidc.se/claim/personalIdentityNumber";

/// Swedish coordination number (samordningsnummer).
pub const COORDINATION_NUMBER: &str = "https://id.oidc.se/claim/coordinationNumber";

/// The level of a [`COORDINATION_NUMBER`].
pub const COORDINATION_NUMBER_LEVEL: &str = "https://id.oidc.se/claim/coordinationNumberLevel";

/// A coordination number previously held by the user.
pub const PREVIOUS_COORDINATION_NUMBER: &str =
    "https://id.oidc.se/claim/previousCoordinationNumber";

/// Swedish organizational number.
pub const ORGANIZATION_NUMBER: &str = "https://id.oidc.se/claim/orgNumber";

/// Personal identifier within an organization, `<id>@<org number>`.
pub const ORGANIZATIONAL_AFFILIATION: &str = "https://id.oidc.se/claim/orgAffiliation";

/// The name of an organization.
pub const ORGANIZATION_NAME: &str = "https://id.oidc.se/claim/orgName";

/// The name of an organizational unit.
pub const ORGANIZATIONAL_UNIT_NAME: &str = "https://id.oidc.se/claim/orgUnit";

/// The user's certificate, Base64 encoded.
pub const USER_CERTIFICATE: &str = "https://id.oidc.se/claim/userCertificate";

/// The signature produced by the user, see the [Signature Extension].
///
/// [Signature Extension]: https://www.oidc.se/specifications/oidc-signature-extension.html
pub const USER_SIGNATURE: &str = "https://id.oidc.se/claim/userSignature";

/// Start of the validity of the credential used to authenticate.
pub const CREDENTIAL_VALID_FROM: &str = "https://id.oidc.se/claim/credentialValidFrom";

/// End of the validity of the credential used to authenticate.
pub const CREDENTIAL_VALID_TO: &str = "https://id.oidc.se/claim/credentialValidTo";

/// The IP address of the user's device.
pub const DEVICE_IP: &str = "https://id.oidc.se/claim/deviceIp";

/// Evidence of the authentication, such as an assertion from the provider.
pub const AUTHN_EVIDENCE: &str = "https://id.oidc.se/claim/authnEvidence";

/// The provider which authenticated the user.
pub const AUTHN_PROVIDER: &str = "https://id.oidc.se/claim/authnProvider";

/// Country of the user, as an ISO 3166-1 alpha-2 code.
pub const COUNTRY: &str = "https://id.oidc.se/claim/country";

/// The name of the user at birth.
pub const BIRTH_NAME: &str = "https://id.oidc.se/claim/birthName";

/// Place of birth.
// Not a typo, this is how it is registered
pub const PLACE_OF_BIRTH: &str = "https://id.oidc.se/claim/placeOfbirth";

/// Age of the user in years.
pub const AGE: &str = "https://id.oidc.se/claim/age";

/// OpenID Connect Core claims.
pub mod standard {
    /// Subject identifier.
    pub const SUB: &str = "sub";
    /// Full name.
    pub const NAME: &str = "name";
    /// Surname.
    pub const FAMILY_NAME: &str = "family_name";
    /// Given name.
    pub const GIVEN_NAME: &str = "given_name";
    /// Middle name.
    pub const MIDDLE_NAME: &str = "middle_name";
    /// Casual name.
    pub const NICKNAME: &str = "nickname";
    /// Shorthand name the user wishes to be referred to as.
    pub const PREFERRED_USERNAME: &str = "preferred_username";
    /// URL of the user's profile page.
    pub const PROFILE: &str = "profile";
    /// URL of the user's profile picture.
    pub const PICTURE: &str = "picture";
    /// URL of the user's web page.
    pub const WEBSITE: &str = "website";
    /// Gender.
    pub const GENDER: &str = "gender";
    /// Birthday, as `YYYY-MM-DD`.
    pub const BIRTHDATE: &str = "birthdate";
    /// Time zone.
    pub const ZONEINFO: &str = "zoneinfo";
    /// Locale, as a language tag.
    pub const LOCALE: &str = "locale";
    /// Time the information was last updated.
    pub const UPDATED_AT: &str = "updated_at";
    /// Email address.
    pub const EMAIL: &str = "email";
    /// Whether the email address was verified.
    pub const EMAIL_VERIFIED: &str = "email_verified";
    /// Postal address.
    pub const ADDRESS: &str = "address";
    /// Phone number.
    pub const PHONE_NUMBER: &str = "phone_number";
    /// Whether the phone number was verified.
    pub const PHONE_NUMBER_VERIFIED: &str = "phone_number_verified";
    /// Time when the authentication occurred.
    pub const AUTH_TIME: &str = "auth_time";

    /// Transaction identifier, from [RFC 8417].
    ///
    /// [RFC 8417]: https://www.rfc-editor.org/rfc/rfc8417
    pub const TXN: &str = "txn";
}
