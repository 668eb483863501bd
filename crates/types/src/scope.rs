// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

//! Scopes, and the claims they give access to.
//!
//! [`ScopeToken`] and [`Scope`] are the plain [RFC 6749] scope types.
//! [`OidcScopeValue`] attaches the list of claims an OpenID Connect scope
//! stands for, both for the [standard scopes] and for the [scopes of the
//! Swedish profile].
//!
//! [RFC 6749]: https://www.rfc-editor.org/rfc/rfc6749#section-3.3
//! [standard scopes]: https://openid.net/specs/openid-connect-core-1_0.html#ScopeClaims
//! [scopes of the Swedish profile]: https://www.oidc.se/specifications/swedish-oidc-attribute-specification.html#attribute-sets

use std::{borrow::Cow, collections::BTreeSet, fmt, str::FromStr};

use indexmap::IndexSet;
use serde_json::{Map, Value, json};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use thiserror::Error;

use crate::claims::{self, standard};

/// An error returned when a scope or scope token has an invalid format.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Invalid scope format")]
pub struct InvalidScope;

/// A scope token or scope value.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, SerializeDisplay, DeserializeFromStr,
)]
pub struct ScopeToken(Cow<'static, str>);

impl ScopeToken {
    /// Create a `ScopeToken` from a static string. The validity of it is not
    /// checked since it has to be valid in const contexts
    #[must_use]
    pub const fn from_static(token: &'static str) -> Self {
        Self(Cow::Borrowed(token))
    }

    /// Get the scope token as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// NQCHAR = %x21 / %x23-5B / %x5D-7E
fn nqchar(c: char) -> bool {
    c == '\x21' || ('\x23'..='\x5B').contains(&c) || ('\x5D'..='\x7E').contains(&c)
}

impl FromStr for ScopeToken {
    type Err = InvalidScope;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.is_empty() && s.chars().all(nqchar) {
            Ok(Self(Cow::Owned(s.to_owned())))
        } else {
            Err(InvalidScope)
        }
    }
}

impl fmt::Display for ScopeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A set of scope tokens, as sent in the `scope` parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq, SerializeDisplay, DeserializeFromStr)]
pub struct Scope(BTreeSet<ScopeToken>);

impl Scope {
    /// Whether the scope holds no token.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The number of tokens in the scope.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the scope contains the given token.
    #[must_use]
    pub fn contains(&self, token: &ScopeToken) -> bool {
        self.0.contains(token)
    }

    /// Add a token, returning whether it was not already there.
    pub fn insert(&mut self, token: ScopeToken) -> bool {
        self.0.insert(token)
    }

    /// Iterate over the tokens, in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &ScopeToken> {
        self.0.iter()
    }
}

impl FromStr for Scope {
    type Err = InvalidScope;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens = s
            .split(' ')
            .map(ScopeToken::from_str)
            .collect::<Result<BTreeSet<_>, _>>()?;

        Ok(Self(tokens))
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, token) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            fmt::Display::fmt(token, f)?;
        }
        Ok(())
    }
}

impl FromIterator<ScopeToken> for Scope {
    fn from_iter<T: IntoIterator<Item = ScopeToken>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Scope {
    type Item = ScopeToken;
    type IntoIter = std::collections::btree_set::IntoIter<ScopeToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Whether the claims of a scope must be released for the request to succeed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Requirement {
    /// The claims are essential.
    Required,

    /// The claims are voluntary.
    #[default]
    Optional,
}

/// A scope value, with the claims it gives access to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OidcScopeValue {
    token: ScopeToken,
    requirement: Requirement,
    claims: Option<Cow<'static, [Cow<'static, str>]>>,
}

macro_rules! claim_list {
    ($($claim:expr),* $(,)?) => {
        &[$(Cow::Borrowed($claim)),*]
    };
}

const OPENID_CLAIMS: &[Cow<'static, str>] = claim_list![standard::SUB];

const PROFILE_CLAIMS: &[Cow<'static, str>] = claim_list![
    standard::NAME,
    standard::FAMILY_NAME,
    standard::GIVEN_NAME,
    standard::MIDDLE_NAME,
    standard::NICKNAME,
    standard::PREFERRED_USERNAME,
    standard::PROFILE,
    standard::PICTURE,
    standard::WEBSITE,
    standard::GENDER,
    standard::BIRTHDATE,
    standard::ZONEINFO,
    standard::LOCALE,
    standard::UPDATED_AT,
];

const EMAIL_CLAIMS: &[Cow<'static, str>] = claim_list![standard::EMAIL, standard::EMAIL_VERIFIED];

const ADDRESS_CLAIMS: &[Cow<'static, str>] = claim_list![standard::ADDRESS];

const PHONE_CLAIMS: &[Cow<'static, str>] =
    claim_list![standard::PHONE_NUMBER, standard::PHONE_NUMBER_VERIFIED];

const NATURAL_PERSON_NAME_CLAIMS: &[Cow<'static, str>] =
    claim_list![standard::FAMILY_NAME, standard::GIVEN_NAME, standard::NAME];

const NATURAL_PERSON_NUMBER_CLAIMS: &[Cow<'static, str>] = claim_list![
    claims::PERSONAL_IDENTITY_NUMBER,
    claims::COORDINATION_NUMBER,
    standard::FAMILY_NAME,
    standard::GIVEN_NAME,
    standard::NAME,
    standard::BIRTHDATE,
];

const NATURAL_PERSON_ORG_ID_CLAIMS: &[Cow<'static, str>] = claim_list![
    standard::NAME,
    claims::ORGANIZATIONAL_AFFILIATION,
    claims::ORGANIZATION_NAME,
    claims::ORGANIZATION_NUMBER,
];

const AUTHN_INFO_CLAIMS: &[Cow<'static, str>] = claim_list![
    standard::AUTH_TIME,
    standard::TXN,
    claims::USER_CERTIFICATE,
    claims::CREDENTIAL_VALID_FROM,
    claims::CREDENTIAL_VALID_TO,
    claims::DEVICE_IP,
];

/// The `openid` scope.
pub const OPENID: OidcScopeValue =
    OidcScopeValue::from_static("openid", Requirement::Required, Some(OPENID_CLAIMS));

/// The `profile` scope.
pub const PROFILE: OidcScopeValue =
    OidcScopeValue::from_static("profile", Requirement::Optional, Some(PROFILE_CLAIMS));

/// The `email` scope.
pub const EMAIL: OidcScopeValue =
    OidcScopeValue::from_static("email", Requirement::Optional, Some(EMAIL_CLAIMS));

/// The `address` scope.
pub const ADDRESS: OidcScopeValue =
    OidcScopeValue::from_static("address", Requirement::Optional, Some(ADDRESS_CLAIMS));

/// The `phone` scope.
pub const PHONE: OidcScopeValue =
    OidcScopeValue::from_static("phone", Requirement::Optional, Some(PHONE_CLAIMS));

/// The `offline_access` scope, which doesn't give access to any claim.
pub const OFFLINE_ACCESS: OidcScopeValue =
    OidcScopeValue::from_static("offline_access", Requirement::Optional, None);

/// Name information about a natural person.
pub const NATURAL_PERSON_NAME: OidcScopeValue = OidcScopeValue::from_static(
    "https://id.oidc.se/scope/naturalPersonName",
    Requirement::Optional,
    Some(NATURAL_PERSON_NAME_CLAIMS),
);

/// The Swedish personal identity number of a natural person, along with name
/// information.
pub const NATURAL_PERSON_NUMBER: OidcScopeValue = OidcScopeValue::from_static(
    "https://id.oidc.se/scope/naturalPersonNumber",
    Requirement::Optional,
    Some(NATURAL_PERSON_NUMBER_CLAIMS),
);

/// The organizational identity of a natural person.
pub const NATURAL_PERSON_ORG_ID: OidcScopeValue = OidcScopeValue::from_static(
    "https://id.oidc.se/scope/naturalPersonOrgId",
    Requirement::Optional,
    Some(NATURAL_PERSON_ORG_ID_CLAIMS),
);

/// Information about the authentication itself.
pub const AUTHN_INFO: OidcScopeValue = OidcScopeValue::from_static(
    "https://id.oidc.se/scope/authnInfo",
    Requirement::Optional,
    Some(AUTHN_INFO_CLAIMS),
);

/// All the scope values known by this crate.
pub const KNOWN_SCOPES: &[OidcScopeValue] = &[
    OPENID,
    PROFILE,
    EMAIL,
    ADDRESS,
    PHONE,
    OFFLINE_ACCESS,
    NATURAL_PERSON_NAME,
    NATURAL_PERSON_NUMBER,
    NATURAL_PERSON_ORG_ID,
    AUTHN_INFO,
];

impl OidcScopeValue {
    /// Create a scope value from static parts, usable in const contexts. The
    /// token is not validated.
    #[must_use]
    pub const fn from_static(
        token: &'static str,
        requirement: Requirement,
        claims: Option<&'static [Cow<'static, str>]>,
    ) -> Self {
        let claims = match claims {
            Some(claims) => Some(Cow::Borrowed(claims)),
            None => None,
        };

        Self {
            token: ScopeToken::from_static(token),
            requirement,
            claims,
        }
    }

    /// Create an optional scope value which gives access to no claim.
    #[must_use]
    pub fn new(token: ScopeToken) -> Self {
        Self {
            token,
            requirement: Requirement::Optional,
            claims: None,
        }
    }

    /// Set the claims this scope value gives access to.
    ///
    /// Duplicate claims are ignored, the order is otherwise kept.
    #[must_use]
    pub fn with_claims<I, C>(mut self, claims: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Cow<'static, str>>,
    {
        let claims: IndexSet<Cow<'static, str>> = claims.into_iter().map(Into::into).collect();
        self.claims = Some(Cow::Owned(claims.into_iter().collect()));
        self
    }

    /// Set the requirement of the claims.
    #[must_use]
    pub fn with_requirement(mut self, requirement: Requirement) -> Self {
        self.requirement = requirement;
        self
    }

    /// The scope token.
    #[must_use]
    pub fn token(&self) -> &ScopeToken {
        &self.token
    }

    /// The requirement of the claims.
    #[must_use]
    pub fn requirement(&self) -> Requirement {
        self.requirement
    }

    /// The names of the claims this scope gives access to, if any.
    pub fn claim_names(&self) -> Option<impl Iterator<Item = &str>> {
        self.claims
            .as_deref()
            .map(|claims| claims.iter().map(|claim| &**claim))
    }

    /// Build the `claims` request parameter member asking for the claims of
    /// this scope.
    ///
    /// Required claims are marked as essential, optional ones are requested
    /// with a `null` value. Returns `None` if the scope has no claims.
    #[must_use]
    pub fn to_claims_request(&self) -> Option<Map<String, Value>> {
        let request = self
            .claim_names()?
            .map(|claim| {
                let value = match self.requirement {
                    Requirement::Required => json!({ "essential": true }),
                    Requirement::Optional => Value::Null,
                };
                (claim.to_owned(), value)
            })
            .collect();

        Some(request)
    }
}

impl fmt::Display for OidcScopeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.token, f)
    }
}

impl From<OidcScopeValue> for ScopeToken {
    fn from(value: OidcScopeValue) -> Self {
        value.token
    }
}

impl From<&OidcScopeValue> for ScopeToken {
    fn from(value: &OidcScopeValue) -> Self {
        value.token.clone()
    }
}

impl FromIterator<OidcScopeValue> for Scope {
    fn from_iter<T: IntoIterator<Item = OidcScopeValue>>(iter: T) -> Self {
        iter.into_iter().map(ScopeToken::from).collect()
    }
}

/// The claims the given scope gives access to, according to the given scope
/// values.
///
/// Claims are listed in the order of `values`, without duplicates. Tokens of
/// `scope` which have no corresponding value are ignored.
#[must_use]
pub fn claims_for_scope<'a>(scope: &Scope, values: &'a [OidcScopeValue]) -> IndexSet<&'a str> {
    values
        .iter()
        .filter(|value| scope.contains(value.token()))
        .filter_map(OidcScopeValue::claim_names)
        .flatten()
        .collect()
}

/// Build the `claims` request parameter member asking for the claims the
/// given scope gives access to.
///
/// A claim requested by several scope values is essential if any of them
/// requires it. Claims are listed in the order of `values`.
#[must_use]
pub fn claims_request_for_scope(scope: &Scope, values: &[OidcScopeValue]) -> Map<String, Value> {
    let mut request = Map::new();

    for value in values.iter().filter(|value| scope.contains(value.token())) {
        for (claim, member) in value.to_claims_request().unwrap_or_default() {
            if !member.is_null() || !request.contains_key(&claim) {
                request.insert(claim, member);
            }
        }
    }

    request
}
