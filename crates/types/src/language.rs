// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

//! Language tag helpers.
//!
//! Tags themselves are [`LanguageTag`]s from the `language-tags` crate. This
//! module adds the stricter parsing and the region-tolerant matching used by
//! [`UserMessage`](crate::UserMessage).

use language_tags::LanguageTag;
use thiserror::Error;

/// An error returned when a string is not a usable language tag.
#[derive(Debug, Error)]
pub enum InvalidLanguageTag {
    /// The tag is not a well-formed [RFC 5646] tag.
    ///
    /// [RFC 5646]: https://www.rfc-editor.org/rfc/rfc5646
    #[error("invalid language tag {tag:?}")]
    Syntax {
        /// The rejected tag.
        tag: String,

        /// The underlying parse error.
        #[source]
        source: language_tags::ParseError,
    },

    /// The primary language subtag is not a two or three letter ISO 639
    /// code.
    #[error("invalid language tag {tag:?}")]
    PrimaryLanguage {
        /// The rejected tag.
        tag: String,
    },
}

impl InvalidLanguageTag {
    /// The tag which was rejected.
    #[must_use]
    pub fn tag(&self) -> &str {
        match self {
            Self::Syntax { tag, .. } | Self::PrimaryLanguage { tag } => tag,
        }
    }
}

/// Parse a language tag.
///
/// On top of the RFC 5646 syntax, the primary language subtag must be a two or
/// three letter ISO 639 code. This rejects things like `english`, which are
/// syntactically valid but never registered.
///
/// # Errors
///
/// Returns an error if the tag is malformed.
pub fn parse_language_tag(tag: &str) -> Result<LanguageTag, InvalidLanguageTag> {
    let parsed = LanguageTag::parse(tag).map_err(|source| InvalidLanguageTag::Syntax {
        tag: tag.to_owned(),
        source,
    })?;

    let primary = parsed.primary_language();
    if !(2..=3).contains(&primary.len()) || !primary.bytes().all(|b| b.is_ascii_alphabetic()) {
        return Err(InvalidLanguageTag::PrimaryLanguage {
            tag: tag.to_owned(),
        });
    }

    Ok(parsed)
}

/// Check whether two language tags match each other.
///
/// Tags match if they share the same primary language, unless both of them
/// specify a region, in which case the regions must be equal as well. This
/// means `en` matches `en-US` (and the other way around), but `en-GB` does not
/// match `en-US`.
///
/// Subtags are compared case-insensitively.
#[must_use]
pub fn matches(a: &LanguageTag, b: &LanguageTag) -> bool {
    if !a.primary_language().eq_ignore_ascii_case(b.primary_language()) {
        return false;
    }

    match (a.region(), b.region()) {
        (Some(a), Some(b)) => a.eq_ignore_ascii_case(b),
        _ => true,
    }
}
