// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use std::io::{Read, Write};

use anyhow::Context;
use camino::Utf8Path;
use oidcse_types::{Message, UserMessage, language::parse_language_tag};
use serde_json::{Map, Value};
use tracing::info;

/// Read the whole input, from the given file or from the standard input
pub fn read_input(path: Option<&Utf8Path>) -> anyhow::Result<Vec<u8>> {
    let mut buffer = Vec::new();

    if let Some(path) = path {
        info!("Reading from {path}");
        buffer = std::fs::read(path).with_context(|| format!("could not read {path}"))?;
    } else {
        info!("Reading from standard input");
        std::io::stdin()
            .read_to_end(&mut buffer)
            .context("could not read standard input")?;
    }

    Ok(buffer)
}

/// Read a JSON object, from the given file or from the standard input
pub fn read_json_object(path: Option<&Utf8Path>) -> anyhow::Result<Map<String, Value>> {
    let input = read_input(path)?;
    serde_json::from_slice(&input).context("input is not a JSON object")
}

/// Write the output, to the given file or to the standard output
pub fn write_output(path: Option<&Utf8Path>, output: &str) -> anyhow::Result<()> {
    if let Some(path) = path {
        info!("Writing to {path}");
        std::fs::write(path, output).with_context(|| format!("could not write {path}"))?;
    } else {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(output.as_bytes())?;
        stdout.write_all(b"\n")?;
    }

    Ok(())
}

/// Parse a message given on the command line as `[TAG=]TEXT`.
///
/// The part before the first `=` is a language tag only if it parses as one.
/// A leading `=` forces the rest to be read as a default message.
pub fn parse_message(argument: &str) -> Message {
    if let Some(text) = argument.strip_prefix('=') {
        return Message::new(text);
    }

    argument
        .split_once('=')
        .and_then(|(tag, text)| {
            let language = parse_language_tag(tag).ok()?;
            Some(Message::with_language(text, language))
        })
        .unwrap_or_else(|| Message::new(argument))
}

/// Build a user message out of `[TAG=]TEXT` arguments
pub fn build_user_message(
    messages: &[String],
    mime_type: Option<&str>,
) -> anyhow::Result<UserMessage> {
    let mut user_message = UserMessage::new();
    for argument in messages {
        user_message
            .add_message(parse_message(argument))
            .with_context(|| format!("could not add message {argument:?}"))?;
    }

    anyhow::ensure!(!user_message.is_empty(), "at least one message is required");

    user_message.set_mime_type(mime_type.map(ToOwned::to_owned));
    Ok(user_message)
}
