// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use std::process::ExitCode;

use camino::Utf8PathBuf;
use clap::Parser;
use figment::Figment;
use oidcse_config::{ConfigurationSection, RootConfig};
use oidcse_types::UserMessage;
use tracing::{debug, info, info_span, warn};

use crate::util::{build_user_message, read_json_object, write_output};

#[derive(Parser, Debug)]
pub(super) struct Options {
    #[command(subcommand)]
    subcommand: Subcommand,
}

#[derive(Parser, Debug)]
enum Subcommand {
    /// Parse a user message and print it back in its canonical form
    Parse {
        /// The file containing the JSON-encoded user message
        ///
        /// If not specified, the message is read from stdin
        file: Option<Utf8PathBuf>,

        /// Only print the message to display for this language
        #[arg(short, long)]
        lang: Option<String>,

        /// Check that the configured provider accepts the message
        #[arg(long)]
        check: bool,
    },

    /// Build a JSON-encoded user message
    Build {
        /// A message variant, as `[TAG=]TEXT`
        ///
        /// The variant without a language tag is the default one. Prefix the
        /// text with `=` to use a default message containing `=`.
        #[arg(short, long = "message", required = true)]
        messages: Vec<String>,

        /// The MIME type of the messages
        #[arg(long)]
        mime_type: Option<String>,
    },
}

impl Options {
    pub fn run(self, figment: &Figment) -> anyhow::Result<ExitCode> {
        use Subcommand as SC;
        match self.subcommand {
            SC::Parse { file, lang, check } => {
                let _span = info_span!("cli.user_message.parse").entered();

                let object = read_json_object(file.as_deref())?;
                let user_message = UserMessage::parse(&object)?;
                debug!(%user_message, "Parsed user message");

                if check {
                    let config = RootConfig::extract(figment).map_err(anyhow::Error::from_boxed)?;
                    if let Err(e) = config.provider_metadata().check_user_message(&user_message)
                    {
                        warn!("The user message would be rejected: {e}");
                        return Ok(ExitCode::FAILURE);
                    }
                    info!("The user message is accepted by the provider");
                }

                if let Some(lang) = lang {
                    let Some(message) = user_message.message_for(Some(&lang)) else {
                        warn!("No message to display for language {lang:?}");
                        return Ok(ExitCode::FAILURE);
                    };
                    write_output(None, message)?;
                } else {
                    let json = serde_json::to_string_pretty(&user_message)?;
                    write_output(None, &json)?;
                }
            }

            SC::Build {
                messages,
                mime_type,
            } => {
                let _span = info_span!("cli.user_message.build").entered();

                let user_message = build_user_message(&messages, mime_type.as_deref())?;
                info!("Built a user message with {} variant(s)", user_message.len());

                let json = serde_json::to_string(&user_message)?;
                write_output(None, &json)?;
            }
        }

        Ok(ExitCode::SUCCESS)
    }
}
