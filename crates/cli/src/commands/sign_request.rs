// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use std::process::ExitCode;

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Parser;
use figment::Figment;
use oidcse_config::{ConfigurationSection, RootConfig};
use oidcse_types::SignRequest;
use tracing::{info, info_span, warn};

use crate::util::{build_user_message, read_input, read_json_object, write_output};

#[derive(Parser, Debug)]
pub(super) struct Options {
    #[command(subcommand)]
    subcommand: Subcommand,
}

#[derive(Parser, Debug)]
enum Subcommand {
    /// Parse a sign request and print it back in its canonical form
    Parse {
        /// The file containing the JSON-encoded sign request
        ///
        /// If not specified, the request is read from stdin
        file: Option<Utf8PathBuf>,

        /// Check that the configured provider accepts the request
        #[arg(long)]
        check: bool,
    },

    /// Build a JSON-encoded sign request
    Build {
        /// The file containing the data to be signed
        #[arg(long)]
        tbs_data_file: Utf8PathBuf,

        /// A variant of the message displayed while signing, as `[TAG=]TEXT`
        #[arg(short, long = "message", required = true)]
        messages: Vec<String>,

        /// The MIME type of the sign message
        #[arg(long)]
        mime_type: Option<String>,
    },
}

impl Options {
    pub fn run(self, figment: &Figment) -> anyhow::Result<ExitCode> {
        use Subcommand as SC;
        match self.subcommand {
            SC::Parse { file, check } => {
                let _span = info_span!("cli.sign_request.parse").entered();

                let object = read_json_object(file.as_deref())?;
                let sign_request = SignRequest::parse(&object)?;
                info!(
                    tbs_data_size = sign_request.tbs_data_contents().len(),
                    "Parsed sign request"
                );

                if check {
                    let config = RootConfig::extract(figment).map_err(anyhow::Error::from_boxed)?;
                    if !config.accepts_sign_request(&sign_request) {
                        warn!("The sign request would be rejected by the provider");
                        return Ok(ExitCode::FAILURE);
                    }
                }

                let json = serde_json::to_string_pretty(&sign_request)?;
                write_output(None, &json)?;
            }

            SC::Build {
                tbs_data_file,
                messages,
                mime_type,
            } => {
                let _span = info_span!("cli.sign_request.build").entered();

                let tbs_data = read_input(Some(tbs_data_file.as_path()))?;
                let sign_message = build_user_message(&messages, mime_type.as_deref())
                    .context("invalid sign message")?;

                let sign_request = SignRequest::new(tbs_data, sign_message);
                let json = serde_json::to_string(&sign_request)?;
                write_output(None, &json)?;
            }
        }

        Ok(ExitCode::SUCCESS)
    }
}
