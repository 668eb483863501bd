// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use std::process::ExitCode;

use clap::Parser;
use oidcse_types::scope::{
    self, OidcScopeValue, Scope, claims_for_scope, claims_request_for_scope,
};
use serde_json::Value;
use tracing::{info_span, warn};

use crate::util::write_output;

#[derive(Parser, Debug)]
pub(super) struct Options {
    #[command(subcommand)]
    subcommand: Subcommand,
}

#[derive(Parser, Debug)]
enum Subcommand {
    /// List the known scope values and the claims they give access to
    List,

    /// Print the claims a scope gives access to
    Claims {
        /// The space-separated scope
        scope: String,

        /// Print a `claims` request parameter member instead of a list
        #[arg(long)]
        request: bool,
    },
}

fn describe(value: &OidcScopeValue) -> String {
    let claims = value
        .claim_names()
        .map(|claims| claims.collect::<Vec<_>>().join(", "))
        .unwrap_or_default();
    format!("{value} ({:?}): {claims}", value.requirement())
}

impl Options {
    pub fn run(self) -> anyhow::Result<ExitCode> {
        use Subcommand as SC;
        match self.subcommand {
            SC::List => {
                let _span = info_span!("cli.scope.list").entered();

                let list: Vec<String> = scope::KNOWN_SCOPES.iter().map(describe).collect();
                write_output(None, &list.join("\n"))?;
            }

            SC::Claims { scope, request } => {
                let _span = info_span!("cli.scope.claims").entered();

                let scope: Scope = scope.parse()?;
                for token in scope.iter() {
                    if !scope::KNOWN_SCOPES.iter().any(|value| value.token() == token) {
                        warn!("Unknown scope value {token}");
                    }
                }

                if request {
                    let claims = claims_request_for_scope(&scope, scope::KNOWN_SCOPES);
                    let json = serde_json::to_string_pretty(&Value::Object(claims))?;
                    write_output(None, &json)?;
                } else {
                    let claims: Vec<&str> = claims_for_scope(&scope, scope::KNOWN_SCOPES)
                        .into_iter()
                        .collect();
                    write_output(None, &claims.join("\n"))?;
                }
            }
        }

        Ok(ExitCode::SUCCESS)
    }
}
