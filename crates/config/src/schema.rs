// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

//! Useful JSON Schema definitions

use schemars::{
    JsonSchema,
    r#gen::SchemaGenerator,
    schema::{InstanceType, Schema, SchemaObject, StringValidation},
};

/// A MIME type, like `text/plain`
pub struct MimeType;

impl JsonSchema for MimeType {
    fn schema_name() -> String {
        "MimeType".to_string()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        Schema::Object(SchemaObject {
            instance_type: Some(InstanceType::String.into()),
            string: Some(Box::new(StringValidation {
                pattern: Some(r"^[\w!#$&^.+-]+/[\w!#$&^.+-]+(\s*;.*)?$".to_owned()),
                ..StringValidation::default()
            })),
            ..SchemaObject::default()
        })
    }
}
