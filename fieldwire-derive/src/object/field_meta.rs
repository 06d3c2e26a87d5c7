// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Field-level metadata parsing for `#[wire(...)]` attributes.

use syn::{Expr, Field, LitStr, Path};

#[derive(Default)]
pub struct WireFieldMeta {
    pub rename: Option<String>,
    pub default: Option<Expr>,
    pub skip: bool,
    pub from_wire: Option<Path>,
    pub to_wire: Option<Path>,
}

impl WireFieldMeta {
    pub fn transform(&self) -> Option<(&Path, &Path)> {
        match (&self.from_wire, &self.to_wire) {
            (Some(from_wire), Some(to_wire)) => Some((from_wire, to_wire)),
            _ => None,
        }
    }
}

/// Parse `#[wire(...)]` attributes from a field
pub fn parse_field_meta(field: &Field) -> syn::Result<WireFieldMeta> {
    let mut meta = WireFieldMeta::default();

    for attr in &field.attrs {
        if !attr.path().is_ident("wire") {
            continue;
        }

        attr.parse_nested_meta(|nested| {
            if nested.path.is_ident("rename") {
                let lit: LitStr = nested.value()?.parse()?;
                if lit.value().is_empty() {
                    return Err(syn::Error::new(lit.span(), "rename must not be empty"));
                }
                meta.rename = Some(lit.value());
            } else if nested.path.is_ident("default") {
                meta.default = Some(nested.value()?.parse()?);
            } else if nested.path.is_ident("skip") {
                meta.skip = true;
            } else if nested.path.is_ident("from_wire") {
                meta.from_wire = Some(nested.value()?.parse()?);
            } else if nested.path.is_ident("to_wire") {
                meta.to_wire = Some(nested.value()?.parse()?);
            } else {
                return Err(nested.error("unsupported wire attribute"));
            }
            Ok(())
        })?;
    }

    if meta.from_wire.is_some() != meta.to_wire.is_some() {
        return Err(syn::Error::new_spanned(
            field,
            "from_wire and to_wire must be given together",
        ));
    }
    if meta.skip && (meta.rename.is_some() || meta.default.is_some() || meta.from_wire.is_some()) {
        return Err(syn::Error::new_spanned(
            field,
            "a skipped field takes no other wire attribute",
        ));
    }

    Ok(meta)
}
