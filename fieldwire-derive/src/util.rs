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

use syn::{Data, DeriveInput, FieldsNamed};

/// The named fields of a struct, or an error spanning the input.
pub fn named_fields(ast: &DeriveInput) -> syn::Result<&FieldsNamed> {
    match &ast.data {
        Data::Struct(data) => match &data.fields {
            syn::Fields::Named(fields) => Ok(fields),
            _ => Err(syn::Error::new_spanned(
                &ast.ident,
                "WireObject can only be derived for structs with named fields",
            )),
        },
        _ => Err(syn::Error::new_spanned(
            &ast.ident,
            "WireObject can only be derived for structs",
        )),
    }
}

/// Strips the raw identifier prefix, so `r#type` registers as `type`.
pub fn wire_key(ident: &syn::Ident) -> String {
    let name = ident.to_string();
    name.strip_prefix("r#").map(str::to_string).unwrap_or(name)
}
