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

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput};

pub fn derive_enum(ast: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &ast.ident;
    let Data::Enum(data_enum) = &ast.data else {
        return Err(syn::Error::new_spanned(
            name,
            "WireEnum can only be derived for enums",
        ));
    };
    if !ast.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &ast.generics,
            "WireEnum does not support generic enums",
        ));
    }
    for variant in &data_enum.variants {
        if !matches!(variant.fields, syn::Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                "WireEnum requires every variant to be a unit variant",
            ));
        }
    }
    let Some(first) = data_enum.variants.first() else {
        return Err(syn::Error::new_spanned(
            name,
            "WireEnum requires at least one variant",
        ));
    };
    let default_variant = data_enum
        .variants
        .iter()
        .find(|v| v.attrs.iter().any(|attr| attr.path().is_ident("default")))
        .unwrap_or(first);
    let default_ident = &default_variant.ident;
    let variant_idents: Vec<_> = data_enum.variants.iter().map(|v| &v.ident).collect();

    Ok(quote! {
        impl fieldwire_core::serializer::Serializer for #name {
            #[inline(always)]
            fn wire_shape() -> fieldwire_core::types::Shape {
                fieldwire_core::types::Shape::Enum
            }

            #[inline(always)]
            fn wire_write(
                &self,
                context: &mut fieldwire_core::resolver::context::WriteContext,
            ) -> ::std::result::Result<(), fieldwire_core::error::Error> {
                let discriminant = match self {
                    #( Self::#variant_idents => Self::#variant_idents as i64, )*
                };
                fieldwire_core::serializer::enum_::write_discriminant(discriminant, context)
            }

            #[inline(always)]
            fn wire_read(
                &mut self,
                _context: &mut fieldwire_core::resolver::context::ReadContext,
                node: &dyn fieldwire_core::wire::Node,
            ) -> ::std::result::Result<(), fieldwire_core::error::Error> {
                let discriminant = fieldwire_core::serializer::enum_::read_discriminant(node)?;
                #(
                    if discriminant == Self::#variant_idents as i64 {
                        *self = Self::#variant_idents;
                        return Ok(());
                    }
                )*
                Err(fieldwire_core::serializer::enum_::unknown_variant::<Self>(discriminant))
            }
        }

        impl fieldwire_core::serializer::WireDefault for #name {
            #[inline(always)]
            fn wire_default() -> Self {
                Self::#default_ident
            }
        }
    })
}
