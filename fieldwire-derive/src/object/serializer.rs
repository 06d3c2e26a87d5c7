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

use crate::object::field_meta::parse_field_meta;
use crate::util::{named_fields, wire_key};
use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;

pub fn derive_object(ast: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &ast.ident;
    let (impl_generics, ty_generics, where_clause) = ast.generics.split_for_impl();
    let fields = named_fields(ast)?;

    let mut registrations = Vec::with_capacity(fields.named.len());
    let mut default_inits = Vec::with_capacity(fields.named.len());
    for field in &fields.named {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "expected a named field"));
        };
        let ty = &field.ty;
        let meta = parse_field_meta(field)?;

        if meta.skip {
            default_inits.push(quote! { #ident: ::std::default::Default::default() });
            continue;
        }

        let key = meta.rename.clone().unwrap_or_else(|| wire_key(ident));
        let mut spec = quote! {
            fieldwire_core::meta::member(
                #key,
                |this: &Self| &this.#ident,
                |this: &mut Self| &mut this.#ident,
            )
        };
        if let Some((from_wire, to_wire)) = meta.transform() {
            spec = quote! { #spec.transform(#from_wire, #to_wire) };
        }
        if let Some(default) = &meta.default {
            spec = quote! { #spec.with_default_fn(|| #default) };
        }
        registrations.push(quote! { fields.push(#spec); });

        // the decode starting value; absent keys never keep it
        let init = match (&meta.default, meta.transform()) {
            (Some(default), _) => quote! { #default },
            (None, Some(_)) => quote! { ::std::default::Default::default() },
            (None, None) => quote! { <#ty as fieldwire_core::serializer::WireDefault>::wire_default() },
        };
        default_inits.push(quote! { #ident: #init });
    }

    if registrations.is_empty() {
        return Err(syn::Error::new_spanned(
            name,
            "WireObject requires at least one registered field",
        ));
    }

    Ok(quote! {
        impl #impl_generics fieldwire_core::serializer::Object for #name #ty_generics #where_clause {
            fn register(fields: &mut fieldwire_core::meta::Fields<Self>) {
                #(#registrations)*
            }
        }

        impl #impl_generics fieldwire_core::serializer::Serializer for #name #ty_generics #where_clause {
            #[inline(always)]
            fn wire_shape() -> fieldwire_core::types::Shape {
                fieldwire_core::types::Shape::Object
            }

            #[inline(always)]
            fn wire_write(
                &self,
                context: &mut fieldwire_core::resolver::context::WriteContext,
            ) -> ::std::result::Result<(), fieldwire_core::error::Error> {
                fieldwire_core::serializer::struct_::write(self, context)
            }

            #[inline(always)]
            fn wire_read(
                &mut self,
                context: &mut fieldwire_core::resolver::context::ReadContext,
                node: &dyn fieldwire_core::wire::Node,
            ) -> ::std::result::Result<(), fieldwire_core::error::Error> {
                fieldwire_core::serializer::struct_::read(self, context, node)
            }
        }

        impl #impl_generics fieldwire_core::serializer::WireDefault for #name #ty_generics #where_clause {
            fn wire_default() -> Self {
                Self {
                    #(#default_inits),*
                }
            }
        }
    })
}
