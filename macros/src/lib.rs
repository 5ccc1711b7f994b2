use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::parse::Parser;
use syn::punctuated::Punctuated;

/// Generate the boilerplate for a color model.
///
/// Every field may carry a `#[range(min, max)]` attribute. The generated
/// `new` clamps such fields into their range, so a model can never hold an
/// out of range channel. All fields must share one type.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    let Some(channel_type) = input.fields.iter().next().map(|f| f.ty.clone()) else {
        return quote! {
            compile_error!("Models must have at least one field, one for each channel of the color.")
        }
        .into();
    };

    if input.fields.iter().any(|f| f.ty != channel_type) {
        return quote! {
            compile_error!("All channels of a model must have the same type.")
        }
        .into();
    }

    // Collect the names and ranges of the fields, stripping the `range`
    // attributes so they don't end up in the output.
    let mut field_names = vec![];
    let mut ranges = vec![];
    for field in input.fields.iter_mut() {
        field.vis = syn::Visibility::Public(Default::default());

        let mut range = None;
        let mut error = None;
        field.attrs.retain(|attr| {
            if !attr.path().is_ident("range") {
                return true;
            }
            match attr.parse_args_with(Punctuated::<syn::Expr, syn::Token![,]>::parse_terminated) {
                Ok(bounds) if bounds.len() == 2 => {
                    range = Some((bounds[0].clone(), bounds[1].clone()));
                }
                Ok(_) => {
                    error = Some(syn::Error::new_spanned(
                        attr,
                        "expected #[range(min, max)]",
                    ));
                }
                Err(e) => error = Some(e),
            }
            false
        });

        if let Some(error) = error {
            return error.to_compile_error().into();
        }

        field_names.push(field.ident.clone());
        ranges.push(range);
    }

    let channel_count = field_names.len();
    let name_strings = field_names
        .iter()
        .map(|name| name.as_ref().map(|n| n.to_string()).unwrap_or_default())
        .collect::<Vec<_>>();

    let clamped = field_names
        .iter()
        .zip(ranges.iter())
        .map(|(name, range)| match range {
            Some((min, max)) => quote! { #name: #name.clamp(#min, #max) },
            None => quote! { #name },
        })
        .collect::<Vec<_>>();

    let is_generic = !input.generics.params.is_empty();

    // Add some derives. Serialization is only derived for concrete models,
    // the tags of generic ones carry no data.
    let derives = if is_generic {
        quote! { #[derive(Clone, Copy, Debug, PartialEq)] }
    } else {
        quote! { #[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)] }
    };
    let attr = match syn::Attribute::parse_outer.parse2(derives) {
        Ok(attr) => attr,
        Err(e) => return e.to_compile_error().into(),
    };
    input.attrs.extend(attr);

    let mut phantom_fields: Vec<syn::Ident> = vec![];

    if let syn::Fields::Named(ref mut named) = input.fields {
        for g in input.generics.params.iter() {
            let syn::GenericParam::Type(type_param) = g else {
                return syn::Error::new_spanned(g, "unsupported generic parameter")
                    .to_compile_error()
                    .into();
            };
            let ident = type_param.ident.clone();
            let field_name = format!("_{}", ident.to_string().to_lowercase());
            let field_name = syn::Ident::new(field_name.as_str(), Span::call_site());
            phantom_fields.push(field_name.clone());

            match syn::Field::parse_named.parse2(quote! {
                #field_name: std::marker::PhantomData<#ident>
            }) {
                Ok(field) => named.named.push(field),
                Err(e) => return e.to_compile_error().into(),
            }
        }
    } else {
        return quote! {
            compile_error!("Models must use named fields.")
        }
        .into();
    }

    let struct_name = input.ident.clone();
    let (impl_gen, type_gen, where_clause) = input.generics.split_for_impl();

    let new_impl = quote! {
        impl #impl_gen #struct_name #type_gen #where_clause {
            /// The names of the channels of this model, in order.
            pub const CHANNELS: [&'static str; #channel_count] = [#(#name_strings),*];

            /// Create a new color in this model. Channels with a declared
            /// range are clamped into it.
            pub fn new(#(#field_names: #channel_type),*) -> Self {
                Self {
                    #(#clamped,)*
                    #(#phantom_fields: std::marker::PhantomData,)*
                }
            }

            /// Return the channels of this color, in order.
            pub fn to_array(&self) -> [#channel_type; #channel_count] {
                [#(self.#field_names),*]
            }
        }

        impl #impl_gen From<[#channel_type; #channel_count]> for #struct_name #type_gen #where_clause {
            fn from(value: [#channel_type; #channel_count]) -> Self {
                let [#(#field_names),*] = value;
                Self::new(#(#field_names),*)
            }
        }
    };

    quote! {
        #input
        #new_impl
    }
    .into()
}
