// ============================================================================
// AUTH CONTEXT - share the auth handle across the component tree
// ============================================================================

use yew::prelude::*;

use crate::hooks::use_auth::{use_auth_provider, AuthHandle};

/// Provider component wrapping the app; everything below it can call
/// `use_auth()`.
#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let handle = use_auth_provider();

    html! {
        <ContextProvider<AuthHandle> context={handle}>
            {props.children.clone()}
        </ContextProvider<AuthHandle>>
    }
}

#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub children: Children,
}
