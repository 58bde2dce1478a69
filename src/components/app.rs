use yew::prelude::*;

use crate::components::{HomeScreen, LoginScreen, RegisterScreen, RouteGuard};
use crate::hooks::{use_auth, use_route, AuthProvider};
use crate::navigation::Route;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <AuthProvider>
            <RouteGuard>
                <Shell />
            </RouteGuard>
        </AuthProvider>
    }
}

/// Route the current path to a screen. Auth screens render outside the
/// authenticated shell; everything else renders inside it.
#[function_component(Shell)]
fn shell() -> Html {
    let auth = use_auth();
    let path = use_route();

    // Startup: don't flash the login screen while the persisted session check
    // is still running
    if auth.snapshot.is_loading && auth.snapshot.session.is_none() {
        return html! {
            <div class="splash">
                <div class="logo-icon">{"🤝"}</div>
                <p>{"Loading..."}</p>
            </div>
        };
    }

    match Route::from_path(&path) {
        Route::SignIn => html! { <LoginScreen /> },
        Route::Register => html! { <RegisterScreen /> },
        route => html! { <HomeScreen {route} /> },
    }
}
