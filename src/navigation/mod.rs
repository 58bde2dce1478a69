// ============================================================================
// NAVIGATION - route model + guard decision rules
// ============================================================================
// No router crate: paths are parsed into a Route enum, navigation is a
// history push plus a "routechange" custom event the shell listens for.
// The guard rules are pure so they can be tested without a browser.
// ============================================================================

use wasm_bindgen::JsValue;
use web_sys::window;

pub const ROUTE_HOME: &str = "/home";
pub const ROUTE_SIGN_IN: &str = "/auth/sign-in";
pub const ROUTE_REGISTER: &str = "/auth/register";

/// Root of the unauthenticated route tree
pub const AUTH_ROOT: &str = "auth";

/// Top-level route roots that require authentication
pub const PROTECTED_ROOTS: &[&str] = &[
    "home",
    "projects",
    "events",
    "donations",
    "marketplace",
    "resources",
    "messages",
    "profile",
];

/// Custom event dispatched after every programmatic navigation
pub const ROUTE_CHANGE_EVENT: &str = "routechange";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Route {
    SignIn,
    Register,
    Home,
    Projects,
    Events,
    Donations,
    Marketplace,
    Resources,
    Messages,
    Profile,
    NotFound,
}

impl Route {
    pub fn from_path(path: &str) -> Route {
        match top_segment(path) {
            "auth" => match path {
                ROUTE_SIGN_IN => Route::SignIn,
                ROUTE_REGISTER => Route::Register,
                _ => Route::NotFound,
            },
            "home" | "" => Route::Home,
            "projects" => Route::Projects,
            "events" => Route::Events,
            "donations" => Route::Donations,
            "marketplace" => Route::Marketplace,
            "resources" => Route::Resources,
            "messages" => Route::Messages,
            "profile" => Route::Profile,
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::SignIn => ROUTE_SIGN_IN,
            Route::Register => ROUTE_REGISTER,
            Route::Home => ROUTE_HOME,
            Route::Projects => "/projects",
            Route::Events => "/events",
            Route::Donations => "/donations",
            Route::Marketplace => "/marketplace",
            Route::Resources => "/resources",
            Route::Messages => "/messages",
            Route::Profile => "/profile",
            Route::NotFound => ROUTE_HOME,
        }
    }
}

/// First non-empty path segment ("" for the root path)
pub fn top_segment(path: &str) -> &str {
    path.split('/').find(|s| !s.is_empty()).unwrap_or("")
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GuardAction {
    RedirectToRegister,
    RedirectToHome,
}

impl GuardAction {
    pub fn target(&self) -> &'static str {
        match self {
            GuardAction::RedirectToRegister => ROUTE_REGISTER,
            GuardAction::RedirectToHome => ROUTE_HOME,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct GuardInput<'a> {
    pub is_manually_authenticated: bool,
    pub is_loading: bool,
    pub mounted: bool,
    /// Set after a fixed settle delay from first mount, so the guard does not
    /// fire redirects while the shell is still initializing
    pub nav_stable: bool,
    pub path: &'a str,
}

/// Guard decision rules, evaluated in order. Returns at most one action.
pub fn evaluate_guard(input: GuardInput) -> Option<GuardAction> {
    if !input.mounted || !input.nav_stable || input.is_loading {
        return None;
    }

    let segment = top_segment(input.path);

    // Rule 1: hard block. Checked before anything else so a protected segment
    // can never render for an unauthenticated visitor, even mid-transition.
    if !input.is_manually_authenticated && PROTECTED_ROOTS.contains(&segment) {
        return Some(GuardAction::RedirectToRegister);
    }

    // Rule 2: anywhere else unauthenticated, except the two auth screens
    if !input.is_manually_authenticated
        && input.path != ROUTE_SIGN_IN
        && input.path != ROUTE_REGISTER
    {
        return Some(GuardAction::RedirectToRegister);
    }

    // Rule 3: authenticated users do not see the auth tree
    if input.is_manually_authenticated && segment == AUTH_ROOT {
        return Some(GuardAction::RedirectToHome);
    }

    // Rule 4: authenticated users outside the protected tree go home
    if input.is_manually_authenticated && !PROTECTED_ROOTS.contains(&segment) {
        return Some(GuardAction::RedirectToHome);
    }

    None
}

/// Current browser path ("/" when unavailable)
pub fn current_path() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Push a new path onto the history and announce it via the route-change
/// custom event so subscribed hooks re-read the location
pub fn navigate_to(path: &str) {
    if let Some(win) = window() {
        if let Ok(history) = win.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }

        if let Ok(event) = web_sys::CustomEvent::new(ROUTE_CHANGE_EVENT) {
            let _ = win.dispatch_event(&event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stable(is_manually_authenticated: bool, path: &str) -> GuardInput {
        GuardInput {
            is_manually_authenticated,
            is_loading: false,
            mounted: true,
            nav_stable: true,
            path,
        }
    }

    #[test]
    fn unauthenticated_on_protected_root_redirects_to_register() {
        let action = evaluate_guard(stable(false, "/home"));
        assert_eq!(action, Some(GuardAction::RedirectToRegister));
        assert_eq!(action.unwrap().target(), ROUTE_REGISTER);

        // And exactly one: the redirect target itself is stable
        assert_eq!(evaluate_guard(stable(false, ROUTE_REGISTER)), None);
    }

    #[test]
    fn unauthenticated_off_auth_screens_redirects_to_register() {
        assert_eq!(
            evaluate_guard(stable(false, "/")),
            Some(GuardAction::RedirectToRegister)
        );
        assert_eq!(
            evaluate_guard(stable(false, "/somewhere/else")),
            Some(GuardAction::RedirectToRegister)
        );
        assert_eq!(evaluate_guard(stable(false, ROUTE_SIGN_IN)), None);
        assert_eq!(evaluate_guard(stable(false, ROUTE_REGISTER)), None);
    }

    #[test]
    fn authenticated_on_auth_tree_redirects_home() {
        let action = evaluate_guard(stable(true, ROUTE_SIGN_IN));
        assert_eq!(action, Some(GuardAction::RedirectToHome));
        assert_eq!(action.unwrap().target(), ROUTE_HOME);

        // Exactly one: home is inside the protected tree, so no follow-up
        assert_eq!(evaluate_guard(stable(true, ROUTE_HOME)), None);
    }

    #[test]
    fn authenticated_outside_protected_tree_redirects_home() {
        assert_eq!(
            evaluate_guard(stable(true, "/")),
            Some(GuardAction::RedirectToHome)
        );
        assert_eq!(
            evaluate_guard(stable(true, "/unknown")),
            Some(GuardAction::RedirectToHome)
        );
        assert_eq!(evaluate_guard(stable(true, "/projects")), None);
        assert_eq!(evaluate_guard(stable(true, "/marketplace")), None);
    }

    #[test]
    fn guard_holds_while_unstable_or_loading() {
        let mut input = stable(false, "/home");
        input.nav_stable = false;
        assert_eq!(evaluate_guard(input), None);

        let mut input = stable(false, "/home");
        input.mounted = false;
        assert_eq!(evaluate_guard(input), None);

        let mut input = stable(false, "/home");
        input.is_loading = true;
        assert_eq!(evaluate_guard(input), None);
    }

    #[test]
    fn top_segment_parsing() {
        assert_eq!(top_segment("/home"), "home");
        assert_eq!(top_segment("/auth/sign-in"), "auth");
        assert_eq!(top_segment("/"), "");
        assert_eq!(top_segment(""), "");
    }

    #[test]
    fn routes_round_trip_through_paths() {
        for route in [
            Route::SignIn,
            Route::Register,
            Route::Home,
            Route::Projects,
            Route::Events,
            Route::Donations,
            Route::Marketplace,
            Route::Resources,
            Route::Messages,
            Route::Profile,
        ] {
            assert_eq!(Route::from_path(route.path()), route);
        }
        assert_eq!(Route::from_path("/"), Route::Home);
        assert_eq!(Route::from_path("/nope"), Route::NotFound);
    }
}
