use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::CONFIG;
use crate::hooks::{use_auth, use_route};
use crate::navigation::{evaluate_guard, navigate_to, GuardInput};

#[derive(Properties, PartialEq)]
pub struct RouteGuardProps {
    pub children: Children,
}

/// Watches the auth flags and the current path and redirects between the
/// authenticated and unauthenticated route trees. Holds off until mounted,
/// past the settle delay, and not loading.
#[function_component(RouteGuard)]
pub fn route_guard(props: &RouteGuardProps) -> Html {
    let auth = use_auth();
    let path = use_route();
    let mounted = use_state(|| false);
    let nav_stable = use_state(|| false);

    {
        let mounted = mounted.clone();
        let nav_stable = nav_stable.clone();
        use_effect_with((), move |_| {
            mounted.set(true);
            // No redirects until the shell has settled
            Timeout::new(CONFIG.auth_config.nav_settle_delay_ms, move || {
                nav_stable.set(true);
            })
            .forget();
            || ()
        });
    }

    {
        let deps = (
            auth.snapshot.is_manually_authenticated,
            auth.snapshot.is_loading,
            path.clone(),
            *mounted,
            *nav_stable,
        );
        use_effect_with(deps, move |deps| {
            let (is_manu, is_loading, path, mounted, nav_stable) = deps;
            let input = GuardInput {
                is_manually_authenticated: *is_manu,
                is_loading: *is_loading,
                mounted: *mounted,
                nav_stable: *nav_stable,
                path,
            };

            if let Some(action) = evaluate_guard(input) {
                log::info!("🧭 Guard redirect: {} -> {}", path, action.target());
                navigate_to(action.target());
            }
            || ()
        });
    }

    html! { <>{ props.children.clone() }</> }
}
