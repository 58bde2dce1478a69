use yew::prelude::*;

use crate::state::AuthSnapshot;
use crate::viewmodels::AuthViewModel;

/// Handle shared through context: the current auth snapshot plus the
/// viewmodel the screens call operations on.
#[derive(Clone)]
pub struct AuthHandle {
    pub snapshot: AuthSnapshot,
    viewmodel: AuthViewModel,
}

impl AuthHandle {
    pub fn viewmodel(&self) -> AuthViewModel {
        self.viewmodel.clone()
    }
}

// Context equality only needs to track the snapshot; the viewmodel is the
// same app-lifetime instance on every render.
impl PartialEq for AuthHandle {
    fn eq(&self, other: &Self) -> bool {
        self.snapshot == other.snapshot
    }
}

/// Owns the reconciler for the app lifetime. Mirrors the reactive auth cell
/// into yew state, runs the initialization protocol once, and keeps the
/// access token fresh with a periodic check.
#[hook]
pub fn use_auth_provider() -> AuthHandle {
    let viewmodel = use_mut_ref(AuthViewModel::new);
    let snapshot = use_state(AuthSnapshot::default);

    // Subscribe to the state cell and run initialization (once)
    {
        let snapshot = snapshot.clone();
        let viewmodel = viewmodel.clone();
        use_effect_with((), move |_| {
            let vm = viewmodel.borrow().clone();
            let cell = vm.state();

            {
                let snapshot = snapshot.clone();
                let reader = cell.clone();
                cell.subscribe(move || {
                    snapshot.set(reader.snapshot());
                });
            }

            wasm_bindgen_futures::spawn_local(async move {
                vm.initialize().await;
            });
            || ()
        });
    }

    // Periodic token refresh while a session is active
    {
        let viewmodel = viewmodel.clone();
        use_effect_with((), move |_| {
            let vm = viewmodel.borrow().clone();
            let interval = gloo_timers::callback::Interval::new(60_000, move || {
                let vm = vm.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    vm.maybe_refresh_token().await;
                });
            });
            move || drop(interval)
        });
    }

    let vm = viewmodel.borrow().clone();
    AuthHandle {
        snapshot: (*snapshot).clone(),
        viewmodel: vm,
    }
}

/// Read the auth handle provided by `AuthProvider`
#[hook]
pub fn use_auth() -> AuthHandle {
    use_context::<AuthHandle>().expect("use_auth must be called under AuthProvider")
}
