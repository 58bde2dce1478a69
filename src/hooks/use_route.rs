use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::navigation::{current_path, ROUTE_CHANGE_EVENT};

/// Current browser path, re-read on history navigation and on the
/// route-change event dispatched by `navigate_to`.
#[hook]
pub fn use_route() -> String {
    let path = use_state(current_path);

    {
        let path = path.clone();
        use_effect_with((), move |_| {
            if let Some(win) = web_sys::window() {
                let callback = Closure::wrap(Box::new(move |_e: web_sys::Event| {
                    path.set(current_path());
                }) as Box<dyn FnMut(web_sys::Event)>);

                let _ = win.add_event_listener_with_callback(
                    "popstate",
                    callback.as_ref().unchecked_ref(),
                );
                let _ = win.add_event_listener_with_callback(
                    ROUTE_CHANGE_EVENT,
                    callback.as_ref().unchecked_ref(),
                );
                // App-lifetime listener, registered once
                callback.forget();
            }
            || ()
        });
    }

    (*path).clone()
}
