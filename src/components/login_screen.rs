use wasm_bindgen_futures::spawn_local;
use web_sys::{window, HtmlInputElement};
use yew::prelude::*;

use crate::hooks::use_auth;
use crate::navigation::{navigate_to, ROUTE_REGISTER};

#[function_component(LoginScreen)]
pub fn login_screen() -> Html {
    let auth = use_auth();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let submitting = use_state(|| false);

    let on_submit = {
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let submitting = submitting.clone();
        let vm = auth.viewmodel();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let (Some(email_input), Some(password_input)) = (
                email_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) {
                let email = email_input.value();
                let password = password_input.value();

                if email.is_empty() || password.is_empty() {
                    if let Some(win) = window() {
                        let _ = win.alert_with_message("Please fill in all fields");
                    }
                    return;
                }

                let vm = vm.clone();
                let submitting = submitting.clone();
                submitting.set(true);
                spawn_local(async move {
                    if let Err(e) = vm.login(&email, &password).await {
                        if let Some(win) = window() {
                            let _ = win.alert_with_message(&e);
                        }
                    }
                    submitting.set(false);
                });
            }
        })
    };

    html! {
        <div class="auth-screen">
            <div class="auth-container">
                <div class="auth-header">
                    <div class="auth-logo">
                        <div class="logo-icon">{"🤝"}</div>
                    </div>
                    <h1>{"Community Hub"}</h1>
                    <p>{"Sign in to your membership account"}</p>
                </div>

                <form class="auth-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="email">{"Email"}</label>
                        <input
                            type="email"
                            id="email"
                            name="email"
                            placeholder="you@example.com"
                            ref={email_ref}
                            required=true
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">{"Password"}</label>
                        <input
                            type="password"
                            id="password"
                            name="password"
                            placeholder="Your password"
                            ref={password_ref}
                            required=true
                        />
                    </div>

                    <button type="submit" class="btn-primary" disabled={*submitting}>
                        <span class="btn-text">
                            {if *submitting { "Signing in..." } else { "Sign In" }}
                        </span>
                    </button>

                    <div class="auth-footer">
                        <p>{"New to the community?"}</p>
                        <button
                            type="button"
                            class="btn-link"
                            onclick={Callback::from(|_| navigate_to(ROUTE_REGISTER))}
                        >
                            {"Create an account"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
