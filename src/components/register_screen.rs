use wasm_bindgen_futures::spawn_local;
use web_sys::{window, HtmlInputElement};
use yew::prelude::*;

use crate::hooks::use_auth;
use crate::models::UserMetadata;
use crate::navigation::{navigate_to, ROUTE_SIGN_IN};

#[function_component(RegisterScreen)]
pub fn register_screen() -> Html {
    let auth = use_auth();
    let first_name_ref = use_node_ref();
    let last_name_ref = use_node_ref();
    let phone_ref = use_node_ref();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let submitting = use_state(|| false);

    let on_submit = {
        let first_name_ref = first_name_ref.clone();
        let last_name_ref = last_name_ref.clone();
        let phone_ref = phone_ref.clone();
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let submitting = submitting.clone();
        let vm = auth.viewmodel();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let value = |node: &NodeRef| {
                node.cast::<HtmlInputElement>()
                    .map(|i| i.value())
                    .unwrap_or_default()
            };

            let first_name = value(&first_name_ref);
            let last_name = value(&last_name_ref);
            let phone = value(&phone_ref);
            let email = value(&email_ref);
            let password = value(&password_ref);

            if email.is_empty() || password.is_empty() || first_name.is_empty() {
                if let Some(win) = window() {
                    let _ = win.alert_with_message("Please fill in name, email and password");
                }
                return;
            }

            // Profile fields travel as identity metadata; the profile row
            // itself is created after the first sign-in
            let metadata = UserMetadata {
                first_name: Some(first_name),
                last_name: if last_name.is_empty() { None } else { Some(last_name) },
                phone: if phone.is_empty() { None } else { Some(phone) },
            };

            let vm = vm.clone();
            let submitting = submitting.clone();
            submitting.set(true);
            spawn_local(async move {
                match vm.register(&email, &password, metadata).await {
                    Ok(()) => {
                        log::info!("✅ Registration complete");
                    }
                    Err(e) => {
                        if let Some(win) = window() {
                            let _ = win.alert_with_message(&e);
                        }
                    }
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <div class="auth-screen">
            <div class="auth-container">
                <div class="auth-header">
                    <div class="auth-logo">
                        <div class="logo-icon">{"🤝"}</div>
                    </div>
                    <h1>{"Join the Community"}</h1>
                    <p>{"Create your membership account"}</p>
                </div>

                <form class="auth-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="first-name">{"First name"}</label>
                        <input type="text" id="first-name" ref={first_name_ref} required=true />
                    </div>

                    <div class="form-group">
                        <label for="last-name">{"Last name"}</label>
                        <input type="text" id="last-name" ref={last_name_ref} />
                    </div>

                    <div class="form-group">
                        <label for="phone">{"Phone"}</label>
                        <input type="tel" id="phone" placeholder="+254..." ref={phone_ref} />
                    </div>

                    <div class="form-group">
                        <label for="email">{"Email"}</label>
                        <input type="email" id="email" ref={email_ref} required=true />
                    </div>

                    <div class="form-group">
                        <label for="password">{"Password"}</label>
                        <input type="password" id="password" ref={password_ref} required=true />
                    </div>

                    <button type="submit" class="btn-primary" disabled={*submitting}>
                        <span class="btn-text">
                            {if *submitting { "Creating account..." } else { "Create Account" }}
                        </span>
                    </button>

                    <div class="auth-footer">
                        <p>{"Already a member?"}</p>
                        <button
                            type="button"
                            class="btn-link"
                            onclick={Callback::from(|_| navigate_to(ROUTE_SIGN_IN))}
                        >
                            {"Sign in"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
