use wasm_bindgen_futures::spawn_local;
use web_sys::{window, HtmlInputElement};
use yew::prelude::*;

use crate::components::MembershipCard;
use crate::hooks::use_auth;
use crate::models::ProfileUpdate;

/// Profile tab: membership card plus an edit form for the mutable fields
#[function_component(ProfileScreen)]
pub fn profile_screen() -> Html {
    let auth = use_auth();
    let first_name_ref = use_node_ref();
    let last_name_ref = use_node_ref();
    let phone_ref = use_node_ref();
    let saving = use_state(|| false);

    let profile = auth.snapshot.user.as_ref().map(|u| u.profile.clone());

    let on_save = {
        let first_name_ref = first_name_ref.clone();
        let last_name_ref = last_name_ref.clone();
        let phone_ref = phone_ref.clone();
        let saving = saving.clone();
        let vm = auth.viewmodel();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let value = |node: &NodeRef| {
                node.cast::<HtmlInputElement>()
                    .map(|i| i.value())
                    .filter(|v| !v.is_empty())
            };

            let patch = ProfileUpdate {
                first_name: value(&first_name_ref),
                last_name: value(&last_name_ref),
                phone: value(&phone_ref),
                membership_type: None,
            };

            let vm = vm.clone();
            let saving = saving.clone();
            saving.set(true);
            spawn_local(async move {
                match vm.update_profile(patch).await {
                    Ok(()) => log::info!("✅ Profile saved"),
                    Err(e) => {
                        log::error!("❌ Error saving profile: {}", e);
                        if let Some(win) = window() {
                            let _ = win.alert_with_message("Could not save your profile. Please try again.");
                        }
                    }
                }
                saving.set(false);
            });
        })
    };

    let (first_name, last_name, phone) = match &profile {
        Some(p) => (
            p.first_name.clone(),
            p.last_name.clone(),
            p.phone.clone().unwrap_or_default(),
        ),
        None => (String::new(), String::new(), String::new()),
    };

    html! {
        <div class="profile-screen">
            <MembershipCard />

            <form class="profile-form" onsubmit={on_save}>
                <h2>{"Edit Profile"}</h2>

                <div class="form-group">
                    <label for="profile-first-name">{"First name"}</label>
                    <input
                        type="text"
                        id="profile-first-name"
                        value={first_name}
                        ref={first_name_ref}
                    />
                </div>

                <div class="form-group">
                    <label for="profile-last-name">{"Last name"}</label>
                    <input
                        type="text"
                        id="profile-last-name"
                        value={last_name}
                        ref={last_name_ref}
                    />
                </div>

                <div class="form-group">
                    <label for="profile-phone">{"Phone"}</label>
                    <input type="tel" id="profile-phone" value={phone} ref={phone_ref} />
                </div>

                <button type="submit" class="btn-primary" disabled={*saving}>
                    {if *saving { "Saving..." } else { "Save changes" }}
                </button>
            </form>
        </div>
    }
}
