use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_auth;

#[derive(Properties, PartialEq)]
pub struct SettingsPopupProps {
    pub on_close: Callback<()>,
}

#[function_component(SettingsPopup)]
pub fn settings_popup(props: &SettingsPopupProps) -> Html {
    let auth = use_auth();

    let member_line = auth
        .snapshot
        .user
        .as_ref()
        .map(|u| format!("{} · {}", u.profile.full_name(), u.profile.membership_id))
        .unwrap_or_else(|| "Not signed in".to_string());

    let on_logout = {
        let vm = auth.viewmodel();
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
            let vm = vm.clone();
            spawn_local(async move {
                // State clears through the signed-out event
                vm.logout().await;
            });
        })
    };

    html! {
        <div class="settings-overlay" onclick={props.on_close.reform(|_| ())}>
            <div class="settings-popup" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <div class="settings-header">
                    <h3>{"Settings"}</h3>
                    <button class="btn-close" onclick={props.on_close.reform(|_| ())}>{"✕"}</button>
                </div>
                <p class="settings-member">{member_line}</p>
                <button class="btn-logout" onclick={on_logout}>
                    {"Sign out"}
                </button>
            </div>
        </div>
    }
}
