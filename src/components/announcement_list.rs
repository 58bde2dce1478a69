use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_auth;
use crate::models::Announcement;
use crate::services::fetch_announcements;

#[function_component(AnnouncementList)]
pub fn announcement_list() -> Html {
    let auth = use_auth();
    let announcements = use_state(Vec::<Announcement>::new);
    let loading = use_state(|| true);

    {
        let announcements = announcements.clone();
        let loading = loading.clone();
        let client = auth.viewmodel().client().clone();
        let token = auth
            .snapshot
            .session
            .as_ref()
            .map(|s| s.access_token.clone());

        use_effect_with((), move |_| {
            spawn_local(async move {
                match fetch_announcements(&client, token.as_deref()).await {
                    Ok(items) => announcements.set(items),
                    Err(e) => log::error!("❌ Error loading announcements: {}", e),
                }
                loading.set(false);
            });
            || ()
        });
    }

    if *loading {
        return html! { <div class="list-loading">{"Loading announcements..."}</div> };
    }

    html! {
        <div class="announcement-list">
            <h2>{"Announcements"}</h2>
            {if announcements.is_empty() {
                html! { <p class="list-empty">{"Nothing posted yet"}</p> }
            } else {
                announcements.iter().map(|item| {
                    html! {
                        <div class="announcement-card" key={item.id.clone()}>
                            <div class="announcement-header">
                                {if item.pinned {
                                    html! { <span class="pinned">{"📌"}</span> }
                                } else {
                                    html! {}
                                }}
                                <h3>{item.title.clone()}</h3>
                            </div>
                            <p>{item.body.clone()}</p>
                            <p class="announcement-meta">
                                {item.author_name.clone().unwrap_or_else(|| "Community Office".to_string())}
                                {" · "}
                                {item.posted_at.clone()}
                            </p>
                        </div>
                    }
                }).collect::<Html>()
            }}
        </div>
    }
}
