use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_auth;
use crate::models::CommunityEvent;
use crate::services::fetch_events;

#[function_component(EventList)]
pub fn event_list() -> Html {
    let auth = use_auth();
    let events = use_state(Vec::<CommunityEvent>::new);
    let loading = use_state(|| true);

    {
        let events = events.clone();
        let loading = loading.clone();
        let client = auth.viewmodel().client().clone();
        let token = auth
            .snapshot
            .session
            .as_ref()
            .map(|s| s.access_token.clone());

        use_effect_with((), move |_| {
            spawn_local(async move {
                match fetch_events(&client, token.as_deref()).await {
                    Ok(items) => events.set(items),
                    Err(e) => log::error!("❌ Error loading events: {}", e),
                }
                loading.set(false);
            });
            || ()
        });
    }

    if *loading {
        return html! { <div class="list-loading">{"Loading events..."}</div> };
    }

    let now = chrono::Utc::now();
    let upcoming: Vec<&CommunityEvent> = events.iter().filter(|e| e.is_upcoming(now)).collect();

    html! {
        <div class="event-list">
            <h2>{"Upcoming Events"}</h2>
            {if upcoming.is_empty() {
                html! { <p class="list-empty">{"No upcoming events"}</p> }
            } else {
                upcoming.iter().map(|event| {
                    html! {
                        <div class="event-card" key={event.id.clone()}>
                            <h3>{event.title.clone()}</h3>
                            <p class="event-time">{event.starts_at.clone()}</p>
                            {if let Some(location) = &event.location {
                                html! { <p class="event-location">{format!("📍 {}", location)}</p> }
                            } else {
                                html! {}
                            }}
                        </div>
                    }
                }).collect::<Html>()
            }}
        </div>
    }
}
