use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_auth;
use crate::models::Resource;
use crate::services::fetch_resources;

#[function_component(ResourceList)]
pub fn resource_list() -> Html {
    let auth = use_auth();
    let resources = use_state(Vec::<Resource>::new);
    let loading = use_state(|| true);

    {
        let resources = resources.clone();
        let loading = loading.clone();
        let client = auth.viewmodel().client().clone();
        let token = auth
            .snapshot
            .session
            .as_ref()
            .map(|s| s.access_token.clone());

        use_effect_with((), move |_| {
            spawn_local(async move {
                match fetch_resources(&client, token.as_deref()).await {
                    Ok(items) => resources.set(items),
                    Err(e) => log::error!("❌ Error loading resources: {}", e),
                }
                loading.set(false);
            });
            || ()
        });
    }

    if *loading {
        return html! { <div class="list-loading">{"Loading resources..."}</div> };
    }

    html! {
        <div class="resource-list">
            <h2>{"Resource Library"}</h2>
            {if resources.is_empty() {
                html! { <p class="list-empty">{"No resources published yet"}</p> }
            } else {
                resources.iter().map(|resource| {
                    html! {
                        <a
                            class="resource-card"
                            key={resource.id.clone()}
                            href={resource.url.clone()}
                            target="_blank"
                        >
                            <span class="resource-category">{resource.category.clone()}</span>
                            <h3>{resource.title.clone()}</h3>
                            {if let Some(desc) = &resource.description {
                                html! { <p>{desc.clone()}</p> }
                            } else {
                                html! {}
                            }}
                        </a>
                    }
                }).collect::<Html>()
            }}
        </div>
    }
}
