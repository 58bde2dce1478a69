use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_auth;
use crate::models::Listing;
use crate::services::fetch_listings;

#[function_component(MarketplaceList)]
pub fn marketplace_list() -> Html {
    let auth = use_auth();
    let listings = use_state(Vec::<Listing>::new);
    let loading = use_state(|| true);

    {
        let listings = listings.clone();
        let loading = loading.clone();
        let client = auth.viewmodel().client().clone();
        let token = auth
            .snapshot
            .session
            .as_ref()
            .map(|s| s.access_token.clone());

        use_effect_with((), move |_| {
            spawn_local(async move {
                match fetch_listings(&client, token.as_deref()).await {
                    Ok(items) => listings.set(items),
                    Err(e) => log::error!("❌ Error loading listings: {}", e),
                }
                loading.set(false);
            });
            || ()
        });
    }

    if *loading {
        return html! { <div class="list-loading">{"Loading marketplace..."}</div> };
    }

    html! {
        <div class="marketplace-list">
            <h2>{"Marketplace"}</h2>
            {if listings.is_empty() {
                html! { <p class="list-empty">{"No listings at the moment"}</p> }
            } else {
                listings.iter().map(|listing| {
                    html! {
                        <div class="listing-card" key={listing.id.clone()}>
                            <div class="listing-header">
                                <h3>{listing.title.clone()}</h3>
                                <span class="listing-price">{listing.display_price()}</span>
                            </div>
                            {if let Some(desc) = &listing.description {
                                html! { <p>{desc.clone()}</p> }
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
