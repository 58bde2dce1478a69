use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_auth;
use crate::models::{total_donated, Donation};
use crate::services::fetch_member_donations;

#[function_component(DonationHistory)]
pub fn donation_history() -> Html {
    let auth = use_auth();
    let donations = use_state(Vec::<Donation>::new);
    let loading = use_state(|| true);

    {
        let donations = donations.clone();
        let loading = loading.clone();
        let client = auth.viewmodel().client().clone();
        let session = auth.snapshot.session.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                if let Some(session) = session {
                    match fetch_member_donations(
                        &client,
                        &session.access_token,
                        &session.user.id,
                    )
                    .await
                    {
                        Ok(items) => donations.set(items),
                        Err(e) => log::error!("❌ Error loading donations: {}", e),
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    if *loading {
        return html! { <div class="list-loading">{"Loading donations..."}</div> };
    }

    let total = total_donated(&donations);

    html! {
        <div class="donation-history">
            <h2>{"My Donations"}</h2>
            <div class="donation-total">
                <span class="label">{"Total given"}</span>
                <span class="value">{format!("KES {:.2}", total)}</span>
            </div>
            {if donations.is_empty() {
                html! { <p class="list-empty">{"No donations recorded yet"}</p> }
            } else {
                donations.iter().map(|donation| {
                    html! {
                        <div class="donation-row" key={donation.id.clone()}>
                            <span class="donation-purpose">
                                {donation.purpose.clone().unwrap_or_else(|| "General fund".to_string())}
                            </span>
                            <span class="donation-date">{donation.donated_at.clone()}</span>
                            <span class="donation-amount">
                                {format!("{} {:.2}", donation.currency, donation.amount)}
                            </span>
                        </div>
                    }
                }).collect::<Html>()
            }}
        </div>
    }
}
