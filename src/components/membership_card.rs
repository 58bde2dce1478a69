use yew::prelude::*;

use crate::hooks::use_auth;

/// Membership summary card shown on the home and profile tabs
#[function_component(MembershipCard)]
pub fn membership_card() -> Html {
    let auth = use_auth();

    let user = match auth.snapshot.user {
        Some(user) => user,
        None => return html! {},
    };
    let profile = &user.profile;

    html! {
        <div class="membership-card">
            <div class="membership-card-header">
                <h2>{profile.full_name()}</h2>
                <span class="membership-status">{profile.membership_status.clone()}</span>
            </div>
            <div class="membership-card-body">
                <div class="membership-row">
                    <span class="label">{"Member ID"}</span>
                    <span class="value">{profile.membership_id.clone()}</span>
                </div>
                <div class="membership-row">
                    <span class="label">{"Type"}</span>
                    <span class="value">{profile.membership_type.clone()}</span>
                </div>
                <div class="membership-row">
                    <span class="label">{"Member since"}</span>
                    <span class="value">{profile.join_date.clone()}</span>
                </div>
                <div class="membership-row">
                    <span class="label">{"Total donations"}</span>
                    <span class="value">{format!("KES {:.2}", profile.total_donations)}</span>
                </div>
            </div>
        </div>
    }
}
