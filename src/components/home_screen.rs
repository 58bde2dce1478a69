use yew::prelude::*;

use crate::components::{
    AnnouncementList, DonationHistory, EventList, MarketplaceList, MembershipCard, ProfileScreen,
    ProjectList, ResourceList, SettingsPopup,
};
use crate::navigation::{navigate_to, Route};

#[derive(Properties, PartialEq)]
pub struct HomeScreenProps {
    pub route: Route,
}

/// Authenticated shell: header, tab bar and the active section
#[function_component(HomeScreen)]
pub fn home_screen(props: &HomeScreenProps) -> Html {
    let show_settings = use_state(|| false);

    let toggle_settings = {
        let show_settings = show_settings.clone();
        Callback::from(move |_: MouseEvent| {
            show_settings.set(!*show_settings);
        })
    };

    let tab = |route: Route, label: &str| {
        let active = if props.route == route { "tab active" } else { "tab" };
        let path = route.path();
        html! {
            <button
                class={active}
                onclick={Callback::from(move |_| navigate_to(path))}
            >
                {label}
            </button>
        }
    };

    let section = match props.route {
        Route::Projects => html! { <ProjectList /> },
        Route::Events => html! { <EventList /> },
        Route::Donations => html! { <DonationHistory /> },
        Route::Marketplace => html! { <MarketplaceList /> },
        Route::Resources => html! { <ResourceList /> },
        Route::Messages => html! { <AnnouncementList /> },
        Route::Profile => html! { <ProfileScreen /> },
        // Home (and anything unmatched the guard let through): overview
        _ => html! {
            <>
                <MembershipCard />
                <AnnouncementList />
            </>
        },
    };

    html! {
        <>
            <header class="app-header">
                <h1>{"Community Hub"}</h1>
                <div class="header-actions">
                    <button class="btn-settings" onclick={toggle_settings}>
                        {"⚙️"}
                    </button>
                </div>
            </header>

            <nav class="tab-bar">
                {tab(Route::Home, "Home")}
                {tab(Route::Projects, "Projects")}
                {tab(Route::Events, "Events")}
                {tab(Route::Marketplace, "Market")}
                {tab(Route::Donations, "Giving")}
                {tab(Route::Resources, "Library")}
                {tab(Route::Messages, "News")}
                {tab(Route::Profile, "Profile")}
            </nav>

            <main class="content">
                {section}
            </main>

            {if *show_settings {
                html! {
                    <SettingsPopup
                        on_close={Callback::from({
                            let show_settings = show_settings.clone();
                            move |_| show_settings.set(false)
                        })}
                    />
                }
            } else {
                html! {}
            }}
        </>
    }
}
