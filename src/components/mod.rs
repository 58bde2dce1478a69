pub mod app;
pub mod route_guard;
pub mod login_screen;
pub mod register_screen;
pub mod home_screen;
pub mod membership_card;
pub mod profile_screen;
pub mod project_list;
pub mod event_list;
pub mod announcement_list;
pub mod marketplace_list;
pub mod donation_history;
pub mod resource_list;
pub mod settings_popup;

pub use app::App;
pub use route_guard::RouteGuard;
pub use login_screen::LoginScreen;
pub use register_screen::RegisterScreen;
pub use home_screen::HomeScreen;
pub use membership_card::MembershipCard;
pub use profile_screen::ProfileScreen;
pub use project_list::ProjectList;
pub use event_list::EventList;
pub use announcement_list::AnnouncementList;
pub use marketplace_list::MarketplaceList;
pub use donation_history::DonationHistory;
pub use resource_list::ResourceList;
pub use settings_popup::SettingsPopup;
