pub mod auth;
pub mod profile;
pub mod project;
pub mod event;
pub mod message;
pub mod listing;
pub mod donation;
pub mod resource;

pub use auth::{is_invalid_refresh_token, AuthErrorBody, AuthUser, RefreshRequest, Session,
    SignInRequest, SignUpRequest, UserMetadata};
pub use profile::{derive_name_from_email, Profile, ProfileOrigin, ProfileUpdate};
pub use project::Project;
pub use event::CommunityEvent;
pub use message::Announcement;
pub use listing::Listing;
pub use donation::{total_donated, Donation};
pub use resource::Resource;
