pub mod supabase;
pub mod profile_service;
pub mod projects_service;
pub mod events_service;
pub mod messages_service;
pub mod marketplace_service;
pub mod donations_service;
pub mod resources_service;

pub use supabase::SupabaseClient;
pub use profile_service::*;
pub use projects_service::*;
pub use events_service::*;
pub use messages_service::*;
pub use marketplace_service::*;
pub use donations_service::*;
pub use resources_service::*;
