pub mod use_auth;
pub mod auth_context;
pub mod use_route;

pub use use_auth::{use_auth, use_auth_provider, AuthHandle};
pub use auth_context::AuthProvider;
pub use use_route::use_route;
