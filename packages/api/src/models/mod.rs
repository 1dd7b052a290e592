//! Data models exchanged with the auth backend.

mod auth;
mod user;

pub(crate) use auth::ErrorBody;
pub use auth::{LoginResponse, PhoneLogin, SessionResponse};
pub use user::UserInfo;
