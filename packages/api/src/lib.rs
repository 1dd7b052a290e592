//! # API crate — auth backend client shared by every frontend
//!
//! Thin, typed access to the three auth endpoints the login gate needs. The
//! endpoint paths and base URL come from [`gate::config::ApiConfig`].
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: `login`, `current_user`, `logout` over `reqwest` |
//! | [`error`] | [`ApiError`] and its mapping onto [`gate::AuthError`] |
//! | [`models`] | Request/response bodies and the client-safe [`UserInfo`] |
//!
//! The wire format is JSON with camelCase field names
//! (`{"phoneNumber": "...", "password": "..."}`).

pub mod client;
pub mod error;
pub mod models;

pub use client::ApiClient;
pub use error::ApiError;
pub use models::{LoginResponse, PhoneLogin, UserInfo};
