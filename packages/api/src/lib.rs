//! # API crate: typed client for the Mantrify REST API
//!
//! Every call the front-end makes goes through an [`ApiClient`], which owns
//! the base URL, the optional bearer token and a shared `reqwest` pool. The
//! endpoint modules are free functions taking `&ApiClient`, grouped the way
//! the server groups its routes.
//!
//! ## Modules
//!
//! | Module | Routes | Purpose |
//! |--------|--------|---------|
//! | [`auth`] | `/users/*` | Login, registration, password reset |
//! | [`mantras`] | `/mantras/*` | Meditation library, creation, streaming, favorites, edits |
//! | [`sounds`] | `/sounds/*` | Sound file listing, multipart upload with progress, deletion |
//! | [`admin`] | `/admin/*` | User, meditation and render-queue administration |
//! | [`database`] | `/database/*` | Backup listing, creation, download, deletion and restore |
//!
//! ## Errors
//!
//! Non-2xx responses become [`ApiError::Status`] carrying the status code and
//! the server's `error.message`, when it sent one. Screens match on
//! [`ApiError::status`] to pick a user-facing message and fall back to
//! [`ApiError::message_or`].

pub mod admin;
pub mod auth;
mod client;
pub mod database;
mod error;
pub mod mantras;
pub mod sounds;

pub use client::ApiClient;
pub use error::ApiError;
pub use sounds::{upload_percent, UploadFile};
