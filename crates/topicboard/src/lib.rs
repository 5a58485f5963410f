//! Topicboard - topic management dashboard.
//!
//! Signed-in users create topics, browse them in a searchable list, archive
//! or reactivate them, and copy shareable report links.
//!
//! # Architecture
//!
//! - **Core logic**: `topicboard_core` (model, view-model, store contract, routes)
//! - **UI**: Dioxus components in [`components`]
//! - **Storage**: hosted realtime database over REST, or an in-memory store
//! - **Auth**: Google OAuth 2 implicit flow ([`auth`])
//!
//! # Platform Support
//!
//! - **Web (WASM)**: the primary target; routes live in the URL fragment
//! - **Native**: builds for tests; browser-only APIs report `PlatformError::Unsupported`

#![forbid(unsafe_code)]

pub mod auth;
pub mod components;
pub mod config;
pub mod error;
pub mod http;
pub mod platform;
pub mod storage;
pub mod utils;
