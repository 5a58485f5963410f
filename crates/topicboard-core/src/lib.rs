//! # Topicboard Core
//!
//! Platform-independent library behind the Topicboard dashboard.
//!
//! This crate holds everything that does not need a UI framework, so the
//! Dioxus frontend (web and desktop) and the tests share one implementation.
//!
//! ## Modules
//!
//! - [`types`] - Users, topics and the store wire format
//! - [`storage`] - Realtime document-tree store trait, subscriptions, in-memory store
//! - [`topics`] - Topic list view-model, filtering and topic operations
//! - [`session`] - Session/UI state and its action reducer
//! - [`routes`] - Client-side routes and report URLs
//! - [`auth`] - OAuth 2 implicit-flow helpers (authorization URL, redirect parsing)
//! - [`strings`] - Localized UI strings
//! - [`config`] - Startup configuration and production constants
//! - [`error`] - Error types shared across the workspace

#![forbid(unsafe_code)]

pub mod auth;
pub mod config;
pub mod error;
pub mod notification;
pub mod push_id;
pub mod routes;
pub mod session;
pub mod storage;
pub mod strings;
pub mod topics;
pub mod types;

pub use error::TopicError;
pub use types::{Topic, TopicId, TopicRecord, UserId, UserProfile};
