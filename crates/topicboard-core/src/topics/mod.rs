//! Topic list view-model.
//!
//! - [`model`] - the loaded topic collection and its `Loading -> Loaded` state
//! - [`filter`] - archived partitioning and search filtering
//! - [`service`] - create / archive / activate / report-link operations

pub mod filter;
pub mod model;
pub mod service;

pub use filter::{filter_topics, matches_search};
pub use model::{LoadState, TopicListModel};
pub use service::TopicService;
