//! Display helpers shared by the components.

pub mod formatting;

pub use formatting::format_date;
