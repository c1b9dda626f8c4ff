//! Editor state for the admin forms, kept free of any UI framework so the
//! same rules run in the browser and in tests.

pub mod amenities;
pub mod blog;
pub mod coerce;
pub mod entries;
pub mod features;
pub mod house_rules;
pub mod listing;
pub mod location;
pub mod slug;
pub mod villa;

pub use blog::BlogPostForm;
pub use slug::generate_slug;
pub use villa::VillaForm;
