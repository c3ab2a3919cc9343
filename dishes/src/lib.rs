//! # Dishes
//!
//! Data model and recommendation logic for the "what should I eat" client.
//!
//! Everything in this crate is a pure transformation over a [`Dish`] value
//! delivered by the remote food service. There is no I/O and no shared
//! state, so the functions here are safe to call from anywhere.

pub mod categories;
pub mod description;
pub mod fallback;
pub mod model;
pub mod tags;

pub use description::{Description, select_description};
pub use model::Dish;
pub use tags::derive_two_tags;
