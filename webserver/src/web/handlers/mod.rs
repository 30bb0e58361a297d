//! Route handlers

pub mod discover;
pub mod health;
pub mod profile;
pub mod swipe;

pub use discover::discover;
pub use health::health;
pub use profile::update_profile;
pub use swipe::swipe;
