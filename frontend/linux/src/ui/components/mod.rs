//! Reusable UI components for the RollCall frontend

pub mod animation;

pub use animation::AnimationPlayer;
