//! Core types for awale.
//!
//! This crate provides the fundamental types used across the awale engine:
//! - [`Player`] for the two sides of the board
//! - [`Pit`] for board positions and ring arithmetic

mod pit;
mod player;

pub use pit::Pit;
pub use player::Player;
