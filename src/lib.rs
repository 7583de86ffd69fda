//! Roche - Tidal Breakup Sandbox
//!
//! A library crate providing the N-body world, drag interaction and
//! Bevy plugins for testing and integration purposes.

pub mod bodies;
pub mod camera;
pub mod input;
pub mod interaction;
pub mod physics;
pub mod render;
pub mod scenario;
pub mod time;
pub mod types;
pub mod world;

#[cfg(test)]
pub mod test_utils;
