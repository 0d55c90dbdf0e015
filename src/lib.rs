//! Sonic Airborne library.
//!
//! Exposes the game's ECS components, resources, systems and events so the
//! simulation can be driven headless from integration tests.

pub mod actors;
pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
