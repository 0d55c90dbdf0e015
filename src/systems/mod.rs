//! Game systems.
//!
//! Submodules overview
//! - [`animation`] – cycle sprite frames by elapsed time
//! - [`audio`] – audio thread and the ECS bridge systems
//! - [`collision`] – boundaries, collision states and collision events
//! - [`dispatcher`] – drain the event queue and apply effects
//! - [`gameover`] – step the game-over sequence and place the banner
//! - [`input`] – read the keyboard into [`crate::resources::input::InputState`]
//! - [`movement`] – scroll and wrap obstacles
//! - [`playercontroller`] – steer, hover, damp and clamp the player
//! - [`render`] – draw the frame and debug overlays using raylib
//! - [`time`] – advance the game clock

pub mod animation;
pub mod audio;
pub mod collision;
pub mod dispatcher;
pub mod gameover;
pub mod input;
pub mod movement;
pub mod playercontroller;
pub mod render;
pub mod time;
