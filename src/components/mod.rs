//! ECS components for actors.
//!
//! Submodules overview:
//! - [`animation`] – frame accumulator for cycling sprite frames
//! - [`boundary`] – per-frame axis-aligned bounds and the overlap test
//! - [`collision`] – NONE/ENTER/STAY/EXIT collision state machine
//! - [`effect`] – what touching an actor does to the player
//! - [`gameoverbanner`] – banner marker and its resting y
//! - [`mapposition`] – world-space centre of an actor
//! - [`obstacle`] – marker for scrolling actors that wrap around
//! - [`player`] – player marker and idle hover
//! - [`rigidbody`] – velocity, acceleration and friction
//! - [`sprite`] – actor kind, size, scale and current frame
//! - [`vitals`] – life and ring counters

pub mod animation;
pub mod boundary;
pub mod collision;
pub mod effect;
pub mod gameoverbanner;
pub mod mapposition;
pub mod obstacle;
pub mod player;
pub mod rigidbody;
pub mod sprite;
pub mod vitals;
