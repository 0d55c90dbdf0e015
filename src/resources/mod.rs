//! ECS resources shared across systems.
//!
//! Submodules:
//! - [`audio`] – bridge to the background audio thread
//! - [`debugmode`] – presence toggles the debug overlay
//! - [`eventqueue`] – fixed-capacity circular queue of gameplay events
//! - [`gameconfig`] – INI-backed settings
//! - [`gameover`] – game-over phase machine and banner overlay
//! - [`input`] – per-frame keyboard snapshot
//! - [`screensize`] – playfield size in pixels
//! - [`texturestore`] – frame textures per actor kind
//! - [`worldtime`] – millisecond game clock and frame time scale
pub mod audio;
pub mod debugmode;
pub mod eventqueue;
pub mod gameconfig;
pub mod gameover;
pub mod input;
pub mod screensize;
pub mod texturestore;
pub mod worldtime;
