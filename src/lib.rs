//! Turn-based lunar landing simulation.
//!
//! The library owns the physics, terrain, radar, and rendering logic; the
//! `moon_lander` binary is a thin line-based terminal front-end over
//! [`session::Session`].

pub mod command;
pub mod display;
pub mod flight;
pub mod landing;
pub mod menu;
pub mod physics;
pub mod radar;
pub mod safety;
pub mod session;
pub mod terrain;
pub mod visualizer;

pub use lander_config as config;
pub use lander_export as export;
