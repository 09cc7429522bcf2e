//! Orrery - Interactive Solar System Simulator
//!
//! A library crate providing the orbital propagation, simulation clock,
//! and overlay components for testing and integration purposes.

pub mod body;
pub mod camera;
pub mod catalog;
pub mod data;
pub mod grouping;
pub mod input;
pub mod orbit;
pub mod render;
pub mod sweep;
pub mod time;
pub mod types;
pub mod ui;
