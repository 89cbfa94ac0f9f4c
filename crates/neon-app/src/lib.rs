//! Headless host for the neon shooter simulation.
//!
//! This crate plays the part of the game screen: it owns the ship and an
//! enemy fleet, drives a `SimulationEngine` tick by tick and reports what
//! happened.

pub mod config;
pub mod fleet;
pub mod game_loop;
pub mod state;

pub use neon_core as core;
