//! Core types and definitions for the NEON simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, view snapshots, events, errors, and constants.
//! It has no dependency on any runtime framework or renderer.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;
