//! SWARMBREAK macroquad application.
//!
//! This crate wires the headless simulation engine to a window:
//! it polls input once per frame, ticks the engine, and draws the
//! resulting snapshot.

pub mod input;
pub mod render;

pub use swarmbreak_core as core;
