//! Shared, target-independent core of the road damage reporting page.
//!
//! Everything here compiles and tests on the native target; the wasm
//! frontend only adapts browser events to the operations of [`board::Board`].

pub mod board;
pub mod config;
pub mod datetime;
pub mod error;
pub mod model;
pub mod response;
