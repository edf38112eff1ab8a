//! Trellis Core
//!
//! Shared building blocks for the Trellis widget toolkit: collections,
//! integer geometry, math re-exports, logging and profiling.

pub mod alloc;
pub mod geometry;
pub mod logging;
pub mod math;
pub mod profiling;
