//! Vector math re-exported from [`glam`].
//!
//! Pointer positions are carried as [`Vec2`] so sub-pixel coordinates from the
//! host survive until hit testing.
//!
//! ```
//! use trellis_core::math::Vec2;
//!
//! let pointer = Vec2::new(10.5, 20.0);
//! assert_eq!(pointer + Vec2::X, Vec2::new(11.5, 20.0));
//! ```
//!
//! [`glam`]: https://docs.rs/glam

pub use glam::Vec2;
