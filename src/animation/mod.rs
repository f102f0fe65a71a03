//! Spring driven interpolation for the tile rotations.
//!
//! A [`Spring`] chases a target value with damped harmonic motion and a
//! [`Trail`] runs one spring per tile, staggering their start times.
pub mod spring;
pub mod trail;

pub use spring::{Spring, SpringConfig};
pub use trail::{StaggerConfig, StaggerDirection, Trail};
