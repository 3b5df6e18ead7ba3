#![forbid(unsafe_code)]
//! disc_scatter: maximal Poisson-disc (blue-noise) point sampling in 2D.
//!
//! Generates spatially well-distributed point sets over a bounded rectangle
//! with a guaranteed minimum separation between points, suitable for seeding
//! placement of discrete objects (vegetation, props) without visible
//! clustering or grid artifacts.
//!
//! Two entry points:
//! - [`sampling::PoissonDiscSampler`]: incremental generator yielding one
//!   accepted point per call until the region is saturated
//! - [`sampling::PoissonDiscSampling`]: one-shot strategy behind
//!   [`sampling::PositionSampling`] that collects a full run
pub mod error;
pub mod sampling;

/// Convenient re-exports for common types. Import with `use disc_scatter::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::sampling::{PoissonDiscSampler, PoissonDiscSampling, PositionSampling};
}
