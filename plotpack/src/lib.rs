//! Modeling library for selecting buildings under a budget and laying them out on a rectangular plot.
//!
//! The optimizers themselves live in `plotopt`; this crate holds the entities they operate on,
//! the geometry (including the guillotine free-space tree), and the external (JSON) representations.

/// Entities to model building selection and plot layout problems
pub mod entities;

/// Geometric primitives and the free-space tree used for rectangle packing
pub mod geometry;

/// Importing problem instances into and exporting results out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;
