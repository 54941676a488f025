//! # syncgraph Testkit
//!
//! Test utilities for syncgraph.
//!
//! This crate provides:
//! - Fixture types registered with a shared provider
//! - Property-based test generators using proptest
//! - Golden transit vectors
//! - Multi-threaded stress helpers
//!
//! ## Usage
//!
//! ```
//! use syncgraph_testkit::prelude::*;
//! use syncgraph_core::Syncable;
//!
//! let source = Holder { value: Some(Complex::new(1.0, 2.0)) };
//! let mut target: Holder = fresh();
//! target.sync_from(&source.to_sync_data().unwrap()).unwrap();
//! assert_eq!(target, source);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;
pub mod stress;
pub mod vectors;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::generators::*;
    pub use crate::stress::*;
    pub use crate::vectors::*;
}

pub use fixtures::*;
pub use generators::*;
pub use stress::*;
pub use vectors::*;
