//! Custom Resource Definitions (CRDs) for ssp-operator.
//!
//! - `Ssp`: cluster-wide singleton configuration for common templates,
//!   golden images and common instancetypes

mod ssp;

pub use ssp::*;
