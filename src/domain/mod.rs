//! Domain models for externals classification
//!
//! Plain data carried between the pipeline stages. Everything here is created
//! fresh per run and held only in memory.

pub mod classification;
pub mod dependency;

pub use classification::{BundledDependency, ClassificationResult};
pub use dependency::DependencyDeclaration;
