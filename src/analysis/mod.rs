//! Analysis and result aggregation modules
//!
//! Combines the extracted features into the final result:
//! - Tradition classification (two-threshold rule)
//! - Result and metadata types

pub mod classifier;
pub mod result;
