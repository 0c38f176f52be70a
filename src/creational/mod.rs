//! Creational patterns: how objects get made.
//!
//! - **factory_method**: logistics companies choosing their transport
//! - **prototype**: cloning shapes from a registry of prototypes
//! - **builder**: hamburgers assembled step by step

pub mod builder;
pub mod factory_method;
pub mod prototype;
