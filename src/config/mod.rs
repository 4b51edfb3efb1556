//! Configuration for resolving the current request

pub mod settings;

pub use settings::*;
