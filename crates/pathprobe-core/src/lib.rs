pub mod config;
pub mod logging;

pub mod classifier;
pub mod debounce;
pub mod error;
pub mod probe;
pub mod registry;
pub mod url_model;

pub use error::ProbeError;
