// public modules
pub mod cli;
pub mod datagen;
pub mod differential;
pub mod error;
pub mod report;
pub mod timing;

// public uses
pub use error::{Error, Result};
