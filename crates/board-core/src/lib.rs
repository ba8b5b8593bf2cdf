pub mod character;
pub mod chart;
pub mod config;
pub mod dataset;
pub mod error;
pub mod io;
pub mod labels;
pub mod paths;
pub mod stats;
pub mod types;

pub use error::{BoardError, Result};
