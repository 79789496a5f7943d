pub mod config;
pub mod error;
pub mod highlight;
pub mod io;
pub mod model;
pub mod pipeline;
pub mod reference;
pub mod reshape;

pub use error::{Result, ToolError};
