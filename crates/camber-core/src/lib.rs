pub mod config;
pub mod error;
pub mod tolerance;
pub mod traits;

pub use config::KernelConfig;
pub use error::{CamberError, Result};
pub use tolerance::Tolerance;
