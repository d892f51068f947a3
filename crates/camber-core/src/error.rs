use thiserror::Error;

#[derive(Debug, Error)]
pub enum CamberError {
    #[error("Degenerate tangent at t={t}: velocity vanishes and no previous frame exists")]
    DegenerateTangent { t: f64 },

    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Geometry error: {0}")]
    Geometry(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CamberError>;
