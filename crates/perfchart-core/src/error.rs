// File: crates/perfchart-core/src/error.rs
// Summary: Error type for figure rendering.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },
    #[error("encode PNG failed")]
    Encode,
    #[error("invalid layout: {0}")]
    InvalidLayout(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ChartError>;
