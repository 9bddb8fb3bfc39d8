/// Error types for terrain construction and the viewer front-end
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TerrainError {
    #[error("invalid terrain dimension {width}x{depth}: both sides must be at least 1")]
    InvalidDimension { width: usize, depth: usize },

    #[error("terrain {width}x{depth} has more vertices than a u32 index buffer can address")]
    TooManyVertices { width: usize, depth: usize },
}

#[derive(Debug, Error)]
pub enum ViewerError {
    #[error(transparent)]
    Terrain(#[from] TerrainError),

    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("presentation surface error: {0}")]
    Surface(#[from] softbuffer::SoftBufferError),
}
