use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    /// The drawing surface could not be obtained; the loop never starts.
    #[error("Surface unavailable: {0}")]
    SurfaceUnavailable(String),

    /// A single tick failed; the loop halts until restart.
    #[error("Game loop error: {0}")]
    TickFault(String),

    /// Writing to or configuring the terminal failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
