use thiserror::Error;

/// Errors raised while configuring or running a simulation
#[derive(Error, Debug)]
pub enum Error {
    /// A family needs at least one generation
    #[error("Invalid generation count: {generations} (must be at least 1)")]
    InvalidGenerations { generations: u32 },

    /// The family would hold more people than can be addressed
    #[error("Too many generations: {generations} (at most {max} are supported)")]
    TooManyGenerations { generations: u32, max: u32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
