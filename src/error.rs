use algograph::graph::VertexId;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("page {0:?} is not in the graph")]
    InvalidPage(VertexId),

    #[error("page {0:?} is not in the corpus")]
    UnknownPage(String),

    #[error("damping factor must lie in [0, 1], got {0}")]
    InvalidDamping(f64),

    #[error("tolerance must be finite and non-negative, got {0}")]
    InvalidTolerance(f64),

    #[error("at least one sample is required")]
    InvalidSampleCount,

    #[error("graph has no pages")]
    EmptyGraph,

    #[error("no convergence after {iterations} sweeps, last delta {delta}")]
    DidNotConverge { iterations: usize, delta: f64 },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub(crate) fn check_damping(damping: f64) -> Result<f64, Error> {
    if (0.0..=1.0).contains(&damping) {
        Ok(damping)
    } else {
        Err(Error::InvalidDamping(damping))
    }
}
