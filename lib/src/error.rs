use std::fmt;

/// Failures of the rendering pipeline that callers may want to match on.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// No triangulation exists, either too few points or all of them on one line.
    InvalidPointSet { points: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidPointSet { points } => write!(
                f,
                "cannot triangulate {} points, need at least three that are not collinear",
                points
            ),
        }
    }
}

impl std::error::Error for Error {}
