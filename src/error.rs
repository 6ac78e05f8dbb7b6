use thiserror::Error;

/// Errors that stop a solve before any root finding happens.
///
/// Numerical trouble during iteration is never reported here: coincident
/// estimates are guarded locally and hitting the iteration cap only clears
/// [`crate::Roots::converged`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("no coefficients were given")]
    NoCoefficients,

    #[error("invalid coefficient: {token}")]
    InvalidCoefficient { token: String },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid_coefficient(token: &str) -> Self {
        Self::InvalidCoefficient {
            token: token.to_owned(),
        }
    }
}
