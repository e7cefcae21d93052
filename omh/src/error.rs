//! Error types used by the crate.

use thiserror::Error;

/// OMH Maps error type.
///
/// Location flows surface these through failure callbacks; everything else
/// returns them as `Result` errors. Backends never fail a styling call for
/// an unsupported feature — those degrade with a logged warning instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OmhError {
    /// The caller lacks the permission required by the operation.
    #[error("location permission denied")]
    PermissionDenied,
    /// No location fix could be produced.
    #[error("location is null or unavailable")]
    NullLocation,
    /// No backend is registered under the requested provider path.
    #[error("invalid map provider: {0}")]
    InvalidProvider(String),
    /// Generic backend failure - details are inside.
    #[error("{0}")]
    Api(String),
}
