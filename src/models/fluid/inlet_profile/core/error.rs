use thiserror::Error;
use uom::si::f64::{Length, Ratio};

use crate::support::constraint::ConstraintError;

/// Errors that can occur while building or evaluating a power-law profile.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[non_exhaustive]
pub enum ProfileError {
    /// A geometry or profile parameter violates its numeric constraint.
    #[error("invalid {parameter}: {source}")]
    InvalidParameter {
        /// Which parameter was rejected.
        parameter: &'static str,

        #[source]
        source: ConstraintError,
    },

    /// The boundary layers on the two walls would overlap.
    #[error("boundary layer fraction {del_over_h:?} exceeds half the channel height")]
    BoundaryLayerTooThick { del_over_h: Ratio },

    /// A position lies outside the channel.
    ///
    /// Only returned under [`DomainPolicy::Reject`](super::DomainPolicy::Reject).
    #[error("position {position:?} lies outside the channel of height {height:?}")]
    OutsideChannel {
        /// Wall-normal position as supplied by the host.
        position: Length,
        height: Length,
    },

    /// The configured wall-normal axis does not exist on the host's centroids.
    #[error("wall-normal axis {axis} is out of range for {dimensions}-dimensional centroids")]
    AxisOutOfRange { axis: usize, dimensions: usize },
}

impl ProfileError {
    /// Returns a mapper that tags a constraint violation with its parameter.
    pub(super) fn invalid(parameter: &'static str) -> impl Fn(ConstraintError) -> Self {
        move |source| Self::InvalidParameter { parameter, source }
    }
}
