//! Error taxonomy for the negotiation engine.
use thiserror::Error;

/// Errors raised by the negotiation engine.
///
/// Every variant is a programming or configuration error. Nothing here is
/// retried; callers surface them to the operator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NegotiationError {
    /// Model or ranking queried before the domain was set.
    #[error("domain is not initialized")]
    UninitializedDomain,

    /// Policy invoked before the self profile was received.
    #[error("profile is not initialized")]
    UninitializedProfile,

    /// Self profile is not a linear-additive utility space.
    #[error("can not handle profile of kind {kind}")]
    UnsupportedProfile {
        /// Kind reported by the host for the rejected profile.
        kind: String,
    },

    /// Bid space enumerates zero bids.
    #[error("domain contains no bids")]
    EmptyDomain,

    /// Bid space has more bids than can be counted.
    #[error("domain contains too many bids to enumerate")]
    OversizedDomain,

    /// Bid or vote requested after the session finished.
    #[error("negotiation session has ended")]
    SessionEnded,
}

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, NegotiationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            NegotiationError::UnsupportedProfile {
                kind: "UtilitySpace".into()
            }
            .to_string(),
            "can not handle profile of kind UtilitySpace"
        );
        assert_eq!(
            NegotiationError::EmptyDomain.to_string(),
            "domain contains no bids"
        );
    }
}
