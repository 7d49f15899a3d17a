use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// A profile as delivered by the host's profile collaborator.
///
/// Only the linear-additive kind can be negotiated with. Any other kind is
/// kept by name so the rejection can say what was received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Profile {
    LinearAdditive(AdditiveProfile),
    Other { kind: String },
}

impl Profile {
    pub fn kind(&self) -> &str {
        match self {
            Self::LinearAdditive(_) => "LinearAdditive",
            Self::Other { kind } => kind,
        }
    }
}

impl From<AdditiveProfile> for Profile {
    fn from(profile: AdditiveProfile) -> Self {
        Self::LinearAdditive(profile)
    }
}

impl TryFrom<Profile> for AdditiveProfile {
    type Error = NegotiationError;
    fn try_from(profile: Profile) -> std::result::Result<Self, Self::Error> {
        match profile {
            Profile::LinearAdditive(p) => Ok(p),
            Profile::Other { kind } => Err(NegotiationError::UnsupportedProfile { kind }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_additive_kinds() {
        let profile = Profile::Other {
            kind: "DiscreteValueSetUtilities".into(),
        };
        assert_eq!(profile.kind(), "DiscreteValueSetUtilities");
        assert_eq!(
            AdditiveProfile::try_from(profile),
            Err(NegotiationError::UnsupportedProfile {
                kind: "DiscreteValueSetUtilities".into()
            })
        );
    }
}
