use crate::error::Error;

/// Apple's assessment of whether the signing-in user is a real person
///
/// Carried in the `real_user_status` claim on the first sign-in from
/// iOS 14 and later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RealUserStatus {
    /// Platform cannot determine the status
    Unsupported,
    /// Apple has no strong signal either way
    Unknown,
    /// Very likely a real user
    LikelyReal,
}

impl RealUserStatus {
    pub const fn as_i64(&self) -> i64 {
        match self {
            RealUserStatus::Unsupported => 0,
            RealUserStatus::Unknown => 1,
            RealUserStatus::LikelyReal => 2,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            RealUserStatus::Unsupported => "unsupported",
            RealUserStatus::Unknown => "unknown",
            RealUserStatus::LikelyReal => "likely_real",
        }
    }

    pub fn is_unsupported(&self) -> bool {
        matches!(self, RealUserStatus::Unsupported)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, RealUserStatus::Unknown)
    }

    pub fn is_likely_real(&self) -> bool {
        matches!(self, RealUserStatus::LikelyReal)
    }
}

impl TryFrom<i64> for RealUserStatus {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(RealUserStatus::Unsupported),
            1 => Ok(RealUserStatus::Unknown),
            2 => Ok(RealUserStatus::LikelyReal),
            other => Err(Error::RealUserStatusInvalid(other)),
        }
    }
}

impl std::fmt::Display for RealUserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
