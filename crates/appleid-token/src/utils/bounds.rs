//! Bounds checks applied while decoding untrusted input

use crate::error::{Error, Result};
use crate::limits::MAX_CLAIM_STRING_LENGTH;

/// Validate header field size
pub(crate) fn validate_header_field(field: &str, value: &str, max: usize) -> Result<()> {
    if value.len() > max {
        return Err(Error::HeaderFieldTooLong {
            field: field.into(),
            length: value.len(),
            max,
        });
    }
    Ok(())
}

/// Validate claim string size
pub(crate) fn validate_claim_string(claim: &str, value: &str) -> Result<()> {
    if value.len() > MAX_CLAIM_STRING_LENGTH {
        return Err(Error::ClaimStringTooLong {
            claim: claim.into(),
            length: value.len(),
            max: MAX_CLAIM_STRING_LENGTH,
        });
    }
    Ok(())
}
