//! Decode and verify Sign in with Apple identity tokens.
//!
//! ```no_run
//! use appleid_token::{ExpectedClient, Token, VerificationRequest, Verifier};
//!
//! # async fn run(id_token: &str) -> appleid_token::Result<()> {
//! let token = Token::decode(id_token)?;
//! let request = VerificationRequest::new()
//!     .client(ExpectedClient::new("com.example.signin"))
//!     .nonce("n-0S6_WzA2Mj")
//!     .code("c4a5e8b2f1d24c6a9e0b7d3f");
//!
//! Verifier::default().verify(&token, &request).await?;
//! println!("signed in: {}", token.claims().subject());
//! # Ok(())
//! # }
//! ```

mod error;
mod jwks;
mod verifier;

// Internal modules
pub(crate) mod algorithm;
pub(crate) mod claims;
pub(crate) mod clock;
pub(crate) mod codec;
pub(crate) mod hash;
pub(crate) mod header;
pub(crate) mod real_user_status;
pub(crate) mod remote;
pub(crate) mod source;
pub(crate) mod url;
pub(crate) mod utils;

pub(crate) mod limits;

// Public Interface
pub use algorithm::AlgorithmType;
pub use claims::{ClaimSet, parse_lax_boolean};
pub use clock::{Clock, FixedClock, SystemClock};
pub use codec::{Token, decode, encode};
pub use error::{Error, Result};
pub use hash::{HashBinder, matches};
pub use header::Header;
pub use jwks::jwk::Jwk;
pub use jwks::{KeySet, PublicKey};
pub use real_user_status::RealUserStatus;
pub use remote::{APPLE_JWKS_URI, JwksClient};
pub use source::{KeySetSource, StaticKeySet};
pub use verifier::{
    APPLE_ISSUER, Claim, ExpectedClient, FailedClaims, VerificationRequest, Verifier,
    failed_claims, verify_signature,
};
