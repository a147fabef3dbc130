//! Fixtures shared by the integration tests
#![allow(dead_code)]

use appleid_token::{Jwk, KeySet};

/// Header and claims of a token issued by Apple (kid AIDOPK1, carries at_hash)
pub const APPLE_SIGNING_INPUT: &str = "eyJraWQiOiJBSURPUEsxIiwiYWxnIjoiUlMyNTYifQ.eyJpc3MiOiJodHRwczovL2FwcGxlaWQuYXBwbGUuY29tIiwiYXVkIjoianAueWF1dGguc2lnbmluLnNlcnZpY2UyIiwiZXhwIjoxNTU5NzA5ODkwLCJpYXQiOjE1NTk3MDkyOTAsInN1YiI6IjAwMDcyMy4yNWRhOGJlMzMyOTY0OTkxODk4NjMwOTQ3MjAyZmVmMC4wNDAyIiwiYXRfaGFzaCI6InpqUmlUN2QzVHFRNVM3cEZkbzZxWGcifQ";

/// Apple's signature over [`APPLE_SIGNING_INPUT`]
pub const APPLE_SIGNATURE: &str = "jDV-AVFM-Yx_lxc-hsJNF2mgD2PoRlQ8SJjharKom87pIKR1frQfaY_apO-AxyDrhvB3qOdfhZql08EHBHNWATlX3l6sAKL-bUPH6bzHxIZTWHZ9IOimPyvTOJNFyJWLsm6lGcqemKB1UQG2MQ06lI9qc6C6T8_obv2HPJ-Sm8OBE9z-CDyKGcFZ-R8b2Ut6TibmRyQ-kmB7na6ay9kGXm56I_TeA2QCMJGKH_X8C2M7kBPsO_WrYuogA3tnWLT8wi0TPD5zKnnBH0bXLgjeyE2lYRgboQttX6WqTdR0dN-mLi8ShTPEGUCkC7_jFJH9XpC7LfCeKl9tD3qzC_Dx1Q";

pub const APPLE_CLIENT: &str = "jp.yauth.signin.service2";
pub const APPLE_ISSUED_AT: i64 = 1559709290;

/// Same token with the issuer replaced by an unknown one
pub const UNKNOWN_ISSUER_SIGNING_INPUT: &str = "eyJraWQiOiJBSURPUEsxIiwiYWxnIjoiUlMyNTYifQ.eyJpc3MiOiJodHRwczovL3Vua25vd24uZXhhbXBsZS5jb20iLCJhdWQiOiJqcC55YXV0aC5zaWduaW4uc2VydmljZTIiLCJleHAiOjE1NTk3MDk4OTAsImlhdCI6MTU1OTcwOTI5MCwic3ViIjoiMDAwNzIzLjI1ZGE4YmUzMzI5NjQ5OTE4OTg2MzA5NDcyMDJmZWYwLjA0MDIiLCJhdF9oYXNoIjoiempSaVQ3ZDNUcVE1UzdwRmRvNnFYZyJ9";

/// Header and claims of an Apple token with nonce support and string booleans
pub const APPLE_NONCE_SIGNING_INPUT: &str = "eyJraWQiOiI4NkQ4OEtmIiwiYWxnIjoiUlMyNTYifQ.eyJpc3MiOiJodHRwczovL2FwcGxlaWQuYXBwbGUuY29tIiwiYXVkIjoianAueWF1dGguc2lnbmluLnNlcnZpY2UzIiwiZXhwIjoxNTg1MTE2NzMyLCJpYXQiOjE1ODUxMTYxMzIsInN1YiI6IjAwMDcyMy4yNWRhOGJlMzMyOTY0OTkxODk4NjMwOTQ3MjAyZmVmMC4wNDAyIiwibm9uY2UiOiI4MDliMzFmM2E4ZDQxOTMwIiwiY19oYXNoIjoiY0JvOXREYkRZOWlrYTFXNlZmTzBCdyIsImVtYWlsIjoiZm9vYmFyQHByaXZhdGVyZWxheS5hcHBsZWlkLmNvbSIsImVtYWlsX3ZlcmlmaWVkIjoidHJ1ZSIsImlzX3ByaXZhdGVfZW1haWwiOiJ0cnVlIiwiYXV0aF90aW1lIjoxNTg1MTE2MTMyLCJub25jZV9zdXBwb3J0ZWQiOnRydWV9";

pub const APPLE_NONCE_ISSUED_AT: i64 = 1585116132;

/// Base64URL of "invalid"
pub const INVALID_SIGNATURE: &str = "aW52YWxpZA";

/// RSA-2048 modulus of the fixture key
pub const FIXTURE_N: &str = "r74BxerNVUm0d-roq8uPEM5INZ4HR0CeC-ObJgs7Yu8EMIeeKeX5Lgc_aw3JQx-d4k2Mf5ymdJaYtOqnkPLJc_94CkfHu-5uZglATC_iIJJZgEWO5BIF9MPM-k5o-iVE55aK4w-uNXSVkm3W-gitWoo3XzVLisPSv9Vhdl8_pFQl9uxUAl_HaqHfHOc7yiVvPRhlqo9G-uEXDIbG8i2IIjmMxqSsjKhMVBgqQz_9dO248lxbDyiMKp9d9lTCJjHwj6kzDzlVbLQOfYSS_MXPyYHlqTUNsKedHfi1Jx_nRETpBlXwxx9gLKb1kGNfo-txT1mxSdvHXB6njEipEDt4FQ";
pub const FIXTURE_E: &str = "AQAB";

/// RS256 token signed by the fixture key (kid TEST1)
///
/// Claims: aud com.example.signin, iat 1700000000, exp 1700000600,
/// nonce n-0S6_WzA2Mj (supported), at_hash/c_hash/s_hash over
/// access-token-value / auth-code-value / state-value,
/// real_user_status 2, email_verified "true", is_private_email true.
pub const SIGNED_TOKEN: &str = "eyJraWQiOiJURVNUMSIsImFsZyI6IlJTMjU2In0.eyJpc3MiOiJodHRwczovL2FwcGxlaWQuYXBwbGUuY29tIiwiYXVkIjoiY29tLmV4YW1wbGUuc2lnbmluIiwiZXhwIjoxNzAwMDAwNjAwLCJpYXQiOjE3MDAwMDAwMDAsInN1YiI6IjAwMTIzNC41ZjZlN2Q4YzliMGEuMDEwMiIsIm5vbmNlIjoibi0wUzZfV3pBMk1qIiwibm9uY2Vfc3VwcG9ydGVkIjp0cnVlLCJhdF9oYXNoIjoiaUpnVHktdXZMNG9NbFdfYUJrd25rdyIsImNfaGFzaCI6ImxPcHdkOWwtLUlMYWNoaDVncjNvWWciLCJzX2hhc2giOiJwckF3N1FjdGVLTEt5a0xvbnFNaFZnIiwiZW1haWwiOiJ1c2VyQHByaXZhdGVyZWxheS5hcHBsZWlkLmNvbSIsImVtYWlsX3ZlcmlmaWVkIjoidHJ1ZSIsImlzX3ByaXZhdGVfZW1haWwiOnRydWUsInJlYWxfdXNlcl9zdGF0dXMiOjIsImF1dGhfdGltZSI6MTcwMDAwMDAwMH0.YtN-G0dWZpzGAKniBIMlGS16_8r_N16oh2hR6kyzG4qvZpO7_QhUrNJk4zbDlbUj-Z6fO8fS5fjXnNgTKBFF2gknLTFPS_Zd2dkUASq_7vZYykBUzBw8ZcaJWp6TT25dE894EA-0rr2lWmEodl50IZZ1jCieUJrdkQWfHAE64oDgR04iD04kav1F4Vei-LBdoiXT-ZydSPdTsAbo3L-DkKCvAHakrxlZaZfsx7WUxOymvOl9xjeYgmcPclKw_2XgUYBr2XBJtg2HQ1hXZMJuEaLXb0BhyQ_LQufTUxyLevZEcuuKvSWNN3suIKu07-g3JSaPLHofZIvyqx4LA_PKvQ";

pub const SIGNED_CLIENT: &str = "com.example.signin";
pub const SIGNED_ISSUED_AT: i64 = 1700000000;
pub const SIGNED_EXPIRES_AT: i64 = 1700000600;

/// Key set holding the fixture key under `kid`
pub fn fixture_key_set(kid: &str) -> KeySet {
    KeySet::new(vec![Jwk::rsa(kid, FIXTURE_N, FIXTURE_E)])
}

/// Key set document as Apple serves it, holding the fixture key
pub fn fixture_jwks_json() -> String {
    format!(
        r#"{{"keys":[{{"kty":"RSA","kid":"eXaunmL","use":"sig","alg":"RS256","n":"4dGQ7bQK8LgILOdLsYzfZjkEAoQeVC_aqyc8GC6RX7dq_KvRAQAWPvkam8VQv4GK5T4ogklEKEvj5ISBamdDNq1n52TpxQwI2EqxSk7I9fKPKhRt4F8-2yETlYvye-2s6NeWJim0KBtOVrk0gWvEDgd6WOqJl_yt5WBISvILNyVg1qAAM8JeX6dRPosahRVDjA52G2X-Tip84wqwyRpUlq2ybzcLh3zyhCitBOebiRWDQfG26EH9lTlJhll-p_Dg8vAXxJLIJ4SNLcqgFeZe4OfHLgdzMvxXZJnPp_VgmkcpUdRotazKZumj6dBPcXI_XID4Z4Z3OM1KrZPJNdUhxw","e":"AQAB"}},{{"kty":"RSA","kid":"TEST1","use":"sig","alg":"RS256","n":"{FIXTURE_N}","e":"{FIXTURE_E}"}}]}}"#
    )
}

/// Join header/claims segments with a signature segment
pub fn with_signature(signing_input: &str, signature: &str) -> String {
    format!("{signing_input}.{signature}")
}
