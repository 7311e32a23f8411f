//! Bearer-token authentication.
//!
//! This service only *validates* tokens; issuance (login, refresh) is an
//! external collaborator. [`jwt::generate_access_token`] exists so tests
//! and tooling can mint tokens against a known secret.

pub mod jwt;
