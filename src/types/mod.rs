//! OAuth 2.0 string types.
//!
//! Validated against the grammar of
//! [RFC 6749](https://datatracker.ietf.org/doc/html/rfc6749). All types come
//! in borrowed/owned pairs (e.g. [`AccessToken`] / [`AccessTokenBuf`])
//! following the same pattern as [`str`] / [`String`].
mod access_token;
mod scope;
mod state;

pub use access_token::*;
pub use scope::*;
pub use state::*;

/// Returns `true` if the byte is a VSCHAR (visible ASCII character plus
/// space), i.e. in the range `0x20..=0x7E`.
const fn is_vschar(c: u8) -> bool {
	c >= 0x20 && c <= 0x7e
}

/// Returns `true` if the byte is a NQCHAR, i.e. a VSCHAR other than space,
/// `"` and `\`.
const fn is_nqchar(c: u8) -> bool {
	c == 0x21 || (c >= 0x23 && c <= 0x5b) || (c >= 0x5d && c <= 0x7e)
}
