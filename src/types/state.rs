use str_newtype::StrNewType;

use super::is_vschar;

/// Anti-tampering `state` value sent with every authorization request.
pub const DEFAULT_STATE: &str = "go-uber";

/// An OAuth 2.0 state parameter (borrowed).
///
/// Opaque value sent with the authorization request and echoed back by the
/// authorization server on redirect, used to detect forged callbacks.
///
/// See: <https://datatracker.ietf.org/doc/html/rfc6749#section-10.12>
///
/// # Grammar
///
/// ```abnf
/// state = 1*VSCHAR
/// ```
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, StrNewType)]
#[newtype(serde, owned(StateBuf, derive(PartialEq, Eq, PartialOrd, Ord, Hash)))]
pub struct State(str);

impl State {
	/// Validates that the given string is a well-formed state value.
	pub const fn validate_str(s: &str) -> bool {
		Self::validate_bytes(s.as_bytes())
	}

	/// Validates that the given byte slice is a well-formed state value.
	pub const fn validate_bytes(bytes: &[u8]) -> bool {
		let mut i = 0;

		while i < bytes.len() {
			if !is_vschar(bytes[i]) {
				return false;
			}

			i += 1
		}

		i > 0
	}

	/// The [`DEFAULT_STATE`] value.
	pub fn default_state() -> &'static Self {
		// SAFETY: `DEFAULT_STATE` is a non-empty VSCHAR string.
		unsafe { Self::new_unchecked(DEFAULT_STATE) }
	}

	/// Checks the `state` echoed back on a redirect.
	pub fn matches(&self, echoed: Option<&str>) -> bool {
		echoed == Some(self.as_str())
	}
}
