use str_newtype::StrNewType;

use super::is_vschar;

/// Access Token.
///
/// Bearer credential returned by the token endpoint and sent with every
/// OAuth-scoped API call.
///
/// # Grammar
///
/// ```abnf
/// access-token = 1*VSCHAR
/// ```
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, StrNewType)]
#[newtype(
	serde,
	owned(AccessTokenBuf, derive(PartialEq, Eq, PartialOrd, Ord, Hash))
)]
pub struct AccessToken(str);

impl AccessToken {
	pub const fn validate_str(s: &str) -> bool {
		Self::validate_bytes(s.as_bytes())
	}

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

	/// Value of the `Authorization` header carrying this token.
	pub fn bearer_header(&self) -> String {
		format!("Bearer {}", self.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn valid_access_token() {
		assert!(AccessToken::new("tok").is_ok());
		assert!(AccessToken::new("EE1IDxytP04tJ767GbjH7ED9PpGmYvL").is_ok());
	}

	#[test]
	fn empty_access_token_is_invalid() {
		assert!(AccessToken::new("").is_err());
		assert!(AccessTokenBuf::new(String::new()).is_err());
	}

	#[test]
	fn access_token_rejects_control_chars() {
		assert!(AccessToken::new("abc\ndef").is_err());
		assert!(AccessToken::new("\x7f").is_err());
	}

	#[test]
	fn bearer_header() {
		let token = AccessToken::new("tok").unwrap();
		assert_eq!(token.bearer_header(), "Bearer tok");
	}
}
