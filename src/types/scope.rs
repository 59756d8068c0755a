use str_newtype::StrNewType;

use super::is_nqchar;

/// A single OAuth 2.0 scope token (borrowed).
///
/// The API knows `profile` (basic profile of the user), `history` (trip
/// history) and `request` (ride requests on behalf of the user).
///
/// See: <https://datatracker.ietf.org/doc/html/rfc6749#section-3.3>
///
/// # Grammar
///
/// ```abnf
/// scope-token = 1*( %x21 / %x23-5B / %x5D-7E )
/// ```
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, StrNewType)]
#[newtype(
	serde,
	owned(ScopeTokenBuf, derive(PartialEq, Eq, PartialOrd, Ord, Hash))
)]
pub struct ScopeToken(str);

impl ScopeToken {
	/// Validates that the given string is a well-formed scope token.
	pub const fn validate_str(s: &str) -> bool {
		Self::validate_bytes(s.as_bytes())
	}

	/// Validates that the given byte slice is a well-formed scope token.
	pub const fn validate_bytes(bytes: &[u8]) -> bool {
		let mut i = 0;

		while i < bytes.len() {
			if !is_nqchar(bytes[i]) {
				return false;
			}

			i += 1;
		}

		i > 0
	}
}

#[macro_export]
macro_rules! scope_token {
	($value:literal) => {{
		match $crate::ScopeToken::new($value) {
			Ok(value) => value,
			Err(_) => panic!("invalid scope token"),
		}
	}};
}

/// An OAuth 2.0 scope value (borrowed).
///
/// A scope is a space-separated list of [`ScopeToken`]s.
///
/// # Grammar
///
/// ```abnf
/// scope       = scope-token *( SP scope-token )
/// scope-token = 1*NQCHAR
/// ```
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, StrNewType)]
#[newtype(serde, owned(ScopeBuf, derive(PartialEq, Eq, PartialOrd, Ord, Hash)))]
pub struct Scope(str);

impl Scope {
	/// Validates that the given string is a well-formed scope.
	pub const fn validate_str(s: &str) -> bool {
		Self::validate_bytes(s.as_bytes())
	}

	/// Validates that the given byte slice is a well-formed scope.
	pub const fn validate_bytes(bytes: &[u8]) -> bool {
		let mut i = 0;

		let mut expect_token = true;
		while expect_token {
			expect_token = false;
			let mut scope_token_empty = true;

			while i < bytes.len() {
				match bytes[i] {
					c if is_nqchar(c) => {
						scope_token_empty = false;
						i += 1;
					}
					b' ' => {
						expect_token = true;
						i += 1;
						break;
					}
					_ => return false,
				}
			}

			if scope_token_empty {
				return false;
			}
		}

		true
	}

	/// Returns `true` if this scope contains the given token.
	pub fn contains(&self, token: &ScopeToken) -> bool {
		self.iter().any(|t| t == token)
	}

	/// Returns an iterator over the individual scope tokens.
	pub fn iter(&self) -> ScopeIter<'_> {
		ScopeIter(self.0.split(' '))
	}
}

impl<'a> IntoIterator for &'a Scope {
	type IntoIter = ScopeIter<'a>;
	type Item = &'a ScopeToken;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

/// Iterator over the individual [`ScopeToken`]s in a [`Scope`].
pub struct ScopeIter<'a>(std::str::Split<'a, char>);

impl<'a> Iterator for ScopeIter<'a> {
	type Item = &'a ScopeToken;

	fn next(&mut self) -> Option<Self::Item> {
		self.0
			.next()
			.map(|t| unsafe { ScopeToken::new_unchecked(t) })
	}
}

impl ScopeBuf {
	/// Joins scope tokens with spaces.
	///
	/// Returns `None` if the iterator yields no tokens.
	pub fn from_tokens<'a>(tokens: impl IntoIterator<Item = &'a ScopeToken>) -> Option<Self> {
		let mut result = String::new();

		for token in tokens {
			if !result.is_empty() {
				result.push(' ');
			}

			result.push_str(token.as_str());
		}

		if result.is_empty() {
			None
		} else {
			Some(Self(result))
		}
	}
}
