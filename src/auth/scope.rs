//! Scope modeling for Pinterest authorization requests.
//!
//! Pinterest accepts a fixed set of permission buckets. Requests naming anything else are
//! rejected locally, before an authorization URL is produced.

// std
use std::slice::Iter;
// self
use crate::_prelude::*;

/// Errors emitted when validating scopes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum ScopeError {
	/// The scope is not one of [`Scope::ALL`].
	#[error(
		"Scope `{scope}` is not supported; expected one of basic, likes, comments, relationships."
	)]
	Unsupported {
		/// The offending scope string.
		scope: String,
	},
}

/// Permission bucket requested during OAuth authorization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
	/// Read access to public profile data.
	Basic,
	/// Like and unlike pins.
	Likes,
	/// Post and delete comments.
	Comments,
	/// Follow and unfollow users.
	Relationships,
}
impl Scope {
	/// Every scope Pinterest accepts.
	pub const ALL: [Scope; 4] = [Scope::Basic, Scope::Likes, Scope::Comments, Scope::Relationships];

	/// Returns the wire identifier for the scope.
	pub const fn as_str(self) -> &'static str {
		match self {
			Scope::Basic => "basic",
			Scope::Likes => "likes",
			Scope::Comments => "comments",
			Scope::Relationships => "relationships",
		}
	}
}
impl AsRef<str> for Scope {
	fn as_ref(&self) -> &str {
		self.as_str()
	}
}
impl Display for Scope {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for Scope {
	type Err = ScopeError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Scope::ALL
			.into_iter()
			.find(|scope| scope.as_str() == s)
			.ok_or_else(|| ScopeError::Unsupported { scope: s.to_owned() })
	}
}

/// Validated scopes in the order the caller requested them.
///
/// Unlike a set, the list keeps caller order (and any repeats) because the authorization URL
/// reproduces the request verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScopeList(Vec<Scope>);
impl ScopeList {
	/// Validates every entry against [`Scope::ALL`].
	pub fn new<I, S>(scopes: I) -> Result<Self, ScopeError>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		scopes
			.into_iter()
			.map(|scope| scope.as_ref().parse())
			.collect::<Result<Vec<_>, _>>()
			.map(Self)
	}

	/// Number of requested scopes.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns true if no scopes were requested.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Iterator over the requested scopes.
	pub fn iter(&self) -> Iter<'_, Scope> {
		self.0.iter()
	}

	/// Joins the scopes with `delimiter`.
	pub fn join(&self, delimiter: char) -> String {
		let mut buf = String::new();

		for (idx, scope) in self.0.iter().enumerate() {
			if idx > 0 {
				buf.push(delimiter);
			}

			buf.push_str(scope.as_str());
		}

		buf
	}
}
impl Default for ScopeList {
	fn default() -> Self {
		Self(vec![Scope::Basic])
	}
}
impl Display for ScopeList {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.join('+'))
	}
}
impl From<Scope> for ScopeList {
	fn from(value: Scope) -> Self {
		Self(vec![value])
	}
}
impl<'a> IntoIterator for &'a ScopeList {
	type IntoIter = Iter<'a, Scope>;
	type Item = &'a Scope;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn scopes_keep_caller_order() {
		let scopes = ScopeList::new(["relationships", "basic", "likes"])
			.expect("Known scopes should validate.");

		assert_eq!(scopes.len(), 3);
		assert_eq!(scopes.join('+'), "relationships+basic+likes");
		assert_eq!(scopes.to_string(), "relationships+basic+likes");
	}

	#[test]
	fn unknown_scope_is_rejected() {
		let err = ScopeList::new(["basic", "superpower"]).expect_err("Unknown scopes must fail.");

		assert_eq!(err, ScopeError::Unsupported { scope: "superpower".into() });
	}

	#[test]
	fn scope_parsing_is_case_sensitive() {
		assert!(Scope::from_str("Basic").is_err());
		assert_eq!(Scope::from_str("comments"), Ok(Scope::Comments));
	}

	#[test]
	fn default_list_requests_basic_only() {
		assert_eq!(ScopeList::default().iter().copied().collect::<Vec<_>>(), vec![Scope::Basic]);
	}

	#[test]
	fn scopes_deserialize_from_wire_names() {
		let scopes: ScopeList = serde_json::from_str("[\"likes\",\"comments\"]")
			.expect("Wire scope names should deserialize.");

		assert_eq!(scopes.join(' '), "likes comments");
	}
}
