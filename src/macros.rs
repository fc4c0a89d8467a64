/// Creates `From` implementations for newtypes over `Cow<'static, str>`.
macro_rules! from_impl_for_string_and_str {
	($name:ident) => {
		impl From<String> for $name {
			fn from(value: String) -> Self {
				$name(std::borrow::Cow::Owned(value))
			}
		}
		impl From<&'static str> for $name {
			fn from(value: &'static str) -> Self {
				$name(std::borrow::Cow::Borrowed(value))
			}
		}
	}
}

/// Creates `PartialEq` implementations against `str` and `&str` for newtypes over
/// `Cow<'static, str>`, so values read naturally in comparisons and assertions.
macro_rules! partial_eq_impl_for_str {
	($name:ident) => {
		impl PartialEq<str> for $name {
			fn eq(&self, other: &str) -> bool {
				self.0 == other
			}
		}
		impl PartialEq<&str> for $name {
			fn eq(&self, other: &&str) -> bool {
				self.0 == *other
			}
		}
	}
}

pub(crate) use {from_impl_for_string_and_str, partial_eq_impl_for_str};
