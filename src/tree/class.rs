use std::borrow::Cow;
use std::fmt::{Display, Formatter};
use crate::macros::{from_impl_for_string_and_str, partial_eq_impl_for_str};

/// A class name in its internal form, where `/` separates the package parts, like
/// `java/lang/Object`.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ClassName(Cow<'static, str>);

impl ClassName {
	pub const JAVA_LANG_OBJECT: ClassName = ClassName(Cow::Borrowed("java/lang/Object"));

	/// Renders the name the way Java source refers to the class, with `.` separating the
	/// package parts, like `java.lang.Object`.
	pub fn java_name(&self) -> String {
		self.0.replace('/', ".")
	}
}

impl Display for ClassName {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

from_impl_for_string_and_str!(ClassName);
partial_eq_impl_for_str!(ClassName);
