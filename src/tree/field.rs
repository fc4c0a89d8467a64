use std::borrow::Cow;
use std::fmt::{Display, Formatter};
use crate::macros::{from_impl_for_string_and_str, partial_eq_impl_for_str};
use crate::tree::class::ClassName;

/// A reference to a field, as used by the field access instructions.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct FieldRef {
	pub class: ClassName,
	pub name: FieldName,
	pub desc: FieldDescriptor,
}

#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct FieldName(Cow<'static, str>);

impl Display for FieldName {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

from_impl_for_string_and_str!(FieldName);
partial_eq_impl_for_str!(FieldName);

/// A field descriptor, like `I` or `[Ljava/lang/String;`.
///
/// See [`FieldDescriptor::parse`] for getting the [type][crate::tree::descriptor::Type] it
/// describes.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct FieldDescriptor(pub(crate) Cow<'static, str>);

from_impl_for_string_and_str!(FieldDescriptor);
partial_eq_impl_for_str!(FieldDescriptor);
