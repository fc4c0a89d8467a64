use crate::tree::descriptor::Type;

/// The type filter of an instrumentation location.
///
/// Policy configuration declares "instrument accesses on type T"; this decides, per access
/// site, whether the declared type applies there. The match is deliberately wide: a named
/// filter fires when it equals either the container's type name or the element's type name,
/// so imprecision leads to instrumentation firing rather than silently skipping a site.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum TypeFilter {
	/// Matches every access site.
	Wildcard,
	/// Matches sites whose container or element carries this Java type name,
	/// like `int[]` or `java.lang.String`.
	Named(String),
}

impl TypeFilter {
	/// Parses the string form used by policy configuration, where leaving the type out (the
	/// empty string) means "any type".
	pub fn from_config(declared_type: &str) -> TypeFilter {
		if declared_type.is_empty() {
			TypeFilter::Wildcard
		} else {
			TypeFilter::Named(declared_type.to_owned())
		}
	}

	/// Whether this filter applies to an access site with the given container and element
	/// type names.
	pub fn matches(&self, container_name: &str, element_name: &str) -> bool {
		match self {
			TypeFilter::Wildcard => true,
			TypeFilter::Named(name) => name == container_name || name == element_name,
		}
	}

	/// Like [`TypeFilter::matches`], with the names rendered from descriptor types, usually
	/// the pair derived by
	/// [`ArrayAccess::site_types`][crate::instrument::ArrayAccess::site_types].
	pub fn matches_types(&self, container: &Type, element: &Type) -> bool {
		match self {
			TypeFilter::Wildcard => true,
			TypeFilter::Named(_) => self.matches(&container.java_name(), &element.java_name()),
		}
	}
}
