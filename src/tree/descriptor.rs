use std::iter::Peekable;
use std::str::Chars;
use anyhow::{anyhow, bail, Context, Result};
use crate::tree::class::ClassName;
use crate::tree::field::FieldDescriptor;

/// Represents a type.
///
/// In case of an array, use the [`Type::Array`] variant, and never with a dimension of zero:
/// the [`Eq`] and [`PartialEq`] implementations treat `Type::Array(0, ArrayType::D)` and
/// `Type::D` as different values.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Type {
	/// A `byte`. In rust, this is a `i8`.
	B,
	/// A `char`.
	C,
	/// A `double`. In rust, this is a `f64`.
	D,
	/// A `float`. In rust, this is a `f32`.
	F,
	/// An `int`. In rust, this is a `i32`.
	I,
	/// A `long`. In rust, this is a `i64`.
	J,
	/// A `short`. In rust, this is a `i16`.
	S,
	/// A `boolean`. In rust, this is a `bool`.
	Z,
	/// An instance of the class specified by [`ClassName`].
	Object(ClassName),
	/// An array type, represented by the dimension and the inner [`ArrayType`].
	Array(u8, ArrayType),
}

/// The type of the innermost elements of a [`Type::Array`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ArrayType {
	B,
	C,
	D,
	F,
	I,
	J,
	S,
	Z,
	Object(ClassName),
}

impl From<ArrayType> for Type {
	fn from(value: ArrayType) -> Type {
		match value {
			ArrayType::B => Type::B,
			ArrayType::C => Type::C,
			ArrayType::D => Type::D,
			ArrayType::F => Type::F,
			ArrayType::I => Type::I,
			ArrayType::J => Type::J,
			ArrayType::S => Type::S,
			ArrayType::Z => Type::Z,
			ArrayType::Object(class_name) => Type::Object(class_name),
		}
	}
}

impl Type {
	/// Renders the name Java source uses for this type.
	///
	/// Primitives render as their keyword, classes as their dotted name, and arrays with one
	/// `[]` pair per dimension:
	/// ```
	/// # use pretty_assertions::assert_eq;
	/// use tripwire::tree::descriptor::{ArrayType, Type};
	///
	/// assert_eq!(Type::I.java_name(), "int");
	/// assert_eq!(Type::Object("java/lang/String".into()).java_name(), "java.lang.String");
	/// assert_eq!(Type::Array(2, ArrayType::Z).java_name(), "boolean[][]");
	/// ```
	pub fn java_name(&self) -> String {
		match self {
			Type::B => "byte".to_owned(),
			Type::C => "char".to_owned(),
			Type::D => "double".to_owned(),
			Type::F => "float".to_owned(),
			Type::I => "int".to_owned(),
			Type::J => "long".to_owned(),
			Type::S => "short".to_owned(),
			Type::Z => "boolean".to_owned(),
			Type::Object(class_name) => class_name.java_name(),
			Type::Array(array_dimension, array_type) => {
				let mut s = Type::from(array_type.clone()).java_name();
				for _ in 0..*array_dimension {
					s.push_str("[]");
				}
				s
			},
		}
	}
}

// The grammar for field descriptors is:
//   FieldDescriptor:
//     FieldType
//
//   FieldType:
//     "B" | "C" | "D" | "F" | "I" | "J" | "S" | "Z" |
//     "L" ClassName ";" |
//     "[" FieldType
fn read_field_type(chars: &mut Peekable<Chars>) -> Result<Type> {
	let mut array_dimension: u8 = 0;
	while chars.next_if_eq(&'[').is_some() {
		array_dimension = array_dimension.checked_add(1)
			.ok_or_else(|| anyhow!("more than 255 array dimensions in descriptor"))?;
	}

	let char = chars.next().ok_or_else(|| anyhow!("unexpected abrupt ending of descriptor"))?;
	let array_type = match char {
		'B' => ArrayType::B,
		'C' => ArrayType::C,
		'D' => ArrayType::D,
		'F' => ArrayType::F,
		'I' => ArrayType::I,
		'J' => ArrayType::J,
		'S' => ArrayType::S,
		'Z' => ArrayType::Z,
		'L' => {
			let mut s = String::new();

			let mut char = chars.next().ok_or_else(|| anyhow!("unexpected abrupt ending of descriptor"))?;
			while char != ';' {
				s.push(char);

				char = chars.next().ok_or_else(|| anyhow!("unexpected abrupt ending of descriptor"))?;
			}

			if s.is_empty() {
				bail!("empty class name in descriptor");
			}

			ArrayType::Object(ClassName::from(s))
		},
		x => {
			bail!("unexpected char {x:?} in descriptor");
		},
	};

	Ok(if array_dimension == 0 {
		array_type.into()
	} else {
		Type::Array(array_dimension, array_type)
	})
}

impl FieldDescriptor {
	/// Attempts to parse this field descriptor.
	///
	/// A field descriptor is defined by the [grammar](https://docs.oracle.com/javase/specs/jvms/se22/html/jvms-4.html#jvms-4.3.2) in the
	/// Java Virtual Machine Specification.
	///
	/// # Examples
	/// ```
	/// # use pretty_assertions::assert_eq;
	/// use tripwire::tree::descriptor::{ArrayType, Type};
	/// use tripwire::tree::field::FieldDescriptor;
	///
	/// assert_eq!(FieldDescriptor::from("I").parse()?, Type::I);
	/// assert_eq!(
	///     FieldDescriptor::from("Ljava/lang/Object;").parse()?,
	///     Type::Object("java/lang/Object".into())
	/// );
	/// assert_eq!(FieldDescriptor::from("[[[D").parse()?, Type::Array(3, ArrayType::D));
	/// # Ok::<(), anyhow::Error>(())
	/// ```
	pub fn parse(&self) -> Result<Type> {
		let mut chars = self.0.chars().peekable();

		let descriptor = read_field_type(&mut chars)
			.with_context(|| anyhow!("failed to read field descriptor {:?}", self.0))?;

		if chars.peek().is_some() {
			bail!("expected end of field descriptor {:?}, got {:?} remaining", self.0, String::from_iter(chars));
		}

		Ok(descriptor)
	}
}
