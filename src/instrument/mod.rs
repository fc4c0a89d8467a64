//! Instrumentation of array accesses in a method body.
//!
//! The core of this module is [`AccessInstrumentor`], a [`CodeVisitor`] decorator that
//! recognizes the sixteen array access instructions and brackets each of them with calls into
//! an [`AccessHooks`][hooks::AccessHooks] strategy, while forwarding the whole instruction
//! stream unchanged. The classification itself lives in [`ArrayAccess::of`], and
//! [`events`][events::access_events] exposes the same bracketing as a plain iterator for
//! consumers that want to see hook points and instructions as one lazy sequence.

pub mod events;
pub mod hooks;
pub mod location;

use anyhow::Result;
use crate::class_constants::opcode;
use crate::instrument::hooks::AccessHooks;
use crate::tree::class::ClassName;
use crate::tree::descriptor::{ArrayType, Type};
use crate::tree::method::code::Instruction;
use crate::visitor::CodeVisitor;

/// The two kinds of array element access instruction.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ArrayAccess {
	/// Reads one element: the `iaload` family, 0x2e to 0x35.
	Load,
	/// Writes one element: the `iastore` family, 0x4f to 0x56.
	Store,
}

impl ArrayAccess {
	/// Classifies an operation code.
	///
	/// The eight element load opcodes map to [`ArrayAccess::Load`], the eight element store
	/// opcodes to [`ArrayAccess::Store`], and every other value of the opcode byte to `None`.
	/// The mapping is a closed table: total over `u8`, deterministic, and free of side
	/// effects.
	pub fn of(opcode: u8) -> Option<ArrayAccess> {
		match opcode {
			opcode::IALOAD | opcode::LALOAD | opcode::FALOAD | opcode::DALOAD |
			opcode::AALOAD | opcode::BALOAD | opcode::CALOAD | opcode::SALOAD => Some(ArrayAccess::Load),

			opcode::IASTORE | opcode::LASTORE | opcode::FASTORE | opcode::DASTORE |
			opcode::AASTORE | opcode::BASTORE | opcode::CASTORE | opcode::SASTORE => Some(ArrayAccess::Store),

			_ => None,
		}
	}

	/// Derives the container and element types encoded in an array access opcode, as a
	/// `(container, element)` pair.
	///
	/// Returns `None` for opcodes outside the access family. Two kinds of imprecision are
	/// inherent to the encoding and left to callers with static type knowledge:
	/// `baload`/`bastore` also cover `boolean[]` (the derived types say `byte`), and the
	/// reference opcodes only guarantee `java.lang.Object`.
	pub fn site_types(opcode: u8) -> Option<(Type, Type)> {
		let element = match opcode {
			opcode::IALOAD | opcode::IASTORE => ArrayType::I,
			opcode::LALOAD | opcode::LASTORE => ArrayType::J,
			opcode::FALOAD | opcode::FASTORE => ArrayType::F,
			opcode::DALOAD | opcode::DASTORE => ArrayType::D,
			opcode::AALOAD | opcode::AASTORE => ArrayType::Object(ClassName::JAVA_LANG_OBJECT),
			opcode::BALOAD | opcode::BASTORE => ArrayType::B,
			opcode::CALOAD | opcode::CASTORE => ArrayType::C,
			opcode::SALOAD | opcode::SASTORE => ArrayType::S,
			_ => return None,
		};

		Some((Type::Array(1, element.clone()), element.into()))
	}
}

/// A [`CodeVisitor`] that surrounds every array access instruction with hook calls.
///
/// For each visited instruction this visitor classifies its opcode, fires the matching
/// `before` hook, forwards the instruction unchanged to the wrapped visitor, and fires the
/// matching `after` hook; instructions outside the access family are forwarded without any
/// hook call. It never alters, reorders, drops or duplicates instructions, so the hook calls
/// are the only difference between driving the wrapped visitor directly and driving it
/// through this one.
///
/// If the wrapped visitor fails, the error is propagated and the `after` hook of the failed
/// instruction is not invoked.
pub struct AccessInstrumentor<V, H> {
	inner: V,
	hooks: H,
}

impl<V: CodeVisitor, H: AccessHooks> AccessInstrumentor<V, H> {
	pub fn new(inner: V, hooks: H) -> AccessInstrumentor<V, H> {
		AccessInstrumentor {
			inner,
			hooks,
		}
	}

	/// Returns the wrapped visitor and the hook strategy, usually to collect what they
	/// accumulated during the pass.
	pub fn into_parts(self) -> (V, H) {
		(self.inner, self.hooks)
	}
}

impl<V: CodeVisitor, H: AccessHooks> CodeVisitor for AccessInstrumentor<V, H> {
	fn visit_instruction(&mut self, instruction: Instruction) -> Result<()> {
		let opcode = instruction.opcode();
		let access = ArrayAccess::of(opcode);

		match access {
			Some(ArrayAccess::Load) => self.hooks.before_array_load(opcode),
			Some(ArrayAccess::Store) => self.hooks.before_array_store(opcode),
			None => {},
		}

		self.inner.visit_instruction(instruction)?;

		match access {
			Some(ArrayAccess::Load) => self.hooks.after_array_load(opcode),
			Some(ArrayAccess::Store) => self.hooks.after_array_store(opcode),
			None => {},
		}

		Ok(())
	}
}
