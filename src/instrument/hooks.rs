use log::info;

/// The pluggable behavior of an [`AccessInstrumentor`][crate::instrument::AccessInstrumentor].
///
/// Each method receives the opcode of the matched access instruction and is called exactly
/// once per visited instruction of that kind, immediately before respectively after the
/// instruction is forwarded. The default bodies do nothing: the instrumentor owns
/// classification and sequencing, a strategy owns all observable effects.
///
/// Anything a hook emits into the rewritten body must leave the operand stack depth and
/// types unchanged at the point the original instruction resumes; the instrumentor only
/// guarantees *where* hook effects are positioned, not that they are stack neutral.
pub trait AccessHooks {
	/// Called immediately before an array load is forwarded.
	fn before_array_load(&mut self, _opcode: u8) {}

	/// Called immediately after an array load was forwarded.
	fn after_array_load(&mut self, _opcode: u8) {}

	/// Called immediately before an array store is forwarded.
	fn before_array_store(&mut self, _opcode: u8) {}

	/// Called immediately after an array store was forwarded.
	fn after_array_store(&mut self, _opcode: u8) {}
}

/// No hooks at all; turns the instrumentor into a plain forwarder.
impl AccessHooks for () {}

/// The reference hook strategy: logs one human readable marker per hook call.
///
/// Useful for validating hook placement on a real method body without writing a strategy
/// first.
#[derive(Debug, Default, Copy, Clone)]
pub struct MarkerHooks;

impl AccessHooks for MarkerHooks {
	fn before_array_load(&mut self, opcode: u8) {
		info!("before array load (opcode {opcode:#04x})");
	}

	fn after_array_load(&mut self, opcode: u8) {
		info!("after array load (opcode {opcode:#04x})");
	}

	fn before_array_store(&mut self, opcode: u8) {
		info!("before array store (opcode {opcode:#04x})");
	}

	fn after_array_store(&mut self, opcode: u8) {
		info!("after array store (opcode {opcode:#04x})");
	}
}
