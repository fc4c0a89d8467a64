use anyhow::Result;
use crate::tree::method::code::Instruction;

/// Visits the instructions of one method body.
///
/// An upstream driver calls [`CodeVisitor::visit_instruction`] once per instruction, in
/// program order, for one body at a time. Implementations that wrap another visitor form a
/// chain; the last stage of such a chain is usually a writer that encodes the body again.
pub trait CodeVisitor {
	fn visit_instruction(&mut self, instruction: Instruction) -> Result<()>;
}

impl CodeVisitor for () {
	fn visit_instruction(&mut self, _instruction: Instruction) -> Result<()> {
		Ok(())
	}
}

/// Collects every visited instruction, in visitation order.
impl CodeVisitor for Vec<Instruction> {
	fn visit_instruction(&mut self, instruction: Instruction) -> Result<()> {
		self.push(instruction);
		Ok(())
	}
}

impl<V: CodeVisitor + ?Sized> CodeVisitor for &mut V {
	fn visit_instruction(&mut self, instruction: Instruction) -> Result<()> {
		(**self).visit_instruction(instruction)
	}
}
