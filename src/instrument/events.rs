use std::collections::VecDeque;
use crate::instrument::ArrayAccess;
use crate::tree::method::code::Instruction;

/// One observable step of an instrumented instruction stream.
///
/// The hook variants carry the opcode of the access instruction they bracket; the
/// [`AccessEvent::Forward`] variant carries the original instruction, unchanged and in its
/// original position.
#[derive(Debug, Clone, PartialEq)]
pub enum AccessEvent {
	Forward(Instruction),
	BeforeLoad(u8),
	AfterLoad(u8),
	BeforeStore(u8),
	AfterStore(u8),
}

/// Lazily brackets the array accesses of an instruction stream with hook events.
///
/// See [`access_events`].
pub struct AccessEvents<I> {
	instructions: I,
	/// Holds the rest of a bracket once its `before` event is out; never more than two events.
	queued: VecDeque<AccessEvent>,
}

/// Turns a stream of instructions into the stream of events an instrumented pass observes.
///
/// Every instruction comes back as an [`AccessEvent::Forward`] in its original position;
/// array accesses are additionally bracketed by their `before` and `after` events. A writer
/// consuming this sequence can turn hook events into whatever instrumentation code it wants
/// to inject, and a consumer that only forwards the [`AccessEvent::Forward`] instructions
/// reconstructs the input exactly.
///
/// ```
/// # use pretty_assertions::assert_eq;
/// use tripwire::instrument::events::{access_events, AccessEvent};
/// use tripwire::tree::method::code::Instruction;
///
/// let events: Vec<_> = access_events([Instruction::IConst0, Instruction::BALoad]).collect();
///
/// let baload = Instruction::BALoad.opcode();
/// assert_eq!(events, vec![
///     AccessEvent::Forward(Instruction::IConst0),
///     AccessEvent::BeforeLoad(baload),
///     AccessEvent::Forward(Instruction::BALoad),
///     AccessEvent::AfterLoad(baload),
/// ]);
/// ```
pub fn access_events<I>(instructions: I) -> AccessEvents<I::IntoIter>
where
	I: IntoIterator<Item = Instruction>,
{
	AccessEvents {
		instructions: instructions.into_iter(),
		queued: VecDeque::new(),
	}
}

impl<I: Iterator<Item = Instruction>> Iterator for AccessEvents<I> {
	type Item = AccessEvent;

	fn next(&mut self) -> Option<AccessEvent> {
		if let Some(event) = self.queued.pop_front() {
			return Some(event);
		}

		let instruction = self.instructions.next()?;
		let opcode = instruction.opcode();

		Some(match ArrayAccess::of(opcode) {
			Some(ArrayAccess::Load) => {
				self.queued.push_back(AccessEvent::Forward(instruction));
				self.queued.push_back(AccessEvent::AfterLoad(opcode));
				AccessEvent::BeforeLoad(opcode)
			},
			Some(ArrayAccess::Store) => {
				self.queued.push_back(AccessEvent::Forward(instruction));
				self.queued.push_back(AccessEvent::AfterStore(opcode));
				AccessEvent::BeforeStore(opcode)
			},
			None => AccessEvent::Forward(instruction),
		})
	}
}
