use std::cell::RefCell;
use std::rc::Rc;
use anyhow::{bail, Result};
use pretty_assertions::assert_eq;
use tripwire::instrument::AccessInstrumentor;
use tripwire::instrument::events::{access_events, AccessEvent};
use tripwire::instrument::hooks::{AccessHooks, MarkerHooks};
use tripwire::tree::field::FieldRef;
use tripwire::tree::method::code::{Code, Constant, Instruction, LvIndex};
use tripwire::tree::method::{Method, MethodAccess, MethodRef};
use tripwire::visitor::CodeVisitor;

/// One entry of the combined observation log: forwards and hook calls land in a single
/// sequence, so the tests can check their interleaving.
#[derive(Debug, Clone, PartialEq)]
enum Event {
	Forward(u8),
	BeforeLoad(u8),
	AfterLoad(u8),
	BeforeStore(u8),
	AfterStore(u8),
}

struct LoggingSink(Rc<RefCell<Vec<Event>>>);

impl CodeVisitor for LoggingSink {
	fn visit_instruction(&mut self, instruction: Instruction) -> Result<()> {
		self.0.borrow_mut().push(Event::Forward(instruction.opcode()));
		Ok(())
	}
}

struct LoggingHooks(Rc<RefCell<Vec<Event>>>);

impl AccessHooks for LoggingHooks {
	fn before_array_load(&mut self, opcode: u8) {
		self.0.borrow_mut().push(Event::BeforeLoad(opcode));
	}

	fn after_array_load(&mut self, opcode: u8) {
		self.0.borrow_mut().push(Event::AfterLoad(opcode));
	}

	fn before_array_store(&mut self, opcode: u8) {
		self.0.borrow_mut().push(Event::BeforeStore(opcode));
	}

	fn after_array_store(&mut self, opcode: u8) {
		self.0.borrow_mut().push(Event::AfterStore(opcode));
	}
}

/// Drives `code` through an instrumentor whose sink and hooks share one log.
fn observe(code: Code) -> Result<Vec<Event>> {
	let log = Rc::new(RefCell::new(Vec::new()));

	let instrumentor = AccessInstrumentor::new(LoggingSink(log.clone()), LoggingHooks(log.clone()));
	code.accept(instrumentor)?;

	let log = log.borrow().clone();
	Ok(log)
}

fn load_instructions() -> [Instruction; 8] {
	[
		Instruction::IALoad, Instruction::LALoad, Instruction::FALoad, Instruction::DALoad,
		Instruction::AALoad, Instruction::BALoad, Instruction::CALoad, Instruction::SALoad,
	]
}

fn store_instructions() -> [Instruction; 8] {
	[
		Instruction::IAStore, Instruction::LAStore, Instruction::FAStore, Instruction::DAStore,
		Instruction::AAStore, Instruction::BAStore, Instruction::CAStore, Instruction::SAStore,
	]
}

#[test]
fn every_load_is_bracketed_exactly_once() -> Result<()> {
	for insn in load_instructions() {
		let opcode = insn.opcode();
		let observed = observe(Code { instructions: vec![insn] })?;

		assert_eq!(observed, vec![
			Event::BeforeLoad(opcode),
			Event::Forward(opcode),
			Event::AfterLoad(opcode),
		]);
	}

	Ok(())
}

#[test]
fn every_store_is_bracketed_exactly_once() -> Result<()> {
	for insn in store_instructions() {
		let opcode = insn.opcode();
		let observed = observe(Code { instructions: vec![insn] })?;

		assert_eq!(observed, vec![
			Event::BeforeStore(opcode),
			Event::Forward(opcode),
			Event::AfterStore(opcode),
		]);
	}

	Ok(())
}

#[test]
fn hooks_bracket_a_load_in_program_order() -> Result<()> {
	// int first(int[] a) { return a[0]; }
	let code = Code {
		instructions: vec![
			Instruction::ALoad(LvIndex { index: 0 }),
			Instruction::IConst0,
			Instruction::IALoad,
			Instruction::IReturn,
		],
	};

	let iaload = Instruction::IALoad.opcode();
	assert_eq!(observe(code)?, vec![
		Event::Forward(Instruction::ALoad(LvIndex { index: 0 }).opcode()),
		Event::Forward(Instruction::IConst0.opcode()),
		Event::BeforeLoad(iaload),
		Event::Forward(iaload),
		Event::AfterLoad(iaload),
		Event::Forward(Instruction::IReturn.opcode()),
	]);

	Ok(())
}

#[test]
fn body_without_accesses_passes_through_unchanged() -> Result<()> {
	let instructions = vec![
		Instruction::GetStatic(FieldRef {
			class: "java/lang/System".into(),
			name: "out".into(),
			desc: "Ljava/io/PrintStream;".into(),
		}),
		Instruction::Ldc(Constant::String("hello".to_owned())),
		Instruction::InvokeVirtual(MethodRef {
			class: "java/io/PrintStream".into(),
			name: "println".into(),
			desc: "(Ljava/lang/String;)V".into(),
		}),
		Instruction::Return,
	];

	let hook_log = Rc::new(RefCell::new(Vec::new()));
	let instrumentor = AccessInstrumentor::new(Vec::new(), LoggingHooks(hook_log.clone()));

	let code = Code { instructions: instructions.clone() };
	let (forwarded, _hooks) = code.accept(instrumentor)?.into_parts();

	assert_eq!(forwarded, instructions);
	assert_eq!(hook_log.borrow().len(), 0);

	Ok(())
}

#[test]
fn interleaved_accesses_fire_one_bracket_each() -> Result<()> {
	let instructions = vec![
		Instruction::ALoad(LvIndex { index: 1 }),
		Instruction::IConst0,
		Instruction::IALoad,
		Instruction::IStore(LvIndex { index: 2 }),
		Instruction::ALoad(LvIndex { index: 1 }),
		Instruction::IConst1,
		Instruction::ILoad(LvIndex { index: 2 }),
		Instruction::IAStore,
		Instruction::ALoad(LvIndex { index: 3 }),
		Instruction::IConst2,
		Instruction::AALoad,
		Instruction::Pop,
		Instruction::Return,
	];

	let observed = observe(Code { instructions: instructions.clone() })?;

	// three accesses, two hook calls each
	let hook_count = observed.iter()
		.filter(|event| !matches!(event, Event::Forward(_)))
		.count();
	assert_eq!(hook_count, 2 * 3);

	// every before hook is immediately followed by its instruction and the matching after hook
	for (i, event) in observed.iter().enumerate() {
		match event {
			Event::BeforeLoad(opcode) => {
				assert_eq!(observed[i + 1], Event::Forward(*opcode));
				assert_eq!(observed[i + 2], Event::AfterLoad(*opcode));
			},
			Event::BeforeStore(opcode) => {
				assert_eq!(observed[i + 1], Event::Forward(*opcode));
				assert_eq!(observed[i + 2], Event::AfterStore(*opcode));
			},
			_ => {},
		}
	}

	// the forwards alone are the original body
	let forwarded: Vec<u8> = observed.iter()
		.filter_map(|event| match event {
			Event::Forward(opcode) => Some(*opcode),
			_ => None,
		})
		.collect();
	let original: Vec<u8> = instructions.iter().map(Instruction::opcode).collect();
	assert_eq!(forwarded, original);

	Ok(())
}

#[test]
fn a_method_body_drives_the_chain() -> Result<()> {
	let mut method = Method::new(MethodAccess::from(0x0009), "first".into(), "([I)I".into());
	method.code = Some(Code {
		instructions: vec![
			Instruction::ALoad(LvIndex { index: 0 }),
			Instruction::IConst0,
			Instruction::IALoad,
			Instruction::IReturn,
		],
	});

	let log = Rc::new(RefCell::new(Vec::new()));
	method.accept(AccessInstrumentor::new(LoggingSink(log.clone()), LoggingHooks(log.clone())))?;

	assert_eq!(log.borrow().len(), 4 + 2);

	Ok(())
}

#[test]
fn abstract_methods_have_nothing_to_visit() -> Result<()> {
	let method = Method::new(MethodAccess::from(0x0401), "size".into(), "()I".into());

	let (forwarded, _hooks) = method.accept(AccessInstrumentor::new(Vec::new(), MarkerHooks))?.into_parts();
	assert_eq!(forwarded, vec![]);

	Ok(())
}

struct FailOn(u8);

impl CodeVisitor for FailOn {
	fn visit_instruction(&mut self, instruction: Instruction) -> Result<()> {
		if instruction.opcode() == self.0 {
			bail!("refusing opcode {:#04x}", self.0);
		}
		Ok(())
	}
}

#[test]
fn downstream_errors_propagate() {
	let code = Code {
		instructions: vec![Instruction::Nop, Instruction::Return],
	};

	let instrumentor = AccessInstrumentor::new(FailOn(Instruction::Return.opcode()), MarkerHooks);
	assert!(code.accept(instrumentor).is_err());
}

#[test]
fn event_stream_brackets_accesses() {
	let instructions = vec![
		Instruction::ALoad(LvIndex { index: 0 }),
		Instruction::IConst0,
		Instruction::IALoad,
		Instruction::IReturn,
	];

	let events: Vec<_> = access_events(instructions).collect();

	let iaload = Instruction::IALoad.opcode();
	assert_eq!(events, vec![
		AccessEvent::Forward(Instruction::ALoad(LvIndex { index: 0 })),
		AccessEvent::Forward(Instruction::IConst0),
		AccessEvent::BeforeLoad(iaload),
		AccessEvent::Forward(Instruction::IALoad),
		AccessEvent::AfterLoad(iaload),
		AccessEvent::Forward(Instruction::IReturn),
	]);
}

#[test]
fn event_stream_of_a_plain_body_is_just_forwards() {
	let instructions = vec![
		Instruction::IConst2,
		Instruction::IConst3,
		Instruction::IAdd,
		Instruction::IReturn,
	];

	let events: Vec<_> = access_events(instructions.clone()).collect();

	let forwards: Vec<_> = instructions.into_iter().map(AccessEvent::Forward).collect();
	assert_eq!(events, forwards);
}

#[test]
fn forward_events_reconstruct_the_input() {
	let instructions = vec![
		Instruction::ALoad(LvIndex { index: 1 }),
		Instruction::IConst0,
		Instruction::DALoad,
		Instruction::DStore(LvIndex { index: 2 }),
		Instruction::ALoad(LvIndex { index: 1 }),
		Instruction::IConst0,
		Instruction::DConst0,
		Instruction::DAStore,
		Instruction::Return,
	];

	let reconstructed: Vec<Instruction> = access_events(instructions.clone())
		.filter_map(|event| match event {
			AccessEvent::Forward(instruction) => Some(instruction),
			_ => None,
		})
		.collect();

	assert_eq!(reconstructed, instructions);
}
