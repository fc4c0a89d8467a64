//! A library for instrumenting the method bodies of [Java Class Files](https://docs.oracle.com/javase/specs/jvms/se22/html/jvms-4.html)
//! with observation points around array accesses.
//!
//! The instruction stream of one method body flows through a chain of [`visitor::CodeVisitor`]s.
//! An [`instrument::AccessInstrumentor`] sits in that chain: it forwards every instruction
//! unchanged to the next visitor and calls into a pluggable [`instrument::hooks::AccessHooks`]
//! strategy immediately before and immediately after each array load and each array store.
//! The same bracketing is available without any visitor as a lazy stream of
//! [`instrument::events::AccessEvent`]s.
//!
//! Reading and writing the surrounding class file is the job of other crates; this one only
//! rewrites the in-memory instruction stream of one method body at a time.
//!
//! ```
//! use anyhow::Result;
//! use tripwire::instrument::AccessInstrumentor;
//! use tripwire::instrument::hooks::MarkerHooks;
//! use tripwire::tree::method::code::{Code, Instruction, LvIndex};
//!
//! fn main() -> Result<()> {
//!     let code = Code {
//!         instructions: vec![
//!             Instruction::ALoad(LvIndex { index: 1 }),
//!             Instruction::IConst0,
//!             Instruction::IALoad,
//!             Instruction::IReturn,
//!         ],
//!     };
//!
//!     // logs "before array load" and "after array load" around the `iaload`
//!     let instrumentor = AccessInstrumentor::new(Vec::new(), MarkerHooks);
//!     let (rewritten, _hooks) = code.accept(instrumentor)?.into_parts();
//!
//!     // the instructions themselves pass through untouched
//!     assert_eq!(rewritten.len(), 4);
//!     Ok(())
//! }
//! ```

pub mod tree;
pub mod visitor;
pub mod instrument;

mod class_constants;
mod macros;
