//! The IL transformer and the interpreter: stack-based IL is lowered into a
//! flat, typed, offset-addressed instruction stream ([`llops`]), which the
//! dispatch loop in [`exec`] runs over fixed-width eight-byte stack slots.

pub mod il;
pub mod hl;
pub mod llops;
pub mod transform;
pub mod machine;
pub mod exec;

#[cfg(test)]
mod tests;

use crate::raw::body::ExceptionClauseKind;
use crate::structured::{Class, FieldInfo, MethodInfo, TypeSig};
use crate::vm::object::GcRef;

/// An entry of a method's resolved-data table: canonical pointers the byte
/// stream refers to by `u16` index, so the interpreter never re-resolves
/// metadata tokens.
#[derive(Debug, Copy, Clone)]
pub enum ResolvedData<'l> {
	Class(&'l Class<'l>),
	Method(&'l MethodInfo<'l>),
	Field(&'l FieldInfo<'l>),
	/// An interned managed string for `ldstr`.
	Str(GcRef),
	/// Call-site shape for `calli`.
	CalliSig { total_arg_slots: u16, ret_slots: u16 },
	/// A runtime handle for `ldtoken`.
	Handle(RuntimeHandle<'l>),
}

#[derive(Debug, Copy, Clone)]
pub enum RuntimeHandle<'l> {
	Type(&'l TypeSig<'l>),
	Field(&'l FieldInfo<'l>),
	Method(&'l MethodInfo<'l>),
}

/// An exception-handling region of the lowered method, with IR offsets and
/// pre-resolved catch classes.
#[derive(Debug, Copy, Clone)]
pub struct IrExceptionClause<'l> {
	pub kind: ExceptionClauseKind,
	pub try_offset: u32,
	pub try_length: u32,
	pub handler_offset: u32,
	pub handler_length: u32,
	pub filter_offset: u32,
	pub catch_class: Option<&'l Class<'l>>,
	/// Frame slot the exception object lands in on handler or filter entry.
	pub ex_slot: u16,
}

impl IrExceptionClause<'_> {
	pub fn is_in_try_block(&self, ir_offset: u32) -> bool {
		ir_offset >= self.try_offset && ir_offset < self.try_offset + self.try_length
	}

	pub fn is_in_handler_block(&self, ir_offset: u32) -> bool {
		ir_offset >= self.handler_offset && ir_offset < self.handler_offset + self.handler_length
	}

	pub fn is_finally_or_fault(&self) -> bool {
		self.kind.is_finally_or_fault()
	}
}

/// The lowered form of a method body, cached on its `MethodInfo` after the
/// first call.
#[derive(Debug)]
pub struct InterpMethodInfo<'l> {
	pub code: &'l [u8],
	pub resolved: &'l [ResolvedData<'l>],
	pub clauses: &'l [IrExceptionClause<'l>],
	/// Slots occupied by the incoming arguments at the frame base.
	pub arg_slots: u16,
	/// Slots occupied by locals, directly after the arguments.
	pub locals_slots: u16,
	/// Total frame size: arguments, locals and evaluation-stack temporaries.
	pub frame_slots: u16,
	pub ret_slots: u16,
}
