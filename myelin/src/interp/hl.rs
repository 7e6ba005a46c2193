//! Pass 1 of the transformer: decode IL into per-basic-block typed
//! operations over an abstract evaluation stack.
//!
//! Leaders are the first instruction, every branch/switch/leave target,
//! every instruction after an unconditional transfer, and every try, handler
//! and filter boundary. Within a block the abstract stack is maintained and
//! typed using the CLI verification promotion rules; every pushed value gets
//! a variable with a fixed frame slot derived from its stack depth, so
//! control-flow merges line up without copies.

use fxhash::FxHashMap;

use crate::error::{VmError, VmResult};
use crate::interp::il::{InstructionIter, OpCode};
use crate::interp::RuntimeHandle;
use crate::raw::body::{ExceptionClauseKind, MethodBody};
use crate::raw::indices::metadata_token::{MetadataToken, MetadataTokenKind};
use crate::structured::{
	Class, Context, ElementType, FieldInfo, GenericContainerContext, GenericContext, MethodInfo,
	ModuleDef, ReduceType, TypeSig,
};

pub type VarId = u32;
pub type BbId = usize;

/// Verification-style stack classification.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum StackKind {
	I4,
	I8,
	I,
	R4,
	R8,
	Ref,
	ByRef,
	Value,
}

impl StackKind {
	pub fn is_integer(&self) -> bool {
		matches!(self, StackKind::I4 | StackKind::I8 | StackKind::I)
	}

	pub fn is_float(&self) -> bool {
		matches!(self, StackKind::R4 | StackKind::R8)
	}
}

/// The numeric lane an arithmetic instruction operates in; native-sized and
/// by-ref operands run in the I8 lane on this 64-bit interpreter.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum NumKind {
	I4,
	I8,
	R4,
	R8,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BinOp {
	Add,
	Sub,
	Mul,
	Div,
	DivUn,
	Rem,
	RemUn,
	And,
	Or,
	Xor,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShiftOp {
	Shl,
	Shr,
	ShrUn,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum UnOp {
	Neg,
	Not,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Cond {
	Eq,
	Ne,
	Gt,
	Ge,
	Lt,
	Le,
}

/// Scalar target of a conversion.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ConvTarget {
	I1,
	U1,
	I2,
	U2,
	I4,
	U4,
	I8,
	U8,
	R4,
	R8,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MemWidth {
	I1,
	U1,
	I2,
	U2,
	I4,
	I8,
	Ref,
}

/// Element access shape for array loads and stores.
#[derive(Debug, Copy, Clone)]
pub enum ElemKind<'l> {
	Width(MemWidth),
	Value(&'l Class<'l>),
}

/// A frame variable: arguments and locals at the low offsets, evaluation
/// stack temporaries after them.
#[derive(Debug, Copy, Clone)]
pub struct Var<'l> {
	pub sig: &'l TypeSig<'l>,
	pub kind: StackKind,
	pub slots: u16,
	pub offset: u16,
}

#[derive(Debug, Copy, Clone)]
pub struct StackEntry<'l> {
	pub var: VarId,
	pub sig: &'l TypeSig<'l>,
	pub kind: StackKind,
}

#[derive(Debug)]
pub struct HlInst<'l> {
	pub il_offset: u32,
	pub op: HlOp<'l>,
}

#[derive(Debug)]
pub enum HlOp<'l> {
	Nop,
	/// Slot-to-slot copy with the width semantics of the destination.
	Copy { src: VarId, dst: VarId },
	LoadVarAddr { src: VarId, dst: VarId },
	LdcI4 { value: i32, dst: VarId },
	LdcI8 { value: i64, dst: VarId },
	LdcR4 { value: f32, dst: VarId },
	LdcR8 { value: f64, dst: VarId },
	LdNull { dst: VarId },
	LdStr { offset: usize, dst: VarId },
	LdTokenOp { handle: RuntimeHandle<'l>, dst: VarId },
	Binary { op: BinOp, ovf: bool, un: bool, kind: NumKind, lhs: VarId, rhs: VarId, dst: VarId },
	Shift { op: ShiftOp, kind: NumKind, lhs: VarId, rhs: VarId, dst: VarId },
	Unary { op: UnOp, kind: NumKind, src: VarId, dst: VarId },
	Conv { target: ConvTarget, ovf: bool, un: bool, src_kind: NumKind, src: VarId, dst: VarId },
	Compare { cond: Cond, un: bool, kind: NumKind, lhs: VarId, rhs: VarId, dst: VarId },
	Branch { target: BbId },
	BranchCond { negate: bool, kind: NumKind, src: VarId, target: BbId },
	BranchCmp { cond: Cond, un: bool, kind: NumKind, lhs: VarId, rhs: VarId, target: BbId },
	Switch { src: VarId, targets: Vec<BbId> },
	LoadInd { width: MemWidth, src: VarId, dst: VarId, unaligned: bool },
	StoreInd { width: MemWidth, dest: VarId, src: VarId, unaligned: bool },
	LoadObj { class: &'l Class<'l>, src: VarId, dst: VarId },
	StoreObj { class: &'l Class<'l>, dest: VarId, src: VarId },
	CpObjOp { class: &'l Class<'l>, dest: VarId, src: VarId },
	InitObjOp { class: &'l Class<'l>, dest: VarId },
	LoadField { field: &'l FieldInfo<'l>, obj: VarId, obj_is_value: bool, dst: VarId, unaligned: bool },
	LoadFieldAddr { field: &'l FieldInfo<'l>, obj: VarId, dst: VarId },
	StoreField { field: &'l FieldInfo<'l>, obj: VarId, src: VarId, unaligned: bool },
	LoadStatic { field: &'l FieldInfo<'l>, dst: VarId },
	LoadStaticAddr { field: &'l FieldInfo<'l>, dst: VarId },
	StoreStatic { field: &'l FieldInfo<'l>, src: VarId },
	BoxOp { class: &'l Class<'l>, src: VarId, dst: VarId },
	UnboxOp { class: &'l Class<'l>, src: VarId, dst: VarId },
	UnboxAnyOp { class: &'l Class<'l>, src: VarId, dst: VarId },
	CastClassOp { class: &'l Class<'l>, src: VarId, dst: VarId, is_isinst: bool },
	NewObjOp { ctor: &'l MethodInfo<'l>, frame_base: u16, total_arg_slots: u16, dst: VarId },
	NewArrOp { class: &'l Class<'l>, len: VarId, dst: VarId },
	LdLenOp { arr: VarId, dst: VarId },
	LdElemAddr { class: &'l Class<'l>, arr: VarId, index: VarId, dst: VarId, readonly: bool },
	LdElem { elem: ElemKind<'l>, arr: VarId, index: VarId, dst: VarId },
	StElem { elem: ElemKind<'l>, arr: VarId, index: VarId, src: VarId },
	Call { method: &'l MethodInfo<'l>, frame_base: u16, ret: Option<VarId>, is_virtual: bool },
	CallIndirect { total_arg_slots: u16, ret_slots: u16, fnptr: VarId, frame_base: u16, ret: Option<VarId> },
	LdFtnOp { method: &'l MethodInfo<'l>, dst: VarId },
	LdVirtFtnOp { method: &'l MethodInfo<'l>, obj: VarId, dst: VarId },
	Ret { src: Option<VarId> },
	Throw { src: VarId },
	Rethrow,
	Leave { target: BbId },
	EndFinally,
	EndFilter { src: VarId },
	LocAllocOp { size: VarId, dst: VarId },
	CkFiniteOp { kind: NumKind, src: VarId, dst: VarId },
	InitBlkOp { addr: VarId, value: VarId, size: VarId },
	CpBlkOp { dest: VarId, src: VarId, size: VarId },
}

#[derive(Debug)]
pub struct BasicBlock<'l> {
	pub il_offset: u32,
	pub insts: Vec<HlInst<'l>>,
	pub entry_stack: Option<Vec<StackEntry<'l>>>,
	pub reachable: bool,
}

/// Output of pass 1: the block graph, the variable table and the frame
/// geometry pass 2 lays instructions out against.
pub struct HlMethod<'l> {
	pub blocks: Vec<BasicBlock<'l>>,
	pub vars: Vec<Var<'l>>,
	pub arg_slots: u16,
	pub locals_slots: u16,
	/// High-water mark over arguments, locals and temporaries, including
	/// call scratch space.
	pub frame_slots: u16,
	pub body: MethodBody<'l>,
	/// Per-clause frame slot holding the incoming exception object.
	pub clause_ex_slots: Vec<u16>,
}

pub struct Transformer<'l> {
	ctx: &'l Context<'l>,
	module: &'l ModuleDef<'l>,
	method: &'l MethodInfo<'l>,
	gcc: GenericContainerContext<'l>,
	gc: Option<GenericContext<'l>>,

	vars: Vec<Var<'l>>,
	blocks: Vec<BasicBlock<'l>>,
	offset_to_block: FxHashMap<u32, BbId>,
	arg_var_count: u32,
	arg_slots: u16,
	locals_slots: u16,
	temps_base: u16,
	high_water: u16,
}

struct PrefixState<'l> {
	unaligned: bool,
	volatile_: bool,
	tail: bool,
	readonly: bool,
	constrained: Option<&'l Class<'l>>,
}

impl Default for PrefixState<'_> {
	fn default() -> Self {
		Self {
			unaligned: false,
			volatile_: false,
			tail: false,
			readonly: false,
			constrained: None,
		}
	}
}

impl<'l> Transformer<'l> {
	pub fn new(ctx: &'l Context<'l>, method: &'l MethodInfo<'l>) -> VmResult<Self> {
		let (module, gcc, gc) = resolution_contexts(ctx, method)?;
		Ok(Self {
			ctx,
			module,
			method,
			gcc,
			gc,
			vars: vec![],
			blocks: vec![],
			offset_to_block: Default::default(),
			arg_var_count: 0,
			arg_slots: 0,
			locals_slots: 0,
			temps_base: 0,
			high_water: 0,
		})
	}

	#[tracing::instrument(skip_all, fields(method = %self.method.name()))]
	pub fn run(mut self) -> VmResult<HlMethod<'l>> {
		let body = self
			.method
			.body()?
			.ok_or(VmError::ExecutionEngine)?;

		// Frame prefix: arguments then locals, at fixed offsets.
		let descs = self.method.arg_descs(self.ctx)?;
		let mut offset = 0u16;
		let mut arg_sigs: Vec<&'l TypeSig<'l>> = Vec::with_capacity(descs.len());
		if self.method.is_instance() {
			arg_sigs.push(match self.method.parent().is_value_type() {
				true => self.method.parent().by_ref_sig(self.ctx),
				false => self.method.parent().by_val_sig(self.ctx),
			});
		}
		arg_sigs.extend_from_slice(self.method.params());
		for (desc, sig) in descs.iter().zip(&arg_sigs) {
			self.vars.push(Var {
				sig: *sig,
				kind: kind_of_reduce(desc.reduce_type),
				slots: desc.slot_count,
				offset,
			});
			offset += desc.slot_count;
		}
		self.arg_slots = offset;
		self.arg_var_count = self.vars.len() as u32;

		let locals = self.module.read_local_var_sig(
			self.ctx,
			body.local_var_sig_token,
			&self.gcc,
			self.gc.as_ref(),
		)?;
		for sig in &locals {
			let slots = self.ctx.stack_slot_count(sig)?;
			self.vars.push(Var {
				sig: *sig,
				kind: self.kind_of_sig(sig)?,
				slots,
				offset,
			});
			offset += slots;
		}
		self.locals_slots = offset - self.arg_slots;
		self.temps_base = offset;
		self.high_water = offset;

		// Decode, find leaders, create blocks.
		let decoded = InstructionIter::new(body.code)
			.collect::<std::io::Result<Vec<_>>>()
			.map_err(|_| VmError::BadImageFormat)?;
		self.build_blocks(&decoded, &body)?;

		// Pre-seed handler and filter entry stacks with the exception slot.
		let object_sig = self.object_sig();
		let mut clause_ex_slots = Vec::with_capacity(body.exception_clauses.len());
		for clause in &body.exception_clauses {
			let ex_slot = self.temps_base;
			clause_ex_slots.push(ex_slot);
			if matches!(clause.kind, ExceptionClauseKind::Exception | ExceptionClauseKind::Filter) {
				self.seed_entry(clause.handler_offset, object_sig, ex_slot)?;
			}
			if clause.kind == ExceptionClauseKind::Filter {
				self.seed_entry(clause.class_token_or_filter_offset, object_sig, ex_slot)?;
			}
		}

		// Simulate each block in order.
		let mut current: Vec<StackEntry<'l>> = vec![];
		let mut fell_through = true;
		for bb in 0..self.blocks.len() {
			let start = self.blocks[bb].il_offset;
			let end = self
				.blocks
				.get(bb + 1)
				.map(|b| b.il_offset)
				.unwrap_or(body.code.len() as u32);

			let entry = self.blocks[bb].entry_stack.clone();
			match (entry, fell_through) {
				(Some(entry), _) => {
					if fell_through && current.len() != entry.len() {
						return Err(VmError::BadImageFormat);
					}
					current = entry;
				},
				(None, true) => {
					self.blocks[bb].entry_stack = Some(current.clone());
				},
				(None, false) => {
					// Only reachable backwards (or dead); verified output has
					// an empty stack at such joins.
					current = vec![];
					self.blocks[bb].entry_stack = Some(vec![]);
				},
			}
			self.blocks[bb].reachable = true;

			let mut prefixes = PrefixState::default();
			fell_through = true;
			for (offset, op) in decoded.iter().filter(|(o, _)| *o >= start && *o < end) {
				let flow = self.lower_instruction(bb, *offset, op, &mut current, &mut prefixes)?;
				if flow == Flow::Terminated {
					fell_through = false;
				}
			}

			if fell_through {
				// Propagate into the fall-through successor.
				if let Some(next) = self.blocks.get(bb + 1) {
					if let Some(entry) = &next.entry_stack {
						if entry.len() != current.len() {
							return Err(VmError::BadImageFormat);
						}
					}
				}
				if let Some(next) = self.blocks.get_mut(bb + 1) {
					if next.entry_stack.is_none() {
						next.entry_stack = Some(current.clone());
					}
				}
			}
		}

		Ok(HlMethod {
			blocks: self.blocks,
			vars: self.vars,
			arg_slots: self.arg_slots,
			locals_slots: self.locals_slots,
			frame_slots: self.high_water,
			body,
			clause_ex_slots,
		})
	}

	fn object_sig(&self) -> &'l TypeSig<'l> {
		self.ctx.intern_sig(TypeSig::new_by_val(ElementType::Object))
	}

	fn seed_entry(&mut self, il_offset: u32, sig: &'l TypeSig<'l>, slot: u16) -> VmResult<()> {
		let bb = *self
			.offset_to_block
			.get(&il_offset)
			.ok_or(VmError::BadImageFormat)?;
		let var = self.vars.len() as VarId;
		self.vars.push(Var {
			sig,
			kind: StackKind::Ref,
			slots: 1,
			offset: slot,
		});
		self.high_water = self.high_water.max(slot + 1);
		self.blocks[bb].entry_stack = Some(vec![StackEntry {
			var,
			sig,
			kind: StackKind::Ref,
		}]);
		Ok(())
	}

	fn build_blocks(&mut self, decoded: &[(u32, OpCode<'l>)], body: &MethodBody<'l>) -> VmResult<()> {
		use std::collections::BTreeSet;
		let mut leaders = BTreeSet::new();
		leaders.insert(0u32);

		let mut mark_target = |offset: u32, next: u32, delta: i32, leaders: &mut BTreeSet<u32>| {
			let target = next as i64 + delta as i64;
			leaders.insert(target as u32);
			let _ = offset;
		};

		let mut iter = decoded.iter().peekable();
		while let Some((offset, op)) = iter.next() {
			let next = iter.peek().map(|(o, _)| *o).unwrap_or(body.code.len() as u32);
			match op {
				OpCode::br(d) | OpCode::leave(d) => {
					mark_target(*offset, next, *d, &mut leaders);
					leaders.insert(next);
				},
				OpCode::br_s(d) | OpCode::leave_s(d) => {
					mark_target(*offset, next, *d as i32, &mut leaders);
					leaders.insert(next);
				},
				OpCode::brfalse(d) | OpCode::brtrue(d) | OpCode::beq(d) | OpCode::bge(d)
				| OpCode::bgt(d) | OpCode::ble(d) | OpCode::blt(d) | OpCode::bne_un(d)
				| OpCode::bge_un(d) | OpCode::bgt_un(d) | OpCode::ble_un(d) | OpCode::blt_un(d) => {
					mark_target(*offset, next, *d, &mut leaders);
					leaders.insert(next);
				},
				OpCode::brfalse_s(d) | OpCode::brtrue_s(d) | OpCode::beq_s(d) | OpCode::bge_s(d)
				| OpCode::bgt_s(d) | OpCode::ble_s(d) | OpCode::blt_s(d) | OpCode::bne_un_s(d)
				| OpCode::bge_un_s(d) | OpCode::bgt_un_s(d) | OpCode::ble_un_s(d)
				| OpCode::blt_un_s(d) => {
					mark_target(*offset, next, *d as i32, &mut leaders);
					leaders.insert(next);
				},
				OpCode::switch(table) => {
					for target in table.targets() {
						mark_target(*offset, next, target, &mut leaders);
					}
					leaders.insert(next);
				},
				OpCode::ret | OpCode::throw | OpCode::rethrow | OpCode::endfinally
				| OpCode::endfilter => {
					leaders.insert(next);
				},
				_ => {},
			}
		}

		for clause in &body.exception_clauses {
			leaders.insert(clause.try_offset);
			leaders.insert(clause.try_offset + clause.try_length);
			leaders.insert(clause.handler_offset);
			leaders.insert(clause.handler_offset + clause.handler_length);
			if clause.kind == ExceptionClauseKind::Filter {
				leaders.insert(clause.class_token_or_filter_offset);
			}
		}
		leaders.retain(|l| (*l as usize) < body.code.len() || *l == 0);

		for leader in leaders {
			let bb = self.blocks.len();
			self.offset_to_block.insert(leader, bb);
			self.blocks.push(BasicBlock {
				il_offset: leader,
				insts: vec![],
				entry_stack: None,
				reachable: false,
			});
		}
		Ok(())
	}

	// ### Stack plumbing

	fn kind_of_sig(&self, sig: &'l TypeSig<'l>) -> VmResult<StackKind> {
		if sig.by_ref {
			return Ok(StackKind::ByRef);
		}
		Ok(kind_of_reduce(self.ctx.reduce_type(sig)?))
	}

	fn push(&mut self, stack: &mut Vec<StackEntry<'l>>, sig: &'l TypeSig<'l>, kind: StackKind) -> VmResult<VarId> {
		let slots = match kind {
			StackKind::Value => self.ctx.stack_slot_count(sig)?,
			_ => 1,
		};
		let offset = self.stack_top_offset(stack);
		let var = self.vars.len() as VarId;
		self.vars.push(Var { sig, kind, slots, offset });
		self.high_water = self.high_water.max(offset + slots);
		stack.push(StackEntry { var, sig, kind });
		Ok(var)
	}

	fn pop(&mut self, stack: &mut Vec<StackEntry<'l>>) -> VmResult<StackEntry<'l>> {
		stack.pop().ok_or(VmError::BadImageFormat)
	}

	fn stack_top_offset(&self, stack: &[StackEntry<'l>]) -> u16 {
		match stack.last() {
			None => self.temps_base,
			Some(entry) => {
				let var = &self.vars[entry.var as usize];
				var.offset + var.slots
			},
		}
	}

	fn var_offset(&self, var: VarId) -> u16 {
		self.vars[var as usize].offset
	}

	fn emit(&mut self, bb: BbId, il_offset: u32, op: HlOp<'l>) {
		self.blocks[bb].insts.push(HlInst { il_offset, op });
	}

	fn target_block(&self, next_offset: u32, delta: i32) -> VmResult<BbId> {
		let target = (next_offset as i64 + delta as i64) as u32;
		self.offset_to_block
			.get(&target)
			.copied()
			.ok_or(VmError::BadImageFormat)
	}

	fn i4_sig(&self) -> &'l TypeSig<'l> {
		self.ctx.intern_sig(TypeSig::new_by_val(ElementType::I4))
	}

	fn i8_sig(&self) -> &'l TypeSig<'l> {
		self.ctx.intern_sig(TypeSig::new_by_val(ElementType::I8))
	}

	fn i_sig(&self) -> &'l TypeSig<'l> {
		self.ctx.intern_sig(TypeSig::new_by_val(ElementType::I))
	}

	fn r4_sig(&self) -> &'l TypeSig<'l> {
		self.ctx.intern_sig(TypeSig::new_by_val(ElementType::R4))
	}

	fn r8_sig(&self) -> &'l TypeSig<'l> {
		self.ctx.intern_sig(TypeSig::new_by_val(ElementType::R8))
	}

	/// Coerces a float operand into the other's lane by inserting a widening
	/// conversion; integer lanes must already agree.
	fn unify_numeric(
		&mut self,
		bb: BbId,
		il_offset: u32,
		stack: &mut Vec<StackEntry<'l>>,
		lhs: StackEntry<'l>,
		rhs: StackEntry<'l>,
	) -> VmResult<(NumKind, VarId, VarId)> {
		let widen = |this: &mut Self, bb, il_offset, entry: StackEntry<'l>, stack: &mut Vec<StackEntry<'l>>| -> VmResult<VarId> {
			// Scratch conversion temp above the live stack.
			let dst = this.push(stack, this.r8_sig(), StackKind::R8)?;
			stack.pop();
			this.emit(bb, il_offset, HlOp::Conv {
				target: ConvTarget::R8,
				ovf: false,
				un: false,
				src_kind: NumKind::R4,
				src: entry.var,
				dst,
			});
			Ok(dst)
		};

		match (lhs.kind, rhs.kind) {
			(StackKind::I4, StackKind::I4) => Ok((NumKind::I4, lhs.var, rhs.var)),
			(StackKind::I8, StackKind::I8) => Ok((NumKind::I8, lhs.var, rhs.var)),
			(StackKind::R4, StackKind::R4) => Ok((NumKind::R4, lhs.var, rhs.var)),
			(StackKind::R8, StackKind::R8) => Ok((NumKind::R8, lhs.var, rhs.var)),
			(StackKind::R4, StackKind::R8) => {
				let lhs = widen(self, bb, il_offset, lhs, stack)?;
				Ok((NumKind::R8, lhs, rhs.var))
			},
			(StackKind::R8, StackKind::R4) => {
				let rhs = widen(self, bb, il_offset, rhs, stack)?;
				Ok((NumKind::R8, lhs.var, rhs))
			},
			// Native-int and by-ref operands run in the 64-bit lane; an I4
			// operand mixed with them is sign-extended on the fly.
			(a, b) if int64ish(a) && int64ish(b) => Ok((NumKind::I8, lhs.var, rhs.var)),
			(StackKind::I4, b) if int64ish(b) => {
				let ext = self.extend_i4(bb, il_offset, stack, lhs.var)?;
				Ok((NumKind::I8, ext, rhs.var))
			},
			(a, StackKind::I4) if int64ish(a) => {
				let ext = self.extend_i4(bb, il_offset, stack, rhs.var)?;
				Ok((NumKind::I8, lhs.var, ext))
			},
			_ => Err(VmError::BadImageFormat),
		}
	}

	fn extend_i4(
		&mut self,
		bb: BbId,
		il_offset: u32,
		stack: &mut Vec<StackEntry<'l>>,
		src: VarId,
	) -> VmResult<VarId> {
		let dst = self.push(stack, self.i8_sig(), StackKind::I8)?;
		stack.pop();
		self.emit(bb, il_offset, HlOp::Conv {
			target: ConvTarget::I8,
			ovf: false,
			un: false,
			src_kind: NumKind::I4,
			src,
			dst,
		});
		Ok(dst)
	}

	fn result_sig(&self, kind: NumKind, byref: bool, sample: &'l TypeSig<'l>) -> &'l TypeSig<'l> {
		if byref {
			return sample;
		}
		match kind {
			NumKind::I4 => self.i4_sig(),
			NumKind::I8 => self.i8_sig(),
			NumKind::R4 => self.r4_sig(),
			NumKind::R8 => self.r8_sig(),
		}
	}
}

#[derive(Copy, Clone, Eq, PartialEq)]
enum Flow {
	Normal,
	Terminated,
}

fn int64ish(kind: StackKind) -> bool {
	// Object references compare in the 64-bit lane too.
	matches!(kind, StackKind::I8 | StackKind::I | StackKind::ByRef | StackKind::Ref)
}

fn kind_of_reduce(reduce: ReduceType) -> StackKind {
	match reduce {
		ReduceType::I1 | ReduceType::U1 | ReduceType::I2 | ReduceType::U2 | ReduceType::I4 => {
			StackKind::I4
		},
		ReduceType::I8 => StackKind::I8,
		ReduceType::I => StackKind::I,
		ReduceType::R4 => StackKind::R4,
		ReduceType::R8 => StackKind::R8,
		ReduceType::Ref => StackKind::Ref,
		_ => StackKind::Value,
	}
}

/// The container and instantiation contexts a method's body resolves tokens
/// under, plus the module owning its rows.
pub fn resolution_contexts<'l>(
	ctx: &'l Context<'l>,
	method: &'l MethodInfo<'l>,
) -> VmResult<(&'l ModuleDef<'l>, GenericContainerContext<'l>, Option<GenericContext<'l>>)> {
	match method.generic_method() {
		Some(generic) => {
			let base = generic.base;
			let (base_class, _) = base.parent().base_declaration(ctx)?;
			let gcc = GenericContainerContext {
				class: base_class.generic_container(),
				method: base.generic_container(),
			};
			Ok((base_class.module(), gcc, Some(generic.context)))
		},
		None => {
			let (base_class, class_gc) = method.parent().base_declaration(ctx)?;
			let gcc = GenericContainerContext {
				class: base_class.generic_container(),
				method: method.generic_container(),
			};
			Ok((base_class.module(), gcc, class_gc))
		},
	}
}

impl<'l> Transformer<'l> {
	fn local_var(&self, index: u32) -> VmResult<VarId> {
		let id = self.arg_var_count + index;
		match (id as usize) < self.temps_var_floor() {
			true => Ok(id),
			false => Err(VmError::BadImageFormat),
		}
	}

	fn arg_var(&self, index: u32) -> VmResult<VarId> {
		match index < self.arg_var_count {
			true => Ok(index),
			false => Err(VmError::BadImageFormat),
		}
	}

	fn temps_var_floor(&self) -> usize {
		// Args and locals were allocated before any temporary.
		self.vars
			.iter()
			.position(|v| v.offset >= self.temps_base)
			.unwrap_or(self.vars.len())
	}

	fn byref_of(&self, sig: &'l TypeSig<'l>) -> &'l TypeSig<'l> {
		self.ctx.intern_sig(TypeSig {
			by_ref: true,
			..sig.to_canonical()
		})
	}

	fn resolve_method(&self, token: MetadataToken) -> VmResult<&'l MethodInfo<'l>> {
		self.module
			.get_method_by_token(self.ctx, token, &self.gcc, self.gc.as_ref())
	}

	fn resolve_field(&self, token: MetadataToken) -> VmResult<&'l FieldInfo<'l>> {
		self.module
			.get_field_by_token(self.ctx, token, &self.gcc, self.gc.as_ref())
	}

	fn resolve_class(&self, token: MetadataToken) -> VmResult<&'l Class<'l>> {
		self.module
			.get_class_by_type_token(self.ctx, token, &self.gcc, self.gc.as_ref())
	}

	fn resolve_class_sig(&self, token: MetadataToken) -> VmResult<&'l TypeSig<'l>> {
		self.module
			.get_sig_by_type_token(self.ctx, token, &self.gcc, self.gc.as_ref())
	}

	fn push_value_of(
		&mut self,
		stack: &mut Vec<StackEntry<'l>>,
		sig: &'l TypeSig<'l>,
	) -> VmResult<VarId> {
		let kind = self.kind_of_sig(sig)?;
		self.push(stack, sig, kind)
	}

	/// Pops the `count` argument entries of a call and returns the frame
	/// base slot plus their total slot footprint.
	fn pop_call_args(
		&mut self,
		stack: &mut Vec<StackEntry<'l>>,
		count: usize,
	) -> VmResult<(u16, u16)> {
		if stack.len() < count {
			return Err(VmError::BadImageFormat);
		}
		let mut total = 0u16;
		for _ in 0..count {
			let entry = self.pop(stack)?;
			total += self.vars[entry.var as usize].slots;
		}
		let frame_base = self.stack_top_offset(stack);
		Ok((frame_base, total))
	}

	fn lower_instruction(
		&mut self,
		bb: BbId,
		il_offset: u32,
		op: &OpCode<'l>,
		stack: &mut Vec<StackEntry<'l>>,
		prefixes: &mut PrefixState<'l>,
	) -> VmResult<Flow> {
		use OpCode::*;

		macro_rules! binary {
			($op: expr, $ovf: expr, $un: expr) => {{
				let rhs = self.pop(stack)?;
				let lhs = self.pop(stack)?;
				let (kind, lhs_var, rhs_var) = self.unify_numeric(bb, il_offset, stack, lhs, rhs)?;
				let result_kind = match (lhs.kind, rhs.kind) {
					(StackKind::ByRef, _) | (_, StackKind::ByRef) => StackKind::ByRef,
					(StackKind::I, _) | (_, StackKind::I) => StackKind::I,
					_ => lhs.kind,
				};
				let sig = match result_kind {
					StackKind::ByRef => lhs.sig,
					StackKind::I => self.i_sig(),
					_ => self.result_sig(kind, false, lhs.sig),
				};
				let dst = self.push(stack, sig, result_kind)?;
				self.emit(bb, il_offset, HlOp::Binary {
					op: $op,
					ovf: $ovf,
					un: $un,
					kind,
					lhs: lhs_var,
					rhs: rhs_var,
					dst,
				});
				Flow::Normal
			}};
		}

		macro_rules! shift {
			($op: expr) => {{
				let amount = self.pop(stack)?;
				let value = self.pop(stack)?;
				let kind = match value.kind {
					StackKind::I4 => NumKind::I4,
					StackKind::I8 | StackKind::I => NumKind::I8,
					_ => return Err(VmError::BadImageFormat),
				};
				let dst = self.push(stack, value.sig, value.kind)?;
				self.emit(bb, il_offset, HlOp::Shift {
					op: $op,
					kind,
					lhs: value.var,
					rhs: amount.var,
					dst,
				});
				Flow::Normal
			}};
		}

		macro_rules! compare {
			($cond: expr, $un: expr) => {{
				let rhs = self.pop(stack)?;
				let lhs = self.pop(stack)?;
				let (kind, lhs_var, rhs_var) = self.unify_numeric(bb, il_offset, stack, lhs, rhs)?;
				let dst = self.push(stack, self.i4_sig(), StackKind::I4)?;
				self.emit(bb, il_offset, HlOp::Compare {
					cond: $cond,
					un: $un,
					kind,
					lhs: lhs_var,
					rhs: rhs_var,
					dst,
				});
				Flow::Normal
			}};
		}

		macro_rules! branch_cmp {
			($cond: expr, $un: expr, $delta: expr, $next: expr) => {{
				let rhs = self.pop(stack)?;
				let lhs = self.pop(stack)?;
				let (kind, lhs_var, rhs_var) = self.unify_numeric(bb, il_offset, stack, lhs, rhs)?;
				let target = self.target_block($next, $delta)?;
				self.emit(bb, il_offset, HlOp::BranchCmp {
					cond: $cond,
					un: $un,
					kind,
					lhs: lhs_var,
					rhs: rhs_var,
					target,
				});
			}};
		}

		macro_rules! branch_cond {
			($negate: expr, $delta: expr, $next: expr) => {{
				let value = self.pop(stack)?;
				let kind = match value.kind {
					StackKind::I4 => NumKind::I4,
					StackKind::I8 | StackKind::I | StackKind::Ref | StackKind::ByRef => NumKind::I8,
					_ => return Err(VmError::BadImageFormat),
				};
				let target = self.target_block($next, $delta)?;
				self.emit(bb, il_offset, HlOp::BranchCond {
					negate: $negate,
					kind,
					src: value.var,
					target,
				});
			}};
		}

		macro_rules! conv {
			($target: expr, $ovf: expr, $un: expr, $push_sig: expr, $push_kind: expr) => {{
				let src = self.pop(stack)?;
				let src_kind = match src.kind {
					StackKind::I4 => NumKind::I4,
					StackKind::I8 | StackKind::I | StackKind::ByRef | StackKind::Ref => NumKind::I8,
					StackKind::R4 => NumKind::R4,
					StackKind::R8 => NumKind::R8,
					StackKind::Value => return Err(VmError::BadImageFormat),
				};
				let dst = self.push(stack, $push_sig, $push_kind)?;
				self.emit(bb, il_offset, HlOp::Conv {
					target: $target,
					ovf: $ovf,
					un: $un,
					src_kind,
					src: src.var,
					dst,
				});
				Flow::Normal
			}};
		}

		macro_rules! conv_i4 {
			($target: expr, $ovf: expr, $un: expr) => {
				conv!($target, $ovf, $un, self.i4_sig(), StackKind::I4)
			};
		}

		macro_rules! conv_i8 {
			($target: expr, $ovf: expr, $un: expr) => {
				conv!($target, $ovf, $un, self.i8_sig(), StackKind::I8)
			};
		}

		macro_rules! conv_native {
			($target: expr, $ovf: expr, $un: expr) => {
				conv!($target, $ovf, $un, self.i_sig(), StackKind::I)
			};
		}

		macro_rules! load_ind {
			($width: expr, $push_sig: expr, $push_kind: expr) => {{
				let addr = self.pop(stack)?;
				let dst = self.push(stack, $push_sig, $push_kind)?;
				self.emit(bb, il_offset, HlOp::LoadInd {
					width: $width,
					src: addr.var,
					dst,
					unaligned: prefixes.unaligned,
				});
				Flow::Normal
			}};
		}

		macro_rules! store_ind {
			($width: expr) => {{
				let value = self.pop(stack)?;
				let addr = self.pop(stack)?;
				self.emit(bb, il_offset, HlOp::StoreInd {
					width: $width,
					dest: addr.var,
					src: value.var,
					unaligned: prefixes.unaligned,
				});
				Flow::Normal
			}};
		}

		macro_rules! load_elem {
			($elem: expr, $push_sig: expr, $push_kind: expr) => {{
				let index = self.pop(stack)?;
				let arr = self.pop(stack)?;
				let dst = self.push(stack, $push_sig, $push_kind)?;
				self.emit(bb, il_offset, HlOp::LdElem {
					elem: $elem,
					arr: arr.var,
					index: index.var,
					dst,
				});
				Flow::Normal
			}};
		}

		macro_rules! store_elem {
			($elem: expr) => {{
				let value = self.pop(stack)?;
				let index = self.pop(stack)?;
				let arr = self.pop(stack)?;
				self.emit(bb, il_offset, HlOp::StElem {
					elem: $elem,
					arr: arr.var,
					index: index.var,
					src: value.var,
				});
				Flow::Normal
			}};
		}

		// Instruction end offsets feed relative branch targets.
		let end_of = |op: &OpCode| -> u32 {
			il_offset + il_size(op)
		};

		let mut consumed_prefixes = true;
		let flow = match op {
			nop | volatile_ | no_(_) => {
				// Volatility and fault-check hints carry no operational
				// meaning for this interpreter.
				if matches!(op, volatile_) {
					consumed_prefixes = false;
					prefixes.volatile_ = true;
				}
				Flow::Normal
			},
			dbg_break => Flow::Normal,
			unaligned_(_) => {
				consumed_prefixes = false;
				prefixes.unaligned = true;
				Flow::Normal
			},
			tail_ => {
				// Tail calls execute as ordinary calls.
				consumed_prefixes = false;
				prefixes.tail = true;
				Flow::Normal
			},
			readonly_ => {
				consumed_prefixes = false;
				prefixes.readonly = true;
				Flow::Normal
			},
			constrained_(token) => {
				consumed_prefixes = false;
				prefixes.constrained = Some(self.resolve_class(*token)?);
				Flow::Normal
			},

			ldarg_0 | ldarg_1 | ldarg_2 | ldarg_3 => {
				let index = match op {
					ldarg_0 => 0,
					ldarg_1 => 1,
					ldarg_2 => 2,
					_ => 3,
				};
				self.lower_load_var(bb, il_offset, stack, self.arg_var(index)?)?;
				Flow::Normal
			},
			ldarg_s(index) => {
				self.lower_load_var(bb, il_offset, stack, self.arg_var(*index as u32)?)?;
				Flow::Normal
			},
			ldarg(index) => {
				self.lower_load_var(bb, il_offset, stack, self.arg_var(*index as u32)?)?;
				Flow::Normal
			},
			ldloc_0 | ldloc_1 | ldloc_2 | ldloc_3 => {
				let index = match op {
					ldloc_0 => 0,
					ldloc_1 => 1,
					ldloc_2 => 2,
					_ => 3,
				};
				self.lower_load_var(bb, il_offset, stack, self.local_var(index)?)?;
				Flow::Normal
			},
			ldloc_s(index) => {
				self.lower_load_var(bb, il_offset, stack, self.local_var(*index as u32)?)?;
				Flow::Normal
			},
			ldloc(index) => {
				self.lower_load_var(bb, il_offset, stack, self.local_var(*index as u32)?)?;
				Flow::Normal
			},
			stloc_0 | stloc_1 | stloc_2 | stloc_3 => {
				let index = match op {
					stloc_0 => 0,
					stloc_1 => 1,
					stloc_2 => 2,
					_ => 3,
				};
				let value = self.pop(stack)?;
				let dst = self.local_var(index)?;
				self.emit(bb, il_offset, HlOp::Copy { src: value.var, dst });
				Flow::Normal
			},
			stloc_s(index) => {
				let value = self.pop(stack)?;
				let dst = self.local_var(*index as u32)?;
				self.emit(bb, il_offset, HlOp::Copy { src: value.var, dst });
				Flow::Normal
			},
			stloc(index) => {
				let value = self.pop(stack)?;
				let dst = self.local_var(*index as u32)?;
				self.emit(bb, il_offset, HlOp::Copy { src: value.var, dst });
				Flow::Normal
			},
			starg_s(index) => {
				let value = self.pop(stack)?;
				let dst = self.arg_var(*index as u32)?;
				self.emit(bb, il_offset, HlOp::Copy { src: value.var, dst });
				Flow::Normal
			},
			starg(index) => {
				let value = self.pop(stack)?;
				let dst = self.arg_var(*index as u32)?;
				self.emit(bb, il_offset, HlOp::Copy { src: value.var, dst });
				Flow::Normal
			},
			ldarga_s(index) => {
				let src = self.arg_var(*index as u32)?;
				let sig = self.byref_of(self.vars[src as usize].sig);
				let dst = self.push(stack, sig, StackKind::ByRef)?;
				self.emit(bb, il_offset, HlOp::LoadVarAddr { src, dst });
				Flow::Normal
			},
			ldarga(index) => {
				let src = self.arg_var(*index as u32)?;
				let sig = self.byref_of(self.vars[src as usize].sig);
				let dst = self.push(stack, sig, StackKind::ByRef)?;
				self.emit(bb, il_offset, HlOp::LoadVarAddr { src, dst });
				Flow::Normal
			},
			ldloca_s(index) => {
				let src = self.local_var(*index as u32)?;
				let sig = self.byref_of(self.vars[src as usize].sig);
				let dst = self.push(stack, sig, StackKind::ByRef)?;
				self.emit(bb, il_offset, HlOp::LoadVarAddr { src, dst });
				Flow::Normal
			},
			ldloca(index) => {
				let src = self.local_var(*index as u32)?;
				let sig = self.byref_of(self.vars[src as usize].sig);
				let dst = self.push(stack, sig, StackKind::ByRef)?;
				self.emit(bb, il_offset, HlOp::LoadVarAddr { src, dst });
				Flow::Normal
			},

			ldnull => {
				let sig = self.ctx.intern_sig(TypeSig::new_by_val(ElementType::Object));
				let dst = self.push(stack, sig, StackKind::Ref)?;
				self.emit(bb, il_offset, HlOp::LdNull { dst });
				Flow::Normal
			},
			ldc_i4_m1 | ldc_i4_0 | ldc_i4_1 | ldc_i4_2 | ldc_i4_3 | ldc_i4_4 | ldc_i4_5
			| ldc_i4_6 | ldc_i4_7 | ldc_i4_8 => {
				let value = match op {
					ldc_i4_m1 => -1,
					ldc_i4_0 => 0,
					ldc_i4_1 => 1,
					ldc_i4_2 => 2,
					ldc_i4_3 => 3,
					ldc_i4_4 => 4,
					ldc_i4_5 => 5,
					ldc_i4_6 => 6,
					ldc_i4_7 => 7,
					_ => 8,
				};
				let dst = self.push(stack, self.i4_sig(), StackKind::I4)?;
				self.emit(bb, il_offset, HlOp::LdcI4 { value, dst });
				Flow::Normal
			},
			ldc_i4_s(value) => {
				let dst = self.push(stack, self.i4_sig(), StackKind::I4)?;
				self.emit(bb, il_offset, HlOp::LdcI4 { value: *value as i32, dst });
				Flow::Normal
			},
			ldc_i4(value) => {
				let dst = self.push(stack, self.i4_sig(), StackKind::I4)?;
				self.emit(bb, il_offset, HlOp::LdcI4 { value: *value, dst });
				Flow::Normal
			},
			ldc_i8(value) => {
				let dst = self.push(stack, self.i8_sig(), StackKind::I8)?;
				self.emit(bb, il_offset, HlOp::LdcI8 { value: *value, dst });
				Flow::Normal
			},
			ldc_r4(value) => {
				let dst = self.push(stack, self.r4_sig(), StackKind::R4)?;
				self.emit(bb, il_offset, HlOp::LdcR4 { value: *value, dst });
				Flow::Normal
			},
			ldc_r8(value) => {
				let dst = self.push(stack, self.r8_sig(), StackKind::R8)?;
				self.emit(bb, il_offset, HlOp::LdcR8 { value: *value, dst });
				Flow::Normal
			},
			ldstr(token) => {
				if token.kind() != MetadataTokenKind::String {
					return Err(VmError::BadImageFormat);
				}
				let sig = self.ctx.intern_sig(TypeSig::new_by_val(ElementType::String));
				let dst = self.push(stack, sig, StackKind::Ref)?;
				self.emit(bb, il_offset, HlOp::LdStr { offset: token.index(), dst });
				Flow::Normal
			},

			dup => {
				let top = *stack.last().ok_or(VmError::BadImageFormat)?;
				let dst = self.push(stack, top.sig, top.kind)?;
				self.emit(bb, il_offset, HlOp::Copy { src: top.var, dst });
				Flow::Normal
			},
			pop => {
				self.pop(stack)?;
				Flow::Normal
			},

			add => binary!(BinOp::Add, false, false),
			sub => binary!(BinOp::Sub, false, false),
			mul => binary!(BinOp::Mul, false, false),
			div => binary!(BinOp::Div, false, false),
			div_un => binary!(BinOp::DivUn, false, true),
			rem => binary!(BinOp::Rem, false, false),
			rem_un => binary!(BinOp::RemUn, false, true),
			and => binary!(BinOp::And, false, false),
			or => binary!(BinOp::Or, false, false),
			xor => binary!(BinOp::Xor, false, false),
			add_ovf => binary!(BinOp::Add, true, false),
			add_ovf_un => binary!(BinOp::Add, true, true),
			sub_ovf => binary!(BinOp::Sub, true, false),
			sub_ovf_un => binary!(BinOp::Sub, true, true),
			mul_ovf => binary!(BinOp::Mul, true, false),
			mul_ovf_un => binary!(BinOp::Mul, true, true),
			shl => shift!(ShiftOp::Shl),
			shr => shift!(ShiftOp::Shr),
			shr_un => shift!(ShiftOp::ShrUn),
			neg => {
				let src = self.pop(stack)?;
				let kind = match src.kind {
					StackKind::I4 => NumKind::I4,
					StackKind::I8 | StackKind::I => NumKind::I8,
					StackKind::R4 => NumKind::R4,
					StackKind::R8 => NumKind::R8,
					_ => return Err(VmError::BadImageFormat),
				};
				let dst = self.push(stack, src.sig, src.kind)?;
				self.emit(bb, il_offset, HlOp::Unary { op: UnOp::Neg, kind, src: src.var, dst });
				Flow::Normal
			},
			not => {
				let src = self.pop(stack)?;
				let kind = match src.kind {
					StackKind::I4 => NumKind::I4,
					StackKind::I8 | StackKind::I => NumKind::I8,
					_ => return Err(VmError::BadImageFormat),
				};
				let dst = self.push(stack, src.sig, src.kind)?;
				self.emit(bb, il_offset, HlOp::Unary { op: UnOp::Not, kind, src: src.var, dst });
				Flow::Normal
			},

			conv_i1 => conv_i4!(ConvTarget::I1, false, false),
			conv_u1 => conv_i4!(ConvTarget::U1, false, false),
			conv_i2 => conv_i4!(ConvTarget::I2, false, false),
			conv_u2 => conv_i4!(ConvTarget::U2, false, false),
			conv_i4 => conv_i4!(ConvTarget::I4, false, false),
			conv_u4 => conv_i4!(ConvTarget::U4, false, false),
			conv_i8 => conv_i8!(ConvTarget::I8, false, false),
			conv_u8 => conv_i8!(ConvTarget::U8, false, false),
			conv_r4 => conv!(ConvTarget::R4, false, false, self.r4_sig(), StackKind::R4),
			conv_r8 => conv!(ConvTarget::R8, false, false, self.r8_sig(), StackKind::R8),
			conv_r_un => conv!(ConvTarget::R8, false, true, self.r8_sig(), StackKind::R8),
			conv_i => conv_native!(ConvTarget::I8, false, false),
			conv_u => conv_native!(ConvTarget::U8, false, false),
			conv_ovf_i1 => conv_i4!(ConvTarget::I1, true, false),
			conv_ovf_u1 => conv_i4!(ConvTarget::U1, true, false),
			conv_ovf_i2 => conv_i4!(ConvTarget::I2, true, false),
			conv_ovf_u2 => conv_i4!(ConvTarget::U2, true, false),
			conv_ovf_i4 => conv_i4!(ConvTarget::I4, true, false),
			conv_ovf_u4 => conv_i4!(ConvTarget::U4, true, false),
			conv_ovf_i8 => conv_i8!(ConvTarget::I8, true, false),
			conv_ovf_u8 => conv_i8!(ConvTarget::U8, true, false),
			conv_ovf_i => conv_native!(ConvTarget::I8, true, false),
			conv_ovf_u => conv_native!(ConvTarget::U8, true, false),
			conv_ovf_i1_un => conv_i4!(ConvTarget::I1, true, true),
			conv_ovf_u1_un => conv_i4!(ConvTarget::U1, true, true),
			conv_ovf_i2_un => conv_i4!(ConvTarget::I2, true, true),
			conv_ovf_u2_un => conv_i4!(ConvTarget::U2, true, true),
			conv_ovf_i4_un => conv_i4!(ConvTarget::I4, true, true),
			conv_ovf_u4_un => conv_i4!(ConvTarget::U4, true, true),
			conv_ovf_i8_un => conv_i8!(ConvTarget::I8, true, true),
			conv_ovf_u8_un => conv_i8!(ConvTarget::U8, true, true),
			conv_ovf_i_un => conv_native!(ConvTarget::I8, true, true),
			conv_ovf_u_un => conv_native!(ConvTarget::U8, true, true),

			ceq => compare!(Cond::Eq, false),
			cgt => compare!(Cond::Gt, false),
			cgt_un => compare!(Cond::Gt, true),
			clt => compare!(Cond::Lt, false),
			clt_un => compare!(Cond::Lt, true),

			br(d) => {
				let target = self.target_block(end_of(op), *d)?;
				self.emit(bb, il_offset, HlOp::Branch { target });
				Flow::Terminated
			},
			br_s(d) => {
				let target = self.target_block(end_of(op), *d as i32)?;
				self.emit(bb, il_offset, HlOp::Branch { target });
				Flow::Terminated
			},
			brtrue(d) => { branch_cond!(false, *d, end_of(op)); Flow::Normal },
			brtrue_s(d) => { branch_cond!(false, *d as i32, end_of(op)); Flow::Normal },
			brfalse(d) => { branch_cond!(true, *d, end_of(op)); Flow::Normal },
			brfalse_s(d) => { branch_cond!(true, *d as i32, end_of(op)); Flow::Normal },
			beq(d) => { branch_cmp!(Cond::Eq, false, *d, end_of(op)); Flow::Normal },
			beq_s(d) => { branch_cmp!(Cond::Eq, false, *d as i32, end_of(op)); Flow::Normal },
			bge(d) => { branch_cmp!(Cond::Ge, false, *d, end_of(op)); Flow::Normal },
			bge_s(d) => { branch_cmp!(Cond::Ge, false, *d as i32, end_of(op)); Flow::Normal },
			bgt(d) => { branch_cmp!(Cond::Gt, false, *d, end_of(op)); Flow::Normal },
			bgt_s(d) => { branch_cmp!(Cond::Gt, false, *d as i32, end_of(op)); Flow::Normal },
			ble(d) => { branch_cmp!(Cond::Le, false, *d, end_of(op)); Flow::Normal },
			ble_s(d) => { branch_cmp!(Cond::Le, false, *d as i32, end_of(op)); Flow::Normal },
			blt(d) => { branch_cmp!(Cond::Lt, false, *d, end_of(op)); Flow::Normal },
			blt_s(d) => { branch_cmp!(Cond::Lt, false, *d as i32, end_of(op)); Flow::Normal },
			bne_un(d) => { branch_cmp!(Cond::Ne, true, *d, end_of(op)); Flow::Normal },
			bne_un_s(d) => { branch_cmp!(Cond::Ne, true, *d as i32, end_of(op)); Flow::Normal },
			bge_un(d) => { branch_cmp!(Cond::Ge, true, *d, end_of(op)); Flow::Normal },
			bge_un_s(d) => { branch_cmp!(Cond::Ge, true, *d as i32, end_of(op)); Flow::Normal },
			bgt_un(d) => { branch_cmp!(Cond::Gt, true, *d, end_of(op)); Flow::Normal },
			bgt_un_s(d) => { branch_cmp!(Cond::Gt, true, *d as i32, end_of(op)); Flow::Normal },
			ble_un(d) => { branch_cmp!(Cond::Le, true, *d, end_of(op)); Flow::Normal },
			ble_un_s(d) => { branch_cmp!(Cond::Le, true, *d as i32, end_of(op)); Flow::Normal },
			blt_un(d) => { branch_cmp!(Cond::Lt, true, *d, end_of(op)); Flow::Normal },
			blt_un_s(d) => { branch_cmp!(Cond::Lt, true, *d as i32, end_of(op)); Flow::Normal },
			switch(table) => {
				let value = self.pop(stack)?;
				if value.kind != StackKind::I4 {
					return Err(VmError::BadImageFormat);
				}
				let next = il_offset + 1 + 4 + table.len() as u32 * 4;
				let mut targets = Vec::with_capacity(table.len());
				for delta in table.targets() {
					targets.push(self.target_block(next, delta)?);
				}
				self.emit(bb, il_offset, HlOp::Switch { src: value.var, targets });
				Flow::Normal
			},

			ldind_i1 => load_ind!(MemWidth::I1, self.i4_sig(), StackKind::I4),
			ldind_u1 => load_ind!(MemWidth::U1, self.i4_sig(), StackKind::I4),
			ldind_i2 => load_ind!(MemWidth::I2, self.i4_sig(), StackKind::I4),
			ldind_u2 => load_ind!(MemWidth::U2, self.i4_sig(), StackKind::I4),
			ldind_i4 | ldind_u4 => load_ind!(MemWidth::I4, self.i4_sig(), StackKind::I4),
			ldind_i8 => load_ind!(MemWidth::I8, self.i8_sig(), StackKind::I8),
			ldind_i => load_ind!(MemWidth::I8, self.i_sig(), StackKind::I),
			ldind_r4 => load_ind!(MemWidth::I4, self.r4_sig(), StackKind::R4),
			ldind_r8 => load_ind!(MemWidth::I8, self.r8_sig(), StackKind::R8),
			ldind_ref => {
				let sig = self.ctx.intern_sig(TypeSig::new_by_val(ElementType::Object));
				load_ind!(MemWidth::Ref, sig, StackKind::Ref)
			},
			stind_i1 => store_ind!(MemWidth::I1),
			stind_i2 => store_ind!(MemWidth::I2),
			stind_i4 => store_ind!(MemWidth::I4),
			stind_i8 | stind_i => store_ind!(MemWidth::I8),
			stind_r4 => store_ind!(MemWidth::I4),
			stind_r8 => store_ind!(MemWidth::I8),
			stind_ref => store_ind!(MemWidth::Ref),

			ldobj(token) => {
				let class = self.resolve_class(*token)?;
				let sig = self.resolve_class_sig(*token)?;
				let addr = self.pop(stack)?;
				let dst = self.push_value_of(stack, sig)?;
				self.emit(bb, il_offset, HlOp::LoadObj { class, src: addr.var, dst });
				Flow::Normal
			},
			stobj(token) => {
				let class = self.resolve_class(*token)?;
				let value = self.pop(stack)?;
				let addr = self.pop(stack)?;
				self.emit(bb, il_offset, HlOp::StoreObj { class, dest: addr.var, src: value.var });
				Flow::Normal
			},
			cpobj(token) => {
				let class = self.resolve_class(*token)?;
				let src = self.pop(stack)?;
				let dest = self.pop(stack)?;
				self.emit(bb, il_offset, HlOp::CpObjOp { class, dest: dest.var, src: src.var });
				Flow::Normal
			},
			initobj(token) => {
				let class = self.resolve_class(*token)?;
				let dest = self.pop(stack)?;
				self.emit(bb, il_offset, HlOp::InitObjOp { class, dest: dest.var });
				Flow::Normal
			},

			ldfld(token) => {
				let field = self.resolve_field(token.clone())?;
				let obj = self.pop(stack)?;
				let dst = self.push_value_of(stack, field.signature())?;
				self.emit(bb, il_offset, HlOp::LoadField {
					field,
					obj: obj.var,
					obj_is_value: obj.kind == StackKind::Value,
					dst,
					unaligned: prefixes.unaligned,
				});
				Flow::Normal
			},
			ldflda(token) => {
				let field = self.resolve_field(token.clone())?;
				let obj = self.pop(stack)?;
				let sig = self.byref_of(field.signature());
				let dst = self.push(stack, sig, StackKind::ByRef)?;
				self.emit(bb, il_offset, HlOp::LoadFieldAddr { field, obj: obj.var, dst });
				Flow::Normal
			},
			stfld(token) => {
				let field = self.resolve_field(token.clone())?;
				let value = self.pop(stack)?;
				let obj = self.pop(stack)?;
				self.emit(bb, il_offset, HlOp::StoreField {
					field,
					obj: obj.var,
					src: value.var,
					unaligned: prefixes.unaligned,
				});
				Flow::Normal
			},
			ldsfld(token) => {
				let field = self.resolve_field(token.clone())?;
				let dst = self.push_value_of(stack, field.signature())?;
				self.emit(bb, il_offset, HlOp::LoadStatic { field, dst });
				Flow::Normal
			},
			ldsflda(token) => {
				let field = self.resolve_field(token.clone())?;
				let sig = self.byref_of(field.signature());
				let dst = self.push(stack, sig, StackKind::ByRef)?;
				self.emit(bb, il_offset, HlOp::LoadStaticAddr { field, dst });
				Flow::Normal
			},
			stsfld(token) => {
				let field = self.resolve_field(token.clone())?;
				let value = self.pop(stack)?;
				self.emit(bb, il_offset, HlOp::StoreStatic { field, src: value.var });
				Flow::Normal
			},

			box_(token) => {
				let class = self.resolve_class(*token)?;
				let src = self.pop(stack)?;
				let sig = self.ctx.intern_sig(TypeSig::new_by_val(ElementType::Object));
				let dst = self.push(stack, sig, StackKind::Ref)?;
				match class.is_value_type() {
					true => self.emit(bb, il_offset, HlOp::BoxOp { class, src: src.var, dst }),
					false => self.emit(bb, il_offset, HlOp::Copy { src: src.var, dst }),
				}
				Flow::Normal
			},
			unbox(token) => {
				let class = self.resolve_class(*token)?;
				let src = self.pop(stack)?;
				let sig = self.byref_of(class.by_val_sig(self.ctx));
				let dst = self.push(stack, sig, StackKind::ByRef)?;
				self.emit(bb, il_offset, HlOp::UnboxOp { class, src: src.var, dst });
				Flow::Normal
			},
			unbox_any(token) => {
				let class = self.resolve_class(*token)?;
				let sig = self.resolve_class_sig(*token)?;
				let src = self.pop(stack)?;
				match class.is_value_type() {
					true => {
						let dst = self.push_value_of(stack, sig)?;
						self.emit(bb, il_offset, HlOp::UnboxAnyOp { class, src: src.var, dst });
					},
					false => {
						let dst = self.push(stack, sig, StackKind::Ref)?;
						self.emit(bb, il_offset, HlOp::CastClassOp {
							class,
							src: src.var,
							dst,
							is_isinst: false,
						});
					},
				}
				Flow::Normal
			},
			castclass(token) => {
				let class = self.resolve_class(*token)?;
				let sig = self.resolve_class_sig(*token)?;
				let src = self.pop(stack)?;
				let dst = self.push(stack, sig, StackKind::Ref)?;
				self.emit(bb, il_offset, HlOp::CastClassOp { class, src: src.var, dst, is_isinst: false });
				Flow::Normal
			},
			isinst(token) => {
				let class = self.resolve_class(*token)?;
				let sig = self.resolve_class_sig(*token)?;
				let src = self.pop(stack)?;
				let dst = self.push(stack, sig, StackKind::Ref)?;
				self.emit(bb, il_offset, HlOp::CastClassOp { class, src: src.var, dst, is_isinst: true });
				Flow::Normal
			},

			newobj(token) => {
				let ctor = self.resolve_method(*token)?;
				let arg_count = ctor.params().len();
				let (frame_base, total_arg_slots) = self.pop_call_args(stack, arg_count)?;
				let parent_sig = ctor.parent().by_val_sig(self.ctx);
				let dst = self.push_value_of(stack, parent_sig)?;
				let value_slots = self.vars[dst as usize].slots;
				self.high_water = self
					.high_water
					.max(frame_base + value_slots + 1 + total_arg_slots);
				self.emit(bb, il_offset, HlOp::NewObjOp { ctor, frame_base, total_arg_slots, dst });
				Flow::Normal
			},
			newarr(token) => {
				let element_sig = self.resolve_class_sig(*token)?;
				let class = self.ctx.szarray_class(element_sig)?;
				let len = self.pop(stack)?;
				let dst = self.push(stack, class.by_val_sig(self.ctx), StackKind::Ref)?;
				self.emit(bb, il_offset, HlOp::NewArrOp { class, len: len.var, dst });
				Flow::Normal
			},
			ldlen => {
				let arr = self.pop(stack)?;
				let dst = self.push(stack, self.i_sig(), StackKind::I)?;
				self.emit(bb, il_offset, HlOp::LdLenOp { arr: arr.var, dst });
				Flow::Normal
			},
			ldelema(token) => {
				let class = self.resolve_class(*token)?;
				let element_sig = self.resolve_class_sig(*token)?;
				let index = self.pop(stack)?;
				let arr = self.pop(stack)?;
				let dst = self.push(stack, self.byref_of(element_sig), StackKind::ByRef)?;
				self.emit(bb, il_offset, HlOp::LdElemAddr {
					class,
					arr: arr.var,
					index: index.var,
					dst,
					readonly: prefixes.readonly,
				});
				Flow::Normal
			},
			ldelem_i1 => load_elem!(ElemKind::Width(MemWidth::I1), self.i4_sig(), StackKind::I4),
			ldelem_u1 => load_elem!(ElemKind::Width(MemWidth::U1), self.i4_sig(), StackKind::I4),
			ldelem_i2 => load_elem!(ElemKind::Width(MemWidth::I2), self.i4_sig(), StackKind::I4),
			ldelem_u2 => load_elem!(ElemKind::Width(MemWidth::U2), self.i4_sig(), StackKind::I4),
			ldelem_i4 | ldelem_u4 => load_elem!(ElemKind::Width(MemWidth::I4), self.i4_sig(), StackKind::I4),
			ldelem_i8 => load_elem!(ElemKind::Width(MemWidth::I8), self.i8_sig(), StackKind::I8),
			ldelem_i => load_elem!(ElemKind::Width(MemWidth::I8), self.i_sig(), StackKind::I),
			ldelem_r4 => load_elem!(ElemKind::Width(MemWidth::I4), self.r4_sig(), StackKind::R4),
			ldelem_r8 => load_elem!(ElemKind::Width(MemWidth::I8), self.r8_sig(), StackKind::R8),
			ldelem_ref => {
				let sig = self.ctx.intern_sig(TypeSig::new_by_val(ElementType::Object));
				load_elem!(ElemKind::Width(MemWidth::Ref), sig, StackKind::Ref)
			},
			ldelem(token) => {
				let class = self.resolve_class(*token)?;
				let sig = self.resolve_class_sig(*token)?;
				let elem = self.elem_kind(class, sig)?;
				let kind = self.kind_of_sig(sig)?;
				let index = self.pop(stack)?;
				let arr = self.pop(stack)?;
				let dst = self.push(stack, sig, kind)?;
				self.emit(bb, il_offset, HlOp::LdElem { elem, arr: arr.var, index: index.var, dst });
				Flow::Normal
			},
			stelem_i1 => store_elem!(ElemKind::Width(MemWidth::I1)),
			stelem_i2 => store_elem!(ElemKind::Width(MemWidth::I2)),
			stelem_i4 => store_elem!(ElemKind::Width(MemWidth::I4)),
			stelem_i8 | stelem_i => store_elem!(ElemKind::Width(MemWidth::I8)),
			stelem_r4 => store_elem!(ElemKind::Width(MemWidth::I4)),
			stelem_r8 => store_elem!(ElemKind::Width(MemWidth::I8)),
			stelem_ref => store_elem!(ElemKind::Width(MemWidth::Ref)),
			stelem(token) => {
				let class = self.resolve_class(*token)?;
				let sig = self.resolve_class_sig(*token)?;
				let elem = self.elem_kind(class, sig)?;
				store_elem!(elem)
			},

			call(token) | callvirt(token) => {
				let mut method = self.resolve_method(*token)?;
				let mut is_virtual = matches!(op, callvirt(_));

				if let Some(constraint) = prefixes.constrained.take() {
					method = self.devirtualize_constrained(constraint, method)?;
					is_virtual = false;
				}
				if is_virtual && (!method.is_virtual() || method.is_final() || method.parent().is_sealed()) {
					// Devirtualized call sites take the direct path.
					is_virtual = false;
				}

				let arg_count = method.param_count_including_this();
				let (frame_base, total_arg_slots) = self.pop_call_args(stack, arg_count)?;
				let ret_slots = method.ret_slots(self.ctx)?;
				self.high_water = self
					.high_water
					.max(frame_base + total_arg_slots.max(ret_slots));
				let ret_val = match method.is_void_return() {
					true => None,
					false => Some(self.push_value_of(stack, method.return_sig())?),
				};
				self.emit(bb, il_offset, HlOp::Call { method, frame_base, ret: ret_val, is_virtual });
				Flow::Normal
			},
			calli(token) => {
				let sig = self.module.read_stand_alone_method_sig(
					self.ctx,
					*token,
					&self.gcc,
					self.gc.as_ref(),
				)?;
				let fnptr = self.pop(stack)?;
				let arg_count = sig.params.len() + sig.has_this() as usize;
				let (frame_base, total_arg_slots) = self.pop_call_args(stack, arg_count)?;
				let ret_slots = match sig.return_type.is_void() {
					true => 0,
					false => self.ctx.stack_slot_count(sig.return_type)?,
				};
				self.high_water = self
					.high_water
					.max(frame_base + total_arg_slots.max(ret_slots));
				let ret_val = match sig.return_type.is_void() {
					true => None,
					false => Some(self.push_value_of(stack, sig.return_type)?),
				};
				self.emit(bb, il_offset, HlOp::CallIndirect {
					total_arg_slots,
					ret_slots,
					fnptr: fnptr.var,
					frame_base,
					ret: ret_val,
				});
				Flow::Normal
			},
			ldftn(token) => {
				let method = self.resolve_method(*token)?;
				let dst = self.push(stack, self.i_sig(), StackKind::I)?;
				self.emit(bb, il_offset, HlOp::LdFtnOp { method, dst });
				Flow::Normal
			},
			ldvirtftn(token) => {
				let method = self.resolve_method(*token)?;
				let obj = self.pop(stack)?;
				let dst = self.push(stack, self.i_sig(), StackKind::I)?;
				self.emit(bb, il_offset, HlOp::LdVirtFtnOp { method, obj: obj.var, dst });
				Flow::Normal
			},

			ldtoken(token) => {
				let handle = match token.kind() {
					MetadataTokenKind::TypeDef
					| MetadataTokenKind::TypeRef
					| MetadataTokenKind::TypeSpec => {
						RuntimeHandle::Type(self.resolve_class_sig(*token)?)
					},
					MetadataTokenKind::Field => RuntimeHandle::Field(self.resolve_field(*token)?),
					MetadataTokenKind::MethodDef | MetadataTokenKind::MethodSpec => {
						RuntimeHandle::Method(self.resolve_method(*token)?)
					},
					MetadataTokenKind::MemberRef => {
						match self.module.get_member_by_member_ref_rid(
							self.ctx,
							token.index() as u32,
							&self.gcc,
							self.gc.as_ref(),
						)? {
							crate::structured::MemberHandle::Field(field) => RuntimeHandle::Field(field),
							crate::structured::MemberHandle::Method(method) => RuntimeHandle::Method(method),
						}
					},
					_ => return Err(VmError::BadImageFormat),
				};
				let dst = self.push(stack, self.i_sig(), StackKind::I)?;
				self.emit(bb, il_offset, HlOp::LdTokenOp { handle, dst });
				Flow::Normal
			},
			sizeof_(token) => {
				let sig = self.resolve_class_sig(*token)?;
				let (size, _) = self.ctx.value_layout(sig)?;
				let dst = self.push(stack, self.i4_sig(), StackKind::I4)?;
				self.emit(bb, il_offset, HlOp::LdcI4 { value: size as i32, dst });
				Flow::Normal
			},

			localloc => {
				let size = self.pop(stack)?;
				let dst = self.push(stack, self.i_sig(), StackKind::I)?;
				self.emit(bb, il_offset, HlOp::LocAllocOp { size: size.var, dst });
				Flow::Normal
			},
			ckfinite => {
				let src = self.pop(stack)?;
				let kind = match src.kind {
					StackKind::R4 => NumKind::R4,
					StackKind::R8 => NumKind::R8,
					_ => return Err(VmError::BadImageFormat),
				};
				let dst = self.push(stack, src.sig, src.kind)?;
				self.emit(bb, il_offset, HlOp::CkFiniteOp { kind, src: src.var, dst });
				Flow::Normal
			},
			initblk => {
				let size = self.pop(stack)?;
				let value = self.pop(stack)?;
				let addr = self.pop(stack)?;
				self.emit(bb, il_offset, HlOp::InitBlkOp {
					addr: addr.var,
					value: value.var,
					size: size.var,
				});
				Flow::Normal
			},
			cpblk => {
				let size = self.pop(stack)?;
				let src = self.pop(stack)?;
				let dest = self.pop(stack)?;
				self.emit(bb, il_offset, HlOp::CpBlkOp {
					dest: dest.var,
					src: src.var,
					size: size.var,
				});
				Flow::Normal
			},

			ret => {
				let src = match self.method.is_void_return() {
					true => {
						if !stack.is_empty() {
							return Err(VmError::BadImageFormat);
						}
						None
					},
					false => {
						let value = self.pop(stack)?;
						if !stack.is_empty() {
							return Err(VmError::BadImageFormat);
						}
						Some(value.var)
					},
				};
				self.emit(bb, il_offset, HlOp::Ret { src });
				Flow::Terminated
			},
			throw => {
				let ex = self.pop(stack)?;
				stack.clear();
				self.emit(bb, il_offset, HlOp::Throw { src: ex.var });
				Flow::Terminated
			},
			rethrow => {
				stack.clear();
				self.emit(bb, il_offset, HlOp::Rethrow);
				Flow::Terminated
			},
			leave(d) => {
				stack.clear();
				let target = self.target_block(end_of(op), *d)?;
				self.emit(bb, il_offset, HlOp::Leave { target });
				Flow::Terminated
			},
			leave_s(d) => {
				stack.clear();
				let target = self.target_block(end_of(op), *d as i32)?;
				self.emit(bb, il_offset, HlOp::Leave { target });
				Flow::Terminated
			},
			endfinally => {
				stack.clear();
				self.emit(bb, il_offset, HlOp::EndFinally);
				Flow::Terminated
			},
			endfilter => {
				let cond = self.pop(stack)?;
				stack.clear();
				self.emit(bb, il_offset, HlOp::EndFilter { src: cond.var });
				Flow::Terminated
			},

			jmp(_) | arglist | mkrefany(_) | refanyval(_) | refanytype => {
				return Err(VmError::NotImplemented);
			},
		};

		if consumed_prefixes {
			*prefixes = PrefixState::default();
		}
		Ok(flow)
	}

	fn elem_kind(&self, class: &'l Class<'l>, sig: &'l TypeSig<'l>) -> VmResult<ElemKind<'l>> {
		Ok(match self.ctx.reduce_type(sig)? {
			ReduceType::I1 => ElemKind::Width(MemWidth::I1),
			ReduceType::U1 => ElemKind::Width(MemWidth::U1),
			ReduceType::I2 => ElemKind::Width(MemWidth::I2),
			ReduceType::U2 => ElemKind::Width(MemWidth::U2),
			ReduceType::I4 => ElemKind::Width(MemWidth::I4),
			ReduceType::I8 | ReduceType::I => ElemKind::Width(MemWidth::I8),
			ReduceType::R4 => ElemKind::Width(MemWidth::I4),
			ReduceType::R8 => ElemKind::Width(MemWidth::I8),
			ReduceType::Ref => ElemKind::Width(MemWidth::Ref),
			_ => ElemKind::Value(class),
		})
	}

	/// `constrained.` call sites on value types bind directly to the
	/// constraint's implementation; anything else re-dispatches normally.
	fn devirtualize_constrained(
		&self,
		constraint: &'l Class<'l>,
		method: &'l MethodInfo<'l>,
	) -> VmResult<&'l MethodInfo<'l>> {
		if !constraint.is_value_type() {
			return Ok(method);
		}
		if let Some(found) = constraint.find_method_by_name_and_sig(
			self.ctx,
			method.name(),
			&crate::structured::MethodSig {
				flags: crate::structured::SIG_HAS_THIS,
				generic_param_count: 0,
				return_type: method.return_sig(),
				params: method.params().to_vec(),
			},
		)? {
			if std::ptr::eq(found.parent(), constraint) {
				return Ok(found);
			}
		}
		// The receiver would need boxing to dispatch on a base class; the
		// original routes this through its boxing helper.
		Err(VmError::NotImplemented)
	}

	fn lower_load_var(
		&mut self,
		bb: BbId,
		il_offset: u32,
		stack: &mut Vec<StackEntry<'l>>,
		src: VarId,
	) -> VmResult<()> {
		let var = self.vars[src as usize];
		let dst = self.push(stack, var.sig, var.kind)?;
		self.emit(bb, il_offset, HlOp::Copy { src, dst });
		Ok(())
	}
}

/// Encoded size of an IL instruction, for relative-target arithmetic.
fn il_size(op: &OpCode) -> u32 {
	use OpCode::*;
	match op {
		ldarg_s(_) | ldarga_s(_) | starg_s(_) | ldloc_s(_) | ldloca_s(_) | stloc_s(_)
		| ldc_i4_s(_) | br_s(_) | brfalse_s(_) | brtrue_s(_) | beq_s(_) | bge_s(_) | bgt_s(_)
		| ble_s(_) | blt_s(_) | bne_un_s(_) | bge_un_s(_) | bgt_un_s(_) | ble_un_s(_)
		| blt_un_s(_) | leave_s(_) => 2,
		ldc_i4(_) | ldc_r4(_) | br(_) | brfalse(_) | brtrue(_) | beq(_) | bge(_) | bgt(_)
		| ble(_) | blt(_) | bne_un(_) | bge_un(_) | bgt_un(_) | ble_un(_) | blt_un(_)
		| leave(_) | jmp(_) | call(_) | calli(_) | callvirt(_) | cpobj(_) | ldobj(_)
		| ldstr(_) | newobj(_) | castclass(_) | isinst(_) | unbox(_) | ldfld(_) | ldflda(_)
		| stfld(_) | ldsfld(_) | ldsflda(_) | stsfld(_) | stobj(_) | box_(_) | newarr(_)
		| ldelema(_) | ldelem(_) | stelem(_) | unbox_any(_) | refanyval(_) | mkrefany(_)
		| ldtoken(_) => 5,
		ldc_i8(_) | ldc_r8(_) => 9,
		switch(table) => 1 + 4 + table.len() as u32 * 4,
		ldftn(_) | ldvirtftn(_) | initobj(_) | constrained_(_) | sizeof_(_) => 6,
		arglist | ceq | cgt | cgt_un | clt | clt_un | localloc | endfilter | volatile_ | tail_
		| cpblk | initblk | rethrow | refanytype | readonly_ => 2,
		ldarg(_) | ldarga(_) | starg(_) | ldloc(_) | ldloca(_) | stloc(_) => 4,
		unaligned_(_) | no_(_) => 3,
		_ => 1,
	}
}
