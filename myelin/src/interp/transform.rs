//! Pass 2 of the transformer: lower the typed block graph into the flat
//! low-level instruction stream.
//!
//! Opcode variants are selected by operand reduce type, width and alignment;
//! every instruction referencing a class, method, field or string stores a
//! `u16` index into the method-local resolved-data table. Branches store
//! signed byte displacements relative to their own offset; offsets are
//! assigned assuming wide encodings everywhere, then instructions are
//! greedily downgraded to short forms and offsets recomputed until stable.

use fxhash::FxHashMap;

use crate::error::{VmError, VmResult};
use crate::interp::hl::{
	self, BbId, BinOp, Cond, ConvTarget, ElemKind, HlMethod, HlOp, MemWidth, NumKind, ShiftOp,
	StackKind, UnOp, VarId,
};
use crate::interp::llops::{self as ll, Inst};
use crate::interp::{InterpMethodInfo, IrExceptionClause, ResolvedData};
use crate::raw::body::ExceptionClauseKind;
use crate::raw::indices::metadata_token::MetadataToken;
use crate::structured::{Class, FieldInfo, MethodInfo, ReduceType};
use crate::vm::runtime::Runtime;
use crate::vm::shim::InvokerKind;

struct Emitted {
	inst: Inst,
	short: bool,
	ir_offset: u32,
	branch_bb: Option<BbId>,
	switch_bbs: Vec<BbId>,
}

pub struct LlTransformer<'r, 'l> {
	rt: &'l Runtime<'l>,
	method: &'l MethodInfo<'l>,
	hl: &'r HlMethod<'l>,
	emitted: Vec<Emitted>,
	bb_first_inst: Vec<usize>,
	bb_ir_offset: Vec<u32>,
	resolved: Vec<ResolvedData<'l>>,
	resolved_index: FxHashMap<(u8, usize), u16>,
}

impl<'r, 'l> LlTransformer<'r, 'l> {
	pub fn new(rt: &'l Runtime<'l>, method: &'l MethodInfo<'l>, hl: &'r HlMethod<'l>) -> Self {
		Self {
			rt,
			method,
			hl,
			emitted: vec![],
			bb_first_inst: vec![],
			bb_ir_offset: vec![],
			resolved: vec![],
			resolved_index: Default::default(),
		}
	}

	#[tracing::instrument(skip_all, fields(method = %self.method.name()))]
	pub fn run(mut self) -> VmResult<&'l InterpMethodInfo<'l>> {
		// Zero-initialize the locals area on entry when the body asks for it.
		if self.hl.body.init_locals && self.hl.locals_slots > 0 {
			let offset = self.hl.arg_slots;
			let inst = match self.hl.locals_slots {
				1 => Inst::InitLocals1(ll::InitLocals1 { offset }),
				2 => Inst::InitLocals2(ll::InitLocals2 { offset }),
				3 => Inst::InitLocals3(ll::InitLocals3 { offset }),
				4 => Inst::InitLocals4(ll::InitLocals4 { offset }),
				size => Inst::InitLocals(ll::InitLocals { offset, size }),
			};
			self.push_inst(inst);
		}

		let hl = self.hl;
		for block in &hl.blocks {
			self.bb_first_inst.push(self.emitted.len());
			for inst in &block.insts {
				self.lower(inst.il_offset, &inst.op)?;
			}
		}
		self.bb_ir_offset = vec![0; self.hl.blocks.len()];

		self.fix_point_offsets();
		let code = self.encode();

		let clauses = self.translate_clauses(code.len() as u32)?;
		let ctx = self.rt.ctx();
		let ret_slots = self.method.ret_slots(ctx)?;

		let interp = &*ctx.bump().alloc(InterpMethodInfo {
			code: ctx.bump().alloc_slice_copy(&code),
			resolved: ctx.bump().alloc_slice_copy(&self.resolved),
			clauses: ctx.bump().alloc_slice_copy(&clauses),
			arg_slots: self.hl.arg_slots,
			locals_slots: self.hl.locals_slots,
			frame_slots: self.hl.frame_slots,
			ret_slots,
		});
		Ok(interp)
	}

	// ### Emission helpers

	fn push_inst(&mut self, inst: Inst) {
		self.emitted.push(Emitted {
			inst,
			short: false,
			ir_offset: 0,
			branch_bb: None,
			switch_bbs: vec![],
		});
	}

	fn push_branch(&mut self, inst: Inst, target: BbId) {
		self.emitted.push(Emitted {
			inst,
			short: false,
			ir_offset: 0,
			branch_bb: Some(target),
			switch_bbs: vec![],
		});
	}

	fn var_offset(&self, var: VarId) -> u16 {
		self.hl.vars[var as usize].offset
	}

	fn resolve(&mut self, data: ResolvedData<'l>) -> VmResult<u16> {
		let key = match data {
			ResolvedData::Class(class) => (0u8, class as *const Class as usize),
			ResolvedData::Method(method) => (1, method as *const MethodInfo as usize),
			ResolvedData::Field(field) => (2, field as *const FieldInfo as usize),
			ResolvedData::Str(handle) => (3, handle.raw() as usize),
			ResolvedData::CalliSig { total_arg_slots, ret_slots } => {
				(4, (total_arg_slots as usize) << 16 | ret_slots as usize)
			},
			ResolvedData::Handle(handle) => (5, match handle {
				crate::interp::RuntimeHandle::Type(sig) => sig as *const _ as usize,
				crate::interp::RuntimeHandle::Field(field) => field as *const _ as usize,
				crate::interp::RuntimeHandle::Method(method) => method as *const _ as usize,
			}),
		};
		if let Some(index) = self.resolved_index.get(&key) {
			return Ok(*index);
		}
		let index = u16::try_from(self.resolved.len()).map_err(|_| VmError::ExecutionEngine)?;
		self.resolved.push(data);
		self.resolved_index.insert(key, index);
		Ok(index)
	}

	fn resolve_class(&mut self, class: &'l Class<'l>) -> VmResult<u16> {
		self.resolve(ResolvedData::Class(class))
	}

	fn resolve_method(&mut self, method: &'l MethodInfo<'l>) -> VmResult<u16> {
		self.resolve(ResolvedData::Method(method))
	}

	fn field_value_shape(&self, field: &'l FieldInfo<'l>) -> VmResult<(ReduceType, u32)> {
		let ctx = self.rt.ctx();
		let reduce = ctx.reduce_type(field.signature())?;
		let (size, _) = ctx.value_layout(field.signature())?;
		Ok((reduce, size))
	}

	// ### Per-op lowering

	fn lower(&mut self, il_offset: u32, op: &HlOp<'l>) -> VmResult<()> {
		let ctx = self.rt.ctx();
		match op {
			HlOp::Nop => {},

			HlOp::Copy { src, dst } => self.lower_copy(*src, *dst)?,

			HlOp::LoadVarAddr { src, dst } => {
				self.push_inst(Inst::LdLoca(ll::LdLoca {
					src: self.var_offset(*src),
					dst: self.var_offset(*dst),
				}));
			},

			HlOp::LdcI4 { value, dst } => {
				let dst = self.var_offset(*dst);
				match i16::try_from(*value) {
					Ok(value) => self.push_inst(Inst::LdcI4I2(ll::LdcI4I2 { dst, value })),
					Err(_) => self.push_inst(Inst::LdcI4I4(ll::LdcI4I4 { dst, value: *value })),
				}
			},
			HlOp::LdcI8 { value, dst } => {
				let dst = self.var_offset(*dst);
				if let Ok(value) = i16::try_from(*value) {
					self.push_inst(Inst::LdcI8I2(ll::LdcI8I2 { dst, value }));
				} else if let Ok(value) = i32::try_from(*value) {
					self.push_inst(Inst::LdcI8I4(ll::LdcI8I4 { dst, value }));
				} else {
					self.push_inst(Inst::LdcI8I8(ll::LdcI8I8 {
						dst,
						value_low: *value as u32 as i32,
						value_high: (*value >> 32) as i32,
					}));
				}
			},
			HlOp::LdcR4 { value, dst } => {
				self.push_inst(Inst::LdcI4I4(ll::LdcI4I4 {
					dst: self.var_offset(*dst),
					value: value.to_bits() as i32,
				}));
			},
			HlOp::LdcR8 { value, dst } => {
				let bits = value.to_bits();
				self.push_inst(Inst::LdcI8I8(ll::LdcI8I8 {
					dst: self.var_offset(*dst),
					value_low: bits as u32 as i32,
					value_high: (bits >> 32) as i32,
				}));
			},
			HlOp::LdNull { dst } => {
				self.push_inst(Inst::LdNull(ll::LdNull { dst: self.var_offset(*dst) }));
			},
			HlOp::LdStr { offset, dst } => {
				let handle = self.rt.intern_user_string(self.method, *offset)?;
				let str_idx = self.resolve(ResolvedData::Str(handle))?;
				self.push_inst(Inst::LdStr(ll::LdStr { str_idx, dst: self.var_offset(*dst) }));
			},
			HlOp::LdTokenOp { handle, dst } => {
				let handle_idx = self.resolve(ResolvedData::Handle(*handle))?;
				self.push_inst(Inst::LdToken(ll::LdToken {
					handle_idx,
					dst: self.var_offset(*dst),
				}));
			},

			HlOp::Binary { op, ovf, un, kind, lhs, rhs, dst } => {
				let inst = self.select_binary(*op, *ovf, *un, *kind, *lhs, *rhs, *dst)?;
				self.push_inst(inst);
			},
			HlOp::Shift { op, kind, lhs, rhs, dst } => {
				let (lhs, rhs, dst) = (self.var_offset(*lhs), self.var_offset(*rhs), self.var_offset(*dst));
				let inst = match (op, kind) {
					(ShiftOp::Shl, NumKind::I4) => Inst::ShlI4(ll::ShlI4 { lhs, rhs, dst }),
					(ShiftOp::Shl, _) => Inst::ShlI8(ll::ShlI8 { lhs, rhs, dst }),
					(ShiftOp::Shr, NumKind::I4) => Inst::ShrI4(ll::ShrI4 { lhs, rhs, dst }),
					(ShiftOp::Shr, _) => Inst::ShrI8(ll::ShrI8 { lhs, rhs, dst }),
					(ShiftOp::ShrUn, NumKind::I4) => Inst::ShrUnI4(ll::ShrUnI4 { lhs, rhs, dst }),
					(ShiftOp::ShrUn, _) => Inst::ShrUnI8(ll::ShrUnI8 { lhs, rhs, dst }),
				};
				self.push_inst(inst);
			},
			HlOp::Unary { op, kind, src, dst } => {
				let (src, dst) = (self.var_offset(*src), self.var_offset(*dst));
				let inst = match (op, kind) {
					(UnOp::Neg, NumKind::I4) => Inst::NegI4(ll::NegI4 { src, dst }),
					(UnOp::Neg, NumKind::I8) => Inst::NegI8(ll::NegI8 { src, dst }),
					(UnOp::Neg, NumKind::R4) => Inst::NegR4(ll::NegR4 { src, dst }),
					(UnOp::Neg, NumKind::R8) => Inst::NegR8(ll::NegR8 { src, dst }),
					(UnOp::Not, NumKind::I4) => Inst::NotI4(ll::NotI4 { src, dst }),
					(UnOp::Not, _) => Inst::NotI8(ll::NotI8 { src, dst }),
				};
				self.push_inst(inst);
			},
			HlOp::Conv { target, ovf, un, src_kind, src, dst } => {
				let inst = self.select_conv(*target, *ovf, *un, *src_kind, *src, *dst)?;
				self.push_inst(inst);
			},
			HlOp::Compare { cond, un, kind, lhs, rhs, dst } => {
				let inst = self.select_compare(*cond, *un, *kind, *lhs, *rhs, *dst)?;
				self.push_inst(inst);
			},

			HlOp::Branch { target } => {
				self.push_branch(Inst::Br(ll::Br { target: 0 }), *target);
			},
			HlOp::BranchCond { negate, kind, src, target } => {
				let cond = self.var_offset(*src);
				let inst = match (negate, kind) {
					(false, NumKind::I4) => Inst::BrTrueI4(ll::BrTrueI4 { cond, target: 0 }),
					(false, _) => Inst::BrTrueI8(ll::BrTrueI8 { cond, target: 0 }),
					(true, NumKind::I4) => Inst::BrFalseI4(ll::BrFalseI4 { cond, target: 0 }),
					(true, _) => Inst::BrFalseI8(ll::BrFalseI8 { cond, target: 0 }),
				};
				self.push_branch(inst, *target);
			},
			HlOp::BranchCmp { cond, un, kind, lhs, rhs, target } => {
				let inst = self.select_branch_cmp(*cond, *un, *kind, *lhs, *rhs)?;
				self.push_branch(inst, *target);
			},
			HlOp::Switch { src, targets } => {
				self.emitted.push(Emitted {
					inst: Inst::Switch(ll::Switch {
						index: self.var_offset(*src),
						num_targets: targets.len() as u32,
					}),
					short: false,
					ir_offset: 0,
					branch_bb: None,
					switch_bbs: targets.clone(),
				});
			},

			HlOp::LoadInd { width, src, dst, unaligned } => {
				let (src, dst) = (self.var_offset(*src), self.var_offset(*dst));
				let inst = match (width, unaligned) {
					(MemWidth::I1, _) => Inst::LdIndI1(ll::LdIndI1 { src, dst }),
					(MemWidth::U1, _) => Inst::LdIndU1(ll::LdIndU1 { src, dst }),
					(MemWidth::I2, false) => Inst::LdIndI2(ll::LdIndI2 { src, dst }),
					(MemWidth::I2, true) => Inst::LdIndI2Unaligned(ll::LdIndI2Unaligned { src, dst }),
					(MemWidth::U2, false) => Inst::LdIndU2(ll::LdIndU2 { src, dst }),
					(MemWidth::U2, true) => Inst::LdIndU2Unaligned(ll::LdIndU2Unaligned { src, dst }),
					(MemWidth::I4, false) => Inst::LdIndI4(ll::LdIndI4 { src, dst }),
					(MemWidth::I4, true) => Inst::LdIndI4Unaligned(ll::LdIndI4Unaligned { src, dst }),
					(MemWidth::I8, false) => Inst::LdIndI8(ll::LdIndI8 { src, dst }),
					(MemWidth::I8, true) => Inst::LdIndI8Unaligned(ll::LdIndI8Unaligned { src, dst }),
					(MemWidth::Ref, _) => Inst::LdIndRef(ll::LdIndRef { src, dst }),
				};
				self.push_inst(inst);
			},
			HlOp::StoreInd { width, dest, src, unaligned } => {
				let (dest, src) = (self.var_offset(*dest), self.var_offset(*src));
				let inst = match (width, unaligned) {
					(MemWidth::I1 | MemWidth::U1, _) => Inst::StIndI1(ll::StIndI1 { dest, src }),
					(MemWidth::I2 | MemWidth::U2, false) => Inst::StIndI2(ll::StIndI2 { dest, src }),
					(MemWidth::I2 | MemWidth::U2, true) => {
						Inst::StIndI2Unaligned(ll::StIndI2Unaligned { dest, src })
					},
					(MemWidth::I4, false) => Inst::StIndI4(ll::StIndI4 { dest, src }),
					(MemWidth::I4, true) => Inst::StIndI4Unaligned(ll::StIndI4Unaligned { dest, src }),
					(MemWidth::I8, false) => Inst::StIndI8(ll::StIndI8 { dest, src }),
					(MemWidth::I8, true) => Inst::StIndI8Unaligned(ll::StIndI8Unaligned { dest, src }),
					(MemWidth::Ref, _) => Inst::StIndRef(ll::StIndRef { dest, src }),
				};
				self.push_inst(inst);
			},

			HlOp::LoadObj { class, src, dst } => {
				let (src, dst) = (self.var_offset(*src), self.var_offset(*dst));
				let inst = match self.class_mem_width(class)? {
					Some(width) => ld_ind_inst(width, src, dst),
					None => {
						class.ensure_fields(ctx)?;
						Inst::LdObjAny(ll::LdObjAny {
							src,
							dst,
							size: class.instance_size() as u16,
						})
					},
				};
				self.push_inst(inst);
			},
			HlOp::StoreObj { class, dest, src } => {
				let (dest, src) = (self.var_offset(*dest), self.var_offset(*src));
				let inst = match self.class_mem_width(class)? {
					Some(width) => st_ind_inst(width, dest, src),
					None => {
						class.ensure_fields(ctx)?;
						Inst::StObjAny(ll::StObjAny {
							dest,
							src,
							size: class.instance_size() as u16,
						})
					},
				};
				self.push_inst(inst);
			},
			HlOp::CpObjOp { class, dest, src } => {
				let (dest, src) = (self.var_offset(*dest), self.var_offset(*src));
				let inst = match self.class_mem_width(class)? {
					Some(MemWidth::I1 | MemWidth::U1) => Inst::CpObjI1(ll::CpObjI1 { dest, src }),
					Some(MemWidth::I2 | MemWidth::U2) => Inst::CpObjI2(ll::CpObjI2 { dest, src }),
					Some(MemWidth::I4) => Inst::CpObjI4(ll::CpObjI4 { dest, src }),
					Some(MemWidth::I8 | MemWidth::Ref) => Inst::CpObjI8(ll::CpObjI8 { dest, src }),
					None => {
						class.ensure_fields(ctx)?;
						Inst::CpObjAny(ll::CpObjAny {
							dest,
							src,
							size: class.instance_size() as u16,
						})
					},
				};
				self.push_inst(inst);
			},
			HlOp::InitObjOp { class, dest } => {
				let addr = self.var_offset(*dest);
				let inst = match self.class_mem_width(class)? {
					Some(MemWidth::I1 | MemWidth::U1) => Inst::InitObjI1(ll::InitObjI1 { addr }),
					Some(MemWidth::I2 | MemWidth::U2) => Inst::InitObjI2(ll::InitObjI2 { addr }),
					Some(MemWidth::I4) => Inst::InitObjI4(ll::InitObjI4 { addr }),
					Some(MemWidth::I8 | MemWidth::Ref) => Inst::InitObjI8(ll::InitObjI8 { addr }),
					None => {
						class.ensure_fields(ctx)?;
						Inst::InitObjAny(ll::InitObjAny {
							addr,
							size: class.instance_size() as u16,
						})
					},
				};
				self.push_inst(inst);
			},

			HlOp::LoadField { field, obj, obj_is_value, dst, unaligned } => {
				self.lower_load_field(*field, *obj, *obj_is_value, *dst, *unaligned)?;
			},
			HlOp::LoadFieldAddr { field, obj, dst } => {
				let (obj, dst) = (self.var_offset(*obj), self.var_offset(*dst));
				let offset = field.offset_including_header();
				match u16::try_from(offset) {
					Ok(offset) => self.push_inst(Inst::Ldflda(ll::Ldflda { obj, dst, offset })),
					Err(_) => self.push_inst(Inst::LdfldaLarge(ll::LdfldaLarge { obj, dst, offset })),
				}
			},
			HlOp::StoreField { field, obj, src, unaligned } => {
				self.lower_store_field(*field, *obj, *src, *unaligned)?;
			},
			HlOp::LoadStatic { field, dst } => {
				self.lower_static(*field, *dst, StaticAccess::Load)?;
			},
			HlOp::LoadStaticAddr { field, dst } => {
				self.lower_static(*field, *dst, StaticAccess::Address)?;
			},
			HlOp::StoreStatic { field, src } => {
				self.lower_static(*field, *src, StaticAccess::Store)?;
			},

			HlOp::BoxOp { class, src, dst } => {
				let klass_idx = self.resolve_class(class)?;
				self.push_inst(Inst::Box(ll::Box {
					src: self.var_offset(*src),
					dst: self.var_offset(*dst),
					klass_idx,
				}));
			},
			HlOp::UnboxOp { class, src, dst } => {
				let klass_idx = self.resolve_class(class)?;
				self.push_inst(Inst::Unbox(ll::Unbox {
					src: self.var_offset(*src),
					dst: self.var_offset(*dst),
					klass_idx,
				}));
			},
			HlOp::UnboxAnyOp { class, src, dst } => {
				class.ensure_fields(ctx)?;
				let klass_idx = self.resolve_class(class)?;
				self.push_inst(Inst::UnboxAny(ll::UnboxAny {
					src: self.var_offset(*src),
					dst: self.var_offset(*dst),
					klass_idx,
					size: class.instance_size() as u16,
				}));
			},
			HlOp::CastClassOp { class, src, dst, is_isinst } => {
				let klass_idx = self.resolve_class(class)?;
				let (src, dst) = (self.var_offset(*src), self.var_offset(*dst));
				match is_isinst {
					false => self.push_inst(Inst::CastClass(ll::CastClass { src, dst, klass_idx })),
					true => self.push_inst(Inst::IsInst(ll::IsInst { src, dst, klass_idx })),
				}
			},

			HlOp::NewObjOp { ctor, frame_base, total_arg_slots, dst } => {
				let invoker = self.rt.ensure_invoker(ctor)?;
				let method_idx = self.resolve_method(ctor)?;
				let _ = dst;
				let inst = match (ctor.parent().is_value_type(), invoker.kind) {
					(true, InvokerKind::Interpreter) => Inst::NewValueTypeInterp(ll::NewValueTypeInterp {
						method_idx,
						frame_base: *frame_base,
						total_params_slots: *total_arg_slots as u32,
					}),
					(false, InvokerKind::Interpreter) => Inst::NewObjInterp(ll::NewObjInterp {
						method_idx,
						frame_base: *frame_base,
						total_params_slots: *total_arg_slots as u32,
					}),
					(false, InvokerKind::Intrinsic | InvokerKind::CustomIntrinsic) => {
						Inst::NewObjIntrinsic(ll::NewObjIntrinsic {
							method_idx,
							frame_base: *frame_base,
							total_params_slots: *total_arg_slots as u32,
						})
					},
					(false, _) => Inst::NewObjInternalCall(ll::NewObjInternalCall {
						method_idx,
						frame_base: *frame_base,
						total_params_slots: *total_arg_slots as u32,
					}),
					(true, _) => return Err(VmError::NotImplemented),
				};
				self.push_inst(inst);
			},
			HlOp::NewArrOp { class, len, dst } => {
				let klass_idx = self.resolve_class(class)?;
				self.push_inst(Inst::NewArr(ll::NewArr {
					len: self.var_offset(*len),
					dst: self.var_offset(*dst),
					klass_idx,
				}));
			},
			HlOp::LdLenOp { arr, dst } => {
				self.push_inst(Inst::LdLen(ll::LdLen {
					arr: self.var_offset(*arr),
					dst: self.var_offset(*dst),
				}));
			},
			HlOp::LdElemAddr { class, arr, index, dst, readonly } => {
				let klass_idx = self.resolve_class(class)?;
				let (arr, index, dst) = (
					self.var_offset(*arr),
					self.var_offset(*index),
					self.var_offset(*dst),
				);
				match readonly {
					false => self.push_inst(Inst::Ldelema(ll::Ldelema { arr, index, dst, klass_idx })),
					true => self.push_inst(Inst::LdelemaReadOnly(ll::LdelemaReadOnly {
						arr,
						index,
						dst,
						klass_idx,
					})),
				}
			},
			HlOp::LdElem { elem, arr, index, dst } => {
				let (arr, index, dst) = (
					self.var_offset(*arr),
					self.var_offset(*index),
					self.var_offset(*dst),
				);
				let inst = match elem {
					ElemKind::Width(MemWidth::I1) => Inst::LdelemI1(ll::LdelemI1 { arr, index, dst }),
					ElemKind::Width(MemWidth::U1) => Inst::LdelemU1(ll::LdelemU1 { arr, index, dst }),
					ElemKind::Width(MemWidth::I2) => Inst::LdelemI2(ll::LdelemI2 { arr, index, dst }),
					ElemKind::Width(MemWidth::U2) => Inst::LdelemU2(ll::LdelemU2 { arr, index, dst }),
					ElemKind::Width(MemWidth::I4) => Inst::LdelemI4(ll::LdelemI4 { arr, index, dst }),
					ElemKind::Width(MemWidth::I8) => Inst::LdelemI8(ll::LdelemI8 { arr, index, dst }),
					ElemKind::Width(MemWidth::Ref) => Inst::LdelemRef(ll::LdelemRef { arr, index, dst }),
					ElemKind::Value(class) => {
						class.ensure_fields(ctx)?;
						Inst::LdelemAny(ll::LdelemAny {
							arr,
							index,
							dst,
							size: class.instance_size() as u16,
						})
					},
				};
				self.push_inst(inst);
			},
			HlOp::StElem { elem, arr, index, src } => {
				let (arr, index, src) = (
					self.var_offset(*arr),
					self.var_offset(*index),
					self.var_offset(*src),
				);
				let inst = match elem {
					ElemKind::Width(MemWidth::I1 | MemWidth::U1) => {
						Inst::StelemI1(ll::StelemI1 { arr, index, src })
					},
					ElemKind::Width(MemWidth::I2 | MemWidth::U2) => {
						Inst::StelemI2(ll::StelemI2 { arr, index, src })
					},
					ElemKind::Width(MemWidth::I4) => Inst::StelemI4(ll::StelemI4 { arr, index, src }),
					ElemKind::Width(MemWidth::I8) => Inst::StelemI8(ll::StelemI8 { arr, index, src }),
					ElemKind::Width(MemWidth::Ref) => Inst::StelemRef(ll::StelemRef { arr, index, src }),
					ElemKind::Value(class) => {
						class.ensure_fields(ctx)?;
						Inst::StelemAny(ll::StelemAny {
							arr,
							index,
							src,
							size: class.instance_size() as u16,
						})
					},
				};
				self.push_inst(inst);
			},

			HlOp::Call { method, frame_base, ret, is_virtual } => {
				let invoker = self.rt.ensure_invoker(method)?;
				let method_idx = self.resolve_method(method)?;
				let _ = ret;
				let inst = match (is_virtual, invoker.kind) {
					(true, _) => Inst::CallVirtInterp(ll::CallVirtInterp {
						method_idx,
						frame_base: *frame_base,
					}),
					(false, InvokerKind::Interpreter) => Inst::CallInterp(ll::CallInterp {
						method_idx,
						frame_base: *frame_base,
					}),
					(false, InvokerKind::Intrinsic | InvokerKind::CustomIntrinsic) => {
						Inst::CallIntrinsic(ll::CallIntrinsic {
							method_idx,
							frame_base: *frame_base,
						})
					},
					(false, InvokerKind::PInvoke) => Inst::CallPInvoke(ll::CallPInvoke {
						method_idx,
						frame_base: *frame_base,
					}),
					(false, InvokerKind::RuntimeImpl) => {
						Inst::CallRuntimeImplemented(ll::CallRuntimeImplemented {
							method_idx,
							frame_base: *frame_base,
						})
					},
					(false, _) => Inst::CallInternalCall(ll::CallInternalCall {
						method_idx,
						frame_base: *frame_base,
					}),
				};
				self.push_inst(inst);
			},
			HlOp::CallIndirect { total_arg_slots, ret_slots, fnptr, frame_base, ret } => {
				let method_sig_idx = self.resolve(ResolvedData::CalliSig {
					total_arg_slots: *total_arg_slots,
					ret_slots: *ret_slots,
				})?;
				let _ = ret;
				// The second operand slot is shared with the variable index:
				// it names the frame slot holding the function pointer, not a
				// resolved-data entry.
				self.push_inst(Inst::CalliInterp(ll::CalliInterp {
					method_sig_idx,
					method_idx: self.var_offset(*fnptr),
					frame_base: *frame_base,
				}));
			},
			HlOp::LdFtnOp { method, dst } => {
				let method_idx = self.resolve_method(method)?;
				self.push_inst(Inst::Ldftn(ll::Ldftn {
					method_idx,
					dst: self.var_offset(*dst),
				}));
			},
			HlOp::LdVirtFtnOp { method, obj, dst } => {
				let method_idx = self.resolve_method(method)?;
				self.push_inst(Inst::Ldvirtftn(ll::Ldvirtftn {
					method_idx,
					obj: self.var_offset(*obj),
					dst: self.var_offset(*dst),
				}));
			},

			HlOp::Ret { src } => {
				let inst = match src {
					None => Inst::RetVoid(ll::RetVoid),
					Some(src_var) => {
						let var = self.hl.vars[*src_var as usize];
						let src = var.offset;
						match (var.kind, var.slots) {
							(StackKind::I4 | StackKind::R4, _) => Inst::RetI4(ll::RetI4 { src }),
							(StackKind::I8 | StackKind::I | StackKind::R8 | StackKind::Ref
							| StackKind::ByRef, _) => Inst::RetI8(ll::RetI8 { src }),
							(StackKind::Value, slots) => Inst::RetAny(ll::RetAny { src, size: slots }),
						}
					},
				};
				self.push_inst(inst);
			},
			HlOp::Throw { src } => {
				self.push_inst(Inst::Throw(ll::Throw { ex: self.var_offset(*src) }));
			},
			HlOp::Rethrow => self.push_inst(Inst::Rethrow(ll::Rethrow)),

			HlOp::Leave { target } => self.lower_leave(il_offset, *target)?,
			HlOp::EndFinally => {
				let inst = match self.enclosing_handler_kind(il_offset) {
					Some(ExceptionClauseKind::Fault) => Inst::EndFault(ll::EndFault),
					_ => Inst::EndFinally(ll::EndFinally),
				};
				self.push_inst(inst);
			},
			HlOp::EndFilter { src } => {
				self.push_inst(Inst::EndFilter(ll::EndFilter { cond: self.var_offset(*src) }));
			},

			HlOp::LocAllocOp { size, dst } => {
				self.push_inst(Inst::LocAlloc(ll::LocAlloc {
					size: self.var_offset(*size),
					dst: self.var_offset(*dst),
				}));
			},
			HlOp::CkFiniteOp { kind, src, dst } => {
				let (src, dst) = (self.var_offset(*src), self.var_offset(*dst));
				let inst = match kind {
					NumKind::R4 => Inst::CkFiniteR4(ll::CkFiniteR4 { src, dst }),
					_ => Inst::CkFiniteR8(ll::CkFiniteR8 { src, dst }),
				};
				self.push_inst(inst);
			},
			HlOp::InitBlkOp { addr, value, size } => {
				self.push_inst(Inst::InitBlk(ll::InitBlk {
					addr: self.var_offset(*addr),
					value: self.var_offset(*value),
					size: self.var_offset(*size),
				}));
			},
			HlOp::CpBlkOp { dest, src, size } => {
				self.push_inst(Inst::CpBlk(ll::CpBlk {
					dest: self.var_offset(*dest),
					src: self.var_offset(*src),
					size: self.var_offset(*size),
				}));
			},
		}
		Ok(())
	}

	fn lower_copy(&mut self, src_var: VarId, dst_var: VarId) -> VmResult<()> {
		let ctx = self.rt.ctx();
		let src = self.hl.vars[src_var as usize];
		let dst = self.hl.vars[dst_var as usize];
		let (src, dst_off) = (src, dst.offset);
		let src_off = src.offset;

		// Narrow destinations normalize on store; narrow sources normalize
		// on load; everything else is a slot copy sized by the destination.
		let dst_reduce = ctx.reduce_type(dst.sig).unwrap_or(ReduceType::I8);
		let src_reduce = ctx.reduce_type(src.sig).unwrap_or(ReduceType::I8);
		let inst = match (dst_reduce, src_reduce) {
			(ReduceType::I1 | ReduceType::U1, _) => {
				Inst::StLocI1(ll::StLocI1 { src: src_off, dst: dst_off })
			},
			(ReduceType::I2 | ReduceType::U2, _) => {
				Inst::StLocI2(ll::StLocI2 { src: src_off, dst: dst_off })
			},
			(_, ReduceType::I1) => Inst::LdLocI1(ll::LdLocI1 { src: src_off, dst: dst_off }),
			(_, ReduceType::U1) => Inst::LdLocU1(ll::LdLocU1 { src: src_off, dst: dst_off }),
			(_, ReduceType::I2) => Inst::LdLocI2(ll::LdLocI2 { src: src_off, dst: dst_off }),
			(_, ReduceType::U2) => Inst::LdLocU2(ll::LdLocU2 { src: src_off, dst: dst_off }),
			_ => match (dst.kind, dst.slots) {
				(StackKind::I4 | StackKind::R4, 1) => Inst::LdLocI4(ll::LdLocI4 { src: src_off, dst: dst_off }),
				(StackKind::Value, slots) if slots > 1 => Inst::LdLocAny(ll::LdLocAny {
					src: src_off,
					dst: dst_off,
					size: slots,
				}),
				_ => Inst::LdLocI8(ll::LdLocI8 { src: src_off, dst: dst_off }),
			},
		};
		self.push_inst(inst);
		Ok(())
	}

	fn lower_load_field(
		&mut self,
		field: &'l FieldInfo<'l>,
		obj_var: VarId,
		obj_is_value: bool,
		dst_var: VarId,
		unaligned: bool,
	) -> VmResult<()> {
		let (reduce, size) = self.field_value_shape(field)?;
		let obj = self.var_offset(obj_var);
		let dst = self.var_offset(dst_var);
		let offset = match obj_is_value {
			// Value receivers on the stack address their own slots directly.
			true => field.offset(),
			false => field.offset_including_header(),
		};

		if obj_is_value {
			let offset = u16::try_from(offset).map_err(|_| VmError::TypeLoad)?;
			let inst = match reduce {
				ReduceType::I1 => Inst::LdvfldI1(ll::LdvfldI1 { src: obj, dst, offset }),
				ReduceType::U1 => Inst::LdvfldU1(ll::LdvfldU1 { src: obj, dst, offset }),
				ReduceType::I2 => Inst::LdvfldI2(ll::LdvfldI2 { src: obj, dst, offset }),
				ReduceType::U2 => Inst::LdvfldU2(ll::LdvfldU2 { src: obj, dst, offset }),
				ReduceType::I4 | ReduceType::R4 => Inst::LdvfldI4(ll::LdvfldI4 { src: obj, dst, offset }),
				ReduceType::I8 | ReduceType::I | ReduceType::R8 | ReduceType::Ref => {
					Inst::LdvfldI8(ll::LdvfldI8 { src: obj, dst, offset })
				},
				_ => Inst::LdvfldAny(ll::LdvfldAny { src: obj, dst, offset, size: size as u16 }),
			};
			self.push_inst(inst);
			return Ok(());
		}

		if let Ok(offset) = u16::try_from(offset) {
			let inst = match (reduce, unaligned) {
				(ReduceType::I1, _) => Inst::LdfldI1(ll::LdfldI1 { obj, dst, offset }),
				(ReduceType::U1, _) => Inst::LdfldU1(ll::LdfldU1 { obj, dst, offset }),
				(ReduceType::I2, false) => Inst::LdfldI2(ll::LdfldI2 { obj, dst, offset }),
				(ReduceType::I2, true) => Inst::LdfldI2Unaligned(ll::LdfldI2Unaligned { obj, dst, offset }),
				(ReduceType::U2, false) => Inst::LdfldU2(ll::LdfldU2 { obj, dst, offset }),
				(ReduceType::U2, true) => Inst::LdfldU2Unaligned(ll::LdfldU2Unaligned { obj, dst, offset }),
				(ReduceType::I4 | ReduceType::R4, false) => Inst::LdfldI4(ll::LdfldI4 { obj, dst, offset }),
				(ReduceType::I4 | ReduceType::R4, true) => {
					Inst::LdfldI4Unaligned(ll::LdfldI4Unaligned { obj, dst, offset })
				},
				(ReduceType::I8 | ReduceType::I | ReduceType::R8 | ReduceType::Ref, false) => {
					Inst::LdfldI8(ll::LdfldI8 { obj, dst, offset })
				},
				(ReduceType::I8 | ReduceType::I | ReduceType::R8 | ReduceType::Ref, true) => {
					Inst::LdfldI8Unaligned(ll::LdfldI8Unaligned { obj, dst, offset })
				},
				_ => Inst::LdfldAny(ll::LdfldAny { obj, dst, offset, size: size as u16 }),
			};
			self.push_inst(inst);
		} else {
			let inst = match reduce {
				ReduceType::I1 => Inst::LdfldI1Large(ll::LdfldI1Large { obj, dst, offset }),
				ReduceType::U1 => Inst::LdfldU1Large(ll::LdfldU1Large { obj, dst, offset }),
				ReduceType::I2 => Inst::LdfldI2Large(ll::LdfldI2Large { obj, dst, offset }),
				ReduceType::U2 => Inst::LdfldU2Large(ll::LdfldU2Large { obj, dst, offset }),
				ReduceType::I4 | ReduceType::R4 => Inst::LdfldI4Large(ll::LdfldI4Large { obj, dst, offset }),
				ReduceType::I8 | ReduceType::I | ReduceType::R8 | ReduceType::Ref => {
					Inst::LdfldI8Large(ll::LdfldI8Large { obj, dst, offset })
				},
				_ => Inst::LdfldAnyLarge(ll::LdfldAnyLarge { obj, dst, offset, size: size as u16 }),
			};
			self.push_inst(inst);
		}
		Ok(())
	}

	fn lower_store_field(
		&mut self,
		field: &'l FieldInfo<'l>,
		obj_var: VarId,
		src_var: VarId,
		unaligned: bool,
	) -> VmResult<()> {
		let (reduce, size) = self.field_value_shape(field)?;
		let obj = self.var_offset(obj_var);
		let src = self.var_offset(src_var);
		let offset = field.offset_including_header();

		if let Ok(offset) = u16::try_from(offset) {
			let inst = match (reduce, unaligned) {
				(ReduceType::I1 | ReduceType::U1, _) => Inst::StfldI1(ll::StfldI1 { obj, src, offset }),
				(ReduceType::I2 | ReduceType::U2, false) => Inst::StfldI2(ll::StfldI2 { obj, src, offset }),
				(ReduceType::I2 | ReduceType::U2, true) => {
					Inst::StfldI2Unaligned(ll::StfldI2Unaligned { obj, src, offset })
				},
				(ReduceType::I4 | ReduceType::R4, false) => Inst::StfldI4(ll::StfldI4 { obj, src, offset }),
				(ReduceType::I4 | ReduceType::R4, true) => {
					Inst::StfldI4Unaligned(ll::StfldI4Unaligned { obj, src, offset })
				},
				(ReduceType::I8 | ReduceType::I | ReduceType::R8 | ReduceType::Ref, false) => {
					Inst::StfldI8(ll::StfldI8 { obj, src, offset })
				},
				(ReduceType::I8 | ReduceType::I | ReduceType::R8 | ReduceType::Ref, true) => {
					Inst::StfldI8Unaligned(ll::StfldI8Unaligned { obj, src, offset })
				},
				_ => Inst::StfldAny(ll::StfldAny { obj, src, offset, size: size as u16 }),
			};
			self.push_inst(inst);
		} else {
			let inst = match reduce {
				ReduceType::I1 | ReduceType::U1 => Inst::StfldI1Large(ll::StfldI1Large { obj, src, offset }),
				ReduceType::I2 | ReduceType::U2 => Inst::StfldI2Large(ll::StfldI2Large { obj, src, offset }),
				ReduceType::I4 | ReduceType::R4 => Inst::StfldI4Large(ll::StfldI4Large { obj, src, offset }),
				ReduceType::I8 | ReduceType::I | ReduceType::R8 | ReduceType::Ref => {
					Inst::StfldI8Large(ll::StfldI8Large { obj, src, offset })
				},
				_ => Inst::StfldAnyLarge(ll::StfldAnyLarge { obj, src, offset, size: size as u16 }),
			};
			self.push_inst(inst);
		}
		Ok(())
	}

	fn lower_static(&mut self, field: &'l FieldInfo<'l>, var: VarId, access: StaticAccess) -> VmResult<()> {
		let parent = field.parent();
		parent.ensure_fields(self.rt.ctx())?;
		let klass_idx = self.resolve_class(parent)?;
		let (reduce, size) = self.field_value_shape(field)?;
		let offset = u16::try_from(field.offset()).map_err(|_| VmError::TypeLoad)?;
		let slot = self.var_offset(var);

		let inst = match access {
			StaticAccess::Address => match field.has_rva() {
				false => Inst::Ldsflda(ll::Ldsflda { dst: slot, klass_idx, offset }),
				true => Inst::LdsfldRvaData(ll::LdsfldRvaData { dst: slot, klass_idx, offset }),
			},
			StaticAccess::Load => match reduce {
				ReduceType::I1 => Inst::LdsfldI1(ll::LdsfldI1 { dst: slot, klass_idx, offset }),
				ReduceType::U1 => Inst::LdsfldU1(ll::LdsfldU1 { dst: slot, klass_idx, offset }),
				ReduceType::I2 => Inst::LdsfldI2(ll::LdsfldI2 { dst: slot, klass_idx, offset }),
				ReduceType::U2 => Inst::LdsfldU2(ll::LdsfldU2 { dst: slot, klass_idx, offset }),
				ReduceType::I4 | ReduceType::R4 => Inst::LdsfldI4(ll::LdsfldI4 { dst: slot, klass_idx, offset }),
				ReduceType::I8 | ReduceType::I | ReduceType::R8 | ReduceType::Ref => {
					Inst::LdsfldI8(ll::LdsfldI8 { dst: slot, klass_idx, offset })
				},
				_ => Inst::LdsfldAny(ll::LdsfldAny { dst: slot, klass_idx, offset, size: size as u16 }),
			},
			StaticAccess::Store => match reduce {
				ReduceType::I1 | ReduceType::U1 => Inst::StsfldI1(ll::StsfldI1 { src: slot, klass_idx, offset }),
				ReduceType::I2 | ReduceType::U2 => Inst::StsfldI2(ll::StsfldI2 { src: slot, klass_idx, offset }),
				ReduceType::I4 | ReduceType::R4 => Inst::StsfldI4(ll::StsfldI4 { src: slot, klass_idx, offset }),
				ReduceType::I8 | ReduceType::I | ReduceType::R8 | ReduceType::Ref => {
					Inst::StsfldI8(ll::StsfldI8 { src: slot, klass_idx, offset })
				},
				_ => Inst::StsfldAny(ll::StsfldAny { src: slot, klass_idx, offset, size: size as u16 }),
			},
		};
		self.push_inst(inst);
		Ok(())
	}

	fn class_mem_width(&self, class: &'l Class<'l>) -> VmResult<Option<MemWidth>> {
		let ctx = self.rt.ctx();
		let sig = class.by_val_sig(ctx);
		Ok(match ctx.reduce_type(sig)? {
			ReduceType::I1 => Some(MemWidth::I1),
			ReduceType::U1 => Some(MemWidth::U1),
			ReduceType::I2 => Some(MemWidth::I2),
			ReduceType::U2 => Some(MemWidth::U2),
			ReduceType::I4 | ReduceType::R4 => Some(MemWidth::I4),
			ReduceType::I8 | ReduceType::I | ReduceType::R8 => Some(MemWidth::I8),
			ReduceType::Ref => Some(MemWidth::Ref),
			_ => None,
		})
	}

	// ### Arithmetic / compare / conversion selection

	#[allow(clippy::too_many_arguments)]
	fn select_binary(
		&mut self,
		op: BinOp,
		ovf: bool,
		un: bool,
		kind: NumKind,
		lhs: VarId,
		rhs: VarId,
		dst: VarId,
	) -> VmResult<Inst> {
		let (lhs, rhs, dst) = (self.var_offset(lhs), self.var_offset(rhs), self.var_offset(dst));

		macro_rules! pick {
			($i4: ident, $i8: ident, $r4: ident, $r8: ident) => {
				match kind {
					NumKind::I4 => Inst::$i4(ll::$i4 { lhs, rhs, dst }),
					NumKind::I8 => Inst::$i8(ll::$i8 { lhs, rhs, dst }),
					NumKind::R4 => Inst::$r4(ll::$r4 { lhs, rhs, dst }),
					NumKind::R8 => Inst::$r8(ll::$r8 { lhs, rhs, dst }),
				}
			};
		}
		macro_rules! pick_int {
			($i4: ident, $i8: ident) => {
				match kind {
					NumKind::I4 => Inst::$i4(ll::$i4 { lhs, rhs, dst }),
					NumKind::I8 => Inst::$i8(ll::$i8 { lhs, rhs, dst }),
					_ => return Err(VmError::BadImageFormat),
				}
			};
		}

		Ok(match (op, ovf, un) {
			(BinOp::Add, false, _) => pick!(AddI4, AddI8, AddR4, AddR8),
			(BinOp::Sub, false, _) => pick!(SubI4, SubI8, SubR4, SubR8),
			(BinOp::Mul, false, _) => pick!(MulI4, MulI8, MulR4, MulR8),
			(BinOp::Div, false, false) => pick!(DivI4, DivI8, DivR4, DivR8),
			(BinOp::DivUn, _, _) => pick_int!(DivUnI4, DivUnI8),
			(BinOp::Rem, false, false) => pick!(RemI4, RemI8, RemR4, RemR8),
			(BinOp::RemUn, _, _) => pick_int!(RemUnI4, RemUnI8),
			(BinOp::And, _, _) => pick_int!(AndI4, AndI8),
			(BinOp::Or, _, _) => pick_int!(OrI4, OrI8),
			(BinOp::Xor, _, _) => pick_int!(XorI4, XorI8),
			(BinOp::Add, true, false) => pick_int!(AddOvfI4, AddOvfI8),
			(BinOp::Add, true, true) => pick_int!(AddOvfUnI4, AddOvfUnI8),
			(BinOp::Sub, true, false) => pick_int!(SubOvfI4, SubOvfI8),
			(BinOp::Sub, true, true) => pick_int!(SubOvfUnI4, SubOvfUnI8),
			(BinOp::Mul, true, false) => pick_int!(MulOvfI4, MulOvfI8),
			(BinOp::Mul, true, true) => pick_int!(MulOvfUnI4, MulOvfUnI8),
			_ => return Err(VmError::BadImageFormat),
		})
	}

	fn select_compare(
		&mut self,
		cond: Cond,
		un: bool,
		kind: NumKind,
		lhs: VarId,
		rhs: VarId,
		dst: VarId,
	) -> VmResult<Inst> {
		let (lhs, rhs, dst) = (self.var_offset(lhs), self.var_offset(rhs), self.var_offset(dst));

		macro_rules! pick {
			($i4: ident, $i8: ident, $r4: ident, $r8: ident) => {
				match kind {
					NumKind::I4 => Inst::$i4(ll::$i4 { lhs, rhs, dst }),
					NumKind::I8 => Inst::$i8(ll::$i8 { lhs, rhs, dst }),
					NumKind::R4 => Inst::$r4(ll::$r4 { lhs, rhs, dst }),
					NumKind::R8 => Inst::$r8(ll::$r8 { lhs, rhs, dst }),
				}
			};
		}

		Ok(match (cond, un) {
			(Cond::Eq, _) => pick!(CeqI4, CeqI8, CeqR4, CeqR8),
			(Cond::Gt, false) => pick!(CgtI4, CgtI8, CgtR4, CgtR8),
			(Cond::Gt, true) => pick!(CgtUnI4, CgtUnI8, CgtUnR4, CgtUnR8),
			(Cond::Lt, false) => pick!(CltI4, CltI8, CltR4, CltR8),
			(Cond::Lt, true) => pick!(CltUnI4, CltUnI8, CltUnR4, CltUnR8),
			_ => return Err(VmError::BadImageFormat),
		})
	}

	fn select_branch_cmp(
		&mut self,
		cond: Cond,
		un: bool,
		kind: NumKind,
		lhs: VarId,
		rhs: VarId,
	) -> VmResult<Inst> {
		let (lhs, rhs) = (self.var_offset(lhs), self.var_offset(rhs));
		let target = 0;

		macro_rules! pick {
			($i4: ident, $i8: ident, $r4: ident, $r8: ident) => {
				match kind {
					NumKind::I4 => Inst::$i4(ll::$i4 { lhs, rhs, target }),
					NumKind::I8 => Inst::$i8(ll::$i8 { lhs, rhs, target }),
					NumKind::R4 => Inst::$r4(ll::$r4 { lhs, rhs, target }),
					NumKind::R8 => Inst::$r8(ll::$r8 { lhs, rhs, target }),
				}
			};
		}

		Ok(match (cond, un) {
			(Cond::Eq, false) => pick!(BeqI4, BeqI8, BeqR4, BeqR8),
			(Cond::Ne, _) => pick!(BneUnI4, BneUnI8, BneUnR4, BneUnR8),
			(Cond::Ge, false) => pick!(BgeI4, BgeI8, BgeR4, BgeR8),
			(Cond::Ge, true) => pick!(BgeUnI4, BgeUnI8, BgeUnR4, BgeUnR8),
			(Cond::Gt, false) => pick!(BgtI4, BgtI8, BgtR4, BgtR8),
			(Cond::Gt, true) => pick!(BgtUnI4, BgtUnI8, BgtUnR4, BgtUnR8),
			(Cond::Le, false) => pick!(BleI4, BleI8, BleR4, BleR8),
			(Cond::Le, true) => pick!(BleUnI4, BleUnI8, BleUnR4, BleUnR8),
			(Cond::Lt, false) => pick!(BltI4, BltI8, BltR4, BltR8),
			(Cond::Lt, true) => pick!(BltUnI4, BltUnI8, BltUnR4, BltUnR8),
			(Cond::Eq, true) => pick!(BeqI4, BeqI8, BeqR4, BeqR8),
		})
	}

	fn select_conv(
		&mut self,
		target: ConvTarget,
		ovf: bool,
		un: bool,
		src_kind: NumKind,
		src: VarId,
		dst: VarId,
	) -> VmResult<Inst> {
		let (src, dst) = (self.var_offset(src), self.var_offset(dst));

		macro_rules! by_src {
			($i4: ident, $i8: ident, $r4: ident, $r8: ident) => {
				match src_kind {
					NumKind::I4 => Inst::$i4(ll::$i4 { src, dst }),
					NumKind::I8 => Inst::$i8(ll::$i8 { src, dst }),
					NumKind::R4 => Inst::$r4(ll::$r4 { src, dst }),
					NumKind::R8 => Inst::$r8(ll::$r8 { src, dst }),
				}
			};
		}

		if ovf {
			macro_rules! checked {
				($t: ident) => {
					paste::paste! {
						match (src_kind, un) {
							(NumKind::I4, false) => Inst::[<ConvOvf $t I4>](ll::[<ConvOvf $t I4>] { src, dst }),
							(NumKind::I4, true) => Inst::[<ConvOvf $t U4Un>](ll::[<ConvOvf $t U4Un>] { src, dst }),
							(NumKind::I8, false) => Inst::[<ConvOvf $t I8>](ll::[<ConvOvf $t I8>] { src, dst }),
							(NumKind::I8, true) => Inst::[<ConvOvf $t U8Un>](ll::[<ConvOvf $t U8Un>] { src, dst }),
							(NumKind::R4, _) => Inst::[<ConvOvf $t R4>](ll::[<ConvOvf $t R4>] { src, dst }),
							(NumKind::R8, _) => Inst::[<ConvOvf $t R8>](ll::[<ConvOvf $t R8>] { src, dst }),
						}
					}
				};
			}
			return Ok(match target {
				ConvTarget::I1 => checked!(I1),
				ConvTarget::U1 => checked!(U1),
				ConvTarget::I2 => checked!(I2),
				ConvTarget::U2 => checked!(U2),
				ConvTarget::I4 => checked!(I4),
				ConvTarget::U4 => checked!(U4),
				ConvTarget::I8 => checked!(I8),
				ConvTarget::U8 => checked!(U8),
				_ => return Err(VmError::BadImageFormat),
			});
		}

		Ok(match target {
			ConvTarget::I1 => by_src!(ConvI1I4, ConvI1I8, ConvI1R4, ConvI1R8),
			ConvTarget::U1 => by_src!(ConvU1I4, ConvU1I8, ConvU1R4, ConvU1R8),
			ConvTarget::I2 => by_src!(ConvI2I4, ConvI2I8, ConvI2R4, ConvI2R8),
			ConvTarget::U2 => by_src!(ConvU2I4, ConvU2I8, ConvU2R4, ConvU2R8),
			ConvTarget::I4 | ConvTarget::U4 => match src_kind {
				// Same-lane conversions degenerate to slot copies.
				NumKind::I4 => Inst::LdLocI4(ll::LdLocI4 { src, dst }),
				NumKind::I8 => match target {
					ConvTarget::I4 => Inst::ConvI4I8(ll::ConvI4I8 { src, dst }),
					_ => Inst::ConvU4I8(ll::ConvU4I8 { src, dst }),
				},
				NumKind::R4 => match target {
					ConvTarget::I4 => Inst::ConvI4R4(ll::ConvI4R4 { src, dst }),
					_ => Inst::ConvU4R4(ll::ConvU4R4 { src, dst }),
				},
				NumKind::R8 => match target {
					ConvTarget::I4 => Inst::ConvI4R8(ll::ConvI4R8 { src, dst }),
					_ => Inst::ConvU4R8(ll::ConvU4R8 { src, dst }),
				},
			},
			ConvTarget::I8 => match (src_kind, un) {
				(NumKind::I4, false) => Inst::ConvI8I4(ll::ConvI8I4 { src, dst }),
				(NumKind::I4, true) => Inst::ConvI8U4(ll::ConvI8U4 { src, dst }),
				(NumKind::I8, _) => Inst::LdLocI8(ll::LdLocI8 { src, dst }),
				(NumKind::R4, _) => Inst::ConvI8R4(ll::ConvI8R4 { src, dst }),
				(NumKind::R8, _) => Inst::ConvI8R8(ll::ConvI8R8 { src, dst }),
			},
			ConvTarget::U8 => match (src_kind, un) {
				(NumKind::I4, false) => Inst::ConvU8I4(ll::ConvU8I4 { src, dst }),
				(NumKind::I4, true) => Inst::ConvU8U4(ll::ConvU8U4 { src, dst }),
				(NumKind::I8, _) => Inst::LdLocI8(ll::LdLocI8 { src, dst }),
				(NumKind::R4, _) => Inst::ConvU8R4(ll::ConvU8R4 { src, dst }),
				(NumKind::R8, _) => Inst::ConvU8R8(ll::ConvU8R8 { src, dst }),
			},
			ConvTarget::R4 => match (src_kind, un) {
				(NumKind::I4, false) => Inst::ConvR4I4(ll::ConvR4I4 { src, dst }),
				(NumKind::I4, true) => Inst::ConvR4U4(ll::ConvR4U4 { src, dst }),
				(NumKind::I8, false) => Inst::ConvR4I8(ll::ConvR4I8 { src, dst }),
				(NumKind::I8, true) => Inst::ConvR4U8(ll::ConvR4U8 { src, dst }),
				(NumKind::R4, _) => Inst::LdLocI4(ll::LdLocI4 { src, dst }),
				(NumKind::R8, _) => Inst::ConvR4R8(ll::ConvR4R8 { src, dst }),
			},
			ConvTarget::R8 => match (src_kind, un) {
				(NumKind::I4, false) => Inst::ConvR8I4(ll::ConvR8I4 { src, dst }),
				(NumKind::I4, true) => Inst::ConvR8U4(ll::ConvR8U4 { src, dst }),
				(NumKind::I8, false) => Inst::ConvR8I8(ll::ConvR8I8 { src, dst }),
				(NumKind::I8, true) => Inst::ConvR8U8(ll::ConvR8U8 { src, dst }),
				(NumKind::R4, _) => Inst::ConvR8R4(ll::ConvR8R4 { src, dst }),
				(NumKind::R8, _) => Inst::LdLocI8(ll::LdLocI8 { src, dst }),
			},
		})
	}

	// ### Leave and end-of-handler classification

	/// `leave` compiles into one of three forms depending on the enclosing
	/// finally clauses to run and whether the site sits in a catch handler.
	fn lower_leave(&mut self, il_offset: u32, target: BbId) -> VmResult<()> {
		let hl = self.hl;
		let target_il = hl.blocks[target].il_offset;
		let clauses = &hl.body.exception_clauses;

		let mut finallies = vec![];
		for (index, clause) in clauses.iter().enumerate() {
			if clause.kind == ExceptionClauseKind::Finally
				&& clause.is_in_try_block(il_offset)
				&& !clause.is_in_try_block(target_il)
			{
				finallies.push(index);
			}
		}
		let in_catch = clauses.iter().any(|clause| {
			matches!(clause.kind, ExceptionClauseKind::Exception | ExceptionClauseKind::Filter)
				&& clause.is_in_handler_block(il_offset)
		});

		match (finallies.as_slice(), in_catch) {
			([], false) => self.push_branch(Inst::Br(ll::Br { target: 0 }), target),
			([], true) => self.push_branch(
				Inst::LeaveCatchWithoutFinally(ll::LeaveCatchWithoutFinally { target: 0 }),
				target,
			),
			(list, in_catch) => {
				let first = list[0];
				let count = list.len();
				if list.windows(2).any(|w| w[1] != w[0] + 1) || first > u8::MAX as usize {
					return Err(VmError::ExecutionEngine);
				}
				let inst = match in_catch {
					false => Inst::LeaveTryWithFinally(ll::LeaveTryWithFinally {
						first_finally_clause_index: first as u8,
						finally_clauses_count: count as u8,
						target: 0,
					}),
					true => Inst::LeaveCatchWithFinally(ll::LeaveCatchWithFinally {
						first_finally_clause_index: first as u8,
						finally_clauses_count: count as u8,
						target: 0,
					}),
				};
				self.push_branch(inst, target);
			},
		}
		Ok(())
	}

	fn enclosing_handler_kind(&self, il_offset: u32) -> Option<ExceptionClauseKind> {
		self.hl
			.body
			.exception_clauses
			.iter()
			.find(|clause| clause.is_in_handler_block(il_offset))
			.map(|clause| clause.kind)
	}

	// ### Offset assignment and encoding

	/// Wide-first offset assignment with greedy short downgrades; shortening
	/// only shrinks displacements, so the iteration is monotone and stops
	/// when a full pass changes nothing.
	fn fix_point_offsets(&mut self) {
		loop {
			// Recompute instruction and block offsets at current widths.
			let mut offset = 0u32;
			let mut next_bb = 0usize;
			for (index, emitted) in self.emitted.iter_mut().enumerate() {
				while next_bb < self.bb_first_inst.len() && self.bb_first_inst[next_bb] == index {
					self.bb_ir_offset[next_bb] = offset;
					next_bb += 1;
				}
				emitted.ir_offset = offset;
				let mut size = emitted.inst.size(emitted.short) as u32;
				if let Inst::Switch(switch) = &emitted.inst {
					size += switch.num_targets * 4;
				}
				offset += size;
			}
			while next_bb < self.bb_first_inst.len() {
				self.bb_ir_offset[next_bb] = offset;
				next_bb += 1;
			}

			// Refresh displacements and downgrade what newly fits.
			let mut changed = false;
			for emitted in &mut self.emitted {
				if let Some(bb) = emitted.branch_bb {
					let disp = self.bb_ir_offset[bb] as i64 - emitted.ir_offset as i64;
					emitted.inst.set_branch_target(disp as i32);
				}
				if !emitted.short && emitted.inst.has_short() && emitted.inst.fits_short() {
					emitted.short = true;
					changed = true;
				}
			}

			if !changed {
				break;
			}
		}
	}

	fn encode(&self) -> Vec<u8> {
		let mut code = vec![];
		for emitted in &self.emitted {
			debug_assert_eq!(code.len() as u32, emitted.ir_offset);
			emitted.inst.encode(&mut code, emitted.short);
			if !emitted.switch_bbs.is_empty() {
				for bb in &emitted.switch_bbs {
					let disp = self.bb_ir_offset[*bb] as i64 - emitted.ir_offset as i64;
					code.extend_from_slice(&(disp as i32).to_le_bytes());
				}
			}
		}
		code
	}

	fn il_to_ir_offset(&self, il_offset: u32, end: u32) -> u32 {
		// Block starts carry the translation; the end sentinel maps to the
		// stream end.
		for (bb, block) in self.hl.blocks.iter().enumerate() {
			if block.il_offset == il_offset {
				return self.bb_ir_offset[bb];
			}
		}
		end
	}

	fn translate_clauses(&mut self, code_end: u32) -> VmResult<Vec<IrExceptionClause<'l>>> {
		let ctx = self.rt.ctx();
		let (_, gcc, gc) = hl::resolution_contexts(ctx, self.method)?;
		let module = match self.method.generic_method() {
			Some(generic) => generic.base.parent().module(),
			None => self.method.parent().module(),
		};

		let mut clauses = Vec::with_capacity(self.hl.body.exception_clauses.len());
		for (index, clause) in self.hl.body.exception_clauses.iter().enumerate() {
			let try_offset = self.il_to_ir_offset(clause.try_offset, code_end);
			let try_end = self.il_to_ir_offset(clause.try_offset + clause.try_length, code_end);
			let handler_offset = self.il_to_ir_offset(clause.handler_offset, code_end);
			let handler_end =
				self.il_to_ir_offset(clause.handler_offset + clause.handler_length, code_end);

			let (catch_class, filter_offset) = match clause.kind {
				ExceptionClauseKind::Exception => {
					let token = MetadataToken::try_from(clause.class_token_or_filter_offset)
						.map_err(|_| VmError::BadImageFormat)?;
					let class = module.get_class_by_type_token(ctx, token, &gcc, gc.as_ref())?;
					(Some(class), 0)
				},
				ExceptionClauseKind::Filter => {
					(None, self.il_to_ir_offset(clause.class_token_or_filter_offset, code_end))
				},
				_ => (None, 0),
			};

			clauses.push(IrExceptionClause {
				kind: clause.kind,
				try_offset,
				try_length: try_end - try_offset,
				handler_offset,
				handler_length: handler_end - handler_offset,
				filter_offset,
				catch_class,
				ex_slot: self.hl.clause_ex_slots[index],
			});
		}
		Ok(clauses)
	}
}

#[derive(Copy, Clone)]
enum StaticAccess {
	Load,
	Store,
	Address,
}

fn ld_ind_inst(width: MemWidth, src: u16, dst: u16) -> Inst {
	match width {
		MemWidth::I1 => Inst::LdIndI1(ll::LdIndI1 { src, dst }),
		MemWidth::U1 => Inst::LdIndU1(ll::LdIndU1 { src, dst }),
		MemWidth::I2 => Inst::LdIndI2(ll::LdIndI2 { src, dst }),
		MemWidth::U2 => Inst::LdIndU2(ll::LdIndU2 { src, dst }),
		MemWidth::I4 => Inst::LdIndI4(ll::LdIndI4 { src, dst }),
		MemWidth::I8 => Inst::LdIndI8(ll::LdIndI8 { src, dst }),
		MemWidth::Ref => Inst::LdIndRef(ll::LdIndRef { src, dst }),
	}
}

fn st_ind_inst(width: MemWidth, dest: u16, src: u16) -> Inst {
	match width {
		MemWidth::I1 | MemWidth::U1 => Inst::StIndI1(ll::StIndI1 { dest, src }),
		MemWidth::I2 | MemWidth::U2 => Inst::StIndI2(ll::StIndI2 { dest, src }),
		MemWidth::I4 => Inst::StIndI4(ll::StIndI4 { dest, src }),
		MemWidth::I8 => Inst::StIndI8(ll::StIndI8 { dest, src }),
		MemWidth::Ref => Inst::StIndRef(ll::StIndRef { dest, src }),
	}
}
