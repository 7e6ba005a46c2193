use std::cell::Cell;
use std::fmt::{Debug, Formatter};
use std::hash::{Hash, Hasher};

use tracing::trace;

use crate::error::{VmError, VmResult};
use crate::raw::body::MethodBody;
use crate::raw::heaps::table::{
	MethodAttributes, MethodImplAttributes, MethodSemanticsAttributes,
};
use crate::raw::indices::metadata_token::{MetadataToken, MetadataTokenKind, MethodDefToken};
use crate::structured::class::{Class, ClassExtra, ClassFamily, ClassInit, EventInfo, PropertyInfo};
use crate::structured::sig::*;
use crate::structured::{Context, Gid};

pub const INVALID_METHOD_SLOT: u16 = 0xFFFF;

/// Argument descriptor: the reduce-type classification and the number of
/// 8-byte stack slots the argument spans.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ArgDesc {
	pub reduce_type: ReduceType,
	pub slot_count: u16,
}

/// Base method plus the instantiation an inflated method was created with.
#[derive(Debug)]
pub struct GenericMethodData<'l> {
	pub base: &'l MethodInfo<'l>,
	pub context: GenericContext<'l>,
}

/// A resolved method. Execution state (invokers, the lowered body) is filled
/// lazily by the shim and the transformer.
pub struct MethodInfo<'l> {
	parent: &'l Class<'l>,
	name: &'l str,
	token: MetadataToken,
	flags: MethodAttributes,
	iflags: MethodImplAttributes,
	slot: Cell<u16>,
	return_sig: &'l TypeSig<'l>,
	/// Declared parameters, excluding `this`.
	params: &'l [&'l TypeSig<'l>],
	generic_container: Option<&'l GenericContainer<'l>>,
	generic_method: Option<&'l GenericMethodData<'l>>,
	arg_descs: Cell<Option<&'l [ArgDesc]>>,
	total_arg_slots: Cell<u16>,
	ret_slots: Cell<u16>,
	pub(crate) invoker: Cell<Option<crate::vm::shim::Invoker>>,
	pub(crate) interp_body: Cell<Option<&'l crate::interp::InterpMethodInfo<'l>>>,
}

impl Eq for MethodInfo<'_> {}

impl PartialEq<Self> for MethodInfo<'_> {
	#[inline]
	fn eq(&self, other: &Self) -> bool {
		std::ptr::eq(self, other)
	}
}

impl Hash for MethodInfo<'_> {
	fn hash<H: Hasher>(&self, state: &mut H) {
		(self as *const Self).hash(state)
	}
}

impl Debug for MethodInfo<'_> {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "MethodInfo({}::{})", self.parent, self.name)
	}
}

impl<'l> MethodInfo<'l> {
	#[allow(clippy::too_many_arguments)]
	pub(crate) fn alloc(
		ctx: &'l Context<'l>,
		parent: &'l Class<'l>,
		name: &'l str,
		token: MetadataToken,
		flags: MethodAttributes,
		iflags: MethodImplAttributes,
		return_sig: &'l TypeSig<'l>,
		params: &'l [&'l TypeSig<'l>],
		generic_container: Option<&'l GenericContainer<'l>>,
		generic_method: Option<&'l GenericMethodData<'l>>,
	) -> &'l MethodInfo<'l> {
		ctx.bump().alloc(MethodInfo {
			parent,
			name,
			token,
			flags,
			iflags,
			slot: Cell::new(INVALID_METHOD_SLOT),
			return_sig,
			params,
			generic_container,
			generic_method,
			arg_descs: Cell::new(None),
			total_arg_slots: Cell::new(0),
			ret_slots: Cell::new(0),
			invoker: Cell::new(None),
			interp_body: Cell::new(None),
		})
	}

	pub fn parent(&self) -> &'l Class<'l> {
		self.parent
	}

	pub fn name(&self) -> &'l str {
		self.name
	}

	pub fn token(&self) -> MetadataToken {
		self.token
	}

	pub fn flags(&self) -> MethodAttributes {
		self.flags
	}

	pub fn iflags(&self) -> MethodImplAttributes {
		self.iflags
	}

	pub fn return_sig(&self) -> &'l TypeSig<'l> {
		self.return_sig
	}

	pub fn params(&self) -> &'l [&'l TypeSig<'l>] {
		self.params
	}

	pub fn generic_container(&self) -> Option<&'l GenericContainer<'l>> {
		self.generic_container
	}

	pub fn generic_method(&self) -> Option<&'l GenericMethodData<'l>> {
		self.generic_method
	}

	pub fn slot(&self) -> u16 {
		self.slot.get()
	}

	pub(crate) fn set_slot(&self, slot: u16) {
		self.slot.set(slot);
	}

	// ### Attribute helpers

	pub fn is_static(&self) -> bool {
		self.flags.contains(MethodAttributes::STATIC)
	}

	pub fn is_instance(&self) -> bool {
		!self.is_static()
	}

	pub fn is_virtual(&self) -> bool {
		self.flags.contains(MethodAttributes::VIRTUAL)
	}

	pub fn is_abstract(&self) -> bool {
		self.flags.contains(MethodAttributes::ABSTRACT)
	}

	pub fn is_final(&self) -> bool {
		self.flags.contains(MethodAttributes::FINAL)
	}

	pub fn is_new_slot(&self) -> bool {
		self.flags.contains(MethodAttributes::NEW_SLOT)
	}

	pub fn is_pinvoke(&self) -> bool {
		self.flags.contains(MethodAttributes::PINVOKE_IMPL)
	}

	pub fn is_internal_call(&self) -> bool {
		self.iflags.contains(MethodImplAttributes::INTERNAL_CALL)
	}

	pub fn is_runtime_special(&self) -> bool {
		self.flags.contains(MethodAttributes::RT_SPECIAL_NAME)
	}

	pub fn is_ctor(&self) -> bool {
		self.is_runtime_special() && self.name == ".ctor"
	}

	pub fn is_cctor(&self) -> bool {
		self.is_runtime_special() && self.name == ".cctor"
	}

	pub fn is_void_return(&self) -> bool {
		self.return_sig.is_void() && !self.return_sig.by_ref
	}

	pub fn code_type(&self) -> MethodImplAttributes {
		self.iflags & MethodImplAttributes::CODE_TYPE_MASK
	}

	pub fn has_body(&self) -> bool {
		self.code_type() == MethodImplAttributes::IL
			&& !self.is_abstract()
			&& !self.is_pinvoke()
			&& !self.is_internal_call()
	}

	/// A method with open generic variables cannot execute.
	pub fn contains_open_generic_params(&self) -> bool {
		if self.generic_container.is_some() && self.generic_method.is_none() {
			return true;
		}
		fn is_open(sig: &TypeSig) -> bool {
			matches!(sig.element_type, ElementType::Var | ElementType::MVar)
		}
		is_open(self.return_sig) || self.params.iter().any(|p| is_open(p))
	}

	pub fn param_count_including_this(&self) -> usize {
		self.params.len() + self.is_instance() as usize
	}

	// ### Argument descriptors

	pub fn arg_descs(&'l self, ctx: &'l Context<'l>) -> VmResult<&'l [ArgDesc]> {
		if let Some(descs) = self.arg_descs.get() {
			return Ok(descs);
		}
		self.build_arg_descs(ctx)?;
		Ok(self.arg_descs.get().unwrap_or(&[]))
	}

	pub fn total_arg_slots(&'l self, ctx: &'l Context<'l>) -> VmResult<u16> {
		self.arg_descs(ctx)?;
		Ok(self.total_arg_slots.get())
	}

	pub fn ret_slots(&'l self, ctx: &'l Context<'l>) -> VmResult<u16> {
		self.arg_descs(ctx)?;
		Ok(self.ret_slots.get())
	}

	fn build_arg_descs(&'l self, ctx: &'l Context<'l>) -> VmResult<()> {
		let mut descs = Vec::with_capacity(self.param_count_including_this());

		if self.is_instance() {
			// Value-type receivers arrive as a pointer to their data.
			let reduce = match self.parent.is_value_type() {
				true => ReduceType::I,
				false => ReduceType::Ref,
			};
			descs.push(ArgDesc { reduce_type: reduce, slot_count: 1 });
		}

		for param in self.params {
			let reduce = ctx.reduce_type(param)?;
			let slots = ctx.stack_slot_count(param)?;
			descs.push(ArgDesc { reduce_type: reduce, slot_count: slots });
		}

		let total: u32 = descs.iter().map(|d| d.slot_count as u32).sum();
		if total > u16::MAX as u32 {
			return Err(VmError::BadImageFormat);
		}

		let ret_slots = match self.is_void_return() {
			true => 0,
			false => ctx.stack_slot_count(self.return_sig)?,
		};

		self.arg_descs.set(Some(ctx.bump().alloc_slice_fill_iter(descs)));
		self.total_arg_slots.set(total as u16);
		self.ret_slots.set(ret_slots);
		Ok(())
	}

	// ### Bodies

	pub fn body(&'l self) -> VmResult<Option<MethodBody<'l>>> {
		if !self.has_body() {
			return Ok(None);
		}
		let base = match self.generic_method {
			Some(generic) => generic.base,
			None => self,
		};
		if base.token.is_null() || base.token.kind() != MetadataTokenKind::MethodDef {
			return Ok(None);
		}
		base.parent.module().method_body(base.token.index() as u32)
	}

	/// The method-def gid (the base's for inflated methods).
	pub fn method_def_gid(&self) -> VmResult<Gid> {
		let base = match self.generic_method {
			Some(generic) => generic.base,
			None => self,
		};
		base.parent.module().encode_gid(base.token.index() as u32)
	}

	// ### Inflation

	/// Instantiates a method against a generic context, interning the result
	/// so repeated instantiations share one `MethodInfo`.
	pub fn inflate(
		ctx: &'l Context<'l>,
		base: &'l MethodInfo<'l>,
		gc: &GenericContext<'l>,
	) -> VmResult<&'l MethodInfo<'l>> {
		if gc.is_empty() {
			return Ok(base);
		}

		if let Some(existing) = ctx.lookup_inflated_method(base, gc) {
			return Ok(existing);
		}

		let parent = match (gc.class_inst, base.parent.family()) {
			(Some(inst), ClassFamily::TypeDef) if base.parent.generic_container().is_some() => {
				let generic = ctx.intern_generic_class(base.parent.gid(), inst);
				ctx.class_from_generic_class(generic)?
			},
			_ => base.parent,
		};

		let return_sig = ctx.inflate_sig(base.return_sig, gc)?;
		let mut params = Vec::with_capacity(base.params.len());
		for param in base.params {
			params.push(ctx.inflate_sig(param, gc)?);
		}

		let generic_method = ctx.bump().alloc(GenericMethodData {
			base,
			context: *gc,
		});

		let method = MethodInfo::alloc(
			ctx,
			parent,
			base.name,
			base.token,
			base.flags,
			base.iflags,
			return_sig,
			ctx.bump().alloc_slice_copy(&params),
			base.generic_container,
			Some(generic_method),
		);
		method.set_slot(base.slot());
		ctx.cache_inflated_method(base, gc, method);
		Ok(method)
	}
}

impl<'l> Context<'l> {
	/// Substitutes generic variables in a signature with the context's
	/// instantiation, rebuilding composites bottom-up.
	pub fn inflate_sig(
		&'l self,
		sig: &'l TypeSig<'l>,
		gc: &GenericContext<'l>,
	) -> VmResult<&'l TypeSig<'l>> {
		let inflated = match (sig.element_type, sig.data) {
			(ElementType::Var, TypeSigData::Param(param)) => {
				let inst = gc.class_inst.ok_or(VmError::ExecutionEngine)?;
				let arg = inst.args.get(param.index as usize).ok_or(VmError::ExecutionEngine)?;
				match sig.by_ref {
					false => return Ok(arg),
					true => TypeSig { by_ref: true, ..**arg },
				}
			},
			(ElementType::MVar, TypeSigData::Param(param)) => {
				let inst = gc.method_inst.ok_or(VmError::ExecutionEngine)?;
				let arg = inst.args.get(param.index as usize).ok_or(VmError::ExecutionEngine)?;
				match sig.by_ref {
					false => return Ok(arg),
					true => TypeSig { by_ref: true, ..**arg },
				}
			},
			(ElementType::Var | ElementType::MVar, TypeSigData::ParamIndex(index)) => {
				let inst = match sig.element_type {
					ElementType::Var => gc.class_inst,
					_ => gc.method_inst,
				};
				let inst = inst.ok_or(VmError::ExecutionEngine)?;
				let arg = inst.args.get(index as usize).ok_or(VmError::ExecutionEngine)?;
				match sig.by_ref {
					false => return Ok(arg),
					true => TypeSig { by_ref: true, ..**arg },
				}
			},
			(ElementType::Ptr | ElementType::SZArray, TypeSigData::Element(element)) => {
				let inflated = self.inflate_sig(element, gc)?;
				match std::ptr::eq(inflated, element) {
					true => return Ok(sig),
					false => TypeSig {
						data: TypeSigData::Element(inflated),
						..*sig
					},
				}
			},
			(ElementType::Array, TypeSigData::Array(array)) => {
				let inflated = self.inflate_sig(array.element, gc)?;
				match std::ptr::eq(inflated, array.element) {
					true => return Ok(sig),
					false => {
						let array = &*self.bump().alloc(ArrayType {
							element: inflated,
							rank: array.rank,
							sizes: array.sizes,
							bounds: array.bounds,
						});
						TypeSig {
							data: TypeSigData::Array(array),
							..*sig
						}
					},
				}
			},
			(ElementType::GenericInst, TypeSigData::Generic(generic)) => {
				let mut changed = false;
				let mut args = Vec::with_capacity(generic.inst.args.len());
				for arg in generic.inst.args {
					let inflated = self.inflate_sig(arg, gc)?;
					changed |= !std::ptr::eq(inflated, *arg);
					args.push(inflated);
				}
				match changed {
					false => return Ok(sig),
					true => {
						let inst = self.intern_inst(&args);
						let generic = self.intern_generic_class(generic.base_gid, inst);
						TypeSig {
							data: TypeSigData::Generic(generic),
							..*sig
						}
					},
				}
			},
			_ => return Ok(sig),
		};
		Ok(self.intern_sig(inflated))
	}
}

impl<'l> Class<'l> {
	/// Method phase: reads method rows (inflated for generic instances),
	/// builds parameter arrays and records cctor/finalizer bits.
	pub fn ensure_methods(&'l self, ctx: &'l Context<'l>) -> VmResult<()> {
		if !self.begin_phase(ClassInit::METHODS)? {
			return Ok(());
		}
		self.ensure_super_types(ctx)?;
		trace!(class = %self, "init methods");

		if self.family() == ClassFamily::Array {
			// Array pseudo-methods are synthesized at creation.
			self.end_phase(ClassInit::METHODS);
			return Ok(());
		}

		let module = self.module();
		let rid = self.type_def_rid();
		if module.image().is_none() {
			// Synthesized classes pre-seed their method array.
			for method in self.methods() {
				if method.is_cctor() && method.is_static() {
					self.set_extra(ClassExtra::HAS_STATIC_CONSTRUCTOR);
				}
			}
			self.end_phase(ClassInit::METHODS);
			return Ok(());
		}
		let (start, end) = module.method_range_of_type_def(rid)?;
		let base_container = self.base_container(ctx)?;
		let gc = self.generic_context();

		let mut methods = Vec::with_capacity((end - start) as usize);
		for method_rid in start..end {
			let row = module.method_def_row(method_rid)?;
			let name = module.get_string(row.name)?;
			let token = MetadataToken::from(MethodDefToken(method_rid as usize));
			let method_container = module.get_generic_container(ctx, token)?;
			let gcc = GenericContainerContext {
				class: base_container,
				method: method_container,
			};
			let sig = module.read_method_sig_blob(ctx, row.signature, &gcc, gc.as_ref())?;

			let method = MethodInfo::alloc(
				ctx,
				self,
				name,
				token,
				row.flags,
				row.impl_flags,
				sig.return_type,
				ctx.bump().alloc_slice_copy(&sig.params),
				method_container,
				None,
			);
			methods.push(method);

			if method.is_cctor() && method.is_static() {
				self.set_extra(ClassExtra::HAS_STATIC_CONSTRUCTOR);
			}
			if name == "Finalize" && method.is_virtual() && method.params().is_empty() {
				self.set_extra(ClassExtra::HAS_FINALIZER);
			}
		}

		self.set_methods(ctx.bump().alloc_slice_copy(&methods));
		self.end_phase(ClassInit::METHODS);
		Ok(())
	}

	/// Property and event phase: rows plus MethodSemantics associations.
	pub fn ensure_properties_and_events(&'l self, ctx: &'l Context<'l>) -> VmResult<()> {
		use crate::raw::heaps::table as tables;

		if !self.begin_phase(ClassInit::PROPERTIES)? {
			return Ok(());
		}
		self.ensure_methods(ctx)?;

		let module = self.module();
		let rid = self.type_def_rid();
		let tables_heap = match module.tables() {
			Ok(tables) => tables,
			Err(_) => {
				// Synthetic classes carry no property or event rows.
				self.end_phase(ClassInit::PROPERTIES);
				self.mark_inited(ClassInit::EVENTS);
				return Ok(());
			},
		};

		let semantics_of = |association: u32| -> Vec<(MethodSemanticsAttributes, &'l MethodInfo<'l>)> {
			let mut found = vec![];
			let Some(table) = tables_heap.get_table::<tables::MethodSemanticsTable>() else {
				return found;
			};
			for row in table.rows() {
				let token = MetadataToken::from(row.association);
				let raw = match token.kind() {
					MetadataTokenKind::Property => ((token.index() as u32) << 1) | 1,
					_ => (token.index() as u32) << 1,
				};
				if raw != association {
					continue;
				}
				let method_rid = row.method.rid();
				let (start, _) = match module.method_range_of_type_def(rid) {
					Ok(range) => range,
					Err(_) => continue,
				};
				if let Some(method) = self.methods().get((method_rid - start) as usize) {
					found.push((row.flags, *method));
				}
			}
			found
		};

		let mut properties = vec![];
		if let Some(map) = tables_heap.get_table::<tables::PropertyMapTable>() {
			for (i, entry) in map.rows().enumerate() {
				if entry.parent.rid() != rid {
					continue;
				}
				let start = entry.property_list.rid();
				let end = match map.get(i + 2) {
					Some(next) => next.property_list.rid(),
					None => tables_heap.row_count(crate::raw::heaps::table::TableKind::Property) as u32 + 1,
				};
				for property_rid in start..end {
					let table = tables_heap
						.get_table::<tables::PropertyTable>()
						.ok_or(VmError::BadImageFormat)?;
					let row = table.get(property_rid as usize).ok_or(VmError::BadImageFormat)?;
					let name = module.get_string(row.name)?;
					let semantics = semantics_of(((property_rid) << 1) | 1);
					let get_method = semantics
						.iter()
						.find(|(f, _)| f.contains(MethodSemanticsAttributes::GETTER))
						.map(|(_, m)| *m);
					let set_method = semantics
						.iter()
						.find(|(f, _)| f.contains(MethodSemanticsAttributes::SETTER))
						.map(|(_, m)| *m);
					properties.push(PropertyInfo {
						parent: self,
						name,
						flags: row.flags.bits(),
						get_method,
						set_method,
						token: MetadataToken::from(
							crate::raw::indices::metadata_token::PropertyToken(property_rid as usize),
						),
					});
				}
			}
		}
		self.set_properties(ctx.bump().alloc_slice_fill_iter(properties));

		let mut events = vec![];
		if let Some(map) = tables_heap.get_table::<tables::EventMapTable>() {
			for (i, entry) in map.rows().enumerate() {
				if entry.parent.rid() != rid {
					continue;
				}
				let start = entry.event_list.rid();
				let end = match map.get(i + 2) {
					Some(next) => next.event_list.rid(),
					None => tables_heap.row_count(crate::raw::heaps::table::TableKind::Event) as u32 + 1,
				};
				for event_rid in start..end {
					let table = tables_heap
						.get_table::<tables::EventTable>()
						.ok_or(VmError::BadImageFormat)?;
					let row = table.get(event_rid as usize).ok_or(VmError::BadImageFormat)?;
					let name = module.get_string(row.name)?;
					let semantics = semantics_of((event_rid) << 1);
					let find = |flag: MethodSemanticsAttributes| {
						semantics.iter().find(|(f, _)| f.contains(flag)).map(|(_, m)| *m)
					};
					events.push(EventInfo {
						parent: self,
						name,
						flags: row.flags.bits(),
						add_method: find(MethodSemanticsAttributes::ADD_ON),
						remove_method: find(MethodSemanticsAttributes::REMOVE_ON),
						raise_method: find(MethodSemanticsAttributes::FIRE),
						token: MetadataToken::from(
							crate::raw::indices::metadata_token::EventToken(event_rid as usize),
						),
					});
				}
			}
		}
		self.set_events(ctx.bump().alloc_slice_fill_iter(events));

		self.end_phase(ClassInit::PROPERTIES);
		self.mark_inited(ClassInit::EVENTS);
		Ok(())
	}

	/// The static constructor, when the class declares one.
	pub fn static_constructor(&'l self, ctx: &'l Context<'l>) -> VmResult<Option<&'l MethodInfo<'l>>> {
		if !self.has_static_constructor() && self.is_inited(ClassInit::METHODS) {
			return Ok(None);
		}
		self.ensure_methods(ctx)?;
		Ok(self.methods().iter().find(|m| m.is_cctor() && m.is_static()).copied())
	}
}
