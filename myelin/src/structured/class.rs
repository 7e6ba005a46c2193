use std::alloc::Layout;
use std::cell::Cell;
use std::fmt::{Debug, Display, Formatter};
use std::hash::{Hash, Hasher};

use bitflags::bitflags;
use tracing::trace;

use crate::error::{VmError, VmResult};
use crate::raw::heaps::table::TypeAttributes;
use crate::raw::indices::metadata_token::{MetadataToken, MetadataTokenKind, TypeDefToken};
use crate::structured::field::FieldInfo;
use crate::structured::method::MethodInfo;
use crate::structured::module::ModuleDef;
use crate::structured::sig::*;
use crate::structured::{Context, Gid};

bitflags! {
	/// Per-phase "done" bits; each phase is idempotent and write-once.
	#[derive(Debug, Copy, Clone, Eq, PartialEq)]
	pub struct ClassInit: u32 {
		const FIELDS = 0x1;
		const METHODS = 0x2;
		const PROPERTIES = 0x4;
		const EVENTS = 0x8;
		const VTABLE = 0x10;
		const SUPER_TYPES = 0x20;
		const INTERFACE_TYPES = 0x40;
		const NESTED_CLASSES = 0x80;
		const ALL = 0x10000;
		const RUNTIME_CLASS_INIT = 0x20000;
	}

	#[derive(Debug, Copy, Clone, Eq, PartialEq)]
	pub struct ClassExtra: u32 {
		const VALUE_TYPE = 0x1;
		const NULLABLE = 0x2;
		const ENUM = 0x4;
		const HAS_REFERENCES = 0x8;
		const ARRAY = 0x10;
		const GENERIC = 0x20;
		const HAS_STATIC_CONSTRUCTOR = 0x40;
		const HAS_FINALIZER = 0x80;
		const REFERENCE_TYPE = 0x100;
	}
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ClassFamily {
	TypeDef,
	GenericInst,
	Array,
}

/// A virtual slot: the declaring virtual and the implementation dispatched.
#[derive(Debug, Copy, Clone)]
pub struct VirtualInvokeData<'l> {
	pub method: &'l MethodInfo<'l>,
	pub method_impl: &'l MethodInfo<'l>,
}

/// Where an implemented interface's block starts within the vtable.
#[derive(Debug, Copy, Clone)]
pub struct InterfaceOffset<'l> {
	pub interface: &'l Class<'l>,
	pub offset: u16,
}

/// The runtime representation of a type: identity, layout, members, dispatch
/// tables. Created empty when first referenced, filled by phases.
pub struct Class<'l> {
	module: &'l ModuleDef<'l>,
	token: MetadataToken,
	gid: Gid,
	family: ClassFamily,
	name: &'l str,
	namespace: &'l str,
	pub(crate) flags: TypeAttributes,
	extra_flags: Cell<ClassExtra>,
	init_flags: Cell<ClassInit>,
	init_in_progress: Cell<ClassInit>,

	/// `Some` for corlib primitive type-defs; their by-value signatures fold
	/// to the element kind.
	primitive_element: Option<ElementType>,
	generic_class: Option<&'l GenericClass<'l>>,
	generic_container: Cell<Option<&'l GenericContainer<'l>>>,

	by_val: Cell<Option<&'l TypeSig<'l>>>,
	by_ref: Cell<Option<&'l TypeSig<'l>>>,

	// Array classes only.
	element_class: Cell<Option<&'l Class<'l>>>,
	rank: Cell<u8>,

	parent: Cell<Option<&'l Class<'l>>>,
	super_types: Cell<&'l [&'l Class<'l>]>,
	interfaces: Cell<&'l [&'l Class<'l>]>,
	declaring_class: Cell<Option<&'l Class<'l>>>,
	nested_classes: Cell<&'l [&'l Class<'l>]>,

	fields: Cell<&'l [FieldInfo<'l>]>,
	methods: Cell<&'l [&'l MethodInfo<'l>]>,
	properties: Cell<&'l [PropertyInfo<'l>]>,
	events: Cell<&'l [EventInfo<'l>]>,
	vtable: Cell<&'l [VirtualInvokeData<'l>]>,
	/// Length of the class-virtual region of the vtable; interface blocks
	/// follow it.
	primary_vtable_slots: Cell<u16>,
	interface_offsets: Cell<&'l [InterfaceOffset<'l>]>,

	static_fields_data: Cell<*mut u8>,
	instance_size: Cell<u32>,
	static_size: Cell<u32>,
	alignment: Cell<u8>,
	hierarchy_depth: Cell<u8>,
	pub(crate) cctor_running: Cell<bool>,
}

#[derive(Debug, Copy, Clone)]
pub struct PropertyInfo<'l> {
	pub parent: &'l Class<'l>,
	pub name: &'l str,
	pub flags: u16,
	pub get_method: Option<&'l MethodInfo<'l>>,
	pub set_method: Option<&'l MethodInfo<'l>>,
	pub token: MetadataToken,
}

#[derive(Debug, Copy, Clone)]
pub struct EventInfo<'l> {
	pub parent: &'l Class<'l>,
	pub name: &'l str,
	pub flags: u16,
	pub add_method: Option<&'l MethodInfo<'l>>,
	pub remove_method: Option<&'l MethodInfo<'l>>,
	pub raise_method: Option<&'l MethodInfo<'l>>,
	pub token: MetadataToken,
}

impl Eq for Class<'_> {}

impl PartialEq<Self> for Class<'_> {
	#[inline]
	fn eq(&self, other: &Self) -> bool {
		std::ptr::eq(self, other)
	}
}

impl Hash for Class<'_> {
	fn hash<H: Hasher>(&self, state: &mut H) {
		(self as *const Self).hash(state)
	}
}

impl Display for Class<'_> {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self.namespace {
			"" => write!(f, "{}", self.name),
			_ => write!(f, "{}.{}", self.namespace, self.name),
		}
	}
}

impl Debug for Class<'_> {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "Class({self}, {:?})", self.family)
	}
}

impl<'l> Class<'l> {
	#[allow(clippy::too_many_arguments)]
	pub(crate) fn alloc(
		ctx: &'l Context<'l>,
		module: &'l ModuleDef<'l>,
		token: MetadataToken,
		gid: Gid,
		family: ClassFamily,
		namespace: &'l str,
		name: &'l str,
		flags: TypeAttributes,
		extra: ClassExtra,
		primitive_element: Option<ElementType>,
		generic_class: Option<&'l GenericClass<'l>>,
	) -> &'l Class<'l> {
		ctx.bump().alloc(Class {
			module,
			token,
			gid,
			family,
			name,
			namespace,
			flags,
			extra_flags: Cell::new(extra),
			init_flags: Cell::new(ClassInit::empty()),
			init_in_progress: Cell::new(ClassInit::empty()),
			primitive_element,
			generic_class,
			generic_container: Default::default(),
			by_val: Default::default(),
			by_ref: Default::default(),
			element_class: Default::default(),
			rank: Cell::new(0),
			parent: Default::default(),
			super_types: Cell::new(&[]),
			interfaces: Cell::new(&[]),
			declaring_class: Default::default(),
			nested_classes: Cell::new(&[]),
			fields: Cell::new(&[]),
			methods: Cell::new(&[]),
			properties: Cell::new(&[]),
			events: Cell::new(&[]),
			vtable: Cell::new(&[]),
			primary_vtable_slots: Cell::new(0),
			interface_offsets: Cell::new(&[]),
			static_fields_data: Cell::new(std::ptr::null_mut()),
			instance_size: Cell::new(0),
			static_size: Cell::new(0),
			alignment: Cell::new(1),
			hierarchy_depth: Cell::new(0),
			cctor_running: Cell::new(false),
		})
	}

	// ### Identity

	pub fn module(&self) -> &'l ModuleDef<'l> {
		self.module
	}

	pub fn token(&self) -> MetadataToken {
		self.token
	}

	pub fn gid(&self) -> Gid {
		self.gid
	}

	pub fn family(&self) -> ClassFamily {
		self.family
	}

	pub fn name(&self) -> &'l str {
		self.name
	}

	pub fn namespace(&self) -> &'l str {
		self.namespace
	}

	pub fn primitive_element(&self) -> Option<ElementType> {
		self.primitive_element
	}

	pub fn generic_class(&self) -> Option<&'l GenericClass<'l>> {
		self.generic_class
	}

	pub fn generic_inst(&self) -> Option<&'l GenericInst<'l>> {
		self.generic_class.map(|g| g.inst)
	}

	pub fn generic_container(&self) -> Option<&'l GenericContainer<'l>> {
		self.generic_container.get()
	}

	pub(crate) fn set_generic_container(&self, container: Option<&'l GenericContainer<'l>>) {
		self.generic_container.set(container);
		if container.is_some() {
			self.set_extra(ClassExtra::GENERIC);
		}
	}

	// ### Flags

	pub fn extra_flags(&self) -> ClassExtra {
		self.extra_flags.get()
	}

	pub(crate) fn set_extra(&self, extra: ClassExtra) {
		self.extra_flags.set(self.extra_flags.get() | extra);
	}

	pub fn init_flags(&self) -> ClassInit {
		self.init_flags.get()
	}

	pub fn is_inited(&self, part: ClassInit) -> bool {
		self.init_flags.get().contains(part)
	}

	pub(crate) fn mark_inited(&self, part: ClassInit) {
		self.init_flags.set(self.init_flags.get() | part);
	}

	/// Guards a phase against re-entrancy; inheritance cycles surface as
	/// `TypeLoad` instead of unbounded recursion.
	pub(crate) fn begin_phase(&self, part: ClassInit) -> VmResult<bool> {
		if self.is_inited(part) {
			return Ok(false);
		}
		if self.init_in_progress.get().contains(part) {
			return Err(VmError::TypeLoad);
		}
		self.init_in_progress.set(self.init_in_progress.get() | part);
		Ok(true)
	}

	pub(crate) fn end_phase(&self, part: ClassInit) {
		self.init_in_progress.set(self.init_in_progress.get() - part);
		self.mark_inited(part);
	}

	pub fn is_value_type(&self) -> bool {
		self.extra_flags.get().contains(ClassExtra::VALUE_TYPE)
	}

	pub fn is_enum(&self) -> bool {
		self.extra_flags.get().contains(ClassExtra::ENUM)
	}

	pub fn is_interface(&self) -> bool {
		self.flags.contains(TypeAttributes::INTERFACE)
	}

	pub fn is_abstract(&self) -> bool {
		self.flags.contains(TypeAttributes::ABSTRACT)
	}

	pub fn is_sealed(&self) -> bool {
		self.flags.contains(TypeAttributes::SEALED)
	}

	pub fn is_array(&self) -> bool {
		self.family == ClassFamily::Array
	}

	pub fn is_szarray(&self) -> bool {
		self.family == ClassFamily::Array && self.rank.get() == 0
	}

	pub fn has_references(&self) -> bool {
		self.extra_flags.get().contains(ClassExtra::HAS_REFERENCES)
	}

	pub fn has_static_constructor(&self) -> bool {
		self.extra_flags.get().contains(ClassExtra::HAS_STATIC_CONSTRUCTOR)
	}

	// ### Lazily filled state

	pub fn parent(&self) -> Option<&'l Class<'l>> {
		self.parent.get()
	}

	pub(crate) fn set_parent(&self, parent: Option<&'l Class<'l>>) {
		self.parent.set(parent);
	}

	pub fn super_types(&self) -> &'l [&'l Class<'l>] {
		self.super_types.get()
	}

	pub fn interfaces(&self) -> &'l [&'l Class<'l>] {
		self.interfaces.get()
	}

	/// Seeds the declared interface list before the interface phase runs;
	/// used by synthesized (array) classes.
	pub(crate) fn set_interfaces_raw(&self, interfaces: &'l [&'l Class<'l>]) {
		self.interfaces.set(interfaces);
	}

	pub fn declaring_class(&self) -> Option<&'l Class<'l>> {
		self.declaring_class.get()
	}

	pub(crate) fn set_declaring_class(&self, declaring: &'l Class<'l>) {
		self.declaring_class.set(Some(declaring));
	}

	pub fn nested_classes(&self) -> &'l [&'l Class<'l>] {
		self.nested_classes.get()
	}

	pub fn fields(&self) -> &'l [FieldInfo<'l>] {
		self.fields.get()
	}

	pub(crate) fn set_fields(&self, fields: &'l [FieldInfo<'l>]) {
		self.fields.set(fields);
	}

	pub fn methods(&self) -> &'l [&'l MethodInfo<'l>] {
		self.methods.get()
	}

	pub(crate) fn set_methods(&self, methods: &'l [&'l MethodInfo<'l>]) {
		self.methods.set(methods);
	}

	pub fn properties(&self) -> &'l [PropertyInfo<'l>] {
		self.properties.get()
	}

	pub(crate) fn set_properties(&self, properties: &'l [PropertyInfo<'l>]) {
		self.properties.set(properties);
	}

	pub fn events(&self) -> &'l [EventInfo<'l>] {
		self.events.get()
	}

	pub(crate) fn set_events(&self, events: &'l [EventInfo<'l>]) {
		self.events.set(events);
	}

	pub fn vtable(&self) -> &'l [VirtualInvokeData<'l>] {
		self.vtable.get()
	}

	pub(crate) fn set_vtable(&self, vtable: &'l [VirtualInvokeData<'l>]) {
		self.vtable.set(vtable);
	}

	pub fn primary_vtable_slots(&self) -> u16 {
		self.primary_vtable_slots.get()
	}

	pub(crate) fn set_primary_vtable_slots(&self, count: u16) {
		self.primary_vtable_slots.set(count);
	}

	pub fn interface_offsets(&self) -> &'l [InterfaceOffset<'l>] {
		self.interface_offsets.get()
	}

	pub(crate) fn set_interface_offsets(&self, offsets: &'l [InterfaceOffset<'l>]) {
		self.interface_offsets.set(offsets);
	}

	pub fn element_class(&self) -> Option<&'l Class<'l>> {
		self.element_class.get()
	}

	/// Rank of a multi-dimensional array class; zero for SZArrays.
	pub fn rank(&self) -> u8 {
		self.rank.get()
	}

	pub(crate) fn set_rank(&self, rank: u8) {
		self.rank.set(rank);
	}

	pub(crate) fn set_element_class(&self, element: &'l Class<'l>) {
		self.element_class.set(Some(element));
	}

	/// Instance size excluding the object header.
	pub fn instance_size(&self) -> u32 {
		self.instance_size.get()
	}

	pub(crate) fn set_instance_size(&self, size: u32) {
		self.instance_size.set(size);
	}

	pub fn static_size(&self) -> u32 {
		self.static_size.get()
	}

	pub(crate) fn set_static_size(&self, size: u32) {
		self.static_size.set(size);
	}

	pub fn alignment(&self) -> u8 {
		self.alignment.get()
	}

	pub(crate) fn set_alignment(&self, alignment: u8) {
		self.alignment.set(alignment);
	}

	pub fn hierarchy_depth(&self) -> u8 {
		self.hierarchy_depth.get()
	}

	pub fn static_fields_data(&self) -> *mut u8 {
		self.static_fields_data.get()
	}

	pub(crate) fn alloc_static_storage(&self, ctx: &'l Context<'l>, size: u32, align: u32) {
		if size == 0 {
			return;
		}
		let layout = Layout::from_size_align(size as usize, align.max(1) as usize).expect("static layout");
		let ptr = ctx.bump().alloc_layout(layout).as_ptr();
		unsafe { ptr.write_bytes(0, size as usize) };
		self.static_fields_data.set(ptr);
	}

	// ### Signatures

	pub fn by_val_sig(&'l self, ctx: &'l Context<'l>) -> &'l TypeSig<'l> {
		if let Some(sig) = self.by_val.get() {
			return sig;
		}
		let sig = ctx.intern_sig(self.make_sig(false));
		self.by_val.set(Some(sig));
		sig
	}

	pub fn by_ref_sig(&'l self, ctx: &'l Context<'l>) -> &'l TypeSig<'l> {
		if let Some(sig) = self.by_ref.get() {
			return sig;
		}
		let sig = ctx.intern_sig(self.make_sig(true));
		self.by_ref.set(Some(sig));
		sig
	}

	fn make_sig(&'l self, by_ref: bool) -> TypeSig<'l> {
		let mut sig = match self.family {
			ClassFamily::GenericInst => TypeSig::with_data(
				ElementType::GenericInst,
				TypeSigData::Generic(self.generic_class.expect("generic family")),
			),
			ClassFamily::Array => {
				// Array classes pre-set their signatures at creation.
				unreachable!("array class signatures are created eagerly")
			},
			ClassFamily::TypeDef => match self.primitive_element {
				Some(element) => TypeSig::new_by_val(element),
				None => {
					let element = match self.is_value_type() {
						true => ElementType::ValueType,
						false => ElementType::Class,
					};
					TypeSig::with_data(element, TypeSigData::TypeDefGid(self.gid))
				},
			},
		};
		sig.by_ref = by_ref;
		sig
	}

	pub(crate) fn set_sigs(&self, by_val: &'l TypeSig<'l>, by_ref: &'l TypeSig<'l>) {
		self.by_val.set(Some(by_val));
		self.by_ref.set(Some(by_ref));
	}

	// ### Phase: super types

	pub fn ensure_super_types(&'l self, ctx: &'l Context<'l>) -> VmResult<()> {
		if !self.begin_phase(ClassInit::SUPER_TYPES)? {
			return Ok(());
		}
		trace!(class = %self, "init super types");

		if self.family != ClassFamily::Array
			&& self.parent.get().is_none()
			&& self.module.image().is_some()
		{
			let row = self.module.type_def_row(self.type_def_rid())?;
			if !row.extends.is_null() {
				let gcc = GenericContainerContext {
					class: self.base_container(ctx)?,
					method: None,
				};
				let gc = self.generic_context();
				let parent = self.module.get_class_by_type_token(
					ctx,
					MetadataToken::from(row.extends),
					&gcc,
					gc.as_ref(),
				)?;
				self.parent.set(Some(parent));
			}
		}

		let chain = match self.parent.get() {
			None => vec![self],
			Some(parent) => {
				parent.ensure_super_types(ctx)?;
				let mut chain = Vec::with_capacity(parent.super_types().len() + 1);
				chain.extend_from_slice(parent.super_types());
				chain.push(self);
				chain
			},
		};
		if chain.len() > u8::MAX as usize {
			return Err(VmError::TypeLoad);
		}
		self.hierarchy_depth.set(chain.len() as u8);
		self.super_types.set(ctx.bump().alloc_slice_copy(&chain));

		self.end_phase(ClassInit::SUPER_TYPES);
		Ok(())
	}

	// ### Phase: interface types

	pub fn ensure_interfaces(&'l self, ctx: &'l Context<'l>) -> VmResult<()> {
		if !self.begin_phase(ClassInit::INTERFACE_TYPES)? {
			return Ok(());
		}
		self.ensure_super_types(ctx)?;
		trace!(class = %self, "init interfaces");

		let mut flat: Vec<&'l Class<'l>> = vec![];
		let mut push_unique = |class: &'l Class<'l>, flat: &mut Vec<&'l Class<'l>>| {
			if !flat.iter().any(|c| std::ptr::eq(*c, class)) {
				flat.push(class);
			}
		};

		if let Some(parent) = self.parent.get() {
			parent.ensure_interfaces(ctx)?;
			for interface in parent.interfaces() {
				push_unique(interface, &mut flat);
			}
		}

		// Declared interfaces: rows for type-defs, inflated rows for generic
		// instances; arrays and synthesized classes pre-populate their list.
		if self.family != ClassFamily::Array && self.module.image().is_some() {
			let gcc = GenericContainerContext {
				class: self.base_container(ctx)?,
				method: None,
			};
			let gc = self.generic_context();
			if let Some((start, end)) = self.module.interface_impl_range_of_class(self.type_def_rid()) {
				for rid in start..end {
					let row = self.module.interface_impl_row(rid)?;
					let interface = self.module.get_class_by_type_token(
						ctx,
						MetadataToken::from(row.interface),
						&gcc,
						gc.as_ref(),
					)?;
					interface.ensure_interfaces(ctx)?;
					for inherited in interface.interfaces() {
						push_unique(inherited, &mut flat);
					}
					push_unique(interface, &mut flat);
				}
			}
		} else {
			for interface in self.interfaces.get() {
				push_unique(interface, &mut flat);
			}
		}

		self.interfaces.set(ctx.bump().alloc_slice_copy(&flat));
		self.end_phase(ClassInit::INTERFACE_TYPES);
		Ok(())
	}

	// ### Phase: nested classes

	pub fn ensure_nested_classes(&'l self, ctx: &'l Context<'l>) -> VmResult<()> {
		if !self.begin_phase(ClassInit::NESTED_CLASSES)? {
			return Ok(());
		}

		if self.family == ClassFamily::TypeDef {
			if let Some((start, end)) = self.module.nested_class_range_of_enclosing(self.type_def_rid()) {
				let mut nested = Vec::with_capacity((end - start) as usize);
				for rid in start..end {
					let row = self.module.nested_class_row(rid)?;
					let class = self.module.get_class_by_type_def_rid(ctx, row.nested_class.rid())?;
					class.set_declaring_class(self);
					nested.push(class);
				}
				self.nested_classes.set(ctx.bump().alloc_slice_copy(&nested));
			}
		}

		self.end_phase(ClassInit::NESTED_CLASSES);
		Ok(())
	}

	// ### Phase: everything

	pub fn ensure_all(&'l self, ctx: &'l Context<'l>) -> VmResult<()> {
		if self.is_inited(ClassInit::ALL) {
			return Ok(());
		}
		self.ensure_super_types(ctx)?;
		self.ensure_fields(ctx)?;
		self.ensure_methods(ctx)?;
		self.ensure_interfaces(ctx)?;
		self.ensure_vtable(ctx)?;
		self.ensure_nested_classes(ctx)?;
		self.ensure_properties_and_events(ctx)?;
		self.mark_inited(ClassInit::ALL);
		Ok(())
	}

	// ### Context helpers for row-backed phases

	/// Rid of the type-def rows backing this class (the base type-def for
	/// generic instances; zero for arrays).
	pub(crate) fn type_def_rid(&self) -> u32 {
		match self.family {
			ClassFamily::GenericInst => self
				.generic_class
				.map(|g| g.base_gid.rid())
				.unwrap_or(0),
			_ => self.token.index() as u32,
		}
	}

	/// The declaring container rows are read under: the base type-def's.
	pub(crate) fn base_container(&'l self, ctx: &'l Context<'l>) -> VmResult<Option<&'l GenericContainer<'l>>> {
		match self.family {
			ClassFamily::GenericInst => {
				let base = ctx.class_by_gid(self.generic_class.expect("generic family").base_gid)?;
				Ok(base.generic_container())
			},
			_ => Ok(self.generic_container()),
		}
	}

	/// The instantiation applied while reading this class's member rows.
	pub(crate) fn generic_context(&self) -> Option<GenericContext<'l>> {
		self.generic_class.map(|g| GenericContext {
			class_inst: Some(g.inst),
			method_inst: None,
		})
	}

	/// `(base declaration, context to re-inflate with)`; the identity pair
	/// for non-generic classes.
	pub fn base_declaration(
		&'l self,
		ctx: &'l Context<'l>,
	) -> VmResult<(&'l Class<'l>, Option<GenericContext<'l>>)> {
		match self.generic_class {
			None => Ok((self, None)),
			Some(generic) => {
				let base = ctx.class_by_gid(generic.base_gid)?;
				Ok((base, Some(GenericContext {
					class_inst: Some(generic.inst),
					method_inst: None,
				})))
			},
		}
	}

	// ### Queries

	/// The underlying primitive signature when this class is an enum.
	pub fn enum_underlying_sig(&'l self, ctx: &'l Context<'l>) -> VmResult<Option<&'l TypeSig<'l>>> {
		if !self.is_enum() {
			return Ok(None);
		}
		self.ensure_fields(ctx)?;
		Ok(self
			.fields()
			.iter()
			.find(|f| !f.is_static() && !f.is_literal())
			.map(|f| f.signature()))
	}

	/// Strict-inheritance inclusion in O(1) via hierarchy depth.
	pub fn is_subclass_of(&'l self, other: &'l Class<'l>) -> bool {
		let depth = other.hierarchy_depth.get() as usize;
		depth != 0
			&& depth <= self.super_types().len()
			&& std::ptr::eq(self.super_types()[depth - 1], other)
	}

	pub fn implements_interface(&'l self, interface: &'l Class<'l>) -> bool {
		self.interfaces().iter().any(|i| std::ptr::eq(*i, interface))
	}

	/// `isinst`/`castclass` relation: identity, supertype chain, interface
	/// list, and array covariance on reference elements.
	pub fn is_assignable_from(&'l self, ctx: &'l Context<'l>, other: &'l Class<'l>) -> VmResult<bool> {
		if std::ptr::eq(self, other) {
			return Ok(true);
		}
		other.ensure_super_types(ctx)?;
		if self.is_interface() {
			other.ensure_interfaces(ctx)?;
			if other.implements_interface(self) {
				return Ok(true);
			}
		}
		if other.is_subclass_of(self) {
			return Ok(true);
		}
		if self.is_array() && other.is_array() && self.rank.get() == other.rank.get() {
			let (Some(a), Some(b)) = (self.element_class(), other.element_class()) else {
				return Ok(false);
			};
			if std::ptr::eq(a, b) {
				return Ok(true);
			}
			if !a.is_value_type() && !b.is_value_type() {
				return a.is_assignable_from(ctx, b);
			}
		}
		Ok(false)
	}

	pub fn find_field(
		&'l self,
		ctx: &'l Context<'l>,
		name: &str,
		signature: Option<&'l TypeSig<'l>>,
	) -> VmResult<Option<&'l FieldInfo<'l>>> {
		let mut current = Some(self);
		while let Some(class) = current {
			class.ensure_fields(ctx)?;
			let found = class.fields().iter().find(|f| {
				f.name() == name
					&& signature.map(|sig| std::ptr::eq(f.signature(), sig)).unwrap_or(true)
			});
			if let Some(field) = found {
				return Ok(Some(field));
			}
			class.ensure_super_types(ctx)?;
			current = class.parent();
		}
		Ok(None)
	}

	pub fn find_method_by_name_and_sig(
		&'l self,
		ctx: &'l Context<'l>,
		name: &str,
		sig: &MethodSig<'l>,
	) -> VmResult<Option<&'l MethodInfo<'l>>> {
		let mut current = Some(self);
		while let Some(class) = current {
			class.ensure_methods(ctx)?;
			let found = class
				.methods()
				.iter()
				.find(|m| {
					m.name() == name
						&& m.params().len() == sig.params.len()
						&& m.is_static() != sig.has_this()
						&& std::ptr::eq(m.return_sig(), sig.return_type)
						&& m.params().iter().zip(&sig.params).all(|(a, b)| std::ptr::eq(*a, *b))
				})
				.copied();
			if let Some(method) = found {
				return Ok(Some(method));
			}
			class.ensure_super_types(ctx)?;
			current = class.parent();
		}
		Ok(None)
	}

	pub fn find_method_by_name(
		&'l self,
		ctx: &'l Context<'l>,
		name: &str,
	) -> VmResult<Option<&'l MethodInfo<'l>>> {
		let mut current = Some(self);
		while let Some(class) = current {
			class.ensure_methods(ctx)?;
			if let Some(method) = class.methods().iter().find(|m| m.name() == name) {
				return Ok(Some(*method));
			}
			class.ensure_super_types(ctx)?;
			current = class.parent();
		}
		Ok(None)
	}

	pub fn find_method_by_name_and_param_count(
		&'l self,
		ctx: &'l Context<'l>,
		name: &str,
		param_count: usize,
	) -> VmResult<Option<&'l MethodInfo<'l>>> {
		let mut current = Some(self);
		while let Some(class) = current {
			class.ensure_methods(ctx)?;
			let found = class
				.methods()
				.iter()
				.find(|m| m.name() == name && m.params().len() == param_count)
				.copied();
			if let Some(method) = found {
				return Ok(Some(method));
			}
			class.ensure_super_types(ctx)?;
			current = class.parent();
		}
		Ok(None)
	}
}

impl<'l> ModuleDef<'l> {
	/// The class skeleton for a type-def rid; created empty on first
	/// reference and cached.
	pub fn get_class_by_type_def_rid(
		&'l self,
		ctx: &'l Context<'l>,
		rid: u32,
	) -> VmResult<&'l Class<'l>> {
		if let Some(class) = self.classes.borrow().get(&rid).copied() {
			return Ok(class);
		}

		let row = self.type_def_row(rid)?;
		let namespace = self.get_string(row.type_namespace)?;
		let name = self.get_string(row.type_name)?;
		let token = MetadataToken::from(TypeDefToken(rid as usize));
		let gid = self.encode_gid(rid)?;

		let mut extra = ClassExtra::empty();
		let is_system_root = std::ptr::eq(self, ctx.corlib()?)
			&& namespace == "System"
			&& matches!(name, "ValueType" | "Enum");
		if !is_system_root && !row.extends.is_null() {
			if let Some((parent_ns, parent_name)) = self.extends_name(&row)? {
				if parent_ns == "System" {
					match parent_name {
						"ValueType" => extra |= ClassExtra::VALUE_TYPE,
						"Enum" => extra |= ClassExtra::VALUE_TYPE | ClassExtra::ENUM,
						_ => {},
					}
				}
			}
		}
		if !extra.contains(ClassExtra::VALUE_TYPE) {
			extra |= ClassExtra::REFERENCE_TYPE;
		}

		let primitive_element = match std::ptr::eq(self, ctx.corlib()?) {
			true => Context::primitive_element_type(namespace, name),
			false => None,
		};

		let class = Class::alloc(
			ctx,
			self,
			token,
			gid,
			ClassFamily::TypeDef,
			namespace,
			name,
			row.flags,
			extra,
			primitive_element,
			None,
		);
		class.set_generic_container(self.get_generic_container(ctx, token)?);
		if namespace == "System" && name == "Nullable`1" {
			class.set_extra(ClassExtra::NULLABLE);
		}

		self.classes.borrow_mut().insert(rid, class);
		Ok(class)
	}

	/// Textual parent lookup used to classify value types before any class
	/// resolution happens.
	fn extends_name(&self, row: &crate::raw::heaps::table::TypeDef) -> VmResult<Option<(&'l str, &'l str)>> {
		let token = MetadataToken::from(row.extends);
		match token.kind() {
			MetadataTokenKind::TypeDef => {
				let parent = self.type_def_row(token.index() as u32)?;
				Ok(Some((
					self.get_string(parent.type_namespace)?,
					self.get_string(parent.type_name)?,
				)))
			},
			MetadataTokenKind::TypeRef => {
				let parent = self.type_ref_row(token.index() as u32)?;
				Ok(Some((
					self.get_string(parent.type_namespace)?,
					self.get_string(parent.type_name)?,
				)))
			},
			_ => Ok(None),
		}
	}

	pub fn try_get_created_class_by_type_def_rid(&self, rid: u32) -> Option<&'l Class<'l>> {
		self.classes.borrow().get(&rid).copied()
	}
}

impl<'l> Context<'l> {
	/// The runtime class of an interned generic instantiation, creating and
	/// caching it on first use.
	pub fn class_from_generic_class(&'l self, generic: &'l GenericClass<'l>) -> VmResult<&'l Class<'l>> {
		if let Some(class) = generic.cache_class.get() {
			return Ok(class);
		}

		let base = self.class_by_gid(generic.base_gid)?;
		let mut extra = base.extra_flags() & (ClassExtra::VALUE_TYPE | ClassExtra::ENUM | ClassExtra::NULLABLE);
		if !extra.contains(ClassExtra::VALUE_TYPE) {
			extra |= ClassExtra::REFERENCE_TYPE;
		}
		extra |= ClassExtra::GENERIC;

		let class = Class::alloc(
			self,
			base.module(),
			base.token(),
			base.gid(),
			ClassFamily::GenericInst,
			base.namespace(),
			base.name(),
			base.flags,
			extra,
			None,
			Some(generic),
		);
		class.set_generic_container(base.generic_container());

		let by_val = self.intern_sig(TypeSig::with_data(
			ElementType::GenericInst,
			TypeSigData::Generic(generic),
		));
		let by_ref = self.intern_sig(TypeSig {
			by_ref: true,
			..*by_val
		});
		class.set_sigs(by_val, by_ref);
		generic.by_val_sig.set(Some(by_val));
		generic.by_ref_sig.set(Some(by_ref));
		generic.cache_class.set(Some(class));
		Ok(class)
	}
}
