//! End-to-end transformer + interpreter tests over hand-assembled IL bodies
//! running against a synthesized minimal corlib.

use std::cell::Cell;

use crate::error::{VmError, VmResult};
use crate::raw::body::{ExceptionClause, ExceptionClauseKind, MethodBody};
use crate::raw::heaps::table::{MethodAttributes, MethodImplAttributes, TypeAttributes};
use crate::raw::indices::metadata_token::{
	FieldToken, MetadataToken, MethodDefToken, TypeDefToken,
};
use crate::structured::{
	Class, ClassExtra, ClassFamily, ElementType, FieldInfo, GenericContainer, GenericParam,
	MethodInfo, ModuleDef, TypeSig,
};
use crate::vm::object::GcRef;
use crate::vm::runtime::{Runtime, RuntimeOptions};

struct World<'l> {
	rt: &'l Runtime<'l>,
	corlib: &'l ModuleDef<'l>,
	next_type_rid: Cell<u32>,
	next_method_rid: Cell<u32>,
	next_field_rid: Cell<u32>,
	pub object: &'l Class<'l>,
	pub value_type: &'l Class<'l>,
	pub int32: &'l Class<'l>,
}

impl<'l> World<'l> {
	fn new(rt: &'l Runtime<'l>) -> World<'l> {
		let ctx = rt.ctx();
		let corlib = ModuleDef::synthetic(ctx, "corlib", ctx.next_module_id());
		ctx.register_module(corlib);

		let world = World {
			rt,
			corlib,
			next_type_rid: Cell::new(1),
			next_method_rid: Cell::new(1),
			next_field_rid: Cell::new(1),
			object: Class::alloc(
				ctx,
				corlib,
				MetadataToken::from(TypeDefToken(1)),
				corlib.encode_gid(1).unwrap(),
				ClassFamily::TypeDef,
				ctx.alloc_str("System"),
				ctx.alloc_str("Object"),
				TypeAttributes::PUBLIC,
				ClassExtra::REFERENCE_TYPE,
				None,
				None,
			),
			value_type: Class::alloc(
				ctx,
				corlib,
				MetadataToken::from(TypeDefToken(2)),
				corlib.encode_gid(2).unwrap(),
				ClassFamily::TypeDef,
				ctx.alloc_str("System"),
				ctx.alloc_str("ValueType"),
				TypeAttributes::PUBLIC | TypeAttributes::ABSTRACT,
				ClassExtra::REFERENCE_TYPE,
				None,
				None,
			),
			int32: Class::alloc(
				ctx,
				corlib,
				MetadataToken::from(TypeDefToken(3)),
				corlib.encode_gid(3).unwrap(),
				ClassFamily::TypeDef,
				ctx.alloc_str("System"),
				ctx.alloc_str("Int32"),
				TypeAttributes::PUBLIC | TypeAttributes::SEALED,
				ClassExtra::VALUE_TYPE,
				Some(ElementType::I4),
				None,
			),
		};
		world.next_type_rid.set(4);

		world.register(world.object);
		world.value_type.set_parent(Some(world.object));
		world.register(world.value_type);
		world.int32.set_parent(Some(world.value_type));
		world.set_fields(world.int32, &[("m_value", world.i4_sig(), false)]);
		world.register(world.int32);

		let string = world.define_ref_class("System", "String", Some(world.object));
		let _ = string;
		world.define_ref_class("System", "Array", Some(world.object));
		let exception = world.define_ref_class("System", "Exception", Some(world.object));
		for name in [
			"DivideByZeroException",
			"OverflowException",
			"NullReferenceException",
			"InvalidCastException",
			"IndexOutOfRangeException",
			"ArithmeticException",
			"NotImplementedException",
			"ExecutionEngineException",
			"MissingMethodException",
		] {
			world.define_ref_class("System", name, Some(exception));
		}

		world
	}

	fn ctx(&self) -> &'l crate::structured::Context<'l> {
		self.rt.ctx()
	}

	fn register(&self, class: &'l Class<'l>) {
		let rid = class.token().index() as u32;
		self.corlib.classes.borrow_mut().insert(rid, class);
		self.corlib.register_synthetic_class(class);
	}

	fn define_class(
		&self,
		namespace: &str,
		name: &str,
		flags: TypeAttributes,
		extra: ClassExtra,
		parent: Option<&'l Class<'l>>,
	) -> &'l Class<'l> {
		let ctx = self.ctx();
		let rid = self.next_type_rid.get();
		self.next_type_rid.set(rid + 1);
		let class = Class::alloc(
			ctx,
			self.corlib,
			MetadataToken::from(TypeDefToken(rid as usize)),
			self.corlib.encode_gid(rid).unwrap(),
			ClassFamily::TypeDef,
			ctx.alloc_str(namespace),
			ctx.alloc_str(name),
			flags,
			extra,
			None,
			None,
		);
		class.set_parent(parent);
		self.register(class);
		class
	}

	fn define_ref_class(&self, namespace: &str, name: &str, parent: Option<&'l Class<'l>>) -> &'l Class<'l> {
		self.define_class(
			namespace,
			name,
			TypeAttributes::PUBLIC,
			ClassExtra::REFERENCE_TYPE,
			parent,
		)
	}

	fn set_fields(&self, class: &'l Class<'l>, fields: &[(&str, &'l TypeSig<'l>, bool)]) {
		let ctx = self.ctx();
		let mut built = vec![];
		for (name, sig, is_static) in fields {
			let rid = self.next_field_rid.get();
			self.next_field_rid.set(rid + 1);
			let flags = match is_static {
				true => crate::raw::heaps::table::FieldAttributes::PUBLIC
					| crate::raw::heaps::table::FieldAttributes::STATIC,
				false => crate::raw::heaps::table::FieldAttributes::PUBLIC,
			};
			built.push(FieldInfo::new(
				class,
				ctx.alloc_str(name),
				sig,
				flags,
				MetadataToken::from(FieldToken(rid as usize)),
			));
		}
		let fields = &*ctx.bump().alloc_slice_fill_iter(built);
		class.set_fields(fields);
		for field in fields {
			self.corlib
				.synthetic_fields
				.borrow_mut()
				.insert(field.token().index() as u32, field);
		}
	}

	#[allow(clippy::too_many_arguments)]
	fn define_method(
		&self,
		class: &'l Class<'l>,
		name: &str,
		flags: MethodAttributes,
		return_sig: &'l TypeSig<'l>,
		params: &[&'l TypeSig<'l>],
		code: &[u8],
		clauses: Vec<ExceptionClause>,
	) -> &'l MethodInfo<'l> {
		let ctx = self.ctx();
		let rid = self.next_method_rid.get();
		self.next_method_rid.set(rid + 1);
		let method = MethodInfo::alloc(
			ctx,
			class,
			ctx.alloc_str(name),
			MetadataToken::from(MethodDefToken(rid as usize)),
			flags,
			MethodImplAttributes::IL,
			return_sig,
			ctx.bump().alloc_slice_copy(params),
			None,
			None,
		);

		let mut methods = class.methods().to_vec();
		methods.push(method);
		class.set_methods(ctx.bump().alloc_slice_copy(&methods));

		self.corlib.synthetic_methods.borrow_mut().insert(rid, method);
		if !code.is_empty() {
			self.corlib.synthetic_bodies.borrow_mut().insert(
				rid,
				MethodBody {
					max_stack: 8,
					init_locals: false,
					local_var_sig_token: 0,
					code: ctx.bump().alloc_slice_copy(code),
					exception_clauses: clauses,
				},
			);
		}
		method
	}

	fn i4_sig(&self) -> &'l TypeSig<'l> {
		self.ctx().intern_sig(TypeSig::new_by_val(ElementType::I4))
	}

	fn object_sig(&self) -> &'l TypeSig<'l> {
		self.ctx().intern_sig(TypeSig::new_by_val(ElementType::Object))
	}

	fn invoke_i4(&self, method: &'l MethodInfo<'l>, params: &[*const u8]) -> VmResult<i32> {
		let boxed = self.rt.invoke(method, GcRef::NULL, params)?;
		assert!(!boxed.is_null());
		Ok(unsafe { *(boxed.data_ptr() as *const i32) })
	}
}

fn type_token(class: &Class) -> u32 {
	class.token().raw()
}

fn method_token(method: &MethodInfo) -> u32 {
	method.token().raw()
}

fn field_token(field: &FieldInfo) -> u32 {
	field.token().raw()
}

// Minimal IL assembler for test bodies.
#[derive(Default)]
struct Asm {
	bytes: Vec<u8>,
}

impl Asm {
	fn raw(mut self, op: u8) -> Self {
		self.bytes.push(op);
		self
	}

	fn ldc_i4(mut self, value: i32) -> Self {
		self.bytes.push(0x20);
		self.bytes.extend_from_slice(&value.to_le_bytes());
		self
	}

	fn ldarg_0(self) -> Self {
		self.raw(0x02)
	}

	fn add(self) -> Self {
		self.raw(0x58)
	}

	fn add_ovf(self) -> Self {
		self.raw(0xD6)
	}

	fn div(self) -> Self {
		self.raw(0x5B)
	}

	fn pop(self) -> Self {
		self.raw(0x26)
	}

	fn ldnull(self) -> Self {
		self.raw(0x14)
	}

	fn ret(self) -> Self {
		self.raw(0x2A)
	}

	fn with_token(mut self, op: u8, token: u32) -> Self {
		self.bytes.push(op);
		self.bytes.extend_from_slice(&token.to_le_bytes());
		self
	}

	fn callvirt(self, token: u32) -> Self {
		self.with_token(0x6F, token)
	}

	fn box_(self, token: u32) -> Self {
		self.with_token(0x8C, token)
	}

	fn unbox_any(self, token: u32) -> Self {
		self.with_token(0xA5, token)
	}

	fn stsfld(self, token: u32) -> Self {
		self.with_token(0x80, token)
	}

	fn ldsfld(self, token: u32) -> Self {
		self.with_token(0x7E, token)
	}

	fn leave(mut self, disp: i32) -> Self {
		self.bytes.push(0xDD);
		self.bytes.extend_from_slice(&disp.to_le_bytes());
		self
	}

	fn endfinally(self) -> Self {
		self.raw(0xDC)
	}

	fn switch(mut self, targets: &[i32]) -> Self {
		self.bytes.push(0x45);
		self.bytes.extend_from_slice(&(targets.len() as u32).to_le_bytes());
		for target in targets {
			self.bytes.extend_from_slice(&target.to_le_bytes());
		}
		self
	}

	fn build(self) -> Vec<u8> {
		self.bytes
	}
}

const STATIC_I4: MethodAttributes = MethodAttributes::PUBLIC
	.union(MethodAttributes::STATIC)
	.union(MethodAttributes::HIDE_BY_SIG);

#[test]
fn arithmetic_add_returns_twelve() {
	let rt = Runtime::new(RuntimeOptions::default());
	let world = World::new(&rt);
	let holder = world.define_ref_class("Tests", "Arith", Some(world.object));

	let body = Asm::default().ldc_i4(7).ldc_i4(5).add().ret().build();
	let method = world.define_method(holder, "Add", STATIC_I4, world.i4_sig(), &[], &body, vec![]);

	assert_eq!(world.invoke_i4(method, &[]).unwrap(), 12);
}

#[test]
fn add_ovf_on_int_max_overflows() {
	let rt = Runtime::new(RuntimeOptions::default());
	let world = World::new(&rt);
	let holder = world.define_ref_class("Tests", "Ovf", Some(world.object));

	let body = Asm::default().ldc_i4(i32::MAX).ldc_i4(1).add_ovf().ret().build();
	let method = world.define_method(holder, "Boom", STATIC_I4, world.i4_sig(), &[], &body, vec![]);

	assert_eq!(world.invoke_i4(method, &[]), Err(VmError::Overflow));
}

#[test]
fn virtual_dispatch_selects_the_override() {
	let rt = Runtime::new(RuntimeOptions::default());
	let world = World::new(&rt);

	let a = world.define_ref_class("Tests", "A", Some(world.object));
	let a_foo = world.define_method(
		a,
		"Foo",
		MethodAttributes::PUBLIC | MethodAttributes::VIRTUAL | MethodAttributes::NEW_SLOT,
		world.i4_sig(),
		&[],
		&Asm::default().ldc_i4(1).ret().build(),
		vec![],
	);

	let b = world.define_ref_class("Tests", "B", Some(a));
	world.define_method(
		b,
		"Foo",
		MethodAttributes::PUBLIC | MethodAttributes::VIRTUAL,
		world.i4_sig(),
		&[],
		&Asm::default().ldc_i4(2).ret().build(),
		vec![],
	);

	let caller_holder = world.define_ref_class("Tests", "Caller", Some(world.object));
	let caller = world.define_method(
		caller_holder,
		"CallFoo",
		STATIC_I4,
		world.i4_sig(),
		&[a.by_val_sig(rt.ctx())],
		&Asm::default().ldarg_0().callvirt(method_token(a_foo)).ret().build(),
		vec![],
	);

	b.ensure_fields(rt.ctx()).unwrap();
	let instance = rt
		.heap()
		.alloc_object(b, b.instance_size() as usize)
		.unwrap();
	let result = world.invoke_i4(caller, &[instance.raw() as *const u8]).unwrap();
	assert_eq!(result, 2);
}

#[test]
fn interface_dispatch_on_boxed_value_type() {
	let rt = Runtime::new(RuntimeOptions::default());
	let world = World::new(&rt);

	let iface = world.define_class(
		"Tests",
		"IAnswer",
		TypeAttributes::PUBLIC | TypeAttributes::INTERFACE | TypeAttributes::ABSTRACT,
		ClassExtra::REFERENCE_TYPE,
		None,
	);
	let iface_m = world.define_method(
		iface,
		"M",
		MethodAttributes::PUBLIC
			| MethodAttributes::VIRTUAL
			| MethodAttributes::ABSTRACT
			| MethodAttributes::NEW_SLOT,
		world.i4_sig(),
		&[],
		&[],
		vec![],
	);

	let impl_class = world.define_class(
		"Tests",
		"Impl",
		TypeAttributes::PUBLIC | TypeAttributes::SEALED,
		ClassExtra::VALUE_TYPE,
		Some(world.value_type),
	);
	impl_class.set_interfaces_raw(rt.ctx().bump().alloc_slice_copy(&[iface]));
	world.define_method(
		impl_class,
		"M",
		MethodAttributes::PUBLIC
			| MethodAttributes::VIRTUAL
			| MethodAttributes::FINAL
			| MethodAttributes::NEW_SLOT,
		world.i4_sig(),
		&[],
		&Asm::default().ldc_i4(42).ret().build(),
		vec![],
	);

	let caller_holder = world.define_ref_class("Tests", "IfaceCaller", Some(world.object));
	let caller = world.define_method(
		caller_holder,
		"CallM",
		STATIC_I4,
		world.i4_sig(),
		&[world.object_sig()],
		&Asm::default().ldarg_0().callvirt(method_token(iface_m)).ret().build(),
		vec![],
	);

	impl_class.ensure_fields(rt.ctx()).unwrap();
	let boxed = rt
		.heap()
		.alloc_object(impl_class, impl_class.instance_size() as usize)
		.unwrap();
	let result = world.invoke_i4(caller, &[boxed.raw() as *const u8]).unwrap();
	assert_eq!(result, 42);
}

#[test]
fn generic_instantiations_share_one_class() {
	let rt = Runtime::new(RuntimeOptions::default());
	let world = World::new(&rt);
	let ctx = rt.ctx();

	let list = world.define_ref_class("System.Collections.Generic", "List`1", Some(world.object));
	let params = ctx.bump().alloc_slice_fill_iter([GenericParam {
		gid: crate::structured::Gid::encode_global(1),
		name: "T",
		flags: 0,
		index: 0,
		constraints: Default::default(),
		owner: Default::default(),
		by_val_sig: Default::default(),
		by_ref_sig: Default::default(),
	}]);
	let container = &*ctx.bump().alloc(GenericContainer {
		params,
		owner_gid: list.gid(),
		is_method: false,
	});
	list.set_generic_container(Some(container));

	// Two independently produced instantiations of List<int>.
	let inst_a = ctx.intern_inst(&[world.i4_sig()]);
	let inst_b = ctx.intern_inst(&[world.i4_sig()]);
	assert!(std::ptr::eq(inst_a, inst_b));

	let generic_a = ctx.intern_generic_class(list.gid(), inst_a);
	let generic_b = ctx.intern_generic_class(list.gid(), inst_b);
	assert!(std::ptr::eq(generic_a, generic_b));

	let class_a = ctx.class_from_generic_class(generic_a).unwrap();
	let class_b = ctx.class_from_generic_class(generic_b).unwrap();
	assert!(std::ptr::eq(class_a, class_b));
}

#[test]
fn try_catch_handles_divide_by_zero() {
	let rt = Runtime::new(RuntimeOptions::default());
	let world = World::new(&rt);
	let holder = world.define_ref_class("Tests", "Catcher", Some(world.object));
	let exception = world
		.corlib
		.get_class_by_name(rt.ctx(), "System", "Exception")
		.unwrap()
		.unwrap();

	// try { 1 / 0 } catch (Exception) { return 99 }
	let body = Asm::default()
		.ldc_i4(1) // 0
		.ldc_i4(0) // 5
		.div() // 10
		.pop() // 11
		.leave(7) // 12, next 17, target 24
		.pop() // 17: handler, discard the exception
		.ldc_i4(99) // 18
		.ret() // 23
		.ldc_i4(0) // 24
		.ret() // 29
		.build();
	let clause = ExceptionClause {
		kind: ExceptionClauseKind::Exception,
		try_offset: 0,
		try_length: 17,
		handler_offset: 17,
		handler_length: 7,
		class_token_or_filter_offset: type_token(exception),
	};
	let method = world.define_method(
		holder,
		"Catch",
		STATIC_I4,
		world.i4_sig(),
		&[],
		&body,
		vec![clause],
	);

	assert_eq!(world.invoke_i4(method, &[]).unwrap(), 99);
}

#[test]
fn finally_runs_before_the_return_value_surfaces() {
	let rt = Runtime::new(RuntimeOptions::default());
	let world = World::new(&rt);
	let holder = world.define_ref_class("Tests", "Protected", Some(world.object));
	world.set_fields(
		holder,
		&[("ret_value", world.i4_sig(), true), ("observed", world.i4_sig(), true)],
	);
	let ret_field = &holder.fields()[0];
	let observed_field = &holder.fields()[1];

	// try { ret_value = 1; } finally { observed = 2; } return ret_value;
	let body = Asm::default()
		.ldc_i4(1) // 0
		.stsfld(field_token(ret_field)) // 5
		.leave(11) // 10, next 15, target 26
		.ldc_i4(2) // 15: finally
		.stsfld(field_token(observed_field)) // 20
		.endfinally() // 25
		.ldsfld(field_token(ret_field)) // 26
		.ret() // 31
		.build();
	let clause = ExceptionClause {
		kind: ExceptionClauseKind::Finally,
		try_offset: 0,
		try_length: 15,
		handler_offset: 15,
		handler_length: 11,
		class_token_or_filter_offset: 0,
	};
	let method = world.define_method(
		holder,
		"Fin",
		STATIC_I4,
		world.i4_sig(),
		&[],
		&body,
		vec![clause],
	);

	assert_eq!(world.invoke_i4(method, &[]).unwrap(), 1);

	// The finally observably ran.
	let statics = holder.static_fields_data();
	assert!(!statics.is_null());
	let observed = unsafe { *(statics.add(observed_field.offset() as usize) as *const i32) };
	assert_eq!(observed, 2);
}

#[test]
fn switch_selects_matching_target_and_default() {
	let rt = Runtime::new(RuntimeOptions::default());
	let world = World::new(&rt);
	let holder = world.define_ref_class("Tests", "Jump", Some(world.object));

	let body = Asm::default()
		.ldarg_0() // 0
		.switch(&[6, 12, 18, 24]) // 1..22
		.ldc_i4(-1) // 22: default
		.ret() // 27
		.ldc_i4(100) // 28: case 0
		.ret() // 33
		.ldc_i4(101) // 34: case 1
		.ret() // 39
		.ldc_i4(102) // 40: case 2
		.ret() // 45
		.ldc_i4(103) // 46: case 3
		.ret() // 51
		.build();
	let method = world.define_method(
		holder,
		"Pick",
		STATIC_I4,
		world.i4_sig(),
		&[world.i4_sig()],
		&body,
		vec![],
	);

	let three = 3i32;
	let four = 4i32;
	assert_eq!(
		world.invoke_i4(method, &[&three as *const i32 as *const u8]).unwrap(),
		103
	);
	assert_eq!(
		world.invoke_i4(method, &[&four as *const i32 as *const u8]).unwrap(),
		-1
	);
}

#[test]
fn box_then_unbox_any_round_trips() {
	let rt = Runtime::new(RuntimeOptions::default());
	let world = World::new(&rt);
	let holder = world.define_ref_class("Tests", "Boxing", Some(world.object));

	let body = Asm::default()
		.ldc_i4(42)
		.box_(type_token(world.int32))
		.unbox_any(type_token(world.int32))
		.ret()
		.build();
	let method = world.define_method(holder, "RoundTrip", STATIC_I4, world.i4_sig(), &[], &body, vec![]);
	assert_eq!(world.invoke_i4(method, &[]).unwrap(), 42);
}

#[test]
fn unbox_any_on_null_raises_null_reference() {
	let rt = Runtime::new(RuntimeOptions::default());
	let world = World::new(&rt);
	let holder = world.define_ref_class("Tests", "NullBox", Some(world.object));

	let body = Asm::default()
		.ldnull()
		.unbox_any(type_token(world.int32))
		.ret()
		.build();
	let method = world.define_method(holder, "Bad", STATIC_I4, world.i4_sig(), &[], &body, vec![]);
	assert_eq!(world.invoke_i4(method, &[]), Err(VmError::NullReference));
}

#[test]
fn transform_is_cached_on_the_method() {
	let rt = Runtime::new(RuntimeOptions::default());
	let world = World::new(&rt);
	let holder = world.define_ref_class("Tests", "Cached", Some(world.object));

	let body = Asm::default().ldc_i4(5).ret().build();
	let method = world.define_method(holder, "Five", STATIC_I4, world.i4_sig(), &[], &body, vec![]);

	assert_eq!(world.invoke_i4(method, &[]).unwrap(), 5);
	let first = rt.ensure_interp_body(method).unwrap() as *const _;
	assert_eq!(world.invoke_i4(method, &[]).unwrap(), 5);
	let second = rt.ensure_interp_body(method).unwrap() as *const _;
	assert_eq!(first, second);
}

#[test]
fn init_phases_imply_their_prerequisites() {
	use crate::structured::ClassInit;

	let rt = Runtime::new(RuntimeOptions::default());
	let world = World::new(&rt);
	let a = world.define_ref_class("Tests", "PhaseA", Some(world.object));
	let b = world.define_ref_class("Tests", "PhaseB", Some(a));

	b.ensure_vtable(rt.ctx()).unwrap();
	for class in [b, a] {
		assert!(class.is_inited(ClassInit::VTABLE));
		assert!(class.is_inited(ClassInit::METHODS));
		assert!(class.is_inited(ClassInit::SUPER_TYPES));
		assert!(class.is_inited(ClassInit::INTERFACE_TYPES));
	}
	assert_eq!(b.hierarchy_depth(), 3);
	assert!(b.is_subclass_of(a));
	assert!(b.is_subclass_of(world.object));
	assert!(!a.is_subclass_of(b));

	// Re-running every phase is a no-op.
	let vtable = b.vtable().as_ptr();
	b.ensure_all(rt.ctx()).unwrap();
	assert_eq!(b.vtable().as_ptr(), vtable);
}

#[test]
fn lowered_branches_land_on_instruction_boundaries() {
	use crate::interp::llops::OpCode;

	let rt = Runtime::new(RuntimeOptions::default());
	let world = World::new(&rt);
	let holder = world.define_ref_class("Tests", "Walk", Some(world.object));

	let body = Asm::default()
		.ldarg_0()
		.switch(&[6, 12, 18, 24])
		.ldc_i4(-1)
		.ret()
		.ldc_i4(100)
		.ret()
		.ldc_i4(101)
		.ret()
		.ldc_i4(102)
		.ret()
		.ldc_i4(103)
		.ret()
		.build();
	let method = world.define_method(
		holder,
		"Pick",
		STATIC_I4,
		world.i4_sig(),
		&[world.i4_sig()],
		&body,
		vec![],
	);
	let interp = rt.ensure_interp_body(method).unwrap();

	// Walk the stream, collecting instruction boundaries and branch targets.
	let mut boundaries = std::collections::HashSet::new();
	let mut targets = vec![];
	let mut pc = 0usize;
	while pc < interp.code.len() {
		boundaries.insert(pc);
		let (op, _) = OpCode::from_bytes(interp.code, pc).unwrap();
		let mut size = op.size();
		if matches!(op, OpCode::Switch) {
			let switch = crate::interp::llops::Switch::decode(interp.code, pc, false);
			for k in 0..switch.num_targets as usize {
				let at = pc + size + k * 4;
				let disp = i32::from_le_bytes([
					interp.code[at],
					interp.code[at + 1],
					interp.code[at + 2],
					interp.code[at + 3],
				]);
				targets.push((pc, disp));
			}
			size += switch.num_targets as usize * 4;
		}
		pc += size;
	}
	assert_eq!(pc, interp.code.len());

	for (from, disp) in targets {
		let target = (from as i64 + disp as i64) as usize;
		assert!(boundaries.contains(&target), "displacement {disp} from {from}");
	}
}

#[test]
fn sequential_layout_packs_with_natural_alignment() {
	let rt = Runtime::new(RuntimeOptions::default());
	let world = World::new(&rt);
	let ctx = rt.ctx();

	let i1 = ctx.intern_sig(TypeSig::new_by_val(ElementType::I1));
	let holder = world.define_class(
		"Tests",
		"Packed",
		TypeAttributes::PUBLIC | TypeAttributes::SEALED,
		ClassExtra::VALUE_TYPE,
		Some(world.value_type),
	);
	world.set_fields(
		holder,
		&[("a", i1, false), ("b", world.i4_sig(), false), ("c", i1, false)],
	);
	holder.ensure_fields(ctx).unwrap();

	let fields = holder.fields();
	assert_eq!(fields[0].offset(), 0);
	assert_eq!(fields[1].offset(), 4);
	assert_eq!(fields[2].offset(), 8);
	assert_eq!(holder.instance_size(), 12);
	assert_eq!(holder.alignment(), 4);
	assert!(!holder.has_references());

	let with_ref = world.define_ref_class("Tests", "Holder", Some(world.object));
	world.set_fields(with_ref, &[("o", world.object_sig(), false)]);
	with_ref.ensure_fields(ctx).unwrap();
	assert!(with_ref.has_references());
	assert_eq!(with_ref.instance_size(), 8);
}
