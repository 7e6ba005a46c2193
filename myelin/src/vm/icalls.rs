//! The internal-call registry: named C-callable handlers keyed by
//! `"Namespace.Class::Method"` or `"Namespace.Class::Method(ParamTypes)"`.
//! Lookup tries the parameterized form first. Ids are assigned densely in
//! registration order. Only a small corlib surface is seeded here; the full
//! catalog is an external collaborator.

use std::cell::{Cell, RefCell};
use std::fmt::Write;

use fxhash::FxHashMap;

use crate::error::{VmError, VmResult};
use crate::interp::machine::StackObject;
use crate::structured::{Context, ElementType, FieldInfo, MethodInfo, TypeSig, TypeSigData};
use crate::vm::object::GcRef;
use crate::vm::runtime::Runtime;
use crate::vm::shim::InvokeFn;

struct Entry {
	id: u32,
	handler: InvokeFn,
}

/// String-keyed handler table shared by the internal-call, intrinsic and
/// newobj registries.
pub struct Registry {
	map: RefCell<FxHashMap<String, Entry>>,
	next_id: Cell<u32>,
}

impl Registry {
	pub fn new() -> Self {
		Self {
			map: RefCell::new(FxHashMap::default()),
			next_id: Cell::new(0),
		}
	}

	pub fn register(&self, key: &str, handler: InvokeFn) {
		let id = self.next_id.get();
		self.next_id.set(id + 1);
		self.map.borrow_mut().insert(key.to_string(), Entry { id, handler });
	}

	pub fn lookup_key(&self, key: &str) -> Option<InvokeFn> {
		self.map.borrow().get(key).map(|e| e.handler)
	}

	pub fn id_of(&self, key: &str) -> Option<u32> {
		self.map.borrow().get(key).map(|e| e.id)
	}

	/// The parameterized name wins over the parameterless one.
	pub fn lookup<'l>(&self, ctx: &'l Context<'l>, method: &'l MethodInfo<'l>) -> VmResult<Option<InvokeFn>> {
		let with_params = method_key(ctx, method, true)?;
		if let Some(handler) = self.lookup_key(&with_params) {
			return Ok(Some(handler));
		}
		let bare = method_key(ctx, method, false)?;
		Ok(self.lookup_key(&bare))
	}
}

impl Default for Registry {
	fn default() -> Self {
		Self::new()
	}
}

/// `"Namespace.Class::Method"`, optionally with `(ParamTypes)`.
pub fn method_key<'l>(
	ctx: &'l Context<'l>,
	method: &'l MethodInfo<'l>,
	with_params: bool,
) -> VmResult<String> {
	let parent = method.parent();
	let mut key = String::new();
	match parent.namespace() {
		"" => write!(key, "{}", parent.name()),
		namespace => write!(key, "{}.{}", namespace, parent.name()),
	}
	.map_err(|_| VmError::ExecutionEngine)?;
	key.push_str("::");
	key.push_str(method.name());

	if with_params {
		key.push('(');
		for (i, param) in method.params().iter().enumerate() {
			if i > 0 {
				key.push(',');
			}
			key.push_str(&sig_type_name(ctx, param)?);
		}
		key.push(')');
	}
	Ok(key)
}

fn sig_type_name<'l>(ctx: &'l Context<'l>, sig: &'l TypeSig<'l>) -> VmResult<String> {
	let mut name = match (sig.element_type, sig.data) {
		(ElementType::Void, _) => "System.Void".to_string(),
		(ElementType::Boolean, _) => "System.Boolean".to_string(),
		(ElementType::Char, _) => "System.Char".to_string(),
		(ElementType::I1, _) => "System.SByte".to_string(),
		(ElementType::U1, _) => "System.Byte".to_string(),
		(ElementType::I2, _) => "System.Int16".to_string(),
		(ElementType::U2, _) => "System.UInt16".to_string(),
		(ElementType::I4, _) => "System.Int32".to_string(),
		(ElementType::U4, _) => "System.UInt32".to_string(),
		(ElementType::I8, _) => "System.Int64".to_string(),
		(ElementType::U8, _) => "System.UInt64".to_string(),
		(ElementType::R4, _) => "System.Single".to_string(),
		(ElementType::R8, _) => "System.Double".to_string(),
		(ElementType::String, _) => "System.String".to_string(),
		(ElementType::Object, _) => "System.Object".to_string(),
		(ElementType::I, _) => "System.IntPtr".to_string(),
		(ElementType::U, _) => "System.UIntPtr".to_string(),
		(ElementType::SZArray, TypeSigData::Element(element)) => {
			format!("{}[]", sig_type_name(ctx, element)?)
		},
		(ElementType::Ptr, TypeSigData::Element(element)) => {
			format!("{}*", sig_type_name(ctx, element)?)
		},
		_ => {
			let class = ctx.class_from_sig(ctx.intern_sig(sig.to_canonical_without_byref()))?;
			match class.namespace() {
				"" => class.name().to_string(),
				namespace => format!("{}.{}", namespace, class.name()),
			}
		},
	};
	if sig.by_ref {
		name.push('&');
	}
	Ok(name)
}

/// The seeded internal calls.
pub fn seeded_icalls() -> Registry {
	let registry = Registry::new();
	registry.register("System.String::Concat(System.String,System.String)", string_concat2);
	registry.register("System.String::FastAllocateString(System.Int32)", string_fast_allocate);
	registry.register("System.String::Intern(System.String)", string_intern);
	registry.register("System.Object::MemberwiseClone", object_memberwise_clone);
	registry.register("System.Array::get_Length", array_get_length);
	registry.register(
		"System.Runtime.CompilerServices.RuntimeHelpers::InitializeArray(System.Array,System.RuntimeFieldHandle)",
		runtime_helpers_initialize_array,
	);
	registry
}

// ### Handlers

unsafe fn arg(args: *const StackObject, index: usize) -> StackObject {
	*args.add(index)
}

fn string_concat2<'l>(
	rt: &'l Runtime<'l>,
	_method: &'l MethodInfo<'l>,
	args: *const StackObject,
	ret: *mut StackObject,
) -> VmResult<()> {
	let (a, b) = unsafe { (GcRef::from_raw(arg(args, 0).ptr()), GcRef::from_raw(arg(args, 1).ptr())) };
	let mut units = vec![];
	if !a.is_null() {
		units.extend(a.string_code_units());
	}
	if !b.is_null() {
		units.extend(b.string_code_units());
	}
	let result = rt.create_string(&units)?;
	unsafe { (*ret).set_ptr(result.raw()) };
	Ok(())
}

fn string_fast_allocate<'l>(
	rt: &'l Runtime<'l>,
	_method: &'l MethodInfo<'l>,
	args: *const StackObject,
	ret: *mut StackObject,
) -> VmResult<()> {
	let length = unsafe { arg(args, 0) }.i4();
	if length < 0 {
		return Err(VmError::ArgumentOutOfRange);
	}
	let result = rt.create_string(&vec![0u16; length as usize])?;
	unsafe { (*ret).set_ptr(result.raw()) };
	Ok(())
}

fn string_intern<'l>(
	rt: &'l Runtime<'l>,
	_method: &'l MethodInfo<'l>,
	args: *const StackObject,
	ret: *mut StackObject,
) -> VmResult<()> {
	let str = unsafe { GcRef::from_raw(arg(args, 0).ptr()) };
	if str.is_null() {
		return Err(VmError::NullReference);
	}
	let interned = rt.intern_string_value(&str.string_code_units())?;
	unsafe { (*ret).set_ptr(interned.raw()) };
	Ok(())
}

fn object_memberwise_clone<'l>(
	rt: &'l Runtime<'l>,
	_method: &'l MethodInfo<'l>,
	args: *const StackObject,
	ret: *mut StackObject,
) -> VmResult<()> {
	let obj = unsafe { GcRef::from_raw(arg(args, 0).ptr()) };
	if obj.is_null() {
		return Err(VmError::NullReference);
	}
	let class = unsafe { obj.class() };
	class.ensure_fields(rt.ctx())?;
	let size = class.instance_size() as usize;
	let clone = rt.heap().alloc_object(class, size)?;
	unsafe {
		std::ptr::copy_nonoverlapping(obj.data_ptr(), clone.data_ptr(), size);
		(*ret).set_ptr(clone.raw());
	}
	Ok(())
}

fn array_get_length<'l>(
	_rt: &'l Runtime<'l>,
	_method: &'l MethodInfo<'l>,
	args: *const StackObject,
	ret: *mut StackObject,
) -> VmResult<()> {
	let arr = unsafe { GcRef::from_raw(arg(args, 0).ptr()) };
	if arr.is_null() {
		return Err(VmError::NullReference);
	}
	unsafe { (*ret).set_i4(arr.array_length() as i32) };
	Ok(())
}

fn runtime_helpers_initialize_array<'l>(
	rt: &'l Runtime<'l>,
	_method: &'l MethodInfo<'l>,
	args: *const StackObject,
	ret: *mut StackObject,
) -> VmResult<()> {
	let _ = ret;
	let arr = unsafe { GcRef::from_raw(arg(args, 0).ptr()) };
	let handle = unsafe { arg(args, 1) }.ptr();
	if arr.is_null() || handle.is_null() {
		return Err(VmError::ArgumentOutOfRange);
	}
	// The handle slot carries a FieldInfo pointer, as ldtoken pushed it.
	let field = unsafe { &*(handle as *const FieldInfo) };
	let class = unsafe { arr.class() };
	let element = class.element_class().ok_or(VmError::Argument)?;
	element.ensure_fields(rt.ctx())?;
	let total = arr.array_length() * element.instance_size() as usize;

	let size = field.size(rt.ctx())? as usize;
	if size > total {
		return Err(VmError::Argument);
	}
	let data = field
		.parent()
		.module()
		.field_rva_data(field.token().index() as u32, size)?;
	unsafe {
		std::ptr::copy_nonoverlapping(data.as_ptr(), arr.array_data(), size);
	}
	Ok(())
}

// ### Array pseudo-methods

fn array_data_offset(rank: u8) -> usize {
	match rank {
		0 => 0,
		rank => (rank as usize * 4).div_ceil(8) * 8,
	}
}

/// Per-dimension lengths of a multi-dimensional array live between the
/// length word and the element data.
pub fn md_dim_length(arr: GcRef, dim: usize) -> usize {
	unsafe { *(arr.array_data() as *const i32).add(dim) as usize }
}

pub fn alloc_array<'l>(rt: &'l Runtime<'l>, class: &'l crate::structured::Class<'l>, lengths: &[i32]) -> VmResult<GcRef> {
	let element = class.element_class().ok_or(VmError::ExecutionEngine)?;
	element.ensure_fields(rt.ctx())?;
	let element_size = element_byte_size(rt, element)?;

	let mut total = 1usize;
	for len in lengths {
		if *len < 0 {
			return Err(VmError::Overflow);
		}
		total = total.checked_mul(*len as usize).ok_or(VmError::OutOfMemory)?;
	}

	let rank = class.rank();
	let extra = array_data_offset(rank);
	let data_bytes = extra + total.checked_mul(element_size).ok_or(VmError::OutOfMemory)?;
	let arr = rt.heap().alloc_array(class, 1, data_bytes)?;
	unsafe {
		// The length word counts elements; the dimension table (rank > 0)
		// sits between it and the element data.
		*(arr.raw().add(crate::vm::object::ARRAY_LENGTH_OFFSET) as *mut usize) = total;
		if rank > 0 {
			let dims = arr.array_data() as *mut i32;
			for (i, len) in lengths.iter().enumerate() {
				*dims.add(i) = *len;
			}
		}
	}
	Ok(arr)
}

pub fn element_byte_size<'l>(_rt: &'l Runtime<'l>, element: &'l crate::structured::Class<'l>) -> VmResult<usize> {
	match element.is_value_type() {
		true => Ok(element.instance_size() as usize),
		false => Ok(std::mem::size_of::<usize>()),
	}
}

/// Element address for `Get`/`Set`/`Address` on a rank-n array.
fn md_element_ptr<'l>(
	rt: &'l Runtime<'l>,
	arr: GcRef,
	indices: &[i32],
) -> VmResult<(*mut u8, &'l crate::structured::Class<'l>, usize)> {
	if arr.is_null() {
		return Err(VmError::NullReference);
	}
	let class = unsafe { arr.class() };
	let element = class.element_class().ok_or(VmError::ExecutionEngine)?;
	let rank = class.rank().max(1) as usize;
	if indices.len() != rank {
		return Err(VmError::ExecutionEngine);
	}

	let mut linear = 0usize;
	for (dim, index) in indices.iter().enumerate() {
		let len = match class.rank() {
			0 => arr.array_length(),
			_ => md_dim_length(arr, dim),
		};
		if *index < 0 || *index as usize >= len {
			return Err(VmError::IndexOutOfRange);
		}
		linear = linear * len + *index as usize;
	}

	let size = element_byte_size(rt, element)?;
	let base = unsafe { arr.array_data().add(array_data_offset(class.rank())) };
	Ok((unsafe { base.add(linear * size) }, element, size))
}

pub fn array_accessor<'l>(
	rt: &'l Runtime<'l>,
	method: &'l MethodInfo<'l>,
	args: *const StackObject,
	ret: *mut StackObject,
) -> VmResult<()> {
	let class = method.parent();
	let rank = class.rank().max(1) as usize;

	match method.name() {
		".ctor" => {
			let mut lengths = Vec::with_capacity(rank);
			for i in 0..rank {
				lengths.push(unsafe { arg(args, i) }.i4());
			}
			let arr = alloc_array(rt, class, &lengths)?;
			unsafe { (*ret).set_ptr(arr.raw()) };
			Ok(())
		},
		"Get" => {
			let arr = unsafe { GcRef::from_raw(arg(args, 0).ptr()) };
			let indices: Vec<i32> = (0..rank).map(|i| unsafe { arg(args, i + 1) }.i4()).collect();
			let (ptr, element, size) = md_element_ptr(rt, arr, &indices)?;
			unsafe { copy_element_to_slots(ptr, element, size, ret) };
			Ok(())
		},
		"Set" => {
			let arr = unsafe { GcRef::from_raw(arg(args, 0).ptr()) };
			let indices: Vec<i32> = (0..rank).map(|i| unsafe { arg(args, i + 1) }.i4()).collect();
			let (ptr, element, size) = md_element_ptr(rt, arr, &indices)?;
			unsafe { copy_slots_to_element(args.add(1 + rank), element, size, ptr) };
			Ok(())
		},
		"Address" => {
			let arr = unsafe { GcRef::from_raw(arg(args, 0).ptr()) };
			let indices: Vec<i32> = (0..rank).map(|i| unsafe { arg(args, i + 1) }.i4()).collect();
			let (ptr, _, _) = md_element_ptr(rt, arr, &indices)?;
			unsafe { (*ret).set_ptr(ptr) };
			Ok(())
		},
		_ => Err(VmError::NotImplemented),
	}
}

unsafe fn copy_element_to_slots(
	ptr: *const u8,
	element: &crate::structured::Class,
	size: usize,
	ret: *mut StackObject,
) {
	match (element.is_value_type(), size) {
		(false, _) => (*ret).set_ptr(*(ptr as *const *mut u8)),
		(true, 1) => (*ret).set_i4(*(ptr as *const i8) as i32),
		(true, 2) => (*ret).set_i4(*(ptr as *const i16) as i32),
		(true, 4) => (*ret).set_i4(*(ptr as *const i32)),
		(true, 8) => (*ret).set_i8(*(ptr as *const i64)),
		(true, _) => std::ptr::copy_nonoverlapping(ptr, ret as *mut u8, size),
	}
}

unsafe fn copy_slots_to_element(
	src: *const StackObject,
	element: &crate::structured::Class,
	size: usize,
	ptr: *mut u8,
) {
	match (element.is_value_type(), size) {
		(false, _) => *(ptr as *mut *mut u8) = (*src).ptr(),
		(true, 1) => *(ptr as *mut i8) = (*src).i4() as i8,
		(true, 2) => *(ptr as *mut i16) = (*src).i4() as i16,
		(true, 4) => *(ptr as *mut i32) = (*src).i4(),
		(true, 8) => *(ptr as *mut i64) = (*src).i8(),
		(true, _) => std::ptr::copy_nonoverlapping(src as *const u8, ptr, size),
	}
}
