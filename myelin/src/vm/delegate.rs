//! Runtime-implemented delegate methods. A delegate instance stores its
//! target object and the stable method pointer (`ldftn` pushes `MethodInfo`
//! addresses, so the pointer identity is the method itself).

use crate::error::{VmError, VmResult};
use crate::interp::machine::StackObject;
use crate::structured::MethodInfo;
use crate::vm::object::GcRef;
use crate::vm::runtime::Runtime;

const TARGET_OFFSET: usize = 0;
const METHOD_OFFSET: usize = 8;

/// Bytes of user data a delegate instance carries.
pub const DELEGATE_DATA_SIZE: usize = 16;

unsafe fn delegate_target(obj: GcRef) -> GcRef {
	GcRef::from_raw(*(obj.data_ptr().add(TARGET_OFFSET) as *const *mut u8))
}

unsafe fn delegate_method<'l>(obj: GcRef) -> Option<&'l MethodInfo<'l>> {
	let ptr = *(obj.data_ptr().add(METHOD_OFFSET) as *const *const MethodInfo);
	match ptr.is_null() {
		true => None,
		false => Some(&*ptr),
	}
}

/// `.ctor(object target, native int method)`.
pub fn ctor_invoker<'l>(
	_rt: &'l Runtime<'l>,
	_method: &'l MethodInfo<'l>,
	args: *const StackObject,
	_ret: *mut StackObject,
) -> VmResult<()> {
	unsafe {
		let this = GcRef::from_raw((*args).ptr());
		if this.is_null() {
			return Err(VmError::NullReference);
		}
		let target = (*args.add(1)).ptr();
		let method_ptr = (*args.add(2)).ptr();
		*(this.data_ptr().add(TARGET_OFFSET) as *mut *mut u8) = target;
		*(this.data_ptr().add(METHOD_OFFSET) as *mut *mut u8) = method_ptr;
	}
	Ok(())
}

/// `Invoke(...)`: forwards to the bound method, prepending the stored target
/// for instance bindings.
pub fn invoke_invoker<'l>(
	rt: &'l Runtime<'l>,
	method: &'l MethodInfo<'l>,
	args: *const StackObject,
	ret: *mut StackObject,
) -> VmResult<()> {
	let this = unsafe { GcRef::from_raw((*args).ptr()) };
	if this.is_null() {
		return Err(VmError::NullReference);
	}
	let target = unsafe { delegate_target(this) };
	let bound = unsafe { delegate_method(this) }.ok_or(VmError::NullReference)?;

	let declared_slots = method.total_arg_slots(rt.ctx())? as usize;
	let bound_slots = bound.total_arg_slots(rt.ctx())? as usize;

	let mut forwarded = vec![StackObject::default(); bound_slots.max(1)];
	unsafe {
		match bound.is_instance() {
			true => {
				forwarded[0].set_ptr(target.raw());
				std::ptr::copy_nonoverlapping(args.add(1), forwarded.as_mut_ptr().add(1), declared_slots - 1);
			},
			false => {
				std::ptr::copy_nonoverlapping(args.add(1), forwarded.as_mut_ptr(), declared_slots - 1);
			},
		}
	}
	rt.invoke_method(bound, forwarded.as_ptr(), ret)
}

pub fn begin_invoke_invoker<'l>(
	_rt: &'l Runtime<'l>,
	_method: &'l MethodInfo<'l>,
	_args: *const StackObject,
	_ret: *mut StackObject,
) -> VmResult<()> {
	Err(VmError::NotImplemented)
}

pub fn end_invoke_invoker<'l>(
	_rt: &'l Runtime<'l>,
	_method: &'l MethodInfo<'l>,
	_args: *const StackObject,
	_ret: *mut StackObject,
) -> VmResult<()> {
	Err(VmError::NotImplemented)
}
