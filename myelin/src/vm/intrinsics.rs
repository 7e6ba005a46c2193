//! The intrinsic registry: same shape and key scheme as the internal-call
//! registry, but for methods the runtime reimplements for speed rather than
//! necessity. Seeded with the string accessors the original ships.

use crate::error::{VmError, VmResult};
use crate::interp::machine::StackObject;
use crate::structured::MethodInfo;
use crate::vm::icalls::Registry;
use crate::vm::object::GcRef;
use crate::vm::runtime::Runtime;

pub fn seeded_intrinsics() -> Registry {
	let registry = Registry::new();
	registry.register("System.String::get_Length", string_get_length);
	registry.register("System.String::get_Chars(System.Int32)", string_get_chars);
	registry.register("System.String::IsNullOrEmpty(System.String)", string_is_null_or_empty);
	registry
}

fn string_get_length<'l>(
	_rt: &'l Runtime<'l>,
	_method: &'l MethodInfo<'l>,
	args: *const StackObject,
	ret: *mut StackObject,
) -> VmResult<()> {
	let str = unsafe { GcRef::from_raw((*args).ptr()) };
	if str.is_null() {
		return Err(VmError::NullReference);
	}
	unsafe { (*ret).set_i4(str.string_length() as i32) };
	Ok(())
}

fn string_get_chars<'l>(
	_rt: &'l Runtime<'l>,
	_method: &'l MethodInfo<'l>,
	args: *const StackObject,
	ret: *mut StackObject,
) -> VmResult<()> {
	let str = unsafe { GcRef::from_raw((*args).ptr()) };
	if str.is_null() {
		return Err(VmError::NullReference);
	}
	let index = unsafe { *args.add(1) }.i4();
	if index < 0 || index as usize >= str.string_length() {
		return Err(VmError::IndexOutOfRange);
	}
	let unit = unsafe { *str.string_chars().add(index as usize) };
	unsafe { (*ret).set_i4(unit as i32) };
	Ok(())
}

fn string_is_null_or_empty<'l>(
	_rt: &'l Runtime<'l>,
	_method: &'l MethodInfo<'l>,
	args: *const StackObject,
	ret: *mut StackObject,
) -> VmResult<()> {
	let str = unsafe { GcRef::from_raw((*args).ptr()) };
	let empty = str.is_null() || str.string_length() == 0;
	unsafe { (*ret).set_i4(empty as i32) };
	Ok(())
}
