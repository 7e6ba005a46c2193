//! Argument marshaling for the public invocation surface: callers hand raw
//! value pointers or boxed object arrays; the shim builds the callee's
//! `StackObject` layout, fixes up boxed receivers, materializes by-ref
//! temporaries and boxes the return value by its reduce type.

use crate::error::{VmError, VmResult};
use crate::interp::machine::StackObject;
use crate::structured::{MethodInfo, ReduceType, TypeSig};
use crate::vm::object::{GcRef, OBJECT_HEADER_SIZE};
use crate::vm::runtime::Runtime;

impl<'l> Runtime<'l> {
	/// Invokes with raw parameter pointers: reference parameters pass the
	/// object pointer itself, everything else points at the value data.
	pub fn invoke(
		&'l self,
		method: &'l MethodInfo<'l>,
		obj: GcRef,
		params: &[*const u8],
	) -> VmResult<GcRef> {
		self.ensure_class_runtime_init(method.parent())?;
		self.invoke_without_cctor(method, obj, params)
	}

	fn invoke_without_cctor(
		&'l self,
		method: &'l MethodInfo<'l>,
		obj: GcRef,
		params: &[*const u8],
	) -> VmResult<GcRef> {
		let ctx = self.ctx();
		let descs = method.arg_descs(ctx)?;
		if params.len() != method.params().len() {
			return Err(VmError::Argument);
		}

		let total = method.total_arg_slots(ctx)? as usize;
		let mut slots = vec![StackObject::default(); total.max(1)];
		let mut cursor = 0usize;

		if method.is_instance() {
			if obj.is_null() {
				return Err(VmError::NullReference);
			}
			// Boxed value-type receivers unbox to an interior pointer.
			let receiver = match method.parent().is_value_type() {
				true => unsafe { obj.raw().add(OBJECT_HEADER_SIZE as usize) },
				false => obj.raw(),
			};
			slots[0].set_ptr(receiver);
			cursor = 1;
		}

		let param_descs = &descs[method.is_instance() as usize..];
		for ((param, desc), sig) in params.iter().zip(param_descs).zip(method.params()) {
			let (size, _) = ctx.value_layout(sig)?;
			unsafe {
				write_param_slots(&mut slots[cursor..], *param, desc.reduce_type, sig, size as usize)?;
			}
			cursor += desc.slot_count as usize;
		}

		let mut ret = vec![StackObject::default(); method.ret_slots(ctx)?.max(1) as usize];
		self.invoke_method(method, slots.as_ptr(), ret.as_mut_ptr())?;
		self.convert_return_value(method.return_sig(), &ret)
	}

	/// Invokes with a boxed-object argument array: value-type parameters are
	/// unboxed into temporaries, by-ref parameters pass the address of the
	/// array element (reference types) or of the boxed payload (value
	/// types), so callee writes surface to the caller.
	pub fn invoke_with_object_array(
		&'l self,
		method: &'l MethodInfo<'l>,
		obj: GcRef,
		params: &mut [GcRef],
	) -> VmResult<GcRef> {
		self.ensure_class_runtime_init(method.parent())?;

		let ctx = self.ctx();
		let descs = method.arg_descs(ctx)?;
		if params.len() != method.params().len() {
			return Err(VmError::Argument);
		}

		let total = method.total_arg_slots(ctx)? as usize;
		let mut slots = vec![StackObject::default(); total.max(1)];
		let mut cursor = 0usize;

		if method.is_instance() {
			if obj.is_null() {
				return Err(VmError::NullReference);
			}
			let receiver = match method.parent().is_value_type() {
				true => unsafe { obj.raw().add(OBJECT_HEADER_SIZE as usize) },
				false => obj.raw(),
			};
			slots[0].set_ptr(receiver);
			cursor = 1;
		}

		let param_descs = &descs[method.is_instance() as usize..];
		for ((element, desc), sig) in params.iter_mut().zip(param_descs).zip(method.params()) {
			if sig.by_ref {
				let referent = ctx.intern_sig(sig.to_canonical_without_byref());
				let is_value = matches!(
					ctx.reduce_type(referent)?,
					ReduceType::Other
						| ReduceType::I1 | ReduceType::U1
						| ReduceType::I2 | ReduceType::U2
						| ReduceType::I4 | ReduceType::I8
						| ReduceType::I | ReduceType::R4 | ReduceType::R8
				);
				let address = match is_value {
					true => {
						if element.is_null() {
							return Err(VmError::NullReference);
						}
						unsafe { element.raw().add(OBJECT_HEADER_SIZE as usize) }
					},
					false => element as *mut GcRef as *mut u8,
				};
				slots[cursor].set_ptr(address);
			} else {
				match ctx.reduce_type(sig)? {
					ReduceType::Ref => slots[cursor].set_ptr(element.raw()),
					_ => {
						if element.is_null() {
							return Err(VmError::NullReference);
						}
						let data = unsafe { element.raw().add(OBJECT_HEADER_SIZE as usize) };
						let (size, _) = ctx.value_layout(sig)?;
						unsafe {
							write_param_slots(
								&mut slots[cursor..],
								data,
								ctx.reduce_type(sig)?,
								sig,
								size as usize,
							)?;
						}
					},
				}
			}
			cursor += desc.slot_count as usize;
		}

		let mut ret = vec![StackObject::default(); method.ret_slots(ctx)?.max(1) as usize];
		self.invoke_method(method, slots.as_ptr(), ret.as_mut_ptr())?;
		self.convert_return_value(method.return_sig(), &ret)
	}

	/// Return values surface boxed: reference results as-is, scalars and
	/// composites wrapped in their corlib class, by-ref results dereferenced
	/// first.
	fn convert_return_value(
		&'l self,
		return_sig: &'l TypeSig<'l>,
		ret: &[StackObject],
	) -> VmResult<GcRef> {
		let ctx = self.ctx();
		if return_sig.is_void() && !return_sig.by_ref {
			return Ok(GcRef::NULL);
		}

		if return_sig.by_ref {
			let referent = ctx.intern_sig(return_sig.to_canonical_without_byref());
			let address = ret[0].ptr();
			if address.is_null() {
				return Err(VmError::NullReference);
			}
			let (size, _) = ctx.value_layout(referent)?;
			return match ctx.reduce_type(referent)? {
				ReduceType::Ref => Ok(GcRef::from_raw(unsafe { *(address as *const *mut u8) })),
				_ => self.box_value(referent, address, size),
			};
		}

		match ctx.reduce_type(return_sig)? {
			ReduceType::Void => Ok(GcRef::NULL),
			ReduceType::Ref => Ok(GcRef::from_raw(ret[0].ptr())),
			_ => {
				let (size, _) = ctx.value_layout(return_sig)?;
				self.box_value(return_sig, ret.as_ptr() as *const u8, size)
			},
		}
	}

	pub(crate) fn box_value(
		&'l self,
		sig: &'l TypeSig<'l>,
		data: *const u8,
		size: u32,
	) -> VmResult<GcRef> {
		let class = self.ctx().class_from_sig(sig)?;
		class.ensure_fields(self.ctx())?;
		let boxed = self.heap().alloc_object(class, class.instance_size() as usize)?;
		unsafe {
			std::ptr::copy_nonoverlapping(data, boxed.data_ptr(), size as usize);
		}
		Ok(boxed)
	}
}

/// Copies one declared parameter into its slot span: scalars widen into the
/// slot, references store the pointer, composites copy their full span.
unsafe fn write_param_slots(
	slots: &mut [StackObject],
	data: *const u8,
	reduce: ReduceType,
	sig: &TypeSig,
	size: usize,
) -> VmResult<()> {
	if sig.by_ref {
		slots[0].set_ptr(data as *mut u8);
		return Ok(());
	}
	match reduce {
		ReduceType::Void => {},
		ReduceType::I1 => slots[0].set_i4(*(data as *const i8) as i32),
		ReduceType::U1 => slots[0].set_i4(*data as i32),
		ReduceType::I2 => slots[0].set_i4(*(data as *const i16) as i32),
		ReduceType::U2 => slots[0].set_i4(*(data as *const u16) as i32),
		ReduceType::I4 => slots[0].set_i4(*(data as *const i32)),
		ReduceType::I8 | ReduceType::I => slots[0].set_i8(*(data as *const i64)),
		ReduceType::R4 => slots[0].set_r4(*(data as *const f32)),
		ReduceType::R8 => slots[0].set_r8(*(data as *const f64)),
		ReduceType::Ref => slots[0].set_ptr(data as *mut u8),
		ReduceType::Other => {
			let bytes = size.min(slots.len() * 8);
			std::ptr::copy_nonoverlapping(data, slots.as_mut_ptr() as *mut u8, bytes);
		},
	}
	Ok(())
}
