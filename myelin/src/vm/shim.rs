//! The invocation shim: picks, per method, the invoker that executes it and
//! the virtual entry that fixes up `this` for boxed value-type receivers.

use crate::error::{VmError, VmResult};
use crate::interp::machine::StackObject;
use crate::raw::heaps::table::MethodImplAttributes;
use crate::structured::{MethodInfo, WellKnown};
use crate::vm::object::OBJECT_HEADER_SIZE;
use crate::vm::runtime::Runtime;
use crate::vm::{delegate, icalls};

/// The uniform invoker ABI: every method executes through a function of this
/// shape, regardless of how it is implemented.
pub type InvokeFn = for<'l> fn(
	&'l Runtime<'l>,
	&'l MethodInfo<'l>,
	*const StackObject,
	*mut StackObject,
) -> VmResult<()>;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum InvokerKind {
	NotImplemented,
	InternalCall,
	Intrinsic,
	CustomIntrinsic,
	PInvoke,
	Interpreter,
	RuntimeImpl,
}

#[derive(Copy, Clone)]
pub struct Invoker {
	pub kind: InvokerKind,
	pub invoke: InvokeFn,
	/// The virtual entry: identical to `invoke` except for interpreted
	/// methods on value types, where it unboxes the receiver first.
	pub virtual_invoke: InvokeFn,
}

impl std::fmt::Debug for Invoker {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "Invoker({:?})", self.kind)
	}
}

/// Decides the invoker for a method; first match wins.
pub fn get_invoker<'l>(rt: &'l Runtime<'l>, method: &'l MethodInfo<'l>) -> VmResult<Invoker> {
	let parent = method.parent();

	if parent.is_array() && matches!(method.name(), ".ctor" | "Get" | "Set" | "Address") {
		return Ok(wrap(rt, method, InvokerKind::CustomIntrinsic, array_accessor_invoker));
	}

	match method.code_type() {
		MethodImplAttributes::IL => {
			if method.is_ctor() {
				// Registered constructors allocate for themselves and are
				// dispatched through the intrinsic newobj form.
				if let Some(handler) = rt.newobj_icalls().lookup(rt.ctx(), method)? {
					return Ok(wrap(rt, method, InvokerKind::Intrinsic, handler));
				}
			}
			if let Some(handler) = rt.icalls().lookup(rt.ctx(), method)? {
				return Ok(wrap(rt, method, InvokerKind::InternalCall, handler));
			}
			if let Some(handler) = rt.intrinsics().lookup(rt.ctx(), method)? {
				return Ok(wrap(rt, method, InvokerKind::Intrinsic, handler));
			}
			if method.is_internal_call() {
				return Ok(wrap(rt, method, InvokerKind::InternalCall, not_implemented_invoker));
			}
			if method.is_pinvoke() {
				let handler = crate::vm::pinvoke::resolve(rt, method)?;
				return Ok(wrap(rt, method, InvokerKind::PInvoke, handler));
			}
			Ok(wrap(rt, method, InvokerKind::Interpreter, crate::interp::exec::interpreter_invoker))
		},
		MethodImplAttributes::RUNTIME => {
			if is_delegate_subclass(rt, method)? {
				let handler: InvokeFn = match method.name() {
					".ctor" => delegate::ctor_invoker,
					"Invoke" => delegate::invoke_invoker,
					"BeginInvoke" => delegate::begin_invoke_invoker,
					"EndInvoke" => delegate::end_invoke_invoker,
					_ => not_implemented_invoker,
				};
				return Ok(wrap(rt, method, InvokerKind::RuntimeImpl, handler));
			}
			Ok(wrap(rt, method, InvokerKind::RuntimeImpl, not_implemented_invoker))
		},
		_ => Ok(wrap(rt, method, InvokerKind::NotImplemented, not_implemented_invoker)),
	}
}

fn wrap<'l>(
	rt: &'l Runtime<'l>,
	method: &'l MethodInfo<'l>,
	kind: InvokerKind,
	invoke: InvokeFn,
) -> Invoker {
	let _ = rt;
	let virtual_invoke: InvokeFn = match kind {
		InvokerKind::Interpreter if method.parent().is_value_type() => virtual_adjust_invoker,
		_ => invoke,
	};
	Invoker {
		kind,
		invoke,
		virtual_invoke,
	}
}

fn is_delegate_subclass<'l>(rt: &'l Runtime<'l>, method: &'l MethodInfo<'l>) -> VmResult<bool> {
	let Ok(delegate_class) = rt.ctx().well_known_class(WellKnown::MulticastDelegate) else {
		return Ok(false);
	};
	let parent = method.parent();
	parent.ensure_super_types(rt.ctx())?;
	Ok(parent.is_subclass_of(delegate_class) || std::ptr::eq(parent, delegate_class))
}

/// The stub every unresolvable target gets.
pub fn not_implemented_invoker<'l>(
	_rt: &'l Runtime<'l>,
	_method: &'l MethodInfo<'l>,
	_args: *const StackObject,
	_ret: *mut StackObject,
) -> VmResult<()> {
	Err(VmError::NotImplemented)
}

/// Virtual entry for interpreted value-type methods: the caller hands a
/// boxed receiver, the body expects an interior pointer past the header.
pub fn virtual_adjust_invoker<'l>(
	rt: &'l Runtime<'l>,
	method: &'l MethodInfo<'l>,
	args: *const StackObject,
	ret: *mut StackObject,
) -> VmResult<()> {
	let total = method.total_arg_slots(rt.ctx())? as usize;
	let mut adjusted = vec![StackObject::default(); total.max(1)];
	unsafe {
		std::ptr::copy_nonoverlapping(args, adjusted.as_mut_ptr(), total);
		let receiver = adjusted[0].ptr();
		if receiver.is_null() {
			return Err(VmError::NullReference);
		}
		adjusted[0].set_ptr(receiver.add(OBJECT_HEADER_SIZE as usize));
	}
	crate::interp::exec::interpreter_invoker(rt, method, adjusted.as_ptr(), ret)
}

/// Array pseudo-method thunk: `.ctor`, `Get`, `Set` and `Address` on array
/// classes dispatch here instead of through a body.
pub fn array_accessor_invoker<'l>(
	rt: &'l Runtime<'l>,
	method: &'l MethodInfo<'l>,
	args: *const StackObject,
	ret: *mut StackObject,
) -> VmResult<()> {
	icalls::array_accessor(rt, method, args, ret)
}
