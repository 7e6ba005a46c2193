//! The dispatch loop: decodes the lowered byte stream and executes it over
//! frame-relative eight-byte slots. Managed exceptions are data-driven: a
//! fault walks the clause table, running finally and fault handlers on the
//! way out; `leave` drives pending-leave records through nested finallies.

use crate::error::{VmError, VmResult};
use crate::interp::llops::{self as ll, OpCode};
use crate::interp::machine::StackObject;
use crate::interp::{InterpMethodInfo, ResolvedData, RuntimeHandle};
use crate::raw::body::ExceptionClauseKind;
use crate::structured::{Class, MethodInfo};
use crate::vm::icalls;
use crate::vm::object::GcRef;
use crate::vm::runtime::Runtime;

/// Why a `run` invocation stopped.
enum Flow {
	Returned,
	FinallyDone,
	FilterResult(i32),
}

#[derive(Debug)]
struct LeaveRecord {
	target: u32,
	first: usize,
	count: usize,
	next: usize,
}

#[derive(Copy, Clone)]
enum Mode {
	Normal,
	Finally,
	Filter,
}

/// The interpreter entry in invoker ABI shape.
pub fn interpreter_invoker<'l>(
	rt: &'l Runtime<'l>,
	method: &'l MethodInfo<'l>,
	args: *const StackObject,
	ret: *mut StackObject,
) -> VmResult<()> {
	rt.machine().safepoint()?;
	let interp = rt.ensure_interp_body(method)?;

	let base = rt.machine().alloc_frame(interp.frame_slots as usize)?;
	let localloc_mark = rt.machine().localloc_mark();

	// The caller's argument area copies into the frame prefix.
	unsafe {
		for i in 0..interp.arg_slots as usize {
			rt.machine().write_slot(base + i, *args.add(i));
		}
	}

	let result = run(rt, interp, base, ret, 0, Mode::Normal);

	rt.machine().localloc_release(localloc_mark);
	rt.machine().free_frame(base);
	result.map(|_| ())
}

/// Catch/finally walk for a fault at `pc`; returns the handler to resume at
/// or re-propagates after running the unwind handlers.
fn dispatch_exception<'l>(
	rt: &'l Runtime<'l>,
	interp: &'l InterpMethodInfo<'l>,
	base: usize,
	pc: u32,
	exception: GcRef,
	kind: VmError,
) -> VmResult<u32> {
	let ctx = rt.ctx();
	for clause in interp.clauses {
		if !clause.is_in_try_block(pc) {
			continue;
		}
		match clause.kind {
			ExceptionClauseKind::Finally | ExceptionClauseKind::Fault => {
				// Unwind handlers run in order on the way to the catch.
				let mut unused = StackObject::default();
				run(rt, interp, base, &mut unused, clause.handler_offset, Mode::Finally)?;
			},
			ExceptionClauseKind::Exception => {
				let Some(catch_class) = clause.catch_class else {
					continue;
				};
				if exception.is_null() {
					continue;
				}
				let exception_class = unsafe { exception.class::<'l>() };
				if catch_class.is_assignable_from(ctx, exception_class)? {
					rt.machine()
						.write_slot(base + clause.ex_slot as usize, ptr_slot(exception.raw()));
					return Ok(clause.handler_offset);
				}
			},
			ExceptionClauseKind::Filter => {
				rt.machine()
					.write_slot(base + clause.ex_slot as usize, ptr_slot(exception.raw()));
				let mut unused = StackObject::default();
				let flow = run(rt, interp, base, &mut unused, clause.filter_offset, Mode::Filter)?;
				if let Flow::FilterResult(cond) = flow {
					if cond != 0 {
						rt.machine()
							.write_slot(base + clause.ex_slot as usize, ptr_slot(exception.raw()));
						return Ok(clause.handler_offset);
					}
				}
			},
		}
	}
	rt.set_pending_exception(exception);
	Err(kind)
}

fn ptr_slot(ptr: *mut u8) -> StackObject {
	let mut slot = StackObject::default();
	slot.set_ptr(ptr);
	slot
}

#[allow(clippy::too_many_lines)]
fn run<'l>(
	rt: &'l Runtime<'l>,
	interp: &'l InterpMethodInfo<'l>,
	base: usize,
	ret: *mut StackObject,
	start_pc: u32,
	mode: Mode,
) -> VmResult<Flow> {
	let machine = rt.machine();
	let code = interp.code;
	let mut pc = start_pc as usize;
	let mut leave_stack: Vec<LeaveRecord> = vec![];
	let mut current_exception = GcRef::NULL;

	macro_rules! slot {
		($i: expr) => {
			machine.read_slot(base + $i as usize)
		};
	}
	macro_rules! put {
		($i: expr, $v: expr) => {
			machine.write_slot(base + $i as usize, $v)
		};
	}
	macro_rules! put_i4 {
		($i: expr, $v: expr) => {{
			let mut s = StackObject::default();
			s.set_i4($v);
			put!($i, s);
		}};
	}
	macro_rules! put_i8 {
		($i: expr, $v: expr) => {{
			let mut s = StackObject::default();
			s.set_i8($v);
			put!($i, s);
		}};
	}
	macro_rules! put_r4 {
		($i: expr, $v: expr) => {{
			let mut s = StackObject::default();
			s.set_r4($v);
			put!($i, s);
		}};
	}
	macro_rules! put_r8 {
		($i: expr, $v: expr) => {{
			let mut s = StackObject::default();
			s.set_r8($v);
			put!($i, s);
		}};
	}
	macro_rules! put_ptr {
		($i: expr, $v: expr) => {
			put!($i, ptr_slot($v))
		};
	}

	'dispatch: loop {
		let fault: VmError;
		// Faulting paths land here with `fault` set; everything else loops.
		'fault: {
			macro_rules! vm_try {
				($e: expr) => {
					match $e {
						Ok(value) => value,
						Err(kind) => {
							fault = kind;
							break 'fault;
						},
					}
				};
			}
			macro_rules! throw {
				($kind: expr) => {{
					fault = $kind;
					break 'fault;
				}};
			}
			macro_rules! nonnull {
				($ptr: expr) => {{
					let ptr = $ptr;
					if ptr.is_null() {
						throw!(VmError::NullReference);
					}
					ptr
				}};
			}

			loop {
				let Some((op, _)) = OpCode::from_bytes(code, pc) else {
					throw!(VmError::ExecutionEngine);
				};
				let mut next = pc + op.size();
				let short = op.is_short();

				macro_rules! decode {
					($family: ident) => {
						ll::$family::decode(code, pc, short)
					};
				}
				macro_rules! branch_to {
					($disp: expr) => {{
						let disp = $disp as i64;
						if disp <= 0 {
							vm_try!(machine.safepoint());
						}
						next = (pc as i64 + disp) as usize;
					}};
				}
				macro_rules! bin_i4 {
					($family: ident, $f: expr) => {{
						let i = decode!($family);
						let f: fn(i32, i32) -> i32 = $f;
						put_i4!(i.dst, f(slot!(i.lhs).i4(), slot!(i.rhs).i4()));
					}};
				}
				macro_rules! bin_i8 {
					($family: ident, $f: expr) => {{
						let i = decode!($family);
						let f: fn(i64, i64) -> i64 = $f;
						put_i8!(i.dst, f(slot!(i.lhs).i8(), slot!(i.rhs).i8()));
					}};
				}
				macro_rules! bin_r4 {
					($family: ident, $f: expr) => {{
						let i = decode!($family);
						let f: fn(f32, f32) -> f32 = $f;
						put_r4!(i.dst, f(slot!(i.lhs).r4(), slot!(i.rhs).r4()));
					}};
				}
				macro_rules! bin_r8 {
					($family: ident, $f: expr) => {{
						let i = decode!($family);
						let f: fn(f64, f64) -> f64 = $f;
						put_r8!(i.dst, f(slot!(i.lhs).r8(), slot!(i.rhs).r8()));
					}};
				}
				macro_rules! cmp {
					($family: ident, $read: ident, $f: expr) => {{
						let i = decode!($family);
						let f = $f;
						put_i4!(i.dst, f(slot!(i.lhs).$read(), slot!(i.rhs).$read()) as i32);
					}};
				}
				macro_rules! branch_cmp {
					($family: ident, $read: ident, $f: expr) => {{
						let i = decode!($family);
						let f = $f;
						if f(slot!(i.lhs).$read(), slot!(i.rhs).$read()) {
							branch_to!(i.target);
						}
					}};
				}
				macro_rules! conv {
					($family: ident, $read: ident, $put: ident, $f: expr) => {{
						let i = decode!($family);
						let f = $f;
						$put!(i.dst, f(slot!(i.src).$read()));
					}};
				}
				macro_rules! conv_checked {
					($family: ident, $read: ident, $put: ident, $f: expr) => {{
						let i = decode!($family);
						let f = $f;
						match f(slot!(i.src).$read()) {
							Some(value) => $put!(i.dst, value),
							None => throw!(VmError::Overflow),
						}
					}};
				}
				macro_rules! ovf_bin {
					($family: ident, $read: ident, $put: ident, $f: ident) => {{
						let i = decode!($family);
						match slot!(i.lhs).$read().$f(slot!(i.rhs).$read()) {
							Some(value) => $put!(i.dst, value),
							None => throw!(VmError::Overflow),
						}
					}};
				}
				macro_rules! call_args {
					($frame_base: expr) => {
						machine.slot_ptr(base + $frame_base as usize)
					};
				}
				macro_rules! resolved_method {
					($idx: expr) => {
						match interp.resolved[$idx as usize] {
							ResolvedData::Method(method) => method,
							_ => throw!(VmError::ExecutionEngine),
						}
					};
				}
				macro_rules! resolved_class {
					($idx: expr) => {
						match interp.resolved[$idx as usize] {
							ResolvedData::Class(class) => class,
							_ => throw!(VmError::ExecutionEngine),
						}
					};
				}

				match op {
					// ### Frame prologue / locals
					OpCode::InitLocals1Short => {
						let i = decode!(InitLocals1);
						put!(i.offset, StackObject::default());
					},
					OpCode::InitLocals2Short => {
						let i = decode!(InitLocals2);
						put!(i.offset, StackObject::default());
						put!(i.offset + 1, StackObject::default());
					},
					OpCode::InitLocals3Short => {
						let i = decode!(InitLocals3);
						for k in 0..3u16 {
							put!(i.offset + k, StackObject::default());
						}
					},
					OpCode::InitLocals4Short => {
						let i = decode!(InitLocals4);
						for k in 0..4u16 {
							put!(i.offset + k, StackObject::default());
						}
					},
					OpCode::InitLocals | OpCode::InitLocalsShort => {
						let i = decode!(InitLocals);
						for k in 0..i.size {
							put!(i.offset + k, StackObject::default());
						}
					},

					OpCode::LdLocI1 | OpCode::LdLocI1Short => {
						let i = decode!(LdLocI1);
						put_i4!(i.dst, slot!(i.src).i4() as i8 as i32);
					},
					OpCode::LdLocU1 | OpCode::LdLocU1Short => {
						let i = decode!(LdLocU1);
						put_i4!(i.dst, slot!(i.src).i4() as u8 as i32);
					},
					OpCode::LdLocI2 | OpCode::LdLocI2Short => {
						let i = decode!(LdLocI2);
						put_i4!(i.dst, slot!(i.src).i4() as i16 as i32);
					},
					OpCode::LdLocU2 | OpCode::LdLocU2Short => {
						let i = decode!(LdLocU2);
						put_i4!(i.dst, slot!(i.src).i4() as u16 as i32);
					},
					OpCode::LdLocI4 | OpCode::LdLocI4Short => {
						let i = decode!(LdLocI4);
						put_i4!(i.dst, slot!(i.src).i4());
					},
					OpCode::LdLocI8 | OpCode::LdLocI8Short => {
						let i = decode!(LdLocI8);
						put!(i.dst, slot!(i.src));
					},
					OpCode::LdLocAny | OpCode::LdLocAnyShort => {
						let i = decode!(LdLocAny);
						for k in 0..i.size {
							put!(i.dst + k, slot!(i.src + k));
						}
					},
					OpCode::LdLoca | OpCode::LdLocaShort => {
						let i = decode!(LdLoca);
						put_ptr!(i.dst, machine.slot_ptr(base + i.src as usize) as *mut u8);
					},
					OpCode::StLocI1 | OpCode::StLocI1Short => {
						let i = decode!(StLocI1);
						put_i4!(i.dst, slot!(i.src).i4() as i8 as i32);
					},
					OpCode::StLocI2 | OpCode::StLocI2Short => {
						let i = decode!(StLocI2);
						put_i4!(i.dst, slot!(i.src).i4() as i16 as i32);
					},
					OpCode::StLocI4 | OpCode::StLocI4Short => {
						let i = decode!(StLocI4);
						put_i4!(i.dst, slot!(i.src).i4());
					},
					OpCode::StLocI8 | OpCode::StLocI8Short => {
						let i = decode!(StLocI8);
						put!(i.dst, slot!(i.src));
					},
					OpCode::StLocAny | OpCode::StLocAnyShort => {
						let i = decode!(StLocAny);
						for k in 0..i.size {
							put!(i.dst + k, slot!(i.src + k));
						}
					},

					// ### Constants
					OpCode::LdNull | OpCode::LdNullShort => {
						let i = decode!(LdNull);
						put!(i.dst, StackObject::default());
					},
					OpCode::LdcI4I2 | OpCode::LdcI4I2Short => {
						let i = decode!(LdcI4I2);
						put_i4!(i.dst, i.value as i32);
					},
					OpCode::LdcI4I4 | OpCode::LdcI4I4Short => {
						let i = decode!(LdcI4I4);
						put_i4!(i.dst, i.value);
					},
					OpCode::LdcI8I2 | OpCode::LdcI8I2Short => {
						let i = decode!(LdcI8I2);
						put_i8!(i.dst, i.value as i64);
					},
					OpCode::LdcI8I4 | OpCode::LdcI8I4Short => {
						let i = decode!(LdcI8I4);
						put_i8!(i.dst, i.value as i64);
					},
					OpCode::LdcI8I8 | OpCode::LdcI8I8Short => {
						let i = decode!(LdcI8I8);
						let value = (i.value_low as u32 as u64) | ((i.value_high as u32 as u64) << 32);
						put_i8!(i.dst, value as i64);
					},
					OpCode::LdStr | OpCode::LdStrShort => {
						let i = decode!(LdStr);
						match interp.resolved[i.str_idx as usize] {
							ResolvedData::Str(handle) => put_ptr!(i.dst, handle.raw()),
							_ => throw!(VmError::ExecutionEngine),
						}
					},
					OpCode::LdToken | OpCode::LdTokenShort => {
						let i = decode!(LdToken);
						match interp.resolved[i.handle_idx as usize] {
							ResolvedData::Handle(RuntimeHandle::Type(sig)) => {
								put_ptr!(i.dst, sig as *const _ as *mut u8)
							},
							ResolvedData::Handle(RuntimeHandle::Field(field)) => {
								put_ptr!(i.dst, field as *const _ as *mut u8)
							},
							ResolvedData::Handle(RuntimeHandle::Method(method)) => {
								put_ptr!(i.dst, method as *const _ as *mut u8)
							},
							_ => throw!(VmError::ExecutionEngine),
						}
					},

					// ### Branches
					OpCode::Br | OpCode::BrShort => {
						let i = decode!(Br);
						branch_to!(i.target);
					},
					OpCode::BrTrueI4 | OpCode::BrTrueI4Short => {
						let i = decode!(BrTrueI4);
						if slot!(i.cond).i4() != 0 {
							branch_to!(i.target);
						}
					},
					OpCode::BrTrueI8 | OpCode::BrTrueI8Short => {
						let i = decode!(BrTrueI8);
						if slot!(i.cond).i8() != 0 {
							branch_to!(i.target);
						}
					},
					OpCode::BrFalseI4 | OpCode::BrFalseI4Short => {
						let i = decode!(BrFalseI4);
						if slot!(i.cond).i4() == 0 {
							branch_to!(i.target);
						}
					},
					OpCode::BrFalseI8 | OpCode::BrFalseI8Short => {
						let i = decode!(BrFalseI8);
						if slot!(i.cond).i8() == 0 {
							branch_to!(i.target);
						}
					},
					OpCode::BeqI4 | OpCode::BeqI4Short => branch_cmp!(BeqI4, i4, |a, b| a == b),
					OpCode::BeqI8 | OpCode::BeqI8Short => branch_cmp!(BeqI8, i8, |a, b| a == b),
					OpCode::BeqR4 => branch_cmp!(BeqR4, r4, |a: f32, b: f32| a == b),
					OpCode::BeqR8 => branch_cmp!(BeqR8, r8, |a: f64, b: f64| a == b),
					OpCode::BgeI4 | OpCode::BgeI4Short => branch_cmp!(BgeI4, i4, |a, b| a >= b),
					OpCode::BgeI8 | OpCode::BgeI8Short => branch_cmp!(BgeI8, i8, |a, b| a >= b),
					OpCode::BgeR4 => branch_cmp!(BgeR4, r4, |a: f32, b: f32| a >= b),
					OpCode::BgeR8 => branch_cmp!(BgeR8, r8, |a: f64, b: f64| a >= b),
					OpCode::BgtI4 | OpCode::BgtI4Short => branch_cmp!(BgtI4, i4, |a, b| a > b),
					OpCode::BgtI8 | OpCode::BgtI8Short => branch_cmp!(BgtI8, i8, |a, b| a > b),
					OpCode::BgtR4 => branch_cmp!(BgtR4, r4, |a: f32, b: f32| a > b),
					OpCode::BgtR8 => branch_cmp!(BgtR8, r8, |a: f64, b: f64| a > b),
					OpCode::BleI4 | OpCode::BleI4Short => branch_cmp!(BleI4, i4, |a, b| a <= b),
					OpCode::BleI8 | OpCode::BleI8Short => branch_cmp!(BleI8, i8, |a, b| a <= b),
					OpCode::BleR4 => branch_cmp!(BleR4, r4, |a: f32, b: f32| a <= b),
					OpCode::BleR8 => branch_cmp!(BleR8, r8, |a: f64, b: f64| a <= b),
					OpCode::BltI4 | OpCode::BltI4Short => branch_cmp!(BltI4, i4, |a, b| a < b),
					OpCode::BltI8 | OpCode::BltI8Short => branch_cmp!(BltI8, i8, |a, b| a < b),
					OpCode::BltR4 => branch_cmp!(BltR4, r4, |a: f32, b: f32| a < b),
					OpCode::BltR8 => branch_cmp!(BltR8, r8, |a: f64, b: f64| a < b),
					OpCode::BneUnI4 | OpCode::BneUnI4Short => branch_cmp!(BneUnI4, i4, |a, b| a != b),
					OpCode::BneUnI8 | OpCode::BneUnI8Short => branch_cmp!(BneUnI8, i8, |a, b| a != b),
					OpCode::BneUnR4 => branch_cmp!(BneUnR4, r4, |a: f32, b: f32| a != b),
					OpCode::BneUnR8 => branch_cmp!(BneUnR8, r8, |a: f64, b: f64| a != b),
					OpCode::BgeUnI4 | OpCode::BgeUnI4Short => {
						branch_cmp!(BgeUnI4, i4, |a, b| (a as u32) >= (b as u32))
					},
					OpCode::BgeUnI8 | OpCode::BgeUnI8Short => {
						branch_cmp!(BgeUnI8, i8, |a, b| (a as u64) >= (b as u64))
					},
					OpCode::BgeUnR4 => branch_cmp!(BgeUnR4, r4, |a: f32, b: f32| a >= b),
					OpCode::BgeUnR8 => branch_cmp!(BgeUnR8, r8, |a: f64, b: f64| a >= b),
					OpCode::BgtUnI4 | OpCode::BgtUnI4Short => {
						branch_cmp!(BgtUnI4, i4, |a, b| (a as u32) > (b as u32))
					},
					OpCode::BgtUnI8 | OpCode::BgtUnI8Short => {
						branch_cmp!(BgtUnI8, i8, |a, b| (a as u64) > (b as u64))
					},
					OpCode::BgtUnR4 => branch_cmp!(BgtUnR4, r4, |a: f32, b: f32| a > b),
					OpCode::BgtUnR8 => branch_cmp!(BgtUnR8, r8, |a: f64, b: f64| a > b),
					OpCode::BleUnI4 | OpCode::BleUnI4Short => {
						branch_cmp!(BleUnI4, i4, |a, b| (a as u32) <= (b as u32))
					},
					OpCode::BleUnI8 | OpCode::BleUnI8Short => {
						branch_cmp!(BleUnI8, i8, |a, b| (a as u64) <= (b as u64))
					},
					OpCode::BleUnR4 => branch_cmp!(BleUnR4, r4, |a: f32, b: f32| a <= b),
					OpCode::BleUnR8 => branch_cmp!(BleUnR8, r8, |a: f64, b: f64| a <= b),
					OpCode::BltUnI4 | OpCode::BltUnI4Short => {
						branch_cmp!(BltUnI4, i4, |a, b| (a as u32) < (b as u32))
					},
					OpCode::BltUnI8 | OpCode::BltUnI8Short => {
						branch_cmp!(BltUnI8, i8, |a, b| (a as u64) < (b as u64))
					},
					OpCode::BltUnR4 => branch_cmp!(BltUnR4, r4, |a: f32, b: f32| a < b),
					OpCode::BltUnR8 => branch_cmp!(BltUnR8, r8, |a: f64, b: f64| a < b),
					OpCode::Switch => {
						let i = decode!(Switch);
						let table = pc + ll::Switch::WIDE_SIZE;
						next = pc + ll::Switch::WIDE_SIZE + i.num_targets as usize * 4;
						let index = slot!(i.index).i4();
						if index >= 0 && (index as u32) < i.num_targets {
							let at = table + index as usize * 4;
							let disp = i32::from_le_bytes([
								code[at],
								code[at + 1],
								code[at + 2],
								code[at + 3],
							]);
							branch_to!(disp);
						}
					},

					// ### Arithmetic
					OpCode::AddI4 | OpCode::AddI4Short => bin_i4!(AddI4, i32::wrapping_add),
					OpCode::AddI8 | OpCode::AddI8Short => bin_i8!(AddI8, i64::wrapping_add),
					OpCode::AddR4 | OpCode::AddR4Short => bin_r4!(AddR4, |a, b| a + b),
					OpCode::AddR8 | OpCode::AddR8Short => bin_r8!(AddR8, |a, b| a + b),
					OpCode::SubI4 | OpCode::SubI4Short => bin_i4!(SubI4, i32::wrapping_sub),
					OpCode::SubI8 | OpCode::SubI8Short => bin_i8!(SubI8, i64::wrapping_sub),
					OpCode::SubR4 | OpCode::SubR4Short => bin_r4!(SubR4, |a, b| a - b),
					OpCode::SubR8 | OpCode::SubR8Short => bin_r8!(SubR8, |a, b| a - b),
					OpCode::MulI4 | OpCode::MulI4Short => bin_i4!(MulI4, i32::wrapping_mul),
					OpCode::MulI8 | OpCode::MulI8Short => bin_i8!(MulI8, i64::wrapping_mul),
					OpCode::MulR4 | OpCode::MulR4Short => bin_r4!(MulR4, |a, b| a * b),
					OpCode::MulR8 | OpCode::MulR8Short => bin_r8!(MulR8, |a, b| a * b),
					OpCode::DivI4 | OpCode::DivI4Short => {
						let i = decode!(DivI4);
						let (a, b) = (slot!(i.lhs).i4(), slot!(i.rhs).i4());
						if b == 0 {
							throw!(VmError::DivideByZero);
						}
						if a == i32::MIN && b == -1 {
							throw!(VmError::Overflow);
						}
						put_i4!(i.dst, a / b);
					},
					OpCode::DivI8 | OpCode::DivI8Short => {
						let i = decode!(DivI8);
						let (a, b) = (slot!(i.lhs).i8(), slot!(i.rhs).i8());
						if b == 0 {
							throw!(VmError::DivideByZero);
						}
						if a == i64::MIN && b == -1 {
							throw!(VmError::Overflow);
						}
						put_i8!(i.dst, a / b);
					},
					OpCode::DivR4 | OpCode::DivR4Short => bin_r4!(DivR4, |a, b| a / b),
					OpCode::DivR8 | OpCode::DivR8Short => bin_r8!(DivR8, |a, b| a / b),
					OpCode::DivUnI4 | OpCode::DivUnI4Short => {
						let i = decode!(DivUnI4);
						let (a, b) = (slot!(i.lhs).i4() as u32, slot!(i.rhs).i4() as u32);
						if b == 0 {
							throw!(VmError::DivideByZero);
						}
						put_i4!(i.dst, (a / b) as i32);
					},
					OpCode::DivUnI8 | OpCode::DivUnI8Short => {
						let i = decode!(DivUnI8);
						let (a, b) = (slot!(i.lhs).i8() as u64, slot!(i.rhs).i8() as u64);
						if b == 0 {
							throw!(VmError::DivideByZero);
						}
						put_i8!(i.dst, (a / b) as i64);
					},
					OpCode::RemI4 | OpCode::RemI4Short => {
						let i = decode!(RemI4);
						let (a, b) = (slot!(i.lhs).i4(), slot!(i.rhs).i4());
						if b == 0 {
							throw!(VmError::DivideByZero);
						}
						put_i4!(i.dst, a.wrapping_rem(b));
					},
					OpCode::RemI8 | OpCode::RemI8Short => {
						let i = decode!(RemI8);
						let (a, b) = (slot!(i.lhs).i8(), slot!(i.rhs).i8());
						if b == 0 {
							throw!(VmError::DivideByZero);
						}
						put_i8!(i.dst, a.wrapping_rem(b));
					},
					OpCode::RemR4 | OpCode::RemR4Short => bin_r4!(RemR4, |a, b| a % b),
					OpCode::RemR8 | OpCode::RemR8Short => bin_r8!(RemR8, |a, b| a % b),
					OpCode::RemUnI4 | OpCode::RemUnI4Short => {
						let i = decode!(RemUnI4);
						let (a, b) = (slot!(i.lhs).i4() as u32, slot!(i.rhs).i4() as u32);
						if b == 0 {
							throw!(VmError::DivideByZero);
						}
						put_i4!(i.dst, (a % b) as i32);
					},
					OpCode::RemUnI8 | OpCode::RemUnI8Short => {
						let i = decode!(RemUnI8);
						let (a, b) = (slot!(i.lhs).i8() as u64, slot!(i.rhs).i8() as u64);
						if b == 0 {
							throw!(VmError::DivideByZero);
						}
						put_i8!(i.dst, (a % b) as i64);
					},
					OpCode::AndI4 | OpCode::AndI4Short => bin_i4!(AndI4, |a, b| a & b),
					OpCode::AndI8 | OpCode::AndI8Short => bin_i8!(AndI8, |a, b| a & b),
					OpCode::OrI4 | OpCode::OrI4Short => bin_i4!(OrI4, |a, b| a | b),
					OpCode::OrI8 | OpCode::OrI8Short => bin_i8!(OrI8, |a, b| a | b),
					OpCode::XorI4 | OpCode::XorI4Short => bin_i4!(XorI4, |a, b| a ^ b),
					OpCode::XorI8 | OpCode::XorI8Short => bin_i8!(XorI8, |a, b| a ^ b),
					OpCode::ShlI4 | OpCode::ShlI4Short => bin_i4!(ShlI4, |a, b| a.wrapping_shl(b as u32)),
					OpCode::ShlI8 => {
						let i = decode!(ShlI8);
						put_i8!(i.dst, slot!(i.lhs).i8().wrapping_shl(slot!(i.rhs).i4() as u32));
					},
					OpCode::ShrI4 | OpCode::ShrI4Short => bin_i4!(ShrI4, |a, b| a.wrapping_shr(b as u32)),
					OpCode::ShrI8 => {
						let i = decode!(ShrI8);
						put_i8!(i.dst, slot!(i.lhs).i8().wrapping_shr(slot!(i.rhs).i4() as u32));
					},
					OpCode::ShrUnI4 | OpCode::ShrUnI4Short => {
						bin_i4!(ShrUnI4, |a, b| ((a as u32).wrapping_shr(b as u32)) as i32)
					},
					OpCode::ShrUnI8 => {
						let i = decode!(ShrUnI8);
						put_i8!(
							i.dst,
							((slot!(i.lhs).i8() as u64).wrapping_shr(slot!(i.rhs).i4() as u32)) as i64
						);
					},
					OpCode::NegI4 | OpCode::NegI4Short => conv!(NegI4, i4, put_i4, |v: i32| v.wrapping_neg()),
					OpCode::NegI8 | OpCode::NegI8Short => conv!(NegI8, i8, put_i8, |v: i64| v.wrapping_neg()),
					OpCode::NegR4 | OpCode::NegR4Short => conv!(NegR4, r4, put_r4, |v: f32| -v),
					OpCode::NegR8 | OpCode::NegR8Short => conv!(NegR8, r8, put_r8, |v: f64| -v),
					OpCode::NotI4 | OpCode::NotI4Short => conv!(NotI4, i4, put_i4, |v: i32| !v),
					OpCode::NotI8 | OpCode::NotI8Short => conv!(NotI8, i8, put_i8, |v: i64| !v),

					OpCode::AddOvfI4 => ovf_bin!(AddOvfI4, i4, put_i4, checked_add),
					OpCode::AddOvfI8 => ovf_bin!(AddOvfI8, i8, put_i8, checked_add),
					OpCode::SubOvfI4 => ovf_bin!(SubOvfI4, i4, put_i4, checked_sub),
					OpCode::SubOvfI8 => ovf_bin!(SubOvfI8, i8, put_i8, checked_sub),
					OpCode::MulOvfI4 => ovf_bin!(MulOvfI4, i4, put_i4, checked_mul),
					OpCode::MulOvfI8 => ovf_bin!(MulOvfI8, i8, put_i8, checked_mul),
					OpCode::AddOvfUnI4 => {
						let i = decode!(AddOvfUnI4);
						match (slot!(i.lhs).i4() as u32).checked_add(slot!(i.rhs).i4() as u32) {
							Some(value) => put_i4!(i.dst, value as i32),
							None => throw!(VmError::Overflow),
						}
					},
					OpCode::AddOvfUnI8 => {
						let i = decode!(AddOvfUnI8);
						match (slot!(i.lhs).i8() as u64).checked_add(slot!(i.rhs).i8() as u64) {
							Some(value) => put_i8!(i.dst, value as i64),
							None => throw!(VmError::Overflow),
						}
					},
					OpCode::SubOvfUnI4 => {
						let i = decode!(SubOvfUnI4);
						match (slot!(i.lhs).i4() as u32).checked_sub(slot!(i.rhs).i4() as u32) {
							Some(value) => put_i4!(i.dst, value as i32),
							None => throw!(VmError::Overflow),
						}
					},
					OpCode::SubOvfUnI8 => {
						let i = decode!(SubOvfUnI8);
						match (slot!(i.lhs).i8() as u64).checked_sub(slot!(i.rhs).i8() as u64) {
							Some(value) => put_i8!(i.dst, value as i64),
							None => throw!(VmError::Overflow),
						}
					},
					OpCode::MulOvfUnI4 => {
						let i = decode!(MulOvfUnI4);
						match (slot!(i.lhs).i4() as u32).checked_mul(slot!(i.rhs).i4() as u32) {
							Some(value) => put_i4!(i.dst, value as i32),
							None => throw!(VmError::Overflow),
						}
					},
					OpCode::MulOvfUnI8 => {
						let i = decode!(MulOvfUnI8);
						match (slot!(i.lhs).i8() as u64).checked_mul(slot!(i.rhs).i8() as u64) {
							Some(value) => put_i8!(i.dst, value as i64),
							None => throw!(VmError::Overflow),
						}
					},

					// ### Comparisons
					OpCode::CeqI4 | OpCode::CeqI4Short => cmp!(CeqI4, i4, |a, b| a == b),
					OpCode::CeqI8 | OpCode::CeqI8Short => cmp!(CeqI8, i8, |a, b| a == b),
					OpCode::CeqR4 | OpCode::CeqR4Short => cmp!(CeqR4, r4, |a: f32, b: f32| a == b),
					OpCode::CeqR8 | OpCode::CeqR8Short => cmp!(CeqR8, r8, |a: f64, b: f64| a == b),
					OpCode::CgtI4 | OpCode::CgtI4Short => cmp!(CgtI4, i4, |a, b| a > b),
					OpCode::CgtI8 | OpCode::CgtI8Short => cmp!(CgtI8, i8, |a, b| a > b),
					OpCode::CgtR4 => cmp!(CgtR4, r4, |a: f32, b: f32| a > b),
					OpCode::CgtR8 => cmp!(CgtR8, r8, |a: f64, b: f64| a > b),
					OpCode::CgtUnI4 | OpCode::CgtUnI4Short => {
						cmp!(CgtUnI4, i4, |a, b| (a as u32) > (b as u32))
					},
					OpCode::CgtUnI8 | OpCode::CgtUnI8Short => {
						cmp!(CgtUnI8, i8, |a, b| (a as u64) > (b as u64))
					},
					OpCode::CgtUnR4 => cmp!(CgtUnR4, r4, |a: f32, b: f32| a > b),
					OpCode::CgtUnR8 => cmp!(CgtUnR8, r8, |a: f64, b: f64| a > b),
					OpCode::CltI4 | OpCode::CltI4Short => cmp!(CltI4, i4, |a, b| a < b),
					OpCode::CltI8 | OpCode::CltI8Short => cmp!(CltI8, i8, |a, b| a < b),
					OpCode::CltR4 => cmp!(CltR4, r4, |a: f32, b: f32| a < b),
					OpCode::CltR8 => cmp!(CltR8, r8, |a: f64, b: f64| a < b),
					OpCode::CltUnI4 | OpCode::CltUnI4Short => {
						cmp!(CltUnI4, i4, |a, b| (a as u32) < (b as u32))
					},
					OpCode::CltUnI8 | OpCode::CltUnI8Short => {
						cmp!(CltUnI8, i8, |a, b| (a as u64) < (b as u64))
					},
					OpCode::CltUnR4 => cmp!(CltUnR4, r4, |a: f32, b: f32| a < b),
					OpCode::CltUnR8 => cmp!(CltUnR8, r8, |a: f64, b: f64| a < b),

					// ### Conversions
					OpCode::ConvI1I4 | OpCode::ConvI1I4Short => conv!(ConvI1I4, i4, put_i4, |v: i32| v as i8 as i32),
					OpCode::ConvI1I8 | OpCode::ConvI1I8Short => conv!(ConvI1I8, i8, put_i4, |v: i64| v as i8 as i32),
					OpCode::ConvI1R4 | OpCode::ConvI1R4Short => conv!(ConvI1R4, r4, put_i4, |v: f32| v as i8 as i32),
					OpCode::ConvI1R8 | OpCode::ConvI1R8Short => conv!(ConvI1R8, r8, put_i4, |v: f64| v as i8 as i32),
					OpCode::ConvU1I4 | OpCode::ConvU1I4Short => conv!(ConvU1I4, i4, put_i4, |v: i32| v as u8 as i32),
					OpCode::ConvU1I8 | OpCode::ConvU1I8Short => conv!(ConvU1I8, i8, put_i4, |v: i64| v as u8 as i32),
					OpCode::ConvU1R4 | OpCode::ConvU1R4Short => conv!(ConvU1R4, r4, put_i4, |v: f32| v as u8 as i32),
					OpCode::ConvU1R8 | OpCode::ConvU1R8Short => conv!(ConvU1R8, r8, put_i4, |v: f64| v as u8 as i32),
					OpCode::ConvI2I4 | OpCode::ConvI2I4Short => conv!(ConvI2I4, i4, put_i4, |v: i32| v as i16 as i32),
					OpCode::ConvI2I8 | OpCode::ConvI2I8Short => conv!(ConvI2I8, i8, put_i4, |v: i64| v as i16 as i32),
					OpCode::ConvI2R4 | OpCode::ConvI2R4Short => conv!(ConvI2R4, r4, put_i4, |v: f32| v as i16 as i32),
					OpCode::ConvI2R8 | OpCode::ConvI2R8Short => conv!(ConvI2R8, r8, put_i4, |v: f64| v as i16 as i32),
					OpCode::ConvU2I4 | OpCode::ConvU2I4Short => conv!(ConvU2I4, i4, put_i4, |v: i32| v as u16 as i32),
					OpCode::ConvU2I8 | OpCode::ConvU2I8Short => conv!(ConvU2I8, i8, put_i4, |v: i64| v as u16 as i32),
					OpCode::ConvU2R4 | OpCode::ConvU2R4Short => conv!(ConvU2R4, r4, put_i4, |v: f32| v as u16 as i32),
					OpCode::ConvU2R8 | OpCode::ConvU2R8Short => conv!(ConvU2R8, r8, put_i4, |v: f64| v as u16 as i32),
					OpCode::ConvI4I8 | OpCode::ConvI4I8Short => conv!(ConvI4I8, i8, put_i4, |v: i64| v as i32),
					OpCode::ConvI4R4 | OpCode::ConvI4R4Short => conv!(ConvI4R4, r4, put_i4, |v: f32| v as i32),
					OpCode::ConvI4R8 | OpCode::ConvI4R8Short => conv!(ConvI4R8, r8, put_i4, |v: f64| v as i32),
					OpCode::ConvU4I8 | OpCode::ConvU4I8Short => conv!(ConvU4I8, i8, put_i4, |v: i64| v as u32 as i32),
					OpCode::ConvU4R4 | OpCode::ConvU4R4Short => conv!(ConvU4R4, r4, put_i4, |v: f32| v as u32 as i32),
					OpCode::ConvU4R8 | OpCode::ConvU4R8Short => conv!(ConvU4R8, r8, put_i4, |v: f64| v as u32 as i32),
					OpCode::ConvI8I4 | OpCode::ConvI8I4Short => conv!(ConvI8I4, i4, put_i8, |v: i32| v as i64),
					OpCode::ConvI8U4 | OpCode::ConvI8U4Short => conv!(ConvI8U4, i4, put_i8, |v: i32| v as u32 as i64),
					OpCode::ConvI8R4 | OpCode::ConvI8R4Short => conv!(ConvI8R4, r4, put_i8, |v: f32| v as i64),
					OpCode::ConvI8R8 | OpCode::ConvI8R8Short => conv!(ConvI8R8, r8, put_i8, |v: f64| v as i64),
					// conv.u8 from int32 sign-extends per the standard's
					// "convert via int64" rule.
					OpCode::ConvU8I4 | OpCode::ConvU8I4Short => conv!(ConvU8I4, i4, put_i8, |v: i32| v as i64),
					OpCode::ConvU8U4 | OpCode::ConvU8U4Short => conv!(ConvU8U4, i4, put_i8, |v: i32| v as u32 as i64),
					OpCode::ConvU8R4 | OpCode::ConvU8R4Short => conv!(ConvU8R4, r4, put_i8, |v: f32| v as u64 as i64),
					OpCode::ConvU8R8 | OpCode::ConvU8R8Short => conv!(ConvU8R8, r8, put_i8, |v: f64| v as u64 as i64),
					OpCode::ConvR4I4 | OpCode::ConvR4I4Short => conv!(ConvR4I4, i4, put_r4, |v: i32| v as f32),
					OpCode::ConvR4U4 | OpCode::ConvR4U4Short => conv!(ConvR4U4, i4, put_r4, |v: i32| v as u32 as f32),
					OpCode::ConvR4I8 | OpCode::ConvR4I8Short => conv!(ConvR4I8, i8, put_r4, |v: i64| v as f32),
					OpCode::ConvR4U8 | OpCode::ConvR4U8Short => conv!(ConvR4U8, i8, put_r4, |v: i64| v as u64 as f32),
					OpCode::ConvR4R8 | OpCode::ConvR4R8Short => conv!(ConvR4R8, r8, put_r4, |v: f64| v as f32),
					OpCode::ConvR8I4 | OpCode::ConvR8I4Short => conv!(ConvR8I4, i4, put_r8, |v: i32| v as f64),
					OpCode::ConvR8U4 | OpCode::ConvR8U4Short => conv!(ConvR8U4, i4, put_r8, |v: i32| v as u32 as f64),
					OpCode::ConvR8I8 | OpCode::ConvR8I8Short => conv!(ConvR8I8, i8, put_r8, |v: i64| v as f64),
					OpCode::ConvR8U8 | OpCode::ConvR8U8Short => conv!(ConvR8U8, i8, put_r8, |v: i64| v as u64 as f64),
					OpCode::ConvR8R4 | OpCode::ConvR8R4Short => conv!(ConvR8R4, r4, put_r8, |v: f32| v as f64),

					OpCode::CkFiniteR4 => {
						let i = decode!(CkFiniteR4);
						let value = slot!(i.src).r4();
						if !value.is_finite() {
							throw!(VmError::Arithmetic);
						}
						put_r4!(i.dst, value);
					},
					OpCode::CkFiniteR8 => {
						let i = decode!(CkFiniteR8);
						let value = slot!(i.src).r8();
						if !value.is_finite() {
							throw!(VmError::Arithmetic);
						}
						put_r8!(i.dst, value);
					},

					// ### Checked conversions
					OpCode::ConvOvfI1I4 => conv_checked!(ConvOvfI1I4, i4, put_i4, |v: i32| i8::try_from(v).ok().map(|v| v as i32)),
					OpCode::ConvOvfI1I8 => conv_checked!(ConvOvfI1I8, i8, put_i4, |v: i64| i8::try_from(v).ok().map(|v| v as i32)),
					OpCode::ConvOvfI1R4 => conv_checked!(ConvOvfI1R4, r4, put_i4, |v: f32| float_to_int_checked::<f32>(v, i8::MIN as f32, i8::MAX as f32).map(|v| v as i32)),
					OpCode::ConvOvfI1R8 => conv_checked!(ConvOvfI1R8, r8, put_i4, |v: f64| float_to_int_checked::<f64>(v, i8::MIN as f64, i8::MAX as f64).map(|v| v as i32)),
					OpCode::ConvOvfU1I4 => conv_checked!(ConvOvfU1I4, i4, put_i4, |v: i32| u8::try_from(v).ok().map(|v| v as i32)),
					OpCode::ConvOvfU1I8 => conv_checked!(ConvOvfU1I8, i8, put_i4, |v: i64| u8::try_from(v).ok().map(|v| v as i32)),
					OpCode::ConvOvfU1R4 => conv_checked!(ConvOvfU1R4, r4, put_i4, |v: f32| float_to_int_checked::<f32>(v, 0.0, u8::MAX as f32).map(|v| v as i32)),
					OpCode::ConvOvfU1R8 => conv_checked!(ConvOvfU1R8, r8, put_i4, |v: f64| float_to_int_checked::<f64>(v, 0.0, u8::MAX as f64).map(|v| v as i32)),
					OpCode::ConvOvfI2I4 => conv_checked!(ConvOvfI2I4, i4, put_i4, |v: i32| i16::try_from(v).ok().map(|v| v as i32)),
					OpCode::ConvOvfI2I8 => conv_checked!(ConvOvfI2I8, i8, put_i4, |v: i64| i16::try_from(v).ok().map(|v| v as i32)),
					OpCode::ConvOvfI2R4 => conv_checked!(ConvOvfI2R4, r4, put_i4, |v: f32| float_to_int_checked::<f32>(v, i16::MIN as f32, i16::MAX as f32).map(|v| v as i32)),
					OpCode::ConvOvfI2R8 => conv_checked!(ConvOvfI2R8, r8, put_i4, |v: f64| float_to_int_checked::<f64>(v, i16::MIN as f64, i16::MAX as f64).map(|v| v as i32)),
					OpCode::ConvOvfU2I4 => conv_checked!(ConvOvfU2I4, i4, put_i4, |v: i32| u16::try_from(v).ok().map(|v| v as i32)),
					OpCode::ConvOvfU2I8 => conv_checked!(ConvOvfU2I8, i8, put_i4, |v: i64| u16::try_from(v).ok().map(|v| v as i32)),
					OpCode::ConvOvfU2R4 => conv_checked!(ConvOvfU2R4, r4, put_i4, |v: f32| float_to_int_checked::<f32>(v, 0.0, u16::MAX as f32).map(|v| v as i32)),
					OpCode::ConvOvfU2R8 => conv_checked!(ConvOvfU2R8, r8, put_i4, |v: f64| float_to_int_checked::<f64>(v, 0.0, u16::MAX as f64).map(|v| v as i32)),
					OpCode::ConvOvfI4I4 => conv!(ConvOvfI4I4, i4, put_i4, |v: i32| v),
					OpCode::ConvOvfI4I8 => conv_checked!(ConvOvfI4I8, i8, put_i4, |v: i64| i32::try_from(v).ok()),
					OpCode::ConvOvfI4R4 => conv_checked!(ConvOvfI4R4, r4, put_i4, |v: f32| float_to_int_checked::<f32>(v, i32::MIN as f32, i32::MAX as f32).map(|v| v as i32)),
					OpCode::ConvOvfI4R8 => conv_checked!(ConvOvfI4R8, r8, put_i4, |v: f64| float_to_int_checked::<f64>(v, i32::MIN as f64, i32::MAX as f64).map(|v| v as i32)),
					OpCode::ConvOvfU4I4 => conv_checked!(ConvOvfU4I4, i4, put_i4, |v: i32| u32::try_from(v).ok().map(|v| v as i32)),
					OpCode::ConvOvfU4I8 => conv_checked!(ConvOvfU4I8, i8, put_i4, |v: i64| u32::try_from(v).ok().map(|v| v as i32)),
					OpCode::ConvOvfU4R4 => conv_checked!(ConvOvfU4R4, r4, put_i4, |v: f32| float_to_int_checked::<f32>(v, 0.0, u32::MAX as f32).map(|v| v as i32)),
					OpCode::ConvOvfU4R8 => conv_checked!(ConvOvfU4R8, r8, put_i4, |v: f64| float_to_int_checked::<f64>(v, 0.0, u32::MAX as f64).map(|v| v as i32)),
					OpCode::ConvOvfI8I4 => conv!(ConvOvfI8I4, i4, put_i8, |v: i32| v as i64),
					OpCode::ConvOvfI8I8 => conv!(ConvOvfI8I8, i8, put_i8, |v: i64| v),
					OpCode::ConvOvfI8R4 => conv_checked!(ConvOvfI8R4, r4, put_i8, |v: f32| float_to_int_checked::<f32>(v, i64::MIN as f32, i64::MAX as f32)),
					OpCode::ConvOvfI8R8 => conv_checked!(ConvOvfI8R8, r8, put_i8, |v: f64| float_to_int_checked::<f64>(v, i64::MIN as f64, i64::MAX as f64)),
					OpCode::ConvOvfU8I4 => conv_checked!(ConvOvfU8I4, i4, put_i8, |v: i32| u64::try_from(v).ok().map(|v| v as i64)),
					OpCode::ConvOvfU8I8 => conv_checked!(ConvOvfU8I8, i8, put_i8, |v: i64| u64::try_from(v).ok().map(|v| v as i64)),
					OpCode::ConvOvfU8R4 => conv_checked!(ConvOvfU8R4, r4, put_i8, |v: f32| {
						match v.is_finite() && v >= 0.0 && v <= u64::MAX as f32 {
							true => Some(v as u64 as i64),
							false => None,
						}
					}),
					OpCode::ConvOvfU8R8 => conv_checked!(ConvOvfU8R8, r8, put_i8, |v: f64| {
						match v.is_finite() && v >= 0.0 && v <= u64::MAX as f64 {
							true => Some(v as u64 as i64),
							false => None,
						}
					}),
					OpCode::ConvOvfI1U4Un => conv_checked!(ConvOvfI1U4Un, i4, put_i4, |v: i32| i8::try_from(v as u32).ok().map(|v| v as i32)),
					OpCode::ConvOvfI1U8Un => conv_checked!(ConvOvfI1U8Un, i8, put_i4, |v: i64| i8::try_from(v as u64).ok().map(|v| v as i32)),
					OpCode::ConvOvfU1U4Un => conv_checked!(ConvOvfU1U4Un, i4, put_i4, |v: i32| u8::try_from(v as u32).ok().map(|v| v as i32)),
					OpCode::ConvOvfU1U8Un => conv_checked!(ConvOvfU1U8Un, i8, put_i4, |v: i64| u8::try_from(v as u64).ok().map(|v| v as i32)),
					OpCode::ConvOvfI2U4Un => conv_checked!(ConvOvfI2U4Un, i4, put_i4, |v: i32| i16::try_from(v as u32).ok().map(|v| v as i32)),
					OpCode::ConvOvfI2U8Un => conv_checked!(ConvOvfI2U8Un, i8, put_i4, |v: i64| i16::try_from(v as u64).ok().map(|v| v as i32)),
					OpCode::ConvOvfU2U4Un => conv_checked!(ConvOvfU2U4Un, i4, put_i4, |v: i32| u16::try_from(v as u32).ok().map(|v| v as i32)),
					OpCode::ConvOvfU2U8Un => conv_checked!(ConvOvfU2U8Un, i8, put_i4, |v: i64| u16::try_from(v as u64).ok().map(|v| v as i32)),
					OpCode::ConvOvfI4U4Un => conv_checked!(ConvOvfI4U4Un, i4, put_i4, |v: i32| i32::try_from(v as u32).ok()),
					OpCode::ConvOvfI4U8Un => conv_checked!(ConvOvfI4U8Un, i8, put_i4, |v: i64| i32::try_from(v as u64).ok()),
					OpCode::ConvOvfU4U4Un => conv!(ConvOvfU4U4Un, i4, put_i4, |v: i32| v),
					OpCode::ConvOvfU4U8Un => conv_checked!(ConvOvfU4U8Un, i8, put_i4, |v: i64| u32::try_from(v as u64).ok().map(|v| v as i32)),
					OpCode::ConvOvfI8U4Un => conv!(ConvOvfI8U4Un, i4, put_i8, |v: i32| v as u32 as i64),
					OpCode::ConvOvfI8U8Un => conv_checked!(ConvOvfI8U8Un, i8, put_i8, |v: i64| i64::try_from(v as u64).ok()),
					OpCode::ConvOvfU8U4Un => conv!(ConvOvfU8U4Un, i4, put_i8, |v: i32| v as u32 as i64),
					OpCode::ConvOvfU8U8Un => conv!(ConvOvfU8U8Un, i8, put_i8, |v: i64| v),

					// ### Indirect loads and stores
					OpCode::LdIndI1 | OpCode::LdIndI1Short => {
						let i = decode!(LdIndI1);
						let ptr = nonnull!(slot!(i.src).ptr());
						put_i4!(i.dst, unsafe { std::ptr::read_unaligned(ptr as *const i8) } as i32);
					},
					OpCode::LdIndU1 | OpCode::LdIndU1Short => {
						let i = decode!(LdIndU1);
						let ptr = nonnull!(slot!(i.src).ptr());
						put_i4!(i.dst, unsafe { std::ptr::read_unaligned(ptr) } as i32);
					},
					OpCode::LdIndI2 | OpCode::LdIndI2Short | OpCode::LdIndI2Unaligned => {
						let i = decode!(LdIndI2);
						let ptr = nonnull!(slot!(i.src).ptr());
						put_i4!(i.dst, unsafe { std::ptr::read_unaligned(ptr as *const i16) } as i32);
					},
					OpCode::LdIndU2 | OpCode::LdIndU2Short | OpCode::LdIndU2Unaligned => {
						let i = decode!(LdIndU2);
						let ptr = nonnull!(slot!(i.src).ptr());
						put_i4!(i.dst, unsafe { std::ptr::read_unaligned(ptr as *const u16) } as i32);
					},
					OpCode::LdIndI4 | OpCode::LdIndI4Short | OpCode::LdIndI4Unaligned => {
						let i = decode!(LdIndI4);
						let ptr = nonnull!(slot!(i.src).ptr());
						put_i4!(i.dst, unsafe { std::ptr::read_unaligned(ptr as *const i32) });
					},
					OpCode::LdIndI8 | OpCode::LdIndI8Short | OpCode::LdIndI8Unaligned => {
						let i = decode!(LdIndI8);
						let ptr = nonnull!(slot!(i.src).ptr());
						put_i8!(i.dst, unsafe { std::ptr::read_unaligned(ptr as *const i64) });
					},
					OpCode::LdIndRef | OpCode::LdIndRefShort => {
						let i = decode!(LdIndRef);
						let ptr = nonnull!(slot!(i.src).ptr());
						put_ptr!(i.dst, unsafe { std::ptr::read_unaligned(ptr as *const *mut u8) });
					},
					OpCode::StIndI1 | OpCode::StIndI1Short => {
						let i = decode!(StIndI1);
						let ptr = nonnull!(slot!(i.dest).ptr());
						unsafe { std::ptr::write_unaligned(ptr, slot!(i.src).i4() as u8) };
					},
					OpCode::StIndI2 | OpCode::StIndI2Short | OpCode::StIndI2Unaligned => {
						let i = decode!(StIndI2);
						let ptr = nonnull!(slot!(i.dest).ptr());
						unsafe { std::ptr::write_unaligned(ptr as *mut i16, slot!(i.src).i4() as i16) };
					},
					OpCode::StIndI4 | OpCode::StIndI4Short | OpCode::StIndI4Unaligned => {
						let i = decode!(StIndI4);
						let ptr = nonnull!(slot!(i.dest).ptr());
						unsafe { std::ptr::write_unaligned(ptr as *mut i32, slot!(i.src).i4()) };
					},
					OpCode::StIndI8 | OpCode::StIndI8Short | OpCode::StIndI8Unaligned => {
						let i = decode!(StIndI8);
						let ptr = nonnull!(slot!(i.dest).ptr());
						unsafe { std::ptr::write_unaligned(ptr as *mut i64, slot!(i.src).i8()) };
					},
					OpCode::StIndRef | OpCode::StIndRefShort => {
						let i = decode!(StIndRef);
						let ptr = nonnull!(slot!(i.dest).ptr());
						unsafe { std::ptr::write_unaligned(ptr as *mut *mut u8, slot!(i.src).ptr()) };
					},

					OpCode::LocAlloc => {
						let i = decode!(LocAlloc);
						let size = slot!(i.size).i8();
						if size < 0 {
							throw!(VmError::Overflow);
						}
						let ptr = vm_try!(machine.localloc(size as usize));
						put_ptr!(i.dst, ptr);
					},
					OpCode::InitBlk => {
						let i = decode!(InitBlk);
						let ptr = nonnull!(slot!(i.addr).ptr());
						let value = slot!(i.value).i4() as u8;
						let size = slot!(i.size).i4() as usize;
						unsafe { ptr.write_bytes(value, size) };
					},
					OpCode::CpBlk => {
						let i = decode!(CpBlk);
						let dest = nonnull!(slot!(i.dest).ptr());
						let src = nonnull!(slot!(i.src).ptr());
						let size = slot!(i.size).i4() as usize;
						unsafe { std::ptr::copy(src, dest, size) };
					},
					OpCode::GetEnumLongHashCode => {
						let i = decode!(GetEnumLongHashCode);
						let ptr = nonnull!(slot!(i.value_ptr).ptr());
						put_i8!(i.dst, unsafe { std::ptr::read_unaligned(ptr as *const i64) });
					},

					// ### Value init and copies through pointers
					OpCode::InitObjI1 | OpCode::InitObjI1Short => {
						let i = decode!(InitObjI1);
						let ptr = nonnull!(slot!(i.addr).ptr());
						unsafe { *ptr = 0 };
					},
					OpCode::InitObjI2 | OpCode::InitObjI2Short => {
						let i = decode!(InitObjI2);
						let ptr = nonnull!(slot!(i.addr).ptr());
						unsafe { std::ptr::write_unaligned(ptr as *mut i16, 0) };
					},
					OpCode::InitObjI4 | OpCode::InitObjI4Short => {
						let i = decode!(InitObjI4);
						let ptr = nonnull!(slot!(i.addr).ptr());
						unsafe { std::ptr::write_unaligned(ptr as *mut i32, 0) };
					},
					OpCode::InitObjI8 | OpCode::InitObjI8Short => {
						let i = decode!(InitObjI8);
						let ptr = nonnull!(slot!(i.addr).ptr());
						unsafe { std::ptr::write_unaligned(ptr as *mut i64, 0) };
					},
					OpCode::InitObjAny | OpCode::InitObjAnyShort => {
						let i = decode!(InitObjAny);
						let ptr = nonnull!(slot!(i.addr).ptr());
						unsafe { ptr.write_bytes(0, i.size as usize) };
					},
					OpCode::CpObjI1 | OpCode::CpObjI1Short => {
						let i = decode!(CpObjI1);
						let dest = nonnull!(slot!(i.dest).ptr());
						let src = nonnull!(slot!(i.src).ptr());
						unsafe { *dest = *src };
					},
					OpCode::CpObjI2 | OpCode::CpObjI2Short => {
						let i = decode!(CpObjI2);
						let dest = nonnull!(slot!(i.dest).ptr());
						let src = nonnull!(slot!(i.src).ptr());
						unsafe {
							std::ptr::write_unaligned(
								dest as *mut i16,
								std::ptr::read_unaligned(src as *const i16),
							)
						};
					},
					OpCode::CpObjI4 | OpCode::CpObjI4Short => {
						let i = decode!(CpObjI4);
						let dest = nonnull!(slot!(i.dest).ptr());
						let src = nonnull!(slot!(i.src).ptr());
						unsafe {
							std::ptr::write_unaligned(
								dest as *mut i32,
								std::ptr::read_unaligned(src as *const i32),
							)
						};
					},
					OpCode::CpObjI8 | OpCode::CpObjI8Short => {
						let i = decode!(CpObjI8);
						let dest = nonnull!(slot!(i.dest).ptr());
						let src = nonnull!(slot!(i.src).ptr());
						unsafe {
							std::ptr::write_unaligned(
								dest as *mut i64,
								std::ptr::read_unaligned(src as *const i64),
							)
						};
					},
					OpCode::CpObjAny | OpCode::CpObjAnyShort => {
						let i = decode!(CpObjAny);
						let dest = nonnull!(slot!(i.dest).ptr());
						let src = nonnull!(slot!(i.src).ptr());
						unsafe { std::ptr::copy(src, dest, i.size as usize) };
					},
					OpCode::LdObjAny | OpCode::LdObjAnyShort => {
						let i = decode!(LdObjAny);
						let src = nonnull!(slot!(i.src).ptr());
						let dst = machine.slot_ptr(base + i.dst as usize) as *mut u8;
						unsafe { std::ptr::copy_nonoverlapping(src, dst, i.size as usize) };
					},
					OpCode::StObjAny | OpCode::StObjAnyShort => {
						let i = decode!(StObjAny);
						let dest = nonnull!(slot!(i.dest).ptr());
						let src = machine.slot_ptr(base + i.src as usize) as *const u8;
						unsafe { std::ptr::copy_nonoverlapping(src, dest, i.size as usize) };
					},

					// ### Object model
					OpCode::CastClass | OpCode::CastClassShort => {
						let i = decode!(CastClass);
						let target = resolved_class!(i.klass_idx);
						let obj = GcRef::from_raw(slot!(i.src).ptr());
						if obj.is_null() {
							put_ptr!(i.dst, std::ptr::null_mut());
						} else {
							let class = unsafe { obj.class::<'l>() };
							if !vm_try!(target.is_assignable_from(rt.ctx(), class)) {
								throw!(VmError::InvalidCast);
							}
							put_ptr!(i.dst, obj.raw());
						}
					},
					OpCode::IsInst | OpCode::IsInstShort => {
						let i = decode!(IsInst);
						let target = resolved_class!(i.klass_idx);
						let obj = GcRef::from_raw(slot!(i.src).ptr());
						let result = match obj.is_null() {
							true => std::ptr::null_mut(),
							false => {
								let class = unsafe { obj.class::<'l>() };
								match vm_try!(target.is_assignable_from(rt.ctx(), class)) {
									true => obj.raw(),
									false => std::ptr::null_mut(),
								}
							},
						};
						put_ptr!(i.dst, result);
					},
					OpCode::Box | OpCode::BoxShort => {
						let i = decode!(Box);
						vm_try!(machine.safepoint());
						let class = resolved_class!(i.klass_idx);
						vm_try!(class.ensure_fields(rt.ctx()));
						let size = class.instance_size() as usize;
						let boxed = vm_try!(rt.heap().alloc_object(class, size));
						unsafe {
							let src = machine.slot_ptr(base + i.src as usize) as *const u8;
							std::ptr::copy_nonoverlapping(src, boxed.data_ptr(), size);
						}
						put_ptr!(i.dst, boxed.raw());
					},
					OpCode::Unbox | OpCode::UnboxShort => {
						let i = decode!(Unbox);
						let class = resolved_class!(i.klass_idx);
						let obj = GcRef::from_raw(nonnull!(slot!(i.src).ptr()));
						let obj_class = unsafe { obj.class::<'l>() };
						if !std::ptr::eq(obj_class, class) {
							throw!(VmError::InvalidCast);
						}
						put_ptr!(i.dst, obj.data_ptr());
					},
					OpCode::UnboxAny | OpCode::UnboxAnyShort => {
						let i = decode!(UnboxAny);
						let class = resolved_class!(i.klass_idx);
						let obj = GcRef::from_raw(nonnull!(slot!(i.src).ptr()));
						let obj_class = unsafe { obj.class::<'l>() };
						if !std::ptr::eq(obj_class, class) {
							throw!(VmError::InvalidCast);
						}
						unsafe {
							let dst = machine.slot_ptr(base + i.dst as usize) as *mut u8;
							std::ptr::copy_nonoverlapping(obj.data_ptr(), dst, i.size as usize);
						}
					},

					// ### Arrays
					OpCode::NewArr | OpCode::NewArrShort => {
						let i = decode!(NewArr);
						vm_try!(machine.safepoint());
						let class = resolved_class!(i.klass_idx);
						let length = slot!(i.len).i4();
						let array = vm_try!(icalls::alloc_array(rt, class, &[length]));
						put_ptr!(i.dst, array.raw());
					},
					OpCode::LdLen | OpCode::LdLenShort => {
						let i = decode!(LdLen);
						let array = GcRef::from_raw(nonnull!(slot!(i.arr).ptr()));
						put_i8!(i.dst, array.array_length() as i64);
					},
					OpCode::Ldelema | OpCode::LdelemaShort | OpCode::LdelemaReadOnly => {
						let i = decode!(Ldelema);
						let element_class = resolved_class!(i.klass_idx);
						let array = GcRef::from_raw(nonnull!(slot!(i.arr).ptr()));
						let index = slot!(i.index).i4();
						if index < 0 || index as usize >= array.array_length() {
							throw!(VmError::IndexOutOfRange);
						}
						let array_class = unsafe { array.class::<'l>() };
						if op != OpCode::LdelemaReadOnly {
							let Some(declared) = array_class.element_class() else {
								throw!(VmError::ExecutionEngine);
							};
							if !std::ptr::eq(declared, element_class) {
								throw!(VmError::InvalidCast);
							}
						}
						let size = vm_try!(icalls::element_byte_size(rt, element_class));
						put_ptr!(i.dst, unsafe { array.array_data().add(index as usize * size) });
					},
					// The typed element loads share one operand shape; the
					// representative decode below applies to the whole group.
					OpCode::LdelemI1 | OpCode::LdelemI1Short => {
						let i = decode!(LdelemI1);
						let ptr = vm_try!(array_element_ptr(machine, base, i.arr, i.index, 1));
						put_i4!(i.dst, unsafe { *(ptr as *const i8) } as i32);
					},
					OpCode::LdelemU1 | OpCode::LdelemU1Short => {
						let i = decode!(LdelemU1);
						let ptr = vm_try!(array_element_ptr(machine, base, i.arr, i.index, 1));
						put_i4!(i.dst, unsafe { *ptr } as i32);
					},
					OpCode::LdelemI2 | OpCode::LdelemI2Short => {
						let i = decode!(LdelemI2);
						let ptr = vm_try!(array_element_ptr(machine, base, i.arr, i.index, 2));
						put_i4!(i.dst, unsafe { *(ptr as *const i16) } as i32);
					},
					OpCode::LdelemU2 | OpCode::LdelemU2Short => {
						let i = decode!(LdelemU2);
						let ptr = vm_try!(array_element_ptr(machine, base, i.arr, i.index, 2));
						put_i4!(i.dst, unsafe { *(ptr as *const u16) } as i32);
					},
					OpCode::LdelemI4 | OpCode::LdelemI4Short => {
						let i = decode!(LdelemI4);
						let ptr = vm_try!(array_element_ptr(machine, base, i.arr, i.index, 4));
						put_i4!(i.dst, unsafe { *(ptr as *const i32) });
					},
					OpCode::LdelemI8 | OpCode::LdelemI8Short => {
						let i = decode!(LdelemI8);
						let ptr = vm_try!(array_element_ptr(machine, base, i.arr, i.index, 8));
						put_i8!(i.dst, unsafe { *(ptr as *const i64) });
					},
					OpCode::LdelemRef | OpCode::LdelemRefShort => {
						let i = decode!(LdelemRef);
						let ptr = vm_try!(array_element_ptr(machine, base, i.arr, i.index, 8));
						put_ptr!(i.dst, unsafe { *(ptr as *const *mut u8) });
					},
					OpCode::LdelemAny | OpCode::LdelemAnyShort => {
						let i = decode!(LdelemAny);
						let array = GcRef::from_raw(nonnull!(slot!(i.arr).ptr()));
						let index = slot!(i.index).i4();
						if index < 0 || index as usize >= array.array_length() {
							throw!(VmError::IndexOutOfRange);
						}
						let size = i.size as usize;
						unsafe {
							let src = array.array_data().add(index as usize * size);
							let dst = machine.slot_ptr(base + i.dst as usize) as *mut u8;
							std::ptr::copy_nonoverlapping(src, dst, size);
						}
					},
					OpCode::StelemI1 | OpCode::StelemI1Short => {
						let i = decode!(StelemI1);
						let ptr = vm_try!(array_element_ptr(machine, base, i.arr, i.index, 1));
						unsafe { *ptr = slot!(i.src).i4() as u8 };
					},
					OpCode::StelemI2 | OpCode::StelemI2Short => {
						let i = decode!(StelemI2);
						let ptr = vm_try!(array_element_ptr(machine, base, i.arr, i.index, 2));
						unsafe { *(ptr as *mut i16) = slot!(i.src).i4() as i16 };
					},
					OpCode::StelemI4 | OpCode::StelemI4Short => {
						let i = decode!(StelemI4);
						let ptr = vm_try!(array_element_ptr(machine, base, i.arr, i.index, 4));
						unsafe { *(ptr as *mut i32) = slot!(i.src).i4() };
					},
					OpCode::StelemI8 | OpCode::StelemI8Short => {
						let i = decode!(StelemI8);
						let ptr = vm_try!(array_element_ptr(machine, base, i.arr, i.index, 8));
						unsafe { *(ptr as *mut i64) = slot!(i.src).i8() };
					},
					OpCode::StelemRef | OpCode::StelemRefShort => {
						let i = decode!(StelemRef);
						let array = GcRef::from_raw(nonnull!(slot!(i.arr).ptr()));
						let index = slot!(i.index).i4();
						if index < 0 || index as usize >= array.array_length() {
							throw!(VmError::IndexOutOfRange);
						}
						let value = GcRef::from_raw(slot!(i.src).ptr());
						if !value.is_null() {
							let array_class = unsafe { array.class::<'l>() };
							let Some(declared) = array_class.element_class() else {
								throw!(VmError::ExecutionEngine);
							};
							let value_class = unsafe { value.class::<'l>() };
							if !vm_try!(declared.is_assignable_from(rt.ctx(), value_class)) {
								throw!(VmError::InvalidCast);
							}
						}
						unsafe {
							*(array.array_data() as *mut *mut u8).add(index as usize) = value.raw();
						}
					},
					OpCode::StelemAny | OpCode::StelemAnyShort => {
						let i = decode!(StelemAny);
						let array = GcRef::from_raw(nonnull!(slot!(i.arr).ptr()));
						let index = slot!(i.index).i4();
						if index < 0 || index as usize >= array.array_length() {
							throw!(VmError::IndexOutOfRange);
						}
						let size = i.size as usize;
						unsafe {
							let src = machine.slot_ptr(base + i.src as usize) as *const u8;
							let dst = array.array_data().add(index as usize * size);
							std::ptr::copy_nonoverlapping(src, dst, size);
						}
					},

					// ### Fields
					OpCode::LdfldI1 | OpCode::LdfldI1Short => {
						let i = decode!(LdfldI1);
						let ptr = vm_try!(field_ptr(machine, base, i.obj, i.offset as usize));
						put_i4!(i.dst, unsafe { std::ptr::read_unaligned(ptr as *const i8) } as i32);
					},
					OpCode::LdfldU1 | OpCode::LdfldU1Short => {
						let i = decode!(LdfldU1);
						let ptr = vm_try!(field_ptr(machine, base, i.obj, i.offset as usize));
						put_i4!(i.dst, unsafe { std::ptr::read_unaligned(ptr) } as i32);
					},
					OpCode::LdfldI2 | OpCode::LdfldI2Short | OpCode::LdfldI2Unaligned => {
						let i = decode!(LdfldI2);
						let ptr = vm_try!(field_ptr(machine, base, i.obj, i.offset as usize));
						put_i4!(i.dst, unsafe { std::ptr::read_unaligned(ptr as *const i16) } as i32);
					},
					OpCode::LdfldU2 | OpCode::LdfldU2Short | OpCode::LdfldU2Unaligned => {
						let i = decode!(LdfldU2);
						let ptr = vm_try!(field_ptr(machine, base, i.obj, i.offset as usize));
						put_i4!(i.dst, unsafe { std::ptr::read_unaligned(ptr as *const u16) } as i32);
					},
					OpCode::LdfldI4 | OpCode::LdfldI4Short | OpCode::LdfldI4Unaligned => {
						let i = decode!(LdfldI4);
						let ptr = vm_try!(field_ptr(machine, base, i.obj, i.offset as usize));
						put_i4!(i.dst, unsafe { std::ptr::read_unaligned(ptr as *const i32) });
					},
					OpCode::LdfldI8 | OpCode::LdfldI8Short | OpCode::LdfldI8Unaligned => {
						let i = decode!(LdfldI8);
						let ptr = vm_try!(field_ptr(machine, base, i.obj, i.offset as usize));
						put_i8!(i.dst, unsafe { std::ptr::read_unaligned(ptr as *const i64) });
					},
					OpCode::LdfldAny | OpCode::LdfldAnyShort => {
						let i = decode!(LdfldAny);
						let obj = nonnull!(slot!(i.obj).ptr());
						unsafe {
							let src = obj.add(i.offset as usize);
							let dst = machine.slot_ptr(base + i.dst as usize) as *mut u8;
							std::ptr::copy_nonoverlapping(src, dst, i.size as usize);
						}
					},
					OpCode::LdfldI1Large => {
						let i = decode!(LdfldI1Large);
						let ptr = vm_try!(field_ptr(machine, base, i.obj, i.offset as usize));
						put_i4!(i.dst, unsafe { std::ptr::read_unaligned(ptr as *const i8) } as i32);
					},
					OpCode::LdfldU1Large => {
						let i = decode!(LdfldU1Large);
						let ptr = vm_try!(field_ptr(machine, base, i.obj, i.offset as usize));
						put_i4!(i.dst, unsafe { std::ptr::read_unaligned(ptr) } as i32);
					},
					OpCode::LdfldI2Large => {
						let i = decode!(LdfldI2Large);
						let ptr = vm_try!(field_ptr(machine, base, i.obj, i.offset as usize));
						put_i4!(i.dst, unsafe { std::ptr::read_unaligned(ptr as *const i16) } as i32);
					},
					OpCode::LdfldU2Large => {
						let i = decode!(LdfldU2Large);
						let ptr = vm_try!(field_ptr(machine, base, i.obj, i.offset as usize));
						put_i4!(i.dst, unsafe { std::ptr::read_unaligned(ptr as *const u16) } as i32);
					},
					OpCode::LdfldI4Large => {
						let i = decode!(LdfldI4Large);
						let ptr = vm_try!(field_ptr(machine, base, i.obj, i.offset as usize));
						put_i4!(i.dst, unsafe { std::ptr::read_unaligned(ptr as *const i32) });
					},
					OpCode::LdfldI8Large => {
						let i = decode!(LdfldI8Large);
						let ptr = vm_try!(field_ptr(machine, base, i.obj, i.offset as usize));
						put_i8!(i.dst, unsafe { std::ptr::read_unaligned(ptr as *const i64) });
					},
					OpCode::LdfldAnyLarge => {
						let i = decode!(LdfldAnyLarge);
						let obj = nonnull!(slot!(i.obj).ptr());
						unsafe {
							let src = obj.add(i.offset as usize);
							let dst = machine.slot_ptr(base + i.dst as usize) as *mut u8;
							std::ptr::copy_nonoverlapping(src, dst, i.size as usize);
						}
					},

					OpCode::LdvfldI1 | OpCode::LdvfldI1Short => {
						let i = decode!(LdvfldI1);
						let src = machine.slot_ptr(base + i.src as usize) as *const u8;
						let value = unsafe { std::ptr::read_unaligned(src.add(i.offset as usize) as *const i8) };
						put_i4!(i.dst, value as i32);
					},
					OpCode::LdvfldU1 | OpCode::LdvfldU1Short => {
						let i = decode!(LdvfldU1);
						let src = machine.slot_ptr(base + i.src as usize) as *const u8;
						let value = unsafe { std::ptr::read_unaligned(src.add(i.offset as usize)) };
						put_i4!(i.dst, value as i32);
					},
					OpCode::LdvfldI2 | OpCode::LdvfldI2Short => {
						let i = decode!(LdvfldI2);
						let src = machine.slot_ptr(base + i.src as usize) as *const u8;
						let value = unsafe { std::ptr::read_unaligned(src.add(i.offset as usize) as *const i16) };
						put_i4!(i.dst, value as i32);
					},
					OpCode::LdvfldU2 | OpCode::LdvfldU2Short => {
						let i = decode!(LdvfldU2);
						let src = machine.slot_ptr(base + i.src as usize) as *const u8;
						let value = unsafe { std::ptr::read_unaligned(src.add(i.offset as usize) as *const u16) };
						put_i4!(i.dst, value as i32);
					},
					OpCode::LdvfldI4 | OpCode::LdvfldI4Short => {
						let i = decode!(LdvfldI4);
						let src = machine.slot_ptr(base + i.src as usize) as *const u8;
						let value = unsafe { std::ptr::read_unaligned(src.add(i.offset as usize) as *const i32) };
						put_i4!(i.dst, value);
					},
					OpCode::LdvfldI8 | OpCode::LdvfldI8Short => {
						let i = decode!(LdvfldI8);
						let src = machine.slot_ptr(base + i.src as usize) as *const u8;
						let value = unsafe { std::ptr::read_unaligned(src.add(i.offset as usize) as *const i64) };
						put_i8!(i.dst, value);
					},
					OpCode::LdvfldAny | OpCode::LdvfldAnyShort => {
						let i = decode!(LdvfldAny);
						unsafe {
							let src = (machine.slot_ptr(base + i.src as usize) as *const u8).add(i.offset as usize);
							let dst = machine.slot_ptr(base + i.dst as usize) as *mut u8;
							std::ptr::copy(src, dst, i.size as usize);
						}
					},
					OpCode::Ldflda | OpCode::LdfldaShort => {
						let i = decode!(Ldflda);
						let obj = nonnull!(slot!(i.obj).ptr());
						put_ptr!(i.dst, unsafe { obj.add(i.offset as usize) });
					},
					OpCode::LdfldaLarge => {
						let i = decode!(LdfldaLarge);
						let obj = nonnull!(slot!(i.obj).ptr());
						put_ptr!(i.dst, unsafe { obj.add(i.offset as usize) });
					},

					OpCode::StfldI1 | OpCode::StfldI1Short => {
						let i = decode!(StfldI1);
						let ptr = vm_try!(field_ptr(machine, base, i.obj, i.offset as usize));
						unsafe { std::ptr::write_unaligned(ptr, slot!(i.src).i4() as u8) };
					},
					OpCode::StfldI2 | OpCode::StfldI2Short | OpCode::StfldI2Unaligned => {
						let i = decode!(StfldI2);
						let ptr = vm_try!(field_ptr(machine, base, i.obj, i.offset as usize));
						unsafe { std::ptr::write_unaligned(ptr as *mut i16, slot!(i.src).i4() as i16) };
					},
					OpCode::StfldI4 | OpCode::StfldI4Short | OpCode::StfldI4Unaligned => {
						let i = decode!(StfldI4);
						let ptr = vm_try!(field_ptr(machine, base, i.obj, i.offset as usize));
						unsafe { std::ptr::write_unaligned(ptr as *mut i32, slot!(i.src).i4()) };
					},
					OpCode::StfldI8 | OpCode::StfldI8Short | OpCode::StfldI8Unaligned => {
						let i = decode!(StfldI8);
						let ptr = vm_try!(field_ptr(machine, base, i.obj, i.offset as usize));
						unsafe { std::ptr::write_unaligned(ptr as *mut i64, slot!(i.src).i8()) };
					},
					OpCode::StfldAny | OpCode::StfldAnyShort => {
						let i = decode!(StfldAny);
						let obj = nonnull!(slot!(i.obj).ptr());
						unsafe {
							let src = machine.slot_ptr(base + i.src as usize) as *const u8;
							std::ptr::copy_nonoverlapping(src, obj.add(i.offset as usize), i.size as usize);
						}
					},
					OpCode::StfldI1Large => {
						let i = decode!(StfldI1Large);
						let ptr = vm_try!(field_ptr(machine, base, i.obj, i.offset as usize));
						unsafe { std::ptr::write_unaligned(ptr, slot!(i.src).i4() as u8) };
					},
					OpCode::StfldI2Large => {
						let i = decode!(StfldI2Large);
						let ptr = vm_try!(field_ptr(machine, base, i.obj, i.offset as usize));
						unsafe { std::ptr::write_unaligned(ptr as *mut i16, slot!(i.src).i4() as i16) };
					},
					OpCode::StfldI4Large => {
						let i = decode!(StfldI4Large);
						let ptr = vm_try!(field_ptr(machine, base, i.obj, i.offset as usize));
						unsafe { std::ptr::write_unaligned(ptr as *mut i32, slot!(i.src).i4()) };
					},
					OpCode::StfldI8Large => {
						let i = decode!(StfldI8Large);
						let ptr = vm_try!(field_ptr(machine, base, i.obj, i.offset as usize));
						unsafe { std::ptr::write_unaligned(ptr as *mut i64, slot!(i.src).i8()) };
					},
					OpCode::StfldAnyLarge => {
						let i = decode!(StfldAnyLarge);
						let obj = nonnull!(slot!(i.obj).ptr());
						unsafe {
							let src = machine.slot_ptr(base + i.src as usize) as *const u8;
							std::ptr::copy_nonoverlapping(src, obj.add(i.offset as usize), i.size as usize);
						}
					},

					// ### Statics
					OpCode::LdsfldI1 | OpCode::LdsfldI1Short => {
						let i = decode!(LdsfldI1);
						let statics = vm_try!(static_base(rt, resolved_class!(i.klass_idx)));
						put_i4!(i.dst, unsafe { *(statics.add(i.offset as usize) as *const i8) } as i32);
					},
					OpCode::LdsfldU1 | OpCode::LdsfldU1Short => {
						let i = decode!(LdsfldU1);
						let statics = vm_try!(static_base(rt, resolved_class!(i.klass_idx)));
						put_i4!(i.dst, unsafe { *statics.add(i.offset as usize) } as i32);
					},
					OpCode::LdsfldI2 | OpCode::LdsfldI2Short => {
						let i = decode!(LdsfldI2);
						let statics = vm_try!(static_base(rt, resolved_class!(i.klass_idx)));
						put_i4!(i.dst, unsafe { *(statics.add(i.offset as usize) as *const i16) } as i32);
					},
					OpCode::LdsfldU2 | OpCode::LdsfldU2Short => {
						let i = decode!(LdsfldU2);
						let statics = vm_try!(static_base(rt, resolved_class!(i.klass_idx)));
						put_i4!(i.dst, unsafe { *(statics.add(i.offset as usize) as *const u16) } as i32);
					},
					OpCode::LdsfldI4 | OpCode::LdsfldI4Short => {
						let i = decode!(LdsfldI4);
						let statics = vm_try!(static_base(rt, resolved_class!(i.klass_idx)));
						put_i4!(i.dst, unsafe { *(statics.add(i.offset as usize) as *const i32) });
					},
					OpCode::LdsfldI8 | OpCode::LdsfldI8Short => {
						let i = decode!(LdsfldI8);
						let statics = vm_try!(static_base(rt, resolved_class!(i.klass_idx)));
						put_i8!(i.dst, unsafe { *(statics.add(i.offset as usize) as *const i64) });
					},
					OpCode::LdsfldAny | OpCode::LdsfldAnyShort => {
						let i = decode!(LdsfldAny);
						let statics = vm_try!(static_base(rt, resolved_class!(i.klass_idx)));
						unsafe {
							let src = statics.add(i.offset as usize);
							let dst = machine.slot_ptr(base + i.dst as usize) as *mut u8;
							std::ptr::copy_nonoverlapping(src, dst, i.size as usize);
						}
					},
					OpCode::Ldsflda | OpCode::LdsfldaShort
					| OpCode::LdsfldRvaData | OpCode::LdsfldRvaDataShort => {
						let i = decode!(Ldsflda);
						let statics = vm_try!(static_base(rt, resolved_class!(i.klass_idx)));
						put_ptr!(i.dst, unsafe { statics.add(i.offset as usize) });
					},
					OpCode::StsfldI1 | OpCode::StsfldI1Short => {
						let i = decode!(StsfldI1);
						let statics = vm_try!(static_base(rt, resolved_class!(i.klass_idx)));
						unsafe { *statics.add(i.offset as usize) = slot!(i.src).i4() as u8 };
					},
					OpCode::StsfldI2 | OpCode::StsfldI2Short => {
						let i = decode!(StsfldI2);
						let statics = vm_try!(static_base(rt, resolved_class!(i.klass_idx)));
						unsafe { *(statics.add(i.offset as usize) as *mut i16) = slot!(i.src).i4() as i16 };
					},
					OpCode::StsfldI4 | OpCode::StsfldI4Short => {
						let i = decode!(StsfldI4);
						let statics = vm_try!(static_base(rt, resolved_class!(i.klass_idx)));
						unsafe { *(statics.add(i.offset as usize) as *mut i32) = slot!(i.src).i4() };
					},
					OpCode::StsfldI8 | OpCode::StsfldI8Short => {
						let i = decode!(StsfldI8);
						let statics = vm_try!(static_base(rt, resolved_class!(i.klass_idx)));
						unsafe { *(statics.add(i.offset as usize) as *mut i64) = slot!(i.src).i8() };
					},
					OpCode::StsfldAny | OpCode::StsfldAnyShort => {
						let i = decode!(StsfldAny);
						let statics = vm_try!(static_base(rt, resolved_class!(i.klass_idx)));
						unsafe {
							let src = machine.slot_ptr(base + i.src as usize) as *const u8;
							std::ptr::copy_nonoverlapping(src, statics.add(i.offset as usize), i.size as usize);
						}
					},

					// ### Function pointers
					OpCode::Ldftn | OpCode::LdftnShort => {
						let i = decode!(Ldftn);
						let method = resolved_method!(i.method_idx);
						put_ptr!(i.dst, method as *const _ as *mut u8);
					},
					OpCode::Ldvirtftn | OpCode::LdvirtftnShort => {
						let i = decode!(Ldvirtftn);
						let method = resolved_method!(i.method_idx);
						let obj = GcRef::from_raw(nonnull!(slot!(i.obj).ptr()));
						let class = unsafe { obj.class::<'l>() };
						let target = vm_try!(resolve_virtual_target(rt, class, method));
						put_ptr!(i.dst, target as *const _ as *mut u8);
					},

					// ### Calls
					OpCode::CallInterp | OpCode::CallInterpShort
					| OpCode::CallInternalCall | OpCode::CallInternalCallShort
					| OpCode::CallIntrinsic | OpCode::CallIntrinsicShort
					| OpCode::CallPInvoke | OpCode::CallPInvokeShort
					| OpCode::CallRuntimeImplemented | OpCode::CallRuntimeImplementedShort => {
						let i = decode!(CallInterp);
						let target = resolved_method!(i.method_idx);
						if target.parent().has_static_constructor() {
							vm_try!(rt.ensure_class_runtime_init(target.parent()));
						}
						if matches!(op, OpCode::CallPInvoke | OpCode::CallPInvokeShort) {
							// Native transitions are safe points.
							vm_try!(machine.safepoint());
						}
						let args = call_args!(i.frame_base);
						vm_try!(rt.invoke_method(target, args, args));
					},
					OpCode::CallVirtInterp | OpCode::CallVirtInterpShort => {
						let i = decode!(CallVirtInterp);
						let declared = resolved_method!(i.method_idx);
						let args = call_args!(i.frame_base);
						let receiver = GcRef::from_raw(nonnull!(unsafe { (*args).ptr() }));
						let class = unsafe { receiver.class::<'l>() };
						let target = vm_try!(resolve_virtual_target(rt, class, declared));
						if target.parent().has_static_constructor() {
							vm_try!(rt.ensure_class_runtime_init(target.parent()));
						}
						vm_try!(rt.invoke_method_virtual(target, args, args));
					},
					OpCode::CalliInterp | OpCode::CalliInterpShort => {
						// The middle operand doubles as the frame slot
						// holding the function pointer.
						let i = decode!(CalliInterp);
						let fnptr = nonnull!(slot!(i.method_idx).ptr());
						let target: &'l MethodInfo<'l> = unsafe { &*(fnptr as *const MethodInfo) };
						let args = call_args!(i.frame_base);
						vm_try!(rt.invoke_method(target, args, args));
					},

					// ### Object construction
					OpCode::NewObjInterp | OpCode::NewObjInterpShort
					| OpCode::NewObjInternalCall | OpCode::NewObjInternalCallShort => {
						let i = decode!(NewObjInterp);
						vm_try!(machine.safepoint());
						let ctor = resolved_method!(i.method_idx);
						let class = ctor.parent();
						vm_try!(rt.ensure_class_runtime_init(class));
						let total = i.total_params_slots as usize;
						let fb = base + i.frame_base as usize;
						// Shift the arguments up one slot and seat `this`.
						for k in (0..total).rev() {
							let value = machine.read_slot(fb + k);
							machine.write_slot(fb + 1 + k, value);
						}
						let obj = vm_try!(rt.heap().alloc_object(class, class.instance_size() as usize));
						machine.write_slot(fb, ptr_slot(obj.raw()));
						let args = machine.slot_ptr(fb);
						vm_try!(rt.invoke_method(ctor, args, args));
						machine.write_slot(fb, ptr_slot(obj.raw()));
					},
					OpCode::NewObjIntrinsic | OpCode::NewObjIntrinsicShort => {
						let i = decode!(NewObjIntrinsic);
						vm_try!(machine.safepoint());
						let ctor = resolved_method!(i.method_idx);
						let total = i.total_params_slots as usize;
						let fb = base + i.frame_base as usize;
						for k in (0..total).rev() {
							let value = machine.read_slot(fb + k);
							machine.write_slot(fb + 1 + k, value);
						}
						// The constructor allocates: arguments in, object out.
						let args = machine.slot_ptr(fb + 1);
						let ret = machine.slot_ptr(fb);
						vm_try!(rt.invoke_method(ctor, args, ret));
					},
					OpCode::NewValueTypeInterp | OpCode::NewValueTypeInterpShort => {
						let i = decode!(NewValueTypeInterp);
						let ctor = resolved_method!(i.method_idx);
						let class = ctor.parent();
						vm_try!(rt.ensure_class_runtime_init(class));
						vm_try!(class.ensure_fields(rt.ctx()));
						let value_slots = (class.instance_size() as usize).div_ceil(8).max(1);
						let total = i.total_params_slots as usize;
						let fb = base + i.frame_base as usize;
						for k in (0..total).rev() {
							let value = machine.read_slot(fb + k);
							machine.write_slot(fb + value_slots + 1 + k, value);
						}
						for k in 0..value_slots {
							machine.write_slot(fb + k, StackObject::default());
						}
						machine.write_slot(
							fb + value_slots,
							ptr_slot(machine.slot_ptr(fb) as *mut u8),
						);
						let args = machine.slot_ptr(fb + value_slots);
						vm_try!(rt.invoke_method(ctor, args, args));
					},

					// ### Returns
					OpCode::RetVoid | OpCode::RetVoidShort => return Ok(Flow::Returned),
					OpCode::RetI4 | OpCode::RetI4Short => {
						let i = decode!(RetI4);
						unsafe { (*ret).set_i4(slot!(i.src).i4()) };
						return Ok(Flow::Returned);
					},
					OpCode::RetI8 | OpCode::RetI8Short => {
						let i = decode!(RetI8);
						unsafe { *ret = slot!(i.src) };
						return Ok(Flow::Returned);
					},
					OpCode::RetAny | OpCode::RetAnyShort => {
						let i = decode!(RetAny);
						unsafe {
							for k in 0..i.size as usize {
								*ret.add(k) = slot!(i.src + k as u16);
							}
						}
						return Ok(Flow::Returned);
					},

					// ### Exceptions
					OpCode::Throw | OpCode::ThrowShort => {
						let i = decode!(Throw);
						let obj = GcRef::from_raw(slot!(i.ex).ptr());
						if obj.is_null() {
							throw!(VmError::NullReference);
						}
						rt.set_pending_exception(obj);
						throw!(VmError::ExecutionEngine);
					},
					OpCode::Rethrow | OpCode::RethrowShort => {
						if current_exception.is_null() {
							throw!(VmError::ExecutionEngine);
						}
						rt.set_pending_exception(current_exception);
						throw!(VmError::ExecutionEngine);
					},
					OpCode::LeaveTryWithFinally | OpCode::LeaveTryWithFinallyShort
					| OpCode::LeaveCatchWithFinally | OpCode::LeaveCatchWithFinallyShort => {
						let i = decode!(LeaveTryWithFinally);
						let target = (pc as i64 + i.target as i64) as u32;
						let first = i.first_finally_clause_index as usize;
						let count = i.finally_clauses_count as usize;
						leave_stack.push(LeaveRecord { target, first, count, next: 0 });
						let Some(clause) = interp.clauses.get(first) else {
							throw!(VmError::ExecutionEngine);
						};
						next = clause.handler_offset as usize;
					},
					OpCode::LeaveCatchWithoutFinally | OpCode::LeaveCatchWithoutFinallyShort => {
						let i = decode!(LeaveCatchWithoutFinally);
						branch_to!(i.target);
					},
					OpCode::EndFinally | OpCode::EndFinallyShort
					| OpCode::EndFault | OpCode::EndFaultShort => {
						match leave_stack.last_mut() {
							Some(record) => {
								record.next += 1;
								if record.next < record.count {
									let index = record.first + record.next;
									let Some(clause) = interp.clauses.get(index) else {
										throw!(VmError::ExecutionEngine);
									};
									next = clause.handler_offset as usize;
								} else {
									let record = leave_stack.pop().expect("record exists");
									next = record.target as usize;
								}
							},
							None => match mode {
								Mode::Finally => return Ok(Flow::FinallyDone),
								_ => throw!(VmError::ExecutionEngine),
							},
						}
					},
					OpCode::EndFilter | OpCode::EndFilterShort => {
						let i = decode!(EndFilter);
						match mode {
							Mode::Filter => return Ok(Flow::FilterResult(slot!(i.cond).i4())),
							_ => throw!(VmError::ExecutionEngine),
						}
					},

					OpCode::Illegal => throw!(VmError::ExecutionEngine),
					OpCode::Nop => {},
					OpCode::Arglist => throw!(VmError::NotImplemented),
				}

				pc = next;
			}
		}

		// A fault: materialize the managed exception and walk the clauses.
		let exception = {
			let pending = rt.take_pending_exception();
			match pending.is_null() {
				false => pending,
				true => rt.exception_object(fault).unwrap_or(GcRef::NULL),
			}
		};
		leave_stack.clear();
		match dispatch_exception(rt, interp, base, pc as u32, exception, fault) {
			Ok(handler) => {
				current_exception = exception;
				pc = handler as usize;
				continue 'dispatch;
			},
			Err(kind) => return Err(kind),
		}
	}
}

/// Looks up the implementation a virtual or interface call dispatches to on
/// the receiver's class.
fn resolve_virtual_target<'l>(
	rt: &'l Runtime<'l>,
	receiver_class: &'l Class<'l>,
	declared: &'l MethodInfo<'l>,
) -> VmResult<&'l MethodInfo<'l>> {
	if !declared.is_virtual() {
		return Ok(declared);
	}
	receiver_class.ensure_vtable(rt.ctx())?;
	let entry = match declared.parent().is_interface() {
		true => receiver_class.interface_entry(declared.parent(), declared.slot())?,
		false => receiver_class.vtable_entry(declared.slot())?,
	};
	let target = entry.method_impl;
	// Unimplemented slots still point at the declaration itself.
	if target.is_abstract() || target.parent().is_interface() {
		return Err(VmError::MissingMethod);
	}
	// Generic virtual methods re-inflate against the implementation.
	if let Some(generic) = declared.generic_method() {
		if generic.context.method_inst.is_some() && !std::ptr::eq(target, declared) {
			let gc = crate::structured::GenericContext {
				class_inst: target.parent().generic_inst(),
				method_inst: generic.context.method_inst,
			};
			return MethodInfo::inflate(rt.ctx(), virtual_base(target), &gc);
		}
	}
	Ok(target)
}

fn virtual_base<'l>(method: &'l MethodInfo<'l>) -> &'l MethodInfo<'l> {
	match method.generic_method() {
		Some(generic) => generic.base,
		None => method,
	}
}

/// Shared element-access plumbing for the typed array opcodes.
fn array_element_ptr(
	machine: &crate::interp::machine::MachineState,
	base: usize,
	arr: u16,
	index: u16,
	element_size: usize,
) -> VmResult<*mut u8> {
	let array = GcRef::from_raw(machine.read_slot(base + arr as usize).ptr());
	if array.is_null() {
		return Err(VmError::NullReference);
	}
	let index = machine.read_slot(base + index as usize).i4();
	if index < 0 || index as usize >= array.array_length() {
		return Err(VmError::IndexOutOfRange);
	}
	Ok(unsafe { array.array_data().add(index as usize * element_size) })
}

fn field_ptr(
	machine: &crate::interp::machine::MachineState,
	base: usize,
	obj: u16,
	offset: usize,
) -> VmResult<*mut u8> {
	let obj = machine.read_slot(base + obj as usize).ptr();
	if obj.is_null() {
		return Err(VmError::NullReference);
	}
	Ok(unsafe { obj.add(offset) })
}

fn static_base<'l>(rt: &'l Runtime<'l>, class: &'l Class<'l>) -> VmResult<*mut u8> {
	rt.ensure_class_runtime_init(class)?;
	let statics = class.static_fields_data();
	match statics.is_null() {
		true => Err(VmError::ExecutionEngine),
		false => Ok(statics),
	}
}
