//! The runtime façade: owns the metadata context, the heap stand-in, the
//! per-thread machine state and the handler registries; loads modules, runs
//! class and module initializers, lowers methods on first call and exposes
//! the public invocation surface.

use std::cell::{Cell, RefCell};
use std::path::PathBuf;

use fxhash::FxHashMap;
use tracing::{debug, info};

use crate::error::{VmError, VmResult};
use crate::interp::machine::{MachineState, StackObject};
use crate::interp::{hl, transform::LlTransformer, InterpMethodInfo};
use crate::raw::indices::metadata_token::MetadataTokenKind;
use crate::structured::{Class, ClassInit, Context, MethodInfo, ModuleDef, WellKnown};
use crate::vm::icalls::{self, Registry};
use crate::vm::intrinsics;
use crate::vm::object::{GcRef, Heap};
use crate::vm::shim::{self, Invoker};

#[derive(Debug, Clone)]
pub struct RuntimeOptions {
	pub stack_slots: usize,
	pub localloc_bytes: usize,
	/// Assembly name that should be treated as the corlib regardless of
	/// load order.
	pub corlib_name: Option<String>,
	/// Directories consulted when a referenced assembly has to be loaded
	/// from disk by the embedder.
	pub search_paths: Vec<PathBuf>,
}

impl Default for RuntimeOptions {
	fn default() -> Self {
		Self {
			stack_slots: 1 << 16,
			localloc_bytes: 1 << 20,
			corlib_name: None,
			search_paths: vec![],
		}
	}
}

pub struct Runtime<'l> {
	ctx: Context<'l>,
	heap: Heap,
	machine: MachineState,
	icalls: Registry,
	intrinsics: Registry,
	newobj_icalls: Registry,
	user_strings: RefCell<FxHashMap<(u32, usize), GcRef>>,
	literal_strings: RefCell<FxHashMap<Vec<u16>, GcRef>>,
	pending_exception: Cell<GcRef>,
	options: RuntimeOptions,
}

impl<'l> Runtime<'l> {
	pub fn new(options: RuntimeOptions) -> Self {
		Runtime {
			ctx: Context::new(),
			heap: Heap::new(),
			machine: MachineState::new(options.stack_slots, options.localloc_bytes),
			icalls: icalls::seeded_icalls(),
			intrinsics: intrinsics::seeded_intrinsics(),
			newobj_icalls: Registry::new(),
			user_strings: Default::default(),
			literal_strings: Default::default(),
			pending_exception: Cell::new(GcRef::NULL),
			options,
		}
	}

	pub fn options(&self) -> &RuntimeOptions {
		&self.options
	}

	#[inline]
	pub fn ctx(&'l self) -> &'l Context<'l> {
		&self.ctx
	}

	#[inline]
	pub fn heap(&self) -> &Heap {
		&self.heap
	}

	#[inline]
	pub fn machine(&self) -> &MachineState {
		&self.machine
	}

	pub fn icalls(&self) -> &Registry {
		&self.icalls
	}

	pub fn intrinsics(&self) -> &Registry {
		&self.intrinsics
	}

	pub fn newobj_icalls(&self) -> &Registry {
		&self.newobj_icalls
	}

	/// Requests a thread abort, raised at the next safe point.
	pub fn abort(&self) {
		self.machine.request_abort();
	}

	// ### Loading

	#[tracing::instrument(skip_all)]
	pub fn load_image(&'l self, bytes: &[u8]) -> VmResult<&'l ModuleDef<'l>> {
		let module = self.ctx().load_module(bytes)?;
		if let Some(corlib_name) = &self.options.corlib_name {
			if module.name() == corlib_name {
				self.ctx().set_corlib(module);
			}
		}
		Ok(module)
	}

	#[cfg(feature = "mmap")]
	pub fn load_image_file(&'l self, path: impl AsRef<std::path::Path>) -> VmResult<&'l ModuleDef<'l>> {
		let file = std::fs::File::open(path.as_ref()).map_err(|_| VmError::FileNotFound)?;
		let map = unsafe { memmap2::Mmap::map(&file) }.map_err(|_| VmError::FileNotFound)?;
		self.load_image(&map)
	}

	#[cfg(not(feature = "mmap"))]
	pub fn load_image_file(&'l self, path: impl AsRef<std::path::Path>) -> VmResult<&'l ModuleDef<'l>> {
		let bytes = std::fs::read(path.as_ref()).map_err(|_| VmError::FileNotFound)?;
		self.load_image(&bytes)
	}

	// ### Per-method lazy state

	/// The invoker triple for a method, decided once by the shim.
	pub fn ensure_invoker(&'l self, method: &'l MethodInfo<'l>) -> VmResult<Invoker> {
		if let Some(invoker) = method.invoker.get() {
			return Ok(invoker);
		}
		method.arg_descs(self.ctx())?;
		let invoker = shim::get_invoker(self, method)?;
		method.invoker.set(Some(invoker));
		Ok(invoker)
	}

	/// The lowered body, transformed on first call and cached.
	pub fn ensure_interp_body(&'l self, method: &'l MethodInfo<'l>) -> VmResult<&'l InterpMethodInfo<'l>> {
		if let Some(body) = method.interp_body.get() {
			return Ok(body);
		}
		if method.contains_open_generic_params() {
			return Err(VmError::ExecutionEngine);
		}
		debug!(method = %method.name(), class = %method.parent(), "transforming method");
		let hl = hl::Transformer::new(self.ctx(), method)?.run()?;
		let interp = LlTransformer::new(self, method, &hl).run()?;
		method.interp_body.set(Some(interp));
		Ok(interp)
	}

	// ### Invocation core

	pub fn invoke_method(
		&'l self,
		method: &'l MethodInfo<'l>,
		args: *const StackObject,
		ret: *mut StackObject,
	) -> VmResult<()> {
		let invoker = self.ensure_invoker(method)?;
		(invoker.invoke)(self, method, args, ret)
	}

	/// Virtual entry: value-type receivers get unboxed on the way in.
	pub fn invoke_method_virtual(
		&'l self,
		method: &'l MethodInfo<'l>,
		args: *const StackObject,
		ret: *mut StackObject,
	) -> VmResult<()> {
		let invoker = self.ensure_invoker(method)?;
		(invoker.virtual_invoke)(self, method, args, ret)
	}

	// ### Class and module initialization

	/// Runs the static constructor at most once; a thread re-entering during
	/// its own cctor observes it as finished.
	pub fn ensure_class_runtime_init(&'l self, class: &'l Class<'l>) -> VmResult<()> {
		if class.is_inited(ClassInit::RUNTIME_CLASS_INIT) || class.cctor_running.get() {
			return Ok(());
		}
		// The guard flips before the call so recursive initialization
		// cannot re-enter.
		class.cctor_running.set(true);
		let result = (|| -> VmResult<()> {
			class.ensure_all(self.ctx())?;
			if let Some(cctor) = class.static_constructor(self.ctx())? {
				debug!(class = %class, "running static constructor");
				let mut ret = StackObject::default();
				self.invoke_method(cctor, std::ptr::null(), &mut ret)?;
			}
			Ok(())
		})();
		class.cctor_running.set(false);
		result?;
		class.mark_inited(ClassInit::RUNTIME_CLASS_INIT);
		Ok(())
	}

	/// The module initializer lives on the `<Module>` type (rid 1).
	pub fn run_module_cctor(&'l self, module: &'l ModuleDef<'l>) -> VmResult<()> {
		match module.get_class_by_type_def_rid(self.ctx(), 1) {
			Ok(global) => self.ensure_class_runtime_init(global),
			Err(_) => Ok(()),
		}
	}

	// ### Strings

	pub fn string_class(&'l self) -> VmResult<&'l Class<'l>> {
		self.ctx().well_known_class(WellKnown::String)
	}

	pub fn create_string(&'l self, units: &[u16]) -> VmResult<GcRef> {
		let class = self.string_class()?;
		self.heap.alloc_string(class, units)
	}

	/// Process-wide literal interning (`String.Intern` semantics).
	pub fn intern_string_value(&'l self, units: &[u16]) -> VmResult<GcRef> {
		if let Some(interned) = self.literal_strings.borrow().get(units) {
			return Ok(*interned);
		}
		let handle = self.create_string(units)?;
		self.literal_strings.borrow_mut().insert(units.to_vec(), handle);
		Ok(handle)
	}

	/// `ldstr` interning: one managed string per `#US` entry per module.
	pub fn intern_user_string(&'l self, method: &'l MethodInfo<'l>, offset: usize) -> VmResult<GcRef> {
		let module = match method.generic_method() {
			Some(generic) => generic.base.parent().module(),
			None => method.parent().module(),
		};
		let key = (module.id(), offset);
		if let Some(interned) = self.user_strings.borrow().get(&key) {
			return Ok(*interned);
		}
		let units = module.get_user_string(offset)?;
		let handle = self.intern_string_value(&units)?;
		self.user_strings.borrow_mut().insert(key, handle);
		Ok(handle)
	}

	// ### Managed exceptions

	/// Builds the managed exception object a `VmError` surfaces as inside
	/// interpreted code.
	pub fn exception_object(&'l self, kind: VmError) -> VmResult<GcRef> {
		let (namespace, name) = kind.exception_type();
		let class = self
			.ctx()
			.corlib()?
			.get_class_by_name(self.ctx(), namespace, name)?
			.or(self.ctx().corlib()?.get_class_by_name(self.ctx(), "System", "Exception")?)
			.ok_or(kind)?;
		class.ensure_fields(self.ctx())?;
		self.heap.alloc_object(class, class.instance_size() as usize)
	}

	pub fn set_pending_exception(&self, exception: GcRef) {
		self.pending_exception.set(exception);
	}

	pub fn take_pending_exception(&self) -> GcRef {
		self.pending_exception.replace(GcRef::NULL)
	}

	// ### Entry point

	/// Locates the CLI entry point of a module and runs it, marshaling the
	/// `string[]` argument when the signature asks for one.
	#[tracing::instrument(skip_all)]
	pub fn run_entry_point(&'l self, module: &'l ModuleDef<'l>, args: &[&str]) -> VmResult<i32> {
		let image = module.image().ok_or(VmError::BadImageFormat)?;
		let token = image.entry_point_token().ok_or(VmError::MissingMethod)?;
		if token.kind() != MetadataTokenKind::MethodDef {
			return Err(VmError::BadImageFormat);
		}
		let main = module.get_method_by_rid(self.ctx(), token.index() as u32)?;
		info!(method = %main.name(), "running entry point");

		self.run_module_cctor(module)?;
		self.ensure_class_runtime_init(main.parent())?;

		let total = main.total_arg_slots(self.ctx())?.max(1) as usize;
		let mut slots = vec![StackObject::default(); total];
		if main.params().len() == 1 {
			let string_sig = main.params()[0];
			let _ = string_sig;
			let array = self.create_string_array(args)?;
			slots[0].set_ptr(array.raw());
		} else if !main.params().is_empty() {
			return Err(VmError::MissingMethod);
		}

		let mut ret = StackObject::default();
		self.invoke_method(main, slots.as_ptr(), &mut ret)?;
		match main.is_void_return() {
			true => Ok(0),
			false => Ok(ret.i4()),
		}
	}

	fn create_string_array(&'l self, args: &[&str]) -> VmResult<GcRef> {
		let string_sig = self
			.ctx()
			.intern_sig(crate::structured::TypeSig::new_by_val(crate::structured::ElementType::String));
		let class = self.ctx().szarray_class(string_sig)?;
		let array = self
			.heap
			.alloc_array(class, std::mem::size_of::<usize>(), args.len())?;
		for (i, value) in args.iter().enumerate() {
			let units: Vec<u16> = value.encode_utf16().collect();
			let handle = self.create_string(&units)?;
			unsafe {
				*(array.array_data() as *mut *mut u8).add(i) = handle.raw();
			}
		}
		Ok(array)
	}
}
