use std::cell::{Cell, RefCell};

use bumpalo::Bump;
use derivative::Derivative;
use fxhash::FxHashMap;
use tracing::{debug, info};

use crate::error::{VmError, VmResult};
use crate::structured::class::Class;
use crate::structured::module::ModuleDef;
use crate::structured::sig::*;
use crate::structured::{Gid, Interner, MAX_MODULE_ID};

/// Well-known corlib types the runtime reaches for by name.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum WellKnown {
	Object,
	ValueType,
	Enum,
	String,
	Array,
	Delegate,
	MulticastDelegate,
	Exception,
}

impl WellKnown {
	pub fn full_name(&self) -> (&'static str, &'static str) {
		match self {
			WellKnown::Object => ("System", "Object"),
			WellKnown::ValueType => ("System", "ValueType"),
			WellKnown::Enum => ("System", "Enum"),
			WellKnown::String => ("System", "String"),
			WellKnown::Array => ("System", "Array"),
			WellKnown::Delegate => ("System", "Delegate"),
			WellKnown::MulticastDelegate => ("System", "MulticastDelegate"),
			WellKnown::Exception => ("System", "Exception"),
		}
	}
}

const WELL_KNOWN_COUNT: usize = 8;

/// The generic collection interfaces every SZArray implements.
pub const SZARRAY_INTERFACES: [(&str, &str); 5] = [
	("System.Collections.Generic", "IList`1"),
	("System.Collections.Generic", "ICollection`1"),
	("System.Collections.Generic", "IEnumerable`1"),
	("System.Collections.Generic", "IReadOnlyList`1"),
	("System.Collections.Generic", "IReadOnlyCollection`1"),
];

/// The process-wide metadata context: the arena every runtime entity lives
/// in, the intern pools, and the module registry. All resolution goes
/// through here; entities borrow the context's arena for `'l`.
#[derive(Derivative)]
#[derivative(Debug)]
pub struct Context<'l> {
	#[derivative(Debug = "ignore")]
	bump: Bump,
	#[derivative(Debug = "ignore")]
	pub(crate) interner: Interner<'l>,
	modules: RefCell<Vec<&'l ModuleDef<'l>>>,
	#[derivative(Debug = "ignore")]
	modules_by_name: RefCell<FxHashMap<&'l str, &'l ModuleDef<'l>>>,
	corlib: Cell<Option<&'l ModuleDef<'l>>>,
	#[derivative(Debug = "ignore")]
	well_known: [Cell<Option<&'l Class<'l>>>; WELL_KNOWN_COUNT],
	#[derivative(Debug = "ignore")]
	pub(crate) szarray_classes: RefCell<FxHashMap<*const TypeSig<'l>, &'l Class<'l>>>,
	#[derivative(Debug = "ignore")]
	pub(crate) mdarray_classes: RefCell<FxHashMap<(*const TypeSig<'l>, u8), &'l Class<'l>>>,
	#[derivative(Debug = "ignore")]
	inflated_methods: RefCell<FxHashMap<(usize, usize, usize), &'l crate::structured::method::MethodInfo<'l>>>,
}

impl<'l> Context<'l> {
	pub fn new() -> Self {
		Context {
			bump: Bump::new(),
			interner: Default::default(),
			modules: Default::default(),
			modules_by_name: Default::default(),
			corlib: Default::default(),
			well_known: Default::default(),
			szarray_classes: Default::default(),
			mdarray_classes: Default::default(),
			inflated_methods: Default::default(),
		}
	}

	#[inline]
	pub(crate) fn bump(&'l self) -> &'l Bump {
		&self.bump
	}

	#[inline]
	pub fn alloc_str(&'l self, str: &str) -> &'l str {
		self.bump.alloc_str(str)
	}

	// ### Interning

	pub fn intern_sig(&'l self, sig: TypeSig<'l>) -> &'l TypeSig<'l> {
		self.interner.intern_sig(&self.bump, sig)
	}

	pub fn intern_inst(&'l self, args: &[&'l TypeSig<'l>]) -> &'l GenericInst<'l> {
		self.interner.intern_inst(&self.bump, args)
	}

	pub fn intern_generic_class(&'l self, base_gid: Gid, inst: &'l GenericInst<'l>) -> &'l GenericClass<'l> {
		self.interner.intern_generic_class(&self.bump, base_gid, inst)
	}

	pub(crate) fn lookup_inflated_method(
		&self,
		base: &'l crate::structured::method::MethodInfo<'l>,
		gc: &GenericContext<'l>,
	) -> Option<&'l crate::structured::method::MethodInfo<'l>> {
		self.inflated_methods.borrow().get(&inflation_key(base, gc)).copied()
	}

	pub(crate) fn cache_inflated_method(
		&self,
		base: &'l crate::structured::method::MethodInfo<'l>,
		gc: &GenericContext<'l>,
		method: &'l crate::structured::method::MethodInfo<'l>,
	) {
		self.inflated_methods.borrow_mut().insert(inflation_key(base, gc), method);
	}

	// ### Module registry

	/// Loads a module from raw bytes, copies them into the arena and assigns
	/// the next module id. The first corlib-looking module (or the very
	/// first load) becomes the corlib.
	#[tracing::instrument(skip_all)]
	pub fn load_module(&'l self, bytes: &[u8]) -> VmResult<&'l ModuleDef<'l>> {
		let id = self.modules.borrow().len() as u32 + 1;
		if id > MAX_MODULE_ID {
			return Err(VmError::ExceedMaxImageCount);
		}

		let data = self.bump().alloc_slice_copy(bytes);
		let module = ModuleDef::load(self, data, id)?;
		self.register_module(module);
		Ok(module)
	}

	pub(crate) fn register_module(&'l self, module: &'l ModuleDef<'l>) {
		info!(name = module.name(), id = module.id(), "registering module");
		self.modules.borrow_mut().push(module);
		self.modules_by_name.borrow_mut().insert(module.name(), module);

		if self.corlib.get().is_none() || module.is_corlib_by_name() {
			if self.corlib.get().map(|m| m.is_corlib_by_name()) != Some(true) {
				debug!(name = module.name(), "designating corlib");
				self.corlib.set(Some(module));
			}
		}
	}

	pub(crate) fn next_module_id(&self) -> u32 {
		self.modules.borrow().len() as u32 + 1
	}

	pub fn module_by_id(&self, id: u32) -> Option<&'l ModuleDef<'l>> {
		match id {
			0 => None,
			_ => self.modules.borrow().get(id as usize - 1).copied(),
		}
	}

	pub fn module_by_name(&self, name: &str) -> Option<&'l ModuleDef<'l>> {
		self.modules_by_name.borrow().get(name).copied()
	}

	pub fn modules(&self) -> Vec<&'l ModuleDef<'l>> {
		self.modules.borrow().clone()
	}

	pub fn corlib(&self) -> VmResult<&'l ModuleDef<'l>> {
		self.corlib.get().ok_or(VmError::ExecutionEngine)
	}

	pub fn set_corlib(&self, module: &'l ModuleDef<'l>) {
		self.corlib.set(Some(module));
	}

	// ### Well-known classes

	pub fn well_known_class(&'l self, which: WellKnown) -> VmResult<&'l Class<'l>> {
		let cell = &self.well_known[which as usize];
		if let Some(class) = cell.get() {
			return Ok(class);
		}
		let (namespace, name) = which.full_name();
		let class = self.corlib()?.get_class_by_name(self, namespace, name)?.ok_or(VmError::TypeLoad)?;
		cell.set(Some(class));
		Ok(class)
	}

	/// The corlib class representing a by-value primitive element type.
	pub fn primitive_class(&'l self, element_type: ElementType) -> VmResult<&'l Class<'l>> {
		let name = match element_type {
			ElementType::Void => "Void",
			ElementType::Boolean => "Boolean",
			ElementType::Char => "Char",
			ElementType::I1 => "SByte",
			ElementType::U1 => "Byte",
			ElementType::I2 => "Int16",
			ElementType::U2 => "UInt16",
			ElementType::I4 => "Int32",
			ElementType::U4 => "UInt32",
			ElementType::I8 => "Int64",
			ElementType::U8 => "UInt64",
			ElementType::R4 => "Single",
			ElementType::R8 => "Double",
			ElementType::String => "String",
			ElementType::Object => "Object",
			ElementType::I => "IntPtr",
			ElementType::U => "UIntPtr",
			ElementType::TypedByRef => "TypedReference",
			ElementType::Ptr | ElementType::FnPtr => "IntPtr",
			_ => return Err(VmError::TypeLoad),
		};
		self.corlib()?
			.get_class_by_name(self, "System", name)?
			.ok_or(VmError::TypeLoad)
	}

	/// The element type a `System.*` primitive type-def corresponds to, used
	/// when folding TypeRefs to primitives into primitive signatures.
	pub(crate) fn primitive_element_type(namespace: &str, name: &str) -> Option<ElementType> {
		if namespace != "System" {
			return None;
		}
		Some(match name {
			"Void" => ElementType::Void,
			"Boolean" => ElementType::Boolean,
			"Char" => ElementType::Char,
			"SByte" => ElementType::I1,
			"Byte" => ElementType::U1,
			"Int16" => ElementType::I2,
			"UInt16" => ElementType::U2,
			"Int32" => ElementType::I4,
			"UInt32" => ElementType::U4,
			"Int64" => ElementType::I8,
			"UInt64" => ElementType::U8,
			"Single" => ElementType::R4,
			"Double" => ElementType::R8,
			"String" => ElementType::String,
			"Object" => ElementType::Object,
			"IntPtr" => ElementType::I,
			"UIntPtr" => ElementType::U,
			"TypedReference" => ElementType::TypedByRef,
			_ => return None,
		})
	}

	// ### Signature classification

	/// Resolves the runtime class a by-value signature describes.
	pub fn class_from_sig(&'l self, sig: &'l TypeSig<'l>) -> VmResult<&'l Class<'l>> {
		match (sig.element_type, sig.data) {
			(element, TypeSigData::None) if element.is_primitive() => self.primitive_class(element),
			(ElementType::Ptr | ElementType::FnPtr, _) => self.primitive_class(ElementType::I),
			(ElementType::ValueType | ElementType::Class, TypeSigData::TypeDefGid(gid)) => {
				self.class_by_gid(gid)
			},
			(ElementType::GenericInst, TypeSigData::Generic(generic)) => {
				self.class_from_generic_class(generic)
			},
			(ElementType::SZArray, TypeSigData::Element(element)) => self.szarray_class(element),
			(ElementType::Array, TypeSigData::Array(array)) => {
				self.mdarray_class(array.element, array.rank)
			},
			_ => Err(VmError::TypeLoad),
		}
	}

	pub fn class_by_gid(&'l self, gid: Gid) -> VmResult<&'l Class<'l>> {
		let module = self.module_by_id(gid.module_id()).ok_or(VmError::TypeLoad)?;
		module.get_class_by_type_def_rid(self, gid.rid())
	}

	/// Classifies a signature for operand selection and call marshaling.
	pub fn reduce_type(&'l self, sig: &'l TypeSig<'l>) -> VmResult<ReduceType> {
		if sig.by_ref {
			return Ok(ReduceType::I);
		}
		Ok(match sig.element_type {
			ElementType::Void => ReduceType::Void,
			ElementType::Boolean | ElementType::U1 => ReduceType::U1,
			ElementType::I1 => ReduceType::I1,
			ElementType::Char | ElementType::U2 => ReduceType::U2,
			ElementType::I2 => ReduceType::I2,
			ElementType::I4 | ElementType::U4 => ReduceType::I4,
			ElementType::I8 | ElementType::U8 => ReduceType::I8,
			ElementType::R4 => ReduceType::R4,
			ElementType::R8 => ReduceType::R8,
			ElementType::I | ElementType::U | ElementType::Ptr | ElementType::FnPtr => ReduceType::I,
			ElementType::String
			| ElementType::Object
			| ElementType::Class
			| ElementType::SZArray
			| ElementType::Array => ReduceType::Ref,
			ElementType::TypedByRef => ReduceType::Other,
			ElementType::ValueType => {
				let class = self.class_from_sig(sig)?;
				match class.enum_underlying_sig(self)? {
					Some(underlying) => self.reduce_type(underlying)?,
					None => ReduceType::Other,
				}
			},
			ElementType::GenericInst => {
				let class = self.class_from_sig(sig)?;
				match class.is_value_type() {
					false => ReduceType::Ref,
					true => match class.enum_underlying_sig(self)? {
						Some(underlying) => self.reduce_type(underlying)?,
						None => ReduceType::Other,
					},
				}
			},
			_ => return Err(VmError::ExecutionEngine),
		})
	}

	/// Size and alignment of a by-value instance of the signature.
	pub fn value_layout(&'l self, sig: &'l TypeSig<'l>) -> VmResult<(u32, u32)> {
		if sig.by_ref {
			return Ok((PTR_SIZE, PTR_SIZE));
		}
		if let Some(layout) = sig.element_type.primitive_layout() {
			return Ok(layout);
		}
		match sig.element_type {
			ElementType::Void => Ok((0, 1)),
			ElementType::TypedByRef => Ok((PTR_SIZE * 2, PTR_SIZE)),
			ElementType::ValueType | ElementType::GenericInst => {
				let class = self.class_from_sig(sig)?;
				match class.is_value_type() {
					false => Ok((PTR_SIZE, PTR_SIZE)),
					true => {
						class.ensure_fields(self)?;
						Ok((class.instance_size(), class.alignment() as u32))
					},
				}
			},
			_ => Err(VmError::TypeLoad),
		}
	}

	/// Evaluation-stack slots a value of this signature spans (8-byte slots).
	pub fn stack_slot_count(&'l self, sig: &'l TypeSig<'l>) -> VmResult<u16> {
		if sig.is_void() && !sig.by_ref {
			return Ok(0);
		}
		let (size, _) = self.value_layout(sig)?;
		Ok(size.div_ceil(8).max(1) as u16)
	}
}

impl Default for Context<'_> {
	fn default() -> Self {
		Self::new()
	}
}

fn inflation_key<'l>(
	base: &'l crate::structured::method::MethodInfo<'l>,
	gc: &GenericContext<'l>,
) -> (usize, usize, usize) {
	(
		base as *const _ as usize,
		gc.class_inst.map(|i| i as *const _ as usize).unwrap_or(0),
		gc.method_inst.map(|i| i as *const _ as usize).unwrap_or(0),
	)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::structured::sig::{ElementType, TypeSig};

	#[test]
	fn signature_interning_is_idempotent() {
		let ctx = Context::new();
		let a = ctx.intern_sig(TypeSig::new_by_val(ElementType::I4));
		let b = ctx.intern_sig(TypeSig::new_by_val(ElementType::I4));
		assert!(std::ptr::eq(a, b));

		// intern(intern(s)) == intern(s)
		let again = ctx.intern_sig(*a);
		assert!(std::ptr::eq(a, again));

		let by_ref = ctx.intern_sig(TypeSig::new_by_ref(ElementType::I4));
		assert!(!std::ptr::eq(a, by_ref));
	}

	#[test]
	fn generic_instances_intern_by_argument_identity() {
		let ctx = Context::new();
		let i4 = ctx.intern_sig(TypeSig::new_by_val(ElementType::I4));
		let i8 = ctx.intern_sig(TypeSig::new_by_val(ElementType::I8));

		let a = ctx.intern_inst(&[i4, i8]);
		let b = ctx.intern_inst(&[i4, i8]);
		assert!(std::ptr::eq(a, b));
		assert!(!std::ptr::eq(a, ctx.intern_inst(&[i8, i4])));

		let generic_a = ctx.intern_generic_class(Gid::encode(1, 7), a);
		let generic_b = ctx.intern_generic_class(Gid::encode(1, 7), b);
		assert!(std::ptr::eq(generic_a, generic_b));
		assert!(!std::ptr::eq(
			generic_a,
			ctx.intern_generic_class(Gid::encode(1, 8), a)
		));
	}
}
