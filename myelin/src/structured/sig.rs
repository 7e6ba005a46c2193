use std::cell::Cell;
use std::fmt::{Debug, Formatter};
use std::hash::{Hash, Hasher};

use myelin_derive::FromRepr;

use crate::structured::class::Class;
use crate::structured::Gid;

/// ECMA-335 element type constants, as they appear in signature blobs.
#[repr(u8)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, FromRepr)]
pub enum ElementType {
	End = 0x0,
	Void = 0x1,
	Boolean = 0x2,
	Char = 0x3,
	I1 = 0x4,
	U1 = 0x5,
	I2 = 0x6,
	U2 = 0x7,
	I4 = 0x8,
	U4 = 0x9,
	I8 = 0xA,
	U8 = 0xB,
	R4 = 0xC,
	R8 = 0xD,
	String = 0xE,
	Ptr = 0xF,
	ByRef = 0x10,
	ValueType = 0x11,
	Class = 0x12,
	Var = 0x13,
	Array = 0x14,
	GenericInst = 0x15,
	TypedByRef = 0x16,
	I = 0x18,
	U = 0x19,
	FnPtr = 0x1B,
	Object = 0x1C,
	SZArray = 0x1D,
	MVar = 0x1E,
	CModReqd = 0x1F,
	CModOpt = 0x20,
	Internal = 0x21,
	Modifier = 0x40,
	Sentinel = 0x41,
	Pinned = 0x45,
}

impl ElementType {
	/// Size and alignment of by-value primitives; `None` for composites.
	pub fn primitive_layout(&self) -> Option<(u32, u32)> {
		match self {
			ElementType::Boolean | ElementType::I1 | ElementType::U1 => Some((1, 1)),
			ElementType::Char | ElementType::I2 | ElementType::U2 => Some((2, 2)),
			ElementType::I4 | ElementType::U4 | ElementType::R4 => Some((4, 4)),
			ElementType::I8 | ElementType::U8 | ElementType::R8 => Some((8, 8)),
			ElementType::I | ElementType::U | ElementType::Ptr | ElementType::FnPtr => Some((PTR_SIZE, PTR_SIZE)),
			ElementType::String | ElementType::Object | ElementType::Class | ElementType::SZArray | ElementType::Array => {
				Some((PTR_SIZE, PTR_SIZE))
			},
			_ => None,
		}
	}

	pub fn is_primitive(&self) -> bool {
		matches!(
			self,
			ElementType::Void
				| ElementType::Boolean | ElementType::Char
				| ElementType::I1 | ElementType::U1
				| ElementType::I2 | ElementType::U2
				| ElementType::I4 | ElementType::U4
				| ElementType::I8 | ElementType::U8
				| ElementType::R4 | ElementType::R8
				| ElementType::I | ElementType::U
				| ElementType::String | ElementType::Object
				| ElementType::TypedByRef
		)
	}
}

pub const PTR_SIZE: u32 = std::mem::size_of::<usize>() as u32;

/// The interpreter classifies every signature into one of these to pick
/// opcode variants and to marshal call and return values.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ReduceType {
	Void,
	I1,
	U1,
	I2,
	U2,
	I4,
	I8,
	I,
	R4,
	R8,
	Ref,
	Other,
}

impl ReduceType {
	/// The number of 8-byte evaluation-stack slots a value of this shape needs
	/// when it is not `Other` (composites are sized separately).
	pub fn scalar_slot_count(&self) -> Option<u16> {
		match self {
			ReduceType::Void => Some(0),
			ReduceType::Other => None,
			_ => Some(1),
		}
	}
}

/// The tagged payload of a [`TypeSig`]; the element kind selects the variant.
#[derive(Copy, Clone)]
pub enum TypeSigData<'l> {
	None,
	/// ValueType and Class: the defining TypeDef.
	TypeDefGid(Gid),
	/// Ptr and SZArray: the element signature.
	Element(&'l TypeSig<'l>),
	/// Array: rank, optional sizes and bounds.
	Array(&'l ArrayType<'l>),
	/// GenericInst: base TypeDef plus instantiation.
	Generic(&'l GenericClass<'l>),
	/// Var and MVar: the declared parameter.
	Param(&'l GenericParam<'l>),
	/// Var and MVar before the owning container is known: just the index.
	ParamIndex(u16),
}

impl PartialEq for TypeSigData<'_> {
	fn eq(&self, other: &Self) -> bool {
		// Inner signatures, generic classes and parameters are interned (or
		// unique per declaration), so address identity is structural identity.
		match (self, other) {
			(TypeSigData::None, TypeSigData::None) => true,
			(TypeSigData::TypeDefGid(a), TypeSigData::TypeDefGid(b)) => a == b,
			(TypeSigData::Element(a), TypeSigData::Element(b)) => std::ptr::eq(*a, *b),
			(TypeSigData::Array(a), TypeSigData::Array(b)) => a == b,
			(TypeSigData::Generic(a), TypeSigData::Generic(b)) => std::ptr::eq(*a, *b),
			(TypeSigData::Param(a), TypeSigData::Param(b)) => std::ptr::eq(*a, *b),
			(TypeSigData::ParamIndex(a), TypeSigData::ParamIndex(b)) => a == b,
			_ => false,
		}
	}
}

impl Eq for TypeSigData<'_> {}

impl Hash for TypeSigData<'_> {
	fn hash<H: Hasher>(&self, state: &mut H) {
		std::mem::discriminant(self).hash(state);
		match self {
			TypeSigData::None => {},
			TypeSigData::TypeDefGid(gid) => gid.hash(state),
			TypeSigData::Element(sig) => (*sig as *const TypeSig).hash(state),
			TypeSigData::Array(array) => array.hash(state),
			TypeSigData::Generic(generic) => (*generic as *const GenericClass).hash(state),
			TypeSigData::Param(param) => (*param as *const GenericParam).hash(state),
			TypeSigData::ParamIndex(idx) => idx.hash(state),
		}
	}
}

impl Debug for TypeSigData<'_> {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			TypeSigData::None => write!(f, "None"),
			TypeSigData::TypeDefGid(gid) => write!(f, "TypeDefGid({gid:?})"),
			TypeSigData::Element(sig) => write!(f, "Element({sig:?})"),
			TypeSigData::Array(array) => write!(f, "Array(rank {})", array.rank),
			TypeSigData::Generic(generic) => write!(f, "Generic({:?})", generic.base_gid),
			TypeSigData::Param(param) => write!(f, "Param({})", param.name),
			TypeSigData::ParamIndex(idx) => write!(f, "ParamIndex({idx})"),
		}
	}
}

/// A canonical, interned type description. Equality of canonical signatures
/// is pointer equality; the intern pool guarantees it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TypeSig<'l> {
	pub element_type: ElementType,
	pub by_ref: bool,
	pub pinned: bool,
	/// Number of custom modifiers stripped while reading.
	pub num_mods: u8,
	/// Recognized pseudo-attribute bits folded from `In`/`Out`/`Optional`
	/// modifiers; matches the low bits of `ParamAttributes`.
	pub attrs: u16,
	pub data: TypeSigData<'l>,
}

impl<'l> TypeSig<'l> {
	pub const fn new_by_val(element_type: ElementType) -> Self {
		Self {
			element_type,
			by_ref: false,
			pinned: false,
			num_mods: 0,
			attrs: 0,
			data: TypeSigData::None,
		}
	}

	pub const fn new_by_ref(element_type: ElementType) -> Self {
		Self { by_ref: true, ..Self::new_by_val(element_type) }
	}

	pub const fn with_data(element_type: ElementType, data: TypeSigData<'l>) -> Self {
		Self { data, ..Self::new_by_val(element_type) }
	}

	pub fn is_void(&self) -> bool {
		self.element_type == ElementType::Void
	}

	pub fn is_canonical(&self) -> bool {
		!self.pinned && self.num_mods == 0
	}

	/// Strips pinning and modifier bookkeeping; payload and by-ref survive.
	pub fn to_canonical(&self) -> Self {
		Self {
			element_type: self.element_type,
			by_ref: self.by_ref,
			pinned: false,
			num_mods: 0,
			attrs: 0,
			data: self.data,
		}
	}

	pub fn to_canonical_without_byref(&self) -> Self {
		Self { by_ref: false, ..self.to_canonical() }
	}
}

/// Multi-dimensional array shape. `sizes` and `bounds` are rarely present and
/// stripped by canonicalization.
#[derive(Debug, Clone)]
pub struct ArrayType<'l> {
	pub element: &'l TypeSig<'l>,
	pub rank: u8,
	pub sizes: &'l [u32],
	pub bounds: &'l [i32],
}

impl ArrayType<'_> {
	pub fn is_canonical(&self) -> bool {
		self.sizes.is_empty() && self.bounds.is_empty()
	}
}

impl PartialEq for ArrayType<'_> {
	fn eq(&self, other: &Self) -> bool {
		std::ptr::eq(self.element, other.element)
			&& self.rank == other.rank
			&& self.sizes == other.sizes
			&& self.bounds == other.bounds
	}
}

impl Eq for ArrayType<'_> {}

impl Hash for ArrayType<'_> {
	fn hash<H: Hasher>(&self, state: &mut H) {
		(self.element as *const TypeSig).hash(state);
		self.rank.hash(state);
		self.sizes.hash(state);
		self.bounds.hash(state);
	}
}

/// An interned, immutable tuple of type signatures instantiating a generic
/// type or method.
#[derive(Debug)]
pub struct GenericInst<'l> {
	pub args: &'l [&'l TypeSig<'l>],
}

impl GenericInst<'_> {
	pub fn len(&self) -> usize {
		self.args.len()
	}

	pub fn is_empty(&self) -> bool {
		self.args.is_empty()
	}
}

impl PartialEq for GenericInst<'_> {
	fn eq(&self, other: &Self) -> bool {
		self.args.len() == other.args.len()
			&& self.args.iter().zip(other.args).all(|(a, b)| std::ptr::eq(*a, *b))
	}
}

impl Eq for GenericInst<'_> {}

impl Hash for GenericInst<'_> {
	fn hash<H: Hasher>(&self, state: &mut H) {
		for arg in self.args {
			(*arg as *const TypeSig).hash(state);
		}
	}
}

/// An interned `(base type, instantiation)` pair with cached signatures and
/// the lazily created runtime class.
pub struct GenericClass<'l> {
	pub base_gid: Gid,
	pub inst: &'l GenericInst<'l>,
	pub by_val_sig: Cell<Option<&'l TypeSig<'l>>>,
	pub by_ref_sig: Cell<Option<&'l TypeSig<'l>>>,
	pub cache_class: Cell<Option<&'l Class<'l>>>,
}

impl Debug for GenericClass<'_> {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "GenericClass({:?}, {} args)", self.base_gid, self.inst.len())
	}
}

/// A declared generic parameter. Identity is the declaration; two parameters
/// never compare equal structurally.
pub struct GenericParam<'l> {
	pub gid: Gid,
	pub name: &'l str,
	pub flags: u16,
	pub index: u16,
	pub constraints: Cell<&'l [&'l TypeSig<'l>]>,
	pub owner: Cell<Option<&'l GenericContainer<'l>>>,
	pub by_val_sig: Cell<Option<&'l TypeSig<'l>>>,
	pub by_ref_sig: Cell<Option<&'l TypeSig<'l>>>,
}

impl Debug for GenericParam<'_> {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "GenericParam({} #{})", self.name, self.index)
	}
}

/// The owner record attached to a TypeDef or MethodDef declaring generic
/// parameters.
pub struct GenericContainer<'l> {
	pub params: &'l [GenericParam<'l>],
	pub owner_gid: Gid,
	pub is_method: bool,
}

impl GenericContainer<'_> {
	pub fn param_count(&self) -> usize {
		self.params.len()
	}
}

impl Debug for GenericContainer<'_> {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"GenericContainer({:?}, {} params, {})",
			self.owner_gid,
			self.params.len(),
			match self.is_method {
				true => "method",
				false => "type",
			}
		)
	}
}

/// The pair of declaring containers in scope while reading a signature.
/// A method's container always travels with its parent class container.
#[derive(Debug, Default, Copy, Clone)]
pub struct GenericContainerContext<'l> {
	pub class: Option<&'l GenericContainer<'l>>,
	pub method: Option<&'l GenericContainer<'l>>,
}

/// The pair of instantiations in scope while inflating a signature.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct GenericContext<'l> {
	pub class_inst: Option<&'l GenericInst<'l>>,
	pub method_inst: Option<&'l GenericInst<'l>>,
}

impl GenericContext<'_> {
	pub fn is_empty(&self) -> bool {
		self.class_inst.is_none() && self.method_inst.is_none()
	}
}

/// A decoded method signature: calling convention, return type, parameters.
#[derive(Debug, Clone)]
pub struct MethodSig<'l> {
	pub flags: u8,
	pub generic_param_count: u8,
	pub return_type: &'l TypeSig<'l>,
	pub params: Vec<&'l TypeSig<'l>>,
}

impl MethodSig<'_> {
	pub fn has_this(&self) -> bool {
		self.flags & SIG_HAS_THIS != 0
	}

	pub fn explicit_this(&self) -> bool {
		self.flags & SIG_EXPLICIT_THIS != 0
	}
}

/// A decoded property signature.
#[derive(Debug, Clone)]
pub struct PropertySig<'l> {
	pub type_sig: &'l TypeSig<'l>,
	pub params: Vec<&'l TypeSig<'l>>,
}

pub const SIG_TYPE_MASK: u8 = 0x0F;
pub const SIG_DEFAULT: u8 = 0x0;
pub const SIG_VARARG: u8 = 0x5;
pub const SIG_FIELD: u8 = 0x6;
pub const SIG_LOCAL_VAR: u8 = 0x7;
pub const SIG_PROPERTY: u8 = 0x8;
pub const SIG_METHOD_SPEC: u8 = 0xA;
pub const SIG_GENERIC: u8 = 0x10;
pub const SIG_HAS_THIS: u8 = 0x20;
pub const SIG_EXPLICIT_THIS: u8 = 0x40;
