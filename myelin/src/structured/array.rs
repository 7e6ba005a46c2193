use tracing::trace;

use crate::error::{VmError, VmResult};
use crate::raw::heaps::table::{MethodAttributes, MethodImplAttributes, TypeAttributes};
use crate::raw::indices::metadata_token::MetadataToken;
use crate::structured::class::{Class, ClassExtra, ClassFamily, ClassInit};
use crate::structured::method::MethodInfo;
use crate::structured::sig::*;
use crate::structured::{Context, Gid, WellKnown, SZARRAY_INTERFACES};

impl<'l> Context<'l> {
	/// The interned single-dimension, zero-lower-bound array class for an
	/// element signature.
	pub fn szarray_class(&'l self, element: &'l TypeSig<'l>) -> VmResult<&'l Class<'l>> {
		if let Some(class) = self.szarray_classes.borrow().get(&(element as *const TypeSig)).copied() {
			return Ok(class);
		}

		let by_val = self.intern_sig(TypeSig::with_data(
			ElementType::SZArray,
			TypeSigData::Element(element),
		));
		let by_ref = self.intern_sig(TypeSig {
			by_ref: true,
			..*by_val
		});

		let class = self.new_array_class(element, 0, by_val, by_ref)?;
		self.szarray_classes
			.borrow_mut()
			.insert(element as *const TypeSig, class);
		Ok(class)
	}

	/// The interned multi-dimensional array class for `(element, rank)`.
	pub fn mdarray_class(&'l self, element: &'l TypeSig<'l>, rank: u8) -> VmResult<&'l Class<'l>> {
		if rank == 0 || rank > 32 {
			return Err(VmError::TypeLoad);
		}
		if let Some(class) = self
			.mdarray_classes
			.borrow()
			.get(&(element as *const TypeSig, rank))
			.copied()
		{
			return Ok(class);
		}

		let array = &*self.bump().alloc(ArrayType {
			element,
			rank,
			sizes: &[],
			bounds: &[],
		});
		let by_val = self.intern_sig(TypeSig::with_data(ElementType::Array, TypeSigData::Array(array)));
		let by_ref = self.intern_sig(TypeSig {
			by_ref: true,
			..*by_val
		});

		let class = self.new_array_class(element, rank, by_val, by_ref)?;
		self.mdarray_classes
			.borrow_mut()
			.insert((element as *const TypeSig, rank), class);
		Ok(class)
	}

	fn new_array_class(
		&'l self,
		element: &'l TypeSig<'l>,
		rank: u8,
		by_val: &'l TypeSig<'l>,
		by_ref: &'l TypeSig<'l>,
	) -> VmResult<&'l Class<'l>> {
		let element_class = self.class_from_sig(element)?;
		let system_array = self.well_known_class(WellKnown::Array)?;
		trace!(element = %element_class, rank, "creating array class");

		let name = {
			let mut name = String::with_capacity(element_class.name().len() + 2 + rank as usize);
			name.push_str(element_class.name());
			name.push('[');
			for _ in 1..rank.max(1) {
				name.push(',');
			}
			name.push(']');
			self.alloc_str(&name)
		};

		let mut extra = ClassExtra::ARRAY | ClassExtra::REFERENCE_TYPE;
		let element_reduce = self.reduce_type(element)?;
		if element_reduce == ReduceType::Ref {
			extra |= ClassExtra::HAS_REFERENCES;
		} else if element_reduce == ReduceType::Other {
			element_class.ensure_fields(self)?;
			if element_class.has_references() {
				extra |= ClassExtra::HAS_REFERENCES;
			}
		}

		let class = Class::alloc(
			self,
			element_class.module(),
			MetadataToken::from(crate::raw::indices::metadata_token::TypeDefToken(0)),
			Gid::NONE,
			ClassFamily::Array,
			element_class.namespace(),
			name,
			TypeAttributes::PUBLIC | TypeAttributes::SEALED,
			extra,
			None,
			None,
		);
		class.set_rank(rank);
		class.set_element_class(element_class);
		class.set_sigs(by_val, by_ref);
		class.set_parent(Some(system_array));
		class.set_alignment(PTR_SIZE as u8);

		// SZArrays carry the five generic collection interfaces; their vtable
		// blocks bind to corlib array helpers when those exist.
		if rank == 0 {
			let mut interfaces = vec![];
			let inst = self.intern_inst(&[element]);
			for (namespace, name) in SZARRAY_INTERFACES {
				let Some(interface) = self.corlib()?.get_class_by_name(self, namespace, name)? else {
					continue;
				};
				let generic = self.intern_generic_class(interface.gid(), inst);
				interfaces.push(self.class_from_generic_class(generic)?);
			}
			class.set_interfaces_raw(self.bump().alloc_slice_copy(&interfaces));
		}

		self.synthesize_array_methods(class, element, rank)?;
		class.mark_inited(ClassInit::METHODS);
		Ok(class)
	}

	/// `.ctor`, `Get`, `Set` and `Address` with parameter counts derived from
	/// the rank; they dispatch through array accessor thunks.
	fn synthesize_array_methods(
		&'l self,
		class: &'l Class<'l>,
		element: &'l TypeSig<'l>,
		rank: u8,
	) -> VmResult<()> {
		let void = self.intern_sig(TypeSig::new_by_val(ElementType::Void));
		let i4 = self.intern_sig(TypeSig::new_by_val(ElementType::I4));
		let element_by_ref = self.intern_sig(TypeSig {
			by_ref: true,
			..element.to_canonical()
		});
		let index_count = rank.max(1) as usize;

		let indices = vec![i4; index_count];
		let mut set_params = indices.clone();
		set_params.push(element);

		let ctor_flags = MethodAttributes::PUBLIC
			| MethodAttributes::SPECIAL_NAME
			| MethodAttributes::RT_SPECIAL_NAME;
		let accessor_flags = MethodAttributes::PUBLIC;

		let methods = [
			(".ctor", ctor_flags, void, indices.clone()),
			("Get", accessor_flags, element, indices.clone()),
			("Set", accessor_flags, void, set_params),
			("Address", accessor_flags, element_by_ref, indices),
		];

		let mut allocated = Vec::with_capacity(methods.len());
		for (name, flags, return_sig, params) in methods {
			allocated.push(MethodInfo::alloc(
				self,
				class,
				self.alloc_str(name),
				MetadataToken::from(crate::raw::indices::metadata_token::MethodDefToken(0)),
				flags,
				MethodImplAttributes::RUNTIME,
				return_sig,
				self.bump().alloc_slice_copy(&params),
				None,
				None,
			));
		}
		class.set_methods(self.bump().alloc_slice_copy(&allocated));
		Ok(())
	}
}
