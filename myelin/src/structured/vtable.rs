use fxhash::FxHashMap;
use tracing::trace;

use crate::error::{VmError, VmResult};
use crate::raw::heaps::table as tables;
use crate::raw::indices::metadata_token::MetadataToken;
use crate::structured::class::{Class, ClassFamily, ClassInit, InterfaceOffset, VirtualInvokeData};
use crate::structured::method::{MethodInfo, INVALID_METHOD_SLOT};
use crate::structured::sig::*;
use crate::structured::Context;

/// Signature equivalence for override matching: interned pointers, with
/// generic method variables compared by index so a derived declaration's
/// `MVAR 0` matches the base declaration's.
fn sigs_equivalent<'l>(a: &TypeSig<'l>, b: &TypeSig<'l>) -> bool {
	if std::ptr::eq(a, b) {
		return true;
	}
	if a.element_type != b.element_type || a.by_ref != b.by_ref {
		return false;
	}
	match (a.data, b.data) {
		(TypeSigData::Param(pa), TypeSigData::Param(pb)) => pa.index == pb.index,
		(TypeSigData::ParamIndex(ia), TypeSigData::Param(pb)) => ia == pb.index,
		(TypeSigData::Param(pa), TypeSigData::ParamIndex(ib)) => pa.index == ib,
		(TypeSigData::Element(ea), TypeSigData::Element(eb)) => sigs_equivalent(ea, eb),
		(TypeSigData::Array(aa), TypeSigData::Array(ab)) => {
			aa.rank == ab.rank && sigs_equivalent(aa.element, ab.element)
		},
		(TypeSigData::Generic(ga), TypeSigData::Generic(gb)) => {
			ga.base_gid == gb.base_gid
				&& ga.inst.args.len() == gb.inst.args.len()
				&& ga.inst.args.iter().zip(gb.inst.args).all(|(x, y)| sigs_equivalent(x, y))
		},
		_ => false,
	}
}

fn methods_match<'l>(a: &MethodInfo<'l>, b: &MethodInfo<'l>) -> bool {
	a.name() == b.name()
		&& a.params().len() == b.params().len()
		&& sigs_equivalent(a.return_sig(), b.return_sig())
		&& a.params().iter().zip(b.params()).all(|(x, y)| sigs_equivalent(x, y))
}

impl<'l> Class<'l> {
	/// Virtual-table phase: inherit the parent's class-virtual region, apply
	/// overrides and new slots, then append one contiguous block per
	/// implemented interface.
	pub fn ensure_vtable(&'l self, ctx: &'l Context<'l>) -> VmResult<()> {
		if !self.begin_phase(ClassInit::VTABLE)? {
			return Ok(());
		}
		self.ensure_methods(ctx)?;
		self.ensure_interfaces(ctx)?;
		trace!(class = %self, "init vtable");

		if self.is_interface() {
			// Interface vtables only number the interface's own methods;
			// dispatch always goes through an implementing class's block.
			let mut slots = vec![];
			for method in self.methods() {
				if method.is_virtual() {
					method.set_slot(slots.len() as u16);
					slots.push(VirtualInvokeData { method, method_impl: method });
				}
			}
			self.set_primary_vtable_slots(slots.len() as u16);
			self.set_vtable(ctx.bump().alloc_slice_copy(&slots));
			self.end_phase(ClassInit::VTABLE);
			return Ok(());
		}

		let mut primary: Vec<VirtualInvokeData<'l>> = match self.parent() {
			None => vec![],
			Some(parent) => {
				parent.ensure_vtable(ctx)?;
				parent.vtable()[..parent.primary_vtable_slots() as usize].to_vec()
			},
		};

		for method in self.methods() {
			if !method.is_virtual() {
				continue;
			}
			let inherited = match method.is_new_slot() {
				true => None,
				false => primary
					.iter()
					.position(|entry| methods_match(entry.method, method)),
			};
			match inherited {
				Some(slot) => {
					primary[slot].method_impl = method;
					method.set_slot(slot as u16);
				},
				None => {
					if primary.len() >= INVALID_METHOD_SLOT as usize {
						return Err(VmError::TypeLoad);
					}
					method.set_slot(primary.len() as u16);
					primary.push(VirtualInvokeData { method, method_impl: method });
				},
			}
		}

		// Explicit overrides from the MethodImpl table. Interface
		// declarations are deferred into the block construction below.
		let mut interface_overrides: FxHashMap<usize, &'l MethodInfo<'l>> = Default::default();
		if self.family() != ClassFamily::Array {
			let gcc = GenericContainerContext {
				class: self.base_container(ctx)?,
				method: None,
			};
			let gc = self.generic_context();
			if let Ok(tables_heap) = self.module().tables() {
				if let Some(table) = tables_heap.get_table::<tables::MethodImplTable>() {
					for row in table.rows() {
						if row.class.rid() != self.type_def_rid() {
							continue;
						}
						let body = self.module().get_method_by_token(
							ctx,
							MetadataToken::from(row.body),
							&gcc,
							gc.as_ref(),
						)?;
						let decl = self.module().get_method_by_token(
							ctx,
							MetadataToken::from(row.declaration),
							&gcc,
							gc.as_ref(),
						)?;
						if decl.parent().is_interface() {
							interface_overrides.insert(decl as *const _ as usize, body);
						} else {
							decl.parent().ensure_vtable(ctx)?;
							let slot = decl.slot();
							if slot == INVALID_METHOD_SLOT || slot as usize >= primary.len() {
								return Err(VmError::TypeLoad);
							}
							primary[slot as usize].method_impl = body;
						}
					}
				}
			}
		}

		let primary_len = primary.len();
		let mut vtable = primary;
		let mut offsets = Vec::with_capacity(self.interfaces().len());

		for interface in self.interfaces() {
			interface.ensure_vtable(ctx)?;
			let base_offset = vtable.len();
			if base_offset + interface.vtable().len() > u16::MAX as usize {
				return Err(VmError::TypeLoad);
			}
			for entry in interface.vtable() {
				let declared = entry.method;
				let implementation = match interface_overrides.get(&(declared as *const _ as usize)) {
					Some(body) => Some(*body),
					None => self.find_interface_implementation(ctx, declared)?,
				};
				vtable.push(VirtualInvokeData {
					method: declared,
					// Unimplemented slots dispatch back to the interface
					// method and fault as MissingMethod at the call site.
					method_impl: implementation.unwrap_or(declared),
				});
			}
			offsets.push(InterfaceOffset {
				interface,
				offset: base_offset as u16,
			});
		}

		self.set_primary_vtable_slots(primary_len as u16);
		self.set_vtable(ctx.bump().alloc_slice_copy(&vtable));
		self.set_interface_offsets(ctx.bump().alloc_slice_copy(&offsets));
		self.end_phase(ClassInit::VTABLE);
		Ok(())
	}

	/// The most-derived class method implementing an interface method.
	fn find_interface_implementation(
		&'l self,
		ctx: &'l Context<'l>,
		declared: &'l MethodInfo<'l>,
	) -> VmResult<Option<&'l MethodInfo<'l>>> {
		let mut current = Some(self);
		while let Some(class) = current {
			class.ensure_methods(ctx)?;
			let found = class
				.methods()
				.iter()
				.find(|m| m.is_virtual() && methods_match(m, declared))
				.copied();
			if let Some(implementation) = found {
				return Ok(Some(implementation));
			}
			class.ensure_super_types(ctx)?;
			current = class.parent();
		}
		Ok(None)
	}

	/// Dispatch data for a primary vtable slot.
	pub fn vtable_entry(&self, slot: u16) -> VmResult<VirtualInvokeData<'l>> {
		self.vtable()
			.get(slot as usize)
			.copied()
			.ok_or(VmError::MissingMethod)
	}

	/// Dispatch data for slot `k` of an implemented interface.
	pub fn interface_entry(
		&'l self,
		interface: &'l Class<'l>,
		slot: u16,
	) -> VmResult<VirtualInvokeData<'l>> {
		let offset = self
			.interface_offsets()
			.iter()
			.find(|o| std::ptr::eq(o.interface, interface))
			.ok_or(VmError::InvalidCast)?;
		self.vtable_entry(offset.offset + slot)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn generic_param_index_equivalence() {
		let a = TypeSig::with_data(ElementType::MVar, TypeSigData::ParamIndex(0));
		let b = TypeSig::with_data(ElementType::MVar, TypeSigData::ParamIndex(0));
		let c = TypeSig::with_data(ElementType::MVar, TypeSigData::ParamIndex(1));
		assert!(sigs_equivalent(&a, &b));
		assert!(!sigs_equivalent(&a, &c));
		assert!(!sigs_equivalent(&a, &TypeSig::new_by_val(ElementType::I4)));
	}
}
