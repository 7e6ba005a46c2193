use std::cell::RefCell;

use bumpalo::Bump;
use fxhash::FxHashMap;

use crate::structured::sig::{GenericClass, GenericInst, TypeSig};
use crate::structured::Gid;

/// The append-only intern pools for signatures, generic instantiations and
/// generic classes. The pools own the canonical allocations; every other
/// holder borrows them, so identity comparison is pointer comparison.
#[derive(Default)]
pub(crate) struct Interner<'l> {
	sigs: RefCell<FxHashMap<TypeSig<'l>, &'l TypeSig<'l>>>,
	insts: RefCell<FxHashMap<Vec<*const TypeSig<'l>>, &'l GenericInst<'l>>>,
	generic_classes: RefCell<FxHashMap<(Gid, *const GenericInst<'l>), &'l GenericClass<'l>>>,
}

impl<'l> Interner<'l> {
	pub fn intern_sig(&self, bump: &'l Bump, sig: TypeSig<'l>) -> &'l TypeSig<'l> {
		if let Some(interned) = self.sigs.borrow().get(&sig).copied() {
			return interned;
		}
		let interned = &*bump.alloc(sig);
		self.sigs.borrow_mut().insert(sig, interned);
		interned
	}

	pub fn intern_inst(&self, bump: &'l Bump, args: &[&'l TypeSig<'l>]) -> &'l GenericInst<'l> {
		let key: Vec<*const TypeSig> = args.iter().map(|sig| *sig as *const TypeSig).collect();
		if let Some(interned) = self.insts.borrow().get(&key).copied() {
			return interned;
		}
		let args = bump.alloc_slice_copy(args);
		let interned = &*bump.alloc(GenericInst { args });
		self.insts.borrow_mut().insert(key, interned);
		interned
	}

	pub fn intern_generic_class(
		&self,
		bump: &'l Bump,
		base_gid: Gid,
		inst: &'l GenericInst<'l>,
	) -> &'l GenericClass<'l> {
		let key = (base_gid, inst as *const GenericInst);
		if let Some(interned) = self.generic_classes.borrow().get(&key).copied() {
			return interned;
		}
		let interned = &*bump.alloc(GenericClass {
			base_gid,
			inst,
			by_val_sig: Default::default(),
			by_ref_sig: Default::default(),
			cache_class: Default::default(),
		});
		self.generic_classes.borrow_mut().insert(key, interned);
		interned
	}
}
