//! P/invoke resolution: the ImplMap row names the import and its module;
//! actual foreign-function dispatch is an external collaborator, so every
//! resolved import currently binds to the not-implemented stub. The
//! resolution path (and its failure behavior) is what call sites rely on.

use tracing::debug;

use crate::error::{VmError, VmResult};
use crate::raw::indices::coded_index::MemberForwarded;
use crate::structured::MethodInfo;
use crate::vm::runtime::Runtime;
use crate::vm::shim::{not_implemented_invoker, InvokeFn};

pub fn resolve<'l>(rt: &'l Runtime<'l>, method: &'l MethodInfo<'l>) -> VmResult<InvokeFn> {
	let module = method.parent().module();
	let rid = method.token().index() as u32;
	let coded = MemberForwarded::try_from((rid << 1) | 1).map_err(|_| VmError::BadImageFormat)?;

	match module.impl_map_of(coded) {
		None => Ok(not_implemented_invoker),
		Some(row) => {
			let import_name = module.get_string(row.import_name)?;
			let scope = module.module_ref_row(row.import_scope.rid())?;
			let scope_name = module.get_string(scope.name)?;
			debug!(import = import_name, module = scope_name, "unresolved p/invoke import");
			let _ = rt;
			Ok(not_implemented_invoker)
		},
	}
}
