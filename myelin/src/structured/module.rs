use std::cell::RefCell;
use std::collections::HashMap;

use derivative::Derivative;
use fxhash::FxHashMap;
use nohash_hasher::BuildNoHashHasher;
use tracing::debug;
use uuid::Uuid;

use crate::error::{VmError, VmResult};
use crate::raw::body::MethodBody;
use crate::raw::heaps::table::{self as tables, Table, TableHeap, TableKind};
use crate::raw::heaps::{BlobIndex, GuidIndex, StringIndex};
use crate::raw::image::Image;
use crate::raw::indices::metadata_token::{MetadataToken, MetadataTokenKind};
use crate::structured::class::Class;
use crate::structured::field::FieldInfo;
use crate::structured::method::MethodInfo;
use crate::structured::sig::{GenericContainer, GenericContainerContext};
use crate::structured::{Context, Gid, MAX_METADATA_RID};

pub(crate) type IntMap<K, V> = HashMap<K, V, BuildNoHashHasher<K>>;

#[derive(Clone, Eq, PartialEq, Hash, Derivative)]
#[derivative(Debug)]
pub struct AssemblyName<'l> {
	pub major_version: u16,
	pub minor_version: u16,
	pub build_number: u16,
	pub revision_number: u16,
	pub flags: tables::AssemblyFlags,
	#[derivative(Debug = "ignore")]
	pub public_key: &'l [u8],
	pub name: &'l str,
	pub culture: &'l str,
}

/// A resolved member reference: either a field or a method.
#[derive(Debug, Copy, Clone)]
pub enum MemberHandle<'l> {
	Field(&'l FieldInfo<'l>),
	Method(&'l MethodInfo<'l>),
}

/// One loaded module and every cache hanging off it. Rows stay in the raw
/// [`Image`]; this type owns the resolved-entity side.
#[derive(Derivative)]
#[derivative(Debug)]
pub struct ModuleDef<'l> {
	#[derivative(Debug = "ignore")]
	image: Option<Image<'l>>,
	id: u32,
	name: &'l str,
	mvid: Option<Uuid>,
	assembly_name: Option<AssemblyName<'l>>,
	#[derivative(Debug = "ignore")]
	pub(crate) classes: RefCell<IntMap<u32, &'l Class<'l>>>,
	#[derivative(Debug = "ignore")]
	pub(crate) synthetic_classes: RefCell<FxHashMap<(&'l str, &'l str), &'l Class<'l>>>,
	#[derivative(Debug = "ignore")]
	pub(crate) synthetic_methods: RefCell<IntMap<u32, &'l MethodInfo<'l>>>,
	#[derivative(Debug = "ignore")]
	pub(crate) synthetic_fields: RefCell<IntMap<u32, &'l FieldInfo<'l>>>,
	#[derivative(Debug = "ignore")]
	pub(crate) synthetic_bodies: RefCell<IntMap<u32, MethodBody<'l>>>,
	#[derivative(Debug = "ignore")]
	generic_containers: RefCell<IntMap<u32, Option<&'l GenericContainer<'l>>>>,
	#[derivative(Debug = "ignore")]
	type_names: RefCell<Option<FxHashMap<(&'l str, &'l str), u32>>>,
	#[derivative(Debug = "ignore")]
	generic_param_ranges: RefCell<Option<IntMap<u32, (u32, u32)>>>,
	#[derivative(Debug = "ignore")]
	nested_class_ranges: RefCell<Option<IntMap<u32, (u32, u32)>>>,
	#[derivative(Debug = "ignore")]
	interface_impl_ranges: RefCell<Option<IntMap<u32, (u32, u32)>>>,
}

macro_rules! row_accessor {
	($fn_name: ident, $table: ty, $row: ty, $err: expr) => {
		pub fn $fn_name(&self, rid: u32) -> VmResult<$row> {
			let table = self.tables()?.get_table::<$table>().ok_or($err)?;
			table.get(rid as usize).cloned().ok_or($err)
		}
	};
}

impl<'l> ModuleDef<'l> {
	#[tracing::instrument(skip_all, fields(id))]
	pub(crate) fn load(ctx: &'l Context<'l>, data: &'l [u8], id: u32) -> VmResult<&'l ModuleDef<'l>> {
		let image = Image::read(data)?;
		let tables = image.tables().ok_or(VmError::BadImageFormat)?;
		let strings = *image.strings().ok_or(VmError::BadImageFormat)?;
		let guids = *image.guids().ok_or(VmError::BadImageFormat)?;

		let module_row = tables
			.get_table::<tables::ModuleTable>()
			.and_then(|t| t.get(1).cloned())
			.ok_or(VmError::BadImageFormat)?;

		let assembly_name = match tables.get_table::<tables::AssemblyTable>().and_then(|t| t.get(1).cloned()) {
			None => None,
			Some(row) => Some(AssemblyName {
				major_version: row.major_version,
				minor_version: row.minor_version,
				build_number: row.build_number,
				revision_number: row.revision_number,
				flags: row.flags,
				public_key: image
					.blobs()
					.and_then(|b| b.get(row.public_key))
					.unwrap_or(&[]),
				name: ctx.alloc_str(strings.get(row.name).ok_or(VmError::BadImageFormat)?),
				culture: ctx.alloc_str(strings.get(row.culture).unwrap_or("")),
			}),
		};

		let name = match &assembly_name {
			Some(name) => name.name,
			None => ctx.alloc_str(strings.get(module_row.name).ok_or(VmError::BadImageFormat)?),
		};
		let mvid = guids.get(module_row.mv_id);

		Ok(ctx.bump().alloc(ModuleDef {
			image: Some(image),
			id,
			name,
			mvid,
			assembly_name,
			classes: Default::default(),
			synthetic_classes: Default::default(),
			synthetic_methods: Default::default(),
			synthetic_fields: Default::default(),
			synthetic_bodies: Default::default(),
			generic_containers: Default::default(),
			type_names: Default::default(),
			generic_param_ranges: Default::default(),
			nested_class_ranges: Default::default(),
			interface_impl_ranges: Default::default(),
		}))
	}

	/// An imageless module for runtime-synthesized classes. Row lookups on it
	/// fail with `BadImageFormat`.
	pub(crate) fn synthetic(ctx: &'l Context<'l>, name: &str, id: u32) -> &'l ModuleDef<'l> {
		ctx.bump().alloc(ModuleDef {
			image: None,
			id,
			name: ctx.alloc_str(name),
			mvid: None,
			assembly_name: None,
			classes: Default::default(),
			synthetic_classes: Default::default(),
			synthetic_methods: Default::default(),
			synthetic_fields: Default::default(),
			synthetic_bodies: Default::default(),
			generic_containers: Default::default(),
			type_names: Default::default(),
			generic_param_ranges: Default::default(),
			nested_class_ranges: Default::default(),
			interface_impl_ranges: Default::default(),
		})
	}

	pub fn id(&self) -> u32 {
		self.id
	}

	pub fn name(&self) -> &'l str {
		self.name
	}

	pub fn mvid(&self) -> Option<Uuid> {
		self.mvid
	}

	pub fn assembly_name(&self) -> Option<&AssemblyName<'l>> {
		self.assembly_name.as_ref()
	}

	pub fn image(&self) -> Option<&Image<'l>> {
		self.image.as_ref()
	}

	pub(crate) fn is_corlib_by_name(&self) -> bool {
		matches!(self.name, "mscorlib" | "System.Private.CoreLib" | "System.Runtime" | "corlib")
	}

	pub fn encode_gid(&self, rid: u32) -> VmResult<Gid> {
		match rid <= MAX_METADATA_RID {
			true => Ok(Gid::encode(self.id, rid)),
			false => Err(VmError::BadImageFormat),
		}
	}

	// ### Heap access

	pub(crate) fn tables(&self) -> VmResult<&TableHeap> {
		self.image
			.as_ref()
			.and_then(|i| i.tables())
			.ok_or(VmError::BadImageFormat)
	}

	pub fn get_string(&self, index: StringIndex) -> VmResult<&'l str> {
		let image = self.image.as_ref().ok_or(VmError::BadImageFormat)?;
		let strings = image.strings().ok_or(VmError::BadImageFormat)?;
		strings.get(index).ok_or(VmError::BadImageFormat)
	}

	pub fn get_blob(&self, index: BlobIndex) -> VmResult<&'l [u8]> {
		let image = self.image.as_ref().ok_or(VmError::BadImageFormat)?;
		let blobs = image.blobs().ok_or(VmError::BadImageFormat)?;
		blobs.get(index).ok_or(VmError::BadImageFormat)
	}

	/// UTF-16 code units of the `#US` entry at `offset`.
	pub fn get_user_string(&self, offset: usize) -> VmResult<Vec<u16>> {
		let image = self.image.as_ref().ok_or(VmError::BadImageFormat)?;
		let heap = image.user_strings().ok_or(VmError::BadImageFormat)?;
		let str = heap.get(offset).ok_or(VmError::BadImageFormat)?;
		Ok(str.code_units().collect())
	}

	pub fn guid(&self, index: GuidIndex) -> Option<Uuid> {
		self.image.as_ref()?.guids()?.get(index)
	}

	// ### Typed row access

	row_accessor!(type_def_row, tables::TypeDefTable, tables::TypeDef, VmError::BadImageFormat);
	row_accessor!(type_ref_row, tables::TypeRefTable, tables::TypeRef, VmError::BadImageFormat);
	row_accessor!(type_spec_row, tables::TypeSpecTable, tables::TypeSpec, VmError::BadImageFormat);
	row_accessor!(field_row, tables::FieldTable, tables::Field, VmError::BadImageFormat);
	row_accessor!(method_def_row, tables::MethodDefTable, tables::MethodDef, VmError::BadImageFormat);
	row_accessor!(param_row, tables::ParamTable, tables::Param, VmError::BadImageFormat);
	row_accessor!(member_ref_row, tables::MemberRefTable, tables::MemberRef, VmError::BadImageFormat);
	row_accessor!(method_spec_row, tables::MethodSpecTable, tables::MethodSpec, VmError::BadImageFormat);
	row_accessor!(interface_impl_row, tables::InterfaceImplTable, tables::InterfaceImpl, VmError::BadImageFormat);
	row_accessor!(generic_param_row, tables::GenericParamTable, tables::GenericParam, VmError::BadImageFormat);
	row_accessor!(nested_class_row, tables::NestedClassTable, tables::NestedClass, VmError::BadImageFormat);
	row_accessor!(stand_alone_sig_row, tables::StandAloneSigTable, tables::StandAloneSig, VmError::BadImageFormat);
	row_accessor!(module_ref_row, tables::ModuleRefTable, tables::ModuleRef, VmError::BadImageFormat);
	row_accessor!(assembly_ref_row, tables::AssemblyRefTable, tables::AssemblyRef, VmError::BadImageFormat);
	row_accessor!(exported_type_row, tables::ExportedTypeTable, tables::ExportedType, VmError::BadImageFormat);
	row_accessor!(custom_attribute_row, tables::CustomAttributeTable, tables::CustomAttribute, VmError::BadImageFormat);

	pub fn row_count(&self, kind: TableKind) -> usize {
		self.tables().map(|t| t.row_count(kind)).unwrap_or(0)
	}

	// ### "Sort order implies ownership" lookups

	/// Rid range `[start, end)` of fields belonging to the type-def `rid`,
	/// derived from the `field_list` run columns.
	pub fn field_range_of_type_def(&self, rid: u32) -> VmResult<(u32, u32)> {
		let start = self.type_def_row(rid)?.field_list.rid();
		let end = match self.type_def_row(rid + 1) {
			Ok(next) => next.field_list.rid(),
			Err(_) => self.row_count(TableKind::Field) as u32 + 1,
		};
		Ok((start, end))
	}

	pub fn method_range_of_type_def(&self, rid: u32) -> VmResult<(u32, u32)> {
		let start = self.type_def_row(rid)?.method_list.rid();
		let end = match self.type_def_row(rid + 1) {
			Ok(next) => next.method_list.rid(),
			Err(_) => self.row_count(TableKind::MethodDef) as u32 + 1,
		};
		Ok((start, end))
	}

	pub fn param_range_of_method(&self, rid: u32) -> VmResult<(u32, u32)> {
		let start = self.method_def_row(rid)?.param_list.rid();
		let end = match self.method_def_row(rid + 1) {
			Ok(next) => next.param_list.rid(),
			Err(_) => self.row_count(TableKind::Param) as u32 + 1,
		};
		Ok((start, end))
	}

	/// The type-def owning the field `rid`: the last type-def whose
	/// `field_list` start is `<= rid`.
	pub fn type_def_of_field(&self, rid: u32) -> VmResult<u32> {
		self.find_last_type_def_less_equal(rid, |row| row.field_list.rid())
	}

	pub fn type_def_of_method(&self, rid: u32) -> VmResult<u32> {
		self.find_last_type_def_less_equal(rid, |row| row.method_list.rid())
	}

	fn find_last_type_def_less_equal(
		&self,
		rid: u32,
		key: impl Fn(&tables::TypeDef) -> u32,
	) -> VmResult<u32> {
		let table = self
			.tables()?
			.get_table::<tables::TypeDefTable>()
			.ok_or(VmError::BadImageFormat)?;
		let len = table.len() as u32;
		let (mut lo, mut hi) = (1u32, len + 1);
		while lo < hi {
			let mid = (lo + hi) / 2;
			let start = key(table.get(mid as usize).ok_or(VmError::BadImageFormat)?);
			match start <= rid {
				true => lo = mid + 1,
				false => hi = mid,
			}
		}
		match lo > 1 {
			true => Ok(lo - 1),
			false => Err(VmError::BadImageFormat),
		}
	}

	/// Generic-param rid range for `owner` (a `TypeOrMethodDef` raw value).
	/// The owner → range map is built once, on first query.
	pub fn generic_param_range_of_owner(&self, owner_raw: u32) -> VmResult<Option<(u32, u32)>> {
		let mut ranges = self.generic_param_ranges.borrow_mut();
		let map = match &mut *ranges {
			Some(map) => map,
			slot @ None => {
				let mut map: IntMap<u32, (u32, u32)> = Default::default();
				if let Ok(tables_heap) = self.tables() {
					if let Some(table) = tables_heap.get_table::<tables::GenericParamTable>() {
						for (i, row) in table.rows().enumerate() {
							let rid = i as u32 + 1;
							let key = raw_type_or_method_def(row.owner);
							let entry = map.entry(key).or_insert((rid, rid));
							entry.1 = rid;
						}
					}
				}
				slot.insert(map)
			},
		};
		Ok(map.get(&owner_raw).map(|(start, end)| (*start, *end + 1)))
	}

	/// Nested-class rid range for an enclosing type-def rid.
	pub fn nested_class_range_of_enclosing(&self, enclosing_rid: u32) -> Option<(u32, u32)> {
		let mut ranges = self.nested_class_ranges.borrow_mut();
		let map = match &mut *ranges {
			Some(map) => map,
			slot @ None => {
				let mut map: IntMap<u32, (u32, u32)> = Default::default();
				if let Ok(tables_heap) = self.tables() {
					if let Some(table) = tables_heap.get_table::<tables::NestedClassTable>() {
						for (i, row) in table.rows().enumerate() {
							let rid = i as u32 + 1;
							let entry = map.entry(row.enclosing_class.rid()).or_insert((rid, rid));
							entry.1 = rid;
						}
					}
				}
				slot.insert(map)
			},
		};
		map.get(&enclosing_rid).map(|(start, end)| (*start, *end + 1))
	}

	/// InterfaceImpl rid range for an implementing type-def rid.
	pub fn interface_impl_range_of_class(&self, class_rid: u32) -> Option<(u32, u32)> {
		let mut ranges = self.interface_impl_ranges.borrow_mut();
		let map = match &mut *ranges {
			Some(map) => map,
			slot @ None => {
				let mut map: IntMap<u32, (u32, u32)> = Default::default();
				if let Ok(tables_heap) = self.tables() {
					if let Some(table) = tables_heap.get_table::<tables::InterfaceImplTable>() {
						for (i, row) in table.rows().enumerate() {
							let rid = i as u32 + 1;
							let entry = map.entry(row.class.rid()).or_insert((rid, rid));
							entry.1 = rid;
						}
					}
				}
				slot.insert(map)
			},
		};
		map.get(&class_rid).map(|(start, end)| (*start, *end + 1))
	}

	pub fn class_layout_of(&self, type_def_rid: u32) -> Option<tables::ClassLayout> {
		let table = self.tables().ok()?.get_table::<tables::ClassLayoutTable>()?;
		binary_search_row(table.len(), |i| table.get(i).unwrap().parent.rid(), type_def_rid)
			.map(|rid| table.get(rid).unwrap().clone())
	}

	pub fn field_layout_of(&self, field_rid: u32) -> Option<tables::FieldLayout> {
		let table = self.tables().ok()?.get_table::<tables::FieldLayoutTable>()?;
		binary_search_row(table.len(), |i| table.get(i).unwrap().field.rid(), field_rid)
			.map(|rid| table.get(rid).unwrap().clone())
	}

	pub fn field_rva_of(&self, field_rid: u32) -> Option<tables::FieldRVA> {
		let table = self.tables().ok()?.get_table::<tables::FieldRVATable>()?;
		binary_search_row(table.len(), |i| table.get(i).unwrap().field.rid(), field_rid)
			.map(|rid| table.get(rid).unwrap().clone())
	}

	pub fn constant_of(&self, parent: crate::raw::indices::coded_index::HasConstant) -> Option<tables::Constant> {
		let table = self.tables().ok()?.get_table::<tables::ConstantTable>()?;
		let key = raw_has_constant(parent);
		binary_search_row(table.len(), |i| raw_has_constant(table.get(i).unwrap().parent), key)
			.map(|rid| table.get(rid).unwrap().clone())
	}

	pub fn impl_map_of(&self, forwarded: crate::raw::indices::coded_index::MemberForwarded) -> Option<tables::ImplMap> {
		let table = self.tables().ok()?.get_table::<tables::ImplMapTable>()?;
		let key = raw_member_forwarded(forwarded);
		binary_search_row(table.len(), |i| raw_member_forwarded(table.get(i).unwrap().member_forwarded), key)
			.map(|rid| table.get(rid).unwrap().clone())
	}

	pub fn generic_param_constraints_of(&self, generic_param_rid: u32) -> Vec<tables::GenericParamConstraint> {
		let Ok(tables_heap) = self.tables() else { return vec![] };
		let Some(table) = tables_heap.get_table::<tables::GenericParamConstraintTable>() else {
			return vec![];
		};
		table
			.rows()
			.filter(|row| row.owner.rid() == generic_param_rid)
			.cloned()
			.collect()
	}

	/// Custom-attribute rid range for any attributable parent token, from the
	/// sorted CustomAttribute table.
	pub fn custom_attribute_range_of(&self, parent: MetadataToken) -> Vec<u32> {
		let Ok(tables_heap) = self.tables() else { return vec![] };
		let Some(table) = tables_heap.get_table::<tables::CustomAttributeTable>() else {
			return vec![];
		};
		table
			.rows()
			.enumerate()
			.filter(|(_, row)| MetadataToken::from(row.parent) == parent)
			.map(|(i, _)| i as u32 + 1)
			.collect()
	}

	/// The constructor and value blob of one CustomAttribute row; decoding
	/// the blob itself is outside the core.
	pub fn get_custom_attribute_raw_data(
		&'l self,
		ctx: &'l Context<'l>,
		rid: u32,
	) -> VmResult<(&'l MethodInfo<'l>, BlobIndex)> {
		let row = self.custom_attribute_row(rid)?;
		let token = MetadataToken::from(row.ty);
		let gcc = GenericContainerContext::default();
		let ctor = self.get_method_by_token(ctx, token, &gcc, None)?;
		Ok((ctor, row.value))
	}

	// ### Method bodies

	pub fn method_body(&self, method_rid: u32) -> VmResult<Option<MethodBody<'l>>> {
		if let Some(body) = self.synthetic_bodies.borrow().get(&method_rid) {
			return Ok(Some(body.clone()));
		}
		let row = self.method_def_row(method_rid)?;
		if row.rva == 0 {
			return Ok(None);
		}
		let image = self.image.as_ref().ok_or(VmError::BadImageFormat)?;
		let data = image.resolve_rva(row.rva).ok_or(VmError::BadImageFormat)?;
		Ok(Some(MethodBody::read(data)?))
	}

	pub fn field_rva_data(&self, field_rid: u32, size: usize) -> VmResult<&'l [u8]> {
		let rva = self.field_rva_of(field_rid).ok_or(VmError::MissingField)?.rva;
		let image = self.image.as_ref().ok_or(VmError::BadImageFormat)?;
		let data = image.resolve_rva(rva).ok_or(VmError::BadImageFormat)?;
		data.get(..size).ok_or(VmError::BadImageFormat)
	}

	// ### Name lookup

	/// Finds a top-level class by namespace and name; consults synthesized
	/// classes first, then the lazily built full-name map over type-defs.
	pub fn get_class_by_name(
		&'l self,
		ctx: &'l Context<'l>,
		namespace: &str,
		name: &str,
	) -> VmResult<Option<&'l Class<'l>>> {
		if let Some(class) = self.synthetic_classes.borrow().get(&(namespace, name)) {
			return Ok(Some(*class));
		}
		let Some(rid) = self.find_type_def_rid_by_name(namespace, name)? else {
			return self.get_exported_class_by_name(ctx, namespace, name);
		};
		Ok(Some(self.get_class_by_type_def_rid(ctx, rid)?))
	}

	/// Walks a `Ns.Outer+Inner+…` full name.
	pub fn get_class_by_nested_full_name(
		&'l self,
		ctx: &'l Context<'l>,
		full_name: &str,
	) -> VmResult<Option<&'l Class<'l>>> {
		let (outer, nested_path) = match full_name.split_once('+') {
			None => (full_name, None),
			Some((outer, rest)) => (outer, Some(rest)),
		};
		let (namespace, name) = match outer.rsplit_once('.') {
			None => ("", outer),
			Some((ns, n)) => (ns, n),
		};

		let Some(mut class) = self.get_class_by_name(ctx, namespace, name)? else {
			return Ok(None);
		};
		if let Some(path) = nested_path {
			for segment in path.split('+') {
				class.ensure_nested_classes(ctx)?;
				let Some(next) = class.nested_classes().iter().find(|c| c.name() == segment) else {
					return Ok(None);
				};
				class = next;
			}
		}
		Ok(Some(class))
	}

	pub(crate) fn find_type_def_rid_by_name(&'l self, namespace: &str, name: &str) -> VmResult<Option<u32>> {
		let mut names = self.type_names.borrow_mut();
		let map = match &mut *names {
			Some(map) => map,
			slot @ None => {
				let mut map: FxHashMap<(&'l str, &'l str), u32> = Default::default();
				if let Ok(tables_heap) = self.tables() {
					if let Some(table) = tables_heap.get_table::<tables::TypeDefTable>() {
						for (i, row) in table.rows().enumerate() {
							let rid = i as u32 + 1;
							let namespace = self.get_string(row.type_namespace)?;
							let name = self.get_string(row.type_name)?;
							map.insert((namespace, name), rid);
						}
					}
				}
				slot.insert(map)
			},
		};
		Ok(map.get(&(namespace, name)).copied())
	}

	/// Follows the ExportedType table for type-forwarded names.
	fn get_exported_class_by_name(
		&'l self,
		ctx: &'l Context<'l>,
		namespace: &str,
		name: &str,
	) -> VmResult<Option<&'l Class<'l>>> {
		let Ok(tables_heap) = self.tables() else { return Ok(None) };
		let Some(table) = tables_heap.get_table::<tables::ExportedTypeTable>() else {
			return Ok(None);
		};
		for row in table.rows() {
			let row_namespace = self.get_string(row.type_namespace)?;
			let row_name = self.get_string(row.type_name)?;
			if row_namespace != namespace || row_name != name {
				continue;
			}
			let token = MetadataToken::from(row.implementation);
			return match token.kind() {
				MetadataTokenKind::AssemblyRef => {
					let module = self.resolve_assembly_ref(ctx, token.index() as u32)?;
					module.get_class_by_name(ctx, namespace, name)
				},
				MetadataTokenKind::ExportedType => {
					// Nested exported type: resolve the enclosing chain first.
					let enclosing = self.exported_type_row(token.index() as u32)?;
					let enclosing_ns = self.get_string(enclosing.type_namespace)?;
					let enclosing_name = self.get_string(enclosing.type_name)?;
					let Some(outer) = self.get_exported_class_by_name(ctx, enclosing_ns, enclosing_name)? else {
						return Ok(None);
					};
					outer.ensure_nested_classes(ctx)?;
					Ok(outer.nested_classes().iter().find(|c| c.name() == name).copied())
				},
				_ => Err(VmError::BadImageFormat),
			};
		}
		Ok(None)
	}

	pub(crate) fn resolve_assembly_ref(
		&'l self,
		ctx: &'l Context<'l>,
		rid: u32,
	) -> VmResult<&'l ModuleDef<'l>> {
		let row = self.assembly_ref_row(rid)?;
		let image = self.image.as_ref().ok_or(VmError::BadImageFormat)?;
		let strings = image.strings().ok_or(VmError::BadImageFormat)?;
		let name = strings.get(row.name).ok_or(VmError::BadImageFormat)?;
		match ctx.module_by_name(name) {
			Some(module) => Ok(module),
			None => {
				debug!(name, "referenced assembly not loaded");
				Err(VmError::FileNotFound)
			},
		}
	}

	pub(crate) fn register_synthetic_class(&'l self, class: &'l Class<'l>) {
		self.synthetic_classes
			.borrow_mut()
			.insert((class.namespace(), class.name()), class);
	}

	// ### Generic containers

	/// The generic container declared by `owner` (a TypeDef or MethodDef
	/// token), or `None` when the owner declares no generic parameters.
	pub fn get_generic_container(
		&'l self,
		ctx: &'l Context<'l>,
		owner: MetadataToken,
	) -> VmResult<Option<&'l GenericContainer<'l>>> {
		use crate::structured::sig::GenericParam;

		if let Some(cached) = self.generic_containers.borrow().get(&owner.raw()) {
			return Ok(*cached);
		}

		let is_method = owner.kind() == MetadataTokenKind::MethodDef;
		let owner_raw = match is_method {
			true => ((owner.index() as u32) << 1) | 1,
			false => (owner.index() as u32) << 1,
		};

		let container = match self.generic_param_range_of_owner(owner_raw)? {
			None => None,
			Some((start, end)) => {
				let owner_gid = self.encode_gid(owner.index() as u32)?;
				let mut params = Vec::with_capacity((end - start) as usize);
				for rid in start..end {
					let row = self.generic_param_row(rid)?;
					params.push(GenericParam {
						gid: Gid::encode(self.id, rid),
						name: self.get_string(row.name).unwrap_or(""),
						flags: row.flags.bits(),
						index: row.number,
						constraints: Default::default(),
						owner: Default::default(),
						by_val_sig: Default::default(),
						by_ref_sig: Default::default(),
					});
				}
				let params = &*ctx.bump().alloc_slice_fill_iter(params);
				let container = &*ctx.bump().alloc(GenericContainer {
					params,
					owner_gid,
					is_method,
				});
				for param in container.params {
					param.owner.set(Some(container));
				}
				Some(container)
			},
		};

		// Cache before reading constraints: a constraint may name the very
		// type this container belongs to.
		self.generic_containers.borrow_mut().insert(owner.raw(), container);
		if let Some(container) = container {
			let gcc = GenericContainerContext {
				class: (!is_method).then_some(container),
				method: is_method.then_some(container),
			};
			self.init_generic_param_constraints(ctx, container, &gcc)?;
		}
		Ok(container)
	}

	/// Reads and interns the constraints of every parameter in a container.
	pub fn init_generic_param_constraints(
		&'l self,
		ctx: &'l Context<'l>,
		container: &'l GenericContainer<'l>,
		gcc: &GenericContainerContext<'l>,
	) -> VmResult<()> {
		for param in container.params {
			if !param.constraints.get().is_empty() {
				continue;
			}
			let rows = self.generic_param_constraints_of(param.gid.rid());
			if rows.is_empty() {
				continue;
			}
			let mut constraints = Vec::with_capacity(rows.len());
			for row in rows {
				let token = MetadataToken::from(row.constraint);
				let sig = self.get_sig_by_type_token(ctx, token, gcc, None)?;
				constraints.push(sig);
			}
			param.constraints.set(ctx.bump().alloc_slice_copy(&constraints));
		}
		Ok(())
	}

	// ### Member resolution

	pub fn get_method_by_rid(&'l self, ctx: &'l Context<'l>, rid: u32) -> VmResult<&'l MethodInfo<'l>> {
		if let Some(method) = self.synthetic_methods.borrow().get(&rid).copied() {
			return Ok(method);
		}
		let type_def_rid = self.type_def_of_method(rid)?;
		let class = self.get_class_by_type_def_rid(ctx, type_def_rid)?;
		class.ensure_methods(ctx)?;
		let (start, _) = self.method_range_of_type_def(type_def_rid)?;
		class
			.methods()
			.get((rid - start) as usize)
			.copied()
			.ok_or(VmError::MissingMethod)
	}

	pub fn get_field_by_rid(&'l self, ctx: &'l Context<'l>, rid: u32) -> VmResult<&'l FieldInfo<'l>> {
		if let Some(field) = self.synthetic_fields.borrow().get(&rid).copied() {
			return Ok(field);
		}
		let type_def_rid = self.type_def_of_field(rid)?;
		let class = self.get_class_by_type_def_rid(ctx, type_def_rid)?;
		class.ensure_fields(ctx)?;
		let (start, _) = self.field_range_of_type_def(type_def_rid)?;
		class
			.fields()
			.get((rid - start) as usize)
			.ok_or(VmError::MissingField)
	}
}

fn raw_type_or_method_def(idx: crate::raw::indices::coded_index::TypeOrMethodDef) -> u32 {
	let token = MetadataToken::from(idx);
	match token.kind() {
		MetadataTokenKind::MethodDef => ((token.index() as u32) << 1) | 1,
		_ => (token.index() as u32) << 1,
	}
}

fn raw_has_constant(idx: crate::raw::indices::coded_index::HasConstant) -> u32 {
	let token = MetadataToken::from(idx);
	let tag = match token.kind() {
		MetadataTokenKind::Field => 0,
		MetadataTokenKind::Param => 1,
		_ => 2,
	};
	((token.index() as u32) << 2) | tag
}

fn raw_member_forwarded(idx: crate::raw::indices::coded_index::MemberForwarded) -> u32 {
	let token = MetadataToken::from(idx);
	match token.kind() {
		MetadataTokenKind::MethodDef => ((token.index() as u32) << 1) | 1,
		_ => (token.index() as u32) << 1,
	}
}

/// Binary search over a table sorted by `key`; returns the 1-based rid.
fn binary_search_row(len: usize, key: impl Fn(usize) -> u32, target: u32) -> Option<usize> {
	let (mut lo, mut hi) = (1usize, len + 1);
	while lo < hi {
		let mid = (lo + hi) / 2;
		let value = key(mid);
		if value == target {
			return Some(mid);
		}
		match value < target {
			true => lo = mid + 1,
			false => hi = mid,
		}
	}
	None
}
