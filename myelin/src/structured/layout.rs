use tracing::trace;

use crate::error::{VmError, VmResult};
use crate::raw::heaps::table::TypeAttributes;
use crate::raw::indices::coded_index::HasConstant;
use crate::raw::indices::metadata_token::{FieldToken, MetadataToken};
use crate::structured::class::{Class, ClassExtra, ClassFamily, ClassInit};
use crate::structured::field::FieldInfo;
use crate::structured::sig::{GenericContainerContext, ReduceType};
use crate::structured::Context;

fn align_up(value: u32, align: u32) -> u32 {
	let align = align.max(1);
	value.div_ceil(align) * align
}

impl<'l> Class<'l> {
	/// Field phase: reads field rows, computes instance and static layout,
	/// allocates static storage and records reference tracing bits.
	pub fn ensure_fields(&'l self, ctx: &'l Context<'l>) -> VmResult<()> {
		if !self.begin_phase(ClassInit::FIELDS)? {
			return Ok(());
		}
		self.ensure_super_types(ctx)?;
		trace!(class = %self, "init fields");

		if self.family() == ClassFamily::Array {
			// Array layout is fixed at creation.
			self.end_phase(ClassInit::FIELDS);
			return Ok(());
		}

		let module = self.module();
		let rid = self.type_def_rid();

		// Synthesized classes carry their field array pre-seeded; row-backed
		// classes read and resolve theirs here.
		let (fields, start) = match module.image().is_some() {
			false => (self.fields(), 0),
			true => {
				let (start, end) = module.field_range_of_type_def(rid)?;
				let gcc = GenericContainerContext {
					class: self.base_container(ctx)?,
					method: None,
				};
				let gc = self.generic_context();

				let mut fields = Vec::with_capacity((end - start) as usize);
				for field_rid in start..end {
					let row = module.field_row(field_rid)?;
					let name = module.get_string(row.name)?;
					let sig = module.read_field_sig(ctx, row.signature, &gcc, gc.as_ref())?;
					fields.push(FieldInfo::new(
						self,
						name,
						sig,
						row.flags,
						MetadataToken::from(FieldToken(field_rid as usize)),
					));
				}
				let fields = &*ctx.bump().alloc_slice_fill_iter(fields);
				self.set_fields(fields);
				(fields, start)
			},
		};

		let class_layout = module.class_layout_of(rid);
		let packing = class_layout.as_ref().map(|l| l.packing_size as u32).unwrap_or(0);
		let declared_size = class_layout.as_ref().map(|l| l.class_size).unwrap_or(0);
		let explicit = self.flags & TypeAttributes::LAYOUT_MASK == TypeAttributes::EXPLICIT_LAYOUT;

		let (parent_size, parent_align, mut has_references) = match self.parent() {
			Some(parent) if !self.is_value_type() => {
				parent.ensure_fields(ctx)?;
				(parent.instance_size(), parent.alignment() as u32, parent.has_references())
			},
			_ => (0, 1, false),
		};

		let mut cursor = parent_size;
		let mut max_align = parent_align;
		let mut static_cursor = 0u32;
		let mut static_align = 1u32;

		for (i, field) in fields.iter().enumerate() {
			if field.is_literal() {
				continue;
			}
			let (size, natural_align) = ctx.value_layout(field.signature())?;
			let align = match packing {
				0 => natural_align,
				p => natural_align.min(p),
			};
			let reduce = ctx.reduce_type(field.signature())?;

			if field.is_static() {
				static_cursor = align_up(static_cursor, align);
				field.set_offset(static_cursor);
				static_cursor += size;
				static_align = static_align.max(align);
				continue;
			}

			if explicit {
				let field_rid = start + i as u32;
				let layout = module.field_layout_of(field_rid).ok_or(VmError::TypeLoad)?;
				field.set_offset(layout.offset);
				cursor = cursor.max(layout.offset + size);
			} else {
				cursor = align_up(cursor, align);
				field.set_offset(cursor);
				cursor += size;
			}
			max_align = max_align.max(align);

			if reduce == ReduceType::Ref {
				has_references = true;
			} else if reduce == ReduceType::Other {
				let field_class = ctx.class_from_sig(field.signature())?;
				if field_class.is_value_type() {
					field_class.ensure_fields(ctx)?;
					has_references |= field_class.has_references();
				} else {
					has_references = true;
				}
			}
		}

		let mut instance_size = match declared_size {
			0 => align_up(cursor, max_align),
			declared => declared.max(cursor),
		};
		if self.is_value_type() && instance_size == 0 {
			instance_size = 1;
		}

		self.set_instance_size(instance_size);
		self.set_alignment(max_align.min(u8::MAX as u32) as u8);
		self.set_static_size(static_cursor);
		if has_references {
			self.set_extra(ClassExtra::HAS_REFERENCES);
		}
		self.alloc_static_storage(ctx, static_cursor, static_align);
		self.init_static_rva_data(ctx, start)?;

		self.end_phase(ClassInit::FIELDS);
		Ok(())
	}

	/// Copies FieldRVA-backed initial data into the static blob.
	fn init_static_rva_data(&'l self, ctx: &'l Context<'l>, first_field_rid: u32) -> VmResult<()> {
		let base = self.static_fields_data();
		if base.is_null() {
			return Ok(());
		}
		for (i, field) in self.fields().iter().enumerate() {
			if !field.is_static() || !field.has_rva() {
				continue;
			}
			let size = field.size(ctx)? as usize;
			let data = self.module().field_rva_data(first_field_rid + i as u32, size)?;
			unsafe {
				std::ptr::copy_nonoverlapping(data.as_ptr(), base.add(field.offset() as usize), size);
			}
		}
		Ok(())
	}

	/// The constant blob of a literal field, with its element-type tag.
	pub fn literal_field_value(&'l self, field_index: usize) -> VmResult<Option<(u8, &'l [u8])>> {
		let module = self.module();
		let (start, _) = module.field_range_of_type_def(self.type_def_rid())?;
		let field_rid = start + field_index as u32;
		let coded = HasConstant::try_from(field_rid << 2).map_err(|_| VmError::BadImageFormat)?;
		match module.constant_of(coded) {
			None => Ok(None),
			Some(row) => Ok(Some((row.ty[0], module.get_blob(row.value)?))),
		}
	}
}
