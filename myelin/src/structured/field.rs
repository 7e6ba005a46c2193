use std::cell::Cell;
use std::fmt::{Debug, Formatter};

use crate::error::VmResult;
use crate::raw::heaps::table::FieldAttributes;
use crate::raw::indices::metadata_token::MetadataToken;
use crate::structured::class::Class;
use crate::structured::sig::TypeSig;
use crate::structured::Context;
use crate::vm::object::OBJECT_HEADER_SIZE;

/// A resolved field. Instance offsets are relative to the first byte of user
/// data (past the header for reference classes); static offsets index the
/// class's static blob.
pub struct FieldInfo<'l> {
	parent: &'l Class<'l>,
	name: &'l str,
	signature: &'l TypeSig<'l>,
	flags: FieldAttributes,
	offset: Cell<u32>,
	token: MetadataToken,
}

impl<'l> FieldInfo<'l> {
	pub(crate) fn new(
		parent: &'l Class<'l>,
		name: &'l str,
		signature: &'l TypeSig<'l>,
		flags: FieldAttributes,
		token: MetadataToken,
	) -> Self {
		Self {
			parent,
			name,
			signature,
			flags,
			offset: Cell::new(0),
			token,
		}
	}

	pub fn parent(&self) -> &'l Class<'l> {
		self.parent
	}

	pub fn name(&self) -> &'l str {
		self.name
	}

	pub fn signature(&self) -> &'l TypeSig<'l> {
		self.signature
	}

	pub fn flags(&self) -> FieldAttributes {
		self.flags
	}

	pub fn token(&self) -> MetadataToken {
		self.token
	}

	pub fn is_static(&self) -> bool {
		self.flags.contains(FieldAttributes::STATIC)
	}

	pub fn is_literal(&self) -> bool {
		self.flags.contains(FieldAttributes::LITERAL)
	}

	pub fn has_rva(&self) -> bool {
		self.flags.contains(FieldAttributes::HAS_FIELD_RVA)
	}

	pub fn offset(&self) -> u32 {
		self.offset.get()
	}

	pub(crate) fn set_offset(&self, offset: u32) {
		self.offset.set(offset);
	}

	/// The operand offset field instructions carry: instance fields of
	/// reference classes address past the object header, value classes and
	/// statics address their data directly.
	pub fn offset_including_header(&self) -> u32 {
		match !self.is_static() && !self.parent.is_value_type() {
			true => self.offset.get() + OBJECT_HEADER_SIZE,
			false => self.offset.get(),
		}
	}

	pub fn size(&self, ctx: &'l Context<'l>) -> VmResult<u32> {
		Ok(ctx.value_layout(self.signature)?.0)
	}
}

impl Debug for FieldInfo<'_> {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "FieldInfo({}::{} @{})", self.parent, self.name, self.offset.get())
	}
}
