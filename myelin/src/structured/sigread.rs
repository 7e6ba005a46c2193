use std::io::Cursor;

use crate::error::{VmError, VmResult};
use crate::raw::heaps::BlobIndex;
use crate::raw::indices::coded_index::TypeDefOrRef;
use crate::raw::indices::metadata_token::{MetadataToken, MetadataTokenKind};
use crate::structured::class::Class;
use crate::structured::method::MethodInfo;
use crate::structured::module::{MemberHandle, ModuleDef};
use crate::structured::sig::*;
use crate::structured::{Context, Gid};
use crate::utilities::{read_compressed_i32, read_compressed_u32};

type Reader<'l> = Cursor<&'l [u8]>;

fn read_u32(reader: &mut Reader<'_>) -> VmResult<u32> {
	read_compressed_u32(reader).map_err(|_| VmError::BadImageFormat)
}

fn read_i32(reader: &mut Reader<'_>) -> VmResult<i32> {
	read_compressed_i32(reader).map_err(|_| VmError::BadImageFormat)
}

fn read_byte(reader: &mut Reader<'_>) -> VmResult<u8> {
	use crate::utilities::FromByteStream;
	u8::read(reader, &()).map_err(|_| VmError::BadImageFormat)
}

impl<'l> ModuleDef<'l> {
	/// Reads one type signature from the blob reader, resolving `VAR`/`MVAR`
	/// against the context and interning the result.
	pub fn read_type_sig(
		&'l self,
		ctx: &'l Context<'l>,
		reader: &mut Reader<'l>,
		gcc: &GenericContainerContext<'l>,
		gc: Option<&GenericContext<'l>>,
	) -> VmResult<&'l TypeSig<'l>> {
		let sig = self.read_type_sig_value(ctx, reader, gcc, gc)?;
		Ok(ctx.intern_sig(sig))
	}

	fn read_type_sig_value(
		&'l self,
		ctx: &'l Context<'l>,
		reader: &mut Reader<'l>,
		gcc: &GenericContainerContext<'l>,
		gc: Option<&GenericContext<'l>>,
	) -> VmResult<TypeSig<'l>> {
		let head = read_byte(reader)?;
		let element = ElementType::from_repr(head).ok_or(VmError::BadImageFormat)?;

		Ok(match element {
			ElementType::Void
			| ElementType::Boolean
			| ElementType::Char
			| ElementType::I1
			| ElementType::U1
			| ElementType::I2
			| ElementType::U2
			| ElementType::I4
			| ElementType::U4
			| ElementType::I8
			| ElementType::U8
			| ElementType::R4
			| ElementType::R8
			| ElementType::String
			| ElementType::Object
			| ElementType::I
			| ElementType::U
			| ElementType::TypedByRef => TypeSig::new_by_val(element),

			ElementType::ByRef => {
				let mut sig = self.read_type_sig_value(ctx, reader, gcc, gc)?;
				sig.by_ref = true;
				sig
			},

			ElementType::Pinned => {
				let mut sig = self.read_type_sig_value(ctx, reader, gcc, gc)?;
				sig.pinned = true;
				sig
			},

			ElementType::CModReqd | ElementType::CModOpt => {
				let modifier = TypeDefOrRef::read_compressed(reader).map_err(|_| VmError::BadImageFormat)?;
				let attrs = self.recognized_modifier_attr(ctx, modifier)?;
				let mut sig = self.read_type_sig_value(ctx, reader, gcc, gc)?;
				sig.num_mods = sig.num_mods.saturating_add(1);
				sig.attrs |= attrs;
				sig
			},

			ElementType::Ptr | ElementType::SZArray => {
				let inner = self.read_type_sig(ctx, reader, gcc, gc)?;
				TypeSig::with_data(element, TypeSigData::Element(inner))
			},

			ElementType::Array => {
				let inner = self.read_type_sig(ctx, reader, gcc, gc)?;
				let rank = read_u32(reader)?;
				if rank == 0 || rank > 32 {
					return Err(VmError::BadImageFormat);
				}
				let num_sizes = read_u32(reader)? as usize;
				let mut sizes = Vec::with_capacity(num_sizes);
				for _ in 0..num_sizes {
					sizes.push(read_u32(reader)?);
				}
				let num_bounds = read_u32(reader)? as usize;
				let mut bounds = Vec::with_capacity(num_bounds);
				for _ in 0..num_bounds {
					bounds.push(read_i32(reader)?);
				}
				let array = &*ctx.bump().alloc(ArrayType {
					element: inner,
					rank: rank as u8,
					sizes: ctx.bump().alloc_slice_copy(&sizes),
					bounds: ctx.bump().alloc_slice_copy(&bounds),
				});
				TypeSig::with_data(ElementType::Array, TypeSigData::Array(array))
			},

			ElementType::ValueType | ElementType::Class => {
				let coded = TypeDefOrRef::read_compressed(reader).map_err(|_| VmError::BadImageFormat)?;
				self.type_sig_from_type_def_or_ref(ctx, coded, element, gcc, gc)?
			},

			ElementType::GenericInst => {
				let base_kind = read_byte(reader)?;
				let base_element = ElementType::from_repr(base_kind).ok_or(VmError::BadImageFormat)?;
				if !matches!(base_element, ElementType::ValueType | ElementType::Class) {
					return Err(VmError::BadImageFormat);
				}
				let coded = TypeDefOrRef::read_compressed(reader).map_err(|_| VmError::BadImageFormat)?;
				let base_sig = self.type_sig_from_type_def_or_ref(ctx, coded, base_element, gcc, gc)?;
				let TypeSigData::TypeDefGid(base_gid) = base_sig.data else {
					return Err(VmError::BadImageFormat);
				};

				let arg_count = read_u32(reader)? as usize;
				if arg_count == 0 || arg_count > 32 {
					return Err(VmError::BadImageFormat);
				}
				let mut args = Vec::with_capacity(arg_count);
				for _ in 0..arg_count {
					args.push(self.read_type_sig(ctx, reader, gcc, gc)?);
				}
				let inst = ctx.intern_inst(&args);
				let generic = ctx.intern_generic_class(base_gid, inst);
				TypeSig::with_data(ElementType::GenericInst, TypeSigData::Generic(generic))
			},

			ElementType::Var => {
				let index = read_u32(reader)? as u16;
				return self.resolve_generic_var(ctx, index, false, gcc, gc);
			},
			ElementType::MVar => {
				let index = read_u32(reader)? as u16;
				return self.resolve_generic_var(ctx, index, true, gcc, gc);
			},

			ElementType::FnPtr => {
				// The shape is parsed for stream correctness; the payload is
				// not carried (calli goes through StandAloneSig instead).
				let _ = self.read_method_sig(ctx, reader, gcc, gc)?;
				TypeSig::new_by_val(ElementType::FnPtr)
			},

			ElementType::Sentinel => return Err(VmError::NotImplemented),
			_ => return Err(VmError::BadImageFormat),
		})
	}

	/// `VAR k` / `MVAR k` resolution: the context's instantiation wins, then
	/// the declared container parameter, then an index-only placeholder.
	fn resolve_generic_var(
		&'l self,
		ctx: &'l Context<'l>,
		index: u16,
		is_method: bool,
		gcc: &GenericContainerContext<'l>,
		gc: Option<&GenericContext<'l>>,
	) -> VmResult<TypeSig<'l>> {
		if let Some(gc) = gc {
			let inst = match is_method {
				true => gc.method_inst,
				false => gc.class_inst,
			};
			if let Some(inst) = inst {
				let arg = inst.args.get(index as usize).ok_or(VmError::BadImageFormat)?;
				return Ok(**arg);
			}
		}

		let container = match is_method {
			true => gcc.method,
			false => gcc.class,
		};
		if let Some(container) = container {
			let param = container.params.get(index as usize).ok_or(VmError::BadImageFormat)?;
			let element = match is_method {
				true => ElementType::MVar,
				false => ElementType::Var,
			};
			return Ok(TypeSig::with_data(element, TypeSigData::Param(param)));
		}

		let element = match is_method {
			true => ElementType::MVar,
			false => ElementType::Var,
		};
		Ok(TypeSig::with_data(element, TypeSigData::ParamIndex(index)))
	}

	/// Produces the by-value signature for a `TypeDefOrRef` target, folding
	/// corlib primitives into primitive element kinds.
	fn type_sig_from_type_def_or_ref(
		&'l self,
		ctx: &'l Context<'l>,
		coded: TypeDefOrRef,
		element: ElementType,
		gcc: &GenericContainerContext<'l>,
		gc: Option<&GenericContext<'l>>,
	) -> VmResult<TypeSig<'l>> {
		let token = MetadataToken::from(coded);
		match token.kind() {
			MetadataTokenKind::TypeDef => {
				let rid = token.index() as u32;
				if let Some(primitive) = self.primitive_fold(ctx, rid)? {
					return Ok(TypeSig::new_by_val(primitive));
				}
				Ok(TypeSig::with_data(element, TypeSigData::TypeDefGid(self.encode_gid(rid)?)))
			},
			MetadataTokenKind::TypeRef => {
				let (module, rid) = self.resolve_type_ref(ctx, token.index() as u32)?;
				if let Some(primitive) = module.primitive_fold(ctx, rid)? {
					return Ok(TypeSig::new_by_val(primitive));
				}
				Ok(TypeSig::with_data(element, TypeSigData::TypeDefGid(module.encode_gid(rid)?)))
			},
			MetadataTokenKind::TypeSpec => {
				let sig = self.get_type_spec_sig(ctx, token.index() as u32, gcc, gc)?;
				Ok(*sig)
			},
			_ => Err(VmError::BadImageFormat),
		}
	}

	/// Element kind when the type-def `rid` is a corlib primitive.
	fn primitive_fold(&'l self, ctx: &'l Context<'l>, rid: u32) -> VmResult<Option<ElementType>> {
		if !std::ptr::eq(self, ctx.corlib()?) {
			return Ok(None);
		}
		let row = self.type_def_row(rid)?;
		let namespace = self.get_string(row.type_namespace)?;
		let name = self.get_string(row.type_name)?;
		Ok(Context::primitive_element_type(namespace, name))
	}

	/// Attribute bits contributed by a recognized pseudo-attribute modifier;
	/// every other modreq/modopt is stripped silently.
	fn recognized_modifier_attr(&'l self, ctx: &'l Context<'l>, coded: TypeDefOrRef) -> VmResult<u16> {
		let token = MetadataToken::from(coded);
		let (namespace, name) = match token.kind() {
			MetadataTokenKind::TypeDef => {
				let row = self.type_def_row(token.index() as u32)?;
				(self.get_string(row.type_namespace)?, self.get_string(row.type_name)?)
			},
			MetadataTokenKind::TypeRef => {
				let row = self.type_ref_row(token.index() as u32)?;
				(self.get_string(row.type_namespace)?, self.get_string(row.type_name)?)
			},
			_ => return Ok(0),
		};
		let _ = ctx;
		if namespace != "System.Runtime.InteropServices" {
			return Ok(0);
		}
		Ok(match name {
			"InAttribute" => 0x1,
			"OutAttribute" => 0x2,
			"OptionalAttribute" => 0x10,
			_ => 0,
		})
	}

	// ### Whole-signature readers

	pub fn read_field_sig(
		&'l self,
		ctx: &'l Context<'l>,
		blob: BlobIndex,
		gcc: &GenericContainerContext<'l>,
		gc: Option<&GenericContext<'l>>,
	) -> VmResult<&'l TypeSig<'l>> {
		let data = self.get_blob(blob)?;
		let mut reader = Cursor::new(data);
		let prologue = read_byte(&mut reader)?;
		if prologue & SIG_TYPE_MASK != SIG_FIELD {
			return Err(VmError::BadImageFormat);
		}
		self.read_type_sig(ctx, &mut reader, gcc, gc)
	}

	pub fn read_method_sig_blob(
		&'l self,
		ctx: &'l Context<'l>,
		blob: BlobIndex,
		gcc: &GenericContainerContext<'l>,
		gc: Option<&GenericContext<'l>>,
	) -> VmResult<MethodSig<'l>> {
		let data = self.get_blob(blob)?;
		let mut reader = Cursor::new(data);
		self.read_method_sig(ctx, &mut reader, gcc, gc)
	}

	pub fn read_method_sig(
		&'l self,
		ctx: &'l Context<'l>,
		reader: &mut Reader<'l>,
		gcc: &GenericContainerContext<'l>,
		gc: Option<&GenericContext<'l>>,
	) -> VmResult<MethodSig<'l>> {
		let flags = read_byte(reader)?;
		if flags & SIG_TYPE_MASK == SIG_VARARG {
			return Err(VmError::NotImplemented);
		}

		let generic_param_count = match flags & SIG_GENERIC != 0 {
			true => read_u32(reader)? as u8,
			false => 0,
		};
		let param_count = read_u32(reader)? as usize;
		if param_count > 0xFFFF {
			return Err(VmError::BadImageFormat);
		}

		let return_type = self.read_type_sig(ctx, reader, gcc, gc)?;
		let mut params = Vec::with_capacity(param_count);
		for _ in 0..param_count {
			params.push(self.read_type_sig(ctx, reader, gcc, gc)?);
		}

		Ok(MethodSig {
			flags,
			generic_param_count,
			return_type,
			params,
		})
	}

	pub fn read_property_sig(
		&'l self,
		ctx: &'l Context<'l>,
		blob: BlobIndex,
		gcc: &GenericContainerContext<'l>,
		gc: Option<&GenericContext<'l>>,
	) -> VmResult<PropertySig<'l>> {
		let data = self.get_blob(blob)?;
		let mut reader = Cursor::new(data);
		let prologue = read_byte(&mut reader)?;
		if prologue & SIG_TYPE_MASK != SIG_PROPERTY {
			return Err(VmError::BadImageFormat);
		}
		let param_count = read_u32(&mut reader)? as usize;
		let type_sig = self.read_type_sig(ctx, &mut reader, gcc, gc)?;
		let mut params = Vec::with_capacity(param_count);
		for _ in 0..param_count {
			params.push(self.read_type_sig(ctx, &mut reader, gcc, gc)?);
		}
		Ok(PropertySig { type_sig, params })
	}

	/// Local-variable signatures from a StandAloneSig token.
	pub fn read_local_var_sig(
		&'l self,
		ctx: &'l Context<'l>,
		token: u32,
		gcc: &GenericContainerContext<'l>,
		gc: Option<&GenericContext<'l>>,
	) -> VmResult<Vec<&'l TypeSig<'l>>> {
		if token == 0 {
			return Ok(vec![]);
		}
		let token = MetadataToken::try_from(token).map_err(|_| VmError::BadImageFormat)?;
		if token.kind() != MetadataTokenKind::StandAloneSig {
			return Err(VmError::BadImageFormat);
		}
		let row = self.stand_alone_sig_row(token.index() as u32)?;
		let data = self.get_blob(row.signature)?;
		let mut reader = Cursor::new(data);
		let prologue = read_byte(&mut reader)?;
		if prologue & SIG_TYPE_MASK != SIG_LOCAL_VAR {
			return Err(VmError::BadImageFormat);
		}
		let count = read_u32(&mut reader)? as usize;
		if count > 0xFFFE {
			return Err(VmError::BadImageFormat);
		}
		let mut locals = Vec::with_capacity(count);
		for _ in 0..count {
			locals.push(self.read_type_sig(ctx, &mut reader, gcc, gc)?);
		}
		Ok(locals)
	}

	/// A standalone method signature (for `calli`).
	pub fn read_stand_alone_method_sig(
		&'l self,
		ctx: &'l Context<'l>,
		token: MetadataToken,
		gcc: &GenericContainerContext<'l>,
		gc: Option<&GenericContext<'l>>,
	) -> VmResult<MethodSig<'l>> {
		if token.kind() != MetadataTokenKind::StandAloneSig {
			return Err(VmError::BadImageFormat);
		}
		let row = self.stand_alone_sig_row(token.index() as u32)?;
		self.read_method_sig_blob(ctx, row.signature, gcc, gc)
	}

	/// The instantiation blob of a MethodSpec.
	pub fn read_method_spec_inst(
		&'l self,
		ctx: &'l Context<'l>,
		blob: BlobIndex,
		gcc: &GenericContainerContext<'l>,
		gc: Option<&GenericContext<'l>>,
	) -> VmResult<&'l GenericInst<'l>> {
		let data = self.get_blob(blob)?;
		let mut reader = Cursor::new(data);
		let prologue = read_byte(&mut reader)?;
		if prologue != SIG_METHOD_SPEC {
			return Err(VmError::BadImageFormat);
		}
		let count = read_u32(&mut reader)? as usize;
		let mut args = Vec::with_capacity(count);
		for _ in 0..count {
			args.push(self.read_type_sig(ctx, &mut reader, gcc, gc)?);
		}
		Ok(ctx.intern_inst(&args))
	}

	// ### Token-level resolution

	/// Resolves a TypeRef to its defining `(module, type-def rid)` through
	/// the resolution scope.
	pub fn resolve_type_ref(
		&'l self,
		ctx: &'l Context<'l>,
		rid: u32,
	) -> VmResult<(&'l ModuleDef<'l>, u32)> {
		let row = self.type_ref_row(rid)?;
		let namespace = self.get_string(row.type_namespace)?;
		let name = self.get_string(row.type_name)?;
		let scope = MetadataToken::from(row.resolution_scope);

		match scope.kind() {
			MetadataTokenKind::Module => {
				let rid = self.find_type_def_rid_by_name(namespace, name)?.ok_or(VmError::TypeLoad)?;
				Ok((self, rid))
			},
			MetadataTokenKind::ModuleRef => {
				let row = self.module_ref_row(scope.index() as u32)?;
				let module_name = self.get_string(row.name)?;
				let module = ctx.module_by_name(module_name).ok_or(VmError::FileNotFound)?;
				let rid = module.find_type_def_rid_by_name(namespace, name)?.ok_or(VmError::TypeLoad)?;
				Ok((module, rid))
			},
			MetadataTokenKind::AssemblyRef => {
				let module = self.resolve_assembly_ref(ctx, scope.index() as u32)?;
				match module.find_type_def_rid_by_name(namespace, name)? {
					Some(rid) => Ok((module, rid)),
					None => {
						// Type forwarding through the exported-type table.
						let class = module
							.get_class_by_name(ctx, namespace, name)?
							.ok_or(VmError::TypeLoad)?;
						Ok((class.module(), class.token().index() as u32))
					},
				}
			},
			MetadataTokenKind::TypeRef => {
				// Nested type: resolve the enclosing type, then search its
				// nested classes by name.
				let (module, enclosing_rid) = self.resolve_type_ref(ctx, scope.index() as u32)?;
				let enclosing = module.get_class_by_type_def_rid(ctx, enclosing_rid)?;
				enclosing.ensure_nested_classes(ctx)?;
				let nested = enclosing
					.nested_classes()
					.iter()
					.find(|c| c.name() == name && c.namespace() == namespace)
					.ok_or(VmError::TypeLoad)?;
				Ok((nested.module(), nested.token().index() as u32))
			},
			_ => Err(VmError::BadImageFormat),
		}
	}

	pub fn get_class_by_type_ref_rid(
		&'l self,
		ctx: &'l Context<'l>,
		rid: u32,
	) -> VmResult<&'l Class<'l>> {
		let (module, type_def_rid) = self.resolve_type_ref(ctx, rid)?;
		module.get_class_by_type_def_rid(ctx, type_def_rid)
	}

	/// The canonical signature of a TypeSpec under the given context.
	pub fn get_type_spec_sig(
		&'l self,
		ctx: &'l Context<'l>,
		rid: u32,
		gcc: &GenericContainerContext<'l>,
		gc: Option<&GenericContext<'l>>,
	) -> VmResult<&'l TypeSig<'l>> {
		let row = self.type_spec_row(rid)?;
		let data = self.get_blob(row.signature)?;
		let mut reader = Cursor::new(data);
		self.read_type_sig(ctx, &mut reader, gcc, gc)
	}

	pub fn get_class_by_type_spec_rid(
		&'l self,
		ctx: &'l Context<'l>,
		rid: u32,
		gcc: &GenericContainerContext<'l>,
		gc: Option<&GenericContext<'l>>,
	) -> VmResult<&'l Class<'l>> {
		let sig = self.get_type_spec_sig(ctx, rid, gcc, gc)?;
		ctx.class_from_sig(sig)
	}

	/// By-value signature of any TypeDef/TypeRef/TypeSpec token.
	pub fn get_sig_by_type_token(
		&'l self,
		ctx: &'l Context<'l>,
		token: MetadataToken,
		gcc: &GenericContainerContext<'l>,
		gc: Option<&GenericContext<'l>>,
	) -> VmResult<&'l TypeSig<'l>> {
		match token.kind() {
			MetadataTokenKind::TypeDef => {
				let rid = token.index() as u32;
				if let Some(primitive) = self.primitive_fold(ctx, rid)? {
					return Ok(ctx.intern_sig(TypeSig::new_by_val(primitive)));
				}
				let class = self.get_class_by_type_def_rid(ctx, rid)?;
				Ok(class.by_val_sig(ctx))
			},
			MetadataTokenKind::TypeRef => {
				let (module, rid) = self.resolve_type_ref(ctx, token.index() as u32)?;
				if let Some(primitive) = module.primitive_fold(ctx, rid)? {
					return Ok(ctx.intern_sig(TypeSig::new_by_val(primitive)));
				}
				let class = module.get_class_by_type_def_rid(ctx, rid)?;
				Ok(class.by_val_sig(ctx))
			},
			MetadataTokenKind::TypeSpec => self.get_type_spec_sig(ctx, token.index() as u32, gcc, gc),
			_ => Err(VmError::BadImageFormat),
		}
	}

	/// The class behind any TypeDef/TypeRef/TypeSpec token.
	pub fn get_class_by_type_token(
		&'l self,
		ctx: &'l Context<'l>,
		token: MetadataToken,
		gcc: &GenericContainerContext<'l>,
		gc: Option<&GenericContext<'l>>,
	) -> VmResult<&'l Class<'l>> {
		match token.kind() {
			MetadataTokenKind::TypeDef => self.get_class_by_type_def_rid(ctx, token.index() as u32),
			MetadataTokenKind::TypeRef => self.get_class_by_type_ref_rid(ctx, token.index() as u32),
			MetadataTokenKind::TypeSpec => {
				self.get_class_by_type_spec_rid(ctx, token.index() as u32, gcc, gc)
			},
			_ => Err(VmError::BadImageFormat),
		}
	}

	// ### MemberRef and MethodSpec

	/// Resolves a MemberRef row into a field or method handle.
	pub fn get_member_by_member_ref_rid(
		&'l self,
		ctx: &'l Context<'l>,
		rid: u32,
		gcc: &GenericContainerContext<'l>,
		gc: Option<&GenericContext<'l>>,
	) -> VmResult<MemberHandle<'l>> {
		let row = self.member_ref_row(rid)?;
		let name = self.get_string(row.name)?;
		let parent_token = MetadataToken::from(row.class);

		let parent_class = match parent_token.kind() {
			MetadataTokenKind::TypeDef => self.get_class_by_type_def_rid(ctx, parent_token.index() as u32)?,
			MetadataTokenKind::TypeRef => self.get_class_by_type_ref_rid(ctx, parent_token.index() as u32)?,
			MetadataTokenKind::TypeSpec => {
				self.get_class_by_type_spec_rid(ctx, parent_token.index() as u32, gcc, gc)?
			},
			MetadataTokenKind::MethodDef => {
				// Vararg call-site refs to a method-def.
				let method = self.get_method_by_rid(ctx, parent_token.index() as u32)?;
				return Ok(MemberHandle::Method(method));
			},
			_ => return Err(VmError::BadImageFormat),
		};

		// Signatures are read under the *base* declaration's container so
		// generic variables line up with the declared parameters; the found
		// member is then inflated back to the referenced instantiation.
		let (base_class, inflate_gc) = parent_class.base_declaration(ctx)?;
		let base_gcc = GenericContainerContext {
			class: base_class.generic_container(),
			method: None,
		};

		let data = self.get_blob(row.signature)?;
		if data.first().map(|b| b & SIG_TYPE_MASK) == Some(SIG_FIELD) {
			let sig = self.read_field_sig(ctx, row.signature, &base_gcc, None)?;
			let field = base_class
				.find_field(ctx, name, Some(sig))?
				.ok_or(VmError::MissingField)?;
			let field = match inflate_gc {
				None => field,
				Some(_) => parent_class
					.find_field(ctx, name, None)?
					.ok_or(VmError::MissingField)?,
			};
			return Ok(MemberHandle::Field(field));
		}

		let sig = self.read_method_sig_blob(ctx, row.signature, &base_gcc, None)?;
		let method = base_class
			.find_method_by_name_and_sig(ctx, name, &sig)?
			.ok_or(VmError::MissingMethod)?;
		let method = match inflate_gc {
			None => method,
			Some(gc) => MethodInfo::inflate(ctx, method, &gc)?,
		};
		Ok(MemberHandle::Method(method))
	}

	pub fn get_method_by_member_ref_rid(
		&'l self,
		ctx: &'l Context<'l>,
		rid: u32,
		gcc: &GenericContainerContext<'l>,
		gc: Option<&GenericContext<'l>>,
	) -> VmResult<&'l MethodInfo<'l>> {
		match self.get_member_by_member_ref_rid(ctx, rid, gcc, gc)? {
			MemberHandle::Method(method) => Ok(method),
			MemberHandle::Field(_) => Err(VmError::MissingMethod),
		}
	}

	pub fn get_field_by_member_ref_rid(
		&'l self,
		ctx: &'l Context<'l>,
		rid: u32,
		gcc: &GenericContainerContext<'l>,
		gc: Option<&GenericContext<'l>>,
	) -> VmResult<&'l crate::structured::field::FieldInfo<'l>> {
		match self.get_member_by_member_ref_rid(ctx, rid, gcc, gc)? {
			MemberHandle::Field(field) => Ok(field),
			MemberHandle::Method(_) => Err(VmError::MissingField),
		}
	}

	/// Instantiates the generic method a MethodSpec names.
	pub fn get_method_by_method_spec_rid(
		&'l self,
		ctx: &'l Context<'l>,
		rid: u32,
		gcc: &GenericContainerContext<'l>,
		gc: Option<&GenericContext<'l>>,
	) -> VmResult<&'l MethodInfo<'l>> {
		let row = self.method_spec_row(rid)?;
		let base_token = MetadataToken::from(row.method);
		let base = match base_token.kind() {
			MetadataTokenKind::MethodDef => self.get_method_by_rid(ctx, base_token.index() as u32)?,
			MetadataTokenKind::MemberRef => {
				self.get_method_by_member_ref_rid(ctx, base_token.index() as u32, gcc, gc)?
			},
			_ => return Err(VmError::BadImageFormat),
		};

		let inst = self.read_method_spec_inst(ctx, row.instantiation, gcc, gc)?;
		let method_gc = GenericContext {
			class_inst: base.parent().generic_inst(),
			method_inst: Some(inst),
		};
		MethodInfo::inflate(ctx, base, &method_gc)
	}

	/// Resolves any method token a call site can carry.
	pub fn get_method_by_token(
		&'l self,
		ctx: &'l Context<'l>,
		token: MetadataToken,
		gcc: &GenericContainerContext<'l>,
		gc: Option<&GenericContext<'l>>,
	) -> VmResult<&'l MethodInfo<'l>> {
		match token.kind() {
			MetadataTokenKind::MethodDef => self.get_method_by_rid(ctx, token.index() as u32),
			MetadataTokenKind::MemberRef => {
				self.get_method_by_member_ref_rid(ctx, token.index() as u32, gcc, gc)
			},
			MetadataTokenKind::MethodSpec => {
				self.get_method_by_method_spec_rid(ctx, token.index() as u32, gcc, gc)
			},
			_ => Err(VmError::BadImageFormat),
		}
	}

	/// Resolves any field token an instruction can carry.
	pub fn get_field_by_token(
		&'l self,
		ctx: &'l Context<'l>,
		token: MetadataToken,
		gcc: &GenericContainerContext<'l>,
		gc: Option<&GenericContext<'l>>,
	) -> VmResult<&'l crate::structured::field::FieldInfo<'l>> {
		match token.kind() {
			MetadataTokenKind::Field => self.get_field_by_rid(ctx, token.index() as u32),
			MetadataTokenKind::MemberRef => {
				self.get_field_by_member_ref_rid(ctx, token.index() as u32, gcc, gc)
			},
			_ => Err(VmError::BadImageFormat),
		}
	}

	pub(crate) fn get_type_def_gid_by_type_ref_rid(
		&'l self,
		ctx: &'l Context<'l>,
		rid: u32,
	) -> VmResult<Gid> {
		let (module, type_def_rid) = self.resolve_type_ref(ctx, rid)?;
		module.encode_gid(type_def_rid)
	}
}
