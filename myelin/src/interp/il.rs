//! Raw CIL opcode decoding: one-byte opcodes plus the `0xFE` extended page,
//! with inline operands decoded little-endian.

use std::fmt::{Debug, Formatter};
use std::io::{Cursor, ErrorKind, Result};

use crate::raw::indices::metadata_token::MetadataToken;
use crate::utilities::FromByteStream;

/// The inline target table of a `switch` instruction.
#[derive(Copy, Clone, PartialEq)]
pub struct SwitchTable<'l> {
	count: u32,
	data: &'l [u8],
}

impl<'l> SwitchTable<'l> {
	pub fn len(&self) -> usize {
		self.count as usize
	}

	pub fn is_empty(&self) -> bool {
		self.count == 0
	}

	pub fn targets(&self) -> impl ExactSizeIterator<Item = i32> + 'l {
		self.data
			.chunks_exact(4)
			.map(|c| i32::from_le_bytes([c[0], c[1], c[2], c[3]]))
	}
}

impl Debug for SwitchTable<'_> {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(self.targets()).finish()
	}
}

impl<'l> SwitchTable<'l> {
	fn read(stream: &mut Cursor<&'l [u8]>) -> Result<Self> {
		let count = u32::read(stream, &())?;
		let start = stream.position() as usize;
		let end = start + count as usize * 4;
		let data = stream
			.get_ref()
			.get(start..end)
			.ok_or(ErrorKind::UnexpectedEof)?;
		stream.set_position(end as u64);
		Ok(Self { count, data })
	}
}

macro_rules! debug_opcode {
	($name: ident, $f: expr, $self: expr, $ident: ident) => {
		if $name::$ident == *$self {
			return write!($f, "OpCode::{}", stringify!($ident));
		}
	};
	($name: ident, $f: expr, $self: expr, $ident: ident ($ty: ty)) => {
		if let $name::$ident(v) = $self {
			return write!($f, "OpCode::{}({:X?})", stringify!($ident), v);
		}
	};
}

macro_rules! define_opcodes {
	(
		enum $name: ident $(<$lifetime: lifetime>)? {
			$(
				$(#[$attr:meta])*
				$ident: ident $(($ty: ty))? = $discriminant: literal
			),* $(,)?
		}
		extended {
			$(
				$(#[$eattr:meta])*
				$eident: ident $(($ety: ty))? = $ediscriminant: literal
			),* $(,)?
		}
	) => {
		#[allow(non_camel_case_types)]
		#[derive(Copy, Clone, PartialEq)]
		pub enum $name $(<$lifetime>)? {
			$(
				$(#[$attr])*
				$ident $(($ty))?,
			)*
			$(
				$(#[$eattr])*
				$eident $(($ety))?,
			)*
		}

		impl$(<$lifetime>)? $name$(<$lifetime>)? {
			pub fn read(stream: &mut Cursor<& $($lifetime)? [u8]>) -> Result<Self> {
				let discriminant = u8::read(stream, &())?;
				if discriminant == 0xFE {
					let extended = u8::read(stream, &())?;
					return match extended {
						$($ediscriminant => Ok($name::$eident $((<$ety>::read_operand(stream)?))?),)*
						_ => Err(ErrorKind::InvalidData.into()),
					};
				}
				match discriminant {
					$($discriminant => Ok($name::$ident $((<$ty>::read_operand(stream)?))?),)*
					_ => Err(ErrorKind::InvalidData.into()),
				}
			}
		}

		impl $(<$lifetime>)? Debug for $name $(<$lifetime>)? {
			fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
				$(debug_opcode! { $name, f, self, $ident $(($ty))? })*
				$(debug_opcode! { $name, f, self, $eident $(($ety))? })*
				Ok(())
			}
		}
	};
}

trait ReadOperand<'l>: Sized {
	fn read_operand(stream: &mut Cursor<&'l [u8]>) -> Result<Self>;
}

macro_rules! impl_read_operand {
	($($ty: ty),*) => {$(
		impl ReadOperand<'_> for $ty {
			#[inline]
			fn read_operand(stream: &mut Cursor<&[u8]>) -> Result<Self> {
				<$ty as FromByteStream>::read(stream, &())
			}
		}
	)*};
}

impl_read_operand!(u8, i8, u16, i32, i64, f32, f64, MetadataToken);

impl<'l> ReadOperand<'l> for SwitchTable<'l> {
	fn read_operand(stream: &mut Cursor<&'l [u8]>) -> Result<Self> {
		SwitchTable::read(stream)
	}
}

define_opcodes! {
	enum OpCode<'l> {
		/// Do nothing (No operation).
		nop = 0x00,
		/// Inform a debugger that a breakpoint has been reached.
		dbg_break = 0x01,
		/// Load argument 0 onto the stack.
		ldarg_0 = 0x02,
		/// Load argument 1 onto the stack.
		ldarg_1 = 0x03,
		/// Load argument 2 onto the stack.
		ldarg_2 = 0x04,
		/// Load argument 3 onto the stack.
		ldarg_3 = 0x05,
		/// Load local variable 0 onto stack.
		ldloc_0 = 0x06,
		/// Load local variable 1 onto stack.
		ldloc_1 = 0x07,
		/// Load local variable 2 onto stack.
		ldloc_2 = 0x08,
		/// Load local variable 3 onto stack.
		ldloc_3 = 0x09,
		/// Pop a value from stack into local variable 0.
		stloc_0 = 0x0A,
		/// Pop a value from stack into local variable 1.
		stloc_1 = 0x0B,
		/// Pop a value from stack into local variable 2.
		stloc_2 = 0x0C,
		/// Pop a value from stack into local variable 3.
		stloc_3 = 0x0D,
		/// Load argument numbered num onto the stack, short form.
		ldarg_s(u8) = 0x0E,
		/// Fetch the address of argument argNum, short form.
		ldarga_s(u8) = 0x0F,
		/// Store value to the argument numbered num, short form.
		starg_s(u8) = 0x10,
		/// Load local variable of index indx onto stack, short form.
		ldloc_s(u8) = 0x11,
		/// Load address of local variable with index indx, short form.
		ldloca_s(u8) = 0x12,
		/// Pop a value from stack into local variable indx, short form.
		stloc_s(u8) = 0x13,
		/// Push a null reference on the stack.
		ldnull = 0x14,
		/// Push -1 onto the stack as int32.
		ldc_i4_m1 = 0x15,
		/// Push 0 onto the stack as int32.
		ldc_i4_0 = 0x16,
		/// Push 1 onto the stack as int32.
		ldc_i4_1 = 0x17,
		/// Push 2 onto the stack as int32.
		ldc_i4_2 = 0x18,
		/// Push 3 onto the stack as int32.
		ldc_i4_3 = 0x19,
		/// Push 4 onto the stack as int32.
		ldc_i4_4 = 0x1A,
		/// Push 5 onto the stack as int32.
		ldc_i4_5 = 0x1B,
		/// Push 6 onto the stack as int32.
		ldc_i4_6 = 0x1C,
		/// Push 7 onto the stack as int32.
		ldc_i4_7 = 0x1D,
		/// Push 8 onto the stack as int32.
		ldc_i4_8 = 0x1E,
		/// Push num onto the stack as int32, short form.
		ldc_i4_s(i8) = 0x1F,
		/// Push num of type int32 onto the stack as int32.
		ldc_i4(i32) = 0x20,
		/// Push num of type int64 onto the stack as int64.
		ldc_i8(i64) = 0x21,
		/// Push num of type float32 onto the stack as F.
		ldc_r4(f32) = 0x22,
		/// Push num of type float64 onto the stack as F.
		ldc_r8(f64) = 0x23,
		/// Duplicate the value on the top of the stack.
		dup = 0x25,
		/// Pop value from the stack.
		pop = 0x26,
		/// Exit current method and jump to the specified method.
		jmp(MetadataToken) = 0x27,
		/// Call method described by method.
		call(MetadataToken) = 0x28,
		/// Call method indicated on the stack with arguments described by callsitedescr.
		calli(MetadataToken) = 0x29,
		/// Return from method, possibly with a value.
		ret = 0x2A,
		/// Branch to target, short form.
		br_s(i8) = 0x2B,
		/// Branch to target if value is zero (false), short form.
		brfalse_s(i8) = 0x2C,
		/// Branch to target if value is non-zero (true), short form.
		brtrue_s(i8) = 0x2D,
		/// Branch to target if equal, short form.
		beq_s(i8) = 0x2E,
		/// Branch to target if greater than or equal to, short form.
		bge_s(i8) = 0x2F,
		/// Branch to target if greater than, short form.
		bgt_s(i8) = 0x30,
		/// Branch to target if less than or equal to, short form.
		ble_s(i8) = 0x31,
		/// Branch to target if less than, short form.
		blt_s(i8) = 0x32,
		/// Branch to target if unequal or unordered, short form.
		bne_un_s(i8) = 0x33,
		/// Branch to target if greater than or equal to (unsigned or unordered), short form.
		bge_un_s(i8) = 0x34,
		/// Branch to target if greater than (unsigned or unordered), short form.
		bgt_un_s(i8) = 0x35,
		/// Branch to target if less than or equal to (unsigned or unordered), short form.
		ble_un_s(i8) = 0x36,
		/// Branch to target if less than (unsigned or unordered), short form.
		blt_un_s(i8) = 0x37,
		/// Branch to target.
		br(i32) = 0x38,
		/// Branch to target if value is zero (false).
		brfalse(i32) = 0x39,
		/// Branch to target if value is non-zero (true).
		brtrue(i32) = 0x3A,
		/// Branch to target if equal.
		beq(i32) = 0x3B,
		/// Branch to target if greater than or equal to.
		bge(i32) = 0x3C,
		/// Branch to target if greater than.
		bgt(i32) = 0x3D,
		/// Branch to target if less than or equal to.
		ble(i32) = 0x3E,
		/// Branch to target if less than.
		blt(i32) = 0x3F,
		/// Branch to target if unequal or unordered.
		bne_un(i32) = 0x40,
		/// Branch to target if greater than or equal to (unsigned or unordered).
		bge_un(i32) = 0x41,
		/// Branch to target if greater than (unsigned or unordered).
		bgt_un(i32) = 0x42,
		/// Branch to target if less than or equal to (unsigned or unordered).
		ble_un(i32) = 0x43,
		/// Branch to target if less than (unsigned or unordered).
		blt_un(i32) = 0x44,
		/// Jump to one of n values.
		switch(SwitchTable<'l>) = 0x45,
		/// Indirect load value of type int8 as int32 on the stack.
		ldind_i1 = 0x46,
		/// Indirect load value of type unsigned int8 as int32 on the stack.
		ldind_u1 = 0x47,
		/// Indirect load value of type int16 as int32 on the stack.
		ldind_i2 = 0x48,
		/// Indirect load value of type unsigned int16 as int32 on the stack.
		ldind_u2 = 0x49,
		/// Indirect load value of type int32 as int32 on the stack.
		ldind_i4 = 0x4A,
		/// Indirect load value of type unsigned int32 as int32 on the stack.
		ldind_u4 = 0x4B,
		/// Indirect load value of type int64 as int64 on the stack.
		ldind_i8 = 0x4C,
		/// Indirect load value of type native int as native int on the stack.
		ldind_i = 0x4D,
		/// Indirect load value of type float32 as F on the stack.
		ldind_r4 = 0x4E,
		/// Indirect load value of type float64 as F on the stack.
		ldind_r8 = 0x4F,
		/// Indirect load value of type object ref as O on the stack.
		ldind_ref = 0x50,
		/// Store value of type object ref (type O) into memory at address.
		stind_ref = 0x51,
		/// Store value of type int8 into memory at address.
		stind_i1 = 0x52,
		/// Store value of type int16 into memory at address.
		stind_i2 = 0x53,
		/// Store value of type int32 into memory at address.
		stind_i4 = 0x54,
		/// Store value of type int64 into memory at address.
		stind_i8 = 0x55,
		/// Store value of type float32 into memory at address.
		stind_r4 = 0x56,
		/// Store value of type float64 into memory at address.
		stind_r8 = 0x57,
		/// Add two values, returning a new value.
		add = 0x58,
		/// Subtract value2 from value1, returning a new value.
		sub = 0x59,
		/// Multiply values.
		mul = 0x5A,
		/// Divide two values to return a quotient or floating-point result.
		div = 0x5B,
		/// Divide two values, unsigned, returning a quotient.
		div_un = 0x5C,
		/// Remainder when dividing one value by another.
		rem = 0x5D,
		/// Remainder when dividing one unsigned value by another.
		rem_un = 0x5E,
		/// Bitwise AND of two integral values, returns an integral value.
		and = 0x5F,
		/// Bitwise OR of two integer values, returns an integer.
		or = 0x60,
		/// Bitwise XOR of integer values, returns an integer.
		xor = 0x61,
		/// Shift an integer left (shifting in zeros), return an integer.
		shl = 0x62,
		/// Shift an integer right (shift in sign), return an integer.
		shr = 0x63,
		/// Shift an integer right (shift in zero), return an integer.
		shr_un = 0x64,
		/// Negate value.
		neg = 0x65,
		/// Bitwise complement.
		not = 0x66,
		/// Convert to int8, pushing int32 on stack.
		conv_i1 = 0x67,
		/// Convert to int16, pushing int32 on stack.
		conv_i2 = 0x68,
		/// Convert to int32, pushing int32 on stack.
		conv_i4 = 0x69,
		/// Convert to int64, pushing int64 on stack.
		conv_i8 = 0x6A,
		/// Convert to float32, pushing F on stack.
		conv_r4 = 0x6B,
		/// Convert to float64, pushing F on stack.
		conv_r8 = 0x6C,
		/// Convert to unsigned int32, pushing int32 on stack.
		conv_u4 = 0x6D,
		/// Convert to unsigned int64, pushing int64 on stack.
		conv_u8 = 0x6E,
		/// Call a method associated with an object.
		callvirt(MetadataToken) = 0x6F,
		/// Copy a value type from src to dest.
		cpobj(MetadataToken) = 0x70,
		/// Copy the value stored at address src to the stack.
		ldobj(MetadataToken) = 0x71,
		/// Push a string object for the literal string.
		ldstr(MetadataToken) = 0x72,
		/// Allocate an uninitialized object or value type and call ctor.
		newobj(MetadataToken) = 0x73,
		/// Cast obj to class.
		castclass(MetadataToken) = 0x74,
		/// Test if obj is an instance of class, returning null or an instance of that class or interface.
		isinst(MetadataToken) = 0x75,
		/// Convert unsigned integer to floating-point.
		conv_r_un = 0x76,
		/// Extract a value-type from obj, its boxed representation.
		unbox(MetadataToken) = 0x79,
		/// Throw an exception.
		throw = 0x7A,
		/// Push the value of field of object (or value type) obj, onto the stack.
		ldfld(MetadataToken) = 0x7B,
		/// Push the address of field of object obj on the stack.
		ldflda(MetadataToken) = 0x7C,
		/// Replace the value of field of the object obj with value.
		stfld(MetadataToken) = 0x7D,
		/// Push the value of the static field on the stack.
		ldsfld(MetadataToken) = 0x7E,
		/// Push the address of the static field, field, on the stack.
		ldsflda(MetadataToken) = 0x7F,
		/// Replace the value of the static field with val.
		stsfld(MetadataToken) = 0x80,
		/// Store a value of type typeTok at an address.
		stobj(MetadataToken) = 0x81,
		/// Convert unsigned to an int8 (on the stack as int32) and throw an exception on overflow.
		conv_ovf_i1_un = 0x82,
		/// Convert unsigned to an int16 (on the stack as int32) and throw an exception on overflow.
		conv_ovf_i2_un = 0x83,
		/// Convert unsigned to an int32 (on the stack as int32) and throw an exception on overflow.
		conv_ovf_i4_un = 0x84,
		/// Convert unsigned to an int64 (on the stack as int64) and throw an exception on overflow.
		conv_ovf_i8_un = 0x85,
		/// Convert unsigned to an unsigned int8 (on the stack as int32) and throw an exception on overflow.
		conv_ovf_u1_un = 0x86,
		/// Convert unsigned to an unsigned int16 (on the stack as int32) and throw an exception on overflow.
		conv_ovf_u2_un = 0x87,
		/// Convert unsigned to an unsigned int32 (on the stack as int32) and throw an exception on overflow.
		conv_ovf_u4_un = 0x88,
		/// Convert unsigned to an unsigned int64 (on the stack as int64) and throw an exception on overflow.
		conv_ovf_u8_un = 0x89,
		/// Convert unsigned to a native int (on the stack as native int) and throw an exception on overflow.
		conv_ovf_i_un = 0x8A,
		/// Convert unsigned to a native unsigned int (on the stack as native int) and throw an exception on overflow.
		conv_ovf_u_un = 0x8B,
		/// Convert a boxable value to its boxed form.
		box_(MetadataToken) = 0x8C,
		/// Create a new array with elements of type etype.
		newarr(MetadataToken) = 0x8D,
		/// Push the length (of type native unsigned int) of array on the stack.
		ldlen = 0x8E,
		/// Load the address of element at index onto the top of the stack.
		ldelema(MetadataToken) = 0x8F,
		/// Load the element with type int8 at index onto the top of the stack as an int32.
		ldelem_i1 = 0x90,
		/// Load the element with type unsigned int8 at index onto the top of the stack as an int32.
		ldelem_u1 = 0x91,
		/// Load the element with type int16 at index onto the top of the stack as an int32.
		ldelem_i2 = 0x92,
		/// Load the element with type unsigned int16 at index onto the top of the stack as an int32.
		ldelem_u2 = 0x93,
		/// Load the element with type int32 at index onto the top of the stack as an int32.
		ldelem_i4 = 0x94,
		/// Load the element with type unsigned int32 at index onto the top of the stack as an int32.
		ldelem_u4 = 0x95,
		/// Load the element with type int64 at index onto the top of the stack as an int64.
		ldelem_i8 = 0x96,
		/// Load the element with type native int at index onto the top of the stack as a native int.
		ldelem_i = 0x97,
		/// Load the element with type float32 at index onto the top of the stack as an F.
		ldelem_r4 = 0x98,
		/// Load the element with type float64 at index onto the top of the stack as an F.
		ldelem_r8 = 0x99,
		/// Load the element at index onto the top of the stack as an O.
		ldelem_ref = 0x9A,
		/// Replace array element at index with the native int value on the stack.
		stelem_i = 0x9B,
		/// Replace array element at index with the int8 value on the stack.
		stelem_i1 = 0x9C,
		/// Replace array element at index with the int16 value on the stack.
		stelem_i2 = 0x9D,
		/// Replace array element at index with the int32 value on the stack.
		stelem_i4 = 0x9E,
		/// Replace array element at index with the int64 value on the stack.
		stelem_i8 = 0x9F,
		/// Replace array element at index with the float32 value on the stack.
		stelem_r4 = 0xA0,
		/// Replace array element at index with the float64 value on the stack.
		stelem_r8 = 0xA1,
		/// Replace array element at index with the ref value on the stack.
		stelem_ref = 0xA2,
		/// Load the element at index onto the top of the stack.
		ldelem(MetadataToken) = 0xA3,
		/// Replace array element at index with the value on the stack.
		stelem(MetadataToken) = 0xA4,
		/// Extract a value-type from obj, its boxed representation.
		unbox_any(MetadataToken) = 0xA5,
		/// Convert to an int8 (on the stack as int32) and throw an exception on overflow.
		conv_ovf_i1 = 0xB3,
		/// Convert to an unsigned int8 (on the stack as int32) and throw an exception on overflow.
		conv_ovf_u1 = 0xB4,
		/// Convert to an int16 (on the stack as int32) and throw an exception on overflow.
		conv_ovf_i2 = 0xB5,
		/// Convert to an unsigned int16 (on the stack as int32) and throw an exception on overflow.
		conv_ovf_u2 = 0xB6,
		/// Convert to an int32 (on the stack as int32) and throw an exception on overflow.
		conv_ovf_i4 = 0xB7,
		/// Convert to an unsigned int32 (on the stack as int32) and throw an exception on overflow.
		conv_ovf_u4 = 0xB8,
		/// Convert to an int64 (on the stack as int64) and throw an exception on overflow.
		conv_ovf_i8 = 0xB9,
		/// Convert to an unsigned int64 (on the stack as int64) and throw an exception on overflow.
		conv_ovf_u8 = 0xBA,
		/// Push the address stored in a typed reference.
		refanyval(MetadataToken) = 0xC2,
		/// Throw ArithmeticException if value is not a finite number.
		ckfinite = 0xC3,
		/// Push a typed reference to ptr of type class onto the stack.
		mkrefany(MetadataToken) = 0xC6,
		/// Convert metadata token to its runtime representation.
		ldtoken(MetadataToken) = 0xD0,
		/// Convert to unsigned int16, pushing int32 on stack.
		conv_u2 = 0xD1,
		/// Convert to unsigned int8, pushing int32 on stack.
		conv_u1 = 0xD2,
		/// Convert to native int, pushing native int on stack.
		conv_i = 0xD3,
		/// Convert to a native int (on the stack as native int) and throw an exception on overflow.
		conv_ovf_i = 0xD4,
		/// Convert to a native unsigned int (on the stack as native int) and throw an exception on overflow.
		conv_ovf_u = 0xD5,
		/// Add signed integer values with overflow check.
		add_ovf = 0xD6,
		/// Add unsigned integer values with overflow check.
		add_ovf_un = 0xD7,
		/// Multiply signed integer values. Signed result shall fit in same size.
		mul_ovf = 0xD8,
		/// Multiply unsigned integer values. Unsigned result shall fit in same size.
		mul_ovf_un = 0xD9,
		/// Subtract native int from a native int. Signed result shall fit in same size.
		sub_ovf = 0xDA,
		/// Subtract native unsigned int from a native unsigned int. Unsigned result shall fit in same size.
		sub_ovf_un = 0xDB,
		/// End finally clause of an exception block.
		endfinally = 0xDC,
		/// Exit a protected region of code.
		leave(i32) = 0xDD,
		/// Exit a protected region of code, short form.
		leave_s(i8) = 0xDE,
		/// Store value of type native int into memory at address.
		stind_i = 0xDF,
		/// Convert to native unsigned int, pushing native int on stack.
		conv_u = 0xE0,
	}
	extended {
		/// Return argument list handle for the current method.
		arglist = 0x00,
		/// Push 1 (of type int32) if value1 equals value2, else push 0.
		ceq = 0x01,
		/// Push 1 (of type int32) if value1 greater that value2, else push 0.
		cgt = 0x02,
		/// Push 1 (of type int32) if value1 greater that value2, unsigned or unordered, else push 0.
		cgt_un = 0x03,
		/// Push 1 (of type int32) if value1 lower than value2, else push 0.
		clt = 0x04,
		/// Push 1 (of type int32) if value1 lower than value2, unsigned or unordered, else push 0.
		clt_un = 0x05,
		/// Push a pointer to a method referenced by method, on the stack.
		ldftn(MetadataToken) = 0x06,
		/// Push address of virtual method on the stack.
		ldvirtftn(MetadataToken) = 0x07,
		/// Load argument numbered num onto the stack.
		ldarg(u16) = 0x09,
		/// Fetch the address of argument argNum.
		ldarga(u16) = 0x0A,
		/// Store value to the argument numbered num.
		starg(u16) = 0x0B,
		/// Load local variable of index indx onto stack.
		ldloc(u16) = 0x0C,
		/// Load address of local variable with index indx.
		ldloca(u16) = 0x0D,
		/// Pop a value from stack into local variable indx.
		stloc(u16) = 0x0E,
		/// Allocate space from the local memory pool.
		localloc = 0x0F,
		/// End an exception handling filter clause.
		endfilter = 0x11,
		/// Subsequent pointer instruction might be unaligned.
		unaligned_(u8) = 0x12,
		/// Subsequent pointer reference is volatile.
		volatile_ = 0x13,
		/// Subsequent call terminates current method.
		tail_ = 0x14,
		/// Initialize the value at address dest.
		initobj(MetadataToken) = 0x15,
		/// Call a virtual method on a type constrained to be type T.
		constrained_(MetadataToken) = 0x16,
		/// Copy data from memory to memory.
		cpblk = 0x17,
		/// Set all bytes in a block of memory to a given byte value.
		initblk = 0x18,
		/// The specified fault check(s) normally performed as part of the execution of the subsequent instruction can/shall be skipped.
		no_(u8) = 0x19,
		/// Rethrow the current exception.
		rethrow = 0x1A,
		/// Push the size, in bytes, of a type as an unsigned int32.
		sizeof_(MetadataToken) = 0x1C,
		/// Push the type token stored in a typed reference.
		refanytype = 0x1D,
		/// Specify that the subsequent array address operation performs no type check at runtime, and that it returns a controlled-mutability managed pointer.
		readonly_ = 0x1E,
	}
}

/// Walks the IL byte stream yielding `(offset, opcode)` pairs.
pub struct InstructionIter<'l> {
	stream: Cursor<&'l [u8]>,
}

impl<'l> InstructionIter<'l> {
	pub fn new(code: &'l [u8]) -> Self {
		Self {
			stream: Cursor::new(code),
		}
	}
}

impl<'l> Iterator for InstructionIter<'l> {
	type Item = Result<(u32, OpCode<'l>)>;

	fn next(&mut self) -> Option<Self::Item> {
		let offset = self.stream.position() as u32;
		if offset as usize >= self.stream.get_ref().len() {
			return None;
		}
		Some(OpCode::read(&mut self.stream).map(|op| (offset, op)))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn decodes_basic_arithmetic_body() {
		// ldc.i4 7; ldc.i4.5; add; ret
		let code = [0x20u8, 7, 0, 0, 0, 0x1B, 0x58, 0x2A];
		let decoded: Vec<_> = InstructionIter::new(&code)
			.collect::<Result<Vec<_>>>()
			.unwrap();
		assert_eq!(decoded.len(), 4);
		assert_eq!(decoded[0], (0, OpCode::ldc_i4(7)));
		assert_eq!(decoded[1], (5, OpCode::ldc_i4_5));
		assert_eq!(decoded[2], (6, OpCode::add));
		assert_eq!(decoded[3], (7, OpCode::ret));
	}

	#[test]
	fn decodes_extended_page_and_switch() {
		// ceq; switch (2 targets); ret
		let code = [
			0xFEu8, 0x01, 0x45, 2, 0, 0, 0, 5, 0, 0, 0, 0xF6, 0xFF, 0xFF, 0xFF, 0x2A,
		];
		let decoded: Vec<_> = InstructionIter::new(&code)
			.collect::<Result<Vec<_>>>()
			.unwrap();
		assert_eq!(decoded[0].1, OpCode::ceq);
		let OpCode::switch(table) = decoded[1].1 else {
			panic!("expected switch");
		};
		assert_eq!(table.targets().collect::<Vec<_>>(), [5, -10]);
		assert_eq!(decoded[2].1, OpCode::ret);
	}
}
