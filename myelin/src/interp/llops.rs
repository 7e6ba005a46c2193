//! The low-level instruction catalog: a flat, typed, offset-addressed
//! instruction set specialized by operand type, width and alignment.
//!
//! Encoding uses the five-prefix scheme: a single byte in `0x00..=0xEA`
//! selects a short variant; `0xFB` prefixes wide variants of the common
//! opcodes; `0xFC` the indirect-load/store and conversion group; `0xFD`
//! overflow-checked, unaligned and large-offset variants; `0xFE` the
//! residual page. Every instruction is padded to a four-byte multiple with
//! operand fields at fixed, naturally aligned offsets. `Switch` is the one
//! variable-length instruction: its `int32` target table follows the header.
//!
//! The catalog below is mechanical; the tables at the bottom wire the
//! per-opcode constants together.

pub const PREFIX_WIDE: u8 = 0xFB;
pub const PREFIX_MEM: u8 = 0xFC;
pub const PREFIX_CHECKED: u8 = 0xFD;
pub const PREFIX_MISC: u8 = 0xFE;
pub const MAX_SHORT_OPCODE: u8 = 0xEA;

#[repr(u16)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum OpCode {
	InitLocals1Short,
	InitLocals2Short,
	InitLocals3Short,
	InitLocals4Short,
	InitLocals,
	InitLocalsShort,
	LdLocI1,
	LdLocI1Short,
	LdLocU1,
	LdLocU1Short,
	LdLocI2,
	LdLocI2Short,
	LdLocU2,
	LdLocU2Short,
	LdLocI4,
	LdLocI4Short,
	LdLocI8,
	LdLocI8Short,
	LdLocAny,
	LdLocAnyShort,
	LdLoca,
	LdLocaShort,
	StLocI1,
	StLocI1Short,
	StLocI2,
	StLocI2Short,
	StLocI4,
	StLocI4Short,
	StLocI8,
	StLocI8Short,
	StLocAny,
	StLocAnyShort,
	LdNull,
	LdNullShort,
	LdcI4I2,
	LdcI4I2Short,
	LdcI4I4,
	LdcI4I4Short,
	LdcI8I2,
	LdcI8I2Short,
	LdcI8I4,
	LdcI8I4Short,
	LdcI8I8,
	LdcI8I8Short,
	LdStr,
	LdStrShort,
	LdToken,
	LdTokenShort,
	Br,
	BrShort,
	BrTrueI4,
	BrTrueI4Short,
	BrFalseI4,
	BrFalseI4Short,
	BrTrueI8,
	BrTrueI8Short,
	BrFalseI8,
	BrFalseI8Short,
	BeqI4,
	BeqI4Short,
	BeqI8,
	BeqI8Short,
	BeqR4,
	BeqR8,
	BgeI4,
	BgeI4Short,
	BgeI8,
	BgeI8Short,
	BgeR4,
	BgeR8,
	BgtI4,
	BgtI4Short,
	BgtI8,
	BgtI8Short,
	BgtR4,
	BgtR8,
	BleI4,
	BleI4Short,
	BleI8,
	BleI8Short,
	BleR4,
	BleR8,
	BltI4,
	BltI4Short,
	BltI8,
	BltI8Short,
	BltR4,
	BltR8,
	BneUnI4,
	BneUnI4Short,
	BneUnI8,
	BneUnI8Short,
	BneUnR4,
	BneUnR8,
	BgeUnI4,
	BgeUnI4Short,
	BgeUnI8,
	BgeUnI8Short,
	BgeUnR4,
	BgeUnR8,
	BgtUnI4,
	BgtUnI4Short,
	BgtUnI8,
	BgtUnI8Short,
	BgtUnR4,
	BgtUnR8,
	BleUnI4,
	BleUnI4Short,
	BleUnI8,
	BleUnI8Short,
	BleUnR4,
	BleUnR8,
	BltUnI4,
	BltUnI4Short,
	BltUnI8,
	BltUnI8Short,
	BltUnR4,
	BltUnR8,
	Switch,
	AddI4,
	AddI4Short,
	AddI8,
	AddI8Short,
	AddR4,
	AddR4Short,
	AddR8,
	AddR8Short,
	SubI4,
	SubI4Short,
	SubI8,
	SubI8Short,
	SubR4,
	SubR4Short,
	SubR8,
	SubR8Short,
	MulI4,
	MulI4Short,
	MulI8,
	MulI8Short,
	MulR4,
	MulR4Short,
	MulR8,
	MulR8Short,
	DivI4,
	DivI4Short,
	DivI8,
	DivI8Short,
	DivR4,
	DivR4Short,
	DivR8,
	DivR8Short,
	RemI4,
	RemI4Short,
	RemI8,
	RemI8Short,
	RemR4,
	RemR4Short,
	RemR8,
	RemR8Short,
	DivUnI4,
	DivUnI4Short,
	DivUnI8,
	DivUnI8Short,
	RemUnI4,
	RemUnI4Short,
	RemUnI8,
	RemUnI8Short,
	AndI4,
	AndI4Short,
	AndI8,
	AndI8Short,
	OrI4,
	OrI4Short,
	OrI8,
	OrI8Short,
	XorI4,
	XorI4Short,
	XorI8,
	XorI8Short,
	ShlI4,
	ShlI4Short,
	ShlI8,
	ShrI4,
	ShrI4Short,
	ShrI8,
	ShrUnI4,
	ShrUnI4Short,
	ShrUnI8,
	NegI4,
	NegI4Short,
	NegI8,
	NegI8Short,
	NegR4,
	NegR4Short,
	NegR8,
	NegR8Short,
	NotI4,
	NotI4Short,
	NotI8,
	NotI8Short,
	ConvI1I4,
	ConvI1I4Short,
	ConvI1I8,
	ConvI1I8Short,
	ConvI1R4,
	ConvI1R4Short,
	ConvI1R8,
	ConvI1R8Short,
	ConvU1I4,
	ConvU1I4Short,
	ConvU1I8,
	ConvU1I8Short,
	ConvU1R4,
	ConvU1R4Short,
	ConvU1R8,
	ConvU1R8Short,
	ConvI2I4,
	ConvI2I4Short,
	ConvI2I8,
	ConvI2I8Short,
	ConvI2R4,
	ConvI2R4Short,
	ConvI2R8,
	ConvI2R8Short,
	ConvU2I4,
	ConvU2I4Short,
	ConvU2I8,
	ConvU2I8Short,
	ConvU2R4,
	ConvU2R4Short,
	ConvU2R8,
	ConvU2R8Short,
	ConvI4I8,
	ConvI4I8Short,
	ConvI4R4,
	ConvI4R4Short,
	ConvI4R8,
	ConvI4R8Short,
	ConvU4I8,
	ConvU4I8Short,
	ConvU4R4,
	ConvU4R4Short,
	ConvU4R8,
	ConvU4R8Short,
	ConvI8I4,
	ConvI8I4Short,
	ConvI8U4,
	ConvI8U4Short,
	ConvI8R4,
	ConvI8R4Short,
	ConvI8R8,
	ConvI8R8Short,
	ConvU8I4,
	ConvU8I4Short,
	ConvU8U4,
	ConvU8U4Short,
	ConvU8R4,
	ConvU8R4Short,
	ConvU8R8,
	ConvU8R8Short,
	ConvR4I4,
	ConvR4I4Short,
	ConvR4I8,
	ConvR4I8Short,
	ConvR4R8,
	ConvR4R8Short,
	ConvR4U4,
	ConvR4U4Short,
	ConvR4U8,
	ConvR4U8Short,
	ConvR8I4,
	ConvR8I4Short,
	ConvR8I8,
	ConvR8I8Short,
	ConvR8R4,
	ConvR8R4Short,
	ConvR8U4,
	ConvR8U4Short,
	ConvR8U8,
	ConvR8U8Short,
	CkFiniteR4,
	CkFiniteR8,
	CeqI4,
	CeqI4Short,
	CeqI8,
	CeqI8Short,
	CeqR4,
	CeqR4Short,
	CeqR8,
	CeqR8Short,
	CgtI4,
	CgtI4Short,
	CgtI8,
	CgtI8Short,
	CgtR4,
	CgtR8,
	CgtUnI4,
	CgtUnI4Short,
	CgtUnI8,
	CgtUnI8Short,
	CgtUnR4,
	CgtUnR8,
	CltI4,
	CltI4Short,
	CltI8,
	CltI8Short,
	CltR4,
	CltR8,
	CltUnI4,
	CltUnI4Short,
	CltUnI8,
	CltUnI8Short,
	CltUnR4,
	CltUnR8,
	LdIndI1,
	LdIndI1Short,
	LdIndU1,
	LdIndU1Short,
	LdIndI2,
	LdIndI2Short,
	LdIndU2,
	LdIndU2Short,
	LdIndI4,
	LdIndI4Short,
	LdIndI8,
	LdIndI8Short,
	LdIndRef,
	LdIndRefShort,
	StIndI1,
	StIndI1Short,
	StIndI2,
	StIndI2Short,
	StIndI4,
	StIndI4Short,
	StIndI8,
	StIndI8Short,
	StIndRef,
	StIndRefShort,
	LocAlloc,
	InitBlk,
	CpBlk,
	GetEnumLongHashCode,
	InitObjI1,
	InitObjI1Short,
	InitObjI2,
	InitObjI2Short,
	InitObjI4,
	InitObjI4Short,
	InitObjI8,
	InitObjI8Short,
	InitObjAny,
	InitObjAnyShort,
	CpObjI1,
	CpObjI1Short,
	CpObjI2,
	CpObjI2Short,
	CpObjI4,
	CpObjI4Short,
	CpObjI8,
	CpObjI8Short,
	CpObjAny,
	CpObjAnyShort,
	LdObjAny,
	LdObjAnyShort,
	StObjAny,
	StObjAnyShort,
	CastClass,
	CastClassShort,
	IsInst,
	IsInstShort,
	Box,
	BoxShort,
	Unbox,
	UnboxShort,
	UnboxAny,
	UnboxAnyShort,
	NewArr,
	NewArrShort,
	LdLen,
	LdLenShort,
	Ldelema,
	LdelemaShort,
	LdelemaReadOnly,
	LdelemI1,
	LdelemI1Short,
	LdelemU1,
	LdelemU1Short,
	LdelemI2,
	LdelemI2Short,
	LdelemU2,
	LdelemU2Short,
	LdelemI4,
	LdelemI4Short,
	LdelemI8,
	LdelemI8Short,
	LdelemRef,
	LdelemRefShort,
	LdelemAny,
	LdelemAnyShort,
	StelemI1,
	StelemI1Short,
	StelemI2,
	StelemI2Short,
	StelemI4,
	StelemI4Short,
	StelemI8,
	StelemI8Short,
	StelemRef,
	StelemRefShort,
	StelemAny,
	StelemAnyShort,
	Ldftn,
	LdftnShort,
	Ldvirtftn,
	LdvirtftnShort,
	LdfldI1,
	LdfldI1Short,
	LdfldU1,
	LdfldU1Short,
	LdfldI2,
	LdfldI2Short,
	LdfldU2,
	LdfldU2Short,
	LdfldI4,
	LdfldI4Short,
	LdfldI8,
	LdfldI8Short,
	LdfldAny,
	LdfldAnyShort,
	LdvfldI1,
	LdvfldI1Short,
	LdvfldU1,
	LdvfldU1Short,
	LdvfldI2,
	LdvfldI2Short,
	LdvfldU2,
	LdvfldU2Short,
	LdvfldI4,
	LdvfldI4Short,
	LdvfldI8,
	LdvfldI8Short,
	LdvfldAny,
	LdvfldAnyShort,
	Ldflda,
	LdfldaShort,
	StfldI1,
	StfldI1Short,
	StfldI2,
	StfldI2Short,
	StfldI4,
	StfldI4Short,
	StfldI8,
	StfldI8Short,
	StfldAny,
	StfldAnyShort,
	LdfldI1Large,
	LdfldU1Large,
	LdfldI2Large,
	LdfldU2Large,
	LdfldI4Large,
	LdfldI8Large,
	LdfldAnyLarge,
	LdfldaLarge,
	StfldI1Large,
	StfldI2Large,
	StfldI4Large,
	StfldI8Large,
	StfldAnyLarge,
	LdfldI2Unaligned,
	LdfldU2Unaligned,
	LdfldI4Unaligned,
	LdfldI8Unaligned,
	StfldI2Unaligned,
	StfldI4Unaligned,
	StfldI8Unaligned,
	LdIndI2Unaligned,
	LdIndU2Unaligned,
	LdIndI4Unaligned,
	LdIndI8Unaligned,
	StIndI2Unaligned,
	StIndI4Unaligned,
	StIndI8Unaligned,
	LdsfldI1,
	LdsfldI1Short,
	LdsfldU1,
	LdsfldU1Short,
	LdsfldI2,
	LdsfldI2Short,
	LdsfldU2,
	LdsfldU2Short,
	LdsfldI4,
	LdsfldI4Short,
	LdsfldI8,
	LdsfldI8Short,
	LdsfldAny,
	LdsfldAnyShort,
	Ldsflda,
	LdsfldaShort,
	LdsfldRvaData,
	LdsfldRvaDataShort,
	StsfldI1,
	StsfldI1Short,
	StsfldI2,
	StsfldI2Short,
	StsfldI4,
	StsfldI4Short,
	StsfldI8,
	StsfldI8Short,
	StsfldAny,
	StsfldAnyShort,
	RetVoid,
	RetVoidShort,
	RetI4,
	RetI4Short,
	RetI8,
	RetI8Short,
	RetAny,
	RetAnyShort,
	CallInterp,
	CallInterpShort,
	CallVirtInterp,
	CallVirtInterpShort,
	CallInternalCall,
	CallInternalCallShort,
	CallIntrinsic,
	CallIntrinsicShort,
	CallPInvoke,
	CallPInvokeShort,
	CallRuntimeImplemented,
	CallRuntimeImplementedShort,
	CalliInterp,
	CalliInterpShort,
	NewObjInterp,
	NewObjInterpShort,
	NewValueTypeInterp,
	NewValueTypeInterpShort,
	NewObjInternalCall,
	NewObjInternalCallShort,
	NewObjIntrinsic,
	NewObjIntrinsicShort,
	Throw,
	ThrowShort,
	Rethrow,
	RethrowShort,
	LeaveTryWithFinally,
	LeaveTryWithFinallyShort,
	LeaveCatchWithFinally,
	LeaveCatchWithFinallyShort,
	LeaveCatchWithoutFinally,
	LeaveCatchWithoutFinallyShort,
	EndFilter,
	EndFilterShort,
	EndFinally,
	EndFinallyShort,
	EndFault,
	EndFaultShort,
	AddOvfI4,
	AddOvfI8,
	AddOvfUnI4,
	AddOvfUnI8,
	SubOvfI4,
	SubOvfI8,
	SubOvfUnI4,
	SubOvfUnI8,
	MulOvfI4,
	MulOvfI8,
	MulOvfUnI4,
	MulOvfUnI8,
	ConvOvfI1I4,
	ConvOvfI1I8,
	ConvOvfI1R4,
	ConvOvfI1R8,
	ConvOvfU1I4,
	ConvOvfU1I8,
	ConvOvfU1R4,
	ConvOvfU1R8,
	ConvOvfI2I4,
	ConvOvfI2I8,
	ConvOvfI2R4,
	ConvOvfI2R8,
	ConvOvfU2I4,
	ConvOvfU2I8,
	ConvOvfU2R4,
	ConvOvfU2R8,
	ConvOvfI4I4,
	ConvOvfI4I8,
	ConvOvfI4R4,
	ConvOvfI4R8,
	ConvOvfU4I4,
	ConvOvfU4I8,
	ConvOvfU4R4,
	ConvOvfU4R8,
	ConvOvfI8I4,
	ConvOvfI8I8,
	ConvOvfI8R4,
	ConvOvfI8R8,
	ConvOvfU8I4,
	ConvOvfU8I8,
	ConvOvfU8R4,
	ConvOvfU8R8,
	ConvOvfI1U4Un,
	ConvOvfI1U8Un,
	ConvOvfU1U4Un,
	ConvOvfU1U8Un,
	ConvOvfI2U4Un,
	ConvOvfI2U8Un,
	ConvOvfU2U4Un,
	ConvOvfU2U8Un,
	ConvOvfI4U4Un,
	ConvOvfI4U8Un,
	ConvOvfU4U4Un,
	ConvOvfU4U8Un,
	ConvOvfI8U4Un,
	ConvOvfI8U8Un,
	ConvOvfU8U4Un,
	ConvOvfU8U8Un,
	Illegal,
	Nop,
	Arglist,
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct InitLocals1 { pub offset: u16 }
impl InitLocals1 {
	pub const WIDE_SIZE: usize = 4;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let offset = code[at + 1] as u16;
			return Self { offset };
		}
		let offset = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		Self { offset }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.offset as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.offset.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.offset <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct InitLocals2 { pub offset: u16 }
impl InitLocals2 {
	pub const WIDE_SIZE: usize = 4;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let offset = code[at + 1] as u16;
			return Self { offset };
		}
		let offset = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		Self { offset }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.offset as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.offset.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.offset <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct InitLocals3 { pub offset: u16 }
impl InitLocals3 {
	pub const WIDE_SIZE: usize = 4;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let offset = code[at + 1] as u16;
			return Self { offset };
		}
		let offset = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		Self { offset }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.offset as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.offset.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.offset <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct InitLocals4 { pub offset: u16 }
impl InitLocals4 {
	pub const WIDE_SIZE: usize = 4;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let offset = code[at + 1] as u16;
			return Self { offset };
		}
		let offset = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		Self { offset }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.offset as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.offset.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.offset <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct InitLocals { pub offset: u16, pub size: u16 }
impl InitLocals {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let offset = code[at + 1] as u16;
			let size = code[at + 2] as u16;
			return Self { offset, size };
		}
		let offset = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let size = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { offset, size }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.offset as u8;
			out[at + 2] = self.size as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.offset.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.size.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.offset <= u8::MAX as u16 && self.size <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LdLocI1 { pub src: u16, pub dst: u16 }
impl LdLocI1 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			return Self { src, dst };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LdLocU1 { pub src: u16, pub dst: u16 }
impl LdLocU1 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			return Self { src, dst };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LdLocI2 { pub src: u16, pub dst: u16 }
impl LdLocI2 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			return Self { src, dst };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LdLocU2 { pub src: u16, pub dst: u16 }
impl LdLocU2 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			return Self { src, dst };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LdLocI4 { pub src: u16, pub dst: u16 }
impl LdLocI4 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			return Self { src, dst };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LdLocI8 { pub src: u16, pub dst: u16 }
impl LdLocI8 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			return Self { src, dst };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LdLocAny { pub src: u16, pub dst: u16, pub size: u16 }
impl LdLocAny {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			let size = code[at + 3] as u16;
			return Self { src, dst, size };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let size = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { src, dst, size }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.dst as u8;
			out[at + 3] = self.size as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.size.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16 && self.size <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LdLoca { pub src: u16, pub dst: u16 }
impl LdLoca {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			return Self { src, dst };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct StLocI1 { pub src: u16, pub dst: u16 }
impl StLocI1 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			return Self { src, dst };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct StLocI2 { pub src: u16, pub dst: u16 }
impl StLocI2 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			return Self { src, dst };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct StLocI4 { pub src: u16, pub dst: u16 }
impl StLocI4 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			return Self { src, dst };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct StLocI8 { pub src: u16, pub dst: u16 }
impl StLocI8 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			return Self { src, dst };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct StLocAny { pub src: u16, pub dst: u16, pub size: u16 }
impl StLocAny {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			let size = code[at + 3] as u16;
			return Self { src, dst, size };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let size = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { src, dst, size }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.dst as u8;
			out[at + 3] = self.size as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.size.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16 && self.size <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LdNull { pub dst: u16 }
impl LdNull {
	pub const WIDE_SIZE: usize = 4;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let dst = code[at + 1] as u16;
			return Self { dst };
		}
		let dst = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		Self { dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LdcI4I2 { pub dst: u16, pub value: i16 }
impl LdcI4I2 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let dst = code[at + 1] as u16;
			let value = i16::from_le_bytes([code[at + 2], code[at + 3]]);
			return Self { dst, value };
		}
		let dst = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let value = i16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { dst, value }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.dst as u8;
			out[at + 2..at + 4].copy_from_slice(&self.value.to_le_bytes());
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.dst.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.value.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LdcI4I4 { pub dst: u16, pub value: i32 }
impl LdcI4I4 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let dst = code[at + 1] as u16;
			let value = i32::from_le_bytes([code[at + 4], code[at + 5], code[at + 6], code[at + 7]]);
			return Self { dst, value };
		}
		let dst = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let value = i32::from_le_bytes([code[at + 4], code[at + 5], code[at + 6], code[at + 7]]);
		Self { dst, value }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.dst as u8;
			out[at + 4..at + 8].copy_from_slice(&self.value.to_le_bytes());
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.dst.to_le_bytes());
		out[at + 4..at + 8].copy_from_slice(&self.value.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LdcI8I2 { pub dst: u16, pub value: i16 }
impl LdcI8I2 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let dst = code[at + 1] as u16;
			let value = i16::from_le_bytes([code[at + 2], code[at + 3]]);
			return Self { dst, value };
		}
		let dst = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let value = i16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { dst, value }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.dst as u8;
			out[at + 2..at + 4].copy_from_slice(&self.value.to_le_bytes());
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.dst.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.value.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LdcI8I4 { pub dst: u16, pub value: i32 }
impl LdcI8I4 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let dst = code[at + 1] as u16;
			let value = i32::from_le_bytes([code[at + 4], code[at + 5], code[at + 6], code[at + 7]]);
			return Self { dst, value };
		}
		let dst = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let value = i32::from_le_bytes([code[at + 4], code[at + 5], code[at + 6], code[at + 7]]);
		Self { dst, value }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.dst as u8;
			out[at + 4..at + 8].copy_from_slice(&self.value.to_le_bytes());
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.dst.to_le_bytes());
		out[at + 4..at + 8].copy_from_slice(&self.value.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LdcI8I8 { pub dst: u16, pub value_low: i32, pub value_high: i32 }
impl LdcI8I8 {
	pub const WIDE_SIZE: usize = 12;
	pub const SHORT_SIZE: usize = 12;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let dst = code[at + 1] as u16;
			let value_low = i32::from_le_bytes([code[at + 4], code[at + 5], code[at + 6], code[at + 7]]);
			let value_high = i32::from_le_bytes([code[at + 8], code[at + 9], code[at + 10], code[at + 11]]);
			return Self { dst, value_low, value_high };
		}
		let dst = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let value_low = i32::from_le_bytes([code[at + 4], code[at + 5], code[at + 6], code[at + 7]]);
		let value_high = i32::from_le_bytes([code[at + 8], code[at + 9], code[at + 10], code[at + 11]]);
		Self { dst, value_low, value_high }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.dst as u8;
			out[at + 4..at + 8].copy_from_slice(&self.value_low.to_le_bytes());
			out[at + 8..at + 12].copy_from_slice(&self.value_high.to_le_bytes());
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.dst.to_le_bytes());
		out[at + 4..at + 8].copy_from_slice(&self.value_low.to_le_bytes());
		out[at + 8..at + 12].copy_from_slice(&self.value_high.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LdStr { pub str_idx: u16, pub dst: u16 }
impl LdStr {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let str_idx = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			return Self { str_idx, dst };
		}
		let str_idx = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { str_idx, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.str_idx as u8;
			out[at + 2] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.str_idx.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.str_idx <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LdToken { pub handle_idx: u16, pub dst: u16 }
impl LdToken {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let handle_idx = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			return Self { handle_idx, dst };
		}
		let handle_idx = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { handle_idx, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.handle_idx as u8;
			out[at + 2] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.handle_idx.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.handle_idx <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct Br { pub target: i32 }
impl Br {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let target = code[at + 1] as i8 as i32;
			return Self { target };
		}
		let target = i32::from_le_bytes([code[at + 4], code[at + 5], code[at + 6], code[at + 7]]);
		Self { target }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = (self.target as i8) as u8;
			return;
		}
		out[at + 4..at + 8].copy_from_slice(&self.target.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		i8::try_from(self.target).is_ok()
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct BrTrueI4 { pub cond: u16, pub target: i32 }
impl BrTrueI4 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let cond = code[at + 1] as u16;
			let target = code[at + 2] as i8 as i32;
			return Self { cond, target };
		}
		let cond = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let target = i32::from_le_bytes([code[at + 4], code[at + 5], code[at + 6], code[at + 7]]);
		Self { cond, target }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.cond as u8;
			out[at + 2] = (self.target as i8) as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.cond.to_le_bytes());
		out[at + 4..at + 8].copy_from_slice(&self.target.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.cond <= u8::MAX as u16 && i8::try_from(self.target).is_ok()
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct BrFalseI4 { pub cond: u16, pub target: i32 }
impl BrFalseI4 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let cond = code[at + 1] as u16;
			let target = code[at + 2] as i8 as i32;
			return Self { cond, target };
		}
		let cond = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let target = i32::from_le_bytes([code[at + 4], code[at + 5], code[at + 6], code[at + 7]]);
		Self { cond, target }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.cond as u8;
			out[at + 2] = (self.target as i8) as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.cond.to_le_bytes());
		out[at + 4..at + 8].copy_from_slice(&self.target.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.cond <= u8::MAX as u16 && i8::try_from(self.target).is_ok()
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct BrTrueI8 { pub cond: u16, pub target: i32 }
impl BrTrueI8 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let cond = code[at + 1] as u16;
			let target = code[at + 2] as i8 as i32;
			return Self { cond, target };
		}
		let cond = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let target = i32::from_le_bytes([code[at + 4], code[at + 5], code[at + 6], code[at + 7]]);
		Self { cond, target }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.cond as u8;
			out[at + 2] = (self.target as i8) as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.cond.to_le_bytes());
		out[at + 4..at + 8].copy_from_slice(&self.target.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.cond <= u8::MAX as u16 && i8::try_from(self.target).is_ok()
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct BrFalseI8 { pub cond: u16, pub target: i32 }
impl BrFalseI8 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let cond = code[at + 1] as u16;
			let target = code[at + 2] as i8 as i32;
			return Self { cond, target };
		}
		let cond = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let target = i32::from_le_bytes([code[at + 4], code[at + 5], code[at + 6], code[at + 7]]);
		Self { cond, target }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.cond as u8;
			out[at + 2] = (self.target as i8) as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.cond.to_le_bytes());
		out[at + 4..at + 8].copy_from_slice(&self.target.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.cond <= u8::MAX as u16 && i8::try_from(self.target).is_ok()
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct BeqI4 { pub lhs: u16, pub rhs: u16, pub target: i32 }
impl BeqI4 {
	pub const WIDE_SIZE: usize = 12;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let lhs = code[at + 1] as u16;
			let rhs = code[at + 2] as u16;
			let target = code[at + 3] as i8 as i32;
			return Self { lhs, rhs, target };
		}
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let target = i32::from_le_bytes([code[at + 8], code[at + 9], code[at + 10], code[at + 11]]);
		Self { lhs, rhs, target }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.lhs as u8;
			out[at + 2] = self.rhs as u8;
			out[at + 3] = (self.target as i8) as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 8..at + 12].copy_from_slice(&self.target.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.lhs <= u8::MAX as u16 && self.rhs <= u8::MAX as u16 && i8::try_from(self.target).is_ok()
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct BeqI8 { pub lhs: u16, pub rhs: u16, pub target: i32 }
impl BeqI8 {
	pub const WIDE_SIZE: usize = 12;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let lhs = code[at + 1] as u16;
			let rhs = code[at + 2] as u16;
			let target = code[at + 3] as i8 as i32;
			return Self { lhs, rhs, target };
		}
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let target = i32::from_le_bytes([code[at + 8], code[at + 9], code[at + 10], code[at + 11]]);
		Self { lhs, rhs, target }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.lhs as u8;
			out[at + 2] = self.rhs as u8;
			out[at + 3] = (self.target as i8) as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 8..at + 12].copy_from_slice(&self.target.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.lhs <= u8::MAX as u16 && self.rhs <= u8::MAX as u16 && i8::try_from(self.target).is_ok()
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct BeqR4 { pub lhs: u16, pub rhs: u16, pub target: i32 }
impl BeqR4 {
	pub const WIDE_SIZE: usize = 12;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let target = i32::from_le_bytes([code[at + 8], code[at + 9], code[at + 10], code[at + 11]]);
		Self { lhs, rhs, target }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 8..at + 12].copy_from_slice(&self.target.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct BeqR8 { pub lhs: u16, pub rhs: u16, pub target: i32 }
impl BeqR8 {
	pub const WIDE_SIZE: usize = 12;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let target = i32::from_le_bytes([code[at + 8], code[at + 9], code[at + 10], code[at + 11]]);
		Self { lhs, rhs, target }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 8..at + 12].copy_from_slice(&self.target.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct BgeI4 { pub lhs: u16, pub rhs: u16, pub target: i32 }
impl BgeI4 {
	pub const WIDE_SIZE: usize = 12;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let lhs = code[at + 1] as u16;
			let rhs = code[at + 2] as u16;
			let target = code[at + 3] as i8 as i32;
			return Self { lhs, rhs, target };
		}
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let target = i32::from_le_bytes([code[at + 8], code[at + 9], code[at + 10], code[at + 11]]);
		Self { lhs, rhs, target }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.lhs as u8;
			out[at + 2] = self.rhs as u8;
			out[at + 3] = (self.target as i8) as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 8..at + 12].copy_from_slice(&self.target.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.lhs <= u8::MAX as u16 && self.rhs <= u8::MAX as u16 && i8::try_from(self.target).is_ok()
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct BgeI8 { pub lhs: u16, pub rhs: u16, pub target: i32 }
impl BgeI8 {
	pub const WIDE_SIZE: usize = 12;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let lhs = code[at + 1] as u16;
			let rhs = code[at + 2] as u16;
			let target = code[at + 3] as i8 as i32;
			return Self { lhs, rhs, target };
		}
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let target = i32::from_le_bytes([code[at + 8], code[at + 9], code[at + 10], code[at + 11]]);
		Self { lhs, rhs, target }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.lhs as u8;
			out[at + 2] = self.rhs as u8;
			out[at + 3] = (self.target as i8) as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 8..at + 12].copy_from_slice(&self.target.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.lhs <= u8::MAX as u16 && self.rhs <= u8::MAX as u16 && i8::try_from(self.target).is_ok()
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct BgeR4 { pub lhs: u16, pub rhs: u16, pub target: i32 }
impl BgeR4 {
	pub const WIDE_SIZE: usize = 12;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let target = i32::from_le_bytes([code[at + 8], code[at + 9], code[at + 10], code[at + 11]]);
		Self { lhs, rhs, target }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 8..at + 12].copy_from_slice(&self.target.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct BgeR8 { pub lhs: u16, pub rhs: u16, pub target: i32 }
impl BgeR8 {
	pub const WIDE_SIZE: usize = 12;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let target = i32::from_le_bytes([code[at + 8], code[at + 9], code[at + 10], code[at + 11]]);
		Self { lhs, rhs, target }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 8..at + 12].copy_from_slice(&self.target.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct BgtI4 { pub lhs: u16, pub rhs: u16, pub target: i32 }
impl BgtI4 {
	pub const WIDE_SIZE: usize = 12;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let lhs = code[at + 1] as u16;
			let rhs = code[at + 2] as u16;
			let target = code[at + 3] as i8 as i32;
			return Self { lhs, rhs, target };
		}
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let target = i32::from_le_bytes([code[at + 8], code[at + 9], code[at + 10], code[at + 11]]);
		Self { lhs, rhs, target }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.lhs as u8;
			out[at + 2] = self.rhs as u8;
			out[at + 3] = (self.target as i8) as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 8..at + 12].copy_from_slice(&self.target.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.lhs <= u8::MAX as u16 && self.rhs <= u8::MAX as u16 && i8::try_from(self.target).is_ok()
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct BgtI8 { pub lhs: u16, pub rhs: u16, pub target: i32 }
impl BgtI8 {
	pub const WIDE_SIZE: usize = 12;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let lhs = code[at + 1] as u16;
			let rhs = code[at + 2] as u16;
			let target = code[at + 3] as i8 as i32;
			return Self { lhs, rhs, target };
		}
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let target = i32::from_le_bytes([code[at + 8], code[at + 9], code[at + 10], code[at + 11]]);
		Self { lhs, rhs, target }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.lhs as u8;
			out[at + 2] = self.rhs as u8;
			out[at + 3] = (self.target as i8) as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 8..at + 12].copy_from_slice(&self.target.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.lhs <= u8::MAX as u16 && self.rhs <= u8::MAX as u16 && i8::try_from(self.target).is_ok()
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct BgtR4 { pub lhs: u16, pub rhs: u16, pub target: i32 }
impl BgtR4 {
	pub const WIDE_SIZE: usize = 12;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let target = i32::from_le_bytes([code[at + 8], code[at + 9], code[at + 10], code[at + 11]]);
		Self { lhs, rhs, target }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 8..at + 12].copy_from_slice(&self.target.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct BgtR8 { pub lhs: u16, pub rhs: u16, pub target: i32 }
impl BgtR8 {
	pub const WIDE_SIZE: usize = 12;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let target = i32::from_le_bytes([code[at + 8], code[at + 9], code[at + 10], code[at + 11]]);
		Self { lhs, rhs, target }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 8..at + 12].copy_from_slice(&self.target.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct BleI4 { pub lhs: u16, pub rhs: u16, pub target: i32 }
impl BleI4 {
	pub const WIDE_SIZE: usize = 12;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let lhs = code[at + 1] as u16;
			let rhs = code[at + 2] as u16;
			let target = code[at + 3] as i8 as i32;
			return Self { lhs, rhs, target };
		}
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let target = i32::from_le_bytes([code[at + 8], code[at + 9], code[at + 10], code[at + 11]]);
		Self { lhs, rhs, target }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.lhs as u8;
			out[at + 2] = self.rhs as u8;
			out[at + 3] = (self.target as i8) as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 8..at + 12].copy_from_slice(&self.target.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.lhs <= u8::MAX as u16 && self.rhs <= u8::MAX as u16 && i8::try_from(self.target).is_ok()
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct BleI8 { pub lhs: u16, pub rhs: u16, pub target: i32 }
impl BleI8 {
	pub const WIDE_SIZE: usize = 12;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let lhs = code[at + 1] as u16;
			let rhs = code[at + 2] as u16;
			let target = code[at + 3] as i8 as i32;
			return Self { lhs, rhs, target };
		}
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let target = i32::from_le_bytes([code[at + 8], code[at + 9], code[at + 10], code[at + 11]]);
		Self { lhs, rhs, target }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.lhs as u8;
			out[at + 2] = self.rhs as u8;
			out[at + 3] = (self.target as i8) as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 8..at + 12].copy_from_slice(&self.target.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.lhs <= u8::MAX as u16 && self.rhs <= u8::MAX as u16 && i8::try_from(self.target).is_ok()
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct BleR4 { pub lhs: u16, pub rhs: u16, pub target: i32 }
impl BleR4 {
	pub const WIDE_SIZE: usize = 12;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let target = i32::from_le_bytes([code[at + 8], code[at + 9], code[at + 10], code[at + 11]]);
		Self { lhs, rhs, target }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 8..at + 12].copy_from_slice(&self.target.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct BleR8 { pub lhs: u16, pub rhs: u16, pub target: i32 }
impl BleR8 {
	pub const WIDE_SIZE: usize = 12;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let target = i32::from_le_bytes([code[at + 8], code[at + 9], code[at + 10], code[at + 11]]);
		Self { lhs, rhs, target }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 8..at + 12].copy_from_slice(&self.target.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct BltI4 { pub lhs: u16, pub rhs: u16, pub target: i32 }
impl BltI4 {
	pub const WIDE_SIZE: usize = 12;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let lhs = code[at + 1] as u16;
			let rhs = code[at + 2] as u16;
			let target = code[at + 3] as i8 as i32;
			return Self { lhs, rhs, target };
		}
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let target = i32::from_le_bytes([code[at + 8], code[at + 9], code[at + 10], code[at + 11]]);
		Self { lhs, rhs, target }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.lhs as u8;
			out[at + 2] = self.rhs as u8;
			out[at + 3] = (self.target as i8) as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 8..at + 12].copy_from_slice(&self.target.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.lhs <= u8::MAX as u16 && self.rhs <= u8::MAX as u16 && i8::try_from(self.target).is_ok()
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct BltI8 { pub lhs: u16, pub rhs: u16, pub target: i32 }
impl BltI8 {
	pub const WIDE_SIZE: usize = 12;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let lhs = code[at + 1] as u16;
			let rhs = code[at + 2] as u16;
			let target = code[at + 3] as i8 as i32;
			return Self { lhs, rhs, target };
		}
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let target = i32::from_le_bytes([code[at + 8], code[at + 9], code[at + 10], code[at + 11]]);
		Self { lhs, rhs, target }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.lhs as u8;
			out[at + 2] = self.rhs as u8;
			out[at + 3] = (self.target as i8) as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 8..at + 12].copy_from_slice(&self.target.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.lhs <= u8::MAX as u16 && self.rhs <= u8::MAX as u16 && i8::try_from(self.target).is_ok()
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct BltR4 { pub lhs: u16, pub rhs: u16, pub target: i32 }
impl BltR4 {
	pub const WIDE_SIZE: usize = 12;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let target = i32::from_le_bytes([code[at + 8], code[at + 9], code[at + 10], code[at + 11]]);
		Self { lhs, rhs, target }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 8..at + 12].copy_from_slice(&self.target.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct BltR8 { pub lhs: u16, pub rhs: u16, pub target: i32 }
impl BltR8 {
	pub const WIDE_SIZE: usize = 12;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let target = i32::from_le_bytes([code[at + 8], code[at + 9], code[at + 10], code[at + 11]]);
		Self { lhs, rhs, target }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 8..at + 12].copy_from_slice(&self.target.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct BneUnI4 { pub lhs: u16, pub rhs: u16, pub target: i32 }
impl BneUnI4 {
	pub const WIDE_SIZE: usize = 12;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let lhs = code[at + 1] as u16;
			let rhs = code[at + 2] as u16;
			let target = code[at + 3] as i8 as i32;
			return Self { lhs, rhs, target };
		}
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let target = i32::from_le_bytes([code[at + 8], code[at + 9], code[at + 10], code[at + 11]]);
		Self { lhs, rhs, target }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.lhs as u8;
			out[at + 2] = self.rhs as u8;
			out[at + 3] = (self.target as i8) as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 8..at + 12].copy_from_slice(&self.target.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.lhs <= u8::MAX as u16 && self.rhs <= u8::MAX as u16 && i8::try_from(self.target).is_ok()
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct BneUnI8 { pub lhs: u16, pub rhs: u16, pub target: i32 }
impl BneUnI8 {
	pub const WIDE_SIZE: usize = 12;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let lhs = code[at + 1] as u16;
			let rhs = code[at + 2] as u16;
			let target = code[at + 3] as i8 as i32;
			return Self { lhs, rhs, target };
		}
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let target = i32::from_le_bytes([code[at + 8], code[at + 9], code[at + 10], code[at + 11]]);
		Self { lhs, rhs, target }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.lhs as u8;
			out[at + 2] = self.rhs as u8;
			out[at + 3] = (self.target as i8) as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 8..at + 12].copy_from_slice(&self.target.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.lhs <= u8::MAX as u16 && self.rhs <= u8::MAX as u16 && i8::try_from(self.target).is_ok()
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct BneUnR4 { pub lhs: u16, pub rhs: u16, pub target: i32 }
impl BneUnR4 {
	pub const WIDE_SIZE: usize = 12;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let target = i32::from_le_bytes([code[at + 8], code[at + 9], code[at + 10], code[at + 11]]);
		Self { lhs, rhs, target }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 8..at + 12].copy_from_slice(&self.target.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct BneUnR8 { pub lhs: u16, pub rhs: u16, pub target: i32 }
impl BneUnR8 {
	pub const WIDE_SIZE: usize = 12;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let target = i32::from_le_bytes([code[at + 8], code[at + 9], code[at + 10], code[at + 11]]);
		Self { lhs, rhs, target }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 8..at + 12].copy_from_slice(&self.target.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct BgeUnI4 { pub lhs: u16, pub rhs: u16, pub target: i32 }
impl BgeUnI4 {
	pub const WIDE_SIZE: usize = 12;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let lhs = code[at + 1] as u16;
			let rhs = code[at + 2] as u16;
			let target = code[at + 3] as i8 as i32;
			return Self { lhs, rhs, target };
		}
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let target = i32::from_le_bytes([code[at + 8], code[at + 9], code[at + 10], code[at + 11]]);
		Self { lhs, rhs, target }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.lhs as u8;
			out[at + 2] = self.rhs as u8;
			out[at + 3] = (self.target as i8) as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 8..at + 12].copy_from_slice(&self.target.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.lhs <= u8::MAX as u16 && self.rhs <= u8::MAX as u16 && i8::try_from(self.target).is_ok()
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct BgeUnI8 { pub lhs: u16, pub rhs: u16, pub target: i32 }
impl BgeUnI8 {
	pub const WIDE_SIZE: usize = 12;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let lhs = code[at + 1] as u16;
			let rhs = code[at + 2] as u16;
			let target = code[at + 3] as i8 as i32;
			return Self { lhs, rhs, target };
		}
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let target = i32::from_le_bytes([code[at + 8], code[at + 9], code[at + 10], code[at + 11]]);
		Self { lhs, rhs, target }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.lhs as u8;
			out[at + 2] = self.rhs as u8;
			out[at + 3] = (self.target as i8) as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 8..at + 12].copy_from_slice(&self.target.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.lhs <= u8::MAX as u16 && self.rhs <= u8::MAX as u16 && i8::try_from(self.target).is_ok()
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct BgeUnR4 { pub lhs: u16, pub rhs: u16, pub target: i32 }
impl BgeUnR4 {
	pub const WIDE_SIZE: usize = 12;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let target = i32::from_le_bytes([code[at + 8], code[at + 9], code[at + 10], code[at + 11]]);
		Self { lhs, rhs, target }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 8..at + 12].copy_from_slice(&self.target.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct BgeUnR8 { pub lhs: u16, pub rhs: u16, pub target: i32 }
impl BgeUnR8 {
	pub const WIDE_SIZE: usize = 12;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let target = i32::from_le_bytes([code[at + 8], code[at + 9], code[at + 10], code[at + 11]]);
		Self { lhs, rhs, target }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 8..at + 12].copy_from_slice(&self.target.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct BgtUnI4 { pub lhs: u16, pub rhs: u16, pub target: i32 }
impl BgtUnI4 {
	pub const WIDE_SIZE: usize = 12;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let lhs = code[at + 1] as u16;
			let rhs = code[at + 2] as u16;
			let target = code[at + 3] as i8 as i32;
			return Self { lhs, rhs, target };
		}
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let target = i32::from_le_bytes([code[at + 8], code[at + 9], code[at + 10], code[at + 11]]);
		Self { lhs, rhs, target }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.lhs as u8;
			out[at + 2] = self.rhs as u8;
			out[at + 3] = (self.target as i8) as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 8..at + 12].copy_from_slice(&self.target.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.lhs <= u8::MAX as u16 && self.rhs <= u8::MAX as u16 && i8::try_from(self.target).is_ok()
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct BgtUnI8 { pub lhs: u16, pub rhs: u16, pub target: i32 }
impl BgtUnI8 {
	pub const WIDE_SIZE: usize = 12;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let lhs = code[at + 1] as u16;
			let rhs = code[at + 2] as u16;
			let target = code[at + 3] as i8 as i32;
			return Self { lhs, rhs, target };
		}
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let target = i32::from_le_bytes([code[at + 8], code[at + 9], code[at + 10], code[at + 11]]);
		Self { lhs, rhs, target }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.lhs as u8;
			out[at + 2] = self.rhs as u8;
			out[at + 3] = (self.target as i8) as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 8..at + 12].copy_from_slice(&self.target.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.lhs <= u8::MAX as u16 && self.rhs <= u8::MAX as u16 && i8::try_from(self.target).is_ok()
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct BgtUnR4 { pub lhs: u16, pub rhs: u16, pub target: i32 }
impl BgtUnR4 {
	pub const WIDE_SIZE: usize = 12;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let target = i32::from_le_bytes([code[at + 8], code[at + 9], code[at + 10], code[at + 11]]);
		Self { lhs, rhs, target }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 8..at + 12].copy_from_slice(&self.target.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct BgtUnR8 { pub lhs: u16, pub rhs: u16, pub target: i32 }
impl BgtUnR8 {
	pub const WIDE_SIZE: usize = 12;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let target = i32::from_le_bytes([code[at + 8], code[at + 9], code[at + 10], code[at + 11]]);
		Self { lhs, rhs, target }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 8..at + 12].copy_from_slice(&self.target.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct BleUnI4 { pub lhs: u16, pub rhs: u16, pub target: i32 }
impl BleUnI4 {
	pub const WIDE_SIZE: usize = 12;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let lhs = code[at + 1] as u16;
			let rhs = code[at + 2] as u16;
			let target = code[at + 3] as i8 as i32;
			return Self { lhs, rhs, target };
		}
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let target = i32::from_le_bytes([code[at + 8], code[at + 9], code[at + 10], code[at + 11]]);
		Self { lhs, rhs, target }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.lhs as u8;
			out[at + 2] = self.rhs as u8;
			out[at + 3] = (self.target as i8) as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 8..at + 12].copy_from_slice(&self.target.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.lhs <= u8::MAX as u16 && self.rhs <= u8::MAX as u16 && i8::try_from(self.target).is_ok()
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct BleUnI8 { pub lhs: u16, pub rhs: u16, pub target: i32 }
impl BleUnI8 {
	pub const WIDE_SIZE: usize = 12;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let lhs = code[at + 1] as u16;
			let rhs = code[at + 2] as u16;
			let target = code[at + 3] as i8 as i32;
			return Self { lhs, rhs, target };
		}
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let target = i32::from_le_bytes([code[at + 8], code[at + 9], code[at + 10], code[at + 11]]);
		Self { lhs, rhs, target }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.lhs as u8;
			out[at + 2] = self.rhs as u8;
			out[at + 3] = (self.target as i8) as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 8..at + 12].copy_from_slice(&self.target.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.lhs <= u8::MAX as u16 && self.rhs <= u8::MAX as u16 && i8::try_from(self.target).is_ok()
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct BleUnR4 { pub lhs: u16, pub rhs: u16, pub target: i32 }
impl BleUnR4 {
	pub const WIDE_SIZE: usize = 12;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let target = i32::from_le_bytes([code[at + 8], code[at + 9], code[at + 10], code[at + 11]]);
		Self { lhs, rhs, target }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 8..at + 12].copy_from_slice(&self.target.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct BleUnR8 { pub lhs: u16, pub rhs: u16, pub target: i32 }
impl BleUnR8 {
	pub const WIDE_SIZE: usize = 12;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let target = i32::from_le_bytes([code[at + 8], code[at + 9], code[at + 10], code[at + 11]]);
		Self { lhs, rhs, target }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 8..at + 12].copy_from_slice(&self.target.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct BltUnI4 { pub lhs: u16, pub rhs: u16, pub target: i32 }
impl BltUnI4 {
	pub const WIDE_SIZE: usize = 12;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let lhs = code[at + 1] as u16;
			let rhs = code[at + 2] as u16;
			let target = code[at + 3] as i8 as i32;
			return Self { lhs, rhs, target };
		}
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let target = i32::from_le_bytes([code[at + 8], code[at + 9], code[at + 10], code[at + 11]]);
		Self { lhs, rhs, target }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.lhs as u8;
			out[at + 2] = self.rhs as u8;
			out[at + 3] = (self.target as i8) as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 8..at + 12].copy_from_slice(&self.target.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.lhs <= u8::MAX as u16 && self.rhs <= u8::MAX as u16 && i8::try_from(self.target).is_ok()
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct BltUnI8 { pub lhs: u16, pub rhs: u16, pub target: i32 }
impl BltUnI8 {
	pub const WIDE_SIZE: usize = 12;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let lhs = code[at + 1] as u16;
			let rhs = code[at + 2] as u16;
			let target = code[at + 3] as i8 as i32;
			return Self { lhs, rhs, target };
		}
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let target = i32::from_le_bytes([code[at + 8], code[at + 9], code[at + 10], code[at + 11]]);
		Self { lhs, rhs, target }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.lhs as u8;
			out[at + 2] = self.rhs as u8;
			out[at + 3] = (self.target as i8) as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 8..at + 12].copy_from_slice(&self.target.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.lhs <= u8::MAX as u16 && self.rhs <= u8::MAX as u16 && i8::try_from(self.target).is_ok()
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct BltUnR4 { pub lhs: u16, pub rhs: u16, pub target: i32 }
impl BltUnR4 {
	pub const WIDE_SIZE: usize = 12;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let target = i32::from_le_bytes([code[at + 8], code[at + 9], code[at + 10], code[at + 11]]);
		Self { lhs, rhs, target }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 8..at + 12].copy_from_slice(&self.target.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct BltUnR8 { pub lhs: u16, pub rhs: u16, pub target: i32 }
impl BltUnR8 {
	pub const WIDE_SIZE: usize = 12;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let target = i32::from_le_bytes([code[at + 8], code[at + 9], code[at + 10], code[at + 11]]);
		Self { lhs, rhs, target }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 8..at + 12].copy_from_slice(&self.target.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct Switch { pub index: u16, pub num_targets: u32 }
impl Switch {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let index = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let num_targets = u32::from_le_bytes([code[at + 4], code[at + 5], code[at + 6], code[at + 7]]);
		Self { index, num_targets }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.index.to_le_bytes());
		out[at + 4..at + 8].copy_from_slice(&self.num_targets.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct AddI4 { pub lhs: u16, pub rhs: u16, pub dst: u16 }
impl AddI4 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let lhs = code[at + 1] as u16;
			let rhs = code[at + 2] as u16;
			let dst = code[at + 3] as u16;
			return Self { lhs, rhs, dst };
		}
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { lhs, rhs, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.lhs as u8;
			out[at + 2] = self.rhs as u8;
			out[at + 3] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.lhs <= u8::MAX as u16 && self.rhs <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct AddI8 { pub lhs: u16, pub rhs: u16, pub dst: u16 }
impl AddI8 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let lhs = code[at + 1] as u16;
			let rhs = code[at + 2] as u16;
			let dst = code[at + 3] as u16;
			return Self { lhs, rhs, dst };
		}
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { lhs, rhs, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.lhs as u8;
			out[at + 2] = self.rhs as u8;
			out[at + 3] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.lhs <= u8::MAX as u16 && self.rhs <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct AddR4 { pub lhs: u16, pub rhs: u16, pub dst: u16 }
impl AddR4 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let lhs = code[at + 1] as u16;
			let rhs = code[at + 2] as u16;
			let dst = code[at + 3] as u16;
			return Self { lhs, rhs, dst };
		}
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { lhs, rhs, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.lhs as u8;
			out[at + 2] = self.rhs as u8;
			out[at + 3] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.lhs <= u8::MAX as u16 && self.rhs <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct AddR8 { pub lhs: u16, pub rhs: u16, pub dst: u16 }
impl AddR8 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let lhs = code[at + 1] as u16;
			let rhs = code[at + 2] as u16;
			let dst = code[at + 3] as u16;
			return Self { lhs, rhs, dst };
		}
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { lhs, rhs, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.lhs as u8;
			out[at + 2] = self.rhs as u8;
			out[at + 3] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.lhs <= u8::MAX as u16 && self.rhs <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct SubI4 { pub lhs: u16, pub rhs: u16, pub dst: u16 }
impl SubI4 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let lhs = code[at + 1] as u16;
			let rhs = code[at + 2] as u16;
			let dst = code[at + 3] as u16;
			return Self { lhs, rhs, dst };
		}
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { lhs, rhs, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.lhs as u8;
			out[at + 2] = self.rhs as u8;
			out[at + 3] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.lhs <= u8::MAX as u16 && self.rhs <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct SubI8 { pub lhs: u16, pub rhs: u16, pub dst: u16 }
impl SubI8 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let lhs = code[at + 1] as u16;
			let rhs = code[at + 2] as u16;
			let dst = code[at + 3] as u16;
			return Self { lhs, rhs, dst };
		}
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { lhs, rhs, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.lhs as u8;
			out[at + 2] = self.rhs as u8;
			out[at + 3] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.lhs <= u8::MAX as u16 && self.rhs <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct SubR4 { pub lhs: u16, pub rhs: u16, pub dst: u16 }
impl SubR4 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let lhs = code[at + 1] as u16;
			let rhs = code[at + 2] as u16;
			let dst = code[at + 3] as u16;
			return Self { lhs, rhs, dst };
		}
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { lhs, rhs, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.lhs as u8;
			out[at + 2] = self.rhs as u8;
			out[at + 3] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.lhs <= u8::MAX as u16 && self.rhs <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct SubR8 { pub lhs: u16, pub rhs: u16, pub dst: u16 }
impl SubR8 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let lhs = code[at + 1] as u16;
			let rhs = code[at + 2] as u16;
			let dst = code[at + 3] as u16;
			return Self { lhs, rhs, dst };
		}
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { lhs, rhs, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.lhs as u8;
			out[at + 2] = self.rhs as u8;
			out[at + 3] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.lhs <= u8::MAX as u16 && self.rhs <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct MulI4 { pub lhs: u16, pub rhs: u16, pub dst: u16 }
impl MulI4 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let lhs = code[at + 1] as u16;
			let rhs = code[at + 2] as u16;
			let dst = code[at + 3] as u16;
			return Self { lhs, rhs, dst };
		}
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { lhs, rhs, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.lhs as u8;
			out[at + 2] = self.rhs as u8;
			out[at + 3] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.lhs <= u8::MAX as u16 && self.rhs <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct MulI8 { pub lhs: u16, pub rhs: u16, pub dst: u16 }
impl MulI8 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let lhs = code[at + 1] as u16;
			let rhs = code[at + 2] as u16;
			let dst = code[at + 3] as u16;
			return Self { lhs, rhs, dst };
		}
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { lhs, rhs, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.lhs as u8;
			out[at + 2] = self.rhs as u8;
			out[at + 3] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.lhs <= u8::MAX as u16 && self.rhs <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct MulR4 { pub lhs: u16, pub rhs: u16, pub dst: u16 }
impl MulR4 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let lhs = code[at + 1] as u16;
			let rhs = code[at + 2] as u16;
			let dst = code[at + 3] as u16;
			return Self { lhs, rhs, dst };
		}
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { lhs, rhs, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.lhs as u8;
			out[at + 2] = self.rhs as u8;
			out[at + 3] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.lhs <= u8::MAX as u16 && self.rhs <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct MulR8 { pub lhs: u16, pub rhs: u16, pub dst: u16 }
impl MulR8 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let lhs = code[at + 1] as u16;
			let rhs = code[at + 2] as u16;
			let dst = code[at + 3] as u16;
			return Self { lhs, rhs, dst };
		}
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { lhs, rhs, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.lhs as u8;
			out[at + 2] = self.rhs as u8;
			out[at + 3] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.lhs <= u8::MAX as u16 && self.rhs <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct DivI4 { pub lhs: u16, pub rhs: u16, pub dst: u16 }
impl DivI4 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let lhs = code[at + 1] as u16;
			let rhs = code[at + 2] as u16;
			let dst = code[at + 3] as u16;
			return Self { lhs, rhs, dst };
		}
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { lhs, rhs, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.lhs as u8;
			out[at + 2] = self.rhs as u8;
			out[at + 3] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.lhs <= u8::MAX as u16 && self.rhs <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct DivI8 { pub lhs: u16, pub rhs: u16, pub dst: u16 }
impl DivI8 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let lhs = code[at + 1] as u16;
			let rhs = code[at + 2] as u16;
			let dst = code[at + 3] as u16;
			return Self { lhs, rhs, dst };
		}
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { lhs, rhs, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.lhs as u8;
			out[at + 2] = self.rhs as u8;
			out[at + 3] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.lhs <= u8::MAX as u16 && self.rhs <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct DivR4 { pub lhs: u16, pub rhs: u16, pub dst: u16 }
impl DivR4 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let lhs = code[at + 1] as u16;
			let rhs = code[at + 2] as u16;
			let dst = code[at + 3] as u16;
			return Self { lhs, rhs, dst };
		}
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { lhs, rhs, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.lhs as u8;
			out[at + 2] = self.rhs as u8;
			out[at + 3] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.lhs <= u8::MAX as u16 && self.rhs <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct DivR8 { pub lhs: u16, pub rhs: u16, pub dst: u16 }
impl DivR8 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let lhs = code[at + 1] as u16;
			let rhs = code[at + 2] as u16;
			let dst = code[at + 3] as u16;
			return Self { lhs, rhs, dst };
		}
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { lhs, rhs, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.lhs as u8;
			out[at + 2] = self.rhs as u8;
			out[at + 3] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.lhs <= u8::MAX as u16 && self.rhs <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct RemI4 { pub lhs: u16, pub rhs: u16, pub dst: u16 }
impl RemI4 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let lhs = code[at + 1] as u16;
			let rhs = code[at + 2] as u16;
			let dst = code[at + 3] as u16;
			return Self { lhs, rhs, dst };
		}
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { lhs, rhs, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.lhs as u8;
			out[at + 2] = self.rhs as u8;
			out[at + 3] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.lhs <= u8::MAX as u16 && self.rhs <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct RemI8 { pub lhs: u16, pub rhs: u16, pub dst: u16 }
impl RemI8 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let lhs = code[at + 1] as u16;
			let rhs = code[at + 2] as u16;
			let dst = code[at + 3] as u16;
			return Self { lhs, rhs, dst };
		}
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { lhs, rhs, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.lhs as u8;
			out[at + 2] = self.rhs as u8;
			out[at + 3] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.lhs <= u8::MAX as u16 && self.rhs <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct RemR4 { pub lhs: u16, pub rhs: u16, pub dst: u16 }
impl RemR4 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let lhs = code[at + 1] as u16;
			let rhs = code[at + 2] as u16;
			let dst = code[at + 3] as u16;
			return Self { lhs, rhs, dst };
		}
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { lhs, rhs, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.lhs as u8;
			out[at + 2] = self.rhs as u8;
			out[at + 3] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.lhs <= u8::MAX as u16 && self.rhs <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct RemR8 { pub lhs: u16, pub rhs: u16, pub dst: u16 }
impl RemR8 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let lhs = code[at + 1] as u16;
			let rhs = code[at + 2] as u16;
			let dst = code[at + 3] as u16;
			return Self { lhs, rhs, dst };
		}
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { lhs, rhs, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.lhs as u8;
			out[at + 2] = self.rhs as u8;
			out[at + 3] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.lhs <= u8::MAX as u16 && self.rhs <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct DivUnI4 { pub lhs: u16, pub rhs: u16, pub dst: u16 }
impl DivUnI4 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let lhs = code[at + 1] as u16;
			let rhs = code[at + 2] as u16;
			let dst = code[at + 3] as u16;
			return Self { lhs, rhs, dst };
		}
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { lhs, rhs, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.lhs as u8;
			out[at + 2] = self.rhs as u8;
			out[at + 3] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.lhs <= u8::MAX as u16 && self.rhs <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct DivUnI8 { pub lhs: u16, pub rhs: u16, pub dst: u16 }
impl DivUnI8 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let lhs = code[at + 1] as u16;
			let rhs = code[at + 2] as u16;
			let dst = code[at + 3] as u16;
			return Self { lhs, rhs, dst };
		}
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { lhs, rhs, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.lhs as u8;
			out[at + 2] = self.rhs as u8;
			out[at + 3] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.lhs <= u8::MAX as u16 && self.rhs <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct RemUnI4 { pub lhs: u16, pub rhs: u16, pub dst: u16 }
impl RemUnI4 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let lhs = code[at + 1] as u16;
			let rhs = code[at + 2] as u16;
			let dst = code[at + 3] as u16;
			return Self { lhs, rhs, dst };
		}
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { lhs, rhs, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.lhs as u8;
			out[at + 2] = self.rhs as u8;
			out[at + 3] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.lhs <= u8::MAX as u16 && self.rhs <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct RemUnI8 { pub lhs: u16, pub rhs: u16, pub dst: u16 }
impl RemUnI8 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let lhs = code[at + 1] as u16;
			let rhs = code[at + 2] as u16;
			let dst = code[at + 3] as u16;
			return Self { lhs, rhs, dst };
		}
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { lhs, rhs, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.lhs as u8;
			out[at + 2] = self.rhs as u8;
			out[at + 3] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.lhs <= u8::MAX as u16 && self.rhs <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct AndI4 { pub lhs: u16, pub rhs: u16, pub dst: u16 }
impl AndI4 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let lhs = code[at + 1] as u16;
			let rhs = code[at + 2] as u16;
			let dst = code[at + 3] as u16;
			return Self { lhs, rhs, dst };
		}
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { lhs, rhs, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.lhs as u8;
			out[at + 2] = self.rhs as u8;
			out[at + 3] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.lhs <= u8::MAX as u16 && self.rhs <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct AndI8 { pub lhs: u16, pub rhs: u16, pub dst: u16 }
impl AndI8 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let lhs = code[at + 1] as u16;
			let rhs = code[at + 2] as u16;
			let dst = code[at + 3] as u16;
			return Self { lhs, rhs, dst };
		}
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { lhs, rhs, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.lhs as u8;
			out[at + 2] = self.rhs as u8;
			out[at + 3] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.lhs <= u8::MAX as u16 && self.rhs <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct OrI4 { pub lhs: u16, pub rhs: u16, pub dst: u16 }
impl OrI4 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let lhs = code[at + 1] as u16;
			let rhs = code[at + 2] as u16;
			let dst = code[at + 3] as u16;
			return Self { lhs, rhs, dst };
		}
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { lhs, rhs, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.lhs as u8;
			out[at + 2] = self.rhs as u8;
			out[at + 3] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.lhs <= u8::MAX as u16 && self.rhs <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct OrI8 { pub lhs: u16, pub rhs: u16, pub dst: u16 }
impl OrI8 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let lhs = code[at + 1] as u16;
			let rhs = code[at + 2] as u16;
			let dst = code[at + 3] as u16;
			return Self { lhs, rhs, dst };
		}
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { lhs, rhs, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.lhs as u8;
			out[at + 2] = self.rhs as u8;
			out[at + 3] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.lhs <= u8::MAX as u16 && self.rhs <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct XorI4 { pub lhs: u16, pub rhs: u16, pub dst: u16 }
impl XorI4 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let lhs = code[at + 1] as u16;
			let rhs = code[at + 2] as u16;
			let dst = code[at + 3] as u16;
			return Self { lhs, rhs, dst };
		}
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { lhs, rhs, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.lhs as u8;
			out[at + 2] = self.rhs as u8;
			out[at + 3] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.lhs <= u8::MAX as u16 && self.rhs <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct XorI8 { pub lhs: u16, pub rhs: u16, pub dst: u16 }
impl XorI8 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let lhs = code[at + 1] as u16;
			let rhs = code[at + 2] as u16;
			let dst = code[at + 3] as u16;
			return Self { lhs, rhs, dst };
		}
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { lhs, rhs, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.lhs as u8;
			out[at + 2] = self.rhs as u8;
			out[at + 3] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.lhs <= u8::MAX as u16 && self.rhs <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ShlI4 { pub lhs: u16, pub rhs: u16, pub dst: u16 }
impl ShlI4 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let lhs = code[at + 1] as u16;
			let rhs = code[at + 2] as u16;
			let dst = code[at + 3] as u16;
			return Self { lhs, rhs, dst };
		}
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { lhs, rhs, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.lhs as u8;
			out[at + 2] = self.rhs as u8;
			out[at + 3] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.lhs <= u8::MAX as u16 && self.rhs <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ShlI8 { pub lhs: u16, pub rhs: u16, pub dst: u16 }
impl ShlI8 {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { lhs, rhs, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ShrI4 { pub lhs: u16, pub rhs: u16, pub dst: u16 }
impl ShrI4 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let lhs = code[at + 1] as u16;
			let rhs = code[at + 2] as u16;
			let dst = code[at + 3] as u16;
			return Self { lhs, rhs, dst };
		}
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { lhs, rhs, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.lhs as u8;
			out[at + 2] = self.rhs as u8;
			out[at + 3] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.lhs <= u8::MAX as u16 && self.rhs <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ShrI8 { pub lhs: u16, pub rhs: u16, pub dst: u16 }
impl ShrI8 {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { lhs, rhs, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ShrUnI4 { pub lhs: u16, pub rhs: u16, pub dst: u16 }
impl ShrUnI4 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let lhs = code[at + 1] as u16;
			let rhs = code[at + 2] as u16;
			let dst = code[at + 3] as u16;
			return Self { lhs, rhs, dst };
		}
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { lhs, rhs, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.lhs as u8;
			out[at + 2] = self.rhs as u8;
			out[at + 3] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.lhs <= u8::MAX as u16 && self.rhs <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ShrUnI8 { pub lhs: u16, pub rhs: u16, pub dst: u16 }
impl ShrUnI8 {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { lhs, rhs, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct NegI4 { pub src: u16, pub dst: u16 }
impl NegI4 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			return Self { src, dst };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct NegI8 { pub src: u16, pub dst: u16 }
impl NegI8 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			return Self { src, dst };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct NegR4 { pub src: u16, pub dst: u16 }
impl NegR4 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			return Self { src, dst };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct NegR8 { pub src: u16, pub dst: u16 }
impl NegR8 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			return Self { src, dst };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct NotI4 { pub src: u16, pub dst: u16 }
impl NotI4 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			return Self { src, dst };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct NotI8 { pub src: u16, pub dst: u16 }
impl NotI8 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			return Self { src, dst };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvI1I4 { pub src: u16, pub dst: u16 }
impl ConvI1I4 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			return Self { src, dst };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvI1I8 { pub src: u16, pub dst: u16 }
impl ConvI1I8 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			return Self { src, dst };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvI1R4 { pub src: u16, pub dst: u16 }
impl ConvI1R4 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			return Self { src, dst };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvI1R8 { pub src: u16, pub dst: u16 }
impl ConvI1R8 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			return Self { src, dst };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvU1I4 { pub src: u16, pub dst: u16 }
impl ConvU1I4 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			return Self { src, dst };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvU1I8 { pub src: u16, pub dst: u16 }
impl ConvU1I8 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			return Self { src, dst };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvU1R4 { pub src: u16, pub dst: u16 }
impl ConvU1R4 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			return Self { src, dst };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvU1R8 { pub src: u16, pub dst: u16 }
impl ConvU1R8 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			return Self { src, dst };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvI2I4 { pub src: u16, pub dst: u16 }
impl ConvI2I4 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			return Self { src, dst };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvI2I8 { pub src: u16, pub dst: u16 }
impl ConvI2I8 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			return Self { src, dst };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvI2R4 { pub src: u16, pub dst: u16 }
impl ConvI2R4 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			return Self { src, dst };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvI2R8 { pub src: u16, pub dst: u16 }
impl ConvI2R8 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			return Self { src, dst };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvU2I4 { pub src: u16, pub dst: u16 }
impl ConvU2I4 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			return Self { src, dst };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvU2I8 { pub src: u16, pub dst: u16 }
impl ConvU2I8 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			return Self { src, dst };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvU2R4 { pub src: u16, pub dst: u16 }
impl ConvU2R4 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			return Self { src, dst };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvU2R8 { pub src: u16, pub dst: u16 }
impl ConvU2R8 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			return Self { src, dst };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvI4I8 { pub src: u16, pub dst: u16 }
impl ConvI4I8 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			return Self { src, dst };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvI4R4 { pub src: u16, pub dst: u16 }
impl ConvI4R4 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			return Self { src, dst };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvI4R8 { pub src: u16, pub dst: u16 }
impl ConvI4R8 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			return Self { src, dst };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvU4I8 { pub src: u16, pub dst: u16 }
impl ConvU4I8 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			return Self { src, dst };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvU4R4 { pub src: u16, pub dst: u16 }
impl ConvU4R4 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			return Self { src, dst };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvU4R8 { pub src: u16, pub dst: u16 }
impl ConvU4R8 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			return Self { src, dst };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvI8I4 { pub src: u16, pub dst: u16 }
impl ConvI8I4 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			return Self { src, dst };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvI8U4 { pub src: u16, pub dst: u16 }
impl ConvI8U4 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			return Self { src, dst };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvI8R4 { pub src: u16, pub dst: u16 }
impl ConvI8R4 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			return Self { src, dst };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvI8R8 { pub src: u16, pub dst: u16 }
impl ConvI8R8 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			return Self { src, dst };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvU8I4 { pub src: u16, pub dst: u16 }
impl ConvU8I4 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			return Self { src, dst };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvU8U4 { pub src: u16, pub dst: u16 }
impl ConvU8U4 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			return Self { src, dst };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvU8R4 { pub src: u16, pub dst: u16 }
impl ConvU8R4 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			return Self { src, dst };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvU8R8 { pub src: u16, pub dst: u16 }
impl ConvU8R8 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			return Self { src, dst };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvR4I4 { pub src: u16, pub dst: u16 }
impl ConvR4I4 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			return Self { src, dst };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvR4I8 { pub src: u16, pub dst: u16 }
impl ConvR4I8 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			return Self { src, dst };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvR4R8 { pub src: u16, pub dst: u16 }
impl ConvR4R8 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			return Self { src, dst };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvR4U4 { pub src: u16, pub dst: u16 }
impl ConvR4U4 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			return Self { src, dst };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvR4U8 { pub src: u16, pub dst: u16 }
impl ConvR4U8 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			return Self { src, dst };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvR8I4 { pub src: u16, pub dst: u16 }
impl ConvR8I4 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			return Self { src, dst };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvR8I8 { pub src: u16, pub dst: u16 }
impl ConvR8I8 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			return Self { src, dst };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvR8R4 { pub src: u16, pub dst: u16 }
impl ConvR8R4 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			return Self { src, dst };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvR8U4 { pub src: u16, pub dst: u16 }
impl ConvR8U4 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			return Self { src, dst };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvR8U8 { pub src: u16, pub dst: u16 }
impl ConvR8U8 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			return Self { src, dst };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct CkFiniteR4 { pub src: u16, pub dst: u16 }
impl CkFiniteR4 {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct CkFiniteR8 { pub src: u16, pub dst: u16 }
impl CkFiniteR8 {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct CeqI4 { pub lhs: u16, pub rhs: u16, pub dst: u16 }
impl CeqI4 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let lhs = code[at + 1] as u16;
			let rhs = code[at + 2] as u16;
			let dst = code[at + 3] as u16;
			return Self { lhs, rhs, dst };
		}
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { lhs, rhs, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.lhs as u8;
			out[at + 2] = self.rhs as u8;
			out[at + 3] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.lhs <= u8::MAX as u16 && self.rhs <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct CeqI8 { pub lhs: u16, pub rhs: u16, pub dst: u16 }
impl CeqI8 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let lhs = code[at + 1] as u16;
			let rhs = code[at + 2] as u16;
			let dst = code[at + 3] as u16;
			return Self { lhs, rhs, dst };
		}
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { lhs, rhs, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.lhs as u8;
			out[at + 2] = self.rhs as u8;
			out[at + 3] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.lhs <= u8::MAX as u16 && self.rhs <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct CeqR4 { pub lhs: u16, pub rhs: u16, pub dst: u16 }
impl CeqR4 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let lhs = code[at + 1] as u16;
			let rhs = code[at + 2] as u16;
			let dst = code[at + 3] as u16;
			return Self { lhs, rhs, dst };
		}
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { lhs, rhs, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.lhs as u8;
			out[at + 2] = self.rhs as u8;
			out[at + 3] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.lhs <= u8::MAX as u16 && self.rhs <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct CeqR8 { pub lhs: u16, pub rhs: u16, pub dst: u16 }
impl CeqR8 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let lhs = code[at + 1] as u16;
			let rhs = code[at + 2] as u16;
			let dst = code[at + 3] as u16;
			return Self { lhs, rhs, dst };
		}
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { lhs, rhs, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.lhs as u8;
			out[at + 2] = self.rhs as u8;
			out[at + 3] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.lhs <= u8::MAX as u16 && self.rhs <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct CgtI4 { pub lhs: u16, pub rhs: u16, pub dst: u16 }
impl CgtI4 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let lhs = code[at + 1] as u16;
			let rhs = code[at + 2] as u16;
			let dst = code[at + 3] as u16;
			return Self { lhs, rhs, dst };
		}
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { lhs, rhs, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.lhs as u8;
			out[at + 2] = self.rhs as u8;
			out[at + 3] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.lhs <= u8::MAX as u16 && self.rhs <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct CgtI8 { pub lhs: u16, pub rhs: u16, pub dst: u16 }
impl CgtI8 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let lhs = code[at + 1] as u16;
			let rhs = code[at + 2] as u16;
			let dst = code[at + 3] as u16;
			return Self { lhs, rhs, dst };
		}
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { lhs, rhs, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.lhs as u8;
			out[at + 2] = self.rhs as u8;
			out[at + 3] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.lhs <= u8::MAX as u16 && self.rhs <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct CgtR4 { pub lhs: u16, pub rhs: u16, pub dst: u16 }
impl CgtR4 {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { lhs, rhs, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct CgtR8 { pub lhs: u16, pub rhs: u16, pub dst: u16 }
impl CgtR8 {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { lhs, rhs, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct CgtUnI4 { pub lhs: u16, pub rhs: u16, pub dst: u16 }
impl CgtUnI4 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let lhs = code[at + 1] as u16;
			let rhs = code[at + 2] as u16;
			let dst = code[at + 3] as u16;
			return Self { lhs, rhs, dst };
		}
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { lhs, rhs, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.lhs as u8;
			out[at + 2] = self.rhs as u8;
			out[at + 3] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.lhs <= u8::MAX as u16 && self.rhs <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct CgtUnI8 { pub lhs: u16, pub rhs: u16, pub dst: u16 }
impl CgtUnI8 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let lhs = code[at + 1] as u16;
			let rhs = code[at + 2] as u16;
			let dst = code[at + 3] as u16;
			return Self { lhs, rhs, dst };
		}
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { lhs, rhs, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.lhs as u8;
			out[at + 2] = self.rhs as u8;
			out[at + 3] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.lhs <= u8::MAX as u16 && self.rhs <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct CgtUnR4 { pub lhs: u16, pub rhs: u16, pub dst: u16 }
impl CgtUnR4 {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { lhs, rhs, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct CgtUnR8 { pub lhs: u16, pub rhs: u16, pub dst: u16 }
impl CgtUnR8 {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { lhs, rhs, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct CltI4 { pub lhs: u16, pub rhs: u16, pub dst: u16 }
impl CltI4 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let lhs = code[at + 1] as u16;
			let rhs = code[at + 2] as u16;
			let dst = code[at + 3] as u16;
			return Self { lhs, rhs, dst };
		}
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { lhs, rhs, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.lhs as u8;
			out[at + 2] = self.rhs as u8;
			out[at + 3] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.lhs <= u8::MAX as u16 && self.rhs <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct CltI8 { pub lhs: u16, pub rhs: u16, pub dst: u16 }
impl CltI8 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let lhs = code[at + 1] as u16;
			let rhs = code[at + 2] as u16;
			let dst = code[at + 3] as u16;
			return Self { lhs, rhs, dst };
		}
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { lhs, rhs, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.lhs as u8;
			out[at + 2] = self.rhs as u8;
			out[at + 3] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.lhs <= u8::MAX as u16 && self.rhs <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct CltR4 { pub lhs: u16, pub rhs: u16, pub dst: u16 }
impl CltR4 {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { lhs, rhs, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct CltR8 { pub lhs: u16, pub rhs: u16, pub dst: u16 }
impl CltR8 {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { lhs, rhs, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct CltUnI4 { pub lhs: u16, pub rhs: u16, pub dst: u16 }
impl CltUnI4 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let lhs = code[at + 1] as u16;
			let rhs = code[at + 2] as u16;
			let dst = code[at + 3] as u16;
			return Self { lhs, rhs, dst };
		}
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { lhs, rhs, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.lhs as u8;
			out[at + 2] = self.rhs as u8;
			out[at + 3] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.lhs <= u8::MAX as u16 && self.rhs <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct CltUnI8 { pub lhs: u16, pub rhs: u16, pub dst: u16 }
impl CltUnI8 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let lhs = code[at + 1] as u16;
			let rhs = code[at + 2] as u16;
			let dst = code[at + 3] as u16;
			return Self { lhs, rhs, dst };
		}
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { lhs, rhs, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.lhs as u8;
			out[at + 2] = self.rhs as u8;
			out[at + 3] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.lhs <= u8::MAX as u16 && self.rhs <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct CltUnR4 { pub lhs: u16, pub rhs: u16, pub dst: u16 }
impl CltUnR4 {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { lhs, rhs, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct CltUnR8 { pub lhs: u16, pub rhs: u16, pub dst: u16 }
impl CltUnR8 {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { lhs, rhs, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LdIndI1 { pub src: u16, pub dst: u16 }
impl LdIndI1 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 2] as u16;
			let dst = code[at + 3] as u16;
			return Self { src, dst };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 2] = self.src as u8;
			out[at + 3] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LdIndU1 { pub src: u16, pub dst: u16 }
impl LdIndU1 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 2] as u16;
			let dst = code[at + 3] as u16;
			return Self { src, dst };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 2] = self.src as u8;
			out[at + 3] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LdIndI2 { pub src: u16, pub dst: u16 }
impl LdIndI2 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 2] as u16;
			let dst = code[at + 3] as u16;
			return Self { src, dst };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 2] = self.src as u8;
			out[at + 3] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LdIndU2 { pub src: u16, pub dst: u16 }
impl LdIndU2 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 2] as u16;
			let dst = code[at + 3] as u16;
			return Self { src, dst };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 2] = self.src as u8;
			out[at + 3] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LdIndI4 { pub src: u16, pub dst: u16 }
impl LdIndI4 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 2] as u16;
			let dst = code[at + 3] as u16;
			return Self { src, dst };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 2] = self.src as u8;
			out[at + 3] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LdIndI8 { pub src: u16, pub dst: u16 }
impl LdIndI8 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 2] as u16;
			let dst = code[at + 3] as u16;
			return Self { src, dst };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 2] = self.src as u8;
			out[at + 3] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LdIndRef { pub src: u16, pub dst: u16 }
impl LdIndRef {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 2] as u16;
			let dst = code[at + 3] as u16;
			return Self { src, dst };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 2] = self.src as u8;
			out[at + 3] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct StIndI1 { pub dest: u16, pub src: u16 }
impl StIndI1 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let dest = code[at + 2] as u16;
			let src = code[at + 3] as u16;
			return Self { dest, src };
		}
		let dest = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let src = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { dest, src }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 2] = self.dest as u8;
			out[at + 3] = self.src as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.dest.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.src.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.dest <= u8::MAX as u16 && self.src <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct StIndI2 { pub dest: u16, pub src: u16 }
impl StIndI2 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let dest = code[at + 2] as u16;
			let src = code[at + 3] as u16;
			return Self { dest, src };
		}
		let dest = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let src = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { dest, src }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 2] = self.dest as u8;
			out[at + 3] = self.src as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.dest.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.src.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.dest <= u8::MAX as u16 && self.src <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct StIndI4 { pub dest: u16, pub src: u16 }
impl StIndI4 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let dest = code[at + 2] as u16;
			let src = code[at + 3] as u16;
			return Self { dest, src };
		}
		let dest = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let src = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { dest, src }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 2] = self.dest as u8;
			out[at + 3] = self.src as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.dest.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.src.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.dest <= u8::MAX as u16 && self.src <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct StIndI8 { pub dest: u16, pub src: u16 }
impl StIndI8 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let dest = code[at + 2] as u16;
			let src = code[at + 3] as u16;
			return Self { dest, src };
		}
		let dest = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let src = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { dest, src }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 2] = self.dest as u8;
			out[at + 3] = self.src as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.dest.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.src.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.dest <= u8::MAX as u16 && self.src <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct StIndRef { pub dest: u16, pub src: u16 }
impl StIndRef {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let dest = code[at + 2] as u16;
			let src = code[at + 3] as u16;
			return Self { dest, src };
		}
		let dest = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let src = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { dest, src }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 2] = self.dest as u8;
			out[at + 3] = self.src as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.dest.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.src.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.dest <= u8::MAX as u16 && self.src <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LocAlloc { pub size: u16, pub dst: u16 }
impl LocAlloc {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let size = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { size, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.size.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct InitBlk { pub addr: u16, pub value: u16, pub size: u16 }
impl InitBlk {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let addr = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let value = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let size = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { addr, value, size }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.addr.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.value.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.size.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct CpBlk { pub dest: u16, pub src: u16, pub size: u16 }
impl CpBlk {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let dest = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let src = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let size = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { dest, src, size }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.dest.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.src.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.size.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct GetEnumLongHashCode { pub value_ptr: u16, pub dst: u16 }
impl GetEnumLongHashCode {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let value_ptr = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { value_ptr, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.value_ptr.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct InitObjI1 { pub addr: u16 }
impl InitObjI1 {
	pub const WIDE_SIZE: usize = 4;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let addr = code[at + 1] as u16;
			return Self { addr };
		}
		let addr = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		Self { addr }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.addr as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.addr.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.addr <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct InitObjI2 { pub addr: u16 }
impl InitObjI2 {
	pub const WIDE_SIZE: usize = 4;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let addr = code[at + 1] as u16;
			return Self { addr };
		}
		let addr = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		Self { addr }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.addr as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.addr.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.addr <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct InitObjI4 { pub addr: u16 }
impl InitObjI4 {
	pub const WIDE_SIZE: usize = 4;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let addr = code[at + 1] as u16;
			return Self { addr };
		}
		let addr = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		Self { addr }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.addr as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.addr.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.addr <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct InitObjI8 { pub addr: u16 }
impl InitObjI8 {
	pub const WIDE_SIZE: usize = 4;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let addr = code[at + 1] as u16;
			return Self { addr };
		}
		let addr = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		Self { addr }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.addr as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.addr.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.addr <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct InitObjAny { pub addr: u16, pub size: u16 }
impl InitObjAny {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let addr = code[at + 1] as u16;
			let size = code[at + 2] as u16;
			return Self { addr, size };
		}
		let addr = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let size = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { addr, size }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.addr as u8;
			out[at + 2] = self.size as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.addr.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.size.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.addr <= u8::MAX as u16 && self.size <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct CpObjI1 { pub dest: u16, pub src: u16 }
impl CpObjI1 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let dest = code[at + 1] as u16;
			let src = code[at + 2] as u16;
			return Self { dest, src };
		}
		let dest = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let src = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { dest, src }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.dest as u8;
			out[at + 2] = self.src as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.dest.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.src.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.dest <= u8::MAX as u16 && self.src <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct CpObjI2 { pub dest: u16, pub src: u16 }
impl CpObjI2 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let dest = code[at + 1] as u16;
			let src = code[at + 2] as u16;
			return Self { dest, src };
		}
		let dest = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let src = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { dest, src }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.dest as u8;
			out[at + 2] = self.src as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.dest.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.src.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.dest <= u8::MAX as u16 && self.src <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct CpObjI4 { pub dest: u16, pub src: u16 }
impl CpObjI4 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let dest = code[at + 1] as u16;
			let src = code[at + 2] as u16;
			return Self { dest, src };
		}
		let dest = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let src = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { dest, src }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.dest as u8;
			out[at + 2] = self.src as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.dest.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.src.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.dest <= u8::MAX as u16 && self.src <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct CpObjI8 { pub dest: u16, pub src: u16 }
impl CpObjI8 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let dest = code[at + 1] as u16;
			let src = code[at + 2] as u16;
			return Self { dest, src };
		}
		let dest = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let src = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { dest, src }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.dest as u8;
			out[at + 2] = self.src as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.dest.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.src.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.dest <= u8::MAX as u16 && self.src <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct CpObjAny { pub dest: u16, pub src: u16, pub size: u16 }
impl CpObjAny {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let dest = code[at + 1] as u16;
			let src = code[at + 2] as u16;
			let size = code[at + 3] as u16;
			return Self { dest, src, size };
		}
		let dest = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let src = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let size = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { dest, src, size }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.dest as u8;
			out[at + 2] = self.src as u8;
			out[at + 3] = self.size as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.dest.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.src.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.size.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.dest <= u8::MAX as u16 && self.src <= u8::MAX as u16 && self.size <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LdObjAny { pub src: u16, pub dst: u16, pub size: u16 }
impl LdObjAny {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			let size = code[at + 3] as u16;
			return Self { src, dst, size };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let size = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { src, dst, size }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.dst as u8;
			out[at + 3] = self.size as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.size.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16 && self.size <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct StObjAny { pub dest: u16, pub src: u16, pub size: u16 }
impl StObjAny {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let dest = code[at + 1] as u16;
			let src = code[at + 2] as u16;
			let size = code[at + 3] as u16;
			return Self { dest, src, size };
		}
		let dest = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let src = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let size = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { dest, src, size }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.dest as u8;
			out[at + 2] = self.src as u8;
			out[at + 3] = self.size as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.dest.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.src.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.size.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.dest <= u8::MAX as u16 && self.src <= u8::MAX as u16 && self.size <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct CastClass { pub src: u16, pub dst: u16, pub klass_idx: u16 }
impl CastClass {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			let klass_idx = code[at + 3] as u16;
			return Self { src, dst, klass_idx };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let klass_idx = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { src, dst, klass_idx }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.dst as u8;
			out[at + 3] = self.klass_idx as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.klass_idx.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16 && self.klass_idx <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct IsInst { pub src: u16, pub dst: u16, pub klass_idx: u16 }
impl IsInst {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			let klass_idx = code[at + 3] as u16;
			return Self { src, dst, klass_idx };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let klass_idx = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { src, dst, klass_idx }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.dst as u8;
			out[at + 3] = self.klass_idx as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.klass_idx.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16 && self.klass_idx <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct Box { pub src: u16, pub dst: u16, pub klass_idx: u16 }
impl Box {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			let klass_idx = code[at + 3] as u16;
			return Self { src, dst, klass_idx };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let klass_idx = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { src, dst, klass_idx }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.dst as u8;
			out[at + 3] = self.klass_idx as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.klass_idx.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16 && self.klass_idx <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct Unbox { pub src: u16, pub dst: u16, pub klass_idx: u16 }
impl Unbox {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			let klass_idx = code[at + 3] as u16;
			return Self { src, dst, klass_idx };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let klass_idx = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { src, dst, klass_idx }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.dst as u8;
			out[at + 3] = self.klass_idx as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.klass_idx.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16 && self.klass_idx <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct UnboxAny { pub src: u16, pub dst: u16, pub klass_idx: u16, pub size: u16 }
impl UnboxAny {
	pub const WIDE_SIZE: usize = 12;
	pub const SHORT_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			let klass_idx = code[at + 3] as u16;
			let size = code[at + 4] as u16;
			return Self { src, dst, klass_idx, size };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let klass_idx = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		let size = u16::from_le_bytes([code[at + 8], code[at + 9]]);
		Self { src, dst, klass_idx, size }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.dst as u8;
			out[at + 3] = self.klass_idx as u8;
			out[at + 4] = self.size as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.klass_idx.to_le_bytes());
		out[at + 8..at + 10].copy_from_slice(&self.size.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16 && self.klass_idx <= u8::MAX as u16 && self.size <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct NewArr { pub len: u16, pub dst: u16, pub klass_idx: u16 }
impl NewArr {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let len = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			let klass_idx = code[at + 3] as u16;
			return Self { len, dst, klass_idx };
		}
		let len = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let klass_idx = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { len, dst, klass_idx }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.len as u8;
			out[at + 2] = self.dst as u8;
			out[at + 3] = self.klass_idx as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.len.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.klass_idx.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.len <= u8::MAX as u16 && self.dst <= u8::MAX as u16 && self.klass_idx <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LdLen { pub arr: u16, pub dst: u16 }
impl LdLen {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let arr = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			return Self { arr, dst };
		}
		let arr = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { arr, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.arr as u8;
			out[at + 2] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.arr.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.arr <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct Ldelema { pub arr: u16, pub index: u16, pub dst: u16, pub klass_idx: u16 }
impl Ldelema {
	pub const WIDE_SIZE: usize = 12;
	pub const SHORT_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let arr = code[at + 1] as u16;
			let index = code[at + 2] as u16;
			let dst = code[at + 3] as u16;
			let klass_idx = code[at + 4] as u16;
			return Self { arr, index, dst, klass_idx };
		}
		let arr = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let index = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		let klass_idx = u16::from_le_bytes([code[at + 8], code[at + 9]]);
		Self { arr, index, dst, klass_idx }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.arr as u8;
			out[at + 2] = self.index as u8;
			out[at + 3] = self.dst as u8;
			out[at + 4] = self.klass_idx as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.arr.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.index.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
		out[at + 8..at + 10].copy_from_slice(&self.klass_idx.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.arr <= u8::MAX as u16 && self.index <= u8::MAX as u16 && self.dst <= u8::MAX as u16 && self.klass_idx <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LdelemaReadOnly { pub arr: u16, pub index: u16, pub dst: u16, pub klass_idx: u16 }
impl LdelemaReadOnly {
	pub const WIDE_SIZE: usize = 12;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let arr = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let index = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		let klass_idx = u16::from_le_bytes([code[at + 8], code[at + 9]]);
		Self { arr, index, dst, klass_idx }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.arr.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.index.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
		out[at + 8..at + 10].copy_from_slice(&self.klass_idx.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LdelemI1 { pub arr: u16, pub index: u16, pub dst: u16 }
impl LdelemI1 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let arr = code[at + 1] as u16;
			let index = code[at + 2] as u16;
			let dst = code[at + 3] as u16;
			return Self { arr, index, dst };
		}
		let arr = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let index = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { arr, index, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.arr as u8;
			out[at + 2] = self.index as u8;
			out[at + 3] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.arr.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.index.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.arr <= u8::MAX as u16 && self.index <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LdelemU1 { pub arr: u16, pub index: u16, pub dst: u16 }
impl LdelemU1 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let arr = code[at + 1] as u16;
			let index = code[at + 2] as u16;
			let dst = code[at + 3] as u16;
			return Self { arr, index, dst };
		}
		let arr = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let index = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { arr, index, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.arr as u8;
			out[at + 2] = self.index as u8;
			out[at + 3] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.arr.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.index.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.arr <= u8::MAX as u16 && self.index <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LdelemI2 { pub arr: u16, pub index: u16, pub dst: u16 }
impl LdelemI2 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let arr = code[at + 1] as u16;
			let index = code[at + 2] as u16;
			let dst = code[at + 3] as u16;
			return Self { arr, index, dst };
		}
		let arr = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let index = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { arr, index, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.arr as u8;
			out[at + 2] = self.index as u8;
			out[at + 3] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.arr.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.index.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.arr <= u8::MAX as u16 && self.index <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LdelemU2 { pub arr: u16, pub index: u16, pub dst: u16 }
impl LdelemU2 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let arr = code[at + 1] as u16;
			let index = code[at + 2] as u16;
			let dst = code[at + 3] as u16;
			return Self { arr, index, dst };
		}
		let arr = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let index = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { arr, index, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.arr as u8;
			out[at + 2] = self.index as u8;
			out[at + 3] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.arr.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.index.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.arr <= u8::MAX as u16 && self.index <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LdelemI4 { pub arr: u16, pub index: u16, pub dst: u16 }
impl LdelemI4 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let arr = code[at + 1] as u16;
			let index = code[at + 2] as u16;
			let dst = code[at + 3] as u16;
			return Self { arr, index, dst };
		}
		let arr = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let index = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { arr, index, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.arr as u8;
			out[at + 2] = self.index as u8;
			out[at + 3] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.arr.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.index.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.arr <= u8::MAX as u16 && self.index <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LdelemI8 { pub arr: u16, pub index: u16, pub dst: u16 }
impl LdelemI8 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let arr = code[at + 1] as u16;
			let index = code[at + 2] as u16;
			let dst = code[at + 3] as u16;
			return Self { arr, index, dst };
		}
		let arr = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let index = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { arr, index, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.arr as u8;
			out[at + 2] = self.index as u8;
			out[at + 3] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.arr.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.index.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.arr <= u8::MAX as u16 && self.index <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LdelemRef { pub arr: u16, pub index: u16, pub dst: u16 }
impl LdelemRef {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let arr = code[at + 1] as u16;
			let index = code[at + 2] as u16;
			let dst = code[at + 3] as u16;
			return Self { arr, index, dst };
		}
		let arr = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let index = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { arr, index, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.arr as u8;
			out[at + 2] = self.index as u8;
			out[at + 3] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.arr.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.index.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.arr <= u8::MAX as u16 && self.index <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LdelemAny { pub arr: u16, pub index: u16, pub dst: u16, pub size: u16 }
impl LdelemAny {
	pub const WIDE_SIZE: usize = 12;
	pub const SHORT_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let arr = code[at + 1] as u16;
			let index = code[at + 2] as u16;
			let dst = code[at + 3] as u16;
			let size = code[at + 4] as u16;
			return Self { arr, index, dst, size };
		}
		let arr = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let index = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		let size = u16::from_le_bytes([code[at + 8], code[at + 9]]);
		Self { arr, index, dst, size }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.arr as u8;
			out[at + 2] = self.index as u8;
			out[at + 3] = self.dst as u8;
			out[at + 4] = self.size as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.arr.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.index.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
		out[at + 8..at + 10].copy_from_slice(&self.size.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.arr <= u8::MAX as u16 && self.index <= u8::MAX as u16 && self.dst <= u8::MAX as u16 && self.size <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct StelemI1 { pub arr: u16, pub index: u16, pub src: u16 }
impl StelemI1 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let arr = code[at + 1] as u16;
			let index = code[at + 2] as u16;
			let src = code[at + 3] as u16;
			return Self { arr, index, src };
		}
		let arr = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let index = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let src = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { arr, index, src }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.arr as u8;
			out[at + 2] = self.index as u8;
			out[at + 3] = self.src as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.arr.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.index.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.src.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.arr <= u8::MAX as u16 && self.index <= u8::MAX as u16 && self.src <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct StelemI2 { pub arr: u16, pub index: u16, pub src: u16 }
impl StelemI2 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let arr = code[at + 1] as u16;
			let index = code[at + 2] as u16;
			let src = code[at + 3] as u16;
			return Self { arr, index, src };
		}
		let arr = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let index = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let src = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { arr, index, src }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.arr as u8;
			out[at + 2] = self.index as u8;
			out[at + 3] = self.src as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.arr.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.index.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.src.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.arr <= u8::MAX as u16 && self.index <= u8::MAX as u16 && self.src <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct StelemI4 { pub arr: u16, pub index: u16, pub src: u16 }
impl StelemI4 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let arr = code[at + 1] as u16;
			let index = code[at + 2] as u16;
			let src = code[at + 3] as u16;
			return Self { arr, index, src };
		}
		let arr = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let index = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let src = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { arr, index, src }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.arr as u8;
			out[at + 2] = self.index as u8;
			out[at + 3] = self.src as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.arr.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.index.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.src.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.arr <= u8::MAX as u16 && self.index <= u8::MAX as u16 && self.src <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct StelemI8 { pub arr: u16, pub index: u16, pub src: u16 }
impl StelemI8 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let arr = code[at + 1] as u16;
			let index = code[at + 2] as u16;
			let src = code[at + 3] as u16;
			return Self { arr, index, src };
		}
		let arr = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let index = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let src = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { arr, index, src }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.arr as u8;
			out[at + 2] = self.index as u8;
			out[at + 3] = self.src as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.arr.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.index.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.src.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.arr <= u8::MAX as u16 && self.index <= u8::MAX as u16 && self.src <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct StelemRef { pub arr: u16, pub index: u16, pub src: u16 }
impl StelemRef {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let arr = code[at + 1] as u16;
			let index = code[at + 2] as u16;
			let src = code[at + 3] as u16;
			return Self { arr, index, src };
		}
		let arr = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let index = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let src = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { arr, index, src }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.arr as u8;
			out[at + 2] = self.index as u8;
			out[at + 3] = self.src as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.arr.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.index.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.src.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.arr <= u8::MAX as u16 && self.index <= u8::MAX as u16 && self.src <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct StelemAny { pub arr: u16, pub index: u16, pub src: u16, pub size: u16 }
impl StelemAny {
	pub const WIDE_SIZE: usize = 12;
	pub const SHORT_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let arr = code[at + 1] as u16;
			let index = code[at + 2] as u16;
			let src = code[at + 3] as u16;
			let size = code[at + 4] as u16;
			return Self { arr, index, src, size };
		}
		let arr = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let index = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let src = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		let size = u16::from_le_bytes([code[at + 8], code[at + 9]]);
		Self { arr, index, src, size }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.arr as u8;
			out[at + 2] = self.index as u8;
			out[at + 3] = self.src as u8;
			out[at + 4] = self.size as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.arr.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.index.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.src.to_le_bytes());
		out[at + 8..at + 10].copy_from_slice(&self.size.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.arr <= u8::MAX as u16 && self.index <= u8::MAX as u16 && self.src <= u8::MAX as u16 && self.size <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct Ldftn { pub method_idx: u16, pub dst: u16 }
impl Ldftn {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let method_idx = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			return Self { method_idx, dst };
		}
		let method_idx = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { method_idx, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.method_idx as u8;
			out[at + 2] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.method_idx.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.method_idx <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct Ldvirtftn { pub method_idx: u16, pub obj: u16, pub dst: u16 }
impl Ldvirtftn {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let method_idx = code[at + 1] as u16;
			let obj = code[at + 2] as u16;
			let dst = code[at + 3] as u16;
			return Self { method_idx, obj, dst };
		}
		let method_idx = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let obj = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { method_idx, obj, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.method_idx as u8;
			out[at + 2] = self.obj as u8;
			out[at + 3] = self.dst as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.method_idx.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.obj.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.method_idx <= u8::MAX as u16 && self.obj <= u8::MAX as u16 && self.dst <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LdfldI1 { pub obj: u16, pub dst: u16, pub offset: u16 }
impl LdfldI1 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let obj = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			let offset = code[at + 3] as u16;
			return Self { obj, dst, offset };
		}
		let obj = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let offset = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { obj, dst, offset }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.obj as u8;
			out[at + 2] = self.dst as u8;
			out[at + 3] = self.offset as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.obj.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.offset.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.obj <= u8::MAX as u16 && self.dst <= u8::MAX as u16 && self.offset <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LdfldU1 { pub obj: u16, pub dst: u16, pub offset: u16 }
impl LdfldU1 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let obj = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			let offset = code[at + 3] as u16;
			return Self { obj, dst, offset };
		}
		let obj = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let offset = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { obj, dst, offset }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.obj as u8;
			out[at + 2] = self.dst as u8;
			out[at + 3] = self.offset as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.obj.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.offset.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.obj <= u8::MAX as u16 && self.dst <= u8::MAX as u16 && self.offset <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LdfldI2 { pub obj: u16, pub dst: u16, pub offset: u16 }
impl LdfldI2 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let obj = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			let offset = code[at + 3] as u16;
			return Self { obj, dst, offset };
		}
		let obj = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let offset = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { obj, dst, offset }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.obj as u8;
			out[at + 2] = self.dst as u8;
			out[at + 3] = self.offset as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.obj.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.offset.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.obj <= u8::MAX as u16 && self.dst <= u8::MAX as u16 && self.offset <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LdfldU2 { pub obj: u16, pub dst: u16, pub offset: u16 }
impl LdfldU2 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let obj = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			let offset = code[at + 3] as u16;
			return Self { obj, dst, offset };
		}
		let obj = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let offset = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { obj, dst, offset }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.obj as u8;
			out[at + 2] = self.dst as u8;
			out[at + 3] = self.offset as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.obj.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.offset.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.obj <= u8::MAX as u16 && self.dst <= u8::MAX as u16 && self.offset <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LdfldI4 { pub obj: u16, pub dst: u16, pub offset: u16 }
impl LdfldI4 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let obj = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			let offset = code[at + 3] as u16;
			return Self { obj, dst, offset };
		}
		let obj = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let offset = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { obj, dst, offset }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.obj as u8;
			out[at + 2] = self.dst as u8;
			out[at + 3] = self.offset as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.obj.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.offset.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.obj <= u8::MAX as u16 && self.dst <= u8::MAX as u16 && self.offset <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LdfldI8 { pub obj: u16, pub dst: u16, pub offset: u16 }
impl LdfldI8 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let obj = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			let offset = code[at + 3] as u16;
			return Self { obj, dst, offset };
		}
		let obj = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let offset = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { obj, dst, offset }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.obj as u8;
			out[at + 2] = self.dst as u8;
			out[at + 3] = self.offset as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.obj.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.offset.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.obj <= u8::MAX as u16 && self.dst <= u8::MAX as u16 && self.offset <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LdfldAny { pub obj: u16, pub dst: u16, pub offset: u16, pub size: u16 }
impl LdfldAny {
	pub const WIDE_SIZE: usize = 12;
	pub const SHORT_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let obj = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			let offset = code[at + 3] as u16;
			let size = code[at + 4] as u16;
			return Self { obj, dst, offset, size };
		}
		let obj = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let offset = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		let size = u16::from_le_bytes([code[at + 8], code[at + 9]]);
		Self { obj, dst, offset, size }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.obj as u8;
			out[at + 2] = self.dst as u8;
			out[at + 3] = self.offset as u8;
			out[at + 4] = self.size as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.obj.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.offset.to_le_bytes());
		out[at + 8..at + 10].copy_from_slice(&self.size.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.obj <= u8::MAX as u16 && self.dst <= u8::MAX as u16 && self.offset <= u8::MAX as u16 && self.size <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LdvfldI1 { pub src: u16, pub dst: u16, pub offset: u16 }
impl LdvfldI1 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			let offset = code[at + 3] as u16;
			return Self { src, dst, offset };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let offset = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { src, dst, offset }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.dst as u8;
			out[at + 3] = self.offset as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.offset.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16 && self.offset <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LdvfldU1 { pub src: u16, pub dst: u16, pub offset: u16 }
impl LdvfldU1 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			let offset = code[at + 3] as u16;
			return Self { src, dst, offset };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let offset = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { src, dst, offset }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.dst as u8;
			out[at + 3] = self.offset as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.offset.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16 && self.offset <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LdvfldI2 { pub src: u16, pub dst: u16, pub offset: u16 }
impl LdvfldI2 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			let offset = code[at + 3] as u16;
			return Self { src, dst, offset };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let offset = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { src, dst, offset }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.dst as u8;
			out[at + 3] = self.offset as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.offset.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16 && self.offset <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LdvfldU2 { pub src: u16, pub dst: u16, pub offset: u16 }
impl LdvfldU2 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			let offset = code[at + 3] as u16;
			return Self { src, dst, offset };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let offset = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { src, dst, offset }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.dst as u8;
			out[at + 3] = self.offset as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.offset.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16 && self.offset <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LdvfldI4 { pub src: u16, pub dst: u16, pub offset: u16 }
impl LdvfldI4 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			let offset = code[at + 3] as u16;
			return Self { src, dst, offset };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let offset = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { src, dst, offset }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.dst as u8;
			out[at + 3] = self.offset as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.offset.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16 && self.offset <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LdvfldI8 { pub src: u16, pub dst: u16, pub offset: u16 }
impl LdvfldI8 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			let offset = code[at + 3] as u16;
			return Self { src, dst, offset };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let offset = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { src, dst, offset }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.dst as u8;
			out[at + 3] = self.offset as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.offset.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16 && self.offset <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LdvfldAny { pub src: u16, pub dst: u16, pub offset: u16, pub size: u16 }
impl LdvfldAny {
	pub const WIDE_SIZE: usize = 12;
	pub const SHORT_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			let offset = code[at + 3] as u16;
			let size = code[at + 4] as u16;
			return Self { src, dst, offset, size };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let offset = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		let size = u16::from_le_bytes([code[at + 8], code[at + 9]]);
		Self { src, dst, offset, size }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.dst as u8;
			out[at + 3] = self.offset as u8;
			out[at + 4] = self.size as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.offset.to_le_bytes());
		out[at + 8..at + 10].copy_from_slice(&self.size.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.dst <= u8::MAX as u16 && self.offset <= u8::MAX as u16 && self.size <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct Ldflda { pub obj: u16, pub dst: u16, pub offset: u16 }
impl Ldflda {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let obj = code[at + 1] as u16;
			let dst = code[at + 2] as u16;
			let offset = code[at + 3] as u16;
			return Self { obj, dst, offset };
		}
		let obj = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let offset = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { obj, dst, offset }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.obj as u8;
			out[at + 2] = self.dst as u8;
			out[at + 3] = self.offset as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.obj.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.offset.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.obj <= u8::MAX as u16 && self.dst <= u8::MAX as u16 && self.offset <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct StfldI1 { pub obj: u16, pub src: u16, pub offset: u16 }
impl StfldI1 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let obj = code[at + 1] as u16;
			let src = code[at + 2] as u16;
			let offset = code[at + 3] as u16;
			return Self { obj, src, offset };
		}
		let obj = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let src = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let offset = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { obj, src, offset }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.obj as u8;
			out[at + 2] = self.src as u8;
			out[at + 3] = self.offset as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.obj.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.src.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.offset.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.obj <= u8::MAX as u16 && self.src <= u8::MAX as u16 && self.offset <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct StfldI2 { pub obj: u16, pub src: u16, pub offset: u16 }
impl StfldI2 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let obj = code[at + 1] as u16;
			let src = code[at + 2] as u16;
			let offset = code[at + 3] as u16;
			return Self { obj, src, offset };
		}
		let obj = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let src = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let offset = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { obj, src, offset }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.obj as u8;
			out[at + 2] = self.src as u8;
			out[at + 3] = self.offset as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.obj.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.src.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.offset.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.obj <= u8::MAX as u16 && self.src <= u8::MAX as u16 && self.offset <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct StfldI4 { pub obj: u16, pub src: u16, pub offset: u16 }
impl StfldI4 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let obj = code[at + 1] as u16;
			let src = code[at + 2] as u16;
			let offset = code[at + 3] as u16;
			return Self { obj, src, offset };
		}
		let obj = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let src = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let offset = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { obj, src, offset }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.obj as u8;
			out[at + 2] = self.src as u8;
			out[at + 3] = self.offset as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.obj.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.src.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.offset.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.obj <= u8::MAX as u16 && self.src <= u8::MAX as u16 && self.offset <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct StfldI8 { pub obj: u16, pub src: u16, pub offset: u16 }
impl StfldI8 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let obj = code[at + 1] as u16;
			let src = code[at + 2] as u16;
			let offset = code[at + 3] as u16;
			return Self { obj, src, offset };
		}
		let obj = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let src = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let offset = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { obj, src, offset }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.obj as u8;
			out[at + 2] = self.src as u8;
			out[at + 3] = self.offset as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.obj.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.src.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.offset.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.obj <= u8::MAX as u16 && self.src <= u8::MAX as u16 && self.offset <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct StfldAny { pub obj: u16, pub src: u16, pub offset: u16, pub size: u16 }
impl StfldAny {
	pub const WIDE_SIZE: usize = 12;
	pub const SHORT_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let obj = code[at + 1] as u16;
			let src = code[at + 2] as u16;
			let offset = code[at + 3] as u16;
			let size = code[at + 4] as u16;
			return Self { obj, src, offset, size };
		}
		let obj = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let src = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let offset = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		let size = u16::from_le_bytes([code[at + 8], code[at + 9]]);
		Self { obj, src, offset, size }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.obj as u8;
			out[at + 2] = self.src as u8;
			out[at + 3] = self.offset as u8;
			out[at + 4] = self.size as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.obj.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.src.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.offset.to_le_bytes());
		out[at + 8..at + 10].copy_from_slice(&self.size.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.obj <= u8::MAX as u16 && self.src <= u8::MAX as u16 && self.offset <= u8::MAX as u16 && self.size <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LdfldI1Large { pub obj: u16, pub dst: u16, pub offset: u32 }
impl LdfldI1Large {
	pub const WIDE_SIZE: usize = 12;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let obj = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let offset = u32::from_le_bytes([code[at + 8], code[at + 9], code[at + 10], code[at + 11]]);
		Self { obj, dst, offset }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.obj.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
		out[at + 8..at + 12].copy_from_slice(&self.offset.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LdfldU1Large { pub obj: u16, pub dst: u16, pub offset: u32 }
impl LdfldU1Large {
	pub const WIDE_SIZE: usize = 12;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let obj = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let offset = u32::from_le_bytes([code[at + 8], code[at + 9], code[at + 10], code[at + 11]]);
		Self { obj, dst, offset }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.obj.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
		out[at + 8..at + 12].copy_from_slice(&self.offset.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LdfldI2Large { pub obj: u16, pub dst: u16, pub offset: u32 }
impl LdfldI2Large {
	pub const WIDE_SIZE: usize = 12;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let obj = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let offset = u32::from_le_bytes([code[at + 8], code[at + 9], code[at + 10], code[at + 11]]);
		Self { obj, dst, offset }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.obj.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
		out[at + 8..at + 12].copy_from_slice(&self.offset.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LdfldU2Large { pub obj: u16, pub dst: u16, pub offset: u32 }
impl LdfldU2Large {
	pub const WIDE_SIZE: usize = 12;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let obj = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let offset = u32::from_le_bytes([code[at + 8], code[at + 9], code[at + 10], code[at + 11]]);
		Self { obj, dst, offset }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.obj.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
		out[at + 8..at + 12].copy_from_slice(&self.offset.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LdfldI4Large { pub obj: u16, pub dst: u16, pub offset: u32 }
impl LdfldI4Large {
	pub const WIDE_SIZE: usize = 12;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let obj = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let offset = u32::from_le_bytes([code[at + 8], code[at + 9], code[at + 10], code[at + 11]]);
		Self { obj, dst, offset }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.obj.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
		out[at + 8..at + 12].copy_from_slice(&self.offset.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LdfldI8Large { pub obj: u16, pub dst: u16, pub offset: u32 }
impl LdfldI8Large {
	pub const WIDE_SIZE: usize = 12;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let obj = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let offset = u32::from_le_bytes([code[at + 8], code[at + 9], code[at + 10], code[at + 11]]);
		Self { obj, dst, offset }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.obj.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
		out[at + 8..at + 12].copy_from_slice(&self.offset.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LdfldAnyLarge { pub obj: u16, pub dst: u16, pub offset: u32, pub size: u16 }
impl LdfldAnyLarge {
	pub const WIDE_SIZE: usize = 16;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let obj = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let offset = u32::from_le_bytes([code[at + 8], code[at + 9], code[at + 10], code[at + 11]]);
		let size = u16::from_le_bytes([code[at + 12], code[at + 13]]);
		Self { obj, dst, offset, size }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.obj.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
		out[at + 8..at + 12].copy_from_slice(&self.offset.to_le_bytes());
		out[at + 12..at + 14].copy_from_slice(&self.size.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LdfldaLarge { pub obj: u16, pub dst: u16, pub offset: u32 }
impl LdfldaLarge {
	pub const WIDE_SIZE: usize = 12;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let obj = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let offset = u32::from_le_bytes([code[at + 8], code[at + 9], code[at + 10], code[at + 11]]);
		Self { obj, dst, offset }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.obj.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
		out[at + 8..at + 12].copy_from_slice(&self.offset.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct StfldI1Large { pub obj: u16, pub src: u16, pub offset: u32 }
impl StfldI1Large {
	pub const WIDE_SIZE: usize = 12;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let obj = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let src = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let offset = u32::from_le_bytes([code[at + 8], code[at + 9], code[at + 10], code[at + 11]]);
		Self { obj, src, offset }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.obj.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.src.to_le_bytes());
		out[at + 8..at + 12].copy_from_slice(&self.offset.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct StfldI2Large { pub obj: u16, pub src: u16, pub offset: u32 }
impl StfldI2Large {
	pub const WIDE_SIZE: usize = 12;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let obj = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let src = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let offset = u32::from_le_bytes([code[at + 8], code[at + 9], code[at + 10], code[at + 11]]);
		Self { obj, src, offset }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.obj.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.src.to_le_bytes());
		out[at + 8..at + 12].copy_from_slice(&self.offset.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct StfldI4Large { pub obj: u16, pub src: u16, pub offset: u32 }
impl StfldI4Large {
	pub const WIDE_SIZE: usize = 12;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let obj = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let src = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let offset = u32::from_le_bytes([code[at + 8], code[at + 9], code[at + 10], code[at + 11]]);
		Self { obj, src, offset }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.obj.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.src.to_le_bytes());
		out[at + 8..at + 12].copy_from_slice(&self.offset.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct StfldI8Large { pub obj: u16, pub src: u16, pub offset: u32 }
impl StfldI8Large {
	pub const WIDE_SIZE: usize = 12;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let obj = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let src = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let offset = u32::from_le_bytes([code[at + 8], code[at + 9], code[at + 10], code[at + 11]]);
		Self { obj, src, offset }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.obj.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.src.to_le_bytes());
		out[at + 8..at + 12].copy_from_slice(&self.offset.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct StfldAnyLarge { pub obj: u16, pub src: u16, pub offset: u32, pub size: u16 }
impl StfldAnyLarge {
	pub const WIDE_SIZE: usize = 16;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let obj = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let src = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let offset = u32::from_le_bytes([code[at + 8], code[at + 9], code[at + 10], code[at + 11]]);
		let size = u16::from_le_bytes([code[at + 12], code[at + 13]]);
		Self { obj, src, offset, size }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.obj.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.src.to_le_bytes());
		out[at + 8..at + 12].copy_from_slice(&self.offset.to_le_bytes());
		out[at + 12..at + 14].copy_from_slice(&self.size.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LdfldI2Unaligned { pub obj: u16, pub dst: u16, pub offset: u16 }
impl LdfldI2Unaligned {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let obj = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let offset = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { obj, dst, offset }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.obj.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.offset.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LdfldU2Unaligned { pub obj: u16, pub dst: u16, pub offset: u16 }
impl LdfldU2Unaligned {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let obj = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let offset = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { obj, dst, offset }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.obj.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.offset.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LdfldI4Unaligned { pub obj: u16, pub dst: u16, pub offset: u16 }
impl LdfldI4Unaligned {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let obj = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let offset = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { obj, dst, offset }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.obj.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.offset.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LdfldI8Unaligned { pub obj: u16, pub dst: u16, pub offset: u16 }
impl LdfldI8Unaligned {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let obj = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let offset = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { obj, dst, offset }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.obj.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.offset.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct StfldI2Unaligned { pub obj: u16, pub src: u16, pub offset: u16 }
impl StfldI2Unaligned {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let obj = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let src = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let offset = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { obj, src, offset }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.obj.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.src.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.offset.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct StfldI4Unaligned { pub obj: u16, pub src: u16, pub offset: u16 }
impl StfldI4Unaligned {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let obj = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let src = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let offset = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { obj, src, offset }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.obj.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.src.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.offset.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct StfldI8Unaligned { pub obj: u16, pub src: u16, pub offset: u16 }
impl StfldI8Unaligned {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let obj = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let src = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let offset = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { obj, src, offset }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.obj.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.src.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.offset.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LdIndI2Unaligned { pub src: u16, pub dst: u16 }
impl LdIndI2Unaligned {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LdIndU2Unaligned { pub src: u16, pub dst: u16 }
impl LdIndU2Unaligned {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LdIndI4Unaligned { pub src: u16, pub dst: u16 }
impl LdIndI4Unaligned {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LdIndI8Unaligned { pub src: u16, pub dst: u16 }
impl LdIndI8Unaligned {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct StIndI2Unaligned { pub dest: u16, pub src: u16 }
impl StIndI2Unaligned {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let dest = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let src = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { dest, src }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.dest.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.src.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct StIndI4Unaligned { pub dest: u16, pub src: u16 }
impl StIndI4Unaligned {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let dest = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let src = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { dest, src }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.dest.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.src.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct StIndI8Unaligned { pub dest: u16, pub src: u16 }
impl StIndI8Unaligned {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let dest = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let src = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { dest, src }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.dest.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.src.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LdsfldI1 { pub dst: u16, pub klass_idx: u16, pub offset: u16 }
impl LdsfldI1 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let dst = code[at + 1] as u16;
			let klass_idx = code[at + 2] as u16;
			let offset = code[at + 3] as u16;
			return Self { dst, klass_idx, offset };
		}
		let dst = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let klass_idx = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let offset = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { dst, klass_idx, offset }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.dst as u8;
			out[at + 2] = self.klass_idx as u8;
			out[at + 3] = self.offset as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.dst.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.klass_idx.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.offset.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.dst <= u8::MAX as u16 && self.klass_idx <= u8::MAX as u16 && self.offset <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LdsfldU1 { pub dst: u16, pub klass_idx: u16, pub offset: u16 }
impl LdsfldU1 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let dst = code[at + 1] as u16;
			let klass_idx = code[at + 2] as u16;
			let offset = code[at + 3] as u16;
			return Self { dst, klass_idx, offset };
		}
		let dst = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let klass_idx = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let offset = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { dst, klass_idx, offset }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.dst as u8;
			out[at + 2] = self.klass_idx as u8;
			out[at + 3] = self.offset as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.dst.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.klass_idx.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.offset.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.dst <= u8::MAX as u16 && self.klass_idx <= u8::MAX as u16 && self.offset <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LdsfldI2 { pub dst: u16, pub klass_idx: u16, pub offset: u16 }
impl LdsfldI2 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let dst = code[at + 1] as u16;
			let klass_idx = code[at + 2] as u16;
			let offset = code[at + 3] as u16;
			return Self { dst, klass_idx, offset };
		}
		let dst = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let klass_idx = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let offset = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { dst, klass_idx, offset }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.dst as u8;
			out[at + 2] = self.klass_idx as u8;
			out[at + 3] = self.offset as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.dst.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.klass_idx.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.offset.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.dst <= u8::MAX as u16 && self.klass_idx <= u8::MAX as u16 && self.offset <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LdsfldU2 { pub dst: u16, pub klass_idx: u16, pub offset: u16 }
impl LdsfldU2 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let dst = code[at + 1] as u16;
			let klass_idx = code[at + 2] as u16;
			let offset = code[at + 3] as u16;
			return Self { dst, klass_idx, offset };
		}
		let dst = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let klass_idx = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let offset = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { dst, klass_idx, offset }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.dst as u8;
			out[at + 2] = self.klass_idx as u8;
			out[at + 3] = self.offset as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.dst.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.klass_idx.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.offset.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.dst <= u8::MAX as u16 && self.klass_idx <= u8::MAX as u16 && self.offset <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LdsfldI4 { pub dst: u16, pub klass_idx: u16, pub offset: u16 }
impl LdsfldI4 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let dst = code[at + 1] as u16;
			let klass_idx = code[at + 2] as u16;
			let offset = code[at + 3] as u16;
			return Self { dst, klass_idx, offset };
		}
		let dst = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let klass_idx = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let offset = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { dst, klass_idx, offset }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.dst as u8;
			out[at + 2] = self.klass_idx as u8;
			out[at + 3] = self.offset as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.dst.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.klass_idx.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.offset.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.dst <= u8::MAX as u16 && self.klass_idx <= u8::MAX as u16 && self.offset <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LdsfldI8 { pub dst: u16, pub klass_idx: u16, pub offset: u16 }
impl LdsfldI8 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let dst = code[at + 1] as u16;
			let klass_idx = code[at + 2] as u16;
			let offset = code[at + 3] as u16;
			return Self { dst, klass_idx, offset };
		}
		let dst = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let klass_idx = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let offset = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { dst, klass_idx, offset }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.dst as u8;
			out[at + 2] = self.klass_idx as u8;
			out[at + 3] = self.offset as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.dst.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.klass_idx.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.offset.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.dst <= u8::MAX as u16 && self.klass_idx <= u8::MAX as u16 && self.offset <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LdsfldAny { pub dst: u16, pub klass_idx: u16, pub offset: u16, pub size: u16 }
impl LdsfldAny {
	pub const WIDE_SIZE: usize = 12;
	pub const SHORT_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let dst = code[at + 1] as u16;
			let klass_idx = code[at + 2] as u16;
			let offset = code[at + 3] as u16;
			let size = code[at + 4] as u16;
			return Self { dst, klass_idx, offset, size };
		}
		let dst = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let klass_idx = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let offset = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		let size = u16::from_le_bytes([code[at + 8], code[at + 9]]);
		Self { dst, klass_idx, offset, size }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.dst as u8;
			out[at + 2] = self.klass_idx as u8;
			out[at + 3] = self.offset as u8;
			out[at + 4] = self.size as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.dst.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.klass_idx.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.offset.to_le_bytes());
		out[at + 8..at + 10].copy_from_slice(&self.size.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.dst <= u8::MAX as u16 && self.klass_idx <= u8::MAX as u16 && self.offset <= u8::MAX as u16 && self.size <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct Ldsflda { pub dst: u16, pub klass_idx: u16, pub offset: u16 }
impl Ldsflda {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let dst = code[at + 1] as u16;
			let klass_idx = code[at + 2] as u16;
			let offset = code[at + 3] as u16;
			return Self { dst, klass_idx, offset };
		}
		let dst = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let klass_idx = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let offset = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { dst, klass_idx, offset }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.dst as u8;
			out[at + 2] = self.klass_idx as u8;
			out[at + 3] = self.offset as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.dst.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.klass_idx.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.offset.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.dst <= u8::MAX as u16 && self.klass_idx <= u8::MAX as u16 && self.offset <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LdsfldRvaData { pub dst: u16, pub klass_idx: u16, pub offset: u16 }
impl LdsfldRvaData {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let dst = code[at + 1] as u16;
			let klass_idx = code[at + 2] as u16;
			let offset = code[at + 3] as u16;
			return Self { dst, klass_idx, offset };
		}
		let dst = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let klass_idx = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let offset = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { dst, klass_idx, offset }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.dst as u8;
			out[at + 2] = self.klass_idx as u8;
			out[at + 3] = self.offset as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.dst.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.klass_idx.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.offset.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.dst <= u8::MAX as u16 && self.klass_idx <= u8::MAX as u16 && self.offset <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct StsfldI1 { pub src: u16, pub klass_idx: u16, pub offset: u16 }
impl StsfldI1 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let klass_idx = code[at + 2] as u16;
			let offset = code[at + 3] as u16;
			return Self { src, klass_idx, offset };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let klass_idx = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let offset = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { src, klass_idx, offset }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.klass_idx as u8;
			out[at + 3] = self.offset as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.klass_idx.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.offset.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.klass_idx <= u8::MAX as u16 && self.offset <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct StsfldI2 { pub src: u16, pub klass_idx: u16, pub offset: u16 }
impl StsfldI2 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let klass_idx = code[at + 2] as u16;
			let offset = code[at + 3] as u16;
			return Self { src, klass_idx, offset };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let klass_idx = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let offset = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { src, klass_idx, offset }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.klass_idx as u8;
			out[at + 3] = self.offset as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.klass_idx.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.offset.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.klass_idx <= u8::MAX as u16 && self.offset <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct StsfldI4 { pub src: u16, pub klass_idx: u16, pub offset: u16 }
impl StsfldI4 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let klass_idx = code[at + 2] as u16;
			let offset = code[at + 3] as u16;
			return Self { src, klass_idx, offset };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let klass_idx = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let offset = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { src, klass_idx, offset }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.klass_idx as u8;
			out[at + 3] = self.offset as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.klass_idx.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.offset.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.klass_idx <= u8::MAX as u16 && self.offset <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct StsfldI8 { pub src: u16, pub klass_idx: u16, pub offset: u16 }
impl StsfldI8 {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let klass_idx = code[at + 2] as u16;
			let offset = code[at + 3] as u16;
			return Self { src, klass_idx, offset };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let klass_idx = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let offset = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { src, klass_idx, offset }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.klass_idx as u8;
			out[at + 3] = self.offset as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.klass_idx.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.offset.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.klass_idx <= u8::MAX as u16 && self.offset <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct StsfldAny { pub src: u16, pub klass_idx: u16, pub offset: u16, pub size: u16 }
impl StsfldAny {
	pub const WIDE_SIZE: usize = 12;
	pub const SHORT_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let klass_idx = code[at + 2] as u16;
			let offset = code[at + 3] as u16;
			let size = code[at + 4] as u16;
			return Self { src, klass_idx, offset, size };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let klass_idx = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let offset = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		let size = u16::from_le_bytes([code[at + 8], code[at + 9]]);
		Self { src, klass_idx, offset, size }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.klass_idx as u8;
			out[at + 3] = self.offset as u8;
			out[at + 4] = self.size as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.klass_idx.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.offset.to_le_bytes());
		out[at + 8..at + 10].copy_from_slice(&self.size.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.klass_idx <= u8::MAX as u16 && self.offset <= u8::MAX as u16 && self.size <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct RetVoid;
impl RetVoid {
	pub const WIDE_SIZE: usize = 4;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			return Self;
		}
		let _ = (code, at);
		Self
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			return;
		}
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		true
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct RetI4 { pub src: u16 }
impl RetI4 {
	pub const WIDE_SIZE: usize = 4;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			return Self { src };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		Self { src }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct RetI8 { pub src: u16 }
impl RetI8 {
	pub const WIDE_SIZE: usize = 4;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			return Self { src };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		Self { src }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct RetAny { pub src: u16, pub size: u16 }
impl RetAny {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let src = code[at + 1] as u16;
			let size = code[at + 2] as u16;
			return Self { src, size };
		}
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let size = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, size }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.src as u8;
			out[at + 2] = self.size as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.size.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.src <= u8::MAX as u16 && self.size <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct CallInterp { pub method_idx: u16, pub frame_base: u16 }
impl CallInterp {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let method_idx = code[at + 1] as u16;
			let frame_base = code[at + 2] as u16;
			return Self { method_idx, frame_base };
		}
		let method_idx = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let frame_base = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { method_idx, frame_base }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.method_idx as u8;
			out[at + 2] = self.frame_base as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.method_idx.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.frame_base.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.method_idx <= u8::MAX as u16 && self.frame_base <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct CallVirtInterp { pub method_idx: u16, pub frame_base: u16 }
impl CallVirtInterp {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let method_idx = code[at + 1] as u16;
			let frame_base = code[at + 2] as u16;
			return Self { method_idx, frame_base };
		}
		let method_idx = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let frame_base = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { method_idx, frame_base }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.method_idx as u8;
			out[at + 2] = self.frame_base as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.method_idx.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.frame_base.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.method_idx <= u8::MAX as u16 && self.frame_base <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct CallInternalCall { pub method_idx: u16, pub frame_base: u16 }
impl CallInternalCall {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let method_idx = code[at + 1] as u16;
			let frame_base = code[at + 2] as u16;
			return Self { method_idx, frame_base };
		}
		let method_idx = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let frame_base = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { method_idx, frame_base }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.method_idx as u8;
			out[at + 2] = self.frame_base as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.method_idx.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.frame_base.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.method_idx <= u8::MAX as u16 && self.frame_base <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct CallIntrinsic { pub method_idx: u16, pub frame_base: u16 }
impl CallIntrinsic {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let method_idx = code[at + 1] as u16;
			let frame_base = code[at + 2] as u16;
			return Self { method_idx, frame_base };
		}
		let method_idx = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let frame_base = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { method_idx, frame_base }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.method_idx as u8;
			out[at + 2] = self.frame_base as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.method_idx.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.frame_base.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.method_idx <= u8::MAX as u16 && self.frame_base <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct CallPInvoke { pub method_idx: u16, pub frame_base: u16 }
impl CallPInvoke {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let method_idx = code[at + 1] as u16;
			let frame_base = code[at + 2] as u16;
			return Self { method_idx, frame_base };
		}
		let method_idx = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let frame_base = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { method_idx, frame_base }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.method_idx as u8;
			out[at + 2] = self.frame_base as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.method_idx.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.frame_base.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.method_idx <= u8::MAX as u16 && self.frame_base <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct CallRuntimeImplemented { pub method_idx: u16, pub frame_base: u16 }
impl CallRuntimeImplemented {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let method_idx = code[at + 1] as u16;
			let frame_base = code[at + 2] as u16;
			return Self { method_idx, frame_base };
		}
		let method_idx = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let frame_base = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { method_idx, frame_base }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.method_idx as u8;
			out[at + 2] = self.frame_base as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.method_idx.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.frame_base.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.method_idx <= u8::MAX as u16 && self.frame_base <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct CalliInterp { pub method_sig_idx: u16, pub method_idx: u16, pub frame_base: u16 }
impl CalliInterp {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let method_sig_idx = code[at + 1] as u16;
			let method_idx = code[at + 2] as u16;
			let frame_base = code[at + 3] as u16;
			return Self { method_sig_idx, method_idx, frame_base };
		}
		let method_sig_idx = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let method_idx = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let frame_base = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { method_sig_idx, method_idx, frame_base }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.method_sig_idx as u8;
			out[at + 2] = self.method_idx as u8;
			out[at + 3] = self.frame_base as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.method_sig_idx.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.method_idx.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.frame_base.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.method_sig_idx <= u8::MAX as u16 && self.method_idx <= u8::MAX as u16 && self.frame_base <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct NewObjInterp { pub method_idx: u16, pub frame_base: u16, pub total_params_slots: u32 }
impl NewObjInterp {
	pub const WIDE_SIZE: usize = 12;
	pub const SHORT_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let method_idx = code[at + 1] as u16;
			let frame_base = code[at + 2] as u16;
			let total_params_slots = u32::from_le_bytes([code[at + 4], code[at + 5], code[at + 6], code[at + 7]]);
			return Self { method_idx, frame_base, total_params_slots };
		}
		let method_idx = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let frame_base = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let total_params_slots = u32::from_le_bytes([code[at + 8], code[at + 9], code[at + 10], code[at + 11]]);
		Self { method_idx, frame_base, total_params_slots }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.method_idx as u8;
			out[at + 2] = self.frame_base as u8;
			out[at + 4..at + 8].copy_from_slice(&self.total_params_slots.to_le_bytes());
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.method_idx.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.frame_base.to_le_bytes());
		out[at + 8..at + 12].copy_from_slice(&self.total_params_slots.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.method_idx <= u8::MAX as u16 && self.frame_base <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct NewValueTypeInterp { pub method_idx: u16, pub frame_base: u16, pub total_params_slots: u32 }
impl NewValueTypeInterp {
	pub const WIDE_SIZE: usize = 12;
	pub const SHORT_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let method_idx = code[at + 1] as u16;
			let frame_base = code[at + 2] as u16;
			let total_params_slots = u32::from_le_bytes([code[at + 4], code[at + 5], code[at + 6], code[at + 7]]);
			return Self { method_idx, frame_base, total_params_slots };
		}
		let method_idx = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let frame_base = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let total_params_slots = u32::from_le_bytes([code[at + 8], code[at + 9], code[at + 10], code[at + 11]]);
		Self { method_idx, frame_base, total_params_slots }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.method_idx as u8;
			out[at + 2] = self.frame_base as u8;
			out[at + 4..at + 8].copy_from_slice(&self.total_params_slots.to_le_bytes());
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.method_idx.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.frame_base.to_le_bytes());
		out[at + 8..at + 12].copy_from_slice(&self.total_params_slots.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.method_idx <= u8::MAX as u16 && self.frame_base <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct NewObjInternalCall { pub method_idx: u16, pub frame_base: u16, pub total_params_slots: u32 }
impl NewObjInternalCall {
	pub const WIDE_SIZE: usize = 12;
	pub const SHORT_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let method_idx = code[at + 1] as u16;
			let frame_base = code[at + 2] as u16;
			let total_params_slots = u32::from_le_bytes([code[at + 4], code[at + 5], code[at + 6], code[at + 7]]);
			return Self { method_idx, frame_base, total_params_slots };
		}
		let method_idx = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let frame_base = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let total_params_slots = u32::from_le_bytes([code[at + 8], code[at + 9], code[at + 10], code[at + 11]]);
		Self { method_idx, frame_base, total_params_slots }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.method_idx as u8;
			out[at + 2] = self.frame_base as u8;
			out[at + 4..at + 8].copy_from_slice(&self.total_params_slots.to_le_bytes());
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.method_idx.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.frame_base.to_le_bytes());
		out[at + 8..at + 12].copy_from_slice(&self.total_params_slots.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.method_idx <= u8::MAX as u16 && self.frame_base <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct NewObjIntrinsic { pub method_idx: u16, pub frame_base: u16, pub total_params_slots: u32 }
impl NewObjIntrinsic {
	pub const WIDE_SIZE: usize = 12;
	pub const SHORT_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let method_idx = code[at + 1] as u16;
			let frame_base = code[at + 2] as u16;
			let total_params_slots = u32::from_le_bytes([code[at + 4], code[at + 5], code[at + 6], code[at + 7]]);
			return Self { method_idx, frame_base, total_params_slots };
		}
		let method_idx = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let frame_base = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let total_params_slots = u32::from_le_bytes([code[at + 8], code[at + 9], code[at + 10], code[at + 11]]);
		Self { method_idx, frame_base, total_params_slots }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.method_idx as u8;
			out[at + 2] = self.frame_base as u8;
			out[at + 4..at + 8].copy_from_slice(&self.total_params_slots.to_le_bytes());
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.method_idx.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.frame_base.to_le_bytes());
		out[at + 8..at + 12].copy_from_slice(&self.total_params_slots.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.method_idx <= u8::MAX as u16 && self.frame_base <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct Throw { pub ex: u16 }
impl Throw {
	pub const WIDE_SIZE: usize = 4;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let ex = code[at + 1] as u16;
			return Self { ex };
		}
		let ex = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		Self { ex }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.ex as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.ex.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.ex <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct Rethrow;
impl Rethrow {
	pub const WIDE_SIZE: usize = 4;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			return Self;
		}
		let _ = (code, at);
		Self
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			return;
		}
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		true
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LeaveTryWithFinally { pub first_finally_clause_index: u8, pub finally_clauses_count: u8, pub target: i32 }
impl LeaveTryWithFinally {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let first_finally_clause_index = code[at + 1];
			let finally_clauses_count = code[at + 2];
			let target = code[at + 3] as i8 as i32;
			return Self { first_finally_clause_index, finally_clauses_count, target };
		}
		let first_finally_clause_index = code[at + 2];
		let finally_clauses_count = code[at + 3];
		let target = i32::from_le_bytes([code[at + 4], code[at + 5], code[at + 6], code[at + 7]]);
		Self { first_finally_clause_index, finally_clauses_count, target }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.first_finally_clause_index;
			out[at + 2] = self.finally_clauses_count;
			out[at + 3] = (self.target as i8) as u8;
			return;
		}
		out[at + 2] = self.first_finally_clause_index;
		out[at + 3] = self.finally_clauses_count;
		out[at + 4..at + 8].copy_from_slice(&self.target.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		i8::try_from(self.target).is_ok()
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LeaveCatchWithFinally { pub first_finally_clause_index: u8, pub finally_clauses_count: u8, pub target: i32 }
impl LeaveCatchWithFinally {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let first_finally_clause_index = code[at + 1];
			let finally_clauses_count = code[at + 2];
			let target = code[at + 3] as i8 as i32;
			return Self { first_finally_clause_index, finally_clauses_count, target };
		}
		let first_finally_clause_index = code[at + 2];
		let finally_clauses_count = code[at + 3];
		let target = i32::from_le_bytes([code[at + 4], code[at + 5], code[at + 6], code[at + 7]]);
		Self { first_finally_clause_index, finally_clauses_count, target }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.first_finally_clause_index;
			out[at + 2] = self.finally_clauses_count;
			out[at + 3] = (self.target as i8) as u8;
			return;
		}
		out[at + 2] = self.first_finally_clause_index;
		out[at + 3] = self.finally_clauses_count;
		out[at + 4..at + 8].copy_from_slice(&self.target.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		i8::try_from(self.target).is_ok()
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct LeaveCatchWithoutFinally { pub target: i32 }
impl LeaveCatchWithoutFinally {
	pub const WIDE_SIZE: usize = 8;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let target = code[at + 1] as i8 as i32;
			return Self { target };
		}
		let target = i32::from_le_bytes([code[at + 4], code[at + 5], code[at + 6], code[at + 7]]);
		Self { target }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = (self.target as i8) as u8;
			return;
		}
		out[at + 4..at + 8].copy_from_slice(&self.target.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		i8::try_from(self.target).is_ok()
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct EndFilter { pub cond: u16 }
impl EndFilter {
	pub const WIDE_SIZE: usize = 4;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			let cond = code[at + 1] as u16;
			return Self { cond };
		}
		let cond = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		Self { cond }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			out[at + 1] = self.cond as u8;
			return;
		}
		out[at + 2..at + 4].copy_from_slice(&self.cond.to_le_bytes());
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		self.cond <= u8::MAX as u16
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct EndFinally;
impl EndFinally {
	pub const WIDE_SIZE: usize = 4;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			return Self;
		}
		let _ = (code, at);
		Self
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			return;
		}
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		true
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct EndFault;
impl EndFault {
	pub const WIDE_SIZE: usize = 4;
	pub const SHORT_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		if short {
			return Self;
		}
		let _ = (code, at);
		Self
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		if short {
			return;
		}
	}
	#[inline]
	pub fn fits_short(&self) -> bool {
		true
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct AddOvfI4 { pub lhs: u16, pub rhs: u16, pub dst: u16 }
impl AddOvfI4 {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { lhs, rhs, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct AddOvfI8 { pub lhs: u16, pub rhs: u16, pub dst: u16 }
impl AddOvfI8 {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { lhs, rhs, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct AddOvfUnI4 { pub lhs: u16, pub rhs: u16, pub dst: u16 }
impl AddOvfUnI4 {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { lhs, rhs, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct AddOvfUnI8 { pub lhs: u16, pub rhs: u16, pub dst: u16 }
impl AddOvfUnI8 {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { lhs, rhs, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct SubOvfI4 { pub lhs: u16, pub rhs: u16, pub dst: u16 }
impl SubOvfI4 {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { lhs, rhs, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct SubOvfI8 { pub lhs: u16, pub rhs: u16, pub dst: u16 }
impl SubOvfI8 {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { lhs, rhs, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct SubOvfUnI4 { pub lhs: u16, pub rhs: u16, pub dst: u16 }
impl SubOvfUnI4 {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { lhs, rhs, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct SubOvfUnI8 { pub lhs: u16, pub rhs: u16, pub dst: u16 }
impl SubOvfUnI8 {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { lhs, rhs, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct MulOvfI4 { pub lhs: u16, pub rhs: u16, pub dst: u16 }
impl MulOvfI4 {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { lhs, rhs, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct MulOvfI8 { pub lhs: u16, pub rhs: u16, pub dst: u16 }
impl MulOvfI8 {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { lhs, rhs, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct MulOvfUnI4 { pub lhs: u16, pub rhs: u16, pub dst: u16 }
impl MulOvfUnI4 {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { lhs, rhs, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct MulOvfUnI8 { pub lhs: u16, pub rhs: u16, pub dst: u16 }
impl MulOvfUnI8 {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let lhs = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let rhs = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		let dst = u16::from_le_bytes([code[at + 6], code[at + 7]]);
		Self { lhs, rhs, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.lhs.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.rhs.to_le_bytes());
		out[at + 6..at + 8].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvOvfI1I4 { pub src: u16, pub dst: u16 }
impl ConvOvfI1I4 {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvOvfI1I8 { pub src: u16, pub dst: u16 }
impl ConvOvfI1I8 {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvOvfI1R4 { pub src: u16, pub dst: u16 }
impl ConvOvfI1R4 {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvOvfI1R8 { pub src: u16, pub dst: u16 }
impl ConvOvfI1R8 {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvOvfU1I4 { pub src: u16, pub dst: u16 }
impl ConvOvfU1I4 {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvOvfU1I8 { pub src: u16, pub dst: u16 }
impl ConvOvfU1I8 {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvOvfU1R4 { pub src: u16, pub dst: u16 }
impl ConvOvfU1R4 {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvOvfU1R8 { pub src: u16, pub dst: u16 }
impl ConvOvfU1R8 {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvOvfI2I4 { pub src: u16, pub dst: u16 }
impl ConvOvfI2I4 {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvOvfI2I8 { pub src: u16, pub dst: u16 }
impl ConvOvfI2I8 {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvOvfI2R4 { pub src: u16, pub dst: u16 }
impl ConvOvfI2R4 {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvOvfI2R8 { pub src: u16, pub dst: u16 }
impl ConvOvfI2R8 {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvOvfU2I4 { pub src: u16, pub dst: u16 }
impl ConvOvfU2I4 {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvOvfU2I8 { pub src: u16, pub dst: u16 }
impl ConvOvfU2I8 {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvOvfU2R4 { pub src: u16, pub dst: u16 }
impl ConvOvfU2R4 {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvOvfU2R8 { pub src: u16, pub dst: u16 }
impl ConvOvfU2R8 {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvOvfI4I4 { pub src: u16, pub dst: u16 }
impl ConvOvfI4I4 {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvOvfI4I8 { pub src: u16, pub dst: u16 }
impl ConvOvfI4I8 {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvOvfI4R4 { pub src: u16, pub dst: u16 }
impl ConvOvfI4R4 {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvOvfI4R8 { pub src: u16, pub dst: u16 }
impl ConvOvfI4R8 {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvOvfU4I4 { pub src: u16, pub dst: u16 }
impl ConvOvfU4I4 {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvOvfU4I8 { pub src: u16, pub dst: u16 }
impl ConvOvfU4I8 {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvOvfU4R4 { pub src: u16, pub dst: u16 }
impl ConvOvfU4R4 {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvOvfU4R8 { pub src: u16, pub dst: u16 }
impl ConvOvfU4R8 {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvOvfI8I4 { pub src: u16, pub dst: u16 }
impl ConvOvfI8I4 {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvOvfI8I8 { pub src: u16, pub dst: u16 }
impl ConvOvfI8I8 {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvOvfI8R4 { pub src: u16, pub dst: u16 }
impl ConvOvfI8R4 {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvOvfI8R8 { pub src: u16, pub dst: u16 }
impl ConvOvfI8R8 {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvOvfU8I4 { pub src: u16, pub dst: u16 }
impl ConvOvfU8I4 {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvOvfU8I8 { pub src: u16, pub dst: u16 }
impl ConvOvfU8I8 {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvOvfU8R4 { pub src: u16, pub dst: u16 }
impl ConvOvfU8R4 {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvOvfU8R8 { pub src: u16, pub dst: u16 }
impl ConvOvfU8R8 {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvOvfI1U4Un { pub src: u16, pub dst: u16 }
impl ConvOvfI1U4Un {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvOvfI1U8Un { pub src: u16, pub dst: u16 }
impl ConvOvfI1U8Un {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvOvfU1U4Un { pub src: u16, pub dst: u16 }
impl ConvOvfU1U4Un {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvOvfU1U8Un { pub src: u16, pub dst: u16 }
impl ConvOvfU1U8Un {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvOvfI2U4Un { pub src: u16, pub dst: u16 }
impl ConvOvfI2U4Un {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvOvfI2U8Un { pub src: u16, pub dst: u16 }
impl ConvOvfI2U8Un {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvOvfU2U4Un { pub src: u16, pub dst: u16 }
impl ConvOvfU2U4Un {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvOvfU2U8Un { pub src: u16, pub dst: u16 }
impl ConvOvfU2U8Un {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvOvfI4U4Un { pub src: u16, pub dst: u16 }
impl ConvOvfI4U4Un {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvOvfI4U8Un { pub src: u16, pub dst: u16 }
impl ConvOvfI4U8Un {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvOvfU4U4Un { pub src: u16, pub dst: u16 }
impl ConvOvfU4U4Un {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvOvfU4U8Un { pub src: u16, pub dst: u16 }
impl ConvOvfU4U8Un {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvOvfI8U4Un { pub src: u16, pub dst: u16 }
impl ConvOvfI8U4Un {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvOvfI8U8Un { pub src: u16, pub dst: u16 }
impl ConvOvfI8U8Un {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvOvfU8U4Un { pub src: u16, pub dst: u16 }
impl ConvOvfU8U4Un {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ConvOvfU8U8Un { pub src: u16, pub dst: u16 }
impl ConvOvfU8U8Un {
	pub const WIDE_SIZE: usize = 8;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let src = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		let dst = u16::from_le_bytes([code[at + 4], code[at + 5]]);
		Self { src, dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.src.to_le_bytes());
		out[at + 4..at + 6].copy_from_slice(&self.dst.to_le_bytes());
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct Illegal;
impl Illegal {
	pub const WIDE_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let _ = (code, at);
		Self
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct Nop;
impl Nop {
	pub const WIDE_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let _ = (code, at);
		Self
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
	}
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct Arglist { pub dst: u16 }
impl Arglist {
	pub const WIDE_SIZE: usize = 4;
	#[inline]
	pub fn decode(code: &[u8], at: usize, short: bool) -> Self {
		debug_assert!(!short);
		let dst = u16::from_le_bytes([code[at + 2], code[at + 3]]);
		Self { dst }
	}
	#[inline]
	pub fn encode(&self, out: &mut Vec<u8>, op: OpCode) {
		let at = out.len();
		let (prefix, code, short) = op.encoding();
		out.resize(at + op.size(), 0);
		match prefix {
			None => out[at] = code,
			Some(prefix) => {
				out[at] = prefix;
				out[at + 1] = code;
			},
		}
		let _ = short;
		out[at + 2..at + 4].copy_from_slice(&self.dst.to_le_bytes());
	}
}

impl OpCode {
	/// `(prefix byte, code byte, is short variant)`.
	pub fn encoding(self) -> (Option<u8>, u8, bool) {
		match self {
			OpCode::InitLocals1Short => (None, 0x00, true),
			OpCode::InitLocals2Short => (None, 0x01, true),
			OpCode::InitLocals3Short => (None, 0x02, true),
			OpCode::InitLocals4Short => (None, 0x03, true),
			OpCode::InitLocals => (Some(0xfb), 0x00, false),
			OpCode::InitLocalsShort => (None, 0x04, true),
			OpCode::LdLocI1 => (Some(0xfb), 0x01, false),
			OpCode::LdLocI1Short => (None, 0x05, true),
			OpCode::LdLocU1 => (Some(0xfb), 0x02, false),
			OpCode::LdLocU1Short => (None, 0x06, true),
			OpCode::LdLocI2 => (Some(0xfb), 0x03, false),
			OpCode::LdLocI2Short => (None, 0x07, true),
			OpCode::LdLocU2 => (Some(0xfb), 0x04, false),
			OpCode::LdLocU2Short => (None, 0x08, true),
			OpCode::LdLocI4 => (Some(0xfb), 0x05, false),
			OpCode::LdLocI4Short => (None, 0x09, true),
			OpCode::LdLocI8 => (Some(0xfb), 0x06, false),
			OpCode::LdLocI8Short => (None, 0x0a, true),
			OpCode::LdLocAny => (Some(0xfb), 0x07, false),
			OpCode::LdLocAnyShort => (None, 0x0b, true),
			OpCode::LdLoca => (Some(0xfb), 0x08, false),
			OpCode::LdLocaShort => (None, 0x0c, true),
			OpCode::StLocI1 => (Some(0xfb), 0x09, false),
			OpCode::StLocI1Short => (None, 0x0d, true),
			OpCode::StLocI2 => (Some(0xfb), 0x0a, false),
			OpCode::StLocI2Short => (None, 0x0e, true),
			OpCode::StLocI4 => (Some(0xfb), 0x0b, false),
			OpCode::StLocI4Short => (None, 0x0f, true),
			OpCode::StLocI8 => (Some(0xfb), 0x0c, false),
			OpCode::StLocI8Short => (None, 0x10, true),
			OpCode::StLocAny => (Some(0xfb), 0x0d, false),
			OpCode::StLocAnyShort => (None, 0x11, true),
			OpCode::LdNull => (Some(0xfb), 0x0e, false),
			OpCode::LdNullShort => (None, 0x12, true),
			OpCode::LdcI4I2 => (Some(0xfb), 0x0f, false),
			OpCode::LdcI4I2Short => (None, 0x13, true),
			OpCode::LdcI4I4 => (Some(0xfb), 0x10, false),
			OpCode::LdcI4I4Short => (None, 0x14, true),
			OpCode::LdcI8I2 => (Some(0xfb), 0x11, false),
			OpCode::LdcI8I2Short => (None, 0x15, true),
			OpCode::LdcI8I4 => (Some(0xfb), 0x12, false),
			OpCode::LdcI8I4Short => (None, 0x16, true),
			OpCode::LdcI8I8 => (Some(0xfb), 0x13, false),
			OpCode::LdcI8I8Short => (None, 0x17, true),
			OpCode::LdStr => (Some(0xfb), 0x14, false),
			OpCode::LdStrShort => (None, 0x18, true),
			OpCode::LdToken => (Some(0xfb), 0x15, false),
			OpCode::LdTokenShort => (None, 0x19, true),
			OpCode::Br => (Some(0xfb), 0x16, false),
			OpCode::BrShort => (None, 0x1a, true),
			OpCode::BrTrueI4 => (Some(0xfb), 0x17, false),
			OpCode::BrTrueI4Short => (None, 0x1b, true),
			OpCode::BrFalseI4 => (Some(0xfb), 0x18, false),
			OpCode::BrFalseI4Short => (None, 0x1c, true),
			OpCode::BrTrueI8 => (Some(0xfb), 0x19, false),
			OpCode::BrTrueI8Short => (None, 0x1d, true),
			OpCode::BrFalseI8 => (Some(0xfb), 0x1a, false),
			OpCode::BrFalseI8Short => (None, 0x1e, true),
			OpCode::BeqI4 => (Some(0xfb), 0x1b, false),
			OpCode::BeqI4Short => (None, 0x1f, true),
			OpCode::BeqI8 => (Some(0xfb), 0x1c, false),
			OpCode::BeqI8Short => (None, 0x20, true),
			OpCode::BeqR4 => (Some(0xfb), 0x1d, false),
			OpCode::BeqR8 => (Some(0xfb), 0x1e, false),
			OpCode::BgeI4 => (Some(0xfb), 0x1f, false),
			OpCode::BgeI4Short => (None, 0x21, true),
			OpCode::BgeI8 => (Some(0xfb), 0x20, false),
			OpCode::BgeI8Short => (None, 0x22, true),
			OpCode::BgeR4 => (Some(0xfb), 0x21, false),
			OpCode::BgeR8 => (Some(0xfb), 0x22, false),
			OpCode::BgtI4 => (Some(0xfb), 0x23, false),
			OpCode::BgtI4Short => (None, 0x23, true),
			OpCode::BgtI8 => (Some(0xfb), 0x24, false),
			OpCode::BgtI8Short => (None, 0x24, true),
			OpCode::BgtR4 => (Some(0xfb), 0x25, false),
			OpCode::BgtR8 => (Some(0xfb), 0x26, false),
			OpCode::BleI4 => (Some(0xfb), 0x27, false),
			OpCode::BleI4Short => (None, 0x25, true),
			OpCode::BleI8 => (Some(0xfb), 0x28, false),
			OpCode::BleI8Short => (None, 0x26, true),
			OpCode::BleR4 => (Some(0xfb), 0x29, false),
			OpCode::BleR8 => (Some(0xfb), 0x2a, false),
			OpCode::BltI4 => (Some(0xfb), 0x2b, false),
			OpCode::BltI4Short => (None, 0x27, true),
			OpCode::BltI8 => (Some(0xfb), 0x2c, false),
			OpCode::BltI8Short => (None, 0x28, true),
			OpCode::BltR4 => (Some(0xfb), 0x2d, false),
			OpCode::BltR8 => (Some(0xfb), 0x2e, false),
			OpCode::BneUnI4 => (Some(0xfb), 0x2f, false),
			OpCode::BneUnI4Short => (None, 0x29, true),
			OpCode::BneUnI8 => (Some(0xfb), 0x30, false),
			OpCode::BneUnI8Short => (None, 0x2a, true),
			OpCode::BneUnR4 => (Some(0xfb), 0x31, false),
			OpCode::BneUnR8 => (Some(0xfb), 0x32, false),
			OpCode::BgeUnI4 => (Some(0xfb), 0x33, false),
			OpCode::BgeUnI4Short => (None, 0x2b, true),
			OpCode::BgeUnI8 => (Some(0xfb), 0x34, false),
			OpCode::BgeUnI8Short => (None, 0x2c, true),
			OpCode::BgeUnR4 => (Some(0xfb), 0x35, false),
			OpCode::BgeUnR8 => (Some(0xfb), 0x36, false),
			OpCode::BgtUnI4 => (Some(0xfb), 0x37, false),
			OpCode::BgtUnI4Short => (None, 0x2d, true),
			OpCode::BgtUnI8 => (Some(0xfb), 0x38, false),
			OpCode::BgtUnI8Short => (None, 0x2e, true),
			OpCode::BgtUnR4 => (Some(0xfb), 0x39, false),
			OpCode::BgtUnR8 => (Some(0xfb), 0x3a, false),
			OpCode::BleUnI4 => (Some(0xfb), 0x3b, false),
			OpCode::BleUnI4Short => (None, 0x2f, true),
			OpCode::BleUnI8 => (Some(0xfb), 0x3c, false),
			OpCode::BleUnI8Short => (None, 0x30, true),
			OpCode::BleUnR4 => (Some(0xfb), 0x3d, false),
			OpCode::BleUnR8 => (Some(0xfb), 0x3e, false),
			OpCode::BltUnI4 => (Some(0xfb), 0x3f, false),
			OpCode::BltUnI4Short => (None, 0x31, true),
			OpCode::BltUnI8 => (Some(0xfb), 0x40, false),
			OpCode::BltUnI8Short => (None, 0x32, true),
			OpCode::BltUnR4 => (Some(0xfb), 0x41, false),
			OpCode::BltUnR8 => (Some(0xfb), 0x42, false),
			OpCode::Switch => (Some(0xfb), 0x43, false),
			OpCode::AddI4 => (Some(0xfb), 0x44, false),
			OpCode::AddI4Short => (None, 0x33, true),
			OpCode::AddI8 => (Some(0xfb), 0x45, false),
			OpCode::AddI8Short => (None, 0x34, true),
			OpCode::AddR4 => (Some(0xfb), 0x46, false),
			OpCode::AddR4Short => (None, 0x35, true),
			OpCode::AddR8 => (Some(0xfb), 0x47, false),
			OpCode::AddR8Short => (None, 0x36, true),
			OpCode::SubI4 => (Some(0xfb), 0x48, false),
			OpCode::SubI4Short => (None, 0x37, true),
			OpCode::SubI8 => (Some(0xfb), 0x49, false),
			OpCode::SubI8Short => (None, 0x38, true),
			OpCode::SubR4 => (Some(0xfb), 0x4a, false),
			OpCode::SubR4Short => (None, 0x39, true),
			OpCode::SubR8 => (Some(0xfb), 0x4b, false),
			OpCode::SubR8Short => (None, 0x3a, true),
			OpCode::MulI4 => (Some(0xfb), 0x4c, false),
			OpCode::MulI4Short => (None, 0x3b, true),
			OpCode::MulI8 => (Some(0xfb), 0x4d, false),
			OpCode::MulI8Short => (None, 0x3c, true),
			OpCode::MulR4 => (Some(0xfb), 0x4e, false),
			OpCode::MulR4Short => (None, 0x3d, true),
			OpCode::MulR8 => (Some(0xfb), 0x4f, false),
			OpCode::MulR8Short => (None, 0x3e, true),
			OpCode::DivI4 => (Some(0xfb), 0x50, false),
			OpCode::DivI4Short => (None, 0x3f, true),
			OpCode::DivI8 => (Some(0xfb), 0x51, false),
			OpCode::DivI8Short => (None, 0x40, true),
			OpCode::DivR4 => (Some(0xfb), 0x52, false),
			OpCode::DivR4Short => (None, 0x41, true),
			OpCode::DivR8 => (Some(0xfb), 0x53, false),
			OpCode::DivR8Short => (None, 0x42, true),
			OpCode::RemI4 => (Some(0xfb), 0x54, false),
			OpCode::RemI4Short => (None, 0x43, true),
			OpCode::RemI8 => (Some(0xfb), 0x55, false),
			OpCode::RemI8Short => (None, 0x44, true),
			OpCode::RemR4 => (Some(0xfb), 0x56, false),
			OpCode::RemR4Short => (None, 0x45, true),
			OpCode::RemR8 => (Some(0xfb), 0x57, false),
			OpCode::RemR8Short => (None, 0x46, true),
			OpCode::DivUnI4 => (Some(0xfb), 0x58, false),
			OpCode::DivUnI4Short => (None, 0x47, true),
			OpCode::DivUnI8 => (Some(0xfb), 0x59, false),
			OpCode::DivUnI8Short => (None, 0x48, true),
			OpCode::RemUnI4 => (Some(0xfb), 0x5a, false),
			OpCode::RemUnI4Short => (None, 0x49, true),
			OpCode::RemUnI8 => (Some(0xfb), 0x5b, false),
			OpCode::RemUnI8Short => (None, 0x4a, true),
			OpCode::AndI4 => (Some(0xfb), 0x5c, false),
			OpCode::AndI4Short => (None, 0x4b, true),
			OpCode::AndI8 => (Some(0xfb), 0x5d, false),
			OpCode::AndI8Short => (None, 0x4c, true),
			OpCode::OrI4 => (Some(0xfb), 0x5e, false),
			OpCode::OrI4Short => (None, 0x4d, true),
			OpCode::OrI8 => (Some(0xfb), 0x5f, false),
			OpCode::OrI8Short => (None, 0x4e, true),
			OpCode::XorI4 => (Some(0xfb), 0x60, false),
			OpCode::XorI4Short => (None, 0x4f, true),
			OpCode::XorI8 => (Some(0xfb), 0x61, false),
			OpCode::XorI8Short => (None, 0x50, true),
			OpCode::ShlI4 => (Some(0xfb), 0x62, false),
			OpCode::ShlI4Short => (None, 0x51, true),
			OpCode::ShlI8 => (Some(0xfb), 0x63, false),
			OpCode::ShrI4 => (Some(0xfb), 0x64, false),
			OpCode::ShrI4Short => (None, 0x52, true),
			OpCode::ShrI8 => (Some(0xfb), 0x65, false),
			OpCode::ShrUnI4 => (Some(0xfb), 0x66, false),
			OpCode::ShrUnI4Short => (None, 0x53, true),
			OpCode::ShrUnI8 => (Some(0xfb), 0x67, false),
			OpCode::NegI4 => (Some(0xfb), 0x68, false),
			OpCode::NegI4Short => (None, 0x54, true),
			OpCode::NegI8 => (Some(0xfb), 0x69, false),
			OpCode::NegI8Short => (None, 0x55, true),
			OpCode::NegR4 => (Some(0xfb), 0x6a, false),
			OpCode::NegR4Short => (None, 0x56, true),
			OpCode::NegR8 => (Some(0xfb), 0x6b, false),
			OpCode::NegR8Short => (None, 0x57, true),
			OpCode::NotI4 => (Some(0xfb), 0x6c, false),
			OpCode::NotI4Short => (None, 0x58, true),
			OpCode::NotI8 => (Some(0xfb), 0x6d, false),
			OpCode::NotI8Short => (None, 0x59, true),
			OpCode::ConvI1I4 => (Some(0xfc), 0x00, false),
			OpCode::ConvI1I4Short => (None, 0x5a, true),
			OpCode::ConvI1I8 => (Some(0xfc), 0x01, false),
			OpCode::ConvI1I8Short => (None, 0x5b, true),
			OpCode::ConvI1R4 => (Some(0xfc), 0x02, false),
			OpCode::ConvI1R4Short => (None, 0x5c, true),
			OpCode::ConvI1R8 => (Some(0xfc), 0x03, false),
			OpCode::ConvI1R8Short => (None, 0x5d, true),
			OpCode::ConvU1I4 => (Some(0xfc), 0x04, false),
			OpCode::ConvU1I4Short => (None, 0x5e, true),
			OpCode::ConvU1I8 => (Some(0xfc), 0x05, false),
			OpCode::ConvU1I8Short => (None, 0x5f, true),
			OpCode::ConvU1R4 => (Some(0xfc), 0x06, false),
			OpCode::ConvU1R4Short => (None, 0x60, true),
			OpCode::ConvU1R8 => (Some(0xfc), 0x07, false),
			OpCode::ConvU1R8Short => (None, 0x61, true),
			OpCode::ConvI2I4 => (Some(0xfc), 0x08, false),
			OpCode::ConvI2I4Short => (None, 0x62, true),
			OpCode::ConvI2I8 => (Some(0xfc), 0x09, false),
			OpCode::ConvI2I8Short => (None, 0x63, true),
			OpCode::ConvI2R4 => (Some(0xfc), 0x0a, false),
			OpCode::ConvI2R4Short => (None, 0x64, true),
			OpCode::ConvI2R8 => (Some(0xfc), 0x0b, false),
			OpCode::ConvI2R8Short => (None, 0x65, true),
			OpCode::ConvU2I4 => (Some(0xfc), 0x0c, false),
			OpCode::ConvU2I4Short => (None, 0x66, true),
			OpCode::ConvU2I8 => (Some(0xfc), 0x0d, false),
			OpCode::ConvU2I8Short => (None, 0x67, true),
			OpCode::ConvU2R4 => (Some(0xfc), 0x0e, false),
			OpCode::ConvU2R4Short => (None, 0x68, true),
			OpCode::ConvU2R8 => (Some(0xfc), 0x0f, false),
			OpCode::ConvU2R8Short => (None, 0x69, true),
			OpCode::ConvI4I8 => (Some(0xfc), 0x10, false),
			OpCode::ConvI4I8Short => (None, 0x6a, true),
			OpCode::ConvI4R4 => (Some(0xfc), 0x11, false),
			OpCode::ConvI4R4Short => (None, 0x6b, true),
			OpCode::ConvI4R8 => (Some(0xfc), 0x12, false),
			OpCode::ConvI4R8Short => (None, 0x6c, true),
			OpCode::ConvU4I8 => (Some(0xfc), 0x13, false),
			OpCode::ConvU4I8Short => (None, 0x6d, true),
			OpCode::ConvU4R4 => (Some(0xfc), 0x14, false),
			OpCode::ConvU4R4Short => (None, 0x6e, true),
			OpCode::ConvU4R8 => (Some(0xfc), 0x15, false),
			OpCode::ConvU4R8Short => (None, 0x6f, true),
			OpCode::ConvI8I4 => (Some(0xfc), 0x16, false),
			OpCode::ConvI8I4Short => (None, 0x70, true),
			OpCode::ConvI8U4 => (Some(0xfc), 0x17, false),
			OpCode::ConvI8U4Short => (None, 0x71, true),
			OpCode::ConvI8R4 => (Some(0xfc), 0x18, false),
			OpCode::ConvI8R4Short => (None, 0x72, true),
			OpCode::ConvI8R8 => (Some(0xfc), 0x19, false),
			OpCode::ConvI8R8Short => (None, 0x73, true),
			OpCode::ConvU8I4 => (Some(0xfc), 0x1a, false),
			OpCode::ConvU8I4Short => (None, 0x74, true),
			OpCode::ConvU8U4 => (Some(0xfc), 0x1b, false),
			OpCode::ConvU8U4Short => (None, 0x75, true),
			OpCode::ConvU8R4 => (Some(0xfc), 0x1c, false),
			OpCode::ConvU8R4Short => (None, 0x76, true),
			OpCode::ConvU8R8 => (Some(0xfc), 0x1d, false),
			OpCode::ConvU8R8Short => (None, 0x77, true),
			OpCode::ConvR4I4 => (Some(0xfc), 0x1e, false),
			OpCode::ConvR4I4Short => (None, 0x78, true),
			OpCode::ConvR4I8 => (Some(0xfc), 0x1f, false),
			OpCode::ConvR4I8Short => (None, 0x79, true),
			OpCode::ConvR4R8 => (Some(0xfc), 0x20, false),
			OpCode::ConvR4R8Short => (None, 0x7a, true),
			OpCode::ConvR4U4 => (Some(0xfc), 0x21, false),
			OpCode::ConvR4U4Short => (None, 0x7b, true),
			OpCode::ConvR4U8 => (Some(0xfc), 0x22, false),
			OpCode::ConvR4U8Short => (None, 0x7c, true),
			OpCode::ConvR8I4 => (Some(0xfc), 0x23, false),
			OpCode::ConvR8I4Short => (None, 0x7d, true),
			OpCode::ConvR8I8 => (Some(0xfc), 0x24, false),
			OpCode::ConvR8I8Short => (None, 0x7e, true),
			OpCode::ConvR8R4 => (Some(0xfc), 0x25, false),
			OpCode::ConvR8R4Short => (None, 0x7f, true),
			OpCode::ConvR8U4 => (Some(0xfc), 0x26, false),
			OpCode::ConvR8U4Short => (None, 0x80, true),
			OpCode::ConvR8U8 => (Some(0xfc), 0x27, false),
			OpCode::ConvR8U8Short => (None, 0x81, true),
			OpCode::CkFiniteR4 => (Some(0xfc), 0x28, false),
			OpCode::CkFiniteR8 => (Some(0xfc), 0x29, false),
			OpCode::CeqI4 => (Some(0xfb), 0x6e, false),
			OpCode::CeqI4Short => (None, 0x82, true),
			OpCode::CeqI8 => (Some(0xfb), 0x6f, false),
			OpCode::CeqI8Short => (None, 0x83, true),
			OpCode::CeqR4 => (Some(0xfb), 0x70, false),
			OpCode::CeqR4Short => (None, 0x84, true),
			OpCode::CeqR8 => (Some(0xfb), 0x71, false),
			OpCode::CeqR8Short => (None, 0x85, true),
			OpCode::CgtI4 => (Some(0xfb), 0x72, false),
			OpCode::CgtI4Short => (None, 0x86, true),
			OpCode::CgtI8 => (Some(0xfb), 0x73, false),
			OpCode::CgtI8Short => (None, 0x87, true),
			OpCode::CgtR4 => (Some(0xfb), 0x74, false),
			OpCode::CgtR8 => (Some(0xfb), 0x75, false),
			OpCode::CgtUnI4 => (Some(0xfb), 0x76, false),
			OpCode::CgtUnI4Short => (None, 0x88, true),
			OpCode::CgtUnI8 => (Some(0xfb), 0x77, false),
			OpCode::CgtUnI8Short => (None, 0x89, true),
			OpCode::CgtUnR4 => (Some(0xfb), 0x78, false),
			OpCode::CgtUnR8 => (Some(0xfb), 0x79, false),
			OpCode::CltI4 => (Some(0xfb), 0x7a, false),
			OpCode::CltI4Short => (None, 0x8a, true),
			OpCode::CltI8 => (Some(0xfb), 0x7b, false),
			OpCode::CltI8Short => (None, 0x8b, true),
			OpCode::CltR4 => (Some(0xfb), 0x7c, false),
			OpCode::CltR8 => (Some(0xfb), 0x7d, false),
			OpCode::CltUnI4 => (Some(0xfb), 0x7e, false),
			OpCode::CltUnI4Short => (None, 0x8c, true),
			OpCode::CltUnI8 => (Some(0xfb), 0x7f, false),
			OpCode::CltUnI8Short => (None, 0x8d, true),
			OpCode::CltUnR4 => (Some(0xfb), 0x80, false),
			OpCode::CltUnR8 => (Some(0xfb), 0x81, false),
			OpCode::LdIndI1 => (Some(0xfc), 0x2a, false),
			OpCode::LdIndI1Short => (Some(0xfc), 0x2b, true),
			OpCode::LdIndU1 => (Some(0xfc), 0x2c, false),
			OpCode::LdIndU1Short => (Some(0xfc), 0x2d, true),
			OpCode::LdIndI2 => (Some(0xfc), 0x2e, false),
			OpCode::LdIndI2Short => (Some(0xfc), 0x2f, true),
			OpCode::LdIndU2 => (Some(0xfc), 0x30, false),
			OpCode::LdIndU2Short => (Some(0xfc), 0x31, true),
			OpCode::LdIndI4 => (Some(0xfc), 0x32, false),
			OpCode::LdIndI4Short => (Some(0xfc), 0x33, true),
			OpCode::LdIndI8 => (Some(0xfc), 0x34, false),
			OpCode::LdIndI8Short => (Some(0xfc), 0x35, true),
			OpCode::LdIndRef => (Some(0xfc), 0x36, false),
			OpCode::LdIndRefShort => (Some(0xfc), 0x37, true),
			OpCode::StIndI1 => (Some(0xfc), 0x38, false),
			OpCode::StIndI1Short => (Some(0xfc), 0x39, true),
			OpCode::StIndI2 => (Some(0xfc), 0x3a, false),
			OpCode::StIndI2Short => (Some(0xfc), 0x3b, true),
			OpCode::StIndI4 => (Some(0xfc), 0x3c, false),
			OpCode::StIndI4Short => (Some(0xfc), 0x3d, true),
			OpCode::StIndI8 => (Some(0xfc), 0x3e, false),
			OpCode::StIndI8Short => (Some(0xfc), 0x3f, true),
			OpCode::StIndRef => (Some(0xfc), 0x40, false),
			OpCode::StIndRefShort => (Some(0xfc), 0x41, true),
			OpCode::LocAlloc => (Some(0xfc), 0x42, false),
			OpCode::InitBlk => (Some(0xfc), 0x43, false),
			OpCode::CpBlk => (Some(0xfc), 0x44, false),
			OpCode::GetEnumLongHashCode => (Some(0xfc), 0x45, false),
			OpCode::InitObjI1 => (Some(0xfb), 0x82, false),
			OpCode::InitObjI1Short => (None, 0x8e, true),
			OpCode::InitObjI2 => (Some(0xfb), 0x83, false),
			OpCode::InitObjI2Short => (None, 0x8f, true),
			OpCode::InitObjI4 => (Some(0xfb), 0x84, false),
			OpCode::InitObjI4Short => (None, 0x90, true),
			OpCode::InitObjI8 => (Some(0xfb), 0x85, false),
			OpCode::InitObjI8Short => (None, 0x91, true),
			OpCode::InitObjAny => (Some(0xfb), 0x86, false),
			OpCode::InitObjAnyShort => (None, 0x92, true),
			OpCode::CpObjI1 => (Some(0xfb), 0x87, false),
			OpCode::CpObjI1Short => (None, 0x93, true),
			OpCode::CpObjI2 => (Some(0xfb), 0x88, false),
			OpCode::CpObjI2Short => (None, 0x94, true),
			OpCode::CpObjI4 => (Some(0xfb), 0x89, false),
			OpCode::CpObjI4Short => (None, 0x95, true),
			OpCode::CpObjI8 => (Some(0xfb), 0x8a, false),
			OpCode::CpObjI8Short => (None, 0x96, true),
			OpCode::CpObjAny => (Some(0xfb), 0x8b, false),
			OpCode::CpObjAnyShort => (None, 0x97, true),
			OpCode::LdObjAny => (Some(0xfb), 0x8c, false),
			OpCode::LdObjAnyShort => (None, 0x98, true),
			OpCode::StObjAny => (Some(0xfb), 0x8d, false),
			OpCode::StObjAnyShort => (None, 0x99, true),
			OpCode::CastClass => (Some(0xfb), 0x8e, false),
			OpCode::CastClassShort => (None, 0x9a, true),
			OpCode::IsInst => (Some(0xfb), 0x8f, false),
			OpCode::IsInstShort => (None, 0x9b, true),
			OpCode::Box => (Some(0xfb), 0x90, false),
			OpCode::BoxShort => (None, 0x9c, true),
			OpCode::Unbox => (Some(0xfb), 0x91, false),
			OpCode::UnboxShort => (None, 0x9d, true),
			OpCode::UnboxAny => (Some(0xfb), 0x92, false),
			OpCode::UnboxAnyShort => (None, 0x9e, true),
			OpCode::NewArr => (Some(0xfb), 0x93, false),
			OpCode::NewArrShort => (None, 0x9f, true),
			OpCode::LdLen => (Some(0xfb), 0x94, false),
			OpCode::LdLenShort => (None, 0xa0, true),
			OpCode::Ldelema => (Some(0xfb), 0x95, false),
			OpCode::LdelemaShort => (None, 0xa1, true),
			OpCode::LdelemaReadOnly => (Some(0xfc), 0x46, false),
			OpCode::LdelemI1 => (Some(0xfb), 0x96, false),
			OpCode::LdelemI1Short => (None, 0xa2, true),
			OpCode::LdelemU1 => (Some(0xfb), 0x97, false),
			OpCode::LdelemU1Short => (None, 0xa3, true),
			OpCode::LdelemI2 => (Some(0xfb), 0x98, false),
			OpCode::LdelemI2Short => (None, 0xa4, true),
			OpCode::LdelemU2 => (Some(0xfb), 0x99, false),
			OpCode::LdelemU2Short => (None, 0xa5, true),
			OpCode::LdelemI4 => (Some(0xfb), 0x9a, false),
			OpCode::LdelemI4Short => (None, 0xa6, true),
			OpCode::LdelemI8 => (Some(0xfb), 0x9b, false),
			OpCode::LdelemI8Short => (None, 0xa7, true),
			OpCode::LdelemRef => (Some(0xfb), 0x9c, false),
			OpCode::LdelemRefShort => (None, 0xa8, true),
			OpCode::LdelemAny => (Some(0xfb), 0x9d, false),
			OpCode::LdelemAnyShort => (None, 0xa9, true),
			OpCode::StelemI1 => (Some(0xfb), 0x9e, false),
			OpCode::StelemI1Short => (None, 0xaa, true),
			OpCode::StelemI2 => (Some(0xfb), 0x9f, false),
			OpCode::StelemI2Short => (None, 0xab, true),
			OpCode::StelemI4 => (Some(0xfb), 0xa0, false),
			OpCode::StelemI4Short => (None, 0xac, true),
			OpCode::StelemI8 => (Some(0xfb), 0xa1, false),
			OpCode::StelemI8Short => (None, 0xad, true),
			OpCode::StelemRef => (Some(0xfb), 0xa2, false),
			OpCode::StelemRefShort => (None, 0xae, true),
			OpCode::StelemAny => (Some(0xfb), 0xa3, false),
			OpCode::StelemAnyShort => (None, 0xaf, true),
			OpCode::Ldftn => (Some(0xfb), 0xa4, false),
			OpCode::LdftnShort => (None, 0xb0, true),
			OpCode::Ldvirtftn => (Some(0xfb), 0xa5, false),
			OpCode::LdvirtftnShort => (None, 0xb1, true),
			OpCode::LdfldI1 => (Some(0xfb), 0xa6, false),
			OpCode::LdfldI1Short => (None, 0xb2, true),
			OpCode::LdfldU1 => (Some(0xfb), 0xa7, false),
			OpCode::LdfldU1Short => (None, 0xb3, true),
			OpCode::LdfldI2 => (Some(0xfb), 0xa8, false),
			OpCode::LdfldI2Short => (None, 0xb4, true),
			OpCode::LdfldU2 => (Some(0xfb), 0xa9, false),
			OpCode::LdfldU2Short => (None, 0xb5, true),
			OpCode::LdfldI4 => (Some(0xfb), 0xaa, false),
			OpCode::LdfldI4Short => (None, 0xb6, true),
			OpCode::LdfldI8 => (Some(0xfb), 0xab, false),
			OpCode::LdfldI8Short => (None, 0xb7, true),
			OpCode::LdfldAny => (Some(0xfb), 0xac, false),
			OpCode::LdfldAnyShort => (None, 0xb8, true),
			OpCode::LdvfldI1 => (Some(0xfb), 0xad, false),
			OpCode::LdvfldI1Short => (None, 0xb9, true),
			OpCode::LdvfldU1 => (Some(0xfb), 0xae, false),
			OpCode::LdvfldU1Short => (None, 0xba, true),
			OpCode::LdvfldI2 => (Some(0xfb), 0xaf, false),
			OpCode::LdvfldI2Short => (None, 0xbb, true),
			OpCode::LdvfldU2 => (Some(0xfb), 0xb0, false),
			OpCode::LdvfldU2Short => (None, 0xbc, true),
			OpCode::LdvfldI4 => (Some(0xfb), 0xb1, false),
			OpCode::LdvfldI4Short => (None, 0xbd, true),
			OpCode::LdvfldI8 => (Some(0xfb), 0xb2, false),
			OpCode::LdvfldI8Short => (None, 0xbe, true),
			OpCode::LdvfldAny => (Some(0xfb), 0xb3, false),
			OpCode::LdvfldAnyShort => (None, 0xbf, true),
			OpCode::Ldflda => (Some(0xfb), 0xb4, false),
			OpCode::LdfldaShort => (None, 0xc0, true),
			OpCode::StfldI1 => (Some(0xfb), 0xb5, false),
			OpCode::StfldI1Short => (None, 0xc1, true),
			OpCode::StfldI2 => (Some(0xfb), 0xb6, false),
			OpCode::StfldI2Short => (None, 0xc2, true),
			OpCode::StfldI4 => (Some(0xfb), 0xb7, false),
			OpCode::StfldI4Short => (None, 0xc3, true),
			OpCode::StfldI8 => (Some(0xfb), 0xb8, false),
			OpCode::StfldI8Short => (None, 0xc4, true),
			OpCode::StfldAny => (Some(0xfb), 0xb9, false),
			OpCode::StfldAnyShort => (None, 0xc5, true),
			OpCode::LdfldI1Large => (Some(0xfd), 0x00, false),
			OpCode::LdfldU1Large => (Some(0xfd), 0x01, false),
			OpCode::LdfldI2Large => (Some(0xfd), 0x02, false),
			OpCode::LdfldU2Large => (Some(0xfd), 0x03, false),
			OpCode::LdfldI4Large => (Some(0xfd), 0x04, false),
			OpCode::LdfldI8Large => (Some(0xfd), 0x05, false),
			OpCode::LdfldAnyLarge => (Some(0xfd), 0x06, false),
			OpCode::LdfldaLarge => (Some(0xfd), 0x07, false),
			OpCode::StfldI1Large => (Some(0xfd), 0x08, false),
			OpCode::StfldI2Large => (Some(0xfd), 0x09, false),
			OpCode::StfldI4Large => (Some(0xfd), 0x0a, false),
			OpCode::StfldI8Large => (Some(0xfd), 0x0b, false),
			OpCode::StfldAnyLarge => (Some(0xfd), 0x0c, false),
			OpCode::LdfldI2Unaligned => (Some(0xfd), 0x0d, false),
			OpCode::LdfldU2Unaligned => (Some(0xfd), 0x0e, false),
			OpCode::LdfldI4Unaligned => (Some(0xfd), 0x0f, false),
			OpCode::LdfldI8Unaligned => (Some(0xfd), 0x10, false),
			OpCode::StfldI2Unaligned => (Some(0xfd), 0x11, false),
			OpCode::StfldI4Unaligned => (Some(0xfd), 0x12, false),
			OpCode::StfldI8Unaligned => (Some(0xfd), 0x13, false),
			OpCode::LdIndI2Unaligned => (Some(0xfd), 0x14, false),
			OpCode::LdIndU2Unaligned => (Some(0xfd), 0x15, false),
			OpCode::LdIndI4Unaligned => (Some(0xfd), 0x16, false),
			OpCode::LdIndI8Unaligned => (Some(0xfd), 0x17, false),
			OpCode::StIndI2Unaligned => (Some(0xfd), 0x18, false),
			OpCode::StIndI4Unaligned => (Some(0xfd), 0x19, false),
			OpCode::StIndI8Unaligned => (Some(0xfd), 0x1a, false),
			OpCode::LdsfldI1 => (Some(0xfb), 0xba, false),
			OpCode::LdsfldI1Short => (None, 0xc6, true),
			OpCode::LdsfldU1 => (Some(0xfb), 0xbb, false),
			OpCode::LdsfldU1Short => (None, 0xc7, true),
			OpCode::LdsfldI2 => (Some(0xfb), 0xbc, false),
			OpCode::LdsfldI2Short => (None, 0xc8, true),
			OpCode::LdsfldU2 => (Some(0xfb), 0xbd, false),
			OpCode::LdsfldU2Short => (None, 0xc9, true),
			OpCode::LdsfldI4 => (Some(0xfb), 0xbe, false),
			OpCode::LdsfldI4Short => (None, 0xca, true),
			OpCode::LdsfldI8 => (Some(0xfb), 0xbf, false),
			OpCode::LdsfldI8Short => (None, 0xcb, true),
			OpCode::LdsfldAny => (Some(0xfb), 0xc0, false),
			OpCode::LdsfldAnyShort => (None, 0xcc, true),
			OpCode::Ldsflda => (Some(0xfb), 0xc1, false),
			OpCode::LdsfldaShort => (None, 0xcd, true),
			OpCode::LdsfldRvaData => (Some(0xfb), 0xc2, false),
			OpCode::LdsfldRvaDataShort => (None, 0xce, true),
			OpCode::StsfldI1 => (Some(0xfb), 0xc3, false),
			OpCode::StsfldI1Short => (None, 0xcf, true),
			OpCode::StsfldI2 => (Some(0xfb), 0xc4, false),
			OpCode::StsfldI2Short => (None, 0xd0, true),
			OpCode::StsfldI4 => (Some(0xfb), 0xc5, false),
			OpCode::StsfldI4Short => (None, 0xd1, true),
			OpCode::StsfldI8 => (Some(0xfb), 0xc6, false),
			OpCode::StsfldI8Short => (None, 0xd2, true),
			OpCode::StsfldAny => (Some(0xfb), 0xc7, false),
			OpCode::StsfldAnyShort => (None, 0xd3, true),
			OpCode::RetVoid => (Some(0xfb), 0xc8, false),
			OpCode::RetVoidShort => (None, 0xd4, true),
			OpCode::RetI4 => (Some(0xfb), 0xc9, false),
			OpCode::RetI4Short => (None, 0xd5, true),
			OpCode::RetI8 => (Some(0xfb), 0xca, false),
			OpCode::RetI8Short => (None, 0xd6, true),
			OpCode::RetAny => (Some(0xfb), 0xcb, false),
			OpCode::RetAnyShort => (None, 0xd7, true),
			OpCode::CallInterp => (Some(0xfb), 0xcc, false),
			OpCode::CallInterpShort => (None, 0xd8, true),
			OpCode::CallVirtInterp => (Some(0xfb), 0xcd, false),
			OpCode::CallVirtInterpShort => (None, 0xd9, true),
			OpCode::CallInternalCall => (Some(0xfb), 0xce, false),
			OpCode::CallInternalCallShort => (None, 0xda, true),
			OpCode::CallIntrinsic => (Some(0xfb), 0xcf, false),
			OpCode::CallIntrinsicShort => (None, 0xdb, true),
			OpCode::CallPInvoke => (Some(0xfb), 0xd0, false),
			OpCode::CallPInvokeShort => (None, 0xdc, true),
			OpCode::CallRuntimeImplemented => (Some(0xfb), 0xd1, false),
			OpCode::CallRuntimeImplementedShort => (None, 0xdd, true),
			OpCode::CalliInterp => (Some(0xfb), 0xd2, false),
			OpCode::CalliInterpShort => (None, 0xde, true),
			OpCode::NewObjInterp => (Some(0xfb), 0xd3, false),
			OpCode::NewObjInterpShort => (None, 0xdf, true),
			OpCode::NewValueTypeInterp => (Some(0xfb), 0xd4, false),
			OpCode::NewValueTypeInterpShort => (None, 0xe0, true),
			OpCode::NewObjInternalCall => (Some(0xfb), 0xd5, false),
			OpCode::NewObjInternalCallShort => (None, 0xe1, true),
			OpCode::NewObjIntrinsic => (Some(0xfb), 0xd6, false),
			OpCode::NewObjIntrinsicShort => (None, 0xe2, true),
			OpCode::Throw => (Some(0xfb), 0xd7, false),
			OpCode::ThrowShort => (None, 0xe3, true),
			OpCode::Rethrow => (Some(0xfb), 0xd8, false),
			OpCode::RethrowShort => (None, 0xe4, true),
			OpCode::LeaveTryWithFinally => (Some(0xfb), 0xd9, false),
			OpCode::LeaveTryWithFinallyShort => (None, 0xe5, true),
			OpCode::LeaveCatchWithFinally => (Some(0xfb), 0xda, false),
			OpCode::LeaveCatchWithFinallyShort => (None, 0xe6, true),
			OpCode::LeaveCatchWithoutFinally => (Some(0xfb), 0xdb, false),
			OpCode::LeaveCatchWithoutFinallyShort => (None, 0xe7, true),
			OpCode::EndFilter => (Some(0xfb), 0xdc, false),
			OpCode::EndFilterShort => (None, 0xe8, true),
			OpCode::EndFinally => (Some(0xfb), 0xdd, false),
			OpCode::EndFinallyShort => (None, 0xe9, true),
			OpCode::EndFault => (Some(0xfb), 0xde, false),
			OpCode::EndFaultShort => (None, 0xea, true),
			OpCode::AddOvfI4 => (Some(0xfd), 0x1b, false),
			OpCode::AddOvfI8 => (Some(0xfd), 0x1c, false),
			OpCode::AddOvfUnI4 => (Some(0xfd), 0x1d, false),
			OpCode::AddOvfUnI8 => (Some(0xfd), 0x1e, false),
			OpCode::SubOvfI4 => (Some(0xfd), 0x1f, false),
			OpCode::SubOvfI8 => (Some(0xfd), 0x20, false),
			OpCode::SubOvfUnI4 => (Some(0xfd), 0x21, false),
			OpCode::SubOvfUnI8 => (Some(0xfd), 0x22, false),
			OpCode::MulOvfI4 => (Some(0xfd), 0x23, false),
			OpCode::MulOvfI8 => (Some(0xfd), 0x24, false),
			OpCode::MulOvfUnI4 => (Some(0xfd), 0x25, false),
			OpCode::MulOvfUnI8 => (Some(0xfd), 0x26, false),
			OpCode::ConvOvfI1I4 => (Some(0xfd), 0x27, false),
			OpCode::ConvOvfI1I8 => (Some(0xfd), 0x28, false),
			OpCode::ConvOvfI1R4 => (Some(0xfd), 0x29, false),
			OpCode::ConvOvfI1R8 => (Some(0xfd), 0x2a, false),
			OpCode::ConvOvfU1I4 => (Some(0xfd), 0x2b, false),
			OpCode::ConvOvfU1I8 => (Some(0xfd), 0x2c, false),
			OpCode::ConvOvfU1R4 => (Some(0xfd), 0x2d, false),
			OpCode::ConvOvfU1R8 => (Some(0xfd), 0x2e, false),
			OpCode::ConvOvfI2I4 => (Some(0xfd), 0x2f, false),
			OpCode::ConvOvfI2I8 => (Some(0xfd), 0x30, false),
			OpCode::ConvOvfI2R4 => (Some(0xfd), 0x31, false),
			OpCode::ConvOvfI2R8 => (Some(0xfd), 0x32, false),
			OpCode::ConvOvfU2I4 => (Some(0xfd), 0x33, false),
			OpCode::ConvOvfU2I8 => (Some(0xfd), 0x34, false),
			OpCode::ConvOvfU2R4 => (Some(0xfd), 0x35, false),
			OpCode::ConvOvfU2R8 => (Some(0xfd), 0x36, false),
			OpCode::ConvOvfI4I4 => (Some(0xfd), 0x37, false),
			OpCode::ConvOvfI4I8 => (Some(0xfd), 0x38, false),
			OpCode::ConvOvfI4R4 => (Some(0xfd), 0x39, false),
			OpCode::ConvOvfI4R8 => (Some(0xfd), 0x3a, false),
			OpCode::ConvOvfU4I4 => (Some(0xfd), 0x3b, false),
			OpCode::ConvOvfU4I8 => (Some(0xfd), 0x3c, false),
			OpCode::ConvOvfU4R4 => (Some(0xfd), 0x3d, false),
			OpCode::ConvOvfU4R8 => (Some(0xfd), 0x3e, false),
			OpCode::ConvOvfI8I4 => (Some(0xfd), 0x3f, false),
			OpCode::ConvOvfI8I8 => (Some(0xfd), 0x40, false),
			OpCode::ConvOvfI8R4 => (Some(0xfd), 0x41, false),
			OpCode::ConvOvfI8R8 => (Some(0xfd), 0x42, false),
			OpCode::ConvOvfU8I4 => (Some(0xfd), 0x43, false),
			OpCode::ConvOvfU8I8 => (Some(0xfd), 0x44, false),
			OpCode::ConvOvfU8R4 => (Some(0xfd), 0x45, false),
			OpCode::ConvOvfU8R8 => (Some(0xfd), 0x46, false),
			OpCode::ConvOvfI1U4Un => (Some(0xfd), 0x47, false),
			OpCode::ConvOvfI1U8Un => (Some(0xfd), 0x48, false),
			OpCode::ConvOvfU1U4Un => (Some(0xfd), 0x49, false),
			OpCode::ConvOvfU1U8Un => (Some(0xfd), 0x4a, false),
			OpCode::ConvOvfI2U4Un => (Some(0xfd), 0x4b, false),
			OpCode::ConvOvfI2U8Un => (Some(0xfd), 0x4c, false),
			OpCode::ConvOvfU2U4Un => (Some(0xfd), 0x4d, false),
			OpCode::ConvOvfU2U8Un => (Some(0xfd), 0x4e, false),
			OpCode::ConvOvfI4U4Un => (Some(0xfd), 0x4f, false),
			OpCode::ConvOvfI4U8Un => (Some(0xfd), 0x50, false),
			OpCode::ConvOvfU4U4Un => (Some(0xfd), 0x51, false),
			OpCode::ConvOvfU4U8Un => (Some(0xfd), 0x52, false),
			OpCode::ConvOvfI8U4Un => (Some(0xfd), 0x53, false),
			OpCode::ConvOvfI8U8Un => (Some(0xfd), 0x54, false),
			OpCode::ConvOvfU8U4Un => (Some(0xfd), 0x55, false),
			OpCode::ConvOvfU8U8Un => (Some(0xfd), 0x56, false),
			OpCode::Illegal => (Some(0xfe), 0x00, false),
			OpCode::Nop => (Some(0xfe), 0x01, false),
			OpCode::Arglist => (Some(0xfe), 0x02, false),
		}
	}

	/// Encoded size in bytes; `Switch` reports its fixed header only.
	pub fn size(self) -> usize {
		match self {
			OpCode::InitLocals1Short => InitLocals1::SHORT_SIZE,
			OpCode::InitLocals2Short => InitLocals2::SHORT_SIZE,
			OpCode::InitLocals3Short => InitLocals3::SHORT_SIZE,
			OpCode::InitLocals4Short => InitLocals4::SHORT_SIZE,
			OpCode::InitLocals => InitLocals::WIDE_SIZE,
			OpCode::InitLocalsShort => InitLocals::SHORT_SIZE,
			OpCode::LdLocI1 => LdLocI1::WIDE_SIZE,
			OpCode::LdLocI1Short => LdLocI1::SHORT_SIZE,
			OpCode::LdLocU1 => LdLocU1::WIDE_SIZE,
			OpCode::LdLocU1Short => LdLocU1::SHORT_SIZE,
			OpCode::LdLocI2 => LdLocI2::WIDE_SIZE,
			OpCode::LdLocI2Short => LdLocI2::SHORT_SIZE,
			OpCode::LdLocU2 => LdLocU2::WIDE_SIZE,
			OpCode::LdLocU2Short => LdLocU2::SHORT_SIZE,
			OpCode::LdLocI4 => LdLocI4::WIDE_SIZE,
			OpCode::LdLocI4Short => LdLocI4::SHORT_SIZE,
			OpCode::LdLocI8 => LdLocI8::WIDE_SIZE,
			OpCode::LdLocI8Short => LdLocI8::SHORT_SIZE,
			OpCode::LdLocAny => LdLocAny::WIDE_SIZE,
			OpCode::LdLocAnyShort => LdLocAny::SHORT_SIZE,
			OpCode::LdLoca => LdLoca::WIDE_SIZE,
			OpCode::LdLocaShort => LdLoca::SHORT_SIZE,
			OpCode::StLocI1 => StLocI1::WIDE_SIZE,
			OpCode::StLocI1Short => StLocI1::SHORT_SIZE,
			OpCode::StLocI2 => StLocI2::WIDE_SIZE,
			OpCode::StLocI2Short => StLocI2::SHORT_SIZE,
			OpCode::StLocI4 => StLocI4::WIDE_SIZE,
			OpCode::StLocI4Short => StLocI4::SHORT_SIZE,
			OpCode::StLocI8 => StLocI8::WIDE_SIZE,
			OpCode::StLocI8Short => StLocI8::SHORT_SIZE,
			OpCode::StLocAny => StLocAny::WIDE_SIZE,
			OpCode::StLocAnyShort => StLocAny::SHORT_SIZE,
			OpCode::LdNull => LdNull::WIDE_SIZE,
			OpCode::LdNullShort => LdNull::SHORT_SIZE,
			OpCode::LdcI4I2 => LdcI4I2::WIDE_SIZE,
			OpCode::LdcI4I2Short => LdcI4I2::SHORT_SIZE,
			OpCode::LdcI4I4 => LdcI4I4::WIDE_SIZE,
			OpCode::LdcI4I4Short => LdcI4I4::SHORT_SIZE,
			OpCode::LdcI8I2 => LdcI8I2::WIDE_SIZE,
			OpCode::LdcI8I2Short => LdcI8I2::SHORT_SIZE,
			OpCode::LdcI8I4 => LdcI8I4::WIDE_SIZE,
			OpCode::LdcI8I4Short => LdcI8I4::SHORT_SIZE,
			OpCode::LdcI8I8 => LdcI8I8::WIDE_SIZE,
			OpCode::LdcI8I8Short => LdcI8I8::SHORT_SIZE,
			OpCode::LdStr => LdStr::WIDE_SIZE,
			OpCode::LdStrShort => LdStr::SHORT_SIZE,
			OpCode::LdToken => LdToken::WIDE_SIZE,
			OpCode::LdTokenShort => LdToken::SHORT_SIZE,
			OpCode::Br => Br::WIDE_SIZE,
			OpCode::BrShort => Br::SHORT_SIZE,
			OpCode::BrTrueI4 => BrTrueI4::WIDE_SIZE,
			OpCode::BrTrueI4Short => BrTrueI4::SHORT_SIZE,
			OpCode::BrFalseI4 => BrFalseI4::WIDE_SIZE,
			OpCode::BrFalseI4Short => BrFalseI4::SHORT_SIZE,
			OpCode::BrTrueI8 => BrTrueI8::WIDE_SIZE,
			OpCode::BrTrueI8Short => BrTrueI8::SHORT_SIZE,
			OpCode::BrFalseI8 => BrFalseI8::WIDE_SIZE,
			OpCode::BrFalseI8Short => BrFalseI8::SHORT_SIZE,
			OpCode::BeqI4 => BeqI4::WIDE_SIZE,
			OpCode::BeqI4Short => BeqI4::SHORT_SIZE,
			OpCode::BeqI8 => BeqI8::WIDE_SIZE,
			OpCode::BeqI8Short => BeqI8::SHORT_SIZE,
			OpCode::BeqR4 => BeqR4::WIDE_SIZE,
			OpCode::BeqR8 => BeqR8::WIDE_SIZE,
			OpCode::BgeI4 => BgeI4::WIDE_SIZE,
			OpCode::BgeI4Short => BgeI4::SHORT_SIZE,
			OpCode::BgeI8 => BgeI8::WIDE_SIZE,
			OpCode::BgeI8Short => BgeI8::SHORT_SIZE,
			OpCode::BgeR4 => BgeR4::WIDE_SIZE,
			OpCode::BgeR8 => BgeR8::WIDE_SIZE,
			OpCode::BgtI4 => BgtI4::WIDE_SIZE,
			OpCode::BgtI4Short => BgtI4::SHORT_SIZE,
			OpCode::BgtI8 => BgtI8::WIDE_SIZE,
			OpCode::BgtI8Short => BgtI8::SHORT_SIZE,
			OpCode::BgtR4 => BgtR4::WIDE_SIZE,
			OpCode::BgtR8 => BgtR8::WIDE_SIZE,
			OpCode::BleI4 => BleI4::WIDE_SIZE,
			OpCode::BleI4Short => BleI4::SHORT_SIZE,
			OpCode::BleI8 => BleI8::WIDE_SIZE,
			OpCode::BleI8Short => BleI8::SHORT_SIZE,
			OpCode::BleR4 => BleR4::WIDE_SIZE,
			OpCode::BleR8 => BleR8::WIDE_SIZE,
			OpCode::BltI4 => BltI4::WIDE_SIZE,
			OpCode::BltI4Short => BltI4::SHORT_SIZE,
			OpCode::BltI8 => BltI8::WIDE_SIZE,
			OpCode::BltI8Short => BltI8::SHORT_SIZE,
			OpCode::BltR4 => BltR4::WIDE_SIZE,
			OpCode::BltR8 => BltR8::WIDE_SIZE,
			OpCode::BneUnI4 => BneUnI4::WIDE_SIZE,
			OpCode::BneUnI4Short => BneUnI4::SHORT_SIZE,
			OpCode::BneUnI8 => BneUnI8::WIDE_SIZE,
			OpCode::BneUnI8Short => BneUnI8::SHORT_SIZE,
			OpCode::BneUnR4 => BneUnR4::WIDE_SIZE,
			OpCode::BneUnR8 => BneUnR8::WIDE_SIZE,
			OpCode::BgeUnI4 => BgeUnI4::WIDE_SIZE,
			OpCode::BgeUnI4Short => BgeUnI4::SHORT_SIZE,
			OpCode::BgeUnI8 => BgeUnI8::WIDE_SIZE,
			OpCode::BgeUnI8Short => BgeUnI8::SHORT_SIZE,
			OpCode::BgeUnR4 => BgeUnR4::WIDE_SIZE,
			OpCode::BgeUnR8 => BgeUnR8::WIDE_SIZE,
			OpCode::BgtUnI4 => BgtUnI4::WIDE_SIZE,
			OpCode::BgtUnI4Short => BgtUnI4::SHORT_SIZE,
			OpCode::BgtUnI8 => BgtUnI8::WIDE_SIZE,
			OpCode::BgtUnI8Short => BgtUnI8::SHORT_SIZE,
			OpCode::BgtUnR4 => BgtUnR4::WIDE_SIZE,
			OpCode::BgtUnR8 => BgtUnR8::WIDE_SIZE,
			OpCode::BleUnI4 => BleUnI4::WIDE_SIZE,
			OpCode::BleUnI4Short => BleUnI4::SHORT_SIZE,
			OpCode::BleUnI8 => BleUnI8::WIDE_SIZE,
			OpCode::BleUnI8Short => BleUnI8::SHORT_SIZE,
			OpCode::BleUnR4 => BleUnR4::WIDE_SIZE,
			OpCode::BleUnR8 => BleUnR8::WIDE_SIZE,
			OpCode::BltUnI4 => BltUnI4::WIDE_SIZE,
			OpCode::BltUnI4Short => BltUnI4::SHORT_SIZE,
			OpCode::BltUnI8 => BltUnI8::WIDE_SIZE,
			OpCode::BltUnI8Short => BltUnI8::SHORT_SIZE,
			OpCode::BltUnR4 => BltUnR4::WIDE_SIZE,
			OpCode::BltUnR8 => BltUnR8::WIDE_SIZE,
			OpCode::Switch => Switch::WIDE_SIZE,
			OpCode::AddI4 => AddI4::WIDE_SIZE,
			OpCode::AddI4Short => AddI4::SHORT_SIZE,
			OpCode::AddI8 => AddI8::WIDE_SIZE,
			OpCode::AddI8Short => AddI8::SHORT_SIZE,
			OpCode::AddR4 => AddR4::WIDE_SIZE,
			OpCode::AddR4Short => AddR4::SHORT_SIZE,
			OpCode::AddR8 => AddR8::WIDE_SIZE,
			OpCode::AddR8Short => AddR8::SHORT_SIZE,
			OpCode::SubI4 => SubI4::WIDE_SIZE,
			OpCode::SubI4Short => SubI4::SHORT_SIZE,
			OpCode::SubI8 => SubI8::WIDE_SIZE,
			OpCode::SubI8Short => SubI8::SHORT_SIZE,
			OpCode::SubR4 => SubR4::WIDE_SIZE,
			OpCode::SubR4Short => SubR4::SHORT_SIZE,
			OpCode::SubR8 => SubR8::WIDE_SIZE,
			OpCode::SubR8Short => SubR8::SHORT_SIZE,
			OpCode::MulI4 => MulI4::WIDE_SIZE,
			OpCode::MulI4Short => MulI4::SHORT_SIZE,
			OpCode::MulI8 => MulI8::WIDE_SIZE,
			OpCode::MulI8Short => MulI8::SHORT_SIZE,
			OpCode::MulR4 => MulR4::WIDE_SIZE,
			OpCode::MulR4Short => MulR4::SHORT_SIZE,
			OpCode::MulR8 => MulR8::WIDE_SIZE,
			OpCode::MulR8Short => MulR8::SHORT_SIZE,
			OpCode::DivI4 => DivI4::WIDE_SIZE,
			OpCode::DivI4Short => DivI4::SHORT_SIZE,
			OpCode::DivI8 => DivI8::WIDE_SIZE,
			OpCode::DivI8Short => DivI8::SHORT_SIZE,
			OpCode::DivR4 => DivR4::WIDE_SIZE,
			OpCode::DivR4Short => DivR4::SHORT_SIZE,
			OpCode::DivR8 => DivR8::WIDE_SIZE,
			OpCode::DivR8Short => DivR8::SHORT_SIZE,
			OpCode::RemI4 => RemI4::WIDE_SIZE,
			OpCode::RemI4Short => RemI4::SHORT_SIZE,
			OpCode::RemI8 => RemI8::WIDE_SIZE,
			OpCode::RemI8Short => RemI8::SHORT_SIZE,
			OpCode::RemR4 => RemR4::WIDE_SIZE,
			OpCode::RemR4Short => RemR4::SHORT_SIZE,
			OpCode::RemR8 => RemR8::WIDE_SIZE,
			OpCode::RemR8Short => RemR8::SHORT_SIZE,
			OpCode::DivUnI4 => DivUnI4::WIDE_SIZE,
			OpCode::DivUnI4Short => DivUnI4::SHORT_SIZE,
			OpCode::DivUnI8 => DivUnI8::WIDE_SIZE,
			OpCode::DivUnI8Short => DivUnI8::SHORT_SIZE,
			OpCode::RemUnI4 => RemUnI4::WIDE_SIZE,
			OpCode::RemUnI4Short => RemUnI4::SHORT_SIZE,
			OpCode::RemUnI8 => RemUnI8::WIDE_SIZE,
			OpCode::RemUnI8Short => RemUnI8::SHORT_SIZE,
			OpCode::AndI4 => AndI4::WIDE_SIZE,
			OpCode::AndI4Short => AndI4::SHORT_SIZE,
			OpCode::AndI8 => AndI8::WIDE_SIZE,
			OpCode::AndI8Short => AndI8::SHORT_SIZE,
			OpCode::OrI4 => OrI4::WIDE_SIZE,
			OpCode::OrI4Short => OrI4::SHORT_SIZE,
			OpCode::OrI8 => OrI8::WIDE_SIZE,
			OpCode::OrI8Short => OrI8::SHORT_SIZE,
			OpCode::XorI4 => XorI4::WIDE_SIZE,
			OpCode::XorI4Short => XorI4::SHORT_SIZE,
			OpCode::XorI8 => XorI8::WIDE_SIZE,
			OpCode::XorI8Short => XorI8::SHORT_SIZE,
			OpCode::ShlI4 => ShlI4::WIDE_SIZE,
			OpCode::ShlI4Short => ShlI4::SHORT_SIZE,
			OpCode::ShlI8 => ShlI8::WIDE_SIZE,
			OpCode::ShrI4 => ShrI4::WIDE_SIZE,
			OpCode::ShrI4Short => ShrI4::SHORT_SIZE,
			OpCode::ShrI8 => ShrI8::WIDE_SIZE,
			OpCode::ShrUnI4 => ShrUnI4::WIDE_SIZE,
			OpCode::ShrUnI4Short => ShrUnI4::SHORT_SIZE,
			OpCode::ShrUnI8 => ShrUnI8::WIDE_SIZE,
			OpCode::NegI4 => NegI4::WIDE_SIZE,
			OpCode::NegI4Short => NegI4::SHORT_SIZE,
			OpCode::NegI8 => NegI8::WIDE_SIZE,
			OpCode::NegI8Short => NegI8::SHORT_SIZE,
			OpCode::NegR4 => NegR4::WIDE_SIZE,
			OpCode::NegR4Short => NegR4::SHORT_SIZE,
			OpCode::NegR8 => NegR8::WIDE_SIZE,
			OpCode::NegR8Short => NegR8::SHORT_SIZE,
			OpCode::NotI4 => NotI4::WIDE_SIZE,
			OpCode::NotI4Short => NotI4::SHORT_SIZE,
			OpCode::NotI8 => NotI8::WIDE_SIZE,
			OpCode::NotI8Short => NotI8::SHORT_SIZE,
			OpCode::ConvI1I4 => ConvI1I4::WIDE_SIZE,
			OpCode::ConvI1I4Short => ConvI1I4::SHORT_SIZE,
			OpCode::ConvI1I8 => ConvI1I8::WIDE_SIZE,
			OpCode::ConvI1I8Short => ConvI1I8::SHORT_SIZE,
			OpCode::ConvI1R4 => ConvI1R4::WIDE_SIZE,
			OpCode::ConvI1R4Short => ConvI1R4::SHORT_SIZE,
			OpCode::ConvI1R8 => ConvI1R8::WIDE_SIZE,
			OpCode::ConvI1R8Short => ConvI1R8::SHORT_SIZE,
			OpCode::ConvU1I4 => ConvU1I4::WIDE_SIZE,
			OpCode::ConvU1I4Short => ConvU1I4::SHORT_SIZE,
			OpCode::ConvU1I8 => ConvU1I8::WIDE_SIZE,
			OpCode::ConvU1I8Short => ConvU1I8::SHORT_SIZE,
			OpCode::ConvU1R4 => ConvU1R4::WIDE_SIZE,
			OpCode::ConvU1R4Short => ConvU1R4::SHORT_SIZE,
			OpCode::ConvU1R8 => ConvU1R8::WIDE_SIZE,
			OpCode::ConvU1R8Short => ConvU1R8::SHORT_SIZE,
			OpCode::ConvI2I4 => ConvI2I4::WIDE_SIZE,
			OpCode::ConvI2I4Short => ConvI2I4::SHORT_SIZE,
			OpCode::ConvI2I8 => ConvI2I8::WIDE_SIZE,
			OpCode::ConvI2I8Short => ConvI2I8::SHORT_SIZE,
			OpCode::ConvI2R4 => ConvI2R4::WIDE_SIZE,
			OpCode::ConvI2R4Short => ConvI2R4::SHORT_SIZE,
			OpCode::ConvI2R8 => ConvI2R8::WIDE_SIZE,
			OpCode::ConvI2R8Short => ConvI2R8::SHORT_SIZE,
			OpCode::ConvU2I4 => ConvU2I4::WIDE_SIZE,
			OpCode::ConvU2I4Short => ConvU2I4::SHORT_SIZE,
			OpCode::ConvU2I8 => ConvU2I8::WIDE_SIZE,
			OpCode::ConvU2I8Short => ConvU2I8::SHORT_SIZE,
			OpCode::ConvU2R4 => ConvU2R4::WIDE_SIZE,
			OpCode::ConvU2R4Short => ConvU2R4::SHORT_SIZE,
			OpCode::ConvU2R8 => ConvU2R8::WIDE_SIZE,
			OpCode::ConvU2R8Short => ConvU2R8::SHORT_SIZE,
			OpCode::ConvI4I8 => ConvI4I8::WIDE_SIZE,
			OpCode::ConvI4I8Short => ConvI4I8::SHORT_SIZE,
			OpCode::ConvI4R4 => ConvI4R4::WIDE_SIZE,
			OpCode::ConvI4R4Short => ConvI4R4::SHORT_SIZE,
			OpCode::ConvI4R8 => ConvI4R8::WIDE_SIZE,
			OpCode::ConvI4R8Short => ConvI4R8::SHORT_SIZE,
			OpCode::ConvU4I8 => ConvU4I8::WIDE_SIZE,
			OpCode::ConvU4I8Short => ConvU4I8::SHORT_SIZE,
			OpCode::ConvU4R4 => ConvU4R4::WIDE_SIZE,
			OpCode::ConvU4R4Short => ConvU4R4::SHORT_SIZE,
			OpCode::ConvU4R8 => ConvU4R8::WIDE_SIZE,
			OpCode::ConvU4R8Short => ConvU4R8::SHORT_SIZE,
			OpCode::ConvI8I4 => ConvI8I4::WIDE_SIZE,
			OpCode::ConvI8I4Short => ConvI8I4::SHORT_SIZE,
			OpCode::ConvI8U4 => ConvI8U4::WIDE_SIZE,
			OpCode::ConvI8U4Short => ConvI8U4::SHORT_SIZE,
			OpCode::ConvI8R4 => ConvI8R4::WIDE_SIZE,
			OpCode::ConvI8R4Short => ConvI8R4::SHORT_SIZE,
			OpCode::ConvI8R8 => ConvI8R8::WIDE_SIZE,
			OpCode::ConvI8R8Short => ConvI8R8::SHORT_SIZE,
			OpCode::ConvU8I4 => ConvU8I4::WIDE_SIZE,
			OpCode::ConvU8I4Short => ConvU8I4::SHORT_SIZE,
			OpCode::ConvU8U4 => ConvU8U4::WIDE_SIZE,
			OpCode::ConvU8U4Short => ConvU8U4::SHORT_SIZE,
			OpCode::ConvU8R4 => ConvU8R4::WIDE_SIZE,
			OpCode::ConvU8R4Short => ConvU8R4::SHORT_SIZE,
			OpCode::ConvU8R8 => ConvU8R8::WIDE_SIZE,
			OpCode::ConvU8R8Short => ConvU8R8::SHORT_SIZE,
			OpCode::ConvR4I4 => ConvR4I4::WIDE_SIZE,
			OpCode::ConvR4I4Short => ConvR4I4::SHORT_SIZE,
			OpCode::ConvR4I8 => ConvR4I8::WIDE_SIZE,
			OpCode::ConvR4I8Short => ConvR4I8::SHORT_SIZE,
			OpCode::ConvR4R8 => ConvR4R8::WIDE_SIZE,
			OpCode::ConvR4R8Short => ConvR4R8::SHORT_SIZE,
			OpCode::ConvR4U4 => ConvR4U4::WIDE_SIZE,
			OpCode::ConvR4U4Short => ConvR4U4::SHORT_SIZE,
			OpCode::ConvR4U8 => ConvR4U8::WIDE_SIZE,
			OpCode::ConvR4U8Short => ConvR4U8::SHORT_SIZE,
			OpCode::ConvR8I4 => ConvR8I4::WIDE_SIZE,
			OpCode::ConvR8I4Short => ConvR8I4::SHORT_SIZE,
			OpCode::ConvR8I8 => ConvR8I8::WIDE_SIZE,
			OpCode::ConvR8I8Short => ConvR8I8::SHORT_SIZE,
			OpCode::ConvR8R4 => ConvR8R4::WIDE_SIZE,
			OpCode::ConvR8R4Short => ConvR8R4::SHORT_SIZE,
			OpCode::ConvR8U4 => ConvR8U4::WIDE_SIZE,
			OpCode::ConvR8U4Short => ConvR8U4::SHORT_SIZE,
			OpCode::ConvR8U8 => ConvR8U8::WIDE_SIZE,
			OpCode::ConvR8U8Short => ConvR8U8::SHORT_SIZE,
			OpCode::CkFiniteR4 => CkFiniteR4::WIDE_SIZE,
			OpCode::CkFiniteR8 => CkFiniteR8::WIDE_SIZE,
			OpCode::CeqI4 => CeqI4::WIDE_SIZE,
			OpCode::CeqI4Short => CeqI4::SHORT_SIZE,
			OpCode::CeqI8 => CeqI8::WIDE_SIZE,
			OpCode::CeqI8Short => CeqI8::SHORT_SIZE,
			OpCode::CeqR4 => CeqR4::WIDE_SIZE,
			OpCode::CeqR4Short => CeqR4::SHORT_SIZE,
			OpCode::CeqR8 => CeqR8::WIDE_SIZE,
			OpCode::CeqR8Short => CeqR8::SHORT_SIZE,
			OpCode::CgtI4 => CgtI4::WIDE_SIZE,
			OpCode::CgtI4Short => CgtI4::SHORT_SIZE,
			OpCode::CgtI8 => CgtI8::WIDE_SIZE,
			OpCode::CgtI8Short => CgtI8::SHORT_SIZE,
			OpCode::CgtR4 => CgtR4::WIDE_SIZE,
			OpCode::CgtR8 => CgtR8::WIDE_SIZE,
			OpCode::CgtUnI4 => CgtUnI4::WIDE_SIZE,
			OpCode::CgtUnI4Short => CgtUnI4::SHORT_SIZE,
			OpCode::CgtUnI8 => CgtUnI8::WIDE_SIZE,
			OpCode::CgtUnI8Short => CgtUnI8::SHORT_SIZE,
			OpCode::CgtUnR4 => CgtUnR4::WIDE_SIZE,
			OpCode::CgtUnR8 => CgtUnR8::WIDE_SIZE,
			OpCode::CltI4 => CltI4::WIDE_SIZE,
			OpCode::CltI4Short => CltI4::SHORT_SIZE,
			OpCode::CltI8 => CltI8::WIDE_SIZE,
			OpCode::CltI8Short => CltI8::SHORT_SIZE,
			OpCode::CltR4 => CltR4::WIDE_SIZE,
			OpCode::CltR8 => CltR8::WIDE_SIZE,
			OpCode::CltUnI4 => CltUnI4::WIDE_SIZE,
			OpCode::CltUnI4Short => CltUnI4::SHORT_SIZE,
			OpCode::CltUnI8 => CltUnI8::WIDE_SIZE,
			OpCode::CltUnI8Short => CltUnI8::SHORT_SIZE,
			OpCode::CltUnR4 => CltUnR4::WIDE_SIZE,
			OpCode::CltUnR8 => CltUnR8::WIDE_SIZE,
			OpCode::LdIndI1 => LdIndI1::WIDE_SIZE,
			OpCode::LdIndI1Short => LdIndI1::SHORT_SIZE,
			OpCode::LdIndU1 => LdIndU1::WIDE_SIZE,
			OpCode::LdIndU1Short => LdIndU1::SHORT_SIZE,
			OpCode::LdIndI2 => LdIndI2::WIDE_SIZE,
			OpCode::LdIndI2Short => LdIndI2::SHORT_SIZE,
			OpCode::LdIndU2 => LdIndU2::WIDE_SIZE,
			OpCode::LdIndU2Short => LdIndU2::SHORT_SIZE,
			OpCode::LdIndI4 => LdIndI4::WIDE_SIZE,
			OpCode::LdIndI4Short => LdIndI4::SHORT_SIZE,
			OpCode::LdIndI8 => LdIndI8::WIDE_SIZE,
			OpCode::LdIndI8Short => LdIndI8::SHORT_SIZE,
			OpCode::LdIndRef => LdIndRef::WIDE_SIZE,
			OpCode::LdIndRefShort => LdIndRef::SHORT_SIZE,
			OpCode::StIndI1 => StIndI1::WIDE_SIZE,
			OpCode::StIndI1Short => StIndI1::SHORT_SIZE,
			OpCode::StIndI2 => StIndI2::WIDE_SIZE,
			OpCode::StIndI2Short => StIndI2::SHORT_SIZE,
			OpCode::StIndI4 => StIndI4::WIDE_SIZE,
			OpCode::StIndI4Short => StIndI4::SHORT_SIZE,
			OpCode::StIndI8 => StIndI8::WIDE_SIZE,
			OpCode::StIndI8Short => StIndI8::SHORT_SIZE,
			OpCode::StIndRef => StIndRef::WIDE_SIZE,
			OpCode::StIndRefShort => StIndRef::SHORT_SIZE,
			OpCode::LocAlloc => LocAlloc::WIDE_SIZE,
			OpCode::InitBlk => InitBlk::WIDE_SIZE,
			OpCode::CpBlk => CpBlk::WIDE_SIZE,
			OpCode::GetEnumLongHashCode => GetEnumLongHashCode::WIDE_SIZE,
			OpCode::InitObjI1 => InitObjI1::WIDE_SIZE,
			OpCode::InitObjI1Short => InitObjI1::SHORT_SIZE,
			OpCode::InitObjI2 => InitObjI2::WIDE_SIZE,
			OpCode::InitObjI2Short => InitObjI2::SHORT_SIZE,
			OpCode::InitObjI4 => InitObjI4::WIDE_SIZE,
			OpCode::InitObjI4Short => InitObjI4::SHORT_SIZE,
			OpCode::InitObjI8 => InitObjI8::WIDE_SIZE,
			OpCode::InitObjI8Short => InitObjI8::SHORT_SIZE,
			OpCode::InitObjAny => InitObjAny::WIDE_SIZE,
			OpCode::InitObjAnyShort => InitObjAny::SHORT_SIZE,
			OpCode::CpObjI1 => CpObjI1::WIDE_SIZE,
			OpCode::CpObjI1Short => CpObjI1::SHORT_SIZE,
			OpCode::CpObjI2 => CpObjI2::WIDE_SIZE,
			OpCode::CpObjI2Short => CpObjI2::SHORT_SIZE,
			OpCode::CpObjI4 => CpObjI4::WIDE_SIZE,
			OpCode::CpObjI4Short => CpObjI4::SHORT_SIZE,
			OpCode::CpObjI8 => CpObjI8::WIDE_SIZE,
			OpCode::CpObjI8Short => CpObjI8::SHORT_SIZE,
			OpCode::CpObjAny => CpObjAny::WIDE_SIZE,
			OpCode::CpObjAnyShort => CpObjAny::SHORT_SIZE,
			OpCode::LdObjAny => LdObjAny::WIDE_SIZE,
			OpCode::LdObjAnyShort => LdObjAny::SHORT_SIZE,
			OpCode::StObjAny => StObjAny::WIDE_SIZE,
			OpCode::StObjAnyShort => StObjAny::SHORT_SIZE,
			OpCode::CastClass => CastClass::WIDE_SIZE,
			OpCode::CastClassShort => CastClass::SHORT_SIZE,
			OpCode::IsInst => IsInst::WIDE_SIZE,
			OpCode::IsInstShort => IsInst::SHORT_SIZE,
			OpCode::Box => Box::WIDE_SIZE,
			OpCode::BoxShort => Box::SHORT_SIZE,
			OpCode::Unbox => Unbox::WIDE_SIZE,
			OpCode::UnboxShort => Unbox::SHORT_SIZE,
			OpCode::UnboxAny => UnboxAny::WIDE_SIZE,
			OpCode::UnboxAnyShort => UnboxAny::SHORT_SIZE,
			OpCode::NewArr => NewArr::WIDE_SIZE,
			OpCode::NewArrShort => NewArr::SHORT_SIZE,
			OpCode::LdLen => LdLen::WIDE_SIZE,
			OpCode::LdLenShort => LdLen::SHORT_SIZE,
			OpCode::Ldelema => Ldelema::WIDE_SIZE,
			OpCode::LdelemaShort => Ldelema::SHORT_SIZE,
			OpCode::LdelemaReadOnly => LdelemaReadOnly::WIDE_SIZE,
			OpCode::LdelemI1 => LdelemI1::WIDE_SIZE,
			OpCode::LdelemI1Short => LdelemI1::SHORT_SIZE,
			OpCode::LdelemU1 => LdelemU1::WIDE_SIZE,
			OpCode::LdelemU1Short => LdelemU1::SHORT_SIZE,
			OpCode::LdelemI2 => LdelemI2::WIDE_SIZE,
			OpCode::LdelemI2Short => LdelemI2::SHORT_SIZE,
			OpCode::LdelemU2 => LdelemU2::WIDE_SIZE,
			OpCode::LdelemU2Short => LdelemU2::SHORT_SIZE,
			OpCode::LdelemI4 => LdelemI4::WIDE_SIZE,
			OpCode::LdelemI4Short => LdelemI4::SHORT_SIZE,
			OpCode::LdelemI8 => LdelemI8::WIDE_SIZE,
			OpCode::LdelemI8Short => LdelemI8::SHORT_SIZE,
			OpCode::LdelemRef => LdelemRef::WIDE_SIZE,
			OpCode::LdelemRefShort => LdelemRef::SHORT_SIZE,
			OpCode::LdelemAny => LdelemAny::WIDE_SIZE,
			OpCode::LdelemAnyShort => LdelemAny::SHORT_SIZE,
			OpCode::StelemI1 => StelemI1::WIDE_SIZE,
			OpCode::StelemI1Short => StelemI1::SHORT_SIZE,
			OpCode::StelemI2 => StelemI2::WIDE_SIZE,
			OpCode::StelemI2Short => StelemI2::SHORT_SIZE,
			OpCode::StelemI4 => StelemI4::WIDE_SIZE,
			OpCode::StelemI4Short => StelemI4::SHORT_SIZE,
			OpCode::StelemI8 => StelemI8::WIDE_SIZE,
			OpCode::StelemI8Short => StelemI8::SHORT_SIZE,
			OpCode::StelemRef => StelemRef::WIDE_SIZE,
			OpCode::StelemRefShort => StelemRef::SHORT_SIZE,
			OpCode::StelemAny => StelemAny::WIDE_SIZE,
			OpCode::StelemAnyShort => StelemAny::SHORT_SIZE,
			OpCode::Ldftn => Ldftn::WIDE_SIZE,
			OpCode::LdftnShort => Ldftn::SHORT_SIZE,
			OpCode::Ldvirtftn => Ldvirtftn::WIDE_SIZE,
			OpCode::LdvirtftnShort => Ldvirtftn::SHORT_SIZE,
			OpCode::LdfldI1 => LdfldI1::WIDE_SIZE,
			OpCode::LdfldI1Short => LdfldI1::SHORT_SIZE,
			OpCode::LdfldU1 => LdfldU1::WIDE_SIZE,
			OpCode::LdfldU1Short => LdfldU1::SHORT_SIZE,
			OpCode::LdfldI2 => LdfldI2::WIDE_SIZE,
			OpCode::LdfldI2Short => LdfldI2::SHORT_SIZE,
			OpCode::LdfldU2 => LdfldU2::WIDE_SIZE,
			OpCode::LdfldU2Short => LdfldU2::SHORT_SIZE,
			OpCode::LdfldI4 => LdfldI4::WIDE_SIZE,
			OpCode::LdfldI4Short => LdfldI4::SHORT_SIZE,
			OpCode::LdfldI8 => LdfldI8::WIDE_SIZE,
			OpCode::LdfldI8Short => LdfldI8::SHORT_SIZE,
			OpCode::LdfldAny => LdfldAny::WIDE_SIZE,
			OpCode::LdfldAnyShort => LdfldAny::SHORT_SIZE,
			OpCode::LdvfldI1 => LdvfldI1::WIDE_SIZE,
			OpCode::LdvfldI1Short => LdvfldI1::SHORT_SIZE,
			OpCode::LdvfldU1 => LdvfldU1::WIDE_SIZE,
			OpCode::LdvfldU1Short => LdvfldU1::SHORT_SIZE,
			OpCode::LdvfldI2 => LdvfldI2::WIDE_SIZE,
			OpCode::LdvfldI2Short => LdvfldI2::SHORT_SIZE,
			OpCode::LdvfldU2 => LdvfldU2::WIDE_SIZE,
			OpCode::LdvfldU2Short => LdvfldU2::SHORT_SIZE,
			OpCode::LdvfldI4 => LdvfldI4::WIDE_SIZE,
			OpCode::LdvfldI4Short => LdvfldI4::SHORT_SIZE,
			OpCode::LdvfldI8 => LdvfldI8::WIDE_SIZE,
			OpCode::LdvfldI8Short => LdvfldI8::SHORT_SIZE,
			OpCode::LdvfldAny => LdvfldAny::WIDE_SIZE,
			OpCode::LdvfldAnyShort => LdvfldAny::SHORT_SIZE,
			OpCode::Ldflda => Ldflda::WIDE_SIZE,
			OpCode::LdfldaShort => Ldflda::SHORT_SIZE,
			OpCode::StfldI1 => StfldI1::WIDE_SIZE,
			OpCode::StfldI1Short => StfldI1::SHORT_SIZE,
			OpCode::StfldI2 => StfldI2::WIDE_SIZE,
			OpCode::StfldI2Short => StfldI2::SHORT_SIZE,
			OpCode::StfldI4 => StfldI4::WIDE_SIZE,
			OpCode::StfldI4Short => StfldI4::SHORT_SIZE,
			OpCode::StfldI8 => StfldI8::WIDE_SIZE,
			OpCode::StfldI8Short => StfldI8::SHORT_SIZE,
			OpCode::StfldAny => StfldAny::WIDE_SIZE,
			OpCode::StfldAnyShort => StfldAny::SHORT_SIZE,
			OpCode::LdfldI1Large => LdfldI1Large::WIDE_SIZE,
			OpCode::LdfldU1Large => LdfldU1Large::WIDE_SIZE,
			OpCode::LdfldI2Large => LdfldI2Large::WIDE_SIZE,
			OpCode::LdfldU2Large => LdfldU2Large::WIDE_SIZE,
			OpCode::LdfldI4Large => LdfldI4Large::WIDE_SIZE,
			OpCode::LdfldI8Large => LdfldI8Large::WIDE_SIZE,
			OpCode::LdfldAnyLarge => LdfldAnyLarge::WIDE_SIZE,
			OpCode::LdfldaLarge => LdfldaLarge::WIDE_SIZE,
			OpCode::StfldI1Large => StfldI1Large::WIDE_SIZE,
			OpCode::StfldI2Large => StfldI2Large::WIDE_SIZE,
			OpCode::StfldI4Large => StfldI4Large::WIDE_SIZE,
			OpCode::StfldI8Large => StfldI8Large::WIDE_SIZE,
			OpCode::StfldAnyLarge => StfldAnyLarge::WIDE_SIZE,
			OpCode::LdfldI2Unaligned => LdfldI2Unaligned::WIDE_SIZE,
			OpCode::LdfldU2Unaligned => LdfldU2Unaligned::WIDE_SIZE,
			OpCode::LdfldI4Unaligned => LdfldI4Unaligned::WIDE_SIZE,
			OpCode::LdfldI8Unaligned => LdfldI8Unaligned::WIDE_SIZE,
			OpCode::StfldI2Unaligned => StfldI2Unaligned::WIDE_SIZE,
			OpCode::StfldI4Unaligned => StfldI4Unaligned::WIDE_SIZE,
			OpCode::StfldI8Unaligned => StfldI8Unaligned::WIDE_SIZE,
			OpCode::LdIndI2Unaligned => LdIndI2Unaligned::WIDE_SIZE,
			OpCode::LdIndU2Unaligned => LdIndU2Unaligned::WIDE_SIZE,
			OpCode::LdIndI4Unaligned => LdIndI4Unaligned::WIDE_SIZE,
			OpCode::LdIndI8Unaligned => LdIndI8Unaligned::WIDE_SIZE,
			OpCode::StIndI2Unaligned => StIndI2Unaligned::WIDE_SIZE,
			OpCode::StIndI4Unaligned => StIndI4Unaligned::WIDE_SIZE,
			OpCode::StIndI8Unaligned => StIndI8Unaligned::WIDE_SIZE,
			OpCode::LdsfldI1 => LdsfldI1::WIDE_SIZE,
			OpCode::LdsfldI1Short => LdsfldI1::SHORT_SIZE,
			OpCode::LdsfldU1 => LdsfldU1::WIDE_SIZE,
			OpCode::LdsfldU1Short => LdsfldU1::SHORT_SIZE,
			OpCode::LdsfldI2 => LdsfldI2::WIDE_SIZE,
			OpCode::LdsfldI2Short => LdsfldI2::SHORT_SIZE,
			OpCode::LdsfldU2 => LdsfldU2::WIDE_SIZE,
			OpCode::LdsfldU2Short => LdsfldU2::SHORT_SIZE,
			OpCode::LdsfldI4 => LdsfldI4::WIDE_SIZE,
			OpCode::LdsfldI4Short => LdsfldI4::SHORT_SIZE,
			OpCode::LdsfldI8 => LdsfldI8::WIDE_SIZE,
			OpCode::LdsfldI8Short => LdsfldI8::SHORT_SIZE,
			OpCode::LdsfldAny => LdsfldAny::WIDE_SIZE,
			OpCode::LdsfldAnyShort => LdsfldAny::SHORT_SIZE,
			OpCode::Ldsflda => Ldsflda::WIDE_SIZE,
			OpCode::LdsfldaShort => Ldsflda::SHORT_SIZE,
			OpCode::LdsfldRvaData => LdsfldRvaData::WIDE_SIZE,
			OpCode::LdsfldRvaDataShort => LdsfldRvaData::SHORT_SIZE,
			OpCode::StsfldI1 => StsfldI1::WIDE_SIZE,
			OpCode::StsfldI1Short => StsfldI1::SHORT_SIZE,
			OpCode::StsfldI2 => StsfldI2::WIDE_SIZE,
			OpCode::StsfldI2Short => StsfldI2::SHORT_SIZE,
			OpCode::StsfldI4 => StsfldI4::WIDE_SIZE,
			OpCode::StsfldI4Short => StsfldI4::SHORT_SIZE,
			OpCode::StsfldI8 => StsfldI8::WIDE_SIZE,
			OpCode::StsfldI8Short => StsfldI8::SHORT_SIZE,
			OpCode::StsfldAny => StsfldAny::WIDE_SIZE,
			OpCode::StsfldAnyShort => StsfldAny::SHORT_SIZE,
			OpCode::RetVoid => RetVoid::WIDE_SIZE,
			OpCode::RetVoidShort => RetVoid::SHORT_SIZE,
			OpCode::RetI4 => RetI4::WIDE_SIZE,
			OpCode::RetI4Short => RetI4::SHORT_SIZE,
			OpCode::RetI8 => RetI8::WIDE_SIZE,
			OpCode::RetI8Short => RetI8::SHORT_SIZE,
			OpCode::RetAny => RetAny::WIDE_SIZE,
			OpCode::RetAnyShort => RetAny::SHORT_SIZE,
			OpCode::CallInterp => CallInterp::WIDE_SIZE,
			OpCode::CallInterpShort => CallInterp::SHORT_SIZE,
			OpCode::CallVirtInterp => CallVirtInterp::WIDE_SIZE,
			OpCode::CallVirtInterpShort => CallVirtInterp::SHORT_SIZE,
			OpCode::CallInternalCall => CallInternalCall::WIDE_SIZE,
			OpCode::CallInternalCallShort => CallInternalCall::SHORT_SIZE,
			OpCode::CallIntrinsic => CallIntrinsic::WIDE_SIZE,
			OpCode::CallIntrinsicShort => CallIntrinsic::SHORT_SIZE,
			OpCode::CallPInvoke => CallPInvoke::WIDE_SIZE,
			OpCode::CallPInvokeShort => CallPInvoke::SHORT_SIZE,
			OpCode::CallRuntimeImplemented => CallRuntimeImplemented::WIDE_SIZE,
			OpCode::CallRuntimeImplementedShort => CallRuntimeImplemented::SHORT_SIZE,
			OpCode::CalliInterp => CalliInterp::WIDE_SIZE,
			OpCode::CalliInterpShort => CalliInterp::SHORT_SIZE,
			OpCode::NewObjInterp => NewObjInterp::WIDE_SIZE,
			OpCode::NewObjInterpShort => NewObjInterp::SHORT_SIZE,
			OpCode::NewValueTypeInterp => NewValueTypeInterp::WIDE_SIZE,
			OpCode::NewValueTypeInterpShort => NewValueTypeInterp::SHORT_SIZE,
			OpCode::NewObjInternalCall => NewObjInternalCall::WIDE_SIZE,
			OpCode::NewObjInternalCallShort => NewObjInternalCall::SHORT_SIZE,
			OpCode::NewObjIntrinsic => NewObjIntrinsic::WIDE_SIZE,
			OpCode::NewObjIntrinsicShort => NewObjIntrinsic::SHORT_SIZE,
			OpCode::Throw => Throw::WIDE_SIZE,
			OpCode::ThrowShort => Throw::SHORT_SIZE,
			OpCode::Rethrow => Rethrow::WIDE_SIZE,
			OpCode::RethrowShort => Rethrow::SHORT_SIZE,
			OpCode::LeaveTryWithFinally => LeaveTryWithFinally::WIDE_SIZE,
			OpCode::LeaveTryWithFinallyShort => LeaveTryWithFinally::SHORT_SIZE,
			OpCode::LeaveCatchWithFinally => LeaveCatchWithFinally::WIDE_SIZE,
			OpCode::LeaveCatchWithFinallyShort => LeaveCatchWithFinally::SHORT_SIZE,
			OpCode::LeaveCatchWithoutFinally => LeaveCatchWithoutFinally::WIDE_SIZE,
			OpCode::LeaveCatchWithoutFinallyShort => LeaveCatchWithoutFinally::SHORT_SIZE,
			OpCode::EndFilter => EndFilter::WIDE_SIZE,
			OpCode::EndFilterShort => EndFilter::SHORT_SIZE,
			OpCode::EndFinally => EndFinally::WIDE_SIZE,
			OpCode::EndFinallyShort => EndFinally::SHORT_SIZE,
			OpCode::EndFault => EndFault::WIDE_SIZE,
			OpCode::EndFaultShort => EndFault::SHORT_SIZE,
			OpCode::AddOvfI4 => AddOvfI4::WIDE_SIZE,
			OpCode::AddOvfI8 => AddOvfI8::WIDE_SIZE,
			OpCode::AddOvfUnI4 => AddOvfUnI4::WIDE_SIZE,
			OpCode::AddOvfUnI8 => AddOvfUnI8::WIDE_SIZE,
			OpCode::SubOvfI4 => SubOvfI4::WIDE_SIZE,
			OpCode::SubOvfI8 => SubOvfI8::WIDE_SIZE,
			OpCode::SubOvfUnI4 => SubOvfUnI4::WIDE_SIZE,
			OpCode::SubOvfUnI8 => SubOvfUnI8::WIDE_SIZE,
			OpCode::MulOvfI4 => MulOvfI4::WIDE_SIZE,
			OpCode::MulOvfI8 => MulOvfI8::WIDE_SIZE,
			OpCode::MulOvfUnI4 => MulOvfUnI4::WIDE_SIZE,
			OpCode::MulOvfUnI8 => MulOvfUnI8::WIDE_SIZE,
			OpCode::ConvOvfI1I4 => ConvOvfI1I4::WIDE_SIZE,
			OpCode::ConvOvfI1I8 => ConvOvfI1I8::WIDE_SIZE,
			OpCode::ConvOvfI1R4 => ConvOvfI1R4::WIDE_SIZE,
			OpCode::ConvOvfI1R8 => ConvOvfI1R8::WIDE_SIZE,
			OpCode::ConvOvfU1I4 => ConvOvfU1I4::WIDE_SIZE,
			OpCode::ConvOvfU1I8 => ConvOvfU1I8::WIDE_SIZE,
			OpCode::ConvOvfU1R4 => ConvOvfU1R4::WIDE_SIZE,
			OpCode::ConvOvfU1R8 => ConvOvfU1R8::WIDE_SIZE,
			OpCode::ConvOvfI2I4 => ConvOvfI2I4::WIDE_SIZE,
			OpCode::ConvOvfI2I8 => ConvOvfI2I8::WIDE_SIZE,
			OpCode::ConvOvfI2R4 => ConvOvfI2R4::WIDE_SIZE,
			OpCode::ConvOvfI2R8 => ConvOvfI2R8::WIDE_SIZE,
			OpCode::ConvOvfU2I4 => ConvOvfU2I4::WIDE_SIZE,
			OpCode::ConvOvfU2I8 => ConvOvfU2I8::WIDE_SIZE,
			OpCode::ConvOvfU2R4 => ConvOvfU2R4::WIDE_SIZE,
			OpCode::ConvOvfU2R8 => ConvOvfU2R8::WIDE_SIZE,
			OpCode::ConvOvfI4I4 => ConvOvfI4I4::WIDE_SIZE,
			OpCode::ConvOvfI4I8 => ConvOvfI4I8::WIDE_SIZE,
			OpCode::ConvOvfI4R4 => ConvOvfI4R4::WIDE_SIZE,
			OpCode::ConvOvfI4R8 => ConvOvfI4R8::WIDE_SIZE,
			OpCode::ConvOvfU4I4 => ConvOvfU4I4::WIDE_SIZE,
			OpCode::ConvOvfU4I8 => ConvOvfU4I8::WIDE_SIZE,
			OpCode::ConvOvfU4R4 => ConvOvfU4R4::WIDE_SIZE,
			OpCode::ConvOvfU4R8 => ConvOvfU4R8::WIDE_SIZE,
			OpCode::ConvOvfI8I4 => ConvOvfI8I4::WIDE_SIZE,
			OpCode::ConvOvfI8I8 => ConvOvfI8I8::WIDE_SIZE,
			OpCode::ConvOvfI8R4 => ConvOvfI8R4::WIDE_SIZE,
			OpCode::ConvOvfI8R8 => ConvOvfI8R8::WIDE_SIZE,
			OpCode::ConvOvfU8I4 => ConvOvfU8I4::WIDE_SIZE,
			OpCode::ConvOvfU8I8 => ConvOvfU8I8::WIDE_SIZE,
			OpCode::ConvOvfU8R4 => ConvOvfU8R4::WIDE_SIZE,
			OpCode::ConvOvfU8R8 => ConvOvfU8R8::WIDE_SIZE,
			OpCode::ConvOvfI1U4Un => ConvOvfI1U4Un::WIDE_SIZE,
			OpCode::ConvOvfI1U8Un => ConvOvfI1U8Un::WIDE_SIZE,
			OpCode::ConvOvfU1U4Un => ConvOvfU1U4Un::WIDE_SIZE,
			OpCode::ConvOvfU1U8Un => ConvOvfU1U8Un::WIDE_SIZE,
			OpCode::ConvOvfI2U4Un => ConvOvfI2U4Un::WIDE_SIZE,
			OpCode::ConvOvfI2U8Un => ConvOvfI2U8Un::WIDE_SIZE,
			OpCode::ConvOvfU2U4Un => ConvOvfU2U4Un::WIDE_SIZE,
			OpCode::ConvOvfU2U8Un => ConvOvfU2U8Un::WIDE_SIZE,
			OpCode::ConvOvfI4U4Un => ConvOvfI4U4Un::WIDE_SIZE,
			OpCode::ConvOvfI4U8Un => ConvOvfI4U8Un::WIDE_SIZE,
			OpCode::ConvOvfU4U4Un => ConvOvfU4U4Un::WIDE_SIZE,
			OpCode::ConvOvfU4U8Un => ConvOvfU4U8Un::WIDE_SIZE,
			OpCode::ConvOvfI8U4Un => ConvOvfI8U4Un::WIDE_SIZE,
			OpCode::ConvOvfI8U8Un => ConvOvfI8U8Un::WIDE_SIZE,
			OpCode::ConvOvfU8U4Un => ConvOvfU8U4Un::WIDE_SIZE,
			OpCode::ConvOvfU8U8Un => ConvOvfU8U8Un::WIDE_SIZE,
			OpCode::Illegal => Illegal::WIDE_SIZE,
			OpCode::Nop => Nop::WIDE_SIZE,
			OpCode::Arglist => Arglist::WIDE_SIZE,
		}
	}

	/// The short counterpart of a wide opcode, when one exists.
	pub fn short_variant(self) -> Option<OpCode> {
		match self {
			OpCode::InitLocals => Some(OpCode::InitLocalsShort),
			OpCode::LdLocI1 => Some(OpCode::LdLocI1Short),
			OpCode::LdLocU1 => Some(OpCode::LdLocU1Short),
			OpCode::LdLocI2 => Some(OpCode::LdLocI2Short),
			OpCode::LdLocU2 => Some(OpCode::LdLocU2Short),
			OpCode::LdLocI4 => Some(OpCode::LdLocI4Short),
			OpCode::LdLocI8 => Some(OpCode::LdLocI8Short),
			OpCode::LdLocAny => Some(OpCode::LdLocAnyShort),
			OpCode::LdLoca => Some(OpCode::LdLocaShort),
			OpCode::StLocI1 => Some(OpCode::StLocI1Short),
			OpCode::StLocI2 => Some(OpCode::StLocI2Short),
			OpCode::StLocI4 => Some(OpCode::StLocI4Short),
			OpCode::StLocI8 => Some(OpCode::StLocI8Short),
			OpCode::StLocAny => Some(OpCode::StLocAnyShort),
			OpCode::LdNull => Some(OpCode::LdNullShort),
			OpCode::LdcI4I2 => Some(OpCode::LdcI4I2Short),
			OpCode::LdcI4I4 => Some(OpCode::LdcI4I4Short),
			OpCode::LdcI8I2 => Some(OpCode::LdcI8I2Short),
			OpCode::LdcI8I4 => Some(OpCode::LdcI8I4Short),
			OpCode::LdcI8I8 => Some(OpCode::LdcI8I8Short),
			OpCode::LdStr => Some(OpCode::LdStrShort),
			OpCode::LdToken => Some(OpCode::LdTokenShort),
			OpCode::Br => Some(OpCode::BrShort),
			OpCode::BrTrueI4 => Some(OpCode::BrTrueI4Short),
			OpCode::BrFalseI4 => Some(OpCode::BrFalseI4Short),
			OpCode::BrTrueI8 => Some(OpCode::BrTrueI8Short),
			OpCode::BrFalseI8 => Some(OpCode::BrFalseI8Short),
			OpCode::BeqI4 => Some(OpCode::BeqI4Short),
			OpCode::BeqI8 => Some(OpCode::BeqI8Short),
			OpCode::BgeI4 => Some(OpCode::BgeI4Short),
			OpCode::BgeI8 => Some(OpCode::BgeI8Short),
			OpCode::BgtI4 => Some(OpCode::BgtI4Short),
			OpCode::BgtI8 => Some(OpCode::BgtI8Short),
			OpCode::BleI4 => Some(OpCode::BleI4Short),
			OpCode::BleI8 => Some(OpCode::BleI8Short),
			OpCode::BltI4 => Some(OpCode::BltI4Short),
			OpCode::BltI8 => Some(OpCode::BltI8Short),
			OpCode::BneUnI4 => Some(OpCode::BneUnI4Short),
			OpCode::BneUnI8 => Some(OpCode::BneUnI8Short),
			OpCode::BgeUnI4 => Some(OpCode::BgeUnI4Short),
			OpCode::BgeUnI8 => Some(OpCode::BgeUnI8Short),
			OpCode::BgtUnI4 => Some(OpCode::BgtUnI4Short),
			OpCode::BgtUnI8 => Some(OpCode::BgtUnI8Short),
			OpCode::BleUnI4 => Some(OpCode::BleUnI4Short),
			OpCode::BleUnI8 => Some(OpCode::BleUnI8Short),
			OpCode::BltUnI4 => Some(OpCode::BltUnI4Short),
			OpCode::BltUnI8 => Some(OpCode::BltUnI8Short),
			OpCode::AddI4 => Some(OpCode::AddI4Short),
			OpCode::AddI8 => Some(OpCode::AddI8Short),
			OpCode::AddR4 => Some(OpCode::AddR4Short),
			OpCode::AddR8 => Some(OpCode::AddR8Short),
			OpCode::SubI4 => Some(OpCode::SubI4Short),
			OpCode::SubI8 => Some(OpCode::SubI8Short),
			OpCode::SubR4 => Some(OpCode::SubR4Short),
			OpCode::SubR8 => Some(OpCode::SubR8Short),
			OpCode::MulI4 => Some(OpCode::MulI4Short),
			OpCode::MulI8 => Some(OpCode::MulI8Short),
			OpCode::MulR4 => Some(OpCode::MulR4Short),
			OpCode::MulR8 => Some(OpCode::MulR8Short),
			OpCode::DivI4 => Some(OpCode::DivI4Short),
			OpCode::DivI8 => Some(OpCode::DivI8Short),
			OpCode::DivR4 => Some(OpCode::DivR4Short),
			OpCode::DivR8 => Some(OpCode::DivR8Short),
			OpCode::RemI4 => Some(OpCode::RemI4Short),
			OpCode::RemI8 => Some(OpCode::RemI8Short),
			OpCode::RemR4 => Some(OpCode::RemR4Short),
			OpCode::RemR8 => Some(OpCode::RemR8Short),
			OpCode::DivUnI4 => Some(OpCode::DivUnI4Short),
			OpCode::DivUnI8 => Some(OpCode::DivUnI8Short),
			OpCode::RemUnI4 => Some(OpCode::RemUnI4Short),
			OpCode::RemUnI8 => Some(OpCode::RemUnI8Short),
			OpCode::AndI4 => Some(OpCode::AndI4Short),
			OpCode::AndI8 => Some(OpCode::AndI8Short),
			OpCode::OrI4 => Some(OpCode::OrI4Short),
			OpCode::OrI8 => Some(OpCode::OrI8Short),
			OpCode::XorI4 => Some(OpCode::XorI4Short),
			OpCode::XorI8 => Some(OpCode::XorI8Short),
			OpCode::ShlI4 => Some(OpCode::ShlI4Short),
			OpCode::ShrI4 => Some(OpCode::ShrI4Short),
			OpCode::ShrUnI4 => Some(OpCode::ShrUnI4Short),
			OpCode::NegI4 => Some(OpCode::NegI4Short),
			OpCode::NegI8 => Some(OpCode::NegI8Short),
			OpCode::NegR4 => Some(OpCode::NegR4Short),
			OpCode::NegR8 => Some(OpCode::NegR8Short),
			OpCode::NotI4 => Some(OpCode::NotI4Short),
			OpCode::NotI8 => Some(OpCode::NotI8Short),
			OpCode::ConvI1I4 => Some(OpCode::ConvI1I4Short),
			OpCode::ConvI1I8 => Some(OpCode::ConvI1I8Short),
			OpCode::ConvI1R4 => Some(OpCode::ConvI1R4Short),
			OpCode::ConvI1R8 => Some(OpCode::ConvI1R8Short),
			OpCode::ConvU1I4 => Some(OpCode::ConvU1I4Short),
			OpCode::ConvU1I8 => Some(OpCode::ConvU1I8Short),
			OpCode::ConvU1R4 => Some(OpCode::ConvU1R4Short),
			OpCode::ConvU1R8 => Some(OpCode::ConvU1R8Short),
			OpCode::ConvI2I4 => Some(OpCode::ConvI2I4Short),
			OpCode::ConvI2I8 => Some(OpCode::ConvI2I8Short),
			OpCode::ConvI2R4 => Some(OpCode::ConvI2R4Short),
			OpCode::ConvI2R8 => Some(OpCode::ConvI2R8Short),
			OpCode::ConvU2I4 => Some(OpCode::ConvU2I4Short),
			OpCode::ConvU2I8 => Some(OpCode::ConvU2I8Short),
			OpCode::ConvU2R4 => Some(OpCode::ConvU2R4Short),
			OpCode::ConvU2R8 => Some(OpCode::ConvU2R8Short),
			OpCode::ConvI4I8 => Some(OpCode::ConvI4I8Short),
			OpCode::ConvI4R4 => Some(OpCode::ConvI4R4Short),
			OpCode::ConvI4R8 => Some(OpCode::ConvI4R8Short),
			OpCode::ConvU4I8 => Some(OpCode::ConvU4I8Short),
			OpCode::ConvU4R4 => Some(OpCode::ConvU4R4Short),
			OpCode::ConvU4R8 => Some(OpCode::ConvU4R8Short),
			OpCode::ConvI8I4 => Some(OpCode::ConvI8I4Short),
			OpCode::ConvI8U4 => Some(OpCode::ConvI8U4Short),
			OpCode::ConvI8R4 => Some(OpCode::ConvI8R4Short),
			OpCode::ConvI8R8 => Some(OpCode::ConvI8R8Short),
			OpCode::ConvU8I4 => Some(OpCode::ConvU8I4Short),
			OpCode::ConvU8U4 => Some(OpCode::ConvU8U4Short),
			OpCode::ConvU8R4 => Some(OpCode::ConvU8R4Short),
			OpCode::ConvU8R8 => Some(OpCode::ConvU8R8Short),
			OpCode::ConvR4I4 => Some(OpCode::ConvR4I4Short),
			OpCode::ConvR4I8 => Some(OpCode::ConvR4I8Short),
			OpCode::ConvR4R8 => Some(OpCode::ConvR4R8Short),
			OpCode::ConvR4U4 => Some(OpCode::ConvR4U4Short),
			OpCode::ConvR4U8 => Some(OpCode::ConvR4U8Short),
			OpCode::ConvR8I4 => Some(OpCode::ConvR8I4Short),
			OpCode::ConvR8I8 => Some(OpCode::ConvR8I8Short),
			OpCode::ConvR8R4 => Some(OpCode::ConvR8R4Short),
			OpCode::ConvR8U4 => Some(OpCode::ConvR8U4Short),
			OpCode::ConvR8U8 => Some(OpCode::ConvR8U8Short),
			OpCode::CeqI4 => Some(OpCode::CeqI4Short),
			OpCode::CeqI8 => Some(OpCode::CeqI8Short),
			OpCode::CeqR4 => Some(OpCode::CeqR4Short),
			OpCode::CeqR8 => Some(OpCode::CeqR8Short),
			OpCode::CgtI4 => Some(OpCode::CgtI4Short),
			OpCode::CgtI8 => Some(OpCode::CgtI8Short),
			OpCode::CgtUnI4 => Some(OpCode::CgtUnI4Short),
			OpCode::CgtUnI8 => Some(OpCode::CgtUnI8Short),
			OpCode::CltI4 => Some(OpCode::CltI4Short),
			OpCode::CltI8 => Some(OpCode::CltI8Short),
			OpCode::CltUnI4 => Some(OpCode::CltUnI4Short),
			OpCode::CltUnI8 => Some(OpCode::CltUnI8Short),
			OpCode::LdIndI1 => Some(OpCode::LdIndI1Short),
			OpCode::LdIndU1 => Some(OpCode::LdIndU1Short),
			OpCode::LdIndI2 => Some(OpCode::LdIndI2Short),
			OpCode::LdIndU2 => Some(OpCode::LdIndU2Short),
			OpCode::LdIndI4 => Some(OpCode::LdIndI4Short),
			OpCode::LdIndI8 => Some(OpCode::LdIndI8Short),
			OpCode::LdIndRef => Some(OpCode::LdIndRefShort),
			OpCode::StIndI1 => Some(OpCode::StIndI1Short),
			OpCode::StIndI2 => Some(OpCode::StIndI2Short),
			OpCode::StIndI4 => Some(OpCode::StIndI4Short),
			OpCode::StIndI8 => Some(OpCode::StIndI8Short),
			OpCode::StIndRef => Some(OpCode::StIndRefShort),
			OpCode::InitObjI1 => Some(OpCode::InitObjI1Short),
			OpCode::InitObjI2 => Some(OpCode::InitObjI2Short),
			OpCode::InitObjI4 => Some(OpCode::InitObjI4Short),
			OpCode::InitObjI8 => Some(OpCode::InitObjI8Short),
			OpCode::InitObjAny => Some(OpCode::InitObjAnyShort),
			OpCode::CpObjI1 => Some(OpCode::CpObjI1Short),
			OpCode::CpObjI2 => Some(OpCode::CpObjI2Short),
			OpCode::CpObjI4 => Some(OpCode::CpObjI4Short),
			OpCode::CpObjI8 => Some(OpCode::CpObjI8Short),
			OpCode::CpObjAny => Some(OpCode::CpObjAnyShort),
			OpCode::LdObjAny => Some(OpCode::LdObjAnyShort),
			OpCode::StObjAny => Some(OpCode::StObjAnyShort),
			OpCode::CastClass => Some(OpCode::CastClassShort),
			OpCode::IsInst => Some(OpCode::IsInstShort),
			OpCode::Box => Some(OpCode::BoxShort),
			OpCode::Unbox => Some(OpCode::UnboxShort),
			OpCode::UnboxAny => Some(OpCode::UnboxAnyShort),
			OpCode::NewArr => Some(OpCode::NewArrShort),
			OpCode::LdLen => Some(OpCode::LdLenShort),
			OpCode::Ldelema => Some(OpCode::LdelemaShort),
			OpCode::LdelemI1 => Some(OpCode::LdelemI1Short),
			OpCode::LdelemU1 => Some(OpCode::LdelemU1Short),
			OpCode::LdelemI2 => Some(OpCode::LdelemI2Short),
			OpCode::LdelemU2 => Some(OpCode::LdelemU2Short),
			OpCode::LdelemI4 => Some(OpCode::LdelemI4Short),
			OpCode::LdelemI8 => Some(OpCode::LdelemI8Short),
			OpCode::LdelemRef => Some(OpCode::LdelemRefShort),
			OpCode::LdelemAny => Some(OpCode::LdelemAnyShort),
			OpCode::StelemI1 => Some(OpCode::StelemI1Short),
			OpCode::StelemI2 => Some(OpCode::StelemI2Short),
			OpCode::StelemI4 => Some(OpCode::StelemI4Short),
			OpCode::StelemI8 => Some(OpCode::StelemI8Short),
			OpCode::StelemRef => Some(OpCode::StelemRefShort),
			OpCode::StelemAny => Some(OpCode::StelemAnyShort),
			OpCode::Ldftn => Some(OpCode::LdftnShort),
			OpCode::Ldvirtftn => Some(OpCode::LdvirtftnShort),
			OpCode::LdfldI1 => Some(OpCode::LdfldI1Short),
			OpCode::LdfldU1 => Some(OpCode::LdfldU1Short),
			OpCode::LdfldI2 => Some(OpCode::LdfldI2Short),
			OpCode::LdfldU2 => Some(OpCode::LdfldU2Short),
			OpCode::LdfldI4 => Some(OpCode::LdfldI4Short),
			OpCode::LdfldI8 => Some(OpCode::LdfldI8Short),
			OpCode::LdfldAny => Some(OpCode::LdfldAnyShort),
			OpCode::LdvfldI1 => Some(OpCode::LdvfldI1Short),
			OpCode::LdvfldU1 => Some(OpCode::LdvfldU1Short),
			OpCode::LdvfldI2 => Some(OpCode::LdvfldI2Short),
			OpCode::LdvfldU2 => Some(OpCode::LdvfldU2Short),
			OpCode::LdvfldI4 => Some(OpCode::LdvfldI4Short),
			OpCode::LdvfldI8 => Some(OpCode::LdvfldI8Short),
			OpCode::LdvfldAny => Some(OpCode::LdvfldAnyShort),
			OpCode::Ldflda => Some(OpCode::LdfldaShort),
			OpCode::StfldI1 => Some(OpCode::StfldI1Short),
			OpCode::StfldI2 => Some(OpCode::StfldI2Short),
			OpCode::StfldI4 => Some(OpCode::StfldI4Short),
			OpCode::StfldI8 => Some(OpCode::StfldI8Short),
			OpCode::StfldAny => Some(OpCode::StfldAnyShort),
			OpCode::LdsfldI1 => Some(OpCode::LdsfldI1Short),
			OpCode::LdsfldU1 => Some(OpCode::LdsfldU1Short),
			OpCode::LdsfldI2 => Some(OpCode::LdsfldI2Short),
			OpCode::LdsfldU2 => Some(OpCode::LdsfldU2Short),
			OpCode::LdsfldI4 => Some(OpCode::LdsfldI4Short),
			OpCode::LdsfldI8 => Some(OpCode::LdsfldI8Short),
			OpCode::LdsfldAny => Some(OpCode::LdsfldAnyShort),
			OpCode::Ldsflda => Some(OpCode::LdsfldaShort),
			OpCode::LdsfldRvaData => Some(OpCode::LdsfldRvaDataShort),
			OpCode::StsfldI1 => Some(OpCode::StsfldI1Short),
			OpCode::StsfldI2 => Some(OpCode::StsfldI2Short),
			OpCode::StsfldI4 => Some(OpCode::StsfldI4Short),
			OpCode::StsfldI8 => Some(OpCode::StsfldI8Short),
			OpCode::StsfldAny => Some(OpCode::StsfldAnyShort),
			OpCode::RetVoid => Some(OpCode::RetVoidShort),
			OpCode::RetI4 => Some(OpCode::RetI4Short),
			OpCode::RetI8 => Some(OpCode::RetI8Short),
			OpCode::RetAny => Some(OpCode::RetAnyShort),
			OpCode::CallInterp => Some(OpCode::CallInterpShort),
			OpCode::CallVirtInterp => Some(OpCode::CallVirtInterpShort),
			OpCode::CallInternalCall => Some(OpCode::CallInternalCallShort),
			OpCode::CallIntrinsic => Some(OpCode::CallIntrinsicShort),
			OpCode::CallPInvoke => Some(OpCode::CallPInvokeShort),
			OpCode::CallRuntimeImplemented => Some(OpCode::CallRuntimeImplementedShort),
			OpCode::CalliInterp => Some(OpCode::CalliInterpShort),
			OpCode::NewObjInterp => Some(OpCode::NewObjInterpShort),
			OpCode::NewValueTypeInterp => Some(OpCode::NewValueTypeInterpShort),
			OpCode::NewObjInternalCall => Some(OpCode::NewObjInternalCallShort),
			OpCode::NewObjIntrinsic => Some(OpCode::NewObjIntrinsicShort),
			OpCode::Throw => Some(OpCode::ThrowShort),
			OpCode::Rethrow => Some(OpCode::RethrowShort),
			OpCode::LeaveTryWithFinally => Some(OpCode::LeaveTryWithFinallyShort),
			OpCode::LeaveCatchWithFinally => Some(OpCode::LeaveCatchWithFinallyShort),
			OpCode::LeaveCatchWithoutFinally => Some(OpCode::LeaveCatchWithoutFinallyShort),
			OpCode::EndFilter => Some(OpCode::EndFilterShort),
			OpCode::EndFinally => Some(OpCode::EndFinallyShort),
			OpCode::EndFault => Some(OpCode::EndFaultShort),
			_ => None,
		}
	}

	pub fn is_short(self) -> bool {
		self.encoding().2
	}

	pub const ALL: &'static [OpCode] = &[
		OpCode::InitLocals1Short, OpCode::InitLocals2Short, OpCode::InitLocals3Short, OpCode::InitLocals4Short,
		OpCode::InitLocals, OpCode::InitLocalsShort, OpCode::LdLocI1, OpCode::LdLocI1Short,
		OpCode::LdLocU1, OpCode::LdLocU1Short, OpCode::LdLocI2, OpCode::LdLocI2Short,
		OpCode::LdLocU2, OpCode::LdLocU2Short, OpCode::LdLocI4, OpCode::LdLocI4Short,
		OpCode::LdLocI8, OpCode::LdLocI8Short, OpCode::LdLocAny, OpCode::LdLocAnyShort,
		OpCode::LdLoca, OpCode::LdLocaShort, OpCode::StLocI1, OpCode::StLocI1Short,
		OpCode::StLocI2, OpCode::StLocI2Short, OpCode::StLocI4, OpCode::StLocI4Short,
		OpCode::StLocI8, OpCode::StLocI8Short, OpCode::StLocAny, OpCode::StLocAnyShort,
		OpCode::LdNull, OpCode::LdNullShort, OpCode::LdcI4I2, OpCode::LdcI4I2Short,
		OpCode::LdcI4I4, OpCode::LdcI4I4Short, OpCode::LdcI8I2, OpCode::LdcI8I2Short,
		OpCode::LdcI8I4, OpCode::LdcI8I4Short, OpCode::LdcI8I8, OpCode::LdcI8I8Short,
		OpCode::LdStr, OpCode::LdStrShort, OpCode::LdToken, OpCode::LdTokenShort,
		OpCode::Br, OpCode::BrShort, OpCode::BrTrueI4, OpCode::BrTrueI4Short,
		OpCode::BrFalseI4, OpCode::BrFalseI4Short, OpCode::BrTrueI8, OpCode::BrTrueI8Short,
		OpCode::BrFalseI8, OpCode::BrFalseI8Short, OpCode::BeqI4, OpCode::BeqI4Short,
		OpCode::BeqI8, OpCode::BeqI8Short, OpCode::BeqR4, OpCode::BeqR8,
		OpCode::BgeI4, OpCode::BgeI4Short, OpCode::BgeI8, OpCode::BgeI8Short,
		OpCode::BgeR4, OpCode::BgeR8, OpCode::BgtI4, OpCode::BgtI4Short,
		OpCode::BgtI8, OpCode::BgtI8Short, OpCode::BgtR4, OpCode::BgtR8,
		OpCode::BleI4, OpCode::BleI4Short, OpCode::BleI8, OpCode::BleI8Short,
		OpCode::BleR4, OpCode::BleR8, OpCode::BltI4, OpCode::BltI4Short,
		OpCode::BltI8, OpCode::BltI8Short, OpCode::BltR4, OpCode::BltR8,
		OpCode::BneUnI4, OpCode::BneUnI4Short, OpCode::BneUnI8, OpCode::BneUnI8Short,
		OpCode::BneUnR4, OpCode::BneUnR8, OpCode::BgeUnI4, OpCode::BgeUnI4Short,
		OpCode::BgeUnI8, OpCode::BgeUnI8Short, OpCode::BgeUnR4, OpCode::BgeUnR8,
		OpCode::BgtUnI4, OpCode::BgtUnI4Short, OpCode::BgtUnI8, OpCode::BgtUnI8Short,
		OpCode::BgtUnR4, OpCode::BgtUnR8, OpCode::BleUnI4, OpCode::BleUnI4Short,
		OpCode::BleUnI8, OpCode::BleUnI8Short, OpCode::BleUnR4, OpCode::BleUnR8,
		OpCode::BltUnI4, OpCode::BltUnI4Short, OpCode::BltUnI8, OpCode::BltUnI8Short,
		OpCode::BltUnR4, OpCode::BltUnR8, OpCode::Switch, OpCode::AddI4,
		OpCode::AddI4Short, OpCode::AddI8, OpCode::AddI8Short, OpCode::AddR4,
		OpCode::AddR4Short, OpCode::AddR8, OpCode::AddR8Short, OpCode::SubI4,
		OpCode::SubI4Short, OpCode::SubI8, OpCode::SubI8Short, OpCode::SubR4,
		OpCode::SubR4Short, OpCode::SubR8, OpCode::SubR8Short, OpCode::MulI4,
		OpCode::MulI4Short, OpCode::MulI8, OpCode::MulI8Short, OpCode::MulR4,
		OpCode::MulR4Short, OpCode::MulR8, OpCode::MulR8Short, OpCode::DivI4,
		OpCode::DivI4Short, OpCode::DivI8, OpCode::DivI8Short, OpCode::DivR4,
		OpCode::DivR4Short, OpCode::DivR8, OpCode::DivR8Short, OpCode::RemI4,
		OpCode::RemI4Short, OpCode::RemI8, OpCode::RemI8Short, OpCode::RemR4,
		OpCode::RemR4Short, OpCode::RemR8, OpCode::RemR8Short, OpCode::DivUnI4,
		OpCode::DivUnI4Short, OpCode::DivUnI8, OpCode::DivUnI8Short, OpCode::RemUnI4,
		OpCode::RemUnI4Short, OpCode::RemUnI8, OpCode::RemUnI8Short, OpCode::AndI4,
		OpCode::AndI4Short, OpCode::AndI8, OpCode::AndI8Short, OpCode::OrI4,
		OpCode::OrI4Short, OpCode::OrI8, OpCode::OrI8Short, OpCode::XorI4,
		OpCode::XorI4Short, OpCode::XorI8, OpCode::XorI8Short, OpCode::ShlI4,
		OpCode::ShlI4Short, OpCode::ShlI8, OpCode::ShrI4, OpCode::ShrI4Short,
		OpCode::ShrI8, OpCode::ShrUnI4, OpCode::ShrUnI4Short, OpCode::ShrUnI8,
		OpCode::NegI4, OpCode::NegI4Short, OpCode::NegI8, OpCode::NegI8Short,
		OpCode::NegR4, OpCode::NegR4Short, OpCode::NegR8, OpCode::NegR8Short,
		OpCode::NotI4, OpCode::NotI4Short, OpCode::NotI8, OpCode::NotI8Short,
		OpCode::ConvI1I4, OpCode::ConvI1I4Short, OpCode::ConvI1I8, OpCode::ConvI1I8Short,
		OpCode::ConvI1R4, OpCode::ConvI1R4Short, OpCode::ConvI1R8, OpCode::ConvI1R8Short,
		OpCode::ConvU1I4, OpCode::ConvU1I4Short, OpCode::ConvU1I8, OpCode::ConvU1I8Short,
		OpCode::ConvU1R4, OpCode::ConvU1R4Short, OpCode::ConvU1R8, OpCode::ConvU1R8Short,
		OpCode::ConvI2I4, OpCode::ConvI2I4Short, OpCode::ConvI2I8, OpCode::ConvI2I8Short,
		OpCode::ConvI2R4, OpCode::ConvI2R4Short, OpCode::ConvI2R8, OpCode::ConvI2R8Short,
		OpCode::ConvU2I4, OpCode::ConvU2I4Short, OpCode::ConvU2I8, OpCode::ConvU2I8Short,
		OpCode::ConvU2R4, OpCode::ConvU2R4Short, OpCode::ConvU2R8, OpCode::ConvU2R8Short,
		OpCode::ConvI4I8, OpCode::ConvI4I8Short, OpCode::ConvI4R4, OpCode::ConvI4R4Short,
		OpCode::ConvI4R8, OpCode::ConvI4R8Short, OpCode::ConvU4I8, OpCode::ConvU4I8Short,
		OpCode::ConvU4R4, OpCode::ConvU4R4Short, OpCode::ConvU4R8, OpCode::ConvU4R8Short,
		OpCode::ConvI8I4, OpCode::ConvI8I4Short, OpCode::ConvI8U4, OpCode::ConvI8U4Short,
		OpCode::ConvI8R4, OpCode::ConvI8R4Short, OpCode::ConvI8R8, OpCode::ConvI8R8Short,
		OpCode::ConvU8I4, OpCode::ConvU8I4Short, OpCode::ConvU8U4, OpCode::ConvU8U4Short,
		OpCode::ConvU8R4, OpCode::ConvU8R4Short, OpCode::ConvU8R8, OpCode::ConvU8R8Short,
		OpCode::ConvR4I4, OpCode::ConvR4I4Short, OpCode::ConvR4I8, OpCode::ConvR4I8Short,
		OpCode::ConvR4R8, OpCode::ConvR4R8Short, OpCode::ConvR4U4, OpCode::ConvR4U4Short,
		OpCode::ConvR4U8, OpCode::ConvR4U8Short, OpCode::ConvR8I4, OpCode::ConvR8I4Short,
		OpCode::ConvR8I8, OpCode::ConvR8I8Short, OpCode::ConvR8R4, OpCode::ConvR8R4Short,
		OpCode::ConvR8U4, OpCode::ConvR8U4Short, OpCode::ConvR8U8, OpCode::ConvR8U8Short,
		OpCode::CkFiniteR4, OpCode::CkFiniteR8, OpCode::CeqI4, OpCode::CeqI4Short,
		OpCode::CeqI8, OpCode::CeqI8Short, OpCode::CeqR4, OpCode::CeqR4Short,
		OpCode::CeqR8, OpCode::CeqR8Short, OpCode::CgtI4, OpCode::CgtI4Short,
		OpCode::CgtI8, OpCode::CgtI8Short, OpCode::CgtR4, OpCode::CgtR8,
		OpCode::CgtUnI4, OpCode::CgtUnI4Short, OpCode::CgtUnI8, OpCode::CgtUnI8Short,
		OpCode::CgtUnR4, OpCode::CgtUnR8, OpCode::CltI4, OpCode::CltI4Short,
		OpCode::CltI8, OpCode::CltI8Short, OpCode::CltR4, OpCode::CltR8,
		OpCode::CltUnI4, OpCode::CltUnI4Short, OpCode::CltUnI8, OpCode::CltUnI8Short,
		OpCode::CltUnR4, OpCode::CltUnR8, OpCode::LdIndI1, OpCode::LdIndI1Short,
		OpCode::LdIndU1, OpCode::LdIndU1Short, OpCode::LdIndI2, OpCode::LdIndI2Short,
		OpCode::LdIndU2, OpCode::LdIndU2Short, OpCode::LdIndI4, OpCode::LdIndI4Short,
		OpCode::LdIndI8, OpCode::LdIndI8Short, OpCode::LdIndRef, OpCode::LdIndRefShort,
		OpCode::StIndI1, OpCode::StIndI1Short, OpCode::StIndI2, OpCode::StIndI2Short,
		OpCode::StIndI4, OpCode::StIndI4Short, OpCode::StIndI8, OpCode::StIndI8Short,
		OpCode::StIndRef, OpCode::StIndRefShort, OpCode::LocAlloc, OpCode::InitBlk,
		OpCode::CpBlk, OpCode::GetEnumLongHashCode, OpCode::InitObjI1, OpCode::InitObjI1Short,
		OpCode::InitObjI2, OpCode::InitObjI2Short, OpCode::InitObjI4, OpCode::InitObjI4Short,
		OpCode::InitObjI8, OpCode::InitObjI8Short, OpCode::InitObjAny, OpCode::InitObjAnyShort,
		OpCode::CpObjI1, OpCode::CpObjI1Short, OpCode::CpObjI2, OpCode::CpObjI2Short,
		OpCode::CpObjI4, OpCode::CpObjI4Short, OpCode::CpObjI8, OpCode::CpObjI8Short,
		OpCode::CpObjAny, OpCode::CpObjAnyShort, OpCode::LdObjAny, OpCode::LdObjAnyShort,
		OpCode::StObjAny, OpCode::StObjAnyShort, OpCode::CastClass, OpCode::CastClassShort,
		OpCode::IsInst, OpCode::IsInstShort, OpCode::Box, OpCode::BoxShort,
		OpCode::Unbox, OpCode::UnboxShort, OpCode::UnboxAny, OpCode::UnboxAnyShort,
		OpCode::NewArr, OpCode::NewArrShort, OpCode::LdLen, OpCode::LdLenShort,
		OpCode::Ldelema, OpCode::LdelemaShort, OpCode::LdelemaReadOnly, OpCode::LdelemI1,
		OpCode::LdelemI1Short, OpCode::LdelemU1, OpCode::LdelemU1Short, OpCode::LdelemI2,
		OpCode::LdelemI2Short, OpCode::LdelemU2, OpCode::LdelemU2Short, OpCode::LdelemI4,
		OpCode::LdelemI4Short, OpCode::LdelemI8, OpCode::LdelemI8Short, OpCode::LdelemRef,
		OpCode::LdelemRefShort, OpCode::LdelemAny, OpCode::LdelemAnyShort, OpCode::StelemI1,
		OpCode::StelemI1Short, OpCode::StelemI2, OpCode::StelemI2Short, OpCode::StelemI4,
		OpCode::StelemI4Short, OpCode::StelemI8, OpCode::StelemI8Short, OpCode::StelemRef,
		OpCode::StelemRefShort, OpCode::StelemAny, OpCode::StelemAnyShort, OpCode::Ldftn,
		OpCode::LdftnShort, OpCode::Ldvirtftn, OpCode::LdvirtftnShort, OpCode::LdfldI1,
		OpCode::LdfldI1Short, OpCode::LdfldU1, OpCode::LdfldU1Short, OpCode::LdfldI2,
		OpCode::LdfldI2Short, OpCode::LdfldU2, OpCode::LdfldU2Short, OpCode::LdfldI4,
		OpCode::LdfldI4Short, OpCode::LdfldI8, OpCode::LdfldI8Short, OpCode::LdfldAny,
		OpCode::LdfldAnyShort, OpCode::LdvfldI1, OpCode::LdvfldI1Short, OpCode::LdvfldU1,
		OpCode::LdvfldU1Short, OpCode::LdvfldI2, OpCode::LdvfldI2Short, OpCode::LdvfldU2,
		OpCode::LdvfldU2Short, OpCode::LdvfldI4, OpCode::LdvfldI4Short, OpCode::LdvfldI8,
		OpCode::LdvfldI8Short, OpCode::LdvfldAny, OpCode::LdvfldAnyShort, OpCode::Ldflda,
		OpCode::LdfldaShort, OpCode::StfldI1, OpCode::StfldI1Short, OpCode::StfldI2,
		OpCode::StfldI2Short, OpCode::StfldI4, OpCode::StfldI4Short, OpCode::StfldI8,
		OpCode::StfldI8Short, OpCode::StfldAny, OpCode::StfldAnyShort, OpCode::LdfldI1Large,
		OpCode::LdfldU1Large, OpCode::LdfldI2Large, OpCode::LdfldU2Large, OpCode::LdfldI4Large,
		OpCode::LdfldI8Large, OpCode::LdfldAnyLarge, OpCode::LdfldaLarge, OpCode::StfldI1Large,
		OpCode::StfldI2Large, OpCode::StfldI4Large, OpCode::StfldI8Large, OpCode::StfldAnyLarge,
		OpCode::LdfldI2Unaligned, OpCode::LdfldU2Unaligned, OpCode::LdfldI4Unaligned, OpCode::LdfldI8Unaligned,
		OpCode::StfldI2Unaligned, OpCode::StfldI4Unaligned, OpCode::StfldI8Unaligned, OpCode::LdIndI2Unaligned,
		OpCode::LdIndU2Unaligned, OpCode::LdIndI4Unaligned, OpCode::LdIndI8Unaligned, OpCode::StIndI2Unaligned,
		OpCode::StIndI4Unaligned, OpCode::StIndI8Unaligned, OpCode::LdsfldI1, OpCode::LdsfldI1Short,
		OpCode::LdsfldU1, OpCode::LdsfldU1Short, OpCode::LdsfldI2, OpCode::LdsfldI2Short,
		OpCode::LdsfldU2, OpCode::LdsfldU2Short, OpCode::LdsfldI4, OpCode::LdsfldI4Short,
		OpCode::LdsfldI8, OpCode::LdsfldI8Short, OpCode::LdsfldAny, OpCode::LdsfldAnyShort,
		OpCode::Ldsflda, OpCode::LdsfldaShort, OpCode::LdsfldRvaData, OpCode::LdsfldRvaDataShort,
		OpCode::StsfldI1, OpCode::StsfldI1Short, OpCode::StsfldI2, OpCode::StsfldI2Short,
		OpCode::StsfldI4, OpCode::StsfldI4Short, OpCode::StsfldI8, OpCode::StsfldI8Short,
		OpCode::StsfldAny, OpCode::StsfldAnyShort, OpCode::RetVoid, OpCode::RetVoidShort,
		OpCode::RetI4, OpCode::RetI4Short, OpCode::RetI8, OpCode::RetI8Short,
		OpCode::RetAny, OpCode::RetAnyShort, OpCode::CallInterp, OpCode::CallInterpShort,
		OpCode::CallVirtInterp, OpCode::CallVirtInterpShort, OpCode::CallInternalCall, OpCode::CallInternalCallShort,
		OpCode::CallIntrinsic, OpCode::CallIntrinsicShort, OpCode::CallPInvoke, OpCode::CallPInvokeShort,
		OpCode::CallRuntimeImplemented, OpCode::CallRuntimeImplementedShort, OpCode::CalliInterp, OpCode::CalliInterpShort,
		OpCode::NewObjInterp, OpCode::NewObjInterpShort, OpCode::NewValueTypeInterp, OpCode::NewValueTypeInterpShort,
		OpCode::NewObjInternalCall, OpCode::NewObjInternalCallShort, OpCode::NewObjIntrinsic, OpCode::NewObjIntrinsicShort,
		OpCode::Throw, OpCode::ThrowShort, OpCode::Rethrow, OpCode::RethrowShort,
		OpCode::LeaveTryWithFinally, OpCode::LeaveTryWithFinallyShort, OpCode::LeaveCatchWithFinally, OpCode::LeaveCatchWithFinallyShort,
		OpCode::LeaveCatchWithoutFinally, OpCode::LeaveCatchWithoutFinallyShort, OpCode::EndFilter, OpCode::EndFilterShort,
		OpCode::EndFinally, OpCode::EndFinallyShort, OpCode::EndFault, OpCode::EndFaultShort,
		OpCode::AddOvfI4, OpCode::AddOvfI8, OpCode::AddOvfUnI4, OpCode::AddOvfUnI8,
		OpCode::SubOvfI4, OpCode::SubOvfI8, OpCode::SubOvfUnI4, OpCode::SubOvfUnI8,
		OpCode::MulOvfI4, OpCode::MulOvfI8, OpCode::MulOvfUnI4, OpCode::MulOvfUnI8,
		OpCode::ConvOvfI1I4, OpCode::ConvOvfI1I8, OpCode::ConvOvfI1R4, OpCode::ConvOvfI1R8,
		OpCode::ConvOvfU1I4, OpCode::ConvOvfU1I8, OpCode::ConvOvfU1R4, OpCode::ConvOvfU1R8,
		OpCode::ConvOvfI2I4, OpCode::ConvOvfI2I8, OpCode::ConvOvfI2R4, OpCode::ConvOvfI2R8,
		OpCode::ConvOvfU2I4, OpCode::ConvOvfU2I8, OpCode::ConvOvfU2R4, OpCode::ConvOvfU2R8,
		OpCode::ConvOvfI4I4, OpCode::ConvOvfI4I8, OpCode::ConvOvfI4R4, OpCode::ConvOvfI4R8,
		OpCode::ConvOvfU4I4, OpCode::ConvOvfU4I8, OpCode::ConvOvfU4R4, OpCode::ConvOvfU4R8,
		OpCode::ConvOvfI8I4, OpCode::ConvOvfI8I8, OpCode::ConvOvfI8R4, OpCode::ConvOvfI8R8,
		OpCode::ConvOvfU8I4, OpCode::ConvOvfU8I8, OpCode::ConvOvfU8R4, OpCode::ConvOvfU8R8,
		OpCode::ConvOvfI1U4Un, OpCode::ConvOvfI1U8Un, OpCode::ConvOvfU1U4Un, OpCode::ConvOvfU1U8Un,
		OpCode::ConvOvfI2U4Un, OpCode::ConvOvfI2U8Un, OpCode::ConvOvfU2U4Un, OpCode::ConvOvfU2U8Un,
		OpCode::ConvOvfI4U4Un, OpCode::ConvOvfI4U8Un, OpCode::ConvOvfU4U4Un, OpCode::ConvOvfU4U8Un,
		OpCode::ConvOvfI8U4Un, OpCode::ConvOvfI8U8Un, OpCode::ConvOvfU8U4Un, OpCode::ConvOvfU8U8Un,
		OpCode::Illegal, OpCode::Nop, OpCode::Arglist,
	];

	/// Decodes the opcode at `at`; returns the opcode and its header length.
	pub fn from_bytes(code: &[u8], at: usize) -> Option<(OpCode, usize)> {
		let table = decode_table();
		let b0 = *code.get(at)?;
		match b0 {
			PREFIX_WIDE => Some((table[1][*code.get(at + 1)? as usize]?, 2)),
			PREFIX_MEM => Some((table[2][*code.get(at + 1)? as usize]?, 2)),
			PREFIX_CHECKED => Some((table[3][*code.get(at + 1)? as usize]?, 2)),
			PREFIX_MISC => Some((table[4][*code.get(at + 1)? as usize]?, 2)),
			_ => Some((table[0][b0 as usize]?, 1)),
		}
	}
}

fn page_index(prefix: Option<u8>) -> usize {
	match prefix {
		None => 0,
		Some(PREFIX_WIDE) => 1,
		Some(PREFIX_MEM) => 2,
		Some(PREFIX_CHECKED) => 3,
		_ => 4,
	}
}

fn decode_table() -> &'static [[Option<OpCode>; 256]; 5] {
	static TABLE: std::sync::OnceLock<[[Option<OpCode>; 256]; 5]> = std::sync::OnceLock::new();
	TABLE.get_or_init(|| {
		let mut table = [[None; 256]; 5];
		for op in OpCode::ALL {
			let (prefix, code, _) = op.encoding();
			table[page_index(prefix)][code as usize] = Some(*op);
		}
		table
	})
}


/// A decoded instruction of any family, as the transformer holds them while
/// assigning offsets and downgrading to short encodings.
#[derive(Debug, Copy, Clone)]
pub enum Inst {
	InitLocals1(InitLocals1),
	InitLocals2(InitLocals2),
	InitLocals3(InitLocals3),
	InitLocals4(InitLocals4),
	InitLocals(InitLocals),
	LdLocI1(LdLocI1),
	LdLocU1(LdLocU1),
	LdLocI2(LdLocI2),
	LdLocU2(LdLocU2),
	LdLocI4(LdLocI4),
	LdLocI8(LdLocI8),
	LdLocAny(LdLocAny),
	LdLoca(LdLoca),
	StLocI1(StLocI1),
	StLocI2(StLocI2),
	StLocI4(StLocI4),
	StLocI8(StLocI8),
	StLocAny(StLocAny),
	LdNull(LdNull),
	LdcI4I2(LdcI4I2),
	LdcI4I4(LdcI4I4),
	LdcI8I2(LdcI8I2),
	LdcI8I4(LdcI8I4),
	LdcI8I8(LdcI8I8),
	LdStr(LdStr),
	LdToken(LdToken),
	Br(Br),
	BrTrueI4(BrTrueI4),
	BrFalseI4(BrFalseI4),
	BrTrueI8(BrTrueI8),
	BrFalseI8(BrFalseI8),
	BeqI4(BeqI4),
	BeqI8(BeqI8),
	BeqR4(BeqR4),
	BeqR8(BeqR8),
	BgeI4(BgeI4),
	BgeI8(BgeI8),
	BgeR4(BgeR4),
	BgeR8(BgeR8),
	BgtI4(BgtI4),
	BgtI8(BgtI8),
	BgtR4(BgtR4),
	BgtR8(BgtR8),
	BleI4(BleI4),
	BleI8(BleI8),
	BleR4(BleR4),
	BleR8(BleR8),
	BltI4(BltI4),
	BltI8(BltI8),
	BltR4(BltR4),
	BltR8(BltR8),
	BneUnI4(BneUnI4),
	BneUnI8(BneUnI8),
	BneUnR4(BneUnR4),
	BneUnR8(BneUnR8),
	BgeUnI4(BgeUnI4),
	BgeUnI8(BgeUnI8),
	BgeUnR4(BgeUnR4),
	BgeUnR8(BgeUnR8),
	BgtUnI4(BgtUnI4),
	BgtUnI8(BgtUnI8),
	BgtUnR4(BgtUnR4),
	BgtUnR8(BgtUnR8),
	BleUnI4(BleUnI4),
	BleUnI8(BleUnI8),
	BleUnR4(BleUnR4),
	BleUnR8(BleUnR8),
	BltUnI4(BltUnI4),
	BltUnI8(BltUnI8),
	BltUnR4(BltUnR4),
	BltUnR8(BltUnR8),
	Switch(Switch),
	AddI4(AddI4),
	AddI8(AddI8),
	AddR4(AddR4),
	AddR8(AddR8),
	SubI4(SubI4),
	SubI8(SubI8),
	SubR4(SubR4),
	SubR8(SubR8),
	MulI4(MulI4),
	MulI8(MulI8),
	MulR4(MulR4),
	MulR8(MulR8),
	DivI4(DivI4),
	DivI8(DivI8),
	DivR4(DivR4),
	DivR8(DivR8),
	RemI4(RemI4),
	RemI8(RemI8),
	RemR4(RemR4),
	RemR8(RemR8),
	DivUnI4(DivUnI4),
	DivUnI8(DivUnI8),
	RemUnI4(RemUnI4),
	RemUnI8(RemUnI8),
	AndI4(AndI4),
	AndI8(AndI8),
	OrI4(OrI4),
	OrI8(OrI8),
	XorI4(XorI4),
	XorI8(XorI8),
	ShlI4(ShlI4),
	ShlI8(ShlI8),
	ShrI4(ShrI4),
	ShrI8(ShrI8),
	ShrUnI4(ShrUnI4),
	ShrUnI8(ShrUnI8),
	NegI4(NegI4),
	NegI8(NegI8),
	NegR4(NegR4),
	NegR8(NegR8),
	NotI4(NotI4),
	NotI8(NotI8),
	ConvI1I4(ConvI1I4),
	ConvI1I8(ConvI1I8),
	ConvI1R4(ConvI1R4),
	ConvI1R8(ConvI1R8),
	ConvU1I4(ConvU1I4),
	ConvU1I8(ConvU1I8),
	ConvU1R4(ConvU1R4),
	ConvU1R8(ConvU1R8),
	ConvI2I4(ConvI2I4),
	ConvI2I8(ConvI2I8),
	ConvI2R4(ConvI2R4),
	ConvI2R8(ConvI2R8),
	ConvU2I4(ConvU2I4),
	ConvU2I8(ConvU2I8),
	ConvU2R4(ConvU2R4),
	ConvU2R8(ConvU2R8),
	ConvI4I8(ConvI4I8),
	ConvI4R4(ConvI4R4),
	ConvI4R8(ConvI4R8),
	ConvU4I8(ConvU4I8),
	ConvU4R4(ConvU4R4),
	ConvU4R8(ConvU4R8),
	ConvI8I4(ConvI8I4),
	ConvI8U4(ConvI8U4),
	ConvI8R4(ConvI8R4),
	ConvI8R8(ConvI8R8),
	ConvU8I4(ConvU8I4),
	ConvU8U4(ConvU8U4),
	ConvU8R4(ConvU8R4),
	ConvU8R8(ConvU8R8),
	ConvR4I4(ConvR4I4),
	ConvR4I8(ConvR4I8),
	ConvR4R8(ConvR4R8),
	ConvR4U4(ConvR4U4),
	ConvR4U8(ConvR4U8),
	ConvR8I4(ConvR8I4),
	ConvR8I8(ConvR8I8),
	ConvR8R4(ConvR8R4),
	ConvR8U4(ConvR8U4),
	ConvR8U8(ConvR8U8),
	CkFiniteR4(CkFiniteR4),
	CkFiniteR8(CkFiniteR8),
	CeqI4(CeqI4),
	CeqI8(CeqI8),
	CeqR4(CeqR4),
	CeqR8(CeqR8),
	CgtI4(CgtI4),
	CgtI8(CgtI8),
	CgtR4(CgtR4),
	CgtR8(CgtR8),
	CgtUnI4(CgtUnI4),
	CgtUnI8(CgtUnI8),
	CgtUnR4(CgtUnR4),
	CgtUnR8(CgtUnR8),
	CltI4(CltI4),
	CltI8(CltI8),
	CltR4(CltR4),
	CltR8(CltR8),
	CltUnI4(CltUnI4),
	CltUnI8(CltUnI8),
	CltUnR4(CltUnR4),
	CltUnR8(CltUnR8),
	LdIndI1(LdIndI1),
	LdIndU1(LdIndU1),
	LdIndI2(LdIndI2),
	LdIndU2(LdIndU2),
	LdIndI4(LdIndI4),
	LdIndI8(LdIndI8),
	LdIndRef(LdIndRef),
	StIndI1(StIndI1),
	StIndI2(StIndI2),
	StIndI4(StIndI4),
	StIndI8(StIndI8),
	StIndRef(StIndRef),
	LocAlloc(LocAlloc),
	InitBlk(InitBlk),
	CpBlk(CpBlk),
	GetEnumLongHashCode(GetEnumLongHashCode),
	InitObjI1(InitObjI1),
	InitObjI2(InitObjI2),
	InitObjI4(InitObjI4),
	InitObjI8(InitObjI8),
	InitObjAny(InitObjAny),
	CpObjI1(CpObjI1),
	CpObjI2(CpObjI2),
	CpObjI4(CpObjI4),
	CpObjI8(CpObjI8),
	CpObjAny(CpObjAny),
	LdObjAny(LdObjAny),
	StObjAny(StObjAny),
	CastClass(CastClass),
	IsInst(IsInst),
	Box(Box),
	Unbox(Unbox),
	UnboxAny(UnboxAny),
	NewArr(NewArr),
	LdLen(LdLen),
	Ldelema(Ldelema),
	LdelemaReadOnly(LdelemaReadOnly),
	LdelemI1(LdelemI1),
	LdelemU1(LdelemU1),
	LdelemI2(LdelemI2),
	LdelemU2(LdelemU2),
	LdelemI4(LdelemI4),
	LdelemI8(LdelemI8),
	LdelemRef(LdelemRef),
	LdelemAny(LdelemAny),
	StelemI1(StelemI1),
	StelemI2(StelemI2),
	StelemI4(StelemI4),
	StelemI8(StelemI8),
	StelemRef(StelemRef),
	StelemAny(StelemAny),
	Ldftn(Ldftn),
	Ldvirtftn(Ldvirtftn),
	LdfldI1(LdfldI1),
	LdfldU1(LdfldU1),
	LdfldI2(LdfldI2),
	LdfldU2(LdfldU2),
	LdfldI4(LdfldI4),
	LdfldI8(LdfldI8),
	LdfldAny(LdfldAny),
	LdvfldI1(LdvfldI1),
	LdvfldU1(LdvfldU1),
	LdvfldI2(LdvfldI2),
	LdvfldU2(LdvfldU2),
	LdvfldI4(LdvfldI4),
	LdvfldI8(LdvfldI8),
	LdvfldAny(LdvfldAny),
	Ldflda(Ldflda),
	StfldI1(StfldI1),
	StfldI2(StfldI2),
	StfldI4(StfldI4),
	StfldI8(StfldI8),
	StfldAny(StfldAny),
	LdfldI1Large(LdfldI1Large),
	LdfldU1Large(LdfldU1Large),
	LdfldI2Large(LdfldI2Large),
	LdfldU2Large(LdfldU2Large),
	LdfldI4Large(LdfldI4Large),
	LdfldI8Large(LdfldI8Large),
	LdfldAnyLarge(LdfldAnyLarge),
	LdfldaLarge(LdfldaLarge),
	StfldI1Large(StfldI1Large),
	StfldI2Large(StfldI2Large),
	StfldI4Large(StfldI4Large),
	StfldI8Large(StfldI8Large),
	StfldAnyLarge(StfldAnyLarge),
	LdfldI2Unaligned(LdfldI2Unaligned),
	LdfldU2Unaligned(LdfldU2Unaligned),
	LdfldI4Unaligned(LdfldI4Unaligned),
	LdfldI8Unaligned(LdfldI8Unaligned),
	StfldI2Unaligned(StfldI2Unaligned),
	StfldI4Unaligned(StfldI4Unaligned),
	StfldI8Unaligned(StfldI8Unaligned),
	LdIndI2Unaligned(LdIndI2Unaligned),
	LdIndU2Unaligned(LdIndU2Unaligned),
	LdIndI4Unaligned(LdIndI4Unaligned),
	LdIndI8Unaligned(LdIndI8Unaligned),
	StIndI2Unaligned(StIndI2Unaligned),
	StIndI4Unaligned(StIndI4Unaligned),
	StIndI8Unaligned(StIndI8Unaligned),
	LdsfldI1(LdsfldI1),
	LdsfldU1(LdsfldU1),
	LdsfldI2(LdsfldI2),
	LdsfldU2(LdsfldU2),
	LdsfldI4(LdsfldI4),
	LdsfldI8(LdsfldI8),
	LdsfldAny(LdsfldAny),
	Ldsflda(Ldsflda),
	LdsfldRvaData(LdsfldRvaData),
	StsfldI1(StsfldI1),
	StsfldI2(StsfldI2),
	StsfldI4(StsfldI4),
	StsfldI8(StsfldI8),
	StsfldAny(StsfldAny),
	RetVoid(RetVoid),
	RetI4(RetI4),
	RetI8(RetI8),
	RetAny(RetAny),
	CallInterp(CallInterp),
	CallVirtInterp(CallVirtInterp),
	CallInternalCall(CallInternalCall),
	CallIntrinsic(CallIntrinsic),
	CallPInvoke(CallPInvoke),
	CallRuntimeImplemented(CallRuntimeImplemented),
	CalliInterp(CalliInterp),
	NewObjInterp(NewObjInterp),
	NewValueTypeInterp(NewValueTypeInterp),
	NewObjInternalCall(NewObjInternalCall),
	NewObjIntrinsic(NewObjIntrinsic),
	Throw(Throw),
	Rethrow(Rethrow),
	LeaveTryWithFinally(LeaveTryWithFinally),
	LeaveCatchWithFinally(LeaveCatchWithFinally),
	LeaveCatchWithoutFinally(LeaveCatchWithoutFinally),
	EndFilter(EndFilter),
	EndFinally(EndFinally),
	EndFault(EndFault),
	AddOvfI4(AddOvfI4),
	AddOvfI8(AddOvfI8),
	AddOvfUnI4(AddOvfUnI4),
	AddOvfUnI8(AddOvfUnI8),
	SubOvfI4(SubOvfI4),
	SubOvfI8(SubOvfI8),
	SubOvfUnI4(SubOvfUnI4),
	SubOvfUnI8(SubOvfUnI8),
	MulOvfI4(MulOvfI4),
	MulOvfI8(MulOvfI8),
	MulOvfUnI4(MulOvfUnI4),
	MulOvfUnI8(MulOvfUnI8),
	ConvOvfI1I4(ConvOvfI1I4),
	ConvOvfI1I8(ConvOvfI1I8),
	ConvOvfI1R4(ConvOvfI1R4),
	ConvOvfI1R8(ConvOvfI1R8),
	ConvOvfU1I4(ConvOvfU1I4),
	ConvOvfU1I8(ConvOvfU1I8),
	ConvOvfU1R4(ConvOvfU1R4),
	ConvOvfU1R8(ConvOvfU1R8),
	ConvOvfI2I4(ConvOvfI2I4),
	ConvOvfI2I8(ConvOvfI2I8),
	ConvOvfI2R4(ConvOvfI2R4),
	ConvOvfI2R8(ConvOvfI2R8),
	ConvOvfU2I4(ConvOvfU2I4),
	ConvOvfU2I8(ConvOvfU2I8),
	ConvOvfU2R4(ConvOvfU2R4),
	ConvOvfU2R8(ConvOvfU2R8),
	ConvOvfI4I4(ConvOvfI4I4),
	ConvOvfI4I8(ConvOvfI4I8),
	ConvOvfI4R4(ConvOvfI4R4),
	ConvOvfI4R8(ConvOvfI4R8),
	ConvOvfU4I4(ConvOvfU4I4),
	ConvOvfU4I8(ConvOvfU4I8),
	ConvOvfU4R4(ConvOvfU4R4),
	ConvOvfU4R8(ConvOvfU4R8),
	ConvOvfI8I4(ConvOvfI8I4),
	ConvOvfI8I8(ConvOvfI8I8),
	ConvOvfI8R4(ConvOvfI8R4),
	ConvOvfI8R8(ConvOvfI8R8),
	ConvOvfU8I4(ConvOvfU8I4),
	ConvOvfU8I8(ConvOvfU8I8),
	ConvOvfU8R4(ConvOvfU8R4),
	ConvOvfU8R8(ConvOvfU8R8),
	ConvOvfI1U4Un(ConvOvfI1U4Un),
	ConvOvfI1U8Un(ConvOvfI1U8Un),
	ConvOvfU1U4Un(ConvOvfU1U4Un),
	ConvOvfU1U8Un(ConvOvfU1U8Un),
	ConvOvfI2U4Un(ConvOvfI2U4Un),
	ConvOvfI2U8Un(ConvOvfI2U8Un),
	ConvOvfU2U4Un(ConvOvfU2U4Un),
	ConvOvfU2U8Un(ConvOvfU2U8Un),
	ConvOvfI4U4Un(ConvOvfI4U4Un),
	ConvOvfI4U8Un(ConvOvfI4U8Un),
	ConvOvfU4U4Un(ConvOvfU4U4Un),
	ConvOvfU4U8Un(ConvOvfU4U8Un),
	ConvOvfI8U4Un(ConvOvfI8U4Un),
	ConvOvfI8U8Un(ConvOvfI8U8Un),
	ConvOvfU8U4Un(ConvOvfU8U4Un),
	ConvOvfU8U8Un(ConvOvfU8U8Un),
	Illegal(Illegal),
	Nop(Nop),
	Arglist(Arglist),
}

impl Inst {
	/// The opcode for the requested width; families without the
	/// requested variant fall back to the one they have.
	pub fn op(&self, short: bool) -> OpCode {
		match (self, short) {
			(Inst::InitLocals1(_), _) => OpCode::InitLocals1Short,
			(Inst::InitLocals2(_), _) => OpCode::InitLocals2Short,
			(Inst::InitLocals3(_), _) => OpCode::InitLocals3Short,
			(Inst::InitLocals4(_), _) => OpCode::InitLocals4Short,
			(Inst::InitLocals(_), false) => OpCode::InitLocals,
			(Inst::InitLocals(_), true) => OpCode::InitLocalsShort,
			(Inst::LdLocI1(_), false) => OpCode::LdLocI1,
			(Inst::LdLocI1(_), true) => OpCode::LdLocI1Short,
			(Inst::LdLocU1(_), false) => OpCode::LdLocU1,
			(Inst::LdLocU1(_), true) => OpCode::LdLocU1Short,
			(Inst::LdLocI2(_), false) => OpCode::LdLocI2,
			(Inst::LdLocI2(_), true) => OpCode::LdLocI2Short,
			(Inst::LdLocU2(_), false) => OpCode::LdLocU2,
			(Inst::LdLocU2(_), true) => OpCode::LdLocU2Short,
			(Inst::LdLocI4(_), false) => OpCode::LdLocI4,
			(Inst::LdLocI4(_), true) => OpCode::LdLocI4Short,
			(Inst::LdLocI8(_), false) => OpCode::LdLocI8,
			(Inst::LdLocI8(_), true) => OpCode::LdLocI8Short,
			(Inst::LdLocAny(_), false) => OpCode::LdLocAny,
			(Inst::LdLocAny(_), true) => OpCode::LdLocAnyShort,
			(Inst::LdLoca(_), false) => OpCode::LdLoca,
			(Inst::LdLoca(_), true) => OpCode::LdLocaShort,
			(Inst::StLocI1(_), false) => OpCode::StLocI1,
			(Inst::StLocI1(_), true) => OpCode::StLocI1Short,
			(Inst::StLocI2(_), false) => OpCode::StLocI2,
			(Inst::StLocI2(_), true) => OpCode::StLocI2Short,
			(Inst::StLocI4(_), false) => OpCode::StLocI4,
			(Inst::StLocI4(_), true) => OpCode::StLocI4Short,
			(Inst::StLocI8(_), false) => OpCode::StLocI8,
			(Inst::StLocI8(_), true) => OpCode::StLocI8Short,
			(Inst::StLocAny(_), false) => OpCode::StLocAny,
			(Inst::StLocAny(_), true) => OpCode::StLocAnyShort,
			(Inst::LdNull(_), false) => OpCode::LdNull,
			(Inst::LdNull(_), true) => OpCode::LdNullShort,
			(Inst::LdcI4I2(_), false) => OpCode::LdcI4I2,
			(Inst::LdcI4I2(_), true) => OpCode::LdcI4I2Short,
			(Inst::LdcI4I4(_), false) => OpCode::LdcI4I4,
			(Inst::LdcI4I4(_), true) => OpCode::LdcI4I4Short,
			(Inst::LdcI8I2(_), false) => OpCode::LdcI8I2,
			(Inst::LdcI8I2(_), true) => OpCode::LdcI8I2Short,
			(Inst::LdcI8I4(_), false) => OpCode::LdcI8I4,
			(Inst::LdcI8I4(_), true) => OpCode::LdcI8I4Short,
			(Inst::LdcI8I8(_), false) => OpCode::LdcI8I8,
			(Inst::LdcI8I8(_), true) => OpCode::LdcI8I8Short,
			(Inst::LdStr(_), false) => OpCode::LdStr,
			(Inst::LdStr(_), true) => OpCode::LdStrShort,
			(Inst::LdToken(_), false) => OpCode::LdToken,
			(Inst::LdToken(_), true) => OpCode::LdTokenShort,
			(Inst::Br(_), false) => OpCode::Br,
			(Inst::Br(_), true) => OpCode::BrShort,
			(Inst::BrTrueI4(_), false) => OpCode::BrTrueI4,
			(Inst::BrTrueI4(_), true) => OpCode::BrTrueI4Short,
			(Inst::BrFalseI4(_), false) => OpCode::BrFalseI4,
			(Inst::BrFalseI4(_), true) => OpCode::BrFalseI4Short,
			(Inst::BrTrueI8(_), false) => OpCode::BrTrueI8,
			(Inst::BrTrueI8(_), true) => OpCode::BrTrueI8Short,
			(Inst::BrFalseI8(_), false) => OpCode::BrFalseI8,
			(Inst::BrFalseI8(_), true) => OpCode::BrFalseI8Short,
			(Inst::BeqI4(_), false) => OpCode::BeqI4,
			(Inst::BeqI4(_), true) => OpCode::BeqI4Short,
			(Inst::BeqI8(_), false) => OpCode::BeqI8,
			(Inst::BeqI8(_), true) => OpCode::BeqI8Short,
			(Inst::BeqR4(_), _) => OpCode::BeqR4,
			(Inst::BeqR8(_), _) => OpCode::BeqR8,
			(Inst::BgeI4(_), false) => OpCode::BgeI4,
			(Inst::BgeI4(_), true) => OpCode::BgeI4Short,
			(Inst::BgeI8(_), false) => OpCode::BgeI8,
			(Inst::BgeI8(_), true) => OpCode::BgeI8Short,
			(Inst::BgeR4(_), _) => OpCode::BgeR4,
			(Inst::BgeR8(_), _) => OpCode::BgeR8,
			(Inst::BgtI4(_), false) => OpCode::BgtI4,
			(Inst::BgtI4(_), true) => OpCode::BgtI4Short,
			(Inst::BgtI8(_), false) => OpCode::BgtI8,
			(Inst::BgtI8(_), true) => OpCode::BgtI8Short,
			(Inst::BgtR4(_), _) => OpCode::BgtR4,
			(Inst::BgtR8(_), _) => OpCode::BgtR8,
			(Inst::BleI4(_), false) => OpCode::BleI4,
			(Inst::BleI4(_), true) => OpCode::BleI4Short,
			(Inst::BleI8(_), false) => OpCode::BleI8,
			(Inst::BleI8(_), true) => OpCode::BleI8Short,
			(Inst::BleR4(_), _) => OpCode::BleR4,
			(Inst::BleR8(_), _) => OpCode::BleR8,
			(Inst::BltI4(_), false) => OpCode::BltI4,
			(Inst::BltI4(_), true) => OpCode::BltI4Short,
			(Inst::BltI8(_), false) => OpCode::BltI8,
			(Inst::BltI8(_), true) => OpCode::BltI8Short,
			(Inst::BltR4(_), _) => OpCode::BltR4,
			(Inst::BltR8(_), _) => OpCode::BltR8,
			(Inst::BneUnI4(_), false) => OpCode::BneUnI4,
			(Inst::BneUnI4(_), true) => OpCode::BneUnI4Short,
			(Inst::BneUnI8(_), false) => OpCode::BneUnI8,
			(Inst::BneUnI8(_), true) => OpCode::BneUnI8Short,
			(Inst::BneUnR4(_), _) => OpCode::BneUnR4,
			(Inst::BneUnR8(_), _) => OpCode::BneUnR8,
			(Inst::BgeUnI4(_), false) => OpCode::BgeUnI4,
			(Inst::BgeUnI4(_), true) => OpCode::BgeUnI4Short,
			(Inst::BgeUnI8(_), false) => OpCode::BgeUnI8,
			(Inst::BgeUnI8(_), true) => OpCode::BgeUnI8Short,
			(Inst::BgeUnR4(_), _) => OpCode::BgeUnR4,
			(Inst::BgeUnR8(_), _) => OpCode::BgeUnR8,
			(Inst::BgtUnI4(_), false) => OpCode::BgtUnI4,
			(Inst::BgtUnI4(_), true) => OpCode::BgtUnI4Short,
			(Inst::BgtUnI8(_), false) => OpCode::BgtUnI8,
			(Inst::BgtUnI8(_), true) => OpCode::BgtUnI8Short,
			(Inst::BgtUnR4(_), _) => OpCode::BgtUnR4,
			(Inst::BgtUnR8(_), _) => OpCode::BgtUnR8,
			(Inst::BleUnI4(_), false) => OpCode::BleUnI4,
			(Inst::BleUnI4(_), true) => OpCode::BleUnI4Short,
			(Inst::BleUnI8(_), false) => OpCode::BleUnI8,
			(Inst::BleUnI8(_), true) => OpCode::BleUnI8Short,
			(Inst::BleUnR4(_), _) => OpCode::BleUnR4,
			(Inst::BleUnR8(_), _) => OpCode::BleUnR8,
			(Inst::BltUnI4(_), false) => OpCode::BltUnI4,
			(Inst::BltUnI4(_), true) => OpCode::BltUnI4Short,
			(Inst::BltUnI8(_), false) => OpCode::BltUnI8,
			(Inst::BltUnI8(_), true) => OpCode::BltUnI8Short,
			(Inst::BltUnR4(_), _) => OpCode::BltUnR4,
			(Inst::BltUnR8(_), _) => OpCode::BltUnR8,
			(Inst::Switch(_), _) => OpCode::Switch,
			(Inst::AddI4(_), false) => OpCode::AddI4,
			(Inst::AddI4(_), true) => OpCode::AddI4Short,
			(Inst::AddI8(_), false) => OpCode::AddI8,
			(Inst::AddI8(_), true) => OpCode::AddI8Short,
			(Inst::AddR4(_), false) => OpCode::AddR4,
			(Inst::AddR4(_), true) => OpCode::AddR4Short,
			(Inst::AddR8(_), false) => OpCode::AddR8,
			(Inst::AddR8(_), true) => OpCode::AddR8Short,
			(Inst::SubI4(_), false) => OpCode::SubI4,
			(Inst::SubI4(_), true) => OpCode::SubI4Short,
			(Inst::SubI8(_), false) => OpCode::SubI8,
			(Inst::SubI8(_), true) => OpCode::SubI8Short,
			(Inst::SubR4(_), false) => OpCode::SubR4,
			(Inst::SubR4(_), true) => OpCode::SubR4Short,
			(Inst::SubR8(_), false) => OpCode::SubR8,
			(Inst::SubR8(_), true) => OpCode::SubR8Short,
			(Inst::MulI4(_), false) => OpCode::MulI4,
			(Inst::MulI4(_), true) => OpCode::MulI4Short,
			(Inst::MulI8(_), false) => OpCode::MulI8,
			(Inst::MulI8(_), true) => OpCode::MulI8Short,
			(Inst::MulR4(_), false) => OpCode::MulR4,
			(Inst::MulR4(_), true) => OpCode::MulR4Short,
			(Inst::MulR8(_), false) => OpCode::MulR8,
			(Inst::MulR8(_), true) => OpCode::MulR8Short,
			(Inst::DivI4(_), false) => OpCode::DivI4,
			(Inst::DivI4(_), true) => OpCode::DivI4Short,
			(Inst::DivI8(_), false) => OpCode::DivI8,
			(Inst::DivI8(_), true) => OpCode::DivI8Short,
			(Inst::DivR4(_), false) => OpCode::DivR4,
			(Inst::DivR4(_), true) => OpCode::DivR4Short,
			(Inst::DivR8(_), false) => OpCode::DivR8,
			(Inst::DivR8(_), true) => OpCode::DivR8Short,
			(Inst::RemI4(_), false) => OpCode::RemI4,
			(Inst::RemI4(_), true) => OpCode::RemI4Short,
			(Inst::RemI8(_), false) => OpCode::RemI8,
			(Inst::RemI8(_), true) => OpCode::RemI8Short,
			(Inst::RemR4(_), false) => OpCode::RemR4,
			(Inst::RemR4(_), true) => OpCode::RemR4Short,
			(Inst::RemR8(_), false) => OpCode::RemR8,
			(Inst::RemR8(_), true) => OpCode::RemR8Short,
			(Inst::DivUnI4(_), false) => OpCode::DivUnI4,
			(Inst::DivUnI4(_), true) => OpCode::DivUnI4Short,
			(Inst::DivUnI8(_), false) => OpCode::DivUnI8,
			(Inst::DivUnI8(_), true) => OpCode::DivUnI8Short,
			(Inst::RemUnI4(_), false) => OpCode::RemUnI4,
			(Inst::RemUnI4(_), true) => OpCode::RemUnI4Short,
			(Inst::RemUnI8(_), false) => OpCode::RemUnI8,
			(Inst::RemUnI8(_), true) => OpCode::RemUnI8Short,
			(Inst::AndI4(_), false) => OpCode::AndI4,
			(Inst::AndI4(_), true) => OpCode::AndI4Short,
			(Inst::AndI8(_), false) => OpCode::AndI8,
			(Inst::AndI8(_), true) => OpCode::AndI8Short,
			(Inst::OrI4(_), false) => OpCode::OrI4,
			(Inst::OrI4(_), true) => OpCode::OrI4Short,
			(Inst::OrI8(_), false) => OpCode::OrI8,
			(Inst::OrI8(_), true) => OpCode::OrI8Short,
			(Inst::XorI4(_), false) => OpCode::XorI4,
			(Inst::XorI4(_), true) => OpCode::XorI4Short,
			(Inst::XorI8(_), false) => OpCode::XorI8,
			(Inst::XorI8(_), true) => OpCode::XorI8Short,
			(Inst::ShlI4(_), false) => OpCode::ShlI4,
			(Inst::ShlI4(_), true) => OpCode::ShlI4Short,
			(Inst::ShlI8(_), _) => OpCode::ShlI8,
			(Inst::ShrI4(_), false) => OpCode::ShrI4,
			(Inst::ShrI4(_), true) => OpCode::ShrI4Short,
			(Inst::ShrI8(_), _) => OpCode::ShrI8,
			(Inst::ShrUnI4(_), false) => OpCode::ShrUnI4,
			(Inst::ShrUnI4(_), true) => OpCode::ShrUnI4Short,
			(Inst::ShrUnI8(_), _) => OpCode::ShrUnI8,
			(Inst::NegI4(_), false) => OpCode::NegI4,
			(Inst::NegI4(_), true) => OpCode::NegI4Short,
			(Inst::NegI8(_), false) => OpCode::NegI8,
			(Inst::NegI8(_), true) => OpCode::NegI8Short,
			(Inst::NegR4(_), false) => OpCode::NegR4,
			(Inst::NegR4(_), true) => OpCode::NegR4Short,
			(Inst::NegR8(_), false) => OpCode::NegR8,
			(Inst::NegR8(_), true) => OpCode::NegR8Short,
			(Inst::NotI4(_), false) => OpCode::NotI4,
			(Inst::NotI4(_), true) => OpCode::NotI4Short,
			(Inst::NotI8(_), false) => OpCode::NotI8,
			(Inst::NotI8(_), true) => OpCode::NotI8Short,
			(Inst::ConvI1I4(_), false) => OpCode::ConvI1I4,
			(Inst::ConvI1I4(_), true) => OpCode::ConvI1I4Short,
			(Inst::ConvI1I8(_), false) => OpCode::ConvI1I8,
			(Inst::ConvI1I8(_), true) => OpCode::ConvI1I8Short,
			(Inst::ConvI1R4(_), false) => OpCode::ConvI1R4,
			(Inst::ConvI1R4(_), true) => OpCode::ConvI1R4Short,
			(Inst::ConvI1R8(_), false) => OpCode::ConvI1R8,
			(Inst::ConvI1R8(_), true) => OpCode::ConvI1R8Short,
			(Inst::ConvU1I4(_), false) => OpCode::ConvU1I4,
			(Inst::ConvU1I4(_), true) => OpCode::ConvU1I4Short,
			(Inst::ConvU1I8(_), false) => OpCode::ConvU1I8,
			(Inst::ConvU1I8(_), true) => OpCode::ConvU1I8Short,
			(Inst::ConvU1R4(_), false) => OpCode::ConvU1R4,
			(Inst::ConvU1R4(_), true) => OpCode::ConvU1R4Short,
			(Inst::ConvU1R8(_), false) => OpCode::ConvU1R8,
			(Inst::ConvU1R8(_), true) => OpCode::ConvU1R8Short,
			(Inst::ConvI2I4(_), false) => OpCode::ConvI2I4,
			(Inst::ConvI2I4(_), true) => OpCode::ConvI2I4Short,
			(Inst::ConvI2I8(_), false) => OpCode::ConvI2I8,
			(Inst::ConvI2I8(_), true) => OpCode::ConvI2I8Short,
			(Inst::ConvI2R4(_), false) => OpCode::ConvI2R4,
			(Inst::ConvI2R4(_), true) => OpCode::ConvI2R4Short,
			(Inst::ConvI2R8(_), false) => OpCode::ConvI2R8,
			(Inst::ConvI2R8(_), true) => OpCode::ConvI2R8Short,
			(Inst::ConvU2I4(_), false) => OpCode::ConvU2I4,
			(Inst::ConvU2I4(_), true) => OpCode::ConvU2I4Short,
			(Inst::ConvU2I8(_), false) => OpCode::ConvU2I8,
			(Inst::ConvU2I8(_), true) => OpCode::ConvU2I8Short,
			(Inst::ConvU2R4(_), false) => OpCode::ConvU2R4,
			(Inst::ConvU2R4(_), true) => OpCode::ConvU2R4Short,
			(Inst::ConvU2R8(_), false) => OpCode::ConvU2R8,
			(Inst::ConvU2R8(_), true) => OpCode::ConvU2R8Short,
			(Inst::ConvI4I8(_), false) => OpCode::ConvI4I8,
			(Inst::ConvI4I8(_), true) => OpCode::ConvI4I8Short,
			(Inst::ConvI4R4(_), false) => OpCode::ConvI4R4,
			(Inst::ConvI4R4(_), true) => OpCode::ConvI4R4Short,
			(Inst::ConvI4R8(_), false) => OpCode::ConvI4R8,
			(Inst::ConvI4R8(_), true) => OpCode::ConvI4R8Short,
			(Inst::ConvU4I8(_), false) => OpCode::ConvU4I8,
			(Inst::ConvU4I8(_), true) => OpCode::ConvU4I8Short,
			(Inst::ConvU4R4(_), false) => OpCode::ConvU4R4,
			(Inst::ConvU4R4(_), true) => OpCode::ConvU4R4Short,
			(Inst::ConvU4R8(_), false) => OpCode::ConvU4R8,
			(Inst::ConvU4R8(_), true) => OpCode::ConvU4R8Short,
			(Inst::ConvI8I4(_), false) => OpCode::ConvI8I4,
			(Inst::ConvI8I4(_), true) => OpCode::ConvI8I4Short,
			(Inst::ConvI8U4(_), false) => OpCode::ConvI8U4,
			(Inst::ConvI8U4(_), true) => OpCode::ConvI8U4Short,
			(Inst::ConvI8R4(_), false) => OpCode::ConvI8R4,
			(Inst::ConvI8R4(_), true) => OpCode::ConvI8R4Short,
			(Inst::ConvI8R8(_), false) => OpCode::ConvI8R8,
			(Inst::ConvI8R8(_), true) => OpCode::ConvI8R8Short,
			(Inst::ConvU8I4(_), false) => OpCode::ConvU8I4,
			(Inst::ConvU8I4(_), true) => OpCode::ConvU8I4Short,
			(Inst::ConvU8U4(_), false) => OpCode::ConvU8U4,
			(Inst::ConvU8U4(_), true) => OpCode::ConvU8U4Short,
			(Inst::ConvU8R4(_), false) => OpCode::ConvU8R4,
			(Inst::ConvU8R4(_), true) => OpCode::ConvU8R4Short,
			(Inst::ConvU8R8(_), false) => OpCode::ConvU8R8,
			(Inst::ConvU8R8(_), true) => OpCode::ConvU8R8Short,
			(Inst::ConvR4I4(_), false) => OpCode::ConvR4I4,
			(Inst::ConvR4I4(_), true) => OpCode::ConvR4I4Short,
			(Inst::ConvR4I8(_), false) => OpCode::ConvR4I8,
			(Inst::ConvR4I8(_), true) => OpCode::ConvR4I8Short,
			(Inst::ConvR4R8(_), false) => OpCode::ConvR4R8,
			(Inst::ConvR4R8(_), true) => OpCode::ConvR4R8Short,
			(Inst::ConvR4U4(_), false) => OpCode::ConvR4U4,
			(Inst::ConvR4U4(_), true) => OpCode::ConvR4U4Short,
			(Inst::ConvR4U8(_), false) => OpCode::ConvR4U8,
			(Inst::ConvR4U8(_), true) => OpCode::ConvR4U8Short,
			(Inst::ConvR8I4(_), false) => OpCode::ConvR8I4,
			(Inst::ConvR8I4(_), true) => OpCode::ConvR8I4Short,
			(Inst::ConvR8I8(_), false) => OpCode::ConvR8I8,
			(Inst::ConvR8I8(_), true) => OpCode::ConvR8I8Short,
			(Inst::ConvR8R4(_), false) => OpCode::ConvR8R4,
			(Inst::ConvR8R4(_), true) => OpCode::ConvR8R4Short,
			(Inst::ConvR8U4(_), false) => OpCode::ConvR8U4,
			(Inst::ConvR8U4(_), true) => OpCode::ConvR8U4Short,
			(Inst::ConvR8U8(_), false) => OpCode::ConvR8U8,
			(Inst::ConvR8U8(_), true) => OpCode::ConvR8U8Short,
			(Inst::CkFiniteR4(_), _) => OpCode::CkFiniteR4,
			(Inst::CkFiniteR8(_), _) => OpCode::CkFiniteR8,
			(Inst::CeqI4(_), false) => OpCode::CeqI4,
			(Inst::CeqI4(_), true) => OpCode::CeqI4Short,
			(Inst::CeqI8(_), false) => OpCode::CeqI8,
			(Inst::CeqI8(_), true) => OpCode::CeqI8Short,
			(Inst::CeqR4(_), false) => OpCode::CeqR4,
			(Inst::CeqR4(_), true) => OpCode::CeqR4Short,
			(Inst::CeqR8(_), false) => OpCode::CeqR8,
			(Inst::CeqR8(_), true) => OpCode::CeqR8Short,
			(Inst::CgtI4(_), false) => OpCode::CgtI4,
			(Inst::CgtI4(_), true) => OpCode::CgtI4Short,
			(Inst::CgtI8(_), false) => OpCode::CgtI8,
			(Inst::CgtI8(_), true) => OpCode::CgtI8Short,
			(Inst::CgtR4(_), _) => OpCode::CgtR4,
			(Inst::CgtR8(_), _) => OpCode::CgtR8,
			(Inst::CgtUnI4(_), false) => OpCode::CgtUnI4,
			(Inst::CgtUnI4(_), true) => OpCode::CgtUnI4Short,
			(Inst::CgtUnI8(_), false) => OpCode::CgtUnI8,
			(Inst::CgtUnI8(_), true) => OpCode::CgtUnI8Short,
			(Inst::CgtUnR4(_), _) => OpCode::CgtUnR4,
			(Inst::CgtUnR8(_), _) => OpCode::CgtUnR8,
			(Inst::CltI4(_), false) => OpCode::CltI4,
			(Inst::CltI4(_), true) => OpCode::CltI4Short,
			(Inst::CltI8(_), false) => OpCode::CltI8,
			(Inst::CltI8(_), true) => OpCode::CltI8Short,
			(Inst::CltR4(_), _) => OpCode::CltR4,
			(Inst::CltR8(_), _) => OpCode::CltR8,
			(Inst::CltUnI4(_), false) => OpCode::CltUnI4,
			(Inst::CltUnI4(_), true) => OpCode::CltUnI4Short,
			(Inst::CltUnI8(_), false) => OpCode::CltUnI8,
			(Inst::CltUnI8(_), true) => OpCode::CltUnI8Short,
			(Inst::CltUnR4(_), _) => OpCode::CltUnR4,
			(Inst::CltUnR8(_), _) => OpCode::CltUnR8,
			(Inst::LdIndI1(_), false) => OpCode::LdIndI1,
			(Inst::LdIndI1(_), true) => OpCode::LdIndI1Short,
			(Inst::LdIndU1(_), false) => OpCode::LdIndU1,
			(Inst::LdIndU1(_), true) => OpCode::LdIndU1Short,
			(Inst::LdIndI2(_), false) => OpCode::LdIndI2,
			(Inst::LdIndI2(_), true) => OpCode::LdIndI2Short,
			(Inst::LdIndU2(_), false) => OpCode::LdIndU2,
			(Inst::LdIndU2(_), true) => OpCode::LdIndU2Short,
			(Inst::LdIndI4(_), false) => OpCode::LdIndI4,
			(Inst::LdIndI4(_), true) => OpCode::LdIndI4Short,
			(Inst::LdIndI8(_), false) => OpCode::LdIndI8,
			(Inst::LdIndI8(_), true) => OpCode::LdIndI8Short,
			(Inst::LdIndRef(_), false) => OpCode::LdIndRef,
			(Inst::LdIndRef(_), true) => OpCode::LdIndRefShort,
			(Inst::StIndI1(_), false) => OpCode::StIndI1,
			(Inst::StIndI1(_), true) => OpCode::StIndI1Short,
			(Inst::StIndI2(_), false) => OpCode::StIndI2,
			(Inst::StIndI2(_), true) => OpCode::StIndI2Short,
			(Inst::StIndI4(_), false) => OpCode::StIndI4,
			(Inst::StIndI4(_), true) => OpCode::StIndI4Short,
			(Inst::StIndI8(_), false) => OpCode::StIndI8,
			(Inst::StIndI8(_), true) => OpCode::StIndI8Short,
			(Inst::StIndRef(_), false) => OpCode::StIndRef,
			(Inst::StIndRef(_), true) => OpCode::StIndRefShort,
			(Inst::LocAlloc(_), _) => OpCode::LocAlloc,
			(Inst::InitBlk(_), _) => OpCode::InitBlk,
			(Inst::CpBlk(_), _) => OpCode::CpBlk,
			(Inst::GetEnumLongHashCode(_), _) => OpCode::GetEnumLongHashCode,
			(Inst::InitObjI1(_), false) => OpCode::InitObjI1,
			(Inst::InitObjI1(_), true) => OpCode::InitObjI1Short,
			(Inst::InitObjI2(_), false) => OpCode::InitObjI2,
			(Inst::InitObjI2(_), true) => OpCode::InitObjI2Short,
			(Inst::InitObjI4(_), false) => OpCode::InitObjI4,
			(Inst::InitObjI4(_), true) => OpCode::InitObjI4Short,
			(Inst::InitObjI8(_), false) => OpCode::InitObjI8,
			(Inst::InitObjI8(_), true) => OpCode::InitObjI8Short,
			(Inst::InitObjAny(_), false) => OpCode::InitObjAny,
			(Inst::InitObjAny(_), true) => OpCode::InitObjAnyShort,
			(Inst::CpObjI1(_), false) => OpCode::CpObjI1,
			(Inst::CpObjI1(_), true) => OpCode::CpObjI1Short,
			(Inst::CpObjI2(_), false) => OpCode::CpObjI2,
			(Inst::CpObjI2(_), true) => OpCode::CpObjI2Short,
			(Inst::CpObjI4(_), false) => OpCode::CpObjI4,
			(Inst::CpObjI4(_), true) => OpCode::CpObjI4Short,
			(Inst::CpObjI8(_), false) => OpCode::CpObjI8,
			(Inst::CpObjI8(_), true) => OpCode::CpObjI8Short,
			(Inst::CpObjAny(_), false) => OpCode::CpObjAny,
			(Inst::CpObjAny(_), true) => OpCode::CpObjAnyShort,
			(Inst::LdObjAny(_), false) => OpCode::LdObjAny,
			(Inst::LdObjAny(_), true) => OpCode::LdObjAnyShort,
			(Inst::StObjAny(_), false) => OpCode::StObjAny,
			(Inst::StObjAny(_), true) => OpCode::StObjAnyShort,
			(Inst::CastClass(_), false) => OpCode::CastClass,
			(Inst::CastClass(_), true) => OpCode::CastClassShort,
			(Inst::IsInst(_), false) => OpCode::IsInst,
			(Inst::IsInst(_), true) => OpCode::IsInstShort,
			(Inst::Box(_), false) => OpCode::Box,
			(Inst::Box(_), true) => OpCode::BoxShort,
			(Inst::Unbox(_), false) => OpCode::Unbox,
			(Inst::Unbox(_), true) => OpCode::UnboxShort,
			(Inst::UnboxAny(_), false) => OpCode::UnboxAny,
			(Inst::UnboxAny(_), true) => OpCode::UnboxAnyShort,
			(Inst::NewArr(_), false) => OpCode::NewArr,
			(Inst::NewArr(_), true) => OpCode::NewArrShort,
			(Inst::LdLen(_), false) => OpCode::LdLen,
			(Inst::LdLen(_), true) => OpCode::LdLenShort,
			(Inst::Ldelema(_), false) => OpCode::Ldelema,
			(Inst::Ldelema(_), true) => OpCode::LdelemaShort,
			(Inst::LdelemaReadOnly(_), _) => OpCode::LdelemaReadOnly,
			(Inst::LdelemI1(_), false) => OpCode::LdelemI1,
			(Inst::LdelemI1(_), true) => OpCode::LdelemI1Short,
			(Inst::LdelemU1(_), false) => OpCode::LdelemU1,
			(Inst::LdelemU1(_), true) => OpCode::LdelemU1Short,
			(Inst::LdelemI2(_), false) => OpCode::LdelemI2,
			(Inst::LdelemI2(_), true) => OpCode::LdelemI2Short,
			(Inst::LdelemU2(_), false) => OpCode::LdelemU2,
			(Inst::LdelemU2(_), true) => OpCode::LdelemU2Short,
			(Inst::LdelemI4(_), false) => OpCode::LdelemI4,
			(Inst::LdelemI4(_), true) => OpCode::LdelemI4Short,
			(Inst::LdelemI8(_), false) => OpCode::LdelemI8,
			(Inst::LdelemI8(_), true) => OpCode::LdelemI8Short,
			(Inst::LdelemRef(_), false) => OpCode::LdelemRef,
			(Inst::LdelemRef(_), true) => OpCode::LdelemRefShort,
			(Inst::LdelemAny(_), false) => OpCode::LdelemAny,
			(Inst::LdelemAny(_), true) => OpCode::LdelemAnyShort,
			(Inst::StelemI1(_), false) => OpCode::StelemI1,
			(Inst::StelemI1(_), true) => OpCode::StelemI1Short,
			(Inst::StelemI2(_), false) => OpCode::StelemI2,
			(Inst::StelemI2(_), true) => OpCode::StelemI2Short,
			(Inst::StelemI4(_), false) => OpCode::StelemI4,
			(Inst::StelemI4(_), true) => OpCode::StelemI4Short,
			(Inst::StelemI8(_), false) => OpCode::StelemI8,
			(Inst::StelemI8(_), true) => OpCode::StelemI8Short,
			(Inst::StelemRef(_), false) => OpCode::StelemRef,
			(Inst::StelemRef(_), true) => OpCode::StelemRefShort,
			(Inst::StelemAny(_), false) => OpCode::StelemAny,
			(Inst::StelemAny(_), true) => OpCode::StelemAnyShort,
			(Inst::Ldftn(_), false) => OpCode::Ldftn,
			(Inst::Ldftn(_), true) => OpCode::LdftnShort,
			(Inst::Ldvirtftn(_), false) => OpCode::Ldvirtftn,
			(Inst::Ldvirtftn(_), true) => OpCode::LdvirtftnShort,
			(Inst::LdfldI1(_), false) => OpCode::LdfldI1,
			(Inst::LdfldI1(_), true) => OpCode::LdfldI1Short,
			(Inst::LdfldU1(_), false) => OpCode::LdfldU1,
			(Inst::LdfldU1(_), true) => OpCode::LdfldU1Short,
			(Inst::LdfldI2(_), false) => OpCode::LdfldI2,
			(Inst::LdfldI2(_), true) => OpCode::LdfldI2Short,
			(Inst::LdfldU2(_), false) => OpCode::LdfldU2,
			(Inst::LdfldU2(_), true) => OpCode::LdfldU2Short,
			(Inst::LdfldI4(_), false) => OpCode::LdfldI4,
			(Inst::LdfldI4(_), true) => OpCode::LdfldI4Short,
			(Inst::LdfldI8(_), false) => OpCode::LdfldI8,
			(Inst::LdfldI8(_), true) => OpCode::LdfldI8Short,
			(Inst::LdfldAny(_), false) => OpCode::LdfldAny,
			(Inst::LdfldAny(_), true) => OpCode::LdfldAnyShort,
			(Inst::LdvfldI1(_), false) => OpCode::LdvfldI1,
			(Inst::LdvfldI1(_), true) => OpCode::LdvfldI1Short,
			(Inst::LdvfldU1(_), false) => OpCode::LdvfldU1,
			(Inst::LdvfldU1(_), true) => OpCode::LdvfldU1Short,
			(Inst::LdvfldI2(_), false) => OpCode::LdvfldI2,
			(Inst::LdvfldI2(_), true) => OpCode::LdvfldI2Short,
			(Inst::LdvfldU2(_), false) => OpCode::LdvfldU2,
			(Inst::LdvfldU2(_), true) => OpCode::LdvfldU2Short,
			(Inst::LdvfldI4(_), false) => OpCode::LdvfldI4,
			(Inst::LdvfldI4(_), true) => OpCode::LdvfldI4Short,
			(Inst::LdvfldI8(_), false) => OpCode::LdvfldI8,
			(Inst::LdvfldI8(_), true) => OpCode::LdvfldI8Short,
			(Inst::LdvfldAny(_), false) => OpCode::LdvfldAny,
			(Inst::LdvfldAny(_), true) => OpCode::LdvfldAnyShort,
			(Inst::Ldflda(_), false) => OpCode::Ldflda,
			(Inst::Ldflda(_), true) => OpCode::LdfldaShort,
			(Inst::StfldI1(_), false) => OpCode::StfldI1,
			(Inst::StfldI1(_), true) => OpCode::StfldI1Short,
			(Inst::StfldI2(_), false) => OpCode::StfldI2,
			(Inst::StfldI2(_), true) => OpCode::StfldI2Short,
			(Inst::StfldI4(_), false) => OpCode::StfldI4,
			(Inst::StfldI4(_), true) => OpCode::StfldI4Short,
			(Inst::StfldI8(_), false) => OpCode::StfldI8,
			(Inst::StfldI8(_), true) => OpCode::StfldI8Short,
			(Inst::StfldAny(_), false) => OpCode::StfldAny,
			(Inst::StfldAny(_), true) => OpCode::StfldAnyShort,
			(Inst::LdfldI1Large(_), _) => OpCode::LdfldI1Large,
			(Inst::LdfldU1Large(_), _) => OpCode::LdfldU1Large,
			(Inst::LdfldI2Large(_), _) => OpCode::LdfldI2Large,
			(Inst::LdfldU2Large(_), _) => OpCode::LdfldU2Large,
			(Inst::LdfldI4Large(_), _) => OpCode::LdfldI4Large,
			(Inst::LdfldI8Large(_), _) => OpCode::LdfldI8Large,
			(Inst::LdfldAnyLarge(_), _) => OpCode::LdfldAnyLarge,
			(Inst::LdfldaLarge(_), _) => OpCode::LdfldaLarge,
			(Inst::StfldI1Large(_), _) => OpCode::StfldI1Large,
			(Inst::StfldI2Large(_), _) => OpCode::StfldI2Large,
			(Inst::StfldI4Large(_), _) => OpCode::StfldI4Large,
			(Inst::StfldI8Large(_), _) => OpCode::StfldI8Large,
			(Inst::StfldAnyLarge(_), _) => OpCode::StfldAnyLarge,
			(Inst::LdfldI2Unaligned(_), _) => OpCode::LdfldI2Unaligned,
			(Inst::LdfldU2Unaligned(_), _) => OpCode::LdfldU2Unaligned,
			(Inst::LdfldI4Unaligned(_), _) => OpCode::LdfldI4Unaligned,
			(Inst::LdfldI8Unaligned(_), _) => OpCode::LdfldI8Unaligned,
			(Inst::StfldI2Unaligned(_), _) => OpCode::StfldI2Unaligned,
			(Inst::StfldI4Unaligned(_), _) => OpCode::StfldI4Unaligned,
			(Inst::StfldI8Unaligned(_), _) => OpCode::StfldI8Unaligned,
			(Inst::LdIndI2Unaligned(_), _) => OpCode::LdIndI2Unaligned,
			(Inst::LdIndU2Unaligned(_), _) => OpCode::LdIndU2Unaligned,
			(Inst::LdIndI4Unaligned(_), _) => OpCode::LdIndI4Unaligned,
			(Inst::LdIndI8Unaligned(_), _) => OpCode::LdIndI8Unaligned,
			(Inst::StIndI2Unaligned(_), _) => OpCode::StIndI2Unaligned,
			(Inst::StIndI4Unaligned(_), _) => OpCode::StIndI4Unaligned,
			(Inst::StIndI8Unaligned(_), _) => OpCode::StIndI8Unaligned,
			(Inst::LdsfldI1(_), false) => OpCode::LdsfldI1,
			(Inst::LdsfldI1(_), true) => OpCode::LdsfldI1Short,
			(Inst::LdsfldU1(_), false) => OpCode::LdsfldU1,
			(Inst::LdsfldU1(_), true) => OpCode::LdsfldU1Short,
			(Inst::LdsfldI2(_), false) => OpCode::LdsfldI2,
			(Inst::LdsfldI2(_), true) => OpCode::LdsfldI2Short,
			(Inst::LdsfldU2(_), false) => OpCode::LdsfldU2,
			(Inst::LdsfldU2(_), true) => OpCode::LdsfldU2Short,
			(Inst::LdsfldI4(_), false) => OpCode::LdsfldI4,
			(Inst::LdsfldI4(_), true) => OpCode::LdsfldI4Short,
			(Inst::LdsfldI8(_), false) => OpCode::LdsfldI8,
			(Inst::LdsfldI8(_), true) => OpCode::LdsfldI8Short,
			(Inst::LdsfldAny(_), false) => OpCode::LdsfldAny,
			(Inst::LdsfldAny(_), true) => OpCode::LdsfldAnyShort,
			(Inst::Ldsflda(_), false) => OpCode::Ldsflda,
			(Inst::Ldsflda(_), true) => OpCode::LdsfldaShort,
			(Inst::LdsfldRvaData(_), false) => OpCode::LdsfldRvaData,
			(Inst::LdsfldRvaData(_), true) => OpCode::LdsfldRvaDataShort,
			(Inst::StsfldI1(_), false) => OpCode::StsfldI1,
			(Inst::StsfldI1(_), true) => OpCode::StsfldI1Short,
			(Inst::StsfldI2(_), false) => OpCode::StsfldI2,
			(Inst::StsfldI2(_), true) => OpCode::StsfldI2Short,
			(Inst::StsfldI4(_), false) => OpCode::StsfldI4,
			(Inst::StsfldI4(_), true) => OpCode::StsfldI4Short,
			(Inst::StsfldI8(_), false) => OpCode::StsfldI8,
			(Inst::StsfldI8(_), true) => OpCode::StsfldI8Short,
			(Inst::StsfldAny(_), false) => OpCode::StsfldAny,
			(Inst::StsfldAny(_), true) => OpCode::StsfldAnyShort,
			(Inst::RetVoid(_), false) => OpCode::RetVoid,
			(Inst::RetVoid(_), true) => OpCode::RetVoidShort,
			(Inst::RetI4(_), false) => OpCode::RetI4,
			(Inst::RetI4(_), true) => OpCode::RetI4Short,
			(Inst::RetI8(_), false) => OpCode::RetI8,
			(Inst::RetI8(_), true) => OpCode::RetI8Short,
			(Inst::RetAny(_), false) => OpCode::RetAny,
			(Inst::RetAny(_), true) => OpCode::RetAnyShort,
			(Inst::CallInterp(_), false) => OpCode::CallInterp,
			(Inst::CallInterp(_), true) => OpCode::CallInterpShort,
			(Inst::CallVirtInterp(_), false) => OpCode::CallVirtInterp,
			(Inst::CallVirtInterp(_), true) => OpCode::CallVirtInterpShort,
			(Inst::CallInternalCall(_), false) => OpCode::CallInternalCall,
			(Inst::CallInternalCall(_), true) => OpCode::CallInternalCallShort,
			(Inst::CallIntrinsic(_), false) => OpCode::CallIntrinsic,
			(Inst::CallIntrinsic(_), true) => OpCode::CallIntrinsicShort,
			(Inst::CallPInvoke(_), false) => OpCode::CallPInvoke,
			(Inst::CallPInvoke(_), true) => OpCode::CallPInvokeShort,
			(Inst::CallRuntimeImplemented(_), false) => OpCode::CallRuntimeImplemented,
			(Inst::CallRuntimeImplemented(_), true) => OpCode::CallRuntimeImplementedShort,
			(Inst::CalliInterp(_), false) => OpCode::CalliInterp,
			(Inst::CalliInterp(_), true) => OpCode::CalliInterpShort,
			(Inst::NewObjInterp(_), false) => OpCode::NewObjInterp,
			(Inst::NewObjInterp(_), true) => OpCode::NewObjInterpShort,
			(Inst::NewValueTypeInterp(_), false) => OpCode::NewValueTypeInterp,
			(Inst::NewValueTypeInterp(_), true) => OpCode::NewValueTypeInterpShort,
			(Inst::NewObjInternalCall(_), false) => OpCode::NewObjInternalCall,
			(Inst::NewObjInternalCall(_), true) => OpCode::NewObjInternalCallShort,
			(Inst::NewObjIntrinsic(_), false) => OpCode::NewObjIntrinsic,
			(Inst::NewObjIntrinsic(_), true) => OpCode::NewObjIntrinsicShort,
			(Inst::Throw(_), false) => OpCode::Throw,
			(Inst::Throw(_), true) => OpCode::ThrowShort,
			(Inst::Rethrow(_), false) => OpCode::Rethrow,
			(Inst::Rethrow(_), true) => OpCode::RethrowShort,
			(Inst::LeaveTryWithFinally(_), false) => OpCode::LeaveTryWithFinally,
			(Inst::LeaveTryWithFinally(_), true) => OpCode::LeaveTryWithFinallyShort,
			(Inst::LeaveCatchWithFinally(_), false) => OpCode::LeaveCatchWithFinally,
			(Inst::LeaveCatchWithFinally(_), true) => OpCode::LeaveCatchWithFinallyShort,
			(Inst::LeaveCatchWithoutFinally(_), false) => OpCode::LeaveCatchWithoutFinally,
			(Inst::LeaveCatchWithoutFinally(_), true) => OpCode::LeaveCatchWithoutFinallyShort,
			(Inst::EndFilter(_), false) => OpCode::EndFilter,
			(Inst::EndFilter(_), true) => OpCode::EndFilterShort,
			(Inst::EndFinally(_), false) => OpCode::EndFinally,
			(Inst::EndFinally(_), true) => OpCode::EndFinallyShort,
			(Inst::EndFault(_), false) => OpCode::EndFault,
			(Inst::EndFault(_), true) => OpCode::EndFaultShort,
			(Inst::AddOvfI4(_), _) => OpCode::AddOvfI4,
			(Inst::AddOvfI8(_), _) => OpCode::AddOvfI8,
			(Inst::AddOvfUnI4(_), _) => OpCode::AddOvfUnI4,
			(Inst::AddOvfUnI8(_), _) => OpCode::AddOvfUnI8,
			(Inst::SubOvfI4(_), _) => OpCode::SubOvfI4,
			(Inst::SubOvfI8(_), _) => OpCode::SubOvfI8,
			(Inst::SubOvfUnI4(_), _) => OpCode::SubOvfUnI4,
			(Inst::SubOvfUnI8(_), _) => OpCode::SubOvfUnI8,
			(Inst::MulOvfI4(_), _) => OpCode::MulOvfI4,
			(Inst::MulOvfI8(_), _) => OpCode::MulOvfI8,
			(Inst::MulOvfUnI4(_), _) => OpCode::MulOvfUnI4,
			(Inst::MulOvfUnI8(_), _) => OpCode::MulOvfUnI8,
			(Inst::ConvOvfI1I4(_), _) => OpCode::ConvOvfI1I4,
			(Inst::ConvOvfI1I8(_), _) => OpCode::ConvOvfI1I8,
			(Inst::ConvOvfI1R4(_), _) => OpCode::ConvOvfI1R4,
			(Inst::ConvOvfI1R8(_), _) => OpCode::ConvOvfI1R8,
			(Inst::ConvOvfU1I4(_), _) => OpCode::ConvOvfU1I4,
			(Inst::ConvOvfU1I8(_), _) => OpCode::ConvOvfU1I8,
			(Inst::ConvOvfU1R4(_), _) => OpCode::ConvOvfU1R4,
			(Inst::ConvOvfU1R8(_), _) => OpCode::ConvOvfU1R8,
			(Inst::ConvOvfI2I4(_), _) => OpCode::ConvOvfI2I4,
			(Inst::ConvOvfI2I8(_), _) => OpCode::ConvOvfI2I8,
			(Inst::ConvOvfI2R4(_), _) => OpCode::ConvOvfI2R4,
			(Inst::ConvOvfI2R8(_), _) => OpCode::ConvOvfI2R8,
			(Inst::ConvOvfU2I4(_), _) => OpCode::ConvOvfU2I4,
			(Inst::ConvOvfU2I8(_), _) => OpCode::ConvOvfU2I8,
			(Inst::ConvOvfU2R4(_), _) => OpCode::ConvOvfU2R4,
			(Inst::ConvOvfU2R8(_), _) => OpCode::ConvOvfU2R8,
			(Inst::ConvOvfI4I4(_), _) => OpCode::ConvOvfI4I4,
			(Inst::ConvOvfI4I8(_), _) => OpCode::ConvOvfI4I8,
			(Inst::ConvOvfI4R4(_), _) => OpCode::ConvOvfI4R4,
			(Inst::ConvOvfI4R8(_), _) => OpCode::ConvOvfI4R8,
			(Inst::ConvOvfU4I4(_), _) => OpCode::ConvOvfU4I4,
			(Inst::ConvOvfU4I8(_), _) => OpCode::ConvOvfU4I8,
			(Inst::ConvOvfU4R4(_), _) => OpCode::ConvOvfU4R4,
			(Inst::ConvOvfU4R8(_), _) => OpCode::ConvOvfU4R8,
			(Inst::ConvOvfI8I4(_), _) => OpCode::ConvOvfI8I4,
			(Inst::ConvOvfI8I8(_), _) => OpCode::ConvOvfI8I8,
			(Inst::ConvOvfI8R4(_), _) => OpCode::ConvOvfI8R4,
			(Inst::ConvOvfI8R8(_), _) => OpCode::ConvOvfI8R8,
			(Inst::ConvOvfU8I4(_), _) => OpCode::ConvOvfU8I4,
			(Inst::ConvOvfU8I8(_), _) => OpCode::ConvOvfU8I8,
			(Inst::ConvOvfU8R4(_), _) => OpCode::ConvOvfU8R4,
			(Inst::ConvOvfU8R8(_), _) => OpCode::ConvOvfU8R8,
			(Inst::ConvOvfI1U4Un(_), _) => OpCode::ConvOvfI1U4Un,
			(Inst::ConvOvfI1U8Un(_), _) => OpCode::ConvOvfI1U8Un,
			(Inst::ConvOvfU1U4Un(_), _) => OpCode::ConvOvfU1U4Un,
			(Inst::ConvOvfU1U8Un(_), _) => OpCode::ConvOvfU1U8Un,
			(Inst::ConvOvfI2U4Un(_), _) => OpCode::ConvOvfI2U4Un,
			(Inst::ConvOvfI2U8Un(_), _) => OpCode::ConvOvfI2U8Un,
			(Inst::ConvOvfU2U4Un(_), _) => OpCode::ConvOvfU2U4Un,
			(Inst::ConvOvfU2U8Un(_), _) => OpCode::ConvOvfU2U8Un,
			(Inst::ConvOvfI4U4Un(_), _) => OpCode::ConvOvfI4U4Un,
			(Inst::ConvOvfI4U8Un(_), _) => OpCode::ConvOvfI4U8Un,
			(Inst::ConvOvfU4U4Un(_), _) => OpCode::ConvOvfU4U4Un,
			(Inst::ConvOvfU4U8Un(_), _) => OpCode::ConvOvfU4U8Un,
			(Inst::ConvOvfI8U4Un(_), _) => OpCode::ConvOvfI8U4Un,
			(Inst::ConvOvfI8U8Un(_), _) => OpCode::ConvOvfI8U8Un,
			(Inst::ConvOvfU8U4Un(_), _) => OpCode::ConvOvfU8U4Un,
			(Inst::ConvOvfU8U8Un(_), _) => OpCode::ConvOvfU8U8Un,
			(Inst::Illegal(_), _) => OpCode::Illegal,
			(Inst::Nop(_), _) => OpCode::Nop,
			(Inst::Arglist(_), _) => OpCode::Arglist,
		}
	}

	pub fn has_short(&self) -> bool {
		match self {
			Inst::InitLocals1(_) => true,
			Inst::InitLocals2(_) => true,
			Inst::InitLocals3(_) => true,
			Inst::InitLocals4(_) => true,
			Inst::InitLocals(_) => true,
			Inst::LdLocI1(_) => true,
			Inst::LdLocU1(_) => true,
			Inst::LdLocI2(_) => true,
			Inst::LdLocU2(_) => true,
			Inst::LdLocI4(_) => true,
			Inst::LdLocI8(_) => true,
			Inst::LdLocAny(_) => true,
			Inst::LdLoca(_) => true,
			Inst::StLocI1(_) => true,
			Inst::StLocI2(_) => true,
			Inst::StLocI4(_) => true,
			Inst::StLocI8(_) => true,
			Inst::StLocAny(_) => true,
			Inst::LdNull(_) => true,
			Inst::LdcI4I2(_) => true,
			Inst::LdcI4I4(_) => true,
			Inst::LdcI8I2(_) => true,
			Inst::LdcI8I4(_) => true,
			Inst::LdcI8I8(_) => true,
			Inst::LdStr(_) => true,
			Inst::LdToken(_) => true,
			Inst::Br(_) => true,
			Inst::BrTrueI4(_) => true,
			Inst::BrFalseI4(_) => true,
			Inst::BrTrueI8(_) => true,
			Inst::BrFalseI8(_) => true,
			Inst::BeqI4(_) => true,
			Inst::BeqI8(_) => true,
			Inst::BgeI4(_) => true,
			Inst::BgeI8(_) => true,
			Inst::BgtI4(_) => true,
			Inst::BgtI8(_) => true,
			Inst::BleI4(_) => true,
			Inst::BleI8(_) => true,
			Inst::BltI4(_) => true,
			Inst::BltI8(_) => true,
			Inst::BneUnI4(_) => true,
			Inst::BneUnI8(_) => true,
			Inst::BgeUnI4(_) => true,
			Inst::BgeUnI8(_) => true,
			Inst::BgtUnI4(_) => true,
			Inst::BgtUnI8(_) => true,
			Inst::BleUnI4(_) => true,
			Inst::BleUnI8(_) => true,
			Inst::BltUnI4(_) => true,
			Inst::BltUnI8(_) => true,
			Inst::AddI4(_) => true,
			Inst::AddI8(_) => true,
			Inst::AddR4(_) => true,
			Inst::AddR8(_) => true,
			Inst::SubI4(_) => true,
			Inst::SubI8(_) => true,
			Inst::SubR4(_) => true,
			Inst::SubR8(_) => true,
			Inst::MulI4(_) => true,
			Inst::MulI8(_) => true,
			Inst::MulR4(_) => true,
			Inst::MulR8(_) => true,
			Inst::DivI4(_) => true,
			Inst::DivI8(_) => true,
			Inst::DivR4(_) => true,
			Inst::DivR8(_) => true,
			Inst::RemI4(_) => true,
			Inst::RemI8(_) => true,
			Inst::RemR4(_) => true,
			Inst::RemR8(_) => true,
			Inst::DivUnI4(_) => true,
			Inst::DivUnI8(_) => true,
			Inst::RemUnI4(_) => true,
			Inst::RemUnI8(_) => true,
			Inst::AndI4(_) => true,
			Inst::AndI8(_) => true,
			Inst::OrI4(_) => true,
			Inst::OrI8(_) => true,
			Inst::XorI4(_) => true,
			Inst::XorI8(_) => true,
			Inst::ShlI4(_) => true,
			Inst::ShrI4(_) => true,
			Inst::ShrUnI4(_) => true,
			Inst::NegI4(_) => true,
			Inst::NegI8(_) => true,
			Inst::NegR4(_) => true,
			Inst::NegR8(_) => true,
			Inst::NotI4(_) => true,
			Inst::NotI8(_) => true,
			Inst::ConvI1I4(_) => true,
			Inst::ConvI1I8(_) => true,
			Inst::ConvI1R4(_) => true,
			Inst::ConvI1R8(_) => true,
			Inst::ConvU1I4(_) => true,
			Inst::ConvU1I8(_) => true,
			Inst::ConvU1R4(_) => true,
			Inst::ConvU1R8(_) => true,
			Inst::ConvI2I4(_) => true,
			Inst::ConvI2I8(_) => true,
			Inst::ConvI2R4(_) => true,
			Inst::ConvI2R8(_) => true,
			Inst::ConvU2I4(_) => true,
			Inst::ConvU2I8(_) => true,
			Inst::ConvU2R4(_) => true,
			Inst::ConvU2R8(_) => true,
			Inst::ConvI4I8(_) => true,
			Inst::ConvI4R4(_) => true,
			Inst::ConvI4R8(_) => true,
			Inst::ConvU4I8(_) => true,
			Inst::ConvU4R4(_) => true,
			Inst::ConvU4R8(_) => true,
			Inst::ConvI8I4(_) => true,
			Inst::ConvI8U4(_) => true,
			Inst::ConvI8R4(_) => true,
			Inst::ConvI8R8(_) => true,
			Inst::ConvU8I4(_) => true,
			Inst::ConvU8U4(_) => true,
			Inst::ConvU8R4(_) => true,
			Inst::ConvU8R8(_) => true,
			Inst::ConvR4I4(_) => true,
			Inst::ConvR4I8(_) => true,
			Inst::ConvR4R8(_) => true,
			Inst::ConvR4U4(_) => true,
			Inst::ConvR4U8(_) => true,
			Inst::ConvR8I4(_) => true,
			Inst::ConvR8I8(_) => true,
			Inst::ConvR8R4(_) => true,
			Inst::ConvR8U4(_) => true,
			Inst::ConvR8U8(_) => true,
			Inst::CeqI4(_) => true,
			Inst::CeqI8(_) => true,
			Inst::CeqR4(_) => true,
			Inst::CeqR8(_) => true,
			Inst::CgtI4(_) => true,
			Inst::CgtI8(_) => true,
			Inst::CgtUnI4(_) => true,
			Inst::CgtUnI8(_) => true,
			Inst::CltI4(_) => true,
			Inst::CltI8(_) => true,
			Inst::CltUnI4(_) => true,
			Inst::CltUnI8(_) => true,
			Inst::LdIndI1(_) => true,
			Inst::LdIndU1(_) => true,
			Inst::LdIndI2(_) => true,
			Inst::LdIndU2(_) => true,
			Inst::LdIndI4(_) => true,
			Inst::LdIndI8(_) => true,
			Inst::LdIndRef(_) => true,
			Inst::StIndI1(_) => true,
			Inst::StIndI2(_) => true,
			Inst::StIndI4(_) => true,
			Inst::StIndI8(_) => true,
			Inst::StIndRef(_) => true,
			Inst::InitObjI1(_) => true,
			Inst::InitObjI2(_) => true,
			Inst::InitObjI4(_) => true,
			Inst::InitObjI8(_) => true,
			Inst::InitObjAny(_) => true,
			Inst::CpObjI1(_) => true,
			Inst::CpObjI2(_) => true,
			Inst::CpObjI4(_) => true,
			Inst::CpObjI8(_) => true,
			Inst::CpObjAny(_) => true,
			Inst::LdObjAny(_) => true,
			Inst::StObjAny(_) => true,
			Inst::CastClass(_) => true,
			Inst::IsInst(_) => true,
			Inst::Box(_) => true,
			Inst::Unbox(_) => true,
			Inst::UnboxAny(_) => true,
			Inst::NewArr(_) => true,
			Inst::LdLen(_) => true,
			Inst::Ldelema(_) => true,
			Inst::LdelemI1(_) => true,
			Inst::LdelemU1(_) => true,
			Inst::LdelemI2(_) => true,
			Inst::LdelemU2(_) => true,
			Inst::LdelemI4(_) => true,
			Inst::LdelemI8(_) => true,
			Inst::LdelemRef(_) => true,
			Inst::LdelemAny(_) => true,
			Inst::StelemI1(_) => true,
			Inst::StelemI2(_) => true,
			Inst::StelemI4(_) => true,
			Inst::StelemI8(_) => true,
			Inst::StelemRef(_) => true,
			Inst::StelemAny(_) => true,
			Inst::Ldftn(_) => true,
			Inst::Ldvirtftn(_) => true,
			Inst::LdfldI1(_) => true,
			Inst::LdfldU1(_) => true,
			Inst::LdfldI2(_) => true,
			Inst::LdfldU2(_) => true,
			Inst::LdfldI4(_) => true,
			Inst::LdfldI8(_) => true,
			Inst::LdfldAny(_) => true,
			Inst::LdvfldI1(_) => true,
			Inst::LdvfldU1(_) => true,
			Inst::LdvfldI2(_) => true,
			Inst::LdvfldU2(_) => true,
			Inst::LdvfldI4(_) => true,
			Inst::LdvfldI8(_) => true,
			Inst::LdvfldAny(_) => true,
			Inst::Ldflda(_) => true,
			Inst::StfldI1(_) => true,
			Inst::StfldI2(_) => true,
			Inst::StfldI4(_) => true,
			Inst::StfldI8(_) => true,
			Inst::StfldAny(_) => true,
			Inst::LdsfldI1(_) => true,
			Inst::LdsfldU1(_) => true,
			Inst::LdsfldI2(_) => true,
			Inst::LdsfldU2(_) => true,
			Inst::LdsfldI4(_) => true,
			Inst::LdsfldI8(_) => true,
			Inst::LdsfldAny(_) => true,
			Inst::Ldsflda(_) => true,
			Inst::LdsfldRvaData(_) => true,
			Inst::StsfldI1(_) => true,
			Inst::StsfldI2(_) => true,
			Inst::StsfldI4(_) => true,
			Inst::StsfldI8(_) => true,
			Inst::StsfldAny(_) => true,
			Inst::RetVoid(_) => true,
			Inst::RetI4(_) => true,
			Inst::RetI8(_) => true,
			Inst::RetAny(_) => true,
			Inst::CallInterp(_) => true,
			Inst::CallVirtInterp(_) => true,
			Inst::CallInternalCall(_) => true,
			Inst::CallIntrinsic(_) => true,
			Inst::CallPInvoke(_) => true,
			Inst::CallRuntimeImplemented(_) => true,
			Inst::CalliInterp(_) => true,
			Inst::NewObjInterp(_) => true,
			Inst::NewValueTypeInterp(_) => true,
			Inst::NewObjInternalCall(_) => true,
			Inst::NewObjIntrinsic(_) => true,
			Inst::Throw(_) => true,
			Inst::Rethrow(_) => true,
			Inst::LeaveTryWithFinally(_) => true,
			Inst::LeaveCatchWithFinally(_) => true,
			Inst::LeaveCatchWithoutFinally(_) => true,
			Inst::EndFilter(_) => true,
			Inst::EndFinally(_) => true,
			Inst::EndFault(_) => true,
			Inst::BeqR4(_) => false,
			Inst::BeqR8(_) => false,
			Inst::BgeR4(_) => false,
			Inst::BgeR8(_) => false,
			Inst::BgtR4(_) => false,
			Inst::BgtR8(_) => false,
			Inst::BleR4(_) => false,
			Inst::BleR8(_) => false,
			Inst::BltR4(_) => false,
			Inst::BltR8(_) => false,
			Inst::BneUnR4(_) => false,
			Inst::BneUnR8(_) => false,
			Inst::BgeUnR4(_) => false,
			Inst::BgeUnR8(_) => false,
			Inst::BgtUnR4(_) => false,
			Inst::BgtUnR8(_) => false,
			Inst::BleUnR4(_) => false,
			Inst::BleUnR8(_) => false,
			Inst::BltUnR4(_) => false,
			Inst::BltUnR8(_) => false,
			Inst::Switch(_) => false,
			Inst::ShlI8(_) => false,
			Inst::ShrI8(_) => false,
			Inst::ShrUnI8(_) => false,
			Inst::CkFiniteR4(_) => false,
			Inst::CkFiniteR8(_) => false,
			Inst::CgtR4(_) => false,
			Inst::CgtR8(_) => false,
			Inst::CgtUnR4(_) => false,
			Inst::CgtUnR8(_) => false,
			Inst::CltR4(_) => false,
			Inst::CltR8(_) => false,
			Inst::CltUnR4(_) => false,
			Inst::CltUnR8(_) => false,
			Inst::LocAlloc(_) => false,
			Inst::InitBlk(_) => false,
			Inst::CpBlk(_) => false,
			Inst::GetEnumLongHashCode(_) => false,
			Inst::LdelemaReadOnly(_) => false,
			Inst::LdfldI1Large(_) => false,
			Inst::LdfldU1Large(_) => false,
			Inst::LdfldI2Large(_) => false,
			Inst::LdfldU2Large(_) => false,
			Inst::LdfldI4Large(_) => false,
			Inst::LdfldI8Large(_) => false,
			Inst::LdfldAnyLarge(_) => false,
			Inst::LdfldaLarge(_) => false,
			Inst::StfldI1Large(_) => false,
			Inst::StfldI2Large(_) => false,
			Inst::StfldI4Large(_) => false,
			Inst::StfldI8Large(_) => false,
			Inst::StfldAnyLarge(_) => false,
			Inst::LdfldI2Unaligned(_) => false,
			Inst::LdfldU2Unaligned(_) => false,
			Inst::LdfldI4Unaligned(_) => false,
			Inst::LdfldI8Unaligned(_) => false,
			Inst::StfldI2Unaligned(_) => false,
			Inst::StfldI4Unaligned(_) => false,
			Inst::StfldI8Unaligned(_) => false,
			Inst::LdIndI2Unaligned(_) => false,
			Inst::LdIndU2Unaligned(_) => false,
			Inst::LdIndI4Unaligned(_) => false,
			Inst::LdIndI8Unaligned(_) => false,
			Inst::StIndI2Unaligned(_) => false,
			Inst::StIndI4Unaligned(_) => false,
			Inst::StIndI8Unaligned(_) => false,
			Inst::AddOvfI4(_) => false,
			Inst::AddOvfI8(_) => false,
			Inst::AddOvfUnI4(_) => false,
			Inst::AddOvfUnI8(_) => false,
			Inst::SubOvfI4(_) => false,
			Inst::SubOvfI8(_) => false,
			Inst::SubOvfUnI4(_) => false,
			Inst::SubOvfUnI8(_) => false,
			Inst::MulOvfI4(_) => false,
			Inst::MulOvfI8(_) => false,
			Inst::MulOvfUnI4(_) => false,
			Inst::MulOvfUnI8(_) => false,
			Inst::ConvOvfI1I4(_) => false,
			Inst::ConvOvfI1I8(_) => false,
			Inst::ConvOvfI1R4(_) => false,
			Inst::ConvOvfI1R8(_) => false,
			Inst::ConvOvfU1I4(_) => false,
			Inst::ConvOvfU1I8(_) => false,
			Inst::ConvOvfU1R4(_) => false,
			Inst::ConvOvfU1R8(_) => false,
			Inst::ConvOvfI2I4(_) => false,
			Inst::ConvOvfI2I8(_) => false,
			Inst::ConvOvfI2R4(_) => false,
			Inst::ConvOvfI2R8(_) => false,
			Inst::ConvOvfU2I4(_) => false,
			Inst::ConvOvfU2I8(_) => false,
			Inst::ConvOvfU2R4(_) => false,
			Inst::ConvOvfU2R8(_) => false,
			Inst::ConvOvfI4I4(_) => false,
			Inst::ConvOvfI4I8(_) => false,
			Inst::ConvOvfI4R4(_) => false,
			Inst::ConvOvfI4R8(_) => false,
			Inst::ConvOvfU4I4(_) => false,
			Inst::ConvOvfU4I8(_) => false,
			Inst::ConvOvfU4R4(_) => false,
			Inst::ConvOvfU4R8(_) => false,
			Inst::ConvOvfI8I4(_) => false,
			Inst::ConvOvfI8I8(_) => false,
			Inst::ConvOvfI8R4(_) => false,
			Inst::ConvOvfI8R8(_) => false,
			Inst::ConvOvfU8I4(_) => false,
			Inst::ConvOvfU8I8(_) => false,
			Inst::ConvOvfU8R4(_) => false,
			Inst::ConvOvfU8R8(_) => false,
			Inst::ConvOvfI1U4Un(_) => false,
			Inst::ConvOvfI1U8Un(_) => false,
			Inst::ConvOvfU1U4Un(_) => false,
			Inst::ConvOvfU1U8Un(_) => false,
			Inst::ConvOvfI2U4Un(_) => false,
			Inst::ConvOvfI2U8Un(_) => false,
			Inst::ConvOvfU2U4Un(_) => false,
			Inst::ConvOvfU2U8Un(_) => false,
			Inst::ConvOvfI4U4Un(_) => false,
			Inst::ConvOvfI4U8Un(_) => false,
			Inst::ConvOvfU4U4Un(_) => false,
			Inst::ConvOvfU4U8Un(_) => false,
			Inst::ConvOvfI8U4Un(_) => false,
			Inst::ConvOvfI8U8Un(_) => false,
			Inst::ConvOvfU8U4Un(_) => false,
			Inst::ConvOvfU8U8Un(_) => false,
			Inst::Illegal(_) => false,
			Inst::Nop(_) => false,
			Inst::Arglist(_) => false,
		}
	}

	pub fn fits_short(&self) -> bool {
		match self {
			Inst::InitLocals1(inst) => inst.fits_short(),
			Inst::InitLocals2(inst) => inst.fits_short(),
			Inst::InitLocals3(inst) => inst.fits_short(),
			Inst::InitLocals4(inst) => inst.fits_short(),
			Inst::InitLocals(inst) => inst.fits_short(),
			Inst::LdLocI1(inst) => inst.fits_short(),
			Inst::LdLocU1(inst) => inst.fits_short(),
			Inst::LdLocI2(inst) => inst.fits_short(),
			Inst::LdLocU2(inst) => inst.fits_short(),
			Inst::LdLocI4(inst) => inst.fits_short(),
			Inst::LdLocI8(inst) => inst.fits_short(),
			Inst::LdLocAny(inst) => inst.fits_short(),
			Inst::LdLoca(inst) => inst.fits_short(),
			Inst::StLocI1(inst) => inst.fits_short(),
			Inst::StLocI2(inst) => inst.fits_short(),
			Inst::StLocI4(inst) => inst.fits_short(),
			Inst::StLocI8(inst) => inst.fits_short(),
			Inst::StLocAny(inst) => inst.fits_short(),
			Inst::LdNull(inst) => inst.fits_short(),
			Inst::LdcI4I2(inst) => inst.fits_short(),
			Inst::LdcI4I4(inst) => inst.fits_short(),
			Inst::LdcI8I2(inst) => inst.fits_short(),
			Inst::LdcI8I4(inst) => inst.fits_short(),
			Inst::LdcI8I8(inst) => inst.fits_short(),
			Inst::LdStr(inst) => inst.fits_short(),
			Inst::LdToken(inst) => inst.fits_short(),
			Inst::Br(inst) => inst.fits_short(),
			Inst::BrTrueI4(inst) => inst.fits_short(),
			Inst::BrFalseI4(inst) => inst.fits_short(),
			Inst::BrTrueI8(inst) => inst.fits_short(),
			Inst::BrFalseI8(inst) => inst.fits_short(),
			Inst::BeqI4(inst) => inst.fits_short(),
			Inst::BeqI8(inst) => inst.fits_short(),
			Inst::BeqR4(_) => false,
			Inst::BeqR8(_) => false,
			Inst::BgeI4(inst) => inst.fits_short(),
			Inst::BgeI8(inst) => inst.fits_short(),
			Inst::BgeR4(_) => false,
			Inst::BgeR8(_) => false,
			Inst::BgtI4(inst) => inst.fits_short(),
			Inst::BgtI8(inst) => inst.fits_short(),
			Inst::BgtR4(_) => false,
			Inst::BgtR8(_) => false,
			Inst::BleI4(inst) => inst.fits_short(),
			Inst::BleI8(inst) => inst.fits_short(),
			Inst::BleR4(_) => false,
			Inst::BleR8(_) => false,
			Inst::BltI4(inst) => inst.fits_short(),
			Inst::BltI8(inst) => inst.fits_short(),
			Inst::BltR4(_) => false,
			Inst::BltR8(_) => false,
			Inst::BneUnI4(inst) => inst.fits_short(),
			Inst::BneUnI8(inst) => inst.fits_short(),
			Inst::BneUnR4(_) => false,
			Inst::BneUnR8(_) => false,
			Inst::BgeUnI4(inst) => inst.fits_short(),
			Inst::BgeUnI8(inst) => inst.fits_short(),
			Inst::BgeUnR4(_) => false,
			Inst::BgeUnR8(_) => false,
			Inst::BgtUnI4(inst) => inst.fits_short(),
			Inst::BgtUnI8(inst) => inst.fits_short(),
			Inst::BgtUnR4(_) => false,
			Inst::BgtUnR8(_) => false,
			Inst::BleUnI4(inst) => inst.fits_short(),
			Inst::BleUnI8(inst) => inst.fits_short(),
			Inst::BleUnR4(_) => false,
			Inst::BleUnR8(_) => false,
			Inst::BltUnI4(inst) => inst.fits_short(),
			Inst::BltUnI8(inst) => inst.fits_short(),
			Inst::BltUnR4(_) => false,
			Inst::BltUnR8(_) => false,
			Inst::Switch(_) => false,
			Inst::AddI4(inst) => inst.fits_short(),
			Inst::AddI8(inst) => inst.fits_short(),
			Inst::AddR4(inst) => inst.fits_short(),
			Inst::AddR8(inst) => inst.fits_short(),
			Inst::SubI4(inst) => inst.fits_short(),
			Inst::SubI8(inst) => inst.fits_short(),
			Inst::SubR4(inst) => inst.fits_short(),
			Inst::SubR8(inst) => inst.fits_short(),
			Inst::MulI4(inst) => inst.fits_short(),
			Inst::MulI8(inst) => inst.fits_short(),
			Inst::MulR4(inst) => inst.fits_short(),
			Inst::MulR8(inst) => inst.fits_short(),
			Inst::DivI4(inst) => inst.fits_short(),
			Inst::DivI8(inst) => inst.fits_short(),
			Inst::DivR4(inst) => inst.fits_short(),
			Inst::DivR8(inst) => inst.fits_short(),
			Inst::RemI4(inst) => inst.fits_short(),
			Inst::RemI8(inst) => inst.fits_short(),
			Inst::RemR4(inst) => inst.fits_short(),
			Inst::RemR8(inst) => inst.fits_short(),
			Inst::DivUnI4(inst) => inst.fits_short(),
			Inst::DivUnI8(inst) => inst.fits_short(),
			Inst::RemUnI4(inst) => inst.fits_short(),
			Inst::RemUnI8(inst) => inst.fits_short(),
			Inst::AndI4(inst) => inst.fits_short(),
			Inst::AndI8(inst) => inst.fits_short(),
			Inst::OrI4(inst) => inst.fits_short(),
			Inst::OrI8(inst) => inst.fits_short(),
			Inst::XorI4(inst) => inst.fits_short(),
			Inst::XorI8(inst) => inst.fits_short(),
			Inst::ShlI4(inst) => inst.fits_short(),
			Inst::ShlI8(_) => false,
			Inst::ShrI4(inst) => inst.fits_short(),
			Inst::ShrI8(_) => false,
			Inst::ShrUnI4(inst) => inst.fits_short(),
			Inst::ShrUnI8(_) => false,
			Inst::NegI4(inst) => inst.fits_short(),
			Inst::NegI8(inst) => inst.fits_short(),
			Inst::NegR4(inst) => inst.fits_short(),
			Inst::NegR8(inst) => inst.fits_short(),
			Inst::NotI4(inst) => inst.fits_short(),
			Inst::NotI8(inst) => inst.fits_short(),
			Inst::ConvI1I4(inst) => inst.fits_short(),
			Inst::ConvI1I8(inst) => inst.fits_short(),
			Inst::ConvI1R4(inst) => inst.fits_short(),
			Inst::ConvI1R8(inst) => inst.fits_short(),
			Inst::ConvU1I4(inst) => inst.fits_short(),
			Inst::ConvU1I8(inst) => inst.fits_short(),
			Inst::ConvU1R4(inst) => inst.fits_short(),
			Inst::ConvU1R8(inst) => inst.fits_short(),
			Inst::ConvI2I4(inst) => inst.fits_short(),
			Inst::ConvI2I8(inst) => inst.fits_short(),
			Inst::ConvI2R4(inst) => inst.fits_short(),
			Inst::ConvI2R8(inst) => inst.fits_short(),
			Inst::ConvU2I4(inst) => inst.fits_short(),
			Inst::ConvU2I8(inst) => inst.fits_short(),
			Inst::ConvU2R4(inst) => inst.fits_short(),
			Inst::ConvU2R8(inst) => inst.fits_short(),
			Inst::ConvI4I8(inst) => inst.fits_short(),
			Inst::ConvI4R4(inst) => inst.fits_short(),
			Inst::ConvI4R8(inst) => inst.fits_short(),
			Inst::ConvU4I8(inst) => inst.fits_short(),
			Inst::ConvU4R4(inst) => inst.fits_short(),
			Inst::ConvU4R8(inst) => inst.fits_short(),
			Inst::ConvI8I4(inst) => inst.fits_short(),
			Inst::ConvI8U4(inst) => inst.fits_short(),
			Inst::ConvI8R4(inst) => inst.fits_short(),
			Inst::ConvI8R8(inst) => inst.fits_short(),
			Inst::ConvU8I4(inst) => inst.fits_short(),
			Inst::ConvU8U4(inst) => inst.fits_short(),
			Inst::ConvU8R4(inst) => inst.fits_short(),
			Inst::ConvU8R8(inst) => inst.fits_short(),
			Inst::ConvR4I4(inst) => inst.fits_short(),
			Inst::ConvR4I8(inst) => inst.fits_short(),
			Inst::ConvR4R8(inst) => inst.fits_short(),
			Inst::ConvR4U4(inst) => inst.fits_short(),
			Inst::ConvR4U8(inst) => inst.fits_short(),
			Inst::ConvR8I4(inst) => inst.fits_short(),
			Inst::ConvR8I8(inst) => inst.fits_short(),
			Inst::ConvR8R4(inst) => inst.fits_short(),
			Inst::ConvR8U4(inst) => inst.fits_short(),
			Inst::ConvR8U8(inst) => inst.fits_short(),
			Inst::CkFiniteR4(_) => false,
			Inst::CkFiniteR8(_) => false,
			Inst::CeqI4(inst) => inst.fits_short(),
			Inst::CeqI8(inst) => inst.fits_short(),
			Inst::CeqR4(inst) => inst.fits_short(),
			Inst::CeqR8(inst) => inst.fits_short(),
			Inst::CgtI4(inst) => inst.fits_short(),
			Inst::CgtI8(inst) => inst.fits_short(),
			Inst::CgtR4(_) => false,
			Inst::CgtR8(_) => false,
			Inst::CgtUnI4(inst) => inst.fits_short(),
			Inst::CgtUnI8(inst) => inst.fits_short(),
			Inst::CgtUnR4(_) => false,
			Inst::CgtUnR8(_) => false,
			Inst::CltI4(inst) => inst.fits_short(),
			Inst::CltI8(inst) => inst.fits_short(),
			Inst::CltR4(_) => false,
			Inst::CltR8(_) => false,
			Inst::CltUnI4(inst) => inst.fits_short(),
			Inst::CltUnI8(inst) => inst.fits_short(),
			Inst::CltUnR4(_) => false,
			Inst::CltUnR8(_) => false,
			Inst::LdIndI1(inst) => inst.fits_short(),
			Inst::LdIndU1(inst) => inst.fits_short(),
			Inst::LdIndI2(inst) => inst.fits_short(),
			Inst::LdIndU2(inst) => inst.fits_short(),
			Inst::LdIndI4(inst) => inst.fits_short(),
			Inst::LdIndI8(inst) => inst.fits_short(),
			Inst::LdIndRef(inst) => inst.fits_short(),
			Inst::StIndI1(inst) => inst.fits_short(),
			Inst::StIndI2(inst) => inst.fits_short(),
			Inst::StIndI4(inst) => inst.fits_short(),
			Inst::StIndI8(inst) => inst.fits_short(),
			Inst::StIndRef(inst) => inst.fits_short(),
			Inst::LocAlloc(_) => false,
			Inst::InitBlk(_) => false,
			Inst::CpBlk(_) => false,
			Inst::GetEnumLongHashCode(_) => false,
			Inst::InitObjI1(inst) => inst.fits_short(),
			Inst::InitObjI2(inst) => inst.fits_short(),
			Inst::InitObjI4(inst) => inst.fits_short(),
			Inst::InitObjI8(inst) => inst.fits_short(),
			Inst::InitObjAny(inst) => inst.fits_short(),
			Inst::CpObjI1(inst) => inst.fits_short(),
			Inst::CpObjI2(inst) => inst.fits_short(),
			Inst::CpObjI4(inst) => inst.fits_short(),
			Inst::CpObjI8(inst) => inst.fits_short(),
			Inst::CpObjAny(inst) => inst.fits_short(),
			Inst::LdObjAny(inst) => inst.fits_short(),
			Inst::StObjAny(inst) => inst.fits_short(),
			Inst::CastClass(inst) => inst.fits_short(),
			Inst::IsInst(inst) => inst.fits_short(),
			Inst::Box(inst) => inst.fits_short(),
			Inst::Unbox(inst) => inst.fits_short(),
			Inst::UnboxAny(inst) => inst.fits_short(),
			Inst::NewArr(inst) => inst.fits_short(),
			Inst::LdLen(inst) => inst.fits_short(),
			Inst::Ldelema(inst) => inst.fits_short(),
			Inst::LdelemaReadOnly(_) => false,
			Inst::LdelemI1(inst) => inst.fits_short(),
			Inst::LdelemU1(inst) => inst.fits_short(),
			Inst::LdelemI2(inst) => inst.fits_short(),
			Inst::LdelemU2(inst) => inst.fits_short(),
			Inst::LdelemI4(inst) => inst.fits_short(),
			Inst::LdelemI8(inst) => inst.fits_short(),
			Inst::LdelemRef(inst) => inst.fits_short(),
			Inst::LdelemAny(inst) => inst.fits_short(),
			Inst::StelemI1(inst) => inst.fits_short(),
			Inst::StelemI2(inst) => inst.fits_short(),
			Inst::StelemI4(inst) => inst.fits_short(),
			Inst::StelemI8(inst) => inst.fits_short(),
			Inst::StelemRef(inst) => inst.fits_short(),
			Inst::StelemAny(inst) => inst.fits_short(),
			Inst::Ldftn(inst) => inst.fits_short(),
			Inst::Ldvirtftn(inst) => inst.fits_short(),
			Inst::LdfldI1(inst) => inst.fits_short(),
			Inst::LdfldU1(inst) => inst.fits_short(),
			Inst::LdfldI2(inst) => inst.fits_short(),
			Inst::LdfldU2(inst) => inst.fits_short(),
			Inst::LdfldI4(inst) => inst.fits_short(),
			Inst::LdfldI8(inst) => inst.fits_short(),
			Inst::LdfldAny(inst) => inst.fits_short(),
			Inst::LdvfldI1(inst) => inst.fits_short(),
			Inst::LdvfldU1(inst) => inst.fits_short(),
			Inst::LdvfldI2(inst) => inst.fits_short(),
			Inst::LdvfldU2(inst) => inst.fits_short(),
			Inst::LdvfldI4(inst) => inst.fits_short(),
			Inst::LdvfldI8(inst) => inst.fits_short(),
			Inst::LdvfldAny(inst) => inst.fits_short(),
			Inst::Ldflda(inst) => inst.fits_short(),
			Inst::StfldI1(inst) => inst.fits_short(),
			Inst::StfldI2(inst) => inst.fits_short(),
			Inst::StfldI4(inst) => inst.fits_short(),
			Inst::StfldI8(inst) => inst.fits_short(),
			Inst::StfldAny(inst) => inst.fits_short(),
			Inst::LdfldI1Large(_) => false,
			Inst::LdfldU1Large(_) => false,
			Inst::LdfldI2Large(_) => false,
			Inst::LdfldU2Large(_) => false,
			Inst::LdfldI4Large(_) => false,
			Inst::LdfldI8Large(_) => false,
			Inst::LdfldAnyLarge(_) => false,
			Inst::LdfldaLarge(_) => false,
			Inst::StfldI1Large(_) => false,
			Inst::StfldI2Large(_) => false,
			Inst::StfldI4Large(_) => false,
			Inst::StfldI8Large(_) => false,
			Inst::StfldAnyLarge(_) => false,
			Inst::LdfldI2Unaligned(_) => false,
			Inst::LdfldU2Unaligned(_) => false,
			Inst::LdfldI4Unaligned(_) => false,
			Inst::LdfldI8Unaligned(_) => false,
			Inst::StfldI2Unaligned(_) => false,
			Inst::StfldI4Unaligned(_) => false,
			Inst::StfldI8Unaligned(_) => false,
			Inst::LdIndI2Unaligned(_) => false,
			Inst::LdIndU2Unaligned(_) => false,
			Inst::LdIndI4Unaligned(_) => false,
			Inst::LdIndI8Unaligned(_) => false,
			Inst::StIndI2Unaligned(_) => false,
			Inst::StIndI4Unaligned(_) => false,
			Inst::StIndI8Unaligned(_) => false,
			Inst::LdsfldI1(inst) => inst.fits_short(),
			Inst::LdsfldU1(inst) => inst.fits_short(),
			Inst::LdsfldI2(inst) => inst.fits_short(),
			Inst::LdsfldU2(inst) => inst.fits_short(),
			Inst::LdsfldI4(inst) => inst.fits_short(),
			Inst::LdsfldI8(inst) => inst.fits_short(),
			Inst::LdsfldAny(inst) => inst.fits_short(),
			Inst::Ldsflda(inst) => inst.fits_short(),
			Inst::LdsfldRvaData(inst) => inst.fits_short(),
			Inst::StsfldI1(inst) => inst.fits_short(),
			Inst::StsfldI2(inst) => inst.fits_short(),
			Inst::StsfldI4(inst) => inst.fits_short(),
			Inst::StsfldI8(inst) => inst.fits_short(),
			Inst::StsfldAny(inst) => inst.fits_short(),
			Inst::RetVoid(inst) => inst.fits_short(),
			Inst::RetI4(inst) => inst.fits_short(),
			Inst::RetI8(inst) => inst.fits_short(),
			Inst::RetAny(inst) => inst.fits_short(),
			Inst::CallInterp(inst) => inst.fits_short(),
			Inst::CallVirtInterp(inst) => inst.fits_short(),
			Inst::CallInternalCall(inst) => inst.fits_short(),
			Inst::CallIntrinsic(inst) => inst.fits_short(),
			Inst::CallPInvoke(inst) => inst.fits_short(),
			Inst::CallRuntimeImplemented(inst) => inst.fits_short(),
			Inst::CalliInterp(inst) => inst.fits_short(),
			Inst::NewObjInterp(inst) => inst.fits_short(),
			Inst::NewValueTypeInterp(inst) => inst.fits_short(),
			Inst::NewObjInternalCall(inst) => inst.fits_short(),
			Inst::NewObjIntrinsic(inst) => inst.fits_short(),
			Inst::Throw(inst) => inst.fits_short(),
			Inst::Rethrow(inst) => inst.fits_short(),
			Inst::LeaveTryWithFinally(inst) => inst.fits_short(),
			Inst::LeaveCatchWithFinally(inst) => inst.fits_short(),
			Inst::LeaveCatchWithoutFinally(inst) => inst.fits_short(),
			Inst::EndFilter(inst) => inst.fits_short(),
			Inst::EndFinally(inst) => inst.fits_short(),
			Inst::EndFault(inst) => inst.fits_short(),
			Inst::AddOvfI4(_) => false,
			Inst::AddOvfI8(_) => false,
			Inst::AddOvfUnI4(_) => false,
			Inst::AddOvfUnI8(_) => false,
			Inst::SubOvfI4(_) => false,
			Inst::SubOvfI8(_) => false,
			Inst::SubOvfUnI4(_) => false,
			Inst::SubOvfUnI8(_) => false,
			Inst::MulOvfI4(_) => false,
			Inst::MulOvfI8(_) => false,
			Inst::MulOvfUnI4(_) => false,
			Inst::MulOvfUnI8(_) => false,
			Inst::ConvOvfI1I4(_) => false,
			Inst::ConvOvfI1I8(_) => false,
			Inst::ConvOvfI1R4(_) => false,
			Inst::ConvOvfI1R8(_) => false,
			Inst::ConvOvfU1I4(_) => false,
			Inst::ConvOvfU1I8(_) => false,
			Inst::ConvOvfU1R4(_) => false,
			Inst::ConvOvfU1R8(_) => false,
			Inst::ConvOvfI2I4(_) => false,
			Inst::ConvOvfI2I8(_) => false,
			Inst::ConvOvfI2R4(_) => false,
			Inst::ConvOvfI2R8(_) => false,
			Inst::ConvOvfU2I4(_) => false,
			Inst::ConvOvfU2I8(_) => false,
			Inst::ConvOvfU2R4(_) => false,
			Inst::ConvOvfU2R8(_) => false,
			Inst::ConvOvfI4I4(_) => false,
			Inst::ConvOvfI4I8(_) => false,
			Inst::ConvOvfI4R4(_) => false,
			Inst::ConvOvfI4R8(_) => false,
			Inst::ConvOvfU4I4(_) => false,
			Inst::ConvOvfU4I8(_) => false,
			Inst::ConvOvfU4R4(_) => false,
			Inst::ConvOvfU4R8(_) => false,
			Inst::ConvOvfI8I4(_) => false,
			Inst::ConvOvfI8I8(_) => false,
			Inst::ConvOvfI8R4(_) => false,
			Inst::ConvOvfI8R8(_) => false,
			Inst::ConvOvfU8I4(_) => false,
			Inst::ConvOvfU8I8(_) => false,
			Inst::ConvOvfU8R4(_) => false,
			Inst::ConvOvfU8R8(_) => false,
			Inst::ConvOvfI1U4Un(_) => false,
			Inst::ConvOvfI1U8Un(_) => false,
			Inst::ConvOvfU1U4Un(_) => false,
			Inst::ConvOvfU1U8Un(_) => false,
			Inst::ConvOvfI2U4Un(_) => false,
			Inst::ConvOvfI2U8Un(_) => false,
			Inst::ConvOvfU2U4Un(_) => false,
			Inst::ConvOvfU2U8Un(_) => false,
			Inst::ConvOvfI4U4Un(_) => false,
			Inst::ConvOvfI4U8Un(_) => false,
			Inst::ConvOvfU4U4Un(_) => false,
			Inst::ConvOvfU4U8Un(_) => false,
			Inst::ConvOvfI8U4Un(_) => false,
			Inst::ConvOvfI8U8Un(_) => false,
			Inst::ConvOvfU8U4Un(_) => false,
			Inst::ConvOvfU8U8Un(_) => false,
			Inst::Illegal(_) => false,
			Inst::Nop(_) => false,
			Inst::Arglist(_) => false,
		}
	}

	pub fn size(&self, short: bool) -> usize {
		self.op(short).size()
	}

	pub fn encode(&self, out: &mut Vec<u8>, short: bool) {
		let op = self.op(short);
		match self {
			Inst::InitLocals1(inst) => inst.encode(out, op),
			Inst::InitLocals2(inst) => inst.encode(out, op),
			Inst::InitLocals3(inst) => inst.encode(out, op),
			Inst::InitLocals4(inst) => inst.encode(out, op),
			Inst::InitLocals(inst) => inst.encode(out, op),
			Inst::LdLocI1(inst) => inst.encode(out, op),
			Inst::LdLocU1(inst) => inst.encode(out, op),
			Inst::LdLocI2(inst) => inst.encode(out, op),
			Inst::LdLocU2(inst) => inst.encode(out, op),
			Inst::LdLocI4(inst) => inst.encode(out, op),
			Inst::LdLocI8(inst) => inst.encode(out, op),
			Inst::LdLocAny(inst) => inst.encode(out, op),
			Inst::LdLoca(inst) => inst.encode(out, op),
			Inst::StLocI1(inst) => inst.encode(out, op),
			Inst::StLocI2(inst) => inst.encode(out, op),
			Inst::StLocI4(inst) => inst.encode(out, op),
			Inst::StLocI8(inst) => inst.encode(out, op),
			Inst::StLocAny(inst) => inst.encode(out, op),
			Inst::LdNull(inst) => inst.encode(out, op),
			Inst::LdcI4I2(inst) => inst.encode(out, op),
			Inst::LdcI4I4(inst) => inst.encode(out, op),
			Inst::LdcI8I2(inst) => inst.encode(out, op),
			Inst::LdcI8I4(inst) => inst.encode(out, op),
			Inst::LdcI8I8(inst) => inst.encode(out, op),
			Inst::LdStr(inst) => inst.encode(out, op),
			Inst::LdToken(inst) => inst.encode(out, op),
			Inst::Br(inst) => inst.encode(out, op),
			Inst::BrTrueI4(inst) => inst.encode(out, op),
			Inst::BrFalseI4(inst) => inst.encode(out, op),
			Inst::BrTrueI8(inst) => inst.encode(out, op),
			Inst::BrFalseI8(inst) => inst.encode(out, op),
			Inst::BeqI4(inst) => inst.encode(out, op),
			Inst::BeqI8(inst) => inst.encode(out, op),
			Inst::BeqR4(inst) => inst.encode(out, op),
			Inst::BeqR8(inst) => inst.encode(out, op),
			Inst::BgeI4(inst) => inst.encode(out, op),
			Inst::BgeI8(inst) => inst.encode(out, op),
			Inst::BgeR4(inst) => inst.encode(out, op),
			Inst::BgeR8(inst) => inst.encode(out, op),
			Inst::BgtI4(inst) => inst.encode(out, op),
			Inst::BgtI8(inst) => inst.encode(out, op),
			Inst::BgtR4(inst) => inst.encode(out, op),
			Inst::BgtR8(inst) => inst.encode(out, op),
			Inst::BleI4(inst) => inst.encode(out, op),
			Inst::BleI8(inst) => inst.encode(out, op),
			Inst::BleR4(inst) => inst.encode(out, op),
			Inst::BleR8(inst) => inst.encode(out, op),
			Inst::BltI4(inst) => inst.encode(out, op),
			Inst::BltI8(inst) => inst.encode(out, op),
			Inst::BltR4(inst) => inst.encode(out, op),
			Inst::BltR8(inst) => inst.encode(out, op),
			Inst::BneUnI4(inst) => inst.encode(out, op),
			Inst::BneUnI8(inst) => inst.encode(out, op),
			Inst::BneUnR4(inst) => inst.encode(out, op),
			Inst::BneUnR8(inst) => inst.encode(out, op),
			Inst::BgeUnI4(inst) => inst.encode(out, op),
			Inst::BgeUnI8(inst) => inst.encode(out, op),
			Inst::BgeUnR4(inst) => inst.encode(out, op),
			Inst::BgeUnR8(inst) => inst.encode(out, op),
			Inst::BgtUnI4(inst) => inst.encode(out, op),
			Inst::BgtUnI8(inst) => inst.encode(out, op),
			Inst::BgtUnR4(inst) => inst.encode(out, op),
			Inst::BgtUnR8(inst) => inst.encode(out, op),
			Inst::BleUnI4(inst) => inst.encode(out, op),
			Inst::BleUnI8(inst) => inst.encode(out, op),
			Inst::BleUnR4(inst) => inst.encode(out, op),
			Inst::BleUnR8(inst) => inst.encode(out, op),
			Inst::BltUnI4(inst) => inst.encode(out, op),
			Inst::BltUnI8(inst) => inst.encode(out, op),
			Inst::BltUnR4(inst) => inst.encode(out, op),
			Inst::BltUnR8(inst) => inst.encode(out, op),
			Inst::Switch(inst) => inst.encode(out, op),
			Inst::AddI4(inst) => inst.encode(out, op),
			Inst::AddI8(inst) => inst.encode(out, op),
			Inst::AddR4(inst) => inst.encode(out, op),
			Inst::AddR8(inst) => inst.encode(out, op),
			Inst::SubI4(inst) => inst.encode(out, op),
			Inst::SubI8(inst) => inst.encode(out, op),
			Inst::SubR4(inst) => inst.encode(out, op),
			Inst::SubR8(inst) => inst.encode(out, op),
			Inst::MulI4(inst) => inst.encode(out, op),
			Inst::MulI8(inst) => inst.encode(out, op),
			Inst::MulR4(inst) => inst.encode(out, op),
			Inst::MulR8(inst) => inst.encode(out, op),
			Inst::DivI4(inst) => inst.encode(out, op),
			Inst::DivI8(inst) => inst.encode(out, op),
			Inst::DivR4(inst) => inst.encode(out, op),
			Inst::DivR8(inst) => inst.encode(out, op),
			Inst::RemI4(inst) => inst.encode(out, op),
			Inst::RemI8(inst) => inst.encode(out, op),
			Inst::RemR4(inst) => inst.encode(out, op),
			Inst::RemR8(inst) => inst.encode(out, op),
			Inst::DivUnI4(inst) => inst.encode(out, op),
			Inst::DivUnI8(inst) => inst.encode(out, op),
			Inst::RemUnI4(inst) => inst.encode(out, op),
			Inst::RemUnI8(inst) => inst.encode(out, op),
			Inst::AndI4(inst) => inst.encode(out, op),
			Inst::AndI8(inst) => inst.encode(out, op),
			Inst::OrI4(inst) => inst.encode(out, op),
			Inst::OrI8(inst) => inst.encode(out, op),
			Inst::XorI4(inst) => inst.encode(out, op),
			Inst::XorI8(inst) => inst.encode(out, op),
			Inst::ShlI4(inst) => inst.encode(out, op),
			Inst::ShlI8(inst) => inst.encode(out, op),
			Inst::ShrI4(inst) => inst.encode(out, op),
			Inst::ShrI8(inst) => inst.encode(out, op),
			Inst::ShrUnI4(inst) => inst.encode(out, op),
			Inst::ShrUnI8(inst) => inst.encode(out, op),
			Inst::NegI4(inst) => inst.encode(out, op),
			Inst::NegI8(inst) => inst.encode(out, op),
			Inst::NegR4(inst) => inst.encode(out, op),
			Inst::NegR8(inst) => inst.encode(out, op),
			Inst::NotI4(inst) => inst.encode(out, op),
			Inst::NotI8(inst) => inst.encode(out, op),
			Inst::ConvI1I4(inst) => inst.encode(out, op),
			Inst::ConvI1I8(inst) => inst.encode(out, op),
			Inst::ConvI1R4(inst) => inst.encode(out, op),
			Inst::ConvI1R8(inst) => inst.encode(out, op),
			Inst::ConvU1I4(inst) => inst.encode(out, op),
			Inst::ConvU1I8(inst) => inst.encode(out, op),
			Inst::ConvU1R4(inst) => inst.encode(out, op),
			Inst::ConvU1R8(inst) => inst.encode(out, op),
			Inst::ConvI2I4(inst) => inst.encode(out, op),
			Inst::ConvI2I8(inst) => inst.encode(out, op),
			Inst::ConvI2R4(inst) => inst.encode(out, op),
			Inst::ConvI2R8(inst) => inst.encode(out, op),
			Inst::ConvU2I4(inst) => inst.encode(out, op),
			Inst::ConvU2I8(inst) => inst.encode(out, op),
			Inst::ConvU2R4(inst) => inst.encode(out, op),
			Inst::ConvU2R8(inst) => inst.encode(out, op),
			Inst::ConvI4I8(inst) => inst.encode(out, op),
			Inst::ConvI4R4(inst) => inst.encode(out, op),
			Inst::ConvI4R8(inst) => inst.encode(out, op),
			Inst::ConvU4I8(inst) => inst.encode(out, op),
			Inst::ConvU4R4(inst) => inst.encode(out, op),
			Inst::ConvU4R8(inst) => inst.encode(out, op),
			Inst::ConvI8I4(inst) => inst.encode(out, op),
			Inst::ConvI8U4(inst) => inst.encode(out, op),
			Inst::ConvI8R4(inst) => inst.encode(out, op),
			Inst::ConvI8R8(inst) => inst.encode(out, op),
			Inst::ConvU8I4(inst) => inst.encode(out, op),
			Inst::ConvU8U4(inst) => inst.encode(out, op),
			Inst::ConvU8R4(inst) => inst.encode(out, op),
			Inst::ConvU8R8(inst) => inst.encode(out, op),
			Inst::ConvR4I4(inst) => inst.encode(out, op),
			Inst::ConvR4I8(inst) => inst.encode(out, op),
			Inst::ConvR4R8(inst) => inst.encode(out, op),
			Inst::ConvR4U4(inst) => inst.encode(out, op),
			Inst::ConvR4U8(inst) => inst.encode(out, op),
			Inst::ConvR8I4(inst) => inst.encode(out, op),
			Inst::ConvR8I8(inst) => inst.encode(out, op),
			Inst::ConvR8R4(inst) => inst.encode(out, op),
			Inst::ConvR8U4(inst) => inst.encode(out, op),
			Inst::ConvR8U8(inst) => inst.encode(out, op),
			Inst::CkFiniteR4(inst) => inst.encode(out, op),
			Inst::CkFiniteR8(inst) => inst.encode(out, op),
			Inst::CeqI4(inst) => inst.encode(out, op),
			Inst::CeqI8(inst) => inst.encode(out, op),
			Inst::CeqR4(inst) => inst.encode(out, op),
			Inst::CeqR8(inst) => inst.encode(out, op),
			Inst::CgtI4(inst) => inst.encode(out, op),
			Inst::CgtI8(inst) => inst.encode(out, op),
			Inst::CgtR4(inst) => inst.encode(out, op),
			Inst::CgtR8(inst) => inst.encode(out, op),
			Inst::CgtUnI4(inst) => inst.encode(out, op),
			Inst::CgtUnI8(inst) => inst.encode(out, op),
			Inst::CgtUnR4(inst) => inst.encode(out, op),
			Inst::CgtUnR8(inst) => inst.encode(out, op),
			Inst::CltI4(inst) => inst.encode(out, op),
			Inst::CltI8(inst) => inst.encode(out, op),
			Inst::CltR4(inst) => inst.encode(out, op),
			Inst::CltR8(inst) => inst.encode(out, op),
			Inst::CltUnI4(inst) => inst.encode(out, op),
			Inst::CltUnI8(inst) => inst.encode(out, op),
			Inst::CltUnR4(inst) => inst.encode(out, op),
			Inst::CltUnR8(inst) => inst.encode(out, op),
			Inst::LdIndI1(inst) => inst.encode(out, op),
			Inst::LdIndU1(inst) => inst.encode(out, op),
			Inst::LdIndI2(inst) => inst.encode(out, op),
			Inst::LdIndU2(inst) => inst.encode(out, op),
			Inst::LdIndI4(inst) => inst.encode(out, op),
			Inst::LdIndI8(inst) => inst.encode(out, op),
			Inst::LdIndRef(inst) => inst.encode(out, op),
			Inst::StIndI1(inst) => inst.encode(out, op),
			Inst::StIndI2(inst) => inst.encode(out, op),
			Inst::StIndI4(inst) => inst.encode(out, op),
			Inst::StIndI8(inst) => inst.encode(out, op),
			Inst::StIndRef(inst) => inst.encode(out, op),
			Inst::LocAlloc(inst) => inst.encode(out, op),
			Inst::InitBlk(inst) => inst.encode(out, op),
			Inst::CpBlk(inst) => inst.encode(out, op),
			Inst::GetEnumLongHashCode(inst) => inst.encode(out, op),
			Inst::InitObjI1(inst) => inst.encode(out, op),
			Inst::InitObjI2(inst) => inst.encode(out, op),
			Inst::InitObjI4(inst) => inst.encode(out, op),
			Inst::InitObjI8(inst) => inst.encode(out, op),
			Inst::InitObjAny(inst) => inst.encode(out, op),
			Inst::CpObjI1(inst) => inst.encode(out, op),
			Inst::CpObjI2(inst) => inst.encode(out, op),
			Inst::CpObjI4(inst) => inst.encode(out, op),
			Inst::CpObjI8(inst) => inst.encode(out, op),
			Inst::CpObjAny(inst) => inst.encode(out, op),
			Inst::LdObjAny(inst) => inst.encode(out, op),
			Inst::StObjAny(inst) => inst.encode(out, op),
			Inst::CastClass(inst) => inst.encode(out, op),
			Inst::IsInst(inst) => inst.encode(out, op),
			Inst::Box(inst) => inst.encode(out, op),
			Inst::Unbox(inst) => inst.encode(out, op),
			Inst::UnboxAny(inst) => inst.encode(out, op),
			Inst::NewArr(inst) => inst.encode(out, op),
			Inst::LdLen(inst) => inst.encode(out, op),
			Inst::Ldelema(inst) => inst.encode(out, op),
			Inst::LdelemaReadOnly(inst) => inst.encode(out, op),
			Inst::LdelemI1(inst) => inst.encode(out, op),
			Inst::LdelemU1(inst) => inst.encode(out, op),
			Inst::LdelemI2(inst) => inst.encode(out, op),
			Inst::LdelemU2(inst) => inst.encode(out, op),
			Inst::LdelemI4(inst) => inst.encode(out, op),
			Inst::LdelemI8(inst) => inst.encode(out, op),
			Inst::LdelemRef(inst) => inst.encode(out, op),
			Inst::LdelemAny(inst) => inst.encode(out, op),
			Inst::StelemI1(inst) => inst.encode(out, op),
			Inst::StelemI2(inst) => inst.encode(out, op),
			Inst::StelemI4(inst) => inst.encode(out, op),
			Inst::StelemI8(inst) => inst.encode(out, op),
			Inst::StelemRef(inst) => inst.encode(out, op),
			Inst::StelemAny(inst) => inst.encode(out, op),
			Inst::Ldftn(inst) => inst.encode(out, op),
			Inst::Ldvirtftn(inst) => inst.encode(out, op),
			Inst::LdfldI1(inst) => inst.encode(out, op),
			Inst::LdfldU1(inst) => inst.encode(out, op),
			Inst::LdfldI2(inst) => inst.encode(out, op),
			Inst::LdfldU2(inst) => inst.encode(out, op),
			Inst::LdfldI4(inst) => inst.encode(out, op),
			Inst::LdfldI8(inst) => inst.encode(out, op),
			Inst::LdfldAny(inst) => inst.encode(out, op),
			Inst::LdvfldI1(inst) => inst.encode(out, op),
			Inst::LdvfldU1(inst) => inst.encode(out, op),
			Inst::LdvfldI2(inst) => inst.encode(out, op),
			Inst::LdvfldU2(inst) => inst.encode(out, op),
			Inst::LdvfldI4(inst) => inst.encode(out, op),
			Inst::LdvfldI8(inst) => inst.encode(out, op),
			Inst::LdvfldAny(inst) => inst.encode(out, op),
			Inst::Ldflda(inst) => inst.encode(out, op),
			Inst::StfldI1(inst) => inst.encode(out, op),
			Inst::StfldI2(inst) => inst.encode(out, op),
			Inst::StfldI4(inst) => inst.encode(out, op),
			Inst::StfldI8(inst) => inst.encode(out, op),
			Inst::StfldAny(inst) => inst.encode(out, op),
			Inst::LdfldI1Large(inst) => inst.encode(out, op),
			Inst::LdfldU1Large(inst) => inst.encode(out, op),
			Inst::LdfldI2Large(inst) => inst.encode(out, op),
			Inst::LdfldU2Large(inst) => inst.encode(out, op),
			Inst::LdfldI4Large(inst) => inst.encode(out, op),
			Inst::LdfldI8Large(inst) => inst.encode(out, op),
			Inst::LdfldAnyLarge(inst) => inst.encode(out, op),
			Inst::LdfldaLarge(inst) => inst.encode(out, op),
			Inst::StfldI1Large(inst) => inst.encode(out, op),
			Inst::StfldI2Large(inst) => inst.encode(out, op),
			Inst::StfldI4Large(inst) => inst.encode(out, op),
			Inst::StfldI8Large(inst) => inst.encode(out, op),
			Inst::StfldAnyLarge(inst) => inst.encode(out, op),
			Inst::LdfldI2Unaligned(inst) => inst.encode(out, op),
			Inst::LdfldU2Unaligned(inst) => inst.encode(out, op),
			Inst::LdfldI4Unaligned(inst) => inst.encode(out, op),
			Inst::LdfldI8Unaligned(inst) => inst.encode(out, op),
			Inst::StfldI2Unaligned(inst) => inst.encode(out, op),
			Inst::StfldI4Unaligned(inst) => inst.encode(out, op),
			Inst::StfldI8Unaligned(inst) => inst.encode(out, op),
			Inst::LdIndI2Unaligned(inst) => inst.encode(out, op),
			Inst::LdIndU2Unaligned(inst) => inst.encode(out, op),
			Inst::LdIndI4Unaligned(inst) => inst.encode(out, op),
			Inst::LdIndI8Unaligned(inst) => inst.encode(out, op),
			Inst::StIndI2Unaligned(inst) => inst.encode(out, op),
			Inst::StIndI4Unaligned(inst) => inst.encode(out, op),
			Inst::StIndI8Unaligned(inst) => inst.encode(out, op),
			Inst::LdsfldI1(inst) => inst.encode(out, op),
			Inst::LdsfldU1(inst) => inst.encode(out, op),
			Inst::LdsfldI2(inst) => inst.encode(out, op),
			Inst::LdsfldU2(inst) => inst.encode(out, op),
			Inst::LdsfldI4(inst) => inst.encode(out, op),
			Inst::LdsfldI8(inst) => inst.encode(out, op),
			Inst::LdsfldAny(inst) => inst.encode(out, op),
			Inst::Ldsflda(inst) => inst.encode(out, op),
			Inst::LdsfldRvaData(inst) => inst.encode(out, op),
			Inst::StsfldI1(inst) => inst.encode(out, op),
			Inst::StsfldI2(inst) => inst.encode(out, op),
			Inst::StsfldI4(inst) => inst.encode(out, op),
			Inst::StsfldI8(inst) => inst.encode(out, op),
			Inst::StsfldAny(inst) => inst.encode(out, op),
			Inst::RetVoid(inst) => inst.encode(out, op),
			Inst::RetI4(inst) => inst.encode(out, op),
			Inst::RetI8(inst) => inst.encode(out, op),
			Inst::RetAny(inst) => inst.encode(out, op),
			Inst::CallInterp(inst) => inst.encode(out, op),
			Inst::CallVirtInterp(inst) => inst.encode(out, op),
			Inst::CallInternalCall(inst) => inst.encode(out, op),
			Inst::CallIntrinsic(inst) => inst.encode(out, op),
			Inst::CallPInvoke(inst) => inst.encode(out, op),
			Inst::CallRuntimeImplemented(inst) => inst.encode(out, op),
			Inst::CalliInterp(inst) => inst.encode(out, op),
			Inst::NewObjInterp(inst) => inst.encode(out, op),
			Inst::NewValueTypeInterp(inst) => inst.encode(out, op),
			Inst::NewObjInternalCall(inst) => inst.encode(out, op),
			Inst::NewObjIntrinsic(inst) => inst.encode(out, op),
			Inst::Throw(inst) => inst.encode(out, op),
			Inst::Rethrow(inst) => inst.encode(out, op),
			Inst::LeaveTryWithFinally(inst) => inst.encode(out, op),
			Inst::LeaveCatchWithFinally(inst) => inst.encode(out, op),
			Inst::LeaveCatchWithoutFinally(inst) => inst.encode(out, op),
			Inst::EndFilter(inst) => inst.encode(out, op),
			Inst::EndFinally(inst) => inst.encode(out, op),
			Inst::EndFault(inst) => inst.encode(out, op),
			Inst::AddOvfI4(inst) => inst.encode(out, op),
			Inst::AddOvfI8(inst) => inst.encode(out, op),
			Inst::AddOvfUnI4(inst) => inst.encode(out, op),
			Inst::AddOvfUnI8(inst) => inst.encode(out, op),
			Inst::SubOvfI4(inst) => inst.encode(out, op),
			Inst::SubOvfI8(inst) => inst.encode(out, op),
			Inst::SubOvfUnI4(inst) => inst.encode(out, op),
			Inst::SubOvfUnI8(inst) => inst.encode(out, op),
			Inst::MulOvfI4(inst) => inst.encode(out, op),
			Inst::MulOvfI8(inst) => inst.encode(out, op),
			Inst::MulOvfUnI4(inst) => inst.encode(out, op),
			Inst::MulOvfUnI8(inst) => inst.encode(out, op),
			Inst::ConvOvfI1I4(inst) => inst.encode(out, op),
			Inst::ConvOvfI1I8(inst) => inst.encode(out, op),
			Inst::ConvOvfI1R4(inst) => inst.encode(out, op),
			Inst::ConvOvfI1R8(inst) => inst.encode(out, op),
			Inst::ConvOvfU1I4(inst) => inst.encode(out, op),
			Inst::ConvOvfU1I8(inst) => inst.encode(out, op),
			Inst::ConvOvfU1R4(inst) => inst.encode(out, op),
			Inst::ConvOvfU1R8(inst) => inst.encode(out, op),
			Inst::ConvOvfI2I4(inst) => inst.encode(out, op),
			Inst::ConvOvfI2I8(inst) => inst.encode(out, op),
			Inst::ConvOvfI2R4(inst) => inst.encode(out, op),
			Inst::ConvOvfI2R8(inst) => inst.encode(out, op),
			Inst::ConvOvfU2I4(inst) => inst.encode(out, op),
			Inst::ConvOvfU2I8(inst) => inst.encode(out, op),
			Inst::ConvOvfU2R4(inst) => inst.encode(out, op),
			Inst::ConvOvfU2R8(inst) => inst.encode(out, op),
			Inst::ConvOvfI4I4(inst) => inst.encode(out, op),
			Inst::ConvOvfI4I8(inst) => inst.encode(out, op),
			Inst::ConvOvfI4R4(inst) => inst.encode(out, op),
			Inst::ConvOvfI4R8(inst) => inst.encode(out, op),
			Inst::ConvOvfU4I4(inst) => inst.encode(out, op),
			Inst::ConvOvfU4I8(inst) => inst.encode(out, op),
			Inst::ConvOvfU4R4(inst) => inst.encode(out, op),
			Inst::ConvOvfU4R8(inst) => inst.encode(out, op),
			Inst::ConvOvfI8I4(inst) => inst.encode(out, op),
			Inst::ConvOvfI8I8(inst) => inst.encode(out, op),
			Inst::ConvOvfI8R4(inst) => inst.encode(out, op),
			Inst::ConvOvfI8R8(inst) => inst.encode(out, op),
			Inst::ConvOvfU8I4(inst) => inst.encode(out, op),
			Inst::ConvOvfU8I8(inst) => inst.encode(out, op),
			Inst::ConvOvfU8R4(inst) => inst.encode(out, op),
			Inst::ConvOvfU8R8(inst) => inst.encode(out, op),
			Inst::ConvOvfI1U4Un(inst) => inst.encode(out, op),
			Inst::ConvOvfI1U8Un(inst) => inst.encode(out, op),
			Inst::ConvOvfU1U4Un(inst) => inst.encode(out, op),
			Inst::ConvOvfU1U8Un(inst) => inst.encode(out, op),
			Inst::ConvOvfI2U4Un(inst) => inst.encode(out, op),
			Inst::ConvOvfI2U8Un(inst) => inst.encode(out, op),
			Inst::ConvOvfU2U4Un(inst) => inst.encode(out, op),
			Inst::ConvOvfU2U8Un(inst) => inst.encode(out, op),
			Inst::ConvOvfI4U4Un(inst) => inst.encode(out, op),
			Inst::ConvOvfI4U8Un(inst) => inst.encode(out, op),
			Inst::ConvOvfU4U4Un(inst) => inst.encode(out, op),
			Inst::ConvOvfU4U8Un(inst) => inst.encode(out, op),
			Inst::ConvOvfI8U4Un(inst) => inst.encode(out, op),
			Inst::ConvOvfI8U8Un(inst) => inst.encode(out, op),
			Inst::ConvOvfU8U4Un(inst) => inst.encode(out, op),
			Inst::ConvOvfU8U8Un(inst) => inst.encode(out, op),
			Inst::Illegal(inst) => inst.encode(out, op),
			Inst::Nop(inst) => inst.encode(out, op),
			Inst::Arglist(inst) => inst.encode(out, op),
		}
	}

	/// Updates the branch displacement of branching families.
	pub fn set_branch_target(&mut self, disp: i32) {
		match self {
			Inst::Br(inst) => inst.target = disp,
			Inst::BrTrueI4(inst) => inst.target = disp,
			Inst::BrFalseI4(inst) => inst.target = disp,
			Inst::BrTrueI8(inst) => inst.target = disp,
			Inst::BrFalseI8(inst) => inst.target = disp,
			Inst::BeqI4(inst) => inst.target = disp,
			Inst::BeqI8(inst) => inst.target = disp,
			Inst::BeqR4(inst) => inst.target = disp,
			Inst::BeqR8(inst) => inst.target = disp,
			Inst::BgeI4(inst) => inst.target = disp,
			Inst::BgeI8(inst) => inst.target = disp,
			Inst::BgeR4(inst) => inst.target = disp,
			Inst::BgeR8(inst) => inst.target = disp,
			Inst::BgtI4(inst) => inst.target = disp,
			Inst::BgtI8(inst) => inst.target = disp,
			Inst::BgtR4(inst) => inst.target = disp,
			Inst::BgtR8(inst) => inst.target = disp,
			Inst::BleI4(inst) => inst.target = disp,
			Inst::BleI8(inst) => inst.target = disp,
			Inst::BleR4(inst) => inst.target = disp,
			Inst::BleR8(inst) => inst.target = disp,
			Inst::BltI4(inst) => inst.target = disp,
			Inst::BltI8(inst) => inst.target = disp,
			Inst::BltR4(inst) => inst.target = disp,
			Inst::BltR8(inst) => inst.target = disp,
			Inst::BneUnI4(inst) => inst.target = disp,
			Inst::BneUnI8(inst) => inst.target = disp,
			Inst::BneUnR4(inst) => inst.target = disp,
			Inst::BneUnR8(inst) => inst.target = disp,
			Inst::BgeUnI4(inst) => inst.target = disp,
			Inst::BgeUnI8(inst) => inst.target = disp,
			Inst::BgeUnR4(inst) => inst.target = disp,
			Inst::BgeUnR8(inst) => inst.target = disp,
			Inst::BgtUnI4(inst) => inst.target = disp,
			Inst::BgtUnI8(inst) => inst.target = disp,
			Inst::BgtUnR4(inst) => inst.target = disp,
			Inst::BgtUnR8(inst) => inst.target = disp,
			Inst::BleUnI4(inst) => inst.target = disp,
			Inst::BleUnI8(inst) => inst.target = disp,
			Inst::BleUnR4(inst) => inst.target = disp,
			Inst::BleUnR8(inst) => inst.target = disp,
			Inst::BltUnI4(inst) => inst.target = disp,
			Inst::BltUnI8(inst) => inst.target = disp,
			Inst::BltUnR4(inst) => inst.target = disp,
			Inst::BltUnR8(inst) => inst.target = disp,
			Inst::LeaveTryWithFinally(inst) => inst.target = disp,
			Inst::LeaveCatchWithFinally(inst) => inst.target = disp,
			Inst::LeaveCatchWithoutFinally(inst) => inst.target = disp,
			_ => {},
		}
	}

	/// The current branch displacement of branching families.
	pub fn branch_target(&self) -> Option<i32> {
		match self {
			Inst::Br(inst) => Some(inst.target),
			Inst::BrTrueI4(inst) => Some(inst.target),
			Inst::BrFalseI4(inst) => Some(inst.target),
			Inst::BrTrueI8(inst) => Some(inst.target),
			Inst::BrFalseI8(inst) => Some(inst.target),
			Inst::BeqI4(inst) => Some(inst.target),
			Inst::BeqI8(inst) => Some(inst.target),
			Inst::BeqR4(inst) => Some(inst.target),
			Inst::BeqR8(inst) => Some(inst.target),
			Inst::BgeI4(inst) => Some(inst.target),
			Inst::BgeI8(inst) => Some(inst.target),
			Inst::BgeR4(inst) => Some(inst.target),
			Inst::BgeR8(inst) => Some(inst.target),
			Inst::BgtI4(inst) => Some(inst.target),
			Inst::BgtI8(inst) => Some(inst.target),
			Inst::BgtR4(inst) => Some(inst.target),
			Inst::BgtR8(inst) => Some(inst.target),
			Inst::BleI4(inst) => Some(inst.target),
			Inst::BleI8(inst) => Some(inst.target),
			Inst::BleR4(inst) => Some(inst.target),
			Inst::BleR8(inst) => Some(inst.target),
			Inst::BltI4(inst) => Some(inst.target),
			Inst::BltI8(inst) => Some(inst.target),
			Inst::BltR4(inst) => Some(inst.target),
			Inst::BltR8(inst) => Some(inst.target),
			Inst::BneUnI4(inst) => Some(inst.target),
			Inst::BneUnI8(inst) => Some(inst.target),
			Inst::BneUnR4(inst) => Some(inst.target),
			Inst::BneUnR8(inst) => Some(inst.target),
			Inst::BgeUnI4(inst) => Some(inst.target),
			Inst::BgeUnI8(inst) => Some(inst.target),
			Inst::BgeUnR4(inst) => Some(inst.target),
			Inst::BgeUnR8(inst) => Some(inst.target),
			Inst::BgtUnI4(inst) => Some(inst.target),
			Inst::BgtUnI8(inst) => Some(inst.target),
			Inst::BgtUnR4(inst) => Some(inst.target),
			Inst::BgtUnR8(inst) => Some(inst.target),
			Inst::BleUnI4(inst) => Some(inst.target),
			Inst::BleUnI8(inst) => Some(inst.target),
			Inst::BleUnR4(inst) => Some(inst.target),
			Inst::BleUnR8(inst) => Some(inst.target),
			Inst::BltUnI4(inst) => Some(inst.target),
			Inst::BltUnI8(inst) => Some(inst.target),
			Inst::BltUnR4(inst) => Some(inst.target),
			Inst::BltUnR8(inst) => Some(inst.target),
			Inst::LeaveTryWithFinally(inst) => Some(inst.target),
			Inst::LeaveCatchWithFinally(inst) => Some(inst.target),
			Inst::LeaveCatchWithoutFinally(inst) => Some(inst.target),
			_ => None,
		}
	}
}

impl From<InitLocals1> for Inst {
	fn from(inst: InitLocals1) -> Self {
		Inst::InitLocals1(inst)
	}
}

impl From<InitLocals2> for Inst {
	fn from(inst: InitLocals2) -> Self {
		Inst::InitLocals2(inst)
	}
}

impl From<InitLocals3> for Inst {
	fn from(inst: InitLocals3) -> Self {
		Inst::InitLocals3(inst)
	}
}

impl From<InitLocals4> for Inst {
	fn from(inst: InitLocals4) -> Self {
		Inst::InitLocals4(inst)
	}
}

impl From<InitLocals> for Inst {
	fn from(inst: InitLocals) -> Self {
		Inst::InitLocals(inst)
	}
}

impl From<LdLocI1> for Inst {
	fn from(inst: LdLocI1) -> Self {
		Inst::LdLocI1(inst)
	}
}

impl From<LdLocU1> for Inst {
	fn from(inst: LdLocU1) -> Self {
		Inst::LdLocU1(inst)
	}
}

impl From<LdLocI2> for Inst {
	fn from(inst: LdLocI2) -> Self {
		Inst::LdLocI2(inst)
	}
}

impl From<LdLocU2> for Inst {
	fn from(inst: LdLocU2) -> Self {
		Inst::LdLocU2(inst)
	}
}

impl From<LdLocI4> for Inst {
	fn from(inst: LdLocI4) -> Self {
		Inst::LdLocI4(inst)
	}
}

impl From<LdLocI8> for Inst {
	fn from(inst: LdLocI8) -> Self {
		Inst::LdLocI8(inst)
	}
}

impl From<LdLocAny> for Inst {
	fn from(inst: LdLocAny) -> Self {
		Inst::LdLocAny(inst)
	}
}

impl From<LdLoca> for Inst {
	fn from(inst: LdLoca) -> Self {
		Inst::LdLoca(inst)
	}
}

impl From<StLocI1> for Inst {
	fn from(inst: StLocI1) -> Self {
		Inst::StLocI1(inst)
	}
}

impl From<StLocI2> for Inst {
	fn from(inst: StLocI2) -> Self {
		Inst::StLocI2(inst)
	}
}

impl From<StLocI4> for Inst {
	fn from(inst: StLocI4) -> Self {
		Inst::StLocI4(inst)
	}
}

impl From<StLocI8> for Inst {
	fn from(inst: StLocI8) -> Self {
		Inst::StLocI8(inst)
	}
}

impl From<StLocAny> for Inst {
	fn from(inst: StLocAny) -> Self {
		Inst::StLocAny(inst)
	}
}

impl From<LdNull> for Inst {
	fn from(inst: LdNull) -> Self {
		Inst::LdNull(inst)
	}
}

impl From<LdcI4I2> for Inst {
	fn from(inst: LdcI4I2) -> Self {
		Inst::LdcI4I2(inst)
	}
}

impl From<LdcI4I4> for Inst {
	fn from(inst: LdcI4I4) -> Self {
		Inst::LdcI4I4(inst)
	}
}

impl From<LdcI8I2> for Inst {
	fn from(inst: LdcI8I2) -> Self {
		Inst::LdcI8I2(inst)
	}
}

impl From<LdcI8I4> for Inst {
	fn from(inst: LdcI8I4) -> Self {
		Inst::LdcI8I4(inst)
	}
}

impl From<LdcI8I8> for Inst {
	fn from(inst: LdcI8I8) -> Self {
		Inst::LdcI8I8(inst)
	}
}

impl From<LdStr> for Inst {
	fn from(inst: LdStr) -> Self {
		Inst::LdStr(inst)
	}
}

impl From<LdToken> for Inst {
	fn from(inst: LdToken) -> Self {
		Inst::LdToken(inst)
	}
}

impl From<Br> for Inst {
	fn from(inst: Br) -> Self {
		Inst::Br(inst)
	}
}

impl From<BrTrueI4> for Inst {
	fn from(inst: BrTrueI4) -> Self {
		Inst::BrTrueI4(inst)
	}
}

impl From<BrFalseI4> for Inst {
	fn from(inst: BrFalseI4) -> Self {
		Inst::BrFalseI4(inst)
	}
}

impl From<BrTrueI8> for Inst {
	fn from(inst: BrTrueI8) -> Self {
		Inst::BrTrueI8(inst)
	}
}

impl From<BrFalseI8> for Inst {
	fn from(inst: BrFalseI8) -> Self {
		Inst::BrFalseI8(inst)
	}
}

impl From<BeqI4> for Inst {
	fn from(inst: BeqI4) -> Self {
		Inst::BeqI4(inst)
	}
}

impl From<BeqI8> for Inst {
	fn from(inst: BeqI8) -> Self {
		Inst::BeqI8(inst)
	}
}

impl From<BeqR4> for Inst {
	fn from(inst: BeqR4) -> Self {
		Inst::BeqR4(inst)
	}
}

impl From<BeqR8> for Inst {
	fn from(inst: BeqR8) -> Self {
		Inst::BeqR8(inst)
	}
}

impl From<BgeI4> for Inst {
	fn from(inst: BgeI4) -> Self {
		Inst::BgeI4(inst)
	}
}

impl From<BgeI8> for Inst {
	fn from(inst: BgeI8) -> Self {
		Inst::BgeI8(inst)
	}
}

impl From<BgeR4> for Inst {
	fn from(inst: BgeR4) -> Self {
		Inst::BgeR4(inst)
	}
}

impl From<BgeR8> for Inst {
	fn from(inst: BgeR8) -> Self {
		Inst::BgeR8(inst)
	}
}

impl From<BgtI4> for Inst {
	fn from(inst: BgtI4) -> Self {
		Inst::BgtI4(inst)
	}
}

impl From<BgtI8> for Inst {
	fn from(inst: BgtI8) -> Self {
		Inst::BgtI8(inst)
	}
}

impl From<BgtR4> for Inst {
	fn from(inst: BgtR4) -> Self {
		Inst::BgtR4(inst)
	}
}

impl From<BgtR8> for Inst {
	fn from(inst: BgtR8) -> Self {
		Inst::BgtR8(inst)
	}
}

impl From<BleI4> for Inst {
	fn from(inst: BleI4) -> Self {
		Inst::BleI4(inst)
	}
}

impl From<BleI8> for Inst {
	fn from(inst: BleI8) -> Self {
		Inst::BleI8(inst)
	}
}

impl From<BleR4> for Inst {
	fn from(inst: BleR4) -> Self {
		Inst::BleR4(inst)
	}
}

impl From<BleR8> for Inst {
	fn from(inst: BleR8) -> Self {
		Inst::BleR8(inst)
	}
}

impl From<BltI4> for Inst {
	fn from(inst: BltI4) -> Self {
		Inst::BltI4(inst)
	}
}

impl From<BltI8> for Inst {
	fn from(inst: BltI8) -> Self {
		Inst::BltI8(inst)
	}
}

impl From<BltR4> for Inst {
	fn from(inst: BltR4) -> Self {
		Inst::BltR4(inst)
	}
}

impl From<BltR8> for Inst {
	fn from(inst: BltR8) -> Self {
		Inst::BltR8(inst)
	}
}

impl From<BneUnI4> for Inst {
	fn from(inst: BneUnI4) -> Self {
		Inst::BneUnI4(inst)
	}
}

impl From<BneUnI8> for Inst {
	fn from(inst: BneUnI8) -> Self {
		Inst::BneUnI8(inst)
	}
}

impl From<BneUnR4> for Inst {
	fn from(inst: BneUnR4) -> Self {
		Inst::BneUnR4(inst)
	}
}

impl From<BneUnR8> for Inst {
	fn from(inst: BneUnR8) -> Self {
		Inst::BneUnR8(inst)
	}
}

impl From<BgeUnI4> for Inst {
	fn from(inst: BgeUnI4) -> Self {
		Inst::BgeUnI4(inst)
	}
}

impl From<BgeUnI8> for Inst {
	fn from(inst: BgeUnI8) -> Self {
		Inst::BgeUnI8(inst)
	}
}

impl From<BgeUnR4> for Inst {
	fn from(inst: BgeUnR4) -> Self {
		Inst::BgeUnR4(inst)
	}
}

impl From<BgeUnR8> for Inst {
	fn from(inst: BgeUnR8) -> Self {
		Inst::BgeUnR8(inst)
	}
}

impl From<BgtUnI4> for Inst {
	fn from(inst: BgtUnI4) -> Self {
		Inst::BgtUnI4(inst)
	}
}

impl From<BgtUnI8> for Inst {
	fn from(inst: BgtUnI8) -> Self {
		Inst::BgtUnI8(inst)
	}
}

impl From<BgtUnR4> for Inst {
	fn from(inst: BgtUnR4) -> Self {
		Inst::BgtUnR4(inst)
	}
}

impl From<BgtUnR8> for Inst {
	fn from(inst: BgtUnR8) -> Self {
		Inst::BgtUnR8(inst)
	}
}

impl From<BleUnI4> for Inst {
	fn from(inst: BleUnI4) -> Self {
		Inst::BleUnI4(inst)
	}
}

impl From<BleUnI8> for Inst {
	fn from(inst: BleUnI8) -> Self {
		Inst::BleUnI8(inst)
	}
}

impl From<BleUnR4> for Inst {
	fn from(inst: BleUnR4) -> Self {
		Inst::BleUnR4(inst)
	}
}

impl From<BleUnR8> for Inst {
	fn from(inst: BleUnR8) -> Self {
		Inst::BleUnR8(inst)
	}
}

impl From<BltUnI4> for Inst {
	fn from(inst: BltUnI4) -> Self {
		Inst::BltUnI4(inst)
	}
}

impl From<BltUnI8> for Inst {
	fn from(inst: BltUnI8) -> Self {
		Inst::BltUnI8(inst)
	}
}

impl From<BltUnR4> for Inst {
	fn from(inst: BltUnR4) -> Self {
		Inst::BltUnR4(inst)
	}
}

impl From<BltUnR8> for Inst {
	fn from(inst: BltUnR8) -> Self {
		Inst::BltUnR8(inst)
	}
}

impl From<Switch> for Inst {
	fn from(inst: Switch) -> Self {
		Inst::Switch(inst)
	}
}

impl From<AddI4> for Inst {
	fn from(inst: AddI4) -> Self {
		Inst::AddI4(inst)
	}
}

impl From<AddI8> for Inst {
	fn from(inst: AddI8) -> Self {
		Inst::AddI8(inst)
	}
}

impl From<AddR4> for Inst {
	fn from(inst: AddR4) -> Self {
		Inst::AddR4(inst)
	}
}

impl From<AddR8> for Inst {
	fn from(inst: AddR8) -> Self {
		Inst::AddR8(inst)
	}
}

impl From<SubI4> for Inst {
	fn from(inst: SubI4) -> Self {
		Inst::SubI4(inst)
	}
}

impl From<SubI8> for Inst {
	fn from(inst: SubI8) -> Self {
		Inst::SubI8(inst)
	}
}

impl From<SubR4> for Inst {
	fn from(inst: SubR4) -> Self {
		Inst::SubR4(inst)
	}
}

impl From<SubR8> for Inst {
	fn from(inst: SubR8) -> Self {
		Inst::SubR8(inst)
	}
}

impl From<MulI4> for Inst {
	fn from(inst: MulI4) -> Self {
		Inst::MulI4(inst)
	}
}

impl From<MulI8> for Inst {
	fn from(inst: MulI8) -> Self {
		Inst::MulI8(inst)
	}
}

impl From<MulR4> for Inst {
	fn from(inst: MulR4) -> Self {
		Inst::MulR4(inst)
	}
}

impl From<MulR8> for Inst {
	fn from(inst: MulR8) -> Self {
		Inst::MulR8(inst)
	}
}

impl From<DivI4> for Inst {
	fn from(inst: DivI4) -> Self {
		Inst::DivI4(inst)
	}
}

impl From<DivI8> for Inst {
	fn from(inst: DivI8) -> Self {
		Inst::DivI8(inst)
	}
}

impl From<DivR4> for Inst {
	fn from(inst: DivR4) -> Self {
		Inst::DivR4(inst)
	}
}

impl From<DivR8> for Inst {
	fn from(inst: DivR8) -> Self {
		Inst::DivR8(inst)
	}
}

impl From<RemI4> for Inst {
	fn from(inst: RemI4) -> Self {
		Inst::RemI4(inst)
	}
}

impl From<RemI8> for Inst {
	fn from(inst: RemI8) -> Self {
		Inst::RemI8(inst)
	}
}

impl From<RemR4> for Inst {
	fn from(inst: RemR4) -> Self {
		Inst::RemR4(inst)
	}
}

impl From<RemR8> for Inst {
	fn from(inst: RemR8) -> Self {
		Inst::RemR8(inst)
	}
}

impl From<DivUnI4> for Inst {
	fn from(inst: DivUnI4) -> Self {
		Inst::DivUnI4(inst)
	}
}

impl From<DivUnI8> for Inst {
	fn from(inst: DivUnI8) -> Self {
		Inst::DivUnI8(inst)
	}
}

impl From<RemUnI4> for Inst {
	fn from(inst: RemUnI4) -> Self {
		Inst::RemUnI4(inst)
	}
}

impl From<RemUnI8> for Inst {
	fn from(inst: RemUnI8) -> Self {
		Inst::RemUnI8(inst)
	}
}

impl From<AndI4> for Inst {
	fn from(inst: AndI4) -> Self {
		Inst::AndI4(inst)
	}
}

impl From<AndI8> for Inst {
	fn from(inst: AndI8) -> Self {
		Inst::AndI8(inst)
	}
}

impl From<OrI4> for Inst {
	fn from(inst: OrI4) -> Self {
		Inst::OrI4(inst)
	}
}

impl From<OrI8> for Inst {
	fn from(inst: OrI8) -> Self {
		Inst::OrI8(inst)
	}
}

impl From<XorI4> for Inst {
	fn from(inst: XorI4) -> Self {
		Inst::XorI4(inst)
	}
}

impl From<XorI8> for Inst {
	fn from(inst: XorI8) -> Self {
		Inst::XorI8(inst)
	}
}

impl From<ShlI4> for Inst {
	fn from(inst: ShlI4) -> Self {
		Inst::ShlI4(inst)
	}
}

impl From<ShlI8> for Inst {
	fn from(inst: ShlI8) -> Self {
		Inst::ShlI8(inst)
	}
}

impl From<ShrI4> for Inst {
	fn from(inst: ShrI4) -> Self {
		Inst::ShrI4(inst)
	}
}

impl From<ShrI8> for Inst {
	fn from(inst: ShrI8) -> Self {
		Inst::ShrI8(inst)
	}
}

impl From<ShrUnI4> for Inst {
	fn from(inst: ShrUnI4) -> Self {
		Inst::ShrUnI4(inst)
	}
}

impl From<ShrUnI8> for Inst {
	fn from(inst: ShrUnI8) -> Self {
		Inst::ShrUnI8(inst)
	}
}

impl From<NegI4> for Inst {
	fn from(inst: NegI4) -> Self {
		Inst::NegI4(inst)
	}
}

impl From<NegI8> for Inst {
	fn from(inst: NegI8) -> Self {
		Inst::NegI8(inst)
	}
}

impl From<NegR4> for Inst {
	fn from(inst: NegR4) -> Self {
		Inst::NegR4(inst)
	}
}

impl From<NegR8> for Inst {
	fn from(inst: NegR8) -> Self {
		Inst::NegR8(inst)
	}
}

impl From<NotI4> for Inst {
	fn from(inst: NotI4) -> Self {
		Inst::NotI4(inst)
	}
}

impl From<NotI8> for Inst {
	fn from(inst: NotI8) -> Self {
		Inst::NotI8(inst)
	}
}

impl From<ConvI1I4> for Inst {
	fn from(inst: ConvI1I4) -> Self {
		Inst::ConvI1I4(inst)
	}
}

impl From<ConvI1I8> for Inst {
	fn from(inst: ConvI1I8) -> Self {
		Inst::ConvI1I8(inst)
	}
}

impl From<ConvI1R4> for Inst {
	fn from(inst: ConvI1R4) -> Self {
		Inst::ConvI1R4(inst)
	}
}

impl From<ConvI1R8> for Inst {
	fn from(inst: ConvI1R8) -> Self {
		Inst::ConvI1R8(inst)
	}
}

impl From<ConvU1I4> for Inst {
	fn from(inst: ConvU1I4) -> Self {
		Inst::ConvU1I4(inst)
	}
}

impl From<ConvU1I8> for Inst {
	fn from(inst: ConvU1I8) -> Self {
		Inst::ConvU1I8(inst)
	}
}

impl From<ConvU1R4> for Inst {
	fn from(inst: ConvU1R4) -> Self {
		Inst::ConvU1R4(inst)
	}
}

impl From<ConvU1R8> for Inst {
	fn from(inst: ConvU1R8) -> Self {
		Inst::ConvU1R8(inst)
	}
}

impl From<ConvI2I4> for Inst {
	fn from(inst: ConvI2I4) -> Self {
		Inst::ConvI2I4(inst)
	}
}

impl From<ConvI2I8> for Inst {
	fn from(inst: ConvI2I8) -> Self {
		Inst::ConvI2I8(inst)
	}
}

impl From<ConvI2R4> for Inst {
	fn from(inst: ConvI2R4) -> Self {
		Inst::ConvI2R4(inst)
	}
}

impl From<ConvI2R8> for Inst {
	fn from(inst: ConvI2R8) -> Self {
		Inst::ConvI2R8(inst)
	}
}

impl From<ConvU2I4> for Inst {
	fn from(inst: ConvU2I4) -> Self {
		Inst::ConvU2I4(inst)
	}
}

impl From<ConvU2I8> for Inst {
	fn from(inst: ConvU2I8) -> Self {
		Inst::ConvU2I8(inst)
	}
}

impl From<ConvU2R4> for Inst {
	fn from(inst: ConvU2R4) -> Self {
		Inst::ConvU2R4(inst)
	}
}

impl From<ConvU2R8> for Inst {
	fn from(inst: ConvU2R8) -> Self {
		Inst::ConvU2R8(inst)
	}
}

impl From<ConvI4I8> for Inst {
	fn from(inst: ConvI4I8) -> Self {
		Inst::ConvI4I8(inst)
	}
}

impl From<ConvI4R4> for Inst {
	fn from(inst: ConvI4R4) -> Self {
		Inst::ConvI4R4(inst)
	}
}

impl From<ConvI4R8> for Inst {
	fn from(inst: ConvI4R8) -> Self {
		Inst::ConvI4R8(inst)
	}
}

impl From<ConvU4I8> for Inst {
	fn from(inst: ConvU4I8) -> Self {
		Inst::ConvU4I8(inst)
	}
}

impl From<ConvU4R4> for Inst {
	fn from(inst: ConvU4R4) -> Self {
		Inst::ConvU4R4(inst)
	}
}

impl From<ConvU4R8> for Inst {
	fn from(inst: ConvU4R8) -> Self {
		Inst::ConvU4R8(inst)
	}
}

impl From<ConvI8I4> for Inst {
	fn from(inst: ConvI8I4) -> Self {
		Inst::ConvI8I4(inst)
	}
}

impl From<ConvI8U4> for Inst {
	fn from(inst: ConvI8U4) -> Self {
		Inst::ConvI8U4(inst)
	}
}

impl From<ConvI8R4> for Inst {
	fn from(inst: ConvI8R4) -> Self {
		Inst::ConvI8R4(inst)
	}
}

impl From<ConvI8R8> for Inst {
	fn from(inst: ConvI8R8) -> Self {
		Inst::ConvI8R8(inst)
	}
}

impl From<ConvU8I4> for Inst {
	fn from(inst: ConvU8I4) -> Self {
		Inst::ConvU8I4(inst)
	}
}

impl From<ConvU8U4> for Inst {
	fn from(inst: ConvU8U4) -> Self {
		Inst::ConvU8U4(inst)
	}
}

impl From<ConvU8R4> for Inst {
	fn from(inst: ConvU8R4) -> Self {
		Inst::ConvU8R4(inst)
	}
}

impl From<ConvU8R8> for Inst {
	fn from(inst: ConvU8R8) -> Self {
		Inst::ConvU8R8(inst)
	}
}

impl From<ConvR4I4> for Inst {
	fn from(inst: ConvR4I4) -> Self {
		Inst::ConvR4I4(inst)
	}
}

impl From<ConvR4I8> for Inst {
	fn from(inst: ConvR4I8) -> Self {
		Inst::ConvR4I8(inst)
	}
}

impl From<ConvR4R8> for Inst {
	fn from(inst: ConvR4R8) -> Self {
		Inst::ConvR4R8(inst)
	}
}

impl From<ConvR4U4> for Inst {
	fn from(inst: ConvR4U4) -> Self {
		Inst::ConvR4U4(inst)
	}
}

impl From<ConvR4U8> for Inst {
	fn from(inst: ConvR4U8) -> Self {
		Inst::ConvR4U8(inst)
	}
}

impl From<ConvR8I4> for Inst {
	fn from(inst: ConvR8I4) -> Self {
		Inst::ConvR8I4(inst)
	}
}

impl From<ConvR8I8> for Inst {
	fn from(inst: ConvR8I8) -> Self {
		Inst::ConvR8I8(inst)
	}
}

impl From<ConvR8R4> for Inst {
	fn from(inst: ConvR8R4) -> Self {
		Inst::ConvR8R4(inst)
	}
}

impl From<ConvR8U4> for Inst {
	fn from(inst: ConvR8U4) -> Self {
		Inst::ConvR8U4(inst)
	}
}

impl From<ConvR8U8> for Inst {
	fn from(inst: ConvR8U8) -> Self {
		Inst::ConvR8U8(inst)
	}
}

impl From<CkFiniteR4> for Inst {
	fn from(inst: CkFiniteR4) -> Self {
		Inst::CkFiniteR4(inst)
	}
}

impl From<CkFiniteR8> for Inst {
	fn from(inst: CkFiniteR8) -> Self {
		Inst::CkFiniteR8(inst)
	}
}

impl From<CeqI4> for Inst {
	fn from(inst: CeqI4) -> Self {
		Inst::CeqI4(inst)
	}
}

impl From<CeqI8> for Inst {
	fn from(inst: CeqI8) -> Self {
		Inst::CeqI8(inst)
	}
}

impl From<CeqR4> for Inst {
	fn from(inst: CeqR4) -> Self {
		Inst::CeqR4(inst)
	}
}

impl From<CeqR8> for Inst {
	fn from(inst: CeqR8) -> Self {
		Inst::CeqR8(inst)
	}
}

impl From<CgtI4> for Inst {
	fn from(inst: CgtI4) -> Self {
		Inst::CgtI4(inst)
	}
}

impl From<CgtI8> for Inst {
	fn from(inst: CgtI8) -> Self {
		Inst::CgtI8(inst)
	}
}

impl From<CgtR4> for Inst {
	fn from(inst: CgtR4) -> Self {
		Inst::CgtR4(inst)
	}
}

impl From<CgtR8> for Inst {
	fn from(inst: CgtR8) -> Self {
		Inst::CgtR8(inst)
	}
}

impl From<CgtUnI4> for Inst {
	fn from(inst: CgtUnI4) -> Self {
		Inst::CgtUnI4(inst)
	}
}

impl From<CgtUnI8> for Inst {
	fn from(inst: CgtUnI8) -> Self {
		Inst::CgtUnI8(inst)
	}
}

impl From<CgtUnR4> for Inst {
	fn from(inst: CgtUnR4) -> Self {
		Inst::CgtUnR4(inst)
	}
}

impl From<CgtUnR8> for Inst {
	fn from(inst: CgtUnR8) -> Self {
		Inst::CgtUnR8(inst)
	}
}

impl From<CltI4> for Inst {
	fn from(inst: CltI4) -> Self {
		Inst::CltI4(inst)
	}
}

impl From<CltI8> for Inst {
	fn from(inst: CltI8) -> Self {
		Inst::CltI8(inst)
	}
}

impl From<CltR4> for Inst {
	fn from(inst: CltR4) -> Self {
		Inst::CltR4(inst)
	}
}

impl From<CltR8> for Inst {
	fn from(inst: CltR8) -> Self {
		Inst::CltR8(inst)
	}
}

impl From<CltUnI4> for Inst {
	fn from(inst: CltUnI4) -> Self {
		Inst::CltUnI4(inst)
	}
}

impl From<CltUnI8> for Inst {
	fn from(inst: CltUnI8) -> Self {
		Inst::CltUnI8(inst)
	}
}

impl From<CltUnR4> for Inst {
	fn from(inst: CltUnR4) -> Self {
		Inst::CltUnR4(inst)
	}
}

impl From<CltUnR8> for Inst {
	fn from(inst: CltUnR8) -> Self {
		Inst::CltUnR8(inst)
	}
}

impl From<LdIndI1> for Inst {
	fn from(inst: LdIndI1) -> Self {
		Inst::LdIndI1(inst)
	}
}

impl From<LdIndU1> for Inst {
	fn from(inst: LdIndU1) -> Self {
		Inst::LdIndU1(inst)
	}
}

impl From<LdIndI2> for Inst {
	fn from(inst: LdIndI2) -> Self {
		Inst::LdIndI2(inst)
	}
}

impl From<LdIndU2> for Inst {
	fn from(inst: LdIndU2) -> Self {
		Inst::LdIndU2(inst)
	}
}

impl From<LdIndI4> for Inst {
	fn from(inst: LdIndI4) -> Self {
		Inst::LdIndI4(inst)
	}
}

impl From<LdIndI8> for Inst {
	fn from(inst: LdIndI8) -> Self {
		Inst::LdIndI8(inst)
	}
}

impl From<LdIndRef> for Inst {
	fn from(inst: LdIndRef) -> Self {
		Inst::LdIndRef(inst)
	}
}

impl From<StIndI1> for Inst {
	fn from(inst: StIndI1) -> Self {
		Inst::StIndI1(inst)
	}
}

impl From<StIndI2> for Inst {
	fn from(inst: StIndI2) -> Self {
		Inst::StIndI2(inst)
	}
}

impl From<StIndI4> for Inst {
	fn from(inst: StIndI4) -> Self {
		Inst::StIndI4(inst)
	}
}

impl From<StIndI8> for Inst {
	fn from(inst: StIndI8) -> Self {
		Inst::StIndI8(inst)
	}
}

impl From<StIndRef> for Inst {
	fn from(inst: StIndRef) -> Self {
		Inst::StIndRef(inst)
	}
}

impl From<LocAlloc> for Inst {
	fn from(inst: LocAlloc) -> Self {
		Inst::LocAlloc(inst)
	}
}

impl From<InitBlk> for Inst {
	fn from(inst: InitBlk) -> Self {
		Inst::InitBlk(inst)
	}
}

impl From<CpBlk> for Inst {
	fn from(inst: CpBlk) -> Self {
		Inst::CpBlk(inst)
	}
}

impl From<GetEnumLongHashCode> for Inst {
	fn from(inst: GetEnumLongHashCode) -> Self {
		Inst::GetEnumLongHashCode(inst)
	}
}

impl From<InitObjI1> for Inst {
	fn from(inst: InitObjI1) -> Self {
		Inst::InitObjI1(inst)
	}
}

impl From<InitObjI2> for Inst {
	fn from(inst: InitObjI2) -> Self {
		Inst::InitObjI2(inst)
	}
}

impl From<InitObjI4> for Inst {
	fn from(inst: InitObjI4) -> Self {
		Inst::InitObjI4(inst)
	}
}

impl From<InitObjI8> for Inst {
	fn from(inst: InitObjI8) -> Self {
		Inst::InitObjI8(inst)
	}
}

impl From<InitObjAny> for Inst {
	fn from(inst: InitObjAny) -> Self {
		Inst::InitObjAny(inst)
	}
}

impl From<CpObjI1> for Inst {
	fn from(inst: CpObjI1) -> Self {
		Inst::CpObjI1(inst)
	}
}

impl From<CpObjI2> for Inst {
	fn from(inst: CpObjI2) -> Self {
		Inst::CpObjI2(inst)
	}
}

impl From<CpObjI4> for Inst {
	fn from(inst: CpObjI4) -> Self {
		Inst::CpObjI4(inst)
	}
}

impl From<CpObjI8> for Inst {
	fn from(inst: CpObjI8) -> Self {
		Inst::CpObjI8(inst)
	}
}

impl From<CpObjAny> for Inst {
	fn from(inst: CpObjAny) -> Self {
		Inst::CpObjAny(inst)
	}
}

impl From<LdObjAny> for Inst {
	fn from(inst: LdObjAny) -> Self {
		Inst::LdObjAny(inst)
	}
}

impl From<StObjAny> for Inst {
	fn from(inst: StObjAny) -> Self {
		Inst::StObjAny(inst)
	}
}

impl From<CastClass> for Inst {
	fn from(inst: CastClass) -> Self {
		Inst::CastClass(inst)
	}
}

impl From<IsInst> for Inst {
	fn from(inst: IsInst) -> Self {
		Inst::IsInst(inst)
	}
}

impl From<Box> for Inst {
	fn from(inst: Box) -> Self {
		Inst::Box(inst)
	}
}

impl From<Unbox> for Inst {
	fn from(inst: Unbox) -> Self {
		Inst::Unbox(inst)
	}
}

impl From<UnboxAny> for Inst {
	fn from(inst: UnboxAny) -> Self {
		Inst::UnboxAny(inst)
	}
}

impl From<NewArr> for Inst {
	fn from(inst: NewArr) -> Self {
		Inst::NewArr(inst)
	}
}

impl From<LdLen> for Inst {
	fn from(inst: LdLen) -> Self {
		Inst::LdLen(inst)
	}
}

impl From<Ldelema> for Inst {
	fn from(inst: Ldelema) -> Self {
		Inst::Ldelema(inst)
	}
}

impl From<LdelemaReadOnly> for Inst {
	fn from(inst: LdelemaReadOnly) -> Self {
		Inst::LdelemaReadOnly(inst)
	}
}

impl From<LdelemI1> for Inst {
	fn from(inst: LdelemI1) -> Self {
		Inst::LdelemI1(inst)
	}
}

impl From<LdelemU1> for Inst {
	fn from(inst: LdelemU1) -> Self {
		Inst::LdelemU1(inst)
	}
}

impl From<LdelemI2> for Inst {
	fn from(inst: LdelemI2) -> Self {
		Inst::LdelemI2(inst)
	}
}

impl From<LdelemU2> for Inst {
	fn from(inst: LdelemU2) -> Self {
		Inst::LdelemU2(inst)
	}
}

impl From<LdelemI4> for Inst {
	fn from(inst: LdelemI4) -> Self {
		Inst::LdelemI4(inst)
	}
}

impl From<LdelemI8> for Inst {
	fn from(inst: LdelemI8) -> Self {
		Inst::LdelemI8(inst)
	}
}

impl From<LdelemRef> for Inst {
	fn from(inst: LdelemRef) -> Self {
		Inst::LdelemRef(inst)
	}
}

impl From<LdelemAny> for Inst {
	fn from(inst: LdelemAny) -> Self {
		Inst::LdelemAny(inst)
	}
}

impl From<StelemI1> for Inst {
	fn from(inst: StelemI1) -> Self {
		Inst::StelemI1(inst)
	}
}

impl From<StelemI2> for Inst {
	fn from(inst: StelemI2) -> Self {
		Inst::StelemI2(inst)
	}
}

impl From<StelemI4> for Inst {
	fn from(inst: StelemI4) -> Self {
		Inst::StelemI4(inst)
	}
}

impl From<StelemI8> for Inst {
	fn from(inst: StelemI8) -> Self {
		Inst::StelemI8(inst)
	}
}

impl From<StelemRef> for Inst {
	fn from(inst: StelemRef) -> Self {
		Inst::StelemRef(inst)
	}
}

impl From<StelemAny> for Inst {
	fn from(inst: StelemAny) -> Self {
		Inst::StelemAny(inst)
	}
}

impl From<Ldftn> for Inst {
	fn from(inst: Ldftn) -> Self {
		Inst::Ldftn(inst)
	}
}

impl From<Ldvirtftn> for Inst {
	fn from(inst: Ldvirtftn) -> Self {
		Inst::Ldvirtftn(inst)
	}
}

impl From<LdfldI1> for Inst {
	fn from(inst: LdfldI1) -> Self {
		Inst::LdfldI1(inst)
	}
}

impl From<LdfldU1> for Inst {
	fn from(inst: LdfldU1) -> Self {
		Inst::LdfldU1(inst)
	}
}

impl From<LdfldI2> for Inst {
	fn from(inst: LdfldI2) -> Self {
		Inst::LdfldI2(inst)
	}
}

impl From<LdfldU2> for Inst {
	fn from(inst: LdfldU2) -> Self {
		Inst::LdfldU2(inst)
	}
}

impl From<LdfldI4> for Inst {
	fn from(inst: LdfldI4) -> Self {
		Inst::LdfldI4(inst)
	}
}

impl From<LdfldI8> for Inst {
	fn from(inst: LdfldI8) -> Self {
		Inst::LdfldI8(inst)
	}
}

impl From<LdfldAny> for Inst {
	fn from(inst: LdfldAny) -> Self {
		Inst::LdfldAny(inst)
	}
}

impl From<LdvfldI1> for Inst {
	fn from(inst: LdvfldI1) -> Self {
		Inst::LdvfldI1(inst)
	}
}

impl From<LdvfldU1> for Inst {
	fn from(inst: LdvfldU1) -> Self {
		Inst::LdvfldU1(inst)
	}
}

impl From<LdvfldI2> for Inst {
	fn from(inst: LdvfldI2) -> Self {
		Inst::LdvfldI2(inst)
	}
}

impl From<LdvfldU2> for Inst {
	fn from(inst: LdvfldU2) -> Self {
		Inst::LdvfldU2(inst)
	}
}

impl From<LdvfldI4> for Inst {
	fn from(inst: LdvfldI4) -> Self {
		Inst::LdvfldI4(inst)
	}
}

impl From<LdvfldI8> for Inst {
	fn from(inst: LdvfldI8) -> Self {
		Inst::LdvfldI8(inst)
	}
}

impl From<LdvfldAny> for Inst {
	fn from(inst: LdvfldAny) -> Self {
		Inst::LdvfldAny(inst)
	}
}

impl From<Ldflda> for Inst {
	fn from(inst: Ldflda) -> Self {
		Inst::Ldflda(inst)
	}
}

impl From<StfldI1> for Inst {
	fn from(inst: StfldI1) -> Self {
		Inst::StfldI1(inst)
	}
}

impl From<StfldI2> for Inst {
	fn from(inst: StfldI2) -> Self {
		Inst::StfldI2(inst)
	}
}

impl From<StfldI4> for Inst {
	fn from(inst: StfldI4) -> Self {
		Inst::StfldI4(inst)
	}
}

impl From<StfldI8> for Inst {
	fn from(inst: StfldI8) -> Self {
		Inst::StfldI8(inst)
	}
}

impl From<StfldAny> for Inst {
	fn from(inst: StfldAny) -> Self {
		Inst::StfldAny(inst)
	}
}

impl From<LdfldI1Large> for Inst {
	fn from(inst: LdfldI1Large) -> Self {
		Inst::LdfldI1Large(inst)
	}
}

impl From<LdfldU1Large> for Inst {
	fn from(inst: LdfldU1Large) -> Self {
		Inst::LdfldU1Large(inst)
	}
}

impl From<LdfldI2Large> for Inst {
	fn from(inst: LdfldI2Large) -> Self {
		Inst::LdfldI2Large(inst)
	}
}

impl From<LdfldU2Large> for Inst {
	fn from(inst: LdfldU2Large) -> Self {
		Inst::LdfldU2Large(inst)
	}
}

impl From<LdfldI4Large> for Inst {
	fn from(inst: LdfldI4Large) -> Self {
		Inst::LdfldI4Large(inst)
	}
}

impl From<LdfldI8Large> for Inst {
	fn from(inst: LdfldI8Large) -> Self {
		Inst::LdfldI8Large(inst)
	}
}

impl From<LdfldAnyLarge> for Inst {
	fn from(inst: LdfldAnyLarge) -> Self {
		Inst::LdfldAnyLarge(inst)
	}
}

impl From<LdfldaLarge> for Inst {
	fn from(inst: LdfldaLarge) -> Self {
		Inst::LdfldaLarge(inst)
	}
}

impl From<StfldI1Large> for Inst {
	fn from(inst: StfldI1Large) -> Self {
		Inst::StfldI1Large(inst)
	}
}

impl From<StfldI2Large> for Inst {
	fn from(inst: StfldI2Large) -> Self {
		Inst::StfldI2Large(inst)
	}
}

impl From<StfldI4Large> for Inst {
	fn from(inst: StfldI4Large) -> Self {
		Inst::StfldI4Large(inst)
	}
}

impl From<StfldI8Large> for Inst {
	fn from(inst: StfldI8Large) -> Self {
		Inst::StfldI8Large(inst)
	}
}

impl From<StfldAnyLarge> for Inst {
	fn from(inst: StfldAnyLarge) -> Self {
		Inst::StfldAnyLarge(inst)
	}
}

impl From<LdfldI2Unaligned> for Inst {
	fn from(inst: LdfldI2Unaligned) -> Self {
		Inst::LdfldI2Unaligned(inst)
	}
}

impl From<LdfldU2Unaligned> for Inst {
	fn from(inst: LdfldU2Unaligned) -> Self {
		Inst::LdfldU2Unaligned(inst)
	}
}

impl From<LdfldI4Unaligned> for Inst {
	fn from(inst: LdfldI4Unaligned) -> Self {
		Inst::LdfldI4Unaligned(inst)
	}
}

impl From<LdfldI8Unaligned> for Inst {
	fn from(inst: LdfldI8Unaligned) -> Self {
		Inst::LdfldI8Unaligned(inst)
	}
}

impl From<StfldI2Unaligned> for Inst {
	fn from(inst: StfldI2Unaligned) -> Self {
		Inst::StfldI2Unaligned(inst)
	}
}

impl From<StfldI4Unaligned> for Inst {
	fn from(inst: StfldI4Unaligned) -> Self {
		Inst::StfldI4Unaligned(inst)
	}
}

impl From<StfldI8Unaligned> for Inst {
	fn from(inst: StfldI8Unaligned) -> Self {
		Inst::StfldI8Unaligned(inst)
	}
}

impl From<LdIndI2Unaligned> for Inst {
	fn from(inst: LdIndI2Unaligned) -> Self {
		Inst::LdIndI2Unaligned(inst)
	}
}

impl From<LdIndU2Unaligned> for Inst {
	fn from(inst: LdIndU2Unaligned) -> Self {
		Inst::LdIndU2Unaligned(inst)
	}
}

impl From<LdIndI4Unaligned> for Inst {
	fn from(inst: LdIndI4Unaligned) -> Self {
		Inst::LdIndI4Unaligned(inst)
	}
}

impl From<LdIndI8Unaligned> for Inst {
	fn from(inst: LdIndI8Unaligned) -> Self {
		Inst::LdIndI8Unaligned(inst)
	}
}

impl From<StIndI2Unaligned> for Inst {
	fn from(inst: StIndI2Unaligned) -> Self {
		Inst::StIndI2Unaligned(inst)
	}
}

impl From<StIndI4Unaligned> for Inst {
	fn from(inst: StIndI4Unaligned) -> Self {
		Inst::StIndI4Unaligned(inst)
	}
}

impl From<StIndI8Unaligned> for Inst {
	fn from(inst: StIndI8Unaligned) -> Self {
		Inst::StIndI8Unaligned(inst)
	}
}

impl From<LdsfldI1> for Inst {
	fn from(inst: LdsfldI1) -> Self {
		Inst::LdsfldI1(inst)
	}
}

impl From<LdsfldU1> for Inst {
	fn from(inst: LdsfldU1) -> Self {
		Inst::LdsfldU1(inst)
	}
}

impl From<LdsfldI2> for Inst {
	fn from(inst: LdsfldI2) -> Self {
		Inst::LdsfldI2(inst)
	}
}

impl From<LdsfldU2> for Inst {
	fn from(inst: LdsfldU2) -> Self {
		Inst::LdsfldU2(inst)
	}
}

impl From<LdsfldI4> for Inst {
	fn from(inst: LdsfldI4) -> Self {
		Inst::LdsfldI4(inst)
	}
}

impl From<LdsfldI8> for Inst {
	fn from(inst: LdsfldI8) -> Self {
		Inst::LdsfldI8(inst)
	}
}

impl From<LdsfldAny> for Inst {
	fn from(inst: LdsfldAny) -> Self {
		Inst::LdsfldAny(inst)
	}
}

impl From<Ldsflda> for Inst {
	fn from(inst: Ldsflda) -> Self {
		Inst::Ldsflda(inst)
	}
}

impl From<LdsfldRvaData> for Inst {
	fn from(inst: LdsfldRvaData) -> Self {
		Inst::LdsfldRvaData(inst)
	}
}

impl From<StsfldI1> for Inst {
	fn from(inst: StsfldI1) -> Self {
		Inst::StsfldI1(inst)
	}
}

impl From<StsfldI2> for Inst {
	fn from(inst: StsfldI2) -> Self {
		Inst::StsfldI2(inst)
	}
}

impl From<StsfldI4> for Inst {
	fn from(inst: StsfldI4) -> Self {
		Inst::StsfldI4(inst)
	}
}

impl From<StsfldI8> for Inst {
	fn from(inst: StsfldI8) -> Self {
		Inst::StsfldI8(inst)
	}
}

impl From<StsfldAny> for Inst {
	fn from(inst: StsfldAny) -> Self {
		Inst::StsfldAny(inst)
	}
}

impl From<RetVoid> for Inst {
	fn from(inst: RetVoid) -> Self {
		Inst::RetVoid(inst)
	}
}

impl From<RetI4> for Inst {
	fn from(inst: RetI4) -> Self {
		Inst::RetI4(inst)
	}
}

impl From<RetI8> for Inst {
	fn from(inst: RetI8) -> Self {
		Inst::RetI8(inst)
	}
}

impl From<RetAny> for Inst {
	fn from(inst: RetAny) -> Self {
		Inst::RetAny(inst)
	}
}

impl From<CallInterp> for Inst {
	fn from(inst: CallInterp) -> Self {
		Inst::CallInterp(inst)
	}
}

impl From<CallVirtInterp> for Inst {
	fn from(inst: CallVirtInterp) -> Self {
		Inst::CallVirtInterp(inst)
	}
}

impl From<CallInternalCall> for Inst {
	fn from(inst: CallInternalCall) -> Self {
		Inst::CallInternalCall(inst)
	}
}

impl From<CallIntrinsic> for Inst {
	fn from(inst: CallIntrinsic) -> Self {
		Inst::CallIntrinsic(inst)
	}
}

impl From<CallPInvoke> for Inst {
	fn from(inst: CallPInvoke) -> Self {
		Inst::CallPInvoke(inst)
	}
}

impl From<CallRuntimeImplemented> for Inst {
	fn from(inst: CallRuntimeImplemented) -> Self {
		Inst::CallRuntimeImplemented(inst)
	}
}

impl From<CalliInterp> for Inst {
	fn from(inst: CalliInterp) -> Self {
		Inst::CalliInterp(inst)
	}
}

impl From<NewObjInterp> for Inst {
	fn from(inst: NewObjInterp) -> Self {
		Inst::NewObjInterp(inst)
	}
}

impl From<NewValueTypeInterp> for Inst {
	fn from(inst: NewValueTypeInterp) -> Self {
		Inst::NewValueTypeInterp(inst)
	}
}

impl From<NewObjInternalCall> for Inst {
	fn from(inst: NewObjInternalCall) -> Self {
		Inst::NewObjInternalCall(inst)
	}
}

impl From<NewObjIntrinsic> for Inst {
	fn from(inst: NewObjIntrinsic) -> Self {
		Inst::NewObjIntrinsic(inst)
	}
}

impl From<Throw> for Inst {
	fn from(inst: Throw) -> Self {
		Inst::Throw(inst)
	}
}

impl From<Rethrow> for Inst {
	fn from(inst: Rethrow) -> Self {
		Inst::Rethrow(inst)
	}
}

impl From<LeaveTryWithFinally> for Inst {
	fn from(inst: LeaveTryWithFinally) -> Self {
		Inst::LeaveTryWithFinally(inst)
	}
}

impl From<LeaveCatchWithFinally> for Inst {
	fn from(inst: LeaveCatchWithFinally) -> Self {
		Inst::LeaveCatchWithFinally(inst)
	}
}

impl From<LeaveCatchWithoutFinally> for Inst {
	fn from(inst: LeaveCatchWithoutFinally) -> Self {
		Inst::LeaveCatchWithoutFinally(inst)
	}
}

impl From<EndFilter> for Inst {
	fn from(inst: EndFilter) -> Self {
		Inst::EndFilter(inst)
	}
}

impl From<EndFinally> for Inst {
	fn from(inst: EndFinally) -> Self {
		Inst::EndFinally(inst)
	}
}

impl From<EndFault> for Inst {
	fn from(inst: EndFault) -> Self {
		Inst::EndFault(inst)
	}
}

impl From<AddOvfI4> for Inst {
	fn from(inst: AddOvfI4) -> Self {
		Inst::AddOvfI4(inst)
	}
}

impl From<AddOvfI8> for Inst {
	fn from(inst: AddOvfI8) -> Self {
		Inst::AddOvfI8(inst)
	}
}

impl From<AddOvfUnI4> for Inst {
	fn from(inst: AddOvfUnI4) -> Self {
		Inst::AddOvfUnI4(inst)
	}
}

impl From<AddOvfUnI8> for Inst {
	fn from(inst: AddOvfUnI8) -> Self {
		Inst::AddOvfUnI8(inst)
	}
}

impl From<SubOvfI4> for Inst {
	fn from(inst: SubOvfI4) -> Self {
		Inst::SubOvfI4(inst)
	}
}

impl From<SubOvfI8> for Inst {
	fn from(inst: SubOvfI8) -> Self {
		Inst::SubOvfI8(inst)
	}
}

impl From<SubOvfUnI4> for Inst {
	fn from(inst: SubOvfUnI4) -> Self {
		Inst::SubOvfUnI4(inst)
	}
}

impl From<SubOvfUnI8> for Inst {
	fn from(inst: SubOvfUnI8) -> Self {
		Inst::SubOvfUnI8(inst)
	}
}

impl From<MulOvfI4> for Inst {
	fn from(inst: MulOvfI4) -> Self {
		Inst::MulOvfI4(inst)
	}
}

impl From<MulOvfI8> for Inst {
	fn from(inst: MulOvfI8) -> Self {
		Inst::MulOvfI8(inst)
	}
}

impl From<MulOvfUnI4> for Inst {
	fn from(inst: MulOvfUnI4) -> Self {
		Inst::MulOvfUnI4(inst)
	}
}

impl From<MulOvfUnI8> for Inst {
	fn from(inst: MulOvfUnI8) -> Self {
		Inst::MulOvfUnI8(inst)
	}
}

impl From<ConvOvfI1I4> for Inst {
	fn from(inst: ConvOvfI1I4) -> Self {
		Inst::ConvOvfI1I4(inst)
	}
}

impl From<ConvOvfI1I8> for Inst {
	fn from(inst: ConvOvfI1I8) -> Self {
		Inst::ConvOvfI1I8(inst)
	}
}

impl From<ConvOvfI1R4> for Inst {
	fn from(inst: ConvOvfI1R4) -> Self {
		Inst::ConvOvfI1R4(inst)
	}
}

impl From<ConvOvfI1R8> for Inst {
	fn from(inst: ConvOvfI1R8) -> Self {
		Inst::ConvOvfI1R8(inst)
	}
}

impl From<ConvOvfU1I4> for Inst {
	fn from(inst: ConvOvfU1I4) -> Self {
		Inst::ConvOvfU1I4(inst)
	}
}

impl From<ConvOvfU1I8> for Inst {
	fn from(inst: ConvOvfU1I8) -> Self {
		Inst::ConvOvfU1I8(inst)
	}
}

impl From<ConvOvfU1R4> for Inst {
	fn from(inst: ConvOvfU1R4) -> Self {
		Inst::ConvOvfU1R4(inst)
	}
}

impl From<ConvOvfU1R8> for Inst {
	fn from(inst: ConvOvfU1R8) -> Self {
		Inst::ConvOvfU1R8(inst)
	}
}

impl From<ConvOvfI2I4> for Inst {
	fn from(inst: ConvOvfI2I4) -> Self {
		Inst::ConvOvfI2I4(inst)
	}
}

impl From<ConvOvfI2I8> for Inst {
	fn from(inst: ConvOvfI2I8) -> Self {
		Inst::ConvOvfI2I8(inst)
	}
}

impl From<ConvOvfI2R4> for Inst {
	fn from(inst: ConvOvfI2R4) -> Self {
		Inst::ConvOvfI2R4(inst)
	}
}

impl From<ConvOvfI2R8> for Inst {
	fn from(inst: ConvOvfI2R8) -> Self {
		Inst::ConvOvfI2R8(inst)
	}
}

impl From<ConvOvfU2I4> for Inst {
	fn from(inst: ConvOvfU2I4) -> Self {
		Inst::ConvOvfU2I4(inst)
	}
}

impl From<ConvOvfU2I8> for Inst {
	fn from(inst: ConvOvfU2I8) -> Self {
		Inst::ConvOvfU2I8(inst)
	}
}

impl From<ConvOvfU2R4> for Inst {
	fn from(inst: ConvOvfU2R4) -> Self {
		Inst::ConvOvfU2R4(inst)
	}
}

impl From<ConvOvfU2R8> for Inst {
	fn from(inst: ConvOvfU2R8) -> Self {
		Inst::ConvOvfU2R8(inst)
	}
}

impl From<ConvOvfI4I4> for Inst {
	fn from(inst: ConvOvfI4I4) -> Self {
		Inst::ConvOvfI4I4(inst)
	}
}

impl From<ConvOvfI4I8> for Inst {
	fn from(inst: ConvOvfI4I8) -> Self {
		Inst::ConvOvfI4I8(inst)
	}
}

impl From<ConvOvfI4R4> for Inst {
	fn from(inst: ConvOvfI4R4) -> Self {
		Inst::ConvOvfI4R4(inst)
	}
}

impl From<ConvOvfI4R8> for Inst {
	fn from(inst: ConvOvfI4R8) -> Self {
		Inst::ConvOvfI4R8(inst)
	}
}

impl From<ConvOvfU4I4> for Inst {
	fn from(inst: ConvOvfU4I4) -> Self {
		Inst::ConvOvfU4I4(inst)
	}
}

impl From<ConvOvfU4I8> for Inst {
	fn from(inst: ConvOvfU4I8) -> Self {
		Inst::ConvOvfU4I8(inst)
	}
}

impl From<ConvOvfU4R4> for Inst {
	fn from(inst: ConvOvfU4R4) -> Self {
		Inst::ConvOvfU4R4(inst)
	}
}

impl From<ConvOvfU4R8> for Inst {
	fn from(inst: ConvOvfU4R8) -> Self {
		Inst::ConvOvfU4R8(inst)
	}
}

impl From<ConvOvfI8I4> for Inst {
	fn from(inst: ConvOvfI8I4) -> Self {
		Inst::ConvOvfI8I4(inst)
	}
}

impl From<ConvOvfI8I8> for Inst {
	fn from(inst: ConvOvfI8I8) -> Self {
		Inst::ConvOvfI8I8(inst)
	}
}

impl From<ConvOvfI8R4> for Inst {
	fn from(inst: ConvOvfI8R4) -> Self {
		Inst::ConvOvfI8R4(inst)
	}
}

impl From<ConvOvfI8R8> for Inst {
	fn from(inst: ConvOvfI8R8) -> Self {
		Inst::ConvOvfI8R8(inst)
	}
}

impl From<ConvOvfU8I4> for Inst {
	fn from(inst: ConvOvfU8I4) -> Self {
		Inst::ConvOvfU8I4(inst)
	}
}

impl From<ConvOvfU8I8> for Inst {
	fn from(inst: ConvOvfU8I8) -> Self {
		Inst::ConvOvfU8I8(inst)
	}
}

impl From<ConvOvfU8R4> for Inst {
	fn from(inst: ConvOvfU8R4) -> Self {
		Inst::ConvOvfU8R4(inst)
	}
}

impl From<ConvOvfU8R8> for Inst {
	fn from(inst: ConvOvfU8R8) -> Self {
		Inst::ConvOvfU8R8(inst)
	}
}

impl From<ConvOvfI1U4Un> for Inst {
	fn from(inst: ConvOvfI1U4Un) -> Self {
		Inst::ConvOvfI1U4Un(inst)
	}
}

impl From<ConvOvfI1U8Un> for Inst {
	fn from(inst: ConvOvfI1U8Un) -> Self {
		Inst::ConvOvfI1U8Un(inst)
	}
}

impl From<ConvOvfU1U4Un> for Inst {
	fn from(inst: ConvOvfU1U4Un) -> Self {
		Inst::ConvOvfU1U4Un(inst)
	}
}

impl From<ConvOvfU1U8Un> for Inst {
	fn from(inst: ConvOvfU1U8Un) -> Self {
		Inst::ConvOvfU1U8Un(inst)
	}
}

impl From<ConvOvfI2U4Un> for Inst {
	fn from(inst: ConvOvfI2U4Un) -> Self {
		Inst::ConvOvfI2U4Un(inst)
	}
}

impl From<ConvOvfI2U8Un> for Inst {
	fn from(inst: ConvOvfI2U8Un) -> Self {
		Inst::ConvOvfI2U8Un(inst)
	}
}

impl From<ConvOvfU2U4Un> for Inst {
	fn from(inst: ConvOvfU2U4Un) -> Self {
		Inst::ConvOvfU2U4Un(inst)
	}
}

impl From<ConvOvfU2U8Un> for Inst {
	fn from(inst: ConvOvfU2U8Un) -> Self {
		Inst::ConvOvfU2U8Un(inst)
	}
}

impl From<ConvOvfI4U4Un> for Inst {
	fn from(inst: ConvOvfI4U4Un) -> Self {
		Inst::ConvOvfI4U4Un(inst)
	}
}

impl From<ConvOvfI4U8Un> for Inst {
	fn from(inst: ConvOvfI4U8Un) -> Self {
		Inst::ConvOvfI4U8Un(inst)
	}
}

impl From<ConvOvfU4U4Un> for Inst {
	fn from(inst: ConvOvfU4U4Un) -> Self {
		Inst::ConvOvfU4U4Un(inst)
	}
}

impl From<ConvOvfU4U8Un> for Inst {
	fn from(inst: ConvOvfU4U8Un) -> Self {
		Inst::ConvOvfU4U8Un(inst)
	}
}

impl From<ConvOvfI8U4Un> for Inst {
	fn from(inst: ConvOvfI8U4Un) -> Self {
		Inst::ConvOvfI8U4Un(inst)
	}
}

impl From<ConvOvfI8U8Un> for Inst {
	fn from(inst: ConvOvfI8U8Un) -> Self {
		Inst::ConvOvfI8U8Un(inst)
	}
}

impl From<ConvOvfU8U4Un> for Inst {
	fn from(inst: ConvOvfU8U4Un) -> Self {
		Inst::ConvOvfU8U4Un(inst)
	}
}

impl From<ConvOvfU8U8Un> for Inst {
	fn from(inst: ConvOvfU8U8Un) -> Self {
		Inst::ConvOvfU8U8Un(inst)
	}
}

impl From<Illegal> for Inst {
	fn from(inst: Illegal) -> Self {
		Inst::Illegal(inst)
	}
}

impl From<Nop> for Inst {
	fn from(inst: Nop) -> Self {
		Inst::Nop(inst)
	}
}

impl From<Arglist> for Inst {
	fn from(inst: Arglist) -> Self {
		Inst::Arglist(inst)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn encodings_are_unique_and_short_codes_fit_the_core_page() {
		let mut seen = std::collections::HashSet::new();
		for op in OpCode::ALL {
			let (prefix, code, short) = op.encoding();
			assert!(seen.insert((prefix, code)), "duplicate encoding for {op:?}");
			if prefix.is_none() {
				assert!(short);
				assert!(code <= MAX_SHORT_OPCODE);
			}
			assert_eq!(op.size() % 4, 0, "{op:?} is not 4-byte aligned");
			assert!(op.size() >= 4);
		}
	}

	#[test]
	fn decode_inverts_encode() {
		let inst = AddI4 { lhs: 0x1234, rhs: 0x0002, dst: 0x0340 };
		let mut bytes = vec![];
		inst.encode(&mut bytes, OpCode::AddI4);
		assert_eq!(bytes.len(), AddI4::WIDE_SIZE);
		let (op, _) = OpCode::from_bytes(&bytes, 0).unwrap();
		assert_eq!(op, OpCode::AddI4);
		assert_eq!(AddI4::decode(&bytes, 0, false), inst);

		let narrow = AddI4 { lhs: 3, rhs: 4, dst: 5 };
		assert!(narrow.fits_short());
		let mut bytes = vec![];
		narrow.encode(&mut bytes, OpCode::AddI4Short);
		assert_eq!(bytes.len(), AddI4::SHORT_SIZE);
		let (op, _) = OpCode::from_bytes(&bytes, 0).unwrap();
		assert_eq!(op, OpCode::AddI4Short);
		assert_eq!(AddI4::decode(&bytes, 0, true), narrow);
	}

	#[test]
	fn re_encoding_is_byte_identical() {
		let inst = LdfldAny { obj: 7, dst: 9, offset: 40, size: 16 };
		let mut first = vec![];
		inst.encode(&mut first, OpCode::LdfldAny);
		let decoded = LdfldAny::decode(&first, 0, false);
		let mut second = vec![];
		decoded.encode(&mut second, OpCode::LdfldAny);
		assert_eq!(first, second);
	}

	#[test]
	fn branch_displacements_narrow_only_in_range() {
		let near = Br { target: -100 };
		let far = Br { target: 300 };
		assert!(near.fits_short());
		assert!(!far.fits_short());
		let mut bytes = vec![];
		near.encode(&mut bytes, OpCode::BrShort);
		assert_eq!(Br::decode(&bytes, 0, true).target, -100);
	}
}
