//! The managed object model: every heap object begins with a header whose
//! first (and only) word is the `Class` pointer; boxed values, strings and
//! arrays lay their payloads out after it. The heap itself is a bump
//! allocator standing in for the external collector; the object-header
//! contract is what the rest of the runtime relies on.

use std::cell::RefCell;

use crate::error::{VmError, VmResult};
use crate::structured::Class;

/// Size of the object header: the `Class` pointer word.
pub const OBJECT_HEADER_SIZE: u32 = std::mem::size_of::<usize>() as u32;

/// Array payload: native-int length directly after the header, elements
/// 8-byte aligned after it.
pub const ARRAY_LENGTH_OFFSET: usize = OBJECT_HEADER_SIZE as usize;
pub const ARRAY_DATA_OFFSET: usize = ARRAY_LENGTH_OFFSET + 8;

/// String payload: `int32` length after the header, UTF-16 code units after.
pub const STRING_LENGTH_OFFSET: usize = OBJECT_HEADER_SIZE as usize;
pub const STRING_DATA_OFFSET: usize = STRING_LENGTH_OFFSET + 4;

/// A (possibly null) reference to a managed heap object.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct GcRef(*mut u8);

impl GcRef {
	pub const NULL: GcRef = GcRef(std::ptr::null_mut());

	#[inline]
	pub fn from_raw(ptr: *mut u8) -> Self {
		Self(ptr)
	}

	#[inline]
	pub fn raw(self) -> *mut u8 {
		self.0
	}

	#[inline]
	pub fn is_null(self) -> bool {
		self.0.is_null()
	}

	/// The class pointer stored in the header. The caller guarantees the
	/// reference is non-null and points at a live object of lifetime `'l`.
	#[inline]
	pub unsafe fn class<'l>(self) -> &'l Class<'l> {
		debug_assert!(!self.is_null());
		let ptr = *(self.0 as *const *const Class);
		&*ptr
	}

	/// First byte of user data, past the header.
	#[inline]
	pub fn data_ptr(self) -> *mut u8 {
		unsafe { self.0.add(OBJECT_HEADER_SIZE as usize) }
	}

	pub fn array_length(self) -> usize {
		unsafe { *(self.0.add(ARRAY_LENGTH_OFFSET) as *const usize) }
	}

	pub fn array_data(self) -> *mut u8 {
		unsafe { self.0.add(ARRAY_DATA_OFFSET) }
	}

	pub fn string_length(self) -> usize {
		unsafe { *(self.0.add(STRING_LENGTH_OFFSET) as *const i32) as usize }
	}

	pub fn string_chars(self) -> *const u16 {
		unsafe { self.0.add(STRING_DATA_OFFSET) as *const u16 }
	}

	pub fn string_code_units(self) -> Vec<u16> {
		let len = self.string_length();
		let mut units = Vec::with_capacity(len);
		for i in 0..len {
			units.push(unsafe { *self.string_chars().add(i) });
		}
		units
	}
}

const CHUNK_SIZE: usize = 1 << 20;

/// Bump-then-free heap: allocations never move and are released wholesale
/// when the heap is dropped; the real collector is an external collaborator.
pub struct Heap {
	chunks: RefCell<Vec<Box<[u8]>>>,
	cursor: RefCell<usize>,
}

impl Heap {
	pub fn new() -> Self {
		Self {
			chunks: RefCell::new(vec![]),
			cursor: RefCell::new(CHUNK_SIZE),
		}
	}

	/// Zeroed, 8-byte aligned raw allocation.
	pub fn alloc_bytes(&self, size: usize) -> VmResult<*mut u8> {
		let aligned = size.div_ceil(8) * 8;
		if aligned > CHUNK_SIZE {
			let chunk = vec![0u8; aligned].into_boxed_slice();
			let mut chunks = self.chunks.borrow_mut();
			let ptr = chunk.as_ptr() as *mut u8;
			// Dedicated chunks go below the active one so the cursor is
			// untouched.
			let active = chunks.len().saturating_sub(1);
			chunks.insert(active, chunk);
			return Ok(ptr);
		}

		let mut cursor = self.cursor.borrow_mut();
		let mut chunks = self.chunks.borrow_mut();
		if *cursor + aligned > CHUNK_SIZE || chunks.is_empty() {
			chunks.push(vec![0u8; CHUNK_SIZE].into_boxed_slice());
			*cursor = 0;
		}
		let chunk = chunks.last_mut().ok_or(VmError::OutOfMemory)?;
		let ptr = unsafe { chunk.as_mut_ptr().add(*cursor) };
		*cursor += aligned;
		Ok(ptr)
	}

	/// Allocates an object with `data_size` bytes of user data and writes
	/// the class header. The header word never changes after this.
	pub fn alloc_object(&self, class: &Class, data_size: usize) -> VmResult<GcRef> {
		let total = OBJECT_HEADER_SIZE as usize + data_size;
		let ptr = self.alloc_bytes(total)?;
		unsafe {
			*(ptr as *mut *const Class) = class as *const Class;
		}
		Ok(GcRef::from_raw(ptr))
	}

	pub fn alloc_array(&self, class: &Class, element_size: usize, length: usize) -> VmResult<GcRef> {
		let data = length
			.checked_mul(element_size)
			.ok_or(VmError::OutOfMemory)?;
		let total = ARRAY_DATA_OFFSET + data;
		let ptr = self.alloc_bytes(total)?;
		unsafe {
			*(ptr as *mut *const Class) = class as *const Class;
			*(ptr.add(ARRAY_LENGTH_OFFSET) as *mut usize) = length;
		}
		Ok(GcRef::from_raw(ptr))
	}

	pub fn alloc_string(&self, class: &Class, units: &[u16]) -> VmResult<GcRef> {
		let total = STRING_DATA_OFFSET + units.len() * 2;
		let ptr = self.alloc_bytes(total)?;
		unsafe {
			*(ptr as *mut *const Class) = class as *const Class;
			*(ptr.add(STRING_LENGTH_OFFSET) as *mut i32) = units.len() as i32;
			std::ptr::copy_nonoverlapping(
				units.as_ptr(),
				ptr.add(STRING_DATA_OFFSET) as *mut u16,
				units.len(),
			);
		}
		Ok(GcRef::from_raw(ptr))
	}
}

impl Default for Heap {
	fn default() -> Self {
		Self::new()
	}
}
