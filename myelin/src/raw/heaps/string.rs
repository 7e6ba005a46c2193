use std::fmt::{Debug, Formatter};
use std::io::{Cursor, Error, ErrorKind};

use crate::raw::heaps::{SizeDebugWrapper, StringIndex};
use crate::utilities::read_compressed_u32;

#[derive(Copy, Clone)]
pub struct StringHeap<'l> {
	data: &'l [u8],
}

impl<'l> TryFrom<&'l [u8]> for StringHeap<'l> {
	type Error = Error;
	fn try_from(data: &'l [u8]) -> Result<Self, Self::Error> {
		match data {
			[0, ..] => Ok(Self { data }),
			_ => Err(ErrorKind::InvalidData.into()),
		}
	}
}

impl<'l> StringHeap<'l> {
	pub fn get(&self, idx: StringIndex) -> Option<&'l str> {
		let slice = self.data.get(idx.0..)?;
		let end = slice.iter().position(|c| *c == 0)?;
		std::str::from_utf8(&slice[..end]).ok()
	}
}

impl Debug for StringHeap<'_> {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let mut dbg = f.debug_struct("StringHeap");
		dbg.field("data", &SizeDebugWrapper::new(self.data.len()));
		dbg.finish()
	}
}

#[derive(Copy, Clone)]
pub struct UserStringHeap<'l> {
	data: &'l [u8],
}

impl<'l> From<&'l [u8]> for UserStringHeap<'l> {
	fn from(data: &'l [u8]) -> Self {
		Self { data }
	}
}

impl<'l> UserStringHeap<'l> {
	/// Returns the UTF-16 code units of the user string at `offset`.
	///
	/// The blob length counts bytes and includes a trailing flag byte, so the
	/// character data is the even prefix.
	pub fn get(&self, offset: usize) -> Option<UserString<'l>> {
		let slice = self.data.get(offset..)?;
		let mut stream = Cursor::new(slice);
		let len = read_compressed_u32(&mut stream).ok()? as usize;
		let start = stream.position() as usize;
		let bytes = slice.get(start..start + (len & !1))?;
		Some(UserString { bytes })
	}
}

impl Debug for UserStringHeap<'_> {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let mut dbg = f.debug_struct("UserStringHeap");
		dbg.field("data", &SizeDebugWrapper::new(self.data.len()));
		dbg.finish()
	}
}

#[derive(Copy, Clone, Eq, PartialEq)]
pub struct UserString<'l> {
	bytes: &'l [u8],
}

impl<'l> UserString<'l> {
	pub fn code_units(&self) -> impl ExactSizeIterator<Item = u16> + 'l {
		self.bytes
			.chunks_exact(2)
			.map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
	}

	pub fn len(&self) -> usize {
		self.bytes.len() / 2
	}

	pub fn is_empty(&self) -> bool {
		self.bytes.is_empty()
	}
}

impl Debug for UserString<'_> {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "\"{}\"", String::from_utf16_lossy(&self.code_units().collect::<Vec<_>>()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn user_string_round_trip() {
		// "Hi" encoded: length 5 (2 chars * 2 bytes + flag), chars, flag byte.
		let heap_bytes = [0x00, 0x05, b'H', 0x00, b'i', 0x00, 0x00];
		let heap = UserStringHeap::from(heap_bytes.as_slice());
		let str = heap.get(1).unwrap();
		assert_eq!(str.len(), 2);
		assert_eq!(str.code_units().collect::<Vec<_>>(), ['H' as u16, 'i' as u16]);
	}
}
