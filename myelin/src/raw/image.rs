use std::io::{Cursor, Error, ErrorKind, Read, Seek, SeekFrom};
use std::sync::Arc;

use bitflags::bitflags;

use crate::raw::heaps::table::TableHeap;
use crate::raw::heaps::{BlobHeap, GuidHeap, MetadataHeap, StringHeap, UserStringHeap};
use crate::raw::indices::metadata_token::MetadataToken;
use crate::raw::pe::{DataDirectory, ImageOptionalHeader, PEFile};
use crate::utilities::{impl_from_byte_stream, FromByteStream};

#[repr(C)]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct CLIHeader {
	pub size_in_bytes: u32,
	pub major_runtime_version: u16,
	pub minor_runtime_version: u16,
	pub metadata: DataDirectory,
	pub flags: RuntimeFlags,
	pub entry_point_token: u32,
	pub resources: DataDirectory,
	pub strong_name_signature: u64,
	pub code_manager_table: u64,
	pub v_table_fixups: u64,
	pub export_address_table_jumps: u64,
	pub managed_native_header: u64,
}

impl_from_byte_stream!(CLIHeader);

bitflags! {
	#[derive(Debug, Copy, Clone, Eq, PartialEq)]
	pub struct RuntimeFlags: u32 {
		const IL_ONLY = 0x1;
		const REQUIRE_32_BIT = 0x2;
		const IL_LIBRARY = 0x4;
		const STRONG_NAME_SIGNED = 0x8;
		const PREFER_32_BIT = 0x00020000;
	}
}

impl_from_byte_stream!(RuntimeFlags);

#[derive(Debug, Clone)]
pub struct MetadataRoot<'l> {
	major_version: u16,
	minor_version: u16,
	version: Arc<str>,
	flags: u16,
	heaps: Arc<[Arc<MetadataHeap<'l>>]>,
}

impl<'l> MetadataRoot<'l> {
	#[tracing::instrument(skip_all)]
	pub fn read(data: &'l [u8]) -> std::io::Result<Self> {
		let mut stream = Cursor::new(data);
		if u32::read(&mut stream, &())? != 0x424A5342 {
			return Err(ErrorKind::InvalidData.into());
		}

		let major_version = u16::read(&mut stream, &())?;
		let minor_version = u16::read(&mut stream, &())?;
		stream.seek(SeekFrom::Current(4))?; // Reserved

		let length = ((u32::read(&mut stream, &())? + 3) / 4) * 4; // Round length to 4
		let mut bytes = vec![0; length as usize];
		stream.read_exact(&mut bytes)?;
		let version_end = bytes.iter().position(|b| *b == 0).unwrap_or(bytes.len());
		let Ok(version) = std::str::from_utf8(&bytes[..version_end]).map(Arc::<str>::from) else {
			return Err(ErrorKind::InvalidData.into());
		};

		let flags = u16::read(&mut stream, &())?;

		let stream_header_count = u16::read(&mut stream, &())? as usize;
		let mut heaps = vec![];
		for _ in 0..stream_header_count {
			let heap = MetadataHeap::read(&mut stream, data)?;
			heaps.push(Arc::new(heap));
		}

		Ok(Self {
			major_version,
			minor_version,
			version,
			flags,
			heaps: Arc::from(heaps),
		})
	}

	pub fn flags(&self) -> u16 {
		self.flags
	}
	pub fn version(&self) -> &str {
		&self.version
	}
	pub fn minor_version(&self) -> u16 {
		self.minor_version
	}
	pub fn major_version(&self) -> u16 {
		self.major_version
	}
	#[allow(private_bounds)]
	pub fn get_heap<T>(&self) -> Option<&T>
	where
		Self: GetHeap<T>,
	{
		<Self as GetHeap<T>>::get_heap(self)
	}
}

/// A loaded module file: the PE wrapper, the CLI header and the undecoded
/// metadata view. Purely byte-level; no semantic resolution happens here.
#[derive(Debug)]
pub struct Image<'l> {
	pe_file: PEFile<'l>,
	cli_header: CLIHeader,
	metadata_root: MetadataRoot<'l>,
}

impl<'l> TryFrom<PEFile<'l>> for Image<'l> {
	type Error = Error;
	#[tracing::instrument(skip_all, name = "<Image as TryFrom<PEFile>>::try_from")]
	fn try_from(pe: PEFile<'l>) -> Result<Self, Self::Error> {
		if pe.pe_header.image_optional_header == ImageOptionalHeader::None {
			return Err(Error::new(ErrorKind::InvalidData, "Missing optional PE header"));
		}
		let Some(data_dir) = pe.pe_header.image_optional_header.data_directory(14) else {
			return Err(ErrorKind::NotFound.into());
		};

		let Some(data) = pe.resolve_rva(data_dir.virtual_address) else {
			return Err(ErrorKind::InvalidData.into());
		};
		let mut cursor = Cursor::new(data);
		let cli_header = CLIHeader::read(&mut cursor, &())?;

		let Some(data) = pe.resolve_rva(cli_header.metadata.virtual_address) else {
			return Err(ErrorKind::InvalidData.into());
		};
		let metadata_root = MetadataRoot::read(data)?;

		Ok(Self {
			pe_file: pe,
			cli_header,
			metadata_root,
		})
	}
}

impl<'l> Image<'l> {
	pub fn read(data: &'l [u8]) -> std::io::Result<Self> {
		let pe = PEFile::try_from(data).map_err(|e| Error::new(ErrorKind::InvalidData, e))?;
		Self::try_from(pe)
	}

	pub fn pe_file(&self) -> &PEFile<'l> {
		&self.pe_file
	}

	pub fn cli_header(&self) -> CLIHeader {
		self.cli_header
	}

	pub fn metadata_root(&self) -> &MetadataRoot<'l> {
		&self.metadata_root
	}

	pub fn entry_point_token(&self) -> Option<MetadataToken> {
		MetadataToken::try_from(self.cli_header.entry_point_token)
			.ok()
			.filter(|t| !t.is_null())
	}

	pub fn resolve_rva(&self, rva: u32) -> Option<&'l [u8]> {
		self.pe_file.resolve_rva(rva)
	}

	pub fn rva_to_image_offset(&self, rva: u32) -> Option<u32> {
		self.pe_file.rva_to_image_offset(rva)
	}

	pub fn strings(&self) -> Option<&StringHeap<'l>> {
		self.metadata_root.get_heap::<StringHeap>()
	}

	pub fn user_strings(&self) -> Option<&UserStringHeap<'l>> {
		self.metadata_root.get_heap::<UserStringHeap>()
	}

	pub fn blobs(&self) -> Option<&BlobHeap<'l>> {
		self.metadata_root.get_heap::<BlobHeap>()
	}

	pub fn guids(&self) -> Option<&GuidHeap<'l>> {
		self.metadata_root.get_heap::<GuidHeap>()
	}

	pub fn tables(&self) -> Option<&TableHeap> {
		self.metadata_root.get_heap::<TableHeap>()
	}
}

trait GetHeap<T> {
	fn get_heap(&self) -> Option<&T>;
}

impl<'l> GetHeap<BlobHeap<'l>> for MetadataRoot<'l> {
	fn get_heap(&self) -> Option<&BlobHeap<'l>> {
		self.heaps.iter().find_map(|h| match &**h {
			MetadataHeap::Blob(h) => Some(h),
			_ => None,
		})
	}
}

impl<'l> GetHeap<GuidHeap<'l>> for MetadataRoot<'l> {
	fn get_heap(&self) -> Option<&GuidHeap<'l>> {
		self.heaps.iter().find_map(|h| match &**h {
			MetadataHeap::Guid(h) => Some(h),
			_ => None,
		})
	}
}

impl<'l> GetHeap<StringHeap<'l>> for MetadataRoot<'l> {
	fn get_heap(&self) -> Option<&StringHeap<'l>> {
		self.heaps.iter().find_map(|h| match &**h {
			MetadataHeap::String(h) => Some(h),
			_ => None,
		})
	}
}

impl<'l> GetHeap<UserStringHeap<'l>> for MetadataRoot<'l> {
	fn get_heap(&self) -> Option<&UserStringHeap<'l>> {
		self.heaps.iter().find_map(|h| match &**h {
			MetadataHeap::UserString(h) => Some(h),
			_ => None,
		})
	}
}

impl<'l> GetHeap<TableHeap> for MetadataRoot<'l> {
	fn get_heap(&self) -> Option<&TableHeap> {
		self.heaps.iter().find_map(|h| match &**h {
			MetadataHeap::Table(h) => Some(h),
			_ => None,
		})
	}
}
