//! ELF identification probe.
//!
//! FatELF only ever looks at the first 20 bytes of an embedded binary:
//! enough to cover the identification block and `e_machine`. Everything
//! past that is opaque payload.

use crate::container::{FatElfRecord, FATELF_32BITS, FATELF_64BITS};
use crate::error::{FatElfError, Result};
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

/// ELF magic bytes: 0x7F 'E' 'L' 'F'
pub const ELF_MAGIC: [u8; 4] = [0x7F, b'E', b'L', b'F'];

/// Bytes of ELF header the probe reads.
pub const PROBE_SIZE: usize = 20;

/// Probe the ELF at `offset` in `reader` and build a record describing
/// its target.
///
/// Reads exactly [`PROBE_SIZE`] bytes and extracts the word size, byte
/// order, OSABI, ABI version, and machine. `machine` is stored in the
/// ELF header in the binary's own byte order, so it is swapped according
/// to the probed encoding, never the host's. The returned record's
/// `offset` and `size` are zero; placement is the layout engine's job.
///
/// `path` is only used in diagnostics.
pub fn probe_elf_header<R: Read + Seek>(
    path: &Path,
    reader: &mut R,
    offset: u64,
) -> Result<FatElfRecord> {
    let mut buf = [0u8; PROBE_SIZE];
    reader.seek(SeekFrom::Start(offset))?;
    reader
        .read_exact(&mut buf)
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::UnexpectedEof => FatElfError::NotElf {
                path: path.to_path_buf(),
            },
            _ => FatElfError::Io(e),
        })?;

    if buf[0..4] != ELF_MAGIC {
        return Err(FatElfError::NotElf {
            path: path.to_path_buf(),
        });
    }

    let word_size = buf[4];
    if word_size != FATELF_32BITS && word_size != FATELF_64BITS {
        return Err(FatElfError::UnsupportedWordSize {
            path: path.to_path_buf(),
            value: word_size,
        });
    }

    let byte_order = buf[5];
    let machine = match byte_order {
        0 => (u16::from(buf[18]) << 8) | u16::from(buf[19]), // bigendian
        1 => (u16::from(buf[19]) << 8) | u16::from(buf[18]), // littleendian
        _ => {
            return Err(FatElfError::UnsupportedByteOrder {
                path: path.to_path_buf(),
                value: byte_order,
            })
        }
    };

    Ok(FatElfRecord {
        machine,
        osabi: buf[7],
        osabi_version: buf[8],
        word_size,
        byte_order,
        ..Default::default()
    })
}
