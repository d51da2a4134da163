//! Byte movement for container rewrites.
//!
//! Every write operation builds its output the same way: placeholder
//! index, page-aligned binary slabs, preserved trailing junk, then the
//! real index over the placeholder. This module owns the primitives —
//! zero padding, bulk stream copies that survive interrupted syscalls,
//! junk discovery — plus the scoped guard that deletes a half-written
//! output when an operation fails.

use crate::container::{disk_format_size, FatElfHeader};
use crate::error::{FatElfError, Result};
use std::fs::File;
use std::io::{ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

/// Stream copy buffer size.
pub const COPY_BUFFER_SIZE: usize = 256 * 1024;

/// Zero-fill buffer size.
const ZERO_BUFFER_SIZE: usize = 4096;

/// Read into `buf`, retrying on interrupted syscalls. May return fewer
/// bytes than requested only at EOF.
fn retry_read<R: Read>(reader: &mut R, buf: &mut [u8]) -> std::io::Result<usize> {
    loop {
        match reader.read(buf) {
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            other => return other,
        }
    }
}

/// Write `len` zero bytes at the current position.
pub fn write_zeros<W: Write>(writer: &mut W, mut len: u64) -> Result<()> {
    let zeros = [0u8; ZERO_BUFFER_SIZE];
    while len > 0 {
        let count = len.min(ZERO_BUFFER_SIZE as u64) as usize;
        writer.write_all(&zeros[..count])?;
        len -= count as u64;
    }
    Ok(())
}

/// Copy `reader` from its start to EOF into `writer` at its current
/// position. Returns the number of bytes copied.
pub fn copy_all<R: Read + Seek, W: Write>(reader: &mut R, writer: &mut W) -> Result<u64> {
    let mut buf = vec![0u8; COPY_BUFFER_SIZE];
    let mut copied = 0u64;
    reader.seek(SeekFrom::Start(0))?;
    loop {
        let count = retry_read(reader, &mut buf)?;
        if count == 0 {
            return Ok(copied);
        }
        writer.write_all(&buf[..count])?;
        copied += count as u64;
    }
}

/// Copy exactly `size` bytes starting at `offset` in `reader` into
/// `writer` at its current position. A source shorter than the range is
/// an error.
pub fn copy_range<R: Read + Seek, W: Write>(
    reader: &mut R,
    writer: &mut W,
    offset: u64,
    size: u64,
) -> Result<()> {
    let mut buf = vec![0u8; COPY_BUFFER_SIZE];
    let mut remaining = size;
    reader.seek(SeekFrom::Start(offset))?;
    while remaining > 0 {
        let want = remaining.min(COPY_BUFFER_SIZE as u64) as usize;
        let count = retry_read(reader, &mut buf[..want])?;
        if count == 0 {
            return Err(FatElfError::Io(ErrorKind::UnexpectedEof.into()));
        }
        writer.write_all(&buf[..count])?;
        remaining -= count as u64;
    }
    Ok(())
}

/// Locate trailing junk in a container: bytes past the furthest record
/// end (floored at the index's own disk size). Returns `(offset, len)`
/// if the file is longer than its furthest edge.
pub fn find_junk<R: Seek>(reader: &mut R, header: &FatElfHeader) -> Result<Option<(u64, u64)>> {
    let file_size = reader.seek(SeekFrom::End(0))?;
    let mut edge = disk_format_size(header.records.len()) as u64;
    for rec in &header.records {
        edge = edge.max(rec.offset.saturating_add(rec.size));
    }
    if file_size > edge {
        Ok(Some((edge, file_size - edge)))
    } else {
        Ok(None)
    }
}

/// Copy the source container's trailing junk, if any, to the current
/// output position. Returns the number of junk bytes appended.
pub fn append_junk<R: Read + Seek, W: Write>(
    reader: &mut R,
    writer: &mut W,
    header: &FatElfHeader,
) -> Result<u64> {
    match find_junk(reader, header)? {
        Some((offset, len)) => {
            copy_range(reader, writer, offset, len)?;
            Ok(len)
        }
        None => Ok(0),
    }
}

/// An output file that is deleted unless the operation completes.
///
/// Created before any write begins; [`commit`](OutputFile::commit)
/// releases the file on success. If the guard is dropped first — any
/// error path — the half-written output is removed from disk.
#[derive(Debug)]
pub struct OutputFile {
    path: PathBuf,
    file: File,
    committed: bool,
}

impl OutputFile {
    /// Create (or truncate) the output file at `path`.
    pub fn create(path: &Path) -> Result<Self> {
        let mut options = File::options();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o755);
        }
        let file = options.open(path).map_err(|source| FatElfError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(OutputFile {
            path: path.to_path_buf(),
            file,
            committed: false,
        })
    }

    /// The underlying file handle.
    pub fn file_mut(&mut self) -> &mut File {
        &mut self.file
    }

    /// Flush and keep the output.
    pub fn commit(mut self) -> Result<()> {
        self.file.flush()?;
        self.committed = true;
        Ok(())
    }
}

impl Drop for OutputFile {
    fn drop(&mut self) {
        if !self.committed {
            // Nothing useful to do if the unlink fails too.
            let _ = std::fs::remove_file(&self.path);
        }
    }
}
