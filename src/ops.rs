//! The FatELF operations.
//!
//! Each public function here is the whole recipe behind one command-line
//! utility: open the inputs, drive the probe/selector/layout machinery,
//! and either commit the output or let the guard delete it. Nothing in
//! this module terminates the process; errors bubble to the binaries.

use crate::container::{
    align_to_page, disk_format_size, read_header, write_header, FatElfHeader, FatElfRecord,
    FATELF_32BITS, MAX_RECORDS,
};
use crate::elf::probe_elf_header;
use crate::error::{FatElfError, Result};
use crate::layout::{append_junk, copy_all, copy_range, find_junk, write_zeros, OutputFile};
use crate::tables;
use crate::target::{find_record, minimal_wants, record_target_name, Wants};
use serde::Serialize;
use std::fmt;
use std::fs::File;
use std::path::{Path, PathBuf};

fn open_input(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| FatElfError::OpenFailed {
        path: path.to_path_buf(),
        source,
    })
}

/// Combine `inputs` (one ELF per target) into a new container at `out`.
///
/// Inputs are laid out page-aligned in argument order. Two inputs for
/// the same target are rejected. Returns the written index.
pub fn glue(out: &Path, inputs: &[PathBuf]) -> Result<FatElfHeader> {
    if inputs.is_empty() {
        return Err(FatElfError::NothingToDo);
    }
    if inputs.len() > MAX_RECORDS {
        return Err(FatElfError::TooManyRecords {
            max: MAX_RECORDS,
            count: inputs.len(),
        });
    }

    let mut output = OutputFile::create(out)?;
    let mut header = FatElfHeader::new();
    let mut offset = disk_format_size(inputs.len()) as u64;

    // Pad out some bytes for the index we'll write at the end.
    write_zeros(output.file_mut(), offset)?;

    for path in inputs {
        let mut input = open_input(path)?;
        let mut record = probe_elf_header(path, &mut input, 0)?;

        if let Some(i) = header
            .records
            .iter()
            .position(|other| other.matches_target(&record))
        {
            return Err(FatElfError::DuplicateTarget {
                first: inputs[i].clone(),
                second: path.clone(),
            });
        }

        let binary_offset = align_to_page(offset);
        write_zeros(output.file_mut(), binary_offset - offset)?;
        let size = copy_all(&mut input, output.file_mut())?;

        record.offset = binary_offset;
        record.size = size;
        header.records.push(record);
        offset = binary_offset + size;
    }

    write_header(output.file_mut(), &header)?;
    output.commit()?;
    Ok(header)
}

/// Extract the record named by `target` from the container at `input`
/// into `out`, carrying the container's trailing junk along.
pub fn extract(out: &Path, input: &Path, target: &str) -> Result<FatElfRecord> {
    let mut file = open_input(input)?;
    let header = read_header(input, &mut file)?;
    let idx = find_record(&header, target)?;
    let rec = header.records[idx];

    let mut output = OutputFile::create(out)?;
    copy_range(&mut file, output.file_mut(), rec.offset, rec.size)?;
    append_junk(&mut file, output.file_mut(), &header)?;
    output.commit()?;
    Ok(rec)
}

/// Rewrite the container at `input` to `out` without the record named
/// by `target`. Surviving binaries are re-laid page-aligned and the
/// record array shifts down to close the hole.
pub fn remove(out: &Path, input: &Path, target: &str) -> Result<FatElfHeader> {
    let mut file = open_input(input)?;
    let header = read_header(input, &mut file)?;
    let idx = find_record(&header, target)?;
    let junk = find_junk(&mut file, &header)?;

    let mut output = OutputFile::create(out)?;
    let mut offset = disk_format_size(header.records.len()) as u64;
    write_zeros(output.file_mut(), offset)?;

    let mut new_header = FatElfHeader {
        version: header.version,
        reserved0: header.reserved0,
        records: Vec::with_capacity(header.records.len() - 1),
    };

    for (i, rec) in header.records.iter().enumerate() {
        if i == idx {
            continue;
        }
        let binary_offset = align_to_page(offset);
        write_zeros(output.file_mut(), binary_offset - offset)?;
        copy_range(&mut file, output.file_mut(), rec.offset, rec.size)?;

        let mut moved = *rec;
        moved.offset = binary_offset;
        new_header.records.push(moved);
        offset = binary_offset + rec.size;
    }

    if let Some((junk_offset, junk_size)) = junk {
        copy_range(&mut file, output.file_mut(), junk_offset, junk_size)?;
    }

    write_header(output.file_mut(), &new_header)?;
    output.commit()?;
    Ok(new_header)
}

/// Rewrite the container at `input` to `out`, substituting the ELF at
/// `newelf` for the record matching its target. The slot is located by
/// probing `newelf`; no user-supplied selector is involved.
pub fn replace(out: &Path, input: &Path, newelf: &Path) -> Result<FatElfHeader> {
    let mut file = open_input(input)?;
    let mut newfile = open_input(newelf)?;
    let header = read_header(input, &mut file)?;
    let probe = probe_elf_header(newelf, &mut newfile, 0)?;

    let idx = header
        .records
        .iter()
        .position(|rec| rec.matches_target(&probe))
        .ok_or_else(|| FatElfError::NoMatchingRecord {
            elf: newelf.to_path_buf(),
            container: input.to_path_buf(),
        })?;
    let junk = find_junk(&mut file, &header)?;

    let mut output = OutputFile::create(out)?;
    let mut offset = disk_format_size(header.records.len()) as u64;
    write_zeros(output.file_mut(), offset)?;

    let mut new_header = FatElfHeader {
        version: header.version,
        reserved0: header.reserved0,
        records: Vec::with_capacity(header.records.len()),
    };

    for (i, rec) in header.records.iter().enumerate() {
        let binary_offset = align_to_page(offset);
        write_zeros(output.file_mut(), binary_offset - offset)?;

        let mut updated = *rec;
        if i == idx {
            updated.size = copy_all(&mut newfile, output.file_mut())?;
        } else {
            copy_range(&mut file, output.file_mut(), rec.offset, rec.size)?;
        }
        updated.offset = binary_offset;
        offset = binary_offset + updated.size;
        new_header.records.push(updated);
    }

    if let Some((junk_offset, junk_size)) = junk {
        copy_range(&mut file, output.file_mut(), junk_offset, junk_size)?;
    }

    write_header(output.file_mut(), &new_header)?;
    output.commit()?;
    Ok(new_header)
}

/// Split the container at `input` into one file per record in the
/// current directory, named `<basename>-<selector>` with the shortest
/// selector that uniquely names each record. Every piece carries the
/// container's trailing junk so it stands alone.
pub fn split(input: &Path) -> Result<Vec<PathBuf>> {
    split_in(Path::new("."), input)
}

/// [`split`], but placing the pieces in `dir`.
pub fn split_in(dir: &Path, input: &Path) -> Result<Vec<PathBuf>> {
    let mut file = open_input(input)?;
    let header = read_header(input, &mut file)?;

    let base = input
        .file_name()
        .map_or_else(|| input.display().to_string(), |n| n.to_string_lossy().into_owned());
    let wants = minimal_wants(&header.records);

    let mut outputs = Vec::with_capacity(header.records.len());
    for (rec, want) in header.records.iter().zip(wants) {
        let name = record_target_name(rec, want);
        let path = dir.join(format!("{base}-{name}"));

        let mut output = OutputFile::create(&path)?;
        copy_range(&mut file, output.file_mut(), rec.offset, rec.size)?;
        append_junk(&mut file, output.file_mut(), &header)?;
        output.commit()?;
        outputs.push(path);
    }

    Ok(outputs)
}

/// Decoded attributes of one record, ready for display.
#[derive(Debug, Clone, Serialize)]
pub struct RecordInfo {
    /// Position in the record array.
    pub index: usize,
    /// Raw `e_machine` value.
    pub machine: u16,
    /// Machine short name, if the id is known.
    pub machine_name: Option<&'static str>,
    /// Machine description, if the id is known.
    pub machine_desc: Option<&'static str>,
    /// Raw `EI_OSABI` value.
    pub osabi: u8,
    /// OSABI short name, if the id is known.
    pub osabi_name: Option<&'static str>,
    /// OSABI description, if the id is known.
    pub osabi_desc: Option<&'static str>,
    /// Raw ABI version.
    pub osabi_version: u8,
    /// Raw word size value.
    pub word_size: u8,
    /// Raw byte order value.
    pub byte_order: u8,
    /// Absolute byte offset of the embedded binary.
    pub offset: u64,
    /// Length of the embedded binary.
    pub size: u64,
    /// Canonical selector naming every attribute.
    pub target_name: String,
    /// The index-form alias (`record<N>`).
    pub index_name: String,
}

/// Trailing junk found past the last record.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct JunkInfo {
    /// Where the junk starts.
    pub offset: u64,
    /// How many bytes of junk.
    pub size: u64,
}

/// Everything `fatelf-info` reports about a container.
#[derive(Debug, Clone, Serialize)]
pub struct ContainerInfo {
    /// Container format version.
    pub version: u16,
    /// Trailing junk, if any was detected.
    pub junk: Option<JunkInfo>,
    /// Per-record details.
    pub records: Vec<RecordInfo>,
}

impl fmt::Display for ContainerInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "FatELF format version {}", self.version)?;
        writeln!(f, "{} records.", self.records.len())?;
        if let Some(junk) = &self.junk {
            writeln!(
                f,
                "{} bytes of junk appended, starting at offset {}.",
                junk.size, junk.offset
            )?;
        }

        for rec in &self.records {
            writeln!(f, "Binary at index #{}:", rec.index)?;
            match (rec.osabi_name, rec.osabi_desc) {
                (Some(name), Some(desc)) => writeln!(
                    f,
                    "  OSABI {} ({name}: {desc}) version {},",
                    rec.osabi, rec.osabi_version
                )?,
                _ => writeln!(
                    f,
                    "  OSABI {} (???) version {},",
                    rec.osabi, rec.osabi_version
                )?,
            }
            writeln!(f, "  {} bits", tables::wordsize_name(rec.word_size).unwrap_or("???"))?;
            writeln!(
                f,
                "  {} byteorder",
                tables::byteorder_name(rec.byte_order).unwrap_or("???")
            )?;
            match (rec.machine_name, rec.machine_desc) {
                (Some(name), Some(desc)) => {
                    writeln!(f, "  Machine {} ({name}: {desc})", rec.machine)?;
                }
                _ => writeln!(f, "  Machine {} (???)", rec.machine)?,
            }
            writeln!(f, "  Offset {}", rec.offset)?;
            writeln!(f, "  Size {}", rec.size)?;
            writeln!(
                f,
                "  Target name: '{}' or '{}'",
                rec.target_name, rec.index_name
            )?;
        }
        Ok(())
    }
}

/// Decode the container at `input` into a displayable report.
pub fn info(input: &Path) -> Result<ContainerInfo> {
    let mut file = open_input(input)?;
    let header = read_header(input, &mut file)?;
    let junk = find_junk(&mut file, &header)?.map(|(offset, size)| JunkInfo { offset, size });

    let records = header
        .records
        .iter()
        .enumerate()
        .map(|(index, rec)| {
            let machine = tables::machine_by_id(rec.machine);
            let osabi = tables::osabi_by_id(rec.osabi);
            RecordInfo {
                index,
                machine: rec.machine,
                machine_name: machine.map(|m| m.name),
                machine_desc: machine.map(|m| m.desc),
                osabi: rec.osabi,
                osabi_name: osabi.map(|o| o.name),
                osabi_desc: osabi.map(|o| o.desc),
                osabi_version: rec.osabi_version,
                word_size: rec.word_size,
                byte_order: rec.byte_order,
                offset: rec.offset,
                size: rec.size,
                target_name: record_target_name(rec, Wants::EVERYTHING),
                index_name: format!("record{index}"),
            }
        })
        .collect();

    Ok(ContainerInfo {
        version: header.version,
        junk,
        records,
    })
}

/// Check every format invariant of the container at `input`, including
/// that each embedded ELF's identification agrees with its record.
pub fn validate(input: &Path) -> Result<FatElfHeader> {
    let mut file = open_input(input)?;
    let header = read_header(input, &mut file)?;

    if header.reserved0 != 0 {
        return Err(FatElfError::HeaderReservedNotZero);
    }

    for (index, rec) in header.records.iter().enumerate() {
        if rec.reserved0 != 0 {
            return Err(FatElfError::ReservedNotZero { field: 0, index });
        }
        if rec.reserved1 != 0 {
            return Err(FatElfError::ReservedNotZero { field: 1, index });
        }
        if tables::machine_by_id(rec.machine).is_none() {
            return Err(FatElfError::UnknownMachine {
                machine: rec.machine,
                index,
            });
        }
        if tables::osabi_by_id(rec.osabi).is_none() {
            return Err(FatElfError::UnknownOsAbi {
                osabi: rec.osabi,
                index,
            });
        }
        if tables::byteorder_target_name(rec.byte_order).is_none() {
            return Err(FatElfError::UnknownByteOrder {
                value: rec.byte_order,
                index,
            });
        }
        if tables::wordsize_target_name(rec.word_size).is_none() {
            return Err(FatElfError::UnknownWordSize {
                value: rec.word_size,
                index,
            });
        }
        if rec.offset != align_to_page(rec.offset) {
            return Err(FatElfError::UnalignedRecord { index });
        }
        let end = rec.end_offset().ok_or(FatElfError::RecordSizeOverflow {
            offset: rec.offset,
            size: rec.size,
            index,
        })?;
        if rec.word_size == FATELF_32BITS && end > 1u64 << 32 {
            return Err(FatElfError::Record32BitTooBig { index });
        }

        for (other_index, other) in header.records.iter().enumerate() {
            if other_index != index && rec.matches_target(other) {
                return Err(FatElfError::DuplicateTarget {
                    first: PathBuf::from(format!("record{index}")),
                    second: PathBuf::from(format!("record{other_index}")),
                });
            }
        }

        let probed = probe_elf_header(input, &mut file, rec.offset)?;
        if !rec.matches_target(&probed) {
            return Err(FatElfError::RecordMismatch { index });
        }
    }

    Ok(header)
}

/// Check that `target` names exactly one record of the container at
/// `input`, returning its position.
pub fn verify(input: &Path, target: &str) -> Result<usize> {
    let mut file = open_input(input)?;
    let header = read_header(input, &mut file)?;
    find_record(&header, target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::{FATELF_BIGENDIAN, FATELF_LITTLEENDIAN, FATELF_MAGIC};
    use crate::elf::ELF_MAGIC;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::{tempdir, TempDir};

    /// A fake ELF: valid 20-byte identification, `len` bytes total,
    /// payload filled with `fill` so files are distinguishable.
    fn make_elf(machine: u16, word_size: u8, byte_order: u8, osabi: u8, len: usize, fill: u8) -> Vec<u8> {
        let mut buf = vec![fill; len];
        buf[0..4].copy_from_slice(&ELF_MAGIC);
        buf[4] = word_size;
        buf[5] = byte_order;
        buf[6] = 1;
        buf[7] = osabi;
        buf[8] = 0;
        buf[9..18].fill(0);
        if byte_order == FATELF_BIGENDIAN {
            buf[18] = (machine >> 8) as u8;
            buf[19] = (machine & 0xFF) as u8;
        } else {
            buf[18] = (machine & 0xFF) as u8;
            buf[19] = (machine >> 8) as u8;
        }
        buf
    }

    fn write_file(dir: &TempDir, name: &str, bytes: &[u8]) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, bytes).unwrap();
        path
    }

    /// x86_64 little-endian Linux binary, 4 KiB.
    fn elf_a() -> Vec<u8> {
        make_elf(62, 2, FATELF_LITTLEENDIAN, 3, 4096, 0xAA)
    }

    /// ppc64 big-endian Linux binary, 4 KiB.
    fn elf_b() -> Vec<u8> {
        make_elf(21, 2, FATELF_BIGENDIAN, 3, 4096, 0xBB)
    }

    fn append_bytes(path: &Path, bytes: &[u8]) {
        let mut f = std::fs::OpenOptions::new().append(true).open(path).unwrap();
        f.write_all(bytes).unwrap();
    }

    #[test]
    fn test_glue_two_records_layout() {
        let dir = tempdir().unwrap();
        let a = write_file(&dir, "a", &elf_a());
        let b = write_file(&dir, "b", &elf_b());
        let out = dir.path().join("fat");

        let header = glue(&out, &[a, b]).unwrap();
        assert_eq!(header.records.len(), 2);
        assert_eq!(header.records[0].offset, 4096);
        assert_eq!(header.records[0].size, 4096);
        assert_eq!(header.records[1].offset, 8192);
        assert_eq!(header.records[1].size, 4096);

        let bytes = std::fs::read(&out).unwrap();
        assert_eq!(bytes.len(), 12288);
        assert_eq!(&bytes[0..4], &[0xFA, 0x70, 0x0E, 0x1F]);
        assert_eq!(&bytes[4096..8192], &elf_a()[..]);
        assert_eq!(&bytes[8192..12288], &elf_b()[..]);

        // Reading back reproduces the same logical index.
        let mut file = File::open(&out).unwrap();
        let reread = read_header(&out, &mut file).unwrap();
        assert_eq!(reread, header);
    }

    #[test]
    fn test_glue_duplicate_target_fails() {
        let dir = tempdir().unwrap();
        let a1 = write_file(&dir, "a1", &elf_a());
        let a2 = write_file(&dir, "a2", &elf_a());
        let out = dir.path().join("fat");

        let err = glue(&out, &[a1, a2]).unwrap_err();
        assert!(err.to_string().contains("are for the same target"));
        assert!(!out.exists());
    }

    #[test]
    fn test_glue_rejects_non_elf() {
        let dir = tempdir().unwrap();
        let bad = write_file(&dir, "bad", &[0u8; 4096]);
        let out = dir.path().join("fat");
        let err = glue(&out, &[bad]).unwrap_err();
        assert!(matches!(err, FatElfError::NotElf { .. }));
        assert!(!out.exists());
    }

    #[test]
    fn test_glue_record_count_limits() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("fat");
        assert!(matches!(glue(&out, &[]), Err(FatElfError::NothingToDo)));

        let too_many: Vec<PathBuf> = (0..256).map(|i| dir.path().join(format!("in{i}"))).collect();
        assert!(matches!(
            glue(&out, &too_many),
            Err(FatElfError::TooManyRecords { max: 255, count: 256 })
        ));
    }

    #[test]
    fn test_extract_byte_exact() {
        let dir = tempdir().unwrap();
        let a = write_file(&dir, "a", &elf_a());
        let b = write_file(&dir, "b", &elf_b());
        let fat = dir.path().join("fat");
        glue(&fat, &[a, b]).unwrap();

        let out = dir.path().join("a.out");
        let rec = extract(&out, &fat, "x86_64:linux").unwrap();
        assert_eq!(rec.machine, 62);
        assert_eq!(std::fs::read(&out).unwrap(), elf_a());
    }

    #[test]
    fn test_extract_selector_failures() {
        let dir = tempdir().unwrap();
        let a = write_file(&dir, "a", &elf_a());
        let b = write_file(&dir, "b", &elf_b());
        let fat = dir.path().join("fat");
        glue(&fat, &[a, b]).unwrap();

        let out = dir.path().join("out");
        assert!(matches!(
            extract(&out, &fat, "mips").unwrap_err(),
            FatElfError::NoMatchingTarget { .. }
        ));
        assert!(matches!(
            extract(&out, &fat, "linux").unwrap_err(),
            FatElfError::AmbiguousTarget { .. }
        ));
        assert!(matches!(
            extract(&out, &fat, "sparc65").unwrap_err(),
            FatElfError::UnknownTargetToken { .. }
        ));
        assert!(!out.exists());
    }

    #[test]
    fn test_remove_equals_fresh_glue() {
        let dir = tempdir().unwrap();
        let a = write_file(&dir, "a", &elf_a());
        let b = write_file(&dir, "b", &elf_b());
        let c = write_file(&dir, "c", &make_elf(20, 1, FATELF_BIGENDIAN, 3, 2000, 0xCC));
        let fat3 = dir.path().join("fat3");
        glue(&fat3, &[a.clone(), b, c.clone()]).unwrap();

        let removed = dir.path().join("removed");
        let header = remove(&removed, &fat3, "ppc64").unwrap();
        assert_eq!(header.records.len(), 2);
        assert_eq!(header.records[0].machine, 62);
        assert_eq!(header.records[1].machine, 20);

        let fat2 = dir.path().join("fat2");
        glue(&fat2, &[a, c]).unwrap();
        assert_eq!(std::fs::read(&removed).unwrap(), std::fs::read(&fat2).unwrap());
    }

    #[test]
    fn test_replace_equals_fresh_glue() {
        let dir = tempdir().unwrap();
        let a = write_file(&dir, "a", &elf_a());
        let b = write_file(&dir, "b", &elf_b());
        let b2 = write_file(&dir, "b2", &make_elf(21, 2, FATELF_BIGENDIAN, 3, 2000, 0xB2));
        let fat = dir.path().join("fat");
        glue(&fat, &[a.clone(), b]).unwrap();

        let replaced = dir.path().join("replaced");
        let header = replace(&replaced, &fat, &b2).unwrap();
        assert_eq!(header.records[1].size, 2000);

        let fresh = dir.path().join("fresh");
        glue(&fresh, &[a, b2]).unwrap();
        assert_eq!(std::fs::read(&replaced).unwrap(), std::fs::read(&fresh).unwrap());
    }

    #[test]
    fn test_replace_without_matching_slot() {
        let dir = tempdir().unwrap();
        let a = write_file(&dir, "a", &elf_a());
        let c = write_file(&dir, "c", &make_elf(20, 1, FATELF_BIGENDIAN, 3, 2000, 0xCC));
        let fat = dir.path().join("fat");
        glue(&fat, &[a]).unwrap();

        let out = dir.path().join("out");
        assert!(matches!(
            replace(&out, &fat, &c).unwrap_err(),
            FatElfError::NoMatchingRecord { .. }
        ));
        assert!(!out.exists());
    }

    #[test]
    fn test_junk_preserved_across_rewrites() {
        let dir = tempdir().unwrap();
        let a = write_file(&dir, "a", &elf_a());
        let b = write_file(&dir, "b", &elf_b());
        let fat = dir.path().join("fat");
        glue(&fat, &[a, b]).unwrap();
        append_bytes(&fat, b"self-extracting tail");

        let extracted = dir.path().join("extracted");
        extract(&extracted, &fat, "x86_64").unwrap();
        let mut expected = elf_a();
        expected.extend_from_slice(b"self-extracting tail");
        assert_eq!(std::fs::read(&extracted).unwrap(), expected);

        let removed = dir.path().join("removed");
        remove(&removed, &fat, "ppc64").unwrap();
        let bytes = std::fs::read(&removed).unwrap();
        assert!(bytes.ends_with(b"self-extracting tail"));
        assert!(validate(&removed).is_ok());

        let pieces = split_in(dir.path(), &fat).unwrap();
        for piece in pieces {
            let bytes = std::fs::read(&piece).unwrap();
            assert!(bytes.ends_with(b"self-extracting tail"));
        }
    }

    #[test]
    fn test_split_minimal_filenames_and_contents() {
        let dir = tempdir().unwrap();
        let ppc_be = make_elf(20, 1, FATELF_BIGENDIAN, 0, 4096, 0x01);
        let ppc_le = make_elf(20, 1, FATELF_LITTLEENDIAN, 0, 4096, 0x02);
        let x86_64 = make_elf(62, 2, FATELF_LITTLEENDIAN, 0, 4096, 0x03);
        let inputs = vec![
            write_file(&dir, "in.bin", &ppc_be),
            write_file(&dir, "in2.bin", &ppc_le),
            write_file(&dir, "in3.bin", &x86_64),
        ];
        let fat = dir.path().join("in");
        glue(&fat, &inputs).unwrap();

        let mut pieces = split_in(dir.path(), &fat).unwrap();
        pieces.sort();
        let names: Vec<String> = pieces
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["in-ppc:be", "in-ppc:le", "in-x86_64"]);

        assert_eq!(std::fs::read(&pieces[0]).unwrap(), ppc_be);
        assert_eq!(std::fs::read(&pieces[1]).unwrap(), ppc_le);
        assert_eq!(std::fs::read(&pieces[2]).unwrap(), x86_64);
    }

    #[test]
    fn test_info_report() {
        let dir = tempdir().unwrap();
        let a = write_file(&dir, "a", &make_elf(62, 2, FATELF_LITTLEENDIAN, 0, 4096, 0xAA));
        let b = write_file(&dir, "b", &elf_b());
        let fat = dir.path().join("fat");
        glue(&fat, &[a, b]).unwrap();

        let report = info(&fat).unwrap();
        assert_eq!(report.version, 1);
        assert_eq!(report.records.len(), 2);
        assert!(report.junk.is_none());
        assert_eq!(report.records[0].machine_name, Some("x86_64"));
        assert_eq!(report.records[0].target_name, "x86_64:64bit:le:sysv:osabiver0");
        assert_eq!(report.records[0].index_name, "record0");

        let text = report.to_string();
        assert!(text.contains("FatELF format version 1"));
        assert!(text.contains("2 records."));
        assert!(text.contains("OSABI 0 (sysv: UNIX System V ABI) version 0,"));
        assert!(text.contains("64 bits"));
        assert!(text.contains("Littleendian byteorder"));
        assert!(text.contains("Machine 62 (x86_64: AMD x86-64 architecture)"));

        // The report serializes for machine consumption too.
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"target_name\":\"x86_64:64bit:le:sysv:osabiver0\""));
    }

    #[test]
    fn test_info_reports_junk() {
        let dir = tempdir().unwrap();
        let a = write_file(&dir, "a", &elf_a());
        let fat = dir.path().join("fat");
        glue(&fat, &[a]).unwrap();
        append_bytes(&fat, &[0x5A; 77]);

        let report = info(&fat).unwrap();
        let junk = report.junk.unwrap();
        assert_eq!(junk.offset, 8192);
        assert_eq!(junk.size, 77);
        assert!(report
            .to_string()
            .contains("77 bytes of junk appended, starting at offset 8192."));
    }

    #[test]
    fn test_validate_accepts_glued_container() {
        let dir = tempdir().unwrap();
        let a = write_file(&dir, "a", &elf_a());
        let b = write_file(&dir, "b", &elf_b());
        let fat = dir.path().join("fat");
        glue(&fat, &[a, b]).unwrap();
        assert!(validate(&fat).is_ok());
    }

    #[test]
    fn test_validate_rejects_flipped_reserved() {
        let dir = tempdir().unwrap();
        let a = write_file(&dir, "a", &elf_a());
        let fat = dir.path().join("fat");
        glue(&fat, &[a]).unwrap();

        // records[0].reserved0 lives at header offset 8 + 14.
        let mut bytes = std::fs::read(&fat).unwrap();
        bytes[22] = 1;
        std::fs::write(&fat, &bytes).unwrap();

        let err = validate(&fat).unwrap_err();
        assert_eq!(err.to_string(), "Reserved0 field is not zero in record #0");
    }

    #[test]
    fn test_validate_rejects_probe_mismatch() {
        let dir = tempdir().unwrap();
        let a = write_file(&dir, "a", &elf_a());
        let fat = dir.path().join("fat");
        glue(&fat, &[a]).unwrap();

        // Corrupt the embedded ELF's e_machine.
        let mut bytes = std::fs::read(&fat).unwrap();
        bytes[4096 + 18] = 0x28;
        std::fs::write(&fat, &bytes).unwrap();

        assert!(matches!(
            validate(&fat).unwrap_err(),
            FatElfError::RecordMismatch { index: 0 }
        ));
    }

    #[test]
    fn test_validate_rejects_unaligned_offset() {
        let dir = tempdir().unwrap();
        let a = write_file(&dir, "a", &elf_a());
        let fat = dir.path().join("fat");
        glue(&fat, &[a]).unwrap();

        // records[0].offset lives at header offset 8 + 8.
        let mut bytes = std::fs::read(&fat).unwrap();
        bytes[16..24].copy_from_slice(&1000u64.to_le_bytes());
        std::fs::write(&fat, &bytes).unwrap();

        assert!(matches!(
            validate(&fat).unwrap_err(),
            FatElfError::UnalignedRecord { index: 0 }
        ));
    }

    #[test]
    fn test_validate_rejects_bad_magic() {
        let dir = tempdir().unwrap();
        let not_fat = write_file(&dir, "plain", &elf_a());
        assert!(matches!(
            validate(&not_fat).unwrap_err(),
            FatElfError::NotFatElf { .. }
        ));
        let magic = FATELF_MAGIC.to_le_bytes();
        assert_eq!(magic, [0xFA, 0x70, 0x0E, 0x1F]);
    }

    #[test]
    fn test_verify_targets() {
        let dir = tempdir().unwrap();
        let a = write_file(&dir, "a", &elf_a());
        let b = write_file(&dir, "b", &elf_b());
        let fat = dir.path().join("fat");
        glue(&fat, &[a, b]).unwrap();

        assert_eq!(verify(&fat, "x86_64").unwrap(), 0);
        assert_eq!(verify(&fat, "ppc64:be").unwrap(), 1);
        assert_eq!(verify(&fat, "record1").unwrap(), 1);
        assert!(verify(&fat, "record2").is_err());
        assert!(verify(&fat, "linux").is_err());
        assert!(verify(&fat, "mips").is_err());
    }
}
