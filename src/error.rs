//! Error types for the FatELF tools.
//!
//! This module defines all error types used throughout the library,
//! providing detailed error information for debugging and user feedback.

use std::path::PathBuf;
use thiserror::Error;

/// Primary error type for FatELF operations.
#[derive(Debug, Error)]
pub enum FatElfError {
    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A file could not be opened.
    #[error("Failed to open '{}': {source}", path.display())]
    OpenFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file does not start with the ELF identification magic.
    #[error("'{}' is not an ELF binary", path.display())]
    NotElf { path: PathBuf },

    /// The ELF identification carries a word size we do not know.
    #[error("Unexpected word size ({value}) in '{}'", path.display())]
    UnsupportedWordSize { path: PathBuf, value: u8 },

    /// The ELF identification carries a data encoding we do not know.
    #[error("Unexpected byte order ({value}) in '{}'", path.display())]
    UnsupportedByteOrder { path: PathBuf, value: u8 },

    /// The file does not start with the FatELF magic.
    #[error("'{}' is not a FatELF binary", path.display())]
    NotFatElf { path: PathBuf },

    /// The container uses a format version newer than we understand.
    #[error("'{}' uses an unknown FatELF version ({version})", path.display())]
    UnsupportedVersion { path: PathBuf, version: u16 },

    /// The container header's reserved byte is non-zero.
    #[error("FatELF header reserved field isn't zero")]
    HeaderReservedNotZero,

    /// A record's reserved byte is non-zero.
    #[error("Reserved{field} field is not zero in record #{index}")]
    ReservedNotZero { field: u8, index: usize },

    /// A record names a machine that is not in the machine table.
    #[error("Unknown machine #{machine} in record #{index}")]
    UnknownMachine { machine: u16, index: usize },

    /// A record names an OSABI that is not in the OSABI table.
    #[error("Unknown OSABI #{osabi} in record #{index}")]
    UnknownOsAbi { osabi: u8, index: usize },

    /// A record's byte order value is not a recognized encoding.
    #[error("Unknown byte order #{value} in record #{index}")]
    UnknownByteOrder { value: u8, index: usize },

    /// A record's word size value is not a recognized width.
    #[error("Unknown word size #{value} in record #{index}")]
    UnknownWordSize { value: u8, index: usize },

    /// A record's offset is not page-aligned.
    #[error("Unaligned binary in record #{index}")]
    UnalignedRecord { index: usize },

    /// A record's offset + size wraps the 64-bit space.
    #[error("Bogus offset+size ({offset} + {size}) in record #{index}")]
    RecordSizeOverflow {
        offset: u64,
        size: u64,
        index: usize,
    },

    /// A 32-bit record extends past the 4 GiB boundary.
    #[error("32-bit binary past 4 gig limit in record #{index}")]
    Record32BitTooBig { index: usize },

    /// The embedded ELF header disagrees with the record describing it.
    #[error("ELF header differs from FatELF data in record #{index}")]
    RecordMismatch { index: usize },

    /// Two glue inputs describe the same target.
    #[error("'{}' and '{}' are for the same target", first.display(), second.display())]
    DuplicateTarget { first: PathBuf, second: PathBuf },

    /// No input binaries were supplied.
    #[error("Nothing to do")]
    NothingToDo,

    /// More input binaries than the 8-bit record count can hold.
    #[error("Too many binaries (max is {max}, got {count})")]
    TooManyRecords { max: usize, count: usize },

    /// A selector token is not part of the target language.
    #[error("Unknown target token '{token}'")]
    UnknownTargetToken { token: String },

    /// A selector matched more than one record.
    #[error("Ambiguous target '{target}' matches multiple records")]
    AmbiguousTarget { target: String },

    /// A selector matched no record.
    #[error("No record matches target '{target}'")]
    NoMatchingTarget { target: String },

    /// A `record<N>` selector names an index past the record array.
    #[error("Record index {index} is out of range ({count} records)")]
    RecordIndexOutOfRange { index: usize, count: usize },

    /// A replacement ELF matches none of the container's records.
    #[error("No record matches '{}' in FatELF file '{}'", elf.display(), container.display())]
    NoMatchingRecord { elf: PathBuf, container: PathBuf },
}

/// Result type alias for FatELF operations.
pub type Result<T> = std::result::Result<T, FatElfError>;
