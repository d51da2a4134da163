//! FatELF - Multiple ELF Binaries in One File
//!
//! This library implements the FatELF container format: several ELF
//! binaries for different targets (CPU architecture, word size, byte
//! order, OS ABI, ABI version) concatenated into a single file behind a
//! small self-describing index, in the spirit of Apple's universal
//! binaries.
//!
//! # Features
//!
//! - **Container codec**: read and write the little-endian FatELF index
//! - **ELF probing**: derive a record's target from 20 bytes of ELF header
//! - **Target selectors**: name records as `x86_64:linux:le` or `record2`
//! - **Layout engine**: page-aligned binary slabs, trailing junk preserved
//! - **Operations**: glue, extract, remove, replace, split, info,
//!   validate, verify - one per shipped utility
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::path::{Path, PathBuf};
//!
//! fn main() -> fatelf::Result<()> {
//!     // Bundle two builds into one container.
//!     let inputs = vec![PathBuf::from("hello-x86_64"), PathBuf::from("hello-ppc64")];
//!     let header = fatelf::ops::glue(Path::new("hello"), &inputs)?;
//!     println!("{} records written", header.records.len());
//!
//!     // Pull one back out by target name.
//!     fatelf::ops::extract(Path::new("hello-64"), Path::new("hello"), "x86_64")?;
//!     Ok(())
//! }
//! ```
//!
//! # Format
//!
//! The index lives at offset 0: an 8-byte header (magic `0x1F0E70FA`,
//! version, record count) followed by one 24-byte record per binary.
//! Every embedded binary starts on a 4096-byte boundary. All index
//! integers are little-endian regardless of the embedded binaries' own
//! byte order. Bytes past the last binary ("junk") are preserved
//! verbatim by every rewrite, which keeps self-extracting tails and
//! appended signatures intact.

#![warn(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::similar_names)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::cast_possible_truncation)]

pub mod codec;
pub mod container;
pub mod elf;
pub mod error;
pub mod layout;
pub mod ops;
pub mod tables;
pub mod target;

pub use container::{
    FatElfHeader, FatElfRecord, FATELF_32BITS, FATELF_64BITS, FATELF_BIGENDIAN,
    FATELF_FORMAT_VERSION, FATELF_LITTLEENDIAN, FATELF_MAGIC, MAX_RECORDS, PAGE_SIZE,
};
pub use error::{FatElfError, Result};
pub use ops::{ContainerInfo, JunkInfo, RecordInfo};
pub use target::{TargetSpec, Wants};

/// Get version information for this library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
