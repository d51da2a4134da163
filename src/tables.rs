//! Static lookup tables for ELF target attributes.
//!
//! Maps `e_machine` and `EI_OSABI` values to the short names used by the
//! target selector language and to human-readable descriptions. Both
//! tables are sorted by id so lookups can binary search; the machine
//! table carries one historical duplicate (id 70) and a handful of
//! legacy vendor ids above the official range.

use crate::container::{FATELF_32BITS, FATELF_64BITS, FATELF_BIGENDIAN, FATELF_LITTLEENDIAN};

/// One `e_machine` table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MachineInfo {
    /// ELF `e_machine` value.
    pub id: u16,
    /// Short name usable as a selector token.
    pub name: &'static str,
    /// Human-readable description.
    pub desc: &'static str,
}

/// One `EI_OSABI` table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OsAbiInfo {
    /// ELF `EI_OSABI` value.
    pub id: u8,
    /// Short name usable as a selector token.
    pub name: &'static str,
    /// Human-readable description.
    pub desc: &'static str,
}

/// Machine table, sorted by id. Id 70 appears twice; `machine_by_id`
/// returns the first occurrence.
pub const MACHINES: &[MachineInfo] = &[
    MachineInfo { id: 0, name: "none", desc: "No machine" },
    MachineInfo { id: 1, name: "m32", desc: "AT&T WE 32100" },
    MachineInfo { id: 2, name: "sparc", desc: "SUN SPARC" },
    MachineInfo { id: 3, name: "i386", desc: "Intel 80386" },
    MachineInfo { id: 4, name: "68k", desc: "Motorola m68k family" },
    MachineInfo { id: 5, name: "88k", desc: "Motorola m88k family" },
    MachineInfo { id: 6, name: "486", desc: "Intel 80486" },
    MachineInfo { id: 7, name: "860", desc: "Intel 80860" },
    MachineInfo { id: 8, name: "mips", desc: "MIPS R3000 big-endian" },
    MachineInfo { id: 9, name: "s370", desc: "IBM System/370" },
    MachineInfo { id: 10, name: "mips_rs3_le", desc: "MIPS R3000 little-endian" },
    MachineInfo { id: 15, name: "parisc", desc: "HPPA" },
    MachineInfo { id: 17, name: "vpp500", desc: "Fujitsu VPP500" },
    MachineInfo { id: 18, name: "sparc32plus", desc: "Sun's v8plus" },
    MachineInfo { id: 19, name: "960", desc: "Intel 80960" },
    MachineInfo { id: 20, name: "ppc", desc: "PowerPC" },
    MachineInfo { id: 21, name: "ppc64", desc: "PowerPC 64-bit" },
    MachineInfo { id: 22, name: "s390", desc: "IBM S390" },
    MachineInfo { id: 23, name: "spu", desc: "IBM SPU/SPC" },
    MachineInfo { id: 36, name: "v800", desc: "NEC V800 series" },
    MachineInfo { id: 37, name: "fr20", desc: "Fujitsu FR20" },
    MachineInfo { id: 38, name: "rh32", desc: "TRW RH-32" },
    MachineInfo { id: 39, name: "rce", desc: "Motorola RCE" },
    MachineInfo { id: 40, name: "arm", desc: "ARM" },
    MachineInfo { id: 41, name: "fake_alpha", desc: "Digital Alpha (old)" },
    MachineInfo { id: 42, name: "sh", desc: "Hitachi SH" },
    MachineInfo { id: 43, name: "sparcv9", desc: "SPARC v9 64-bit" },
    MachineInfo { id: 44, name: "tricore", desc: "Siemens Tricore" },
    MachineInfo { id: 45, name: "arc", desc: "Argonaut RISC Core" },
    MachineInfo { id: 46, name: "h8_300", desc: "Hitachi H8/300" },
    MachineInfo { id: 47, name: "h8_300h", desc: "Hitachi H8/300H" },
    MachineInfo { id: 48, name: "h8s", desc: "Hitachi H8S" },
    MachineInfo { id: 49, name: "h8_500", desc: "Hitachi H8/500" },
    MachineInfo { id: 50, name: "ia64", desc: "Intel Merced" },
    MachineInfo { id: 51, name: "mips_x", desc: "Stanford MIPS-X" },
    MachineInfo { id: 52, name: "coldfire", desc: "Motorola Coldfire" },
    MachineInfo { id: 53, name: "68hc12", desc: "Motorola M68HC12" },
    MachineInfo { id: 54, name: "mma", desc: "Fujitsu MMA Multimedia Accelerator" },
    MachineInfo { id: 55, name: "pcp", desc: "Siemens PCP" },
    MachineInfo { id: 56, name: "ncpu", desc: "Sony nCPU embedded RISC" },
    MachineInfo { id: 57, name: "ndr1", desc: "Denso NDR1 microprocessor" },
    MachineInfo { id: 58, name: "starcore", desc: "Motorola Start*Core processor" },
    MachineInfo { id: 59, name: "me16", desc: "Toyota ME16 processor" },
    MachineInfo { id: 60, name: "st100", desc: "STMicroelectronic ST100 processor" },
    MachineInfo { id: 61, name: "tinyj", desc: "Advanced Logic Corp. Tinyj emb.fam" },
    MachineInfo { id: 62, name: "x86_64", desc: "AMD x86-64 architecture" },
    MachineInfo { id: 63, name: "pdsp", desc: "Sony DSP Processor" },
    MachineInfo { id: 64, name: "pdp10", desc: "DEC PDP-10" },
    MachineInfo { id: 65, name: "pdp11", desc: "DEC PDP-11" },
    MachineInfo { id: 66, name: "fx66", desc: "Siemens FX66 microcontroller" },
    MachineInfo { id: 67, name: "st9plus", desc: "STMicroelectronics ST9+ 8/16 mc" },
    MachineInfo { id: 68, name: "st7", desc: "STMicroelectronics ST7 8 bit mc" },
    MachineInfo { id: 69, name: "68hc16", desc: "Motorola MC68HC16 microcontroller" },
    MachineInfo { id: 70, name: "68hc11", desc: "Motorola MC68HC11 microcontroller" },
    MachineInfo { id: 70, name: "68hc11", desc: "Motorola MC68HC11 microcontroller" },
    MachineInfo { id: 71, name: "68hc08", desc: "Motorola MC68HC08 microcontroller" },
    MachineInfo { id: 72, name: "68hc05", desc: "Motorola MC68HC05 microcontroller" },
    MachineInfo { id: 73, name: "svx", desc: "Silicon Graphics SVx" },
    MachineInfo { id: 74, name: "st19", desc: "STMicroelectronics ST19 8 bit mc" },
    MachineInfo { id: 75, name: "vax", desc: "Digital VAX" },
    MachineInfo { id: 76, name: "cris", desc: "Axis Communications 32-bit emb.proc" },
    MachineInfo { id: 77, name: "javelin", desc: "Infineon Technologies 32-bit emb.proc" },
    MachineInfo { id: 78, name: "firepath", desc: "Element 14 64-bit DSP Processor" },
    MachineInfo { id: 79, name: "zsp", desc: "LSI Logic 16-bit DSP Processor" },
    MachineInfo { id: 80, name: "mmix", desc: "Donald Knuth's educational 64-bit proc" },
    MachineInfo { id: 81, name: "huany", desc: "Harvard University machine-independent object files" },
    MachineInfo { id: 82, name: "prism", desc: "SiTera Prism" },
    MachineInfo { id: 83, name: "avr", desc: "Atmel AVR 8-bit microcontroller" },
    MachineInfo { id: 84, name: "fr30", desc: "Fujitsu FR30" },
    MachineInfo { id: 85, name: "d10v", desc: "Mitsubishi D10V" },
    MachineInfo { id: 86, name: "d30v", desc: "Mitsubishi D30V" },
    MachineInfo { id: 87, name: "v850", desc: "NEC v850" },
    MachineInfo { id: 88, name: "m32r", desc: "Mitsubishi M32R" },
    MachineInfo { id: 89, name: "mn10300", desc: "Matsushita MN10300" },
    MachineInfo { id: 90, name: "mn10200", desc: "Matsushita MN10200" },
    MachineInfo { id: 91, name: "pj", desc: "picoJava" },
    MachineInfo { id: 92, name: "openrisc", desc: "OpenRISC 32-bit embedded processor" },
    MachineInfo { id: 93, name: "arc_a5", desc: "ARC Cores Tangent-A5" },
    MachineInfo { id: 94, name: "xtensa", desc: "Tensilica Xtensa Architecture" },
    MachineInfo { id: 95, name: "videocore", desc: "Alphamosaic VideoCore" },
    MachineInfo { id: 96, name: "tmm_gpp", desc: "Thompson Multimedia General Purpose Proc" },
    MachineInfo { id: 97, name: "ns32k", desc: "National Semi. 32000" },
    MachineInfo { id: 98, name: "tpc", desc: "Tenor Network TPC" },
    MachineInfo { id: 99, name: "snp1k", desc: "Trebia SNP 1000" },
    MachineInfo { id: 100, name: "st200", desc: "STMicroelectronics ST200" },
    MachineInfo { id: 101, name: "ip2k", desc: "Ubicom IP2xxx" },
    MachineInfo { id: 102, name: "max", desc: "MAX processor" },
    MachineInfo { id: 103, name: "cr", desc: "National Semi. CompactRISC" },
    MachineInfo { id: 104, name: "f2mc16", desc: "Fujitsu F2MC16" },
    MachineInfo { id: 105, name: "msp430", desc: "Texas Instruments msp430" },
    MachineInfo { id: 106, name: "blackfin", desc: "Analog Devices Blackfin DSP" },
    MachineInfo { id: 107, name: "se_c33", desc: "Seiko Epson S1C33 family" },
    MachineInfo { id: 108, name: "sep", desc: "Sharp embedded microprocessor" },
    MachineInfo { id: 109, name: "arca", desc: "Arca RISC" },
    MachineInfo { id: 110, name: "unicore", desc: "PKU-Unity & MPRC Peking Uni. mc series" },
    MachineInfo { id: 0x9026, name: "alpha", desc: "Digital Alpha" },
    MachineInfo { id: 0x9041, name: "m32r_old", desc: "Mitsubishi M32R (old)" },
    MachineInfo { id: 0x9080, name: "v850_old", desc: "NEC v850 (old)" },
    MachineInfo { id: 0xA390, name: "s390_old", desc: "IBM S390 (old)" },
    MachineInfo { id: 0xBEEF, name: "mn10300_old", desc: "Matsushita MN10300 (old)" },
];

/// OSABI table, sorted by id.
pub const OSABIS: &[OsAbiInfo] = &[
    OsAbiInfo { id: 0, name: "sysv", desc: "UNIX System V ABI" },
    OsAbiInfo { id: 1, name: "hpux", desc: "HP-UX" },
    OsAbiInfo { id: 2, name: "netbsd", desc: "NetBSD" },
    OsAbiInfo { id: 3, name: "linux", desc: "Linux" },
    OsAbiInfo { id: 4, name: "hurd", desc: "GNU/Hurd" },
    OsAbiInfo { id: 5, name: "86open", desc: "86Open common IA32 ABI" },
    OsAbiInfo { id: 6, name: "solaris", desc: "Sun Solaris" },
    OsAbiInfo { id: 7, name: "aix", desc: "IBM AIX" },
    OsAbiInfo { id: 8, name: "irix", desc: "SGI Irix" },
    OsAbiInfo { id: 9, name: "freebsd", desc: "FreeBSD" },
    OsAbiInfo { id: 10, name: "tru64", desc: "Compaq TRU64 UNIX" },
    OsAbiInfo { id: 11, name: "modesto", desc: "Novell Modesto" },
    OsAbiInfo { id: 12, name: "openbsd", desc: "OpenBSD" },
    OsAbiInfo { id: 13, name: "openvms", desc: "OpenVMS" },
    OsAbiInfo { id: 14, name: "nsk", desc: "HP Non-Stop Kernel" },
    OsAbiInfo { id: 15, name: "aros", desc: "Amiga Research OS" },
    OsAbiInfo { id: 97, name: "arm", desc: "ARM" },
    OsAbiInfo { id: 255, name: "standalone", desc: "Standalone (embedded) application" },
];

/// Look up a machine by `e_machine` value.
///
/// The table is sorted by id; the first matching entry wins.
pub fn machine_by_id(id: u16) -> Option<&'static MachineInfo> {
    let idx = MACHINES.partition_point(|m| m.id < id);
    MACHINES.get(idx).filter(|m| m.id == id)
}

/// Look up a machine by its short selector name.
pub fn machine_by_name(name: &str) -> Option<&'static MachineInfo> {
    MACHINES.iter().find(|m| m.name == name)
}

/// Look up an OSABI by `EI_OSABI` value.
pub fn osabi_by_id(id: u8) -> Option<&'static OsAbiInfo> {
    let idx = OSABIS.partition_point(|o| o.id < id);
    OSABIS.get(idx).filter(|o| o.id == id)
}

/// Look up an OSABI by its short selector name.
pub fn osabi_by_name(name: &str) -> Option<&'static OsAbiInfo> {
    OSABIS.iter().find(|o| o.name == name)
}

/// Display name for a record's word size ("32" or "64").
pub fn wordsize_name(word_size: u8) -> Option<&'static str> {
    match word_size {
        FATELF_32BITS => Some("32"),
        FATELF_64BITS => Some("64"),
        _ => None,
    }
}

/// Display name for a record's byte order ("Bigendian" or "Littleendian").
pub fn byteorder_name(byte_order: u8) -> Option<&'static str> {
    match byte_order {
        FATELF_BIGENDIAN => Some("Bigendian"),
        FATELF_LITTLEENDIAN => Some("Littleendian"),
        _ => None,
    }
}

/// Selector token for a record's word size ("32bit" or "64bit").
pub fn wordsize_target_name(word_size: u8) -> Option<&'static str> {
    match word_size {
        FATELF_32BITS => Some("32bit"),
        FATELF_64BITS => Some("64bit"),
        _ => None,
    }
}

/// Selector token for a record's byte order ("be" or "le").
pub fn byteorder_target_name(byte_order: u8) -> Option<&'static str> {
    match byte_order {
        FATELF_BIGENDIAN => Some("be"),
        FATELF_LITTLEENDIAN => Some("le"),
        _ => None,
    }
}
