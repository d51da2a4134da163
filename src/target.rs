//! Target selector language.
//!
//! A target selector is a colon-separated list of attribute tokens
//! ("x86_64:linux:le"), or an index form ("record2"). Selectors name a
//! single record in a container; naming zero or several is an error.
//! The inverse direction — rendering the shortest selector that uniquely
//! names each record of a set — drives split's output filenames.

use crate::container::{
    FatElfHeader, FatElfRecord, FATELF_32BITS, FATELF_64BITS, FATELF_BIGENDIAN,
    FATELF_LITTLEENDIAN,
};
use crate::error::{FatElfError, Result};
use crate::tables;
use bitflags::bitflags;

bitflags! {
    /// Which target attributes a selector constrains.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Wants: u8 {
        /// Match on `machine`.
        const MACHINE = 1 << 0;
        /// Match on `osabi`.
        const OSABI = 1 << 1;
        /// Match on `osabi_version`.
        const OSABI_VERSION = 1 << 2;
        /// Match on `word_size`.
        const WORD_SIZE = 1 << 3;
        /// Match on `byte_order`.
        const BYTE_ORDER = 1 << 4;
        /// Match on the full five-tuple.
        const EVERYTHING = Self::MACHINE.bits()
            | Self::OSABI.bits()
            | Self::OSABI_VERSION.bits()
            | Self::WORD_SIZE.bits()
            | Self::BYTE_ORDER.bits();
    }
}

/// A parsed selector: constrained attribute values plus the wants mask,
/// or a direct record index.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TargetSpec {
    /// Which fields of `record` are constrained.
    pub wants: Wants,
    /// The constrained attribute values; unconstrained fields are zero.
    pub record: FatElfRecord,
    /// Set by the `record<N>` form, which bypasses attribute matching.
    pub index: Option<usize>,
}

impl TargetSpec {
    /// True if `rec` satisfies every constrained attribute.
    pub fn matches(&self, rec: &FatElfRecord) -> bool {
        if self.wants.contains(Wants::MACHINE) && rec.machine != self.record.machine {
            return false;
        }
        if self.wants.contains(Wants::OSABI) && rec.osabi != self.record.osabi {
            return false;
        }
        if self.wants.contains(Wants::OSABI_VERSION)
            && rec.osabi_version != self.record.osabi_version
        {
            return false;
        }
        if self.wants.contains(Wants::WORD_SIZE) && rec.word_size != self.record.word_size {
            return false;
        }
        if self.wants.contains(Wants::BYTE_ORDER) && rec.byte_order != self.record.byte_order {
            return false;
        }
        true
    }
}

/// Parse a colon-separated target selector. Empty tokens are no-ops;
/// any unrecognized token fails.
pub fn parse_target(target: &str) -> Result<TargetSpec> {
    let mut spec = TargetSpec::default();

    for token in target.split(':') {
        match token {
            "" => {}
            "be" | "bigendian" => {
                spec.record.byte_order = FATELF_BIGENDIAN;
                spec.wants |= Wants::BYTE_ORDER;
            }
            "le" | "littleendian" => {
                spec.record.byte_order = FATELF_LITTLEENDIAN;
                spec.wants |= Wants::BYTE_ORDER;
            }
            "32bit" => {
                spec.record.word_size = FATELF_32BITS;
                spec.wants |= Wants::WORD_SIZE;
            }
            "64bit" => {
                spec.record.word_size = FATELF_64BITS;
                spec.wants |= Wants::WORD_SIZE;
            }
            _ => {
                if let Some(idx) = token
                    .strip_prefix("record")
                    .and_then(|rest| rest.parse::<usize>().ok())
                {
                    spec.index = Some(idx);
                } else if let Some(ver) = token
                    .strip_prefix("osabiver")
                    .and_then(|rest| rest.parse::<u8>().ok())
                {
                    spec.record.osabi_version = ver;
                    spec.wants |= Wants::OSABI_VERSION;
                } else if let Some(machine) = tables::machine_by_name(token) {
                    spec.record.machine = machine.id;
                    spec.wants |= Wants::MACHINE;
                } else if let Some(osabi) = tables::osabi_by_name(token) {
                    spec.record.osabi = osabi.id;
                    spec.wants |= Wants::OSABI;
                } else {
                    return Err(FatElfError::UnknownTargetToken {
                        token: token.to_string(),
                    });
                }
            }
        }
    }

    Ok(spec)
}

/// Resolve `target` against a container index, returning the unique
/// matching record's position.
///
/// The `record<N>` form short-circuits attribute matching; `N` past the
/// record array is rejected. Attribute selectors fail when they match
/// nothing or more than one record.
pub fn find_record(header: &FatElfHeader, target: &str) -> Result<usize> {
    let spec = parse_target(target)?;

    if let Some(index) = spec.index {
        if index >= header.records.len() {
            return Err(FatElfError::RecordIndexOutOfRange {
                index,
                count: header.records.len(),
            });
        }
        return Ok(index);
    }

    let mut found = None;
    for (i, rec) in header.records.iter().enumerate() {
        if spec.matches(rec) {
            if found.is_some() {
                return Err(FatElfError::AmbiguousTarget {
                    target: target.to_string(),
                });
            }
            found = Some(i);
        }
    }

    found.ok_or_else(|| FatElfError::NoMatchingTarget {
        target: target.to_string(),
    })
}

/// Render the selector tokens for `rec` named by `wants`, in attribute
/// precedence order. Unknown ids render as "???".
pub fn record_target_name(rec: &FatElfRecord, wants: Wants) -> String {
    let mut tokens: Vec<String> = Vec::new();

    if wants.contains(Wants::MACHINE) {
        let name = tables::machine_by_id(rec.machine).map_or("???", |m| m.name);
        tokens.push(name.to_string());
    }
    if wants.contains(Wants::WORD_SIZE) {
        tokens.push(
            tables::wordsize_target_name(rec.word_size)
                .unwrap_or("???")
                .to_string(),
        );
    }
    if wants.contains(Wants::BYTE_ORDER) {
        tokens.push(
            tables::byteorder_target_name(rec.byte_order)
                .unwrap_or("???")
                .to_string(),
        );
    }
    if wants.contains(Wants::OSABI) {
        let name = tables::osabi_by_id(rec.osabi).map_or("???", |o| o.name);
        tokens.push(name.to_string());
    }
    if wants.contains(Wants::OSABI_VERSION) {
        tokens.push(format!("osabiver{}", rec.osabi_version));
    }

    tokens.join(":")
}

/// Sort key used both for minimal naming and for its neighbor scan.
fn sort_key(rec: &FatElfRecord) -> (u16, u8, u8, u8, u8) {
    (
        rec.machine,
        rec.word_size,
        rec.byte_order,
        rec.osabi,
        rec.osabi_version,
    )
}

/// Attribute accessors in precedence order, paired with their wants bit.
/// Machine is handled separately: it is always part of a minimal name.
const NARROWING: [(Wants, fn(&FatElfRecord) -> u16); 4] = [
    (Wants::WORD_SIZE, |r| u16::from(r.word_size)),
    (Wants::BYTE_ORDER, |r| u16::from(r.byte_order)),
    (Wants::OSABI, |r| u16::from(r.osabi)),
    (Wants::OSABI_VERSION, |r| u16::from(r.osabi_version)),
];

/// Compute, for each record, the minimal wants mask whose rendered
/// selector uniquely names it within `records`.
///
/// Records are considered in sorted order so only the immediate sorted
/// neighbors can collide on a name prefix. Every name carries the
/// machine; later attributes are added only while a neighbor that has
/// matched everything named so far still needs to be told apart, and an
/// attribute the surviving neighbors all share is skipped. The result
/// is aligned with the input order. Deterministic, though a middle
/// attribute can still be superfluous in rare orderings.
pub fn minimal_wants(records: &[FatElfRecord]) -> Vec<Wants> {
    let mut order: Vec<usize> = (0..records.len()).collect();
    order.sort_by_key(|&i| sort_key(&records[i]));

    let mut wants = vec![Wants::empty(); records.len()];

    for pos in 0..order.len() {
        let rec = &records[order[pos]];
        let mut prev = pos.checked_sub(1).map(|p| &records[order[p]]);
        let mut next = order.get(pos + 1).map(|&n| &records[n]);

        let mut w = Wants::MACHINE;
        if prev.is_some_and(|p| p.machine != rec.machine) {
            prev = None;
        }
        if next.is_some_and(|n| n.machine != rec.machine) {
            next = None;
        }

        for (flag, field) in NARROWING {
            if prev.is_none() && next.is_none() {
                break;
            }
            let prev_differs = prev.is_some_and(|p| field(p) != field(rec));
            let next_differs = next.is_some_and(|n| field(n) != field(rec));
            if !prev_differs && !next_differs {
                continue;
            }
            w |= flag;
            if prev_differs {
                prev = None;
            }
            if next_differs {
                next = None;
            }
        }

        wants[order[pos]] = w;
    }

    wants
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(machine: u16, word_size: u8, byte_order: u8, osabi: u8, ver: u8) -> FatElfRecord {
        FatElfRecord {
            machine,
            osabi,
            osabi_version: ver,
            word_size,
            byte_order,
            ..Default::default()
        }
    }

    fn header(records: Vec<FatElfRecord>) -> FatElfHeader {
        FatElfHeader {
            version: 1,
            reserved0: 0,
            records,
        }
    }

    #[test]
    fn test_parse_attribute_tokens() {
        let spec = parse_target("x86_64:linux:le:64bit:osabiver3").unwrap();
        assert_eq!(spec.wants, Wants::EVERYTHING);
        assert_eq!(spec.record.machine, 62);
        assert_eq!(spec.record.osabi, 3);
        assert_eq!(spec.record.osabi_version, 3);
        assert_eq!(spec.record.word_size, FATELF_64BITS);
        assert_eq!(spec.record.byte_order, FATELF_LITTLEENDIAN);
        assert_eq!(spec.index, None);
    }

    #[test]
    fn test_parse_long_endian_tokens() {
        let spec = parse_target("bigendian:32bit").unwrap();
        assert_eq!(spec.record.byte_order, FATELF_BIGENDIAN);
        assert_eq!(spec.record.word_size, FATELF_32BITS);
        assert_eq!(spec.wants, Wants::BYTE_ORDER | Wants::WORD_SIZE);
    }

    #[test]
    fn test_parse_empty_tokens_are_noops() {
        let spec = parse_target("::ppc::be:").unwrap();
        assert_eq!(spec.wants, Wants::MACHINE | Wants::BYTE_ORDER);
        let empty = parse_target("").unwrap();
        assert_eq!(empty.wants, Wants::empty());
    }

    #[test]
    fn test_parse_record_index() {
        let spec = parse_target("record7").unwrap();
        assert_eq!(spec.index, Some(7));
        assert_eq!(spec.wants, Wants::empty());
    }

    #[test]
    fn test_parse_unknown_tokens() {
        assert!(matches!(
            parse_target("x86_65"),
            Err(FatElfError::UnknownTargetToken { .. })
        ));
        // "record" and "osabiver" without digits are not index forms.
        assert!(parse_target("record").is_err());
        assert!(parse_target("recordx").is_err());
        assert!(parse_target("osabiver").is_err());
        assert!(parse_target("osabiver300").is_err());
    }

    #[test]
    fn test_find_record_by_attributes() {
        let h = header(vec![
            record(62, 2, 1, 0, 0),
            record(21, 2, 0, 0, 0),
            record(20, 1, 0, 3, 0),
        ]);
        assert_eq!(find_record(&h, "x86_64").unwrap(), 0);
        assert_eq!(find_record(&h, "ppc64").unwrap(), 1);
        assert_eq!(find_record(&h, "linux").unwrap(), 2);
        assert_eq!(find_record(&h, "32bit:be").unwrap(), 2);
    }

    #[test]
    fn test_find_record_ambiguous() {
        let h = header(vec![record(20, 1, 0, 0, 0), record(20, 1, 1, 0, 0)]);
        assert!(matches!(
            find_record(&h, "ppc"),
            Err(FatElfError::AmbiguousTarget { .. })
        ));
        assert_eq!(find_record(&h, "ppc:le").unwrap(), 1);
    }

    #[test]
    fn test_find_record_empty_selector() {
        let single = header(vec![record(62, 2, 1, 0, 0)]);
        assert_eq!(find_record(&single, "").unwrap(), 0);
        let double = header(vec![record(62, 2, 1, 0, 0), record(21, 2, 0, 0, 0)]);
        assert!(find_record(&double, "").is_err());
    }

    #[test]
    fn test_find_record_no_match() {
        let h = header(vec![record(62, 2, 1, 0, 0)]);
        assert!(matches!(
            find_record(&h, "ppc"),
            Err(FatElfError::NoMatchingTarget { .. })
        ));
    }

    #[test]
    fn test_find_record_index_bounds() {
        let h = header(vec![record(62, 2, 1, 0, 0), record(21, 2, 0, 0, 0)]);
        assert_eq!(find_record(&h, "record0").unwrap(), 0);
        assert_eq!(find_record(&h, "record1").unwrap(), 1);
        assert!(matches!(
            find_record(&h, "record2"),
            Err(FatElfError::RecordIndexOutOfRange { index: 2, count: 2 })
        ));
    }

    #[test]
    fn test_canonical_name_and_index_agree() {
        let h = header(vec![
            record(62, 2, 1, 0, 0),
            record(21, 2, 0, 3, 0),
            record(20, 1, 0, 3, 1),
        ]);
        for (i, rec) in h.records.iter().enumerate() {
            let name = record_target_name(rec, Wants::EVERYTHING);
            assert_eq!(find_record(&h, &name).unwrap(), i);
            assert_eq!(find_record(&h, &format!("record{i}")).unwrap(), i);
        }
    }

    #[test]
    fn test_target_name_everything() {
        let name = record_target_name(&record(62, 2, 1, 0, 0), Wants::EVERYTHING);
        assert_eq!(name, "x86_64:64bit:le:sysv:osabiver0");
    }

    #[test]
    fn test_target_name_unknown_machine() {
        let name = record_target_name(&record(1234, 2, 1, 0, 0), Wants::MACHINE);
        assert_eq!(name, "???");
    }

    #[test]
    fn test_minimal_wants_byte_order_disambiguates() {
        // ppc 32-bit BE, ppc 32-bit LE, x86_64: the ppc pair needs the
        // byte order but not the shared word size; x86_64 stands alone.
        let records = vec![
            record(20, 1, 0, 0, 0),
            record(20, 1, 1, 0, 0),
            record(62, 2, 1, 0, 0),
        ];
        let wants = minimal_wants(&records);
        let names: Vec<String> = records
            .iter()
            .zip(&wants)
            .map(|(r, w)| record_target_name(r, *w))
            .collect();
        assert_eq!(names, vec!["ppc:be", "ppc:le", "x86_64"]);
    }

    #[test]
    fn test_minimal_wants_single_record_keeps_machine() {
        let records = vec![record(62, 2, 1, 0, 0)];
        assert_eq!(minimal_wants(&records), vec![Wants::MACHINE]);
    }

    #[test]
    fn test_minimal_wants_mixed_machines() {
        let records = vec![
            record(3, 1, 1, 0, 0),
            record(20, 1, 0, 0, 0),
            record(20, 1, 1, 0, 0),
            record(21, 2, 0, 0, 0),
            record(62, 2, 1, 0, 0),
        ];
        let names: Vec<String> = records
            .iter()
            .zip(minimal_wants(&records))
            .map(|(r, w)| record_target_name(r, w))
            .collect();
        assert_eq!(names, vec!["i386", "ppc:be", "ppc:le", "ppc64", "x86_64"]);
    }

    #[test]
    fn test_minimal_wants_osabi_version_tail() {
        let records = vec![record(62, 2, 1, 0, 0), record(62, 2, 1, 0, 1)];
        let names: Vec<String> = records
            .iter()
            .zip(minimal_wants(&records))
            .map(|(r, w)| record_target_name(r, w))
            .collect();
        assert_eq!(names, vec!["x86_64:osabiver0", "x86_64:osabiver1"]);
    }

    #[test]
    fn test_minimal_wants_input_order_preserved() {
        // Unsorted input: wants come back aligned with input positions.
        let records = vec![
            record(62, 2, 1, 0, 0),
            record(20, 1, 1, 0, 0),
            record(20, 1, 0, 0, 0),
        ];
        let names: Vec<String> = records
            .iter()
            .zip(minimal_wants(&records))
            .map(|(r, w)| record_target_name(r, w))
            .collect();
        assert_eq!(names, vec!["x86_64", "ppc:le", "ppc:be"]);
    }
}
