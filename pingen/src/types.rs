// Licensed under the Apache-2.0 license

//! Parsed representation of the `sercom_pads[]` table.
//!
//! ```text
//! sercom.c ──scan──> PinTable
//!                    ├── VariantGroup "SAMD21" → [PinRecord, PinRecord, ...]
//!                    └── VariantGroup "SAMD51" → [PinRecord, ...]
//! ```
//!
//! A [`PinTable`] is only built by the scanner and is read-only afterwards.

use std::fmt;

/// One `{ sercom, GPIO('port', pin), pad, 'mode' }` row of the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PinRecord {
    /// SERCOM instance number.
    pub peripheral_instance: u8,
    /// GPIO port bank letter (`'A'`, `'B'`, ...).
    pub port: char,
    /// Pin number within the port.
    pub pin_number: u32,
    /// SERCOM pad, always 0..=3.
    pub pad: u8,
    /// Peripheral multiplexer function letter.
    pub signal_mode: char,
}

impl PinRecord {
    pub fn identity(&self) -> PinIdentity {
        PinIdentity {
            port: self.port,
            pin_number: self.pin_number,
        }
    }
}

/// A physical pin, independent of which SERCOM/pad drives it.
///
/// Ordering is by port letter, then numerically by pin, so `A4 < A10 < B0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PinIdentity {
    pub port: char,
    pub pin_number: u32,
}

impl PinIdentity {
    pub fn new(port: char, pin_number: u32) -> Self {
        Self { port, pin_number }
    }
}

impl fmt::Display for PinIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.port, self.pin_number)
    }
}

/// All records found under one chip family conditional.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariantGroup {
    /// Family tag as captured from `CONFIG_MACH_<tag>`.
    pub tag: String,
    /// Records in source order.
    pub records: Vec<PinRecord>,
}

/// Record store: variant groups in the order their tags were first seen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PinTable {
    groups: Vec<VariantGroup>,
}

impl PinTable {
    /// Variant tags in discovery order.
    pub fn variants(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.tag.as_str())
    }

    /// Records of the given variant in discovery order, or `None` if the tag
    /// was never seen.
    pub fn records(&self, tag: &str) -> Option<&[PinRecord]> {
        self.group(tag).map(|g| g.records.as_slice())
    }

    pub fn groups(&self) -> &[VariantGroup] {
        &self.groups
    }

    /// Iterate every `(tag, record)` pair across all groups.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PinRecord)> {
        self.groups
            .iter()
            .flat_map(|g| g.records.iter().map(move |r| (g.tag.as_str(), r)))
    }

    pub fn record_count(&self) -> usize {
        self.groups.iter().map(|g| g.records.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    fn group(&self, tag: &str) -> Option<&VariantGroup> {
        self.groups.iter().find(|g| g.tag == tag)
    }

    /// Make sure a group exists for `tag`. Re-opening a tag keeps its
    /// position and records.
    pub(crate) fn open_group(&mut self, tag: &str) {
        if self.group(tag).is_none() {
            self.groups.push(VariantGroup {
                tag: tag.to_string(),
                records: Vec::new(),
            });
        }
    }

    /// Append a record to an already opened group.
    pub(crate) fn push(&mut self, tag: &str, record: PinRecord) {
        if let Some(group) = self.groups.iter_mut().find(|g| g.tag == tag) {
            group.records.push(record);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(instance: u8, port: char, pin: u32, pad: u8) -> PinRecord {
        PinRecord {
            peripheral_instance: instance,
            port,
            pin_number: pin,
            pad,
            signal_mode: 'C',
        }
    }

    #[test]
    fn test_identity_ordering_is_numeric() {
        let mut pins = vec![
            PinIdentity::new('B', 0),
            PinIdentity::new('A', 10),
            PinIdentity::new('A', 4),
        ];
        pins.sort();
        assert_eq!(
            pins,
            vec![
                PinIdentity::new('A', 4),
                PinIdentity::new('A', 10),
                PinIdentity::new('B', 0),
            ]
        );
    }

    #[test]
    fn test_identity_display() {
        assert_eq!(record(0, 'A', 16, 0).identity().to_string(), "A16");
    }

    #[test]
    fn test_reopened_group_keeps_order() {
        let mut table = PinTable::default();
        table.open_group("SAMD21");
        table.push("SAMD21", record(0, 'A', 8, 0));
        table.open_group("SAMD51");
        table.push("SAMD51", record(1, 'A', 16, 0));
        table.open_group("SAMD21");
        table.push("SAMD21", record(0, 'A', 9, 1));

        assert_eq!(table.variants().collect::<Vec<_>>(), ["SAMD21", "SAMD51"]);
        let samd21 = table.records("SAMD21").unwrap();
        assert_eq!(samd21.len(), 2);
        assert_eq!(samd21[1].pin_number, 9);
        assert_eq!(table.record_count(), 3);
        assert!(table.records("SAME51").is_none());
    }
}
