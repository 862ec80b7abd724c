// Licensed under the Apache-2.0 license

//! TX/RX eligibility of a pin table record.
//!
//! SERCOM pad 0 carries TX and the remaining pads can receive. Dual-pad
//! families (SAMD21) relax this: pad 2 can also transmit and pad 0 can
//! also receive.
//!
//! | pad | ordinary family | dual-pad family |
//! |-----|-----------------|-----------------|
//! | 0   | TX              | TX + RX         |
//! | 1   | RX              | RX              |
//! | 2   | RX              | TX + RX         |
//! | 3   | RX              | RX              |

use crate::config::FamilyTable;
use crate::types::PinRecord;

/// Signal direction of a generated pin option.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Transmit,
    Receive,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Transmit, Role::Receive];

    /// `TX` / `RX`, as used in symbol and macro names.
    pub fn abbrev(self) -> &'static str {
        match self {
            Role::Transmit => "TX",
            Role::Receive => "RX",
        }
    }
}

/// Which roles a record may be selected for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Eligibility {
    Transmit,
    Receive,
    Both,
}

impl Eligibility {
    pub fn permits(self, role: Role) -> bool {
        matches!(
            (self, role),
            (Eligibility::Both, _)
                | (Eligibility::Transmit, Role::Transmit)
                | (Eligibility::Receive, Role::Receive)
        )
    }

    /// Roles allowed by either `self` or `other`.
    pub fn union(self, other: Eligibility) -> Eligibility {
        if self == other {
            self
        } else {
            Eligibility::Both
        }
    }
}

/// Classify a record by its pad and whether its family is dual-pad.
pub fn classify(record: &PinRecord, dual_pad: bool) -> Eligibility {
    let transmit = record.pad == 0 || (dual_pad && record.pad == 2);
    let receive = record.pad != 0 || dual_pad;
    match (transmit, receive) {
        (true, true) => Eligibility::Both,
        (true, false) => Eligibility::Transmit,
        // Every pad is receive-capable when it is not transmit-only.
        _ => Eligibility::Receive,
    }
}

impl FamilyTable {
    /// Classify a record found under the `tag` family conditional.
    pub fn classify(&self, record: &PinRecord, tag: &str) -> Eligibility {
        classify(record, self.is_dual_pad(tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pad(pad: u8) -> PinRecord {
        PinRecord {
            peripheral_instance: 0,
            port: 'A',
            pin_number: 4,
            pad,
            signal_mode: 'D',
        }
    }

    #[test]
    fn test_ordinary_family() {
        assert_eq!(classify(&pad(0), false), Eligibility::Transmit);
        assert_eq!(classify(&pad(1), false), Eligibility::Receive);
        assert_eq!(classify(&pad(2), false), Eligibility::Receive);
        assert_eq!(classify(&pad(3), false), Eligibility::Receive);
    }

    #[test]
    fn test_dual_pad_family() {
        assert_eq!(classify(&pad(0), true), Eligibility::Both);
        assert_eq!(classify(&pad(1), true), Eligibility::Receive);
        assert_eq!(classify(&pad(2), true), Eligibility::Both);
        assert_eq!(classify(&pad(3), true), Eligibility::Receive);
    }

    #[test]
    fn test_classify_by_family_tag() {
        let families = FamilyTable::with_defaults();
        assert_eq!(families.classify(&pad(2), "SAMD21"), Eligibility::Both);
        assert_eq!(families.classify(&pad(2), "SAMD51"), Eligibility::Receive);
        // Not in the table, so treated as an ordinary family.
        assert_eq!(families.classify(&pad(0), "SAMX5"), Eligibility::Transmit);
    }

    #[test]
    fn test_permits() {
        assert!(Eligibility::Both.permits(Role::Transmit));
        assert!(Eligibility::Both.permits(Role::Receive));
        assert!(Eligibility::Transmit.permits(Role::Transmit));
        assert!(!Eligibility::Transmit.permits(Role::Receive));
        assert!(!Eligibility::Receive.permits(Role::Transmit));
    }

    #[test]
    fn test_union() {
        use Eligibility::*;
        assert_eq!(Transmit.union(Transmit), Transmit);
        assert_eq!(Receive.union(Receive), Receive);
        assert_eq!(Receive.union(Transmit), Both);
        assert_eq!(Transmit.union(Both), Both);
        assert_eq!(Both.union(Receive), Both);
    }
}
