// Licensed under the Apache-2.0 license

//! Rendering of a [`PinTable`] into Kconfig or C header text.
//!
//! Both output formats are built from the same filtering step: a record is
//! offered for a [`Role`] when [`classify`] permits it for its family.
//!
//! - `kconfig`: one `choice` per role, with one `config` entry per eligible
//!   record, scoped by `if MACH_<family>`.
//! - `header`: one `#if`/`#elif` chain per role, with one branch per unique
//!   pin (see [`collect_pins`]).

mod header;
mod kconfig;


use crate::config::{FamilyTable, PingenConfig, SymbolConfig};
use crate::mode::Mode;
use crate::role::{classify, Role};
use crate::types::{PinIdentity, PinTable};
use log::debug;
use std::collections::{BTreeMap, BTreeSet};

/// SERCOM instances that can drive each pin for one role, across all
/// families. Both levels are sorted ascending.
pub type PinUsers = BTreeMap<PinIdentity, BTreeSet<u8>>;

/// Collect every pin usable for `role` together with the SERCOM instances
/// that can use it.
pub fn collect_pins(table: &PinTable, families: &FamilyTable, role: Role) -> PinUsers {
    let mut pins = PinUsers::new();
    for (tag, record) in table.iter() {
        if classify(record, families.is_dual_pad(tag)).permits(role) {
            pins.entry(record.identity())
                .or_default()
                .insert(record.peripheral_instance);
        }
    }
    debug!("{} {} pins", pins.len(), role.abbrev());
    pins
}

/// Render the whole table in the given mode.
pub fn generate(table: &PinTable, mode: Mode, config: &PingenConfig) -> String {
    match mode {
        Mode::Kconfig => kconfig::generate(table, config),
        Mode::Header => header::generate(table, config),
    }
}

/// Kconfig symbol selecting `identity` as the `role` pin of a SERCOM,
/// e.g. `ATSAMD_SERIAL_SERCOM0_TX_A8`.
fn pin_symbol(symbols: &SymbolConfig, instance: u8, role: Role, identity: PinIdentity) -> String {
    format!(
        "{}_{}_{}",
        symbols.instance_symbol(instance),
        role.abbrev(),
        identity
    )
}
