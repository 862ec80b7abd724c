// Licensed under the Apache-2.0 license

//! Kconfig `choice` generation.
//!
//! ```text
//! choice
//!     prompt "Serial TX Pin" if LOW_LEVEL_OPTIONS && SERIAL
//!     if MACH_SAMD21
//!     config ATSAMD_SERIAL_SERCOM0_TX_A8
//!         bool "TX on A8" if ATSAMD_SERIAL_SERCOM0
//!     endif
//! endchoice
//! ```

use super::pin_symbol;
use crate::config::PingenConfig;
use crate::role::{Eligibility, Role};
use crate::types::{PinIdentity, PinTable};
use std::collections::{HashMap, HashSet};
use std::fmt::Write;

pub(super) fn generate(table: &PinTable, config: &PingenConfig) -> String {
    let mut output = String::new();
    for role in Role::ALL {
        generate_choice(&mut output, table, config, role);
    }
    output
}

fn generate_choice(output: &mut String, table: &PinTable, config: &PingenConfig, role: Role) {
    let symbols = &config.symbols;
    let abbrev = role.abbrev();

    writeln!(output, "choice").unwrap();
    writeln!(
        output,
        "    prompt \"Serial {abbrev} Pin\" if {}",
        symbols.menu_guard
    )
    .unwrap();

    for group in table.groups() {
        writeln!(output, "    if {}{}", symbols.machine_prefix, group.tag).unwrap();

        // Roles each (SERCOM, pin) can take anywhere in this family. A pin
        // listed once per pad must still see the TX option of its other row.
        let mut combined: HashMap<(u8, PinIdentity), Eligibility> = HashMap::new();
        for record in &group.records {
            let eligibility = config.families.classify(record, &group.tag);
            combined
                .entry((record.peripheral_instance, record.identity()))
                .and_modify(|e| *e = e.union(eligibility))
                .or_insert(eligibility);
        }

        // A symbol can only be defined once per family.
        let mut emitted = HashSet::new();
        for record in &group.records {
            let eligibility = config.families.classify(record, &group.tag);
            if !eligibility.permits(role) {
                continue;
            }
            let key = (record.peripheral_instance, record.identity());
            if !emitted.insert(key) {
                continue;
            }
            let identity = key.1;

            let instance = symbols.instance_symbol(record.peripheral_instance);
            let symbol = pin_symbol(symbols, record.peripheral_instance, role, identity);
            writeln!(output, "    config {symbol}").unwrap();

            // Pins that are also a TX option of the same SERCOM must not be
            // picked for both.
            if role == Role::Receive && combined[&key] == Eligibility::Both {
                let tx_symbol = pin_symbol(
                    symbols,
                    record.peripheral_instance,
                    Role::Transmit,
                    identity,
                );
                writeln!(
                    output,
                    "        bool \"{abbrev} on {identity}\" if {instance} && !{tx_symbol}"
                )
                .unwrap();
            } else {
                writeln!(output, "        bool \"{abbrev} on {identity}\" if {instance}").unwrap();
            }
        }
        writeln!(output, "    endif").unwrap();
    }

    writeln!(output, "endchoice").unwrap();
    writeln!(output).unwrap();
}
