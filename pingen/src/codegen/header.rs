// Licensed under the Apache-2.0 license

//! C preprocessor pin selection.
//!
//! ```text
//! #if CONFIG_ATSAMD_SERIAL_SERCOM0_TX_A4 || CONFIG_ATSAMD_SERIAL_SERCOM2_TX_A4
//!     #define TX_PIN_NAME "PA4"
//!     #define TX_PIN GPIO('A', 4)
//! #elif CONFIG_ATSAMD_SERIAL_SERCOM0_TX_A8
//!     ...
//! #endif
//! ```

use super::{collect_pins, pin_symbol};
use crate::config::PingenConfig;
use crate::role::Role;
use crate::types::PinTable;
use std::fmt::Write;

pub(super) fn generate(table: &PinTable, config: &PingenConfig) -> String {
    let mut output = String::new();
    for role in Role::ALL {
        generate_chain(&mut output, table, config, role);
    }
    output
}

fn generate_chain(output: &mut String, table: &PinTable, config: &PingenConfig, role: Role) {
    let symbols = &config.symbols;
    let abbrev = role.abbrev();

    let pins = collect_pins(table, &config.families, role);
    for (idx, (identity, instances)) in pins.iter().enumerate() {
        let keyword = if idx == 0 { "if" } else { "elif" };
        let condition = instances
            .iter()
            .map(|&instance| {
                format!(
                    "{}{}",
                    symbols.config_prefix,
                    pin_symbol(symbols, instance, role, *identity)
                )
            })
            .collect::<Vec<_>>()
            .join(" || ");

        writeln!(output, "#{keyword} {condition}").unwrap();
        writeln!(output, "    #define {abbrev}_PIN_NAME \"P{identity}\"").unwrap();
        writeln!(
            output,
            "    #define {abbrev}_PIN GPIO('{}', {})",
            identity.port, identity.pin_number
        )
        .unwrap();
    }

    writeln!(output, "#endif").unwrap();
    writeln!(output).unwrap();
}
