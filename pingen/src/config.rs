// Licensed under the Apache-2.0 license

//! Configuration for family recognition and output symbol names.
//!
//! [`FamilyTable`] is the allow-list of chip families that the scanner
//! accepts in `CONFIG_MACH_<family>` conditionals, together with the
//! dual-pad flag that changes how their pads are classified (see
//! [`crate::role`]).
//!
//! A family missing from the table is not an error by default: its rows are
//! folded into the family before it and classified by that family's rules.
//! The upstream `sercom.c` has a `CONFIG_MACH_SAMX5` branch after SAMD21, so
//! with the defaults those rows get SAMD21's dual-pad treatment. Add SAMX5
//! under `[[families]]` (as below) to give it its own group.
//!
//! [`SymbolConfig`] holds the names that end up in the generated Kconfig
//! and C text.
//!
//! Both can be loaded from a TOML file:
//!
//! ```toml
//! [[families]]
//! name = "SAMD21"
//! dual_pad = true
//!
//! [[families]]
//! name = "SAMX5"
//!
//! [symbols]
//! symbol_prefix = "ATSAMD_SERIAL_SERCOM"
//! ```

use crate::error::PingenResult;
use serde::Deserialize;
use std::path::Path;

/// A chip family accepted in `CONFIG_MACH_*` conditionals.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Family {
    pub name: String,
    /// Pad 0 also works as RX and pad 2 also works as TX on this family.
    #[serde(default)]
    pub dual_pad: bool,
}

/// Ordered allow-list of chip families.
///
/// # Example
///
/// ```
/// use mcu_serial_pingen::config::FamilyTable;
///
/// let table = FamilyTable::with_defaults();
/// assert!(table.contains("SAMD21"));
/// assert!(table.is_dual_pad("SAMD21"));
/// assert!(!table.is_dual_pad("SAMD51"));
///
/// let table = FamilyTable::none().add_family("SAMX5", false);
/// assert!(table.contains("SAMX5"));
/// assert!(!table.contains("SAMD21"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct FamilyTable {
    families: Vec<Family>,
}

impl FamilyTable {
    /// The families known to the ATSAMD port. SAMD21 is the only one whose
    /// pads double as TX and RX.
    ///
    /// SAMX5 is not included; see the module docs.
    pub fn with_defaults() -> Self {
        Self::none()
            .add_family("SAMD21", true)
            .add_family("SAMD51", false)
            .add_family("SAME21", false)
            .add_family("SAME51", false)
    }

    /// An empty table; every `CONFIG_MACH_*` line is then unknown.
    pub fn none() -> Self {
        Self::default()
    }

    /// Add a family. Adding an existing name replaces its `dual_pad` flag.
    pub fn add_family(mut self, name: &str, dual_pad: bool) -> Self {
        match self.families.iter_mut().find(|f| f.name == name) {
            Some(family) => family.dual_pad = dual_pad,
            None => self.families.push(Family {
                name: name.to_string(),
                dual_pad,
            }),
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&Family> {
        self.families.iter().find(|f| f.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Unknown families are never dual-pad.
    pub fn is_dual_pad(&self, name: &str) -> bool {
        self.get(name).is_some_and(|f| f.dual_pad)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Family> {
        self.families.iter()
    }
}

/// Names used by the generated Kconfig and C text.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SymbolConfig {
    /// Prefix Kconfig adds to symbols seen from C (`CONFIG_`).
    pub config_prefix: String,
    /// Prefix of the per-SERCOM symbols; the instance number follows it.
    pub symbol_prefix: String,
    /// Prefix of the chip family Kconfig symbol (`MACH_` + family).
    pub machine_prefix: String,
    /// Condition that makes the pin prompts visible.
    pub menu_guard: String,
}

impl Default for SymbolConfig {
    fn default() -> Self {
        Self {
            config_prefix: "CONFIG_".to_string(),
            symbol_prefix: "ATSAMD_SERIAL_SERCOM".to_string(),
            machine_prefix: "MACH_".to_string(),
            menu_guard: "LOW_LEVEL_OPTIONS && SERIAL".to_string(),
        }
    }
}

impl SymbolConfig {
    /// `ATSAMD_SERIAL_SERCOM<n>`
    pub fn instance_symbol(&self, instance: u8) -> String {
        format!("{}{}", self.symbol_prefix, instance)
    }
}

/// Complete generator configuration.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct PingenConfig {
    #[serde(default = "FamilyTable::with_defaults")]
    pub families: FamilyTable,
    #[serde(default)]
    pub symbols: SymbolConfig,
}

impl Default for PingenConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl PingenConfig {
    pub fn with_defaults() -> Self {
        Self {
            families: FamilyTable::with_defaults(),
            symbols: SymbolConfig::default(),
        }
    }

    /// Parse a TOML document. Omitted sections keep their defaults; a
    /// `[[families]]` list replaces the default family table entirely.
    pub fn from_toml(text: &str) -> PingenResult<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> PingenResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }
}
