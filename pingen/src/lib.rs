// Licensed under the Apache-2.0 license

//! Serial pin table to Kconfig / C header generator.
//!
//! The ATSAMD port keeps its SERCOM pad assignments in a single C array
//! (`sercom_pads[]`). This crate reads that array back out of the C source
//! and regenerates the two artifacts that must stay in sync with it:
//!
//! - the Kconfig `choice` blocks that let a user pick the serial TX/RX pins
//!   per chip family, and
//! - the preprocessor chain that turns the selected Kconfig symbol into
//!   `TX_PIN`/`RX_PIN` definitions.
//!
//! ## Usage
//!
//! ```no_run
//! use std::path::Path;
//! use mcu_serial_pingen::{generate, scan_file, Mode, PingenConfig, ScanOptions};
//!
//! let config = PingenConfig::with_defaults();
//! let table = scan_file(
//!     Path::new("src/atsamd/sercom.c"),
//!     &config.families,
//!     ScanOptions::default(),
//! )
//! .unwrap();
//! let header = generate(&table, Mode::Header, &config);
//! print!("{header}");
//! ```
//!
//! ## Module Organization
//!
//! - [`scan`]: Line scanner that extracts the pin table from C source
//! - [`types`]: Parsed records and the per-family record store ([`PinTable`])
//! - [`role`]: TX/RX eligibility of a record ([`classify`])
//! - [`config`]: Family allow-list and output symbol names ([`PingenConfig`])
//! - [`mode`]: Output mode selection ([`Mode`])
//! - [`error`]: Error type shared by every stage ([`PingenError`])
//! - `codegen`: Aggregation and rendering of both output formats

pub mod config;
pub mod error;
pub mod mode;
pub mod role;
pub mod scan;
pub mod types;

mod codegen;

// Re-export main public API
pub use codegen::{collect_pins, generate, PinUsers};
pub use config::{Family, FamilyTable, PingenConfig, SymbolConfig};
pub use error::{PingenError, PingenResult};
pub use mode::{Mode, MODE_PROMPT_ATTEMPTS};
pub use role::{classify, Eligibility, Role};
pub use scan::{scan, scan_file, scan_str, ScanOptions};
pub use types::{PinIdentity, PinRecord, PinTable, VariantGroup};
