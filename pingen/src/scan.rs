// Licensed under the Apache-2.0 license

//! Extraction of the `sercom_pads[]` table from C source.
//!
//! The scanner is a small line-oriented state machine:
//!
//! ```text
//! SeekStart ──"sercom_pads[] = {"──> InTable ──"};"──> Done
//!                                     │
//!                                     ├── #if/#elif CONFIG_MACH_<family>  → switch group
//!                                     ├── { n, GPIO('P', N), pad, 'M' }   → record
//!                                     └── anything else                   → skipped
//! ```
//!
//! Only families listed in the [`FamilyTable`] switch the active group.
//! Other `CONFIG_MACH_*` conditionals are reported with a warning and
//! leave the active group unchanged, unless [`ScanOptions::strict`] is set.

use crate::config::FamilyTable;
use crate::error::{PingenError, PingenResult};
use crate::types::{PinRecord, PinTable};
use log::{debug, info, warn};
use regex::{Captures, Regex};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::LazyLock;

static TABLE_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"sercom_pads\[\] = \{$").unwrap());
static TABLE_END: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\};$").unwrap());
static FAMILY_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#(?:el)?if\s+CONFIG_MACH_(?P<family>\w+)").unwrap());
static RECORD_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^\s*\{\s*(?P<sercom>\d)\s*,",
        r"\s*GPIO\(\s*'(?P<port>[A-Z])'\s*,\s*(?P<pin>\d+)\s*\)\s*,",
        r"\s*(?P<pad>[0-3])\s*,",
        r"\s*'(?P<mode>[A-Z])'\s*\}",
    ))
    .unwrap()
});

/// Options controlling how lenient the scanner is.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScanOptions {
    /// Fail on `CONFIG_MACH_*` conditionals naming an unlisted family
    /// instead of warning and skipping them.
    pub strict: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    SeekStart,
    InTable,
    Done,
}

struct Scanner<'a> {
    families: &'a FamilyTable,
    options: ScanOptions,
    state: State,
    current: Option<String>,
    table: PinTable,
}

impl<'a> Scanner<'a> {
    fn new(families: &'a FamilyTable, options: ScanOptions) -> Self {
        Self {
            families,
            options,
            state: State::SeekStart,
            current: None,
            table: PinTable::default(),
        }
    }

    fn feed(&mut self, line_no: usize, line: &str) -> PingenResult<()> {
        match self.state {
            State::SeekStart => {
                if TABLE_START.is_match(line) {
                    debug!("line {line_no}: start of sercom_pads");
                    self.state = State::InTable;
                }
            }
            State::InTable => {
                if TABLE_END.is_match(line) {
                    debug!("line {line_no}: end of sercom_pads");
                    self.state = State::Done;
                } else {
                    self.table_line(line_no, line)?;
                }
            }
            State::Done => {}
        }
        Ok(())
    }

    fn table_line(&mut self, line_no: usize, line: &str) -> PingenResult<()> {
        if let Some(caps) = FAMILY_LINE.captures(line) {
            let family = &caps["family"];
            if self.families.contains(family) {
                debug!("line {line_no}: entering family {family}");
                self.table.open_group(family);
                self.current = Some(family.to_string());
                return Ok(());
            }
            if self.options.strict {
                return Err(PingenError::UnknownFamily {
                    family: family.to_string(),
                    line: line_no,
                });
            }
            warn!(
                "line {line_no}: ignoring conditional for unknown family {family}; \
                 records stay with {}",
                self.current.as_deref().unwrap_or("<none>")
            );
            return Ok(());
        }

        if let Some(caps) = RECORD_LINE.captures(line) {
            let Some(tag) = self.current.as_deref() else {
                return Err(PingenError::NoActiveVariant { line: line_no });
            };
            let record = parse_record(line_no, &caps)?;
            self.table.push(tag, record);
            return Ok(());
        }

        if !line.trim().is_empty() {
            debug!("line {line_no}: skipped `{}`", line.trim());
        }
        Ok(())
    }

    fn finish(self) -> PingenResult<PinTable> {
        match self.state {
            State::SeekStart => Err(PingenError::malformed(
                "`sercom_pads[] = {` not found before end of input",
            )),
            State::InTable => Err(PingenError::malformed(
                "`};` closing sercom_pads not found before end of input",
            )),
            State::Done => {
                info!(
                    "Scanned {} pin records in {} families",
                    self.table.record_count(),
                    self.table.groups().len()
                );
                Ok(self.table)
            }
        }
    }
}

fn parse_record(line_no: usize, caps: &Captures) -> PingenResult<PinRecord> {
    let number = |name: &str| {
        caps[name].parse::<u32>().map_err(|_| {
            PingenError::malformed(format!(
                "line {line_no}: {name} value `{}` out of range",
                &caps[name]
            ))
        })
    };
    let letter = |name: &str| caps[name].chars().next().unwrap_or_default();

    // The pattern restricts sercom and pad to a single digit.
    Ok(PinRecord {
        peripheral_instance: number("sercom")? as u8,
        port: letter("port"),
        pin_number: number("pin")?,
        pad: number("pad")? as u8,
        signal_mode: letter("mode"),
    })
}

/// Scan C source text from any buffered reader.
pub fn scan<R: BufRead>(
    reader: R,
    families: &FamilyTable,
    options: ScanOptions,
) -> PingenResult<PinTable> {
    let mut scanner = Scanner::new(families, options);
    for (idx, line) in reader.lines().enumerate() {
        scanner.feed(idx + 1, &line?)?;
        if scanner.state == State::Done {
            break;
        }
    }
    scanner.finish()
}

/// Scan C source held in memory.
pub fn scan_str(
    source: &str,
    families: &FamilyTable,
    options: ScanOptions,
) -> PingenResult<PinTable> {
    scan(source.as_bytes(), families, options)
}

/// Scan a C source file. The file is closed before this returns.
pub fn scan_file(
    path: &Path,
    families: &FamilyTable,
    options: ScanOptions,
) -> PingenResult<PinTable> {
    let file = File::open(path)?;
    scan(BufReader::new(file), families, options)
}
