// Licensed under the Apache-2.0 license

//! Regenerate the ATSAMD serial pin Kconfig and header snippets from the
//! `sercom_pads[]` table.

use anyhow::{bail, Context, Result};
use mcu_serial_pingen::{
    collect_pins, generate as generate_pins, scan_file, Mode, PinTable, PingenConfig, Role,
    ScanOptions, MODE_PROMPT_ATTEMPTS,
};
use std::fmt::Write;
use std::fs;
use std::io;
use std::path::Path;

fn load(source: &Path, config: Option<&Path>, strict: bool) -> Result<(PinTable, PingenConfig)> {
    let config = match config {
        Some(path) => PingenConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => PingenConfig::with_defaults(),
    };
    let table = scan_file(source, &config.families, ScanOptions { strict })
        .with_context(|| format!("Failed to scan {}", source.display()))?;
    Ok((table, config))
}

/// Generate the pin selection text for `mode`, asking on the terminal when
/// no mode was given.
///
/// With `check`, the existing `output` file is compared against freshly
/// generated text and nothing is written.
pub(crate) fn generate(
    source: &Path,
    mode: Option<Mode>,
    output: Option<&Path>,
    config: Option<&Path>,
    strict: bool,
    check: bool,
) -> Result<()> {
    if check && output.is_none() {
        bail!("--check needs --output to compare against");
    }

    let (table, config) = load(source, config, strict)?;
    let mode = match mode {
        Some(mode) => mode,
        None => Mode::prompt(io::stdin().lock(), io::stderr(), MODE_PROMPT_ATTEMPTS)?,
    };
    let code = generate_pins(&table, mode, &config);

    match output {
        Some(output_path) if check => {
            let existing = fs::read_to_string(output_path)
                .with_context(|| format!("Failed to read {}", output_path.display()))?;
            if existing != code {
                bail!(
                    "{} is out of date with {}; rerun `cargo xtask serial-pingen --mode {}`",
                    output_path.display(),
                    source.display(),
                    mode
                );
            }
            log::info!("{} is up to date", output_path.display());
        }
        Some(output_path) => {
            fs::write(output_path, &code)?;
            log::info!("{mode} output written to: {}", output_path.display());
        }
        None => print!("{code}"),
    }

    Ok(())
}

/// Print the families found in `source` and the pins usable per role.
pub(crate) fn list(source: &Path, config: Option<&Path>, strict: bool) -> Result<()> {
    let (table, config) = load(source, config, strict)?;
    print!("{}", summary(&table, &config));
    Ok(())
}

fn summary(table: &PinTable, config: &PingenConfig) -> String {
    let mut out = String::new();
    for group in table.groups() {
        let dual = if config.families.is_dual_pad(&group.tag) {
            " (dual-pad)"
        } else {
            ""
        };
        writeln!(out, "{}{dual}: {} records", group.tag, group.records.len()).unwrap();
    }
    for role in Role::ALL {
        let pins = collect_pins(table, &config.families, role);
        let names: Vec<_> = pins.keys().map(|p| p.to_string()).collect();
        writeln!(out, "{} ({}): {}", role.abbrev(), names.len(), names.join(" ")).unwrap();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcu_serial_pingen::scan_str;

    const SOURCE: &str = "static const struct sercom_pad sercom_pads[] = {
#if CONFIG_MACH_SAMD21
    { 0, GPIO('A', 8), 0, 'C'},
    { 0, GPIO('A', 9), 1, 'C'},
#elif CONFIG_MACH_SAMD51
    { 3, GPIO('A', 22), 0, 'C'},
#endif
};
";

    fn write_source(dir: &Path) -> std::path::PathBuf {
        let path = dir.join("sercom.c");
        fs::write(&path, SOURCE).unwrap();
        path
    }

    fn run(source: &Path, mode: Mode, output: &Path, check: bool) -> Result<()> {
        generate(source, Some(mode), Some(output), None, false, check)
    }

    #[test]
    fn test_generate_then_check() {
        let dir = tempfile::tempdir().unwrap();
        let source = write_source(dir.path());
        let output = dir.path().join("serial_pins.h");

        run(&source, Mode::Header, &output, false).unwrap();
        let written = fs::read_to_string(&output).unwrap();
        assert!(written.starts_with("#if CONFIG_ATSAMD_SERIAL_SERCOM0_TX_A8\n"));

        run(&source, Mode::Header, &output, true).unwrap();

        fs::write(&output, "stale").unwrap();
        let err = run(&source, Mode::Header, &output, true).unwrap_err();
        assert!(err.to_string().contains("out of date"));
        // Check mode never rewrites the file.
        assert_eq!(fs::read_to_string(&output).unwrap(), "stale");
    }

    #[test]
    fn test_check_requires_output() {
        let dir = tempfile::tempdir().unwrap();
        let source = write_source(dir.path());
        assert!(generate(&source, Some(Mode::Kconfig), None, None, false, true).is_err());
    }

    #[test]
    fn test_check_missing_output() {
        let dir = tempfile::tempdir().unwrap();
        let source = write_source(dir.path());
        let output = dir.path().join("Kconfig.pins");
        assert!(run(&source, Mode::Kconfig, &output, true).is_err());
        assert!(!output.exists());
    }

    #[test]
    fn test_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = write_source(dir.path());
        let config = dir.path().join("pingen.toml");
        fs::write(&config, "[symbols]\nmenu_guard = \"SERIAL\"\n").unwrap();
        let output = dir.path().join("Kconfig.pins");

        generate(
            &source,
            Some(Mode::Kconfig),
            Some(output.as_path()),
            Some(config.as_path()),
            false,
            false,
        )
        .unwrap();
        let written = fs::read_to_string(&output).unwrap();
        assert!(written.contains("    prompt \"Serial TX Pin\" if SERIAL\n"));
    }

    #[test]
    fn test_bad_source_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("sercom.c");
        fs::write(&source, "static int x;\n").unwrap();
        let output = dir.path().join("serial_pins.h");
        assert!(run(&source, Mode::Header, &output, false).is_err());
        assert!(!output.exists());
    }

    #[test]
    fn test_summary() {
        let config = PingenConfig::with_defaults();
        let table = scan_str(SOURCE, &config.families, ScanOptions::default()).unwrap();
        assert_eq!(
            summary(&table, &config),
            "SAMD21 (dual-pad): 2 records\nSAMD51: 1 records\nTX (2): A8 A22\nRX (2): A8 A9\n"
        );
    }
}
