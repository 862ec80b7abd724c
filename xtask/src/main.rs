// Licensed under the Apache-2.0 license

use clap::{Parser, Subcommand};
use log::LevelFilter;
use mcu_serial_pingen::Mode;
use simple_logger::SimpleLogger;
use std::path::PathBuf;

mod serial_pingen;

#[derive(Parser)]
#[command(name = "xtask", version, about = "Code generation tasks", long_about = None)]
struct Xtask {
    /// Log every scanned line
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    xtask: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the serial pin Kconfig or C header from the sercom_pads table
    SerialPingen {
        /// C source containing `sercom_pads[]`. The default table also has a
        /// CONFIG_MACH_SAMX5 branch, which is not a default family: its rows
        /// stay with SAMD21 (and its dual-pad rules) unless SAMX5 is added
        /// under `[[families]]` in `--config`.
        #[arg(long, default_value = "src/atsamd/sercom.c")]
        source: PathBuf,

        /// Output format: k/K/kconfig/Kconfig or c/C. Asked interactively if omitted.
        #[arg(long)]
        mode: Option<Mode>,

        /// Write the generated text here instead of stdout
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// TOML file with the chip family table and symbol names
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Fail on CONFIG_MACH_* conditionals for unknown families, such as
        /// SAMX5 when the default family table is used
        #[arg(long, default_value_t = false)]
        strict: bool,

        /// Only verify that --output matches the generated text
        #[arg(long, default_value_t = false)]
        check: bool,
    },
    /// List the chip families and serial pins found in the sercom_pads table
    SerialPins {
        #[arg(long, default_value = "src/atsamd/sercom.c")]
        source: PathBuf,

        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        #[arg(long, default_value_t = false)]
        strict: bool,
    },
}

fn main() {
    let cli = Xtask::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let _ = SimpleLogger::new().with_level(level).init();

    let result = match &cli.xtask {
        Commands::SerialPingen {
            source,
            mode,
            output,
            config,
            strict,
            check,
        } => serial_pingen::generate(
            source,
            *mode,
            output.as_deref(),
            config.as_deref(),
            *strict,
            *check,
        ),
        Commands::SerialPins {
            source,
            config,
            strict,
        } => serial_pingen::list(source, config.as_deref(), *strict),
    };
    result.unwrap_or_else(|e| {
        eprintln!("Error: {:#}", e);
        std::process::exit(-1);
    });
}
