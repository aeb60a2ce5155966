//! Memory bank initialization generator CLI.
//!
//! This binary is a one-shot generator: it computes the conflict-free 4-bank
//! interleaved mapping over the default 128-address range and writes
//! `imports/mem_bank_{0..3}.coe`, then exits. It performs:
//! 1. **Generate:** Test words for every linear address.
//! 2. **Map:** Each address to its (bank, offset) slot.
//! 3. **Emit:** One radix-16 `.coe` file per bank.

use clap::Parser;
use std::path::Path;
use std::process;

use bankgen_core::common::constants;
use bankgen_core::generator;
use bankgen_core::Config;

#[derive(Parser, Debug)]
#[command(
    name = "bankgen",
    author,
    version,
    about = "Conflict-free 4-bank memory initialization generator",
    long_about = "Generate .coe initialization files for a 4-bank interleaved RAM array.\n\nThe address depth and output layout are fixed to match the RTL; the only switch is the mapping trace.\n\nExamples:\n  bankgen\n  bankgen --verbose"
)]
struct Cli {
    /// Print per-address mapping traces and bank dumps.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| {
            tracing_subscriber::EnvFilter::new(if cli.verbose { "debug" } else { "info" })
        });
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut config = Config::default();
    config.general.trace_mapping = cli.verbose;

    println!(
        "[*] Generating {} addresses across {} banks into ./{}/",
        config.array.depth,
        constants::NUM_BANKS,
        constants::OUTPUT_DIR
    );

    match generator::run(&config, Path::new(constants::OUTPUT_DIR)) {
        Ok(written) => {
            for path in written {
                println!("[*] Wrote {}", path.display());
            }
        }
        Err(e) => {
            eprintln!("\n[!] FATAL: {}", e);
            eprintln!("    (the output directory ./{}/ must exist)", constants::OUTPUT_DIR);
            process::exit(1);
        }
    }
}
