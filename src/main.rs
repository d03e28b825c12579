//! MIPS Pipeline Simulator CLI.
//!
//! The main executable for the simulator. It assembles a source file, prints
//! the program listing, runs the pipeline until it drains (or hits the cycle
//! ceiling), and prints the final machine state and statistics.
//!
//! # Usage
//!
//! ```text
//! mips-sim program.asm            # run, print final state
//! mips-sim program.asm --debug    # print the pipeline after every cycle
//! mips-sim program.asm --json     # emit the final snapshot as JSON
//! ```

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

use mips_pipeline::common::LoadError;
use mips_pipeline::config::Config;
use mips_pipeline::core::{Cpu, RunOutcome};
use mips_pipeline::sim::diagnostics::error_file_path;
use mips_pipeline::sim::loader;
use mips_pipeline::sim::trace::{self, PipelinePrinter};

/// Command-line arguments for the MIPS pipeline simulator.
#[derive(Parser, Debug)]
#[command(author, version, about = "MIPS 5-Stage Pipeline Simulator")]
struct Args {
    /// Assembly source file.
    input: PathBuf,

    /// Trace mode: print the pipeline state after every cycle.
    #[arg(short, long)]
    debug: bool,

    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Cycle ceiling, overriding the configuration.
    #[arg(long)]
    max_cycles: Option<u64>,

    /// Print the final snapshot and statistics as JSON.
    #[arg(long)]
    json: bool,
}

/// Main entry point for the MIPS pipeline simulator.
///
/// # Behavior
///
/// 1. **Configuration**: Parses arguments, loads the optional TOML file, and
///    applies command-line overrides.
/// 2. **Assembly**: Assembles the input; on errors prints them, writes the
///    `.err` file next to the input, and exits with status 1.
/// 3. **Simulation**: Runs the pipeline, printing every cycle in trace mode.
/// 4. **Teardown**: Prints the final state and statistics.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::from_file(path).unwrap_or_else(|e| {
            eprintln!("\n[!] FATAL: {}", e);
            process::exit(1);
        }),
        None => Config::default(),
    };
    if args.debug {
        config.general.trace = true;
    }
    if let Some(max_cycles) = args.max_cycles {
        config.pipeline.max_cycles = max_cycles;
    }

    let program = match loader::load_program(&args.input) {
        Ok(program) => program,
        Err(LoadError::Assembly { diagnostics, .. }) => {
            diagnostics.print();
            let err_path = error_file_path(&args.input);
            match diagnostics.write_error_file(&err_path) {
                Ok(()) => eprintln!("Errors written to: {}", err_path.display()),
                Err(e) => error!(path = %err_path.display(), "could not write error file: {}", e),
            }
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let mut cpu = Cpu::with_config(&program, &config);

    if !args.json {
        let mut out = io::stdout().lock();
        let listed = writeln!(out, "Loaded {} instructions\n", program.len())
            .and_then(|()| trace::write_listing(&mut out, cpu.program()));
        if let Err(e) = listed {
            error!("could not write listing: {}", e);
        }
    }

    // JSON output owns stdout, so the per-cycle trace goes to stderr instead.
    let sink: Box<dyn Write> = if args.json {
        Box::new(io::stderr())
    } else {
        Box::new(io::stdout())
    };
    let mut printer = PipelinePrinter::new(sink);
    let result = cpu.run_with(&mut printer);
    if let Some(e) = printer.take_error() {
        error!("could not write pipeline trace: {}", e);
    }
    let _ = printer.into_inner().flush();

    let outcome = match result {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("\nRuntime Error: {}", e);
            let _ = trace::write_final_state(&mut io::stderr(), &cpu);
            process::exit(1);
        }
    };

    if let RunOutcome::CycleLimit { cycles } = outcome {
        warn!(cycles, "pipeline did not drain");
        eprintln!(
            "Warning: simulation stopped after {} cycles without draining",
            cycles
        );
    }

    if args.json {
        let report = serde_json::json!({
            "outcome": outcome,
            "snapshot": cpu.snapshot(),
            "stats": cpu.stats,
        });
        match serde_json::to_string_pretty(&report) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
    } else {
        let mut out = io::stdout().lock();
        if let Err(e) = trace::write_final_state(&mut out, &cpu) {
            error!("could not write final state: {}", e);
        }
        let _ = out.flush();
        drop(out);
        cpu.stats.print();
    }
}
