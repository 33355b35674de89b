// src/bin/ffi_system_access.rs

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use ffi_system_access::{Termination, constants::DEMO_COMMANDS, execute_str};

/// Runs commands through the same executor the shared library exports.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Commands to hand to the system shell, in order.
    /// Defaults to hiding the cursor and disabling terminal echo.
    commands: Vec<String>,
}

/// Demonstrates standalone invocation of the executor.
/// Exits with the code of the last command.
fn main() {
    env_logger::init();

    match run_cli(Cli::parse()) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("\n{}: {}", "Error".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn run_cli(cli: Cli) -> Result<i32> {
    log::debug!("CLI args parsed: {:?}", cli);

    let commands: Vec<String> = if cli.commands.is_empty() {
        DEMO_COMMANDS.iter().map(|c| c.to_string()).collect()
    } else {
        cli.commands
    };

    let mut last_code = 0;
    for command in &commands {
        let status = execute_str(command)
            .with_context(|| format!("Could not run '{}'", command.escape_debug()))?;
        if !status.success() {
            eprintln!("{} '{}' {}", "Command".yellow(), command, status);
        }
        last_code = match status.termination() {
            Termination::Exited(code) => code,
            Termination::Signaled(_) | Termination::Unknown(_) => 1,
        };
    }
    Ok(last_code)
}
