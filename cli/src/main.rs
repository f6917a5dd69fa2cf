mod demos;
mod error;
use colored::Colorize;
use demos::DEMOS;
use error::*;
use flatvm::Machine;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter, Registry};

const USAGE: &str = "usage: flatvm <list | show <demo> | run <demo> [capacity]>";

fn main() -> ExitCode {
	setup_tracing();
	match cli() {
		Ok(_) => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("{} {}", "error:".red().bold(), e);
			ExitCode::FAILURE
		}
	}
}

fn setup_tracing() {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
	let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);
	Registry::default().with(filter).with(fmt_layer).init();
}

fn cli() -> CLIResult {
	let mut args = std::env::args();
	args.next(); // Ignore program name
	match args.next() {
		Some(arg) => {
			if &arg == "list" {
				for (name, demo) in DEMOS.iter() {
					println!("{:<14}{:>4} words  {}", name.bold(), demo.capacity, demo.about);
				}
				Ok(())
			} else if &arg == "show" {
				let name = args.next().ok_or(CLIError::InsufficientArguments)?;
				let demo = DEMOS.get(name.as_str()).ok_or(CLIError::NotFound(name))?;
				print!("{}", (demo.build)()?);
				Ok(())
			} else if &arg == "run" {
				let name = args.next().ok_or(CLIError::InsufficientArguments)?;
				let demo = DEMOS.get(name.as_str()).ok_or_else(|| CLIError::NotFound(name.clone()))?;
				let capacity = match args.next() {
					Some(c) => c.parse::<usize>().map_err(|_| CLIError::BadCapacity(c))?,
					None => demo.capacity,
				};
				let program = (demo.build)()?;
				info!(demo = %name, capacity, instructions = program.len(), "booting");
				let mut machine = Machine::new(capacity)?;
				let result = machine.boot(&program);
				// memory is printed even after an abort
				let dump = machine.dump();
				match result {
					Ok(_) => println!("{}", dump.green()),
					Err(_) => println!("{}", dump.yellow()),
				}
				Ok(result?)
			} else if &arg == "help" {
				println!("{}", USAGE);
				Ok(())
			} else {
				Err(CLIError::UnkownArgument(arg))
			}
		}

		None => {
			println!("{}", USAGE);
			Err(CLIError::InsufficientArguments)
		}
	}
}
