//! GPIO line control tool.
//!
//! Requests a single line on a GPIO chip: input direction reads and prints
//! the line value, output direction drives the line to 0 or 1.

use std::path::PathBuf;
use std::process;
use std::str::FromStr;

use clap::Parser;

use sysprobe_core::gpio::{Chip, Direction};

#[derive(Parser, Debug)]
#[command(
    name = "gpioctl",
    version,
    about = "GPIO line control via the GPIO character device",
    long_about = "Read or drive a single GPIO line.\n\nExamples:\n  \
                  gpioctl /dev/gpiochip0 17 in\n  gpioctl /dev/gpiochip0 17 out 1"
)]
struct Cli {
    /// GPIO chip device path (e.g. /dev/gpiochip0).
    chip: PathBuf,

    /// Line offset on the chip.
    line: u32,

    /// Line direction: in or out.
    #[arg(value_parser = Direction::from_str)]
    direction: Direction,

    /// Output value (0 or 1); required for direction 'out'.
    value: Option<u64>,
}

fn main() {
    let cli = Cli::parse();

    let chip = Chip::open(&cli.chip).unwrap_or_else(|e| fail(&e));

    match cli.direction {
        Direction::In => {
            let value = chip.read_line(cli.line).unwrap_or_else(|e| fail(&e));
            println!("GPIO {} value: {value}", cli.line);
        }
        Direction::Out => {
            let Some(value) = cli.value else {
                eprintln!("Error: output direction requires a value (0 or 1)");
                process::exit(1);
            };
            chip.drive_line(cli.line, value)
                .unwrap_or_else(|e| fail(&e));
            println!(
                "Set GPIO {} to {}",
                cli.line,
                if value == 1 { "HIGH" } else { "LOW" }
            );
        }
    }
}

/// Reports a terminal failure on stderr and exits non-zero.
fn fail(e: &dyn std::error::Error) -> ! {
    eprintln!("Error: {e}");
    process::exit(1);
}
