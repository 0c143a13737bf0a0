//! Physical memory read/write tool.
//!
//! Single-shot diagnostic command: maps the page containing a physical
//! address through `/dev/mem`, optionally writes a value, always reads back,
//! and reports the value in hex, decimal, and binary. Requires root.

use std::process;

use clap::Parser;

use sysprobe_core::mem::{self, AccessRequest, DevMem};

#[derive(Parser, Debug)]
#[command(
    name = "devmem",
    version,
    about = "Physical memory read/write tool with 64-bit support",
    long_about = "Map one page of /dev/mem, optionally write a value at the \
                  given physical address, and read it back.\n\nExamples:\n  \
                  devmem 0xFEDC0000\n  devmem 0x1000 -w 16\n  devmem 0x1000 -w 64 -s 0xDEADBEEFCAFEBABE"
)]
struct Cli {
    /// Physical address (e.g. 0x1000, 0xFEDC0000).
    #[arg(value_parser = parse_int)]
    address: u64,

    /// Access width in bits (8, 16, 32, or 64).
    #[arg(short, long, default_value_t = 32)]
    width: u32,

    /// Value to write before the read-back (e.g. 0x1234).
    #[arg(short, long, value_name = "VALUE", value_parser = parse_int)]
    set: Option<u64>,
}

/// Parses an unsigned integer honoring 0x/0o/0b prefixes.
fn parse_int(s: &str) -> Result<u64, String> {
    let s = s.trim();
    let (digits, radix) = match s.as_bytes() {
        [b'0', b'x' | b'X', ..] => (&s[2..], 16),
        [b'0', b'o' | b'O', ..] => (&s[2..], 8),
        [b'0', b'b' | b'B', ..] => (&s[2..], 2),
        _ => (s, 10),
    };
    u64::from_str_radix(digits, radix).map_err(|e| format!("invalid integer '{s}': {e}"))
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    // Privilege is checked once here, before any memory operation.
    // SAFETY: geteuid has no preconditions and cannot fail.
    if unsafe { libc::geteuid() } != 0 {
        eprintln!("Error: this tool requires root privileges");
        process::exit(1);
    }

    let request = AccessRequest::new(cli.address, cli.width, cli.set).unwrap_or_else(|e| fail(&e));
    let mut dev = DevMem::open(DevMem::DEFAULT_PATH).unwrap_or_else(|e| fail(&e));

    match mem::access(&mut dev, &request) {
        Ok(report) => println!("{report}"),
        Err(e) => fail(&e),
    }
}

/// Reports a terminal failure on stderr and exits non-zero.
fn fail(e: &dyn std::error::Error) -> ! {
    eprintln!("Error accessing memory: {e}");
    process::exit(1);
}
