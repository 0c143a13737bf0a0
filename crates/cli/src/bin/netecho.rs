//! TCP/UDP echo demo.
//!
//! Minimal interactive client/server demo with a fixed vocabulary:
//! "ping" answers "Pong!", "time" answers the current UTC time, anything
//! else answers "Unknown command". Servers run until interrupted; clients
//! forward stdin lines until "quit".

use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use clap::{Parser, Subcommand};

use sysprobe_core::Config;
use sysprobe_core::net::{TcpEcho, UdpEcho, tcp, udp};

#[derive(Parser, Debug)]
#[command(
    name = "netecho",
    version,
    about = "Minimal TCP/UDP echo client-server demo",
    long_about = "Run one echo endpoint per invocation.\n\nExamples:\n  \
                  netecho tcp-server -p 7000\n  netecho tcp-client --host 192.168.1.10 -p 7000\n  \
                  netecho udp-server --config netecho.json"
)]
struct Cli {
    /// Optional JSON config file (bind address, ports, buffer size).
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve one TCP client, echo-responding until it disconnects.
    TcpServer {
        /// Port to listen on (default from config).
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Serve UDP datagrams until interrupted.
    UdpServer {
        /// Port to listen on (default from config).
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Interactive TCP client with a background receive thread.
    TcpClient {
        /// Server host.
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Server port (default from config).
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Interactive UDP client with a background receive thread.
    UdpClient {
        /// Server host.
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Server port (default from config).
        #[arg(short, long)]
        port: Option<u16>,
    },
}

fn main() {
    let cli = Cli::parse();

    let config = match cli.config {
        Some(path) => Config::load(&path).unwrap_or_else(|e| {
            eprintln!("Error reading config {}: {e}", path.display());
            process::exit(1);
        }),
        None => Config::default(),
    };
    let net = config.net;

    let result = match cli.command {
        Commands::TcpServer { port } => {
            let port = port.unwrap_or(net.tcp_port);
            run_tcp_server(&net.bind_addr, port, net.buffer_size)
        }
        Commands::UdpServer { port } => {
            let port = port.unwrap_or(net.udp_port);
            run_udp_server(&net.bind_addr, port, net.buffer_size)
        }
        Commands::TcpClient { host, port } => {
            let port = port.unwrap_or(net.tcp_port);
            let running = Arc::new(AtomicBool::new(true));
            tcp::run_client((host.as_str(), port), &running)
        }
        Commands::UdpClient { host, port } => {
            let port = port.unwrap_or(net.udp_port);
            let running = Arc::new(AtomicBool::new(true));
            udp::run_client((host.as_str(), port), &running)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Binds and runs the TCP echo server for a single client session.
fn run_tcp_server(bind_addr: &str, port: u16, buffer_size: usize) -> std::io::Result<()> {
    let server = TcpEcho::bind((bind_addr, port))?;
    println!("TCP Server started on port {port}");
    server.serve_once(buffer_size)?;
    println!("TCP Server stopped");
    Ok(())
}

/// Binds and runs the UDP echo server until interrupted.
fn run_udp_server(bind_addr: &str, port: u16, buffer_size: usize) -> std::io::Result<()> {
    let server = UdpEcho::bind((bind_addr, port))?;
    println!("UDP Server started on port {port}");
    let running = AtomicBool::new(true);
    server.run(buffer_size, &running)?;
    println!("UDP Server stopped");
    Ok(())
}
