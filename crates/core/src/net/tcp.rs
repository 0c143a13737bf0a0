//! TCP echo server and client.
//!
//! The server accepts a single client and answers each received buffer with
//! the protocol response until the peer disconnects. The client sends lines
//! read from stdin and prints replies from a background receive thread; the
//! thread is stopped through an explicit per-operation running flag.

use std::io::{self, BufRead, Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream, ToSocketAddrs};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use super::proto;

/// Poll interval for the client receive thread; bounds how long a stop
/// request can go unnoticed.
const RECV_TIMEOUT: Duration = Duration::from_millis(100);

/// A bound TCP echo server.
#[derive(Debug)]
pub struct TcpEcho {
    listener: TcpListener,
}

impl TcpEcho {
    /// Binds the echo server.
    ///
    /// # Arguments
    ///
    /// * `addr` - Address to bind; port 0 picks an ephemeral port.
    ///
    /// # Errors
    ///
    /// Propagates the bind failure.
    pub fn bind<A: ToSocketAddrs>(addr: A) -> io::Result<Self> {
        let listener = TcpListener::bind(addr)?;
        Ok(Self { listener })
    }

    /// Returns the bound local address.
    ///
    /// # Errors
    ///
    /// Propagates the underlying socket error.
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Accepts one client and serves it until disconnect.
    ///
    /// Each received buffer is answered with [`proto::respond`]. A clean
    /// zero-length read or a connection reset ends the session normally.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - Receive buffer size in bytes.
    ///
    /// # Errors
    ///
    /// Propagates accept and unexpected I/O failures.
    pub fn serve_once(&self, buffer_size: usize) -> io::Result<()> {
        let (mut stream, peer) = self.listener.accept()?;
        println!("Connected by {peer}");

        let mut buf = vec![0u8; buffer_size];
        loop {
            match stream.read(&mut buf) {
                Ok(0) => {
                    println!("Client {peer} disconnected gracefully");
                    break;
                }
                Ok(n) => {
                    println!(
                        "Received from {peer}: {}",
                        String::from_utf8_lossy(&buf[..n])
                    );
                    stream.write_all(&proto::respond(&buf[..n]))?;
                }
                Err(e) if e.kind() == io::ErrorKind::ConnectionReset => {
                    println!("Client {peer} forcibly disconnected");
                    break;
                }
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }
}

/// Runs the interactive TCP client.
///
/// Connects to the server, spawns a background receive thread printing
/// timestamped replies, then forwards stdin lines until `"quit"` is entered
/// or the running flag is cleared.
///
/// # Arguments
///
/// * `addr` - Server address to connect to.
/// * `running` - Per-operation stop flag shared with the receive thread.
///
/// # Errors
///
/// Propagates connect and send failures.
pub fn run_client<A: ToSocketAddrs>(addr: A, running: &Arc<AtomicBool>) -> io::Result<()> {
    let stream = TcpStream::connect(addr)?;
    stream.set_read_timeout(Some(RECV_TIMEOUT))?;
    println!("TCP Client started, connected to {}", stream.peer_addr()?);

    running.store(true, Ordering::Relaxed);
    let rx_stream = stream.try_clone()?;
    let rx_running = Arc::clone(running);
    let rx = thread::spawn(move || receive_loop(rx_stream, &rx_running));

    let result = send_loop(&stream, running);

    running.store(false, Ordering::Relaxed);
    let _ = rx.join();
    println!("TCP Client stopped");
    result
}

/// Prints replies from the server until the flag clears or the peer closes.
fn receive_loop(mut stream: TcpStream, running: &AtomicBool) {
    let mut buf = [0u8; super::DEFAULT_BUFFER_SIZE];
    while running.load(Ordering::Relaxed) {
        match stream.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => {
                println!(
                    "\n[{}] Received: {}",
                    proto::now_clock_string(),
                    String::from_utf8_lossy(&buf[..n])
                );
                prompt();
            }
            Err(e) if matches!(e.kind(), io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut) => {}
            Err(_) => break,
        }
    }
}

/// Forwards stdin lines to the server until `"quit"` or EOF.
fn send_loop(mut stream: &TcpStream, running: &AtomicBool) -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        if !running.load(Ordering::Relaxed) {
            return Ok(());
        }
        prompt();
        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;
        if line.trim().eq_ignore_ascii_case("quit") {
            return Ok(());
        }
        stream.write_all(line.as_bytes())?;
    }
}

/// Reprints the input prompt after an asynchronous reply.
fn prompt() {
    print!("Enter message to send (or 'quit' to stop): ");
    let _ = io::stdout().flush();
}
