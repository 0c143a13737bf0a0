//! UDP echo server and client.
//!
//! The server answers each datagram with the protocol response. The client
//! sends stdin lines to the server address and prints replies from a
//! background receive thread driven by a per-operation running flag.

use std::io::{self, BufRead, Write};
use std::net::{SocketAddr, ToSocketAddrs, UdpSocket};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use super::proto;

/// Poll interval for receive loops checking the running flag.
const RECV_TIMEOUT: Duration = Duration::from_millis(100);

/// A bound UDP echo server.
#[derive(Debug)]
pub struct UdpEcho {
    socket: UdpSocket,
}

impl UdpEcho {
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
        let socket = UdpSocket::bind(addr)?;
        Ok(Self { socket })
    }

    /// Returns the bound local address.
    ///
    /// # Errors
    ///
    /// Propagates the underlying socket error.
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.socket.local_addr()
    }

    /// Receives one datagram and answers it.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - Receive buffer size in bytes.
    ///
    /// # Errors
    ///
    /// Propagates receive and send failures.
    pub fn serve_once(&self, buffer_size: usize) -> io::Result<()> {
        let mut buf = vec![0u8; buffer_size];
        let (n, peer) = self.socket.recv_from(&mut buf)?;
        println!(
            "Received from {peer}: {}",
            String::from_utf8_lossy(&buf[..n])
        );
        let _ = self.socket.send_to(&proto::respond(&buf[..n]), peer)?;
        Ok(())
    }

    /// Serves datagrams until the running flag clears.
    ///
    /// The socket uses a short receive timeout so a stop request is
    /// observed promptly.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - Receive buffer size in bytes.
    /// * `running` - Per-operation stop flag.
    ///
    /// # Errors
    ///
    /// Propagates unexpected I/O failures; timeouts are not errors.
    pub fn run(&self, buffer_size: usize, running: &AtomicBool) -> io::Result<()> {
        self.socket.set_read_timeout(Some(RECV_TIMEOUT))?;
        while running.load(Ordering::Relaxed) {
            match self.serve_once(buffer_size) {
                Ok(()) => {}
                Err(e) if matches!(e.kind(), io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut) =>
                {}
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }
}

/// Runs the interactive UDP client.
///
/// Binds an ephemeral local socket, spawns a background receive thread
/// printing timestamped replies, then forwards stdin lines to the server
/// until `"quit"` is entered.
///
/// # Arguments
///
/// * `server` - Server address to send to.
/// * `running` - Per-operation stop flag shared with the receive thread.
///
/// # Errors
///
/// Propagates socket setup and send failures.
pub fn run_client<A: ToSocketAddrs>(server: A, running: &Arc<AtomicBool>) -> io::Result<()> {
    let socket = UdpSocket::bind("0.0.0.0:0")?;
    socket.connect(server)?;
    socket.set_read_timeout(Some(RECV_TIMEOUT))?;
    println!("UDP Client started, sending to {}", socket.peer_addr()?);

    running.store(true, Ordering::Relaxed);
    let rx_socket = socket.try_clone()?;
    let rx_running = Arc::clone(running);
    let rx = thread::spawn(move || receive_loop(&rx_socket, &rx_running));

    let result = send_loop(&socket, running);

    running.store(false, Ordering::Relaxed);
    let _ = rx.join();
    println!("UDP Client stopped");
    result
}

/// Prints replies from the server until the flag clears.
fn receive_loop(socket: &UdpSocket, running: &AtomicBool) {
    let mut buf = [0u8; super::DEFAULT_BUFFER_SIZE];
    while running.load(Ordering::Relaxed) {
        match socket.recv(&mut buf) {
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
fn send_loop(socket: &UdpSocket, running: &AtomicBool) -> io::Result<()> {
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
        let _ = socket.send(line.as_bytes())?;
    }
}

/// Reprints the input prompt after an asynchronous reply.
fn prompt() {
    print!("Enter message to send (or 'quit' to stop): ");
    let _ = io::stdout().flush();
}
