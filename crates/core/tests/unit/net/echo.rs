//! # Loopback Echo Tests
//!
//! Runs the echo servers on an ephemeral loopback port and drives them with
//! plain std sockets.

use std::io::{Read, Write};
use std::net::{TcpStream, UdpSocket};
use std::thread;
use std::time::Duration;

use sysprobe_core::net::{DEFAULT_BUFFER_SIZE, TcpEcho, UdpEcho};

/// A TCP session gets a response per sent buffer and the server returns
/// cleanly once the client disconnects.
#[test]
fn tcp_echo_round_trip() {
    let server = TcpEcho::bind("127.0.0.1:0").expect("bind");
    let addr = server.local_addr().expect("local addr");

    let handle = thread::spawn(move || server.serve_once(DEFAULT_BUFFER_SIZE));

    let mut stream = TcpStream::connect(addr).expect("connect");
    let mut buf = [0u8; DEFAULT_BUFFER_SIZE];

    stream.write_all(b"ping").expect("send ping");
    let n = stream.read(&mut buf).expect("recv");
    assert_eq!(&buf[..n], b"Pong!");

    stream.write_all(b"bogus").expect("send bogus");
    let n = stream.read(&mut buf).expect("recv");
    assert_eq!(&buf[..n], b"Unknown command");

    drop(stream);
    handle
        .join()
        .expect("server thread")
        .expect("server exits cleanly");
}

/// Each UDP datagram gets its own response.
#[test]
fn udp_echo_round_trip() {
    let server = UdpEcho::bind("127.0.0.1:0").expect("bind");
    let addr = server.local_addr().expect("local addr");

    let handle = thread::spawn(move || {
        server.serve_once(DEFAULT_BUFFER_SIZE)?;
        server.serve_once(DEFAULT_BUFFER_SIZE)
    });

    let client = UdpSocket::bind("127.0.0.1:0").expect("client bind");
    client
        .set_read_timeout(Some(Duration::from_secs(5)))
        .expect("timeout");
    let mut buf = [0u8; DEFAULT_BUFFER_SIZE];

    client.send_to(b"ping", addr).expect("send ping");
    let (n, _) = client.recv_from(&mut buf).expect("recv pong");
    assert_eq!(&buf[..n], b"Pong!");

    client.send_to(b"time", addr).expect("send time");
    let (n, _) = client.recv_from(&mut buf).expect("recv time");
    assert!(n > 0, "time reply is non-empty");

    handle
        .join()
        .expect("server thread")
        .expect("server exits cleanly");
}
