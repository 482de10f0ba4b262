//! Startup advertisement of the snapshot endpoint.
//!
//! Logs the URL a client on the local network can point a browser at,
//! once, when the server comes up.

use std::net::UdpSocket;

use tracing::info;

pub fn announce_endpoint(bind_address: &str, port: u16) {
    let host = reachable_address(bind_address);
    info!("point your web browser to http://{host}:{port}");
}

/// The address a remote client can reach us on. A wildcard bind is
/// substituted with the host's outbound LAN address when one can be
/// determined.
fn reachable_address(bind_address: &str) -> String {
    if bind_address != "0.0.0.0" {
        return bind_address.to_string();
    }
    lan_address().unwrap_or_else(|| "127.0.0.1".to_string())
}

/// Outbound LAN address via a connected UDP socket. No packet is sent;
/// the kernel only selects a route.
fn lan_address() -> Option<String> {
    let socket = UdpSocket::bind("0.0.0.0:0").ok()?;
    socket.connect("8.8.8.8:80").ok()?;
    Some(socket.local_addr().ok()?.ip().to_string())
}
