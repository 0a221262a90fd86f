//! Single-shot UDP exchange with a RADIUS server

use crate::error::{ClientError, ClientResult};
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::{lookup_host, UdpSocket};
use tokio::time;
use tracing::{debug, warn};

/// Largest datagram we accept; anything the 16-bit length field can describe fits
const RECV_BUFFER_SIZE: usize = u16::MAX as usize;

/// Send `packet` to `host:port` and return the first datagram that comes back.
///
/// One socket is opened per call and released on every exit path, before the
/// caller gets to look at the bytes. Resolution, send and receive all share the
/// single `timeout` deadline.
pub async fn send(host: &str, port: u16, packet: &[u8], timeout: Duration) -> ClientResult<Vec<u8>> {
    match time::timeout(timeout, exchange(host, port, packet)).await {
        Ok(Ok(datagram)) => Ok(datagram),
        Ok(Err(e)) => {
            warn!(host = %host, port = port, error = %e, "RADIUS transport error");
            Err(e)
        }
        Err(_) => {
            debug!(host = %host, port = port, timeout = ?timeout, "RADIUS request timed out");
            Err(ClientError::Timeout(timeout))
        }
    }
}

async fn exchange(host: &str, port: u16, packet: &[u8]) -> ClientResult<Vec<u8>> {
    let peer = lookup_host((host, port))
        .await?
        .next()
        .ok_or_else(|| ClientError::NoAddress(host.to_string()))?;

    let bind_addr: SocketAddr = if peer.is_ipv4() {
        (Ipv4Addr::UNSPECIFIED, 0).into()
    } else {
        (Ipv6Addr::UNSPECIFIED, 0).into()
    };

    let socket = UdpSocket::bind(bind_addr).await?;
    socket.send_to(packet, peer).await?;

    debug!(
        peer = %peer,
        local = ?socket.local_addr().ok(),
        bytes = packet.len(),
        "Request sent"
    );

    // Any source may answer; the identifier check in the decoder is the only correlation
    let mut buffer = vec![0u8; RECV_BUFFER_SIZE];
    let (len, from) = socket.recv_from(&mut buffer).await?;
    drop(socket);

    buffer.truncate(len);
    debug!(peer = %peer, from = %from, bytes = len, "Response received");
    Ok(buffer)
}
