// Listener setup module
// Binds the serving socket through socket2 before handing it to tokio

use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::TcpListener;

/// Bind a `TcpListener` on the given address.
///
/// `SO_REUSEADDR` is enabled so a quick restart does not trip over a
/// socket in TIME_WAIT. A rejected bind is returned to the caller; at
/// startup that is fatal to the process.
pub fn bind_listener(addr: std::net::SocketAddr) -> std::io::Result<TcpListener> {
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;
    socket.set_reuse_address(true)?;

    // Non-blocking mode for async compatibility
    socket.set_nonblocking(true)?;

    socket.bind(&addr.into())?;
    socket.listen(128)?;

    let std_listener: std::net::TcpListener = socket.into();
    TcpListener::from_std(std_listener)
}
