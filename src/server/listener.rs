use std::net::SocketAddr;
use std::rc::Rc;

use tokio::net::TcpListener;
use tracing::{error, info};

use crate::config::Config;
use crate::http::connection::Connection;

/// Accepting side of the server.
///
/// Binding is split from serving so startup can fail fast on a bad
/// endpoint and callers learn the bound address before the loop starts.
pub struct Server {
    listener: TcpListener,
}

impl Server {
    /// Binds the configured endpoint. Failure here is fatal at startup.
    pub async fn bind(cfg: &Config) -> anyhow::Result<Self> {
        let listener = TcpListener::bind(cfg.endpoint()).await?;
        info!("Listening on {}", listener.local_addr()?);

        Ok(Self { listener })
    }

    /// Address the listener actually bound (useful when port 0 was asked).
    pub fn local_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Accepts connections forever.
    ///
    /// A failed accept is logged and the loop keeps going; nothing a
    /// single connection does can bring the listener down. Each accepted
    /// socket gets its own handler task on the current thread, and the
    /// loop never waits for a handler to finish.
    pub async fn serve(self, root: Rc<str>) -> anyhow::Result<()> {
        loop {
            let (socket, peer) = match self.listener.accept().await {
                Ok(accepted) => accepted,
                Err(e) => {
                    error!("Accept failed: {}", e);
                    continue;
                }
            };
            info!("Accepted connection from {}", peer);

            let root = Rc::clone(&root);
            tokio::task::spawn_local(async move {
                let mut conn = Connection::new(socket, root);
                if let Err(e) = conn.run().await {
                    error!("Connection error from {}: {}", peer, e);
                }
            });
        }
    }
}
