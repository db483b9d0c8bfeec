//! Tcp rendezvous server.
//!
//! Every accepted connection becomes a session task. Sessions meet in lobbies;
//! when a lobby's host says go, every member learns the others' addresses and
//! the lobby is torn down.

mod registry;
mod session;

pub use registry::Registry;

use crate::lobby::DEFAULT_CAPACITY;
use session::Session;
use std::future::{pending, Future};
use std::io::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::{TcpListener, ToSocketAddrs};
use tokio::{pin, select, task};

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// members per lobby, host included
    pub lobby_capacity: usize,
    /// how many lobby ids to hint on initialization
    pub lobby_sample: usize,
    /// how long a session lingers after go, so the peers can connect directly
    pub closing_grace: Duration,
    /// how often a waiting session checks its connection
    pub liveness_interval: Duration,
    /// tcp keepalive idle time of accepted connections
    pub keepalive: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            lobby_capacity: DEFAULT_CAPACITY,
            lobby_sample: 10,
            closing_grace: Duration::from_secs(10),
            liveness_interval: Duration::from_secs(5),
            keepalive: Duration::from_secs(30),
        }
    }
}

/// Tcp rendezvous server
///
/// keep traces of all sessions and lobbies, and exchange addresses on go.
pub struct Server {
    listener: TcpListener,
    registry: Arc<Registry>,
    config: Arc<ServerConfig>,
    count: u64,
}

impl Server {
    pub async fn new<A: ToSocketAddrs>(listen_addr: A) -> Result<Self> {
        Self::with_config(listen_addr, ServerConfig::default()).await
    }

    pub async fn with_config<A: ToSocketAddrs>(listen_addr: A, config: ServerConfig) -> Result<Self> {
        let listener = TcpListener::bind(listen_addr).await?;

        Ok(Self {
            listener,
            registry: Arc::new(Registry::new(config.lobby_capacity)),
            config: Arc::new(config),
            count: 0,
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        self.listener.local_addr()
    }

    pub fn registry(&self) -> Arc<Registry> {
        self.registry.clone()
    }

    fn next_id(&mut self) -> u64 {
        self.count += 1;
        self.count
    }

    pub async fn run(self) -> Result<()> {
        self.run_until(pending::<()>()).await
    }

    /// Accept connections until `shutdown` resolves, then close every session.
    pub async fn run_until<F: Future>(mut self, shutdown: F) -> Result<()> {
        log::info!("listening on {}", self.local_addr()?);
        pin!(shutdown);

        loop {
            let accepted = select! {
                _ = &mut shutdown => break,
                accepted = self.listener.accept() => accepted,
            };

            let stream = match accepted {
                Ok((stream, addr)) => {
                    log::debug!("accepted {}", addr);
                    stream
                }
                Err(e) => {
                    log::warn!("accept failed: {}", e);
                    continue;
                }
            };

            let session = Session::new(
                stream,
                self.next_id(),
                self.registry.clone(),
                self.config.clone(),
            );
            task::spawn(session.run());
        }

        log::info!("shutting down");
        self.registry.shutdown();
        Ok(())
    }
}
