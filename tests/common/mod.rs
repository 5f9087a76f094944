//! Shared utilities for integration testing.

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use grid_sessionmap::config::SessionMapConfig;
use grid_sessionmap::http::HttpServer;
use grid_sessionmap::lifecycle::Shutdown;
use grid_sessionmap::sessionmap::{
    JsonCodec, RegistrationHandler, RegistryError, Session, SessionId, SessionRegistry,
};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// In-memory registry that rejects duplicate ids.
#[derive(Default)]
pub struct MemoryRegistry {
    sessions: DashMap<SessionId, Session>,
}

#[allow(dead_code)]
impl MemoryRegistry {
    pub fn get(&self, id: &str) -> Option<Session> {
        let id = SessionId::new(id).ok()?;
        self.sessions.get(&id).map(|r| r.value().clone())
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }
}

#[async_trait]
impl SessionRegistry for MemoryRegistry {
    async fn add(&self, session: &Session) -> Result<(), RegistryError> {
        match self.sessions.entry(session.id.clone()) {
            Entry::Occupied(_) => Err(RegistryError::Duplicate(session.id.clone())),
            Entry::Vacant(slot) => {
                slot.insert(session.clone());
                Ok(())
            }
        }
    }
}

/// Registry whose backend is always down.
#[allow(dead_code)]
pub struct UnavailableRegistry;

#[async_trait]
impl SessionRegistry for UnavailableRegistry {
    async fn add(&self, _session: &Session) -> Result<(), RegistryError> {
        Err(RegistryError::Unavailable("connection refused".into()))
    }
}

/// Registry that takes `delay` to store anything.
#[allow(dead_code)]
pub struct SlowRegistry {
    pub delay: Duration,
    pub completed: AtomicBool,
}

#[allow(dead_code)]
impl SlowRegistry {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            completed: AtomicBool::new(false),
        }
    }

    pub fn completed(&self) -> bool {
        self.completed.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SessionRegistry for SlowRegistry {
    async fn add(&self, _session: &Session) -> Result<(), RegistryError> {
        tokio::time::sleep(self.delay).await;
        self.completed.store(true, Ordering::SeqCst);
        Ok(())
    }
}

/// A running server bound to an ephemeral port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub handle: JoinHandle<Result<(), std::io::Error>>,
}

#[allow(dead_code)]
impl TestServer {
    pub fn url(&self) -> String {
        format!("http://{}/se/grid/session", self.addr)
    }
}

/// Start a server hosting a registration handler over `registry`.
pub async fn start_server(
    config: SessionMapConfig,
    registry: Arc<dyn SessionRegistry>,
) -> TestServer {
    let unit = RegistrationHandler::new(JsonCodec::new(), registry);
    let server = HttpServer::new(config, Arc::new(unit));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let handle = tokio::spawn(async move { server.run(listener, server_shutdown).await });

    TestServer {
        addr,
        shutdown,
        handle,
    }
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
