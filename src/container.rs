//! Servlet host: owns the route table, drives the lifecycle hooks and serves
//! HTTP until told to stop.

use std::future::Future;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::error::ServerError;
use crate::routes::RouteTable;
use crate::servlets::Servlet;
use crate::sink::SharedSink;

pub struct Container {
    table: RouteTable,
    servlets: Vec<Arc<dyn Servlet>>,
    sink: SharedSink,
}

impl Container {
    pub fn new(table: RouteTable, sink: SharedSink) -> Self {
        let servlets = table.servlets();
        for servlet in &servlets {
            tracing::debug!(servlet = servlet.name(), "registered servlet");
        }
        Self { table, servlets, sink }
    }

    /// Run every servlet's `init`, in registration order.
    pub fn start(&self) {
        for servlet in &self.servlets {
            servlet.init(&*self.sink);
        }
    }

    /// Run every servlet's `destroy`, in reverse registration order.
    pub fn stop(&self) {
        for servlet in self.servlets.iter().rev() {
            servlet.destroy(&*self.sink);
        }
    }

    /// Start the servlets, serve until `shutdown` resolves, then stop them.
    ///
    /// `destroy` runs only after the listener is closed and in-flight requests
    /// have finished.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<(), ServerError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.start();
        let app = self.table.clone().into_router(self.sink.clone());
        if let Ok(addr) = listener.local_addr() {
            tracing::info!(%addr, "Serving requests");
        }
        let served = axum::serve(listener, app).with_graceful_shutdown(shutdown).await;
        self.stop();
        served.map_err(ServerError::Serve)
    }

    /// Bind `addr` and serve until Ctrl-C.
    pub async fn run(self, addr: std::net::SocketAddr) -> Result<(), ServerError> {
        let listener = TcpListener::bind(addr).await.map_err(|source| ServerError::Bind {
            addr: addr.to_string(),
            source,
        })?;
        self.serve(listener, shutdown_signal()).await
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => tracing::error!(%e, "Failed to listen for shutdown signal"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::servlets::{DESTROY_LINE, INIT_LINE};
    use crate::sink::MemorySink;

    #[test]
    fn test_start_and_stop_once_per_servlet() {
        let memory = MemorySink::new();
        let table = RouteTable::standard(&Settings::default()).unwrap();
        let container = Container::new(table, Arc::new(memory.clone()));
        container.start();
        container.stop();
        // login4 has no lifecycle output and login is bound once.
        assert_eq!(memory.lines(), vec![INIT_LINE, DESTROY_LINE]);
    }
}
