//! Request parameter logger.
//!
//! Two small servlets read `user_id` and `user_pw` from a request and write
//! them to a shared output sink. The rest of the crate is the host they run
//! in: form decoding, an explicit route table, and a lifecycle driver that
//! calls `init` before serving and `destroy` after.
//!
//! ```no_run
//! use std::sync::Arc;
//! use paramlog::{config::Settings, container::Container, routes::RouteTable, sink::ConsoleSink};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = Settings::default();
//! let table = RouteTable::standard(&settings)?;
//! Container::new(table, Arc::new(ConsoleSink)).run(settings.socket_addr()?).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod container;
pub mod error;
pub mod logging;
pub mod models;
pub mod routes;
pub mod servlets;
pub mod sink;
pub mod utils;
