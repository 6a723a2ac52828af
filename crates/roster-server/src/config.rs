//! Server configuration.

use std::net::SocketAddr;

use clap::Parser;
use roster_db::DbConfig;

/// ROSTER group service.
#[derive(Debug, Parser)]
#[command(name = "roster-server", version, about)]
pub struct Config {
    /// Address to bind the HTTP listener to.
    #[arg(long, env = "ROSTER_BIND_ADDR", default_value = "0.0.0.0:5002")]
    pub bind_addr: SocketAddr,

    /// SurrealDB WebSocket URL.
    #[arg(long, env = "ROSTER_DB_URL", default_value = "127.0.0.1:8000")]
    pub db_url: String,

    /// SurrealDB namespace.
    #[arg(long, env = "ROSTER_DB_NAMESPACE", default_value = "roster")]
    pub db_namespace: String,

    /// SurrealDB database name.
    #[arg(long, env = "ROSTER_DB_DATABASE", default_value = "main")]
    pub db_database: String,

    /// SurrealDB root username.
    #[arg(long, env = "ROSTER_DB_USERNAME", default_value = "root")]
    pub db_username: String,

    /// SurrealDB root password.
    #[arg(long, env = "ROSTER_DB_PASSWORD", default_value = "root")]
    pub db_password: String,
}

impl Config {
    pub fn db_config(&self) -> DbConfig {
        DbConfig {
            url: self.db_url.clone(),
            namespace: self.db_namespace.clone(),
            database: self.db_database.clone(),
            username: self.db_username.clone(),
            password: self.db_password.clone(),
        }
    }
}
