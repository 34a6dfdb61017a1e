//! Command-line and environment configuration
//!
//! Every flag has an environment fallback; a `.env` file in the working
//! directory is loaded before parsing (see `main.rs`).
//!
//! - `DBUSER` / `DBPASS`: store credentials
//! - `DBHOST` / `DBPORT` / `DBNAME`: store address (default 127.0.0.1:3306/recordings)
//! - `ALBUM_SERVER_BIND`: listen address (default 127.0.0.1:8080)

use std::fmt;
use std::net::SocketAddr;
use std::time::Duration;

use clap::Parser;
use sqlx::mysql::MySqlConnectOptions;

use crate::db::DEFAULT_MAX_CONNECTIONS;
use crate::http::ServerConfig;

/// Store password; `Debug` never prints it.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for Password {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}

#[derive(Parser, Debug, Clone)]
#[command(
    name = "album-server",
    author,
    version,
    about = "HTTP service for listing, fetching and creating albums stored in MySQL"
)]
pub struct Args {
    /// Address to bind to
    #[arg(long, short = 'b', env = "ALBUM_SERVER_BIND", default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// Database user
    #[arg(long, env = "DBUSER")]
    pub db_user: String,

    /// Database password
    #[arg(long, env = "DBPASS", default_value = "", hide_env_values = true)]
    pub db_pass: Password,

    /// Database host
    #[arg(long, env = "DBHOST", default_value = "127.0.0.1")]
    pub db_host: String,

    /// Database port
    #[arg(long, env = "DBPORT", default_value_t = 3306)]
    pub db_port: u16,

    /// Database name
    #[arg(long, env = "DBNAME", default_value = "recordings")]
    pub db_name: String,

    /// Maximum pooled connections
    #[arg(long, env = "DB_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Request timeout in seconds
    #[arg(long, env = "ALBUM_SERVER_TIMEOUT", default_value_t = 30)]
    pub timeout: u64,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Enable debug logging
    #[arg(long, short = 'd')]
    pub debug: bool,
}

impl Args {
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig {
            user: self.db_user.clone(),
            password: self.db_pass.clone(),
            host: self.db_host.clone(),
            port: self.db_port,
            database: self.db_name.clone(),
            max_connections: self.max_connections,
        }
    }

    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            bind_addr: self.bind,
            cors_permissive: self.cors_permissive,
            request_timeout: Duration::from_secs(self.timeout),
        }
    }
}

/// Where and as whom to connect to MySQL
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub user: String,
    pub password: Password,
    pub host: String,
    pub port: u16,
    pub database: String,
    pub max_connections: u32,
}

impl StoreConfig {
    pub fn connect_options(&self) -> MySqlConnectOptions {
        let options = MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .database(&self.database);

        if self.password.is_empty() {
            options
        } else {
            options.password(self.password.expose())
        }
    }

    /// `host:port/database`, safe to log.
    pub fn address(&self) -> String {
        format!("{}:{}/{}", self.host, self.port, self.database)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(extra: &[&str]) -> Args {
        let mut argv = vec!["album-server", "--db-user", "gopher", "--db-pass", "hunter2"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).expect("args should parse")
    }

    #[test]
    fn defaults_point_at_local_recordings() {
        let args = parse(&[]);
        let store = args.store_config();
        assert_eq!(store.address(), "127.0.0.1:3306/recordings");
        assert_eq!(store.user, "gopher");
        assert_eq!(store.max_connections, DEFAULT_MAX_CONNECTIONS);

        let server = args.server_config();
        assert_eq!(server.bind_addr, "127.0.0.1:8080".parse().unwrap());
        assert_eq!(server.request_timeout, Duration::from_secs(30));
        assert!(!server.cors_permissive);
    }

    #[test]
    fn flags_override_defaults() {
        let args = parse(&[
            "--bind",
            "0.0.0.0:9000",
            "--db-host",
            "db.internal",
            "--db-port",
            "3307",
            "--db-name",
            "catalog",
            "--timeout",
            "5",
        ]);
        assert_eq!(args.store_config().address(), "db.internal:3307/catalog");
        assert_eq!(args.server_config().bind_addr.port(), 9000);
        assert_eq!(args.server_config().request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn rejects_bad_bind_address() {
        let result = Args::try_parse_from([
            "album-server",
            "--db-user",
            "gopher",
            "--bind",
            "localhost",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn debug_output_masks_password() {
        let rendered = format!("{:?}", parse(&[]).store_config());
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("***"));
    }

    #[test]
    fn args_debug_masks_password() {
        let args = parse(&[]);
        assert_eq!(args.db_pass.expose(), "hunter2");

        let rendered = format!("{:?}", args);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("db_pass: ***"));
    }
}
