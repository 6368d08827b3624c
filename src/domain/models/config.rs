use serde::{Deserialize, Serialize};

/// Main configuration structure for pacer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// GitHub search configuration
    #[serde(default)]
    pub github: GithubConfig,

    /// Request pacing configuration
    #[serde(default)]
    pub pacing: PacingConfig,

    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Goal persistence configuration
    #[serde(default)]
    pub goal: GoalConfig,
}

/// GitHub commit-search configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct GithubConfig {
    /// Base URL for the GitHub REST API
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// The author whose commits are counted
    #[serde(default)]
    pub username: String,

    /// Bearer token; falls back to the `GITHUB_TOKEN` environment
    /// variable when empty
    #[serde(default)]
    pub token: Option<String>,

    /// Page size for commit search requests (1-100)
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

fn default_api_base() -> String {
    "https://api.github.com".to_string()
}

const fn default_per_page() -> u32 {
    100
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            username: String::new(),
            token: None,
            per_page: default_per_page(),
        }
    }
}

/// Pacing configuration for the pagination loop
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PacingConfig {
    /// Minimum interval between successive search requests, in
    /// milliseconds (GitHub's search rate limit sits around
    /// 30 requests/minute)
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,

    /// Hard ceiling on pages fetched per aggregation
    #[serde(default = "default_max_pages")]
    pub max_pages: u32,
}

const fn default_interval_ms() -> u64 {
    1_000
}

const fn default_max_pages() -> u32 {
    50
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            max_pages: default_max_pages(),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Whether to enable CORS
    #[serde(default = "default_enable_cors")]
    pub enable_cors: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    8080
}

const fn default_enable_cors() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            enable_cors: default_enable_cors(),
        }
    }
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DatabaseConfig {
    /// Path to `SQLite` database file
    #[serde(default = "default_database_path")]
    pub path: String,

    /// Maximum number of database connections in pool
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_database_path() -> String {
    ".pacer/pacer.db".to_string()
}

const fn default_max_connections() -> u32 {
    5
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_database_path(),
            max_connections: default_max_connections(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

/// Goal persistence configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct GoalConfig {
    /// Name of the key-value slot the yearly target is stored under
    #[serde(default = "default_goal_slot")]
    pub slot: String,
}

fn default_goal_slot() -> String {
    "yearly_commit_target".to_string()
}

impl Default for GoalConfig {
    fn default() -> Self {
        Self {
            slot: default_goal_slot(),
        }
    }
}
