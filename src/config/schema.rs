use crate::logging::LogFormat;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Contents of the optional YAML config file.
///
/// Example YAML:
/// ```yaml
/// bind: "0.0.0.0:8080"
/// log_format: json
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    /// Address the HTTP server listens on (default: 127.0.0.1:8080)
    #[serde(default)]
    pub bind: Option<SocketAddr>,

    /// "pretty" or "json" (default: pretty)
    #[serde(default)]
    pub log_format: Option<LogFormat>,
}
