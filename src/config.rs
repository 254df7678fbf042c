// Copyright 2025 RustFS Team
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::time::Duration;

use clap::Args;

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

/// Runtime settings. Every flag can also be set through its `DASHBOARD_*`
/// environment variable.
#[derive(Debug, Clone, Args)]
pub struct Config {
    /// Port the HTTP server listens on
    #[arg(long, env = "DASHBOARD_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Kubeconfig context to use instead of the current one
    #[arg(long, env = "DASHBOARD_KUBE_CONTEXT")]
    pub kube_context: Option<String>,

    /// Accept any certificate from the cluster API server
    #[arg(long, env = "DASHBOARD_INSECURE_SKIP_TLS_VERIFY")]
    pub insecure_skip_tls_verify: bool,

    /// Origin allowed to call the API from a browser
    #[arg(long, env = "DASHBOARD_CORS_ORIGIN", default_value = DEFAULT_CORS_ORIGIN)]
    pub cors_origin: String,

    /// Seconds between two snapshots on the metrics stream
    #[arg(
        long = "metrics-interval",
        env = "DASHBOARD_METRICS_INTERVAL",
        default_value_t = 5,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub metrics_interval_secs: u64,
}

impl Config {
    pub fn metrics_interval(&self) -> Duration {
        Duration::from_secs(self.metrics_interval_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Cli {
        #[command(flatten)]
        config: Config,
    }

    #[test]
    fn test_defaults() {
        let config = Cli::try_parse_from(["dashboard"]).unwrap().config;
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.kube_context, None);
        assert!(!config.insecure_skip_tls_verify);
        assert_eq!(config.cors_origin, DEFAULT_CORS_ORIGIN);
        assert_eq!(config.metrics_interval(), Duration::from_secs(5));
    }

    #[test]
    fn test_flags() {
        let config = Cli::try_parse_from([
            "dashboard",
            "--port",
            "8080",
            "--kube-context",
            "staging",
            "--insecure-skip-tls-verify",
            "--metrics-interval",
            "30",
        ])
        .unwrap()
        .config;
        assert_eq!(config.port, 8080);
        assert_eq!(config.kube_context.as_deref(), Some("staging"));
        assert!(config.insecure_skip_tls_verify);
        assert_eq!(config.metrics_interval(), Duration::from_secs(30));
    }

    #[test]
    fn test_zero_interval_rejected() {
        assert!(Cli::try_parse_from(["dashboard", "--metrics-interval", "0"]).is_err());
    }
}
