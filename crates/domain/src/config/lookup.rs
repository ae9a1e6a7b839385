use serde::{Deserialize, Serialize};

/// Lookup defaults, applied before command-line flags.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LookupConfig {
    /// Nameservers used when none are given on the command line.
    #[serde(default)]
    pub nameservers: Vec<String>,

    /// 0 leaves ndots unset so the system value can apply.
    #[serde(default)]
    pub ndots: u32,

    #[serde(default)]
    pub search: bool,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_resolv_conf_path")]
    pub resolv_conf_path: String,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            nameservers: Vec::new(),
            ndots: 0,
            search: false,
            timeout_secs: default_timeout_secs(),
            resolv_conf_path: default_resolv_conf_path(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    5
}

fn default_resolv_conf_path() -> String {
    "/etc/resolv.conf".to_string()
}
