//! Configuration and data-directory resolution.
//!
//! Resolution order:
//!   1. `--data-dir PATH`  (explicit override)
//!   2. `./asc-connect/`   (project-local, if it exists)
//!   3. `~/.asc-connect/`  (global default)

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::auth::ClaimProfile;

/// Top-level config from `config.toml`.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub api: ApiConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    pub key_id: String,
    pub private_key: String,
    /// Issuer ID for team keys. Absent means an individual API key.
    pub issuer_id: Option<String>,
}

impl ApiConfig {
    /// The claim profile this credential signs under. Config is the only
    /// place the individual/team choice is made.
    pub fn profile(&self) -> ClaimProfile {
        match &self.issuer_id {
            Some(issuer_id) => ClaimProfile::Team {
                issuer_id: issuer_id.clone(),
            },
            None => ClaimProfile::Individual,
        }
    }
}

impl Config {
    /// Load and validate config from a data directory.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let path = data_dir.join("config.toml");
        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("could not read {}", path.display()))?;
        let mut cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("invalid TOML in {}", path.display()))?;

        cfg.api.private_key = resolve_key(&cfg.api.private_key, data_dir)?;

        Ok(cfg)
    }
}

/// Resolve the data directory.
///
/// Priority: explicit `--data-dir` > `./asc-connect/` > `~/.asc-connect/`
pub fn resolve_data_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(p) = explicit {
        return Ok(p.to_path_buf());
    }

    let local = PathBuf::from("asc-connect");
    if local.join("config.toml").exists() {
        return Ok(std::fs::canonicalize(&local).unwrap_or(local));
    }

    let home = dirs::home_dir().context("could not determine home directory")?;
    Ok(home.join(".asc-connect"))
}

/// Return the path to `init` into: `./asc-connect/` or `~/.asc-connect/`.
pub fn init_data_dir(global: bool) -> Result<PathBuf> {
    if global {
        let home = dirs::home_dir().context("could not determine home directory")?;
        Ok(home.join(".asc-connect"))
    } else {
        Ok(PathBuf::from("asc-connect"))
    }
}

/// Resolve a private key value — could be a file path or inline PEM.
fn resolve_key(value: &str, relative_to: &Path) -> Result<String> {
    if value.starts_with("-----BEGIN") {
        return Ok(value.to_string());
    }

    // Expand ~ and resolve relative paths
    let expanded = shellexpand::tilde(value);
    let path = Path::new(expanded.as_ref());
    let path = if path.is_relative() {
        relative_to.join(path)
    } else {
        path.to_path_buf()
    };

    if path.exists() {
        std::fs::read_to_string(&path)
            .with_context(|| format!("could not read key file: {}", path.display()))
    } else {
        anyhow::bail!(
            "private_key '{}' is not a PEM string and file not found at {}",
            value,
            path.display()
        )
    }
}

/// Template config for `init`.
pub const CONFIG_TEMPLATE: &str = r#"# asc-connect configuration
#
# API credentials from App Store Connect:
#   https://appstoreconnect.apple.com/access/integrations/api

[api]
key_id      = "YOUR_KEY_ID"
private_key = "path/to/AuthKey_XXXXXXXX.p8"

# For a team key, set the issuer ID shown on the Integrations page.
# Leave it out to authenticate with an individual API key instead.
# issuer_id = "aaaaaaaa-bbbb-cccc-dddd-eeeeeeeeeeee"
"#;
