//! Datacenter IP classification.
//!
//! Membership test over a static, ordered set of network blocks. The block
//! list is built once at process start — from the built-in defaults or from a
//! JSON file — and never mutated afterwards.

use ipnet::IpNet;
use std::net::IpAddr;
use std::path::Path;

use crate::config::DEFAULT_DATACENTER_CIDRS;
use crate::error_handling::InitializationError;

/// Ordered set of datacenter network blocks.
#[derive(Debug, Clone)]
pub struct DatacenterBlocklist {
    blocks: Vec<IpNet>,
}

impl DatacenterBlocklist {
    /// Builds a blocklist from CIDR strings, skipping unparseable entries
    /// with a warning. Order is preserved.
    pub fn from_cidrs<I, S>(cidrs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut blocks = Vec::new();
        for cidr in cidrs {
            match cidr.as_ref().parse::<IpNet>() {
                Ok(net) => blocks.push(net),
                Err(e) => {
                    log::warn!("Skipping invalid datacenter CIDR {:?}: {}", cidr.as_ref(), e);
                }
            }
        }
        Self { blocks }
    }

    /// Builds the blocklist from the built-in default CIDRs.
    pub fn builtin() -> Self {
        Self::from_cidrs(DEFAULT_DATACENTER_CIDRS.iter().copied())
    }

    /// Loads a blocklist from a JSON file containing an array of CIDR
    /// strings (e.g. `["3.0.0.0/9", "34.64.0.0/10"]`).
    ///
    /// An unreadable or malformed file is an error — a configured blocklist
    /// that cannot be loaded is fatal at startup. Individual bad entries
    /// inside a well-formed file are skipped like in [`Self::from_cidrs`].
    pub async fn from_file(path: &Path) -> Result<Self, InitializationError> {
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            InitializationError::BlocklistError(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            ))
        })?;
        let cidrs: Vec<String> = serde_json::from_str(&content).map_err(|e| {
            InitializationError::BlocklistError(format!(
                "Failed to parse {}: {}",
                path.display(),
                e
            ))
        })?;
        log::info!(
            "Loaded {} datacenter CIDR entries from {}",
            cidrs.len(),
            path.display()
        );
        Ok(Self::from_cidrs(cidrs))
    }

    /// Returns true iff the IP falls inside any configured block.
    ///
    /// An unparseable IP is a non-member, never an error.
    pub fn is_datacenter(&self, ip: &str) -> bool {
        let addr: IpAddr = match ip.parse() {
            Ok(addr) => addr,
            Err(_) => return false,
        };
        self.blocks.iter().any(|net| net.contains(&addr))
    }

    /// Number of configured blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether the blocklist is empty.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl Default for DatacenterBlocklist {
    fn default() -> Self {
        Self::builtin()
    }
}
