//! Configuration constants.
//!
//! This module defines the defaults for the enrichment pipeline: the port the
//! server binds, the datacenter network blocks, the hosting/VPN organization
//! keyword list and the accuracy-radius threshold. All of these are loaded
//! once at startup and injected into the pipeline components; nothing here is
//! mutated at runtime.

/// Default port for the HTTP server.
pub const DEFAULT_PORT: u16 = 8082;

/// Accuracy radius (in the database's distance unit, kilometers for GeoLite2)
/// above which a geolocation fix is treated as coarse enough to suggest relay
/// infrastructure. Overridable via `--vpn-accuracy-threshold`.
pub const DEFAULT_ACCURACY_RADIUS_THRESHOLD: u16 = 500;

/// Built-in datacenter network blocks, used when no `--datacenter-blocks`
/// file is provided.
///
/// These cover the largest cloud and CDN allocations. Deployments that care
/// about a specific provider mix should ship their own JSON blocklist; this
/// list is a starting point, not an authority.
pub const DEFAULT_DATACENTER_CIDRS: &[&str] = &[
    // AWS
    "3.0.0.0/9",
    "13.32.0.0/12",
    "52.0.0.0/10",
    "54.64.0.0/11",
    // Google Cloud
    "34.64.0.0/10",
    "35.184.0.0/13",
    // Azure
    "20.33.0.0/16",
    "40.74.0.0/15",
    // Cloudflare
    "104.16.0.0/13",
    "172.64.0.0/13",
    // DigitalOcean
    "134.209.0.0/16",
    "167.99.0.0/16",
    // OVH
    "51.38.0.0/16",
    "151.80.0.0/16",
    // Hetzner
    "88.198.0.0/16",
    "95.216.0.0/16",
];

/// Organization-name keywords that mark a network as hosting/VPN
/// infrastructure. Matched as lowercase substrings against the ASN and
/// network organization names returned by the geolocation databases.
///
/// To add/remove providers, modify this array.
pub const DEFAULT_VPN_ORG_KEYWORDS: &[&str] = &[
    // Cloud and hosting providers
    "amazon",
    "aws",
    "google cloud",
    "google llc",
    "microsoft",
    "azure",
    "digitalocean",
    "digital ocean",
    "ovh",
    "hetzner",
    "linode",
    "akamai",
    "vultr",
    "choopa",
    "contabo",
    "leaseweb",
    "scaleway",
    "alibaba",
    "oracle",
    "m247",
    "datacamp",
    // VPN brands
    "nordvpn",
    "expressvpn",
    "surfshark",
    "mullvad",
    "proton",
    "private internet access",
    "windscribe",
    // Generic markers
    "hosting",
    "colocation",
    "vpn",
];
