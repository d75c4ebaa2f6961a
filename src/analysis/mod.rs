//! Signal fusion heuristics.
//!
//! The VPN/proxy heuristic and the trust scorer. Both are pure: the heuristic
//! reads only the injected keyword table and threshold, and the scorer is a
//! total function of its arguments.

mod trust;
mod vpn;

pub use trust::{score, TrustLevel};
pub use vpn::VpnHeuristic;
