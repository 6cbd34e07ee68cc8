//! Object key prefixes of storage requests.
//!
//! Every request resolves its prefix with exactly one [`PrefixResolver`], picked by
//! [`select_prefix_resolver`]: the one given in the request options, then the one from the plugin
//! configuration, then the default access level aware resolver.

#![cfg_attr(test, allow(unused_crate_dependencies))]

mod access_level;
mod error;
mod options;
mod resolver;

pub use access_level::AccessLevel;
pub use error::{AuthError, PrefixError};
pub use options::{resolve_key, select_prefix_resolver, PluginConfig, RequestOptions};
pub use resolver::{
    access_level_prefix, AccessLevelAwarePrefixResolver, IdentityProvider, PassThroughPrefixResolver, PrefixResolver,
};
