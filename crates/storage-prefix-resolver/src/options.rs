use std::sync::Arc;

use crate::{
    access_level::AccessLevel,
    error::PrefixError,
    resolver::{PassThroughPrefixResolver, PrefixResolver},
};

/// Options of a single storage call.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub access_level: AccessLevel,
    /// Reads another user's protected objects.
    pub target_identity_id: Option<String>,
    /// Overrides every other resolver for this call.
    pub prefix_resolver: Option<Arc<dyn PrefixResolver>>,
}

impl RequestOptions {
    pub fn new(access_level: AccessLevel) -> Self {
        RequestOptions {
            access_level,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_target_identity_id(mut self, target_identity_id: impl Into<String>) -> Self {
        self.target_identity_id = Some(target_identity_id.into());
        self
    }

    #[must_use]
    pub fn with_prefix_resolver(mut self, prefix_resolver: Arc<dyn PrefixResolver>) -> Self {
        self.prefix_resolver = Some(prefix_resolver);
        self
    }
}

/// Storage settings shared by every call.
#[derive(Debug, Clone, Default)]
pub struct PluginConfig {
    pub prefix_resolver: Option<Arc<dyn PrefixResolver>>,
}

impl PluginConfig {
    pub fn with_prefix_resolver(prefix_resolver: Arc<dyn PrefixResolver>) -> Self {
        PluginConfig {
            prefix_resolver: Some(prefix_resolver),
        }
    }

    /// Objects are addressed by their bare keys.
    pub fn pass_through() -> Self {
        Self::with_prefix_resolver(Arc::new(PassThroughPrefixResolver))
    }
}

/// The call's resolver wins over the configured one, which wins over `default`.
pub fn select_prefix_resolver(
    call_options: Option<&RequestOptions>,
    plugin_config: Option<&PluginConfig>,
    default: Arc<dyn PrefixResolver>,
) -> Arc<dyn PrefixResolver> {
    if let Some(resolver) = call_options.and_then(|options| options.prefix_resolver.as_ref()) {
        tracing::trace!("Using the prefix resolver of the request options.");
        return Arc::clone(resolver);
    }

    if let Some(resolver) = plugin_config.and_then(|config| config.prefix_resolver.as_ref()) {
        tracing::trace!("Using the configured prefix resolver.");
        return Arc::clone(resolver);
    }

    default
}

/// Full object key of `key` for a call made with `options`.
pub fn resolve_key(resolver: &dyn PrefixResolver, options: &RequestOptions, key: &str) -> Result<String, PrefixError> {
    let prefix = resolver.resolve_prefix(options.access_level, options.target_identity_id.as_deref())?;

    tracing::debug!(access_level = %options.access_level, prefix, "Resolved object key prefix.");

    Ok(prefix + key)
}
