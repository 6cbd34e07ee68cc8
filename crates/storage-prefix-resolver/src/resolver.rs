use std::fmt;

use crate::{
    access_level::AccessLevel,
    error::{AuthError, PrefixError},
};

/// Maps the access level of a request to the prefix prepended to its object key.
pub trait PrefixResolver: fmt::Debug + Send + Sync {
    fn resolve_prefix(
        &self,
        access_level: AccessLevel,
        target_identity_id: Option<&str>,
    ) -> Result<String, PrefixError>;
}

/// Identity of the signed-in caller, as issued by the auth service.
pub trait IdentityProvider: Send + Sync {
    fn identity_id(&self) -> Result<String, AuthError>;
}

/// Keys are used as given, without any prefix.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThroughPrefixResolver;

impl PrefixResolver for PassThroughPrefixResolver {
    fn resolve_prefix(&self, _: AccessLevel, _: Option<&str>) -> Result<String, PrefixError> {
        Ok(String::new())
    }
}

/// `public/`, `protected/<identity>/` or `private/<identity>/`. The identity is the target
/// identity when one is given, the caller's own otherwise.
pub struct AccessLevelAwarePrefixResolver<P> {
    identity_provider: P,
}

impl<P: IdentityProvider> AccessLevelAwarePrefixResolver<P> {
    pub fn new(identity_provider: P) -> Self {
        AccessLevelAwarePrefixResolver { identity_provider }
    }
}

impl<P> fmt::Debug for AccessLevelAwarePrefixResolver<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessLevelAwarePrefixResolver").finish_non_exhaustive()
    }
}

impl<P: IdentityProvider> PrefixResolver for AccessLevelAwarePrefixResolver<P> {
    fn resolve_prefix(
        &self,
        access_level: AccessLevel,
        target_identity_id: Option<&str>,
    ) -> Result<String, PrefixError> {
        if !access_level.is_identity_scoped() {
            return Ok(access_level_prefix(access_level, None));
        }

        let identity_id = match target_identity_id {
            Some(target_identity_id) => target_identity_id.to_string(),
            None => self.identity_provider.identity_id().inspect_err(|err| {
                tracing::debug!(%access_level, "Identity lookup failed: {err}");
            })?,
        };

        Ok(access_level_prefix(access_level, Some(&identity_id)))
    }
}

/// `<level>/` or `<level>/<identity>/`.
pub fn access_level_prefix(access_level: AccessLevel, identity_id: Option<&str>) -> String {
    match identity_id {
        Some(identity_id) => format!("{}/{identity_id}/", access_level.service_prefix()),
        None => format!("{}/", access_level.service_prefix()),
    }
}
