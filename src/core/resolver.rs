use crate::adapters::SystemResolver;
use crate::config::ResolverConfig;
use crate::core::{AddressFamily, Handler, NameResolver, Payload};
use crate::utils::error::{HandlerError, Result};
use async_trait::async_trait;

/// Resolves a hostname payload to the first address the resolver returns.
pub struct ResolverHandler<R: NameResolver> {
    resolver: R,
    family: AddressFamily,
}

impl<R: NameResolver> ResolverHandler<R> {
    pub fn new(resolver: R) -> Self {
        Self {
            resolver,
            family: AddressFamily::Any,
        }
    }

    pub fn with_family(mut self, family: AddressFamily) -> Self {
        self.family = family;
        self
    }

    pub fn family(&self) -> AddressFamily {
        self.family
    }
}

impl ResolverHandler<SystemResolver> {
    pub fn from_config(config: &ResolverConfig) -> Self {
        Self::new(SystemResolver::new()).with_family(config.family)
    }
}

#[async_trait]
impl<R: NameResolver + 'static> Handler for ResolverHandler<R> {
    type Output = String;

    fn name(&self) -> &'static str {
        "resolver"
    }

    async fn handle(&self, payload: Payload) -> Result<String> {
        let host = payload.into_text()?;
        let addrs = self.resolver.lookup(&host).await?;

        let address = addrs
            .into_iter()
            .find(|addr| self.family.matches(addr))
            .ok_or_else(|| HandlerError::NoAddress {
                host: host.clone(),
                family: self.family.to_string(),
            })?;

        tracing::debug!("{} -> {}", host, address);
        Ok(address.to_string())
    }
}
