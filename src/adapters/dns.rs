use crate::domain::ports::NameResolver;
use crate::utils::error::{HandlerError, Result};
use std::net::IpAddr;

/// Resolver backed by the operating system (`getaddrinfo` on tokio's blocking pool).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;

impl SystemResolver {
    pub fn new() -> Self {
        Self
    }
}

impl NameResolver for SystemResolver {
    async fn lookup(&self, host: &str) -> Result<Vec<IpAddr>> {
        tracing::debug!("Resolving host: {}", host);

        // port 不影響解析結果
        let addrs = tokio::net::lookup_host((host, 0))
            .await
            .map_err(|source| HandlerError::LookupError {
                host: host.to_string(),
                source,
            })?;

        let ips: Vec<IpAddr> = addrs.map(|addr| addr.ip()).collect();
        tracing::debug!("Resolved {} to {} address(es)", host, ips.len());
        Ok(ips)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_lookup_ip_literal() {
        let resolver = SystemResolver::new();
        let ips = resolver.lookup("127.0.0.1").await.unwrap();
        assert_eq!(ips, vec!["127.0.0.1".parse::<IpAddr>().unwrap()]);
    }

    #[tokio::test]
    async fn test_lookup_invalid_tld_fails() {
        let resolver = SystemResolver::new();
        let result = resolver.lookup("this.host.does.not.exist.invalid").await;

        match result {
            Err(HandlerError::LookupError { host, .. }) => {
                assert_eq!(host, "this.host.does.not.exist.invalid");
            }
            other => panic!("expected lookup error, got {:?}", other),
        }
    }
}
