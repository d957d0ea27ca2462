use crate::domain::model::{Payload, WeatherQuery};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::net::IpAddr;

/// A single-invocation function: one payload in, one result out.
#[async_trait]
pub trait Handler: Send + Sync + 'static {
    type Output: Send + 'static;

    fn name(&self) -> &'static str;

    async fn handle(&self, payload: Payload) -> Result<Self::Output>;
}

pub trait NameResolver: Send + Sync {
    /// 回傳系統解析器給出的位址，順序保持不變
    fn lookup(&self, host: &str) -> impl std::future::Future<Output = Result<Vec<IpAddr>>> + Send;
}

#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn find(&self, query: &WeatherQuery) -> Result<serde_json::Value>;
}
