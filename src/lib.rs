pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{MsnWeatherClient, SystemResolver};
pub use config::{HandlerConfig, HandlerKind, LambdaConfig};
pub use core::{invoke::Invoker, resolver::ResolverHandler, weather::WeatherHandler};
pub use core::{Handler, Invocation, Payload};
pub use utils::error::{HandlerError, Result};
