use crate::config::{HandlerConfig, HandlerKind};
use crate::domain::model::AddressFamily;
use crate::utils::error::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "sigma-handlers")]
#[command(about = "Run the resolver and weather function handlers locally")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    #[arg(long, global = true, help = "TOML file with handler settings")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Print the full invocation as JSON")]
    pub json: bool,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Resolve a hostname to an address
    Resolve {
        host: String,

        #[arg(long, help = "Address family: any, ipv4 or ipv6")]
        family: Option<AddressFamily>,
    },
    /// Look up the current weather for a location
    Weather {
        search: String,

        #[arg(long, help = "Override the weather service endpoint")]
        endpoint: Option<String>,
    },
}

impl CliConfig {
    pub fn handler_kind(&self) -> HandlerKind {
        match self.command {
            Command::Resolve { .. } => HandlerKind::Resolver,
            Command::Weather { .. } => HandlerKind::Weather,
        }
    }

    pub fn payload(&self) -> &str {
        match &self.command {
            Command::Resolve { host, .. } => host,
            Command::Weather { search, .. } => search,
        }
    }

    /// 合併設定檔與命令列參數，命令列優先
    pub fn handler_config(&self) -> Result<HandlerConfig> {
        let mut config = match &self.config {
            Some(path) => HandlerConfig::from_file(path)?,
            None => HandlerConfig::default(),
        };

        match &self.command {
            Command::Resolve {
                family: Some(family),
                ..
            } => config.resolver.family = *family,
            Command::Weather {
                endpoint: Some(endpoint),
                ..
            } => config.weather.endpoint = endpoint.clone(),
            _ => {}
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_resolve_command() {
        let cli = CliConfig::parse_from(["sigma-handlers", "resolve", "example.com", "--family", "ipv4"]);

        assert_eq!(cli.handler_kind(), HandlerKind::Resolver);
        assert_eq!(cli.payload(), "example.com");
        assert_eq!(cli.handler_config().unwrap().resolver.family, AddressFamily::Ipv4);
    }

    #[test]
    fn test_parse_weather_command() {
        let cli = CliConfig::parse_from([
            "sigma-handlers",
            "--json",
            "weather",
            "San Francisco, CA",
            "--endpoint",
            "http://127.0.0.1:8080/find.aspx",
        ]);

        assert!(cli.json);
        assert_eq!(cli.handler_kind(), HandlerKind::Weather);
        assert_eq!(cli.payload(), "San Francisco, CA");
        assert_eq!(
            cli.handler_config().unwrap().weather.endpoint,
            "http://127.0.0.1:8080/find.aspx"
        );
    }
}
