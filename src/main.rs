use clap::Parser;
use serde::Serialize;
use sigma_handlers::utils::{error::ErrorCategory, logger, validation::Validate};
use sigma_handlers::{
    CliConfig, Handler, HandlerError, HandlerKind, Invoker, Payload, ResolverHandler,
    WeatherHandler,
};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting sigma-handlers CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(&config).await {
        tracing::error!("❌ {} (Category: {:?})", e, e.category());
        eprintln!("❌ {}", e.user_friendly_message());

        let exit_code = match e.category() {
            ErrorCategory::Configuration => 2,
            ErrorCategory::Runtime => 3,
            _ => 1,
        };
        std::process::exit(exit_code);
    }
}

async fn run(config: &CliConfig) -> Result<(), HandlerError> {
    let handlers = config.handler_config()?;
    handlers.validate()?;

    let payload = Payload::from(config.payload());

    match config.handler_kind() {
        HandlerKind::Resolver => {
            let handler = ResolverHandler::from_config(&handlers.resolver);
            print_outcome(Invoker::new(handler), payload, config.json).await
        }
        HandlerKind::Weather => {
            let handler = WeatherHandler::from_config(&handlers.weather);
            print_outcome(Invoker::new(handler), payload, config.json).await
        }
    }
}

async fn print_outcome<H>(invoker: Invoker<H>, payload: Payload, json: bool) -> Result<(), HandlerError>
where
    H: Handler,
    H::Output: Serialize,
{
    let invocation = invoker.invoke(payload).await?;

    let rendered = if json {
        serde_json::to_string_pretty(&invocation)?
    } else {
        match serde_json::to_value(&invocation.result)? {
            serde_json::Value::String(s) => s,
            other => serde_json::to_string_pretty(&other)?,
        }
    };

    println!("{}", rendered);
    Ok(())
}
