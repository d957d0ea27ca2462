#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
#[cfg(feature = "lambda")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "lambda")]
use sigma_handlers::utils::{logger, validation::Validate};
#[cfg(feature = "lambda")]
use sigma_handlers::{
    Handler, HandlerKind, Invocation, Invoker, LambdaConfig, Payload, ResolverHandler,
    SystemResolver, WeatherHandler, MsnWeatherClient,
};

#[cfg(feature = "lambda")]
#[derive(Deserialize)]
pub struct Request {
    pub payload: String,
}

#[cfg(feature = "lambda")]
#[derive(Serialize)]
#[serde(untagged)]
pub enum Response {
    Address(Invocation<String>),
    Weather(Invocation<serde_json::Value>),
}

#[cfg(feature = "lambda")]
enum Handlers {
    Resolver(Invoker<ResolverHandler<SystemResolver>>),
    Weather(Invoker<WeatherHandler<MsnWeatherClient>>),
}

#[cfg(feature = "lambda")]
impl Handlers {
    fn from_config(config: &LambdaConfig) -> Self {
        match config.handler {
            HandlerKind::Resolver => Handlers::Resolver(Invoker::new(ResolverHandler::from_config(
                &config.handlers.resolver,
            ))),
            HandlerKind::Weather => Handlers::Weather(Invoker::new(WeatherHandler::from_config(
                &config.handlers.weather,
            ))),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Handlers::Resolver(invoker) => invoker.handler().name(),
            Handlers::Weather(invoker) => invoker.handler().name(),
        }
    }
}

#[cfg(feature = "lambda")]
async fn function_handler(handlers: &Handlers, event: LambdaEvent<Request>) -> Result<Response, Error> {
    let payload = Payload::from(event.payload.payload);

    let response = match handlers {
        Handlers::Resolver(invoker) => Response::Address(invoker.invoke(payload).await?),
        Handlers::Weather(invoker) => Response::Weather(invoker.invoke(payload).await?),
    };

    Ok(response)
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    // 冷啟動時讀取一次配置
    let config = LambdaConfig::from_env()?;
    config.validate()?;

    let handlers = Handlers::from_config(&config);
    tracing::info!("Starting Lambda runtime for {} handler", handlers.name());

    let handlers = &handlers;
    run(service_fn(move |event: LambdaEvent<Request>| async move {
        function_handler(handlers, event).await
    }))
    .await
}
