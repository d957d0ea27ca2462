use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable that overrides the log filter for the handlers only.
pub const LOG_ENV: &str = "SIGMA_LOG";

pub const CLI_FILTER: &str = "sigma_handlers=warn";
pub const CLI_VERBOSE_FILTER: &str = "sigma_handlers=debug,info";
pub const LAMBDA_FILTER: &str = "sigma_handlers=info";

/// `SIGMA_LOG` 優先，其次 `RUST_LOG`，最後使用預設值
pub fn filter_directives<F>(lookup: F, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(LOG_ENV)
        .or_else(|| lookup("RUST_LOG"))
        .filter(|directives| !directives.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

pub fn handler_filter(default: &str) -> EnvFilter {
    let directives = filter_directives(|key| std::env::var(key).ok(), default);
    EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new(default))
}

pub fn init_cli_logger(verbose: bool) {
    let filter = handler_filter(if verbose { CLI_VERBOSE_FILTER } else { CLI_FILTER });

    // stdout 只放呼叫結果，日誌一律寫到 stderr
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

pub fn init_lambda_logger() {
    // Lambda 會自行加上時間戳記
    tracing_subscriber::registry()
        .with(handler_filter(LAMBDA_FILTER))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .without_time()
                .json()
                .with_current_span(true),
        )
        .init();
}
