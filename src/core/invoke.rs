use crate::core::{Handler, Invocation, Payload};
use crate::utils::error::{HandlerError, Result};
use std::sync::Arc;
use std::time::Instant;
use tokio::task::JoinError;
use tracing::Instrument;

/// Runs handler invocations on their own tasks so a panic inside a handler
/// comes back as an error instead of unwinding into the caller.
pub struct Invoker<H: Handler> {
    handler: Arc<H>,
}

impl<H: Handler> Clone for Invoker<H> {
    fn clone(&self) -> Self {
        Self {
            handler: Arc::clone(&self.handler),
        }
    }
}

impl<H: Handler> Invoker<H> {
    pub fn new(handler: H) -> Self {
        Self {
            handler: Arc::new(handler),
        }
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// 執行一次呼叫，只回傳結果
    pub async fn call(&self, payload: Payload) -> Result<H::Output> {
        let handler = Arc::clone(&self.handler);
        let span = tracing::info_span!("invoke", handler = handler.name());

        let task = tokio::spawn(async move { handler.handle(payload).await }.instrument(span));

        match task.await {
            Ok(result) => result,
            Err(e) => Err(join_error(e)),
        }
    }

    pub async fn invoke(&self, payload: Payload) -> Result<Invocation<H::Output>> {
        let name = self.handler.name();
        let started = Instant::now();

        tracing::info!("Invoking {} handler ({} bytes)", name, payload.as_bytes().len());

        match self.call(payload).await {
            Ok(result) => {
                let elapsed_ms = started.elapsed().as_millis() as u64;
                tracing::info!("✅ {} handler completed in {}ms", name, elapsed_ms);
                Ok(Invocation {
                    handler: name.to_string(),
                    result,
                    elapsed_ms,
                })
            }
            Err(e) => {
                tracing::error!(
                    "❌ {} handler failed after {}ms: {} (Category: {:?})",
                    name,
                    started.elapsed().as_millis(),
                    e,
                    e.category()
                );
                Err(e)
            }
        }
    }
}

fn join_error(err: JoinError) -> HandlerError {
    if err.is_panic() {
        let panic = err.into_panic();
        let message = panic
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| panic.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());
        HandlerError::Panicked { message }
    } else {
        HandlerError::Panicked {
            message: "invocation task was cancelled".to_string(),
        }
    }
}
