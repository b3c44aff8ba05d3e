//! Suggestion lookup worker
//!
//! Runs lookups on a background thread so the UI never blocks on the
//! network. Every lookup gets its own task: a superseded request is left to
//! finish and its response is filtered out by the controller, which means
//! responses may come back in any order.

use std::sync::mpsc::Sender;
use std::thread::JoinHandle;

use tokio::sync::mpsc::UnboundedReceiver;

use super::client::SuggestClient;
use super::suggest_state::{SuggestRequest, SuggestResponse};

/// Spawn the lookup worker thread
///
/// The thread exits once every request sender has been dropped.
pub fn spawn_worker(
    client: SuggestClient,
    request_rx: UnboundedReceiver<SuggestRequest>,
    response_tx: Sender<SuggestResponse>,
) -> std::io::Result<JoinHandle<()>> {
    std::thread::Builder::new()
        .name("suggest-worker".to_string())
        .spawn(move || {
            let runtime = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime,
                Err(e) => {
                    log::error!("Failed to start suggestion runtime: {}", e);
                    return;
                }
            };
            runtime.block_on(worker_loop(client, request_rx, response_tx));
        })
}

/// Main worker loop - processes requests until the channel is closed
async fn worker_loop(
    client: SuggestClient,
    mut request_rx: UnboundedReceiver<SuggestRequest>,
    response_tx: Sender<SuggestResponse>,
) {
    while let Some(request) = request_rx.recv().await {
        match request {
            SuggestRequest::Lookup { query, request_id } => {
                log::debug!("Lookup {} for {:?}", request_id, query);
                let client = client.clone();
                let response_tx = response_tx.clone();
                tokio::spawn(async move {
                    let result = client.suggest(&query).await;
                    if response_tx
                        .send(SuggestResponse {
                            request_id,
                            query,
                            result,
                        })
                        .is_err()
                    {
                        log::debug!("Dropping response {}: controller detached", request_id);
                    }
                });
            }
        }
    }

    log::debug!("Suggestion worker shutting down");
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
