use std::sync::{mpsc, Arc};
use std::thread;

use engine_logging::{engine_debug, engine_info};
use tokio_util::sync::CancellationToken;

use crate::fetch::NewsSource;
use crate::{EngineEvent, NewsRequest};

enum EngineCommand {
    Fetch(NewsRequest),
    Shutdown,
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

/// Runs fetches on a background tokio runtime.
///
/// Every enqueued request gets its own task; nothing is deduplicated or
/// cancelled when a newer request arrives. Completion events are delivered in
/// the order requests finish, not the order they were issued.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn spawn(
        source: Arc<dyn NewsSource>,
    ) -> Result<(Self, mpsc::Receiver<EngineEvent>), EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;

        thread::spawn(move || {
            let shutdown = CancellationToken::new();
            while let Ok(command) = cmd_rx.recv() {
                match command {
                    EngineCommand::Fetch(request) => {
                        let source = source.clone();
                        let event_tx = event_tx.clone();
                        let shutdown = shutdown.clone();
                        runtime.spawn(async move {
                            let outcome = tokio::select! {
                                _ = shutdown.cancelled() => None,
                                result = source.fetch(&request) => Some(result),
                            };
                            match outcome {
                                Some(result) => {
                                    let _ = event_tx.send(EngineEvent::FetchCompleted { request, result });
                                }
                                None => {
                                    engine_debug!("dropping fetch for page {} on shutdown", request.page);
                                }
                            }
                        });
                    }
                    EngineCommand::Shutdown => break,
                }
            }
            shutdown.cancel();
            engine_info!("engine stopped");
        });

        Ok((Self { cmd_tx }, event_rx))
    }

    pub fn enqueue(&self, request: NewsRequest) {
        let _ = self.cmd_tx.send(EngineCommand::Fetch(request));
    }

    /// Cancels outstanding fetches. Their completion events are never sent.
    pub fn shutdown(&self) {
        let _ = self.cmd_tx.send(EngineCommand::Shutdown);
    }
}
