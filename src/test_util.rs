use crate::capability::Capability;
use crate::diagnostics::DiagnosticSink;
use crate::error::{Error, Result};

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

/// Capability that stays pending until its gate is released.
///
/// Only the first invocation is gated, later invocations resolve immediately.
pub struct GatedCapability {
    gate: Mutex<Option<oneshot::Receiver<Result<()>>>>,
    invocations: AtomicUsize,
}

impl GatedCapability {
    pub fn new() -> (Arc<Self>, oneshot::Sender<Result<()>>) {
        let (tx, rx) = oneshot::channel();
        let capability = Arc::new(Self {
            gate: Mutex::new(Some(rx)),
            invocations: AtomicUsize::new(0),
        });
        (capability, tx)
    }

    pub fn invocations(&self) -> usize {
        self.invocations.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Capability for GatedCapability {
    async fn invoke(&self) -> Result<()> {
        self.invocations.fetch_add(1, Ordering::SeqCst);
        let gate = self.gate.lock().unwrap().take();
        match gate {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(anyhow::anyhow!("gate dropped").into())),
            None => Ok(()),
        }
    }
}

/// Sink that keeps `(context, error message)` pairs.
#[derive(Default)]
pub struct RecordingSink {
    reports: Mutex<Vec<(String, String)>>,
}

impl RecordingSink {
    pub fn reports(&self) -> Vec<(String, String)> {
        self.reports.lock().unwrap().clone()
    }
}

impl DiagnosticSink for RecordingSink {
    fn report(&self, context: &str, error: &Error) {
        self.reports
            .lock()
            .unwrap()
            .push((context.to_string(), error.to_string()));
    }
}
