//! Worker isolation boundary
//!
//! Runs the engine as a self-contained unit of work on a dedicated thread:
//! one request message in, one reply message out. Infrastructure failures
//! (an analyzer panicking) come back on the same channel as a distinct
//! `Failed` variant, never as a scored result.

use crate::config::ScoringConfig;
use crate::engine::run_scoring_job;
use crate::models::{AgentReadinessResult, ValidationIssue};
use crate::openapi::OpenApiDocument;
use anyhow::{anyhow, Result};
use crossbeam_channel::{unbounded, Receiver, Sender};
use std::thread::JoinHandle;
use tracing::warn;

/// One scoring job: a snapshot of the parsed document and the issue list
pub struct ScoreRequest {
    pub document: OpenApiDocument,
    pub issues: Vec<ValidationIssue>,
}

/// Reply to one request
pub enum ScoreReply {
    /// Normal, scored outcome (including the parse-failure state)
    Result(Box<AgentReadinessResult>),
    /// Infrastructure failure inside the engine
    Failed(String),
}

/// A scoring worker owning one background thread.
///
/// Requests are answered in submission order. Dropping the worker closes the
/// request channel and joins the thread.
pub struct ScoringWorker {
    request_tx: Option<Sender<ScoreRequest>>,
    reply_rx: Receiver<ScoreReply>,
    handle: Option<JoinHandle<()>>,
}

impl ScoringWorker {
    /// Spawn a worker holding its own copy of the scoring configuration
    pub fn spawn(config: ScoringConfig) -> Self {
        let (request_tx, request_rx) = unbounded::<ScoreRequest>();
        let (reply_tx, reply_rx) = unbounded::<ScoreReply>();

        let handle = std::thread::spawn(move || {
            for request in request_rx.iter() {
                let reply = match run_scoring_job(&request.document, &request.issues, &config) {
                    Ok(result) => ScoreReply::Result(Box::new(result)),
                    Err(e) => {
                        warn!("scoring job failed: {e}");
                        ScoreReply::Failed(e.to_string())
                    }
                };
                if reply_tx.send(reply).is_err() {
                    // Caller went away; nothing left to answer.
                    break;
                }
            }
        });

        Self {
            request_tx: Some(request_tx),
            reply_rx,
            handle: Some(handle),
        }
    }

    /// Submit a job without waiting for the reply
    pub fn submit(&self, request: ScoreRequest) -> Result<()> {
        self.request_tx
            .as_ref()
            .ok_or_else(|| anyhow!("worker already shut down"))?
            .send(request)
            .map_err(|_| anyhow!("scoring worker thread is gone"))
    }

    /// Receive the next reply, in submission order
    pub fn recv(&self) -> Result<ScoreReply> {
        self.reply_rx
            .recv()
            .map_err(|_| anyhow!("scoring worker thread is gone"))
    }

    /// Submit one job and wait for its reply
    pub fn score(&self, document: OpenApiDocument, issues: Vec<ValidationIssue>) -> Result<ScoreReply> {
        self.submit(ScoreRequest { document, issues })?;
        self.recv()
    }
}

impl Drop for ScoringWorker {
    fn drop(&mut self) {
        // Closing the request channel ends the worker loop.
        self.request_tx.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
