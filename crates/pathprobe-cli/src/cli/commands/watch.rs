//! `pathprobe watch` – debounced keystroke loop over stdin.
//!
//! Each line is the full value of the input field after one keystroke.
//! Results print only once typing pauses for the debounce window.

use anyhow::{Context, Result};
use pathprobe_core::classifier::PathClassifier;
use pathprobe_core::probe::ProbeSession;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

pub async fn run_watch(classifier: PathClassifier, delay: Duration) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let session = ProbeSession::new(classifier, delay, tx);

    let display = tokio::spawn(async move {
        while let Some(outcome) = rx.recv().await {
            println!("Entered: {}", outcome.entered);
            println!("{}", outcome.display);
        }
    });

    tracing::info!(?delay, "watching stdin");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("read stdin")? {
        session.keystroke(line);
    }

    // End of input: let the last keystroke through, then close the display.
    session.settle().await;
    drop(session);
    display.await.context("display task")?;
    Ok(())
}
