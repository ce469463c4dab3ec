//! `pathprobe check <url>` – validate and classify once.

use anyhow::Result;
use pathprobe_core::classifier::PathClassifier;
use pathprobe_core::probe::probe_input;

pub async fn run_check(classifier: &PathClassifier, url: &str) -> Result<()> {
    let outcome = probe_input(classifier, url).await?;
    println!("{}", outcome.display);
    Ok(())
}
