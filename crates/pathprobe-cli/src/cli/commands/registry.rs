//! `pathprobe registry` – list known paths.

use anyhow::Result;
use pathprobe_core::registry::Registry;

pub fn run_registry(registry: &Registry) -> Result<()> {
    if registry.is_empty() {
        println!("No entries in registry.");
        return Ok(());
    }
    println!("{:<32} {:<8} {:<10} {}", "FILEPATH", "TYPE", "SIZE", "DIRECTORY");
    for e in registry.entries() {
        println!(
            "{:<32} {:<8} {:<10} {}",
            e.filepath, e.stats.file_type, e.stats.filesize, e.directory
        );
    }
    Ok(())
}
