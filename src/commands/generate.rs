//! Generate static files

use anyhow::Result;
use notify::Watcher;
use std::sync::mpsc::{channel, RecvTimeoutError};
use std::time::{Duration, Instant};

use crate::content::loader::ContentLoader;
use crate::generator::Generator;
use crate::Folio;

/// Load content and generate the static site
pub fn run(folio: &Folio) -> Result<()> {
    let start = Instant::now();

    let records = ContentLoader::new(folio).load_records()?;
    tracing::info!("Loaded {} records", records.len());

    Generator::new(folio)?.generate(&records)?;

    let duration = start.elapsed();
    tracing::info!("Generated in {:.2}s", duration.as_secs_f64());

    Ok(())
}

/// Watch for file changes and regenerate. Blocks until the watcher channel
/// closes.
pub fn watch(folio: &Folio) -> Result<()> {
    let (tx, rx) = channel();

    let mut watcher = notify::recommended_watcher(move |res: notify::Result<notify::Event>| {
        if let Ok(event) = res {
            let _ = tx.send(event);
        }
    })?;

    if folio.content_dir.exists() {
        watcher.watch(&folio.content_dir, notify::RecursiveMode::Recursive)?;
    }
    if folio.static_dir.exists() {
        watcher.watch(&folio.static_dir, notify::RecursiveMode::Recursive)?;
    }
    let config_path = folio.base_dir.join("_config.yml");
    if config_path.exists() {
        watcher.watch(&config_path, notify::RecursiveMode::NonRecursive)?;
    }

    tracing::info!("Watching for changes. Press Ctrl+C to stop.");

    let mut last_rebuild = Instant::now();

    loop {
        match rx.recv_timeout(Duration::from_millis(100)) {
            Ok(_event) => {
                // Editors emit bursts of events per save
                if last_rebuild.elapsed() > Duration::from_millis(500) {
                    tracing::info!("File changed, regenerating...");
                    if let Err(e) = rebuild(folio) {
                        tracing::error!("Generation failed: {:#}", e);
                    }
                    last_rebuild = Instant::now();
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    Ok(())
}

/// Regenerate with a freshly loaded configuration
pub fn rebuild(folio: &Folio) -> Result<()> {
    let folio = Folio::new(&folio.base_dir)?;
    run(&folio)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_run_generates_from_content() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("content")).unwrap();
        fs::write(
            dir.path().join("content/hello.md"),
            "---\npath: /blog/hello\ntitle: Hello\ndescription: First\ndate: 2020-03-01\n---\n\nHi there.\n",
        )
        .unwrap();
        fs::write(dir.path().join("_config.yml"), "title: Test Site\npreview_limit: 1\n").unwrap();

        let folio = Folio::new(dir.path()).unwrap();
        run(&folio).unwrap();

        let home = fs::read_to_string(dir.path().join("public/index.html")).unwrap();
        assert!(home.contains("<title>Test Site</title>"));
        assert!(home.contains("Hello"));
        assert!(dir.path().join("public/blog/hello/index.html").exists());
    }

    #[test]
    fn test_rebuild_rereads_config() {
        let dir = TempDir::new().unwrap();
        let folio = Folio::new(dir.path()).unwrap();
        fs::write(dir.path().join("_config.yml"), "preview_limit: -1\n").unwrap();
        assert!(rebuild(&folio).is_err());
    }
}
