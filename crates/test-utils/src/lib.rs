//! Shared helpers for flowstate's integration tests.

pub mod builders;
pub mod fixtures;

use std::path::{Path, PathBuf};
use std::sync::Once;
use std::time::Duration;

use flowstate::graph::GraphSnapshot;
use tracing_subscriber::EnvFilter;

/// Upper bound for any single async test step.
pub const TEST_TIMEOUT: Duration = Duration::from_secs(5);

static INIT: Once = Once::new();

/// Install a test subscriber once per test binary.
///
/// Reads `FLOWSTATE_LOG` like the CLI does (default `warn`). Output goes
/// through the test writer, so it only shows for failing tests unless run
/// with `--nocapture`.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("FLOWSTATE_LOG")
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        // Another harness may already have installed one.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .try_init();
    });
}

/// Await `f`, failing the test if it takes longer than [`TEST_TIMEOUT`].
pub async fn with_timeout<F, T>(f: F) -> T
where
    F: std::future::Future<Output = T>,
{
    match tokio::time::timeout(TEST_TIMEOUT, f).await {
        Ok(value) => value,
        Err(_) => panic!("test step timed out after {TEST_TIMEOUT:?}"),
    }
}

/// Write `snapshot` as `<dir>/<project_id>.toml`, the layout
/// `FileGraphStore` reads, and return the file path.
pub fn write_project(dir: &Path, project_id: &str, snapshot: &GraphSnapshot) -> PathBuf {
    let path = dir.join(format!("{project_id}.toml"));
    let body = toml::to_string(snapshot).expect("serialize snapshot");
    std::fs::write(&path, body).expect("write project file");
    path
}
