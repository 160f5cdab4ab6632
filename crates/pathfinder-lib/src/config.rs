use std::env;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::debug;

use crate::error::{Error, Result};

/// Environment variable naming the graph file to load.
pub const GRAPH_ENV_VAR: &str = "PATHFINDER_GRAPH";

/// Default filename inside the platform data directory.
const GRAPH_FILENAME: &str = "graph.dot";

/// Resolve the default graph location using platform-specific project directories.
pub fn default_graph_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("org", "pathfinder", "pathfinder")
        .ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().join(GRAPH_FILENAME))
}

/// Resolve which graph file to load.
///
/// The resolution order is:
/// 1. Explicit `target` argument when provided.
/// 2. `PATHFINDER_GRAPH` environment variable.
/// 3. `graph.dot` in the platform data directory.
///
/// The returned path is not checked for existence; loading reports a missing
/// file as [`Error::GraphFileNotFound`].
pub fn resolve_graph_path(target: Option<&Path>) -> Result<PathBuf> {
    resolve_with_env(target, env::var_os(GRAPH_ENV_VAR).map(PathBuf::from))
}

fn resolve_with_env(target: Option<&Path>, from_env: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(explicit) = target {
        return Ok(explicit.to_path_buf());
    }

    if let Some(env_path) = from_env.filter(|path| !path.as_os_str().is_empty()) {
        debug!(path = %env_path.display(), "using graph from {}", GRAPH_ENV_VAR);
        return Ok(env_path);
    }

    default_graph_path()
}
