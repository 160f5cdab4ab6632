use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the pathfinder library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// A supplied identity is not present in the graph.
    #[error("unknown node '{node}'{}", format_suggestions(.suggestions))]
    NodeNotFound {
        node: String,
        suggestions: Vec<String>,
    },

    /// The queried directed edge does not exist.
    #[error("no edge from '{from}' to '{to}'")]
    EdgeNotFound { from: String, to: String },

    /// The frontier was exhausted without reaching the goal.
    #[error("no path found between '{start}' and '{goal}'")]
    PathNotFound { start: String, goal: String },

    /// A supplied identity is unusable (e.g. blank).
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Graph file could not be located at the resolved path.
    #[error("graph file not found at {path}")]
    GraphFileNotFound { path: PathBuf },

    /// An edge statement in a graph file could not be interpreted.
    #[error("malformed edge on line {line}: {message}")]
    MalformedEdge { line: usize, message: String },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for the default graph location")]
    ProjectDirsUnavailable,

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn node_not_found(node: impl ToString) -> Self {
        Error::NodeNotFound {
            node: node.to_string(),
            suggestions: Vec::new(),
        }
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_not_found_lists_suggestions() {
        let err = Error::NodeNotFound {
            node: "Bascom".to_string(),
            suggestions: vec!["Bascom Hall".to_string(), "Bascom Hill".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "unknown node 'Bascom'. Did you mean one of: 'Bascom Hall', 'Bascom Hill'?"
        );
    }

    #[test]
    fn node_not_found_without_suggestions_is_plain() {
        let err = Error::node_not_found("Z");
        assert_eq!(err.to_string(), "unknown node 'Z'");
    }
}
