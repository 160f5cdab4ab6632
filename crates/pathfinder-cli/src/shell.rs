//! Line-oriented interactive session.
//!
//! Reads one command per line from any `BufRead` so the loop can be driven by
//! a terminal or by tests. Command failures are reported and the session
//! continues; only end of input or `exit` stops it.

use std::io::{BufRead, Lines, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::debug;

use pathfinder_lib::{load_graph, shortest_path, Graph, GraphStatistics};

use crate::output::{write_path, write_statistics, OutputFormat};

const PROMPT: &str = "pathfinder> ";

const HELP: &str = "\
Commands:
  load <path>   Load a graph file, replacing the current graph
  stats         Show node, edge and weight totals
  route         Find the shortest path (prompts for start and goal)
  help          Show this list
  exit          Leave the shell";

/// State carried between shell commands.
#[derive(Debug)]
pub struct Session {
    graph: Option<Graph<String, f64>>,
    source: Option<PathBuf>,
    format: OutputFormat,
}

impl Session {
    /// Empty session; a graph is added with `load`.
    pub fn new(format: OutputFormat) -> Self {
        Self {
            graph: None,
            source: None,
            format,
        }
    }

    /// Start the session with a graph that was loaded up front.
    pub fn with_graph(mut self, graph: Graph<String, f64>, source: PathBuf) -> Self {
        self.graph = Some(graph);
        self.source = Some(source);
        self
    }

    /// Graph currently loaded, if any.
    pub fn graph(&self) -> Option<&Graph<String, f64>> {
        self.graph.as_ref()
    }

    /// File the current graph was loaded from.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

enum Flow {
    Continue,
    Exit,
}

/// Run the shell until `exit` or end of input.
pub fn run_shell<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "Welcome to pathfinder. Type 'help' for commands.")?;
    let mut lines = input.lines();

    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        let Some(line) = lines.next().transpose()? else {
            writeln!(out)?;
            break;
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        debug!(command = line, "shell command");
        match dispatch(session, line, &mut lines, out)? {
            Flow::Continue => {}
            Flow::Exit => {
                writeln!(out, "Goodbye!")?;
                break;
            }
        }
    }

    Ok(())
}

fn dispatch<R: BufRead, W: Write>(
    session: &mut Session,
    line: &str,
    lines: &mut Lines<R>,
    out: &mut W,
) -> Result<Flow> {
    let (command, argument) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command.to_ascii_lowercase().as_str() {
        "exit" | "quit" => return Ok(Flow::Exit),
        "help" => writeln!(out, "{HELP}")?,
        "load" => load(session, argument, out)?,
        "stats" => match session.graph() {
            Some(graph) => {
                write_statistics(out, session.format, &GraphStatistics::undirected(graph))?
            }
            None => writeln!(out, "No graph loaded. Use 'load <path>' first.")?,
        },
        "route" => route(session, lines, out)?,
        other => writeln!(
            out,
            "Unknown command '{other}'. Type 'help' for a list of commands."
        )?,
    }

    Ok(Flow::Continue)
}

fn load<W: Write>(session: &mut Session, argument: &str, out: &mut W) -> Result<()> {
    if argument.is_empty() {
        writeln!(out, "Usage: load <path>")?;
        return Ok(());
    }

    let path = PathBuf::from(argument);
    let is_dot = path
        .extension()
        .is_some_and(|extension| extension.eq_ignore_ascii_case("dot"));
    if !is_dot {
        writeln!(
            out,
            "Warning: {} is not a .dot file; edge statements may not be found.",
            path.display()
        )?;
    }

    match load_graph(&path) {
        Ok((graph, report)) => {
            writeln!(
                out,
                "Loaded {} nodes and {} edges from {}",
                graph.node_count(),
                graph.edge_count(),
                path.display()
            )?;
            if report.edges_read == 0 {
                writeln!(out, "Warning: no edge statements were found.")?;
            }
            session.graph = Some(graph);
            session.source = Some(path);
        }
        Err(err) => writeln!(out, "Error: {err}")?,
    }
    Ok(())
}

fn route<R: BufRead, W: Write>(
    session: &Session,
    lines: &mut Lines<R>,
    out: &mut W,
) -> Result<()> {
    let Some(graph) = session.graph() else {
        writeln!(out, "No graph loaded. Use 'load <path>' first.")?;
        return Ok(());
    };

    let Some(start) = prompt_for_node(graph, "Start node", lines, out)? else {
        return Ok(());
    };
    let Some(goal) = prompt_for_node(graph, "Goal node", lines, out)? else {
        return Ok(());
    };

    match shortest_path(graph, start.as_str(), goal.as_str()) {
        Ok(found) => write_path(out, session.format, &found)?,
        Err(err) => writeln!(out, "Error: {err}")?,
    }
    Ok(())
}

/// Ask until a known node name is entered. A blank answer or end of input
/// cancels.
fn prompt_for_node<R: BufRead, W: Write>(
    graph: &Graph<String, f64>,
    label: &str,
    lines: &mut Lines<R>,
    out: &mut W,
) -> Result<Option<String>> {
    loop {
        write!(out, "{label}: ")?;
        out.flush()?;

        let Some(answer) = lines.next().transpose()? else {
            writeln!(out)?;
            return Ok(None);
        };
        let answer = answer.trim();
        if answer.is_empty() {
            writeln!(out, "Cancelled.")?;
            return Ok(None);
        }
        if graph.contains_node(answer) {
            return Ok(Some(answer.to_string()));
        }

        let suggestions = graph.similar_nodes(answer, 3);
        if suggestions.is_empty() {
            writeln!(out, "Unknown node '{answer}', try again.")?;
        } else {
            writeln!(
                out,
                "Unknown node '{answer}'. Did you mean: {}?",
                suggestions.join(", ")
            )?;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use pathfinder_lib::parse_graph;

    use super::*;

    fn session() -> Session {
        let source = "\"A\" -- \"B\" [seconds=4];\n\"A\" -- \"C\" [seconds=1];\n\"C\" -- \"B\" [seconds=1];\n\"Z\" -- \"Y\" [seconds=1];\n";
        let (graph, _) = parse_graph(source).expect("graph parses");
        Session::new(OutputFormat::Text).with_graph(graph, PathBuf::from("inline.dot"))
    }

    fn run(session: &mut Session, script: &str) -> String {
        let mut out = Vec::new();
        run_shell(session, Cursor::new(script), &mut out).expect("shell runs");
        String::from_utf8(out).expect("utf8 output")
    }

    #[test]
    fn route_prompts_for_endpoints() {
        let mut session = session();
        let output = run(&mut session, "route\nA\nB\nexit\n");
        assert!(output.contains("Start node: "));
        assert!(output.contains("Goal node: "));
        assert!(output.contains("Shortest path: A -> C -> B"));
        assert!(output.contains("Total cost: 2.00"));
        assert!(output.ends_with("Goodbye!\n"));
    }

    #[test]
    fn unknown_node_is_asked_again() {
        let mut session = session();
        let output = run(&mut session, "route\nQ\nA\nC\n");
        assert!(output.contains("Unknown node 'Q', try again."));
        assert!(output.contains("Shortest path: A -> C"));
    }

    #[test]
    fn unreachable_goal_reports_error_and_continues() {
        let mut session = session();
        let output = run(&mut session, "route\nA\nZ\nstats\n");
        assert!(output.contains("Error: no path found between 'A' and 'Z'"));
        assert!(output.contains("Total Nodes: 5 Total Edges: 4 Total Weight: 7.00"));
    }

    #[test]
    fn blank_answer_cancels_route() {
        let mut session = session();
        let output = run(&mut session, "route\n\nhelp\n");
        assert!(output.contains("Cancelled."));
        assert!(output.contains("Commands:"));
        assert!(!output.contains("Shortest path"));
    }

    #[test]
    fn commands_require_a_graph() {
        let mut session = Session::new(OutputFormat::Text);
        let output = run(&mut session, "stats\nroute\n");
        assert_eq!(
            output.matches("No graph loaded. Use 'load <path>' first.").count(),
            2
        );
    }

    #[test]
    fn unknown_command_is_reported() {
        let mut session = session();
        let output = run(&mut session, "fly\n");
        assert!(output.contains("Unknown command 'fly'."));
    }

    #[test]
    fn load_warns_about_non_dot_file_without_edges() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "just some text\n").expect("write file");

        let mut session = session();
        let output = run(&mut session, &format!("load {}\n", path.display()));
        assert!(output.contains("is not a .dot file"));
        assert!(output.contains("Loaded 0 nodes and 0 edges"));
        assert!(output.contains("Warning: no edge statements were found."));
    }

    #[test]
    fn load_of_dot_file_has_no_warning() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("pair.dot");
        std::fs::write(&path, "\"P\" -- \"Q\" [seconds=2];\n").expect("write file");

        let mut session = session();
        let output = run(&mut session, &format!("load {}\nstats\n", path.display()));
        assert!(!output.contains("Warning"));
        assert!(output.contains("Total Nodes: 2 Total Edges: 1 Total Weight: 2.00"));
        assert_eq!(session.source(), Some(path.as_path()));
    }

    #[test]
    fn load_of_missing_file_keeps_current_graph() {
        let mut session = session();
        let output = run(&mut session, "load /definitely/not/here.dot\n");
        assert!(output.contains("Error: graph file not found at /definitely/not/here.dot"));
        assert_eq!(session.source(), Some(Path::new("inline.dot")));
        assert_eq!(session.graph().map(|graph| graph.node_count()), Some(5));
    }
}
