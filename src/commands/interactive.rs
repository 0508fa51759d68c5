//! Interactive prompt mode
//!
//! Repeatedly asks for two words and reports the ladder between them, until an
//! empty first word (or end of input) ends the session.

use super::solve::solve_pair;
use crate::graph::AdjacencyMap;
use std::io::{self, BufRead, Write};

/// Run the interactive session over arbitrary input and output streams
///
/// Returns the number of word pairs that were searched.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
///
/// # Examples
/// ```
/// use word_ladder::commands::run_interactive;
/// use word_ladder::graph::AdjacencyMap;
/// use word_ladder::wordlists::loader::words_from_str;
///
/// let graph = AdjacencyMap::build(words_from_str("cat cot cog dog dot"));
/// let mut output = Vec::new();
/// let searched = run_interactive(&graph, "cat\ndog\n\n".as_bytes(), &mut output).unwrap();
///
/// assert_eq!(searched, 1);
/// let text = String::from_utf8(output).unwrap();
/// assert!(text.contains("Edit distance = 3"));
/// ```
pub fn run_interactive<R: BufRead, W: Write>(
    graph: &AdjacencyMap,
    mut input: R,
    mut output: W,
) -> io::Result<usize> {
    let mut searched = 0;

    loop {
        writeln!(output, "Let's find an edit distance between words.")?;
        let first = prompt(&mut input, &mut output, "    first word (enter to quit)? ")?;
        let Some(first) = first.filter(|w| !w.is_empty()) else {
            break;
        };

        if graph.contains(&first) {
            let second = prompt(&mut input, &mut output, "    second word? ")?.unwrap_or_default();
            match solve_pair(&first, &second, graph) {
                Ok(result) => {
                    searched += 1;
                    match result.ladder {
                        Some(ladder) => {
                            writeln!(output, "{ladder}")?;
                            writeln!(output, "Edit distance = {}", ladder.distance)?;
                        }
                        None => writeln!(output, "No solution")?,
                    }
                }
                Err(e) => writeln!(output, "{e}")?,
            }
        } else {
            writeln!(output, "{first} is not in the dictionary")?;
        }

        writeln!(output)?;
    }

    Ok(searched)
}

/// Run the interactive session on stdin and stdout
///
/// # Errors
///
/// Returns an error if the terminal cannot be read or written.
pub fn run_interactive_stdio(graph: &AdjacencyMap) -> io::Result<usize> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_interactive(graph, stdin.lock(), stdout.lock())
}

/// Print a prompt and read one trimmed line; `None` at end of input
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> io::Result<Option<String>> {
    write!(output, "{message}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
