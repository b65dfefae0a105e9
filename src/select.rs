//! src/select.rs
//! ============================================================================
//! # Select: Match Collection and Interactive Disambiguation
//!
//! Drains the search channel into an arrival-ordered list, then resolves it
//! to exactly one path: zero matches fail, a single match is auto-selected,
//! and multiple matches are disambiguated by an indexed prompt. The prompt
//! reads from an injected `BufRead` and writes to an injected `Write`, so
//! the whole decision path is testable without a terminal.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use owo_colors::OwoColorize;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::error::AppError;

/// Drain the match stream until the traversal has fully completed.
///
/// Arrival order is nondeterministic across runs but becomes the one
/// snapshot used for both display and selection.
pub async fn collect_matches(mut rx: UnboundedReceiver<PathBuf>) -> Vec<PathBuf> {
    let mut matches: Vec<PathBuf> = Vec::new();
    while let Some(path) = rx.recv().await {
        matches.push(path);
    }
    matches
}

/// Resolve a collected match list to exactly one path.
///
/// Zero matches and invalid selections are errors; a single match never
/// prompts. The index shown in the listing is the index accepted from
/// `input`; both refer to the same list.
pub fn choose<R: BufRead, W: Write>(
    mut matches: Vec<PathBuf>,
    input: &mut R,
    output: &mut W,
) -> Result<PathBuf, AppError> {
    if matches.is_empty() {
        return Err(AppError::NoMatches);
    }
    if matches.len() == 1 {
        return Ok(matches.remove(0));
    }

    writeln!(output, "{}", "More than one project returned:".yellow())?;
    for (i, path) in matches.iter().enumerate() {
        writeln!(output, "{}: {}", i.blue(), path.display())?;
    }
    write!(output, "{} ", "Enter index of selection:".bold().green())?;
    output.flush()?;

    let mut line = String::new();
    let read = input.read_line(&mut line)?;
    if read == 0 {
        return Err(AppError::SelectionRead);
    }

    let trimmed: &str = line.trim();
    let index: i64 = trimmed
        .parse()
        .map_err(|_| AppError::InvalidSelection {
            input: trimmed.to_string(),
        })?;
    if index < 0 || index as usize >= matches.len() {
        return Err(AppError::SelectionOutOfRange {
            index,
            len: matches.len(),
        });
    }

    Ok(matches.swap_remove(index as usize))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tokio::sync::mpsc;

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    #[tokio::test]
    async fn collect_preserves_arrival_order() {
        let (tx, rx) = mpsc::unbounded_channel::<PathBuf>();
        tx.send(PathBuf::from("/a")).expect("send");
        tx.send(PathBuf::from("/b")).expect("send");
        tx.send(PathBuf::from("/c")).expect("send");
        drop(tx);

        let matches = collect_matches(rx).await;
        assert_eq!(matches, paths(&["/a", "/b", "/c"]));
    }

    #[test]
    fn zero_matches_fail_without_reading_input() {
        let mut input = Cursor::new(b"0\n".to_vec());
        let mut output = Vec::new();
        let err = choose(Vec::new(), &mut input, &mut output).unwrap_err();
        assert!(matches!(err, AppError::NoMatches));
        // Input must be untouched: no prompt on zero matches.
        assert_eq!(input.position(), 0);
        assert!(output.is_empty());
    }

    #[test]
    fn single_match_returns_without_prompt() {
        let mut input = Cursor::new(Vec::new());
        let mut output = Vec::new();
        let selected = choose(paths(&["/p/one"]), &mut input, &mut output).expect("choose");
        assert_eq!(selected, PathBuf::from("/p/one"));
        assert!(output.is_empty());
    }

    #[test]
    fn selecting_index_returns_that_entry() {
        let mut input = Cursor::new(b"1\n".to_vec());
        let mut output = Vec::new();
        let selected =
            choose(paths(&["/p/a", "/p/b", "/p/c"]), &mut input, &mut output).expect("choose");
        assert_eq!(selected, PathBuf::from("/p/b"));

        let listing = String::from_utf8(output).expect("utf8");
        assert!(listing.contains("/p/a"));
        assert!(listing.contains("/p/b"));
        assert!(listing.contains("/p/c"));
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        let mut input = Cursor::new(b"  2  \n".to_vec());
        let mut output = Vec::new();
        let selected =
            choose(paths(&["/p/a", "/p/b", "/p/c"]), &mut input, &mut output).expect("choose");
        assert_eq!(selected, PathBuf::from("/p/c"));
    }

    #[test]
    fn negative_index_is_out_of_range() {
        let mut input = Cursor::new(b"-1\n".to_vec());
        let mut output = Vec::new();
        let err = choose(paths(&["/p/a", "/p/b"]), &mut input, &mut output).unwrap_err();
        assert!(matches!(
            err,
            AppError::SelectionOutOfRange { index: -1, len: 2 }
        ));
    }

    #[test]
    fn index_equal_to_len_is_out_of_range() {
        let mut input = Cursor::new(b"2\n".to_vec());
        let mut output = Vec::new();
        let err = choose(paths(&["/p/a", "/p/b"]), &mut input, &mut output).unwrap_err();
        assert!(matches!(
            err,
            AppError::SelectionOutOfRange { index: 2, len: 2 }
        ));
    }

    #[test]
    fn non_numeric_input_is_invalid() {
        let mut input = Cursor::new(b"abc\n".to_vec());
        let mut output = Vec::new();
        let err = choose(paths(&["/p/a", "/p/b"]), &mut input, &mut output).unwrap_err();
        match err {
            AppError::InvalidSelection { input } => assert_eq!(input, "abc"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_line_is_invalid() {
        let mut input = Cursor::new(b"\n".to_vec());
        let mut output = Vec::new();
        let err = choose(paths(&["/p/a", "/p/b"]), &mut input, &mut output).unwrap_err();
        assert!(matches!(err, AppError::InvalidSelection { .. }));
    }

    #[tokio::test]
    async fn full_search_and_selection_flow() {
        use crate::tasks::search_task::spawn_search;
        use tempfile::TempDir;

        let tmp = TempDir::new().expect("tempdir");
        let root = tmp.path();
        std::fs::create_dir_all(root.join("alpha-web")).expect("fixture");
        std::fs::create_dir_all(root.join(".git")).expect("fixture");
        std::fs::create_dir_all(root.join("beta").join("alpha-lib")).expect("fixture");

        let rx = spawn_search(vec![root.to_path_buf()], "alpha");
        let mut matches = collect_matches(rx).await;
        matches.sort();
        assert_eq!(
            matches,
            vec![root.join("alpha-web"), root.join("beta").join("alpha-lib")]
        );

        // The displayed index resolves against the same snapshot.
        let mut input = Cursor::new(b"1\n".to_vec());
        let mut output = Vec::new();
        let selected = choose(matches, &mut input, &mut output).expect("choose");
        assert_eq!(selected, root.join("beta").join("alpha-lib"));
    }

    #[test]
    fn closed_input_is_a_read_error() {
        let mut input = Cursor::new(Vec::new());
        let mut output = Vec::new();
        let err = choose(paths(&["/p/a", "/p/b"]), &mut input, &mut output).unwrap_err();
        assert!(matches!(err, AppError::SelectionRead));
    }
}
