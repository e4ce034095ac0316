use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

/// Turns the positional arguments into the word list.
///
/// A single argument naming an existing file is read as a word list; anything else
/// is taken verbatim. Existence is checked first, so a missing path becomes a word.
pub fn resolve(args: &[String]) -> io::Result<Vec<String>> {
    if let [single] = args
        && Path::new(single).is_file()
    {
        debug!(path = %single, "reading word list");
        return read_word_list(Path::new(single));
    }
    Ok(args.to_vec())
}

/// Every non-blank line, trimmed, in file order.
pub fn read_word_list(path: &Path) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}
