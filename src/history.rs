use std::collections::HashSet;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

/// Load the posted-link log as a set. A missing file is an empty set;
/// anything else that goes wrong reading it propagates.
pub fn load(path: &Path) -> io::Result<HashSet<String>> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(HashSet::new()),
        Err(err) => return Err(err),
    };
    Ok(content
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Append one link to the log. The file is append-only and never rewritten.
pub fn append(path: &Path, link: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}", link)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_empty_set() {
        let dir = tempfile::tempdir().unwrap();
        let set = load(&dir.path().join("absent.txt")).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn append_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("posted.txt");

        append(&path, "http://x/a").unwrap();
        append(&path, "http://x/b").unwrap();

        let set = load(&path).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains("http://x/a"));
        assert!(set.contains("http://x/b"));
    }
}
