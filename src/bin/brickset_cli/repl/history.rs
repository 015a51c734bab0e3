use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use anyhow::Result;

/// Command history of the interactive shell
pub struct History {
    /// History file path
    file_path: PathBuf,

    /// Commands in memory
    commands: Vec<String>,

    /// Maximum number of commands kept
    max_size: usize,
}

impl History {
    /// Create a new, empty history
    pub fn new<P: AsRef<Path>>(file_path: P, max_size: usize) -> Self {
        History {
            file_path: file_path.as_ref().to_path_buf(),
            commands: Vec::new(),
            max_size,
        }
    }

    /// Load the history from its file, a missing file is an empty history
    pub fn load(&mut self) -> Result<()> {
        if !self.file_path.exists() {
            return Ok(());
        }

        let reader = BufReader::new(File::open(&self.file_path)?);

        self.commands.clear();
        for line in reader.lines() {
            let line = line?;
            if !line.trim().is_empty() {
                self.commands.push(line);
            }
        }

        if self.commands.len() > self.max_size {
            self.commands.drain(..self.commands.len() - self.max_size);
        }

        Ok(())
    }

    /// Write the history to its file
    pub fn save(&self) -> Result<()> {
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.file_path)?;

        for cmd in &self.commands {
            writeln!(file, "{}", cmd)?;
        }

        Ok(())
    }

    /// Add a command; blank lines and consecutive duplicates are skipped
    pub fn add(&mut self, command: &str) {
        let command = command.trim();
        if command.is_empty() {
            return;
        }

        if self.commands.last().is_some_and(|last| last == command) {
            return;
        }

        self.commands.push(command.to_string());

        if self.commands.len() > self.max_size {
            self.commands.remove(0);
        }
    }

    /// Get all commands, oldest first
    pub fn get_all(&self) -> &[String] {
        &self.commands
    }

    /// Find the commands containing a pattern
    pub fn search(&self, pattern: &str) -> Vec<String> {
        self.commands
            .iter()
            .filter(|cmd| cmd.contains(pattern))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_add_skips_blank_and_repeated() {
        let mut history = History::new("unused", 10);
        history.add("total_pieces");
        history.add("   ");
        history.add("total_pieces");
        history.add("tags_desc");
        history.add("total_pieces");

        assert_eq!(history.get_all(), &["total_pieces", "tags_desc", "total_pieces"]);
        assert_eq!(history.search("tags"), vec!["tags_desc".to_string()]);
    }

    #[test]
    fn test_max_size() {
        let mut history = History::new("unused", 2);
        history.add("a");
        history.add("b");
        history.add("c");

        assert_eq!(history.get_all(), &["b", "c"]);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history");

        let mut history = History::new(&path, 3);
        for cmd in ["a", "b", "c"] {
            history.add(cmd);
        }
        history.save().unwrap();

        let mut reloaded = History::new(&path, 2);
        reloaded.load().unwrap();
        assert_eq!(reloaded.get_all(), &["b", "c"]);

        let mut missing = History::new(dir.path().join("nope"), 2);
        missing.load().unwrap();
        assert!(missing.get_all().is_empty());
    }
}
