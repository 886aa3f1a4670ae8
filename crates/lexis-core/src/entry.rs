use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use lexis_types::LexiconEntry;

const ENTRY_EXTENSION: &str = "md";

#[derive(Debug, thiserror::Error)]
pub enum EntryError {
    #[error("Entry already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// `<word_directory>/<word>.md`
pub fn entry_path(word_directory: impl AsRef<Path>, word: &str) -> PathBuf {
    word_directory
        .as_ref()
        .join(format!("{word}.{ENTRY_EXTENSION}"))
}

/// Write a new entry file; never touches an existing one
///
/// The file is opened create-new, so a file that appears between the existence check
/// and the write is also reported as `AlreadyExists`.
pub fn write_entry(entry: &LexiconEntry) -> Result<(), EntryError> {
    // Entries live directly inside the word directory
    if entry.word.contains(['/', '\\']) {
        return Err(EntryError::Io {
            path: entry.path.clone(),
            source: io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("\"{}\" cannot be used as a file name", entry.word),
            ),
        });
    }

    if entry.path.exists() {
        return Err(EntryError::AlreadyExists(entry.path.clone()));
    }

    let io_error = |source| EntryError::Io {
        path: entry.path.clone(),
        source,
    };

    if let Some(parent) = entry.path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(io_error)?;
    }

    let mut file = match OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&entry.path)
    {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            return Err(EntryError::AlreadyExists(entry.path.clone()));
        }
        Err(e) => return Err(io_error(e)),
    };

    file.write_all(entry.definition.as_bytes())
        .map_err(io_error)?;

    tracing::debug!("Wrote entry {} to {}", entry.word, entry.path.display());
    Ok(())
}

/// Number of entry files in the word directory
pub fn count_entries(word_directory: impl AsRef<Path>) -> io::Result<usize> {
    let mut count = 0;
    for item in fs::read_dir(word_directory)? {
        let path = item?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == ENTRY_EXTENSION) {
            count += 1;
        }
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn entry(dir: &Path, word: &str, definition: &str) -> LexiconEntry {
        LexiconEntry {
            word: word.to_string(),
            definition: definition.to_string(),
            path: entry_path(dir, word),
        }
    }

    #[test]
    fn written_definition_reads_back_exactly() {
        let dir = TempDir::new().unwrap();
        let definition = "cat\n      n 1: feline mammal, ünïcode";
        let cat = entry(dir.path(), "cat", definition);

        write_entry(&cat).unwrap();
        assert_eq!(fs::read_to_string(&cat.path).unwrap(), definition);
    }

    #[test]
    fn second_write_is_rejected_and_keeps_content() {
        let dir = TempDir::new().unwrap();
        let words = dir.path().join("words");
        write_entry(&entry(&words, "cat", "first")).unwrap();

        let again = entry(&words, "cat", "second");
        assert!(matches!(
            write_entry(&again),
            Err(EntryError::AlreadyExists(path)) if path == again.path
        ));
        assert_eq!(fs::read_to_string(&again.path).unwrap(), "first");
    }

    #[test]
    fn existing_file_is_never_modified() {
        let dir = TempDir::new().unwrap();
        let words = dir.path().join("words");
        fs::create_dir_all(&words).unwrap();
        fs::write(words.join("cat.md"), "hand written").unwrap();

        assert!(matches!(
            write_entry(&entry(&words, "cat", "a small domestic animal")),
            Err(EntryError::AlreadyExists(_))
        ));
        assert_eq!(
            fs::read_to_string(words.join("cat.md")).unwrap(),
            "hand written"
        );
    }

    #[test]
    fn word_with_separator_is_rejected() {
        let dir = TempDir::new().unwrap();
        let words = dir.path().join("words");

        for word in ["../escaped", "nested/cat", "back\\slash"] {
            match write_entry(&entry(&words, word, "text")) {
                Err(EntryError::Io { source, .. }) => {
                    assert_eq!(source.kind(), io::ErrorKind::InvalidInput)
                }
                other => panic!("{word} was accepted: {other:?}"),
            }
        }

        assert!(!dir.path().join("escaped.md").exists());
        assert!(!words.exists());
    }

    #[test]
    fn creates_missing_word_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("vault").join("words");
        write_entry(&entry(&nested, "dog", "a canine")).unwrap();
        assert!(nested.join("dog.md").is_file());
    }

    #[test]
    fn counts_only_entry_files() {
        let dir = TempDir::new().unwrap();
        for word in ["cat", "dog", "owl"] {
            write_entry(&entry(dir.path(), word, word)).unwrap();
        }
        fs::write(dir.path().join("notes.txt"), "x").unwrap();
        fs::create_dir(dir.path().join("archive.md")).unwrap();

        assert_eq!(count_entries(dir.path()).unwrap(), 3);
    }

    #[test]
    fn count_fails_for_missing_directory() {
        let dir = TempDir::new().unwrap();
        assert!(count_entries(dir.path().join("absent")).is_err());
    }
}
