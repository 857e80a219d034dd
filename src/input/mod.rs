use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("invalid UTF-8 in file: {0}")]
    InvalidEncoding(PathBuf),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Reads the entire file as UTF-8 text. The handle is scoped to the read
/// and released on every path, including errors.
pub fn load_text(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => LoadError::FileNotFound(path.to_path_buf()),
        io::ErrorKind::InvalidData => LoadError::InvalidEncoding(path.to_path_buf()),
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source: err,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::io::Write;

    #[test]
    fn test_valid_file_loads() {
        let test_file = "test_load_valid.txt";
        let mut file = File::create(test_file).unwrap();
        file.write_all(b"hello world").unwrap();

        let result = load_text(Path::new(test_file));
        assert_eq!(result.unwrap(), "hello world");

        fs::remove_file(test_file).unwrap();
    }

    #[test]
    fn test_nonexistent_file_error() {
        let result = load_text(Path::new("nonexistent_file_12345.txt"));
        match result {
            Err(LoadError::FileNotFound(path)) => {
                assert_eq!(path, Path::new("nonexistent_file_12345.txt"));
            }
            other => panic!("Expected FileNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_utf8_error() {
        let test_file = "test_load_invalid_utf8.txt";
        let mut file = File::create(test_file).unwrap();
        file.write_all(&[0xff, 0xfe, 0x80]).unwrap();

        let result = load_text(Path::new(test_file));
        match result {
            Err(LoadError::InvalidEncoding(_)) => (),
            other => panic!("Expected InvalidEncoding, got {:?}", other),
        }

        fs::remove_file(test_file).unwrap();
    }

    #[test]
    fn test_directory_is_io_error() {
        let test_dir = "test_load_dir";
        fs::create_dir(test_dir).unwrap();

        let result = load_text(Path::new(test_dir));
        match result {
            Err(LoadError::Io { path, .. }) => assert_eq!(path, Path::new(test_dir)),
            other => panic!("Expected Io, got {:?}", other),
        }

        fs::remove_dir(test_dir).unwrap();
    }

    #[test]
    fn test_error_message_names_path() {
        let err = LoadError::FileNotFound(PathBuf::from("missing.txt"));
        assert_eq!(err.to_string(), "file not found: missing.txt");
    }
}
