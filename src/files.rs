use std::{
    fs::{self, File, OpenOptions},
    path::{Path, PathBuf},
};

use crate::error::Error;

/// suffix of the file decoded words are written to
pub const OUTPUT_SUFFIX: &str = ".tokens_decoded";

pub fn directory_exists(path: &Path) -> Result<(), Error> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(Error::NotADirectory(path.to_path_buf()))
    }
}

pub fn regular_file_exists_and_is_available(path: &Path) -> Result<(), Error> {
    match fs::metadata(path) {
        Ok(metadata) if metadata.is_file() => {}
        _ => return Err(Error::NotARegularFile(path.to_path_buf())),
    }
    File::open(path).map_err(|source| Error::UnableToOpen {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

/// opens without truncating, so an existing file is left as it is
pub fn can_open_for_writing(path: &Path) -> Result<(), Error> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .open(path)
        .map_err(|source| Error::UnableToOpenForWriting {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(())
}

/// `<dir>/<stem of code file>.tokens_decoded`
pub fn output_path(dir: &Path, code_file: &Path) -> PathBuf {
    let mut name = code_file.file_stem().unwrap_or_default().to_os_string();
    name.push(OUTPUT_SUFFIX);
    dir.join(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_replaces_extension() {
        assert_eq!(
            output_path(Path::new("input_output"), Path::new("message.code")),
            Path::new("input_output/message.tokens_decoded")
        );
        assert_eq!(
            output_path(Path::new("io"), Path::new("nested/message")),
            Path::new("io/message.tokens_decoded")
        );
        assert_eq!(
            output_path(Path::new("io"), Path::new("a.b.code")),
            Path::new("io/a.b.tokens_decoded")
        );
    }

    #[test]
    fn checks_directory() {
        let dir = tempfile::tempdir().unwrap();
        directory_exists(dir.path()).unwrap();

        let missing = dir.path().join("missing");
        assert!(matches!(directory_exists(&missing), Err(Error::NotADirectory(_))));

        let file = dir.path().join("file");
        fs::write(&file, "").unwrap();
        assert!(matches!(directory_exists(&file), Err(Error::NotADirectory(_))));
    }

    #[test]
    fn checks_regular_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("words.hdr");
        fs::write(&file, "a 0").unwrap();
        regular_file_exists_and_is_available(&file).unwrap();

        assert!(matches!(
            regular_file_exists_and_is_available(dir.path()),
            Err(Error::NotARegularFile(_))
        ));
        assert!(matches!(
            regular_file_exists_and_is_available(&dir.path().join("missing")),
            Err(Error::NotARegularFile(_))
        ));
    }

    #[test]
    fn checks_output_is_writable() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.tokens_decoded");
        fs::write(&output, "kept").unwrap();
        can_open_for_writing(&output).unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap(), "kept");

        let unreachable = dir.path().join("missing").join("out.tokens_decoded");
        assert!(matches!(
            can_open_for_writing(&unreachable),
            Err(Error::UnableToOpenForWriting { .. })
        ));
    }
}
