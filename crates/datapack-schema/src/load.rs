use crate::descriptor::{parse_descriptor, Descriptor, DescriptorError};
use crate::readme::normalize_line_endings;
use std::fs;
use std::path::Path;

/// Load and normalize a descriptor from a local path.
///
/// `path` may be the `datapackage.json` file itself or a directory holding
/// one. A sibling `README.md` is folded into the descriptor when readable;
/// its absence is not an error.
pub fn load(path: impl AsRef<Path>) -> Result<Descriptor, DescriptorError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(DescriptorError::NotFound(path.display().to_string()));
    }

    let descriptor_path = if path.is_dir() {
        path.join("datapackage.json")
    } else {
        path.to_path_buf()
    };
    let base = descriptor_path.parent().unwrap_or(Path::new(""));

    let bytes = fs::read(&descriptor_path)?;
    let mut descriptor = parse_descriptor(&bytes)?;

    if let Ok(readme) = fs::read_to_string(base.join("README.md")) {
        descriptor.readme = Some(normalize_line_endings(&readme));
    }

    Ok(descriptor.normalize(&base.to_string_lossy()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_package(dir: &Path, descriptor: &str) {
        fs::write(dir.join("datapackage.json"), descriptor).unwrap();
    }

    #[test]
    fn loads_from_directory_path() {
        let dir = tempfile::tempdir().unwrap();
        write_package(
            dir.path(),
            r#"{"name": "gold-prices", "resources": [{"path": "data.csv"}]}"#,
        );
        let descriptor = load(dir.path()).expect("should load");
        assert_eq!(descriptor.name.as_deref(), Some("gold-prices"));
        // Base is the directory itself, joined without a separator.
        let expected_url = format!("{}data.csv", dir.path().display());
        assert_eq!(descriptor.resources[0].url.as_deref(), Some(&*expected_url));
    }

    #[test]
    fn loads_from_file_path() {
        let dir = tempfile::tempdir().unwrap();
        write_package(dir.path(), r#"{"name": "gold-prices"}"#);
        let descriptor = load(dir.path().join("datapackage.json")).expect("should load");
        assert_eq!(descriptor.name.as_deref(), Some("gold-prices"));
    }

    #[test]
    fn missing_path_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = load(&missing).unwrap_err();
        match err {
            DescriptorError::NotFound(location) => {
                assert!(location.ends_with("nope"));
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn directory_without_descriptor_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(dir.path()).unwrap_err();
        assert!(matches!(err, DescriptorError::Io(_)));
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        write_package(dir.path(), "{ definitely not json");
        let err = load(dir.path()).unwrap_err();
        assert!(matches!(err, DescriptorError::Parse(_)));
    }

    #[test]
    fn sibling_readme_is_folded_in() {
        let dir = tempfile::tempdir().unwrap();
        write_package(dir.path(), r#"{"name": "gold-prices"}"#);
        fs::write(dir.path().join("README.md"), "# Gold\r\n\r\nPrices.\r\n").unwrap();
        let descriptor = load(dir.path()).expect("should load");
        assert_eq!(descriptor.readme.as_deref(), Some("# Gold\n\nPrices.\n"));
        assert_eq!(descriptor.description.as_deref(), Some("Gold"));
    }

    #[test]
    fn absent_readme_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        write_package(dir.path(), r#"{"description": "Already described."}"#);
        let descriptor = load(dir.path()).expect("should load");
        assert_eq!(descriptor.readme.as_deref(), Some("Already described."));
    }
}
