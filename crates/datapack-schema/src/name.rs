use url::Url;

/// Derive a resource name from its URL.
///
/// Takes the last path segment and drops the final extension, so
/// `http://example.org/abc/xyz.fbc.csv?v=2` becomes `xyz.fbc`. Inputs that
/// are not absolute URLs (local bases produce those) are treated as bare
/// paths with any query or fragment cut off.
pub fn name_from_url(url: &str) -> String {
    let path = match Url::parse(url) {
        Ok(parsed) => parsed.path().to_owned(),
        Err(_) => url
            .split(|c| c == '?' || c == '#')
            .next()
            .unwrap_or_default()
            .to_owned(),
    };
    let segment = path.rsplit('/').next().unwrap_or_default();
    match segment.rfind('.') {
        Some(dot) => segment[..dot].to_owned(),
        None => segment.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_final_extension_only() {
        assert_eq!(
            name_from_url("http://raw.github.com/d/gold/master/xyz.fbc.csv"),
            "xyz.fbc"
        );
        assert_eq!(name_from_url("http://example.org/data/prices.csv"), "prices");
    }

    #[test]
    fn excludes_query_and_fragment() {
        assert_eq!(
            name_from_url("http://example.org/abc/xyz.csv?format=json"),
            "xyz"
        );
        assert_eq!(name_from_url("http://example.org/abc/xyz.csv#rows"), "xyz");
    }

    #[test]
    fn keeps_segment_without_extension() {
        assert_eq!(name_from_url("http://example.org/data/gold"), "gold");
    }

    #[test]
    fn handles_relative_inputs() {
        assert_eq!(name_from_url("test/data/dp1/data.csv"), "data");
        assert_eq!(name_from_url("data.csv?cached=1"), "data");
    }

    #[test]
    fn hidden_file_segment_yields_empty_name() {
        assert_eq!(name_from_url("http://example.org/pkg/.gitignore"), "");
    }

    #[test]
    fn trailing_slash_yields_empty_name() {
        assert_eq!(name_from_url("http://example.org/pkg/"), "");
    }
}
