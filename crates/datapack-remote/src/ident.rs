/// A locator resolved into the two URLs a load needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSource {
    /// Base URL, always ending in `/`. Resource paths and `README.md` are
    /// fetched relative to it, and it becomes the normalization base.
    pub base_url: String,
    /// Full URL of the `datapackage.json` document.
    pub descriptor_url: String,
}

/// Resolve a caller-supplied locator into base and descriptor URLs.
///
/// Accepted forms:
/// - a GitHub page URL (`https://github.com/owner/repo`), rewritten to its
///   raw-content equivalent with `master` assumed when no branch is given;
/// - a URL ending in `datapackage.json`, used as the descriptor directly;
/// - any other URL, treated as a base directory.
pub fn resolve(locator: &str) -> ResolvedSource {
    let mut location = locator.trim().to_owned();

    // github.com pages serve HTML; raw.github.com serves the files.
    if location.contains("//github.com/") {
        location = location.replace("//github.com/", "//raw.github.com/");
        let segments = location.trim_end_matches('/').split('/').count();
        // scheme + empty + host + owner + repo
        if segments == 5 {
            location = format!("{}/master", location.trim_end_matches('/'));
        }
    }

    if let Some(base) = location.strip_suffix("datapackage.json") {
        let base_url = base.to_owned();
        return ResolvedSource {
            base_url,
            descriptor_url: location,
        };
    }

    if !location.ends_with('/') {
        location.push('/');
    }
    ResolvedSource {
        descriptor_url: format!("{location}datapackage.json"),
        base_url: location,
    }
}
