use crate::ident::{resolve, ResolvedSource};
use crate::RemoteError;
use datapack_schema::{normalize_line_endings, Descriptor};
use std::io::Read;

/// HTTP loader for remote data packages.
///
/// Wraps a reusable agent; clones share the underlying connection pool, so
/// batch runs can hand every worker its own handle cheaply. The agent is
/// built with defaults and sets no timeouts.
#[derive(Clone)]
pub struct RemoteLoader {
    agent: ureq::Agent,
}

impl RemoteLoader {
    pub fn new() -> Self {
        Self {
            agent: ureq::Agent::new_with_defaults(),
        }
    }

    /// Fetch, enrich, and normalize the descriptor behind `locator`.
    ///
    /// The locator may be a base URL, an explicit `datapackage.json` URL, or
    /// a GitHub page URL (see [`resolve`]). A `README.md` next to the
    /// descriptor is folded in when the fetch succeeds; any README failure
    /// is swallowed.
    pub fn load_url(&self, locator: &str) -> Result<Descriptor, RemoteError> {
        let ResolvedSource {
            base_url,
            descriptor_url,
        } = resolve(locator);

        tracing::debug!("GET {descriptor_url}");
        let body = self.fetch(&descriptor_url)?;
        let mut descriptor: Descriptor =
            serde_json::from_slice(&body).map_err(|source| RemoteError::Parse {
                url: descriptor_url.clone(),
                source,
            })?;

        let readme_url = format!("{base_url}README.md");
        tracing::debug!("GET {readme_url}");
        match self.fetch(&readme_url) {
            Ok(readme) => {
                descriptor.readme =
                    Some(normalize_line_endings(&String::from_utf8_lossy(&readme)));
            }
            Err(err) => tracing::debug!("no readme at {readme_url}: {err}"),
        }

        Ok(descriptor.normalize(&base_url))
    }

    fn fetch(&self, url: &str) -> Result<Vec<u8>, RemoteError> {
        let resp = match self.agent.get(url).call() {
            Ok(r) => r,
            Err(ureq::Error::StatusCode(code)) => {
                return Err(RemoteError::Status {
                    url: url.to_owned(),
                    status: code,
                });
            }
            Err(e) => {
                return Err(RemoteError::Network {
                    url: url.to_owned(),
                    message: e.to_string(),
                });
            }
        };

        let status = resp.status().as_u16();
        if status != 200 {
            return Err(RemoteError::Status {
                url: url.to_owned(),
                status,
            });
        }

        let mut reader = resp.into_body().into_reader();
        let mut body = Vec::new();
        reader
            .read_to_end(&mut body)
            .map_err(|e| RemoteError::Network {
                url: url.to_owned(),
                message: e.to_string(),
            })?;
        Ok(body)
    }
}

impl Default for RemoteLoader {
    fn default() -> Self {
        Self::new()
    }
}
