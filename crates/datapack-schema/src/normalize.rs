use crate::descriptor::{Bugs, Descriptor};
use crate::name::name_from_url;
use crate::readme::{description_from_markdown, render_html};

impl Descriptor {
    /// Normalize a parsed descriptor into its canonical shape.
    ///
    /// `base_location` is where the descriptor came from: the directory that
    /// held `datapackage.json` for local loads, a URL ending in `/` for
    /// remote loads. Pure field rewriting, no I/O; applying it to an already
    /// normalized descriptor changes nothing.
    #[must_use]
    pub fn normalize(mut self, base_location: &str) -> Self {
        let base = base_location
            .strip_suffix("datapackage.json")
            .unwrap_or(base_location);

        if self.description.is_none() {
            self.description = Some(String::new());
        }

        let description_empty = self.description.as_deref().is_none_or(str::is_empty);
        if description_empty && self.readme.is_some() {
            let derived = self
                .readme
                .as_deref()
                .map(description_from_markdown)
                .unwrap_or_default();
            self.description = Some(derived);
        } else if self.readme.is_none() {
            self.readme = self.description.clone();
        }

        self.readme_html = Some(render_html(self.readme.as_deref().unwrap_or_default()));

        for resource in &mut self.resources {
            if resource.url.is_none() && !base.is_empty() {
                if let Some(path) = &resource.path {
                    // Plain concatenation: a base without a trailing
                    // separator glues onto the path.
                    resource.url = Some(format!("{base}{path}"));
                }
            }
            if resource.name.is_none() {
                if let Some(url) = &resource.url {
                    resource.name = Some(name_from_url(url));
                }
            }
            if let Some(fields) = resource.schema.as_mut().and_then(|s| s.fields.as_mut()) {
                for field in fields {
                    if field.name.is_none() {
                        field.name = field.id.clone();
                    }
                }
            }
        }

        if base.contains("raw.github.com") {
            let repo = base.split('/').skip(3).take(2).collect::<Vec<_>>().join("/");
            let repo_url = format!("https://github.com/{repo}");
            if self.bugs.is_none() {
                self.bugs = Some(Bugs {
                    url: Some(format!("{repo_url}/issues")),
                    ..Bugs::default()
                });
            }
            if self.homepage.is_none() {
                self.homepage = Some(repo_url);
            }
        }

        if self.homepage.is_none() {
            self.homepage = Some(base.to_owned());
        }

        self
    }
}
