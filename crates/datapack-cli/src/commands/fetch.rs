use super::{json_pretty, spin_fail, spin_ok, spinner, EXIT_SUCCESS};
use datapack_remote::{load_many_urls, RemoteLoader, SourceList};
use std::path::Path;

pub fn run(urls: &[String], sources: Option<&Path>, json: bool) -> Result<u8, String> {
    let mut all = urls.to_vec();
    if let Some(path) = sources {
        let list = SourceList::load(path).map_err(|e| e.to_string())?;
        tracing::debug!("{} url(s) from {}", list.urls.len(), path.display());
        all.extend(list.urls);
    }
    if all.is_empty() {
        return Err("no URLs given (pass URLs or --sources <file>)".to_owned());
    }

    let loader = RemoteLoader::new();
    let pb = spinner(&format!("fetching {} package(s)…", all.len()));
    let output = load_many_urls(&loader, &all);
    if output.is_empty() {
        spin_fail(&pb, "no packages loaded");
    } else {
        spin_ok(
            &pb,
            &format!("loaded {} of {} package(s)", output.len(), all.len()),
        );
    }

    if json {
        println!("{}", json_pretty(&output)?);
    } else {
        for (name, descriptor) in &output {
            let display = if name.is_empty() { "(unnamed)" } else { name };
            println!(
                "{display}: {}",
                descriptor.description.as_deref().unwrap_or("")
            );
        }
    }
    Ok(EXIT_SUCCESS)
}
