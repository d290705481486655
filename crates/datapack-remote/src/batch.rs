use crate::http::RemoteLoader;
use datapack_schema::Descriptor;
use std::collections::BTreeMap;
use std::sync::mpsc;
use std::thread;

/// Load every URL concurrently and key the successes by package name.
///
/// One worker per URL. Failed loads are logged and dropped, so the returned
/// map holds only the descriptors that loaded; a descriptor without a name
/// is keyed under the empty string, and duplicate names keep the last
/// arrival. Returns once every worker has settled. There is no per-URL
/// failure reporting and no timeout, so a hung fetch stalls the whole
/// batch.
pub fn load_many_urls(loader: &RemoteLoader, urls: &[String]) -> BTreeMap<String, Descriptor> {
    let (tx, rx) = mpsc::channel();
    let mut handles = Vec::with_capacity(urls.len());
    for url in urls {
        let loader = loader.clone();
        let url = url.clone();
        let tx = tx.clone();
        handles.push(thread::spawn(move || {
            let result = loader.load_url(&url);
            let _ = tx.send((url, result));
        }));
    }
    drop(tx);

    // The loop ends once every worker has dropped its sender.
    let mut output = BTreeMap::new();
    for (url, result) in rx {
        match result {
            Ok(descriptor) => {
                let name = descriptor.name.clone().unwrap_or_default();
                output.insert(name, descriptor);
            }
            Err(err) => tracing::error!("failed to load {url}: {err}"),
        }
    }

    for handle in handles {
        let _ = handle.join();
    }
    output
}
