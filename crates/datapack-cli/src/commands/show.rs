use super::{is_remote, json_pretty, EXIT_SUCCESS};
use datapack_schema::Descriptor;

pub fn run(source: &str, json: bool) -> Result<u8, String> {
    let descriptor = load_source(source)?;
    if json {
        println!("{}", json_pretty(&descriptor)?);
    } else {
        print_summary(&descriptor);
    }
    Ok(EXIT_SUCCESS)
}

fn load_source(source: &str) -> Result<Descriptor, String> {
    if is_remote(source) {
        tracing::debug!("loading remote package {source}");
        let loader = datapack_remote::RemoteLoader::new();
        loader.load_url(source).map_err(|e| e.to_string())
    } else {
        tracing::debug!("loading local package {source}");
        datapack_schema::load(source).map_err(|e| e.to_string())
    }
}

fn print_summary(descriptor: &Descriptor) {
    println!(
        "name:        {}",
        descriptor.name.as_deref().unwrap_or("(none)")
    );
    if let Some(title) = &descriptor.title {
        println!("title:       {title}");
    }
    println!(
        "description: {}",
        descriptor.description.as_deref().unwrap_or("")
    );
    println!(
        "homepage:    {}",
        descriptor.homepage.as_deref().unwrap_or("")
    );
    if let Some(bugs) = descriptor.bugs.as_ref().and_then(|b| b.url.as_deref()) {
        println!("bugs:        {bugs}");
    }
    println!("resources:   {}", descriptor.resources.len());
    for resource in &descriptor.resources {
        let location = resource
            .url
            .as_deref()
            .or(resource.path.as_deref())
            .unwrap_or("(no location)");
        println!(
            "  - {}  {location}",
            resource.name.as_deref().unwrap_or("(unnamed)")
        );
    }
}
