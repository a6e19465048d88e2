//! Resolve command - print deployment-rooted asset paths

use emergence_core::Config;
use emergence_site::PathResolver;

/// Resolve each path against the resolver's base path.
pub fn resolve_all(resolver: &PathResolver, paths: &[String]) -> Vec<String> {
    paths
        .iter()
        .map(|path| resolver.resolve(Some(path.as_str())))
        .collect()
}

/// Run the resolve command.
///
/// Prints one resolved path per line; an empty input prints an empty line.
pub fn run(config: &Config, paths: &[String]) {
    let resolver = PathResolver::from_config(&config.site);
    tracing::info!(base_path = resolver.base_path(), count = paths.len(), "Resolving asset paths");

    for resolved in resolve_all(&resolver, paths) {
        println!("{resolved}");
    }
}
