use crate::redir::Route;
use std::path::Path;

/// Routes served by the built-in map handler.
pub fn builtin_routes() -> Vec<Route> {
    [
        (
            "/urlshort-godoc",
            "https://godoc.org/github.com/gophercises/urlshort",
        ),
        ("/yaml-godoc", "https://godoc.org/gopkg.in/yaml.v2"),
    ]
    .into_iter()
    .map(|(path, url)| Route {
        path: path.to_string(),
        url: url.to_string(),
    })
    .collect()
}

/// Substituted for the config file when it cannot be read.
pub const FALLBACK_YAML: &str = "\
- path: /urlshort
  url: https://github.com/gophercises/urlshort
- path: /urlshort-final
  url: https://github.com/gophercises/urlshort/tree/solution
";

/// Document decoded for the `json` table source.
pub const SAMPLE_JSON: &str = r#"[{
    "path": "/urlshort",
    "url": "https://github.com/gophercises/urlshort"
}, {
    "path": "/urlshort-final",
    "url": "https://github.com/gophercises/urlshort/tree/solution"
}]"#;

/// Reads the routes file, substituting [`FALLBACK_YAML`] if it is
/// missing, unreadable, or empty. Never fails.
pub async fn read_or_default(path: &Path) -> Vec<u8> {
    match tokio::fs::read(path).await {
        Ok(data) if !data.is_empty() => data,
        Ok(_) => {
            log::warn!("{} -> [empty file] using built-in routes", path.display());
            FALLBACK_YAML.into()
        }
        Err(e) => {
            log::warn!(
                "{} -> [read error] {} : using built-in routes",
                path.display(),
                e
            );
            FALLBACK_YAML.into()
        }
    }
}
