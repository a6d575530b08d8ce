// web_app/assets.rs - Files served from the site root
//
// The router ends in a wildcard route, so root-level files from the assets
// dir must be mounted on explicit paths before the Leptos routes.

/// Files copied from `public/` into the site root
pub const PUBLIC_FILES: &[&str] = &["robots.txt"];

/// (request path, file path) for every public file under `site_root`
pub fn public_file_routes(site_root: &str) -> Vec<(String, String)> {
    let root = site_root.trim_end_matches('/');
    PUBLIC_FILES
        .iter()
        .map(|file| (format!("/{file}"), format!("{root}/{file}")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_file_routes() {
        assert_eq!(
            public_file_routes("target/site/"),
            vec![("/robots.txt".to_string(), "target/site/robots.txt".to_string())]
        );
    }
}
