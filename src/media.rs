//! Image reference resolution
//!
//! Listing records carry image references in several historical shapes:
//! absolute URLs, site-rooted paths, bare object-storage keys, and
//! Windows-style paths left over from the first content import. One resolver
//! turns any of them into a usable URL.

use crate::config::MediaConfig;

pub struct MediaResolver {
    base_url: Option<String>,
    placeholder: String,
    local_prefix: String,
}

impl MediaResolver {
    pub fn new(config: &MediaConfig) -> Self {
        Self {
            base_url: config
                .base_url
                .as_ref()
                .map(|u| u.trim_end_matches('/').to_string())
                .filter(|u| !u.is_empty()),
            placeholder: config.placeholder.clone(),
            local_prefix: config.local_prefix.trim_end_matches('/').to_string(),
        }
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Resolve one image reference to a displayable URL
    pub fn resolve(&self, reference: Option<&str>) -> String {
        let Some(path) = reference.filter(|p| !p.is_empty()) else {
            return self.placeholder.clone();
        };

        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }

        // Legacy Windows export paths collapse to the local image folder
        if path.contains('\\') || path.contains(':') {
            let file_name = path.rsplit('\\').next().unwrap_or(path);
            return format!("{}/{}", self.local_prefix, file_name);
        }

        if path.starts_with('/') {
            return path.to_string();
        }

        self.from_key(path)
    }

    /// Join a bare storage key onto the media base URL; without a configured
    /// base there is nothing to serve, so the placeholder stands in
    pub fn from_key(&self, key: &str) -> String {
        match &self.base_url {
            Some(base) => format!("{}/{}", base, key.trim_start_matches('/')),
            None => self.placeholder.clone(),
        }
    }

    /// First image of a listing, or the placeholder
    pub fn cover<'a, I>(&self, images: I) -> String
    where
        I: IntoIterator<Item = &'a String>,
    {
        self.resolve(images.into_iter().next().map(String::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver(base: Option<&str>) -> MediaResolver {
        MediaResolver::new(&MediaConfig {
            base_url: base.map(str::to_string),
            ..MediaConfig::default()
        })
    }

    #[test]
    fn test_missing_reference_yields_placeholder() {
        let media = resolver(Some("https://cdn.otd.ru"));
        assert_eq!(media.resolve(None), "/placeholder.jpg");
        assert_eq!(media.resolve(Some("")), "/placeholder.jpg");
    }

    #[test]
    fn test_absolute_urls_pass_through() {
        let media = resolver(Some("https://cdn.otd.ru"));
        assert_eq!(
            media.resolve(Some("https://elsewhere.ru/img.jpg")),
            "https://elsewhere.ru/img.jpg"
        );
        assert_eq!(
            media.resolve(Some("http://elsewhere.ru/img.jpg")),
            "http://elsewhere.ru/img.jpg"
        );
    }

    #[test]
    fn test_rooted_paths_pass_through() {
        let media = resolver(Some("https://cdn.otd.ru"));
        assert_eq!(media.resolve(Some("/rooms/lux.jpg")), "/rooms/lux.jpg");
    }

    #[test]
    fn test_windows_export_paths_collapse() {
        let media = resolver(Some("https://cdn.otd.ru"));
        assert_eq!(
            media.resolve(Some(r"C:\export\photos\room1.jpg")),
            "/rooms/room1.jpg"
        );
    }

    #[test]
    fn test_bare_key_joins_media_base() {
        let media = resolver(Some("https://cdn.otd.ru/"));
        assert_eq!(
            media.resolve(Some("rooms/lux/01.jpg")),
            "https://cdn.otd.ru/rooms/lux/01.jpg"
        );
    }

    #[test]
    fn test_bare_key_without_base_is_placeholder() {
        let media = resolver(None);
        assert_eq!(media.resolve(Some("rooms/lux/01.jpg")), "/placeholder.jpg");
    }

    #[test]
    fn test_cover_takes_first_image() {
        let media = resolver(Some("https://cdn.otd.ru"));
        let images = vec!["a.jpg".to_string(), "b.jpg".to_string()];
        let none: Vec<String> = Vec::new();
        assert_eq!(media.cover(&images), "https://cdn.otd.ru/a.jpg");
        assert_eq!(media.cover(&none), "/placeholder.jpg");
    }
}
