use crate::api::gateway::LibraryClient;

/// Trims whitespace and trailing slashes; `None` for an empty URL.
pub fn normalize_base_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Active server base URL plus whether the top-level listing last succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerEndpoint {
    base_url: String,
    reachable: bool,
}

impl ServerEndpoint {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: normalize_base_url(base_url).unwrap_or_default(),
            reachable: true,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn is_reachable(&self) -> bool {
        self.reachable
    }

    pub fn client(&self) -> LibraryClient {
        LibraryClient::new(self.base_url.clone())
    }

    /// Returns false and leaves the endpoint untouched when `raw` is empty.
    /// Reachability is only updated by the next listing result.
    pub fn set_base_url(&mut self, raw: &str) -> bool {
        match normalize_base_url(raw) {
            Some(url) => {
                self.base_url = url;
                true
            }
            None => false,
        }
    }

    pub fn record_listing(&mut self, succeeded: bool) {
        self.reachable = succeeded;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalized() {
        assert_eq!(
            normalize_base_url("  http://new-host:5280/ "),
            Some("http://new-host:5280".to_string())
        );
        assert_eq!(normalize_base_url("   "), None);
    }

    #[test]
    fn empty_url_is_rejected() {
        let mut endpoint = ServerEndpoint::new("http://old:5279");
        assert!(!endpoint.set_base_url(""));
        assert_eq!(endpoint.base_url(), "http://old:5279");
    }

    #[test]
    fn reachability_follows_listing_results() {
        let mut endpoint = ServerEndpoint::new("http://old:5279");
        assert!(endpoint.is_reachable());
        endpoint.record_listing(false);
        assert!(!endpoint.is_reachable());
        assert!(endpoint.set_base_url("http://new:5280"));
        assert!(!endpoint.is_reachable());
        endpoint.record_listing(true);
        assert!(endpoint.is_reachable());
        assert_eq!(endpoint.client().base_url(), "http://new:5280");
    }
}
