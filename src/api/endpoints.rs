use reqwest::Url;

/// URL construction for the REST API, rooted at a configurable base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base_url: String,
}

impl Endpoints {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn pokemon_page(&self, offset: u32, limit: u32) -> String {
        format!("{}/pokemon?offset={}&limit={}", self.base_url, offset, limit)
    }

    pub fn pokemon(&self, name_or_id: &str) -> String {
        self.keyed("pokemon", name_or_id)
    }

    pub fn species(&self, id: u32) -> String {
        format!("{}/pokemon-species/{}", self.base_url, id)
    }

    pub fn characteristic(&self, id: u32) -> String {
        format!("{}/characteristic/{}", self.base_url, id)
    }

    pub fn evolution_chain(&self, id: &str) -> String {
        format!("{}/evolution-chain/{}", self.base_url, id)
    }

    pub fn types(&self) -> String {
        format!("{}/type", self.base_url)
    }

    pub fn type_members(&self, tag: &str) -> String {
        self.keyed("type", tag)
    }

    pub fn encounters(&self, id: u32) -> String {
        format!("{}/pokemon/{}/encounters", self.base_url, id)
    }

    /// `{base}/{collection}/{key}` with `key` percent-encoded as a single path
    /// segment, so user input cannot reach another resource or the query string.
    fn keyed(&self, collection: &str, key: &str) -> String {
        let Ok(mut url) = Url::parse(&self.base_url) else {
            return format!("{}/{}/{}", self.base_url, collection, key);
        };
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(collection).push(key);
        }
        url.to_string()
    }
}

/// Extracts the identifier from a resource locator: its last non-empty path
/// segment, so `.../pokemon-species/25/` yields `25`.
pub fn resource_id(url: &str) -> Option<&str> {
    url.split('/').rev().find(|segment| !segment.is_empty())
}
