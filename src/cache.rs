//! A per-run memo of fetched image bytes, keyed by locator. A run touches at
//! most N distinct locators, so there is no eviction.

use std::collections::HashMap;
use std::rc::Rc;

use crate::error::Result;

/// All fetched resources are treated as images; the source format carries no
/// other media.
pub const IMAGE_CONTENT_TYPE: &str = "image/png";

pub trait Fetcher {
    fn fetch(&self, locator: &str) -> Result<Vec<u8>>;
}

#[derive(Debug, PartialEq)]
pub struct Resource {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
}

pub struct ResourceCache<'a> {
    fetcher: &'a dyn Fetcher,
    entries: HashMap<String, Rc<Resource>>,
}

impl<'a> ResourceCache<'a> {
    pub fn new(fetcher: &'a dyn Fetcher) -> Self {
        ResourceCache {
            fetcher,
            entries: HashMap::new(),
        }
    }

    pub fn get(&mut self, locator: &str) -> Result<Rc<Resource>> {
        if let Some(resource) = self.entries.get(locator) {
            return Ok(resource.clone());
        }

        let bytes = self.fetcher.fetch(locator)?;
        let resource = Rc::new(Resource {
            bytes,
            content_type: IMAGE_CONTENT_TYPE,
        });
        self.entries.insert(locator.to_string(), resource.clone());
        Ok(resource)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct CountingFetcher {
        calls: RefCell<Vec<String>>,
    }

    impl Fetcher for CountingFetcher {
        fn fetch(&self, locator: &str) -> Result<Vec<u8>> {
            self.calls.borrow_mut().push(locator.to_string());
            Ok(locator.as_bytes().to_vec())
        }
    }

    #[test]
    fn second_get_does_not_fetch_again() {
        let fetcher = CountingFetcher {
            calls: RefCell::new(Vec::new()),
        };
        let mut cache = ResourceCache::new(&fetcher);

        let first = cache.get("http://x/a.png").unwrap();
        let second = cache.get("http://x/a.png").unwrap();

        assert_eq!(first, second);
        assert_eq!(fetcher.calls.borrow().len(), 1);
    }

    #[test]
    fn distinct_locators_fetch_separately() {
        let fetcher = CountingFetcher {
            calls: RefCell::new(Vec::new()),
        };
        let mut cache = ResourceCache::new(&fetcher);

        cache.get("http://x/a.png").unwrap();
        cache.get("http://x/b.png").unwrap();

        assert_eq!(
            *fetcher.calls.borrow(),
            vec!["http://x/a.png", "http://x/b.png"]
        );
    }

    #[test]
    fn resources_are_tagged_as_images() {
        let fetcher = CountingFetcher {
            calls: RefCell::new(Vec::new()),
        };
        let mut cache = ResourceCache::new(&fetcher);
        let resource = cache.get("http://x/a.png").unwrap();
        assert_eq!(resource.content_type, IMAGE_CONTENT_TYPE);
    }
}
