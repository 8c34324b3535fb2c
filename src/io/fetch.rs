//! Blocking image retrieval. Nothing here times out; a stalled fetch stalls
//! the run, matching the strictly sequential execution model.

use std::fs;

use crate::cache::Fetcher;
use crate::error::{Error, Result};

pub struct BlockingFetcher {
    client: reqwest::blocking::Client,
}

impl BlockingFetcher {
    pub fn new() -> BlockingFetcher {
        BlockingFetcher {
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl Default for BlockingFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetcher for BlockingFetcher {
    /// `http(s)` locators go over the network; anything else is read as a
    /// local file path.
    fn fetch(&self, locator: &str) -> Result<Vec<u8>> {
        if locator.starts_with("http://") || locator.starts_with("https://") {
            let response = self
                .client
                .get(locator)
                .send()
                .and_then(|r| r.error_for_status())
                .map_err(|e| Error::collaborator(locator, e))?;
            let bytes = response.bytes().map_err(|e| Error::collaborator(locator, e))?;
            Ok(bytes.to_vec())
        } else {
            fs::read(locator).map_err(|e| Error::collaborator(locator, e))
        }
    }
}
