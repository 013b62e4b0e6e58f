// Scripted PageFetcher for tests: serves canned pages by URL and records
// every URL it was asked for, in order.

use std::collections::HashMap;
use std::sync::Mutex;

use futures::future::BoxFuture;
use reqwest::StatusCode;
use url::Url;

use super::{FetchError, FetchedPage, PageFetcher};

#[derive(Default)]
pub struct ScriptedFetcher {
    pages: HashMap<String, Result<FetchedPage, FetchError>>,
    requests: Mutex<Vec<String>>,
}

impl ScriptedFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, url: &str, status: StatusCode, body: &str) -> Self {
        self.pages.insert(
            url.to_string(),
            Ok(FetchedPage {
                status,
                body: body.to_string(),
            }),
        );
        self
    }

    pub fn ok(self, url: &str, body: &str) -> Self {
        self.page(url, StatusCode::OK, body)
    }

    pub fn failing(mut self, url: &str, error: FetchError) -> Self {
        self.pages.insert(url.to_string(), Err(error));
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl PageFetcher for ScriptedFetcher {
    fn get<'a>(&'a self, url: &'a Url) -> BoxFuture<'a, Result<FetchedPage, FetchError>> {
        self.requests.lock().unwrap().push(url.to_string());

        // Unscripted URLs behave like a missing page
        let response = self.pages.get(url.as_str()).cloned().unwrap_or(Ok(FetchedPage {
            status: StatusCode::NOT_FOUND,
            body: String::new(),
        }));

        Box::pin(async move { response })
    }
}
