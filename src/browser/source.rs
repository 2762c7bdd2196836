use crate::{browser::session::BrowserSession,
            error::{Result, ScrapeError}};
use std::{collections::HashMap, path::PathBuf};

/// Anything that can turn a URL into a rendered HTML document
pub trait PageSource {
    fn fetch_html(&self, url: &str) -> Result<String>;
}

impl PageSource for BrowserSession {
    fn fetch_html(&self, url: &str) -> Result<String> {
        BrowserSession::fetch_html(self, url)
    }
}

/// Offline page source backed by in-memory documents and, optionally, a directory of saved pages.
///
/// A URL `https://host/ru/champions/builds/kindred` resolves to `<root>/ru/champions/builds/kindred.html`.
#[derive(Debug, Default, Clone)]
pub struct StaticPages {
    pages: HashMap<String, String>,
    root: Option<PathBuf>,
}

impl StaticPages {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve pages saved under `root`
    pub fn from_dir(root: impl Into<PathBuf>) -> Self {
        Self { pages: HashMap::new(), root: Some(root.into()) }
    }

    /// Builder method: register a document for a URL
    pub fn with_page(mut self, url: impl Into<String>, html: impl Into<String>) -> Self {
        self.insert(url, html);
        self
    }

    pub fn insert(&mut self, url: impl Into<String>, html: impl Into<String>) {
        self.pages.insert(url.into(), html.into());
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    fn file_for(&self, url: &str) -> Option<PathBuf> {
        let root = self.root.as_ref()?;
        let segments: Vec<&str> = url_path(url).split('/').filter(|s| !s.is_empty()).collect();
        if segments.is_empty() {
            return Some(root.join("index.html"));
        }
        // Only plain names map onto files below the root
        if segments.iter().any(|s| *s == "." || *s == ".." || s.contains('\\') || s.contains(':')) {
            log::warn!("Refusing to map {} outside {}", url, root.display());
            return None;
        }

        let (last, dirs) = segments.split_last()?;
        let mut file: PathBuf = dirs.iter().fold(root.clone(), |path, dir| path.join(dir));
        file.push(format!("{}.html", last));
        Some(file)
    }
}

impl PageSource for StaticPages {
    fn fetch_html(&self, url: &str) -> Result<String> {
        if let Some(html) = self.pages.get(url) {
            log::debug!("Serving {} from memory", url);
            return Ok(html.clone());
        }

        match self.file_for(url) {
            Some(file) if file.is_file() => {
                log::debug!("Serving {} from {}", url, file.display());
                Ok(std::fs::read_to_string(file)?)
            }
            _ => Err(ScrapeError::PageNotFound(url.to_string())),
        }
    }
}

/// Path component of an absolute URL, without query or fragment
fn url_path(url: &str) -> &str {
    let rest = match url.find("://") {
        Some(pos) => &url[pos + 3..],
        None => url,
    };
    let path = match rest.find('/') {
        Some(pos) => &rest[pos..],
        None => "",
    };
    let end = path.find(['?', '#']).unwrap_or(path.len());
    &path[..end]
}
