use serde::Serialize;
use uuid::Uuid;

use crate::{
    pkg::internal::{adaptors::jobs::spec::Job, listing},
    prelude::Result,
};

/// Visitor-side listing state: the two search boxes, the page, and the job
/// opened in the detail overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicBrowser {
    search: String,
    location: String,
    page: usize,
    selected: Option<Uuid>,
}

impl Default for PublicBrowser {
    fn default() -> Self {
        PublicBrowser {
            search: String::new(),
            location: String::new(),
            page: 1,
            selected: None,
        }
    }
}

/// What one render of the listing shows.
#[derive(Debug, Clone, Serialize)]
pub struct BrowserPage {
    pub jobs: Vec<Job>,
    pub page: usize,
    pub total_pages: usize,
    pub total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<Job>,
}

impl BrowserPage {
    pub fn prev_page(&self) -> Option<usize> {
        (self.page > 1).then(|| self.page - 1)
    }

    pub fn next_page(&self) -> Option<usize> {
        (self.page < self.total_pages).then(|| self.page + 1)
    }
}

impl PublicBrowser {
    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn selected(&self) -> Option<Uuid> {
        self.selected
    }

    /// Changing either filter starts over at page 1.
    pub fn set_search(&mut self, search: &str) {
        if self.search != search {
            self.search = search.to_string();
            self.page = 1;
        }
    }

    pub fn set_location(&mut self, location: &str) {
        if self.location != location {
            self.location = location.to_string();
            self.page = 1;
        }
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn select(&mut self, id: Option<Uuid>) {
        self.selected = id;
    }

    /// Filters and pages `jobs`. A page beyond the end shows the last page.
    pub fn view(&self, jobs: &[Job], page_size: usize) -> Result<BrowserPage> {
        let filtered = listing::filter(jobs, &self.search, &self.location);
        let total_pages = listing::total_pages(filtered.len(), page_size);
        let page = listing::clamp_page(self.page, total_pages);
        let slice = listing::paginate(&filtered, page_size, page)?;
        let selected = self
            .selected
            .and_then(|id| jobs.iter().find(|j| j.id == id))
            .cloned();
        Ok(BrowserPage {
            jobs: slice.iter().map(|j| (*j).clone()).collect(),
            page,
            total_pages,
            total: filtered.len(),
            selected,
        })
    }
}
