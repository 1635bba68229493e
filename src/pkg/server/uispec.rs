use askama::Template;

use crate::pkg::internal::{
    adaptors::{
        content::spec::{ContentField, SiteContent},
        jobs::spec::{Job, JobDraft},
    },
    auth::Notice,
    browser::BrowserPage,
};

#[derive(Template)]
#[template(path = "home.html")]
pub struct Home<'a> {
    pub content: &'a SiteContent,
    pub view: &'a BrowserPage,
    pub search: &'a str,
    pub location: &'a str,
}

#[derive(Template)]
#[template(path = "job.html")]
pub struct JobDetail<'a> {
    pub content: &'a SiteContent,
    pub job: &'a Job,
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFound<'a> {
    pub message: &'a str,
}

/// Fragment returned for any failed request.
#[derive(Template)]
#[template(path = "error_banner.html")]
pub struct ErrorBanner<'a> {
    pub message: &'a str,
}

#[derive(Template)]
#[template(path = "login.html")]
pub struct Login<'a> {
    pub email: &'a str,
    pub error: Option<&'a str>,
}

pub struct ContentRow {
    pub key: &'static str,
    pub label: &'static str,
    pub value: String,
}

impl ContentRow {
    pub fn rows(content: &SiteContent) -> Vec<ContentRow> {
        ContentField::ALL
            .into_iter()
            .map(|field| ContentRow {
                key: field.key(),
                label: field.label(),
                value: content.get(field).to_string(),
            })
            .collect()
    }
}

#[derive(Template)]
#[template(path = "admin.html")]
pub struct Admin<'a> {
    pub identity: &'a str,
    pub content_tab: bool,
    pub notice: Option<Notice>,
    pub jobs: &'a [Job],
    pub draft: &'a JobDraft,
    pub editing: bool,
    pub rows: Vec<ContentRow>,
    pub paragraphs: &'a [String],
}
