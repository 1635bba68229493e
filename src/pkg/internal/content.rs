use std::sync::Arc;

use crate::{
    pkg::internal::{
        adaptors::content::spec::{ContentField, SiteContent},
        gateway::ContentGateway,
    },
    prelude::{BoardError, Result},
};

/// Where the copy currently held in memory came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentSource {
    /// The stored record.
    Remote,
    /// No record is stored yet, so the built-in copy is authoritative.
    Default,
    /// The record could not be read (or has not been read yet). The built-in
    /// copy is only a placeholder and must never be written back.
    Fallback,
}

/// In-memory copy of the `site_content` singleton.
///
/// Field edits are written through immediately as a whole-record upsert. When
/// the upsert fails the edit is rolled back, so memory always matches the last
/// record the backend acknowledged plus any unsaved paragraph edits. While the
/// copy is a [`ContentSource::Fallback`] placeholder every read retries the
/// fetch and writes are refused.
pub struct SiteContentState {
    content: SiteContent,
    source: ContentSource,
    gateway: Arc<dyn ContentGateway>,
}

impl SiteContentState {
    pub fn new(gateway: Arc<dyn ContentGateway>) -> Self {
        SiteContentState {
            content: SiteContent::default(),
            source: ContentSource::Fallback,
            gateway,
        }
    }

    pub fn content(&self) -> &SiteContent {
        &self.content
    }

    pub fn source(&self) -> ContentSource {
        self.source
    }

    /// Falls back to the built-in copy when the record is missing or
    /// unreadable.
    pub async fn load(&mut self) -> ContentSource {
        match self.gateway.fetch().await {
            Ok(Some(content)) => {
                self.content = content;
                self.source = ContentSource::Remote;
            }
            Ok(None) => {
                tracing::info!("no site content stored, using defaults");
                self.content = SiteContent::default();
                self.source = ContentSource::Default;
            }
            Err(e) => {
                tracing::warn!("could not load site content, using defaults: {}", &e);
                self.content = SiteContent::default();
                self.source = ContentSource::Fallback;
            }
        }
        self.source
    }

    /// Retries the fetch while only the placeholder copy is held.
    pub async fn refresh(&mut self) -> ContentSource {
        if self.source == ContentSource::Fallback {
            return self.load().await;
        }
        self.source
    }

    /// Refuses to upsert over a record that may exist but could not be read.
    async fn writable(&mut self) -> Result<()> {
        if self.refresh().await == ContentSource::Fallback {
            return Err(BoardError::Gateway(
                "site content is unavailable, refusing to overwrite it with defaults".into(),
            ));
        }
        Ok(())
    }

    pub async fn set_field(&mut self, field: ContentField, value: String) -> Result<()> {
        self.writable().await.inspect_err(|e| {
            tracing::warn!("error updating site content field {}: {}", field.key(), e);
        })?;
        let previous = self.content.clone();
        self.content.set(field, value);
        if let Err(e) = self.persist().await {
            tracing::warn!("error updating site content field {}: {}", field.key(), &e);
            self.content = previous;
            return Err(e);
        }
        Ok(())
    }

    /// Local only until the next field edit or [`SiteContentState::save`].
    pub fn append_about_paragraph(&mut self) {
        self.content.about_content.push(String::new());
    }

    /// Local only until the next field edit or [`SiteContentState::save`].
    pub fn edit_about_paragraph(&mut self, index: usize, text: String) -> Result<()> {
        let paragraph = self
            .content
            .about_content
            .get_mut(index)
            .ok_or(BoardError::ParagraphNotFound(index))?;
        *paragraph = text;
        Ok(())
    }

    pub async fn save(&mut self) -> Result<()> {
        self.writable().await?;
        self.persist().await.inspect_err(|e| {
            tracing::warn!("error saving site content: {}", e);
        })
    }

    async fn persist(&mut self) -> Result<()> {
        let canonical = self.gateway.upsert(&self.content).await?;
        self.content = canonical;
        self.source = ContentSource::Remote;
        tracing::debug!("site content stored");
        Ok(())
    }
}
