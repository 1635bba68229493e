use sqlx::PgConnection;

use crate::{
    pkg::internal::adaptors::content::spec::{SITE_CONTENT_ID, SiteContent},
    prelude::Result,
};

pub struct ContentMutator<'a> {
    conn: &'a mut PgConnection,
}

impl<'a> ContentMutator<'a> {
    pub fn new(conn: &'a mut PgConnection) -> Self {
        ContentMutator { conn }
    }

    /// Writes the whole record under the singleton key.
    pub async fn upsert(&mut self, content: &SiteContent) -> Result<SiteContent> {
        let row = sqlx::query_as::<_, SiteContent>(
            r#"
            INSERT INTO site_content (
                id, main_title, main_subtitle, search_title, search_placeholder,
                location_placeholder, apply_button_text, about_title, about_content,
                contact_title, contact_name_label, contact_email_label,
                contact_message_label, contact_submit_button
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            ON CONFLICT (id) DO UPDATE SET
                main_title = EXCLUDED.main_title,
                main_subtitle = EXCLUDED.main_subtitle,
                search_title = EXCLUDED.search_title,
                search_placeholder = EXCLUDED.search_placeholder,
                location_placeholder = EXCLUDED.location_placeholder,
                apply_button_text = EXCLUDED.apply_button_text,
                about_title = EXCLUDED.about_title,
                about_content = EXCLUDED.about_content,
                contact_title = EXCLUDED.contact_title,
                contact_name_label = EXCLUDED.contact_name_label,
                contact_email_label = EXCLUDED.contact_email_label,
                contact_message_label = EXCLUDED.contact_message_label,
                contact_submit_button = EXCLUDED.contact_submit_button
            RETURNING main_title, main_subtitle, search_title, search_placeholder,
                location_placeholder, apply_button_text, about_title, about_content,
                contact_title, contact_name_label, contact_email_label,
                contact_message_label, contact_submit_button
            "#,
        )
        .bind(SITE_CONTENT_ID)
        .bind(&content.main_title)
        .bind(&content.main_subtitle)
        .bind(&content.search_title)
        .bind(&content.search_placeholder)
        .bind(&content.location_placeholder)
        .bind(&content.apply_button_text)
        .bind(&content.about_title)
        .bind(&content.about_content)
        .bind(&content.contact_title)
        .bind(&content.contact_name_label)
        .bind(&content.contact_email_label)
        .bind(&content.contact_message_label)
        .bind(&content.contact_submit_button)
        .fetch_one(&mut *self.conn)
        .await?;
        Ok(row)
    }
}
