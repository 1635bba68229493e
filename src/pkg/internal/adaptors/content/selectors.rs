use sqlx::PgConnection;

use crate::{
    pkg::internal::adaptors::content::spec::{SITE_CONTENT_ID, SiteContent},
    prelude::Result,
};

pub struct ContentSelector<'a> {
    conn: &'a mut PgConnection,
}

impl<'a> ContentSelector<'a> {
    pub fn new(conn: &'a mut PgConnection) -> Self {
        ContentSelector { conn }
    }

    pub async fn get(&mut self) -> Result<Option<SiteContent>> {
        let row = sqlx::query_as::<_, SiteContent>(
            "SELECT main_title, main_subtitle, search_title, search_placeholder,
                    location_placeholder, apply_button_text, about_title, about_content,
                    contact_title, contact_name_label, contact_email_label,
                    contact_message_label, contact_submit_button
             FROM site_content WHERE id = $1",
        )
        .bind(SITE_CONTENT_ID)
        .fetch_optional(&mut *self.conn)
        .await?;
        Ok(row)
    }
}
