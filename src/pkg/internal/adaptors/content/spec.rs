use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Primary key of the only `site_content` row.
pub const SITE_CONTENT_ID: i32 = 1;

/// Editable copy shown across the public pages.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq)]
pub struct SiteContent {
    pub main_title: String,
    pub main_subtitle: String,
    pub search_title: String,
    pub search_placeholder: String,
    pub location_placeholder: String,
    pub apply_button_text: String,
    pub about_title: String,
    pub about_content: Vec<String>,
    pub contact_title: String,
    pub contact_name_label: String,
    pub contact_email_label: String,
    pub contact_message_label: String,
    pub contact_submit_button: String,
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            main_title: "מצא את המשרה המושלמת".into(),
            main_subtitle: "חיפוש משרות פשוט ויעיל".into(),
            search_title: "חיפוש משרות".into(),
            search_placeholder: "חיפוש לפי מילות מפתח...".into(),
            location_placeholder: "מיקום...".into(),
            apply_button_text: "הגש מועמדות".into(),
            about_title: "אודות האתר".into(),
            about_content: vec![
                "אתר זה נוצר כדי לסייע למגייסים למצוא את הפרילנסרים המתאימים ביותר לצרכים שלהם.".into(),
                "אנו מאמינים בשילוב מושלם בין מגייסים לפרילנסרים, ומספקים פלטפורמה נוחה ויעילה לחיבור בין הצדדים.".into(),
                "האתר מציע מגוון רחב של משרות בתחומים שונים, ומאפשר חיפוש מתקדם לפי קטגוריות ומיקום.".into(),
            ],
            contact_title: "צור קשר".into(),
            contact_name_label: "שם מלא".into(),
            contact_email_label: "אימייל".into(),
            contact_message_label: "הודעה".into(),
            contact_submit_button: "שלח הודעה".into(),
        }
    }
}

/// The single-line fields of [`SiteContent`]. The about paragraphs are edited
/// through their own operations.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ContentField {
    MainTitle,
    MainSubtitle,
    SearchTitle,
    SearchPlaceholder,
    LocationPlaceholder,
    ApplyButtonText,
    AboutTitle,
    ContactTitle,
    ContactNameLabel,
    ContactEmailLabel,
    ContactMessageLabel,
    ContactSubmitButton,
}

impl ContentField {
    pub const ALL: [ContentField; 12] = [
        ContentField::MainTitle,
        ContentField::MainSubtitle,
        ContentField::SearchTitle,
        ContentField::SearchPlaceholder,
        ContentField::LocationPlaceholder,
        ContentField::ApplyButtonText,
        ContentField::AboutTitle,
        ContentField::ContactTitle,
        ContentField::ContactNameLabel,
        ContentField::ContactEmailLabel,
        ContentField::ContactMessageLabel,
        ContentField::ContactSubmitButton,
    ];

    /// Form key, identical to the column name.
    pub fn key(self) -> &'static str {
        match self {
            ContentField::MainTitle => "main_title",
            ContentField::MainSubtitle => "main_subtitle",
            ContentField::SearchTitle => "search_title",
            ContentField::SearchPlaceholder => "search_placeholder",
            ContentField::LocationPlaceholder => "location_placeholder",
            ContentField::ApplyButtonText => "apply_button_text",
            ContentField::AboutTitle => "about_title",
            ContentField::ContactTitle => "contact_title",
            ContentField::ContactNameLabel => "contact_name_label",
            ContentField::ContactEmailLabel => "contact_email_label",
            ContentField::ContactMessageLabel => "contact_message_label",
            ContentField::ContactSubmitButton => "contact_submit_button",
        }
    }

    /// Admin form label.
    pub fn label(self) -> &'static str {
        match self {
            ContentField::MainTitle => "כותרת ראשית",
            ContentField::MainSubtitle => "כותרת משנה",
            ContentField::SearchTitle => "כותרת חיפוש",
            ContentField::SearchPlaceholder => "טקסט שדה חיפוש",
            ContentField::LocationPlaceholder => "טקסט שדה מיקום",
            ContentField::ApplyButtonText => "טקסט כפתור הגשה",
            ContentField::AboutTitle => "כותרת אודות",
            ContentField::ContactTitle => "כותרת צור קשר",
            ContentField::ContactNameLabel => "תגית שם",
            ContentField::ContactEmailLabel => "תגית אימייל",
            ContentField::ContactMessageLabel => "תגית הודעה",
            ContentField::ContactSubmitButton => "טקסט כפתור שליחה",
        }
    }
}

impl SiteContent {
    pub fn get(&self, field: ContentField) -> &str {
        match field {
            ContentField::MainTitle => &self.main_title,
            ContentField::MainSubtitle => &self.main_subtitle,
            ContentField::SearchTitle => &self.search_title,
            ContentField::SearchPlaceholder => &self.search_placeholder,
            ContentField::LocationPlaceholder => &self.location_placeholder,
            ContentField::ApplyButtonText => &self.apply_button_text,
            ContentField::AboutTitle => &self.about_title,
            ContentField::ContactTitle => &self.contact_title,
            ContentField::ContactNameLabel => &self.contact_name_label,
            ContentField::ContactEmailLabel => &self.contact_email_label,
            ContentField::ContactMessageLabel => &self.contact_message_label,
            ContentField::ContactSubmitButton => &self.contact_submit_button,
        }
    }

    pub fn set(&mut self, field: ContentField, value: String) {
        let slot = match field {
            ContentField::MainTitle => &mut self.main_title,
            ContentField::MainSubtitle => &mut self.main_subtitle,
            ContentField::SearchTitle => &mut self.search_title,
            ContentField::SearchPlaceholder => &mut self.search_placeholder,
            ContentField::LocationPlaceholder => &mut self.location_placeholder,
            ContentField::ApplyButtonText => &mut self.apply_button_text,
            ContentField::AboutTitle => &mut self.about_title,
            ContentField::ContactTitle => &mut self.contact_title,
            ContentField::ContactNameLabel => &mut self.contact_name_label,
            ContentField::ContactEmailLabel => &mut self.contact_email_label,
            ContentField::ContactMessageLabel => &mut self.contact_message_label,
            ContentField::ContactSubmitButton => &mut self.contact_submit_button,
        };
        *slot = value;
    }
}
