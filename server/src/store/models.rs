//! Entity, insert and patch shapes for everything the store holds.
//!
//! Insert and patch shapes double as request schemas: they derive
//! `Validate` and the API layer checks them before the store ever sees them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::table::Record;

/// Known page sections a content block can describe.
/// The wire format keeps `type` as a free string; these are the values the site renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Hero,
    PastorMessage,
    ScriptureBanner,
    BibleImage,
    Footer,
    Contact,
}

impl ContentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ContentKind::Hero => "hero",
            ContentKind::PastorMessage => "pastor_message",
            ContentKind::ScriptureBanner => "scripture_banner",
            ContentKind::BibleImage => "bible_image",
            ContentKind::Footer => "footer",
            ContentKind::Contact => "contact",
        }
    }
}

// --- Content blocks ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentBlock {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub content: Option<String>,
    pub image_url: Option<String>,
    pub button_text: Option<String>,
    pub button_link: Option<String>,
    pub sort_order: i64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InsertContentBlock {
    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "Type is required"))]
    pub kind: String,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub content: Option<String>,
    pub image_url: Option<String>,
    pub button_text: Option<String>,
    pub button_link: Option<String>,
    pub sort_order: Option<i64>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContentBlockPatch {
    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "Type cannot be empty"))]
    pub kind: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub content: Option<String>,
    pub image_url: Option<String>,
    pub button_text: Option<String>,
    pub button_link: Option<String>,
    pub sort_order: Option<i64>,
    pub is_active: Option<bool>,
}

impl Record for ContentBlock {
    type Insert = InsertContentBlock;
    type Patch = ContentBlockPatch;

    const KIND: &'static str = "Content";

    fn id(&self) -> i64 {
        self.id
    }

    fn sort_order(&self) -> i64 {
        self.sort_order
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn from_insert(id: i64, insert: InsertContentBlock, now: DateTime<Utc>) -> Self {
        Self {
            id,
            kind: insert.kind,
            title: insert.title,
            subtitle: insert.subtitle,
            content: insert.content,
            image_url: insert.image_url,
            button_text: insert.button_text,
            button_link: insert.button_link,
            sort_order: insert.sort_order.unwrap_or(0),
            is_active: insert.is_active.unwrap_or(true),
            created_at: now,
            updated_at: now,
        }
    }

    fn apply(&mut self, patch: ContentBlockPatch, now: DateTime<Utc>) {
        merge(&mut self.kind, patch.kind);
        merge_opt(&mut self.title, patch.title);
        merge_opt(&mut self.subtitle, patch.subtitle);
        merge_opt(&mut self.content, patch.content);
        merge_opt(&mut self.image_url, patch.image_url);
        merge_opt(&mut self.button_text, patch.button_text);
        merge_opt(&mut self.button_link, patch.button_link);
        merge(&mut self.sort_order, patch.sort_order);
        merge(&mut self.is_active, patch.is_active);
        self.updated_at = now;
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

// --- Beliefs ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Belief {
    pub id: i64,
    pub title: String,
    pub summary: String,
    pub content: String,
    pub scripture: String,
    pub sort_order: i64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InsertBelief {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Summary is required"))]
    pub summary: String,
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,
    #[validate(length(min = 1, message = "Scripture is required"))]
    pub scripture: String,
    pub sort_order: Option<i64>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BeliefPatch {
    #[validate(length(min = 1, message = "Title cannot be empty"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "Summary cannot be empty"))]
    pub summary: Option<String>,
    #[validate(length(min = 1, message = "Content cannot be empty"))]
    pub content: Option<String>,
    #[validate(length(min = 1, message = "Scripture cannot be empty"))]
    pub scripture: Option<String>,
    pub sort_order: Option<i64>,
    pub is_active: Option<bool>,
}

impl Record for Belief {
    type Insert = InsertBelief;
    type Patch = BeliefPatch;

    const KIND: &'static str = "Belief";

    fn id(&self) -> i64 {
        self.id
    }

    fn sort_order(&self) -> i64 {
        self.sort_order
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn from_insert(id: i64, insert: InsertBelief, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: insert.title,
            summary: insert.summary,
            content: insert.content,
            scripture: insert.scripture,
            sort_order: insert.sort_order.unwrap_or(0),
            is_active: insert.is_active.unwrap_or(true),
            created_at: now,
            updated_at: now,
        }
    }

    fn apply(&mut self, patch: BeliefPatch, now: DateTime<Utc>) {
        merge(&mut self.title, patch.title);
        merge(&mut self.summary, patch.summary);
        merge(&mut self.content, patch.content);
        merge(&mut self.scripture, patch.scripture);
        merge(&mut self.sort_order, patch.sort_order);
        merge(&mut self.is_active, patch.is_active);
        self.updated_at = now;
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

// --- Meetings ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    pub id: i64,
    pub title: String,
    /// Weekday name as shown on the site, e.g. "Sunday"
    pub day: String,
    /// Free-text range, e.g. "10:00 AM - 12:30 PM"
    pub time: String,
    pub location: Option<String>,
    pub description: Option<String>,
    pub sort_order: i64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InsertMeeting {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Day is required"))]
    pub day: String,
    #[validate(length(min = 1, message = "Time is required"))]
    pub time: String,
    pub location: Option<String>,
    pub description: Option<String>,
    pub sort_order: Option<i64>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MeetingPatch {
    #[validate(length(min = 1, message = "Title cannot be empty"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "Day cannot be empty"))]
    pub day: Option<String>,
    #[validate(length(min = 1, message = "Time cannot be empty"))]
    pub time: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub sort_order: Option<i64>,
    pub is_active: Option<bool>,
}

impl Record for Meeting {
    type Insert = InsertMeeting;
    type Patch = MeetingPatch;

    const KIND: &'static str = "Meeting";

    fn id(&self) -> i64 {
        self.id
    }

    fn sort_order(&self) -> i64 {
        self.sort_order
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn from_insert(id: i64, insert: InsertMeeting, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: insert.title,
            day: insert.day,
            time: insert.time,
            location: insert.location,
            description: insert.description,
            sort_order: insert.sort_order.unwrap_or(0),
            is_active: insert.is_active.unwrap_or(true),
            created_at: now,
            updated_at: now,
        }
    }

    fn apply(&mut self, patch: MeetingPatch, now: DateTime<Utc>) {
        merge(&mut self.title, patch.title);
        merge(&mut self.day, patch.day);
        merge(&mut self.time, patch.time);
        merge_opt(&mut self.location, patch.location);
        merge_opt(&mut self.description, patch.description);
        merge(&mut self.sort_order, patch.sort_order);
        merge(&mut self.is_active, patch.is_active);
        self.updated_at = now;
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

// --- Contact form ---

/// A message accepted from the public contact form. Write-only.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ContactForm {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[validate(length(min = 10, message = "Message must be at least 10 characters"))]
    pub message: String,
}

fn merge<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

// Optional columns only move from one value to another; a null in the patch
// means "not supplied", not "clear".
fn merge_opt<T>(slot: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *slot = value;
    }
}
