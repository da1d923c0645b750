//! In-memory content store backing the site and its admin dashboard.
//!
//! All state lives for the lifetime of the process. Each start re-runs the
//! seed routine, so admin edits do not survive a restart.

pub mod fixtures;
pub mod models;
pub mod seed;
pub mod table;

use chrono::Utc;
use dashmap::DashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use models::{Belief, ContactForm, ContactSubmission, ContentBlock, Meeting};
use table::Table;

/// The single store instance shared by every handler.
#[derive(Default)]
pub struct ContentStore {
    pub content: Table<ContentBlock>,
    pub beliefs: Table<Belief>,
    pub meetings: Table<Meeting>,
    pub contacts: ContactLog,
}

impl ContentStore {
    /// A store with no rows at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A store populated with the default beliefs, meetings and page copy.
    pub fn seeded() -> Self {
        let store = Self::empty();
        seed::seed_defaults(&store);
        store
    }

    /// Active content blocks tagged with `kind`, in display order.
    pub fn content_by_type(&self, kind: &str) -> Vec<ContentBlock> {
        self.content
            .filter(|block| block.is_active && block.kind == kind)
    }
}

/// Append-only sink for contact form submissions.
pub struct ContactLog {
    submissions: DashMap<i64, ContactSubmission>,
    next_id: AtomicI64,
}

impl Default for ContactLog {
    fn default() -> Self {
        Self {
            submissions: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }
}

impl ContactLog {
    pub fn record(&self, form: ContactForm) -> ContactSubmission {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let submission = ContactSubmission {
            id,
            name: form.name,
            email: form.email,
            // The form sends "" when the optional phone box is left blank
            phone: form.phone.filter(|p| !p.trim().is_empty()),
            message: form.message,
            created_at: Utc::now(),
        };
        self.submissions.insert(id, submission.clone());
        submission
    }

    pub fn len(&self) -> usize {
        self.submissions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.submissions.is_empty()
    }
}
