use super::fixtures::{BELIEFS, MEETINGS};
use super::models::{ContentKind, InsertBelief, InsertContentBlock, InsertMeeting};
use super::ContentStore;

/// Populate a freshly built store with the site's default copy.
/// Beliefs and meetings keep their fixture id as sort order.
pub fn seed_defaults(store: &ContentStore) {
    for fixture in BELIEFS {
        store.beliefs.create(InsertBelief {
            title: fixture.title.to_string(),
            summary: fixture.summary.to_string(),
            content: fixture.content.to_string(),
            scripture: fixture.scripture.to_string(),
            sort_order: Some(fixture.id),
            is_active: Some(true),
        });
    }

    for fixture in MEETINGS {
        store.meetings.create(InsertMeeting {
            title: fixture.title.to_string(),
            day: fixture.day.to_string(),
            time: fixture.time.to_string(),
            location: Some(fixture.location.to_string()),
            description: Some(fixture.description.to_string()),
            sort_order: Some(fixture.id),
            is_active: Some(true),
        });
    }

    for block in default_content_blocks() {
        store.content.create(block);
    }

    tracing::info!(
        beliefs = store.beliefs.len(),
        meetings = store.meetings.len(),
        content_blocks = store.content.len(),
        "Seeded default site content"
    );
}

fn default_content_blocks() -> Vec<InsertContentBlock> {
    vec![
        InsertContentBlock {
            kind: ContentKind::Hero.as_str().to_string(),
            title: Some("ALMIGHTY GOD WORSHIP CHURCH".to_string()),
            subtitle: Some("BIBLE COLLEGE JUNCTION, PUTHENCRUZ, ERNAKULAM DIST, KERALA".to_string()),
            content: Some("FOLLOW JESUS FOR PEACE AND ETERNAL LIFE".to_string()),
            image_url: Some("https://images.unsplash.com/photo-1510414842594-a61c69b5ae57".to_string()),
            button_text: Some("Join Our Worship".to_string()),
            button_link: Some("#meetings".to_string()),
            sort_order: Some(1),
            is_active: Some(true),
        },
        InsertContentBlock {
            kind: ContentKind::PastorMessage.as_str().to_string(),
            title: Some("Message From Our Pastor".to_string()),
            subtitle: Some("Rev. P.A. Thomas".to_string()),
            content: Some(
                "We believe in the gospel of Jesus Christ and its power to transform lives. \
                 We invite you to join us in worship and experience the love and grace of God."
                    .to_string(),
            ),
            image_url: Some("https://images.unsplash.com/photo-1594895976542-50ab4fe79efd".to_string()),
            sort_order: Some(1),
            is_active: Some(true),
            ..Default::default()
        },
        InsertContentBlock {
            kind: ContentKind::ScriptureBanner.as_str().to_string(),
            title: Some(String::new()),
            subtitle: Some("John 14:6".to_string()),
            content: Some(
                "Jesus said to him, \"I am the way, and the truth, and the life. \
                 No one comes to the Father except through me.\""
                    .to_string(),
            ),
            sort_order: Some(1),
            is_active: Some(true),
            ..Default::default()
        },
    ]
}
