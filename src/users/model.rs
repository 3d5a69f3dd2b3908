use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::admin::{NewsItem, TriviaItem};
use crate::serde::{deserialize_null_default, empty_string_as_none};

/// One entry of the personalized feed. News and trivia are interleaved;
/// trivia entries carry a `type` discriminator, news entries don't.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeedItem {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub heading: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub sub_heading: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub small_content: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub large_content: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub topics: Vec<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub images: Vec<String>,
    #[serde(rename = "type", default, deserialize_with = "empty_string_as_none")]
    pub item_type: Option<String>,
}

impl FeedItem {
    /// Feed entries without a `type` discriminator are news articles.
    pub fn is_news(&self) -> bool {
        self.item_type.is_none()
    }
}

#[derive(Deserialize, Debug)]
pub struct Feed {
    #[serde(default)]
    pub success: bool,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub feed: Vec<FeedItem>,
}

/// Everything published under a single topic.
#[derive(Deserialize, Debug)]
pub struct TopicContent {
    #[serde(default)]
    pub success: bool,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub news: Vec<NewsItem>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub trivia: Vec<TriviaItem>,
}

/// A partial profile edit; unset fields are left untouched server-side.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school_name: Option<String>,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn feed_splits_news_from_trivia() {
        let feed: Feed = serde_json::from_str(
            r#"{"success":true,"feed":[
                {"_id":"1","heading":"Budget day","date":"2025-02-01"},
                {"_id":"2","heading":"Space deck","type":"trivia"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(feed.feed.len(), 2);
        assert!(feed.feed[0].is_news());
        assert!(!feed.feed[1].is_news());
    }

    #[test]
    fn profile_update_skips_unset_fields() {
        let update = ProfileUpdate {
            name: Some("Asha".to_string()),
            ..Default::default()
        };
        let raw = serde_json::to_value(&update).unwrap();
        assert_eq!(raw, serde_json::json!({ "name": "Asha" }));
    }
}
