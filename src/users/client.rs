use serde::Serialize;
use tracing::instrument;

use crate::{auth::Status, error::Result, http, users::model::*};

/// Provides the signed-in user's surface: the personalized feed, topic
/// browsing, profile edits and topic subscriptions.
#[derive(Debug, Clone)]
pub struct Client {
    http_client: http::Client,
}

#[derive(Serialize)]
struct TopicsPayload<'a> {
    topics: &'a [String],
}

impl Client {
    pub(crate) fn new(http_client: http::Client) -> Self {
        Self { http_client }
    }

    /// The personalized feed: news and trivia for the user's topics,
    /// interleaved. See [`FeedItem::is_news`] to tell them apart.
    #[instrument(skip(self))]
    pub async fn feed(&self) -> Result<Feed> {
        self.http_client.get("/user/feed").await?.json().await
    }

    /// Everything published under one topic.
    #[instrument(skip(self))]
    pub async fn topic(&self, topic_name: &str) -> Result<TopicContent> {
        self.http_client
            .get(format!("/user/topic/{topic_name}"))
            .await?
            .json()
            .await
    }

    /// Apply a partial profile edit.
    #[instrument(skip(self, update))]
    pub async fn edit_profile(&self, user_id: &str, update: &ProfileUpdate) -> Result<Status> {
        self.http_client
            .put(format!("/user/editProfile/{user_id}"), update)
            .await?
            .json()
            .await
    }

    /// Set the user's initial topic subscriptions after sign-up.
    #[instrument(skip(self, topics))]
    pub async fn set_topics(&self, user_id: &str, topics: &[String]) -> Result<Status> {
        self.http_client
            .post(
                format!("/user/setTopicsFirst/{user_id}"),
                &TopicsPayload { topics },
            )
            .await?
            .json()
            .await
    }

    /// Subscribe to additional topics later on.
    #[instrument(skip(self, topics))]
    pub async fn add_topics(&self, user_id: &str, topics: &[String]) -> Result<Status> {
        self.http_client
            .post(
                format!("/user/addMoreTopicsLater/{user_id}"),
                &TopicsPayload { topics },
            )
            .await?
            .json()
            .await
    }

    /// Drop all of the user's topic subscriptions.
    #[instrument(skip(self))]
    pub async fn delete_topics(&self, user_id: &str) -> Result<()> {
        self.http_client
            .delete(format!("/user/deleteTopics/{user_id}"))
            .await?
            .check_error()
            .await?;
        Ok(())
    }
}
