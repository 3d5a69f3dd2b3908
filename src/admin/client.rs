use serde::Serialize;
use tracing::instrument;

use crate::{
    admin::model::*,
    auth::Status,
    error::{Error, Result},
    http,
};

/// Provides the super-admin management surface: topics, news, trivia,
/// events and their quizzes, account listing, and schools.
#[derive(Debug, Clone)]
pub struct Client {
    http_client: http::Client,
}

impl Client {
    pub(crate) fn new(http_client: http::Client) -> Self {
        Self { http_client }
    }

    /// List all topics.
    #[instrument(skip(self))]
    pub async fn topics(&self) -> Result<TopicList> {
        self.http_client.get("/superAdmin/topics").await?.json().await
    }

    /// Create a topic with its cover image.
    #[instrument(skip(self, image))]
    pub async fn add_topic(&self, name: &str, image: Upload) -> Result<Status> {
        let form = reqwest::multipart::Form::new()
            .text("name", name.to_string())
            .part("image", image.into_part()?);
        self.http_client
            .post_form("/superAdmin/topics", form)
            .await?
            .json()
            .await
    }

    /// List all published news.
    #[instrument(skip(self))]
    pub async fn news(&self) -> Result<NewsList> {
        self.http_client.get("/superAdmin/news").await?.json().await
    }

    /// Publish a news article. Field checks run locally first.
    #[instrument(skip(self, req), fields(heading = %req.heading))]
    pub async fn create_news(&self, req: CreateNewsRequest) -> Result<Status> {
        req.validate().map_err(Error::Validation)?;
        self.http_client
            .post_form("/superAdmin/news", req.into_form()?)
            .await?
            .json()
            .await
    }

    /// List all trivia decks.
    #[instrument(skip(self))]
    pub async fn trivia(&self) -> Result<TriviaList> {
        self.http_client
            .get("/superAdmin/trivia")
            .await?
            .json()
            .await
    }

    /// Create a trivia deck with its images.
    #[instrument(skip(self, req), fields(trivia_name = %req.trivia_name))]
    pub async fn create_trivia(&self, req: CreateTriviaRequest) -> Result<Status> {
        req.validate().map_err(Error::Validation)?;
        self.http_client
            .post_form("/superAdmin/trivia", req.into_form()?)
            .await?
            .json()
            .await
    }

    /// Delete the trivia deck with the given id.
    #[instrument(skip(self))]
    pub async fn delete_trivia(&self, trivia_id: &str) -> Result<()> {
        self.http_client
            .delete(format!("/superAdmin/trivia/{trivia_id}"))
            .await?
            .check_error()
            .await?;
        Ok(())
    }

    /// List all events.
    #[instrument(skip(self))]
    pub async fn events(&self) -> Result<EventList> {
        self.http_client.get("/superAdmin/event").await?.json().await
    }

    /// Schedule an event.
    #[instrument(skip(self, req), fields(event_name = %req.event_name))]
    pub async fn create_event(&self, req: &CreateEventRequest) -> Result<Status> {
        req.validate().map_err(Error::Validation)?;
        self.http_client
            .post("/superAdmin/event", req)
            .await?
            .json()
            .await
    }

    /// Attach a quiz to an event.
    #[instrument(skip(self, req), fields(quiz_name = %req.quiz_name))]
    pub async fn create_quiz(&self, event_id: &str, req: CreateQuizRequest) -> Result<Status> {
        req.validate().map_err(Error::Validation)?;
        self.http_client
            .post_form(format!("/superAdmin/event/{event_id}/quiz"), req.into_form()?)
            .await?
            .json()
            .await
    }

    /// List every account on the platform.
    #[instrument(skip(self))]
    pub async fn users(&self) -> Result<UserList> {
        self.http_client
            .get("/superAdmin/getAllUsers")
            .await?
            .json()
            .await
    }

    /// Register a school so students can pick it at sign-up.
    #[instrument(skip(self))]
    pub async fn add_school(&self, name: &str) -> Result<Status> {
        #[derive(Serialize)]
        struct Payload<'a> {
            name: &'a str,
        }

        self.http_client
            .post("/school/addSchool", &Payload { name })
            .await?
            .json()
            .await
    }
}
