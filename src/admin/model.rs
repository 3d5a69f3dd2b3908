use bytes::Bytes;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result, ValidationErrors};
use crate::serde::{deserialize_null_default, empty_string_as_none};
use crate::session::Role;

/// A file attached to a multipart request (topic/news/trivia/quiz images).
#[derive(Debug, Clone)]
pub struct Upload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Bytes,
}

impl Upload {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: impl Into<Bytes>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes: bytes.into(),
        }
    }

    pub(crate) fn into_part(self) -> Result<reqwest::multipart::Part> {
        let part = reqwest::multipart::Part::stream(reqwest::Body::from(self.bytes))
            .file_name(self.file_name);
        part.mime_str(&self.content_type)
            .map_err(|_e| Error::InvalidContentType(self.content_type))
    }
}

/// A learning topic users subscribe to.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub name: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub image: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct TopicList {
    #[serde(default)]
    pub success: bool,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub topics: Vec<Topic>,
}

/// A published news article.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
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
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub content_type: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub topics: Vec<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub content_for: Option<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub images: Vec<String>,
}

#[derive(Deserialize, Debug)]
pub struct NewsList {
    #[serde(default)]
    pub success: bool,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub news: Vec<NewsItem>,
}

/// A news article to publish. `small_content` and `large_content` are rich
/// text (HTML); the first is capped at 80 visible words.
#[derive(Debug, Clone)]
pub struct CreateNewsRequest {
    pub heading: String,
    pub sub_heading: String,
    pub small_content: String,
    pub large_content: String,
    /// Editorial category, e.g. `Current Affair`.
    pub content_type: String,
    /// Up to five topic names the article is filed under.
    pub topics: Vec<String>,
    pub content_for: String,
    pub date: NaiveDate,
    pub image: Option<Upload>,
}

impl CreateNewsRequest {
    pub fn validate(&self) -> std::result::Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        if self.heading.trim().is_empty() {
            errors.push("heading", "Heading is required");
        }
        if self.sub_heading.trim().is_empty() {
            errors.push("subHeading", "Sub-heading is required");
        }
        if self.topics.len() > 5 {
            errors.push("topics", "You can select up to 5 topics only");
        }
        if visible_word_count(&self.small_content) > 80 {
            errors.push("smallContent", "First content box is limited to 80 words");
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub(crate) fn into_form(self) -> Result<reqwest::multipart::Form> {
        let mut form = reqwest::multipart::Form::new()
            .text("heading", self.heading)
            .text("subHeading", self.sub_heading)
            .text("smallContent", self.small_content)
            .text("largeContent", self.large_content)
            .text("contentType", self.content_type)
            .text("topics", serde_json::to_string(&self.topics)?)
            .text("contentFor", self.content_for)
            .text("date", self.date.to_string());
        if let Some(image) = self.image {
            form = form.part("images", image.into_part()?);
        }
        Ok(form)
    }
}

/// A sub-card inside a trivia deck.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SubCard {
    pub heading: String,
    pub sub_heading: String,
    pub content: String,
}

/// A trivia deck: a named set of sub-cards with images.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TriviaItem {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub trivia_name: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub sub_cards: Vec<SubCard>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub images: Vec<String>,
}

#[derive(Deserialize, Debug)]
pub struct TriviaList {
    #[serde(default)]
    pub success: bool,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub data: Vec<TriviaItem>,
}

#[derive(Debug, Clone)]
pub struct CreateTriviaRequest {
    pub trivia_name: String,
    pub sub_cards: Vec<SubCard>,
    pub images: Vec<Upload>,
}

impl CreateTriviaRequest {
    pub fn validate(&self) -> std::result::Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        if self.trivia_name.trim().is_empty() {
            errors.push("triviaName", "Trivia name is required");
        }
        if self.images.is_empty() {
            errors.push("images", "At least one image is required");
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub(crate) fn into_form(self) -> Result<reqwest::multipart::Form> {
        let mut form = reqwest::multipart::Form::new()
            .text("triviaName", self.trivia_name.trim().to_string())
            .text("subCards", serde_json::to_string(&self.sub_cards)?);
        for image in self.images {
            form = form.part("images", image.into_part()?);
        }
        Ok(form)
    }
}

/// A scheduled platform event quizzes hang off of.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub event_name: String,
    #[serde(default)]
    pub event_start_time: Option<NaiveDateTime>,
    #[serde(default)]
    pub event_end_time: Option<NaiveDateTime>,
}

#[derive(Deserialize, Debug)]
pub struct EventList {
    #[serde(default)]
    pub success: bool,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub data: Vec<Event>,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    pub event_name: String,
    pub event_start_time: NaiveDateTime,
    pub event_end_time: NaiveDateTime,
}

impl CreateEventRequest {
    pub fn validate(&self) -> std::result::Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        if self.event_name.trim().is_empty() {
            errors.push("eventName", "Event name is required");
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// A single quiz question. Exactly one of the answer options must match
/// `correct_answer`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct QuizQuestion {
    pub question: String,
    pub answers: Vec<String>,
    pub correct_answer: String,
}

#[derive(Debug, Clone)]
pub struct CreateQuizRequest {
    pub quiz_name: String,
    pub on_topics: Vec<String>,
    pub quiz_master: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    /// Seconds before the next question is shown.
    pub question_swap_time: u32,
    pub questions: Vec<QuizQuestion>,
    pub image: Option<Upload>,
}

impl CreateQuizRequest {
    pub fn validate(&self) -> std::result::Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        if self.quiz_name.trim().is_empty() {
            errors.push("quizName", "Quiz name is required");
        }
        if self.on_topics.is_empty() {
            errors.push("onTopics", "Select at least one topic");
        }
        if self.quiz_master.trim().is_empty() {
            errors.push("quizMaster", "Quiz master is required");
        }
        if self.question_swap_time == 0 {
            errors.push("questionSwapTime", "Question swap time is required");
        }
        if self.questions.is_empty() {
            errors.push("questions", "At least one question is required");
        }
        for (i, q) in self.questions.iter().enumerate() {
            if q.question.trim().is_empty() {
                errors.push("questions", format!("Question {} is empty", i + 1));
            } else if q.answers.iter().any(|a| a.trim().is_empty()) {
                errors.push(
                    "questions",
                    format!("Question {} has empty answer options", i + 1),
                );
            } else if q.correct_answer.trim().is_empty() {
                errors.push(
                    "questions",
                    format!("Question {} has no correct answer selected", i + 1),
                );
            } else if !q.answers.contains(&q.correct_answer) {
                errors.push(
                    "questions",
                    format!("Question {} correct answer doesn't match any option", i + 1),
                );
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub(crate) fn into_form(self) -> Result<reqwest::multipart::Form> {
        let mut form = reqwest::multipart::Form::new()
            .text("quizName", self.quiz_name)
            .text("onTopics", serde_json::to_string(&self.on_topics)?)
            .text("quizMaster", self.quiz_master)
            .text(
                "startTime",
                self.start_time.format("%Y-%m-%dT%H:%M").to_string(),
            )
            .text(
                "endTime",
                self.end_time.format("%Y-%m-%dT%H:%M").to_string(),
            )
            .text("questionSwapTime", self.question_swap_time.to_string())
            .text("questions", serde_json::to_string(&self.questions)?);
        if let Some(image) = self.image {
            form = form.part("images", image.into_part()?);
        }
        Ok(form)
    }
}

/// A platform account as the user-management screen lists it.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlatformUser {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub email: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub active: bool,
}

#[derive(Deserialize, Debug)]
pub struct UserList {
    #[serde(default)]
    pub success: bool,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub data: Vec<PlatformUser>,
}

/// Counts words the reader would actually see in a rich-text fragment,
/// with markup stripped.
fn visible_word_count(html: &str) -> usize {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => {
                in_tag = false;
                text.push(' ');
            }
            c if !in_tag => text.push(c),
            _ => {}
        }
    }
    text.split_whitespace().count()
}
