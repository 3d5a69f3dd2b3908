use bytes::Bytes;
use chrono::NaiveDate;
use httpmock::prelude::*;
use knowalledge_rs::admin::{
    CreateEventRequest, CreateNewsRequest, CreateQuizRequest, CreateTriviaRequest, QuizQuestion,
    SubCard, Upload,
};
use knowalledge_rs::session::Role;
use knowalledge_rs::users::ProfileUpdate;
use knowalledge_rs::{Client, Error};
use serde_json::json;

fn client_for(server: &MockServer) -> Client {
    Client::builder()
        .no_env()
        .with_url(server.base_url())
        .with_token("t1")
        .build()
        .unwrap()
}

fn png() -> Upload {
    Upload::new("cover.png", "image/png", Bytes::from_static(b"\x89PNG"))
}

#[tokio::test]
async fn feed_carries_bearer_token_and_splits_item_kinds() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/user/feed")
            .header("authorization", "Bearer t1");
        then.status(200).json_body(json!({
            "success": true,
            "feed": [
                { "_id": "1", "heading": "Budget day", "date": "2025-02-01" },
                { "_id": "2", "heading": "Space deck", "type": "trivia" }
            ]
        }));
    });

    let client = client_for(&server);
    let feed = client.users.feed().await.unwrap();

    assert_eq!(feed.feed.len(), 2);
    assert!(feed.feed[0].is_news());
    assert!(!feed.feed[1].is_news());
    assert_eq!(
        feed.feed[0].date,
        Some(NaiveDate::from_ymd_opt(2025, 2, 1).unwrap())
    );
    mock.assert_hits_async(1).await;
}

#[tokio::test]
async fn topic_content_returns_news_and_trivia() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/user/topic/Science");
        then.status(200).json_body(json!({
            "success": true,
            "news": [{ "_id": "1", "heading": "Probe launch" }],
            "trivia": [{
                "_id": "2",
                "triviaName": "Orbits",
                "subCards": [{ "heading": "LEO", "subHeading": "", "content": "Low orbit" }]
            }]
        }));
    });

    let client = client_for(&server);
    let content = client.users.topic("Science").await.unwrap();
    assert_eq!(content.news.len(), 1);
    assert_eq!(content.trivia[0].sub_cards[0].heading, "LEO");
}

#[tokio::test]
async fn profile_and_topic_subscriptions() {
    let server = MockServer::start();
    let edit = server.mock(|when, then| {
        when.method(PUT)
            .path("/user/editProfile/68b9")
            .json_body(json!({ "city": "Kochi" }));
        then.status(200).json_body(json!({ "success": true }));
    });
    let set = server.mock(|when, then| {
        when.method(POST)
            .path("/user/setTopicsFirst/68b9")
            .json_body(json!({ "topics": ["Science"] }));
        then.status(200).json_body(json!({ "success": true }));
    });
    let add = server.mock(|when, then| {
        when.method(POST)
            .path("/user/addMoreTopicsLater/68b9")
            .json_body(json!({ "topics": ["History"] }));
        then.status(200).json_body(json!({ "success": true }));
    });
    let del = server.mock(|when, then| {
        when.method(DELETE).path("/user/deleteTopics/68b9");
        then.status(200).json_body(json!({ "success": true }));
    });

    let client = client_for(&server);

    let update = ProfileUpdate {
        city: Some("Kochi".to_string()),
        ..Default::default()
    };
    assert!(client
        .users
        .edit_profile("68b9", &update)
        .await
        .unwrap()
        .success);
    client
        .users
        .set_topics("68b9", &["Science".to_string()])
        .await
        .unwrap();
    client
        .users
        .add_topics("68b9", &["History".to_string()])
        .await
        .unwrap();
    client.users.delete_topics("68b9").await.unwrap();

    edit.assert_hits_async(1).await;
    set.assert_hits_async(1).await;
    add.assert_hits_async(1).await;
    del.assert_hits_async(1).await;
}

#[tokio::test]
async fn admin_topic_listing_and_creation() {
    let server = MockServer::start();
    let list = server.mock(|when, then| {
        when.method(GET).path("/superAdmin/topics");
        then.status(200).json_body(json!({
            "success": true,
            "topics": [{ "_id": "t1", "name": "Science" }, { "_id": "t2", "name": "History" }]
        }));
    });
    let create = server.mock(|when, then| {
        when.method(POST)
            .path("/superAdmin/topics")
            .body_contains("Geography");
        then.status(200).json_body(json!({ "success": true }));
    });

    let client = client_for(&server);

    let topics = client.admin.topics().await.unwrap();
    assert_eq!(topics.topics.len(), 2);
    assert_eq!(topics.topics[0].name, "Science");

    assert!(client
        .admin
        .add_topic("Geography", png())
        .await
        .unwrap()
        .success);

    list.assert_hits_async(1).await;
    create.assert_hits_async(1).await;
}

#[tokio::test]
async fn news_publishing_goes_out_as_multipart() {
    let server = MockServer::start();
    let create = server.mock(|when, then| {
        when.method(POST)
            .path("/superAdmin/news")
            .body_contains("Budget day")
            .body_contains("[\"Science\"]");
        then.status(200).json_body(json!({ "success": true }));
    });

    let client = client_for(&server);
    let req = CreateNewsRequest {
        heading: "Budget day".to_string(),
        sub_heading: "What changed".to_string(),
        small_content: "<p>Short take</p>".to_string(),
        large_content: "<p>Long take</p>".to_string(),
        content_type: "Current Affair".to_string(),
        topics: vec!["Science".to_string()],
        content_for: "student".to_string(),
        date: NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
        image: Some(png()),
    };
    assert!(client.admin.create_news(req).await.unwrap().success);
    create.assert_hits_async(1).await;
}

#[tokio::test]
async fn news_with_too_many_topics_never_reaches_the_wire() {
    let server = MockServer::start();
    let create = server.mock(|when, then| {
        when.method(POST).path("/superAdmin/news");
        then.status(200).json_body(json!({ "success": true }));
    });

    let client = client_for(&server);
    let req = CreateNewsRequest {
        heading: "Budget day".to_string(),
        sub_heading: "What changed".to_string(),
        small_content: String::new(),
        large_content: String::new(),
        content_type: "Current Affair".to_string(),
        topics: (0..6).map(|i| format!("t{i}")).collect(),
        content_for: String::new(),
        date: NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
        image: None,
    };
    match client.admin.create_news(req).await {
        Err(Error::Validation(errors)) => {
            assert!(errors.errors().iter().any(|e| e.field == "topics"));
        }
        res => panic!("Expected validation error, got {:?}", res),
    }
    create.assert_hits_async(0).await;
}

#[tokio::test]
async fn trivia_lifecycle() {
    let server = MockServer::start();
    let list = server.mock(|when, then| {
        when.method(GET).path("/superAdmin/trivia");
        then.status(200).json_body(json!({
            "success": true,
            "data": [{ "_id": "tr1", "triviaName": "Orbits", "images": ["a.png"] }]
        }));
    });
    let create = server.mock(|when, then| {
        when.method(POST)
            .path("/superAdmin/trivia")
            .body_contains("Orbits");
        then.status(200).json_body(json!({ "success": true }));
    });
    let delete = server.mock(|when, then| {
        when.method(DELETE).path("/superAdmin/trivia/tr1");
        then.status(200).json_body(json!({ "success": true }));
    });

    let client = client_for(&server);

    let trivia = client.admin.trivia().await.unwrap();
    assert_eq!(trivia.data[0].trivia_name, "Orbits");

    let req = CreateTriviaRequest {
        trivia_name: "Orbits".to_string(),
        sub_cards: vec![SubCard {
            heading: "LEO".to_string(),
            sub_heading: String::new(),
            content: "Low orbit".to_string(),
        }],
        images: vec![png()],
    };
    client.admin.create_trivia(req).await.unwrap();
    client.admin.delete_trivia("tr1").await.unwrap();

    list.assert_hits_async(1).await;
    create.assert_hits_async(1).await;
    delete.assert_hits_async(1).await;
}

#[tokio::test]
async fn events_and_quizzes() {
    let server = MockServer::start();
    let list = server.mock(|when, then| {
        when.method(GET).path("/superAdmin/event");
        then.status(200).json_body(json!({
            "success": true,
            "data": [{
                "_id": "ev1",
                "eventName": "Science week",
                "eventStartTime": "2025-06-01T09:00:00",
                "eventEndTime": "2025-06-07T18:00:00"
            }]
        }));
    });
    let create_event = server.mock(|when, then| {
        when.method(POST)
            .path("/superAdmin/event")
            .json_body_partial(r#"{"eventName":"Science week"}"#);
        then.status(200).json_body(json!({ "success": true }));
    });
    let create_quiz = server.mock(|when, then| {
        when.method(POST)
            .path("/superAdmin/event/ev1/quiz")
            .body_contains("Orbit basics");
        then.status(200)
            .json_body(json!({ "success": true, "message": "Quiz created" }));
    });

    let client = client_for(&server);

    let events = client.admin.events().await.unwrap();
    assert_eq!(events.data[0].event_name, "Science week");

    let start = NaiveDate::from_ymd_opt(2025, 6, 1)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap();
    let end = NaiveDate::from_ymd_opt(2025, 6, 7)
        .unwrap()
        .and_hms_opt(18, 0, 0)
        .unwrap();

    client
        .admin
        .create_event(&CreateEventRequest {
            event_name: "Science week".to_string(),
            event_start_time: start,
            event_end_time: end,
        })
        .await
        .unwrap();

    let quiz = CreateQuizRequest {
        quiz_name: "Orbit basics".to_string(),
        on_topics: vec!["Science".to_string()],
        quiz_master: "Ms. Rao".to_string(),
        start_time: start,
        end_time: end,
        question_swap_time: 30,
        questions: vec![QuizQuestion {
            question: "2+2?".to_string(),
            answers: vec!["3".to_string(), "4".to_string()],
            correct_answer: "4".to_string(),
        }],
        image: None,
    };
    let status = client.admin.create_quiz("ev1", quiz).await.unwrap();
    assert_eq!(status.message.as_deref(), Some("Quiz created"));

    list.assert_hits_async(1).await;
    create_event.assert_hits_async(1).await;
    create_quiz.assert_hits_async(1).await;
}

#[tokio::test]
async fn account_listing_parses_roles() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/superAdmin/getAllUsers");
        then.status(200).json_body(json!({
            "success": true,
            "data": [
                { "_id": "u1", "name": "Asha", "email": "a@b.com", "role": "user", "active": true },
                { "_id": "u2", "name": "Root", "email": "r@b.com", "role": "superadmin", "active": false }
            ]
        }));
    });

    let client = client_for(&server);
    let users = client.admin.users().await.unwrap();
    assert_eq!(users.data[0].role, Role::User);
    assert_eq!(users.data[1].role, Role::Superadmin);
    assert!(!users.data[1].active);
}

#[tokio::test]
async fn schools_and_countries() {
    let server = MockServer::start();
    let school = server.mock(|when, then| {
        when.method(POST)
            .path("/school/addSchool")
            .json_body(json!({ "name": "St. Mary's" }));
        then.status(200).json_body(json!({ "success": true }));
    });
    let countries = server.mock(|when, then| {
        when.method(GET).path("/locations/countries");
        then.status(200).json_body(json!({
            "success": true,
            "countries": [
                { "name": "India", "shortName": "IN", "phone": "91" },
                { "name": "Kenya", "shortName": "KE", "phone": "254" }
            ]
        }));
    });

    let client = client_for(&server);

    assert!(client.admin.add_school("St. Mary's").await.unwrap().success);

    let list = client.locations.countries().await.unwrap();
    assert_eq!(list.countries.len(), 2);
    assert_eq!(list.countries[0].phone.as_deref(), Some("91"));

    school.assert_hits_async(1).await;
    countries.assert_hits_async(1).await;
}
