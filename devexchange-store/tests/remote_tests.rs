use devexchange_model::{QuestionDraft, QuestionPatch};
use devexchange_store::{Collection, RemoteProvider, RemoteStoreConfig, StoreError};
use devexchange_types::{QuestionId, UserId};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn question_json(id: u64, title: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "title": title,
        "body": "body",
        "tags": ["rust"],
        "authorId": "user1",
        "authorName": "alice",
        "authorReputation": 10,
        "votes": 0,
        "answerCount": 0,
        "views": 0,
        "acceptedAnswerId": null,
        "createdAt": "2024-01-10T12:00:00Z",
        "updatedAt": "2024-01-10T12:00:00Z"
    })
}

fn provider_for(server: &MockServer) -> RemoteProvider {
    RemoteProvider::new(&RemoteStoreConfig {
        base_url: server.uri(),
        timeout_secs: 5,
    })
    .unwrap()
}

// ── Config ───────────────────────────────────────────────────────

#[test]
fn config_defaults() {
    let cfg = RemoteStoreConfig::default();
    assert_eq!(cfg.base_url, "http://localhost:8080");
    assert_eq!(cfg.timeout_secs, 30);
}

#[test]
fn config_serde_roundtrip() {
    let cfg = RemoteStoreConfig {
        base_url: "https://api.example.com/v1".to_string(),
        timeout_secs: 10,
    };
    let json = serde_json::to_string(&cfg).unwrap();
    let parsed: RemoteStoreConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.base_url, cfg.base_url);
    assert_eq!(parsed.timeout_secs, 10);
}

// ── get_all ──────────────────────────────────────────────────────

#[tokio::test]
async fn get_all_decodes_table_listing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/questions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            question_json(1, "first"),
            question_json(2, "second"),
        ])))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let questions = provider.questions.get_all().await.unwrap();
    assert_eq!(questions.len(), 2);
    assert_eq!(questions[0].id, QuestionId::new(1));
    assert_eq!(questions[1].title, "second");
}

#[tokio::test]
async fn get_all_server_error_is_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/questions"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let err = provider.questions.get_all().await.unwrap_err();
    assert!(matches!(err, StoreError::Unavailable(_)));
}

// ── get ──────────────────────────────────────────────────────────

#[tokio::test]
async fn get_fetches_single_record() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/questions/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(question_json(7, "found")))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let question = provider.questions.get(&QuestionId::new(7)).await.unwrap();
    assert_eq!(question.title, "found");
}

#[tokio::test]
async fn get_missing_record_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/questions/99"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let err = provider.questions.get(&QuestionId::new(99)).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound { kind: "question", .. }));
}

#[tokio::test]
async fn malformed_body_is_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/questions/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let err = provider.questions.get(&QuestionId::new(1)).await.unwrap_err();
    assert!(matches!(err, StoreError::Unavailable(_)));
}

// ── create ───────────────────────────────────────────────────────

#[tokio::test]
async fn create_posts_draft_and_decodes_record() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/questions"))
        .and(body_json(serde_json::json!({
            "title": "new",
            "body": "body",
            "tags": ["rust"],
            "authorId": "user1",
            "authorName": "alice",
            "authorReputation": 10
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(question_json(3, "new")))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let created = provider
        .questions
        .create(QuestionDraft {
            title: "new".to_string(),
            body: "body".to_string(),
            tags: vec!["rust".to_string()],
            author_id: UserId::new("user1"),
            author_name: "alice".to_string(),
            author_reputation: 10,
        })
        .await
        .unwrap();
    assert_eq!(created.id, QuestionId::new(3));
}

// ── update ───────────────────────────────────────────────────────

#[tokio::test]
async fn update_sends_only_present_patch_fields() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/questions/1"))
        .and(body_json(serde_json::json!({"votes": 4})))
        .respond_with(ResponseTemplate::new(200).set_body_json(question_json(1, "first")))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let patch = QuestionPatch {
        votes: Some(4),
        ..Default::default()
    };
    let updated = provider
        .questions
        .update(&QuestionId::new(1), patch)
        .await
        .unwrap();
    assert_eq!(updated.id, QuestionId::new(1));
}

#[tokio::test]
async fn update_missing_record_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/questions/8"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let err = provider
        .questions
        .update(&QuestionId::new(8), QuestionPatch::default())
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::NotFound { .. }));
}

// ── delete ───────────────────────────────────────────────────────

#[tokio::test]
async fn delete_succeeds_on_ok() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/questions/2"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    assert!(provider.questions.delete(&QuestionId::new(2)).await.unwrap());
}

#[tokio::test]
async fn delete_missing_record_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/questions/2"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let err = provider
        .questions
        .delete(&QuestionId::new(2))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::NotFound { .. }));
}

// ── unreachable server ───────────────────────────────────────────

#[tokio::test]
async fn connection_refused_is_unavailable() {
    let provider = RemoteProvider::new(&RemoteStoreConfig {
        // Port 9 (discard) is never listening.
        base_url: "http://127.0.0.1:9".to_string(),
        timeout_secs: 1,
    })
    .unwrap();
    let err = provider.questions.get_all().await.unwrap_err();
    assert!(matches!(err, StoreError::Unavailable(_)));
}
