use assessment_engine::{
    config::Config,
    models::assessment::{AssessmentMeta, Difficulty, ItemCounts},
    routes,
    services::ai_service::{AIService, RemoteGenerator},
    AppState,
};
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value as JsonValue};
use tower::ServiceExt;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> Config {
    Config {
        openai_api_key: Some("sk-test".into()),
        openai_base_url: format!("{}/v1", server.uri()),
        remote_timeout_secs: 5,
        ..Config::default()
    }
}

fn request_body() -> JsonValue {
    json!({
        "role": "Backend Engineer",
        "skills": ["SQL", "Rust"],
        "difficulty": "hard",
        "counts": {"mcq": 2, "saq": 1, "caselet": 1},
        "includeAptitude": false
    })
}

fn completion(content: &str) -> JsonValue {
    json!({
        "id": "chatcmpl-test",
        "choices": [{"index": 0, "message": {"role": "assistant", "content": content}}]
    })
}

fn remote_assessment(items: JsonValue) -> String {
    let body = json!({
        "meta": {"role": "Backend Engineer", "skills": ["SQL", "Rust"], "difficulty": "hard",
                 "counts": {"mcq": 2, "saq": 1, "caselet": 1}},
        "items": items,
        "coverage": {"bySkill": {"Elixir": 40}, "byDifficulty": {"easy": 40}, "totals": {"items": 40}}
    });
    format!("```json\n{}\n```", serde_json::to_string_pretty(&body).unwrap())
}

async fn generate(app: Router) -> JsonValue {
    let req = Request::builder()
        .method("POST")
        .uri("/api/assessments/generate")
        .header("content-type", "application/json")
        .body(Body::from(request_body().to_string()))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn assert_local_shape(value: &JsonValue) {
    assert_eq!(value["source"], "local");
    let assessment = &value["assessment"];
    assert_eq!(assessment["items"].as_array().unwrap().len(), 4);
    assert_eq!(
        assessment["coverage"]["totals"],
        json!({"items": 4, "mcq": 2, "saq": 1, "caselet": 1, "aptitude": 0})
    );
    assert_eq!(assessment["meta"]["role"], "Backend Engineer");
}

#[tokio::test]
async fn server_error_falls_back_to_local_assembly() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .expect(1)
        .mount(&server)
        .await;

    let app = routes::router(AppState::new(&config_for(&server)).unwrap());
    let value = generate(app).await;
    assert_local_shape(&value);
}

#[tokio::test]
async fn fenced_reply_is_accepted_and_coverage_recomputed() {
    let server = MockServer::start().await;
    let items = json!([
        {"id": "m1", "type": "mcq", "skill": "SQL", "difficulty": "hard",
         "question": "Which isolation level prevents phantom reads?",
         "options": ["Read committed", "Serializable", "Read uncommitted", "Repeatable read"],
         "answerIndex": 1, "rationale": "Only serializable blocks phantoms."},
        {"id": "m2", "type": "mcq", "skill": "Rust", "difficulty": "hard",
         "question": "What does the borrow checker enforce at compile time?",
         "options": ["Aliasing XOR mutation", "Garbage collection", "Green threads", "Reflection"],
         "answerIndex": 0},
        {"id": "s1", "type": "saq", "skill": "SQL", "difficulty": "hard",
         "question": "Explain when a covering index pays off.",
         "expectedAnswer": "When every selected column lives in the index."},
        {"id": "c1", "type": "caselet", "skill": "Rust", "difficulty": "hard",
         "passage": "A service leaks memory after a dependency upgrade.",
         "prompt": "Outline your investigation plan."}
    ]);
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(&remote_assessment(items))))
        .expect(1)
        .mount(&server)
        .await;

    let app = routes::router(AppState::new(&config_for(&server)).unwrap());
    let value = generate(app).await;

    assert_eq!(value["source"], "remote");
    let assessment = &value["assessment"];
    let items = assessment["items"].as_array().unwrap();
    assert_eq!(items.len(), 4);
    assert_eq!(items[0]["options"][items[0]["answerIndex"].as_u64().unwrap() as usize], "Serializable");
    assert_eq!(
        assessment["coverage"]["totals"],
        json!({"items": 4, "mcq": 2, "saq": 1, "caselet": 1, "aptitude": 0})
    );
    assert_eq!(assessment["coverage"]["bySkill"], json!({"Rust": 2, "SQL": 2}));
    assert_eq!(assessment["coverage"]["byDifficulty"], json!({"easy": 0, "medium": 0, "hard": 4}));
}

#[tokio::test]
async fn duplicate_questions_fall_back_to_local_assembly() {
    let server = MockServer::start().await;
    let items = json!([
        {"id": "s1", "type": "saq", "skill": "SQL", "difficulty": "hard",
         "question": "Explain when a covering index pays off.", "expectedAnswer": "a"},
        {"id": "s2", "type": "saq", "skill": "SQL", "difficulty": "hard",
         "question": "Explain when a covering index pays off.", "expectedAnswer": "b"}
    ]);
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(&remote_assessment(items))))
        .mount(&server)
        .await;

    let app = routes::router(AppState::new(&config_for(&server)).unwrap());
    assert_local_shape(&generate(app).await);
}

#[tokio::test]
async fn non_json_reply_falls_back_to_local_assembly() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("I cannot help with that.")))
        .mount(&server)
        .await;

    let app = routes::router(AppState::new(&config_for(&server)).unwrap());
    assert_local_shape(&generate(app).await);
}

#[tokio::test]
async fn remote_is_not_called_when_not_preferred() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let app = routes::router(AppState::new(&config_for(&server)).unwrap());
    let mut body = request_body();
    body["preferRemote"] = json!(false);
    let req = Request::builder()
        .method("POST")
        .uri("/api/assessments/generate")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let value: JsonValue = serde_json::from_slice(&bytes).unwrap();
    assert_local_shape(&value);
}

#[tokio::test]
async fn client_surfaces_non_success_status_as_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .mount(&server)
        .await;

    let service = AIService::new("sk-test".into(), reqwest::Client::new())
        .with_base_url(&format!("{}/v1", server.uri()));
    let meta = AssessmentMeta::new("Dev", vec!["Go".into()], Difficulty::Easy, ItemCounts::new(1, 0, 0, 0));
    let err = service.generate(&meta).await.unwrap_err();
    assert!(err.to_string().contains("503"));
    assert!(err.to_string().contains("overloaded"));
}
