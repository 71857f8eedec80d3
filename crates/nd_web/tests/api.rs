use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use nd_storage::BuiltinSource;
use nd_web::{create_app, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    create_app(AppState::new(BuiltinSource::catalog().unwrap()))
}

async fn get(uri: &str) -> (StatusCode, Value) {
    let response = app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    read(response).await
}

async fn post_chat(body: Value) -> (StatusCode, Value) {
    post("/api/chat", body).await
}

async fn post(uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    read(response).await
}

async fn read(response: axum::response::Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_front_page_layout() {
    let (status, body) = get("/api/articles").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["category"], "All");
    assert_eq!(body["total"], 10);
    assert_eq!(body["empty"], false);
    assert_eq!(body["featured"]["id"], "1");
    assert_eq!(body["grid"].as_array().unwrap().len(), 4);
    assert_eq!(body["more"].as_array().unwrap().len(), 5);
    assert!(body.get("message").is_none());
}

#[tokio::test]
async fn test_search_and_category_filters() {
    let (_, body) = get("/api/articles?q=tech%20giants").await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["featured"]["id"], "2");

    let (_, body) = get("/api/articles?category=business").await;
    assert_eq!(body["total"], 2);
    assert_eq!(body["featured"]["category"], "Business");
}

#[tokio::test]
async fn test_blank_category_param_is_ignored() {
    let (status, body) = get("/api/articles?category=&q=climate").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["category"], "All");
    assert_eq!(body["total"], 1);
    assert_eq!(body["empty"], false);
}

#[tokio::test]
async fn test_empty_state() {
    let (status, body) = get("/api/articles?q=zeppelin").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["empty"], true);
    assert_eq!(body["total"], 0);
    assert_eq!(body["message"]["title"], "No articles found");
    assert!(body["featured"].is_null());
}

#[tokio::test]
async fn test_article_lookup() {
    let (status, body) = get("/api/articles/8").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["title"],
        "SpaceX Successfully Lands First Private Mission on Mars Surface"
    );
    assert!(body["readTime"].as_u64().is_some());

    let (status, body) = get("/api/articles/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Article not found: 999" }));
}

#[tokio::test]
async fn test_article_widgets() {
    let (_, insights) = get("/api/articles/1/insights").await;
    assert!(insights["keywords"].as_array().unwrap().contains(&json!("Carbon")));
    assert!(insights["summary"].as_array().unwrap().len() <= 4);

    let (_, poll) = get("/api/articles/2/poll").await;
    assert_eq!(poll["question"], "How will new tech regulations impact innovation?");

    let (_, quiz) = get("/api/articles/3/quiz").await;
    assert_eq!(quiz.as_array().unwrap().len(), 3);

    let (_, podcast) = get("/api/articles/8/podcast").await;
    assert_eq!(podcast["expert"], "Dr. Sarah Webb (Science Expert)");
    assert_eq!(podcast["lines"].as_array().unwrap().len(), 9);

    let (status, _) = get("/api/articles/999/quiz").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_poll_vote_counts_once() {
    let (status, body) = post("/api/articles/2/poll", json!({ "option": "4" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 823);
    let results = body["results"].as_array().unwrap();
    assert_eq!(results[3]["votes"], 46);
    assert_eq!(results[3]["selected"], true);
    assert_eq!(results[3]["percent"], 6);
    assert_eq!(results[0]["percent"], 38);

    let (status, _) = post("/api/articles/2/poll", json!({ "option": "9" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post("/api/articles/999/poll", json!({ "option": "1" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_trending_and_categories() {
    let (_, trending) = get("/api/trending").await;
    assert_eq!(trending.as_array().unwrap().len(), 5);

    let (_, categories) = get("/api/categories").await;
    let categories = categories.as_array().unwrap();
    assert_eq!(categories.len(), 10);
    assert_eq!(categories[0], "All");
}

#[tokio::test]
async fn test_chat_routes_to_assistants() {
    let (status, body) = post_chat(json!({ "message": "find spacex" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["rule"], "search");
    assert_eq!(body["assistant"], "News Assistant");

    let (_, body) = post_chat(json!({ "message": "Who wrote this?", "article_id": "3" })).await;
    assert_eq!(body["rule"], "author");

    let (_, body) = post_chat(json!({
        "message": "give me a summary",
        "article_id": "3",
        "mode": "briefing"
    }))
    .await;
    assert_eq!(body["assistant"], "Article Briefing");
    assert_eq!(body["rule"], "summary");
}

#[tokio::test]
async fn test_chat_errors() {
    let (status, _) = post_chat(json!({ "message": "   " })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = post_chat(json!({ "message": "hello", "article_id": "999" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Article not found: 999");
}
