use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use nd_core::feed::{EMPTY_STATE_HINT, EMPTY_STATE_TITLE};
use nd_core::{Category, Error, FeedLayout, FeedQuery};
use nd_inference::generators::podcast::{expert_name, HOST_NAME, SHOW_NAME};
use nd_inference::generators::{generate_poll, generate_quiz, podcast_script, PodcastLine};
use nd_inference::{create_responder, ArticleInsights, AssistantMode};
use nd_widgets::{PollResult, PollSession};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiResult;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct FeedParams {
    pub category: Option<String>,
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EmptyState {
    pub title: &'static str,
    pub hint: &'static str,
}

#[derive(Debug, Serialize)]
pub struct FeedResponse<'a> {
    pub category: &'a str,
    pub query: Option<&'a str>,
    pub total: usize,
    pub empty: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<EmptyState>,
    #[serde(flatten)]
    pub layout: FeedLayout<'a>,
}

pub async fn list_articles(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FeedParams>,
) -> Response {
    let mut query = FeedQuery::new().category(params.category.as_deref());
    if let Some(text) = params.q {
        query = query.text(text);
    }
    let layout = state.catalog.feed(&query);
    let empty = layout.is_empty();
    debug!("Feed {:?} matched {} article(s)", query, layout.total());

    Json(FeedResponse {
        category: query.category.as_str(),
        query: query.text.as_deref(),
        total: layout.total(),
        empty,
        message: empty.then_some(EmptyState {
            title: EMPTY_STATE_TITLE,
            hint: EMPTY_STATE_HINT,
        }),
        layout,
    })
    .into_response()
}

pub async fn get_article(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Response> {
    let article = state.article(&id)?;
    Ok(Json(article).into_response())
}

pub async fn get_insights(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<ArticleInsights>> {
    let article = state.article(&id)?;
    Ok(Json(ArticleInsights::build(&state.catalog, article)))
}

pub async fn get_poll(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Response> {
    let article = state.article(&id)?;
    Ok(Json(generate_poll(article)).into_response())
}

#[derive(Debug, Deserialize)]
pub struct VoteRequest {
    pub option: String,
}

#[derive(Debug, Serialize)]
pub struct VoteResponse {
    pub question: String,
    pub total: u32,
    pub results: Vec<PollResult>,
}

/// Casts one vote on a fresh copy of the article's poll and returns the tally.
pub async fn vote_poll(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(request): Json<VoteRequest>,
) -> ApiResult<Json<VoteResponse>> {
    let article = state.article(&id)?;
    let mut poll = PollSession::for_article(article);
    poll.select(&request.option)?;
    poll.vote()?;
    debug!("🗳️ Vote for option {} on article {}", request.option, id);
    Ok(Json(VoteResponse {
        question: poll.question().to_string(),
        total: poll.total_votes(),
        results: poll.results(),
    }))
}

pub async fn get_quiz(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Response> {
    let article = state.article(&id)?;
    Ok(Json(generate_quiz(article)).into_response())
}

#[derive(Debug, Serialize)]
pub struct PodcastResponse {
    pub show: &'static str,
    pub host: &'static str,
    pub expert: String,
    pub lines: Vec<PodcastLine>,
}

pub async fn get_podcast(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<PodcastResponse>> {
    let article = state.article(&id)?;
    Ok(Json(PodcastResponse {
        show: SHOW_NAME,
        host: HOST_NAME,
        expert: expert_name(article),
        lines: podcast_script(article),
    }))
}

pub async fn trending(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    Json(state.catalog.trending_topics().to_vec())
}

pub async fn categories() -> Json<Vec<&'static str>> {
    Json(Category::menu())
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub article_id: Option<String>,
    #[serde(default)]
    pub mode: AssistantMode,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
    pub rule: &'static str,
    pub assistant: String,
}

pub async fn chat(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChatRequest>,
) -> ApiResult<Json<ChatResponse>> {
    let message = request.message.trim();
    if message.is_empty() {
        return Err(Error::Widget("message is empty".to_string()).into());
    }
    let article = request
        .article_id
        .as_deref()
        .map(|id| state.article(id))
        .transpose()?;

    let responder = create_responder(&state.catalog, article, request.mode);
    let reply = responder.respond(message);
    debug!("💬 {} answered with rule '{}'", responder.name(), reply.rule);
    Ok(Json(ChatResponse {
        reply: reply.text,
        rule: reply.rule,
        assistant: responder.name().to_string(),
    }))
}
