//! News announcement API endpoints.

use std::sync::Arc;

use api_protocol::{requests::*, responses::*};
use axum::{extract::State, Extension, Json};
use consult_store::ConsultStore;
use entities::NewsArticle;

use crate::api::{parse_id, require_admin};
use crate::error::{ServerError, ServerResult};
use crate::middleware::AuthenticatedUser;
use crate::state::AppState;

/// Creates an article. Admin only.
pub async fn create_news<S: ConsultStore>(
    State(state): State<Arc<AppState<S>>>,
    Extension(caller): Extension<AuthenticatedUser>,
    Json(request): Json<CreateNewsRequest>,
) -> ServerResult<Json<CreateNewsResponse>> {
    require_admin(&caller)?;

    if request.title.trim().is_empty() {
        return Err(ServerError::InvalidRequest("Title is required".to_string()));
    }

    let mut article = NewsArticle::new(request.title.trim(), request.content, request.author);
    if let Some(image_url) = request.image_url {
        article = article.with_image_url(image_url);
    }
    let article = state.store.create_news(article).await?;

    tracing::info!(article_id = %article.id, "Article published");

    Ok(Json(CreateNewsResponse {
        article: (&article).into(),
    }))
}

/// Lists articles for the public news page, newest first.
pub async fn list_news<S: ConsultStore>(
    State(state): State<Arc<AppState<S>>>,
    Json(_request): Json<ListNewsRequest>,
) -> ServerResult<Json<ListNewsResponse>> {
    let articles = state.store.list_news().await?;

    Ok(Json(ListNewsResponse {
        articles: articles.iter().map(Into::into).collect(),
    }))
}

/// Gets one article.
pub async fn get_news<S: ConsultStore>(
    State(state): State<Arc<AppState<S>>>,
    Json(request): Json<GetNewsRequest>,
) -> ServerResult<Json<GetNewsResponse>> {
    let id = parse_id(&request.article_id, "article_id")?;
    let article = state
        .store
        .get_news(id)
        .await?
        .ok_or_else(|| ServerError::NotFound("Article not found".to_string()))?;

    Ok(Json(GetNewsResponse {
        article: (&article).into(),
    }))
}

/// Updates an article. Admin only.
pub async fn update_news<S: ConsultStore>(
    State(state): State<Arc<AppState<S>>>,
    Extension(caller): Extension<AuthenticatedUser>,
    Json(request): Json<UpdateNewsRequest>,
) -> ServerResult<Json<UpdateNewsResponse>> {
    require_admin(&caller)?;

    let id = parse_id(&request.article_id, "article_id")?;
    let mut article = state
        .store
        .get_news(id)
        .await?
        .ok_or_else(|| ServerError::NotFound("Article not found".to_string()))?;

    if let Some(title) = request.title {
        article.title = title;
    }
    if let Some(content) = request.content {
        article.content = content;
    }
    if let Some(author) = request.author {
        article.author = author;
    }
    if let Some(image_url) = request.image_url {
        article.image_url = Some(image_url);
    }
    let article = state.store.update_news(article).await?;

    tracing::info!(article_id = %article.id, "Article updated");

    Ok(Json(UpdateNewsResponse {
        article: (&article).into(),
    }))
}

/// Deletes an article. Admin only.
pub async fn delete_news<S: ConsultStore>(
    State(state): State<Arc<AppState<S>>>,
    Extension(caller): Extension<AuthenticatedUser>,
    Json(request): Json<DeleteNewsRequest>,
) -> ServerResult<Json<DeleteNewsResponse>> {
    require_admin(&caller)?;

    let id = parse_id(&request.article_id, "article_id")?;
    state.store.delete_news(id).await?;

    tracing::info!(article_id = %id, "Article deleted");

    Ok(Json(DeleteNewsResponse {}))
}
