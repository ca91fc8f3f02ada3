//! Read-only HTTP surface over the snapshot documents.
//!
//! Every handler applies the display-layer fallback: a missing or unreadable snapshot
//! is answered with placeholder content, never with an error status.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::art::DailyArt;
use crate::article::Article;
use crate::classifier::Category;
use crate::snapshot;

pub struct AppState {
    pub data_dir: PathBuf,
}

pub fn router(state: Arc<AppState>) -> Router {
    let data_dir = state.data_dir.clone();

    Router::new()
        .route("/api/articles", get(articles))
        .route("/api/daily-art", get(daily_art))
        .route("/api/categories", get(categories))
        .route("/health", get(health))
        .nest_service("/data", ServeDir::new(data_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Deserialize)]
pub struct ArticlesQuery {
    #[serde(default)]
    pub category: Option<String>,
}

pub async fn articles(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ArticlesQuery>,
) -> Json<Vec<Article>> {
    let mut articles = snapshot::load_articles_or_placeholder(&state.data_dir).await;

    if let Some(category) = query.category.as_deref().filter(|c| !c.is_empty()) {
        articles.retain(|a| a.category.as_str().eq_ignore_ascii_case(category));
    }

    Json(articles)
}

pub async fn daily_art(State(state): State<Arc<AppState>>) -> Json<DailyArt> {
    Json(snapshot::load_daily_art_or_placeholder(&state.data_dir).await)
}

pub async fn categories(State(state): State<Arc<AppState>>) -> Json<Vec<Category>> {
    let articles = snapshot::load_articles_or_placeholder(&state.data_dir).await;
    Json(snapshot::distinct_categories(&articles))
}

pub async fn health() -> impl IntoResponse {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::Priority;
    use crate::snapshot::SnapshotWriter;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use chrono::{NaiveDate, Utc};
    use http_body_util::BodyExt;
    use tempfile::TempDir;
    use tower::ServiceExt;

    fn article(id: &str, category: Category) -> Article {
        Article {
            id: id.to_string(),
            title: format!("Article {}", id),
            summary: "Summary.".to_string(),
            content: String::new(),
            category,
            source: "Test".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 12, 9).unwrap(),
            priority: Priority::Low,
            original_link: format!("https://example.com/{}", id),
            collected_at: Utc::now(),
        }
    }

    fn create_test_app(temp_dir: &TempDir) -> Router {
        router(Arc::new(AppState {
            data_dir: temp_dir.path().to_path_buf(),
        }))
    }

    async fn setup_test_data(temp_dir: &TempDir) {
        let writer = SnapshotWriter::new(temp_dir.path());
        writer
            .write_articles(&[
                article("1", Category::Sport),
                article("2", Category::Politics),
                article("3", Category::Sport),
            ])
            .await
            .unwrap();
        writer
            .write_daily_art(&DailyArt::for_time(Utc::now()))
            .await
            .unwrap();
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    mod health_tests {
        use super::*;

        #[tokio::test]
        async fn test_health_endpoint() {
            let temp_dir = tempfile::tempdir().unwrap();
            let app = create_test_app(&temp_dir);

            let response = app
                .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK);

            let body = response.into_body().collect().await.unwrap().to_bytes();
            assert_eq!(&body[..], b"OK");
        }
    }

    mod articles_tests {
        use super::*;

        #[tokio::test]
        async fn test_articles_from_snapshot() {
            let temp_dir = tempfile::tempdir().unwrap();
            setup_test_data(&temp_dir).await;

            let (status, body) = get_json(create_test_app(&temp_dir), "/api/articles").await;

            assert_eq!(status, StatusCode::OK);
            assert_eq!(body.as_array().unwrap().len(), 3);
            assert_eq!(body[0]["originalLink"], "https://example.com/1");
        }

        #[tokio::test]
        async fn test_articles_filtered_by_category() {
            let temp_dir = tempfile::tempdir().unwrap();
            setup_test_data(&temp_dir).await;

            let (_, body) =
                get_json(create_test_app(&temp_dir), "/api/articles?category=sport").await;

            let ids: Vec<_> = body
                .as_array()
                .unwrap()
                .iter()
                .map(|a| a["id"].as_str().unwrap().to_string())
                .collect();
            assert_eq!(ids, vec!["1", "3"]);
        }

        #[tokio::test]
        async fn test_articles_placeholder_when_missing() {
            let temp_dir = tempfile::tempdir().unwrap();

            let (status, body) = get_json(create_test_app(&temp_dir), "/api/articles").await;

            assert_eq!(status, StatusCode::OK);
            let list = body.as_array().unwrap();
            assert_eq!(list.len(), 1);
            assert_eq!(list[0]["id"], "placeholder");
            assert_eq!(list[0]["category"], "Other");
        }
    }

    mod daily_art_tests {
        use super::*;

        #[tokio::test]
        async fn test_daily_art_from_snapshot() {
            let temp_dir = tempfile::tempdir().unwrap();
            setup_test_data(&temp_dir).await;

            let (status, body) = get_json(create_test_app(&temp_dir), "/api/daily-art").await;

            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["medium"], "Digital graphic");
        }

        #[tokio::test]
        async fn test_daily_art_placeholder_when_missing() {
            let temp_dir = tempfile::tempdir().unwrap();

            let (status, body) = get_json(create_test_app(&temp_dir), "/api/daily-art").await;

            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["title"], DailyArt::placeholder().title);
        }
    }

    mod categories_tests {
        use super::*;

        #[tokio::test]
        async fn test_categories_are_distinct() {
            let temp_dir = tempfile::tempdir().unwrap();
            setup_test_data(&temp_dir).await;

            let (_, body) = get_json(create_test_app(&temp_dir), "/api/categories").await;
            assert_eq!(body, serde_json::json!(["Sport", "Politics"]));
        }

        #[tokio::test]
        async fn test_categories_of_placeholder() {
            let temp_dir = tempfile::tempdir().unwrap();

            let (_, body) = get_json(create_test_app(&temp_dir), "/api/categories").await;
            assert_eq!(body, serde_json::json!(["Other"]));
        }
    }

    mod static_tests {
        use super::*;

        #[tokio::test]
        async fn test_raw_snapshot_is_served() {
            let temp_dir = tempfile::tempdir().unwrap();
            setup_test_data(&temp_dir).await;

            let (status, body) =
                get_json(create_test_app(&temp_dir), "/data/articles.json").await;

            assert_eq!(status, StatusCode::OK);
            assert_eq!(body.as_array().unwrap().len(), 3);
        }
    }

    mod query_tests {
        use super::*;

        #[test]
        fn test_articles_query_default() {
            let query: ArticlesQuery = serde_urlencoded::from_str("").unwrap();
            assert!(query.category.is_none());
        }

        #[test]
        fn test_articles_query_with_category() {
            let query: ArticlesQuery = serde_urlencoded::from_str("category=Health").unwrap();
            assert_eq!(query.category.as_deref(), Some("Health"));
        }
    }
}
