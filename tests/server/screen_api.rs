use std::time::{Duration, Instant};

use reqwest::StatusCode;
use serde_json::json;
use wiremock::ResponseTemplate;

use crate::helpers::{shelf_item, shelf_page, spawn_app, titles};

#[tokio::test]
async fn merges_movies_and_tv_newest_first() {
    let app = spawn_app().await;
    app.mount_page(
        "movie",
        1,
        shelf_page(
            vec![
                shelf_item("t3", "2024-09-01T00:00:00Z"),
                shelf_item("t1", "2024-01-15T00:00:00Z"),
            ],
            2,
            1,
        ),
        1,
    )
    .await;
    app.mount_page(
        "tv",
        1,
        shelf_page(
            vec![
                shelf_item("t4", "2024-12-01T00:00:00Z"),
                shelf_item("t2", "2024-04-01T00:00:00Z"),
            ],
            2,
            1,
        ),
        1,
    )
    .await;

    let (status, body) = app.get_json("/complete/screen/2024").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(&body), ["Item t4", "Item t3", "Item t2", "Item t1"]);
}

#[tokio::test]
async fn screen_only_keeps_items_from_the_year() {
    let app = spawn_app().await;
    app.mount_page(
        "movie",
        1,
        shelf_page(
            vec![
                shelf_item("m-2025", "2025-01-02T00:00:00Z"),
                shelf_item("m-2024", "2024-06-01T00:00:00Z"),
            ],
            6,
            3,
        ),
        1,
    )
    .await;
    app.mount_page(
        "movie",
        2,
        shelf_page(vec![shelf_item("m-2023", "2023-06-01T00:00:00Z")], 6, 3),
        1,
    )
    .await;
    app.mount_page("movie", 3, shelf_page(vec![], 6, 3), 0).await;
    app.mount_page("tv", 1, shelf_page(vec![], 0, 0), 1).await;

    let (status, body) = app.get_json("/complete/screen/2024").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(&body), ["Item m-2024"]);
}

#[tokio::test]
async fn screen_without_year_returns_data() {
    let app = spawn_app().await;
    app.mount_page("movie", 1, shelf_page(vec![], 0, 0), 1).await;
    app.mount_page("tv", 1, shelf_page(vec![], 0, 0), 1).await;

    let (status, body) = app.get_json("/complete/screen").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "data": [] }));
}

#[tokio::test]
async fn movie_and_tv_are_fetched_concurrently() {
    let app = spawn_app().await;
    let delay = Duration::from_millis(300);

    for category in ["movie", "tv"] {
        for page in 1..=2u64 {
            let body = shelf_page(
                vec![shelf_item(
                    &format!("{category}-{page}"),
                    &format!("2024-0{page}-01T00:00:00Z"),
                )],
                2,
                2,
            );
            app.mount_response(
                category,
                page,
                ResponseTemplate::new(200)
                    .set_body_json(body)
                    .set_delay(delay),
                1,
            )
            .await;
        }
    }

    let started = Instant::now();
    let (status, body) = app.get_json("/complete/screen/2024").await;
    let elapsed = started.elapsed();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(&body).len(), 4);

    // Each category needs two sequential pages; doing the categories one after
    // the other would take four delays.
    let sequential = delay * 4;
    assert!(
        elapsed < sequential - delay / 2,
        "screen took {elapsed:?}, sequential would take {sequential:?}"
    );
}

#[tokio::test]
async fn failure_in_either_category_fails_the_request() {
    let app = spawn_app().await;
    app.mount_page(
        "movie",
        1,
        shelf_page(vec![shelf_item("m", "2024-06-01T00:00:00Z")], 1, 1),
        1,
    )
    .await;
    app.mount_response(
        "tv",
        1,
        ResponseTemplate::new(401).set_body_json(json!({ "detail": "Invalid token." })),
        1,
    )
    .await;

    let (status, body) = app.get_json("/complete/screen/2024").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.get("data").is_none());
}
