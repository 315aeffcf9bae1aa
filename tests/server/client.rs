use yearshelf::domain::categories::Category;
use yearshelf::infrastructure::client::YearshelfClient;

use crate::helpers::{shelf_item, shelf_page, spawn_app};

#[tokio::test]
async fn client_fetches_category_for_year() {
    let app = spawn_app().await;
    app.mount_page(
        "book",
        1,
        shelf_page(
            vec![
                shelf_item("dune", "2023-04-01T00:00:00Z"),
                shelf_item("older", "2022-04-01T00:00:00Z"),
            ],
            2,
            1,
        ),
        1,
    )
    .await;

    let client = YearshelfClient::from_base_url(&app.address).unwrap();
    let items = client
        .completions()
        .category(Category::Book, Some(2023))
        .await
        .unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].item.display_title, "Item dune");
    assert_eq!(items[0].created_time, "2023-04-01T00:00:00Z");
}

#[tokio::test]
async fn client_fetches_screen_feed() {
    let app = spawn_app().await;
    app.mount_page(
        "movie",
        1,
        shelf_page(vec![shelf_item("film", "2023-02-01T00:00:00Z")], 1, 1),
        1,
    )
    .await;
    app.mount_page(
        "tv",
        1,
        shelf_page(vec![shelf_item("show", "2023-03-01T00:00:00Z")], 1, 1),
        1,
    )
    .await;

    let client = YearshelfClient::from_base_url(&app.address).unwrap();
    let items = client.completions().screen(Some(2023)).await.unwrap();

    let titles: Vec<&str> = items.iter().map(|i| i.item.display_title.as_str()).collect();
    assert_eq!(titles, ["Item show", "Item film"]);
}

#[tokio::test]
async fn client_reports_server_errors() {
    let app = spawn_app().await;

    // Nothing mounted upstream, so the shelf request 404s with an empty body.
    let client = YearshelfClient::from_base_url(&app.address).unwrap();
    let err = client
        .completions()
        .category(Category::Game, Some(2023))
        .await
        .unwrap_err();

    assert!(err.to_string().contains("500"), "unexpected error: {err}");
}
