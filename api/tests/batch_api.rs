mod common;

use axum::http::StatusCode;
use axum_test::multipart::MultipartForm;
use common::{AppContext, image_part, upload_form};
use recipelens_api::application::http::{
    batch::handlers::classify_batch::BatchResponse,
    server::api_entities::api_error::ApiErrorResponse,
};
use test_context::test_context;

#[test_context(AppContext)]
#[tokio::test]
async fn test_pizza_and_dog_yield_one_recipe(ctx: &mut AppContext) {
    let response = ctx
        .server
        .post("/api/batches")
        .multipart(upload_form(&[("pizza", "pizza.jpg"), ("dog", "dog.jpg")]))
        .await;

    response.assert_status_ok();
    let batch: BatchResponse = response.json();

    assert_eq!(batch.images.len(), 2);
    assert_eq!(
        batch.images[0].display,
        vec!["1. Pizza (91.23%)", "2. Plate (5.00%)", "3. Burrito (1.00%)"]
    );
    assert_eq!(
        batch.images[1].display,
        vec![
            "1. Golden retriever (80.00%)",
            "2. Labrador retriever (10.00%)",
            "3. Tennis ball (5.00%)"
        ]
    );
    assert_eq!(batch.images[0].file_name.as_deref(), Some("pizza.jpg"));
    assert_eq!(batch.identified_foods, vec!["pizza"]);
    assert_eq!(batch.recipes.len(), 1);
    assert_eq!(batch.recipes[0].title, "Pizza");
    assert!(batch.recipes[0].display.starts_with("Pizza: 🍕 Pizza Recipe:"));
    assert!(batch.notice.is_none());
}

#[test_context(AppContext)]
#[tokio::test]
async fn test_empty_batch(ctx: &mut AppContext) {
    let response = ctx
        .server
        .post("/api/batches")
        .multipart(MultipartForm::new().add_text("comment", "nothing"))
        .await;

    response.assert_status_ok();
    let batch: BatchResponse = response.json();

    assert!(batch.images.is_empty());
    assert!(batch.recipes.is_empty());
    assert!(batch.notice.is_none());
}

#[test_context(AppContext)]
#[tokio::test]
async fn test_no_known_foods_shows_notice(ctx: &mut AppContext) {
    let response = ctx
        .server
        .post("/api/batches")
        .multipart(upload_form(&[("dog", "dog.jpg")]))
        .await;

    response.assert_status_ok();
    let batch: BatchResponse = response.json();

    assert_eq!(batch.images.len(), 1);
    assert!(batch.recipes.is_empty());
    assert_eq!(
        batch.notice.as_deref(),
        Some("No known food items identified for recipes.")
    );
}

#[test_context(AppContext)]
#[tokio::test]
async fn test_unreadable_image_does_not_abort_batch(ctx: &mut AppContext) {
    let response = ctx
        .server
        .post("/api/batches")
        .multipart(upload_form(&[
            ("pizza", "one.jpg"),
            ("not an image", "two.jpg"),
            ("dog", "three.jpg"),
        ]))
        .await;

    response.assert_status_ok();
    let batch: BatchResponse = response.json();

    assert_eq!(batch.images.len(), 3);
    assert_eq!(batch.images[1].index, 1);
    assert_eq!(
        batch.images[1].display,
        vec!["Could not read image: unrecognized image format"]
    );
    assert_eq!(batch.images[0].display.len(), 3);
    assert_eq!(batch.images[2].display.len(), 3);
}

#[test_context(AppContext)]
#[tokio::test]
async fn test_duplicate_foods_give_one_card(ctx: &mut AppContext) {
    let response = ctx
        .server
        .post("/api/batches")
        .multipart(upload_form(&[("pizza", "a.jpg"), ("pizza", "b.jpg")]))
        .await;

    let batch: BatchResponse = response.json();

    assert_eq!(batch.images.len(), 2);
    assert_eq!(
        batch
            .recipes
            .iter()
            .filter(|card| card.label == "pizza")
            .count(),
        1
    );
}

#[test_context(AppContext)]
#[tokio::test]
async fn test_single_image_field_and_empty_parts(ctx: &mut AppContext) {
    let form = MultipartForm::new()
        .add_part("image", image_part("pizza", "pizza.jpg"))
        .add_part("images", image_part("", ""));

    let response = ctx.server.post("/api/batches").multipart(form).await;

    response.assert_status_ok();
    let batch: BatchResponse = response.json();
    assert_eq!(batch.images.len(), 1);
}

#[test_context(AppContext)]
#[tokio::test]
async fn test_named_empty_file_is_reported_as_unreadable(ctx: &mut AppContext) {
    let form = MultipartForm::new().add_part("images", image_part("", "photo.jpg"));

    let response = ctx.server.post("/api/batches").multipart(form).await;

    response.assert_status_ok();
    let batch: BatchResponse = response.json();

    assert_eq!(batch.images.len(), 1);
    assert_eq!(batch.images[0].file_name.as_deref(), Some("photo.jpg"));
    assert_eq!(batch.images[0].size_bytes, 0);
    assert_eq!(
        batch.images[0].checksum_sha256,
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
    assert!(batch.images[0].display[0].starts_with("Could not read image:"));
    assert_eq!(
        batch.notice.as_deref(),
        Some("No known food items identified for recipes.")
    );
}

#[test_context(AppContext)]
#[tokio::test]
async fn test_classifier_outage_is_503(ctx: &mut AppContext) {
    let response = ctx
        .server
        .post("/api/batches")
        .multipart(upload_form(&[("pizza", "a.jpg"), ("outage", "b.jpg")]))
        .expect_failure()
        .await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let error: ApiErrorResponse = response.json();

    assert_eq!(error.status, 503);
    assert_eq!(error.code, "E_SERVICE_UNAVAILABLE");
    assert_eq!(error.message, "Classification unavailable: inference failed");
}
