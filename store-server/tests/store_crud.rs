//! Store-level behavior against the in-memory engine
//!
//! Run: cargo test -p store-server --test store_crud

use std::collections::HashMap;
use surrealdb::Surreal;
use surrealdb::engine::local::Mem;

use store_server::db::models::{ImageRecord, ProductCreate, ProductUpdate};
use store_server::db::repository::{RepoError, make_thing};
use store_server::{Config, ServerState};

use shared::models::{ProductStatus, UNKNOWN_CATEGORY};

async fn mem_state() -> ServerState {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("storefront").use_db("catalog").await.unwrap();
    store_server::db::init_schema(&db).await.unwrap();

    let mut config = Config::with_overrides("unused", 0);
    config.request_timeout_ms = 5_000;
    ServerState::with_db(config, db)
}

fn create_payload(name: &str, category: &surrealdb::sql::Thing) -> ProductCreate {
    ProductCreate {
        name: name.to_string(),
        category: category.clone(),
        marvel_category: "Premium".to_string(),
        description: format!("{} mattress", name),
        features: vec!["Cooling cover".to_string(), "Edge support".to_string()],
        price: 1299.0,
        status: None,
        images: vec![],
    }
}

fn png_stub(seed: u8) -> ImageRecord {
    ImageRecord {
        data: vec![seed, seed.wrapping_add(1), seed.wrapping_add(2), 0xFF],
        content_type: "image/png".to_string(),
    }
}

// ==================== Categories ====================

#[tokio::test]
async fn category_names_are_unique() {
    let state = mem_state().await;
    let repo = state.categories();

    let created = repo.create("Memory Foam".into()).await.unwrap();
    assert_eq!(created.name, "Memory Foam");
    assert!(created.id.is_some());

    let err = repo.create("Memory Foam".into()).await.unwrap_err();
    assert!(matches!(err, RepoError::Duplicate(_)));

    // Case-sensitive exact match: different casing is a different category
    repo.create("memory foam".into()).await.unwrap();

    let all = repo.find_all().await.unwrap();
    assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn category_delete_refused_while_referenced() {
    let state = mem_state().await;
    let categories = state.categories();
    let products = state.products();

    let category = categories.create("Latex".into()).await.unwrap();
    let category_id = category.id.clone().unwrap();

    products
        .create(create_payload("Basalt", &category_id))
        .await
        .unwrap();

    let err = categories
        .delete(&category_id.to_string())
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));

    // After the product goes away the delete is allowed
    let all = products.find_summaries().await.unwrap();
    let product_id = all[0].id.clone().unwrap().to_string();
    products.delete(&product_id).await.unwrap();

    categories.delete(&category_id.to_string()).await.unwrap();
    assert!(categories.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn category_delete_missing_is_not_found() {
    let state = mem_state().await;
    let err = state.categories().delete("category:ghost").await.unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)));
}

// ==================== Products ====================

#[tokio::test]
async fn product_create_applies_defaults() {
    let state = mem_state().await;
    let category = state.categories().create("Hybrid".into()).await.unwrap();

    let created = state
        .products()
        .create(create_payload("Aurora", &category.id.unwrap()))
        .await
        .unwrap();

    assert_eq!(created.views, 0);
    assert_eq!(created.status, ProductStatus::Active);
    assert_eq!(created.features, ["Cooling cover", "Edge support"]);
    assert!(created.images.is_empty());
    assert!(created.created_at > 0);
}

#[tokio::test]
async fn product_create_rejects_negative_price_and_image_overflow() {
    let state = mem_state().await;
    let category = state.categories().create("Foam".into()).await.unwrap();
    let category_id = category.id.unwrap();

    let mut bad_price = create_payload("Aurora", &category_id);
    bad_price.price = -1.0;
    assert!(matches!(
        state.products().create(bad_price).await.unwrap_err(),
        RepoError::Validation(_)
    ));

    let mut too_many = create_payload("Aurora", &category_id);
    too_many.images = (0..6).map(png_stub).collect();
    assert!(matches!(
        state.products().create(too_many).await.unwrap_err(),
        RepoError::Validation(_)
    ));
}

#[tokio::test]
async fn image_bytes_survive_verbatim() {
    let state = mem_state().await;
    let category = state.categories().create("Foam".into()).await.unwrap();

    let mut payload = create_payload("Aurora", &category.id.unwrap());
    payload.images = vec![png_stub(10), png_stub(20)];
    let stored = payload.images.clone();

    let created = state.products().create(payload).await.unwrap();
    let id = created.id.unwrap().to_string();

    let detail = state.products().find_detail(&id).await.unwrap().unwrap();
    assert_eq!(detail.images, stored);
}

#[tokio::test]
async fn list_projection_excludes_image_payload() {
    let state = mem_state().await;
    let category = state.categories().create("Foam".into()).await.unwrap();

    let mut payload = create_payload("Aurora", &category.id.unwrap());
    payload.images = vec![png_stub(1)];
    state.products().create(payload).await.unwrap();

    // The raw list projection row must not even carry an images field
    let mut result = state
        .db
        .query("SELECT * OMIT images FROM product")
        .await
        .unwrap();
    let rows: Vec<serde_json::Value> = result.take(0).unwrap();
    assert_eq!(rows.len(), 1);
    assert!(rows[0].get("images").is_none());

    // And the typed summary read works against it
    let summaries = state.products().find_summaries().await.unwrap();
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].name, "Aurora");
}

#[tokio::test]
async fn update_is_partial_for_metadata() {
    let state = mem_state().await;
    let category = state.categories().create("Foam".into()).await.unwrap();

    let created = state
        .products()
        .create(create_payload("Aurora", &category.id.unwrap()))
        .await
        .unwrap();
    let id = created.id.unwrap().to_string();

    let updated = state
        .products()
        .update(
            &id,
            ProductUpdate {
                price: Some(999.0),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    // Only price changed; everything else kept its prior value
    assert_eq!(updated.price, 999.0);
    assert_eq!(updated.name, "Aurora");
    assert_eq!(updated.marvel_category, "Premium");
    assert_eq!(updated.status, ProductStatus::Active);
}

#[tokio::test]
async fn update_replaces_images_wholesale_or_not_at_all() {
    let state = mem_state().await;
    let category = state.categories().create("Foam".into()).await.unwrap();

    let mut payload = create_payload("Aurora", &category.id.unwrap());
    payload.images = vec![png_stub(1), png_stub(2), png_stub(3)];
    let original = payload.images.clone();

    let created = state.products().create(payload).await.unwrap();
    let id = created.id.unwrap().to_string();

    // Metadata-only update: images byte-for-byte unchanged
    state
        .products()
        .update(
            &id,
            ProductUpdate {
                description: Some("updated copy".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    let detail = state.products().find_detail(&id).await.unwrap().unwrap();
    assert_eq!(detail.images, original);

    // Non-empty image list: the whole sequence is replaced
    let replacement = vec![png_stub(99)];
    state
        .products()
        .update(
            &id,
            ProductUpdate {
                images: Some(replacement.clone()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    let detail = state.products().find_detail(&id).await.unwrap().unwrap();
    assert_eq!(detail.images, replacement);
}

#[tokio::test]
async fn update_and_delete_surface_not_found() {
    let state = mem_state().await;

    let err = state
        .products()
        .update(
            "product:ghost",
            ProductUpdate {
                price: Some(1.0),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)));

    let err = state.products().delete("product:ghost").await.unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)));
}

#[tokio::test]
async fn views_counter_increments() {
    let state = mem_state().await;
    let category = state.categories().create("Foam".into()).await.unwrap();

    let created = state
        .products()
        .create(create_payload("Aurora", &category.id.unwrap()))
        .await
        .unwrap();
    let id = created.id.unwrap().to_string();

    state.products().increment_views(&id).await.unwrap();
    state.products().increment_views(&id).await.unwrap();

    let detail = state.products().find_detail(&id).await.unwrap().unwrap();
    assert_eq!(detail.views, 2);
}

#[tokio::test]
async fn dangling_category_reads_as_unknown() {
    let state = mem_state().await;
    let category = state.categories().create("Foam".into()).await.unwrap();
    let category_id = category.id.unwrap();

    state
        .products()
        .create(create_payload("Aurora", &category_id))
        .await
        .unwrap();

    // Remove the category underneath the product (bypassing the guard)
    state
        .db
        .query("DELETE $thing")
        .bind(("thing", category_id))
        .await
        .unwrap();

    let summaries = state.products().find_summaries().await.unwrap();
    let names = store_server::api::convert::category_name_map(
        &state.categories().find_all().await.unwrap(),
    );
    let summary = store_server::api::convert::summary_from(summaries[0].clone(), &names);
    assert_eq!(summary.category_name, UNKNOWN_CATEGORY);
}

// ==================== Wire encoding ====================

#[tokio::test]
async fn detail_encodes_images_as_data_uris() {
    let state = mem_state().await;
    let category = state.categories().create("Foam".into()).await.unwrap();

    let mut payload = create_payload("Aurora", &category.id.unwrap());
    payload.images = vec![ImageRecord {
        data: vec![0xDE, 0xAD, 0xBE, 0xEF],
        content_type: "image/jpeg".to_string(),
    }];
    let created = state.products().create(payload).await.unwrap();
    let id = created.id.unwrap().to_string();

    let record = state.products().find_detail(&id).await.unwrap().unwrap();
    let names: HashMap<String, String> = store_server::api::convert::category_name_map(
        &state.categories().find_all().await.unwrap(),
    );
    let detail = store_server::api::convert::detail_from(record, &names);

    assert_eq!(detail.images, ["data:image/jpeg;base64,3q2+7w=="]);
    assert_eq!(detail.category_name, "Foam");
    assert_eq!(detail.primary_image(), "data:image/jpeg;base64,3q2+7w==");
}

#[tokio::test]
async fn last_write_wins_per_document() {
    let state = mem_state().await;
    let category = state.categories().create("Foam".into()).await.unwrap();

    let created = state
        .products()
        .create(create_payload("Aurora", &category.id.unwrap()))
        .await
        .unwrap();
    let id = created.id.unwrap().to_string();

    // Two sequential writers; the second one's value sticks
    let first_repo = state.products();
    let first = first_repo.update(
        &id,
        ProductUpdate {
            price: Some(100.0),
            ..Default::default()
        },
    );
    let second_repo = state.products();
    let second = second_repo.update(
        &id,
        ProductUpdate {
            price: Some(200.0),
            ..Default::default()
        },
    );
    first.await.unwrap();
    second.await.unwrap();

    let detail = state.products().find_detail(&id).await.unwrap().unwrap();
    assert_eq!(detail.price, 200.0);
}

#[tokio::test]
async fn on_disk_store_survives_reopen_setup() {
    // Exercises the RocksDB path used in production
    let tmp = tempfile::tempdir().unwrap();
    let db = store_server::db::connect(tmp.path()).await.unwrap();

    let mut config = Config::with_overrides(tmp.path().to_string_lossy(), 0);
    config.request_timeout_ms = 5_000;
    let state = ServerState::with_db(config, db);

    let category = state.categories().create("Foam".into()).await.unwrap();
    let created = state
        .products()
        .create(create_payload("Aurora", &category.id.unwrap()))
        .await
        .unwrap();

    let id = created.id.unwrap().to_string();
    let detail = state.products().find_detail(&id).await.unwrap().unwrap();
    assert_eq!(detail.name, "Aurora");
}

#[tokio::test]
async fn product_ids_round_trip_with_table_prefix() {
    let state = mem_state().await;
    let category = state.categories().create("Foam".into()).await.unwrap();

    let created = state
        .products()
        .create(create_payload("Aurora", &category.id.unwrap()))
        .await
        .unwrap();
    let id_string = created.id.clone().unwrap().to_string();
    assert!(id_string.starts_with("product:"));

    // Lookup works with and without the table prefix
    assert!(state
        .products()
        .find_detail(&id_string)
        .await
        .unwrap()
        .is_some());
    let bare = id_string.strip_prefix("product:").unwrap();
    assert!(state.products().find_detail(bare).await.unwrap().is_some());

    let thing = make_thing("product", &id_string);
    assert_eq!(thing, created.id.unwrap());
}
