use serde_json::json;
use shared::{
    config::{ConnectionManager, run_migrations},
    domain::{
        requests::{CreateProductRequest, UpdateProductRequest},
        responses::ProductResponse,
    },
    errors::RepositoryError,
    repository::ProductRepository,
};

async fn setup() -> ProductRepository {
    let pool = ConnectionManager::in_memory()
        .await
        .expect("Failed to open in-memory database");
    run_migrations(&pool).await.expect("Failed to run migrations");
    ProductRepository::new(pool)
}

fn sample(name: &str) -> CreateProductRequest {
    CreateProductRequest {
        product_name: name.to_string(),
        brand: "boAt".to_string(),
        price: "₹1,299".to_string(),
        features: vec![
            "13mm drivers".to_string(),
            "42H playback".to_string(),
            "ENx noise cancellation".to_string(),
            "IPX4".to_string(),
        ],
        dimensions: "5 x 3 x 2 cm".to_string(),
    }
}

#[tokio::test]
async fn create_then_get_round_trips() {
    let repo = setup().await;
    let input = sample("Airdopes 141");

    let created = repo.command.create_product(&input).await.unwrap();
    assert!(created.id > 0);

    let fetched = repo
        .query
        .find_by_id(created.id)
        .await
        .unwrap()
        .expect("product should exist");
    let response = ProductResponse::from(fetched);

    assert_eq!(response.id, created.id);
    assert_eq!(response.product_name, input.product_name);
    assert_eq!(response.brand.as_deref(), Some(input.brand.as_str()));
    assert_eq!(response.price.as_deref(), Some(input.price.as_str()));
    assert_eq!(response.features, input.features);
    assert_eq!(response.dimensions.as_deref(), Some(input.dimensions.as_str()));
}

#[tokio::test]
async fn features_are_stored_as_json_array() {
    let repo = setup().await;

    let created = repo.command.create_product(&sample("Rockerz")).await.unwrap();

    let stored = created.features.expect("features column should be set");
    let parsed: Vec<String> = serde_json::from_str(&stored).unwrap();
    assert_eq!(parsed.len(), 4);
}

#[tokio::test]
async fn find_all_is_newest_first() {
    let repo = setup().await;

    let first = repo.command.create_product(&sample("first")).await.unwrap();
    let second = repo.command.create_product(&sample("second")).await.unwrap();
    let third = repo.command.create_product(&sample("third")).await.unwrap();

    let all = repo.query.find_all().await.unwrap();
    let ids: Vec<i64> = all.iter().map(|p| p.id).collect();

    assert_eq!(ids, vec![third.id, second.id, first.id]);
    assert!(all[0].created_at >= all[1].created_at);
    assert!(all[1].created_at >= all[2].created_at);
}

#[tokio::test]
async fn find_all_on_empty_store_is_empty() {
    let repo = setup().await;
    assert!(repo.query.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn update_replaces_every_field() {
    let repo = setup().await;
    let created = repo.command.create_product(&sample("old")).await.unwrap();

    let update = UpdateProductRequest {
        product_name: Some("Updated Product Name".into()),
        brand: Some("Updated Brand".into()),
        price: Some("$199.99".into()),
        features: Some(json!("Updated features")),
        dimensions: Some("100mm x 200mm".into()),
    };
    repo.command.update_product(created.id, &update).await.unwrap();

    let response = ProductResponse::from(repo.query.find_by_id(created.id).await.unwrap().unwrap());
    assert_eq!(response.product_name, "Updated Product Name");
    assert_eq!(response.brand.as_deref(), Some("Updated Brand"));
    assert_eq!(response.price.as_deref(), Some("$199.99"));
    assert_eq!(response.features, vec!["Updated features"]);
    assert_eq!(response.dimensions.as_deref(), Some("100mm x 200mm"));
    assert_eq!(response.created_at, created.created_at.to_string());
}

#[tokio::test]
async fn update_with_omitted_fields_writes_nulls() {
    let repo = setup().await;
    let created = repo.command.create_product(&sample("partial")).await.unwrap();

    let update = UpdateProductRequest {
        product_name: Some("Only a name".into()),
        brand: None,
        price: None,
        features: None,
        dimensions: None,
    };
    repo.command.update_product(created.id, &update).await.unwrap();

    let response = ProductResponse::from(repo.query.find_by_id(created.id).await.unwrap().unwrap());
    assert_eq!(response.product_name, "Only a name");
    assert_eq!(response.brand, None);
    assert_eq!(response.price, None);
    assert_eq!(response.dimensions, None);
    assert!(response.features.is_empty());
}

#[tokio::test]
async fn missing_ids_are_not_found() {
    let repo = setup().await;

    assert!(repo.query.find_by_id(999).await.unwrap().is_none());

    let update = UpdateProductRequest {
        product_name: None,
        brand: None,
        price: None,
        features: None,
        dimensions: None,
    };
    assert!(matches!(
        repo.command.update_product(999, &update).await,
        Err(RepositoryError::NotFound)
    ));
    assert!(matches!(
        repo.command.delete_product(999).await,
        Err(RepositoryError::NotFound)
    ));
}

#[tokio::test]
async fn delete_removes_the_record() {
    let repo = setup().await;
    let created = repo.command.create_product(&sample("gone")).await.unwrap();

    repo.command.delete_product(created.id).await.unwrap();

    assert!(repo.query.find_by_id(created.id).await.unwrap().is_none());
    assert!(matches!(
        repo.command.delete_product(created.id).await,
        Err(RepositoryError::NotFound)
    ));
}

#[tokio::test]
async fn update_keeps_an_empty_product_name() {
    let repo = setup().await;
    let created = repo.command.create_product(&sample("named")).await.unwrap();

    let update = UpdateProductRequest {
        product_name: Some(String::new()),
        brand: Some("B".into()),
        price: None,
        features: None,
        dimensions: None,
    };
    repo.command.update_product(created.id, &update).await.unwrap();

    let response = ProductResponse::from(repo.query.find_by_id(created.id).await.unwrap().unwrap());
    assert_eq!(response.product_name, "");
    assert_eq!(response.brand.as_deref(), Some("B"));
}

#[tokio::test]
async fn update_without_product_name_fails_on_existing_row() {
    let repo = setup().await;
    let created = repo.command.create_product(&sample("kept")).await.unwrap();

    let update = UpdateProductRequest {
        product_name: None,
        brand: Some("B".into()),
        price: None,
        features: None,
        dimensions: None,
    };

    assert!(matches!(
        repo.command.update_product(created.id, &update).await,
        Err(RepositoryError::Sqlx(_))
    ));

    let response = ProductResponse::from(repo.query.find_by_id(created.id).await.unwrap().unwrap());
    assert_eq!(response.product_name, "kept");
}
