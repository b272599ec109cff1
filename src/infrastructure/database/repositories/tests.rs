use crate::domain::{
    Bundle, DomainError, PersistenceError, Plan, Product, ProductService, RepositoryProvider,
    Service,
};
use crate::infrastructure::database::{init_database, run_migrations, DatabaseConfig};

use super::SeaOrmRepositoryProvider;

async fn repos() -> SeaOrmRepositoryProvider {
    let db = init_database(&DatabaseConfig::sqlite_in_memory())
        .await
        .expect("connect in-memory sqlite");
    run_migrations(&db).await.expect("migrate");
    SeaOrmRepositoryProvider::new(db)
}

async fn add_dummy_product(repos: &SeaOrmRepositoryProvider, name: &str) -> Product {
    repos.products().add(Product::new(name)).await.unwrap()
}

async fn add_dummy_plan(repos: &SeaOrmRepositoryProvider, product_id: i32, days: i32) -> Plan {
    repos.plans().add(Plan::new(product_id, days)).await.unwrap()
}

fn is_unique_violation(err: &DomainError) -> bool {
    matches!(err, DomainError::Persistence(PersistenceError::UniqueViolation(_)))
}

fn is_fk_violation(err: &DomainError) -> bool {
    matches!(err, DomainError::Persistence(PersistenceError::ForeignKeyViolation(_)))
}

#[tokio::test]
async fn add_plan_assigns_identity() {
    let repos = repos().await;
    let product = add_dummy_product(&repos, "dummy product").await;

    let plan = add_dummy_plan(&repos, product.product_id, 30).await;

    assert!(plan.plan_id > 0);
    assert_eq!(plan.product_id, product.product_id);
    assert_eq!(plan.validity_days, 30);
}

#[tokio::test]
async fn add_plan_without_product_fails() {
    let repos = repos().await;

    let err = repos.plans().add(Plan::new(42, 45)).await.unwrap_err();

    assert!(is_fk_violation(&err), "unexpected error: {err:?}");
    assert!(repos.plans().get_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn duplicate_product_to_plan_fails() {
    let repos = repos().await;
    let product = add_dummy_product(&repos, "dummy product").await;
    add_dummy_plan(&repos, product.product_id, 30).await;

    let err = repos
        .plans()
        .add(Plan::new(product.product_id, 40))
        .await
        .unwrap_err();

    assert!(is_unique_violation(&err), "unexpected error: {err:?}");
}

#[tokio::test]
async fn update_plan_overwrites_fields() {
    let repos = repos().await;
    let product = add_dummy_product(&repos, "dummy product").await;
    let mut plan = add_dummy_plan(&repos, product.product_id, 30).await;

    plan.validity_days = 45;
    let updated = repos.plans().update(plan.clone()).await.unwrap().unwrap();

    assert_eq!(updated.validity_days, 45);
    assert_eq!(updated.plan_id, plan.plan_id);
    assert_eq!(updated.created_at, plan.created_at);
    assert!(updated.updated_at >= plan.updated_at);
}

#[tokio::test]
async fn update_missing_plan_returns_none() {
    let repos = repos().await;
    let mut plan = Plan::new(1, 30);
    plan.plan_id = 77;

    assert!(repos.plans().update(plan).await.unwrap().is_none());
}

#[tokio::test]
async fn remove_plan_returns_prior_value() {
    let repos = repos().await;
    let product = add_dummy_product(&repos, "dummy product").await;
    let plan = add_dummy_plan(&repos, product.product_id, 30).await;

    let removed = repos.plans().remove(plan.plan_id).await.unwrap().unwrap();

    assert_eq!(removed.product_id, product.product_id);
    assert_eq!(removed.validity_days, 30);
    assert!(repos.plans().get_by_id(plan.plan_id).await.unwrap().is_none());
    assert!(repos.plans().remove(plan.plan_id).await.unwrap().is_none());
}

#[tokio::test]
async fn get_plan_by_id_and_product() {
    let repos = repos().await;
    let product = add_dummy_product(&repos, "dummy product").await;
    let plan = add_dummy_plan(&repos, product.product_id, 30).await;

    let by_id = repos.plans().get_by_id(plan.plan_id).await.unwrap().unwrap();
    let by_product = repos
        .plans()
        .get_by_product_id(product.product_id)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(by_id, by_product);
    assert_eq!(by_id.validity_days, 30);
}

#[tokio::test]
async fn get_all_plans_in_insertion_order() {
    let repos = repos().await;
    let p = add_dummy_product(&repos, "dummy product").await;
    let p1 = add_dummy_product(&repos, "dummy product1").await;
    let p2 = add_dummy_product(&repos, "dummy product2").await;

    add_dummy_plan(&repos, p.product_id, 30).await;
    add_dummy_plan(&repos, p1.product_id, 40).await;
    add_dummy_plan(&repos, p2.product_id, 70).await;

    let days: Vec<i32> = repos
        .plans()
        .get_all()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.validity_days)
        .collect();
    assert_eq!(days, vec![30, 40, 70]);
}

#[tokio::test]
async fn service_names_are_unique_and_case_sensitive() {
    let repos = repos().await;
    repos.services().add(Service::new("Voice")).await.unwrap();

    let err = repos.services().add(Service::new("Voice")).await.unwrap_err();
    assert!(is_unique_violation(&err), "unexpected error: {err:?}");

    repos.services().add(Service::new("voice")).await.unwrap();
    assert_eq!(repos.services().get_all().await.unwrap().len(), 2);

    let found = repos.services().get_by_name("Voice").await.unwrap().unwrap();
    assert_eq!(found.service_name, "Voice");
    assert!(repos.services().get_by_name("VOICE").await.unwrap().is_none());
}

#[tokio::test]
async fn linked_service_cannot_be_deleted_by_the_store() {
    let repos = repos().await;
    let product = add_dummy_product(&repos, "Starter").await;
    let service = repos.services().add(Service::new("SMS")).await.unwrap();
    repos
        .product_services()
        .add(ProductService::new(product.product_id, service.service_id, 100))
        .await
        .unwrap();

    let err = repos.services().remove(service.service_id).await.unwrap_err();

    assert!(is_fk_violation(&err), "unexpected error: {err:?}");
    assert!(repos
        .services()
        .get_by_id(service.service_id)
        .await
        .unwrap()
        .is_some());
}

#[tokio::test]
async fn product_service_links_query_both_ways() {
    let repos = repos().await;
    let starter = add_dummy_product(&repos, "Starter").await;
    let premium = add_dummy_product(&repos, "Premium").await;
    let sms = repos.services().add(Service::new("SMS")).await.unwrap();
    let data = repos.services().add(Service::new("Data")).await.unwrap();

    let links = repos.product_services();
    links
        .add(ProductService::new(starter.product_id, sms.service_id, 100))
        .await
        .unwrap();
    links
        .add(ProductService::new(premium.product_id, sms.service_id, 500))
        .await
        .unwrap();
    links
        .add(ProductService::new(premium.product_id, data.service_id, 2048))
        .await
        .unwrap();

    assert_eq!(links.get_all_by_service_id(sms.service_id).await.unwrap().len(), 2);
    assert_eq!(links.get_all_by_product_id(premium.product_id).await.unwrap().len(), 2);

    let err = links
        .add(ProductService::new(starter.product_id, sms.service_id, 1))
        .await
        .unwrap_err();
    assert!(is_unique_violation(&err), "unexpected error: {err:?}");

    let link = links
        .get_by_product_and_service(premium.product_id, data.service_id)
        .await
        .unwrap()
        .unwrap();
    let mut changed = link.clone();
    changed.units = 4096;
    changed.service_id = sms.service_id;
    let updated = links.update(changed).await.unwrap().unwrap();
    assert_eq!(updated.units, 4096);
    assert_eq!(updated.service_id, data.service_id);
}

#[tokio::test]
async fn bundle_crud_round() {
    let repos = repos().await;
    let bundle = repos.bundles().add(Bundle::new("Family", 2500)).await.unwrap();
    assert!(bundle.bundle_id > 0);

    let mut changed = bundle.clone();
    changed.price = 3000;
    let updated = repos.bundles().update(changed).await.unwrap().unwrap();
    assert_eq!(updated.price, 3000);
    assert_eq!(updated.bundle_name, "Family");

    let removed = repos.bundles().remove(bundle.bundle_id).await.unwrap().unwrap();
    assert_eq!(removed.price, 3000);
    assert!(repos.bundles().get_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn product_with_plan_cannot_be_deleted_by_the_store() {
    let repos = repos().await;
    let product = add_dummy_product(&repos, "Monthly").await;
    add_dummy_plan(&repos, product.product_id, 30).await;

    let err = repos.products().remove(product.product_id).await.unwrap_err();

    assert!(is_fk_violation(&err), "unexpected error: {err:?}");
    let err = err.constraint_as_conflict(|| "The product is used by a plan".into());
    assert!(matches!(err, DomainError::Conflict(_)));
    assert!(repos
        .products()
        .get_by_id(product.product_id)
        .await
        .unwrap()
        .is_some());
}
