//! In-memory storage implementation

use std::sync::atomic::{AtomicI32, AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use tokio::sync::Mutex;

use crate::domain::{
    Bundle, BundleRepository, DomainError, DomainResult, PersistenceError, Plan, PlanRepository,
    Product, ProductRepository, ProductService, ProductServiceRepository, RepositoryProvider,
    Service, ServiceRepository,
};

/// In-memory catalog store for development and testing.
///
/// Enforces the same unique and foreign-key constraints as the SQL schema.
/// Writes are serialized through one mutex so every write is a single unit
/// of work; reads go straight to the tables.
pub struct InMemoryStore {
    products: DashMap<i32, Product>,
    services: DashMap<i32, Service>,
    plans: DashMap<i32, Plan>,
    bundles: DashMap<i32, Bundle>,
    product_services: DashMap<i32, ProductService>,
    product_counter: AtomicI32,
    service_counter: AtomicI32,
    plan_counter: AtomicI32,
    bundle_counter: AtomicI32,
    product_service_counter: AtomicI32,
    write_lock: Mutex<()>,
    calls: AtomicUsize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            products: DashMap::new(),
            services: DashMap::new(),
            plans: DashMap::new(),
            bundles: DashMap::new(),
            product_services: DashMap::new(),
            product_counter: AtomicI32::new(1),
            service_counter: AtomicI32::new(1),
            plan_counter: AtomicI32::new(1),
            bundle_counter: AtomicI32::new(1),
            product_service_counter: AtomicI32::new(1),
            write_lock: Mutex::new(()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of repository calls served so far, reads included.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record_call(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RepositoryProvider for InMemoryStore {
    fn products(&self) -> &dyn ProductRepository {
        self
    }

    fn services(&self) -> &dyn ServiceRepository {
        self
    }

    fn plans(&self) -> &dyn PlanRepository {
        self
    }

    fn bundles(&self) -> &dyn BundleRepository {
        self
    }

    fn product_services(&self) -> &dyn ProductServiceRepository {
        self
    }
}

fn unique_violation(constraint: &str) -> DomainError {
    PersistenceError::UniqueViolation(format!("UNIQUE constraint failed: {}", constraint)).into()
}

fn fk_violation(constraint: &str) -> DomainError {
    PersistenceError::ForeignKeyViolation(format!("FOREIGN KEY constraint failed: {}", constraint))
        .into()
}

/// Rows in identity order, which is insertion order.
fn ordered<T: Clone>(table: &DashMap<i32, T>) -> Vec<T> {
    let mut rows: Vec<(i32, T)> = table.iter().map(|e| (*e.key(), e.value().clone())).collect();
    rows.sort_by_key(|(id, _)| *id);
    rows.into_iter().map(|(_, row)| row).collect()
}

fn ordered_where<T: Clone>(table: &DashMap<i32, T>, keep: impl Fn(&T) -> bool) -> Vec<T> {
    ordered(table).into_iter().filter(|row| keep(row)).collect()
}

// ── Products ────────────────────────────────────────────────────

#[async_trait]
impl ProductRepository for InMemoryStore {
    async fn add(&self, mut product: Product) -> DomainResult<Product> {
        self.record_call();
        let _unit = self.write_lock.lock().await;

        let now = Utc::now();
        product.product_id = self.product_counter.fetch_add(1, Ordering::SeqCst);
        product.created_at = now;
        product.updated_at = now;
        self.products.insert(product.product_id, product.clone());
        Ok(product)
    }

    async fn update(&self, product: Product) -> DomainResult<Option<Product>> {
        self.record_call();
        let _unit = self.write_lock.lock().await;

        let Some(mut stored) = self.products.get_mut(&product.product_id) else {
            return Ok(None);
        };
        stored.merge(&product);
        stored.updated_at = Utc::now();
        Ok(Some(stored.clone()))
    }

    async fn get_by_id(&self, id: i32) -> DomainResult<Option<Product>> {
        self.record_call();
        Ok(self.products.get(&id).map(|p| p.clone()))
    }

    async fn get_all(&self) -> DomainResult<Vec<Product>> {
        self.record_call();
        Ok(ordered(&self.products))
    }

    async fn remove(&self, id: i32) -> DomainResult<Option<Product>> {
        self.record_call();
        let _unit = self.write_lock.lock().await;

        if !self.products.contains_key(&id) {
            return Ok(None);
        }
        if self.plans.iter().any(|p| p.product_id == id) {
            return Err(fk_violation("plans.product_id"));
        }
        if self.product_services.iter().any(|l| l.product_id == id) {
            return Err(fk_violation("product_services.product_id"));
        }
        Ok(self.products.remove(&id).map(|(_, p)| p))
    }
}

// ── Services ────────────────────────────────────────────────────

#[async_trait]
impl ServiceRepository for InMemoryStore {
    async fn add(&self, mut service: Service) -> DomainResult<Service> {
        self.record_call();
        let _unit = self.write_lock.lock().await;

        if self
            .services
            .iter()
            .any(|s| s.service_name == service.service_name)
        {
            return Err(unique_violation("services.service_name"));
        }

        let now = Utc::now();
        service.service_id = self.service_counter.fetch_add(1, Ordering::SeqCst);
        service.created_at = now;
        service.updated_at = now;
        self.services.insert(service.service_id, service.clone());
        Ok(service)
    }

    async fn update(&self, service: Service) -> DomainResult<Option<Service>> {
        self.record_call();
        let _unit = self.write_lock.lock().await;

        if !self.services.contains_key(&service.service_id) {
            return Ok(None);
        }
        if self
            .services
            .iter()
            .any(|s| s.service_id != service.service_id && s.service_name == service.service_name)
        {
            return Err(unique_violation("services.service_name"));
        }

        let Some(mut stored) = self.services.get_mut(&service.service_id) else {
            return Ok(None);
        };
        stored.merge(&service);
        stored.updated_at = Utc::now();
        Ok(Some(stored.clone()))
    }

    async fn get_by_id(&self, id: i32) -> DomainResult<Option<Service>> {
        self.record_call();
        Ok(self.services.get(&id).map(|s| s.clone()))
    }

    async fn get_by_name(&self, name: &str) -> DomainResult<Option<Service>> {
        self.record_call();
        Ok(self
            .services
            .iter()
            .find(|s| s.service_name == name)
            .map(|s| s.clone()))
    }

    async fn get_all(&self) -> DomainResult<Vec<Service>> {
        self.record_call();
        Ok(ordered(&self.services))
    }

    async fn remove(&self, id: i32) -> DomainResult<Option<Service>> {
        self.record_call();
        let _unit = self.write_lock.lock().await;

        if !self.services.contains_key(&id) {
            return Ok(None);
        }
        if self.product_services.iter().any(|l| l.service_id == id) {
            return Err(fk_violation("product_services.service_id"));
        }
        Ok(self.services.remove(&id).map(|(_, s)| s))
    }
}

// ── Plans ───────────────────────────────────────────────────────

#[async_trait]
impl PlanRepository for InMemoryStore {
    async fn add(&self, mut plan: Plan) -> DomainResult<Plan> {
        self.record_call();
        let _unit = self.write_lock.lock().await;

        if !self.products.contains_key(&plan.product_id) {
            return Err(fk_violation("plans.product_id"));
        }
        if self.plans.iter().any(|p| p.product_id == plan.product_id) {
            return Err(unique_violation("plans.product_id"));
        }

        let now = Utc::now();
        plan.plan_id = self.plan_counter.fetch_add(1, Ordering::SeqCst);
        plan.created_at = now;
        plan.updated_at = now;
        self.plans.insert(plan.plan_id, plan.clone());
        Ok(plan)
    }

    async fn update(&self, plan: Plan) -> DomainResult<Option<Plan>> {
        self.record_call();
        let _unit = self.write_lock.lock().await;

        if !self.plans.contains_key(&plan.plan_id) {
            return Ok(None);
        }
        if !self.products.contains_key(&plan.product_id) {
            return Err(fk_violation("plans.product_id"));
        }
        if self
            .plans
            .iter()
            .any(|p| p.plan_id != plan.plan_id && p.product_id == plan.product_id)
        {
            return Err(unique_violation("plans.product_id"));
        }

        let Some(mut stored) = self.plans.get_mut(&plan.plan_id) else {
            return Ok(None);
        };
        stored.merge(&plan);
        stored.updated_at = Utc::now();
        Ok(Some(stored.clone()))
    }

    async fn get_by_id(&self, id: i32) -> DomainResult<Option<Plan>> {
        self.record_call();
        Ok(self.plans.get(&id).map(|p| p.clone()))
    }

    async fn get_by_product_id(&self, product_id: i32) -> DomainResult<Option<Plan>> {
        self.record_call();
        Ok(self
            .plans
            .iter()
            .find(|p| p.product_id == product_id)
            .map(|p| p.clone()))
    }

    async fn get_all(&self) -> DomainResult<Vec<Plan>> {
        self.record_call();
        Ok(ordered(&self.plans))
    }

    async fn remove(&self, id: i32) -> DomainResult<Option<Plan>> {
        self.record_call();
        let _unit = self.write_lock.lock().await;
        Ok(self.plans.remove(&id).map(|(_, p)| p))
    }
}

// ── Bundles ─────────────────────────────────────────────────────

#[async_trait]
impl BundleRepository for InMemoryStore {
    async fn add(&self, mut bundle: Bundle) -> DomainResult<Bundle> {
        self.record_call();
        let _unit = self.write_lock.lock().await;

        if self
            .bundles
            .iter()
            .any(|b| b.bundle_name == bundle.bundle_name)
        {
            return Err(unique_violation("bundles.bundle_name"));
        }

        let now = Utc::now();
        bundle.bundle_id = self.bundle_counter.fetch_add(1, Ordering::SeqCst);
        bundle.created_at = now;
        bundle.updated_at = now;
        self.bundles.insert(bundle.bundle_id, bundle.clone());
        Ok(bundle)
    }

    async fn update(&self, bundle: Bundle) -> DomainResult<Option<Bundle>> {
        self.record_call();
        let _unit = self.write_lock.lock().await;

        if !self.bundles.contains_key(&bundle.bundle_id) {
            return Ok(None);
        }
        if self
            .bundles
            .iter()
            .any(|b| b.bundle_id != bundle.bundle_id && b.bundle_name == bundle.bundle_name)
        {
            return Err(unique_violation("bundles.bundle_name"));
        }

        let Some(mut stored) = self.bundles.get_mut(&bundle.bundle_id) else {
            return Ok(None);
        };
        stored.merge(&bundle);
        stored.updated_at = Utc::now();
        Ok(Some(stored.clone()))
    }

    async fn get_by_id(&self, id: i32) -> DomainResult<Option<Bundle>> {
        self.record_call();
        Ok(self.bundles.get(&id).map(|b| b.clone()))
    }

    async fn get_by_name(&self, name: &str) -> DomainResult<Option<Bundle>> {
        self.record_call();
        Ok(self
            .bundles
            .iter()
            .find(|b| b.bundle_name == name)
            .map(|b| b.clone()))
    }

    async fn get_all(&self) -> DomainResult<Vec<Bundle>> {
        self.record_call();
        Ok(ordered(&self.bundles))
    }

    async fn remove(&self, id: i32) -> DomainResult<Option<Bundle>> {
        self.record_call();
        let _unit = self.write_lock.lock().await;
        Ok(self.bundles.remove(&id).map(|(_, b)| b))
    }
}

// ── Product/Service links ───────────────────────────────────────

#[async_trait]
impl ProductServiceRepository for InMemoryStore {
    async fn add(&self, mut link: ProductService) -> DomainResult<ProductService> {
        self.record_call();
        let _unit = self.write_lock.lock().await;

        if !self.products.contains_key(&link.product_id) {
            return Err(fk_violation("product_services.product_id"));
        }
        if !self.services.contains_key(&link.service_id) {
            return Err(fk_violation("product_services.service_id"));
        }
        if self
            .product_services
            .iter()
            .any(|l| l.product_id == link.product_id && l.service_id == link.service_id)
        {
            return Err(unique_violation(
                "product_services.product_id, product_services.service_id",
            ));
        }

        let now = Utc::now();
        link.product_service_id = self.product_service_counter.fetch_add(1, Ordering::SeqCst);
        link.created_at = now;
        link.updated_at = now;
        self.product_services
            .insert(link.product_service_id, link.clone());
        Ok(link)
    }

    async fn update(&self, link: ProductService) -> DomainResult<Option<ProductService>> {
        self.record_call();
        let _unit = self.write_lock.lock().await;

        let Some(mut stored) = self.product_services.get_mut(&link.product_service_id) else {
            return Ok(None);
        };
        stored.merge(&link);
        stored.updated_at = Utc::now();
        Ok(Some(stored.clone()))
    }

    async fn get_by_id(&self, id: i32) -> DomainResult<Option<ProductService>> {
        self.record_call();
        Ok(self.product_services.get(&id).map(|l| l.clone()))
    }

    async fn get_by_product_and_service(
        &self,
        product_id: i32,
        service_id: i32,
    ) -> DomainResult<Option<ProductService>> {
        self.record_call();
        Ok(self
            .product_services
            .iter()
            .find(|l| l.product_id == product_id && l.service_id == service_id)
            .map(|l| l.clone()))
    }

    async fn get_all_by_product_id(&self, product_id: i32) -> DomainResult<Vec<ProductService>> {
        self.record_call();
        Ok(ordered_where(&self.product_services, |l| {
            l.product_id == product_id
        }))
    }

    async fn get_all_by_service_id(&self, service_id: i32) -> DomainResult<Vec<ProductService>> {
        self.record_call();
        Ok(ordered_where(&self.product_services, |l| {
            l.service_id == service_id
        }))
    }

    async fn get_all(&self) -> DomainResult<Vec<ProductService>> {
        self.record_call();
        Ok(ordered(&self.product_services))
    }

    async fn remove(&self, id: i32) -> DomainResult<Option<ProductService>> {
        self.record_call();
        let _unit = self.write_lock.lock().await;
        Ok(self.product_services.remove(&id).map(|(_, l)| l))
    }
}
