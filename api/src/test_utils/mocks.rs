//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::config::StorageProvider;
use crate::domain::entities::{
    BlogPost, BlogPostId, LearningResource, LearningResourceId, NewBlogPost, NewLearningResource,
    NewPortfolioProject, NewProduct, NewServicePackage, NewTestimonial, PortfolioProject,
    PortfolioProjectId, PostStatus, Product, ProductId, Resource, ReviewRecord, ServicePackage,
    ServicePackageId, Testimonial, TestimonialId, UserId, UserProfile,
};
use crate::domain::ports::{
    BlogPostRepository, ObjectStorage, ResourceRepository, StoredObject, UserRepository,
};
use crate::error::{DomainError, StorageError};

// ============================================================================
// Record construction
// ============================================================================

/// How the in-memory repository builds and orders a record type
pub trait InMemoryRecord: Resource {
    fn from_input(id: Self::Id, input: &Self::Input, created_at: DateTime<Utc>) -> Self;

    fn created_at(&self) -> DateTime<Utc>;

    /// Table default order; id ascending unless overridden
    fn sort(records: &mut [Self]) {
        records.sort_by_key(|r| Into::<i64>::into(r.id()));
    }
}

fn newest_first<T: InMemoryRecord>(records: &mut [T]) {
    records.sort_by(|a, b| {
        b.created_at()
            .cmp(&a.created_at())
            .then_with(|| Into::<i64>::into(b.id()).cmp(&Into::<i64>::into(a.id())))
    });
}

impl InMemoryRecord for Product {
    fn from_input(id: ProductId, p: &NewProduct, created_at: DateTime<Utc>) -> Self {
        Product {
            id,
            name: p.name.clone(),
            description: p.description.clone(),
            category: p.category.clone(),
            price: p.price.clone(),
            rating: p.rating,
            users: p.users.clone(),
            release_date: p.release_date.clone(),
            features: p.features.clone(),
            gallery: p.gallery.clone(),
            image_url: p.image_url.clone(),
            product_url: p.product_url.clone(),
            status: p.status,
            role: p.role.clone(),
            review: p.review.clone(),
            created_at,
        }
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl InMemoryRecord for LearningResource {
    fn from_input(
        id: LearningResourceId,
        r: &NewLearningResource,
        created_at: DateTime<Utc>,
    ) -> Self {
        LearningResource {
            id,
            title: r.title.clone(),
            description: r.description.clone(),
            kind: r.kind.clone(),
            duration: r.duration.clone(),
            level: r.level,
            instructor: r.instructor.clone(),
            image_url: r.image_url.clone(),
            link_url: r.link_url.clone(),
            tags: r.tags.clone(),
            created_at,
        }
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl InMemoryRecord for PortfolioProject {
    fn from_input(
        id: PortfolioProjectId,
        p: &NewPortfolioProject,
        created_at: DateTime<Utc>,
    ) -> Self {
        PortfolioProject {
            id,
            title: p.title.clone(),
            description: p.description.clone(),
            category: p.category.clone(),
            image_url: p.image_url.clone(),
            gallery: p.gallery.clone(),
            results: p.results.clone(),
            tech: p.tech.clone(),
            rating: p.rating,
            publish_date: p.publish_date.clone(),
            link: p.link.clone(),
            review: p.review.clone(),
            created_at,
        }
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl InMemoryRecord for Testimonial {
    fn from_input(id: TestimonialId, t: &NewTestimonial, created_at: DateTime<Utc>) -> Self {
        Testimonial {
            id,
            name: t.name.clone(),
            role: t.role.clone(),
            company: t.company.clone(),
            testimonial: t.testimonial.clone(),
            rating: t.rating,
            avatar: t.avatar.clone(),
            created_at,
        }
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn sort(records: &mut [Self]) {
        newest_first(records);
    }
}

impl InMemoryRecord for ServicePackage {
    fn from_input(id: ServicePackageId, s: &NewServicePackage, created_at: DateTime<Utc>) -> Self {
        ServicePackage {
            id,
            name: s.name.clone(),
            price_label: s.price_label.clone(),
            target: s.target.clone(),
            features: s.features.clone(),
            duration: s.duration.clone(),
            optional_note: s.optional_note.clone(),
            popular: s.popular,
            sort_order: s.sort_order,
            created_at,
        }
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn sort(records: &mut [Self]) {
        records.sort_by_key(|s| (s.sort_order, s.id));
    }
}

impl InMemoryRecord for BlogPost {
    fn from_input(id: BlogPostId, p: &NewBlogPost, created_at: DateTime<Utc>) -> Self {
        BlogPost {
            id,
            title: p.title.clone(),
            slug: p.slug.clone(),
            excerpt: p.excerpt.clone(),
            content: p.content.clone(),
            date: p.date,
            author_id: p.author_id,
            author: p.author.clone(),
            tags: p.tags.clone(),
            image_url: p.image_url.clone(),
            read_time: p.read_time.clone(),
            status: p.status,
            reviewed_by: p.reviewed_by,
            reviewed_at: p.reviewed_at,
            rejection_reason: p.rejection_reason.clone(),
            published_at: p.published_at,
            created_at,
        }
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn sort(records: &mut [Self]) {
        newest_first(records);
    }
}

// ============================================================================
// In-Memory Resource Repository
// ============================================================================

/// In-memory table with sequential ids starting at 1
pub struct InMemoryResourceRepository<T: InMemoryRecord> {
    records: Arc<RwLock<HashMap<i64, T>>>,
    next_id: AtomicI64,
    failure: RwLock<Option<String>>,
    writes: AtomicUsize,
}

impl<T: InMemoryRecord> Default for InMemoryResourceRepository<T> {
    fn default() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
            next_id: AtomicI64::new(1),
            failure: RwLock::new(None),
            writes: AtomicUsize::new(0),
        }
    }
}

impl<T: InMemoryRecord> InMemoryResourceRepository<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a record for testing
    pub fn with_record(self, record: T) -> Self {
        let id: i64 = record.id().into();
        self.next_id.fetch_max(id + 1, Ordering::SeqCst);
        self.records.write().unwrap().insert(id, record);
        self
    }

    /// Make every following call fail with a database error
    pub fn fail_with(&self, message: &str) {
        *self.failure.write().unwrap() = Some(message.to_string());
    }

    /// Number of successful create/update/delete calls
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn check(&self) -> Result<(), DomainError> {
        match self.failure.read().unwrap().as_ref() {
            Some(message) => Err(DomainError::Database(message.clone())),
            None => Ok(()),
        }
    }

    fn not_found(id: impl std::fmt::Display) -> DomainError {
        DomainError::NotFound(format!("{} {} not found", T::KEY, id))
    }
}

#[async_trait]
impl<T: InMemoryRecord> ResourceRepository<T> for InMemoryResourceRepository<T> {
    async fn list(&self) -> Result<Vec<T>, DomainError> {
        self.check()?;
        let mut records: Vec<T> = self.records.read().unwrap().values().cloned().collect();
        T::sort(&mut records);
        Ok(records)
    }

    async fn find_by_id(&self, id: T::Id) -> Result<Option<T>, DomainError> {
        self.check()?;
        let key: i64 = id.into();
        Ok(self.records.read().unwrap().get(&key).cloned())
    }

    async fn create(&self, input: &T::Input) -> Result<T, DomainError> {
        self.check()?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let record = T::from_input(T::Id::from(id), input, Utc::now());

        self.records.write().unwrap().insert(id, record.clone());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(record)
    }

    async fn update(&self, id: T::Id, input: &T::Input) -> Result<T, DomainError> {
        self.check()?;
        let key: i64 = id.into();
        let mut records = self.records.write().unwrap();
        let existing = records.get_mut(&key).ok_or_else(|| Self::not_found(id))?;

        *existing = T::from_input(id, input, existing.created_at());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(existing.clone())
    }

    async fn delete(&self, id: T::Id) -> Result<(), DomainError> {
        self.check()?;
        let key: i64 = id.into();
        self.records
            .write()
            .unwrap()
            .remove(&key)
            .ok_or_else(|| Self::not_found(id))?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        self.check()?;
        Ok(self.records.read().unwrap().len() as u64)
    }
}

// ============================================================================
// In-Memory Blog Post Repository
// ============================================================================

pub type InMemoryBlogPostRepository = InMemoryResourceRepository<BlogPost>;

impl InMemoryResourceRepository<BlogPost> {
    /// Pre-populate with a post for testing
    pub fn with_post(self, post: BlogPost) -> Self {
        self.with_record(post)
    }
}

#[async_trait]
impl BlogPostRepository for InMemoryResourceRepository<BlogPost> {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, DomainError> {
        self.check()?;
        let records = self.records.read().unwrap();
        Ok(records.values().find(|p| p.slug == slug).cloned())
    }

    async fn list_by_status(&self, status: PostStatus) -> Result<Vec<BlogPost>, DomainError> {
        let mut posts = self.list().await?;
        posts.retain(|p| p.status == status);
        Ok(posts)
    }

    async fn record_review(
        &self,
        id: BlogPostId,
        review: &ReviewRecord,
    ) -> Result<BlogPost, DomainError> {
        self.check()?;
        let mut records = self.records.write().unwrap();
        let post = records.get_mut(&id.0).ok_or_else(|| Self::not_found(id))?;

        post.status = review.status;
        post.reviewed_by = review.reviewed_by;
        post.reviewed_at = review.reviewed_at;
        post.rejection_reason = review.rejection_reason.clone();
        post.published_at = review.published_at;
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(post.clone())
    }
}

// ============================================================================
// In-Memory User Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryUserRepository {
    profiles: Arc<RwLock<HashMap<UserId, UserProfile>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a profile for testing
    pub fn with_profile(self, profile: UserProfile) -> Self {
        self.profiles.write().unwrap().insert(profile.id, profile);
        self
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<UserProfile>, DomainError> {
        Ok(self.profiles.read().unwrap().get(id).cloned())
    }
}

// ============================================================================
// In-Memory Object Storage
// ============================================================================

pub const TEST_STORAGE_URL: &str = "https://storage.test/blog-content";

#[derive(Default)]
pub struct InMemoryStorage {
    objects: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn object(&self, path: &str) -> Option<Vec<u8>> {
        self.objects.read().unwrap().get(path).cloned()
    }

    pub fn len(&self) -> usize {
        self.objects.read().unwrap().len()
    }
}

#[async_trait]
impl ObjectStorage for InMemoryStorage {
    async fn upload(
        &self,
        path: &str,
        _content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<StoredObject, StorageError> {
        let mut objects = self.objects.write().unwrap();
        if objects.contains_key(path) {
            return Err(StorageError::Upload {
                status: 409,
                message: "The resource already exists".to_string(),
            });
        }
        objects.insert(path.to_string(), bytes);

        Ok(StoredObject {
            url: format!("{}/{}", TEST_STORAGE_URL, path),
            path: path.to_string(),
        })
    }

    async fn delete(&self, path: &str) -> Result<(), StorageError> {
        self.objects.write().unwrap().remove(path);
        Ok(())
    }

    fn provider(&self) -> StorageProvider {
        StorageProvider::Supabase
    }
}
