//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::app::forms::BlogForm;
use crate::domain::entities::{
    BlogPost, BlogPostId, CurrentUser, LearningLevel, LearningResource, LearningResourceId,
    NewProduct, NewServicePackage, NewTestimonial, PostStatus, Product, ProductId, ProductStatus,
    Testimonial, TestimonialId, UserId, UserProfile, UserRole,
};

/// Create a test profile with a given role
pub fn test_profile(role: UserRole) -> UserProfile {
    let id = Uuid::new_v4();
    UserProfile {
        id: UserId(id),
        email: format!("{}@wednesdev.test", role),
        role,
        display_name: Some(format!("Test {}", role)),
        avatar_url: None,
        created_at: Utc::now(),
    }
}

/// Create a signed-in user with a given role
pub fn test_user(role: UserRole) -> CurrentUser {
    test_profile(role).into()
}

fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

/// Create a stored post; published posts get a publication time
pub fn test_post(id: i64, status: PostStatus) -> BlogPost {
    let now = Utc::now();
    BlogPost {
        id: BlogPostId(id),
        title: format!("Post {}", id),
        slug: format!("post-{}", id),
        excerpt: "Some content...".to_string(),
        content: Some("<p>Some content</p>".to_string()),
        date: test_date(),
        author_id: Some(UserId(Uuid::new_v4())),
        author: "Test Writer".to_string(),
        tags: vec!["Tech".to_string()],
        image_url: String::new(),
        read_time: Some("1 min read".to_string()),
        status,
        reviewed_by: None,
        reviewed_at: None,
        rejection_reason: match status {
            PostStatus::Rejected => Some("Needs work".to_string()),
            _ => None,
        },
        published_at: match status {
            PostStatus::Published => Some(now),
            _ => None,
        },
        created_at: now,
    }
}

/// Editor form with a title, short content and one tag
pub fn blog_form(title: &str, status: PostStatus) -> BlogForm {
    BlogForm {
        title: title.to_string(),
        content: Some("<p>Short post body</p>".to_string()),
        date: test_date(),
        author: None,
        tags: "Tech".to_string(),
        image_url: None,
        status,
    }
}

pub fn new_product(name: &str) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        description: "Point of sale for small shops".to_string(),
        category: "POS".to_string(),
        price: "Free".to_string(),
        rating: 4.5,
        users: "1k+".to_string(),
        release_date: "2024".to_string(),
        features: vec!["Offline mode".to_string()],
        gallery: Vec::new(),
        image_url: "https://cdn.wednesdev.test/product.png".to_string(),
        product_url: None,
        status: ProductStatus::Available,
        role: "Full stack".to_string(),
        review: None,
    }
}

pub fn test_product(id: i64) -> Product {
    let input = new_product(&format!("Product {}", id));
    Product {
        id: ProductId(id),
        name: input.name,
        description: input.description,
        category: input.category,
        price: input.price,
        rating: input.rating,
        users: input.users,
        release_date: input.release_date,
        features: input.features,
        gallery: input.gallery,
        image_url: input.image_url,
        product_url: input.product_url,
        status: input.status,
        role: input.role,
        review: input.review,
        created_at: Utc::now(),
    }
}

pub fn new_testimonial(name: &str) -> NewTestimonial {
    NewTestimonial {
        name: name.to_string(),
        role: "Owner".to_string(),
        company: "Warung Test".to_string(),
        testimonial: "Fast delivery and great support".to_string(),
        rating: 5.0,
        avatar: String::new(),
    }
}

pub fn test_testimonial(id: i64) -> Testimonial {
    let input = new_testimonial(&format!("Client {}", id));
    Testimonial {
        id: TestimonialId(id),
        name: input.name,
        role: input.role,
        company: input.company,
        testimonial: input.testimonial,
        rating: input.rating,
        avatar: input.avatar,
        created_at: Utc::now(),
    }
}

pub fn test_learning_resource(id: i64, kind: &str) -> LearningResource {
    LearningResource {
        id: LearningResourceId(id),
        title: format!("{} {}", kind, id),
        description: "Learn something".to_string(),
        kind: kind.to_string(),
        duration: "30 min".to_string(),
        level: LearningLevel::Beginner,
        instructor: None,
        image_url: String::new(),
        link_url: None,
        tags: vec!["basics".to_string()],
        created_at: Utc::now(),
    }
}

pub fn new_service_package(name: &str, sort_order: i32) -> NewServicePackage {
    NewServicePackage {
        name: name.to_string(),
        price_label: "Rp 5jt".to_string(),
        target: None,
        features: vec!["Landing page".to_string()],
        duration: "2 weeks".to_string(),
        optional_note: None,
        popular: false,
        sort_order,
    }
}
