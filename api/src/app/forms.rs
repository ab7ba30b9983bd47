//! Dashboard forms
//!
//! Request bodies for the dashboard editors. Each form is validated before
//! any backend call and then mapped into the payload its service writes,
//! splitting comma (or newline) separated text fields into lists.

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use validator::{Validate, ValidateUrl, ValidationError};

use crate::app::post_content::{parse_tags, split_list};
use crate::domain::entities::{
    LearningLevel, NewLearningResource, NewPortfolioProject, NewProduct, NewServicePackage,
    NewTestimonial, PostStatus, ProductStatus,
};

/// Rating portfolio projects get, the editor has no rating field
pub const DEFAULT_PORTFOLIO_RATING: f64 = 5.0;

/// A validated form that maps onto a service payload
pub trait ContentForm: Validate + DeserializeOwned + Send + 'static {
    type Output;

    fn into_input(self) -> Self::Output;
}

fn url_or_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() || value.validate_url() {
        Ok(())
    } else {
        Err(ValidationError::new("url").with_message("Must be a valid URL".into()))
    }
}

fn has_list_item(value: &str) -> Result<(), ValidationError> {
    if split_list(value, ',').is_empty() {
        Err(ValidationError::new("list").with_message("At least one item is required".into()))
    } else {
        Ok(())
    }
}

fn has_tag(value: &str) -> Result<(), ValidationError> {
    if parse_tags(value).is_empty() {
        Err(ValidationError::new("tags").with_message("At least one tag is required".into()))
    } else {
        Ok(())
    }
}

/// `Some(trimmed)` for non-blank text
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

// ============================================================================
// Blog
// ============================================================================

/// Blog editor form. Derived fields (slug, excerpt, read time) are computed
/// by the blog service, not submitted.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BlogForm {
    #[validate(length(min = 2, message = "Title must be at least 2 characters"))]
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    /// Publish date shown on the site
    pub date: NaiveDate,
    /// Display name override
    #[serde(default)]
    pub author: Option<String>,
    /// Comma separated
    #[validate(custom(function = "has_tag"))]
    pub tags: String,
    /// Cover image URL; when blank the first image in the content is used
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default = "default_post_status")]
    pub status: PostStatus,
}

fn default_post_status() -> PostStatus {
    PostStatus::Draft
}

impl BlogForm {
    pub fn author_override(&self) -> Option<String> {
        non_blank(self.author.clone())
    }
}

// ============================================================================
// Product
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ProductForm {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,
    #[validate(length(min = 1, message = "Price is required"))]
    pub price: String,
    #[serde(default)]
    #[validate(custom(function = "url_or_empty"))]
    pub image_url: String,
    #[serde(default)]
    #[validate(custom(function = "url_or_empty"))]
    pub product_url: String,
    pub status: ProductStatus,
    /// Comma separated
    #[serde(default)]
    pub features: String,
    #[serde(default)]
    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: f64,
    #[serde(default)]
    pub users: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub gallery: Vec<String>,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub review: Option<String>,
}

impl ContentForm for ProductForm {
    type Output = NewProduct;

    fn into_input(self) -> NewProduct {
        NewProduct {
            name: self.name.trim().to_string(),
            description: self.description,
            category: self.category,
            price: self.price,
            rating: self.rating,
            users: self.users,
            release_date: self.release_date,
            features: split_list(&self.features, ','),
            gallery: self.gallery,
            image_url: self.image_url.trim().to_string(),
            product_url: non_blank(Some(self.product_url)),
            status: self.status,
            role: self.role,
            review: non_blank(self.review),
        }
    }
}

// ============================================================================
// Learning resource
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LearningForm {
    #[validate(length(min = 2, message = "Title must be at least 2 characters"))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Video, Article, ...
    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "Type is required"))]
    pub kind: String,
    pub level: LearningLevel,
    #[validate(length(min = 1, message = "Duration is required"))]
    pub duration: String,
    #[serde(default)]
    pub instructor: Option<String>,
    #[serde(default)]
    #[validate(custom(function = "url_or_empty"))]
    pub image_url: String,
    #[serde(default)]
    #[validate(custom(function = "url_or_empty"))]
    pub link_url: String,
    /// Comma separated
    #[serde(default)]
    pub tags: String,
}

impl ContentForm for LearningForm {
    type Output = NewLearningResource;

    fn into_input(self) -> NewLearningResource {
        NewLearningResource {
            title: self.title.trim().to_string(),
            description: self.description,
            kind: self.kind.trim().to_string(),
            duration: self.duration,
            level: self.level,
            instructor: non_blank(self.instructor),
            image_url: self.image_url.trim().to_string(),
            link_url: non_blank(Some(self.link_url)),
            tags: split_list(&self.tags, ','),
        }
    }
}

// ============================================================================
// Portfolio project
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PortfolioForm {
    #[validate(length(min = 2, message = "Title must be at least 2 characters"))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,
    #[serde(default)]
    #[validate(custom(function = "url_or_empty"))]
    pub image_url: String,
    #[serde(default)]
    pub gallery: Vec<String>,
    /// One result per line
    #[serde(default)]
    pub results: String,
    /// Comma separated
    #[serde(default)]
    pub tech: String,
    #[validate(length(min = 1, message = "Date is required"))]
    pub publish_date: String,
    #[serde(default)]
    #[validate(custom(function = "url_or_empty"))]
    pub link: String,
    #[serde(default)]
    pub review: Option<String>,
}

impl ContentForm for PortfolioForm {
    type Output = NewPortfolioProject;

    fn into_input(self) -> NewPortfolioProject {
        NewPortfolioProject {
            title: self.title.trim().to_string(),
            description: self.description,
            category: self.category,
            image_url: self.image_url.trim().to_string(),
            gallery: self.gallery,
            results: split_list(&self.results, '\n'),
            tech: split_list(&self.tech, ','),
            rating: DEFAULT_PORTFOLIO_RATING,
            publish_date: self.publish_date,
            link: self.link.trim().to_string(),
            review: non_blank(self.review),
        }
    }
}

// ============================================================================
// Testimonial
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TestimonialForm {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,
    #[validate(length(min = 1, message = "Role is required"))]
    pub role: String,
    #[validate(length(min = 1, message = "Company is required"))]
    pub company: String,
    #[serde(default)]
    #[validate(custom(function = "url_or_empty"))]
    pub avatar: String,
    #[validate(range(min = 0.0, max = 5.0, message = "Rating must be between 0 and 5"))]
    pub rating: f64,
    #[validate(length(min = 10, message = "Testimonial must be at least 10 characters"))]
    pub testimonial: String,
}

impl ContentForm for TestimonialForm {
    type Output = NewTestimonial;

    fn into_input(self) -> NewTestimonial {
        NewTestimonial {
            name: self.name.trim().to_string(),
            role: self.role,
            company: self.company,
            testimonial: self.testimonial,
            rating: self.rating,
            avatar: self.avatar.trim().to_string(),
        }
    }
}

// ============================================================================
// Service package
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ServicePackageForm {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,
    #[validate(length(min = 1, message = "Price is required"))]
    pub price_label: String,
    #[serde(default)]
    pub target: Option<String>,
    /// Comma separated
    #[validate(custom(function = "has_list_item"))]
    pub features: String,
    #[validate(length(min = 1, message = "Duration is required"))]
    pub duration: String,
    #[serde(default)]
    pub optional_note: Option<String>,
    #[serde(default)]
    pub popular: bool,
    #[validate(range(min = 0, message = "Sort order must not be negative"))]
    pub sort_order: i32,
}

impl ContentForm for ServicePackageForm {
    type Output = NewServicePackage;

    fn into_input(self) -> NewServicePackage {
        NewServicePackage {
            name: self.name.trim().to_string(),
            price_label: self.price_label,
            target: non_blank(self.target),
            features: split_list(&self.features, ','),
            duration: self.duration,
            optional_note: non_blank(self.optional_note),
            popular: self.popular,
            sort_order: self.sort_order,
        }
    }
}
