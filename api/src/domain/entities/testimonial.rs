//! Testimonial domain entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Resource;

record_id!(
    /// Unique identifier for a testimonial
    TestimonialId
);

#[derive(Debug, Clone, Serialize)]
pub struct Testimonial {
    pub id: TestimonialId,
    pub name: String,
    pub role: String,
    pub company: String,
    pub testimonial: String,
    /// 0 to 5
    pub rating: f64,
    /// Avatar URL, empty when none
    pub avatar: String,
    pub created_at: DateTime<Utc>,
}

impl Resource for Testimonial {
    const KEY: &'static str = "testimonials";
    type Id = TestimonialId;
    type Input = NewTestimonial;

    fn id(&self) -> TestimonialId {
        self.id
    }
}

#[derive(Debug, Clone)]
pub struct NewTestimonial {
    pub name: String,
    pub role: String,
    pub company: String,
    pub testimonial: String,
    pub rating: f64,
    pub avatar: String,
}
