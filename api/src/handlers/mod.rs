//! HTTP handlers

pub mod blog;
pub mod catalog;
pub mod dashboard;
pub mod extract;
pub mod site;
pub mod uploads;
