//! Content operations on top of the entity models.
//! - One module per content kind, all delegating to the shared `listing`
//!   read plans.
//! - Identity and timestamps are assigned here, never taken from input.
//! - Price-carrying entities convert through `models::price` both ways.

pub mod errors;
pub mod listing;

pub mod blog;
pub mod contact;
pub mod faqs;
pub mod gallery;
pub mod pages;
pub mod products;
pub mod services;

#[cfg(test)]
pub mod test_support;
