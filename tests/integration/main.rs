//! Integration tests for the scraper
//!
//! These tests use wiremock to stand in for the provider and exercise the
//! login flow, page fetching and full dataset assembly over real HTTP.

mod auth_tests;
mod scrape_tests;
mod support;
