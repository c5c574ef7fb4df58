//! Scraping module
//!
//! This module contains the request side of the scraper:
//! - Login and the authenticated HTTP session
//! - The `TableSource` seam between HTTP and table assembly
//! - Pagination over listing pages
//! - Dataset assembly for stats, projections and salaries

mod assembler;
mod endpoints;
mod paginator;
pub mod params;
mod projections;
mod salaries;
mod session;
mod source;
mod stats;

#[cfg(test)]
pub(crate) mod testing;

pub use assembler::{Assembler, PositionDatasets, QuerySettings};
pub use endpoints::Endpoints;
pub use paginator::{fetch_all_pages, PagePolicy};
pub use params::QueryParams;
pub use salaries::WEEK_COLUMN;
pub use session::{build_http_client, extract_token, Session};
pub use source::TableSource;
