use crate::config::PaginationConfig;
use crate::scrape::{QueryParams, TableSource};
use crate::table::Table;
use crate::Result;
use tracing::debug;
use url::Url;

/// How far to follow a paginated listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PagePolicy {
    /// Stop after this many non-empty pages
    pub max_pages: Option<u32>,

    /// Times an empty page is requested again before it ends the listing
    pub empty_page_retries: u32,
}

impl PagePolicy {
    pub fn from_config(config: &PaginationConfig) -> Self {
        Self {
            max_pages: None,
            empty_page_retries: config.empty_page_retries,
        }
    }

    /// The same policy capped at the first page
    pub fn single_page(self) -> Self {
        Self {
            max_pages: Some(1),
            ..self
        }
    }
}

/// Collects pages 1, 2, 3, ... of a listing until a page comes back empty
///
/// Each request is `base` plus the page index. Non-empty tables are kept in
/// fetch order. With the default policy the first empty page ends the
/// listing for good; no later page is requested even if it would have data.
/// Errors from the source are returned immediately.
pub async fn fetch_all_pages<S: TableSource>(
    source: &S,
    url: &Url,
    base: &QueryParams,
    policy: PagePolicy,
) -> Result<Vec<Table>> {
    let mut pages = Vec::new();
    let mut page: u32 = 1;
    let mut empty_retries = 0;

    loop {
        if policy.max_pages.is_some_and(|max| pages.len() >= max as usize) {
            debug!(url = %url, pages = pages.len(), "Page limit reached");
            break;
        }

        let table = source.fetch_page(url, &base.with_page(page)).await?;

        if table.is_empty() {
            if empty_retries < policy.empty_page_retries {
                empty_retries += 1;
                debug!(page, attempt = empty_retries, "Empty page, requesting again");
                continue;
            }
            debug!(url = %url, page, "Empty page, end of listing");
            break;
        }

        empty_retries = 0;
        pages.push(table);
        page += 1;
    }

    Ok(pages)
}
