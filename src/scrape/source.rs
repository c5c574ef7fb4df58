use crate::scrape::QueryParams;
use crate::table::Table;
use crate::Result;
use url::Url;

/// Something that can return the data table of one listing page
///
/// Implementations decide how a page maps to a table. The HTTP session
/// takes the first `<table>` in the response body and reports a page
/// without one as an empty table; the paginator and the assemblers only
/// ever see the resulting `Table`.
#[allow(async_fn_in_trait)]
pub trait TableSource {
    /// Fetches one page and returns its table, empty if the page has no data
    async fn fetch_page(&self, url: &Url, params: &QueryParams) -> Result<Table>;
}
