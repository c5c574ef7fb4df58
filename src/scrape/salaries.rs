//! Weekly DFS salaries

use crate::config::WeekRange;
use crate::scrape::{fetch_all_pages, params, Assembler, QueryParams, TableSource};
use crate::table::Table;
use crate::Result;
use tracing::{debug, info};

/// Column added to salary rows holding the week they were listed for
pub const WEEK_COLUMN: &str = "WK";

impl<S: TableSource> Assembler<'_, S> {
    /// Collects the salary listing for every week into one table
    ///
    /// All positions share one listing. Every row gets a `WK` column with
    /// its week; headers are single-level and are not flattened.
    pub async fn salaries(&self, season: u16, weeks: WeekRange) -> Result<Table> {
        info!("Grabbing salaries for {}...", weeks);
        let mut data = Table::empty();

        for week in weeks.iter() {
            let params = self.salary_params(season, week);
            let pages =
                fetch_all_pages(self.source, &self.endpoints.salaries, &params, self.policy)
                    .await?;
            debug!(week, pages = pages.len(), "Salary pages collected");

            for page in pages {
                data.append(page.with_column(WEEK_COLUMN, week));
            }
        }

        info!(rows = data.row_count(), "Salaries complete");
        Ok(data)
    }

    fn salary_params(&self, season: u16, week: u8) -> QueryParams {
        QueryParams::new()
            .with(params::SCOPE, "game")
            .with(params::SEASON_WEEK, self.season_week_key(season, week))
            .with(params::OPERATOR, &self.settings.operator)
    }
}
