//! Weekly fantasy stats by position

use crate::config::{Position, WeekRange};
use crate::scrape::assembler::plural_label;
use crate::scrape::{
    fetch_all_pages, params, Assembler, PositionDatasets, QueryParams, TableSource,
};
use crate::table::Table;
use crate::Result;
use tracing::{debug, info, warn};

impl<S: TableSource> Assembler<'_, S> {
    /// Collects game-scoped stats for each position over `weeks`
    ///
    /// Offensive positions are paged once over the whole week range and
    /// their two-level headers flattened. The defense listing repeats the
    /// same page whatever the page index, so it is requested one week at a
    /// time without a page index; the first empty week ends it (usually a
    /// week past the end of an older season). Defense headers are already
    /// single-level.
    ///
    /// Positions that return no rows at all are left out of the result.
    pub async fn stats(
        &self,
        season: u16,
        weeks: WeekRange,
        positions: &[Position],
    ) -> Result<PositionDatasets> {
        let mut data = PositionDatasets::new();

        for &position in positions {
            info!("Grabbing stats for {}...", plural_label(position));

            let dataset = if position.is_defense() {
                self.defense_stats(season, weeks).await?
            } else {
                let params = self.stats_params(season, weeks, position);
                let pages =
                    fetch_all_pages(self.source, &self.endpoints.stats, &params, self.policy)
                        .await?;
                debug!(position = %position, pages = pages.len(), "Stats pages collected");
                Table::concat(pages).flattened()
            };

            if dataset.is_empty() {
                warn!("No stats found for {} in {}", plural_label(position), weeks);
                continue;
            }

            info!(
                position = %position,
                rows = dataset.row_count(),
                "Stats complete"
            );
            data.insert(position, dataset);
        }

        Ok(data)
    }

    async fn defense_stats(&self, season: u16, weeks: WeekRange) -> Result<Table> {
        let mut weekly = Vec::new();

        for week in weeks.iter() {
            let params = self.stats_params(season, WeekRange::single(week), Position::Dst);
            let table = self
                .source
                .fetch_page(&self.endpoints.stats, &params)
                .await?;

            if table.is_empty() {
                debug!(week, "No defense stats for week, stopping");
                break;
            }
            weekly.push(table);
        }

        Ok(Table::concat(weekly))
    }

    fn stats_params(&self, season: u16, weeks: WeekRange, position: Position) -> QueryParams {
        self.base_params()
            .with(params::SEASON, self.season_key(season))
            .with(params::WEEK_FROM, weeks.from)
            .with(params::WEEK_TO, weeks.to)
            .with(params::POSITION, position)
    }
}
