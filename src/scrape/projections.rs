//! Weekly projections by position

use crate::config::{Position, WeekRange};
use crate::scrape::assembler::plural_label;
use crate::scrape::{
    fetch_all_pages, params, Assembler, PositionDatasets, QueryParams, TableSource,
};
use crate::table::Table;
use crate::Result;
use tracing::{debug, info, warn};

impl<S: TableSource> Assembler<'_, S> {
    /// Collects weekly projections for each position over `weeks`
    ///
    /// Each week is paged separately and all pages are concatenated in week
    /// order. The defense listing only ever serves one page per week and has
    /// single-level headers, so it is neither paged further nor flattened.
    /// Positions with no published projections are left out of the result.
    pub async fn projections(
        &self,
        season: u16,
        weeks: WeekRange,
        positions: &[Position],
    ) -> Result<PositionDatasets> {
        let mut data = PositionDatasets::new();

        for &position in positions {
            info!("Grabbing projections for {}...", plural_label(position));

            let policy = if position.is_defense() {
                self.policy.single_page()
            } else {
                self.policy
            };

            let mut pages = Vec::new();
            for week in weeks.iter() {
                let params = self.projection_params(season, week, position);
                let weekly =
                    fetch_all_pages(self.source, &self.endpoints.projections, &params, policy)
                        .await?;
                debug!(position = %position, week, pages = weekly.len(), "Projection pages collected");
                pages.extend(weekly);
            }

            if pages.is_empty() {
                warn!(
                    "No projections published for {} in {}",
                    plural_label(position),
                    weeks
                );
                continue;
            }

            let dataset = Table::concat(pages);
            let dataset = if position.is_defense() {
                dataset
            } else {
                dataset.flattened()
            };

            info!(
                position = %position,
                rows = dataset.row_count(),
                "Projections complete"
            );
            data.insert(position, dataset);
        }

        Ok(data)
    }

    fn projection_params(&self, season: u16, week: u8, position: Position) -> QueryParams {
        self.base_params()
            .with(params::SEASON_WEEK, self.season_week_key(season, week))
            .with(params::POSITION, position)
    }
}
