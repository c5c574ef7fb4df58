use crate::config::ProviderConfig;
use crate::Result;
use url::Url;

/// Absolute URLs of the provider pages used in a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub login: Url,
    pub stats: Url,
    pub projections: Url,
    pub salaries: Url,
}

impl Endpoints {
    /// Joins the configured paths onto the base URL
    pub fn from_config(provider: &ProviderConfig) -> Result<Self> {
        let base = Url::parse(&provider.base_url)?;
        Ok(Self {
            login: base.join(&provider.login_path)?,
            stats: base.join(&provider.stats_path)?,
            projections: base.join(&provider.projections_path)?,
            salaries: base.join(&provider.salaries_path)?,
        })
    }
}
