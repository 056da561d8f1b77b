use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct FeedQuery {
    pub page: Option<String>,
}

impl FeedQuery {
    /// 1-based page number. Missing, unparsable and non-positive values
    /// all mean the first page.
    pub fn page(&self) -> u32 {
        self.page
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .filter(|page| *page >= 1)
            .map_or(1, |page| u32::try_from(page).unwrap_or(u32::MAX))
    }
}
