use serde::Deserialize;

/// Common pagination query parameters (`?page=&limit=`).
///
/// Pages are 1-based. Both values are optional; handlers apply per-endpoint
/// defaults and clamp the limit server-side.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl PageParams {
    /// Resolve to a concrete `(limit, offset)` pair for SQL.
    pub fn resolve(&self, default_limit: i64) -> (i64, i64) {
        let limit = stonegate_db::clamp_limit(self.limit, default_limit);
        let offset = stonegate_db::page_offset(self.page, limit);
        (limit, offset)
    }
}
