/// Fixed defaults the mock adapter falls back to when a request does not
/// override them.
///
/// Passed explicitly into [`MockBridgeAdapter`](crate::MockBridgeAdapter)
/// rather than read from global state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockSettings {
    /// Count result when the request has no `count` parameter.
    pub default_count: u64,
    /// Total result-set size for search when metadata has no `count`.
    pub default_search_total: usize,
    /// Index substituted into templates by single-record retrieval.
    pub retrieve_index: usize,
    /// Largest page search will synthesize; bigger pages are rejected.
    pub max_page_records: usize,
}

impl Default for MockSettings {
    fn default() -> Self {
        Self {
            default_count: 1,
            default_search_total: 10,
            retrieve_index: 1,
            max_page_records: 100_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_settings_defaults() {
        let settings = MockSettings::default();
        assert_eq!(settings.default_count, 1);
        assert_eq!(settings.default_search_total, 10);
        assert_eq!(settings.retrieve_index, 1);
        assert_eq!(settings.max_page_records, 100_000);
    }
}
