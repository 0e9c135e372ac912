/// One ranked hit returned by an index endpoint search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResultItem {
    pub asset_name: String,
    pub start_time: String,
    pub end_time: Option<String>,
}

#[cfg(test)]
impl SearchResultItem {
    pub fn new(asset_name: impl Into<String>, start_time: impl Into<String>) -> Self {
        Self {
            asset_name: asset_name.into(),
            start_time: start_time.into(),
            end_time: None,
        }
    }

    pub fn with_end_time(mut self, end_time: impl Into<String>) -> Self {
        self.end_time = Some(end_time.into());
        self
    }
}
