/// Outcome of one retrieval URL call, tagged with the asset it was issued for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedUrl {
    pub asset_name: String,
    pub signed_uri: Result<String, String>,
}

impl ResolvedUrl {
    pub fn resolved(asset_name: impl Into<String>, signed_uri: impl Into<String>) -> Self {
        Self {
            asset_name: asset_name.into(),
            signed_uri: Ok(signed_uri.into()),
        }
    }

    pub fn failed(asset_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            asset_name: asset_name.into(),
            signed_uri: Err(reason.into()),
        }
    }
}
