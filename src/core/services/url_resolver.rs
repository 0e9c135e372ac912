use crate::core::interfaces::adapters::RetrievalUrlProvider;
use crate::core::models::ResolvedUrl;
use crate::infrastructure::LogHandle;

/// Requests one signed URL per asset, one call at a time, in the given order.
/// A failed call is recorded against its asset instead of aborting the batch.
pub async fn resolve_urls(
    provider: &dyn RetrievalUrlProvider,
    asset_names: &[String],
    log: &LogHandle,
) -> Vec<ResolvedUrl> {
    let mut resolved = Vec::with_capacity(asset_names.len());

    for asset_name in asset_names {
        match provider.generate_retrieval_url(asset_name).await {
            Ok(signed_uri) => {
                log.debug(format!("Generated retrieval URL for {}", asset_name));
                resolved.push(ResolvedUrl::resolved(asset_name.clone(), signed_uri));
            }
            Err(error) => {
                log.error_with_cause(
                    format!("Error generating retrieval URL for {}", asset_name),
                    &error,
                );
                resolved.push(ResolvedUrl::failed(asset_name.clone(), error.to_string()));
            }
        }
    }

    let failures = resolved.iter().filter(|r| r.signed_uri.is_err()).count();
    if failures > 0 {
        log.warn(format!(
            "{} of {} retrieval URLs could not be generated",
            failures,
            asset_names.len()
        ));
    }

    resolved
}

/// The signed URLs that were actually produced, in request order.
pub fn successful_urls(resolved: &[ResolvedUrl]) -> Vec<String> {
    resolved
        .iter()
        .filter_map(|r| r.signed_uri.as_ref().ok().cloned())
        .collect()
}
