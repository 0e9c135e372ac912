use async_trait::async_trait;

use crate::core::interfaces::adapters::AccessTokenProvider;
use crate::core::models::WarehouseError;
use crate::global_constants;
use crate::infrastructure::LogHandle;

/// Reads a bearer token from `VISIONAI_ACCESS_TOKEN`, falling back to
/// `gcloud auth print-access-token`. Tokens are fetched on every call.
pub struct GcloudAccessTokenProvider {
    env_var: String,
    gcloud_command: String,
    log: LogHandle,
}

impl GcloudAccessTokenProvider {
    pub fn new() -> Self {
        Self {
            env_var: global_constants::ACCESS_TOKEN_ENV_VAR.to_string(),
            gcloud_command: global_constants::GCLOUD_COMMAND.to_string(),
            log: LogHandle::new(global_constants::LOG_TAG_AUTH),
        }
    }

    #[cfg(test)]
    fn with_sources(env_var: &str, gcloud_command: &str) -> Self {
        Self {
            env_var: env_var.to_string(),
            gcloud_command: gcloud_command.to_string(),
            log: LogHandle::new(global_constants::LOG_TAG_AUTH),
        }
    }

    fn token_from_environment(&self) -> Option<String> {
        std::env::var(&self.env_var)
            .ok()
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty())
    }

    async fn token_from_gcloud(&self) -> Result<String, WarehouseError> {
        self.log
            .debug(format!("Requesting access token from {}", self.gcloud_command));

        let output = tokio::process::Command::new(&self.gcloud_command)
            .args(["auth", "print-access-token"])
            .output()
            .await
            .map_err(|e| {
                WarehouseError::Auth(format!("failed to run {}: {}", self.gcloud_command, e))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(WarehouseError::Auth(format!(
                "{} exited with {}: {}",
                self.gcloud_command,
                output.status,
                stderr.trim()
            )));
        }

        let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if token.is_empty() {
            return Err(WarehouseError::Auth(format!(
                "{} printed an empty token",
                self.gcloud_command
            )));
        }

        Ok(token)
    }
}

impl Default for GcloudAccessTokenProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccessTokenProvider for GcloudAccessTokenProvider {
    async fn access_token(&self) -> Result<String, WarehouseError> {
        if let Some(token) = self.token_from_environment() {
            self.log
                .debug(format!("Using access token from {}", self.env_var));
            return Ok(token);
        }

        self.token_from_gcloud().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_access_token_prefers_environment_variable() {
        let var_name = "VISIONAI_TEST_TOKEN_PRESENT";
        std::env::set_var(var_name, "  env-token \n");
        let provider =
            GcloudAccessTokenProvider::with_sources(var_name, "definitely-not-a-real-gcloud");

        let token = provider.access_token().await.unwrap();

        assert_eq!(token, "env-token");
        std::env::remove_var(var_name);
    }

    #[tokio::test]
    async fn test_missing_gcloud_binary_is_auth_error() {
        let provider = GcloudAccessTokenProvider::with_sources(
            "VISIONAI_TEST_TOKEN_ABSENT",
            "definitely-not-a-real-gcloud",
        );

        let result = provider.access_token().await;

        assert!(matches!(result, Err(WarehouseError::Auth(_))));
    }

    #[test]
    fn test_provider_logs_under_auth_tag() {
        let provider = GcloudAccessTokenProvider::new();

        assert_eq!(provider.log, LogHandle::new(global_constants::LOG_TAG_AUTH));
    }
}
