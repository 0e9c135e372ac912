use std::sync::Arc;

use iced::{Element, Task};

use crate::adapters::{GcloudAccessTokenProvider, SystemVideoLauncher, WarehouseClient};
use crate::core::models::ServiceSettings;
use crate::core::orchestrators::app_orchestrator::{AppOrchestrator, OrchestratorMessage};
use crate::global_constants;
use crate::infrastructure::LogHandle;

pub struct VideoSearchApp {
    orchestrator: AppOrchestrator,
}

impl VideoSearchApp {
    pub fn build() -> (Self, Task<OrchestratorMessage>) {
        let log = LogHandle::new(global_constants::LOG_TAG_APP);
        log.info("Initializing application");

        let settings = ServiceSettings::load().unwrap_or_else(|e| {
            log.warn(format!("Failed to load settings: {:#}, using defaults", e));
            ServiceSettings::default()
        });

        let token_provider = Arc::new(GcloudAccessTokenProvider::new());
        let warehouse_client = match WarehouseClient::build(&settings, token_provider.clone()) {
            Ok(client) => client,
            Err(e) => {
                log.error(format!(
                    "Failed to configure HTTP client: {:#}, falling back to defaults",
                    e
                ));
                WarehouseClient::with_http_client(
                    reqwest::Client::new(),
                    settings.warehouse_base_url(),
                    token_provider,
                )
            }
        };
        let warehouse_client = Arc::new(warehouse_client);

        let orchestrator = AppOrchestrator::build(
            warehouse_client.clone(),
            warehouse_client,
            Arc::new(SystemVideoLauncher::new()),
            settings,
        );

        (
            Self { orchestrator },
            Task::done(OrchestratorMessage::LoadLogo),
        )
    }

    pub fn handle_update(&mut self, message: OrchestratorMessage) -> Task<OrchestratorMessage> {
        self.orchestrator.update(message)
    }

    pub fn render_view(&self) -> Element<'_, OrchestratorMessage> {
        self.orchestrator.render_view()
    }

    pub fn window_title(&self) -> String {
        self.orchestrator.get_window_title()
    }
}
