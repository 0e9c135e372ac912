use std::sync::Arc;

use iced::widget::{button, column, container, image, row, scrollable, text, text_input, Space};
use iced::{Alignment, Background, Color, Element, Length, Task};

use crate::adapters::logo_loader;
use crate::core::interfaces::adapters::{IndexSearchProvider, RetrievalUrlProvider, VideoLauncher};
use crate::core::models::ServiceSettings;
use crate::core::services::{run_search, PipelineLogs, SearchOutcome};
use crate::global_constants;
use crate::infrastructure::LogHandle;
use crate::presentation::{app_theme, render_video_grid, VideoGridMessage};

pub struct AppOrchestrator {
    search_provider: Arc<dyn IndexSearchProvider>,
    url_provider: Arc<dyn RetrievalUrlProvider>,
    video_launcher: Arc<dyn VideoLauncher>,
    settings: ServiceSettings,
    query: String,
    status: String,
    outcome: Option<SearchOutcome>,
    is_searching: bool,
    logo: Option<image::Handle>,
    log: LogHandle,
}

#[derive(Clone)]
pub enum OrchestratorMessage {
    QueryChanged(String),
    SearchRequested,
    SearchCompleted(SearchOutcome),
    VideoGrid(VideoGridMessage),
    LoadLogo,
    LogoLoaded(Result<Vec<u8>, String>),
}

impl std::fmt::Debug for OrchestratorMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrchestratorMessage::QueryChanged(query) => write!(f, "QueryChanged({:?})", query),
            OrchestratorMessage::SearchRequested => write!(f, "SearchRequested"),
            OrchestratorMessage::SearchCompleted(outcome) => {
                write!(f, "SearchCompleted({})", outcome.status_message())
            }
            OrchestratorMessage::VideoGrid(msg) => write!(f, "VideoGrid({:?})", msg),
            OrchestratorMessage::LoadLogo => write!(f, "LoadLogo"),
            OrchestratorMessage::LogoLoaded(result) => match result {
                Ok(bytes) => write!(f, "LogoLoaded({} bytes)", bytes.len()),
                Err(e) => write!(f, "LogoLoaded(Err({}))", e),
            },
        }
    }
}

impl AppOrchestrator {
    pub fn build(
        search_provider: Arc<dyn IndexSearchProvider>,
        url_provider: Arc<dyn RetrievalUrlProvider>,
        video_launcher: Arc<dyn VideoLauncher>,
        settings: ServiceSettings,
    ) -> Self {
        Self {
            search_provider,
            url_provider,
            video_launcher,
            query: settings.default_query.clone(),
            settings,
            status: global_constants::USER_MESSAGE_READY.to_string(),
            outcome: None,
            is_searching: false,
            logo: None,
            log: LogHandle::new(global_constants::LOG_TAG_ORCHESTRATOR),
        }
    }

    pub fn update(&mut self, message: OrchestratorMessage) -> Task<OrchestratorMessage> {
        self.log.debug(format!("Received message: {:?}", message));

        match message {
            OrchestratorMessage::QueryChanged(query) => {
                self.query = query;
            }
            OrchestratorMessage::SearchRequested => {
                return self.handle_search_requested();
            }
            OrchestratorMessage::SearchCompleted(outcome) => {
                return self.handle_search_completed(outcome);
            }
            OrchestratorMessage::VideoGrid(VideoGridMessage::Play(index)) => {
                return self.handle_play_video(index);
            }
            OrchestratorMessage::LoadLogo => {
                return self.handle_load_logo();
            }
            OrchestratorMessage::LogoLoaded(result) => {
                return self.handle_logo_loaded(result);
            }
        }

        Task::none()
    }

    fn handle_search_requested(&mut self) -> Task<OrchestratorMessage> {
        if self.is_searching {
            self.log.warn("Search already in progress, ignoring request");
            return Task::none();
        }

        self.log.info(format!("Starting search for {:?}", self.query));

        self.is_searching = true;
        self.outcome = None;
        self.status = global_constants::USER_MESSAGE_FETCHING.to_string();

        let search_provider = Arc::clone(&self.search_provider);
        let url_provider = Arc::clone(&self.url_provider);
        let settings = self.settings.clone();
        let query = self.query.clone();

        Task::future(async move {
            let outcome = run_search(
                search_provider.as_ref(),
                url_provider.as_ref(),
                &settings,
                &query,
                &PipelineLogs::default(),
            )
            .await;
            OrchestratorMessage::SearchCompleted(outcome)
        })
    }

    fn handle_search_completed(&mut self, outcome: SearchOutcome) -> Task<OrchestratorMessage> {
        self.is_searching = false;
        self.status = outcome.status_message();

        match &outcome {
            SearchOutcome::Failed(reason) => self.log.error(format!("Search failed: {}", reason)),
            _ => self.log.info(&self.status),
        }

        self.outcome = Some(outcome);
        Task::none()
    }

    fn handle_play_video(&mut self, index: usize) -> Task<OrchestratorMessage> {
        let playback_url = self
            .outcome
            .as_ref()
            .and_then(|outcome| outcome.entries().get(index))
            .and_then(|entry| entry.playback_url());

        let Some(playback_url) = playback_url else {
            self.log.warn(format!("No playable video at index {}", index));
            return Task::none();
        };

        if let Err(e) = self.video_launcher.launch(&playback_url) {
            self.log.error(format!("Failed to open video: {:#}", e));
            self.status = format!("Error opening video: {}", e);
        }

        Task::none()
    }

    fn handle_load_logo(&mut self) -> Task<OrchestratorMessage> {
        let Some(logo_url) = self.settings.logo_url.clone() else {
            return Task::none();
        };

        Task::future(async move {
            let logo_log = LogHandle::new(global_constants::LOG_TAG_LOGO);
            let result = logo_loader::fetch_logo_bytes(&logo_url, &logo_log)
                .await
                .map_err(|e| format!("{:#}", e));
            OrchestratorMessage::LogoLoaded(result)
        })
    }

    fn handle_logo_loaded(&mut self, result: Result<Vec<u8>, String>) -> Task<OrchestratorMessage> {
        match result {
            Ok(bytes) => {
                self.logo = Some(image::Handle::from_bytes(bytes));
            }
            Err(e) => {
                self.log.warn(format!("Logo unavailable: {}", e));
            }
        }
        Task::none()
    }

    pub fn get_window_title(&self) -> String {
        global_constants::APPLICATION_TITLE.to_string()
    }

    pub fn render_view(&self) -> Element<'_, OrchestratorMessage> {
        let theme = app_theme::get_theme(&self.settings.theme_mode);

        let content = column![
            self.render_header(),
            Space::new().height(Length::Fixed(16.0)),
            self.render_search_bar(),
            self.render_status_indicator(),
            self.render_results(),
            self.render_footer(),
        ]
        .spacing(12)
        .padding(32)
        .width(Length::Fill);

        container(scrollable(content))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_theme| {
                let palette = theme.palette();
                iced::widget::container::Style {
                    background: Some(Background::Color(palette.background)),
                    text_color: Some(palette.text),
                    ..Default::default()
                }
            })
            .into()
    }

    fn render_header(&self) -> Element<'_, OrchestratorMessage> {
        let logo: Element<'_, OrchestratorMessage> = match &self.logo {
            Some(handle) => image(handle.clone()).width(Length::Fixed(64.0)).into(),
            None => text("🎥").size(48).into(),
        };

        let title = text(&self.settings.page_title).size(32);

        row![logo, title]
            .spacing(16)
            .align_y(Alignment::Center)
            .into()
    }

    fn render_search_bar(&self) -> Element<'_, OrchestratorMessage> {
        let label = text(global_constants::USER_MESSAGE_SEARCH_LABEL).size(14);

        let input = text_input(&self.settings.default_query, &self.query)
            .on_input(OrchestratorMessage::QueryChanged)
            .on_submit(OrchestratorMessage::SearchRequested)
            .padding(12)
            .width(Length::FillPortion(4));

        let search_btn = button(
            row![text("🔍").size(16), text("Search").size(15)]
                .spacing(10)
                .align_y(Alignment::Center),
        )
        .padding([20, 32])
        .style(app_theme::primary_button_style)
        .on_press_maybe((!self.is_searching).then_some(OrchestratorMessage::SearchRequested));

        column![
            label,
            row![input, search_btn]
                .spacing(12)
                .align_y(Alignment::Center),
        ]
        .spacing(6)
        .into()
    }

    fn render_status_indicator(&self) -> Element<'_, OrchestratorMessage> {
        let status_color = match &self.outcome {
            _ if self.is_searching => Color::from_rgb(1.0, 0.8, 0.2),
            Some(SearchOutcome::Failed(_)) => Color::from_rgb(1.0, 0.3, 0.3),
            Some(SearchOutcome::Found(_)) => Color::from_rgb(0.2, 0.8, 0.4),
            _ => Color::from_rgba(0.6, 0.6, 0.6, 1.0),
        };

        text(&self.status)
            .size(14)
            .style(move |_theme: &iced::Theme| iced::widget::text::Style {
                color: Some(status_color),
            })
            .into()
    }

    fn render_results(&self) -> Element<'_, OrchestratorMessage> {
        let Some(outcome) = &self.outcome else {
            return Space::new().into();
        };

        let grid = render_video_grid(outcome.entries(), global_constants::GRID_COLUMNS)
            .map(OrchestratorMessage::VideoGrid);

        let unavailable = outcome.unavailable_count();
        if unavailable == 0 {
            return grid;
        }

        let notice = text(format!("{} video(s) could not be loaded.", unavailable))
            .size(13)
            .style(|_theme: &iced::Theme| iced::widget::text::Style {
                color: Some(Color::from_rgb(1.0, 0.7, 0.0)),
            });

        column![grid, notice].spacing(12).into()
    }

    fn render_footer(&self) -> Element<'_, OrchestratorMessage> {
        text(format!(
            "{} · {}",
            self.settings.project_id,
            self.settings.index_name()
        ))
        .size(11)
        .style(|_theme: &iced::Theme| iced::widget::text::Style {
            color: Some(Color::from_rgba(0.5, 0.5, 0.5, 1.0)),
        })
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Playback, SearchRequest, SearchResultItem, VideoEntry, WarehouseError};
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::time::Duration;

    struct MockWarehouse;

    #[async_trait]
    impl IndexSearchProvider for MockWarehouse {
        async fn search_index_endpoint(
            &self,
            _request: &SearchRequest,
        ) -> Result<Vec<SearchResultItem>, WarehouseError> {
            Ok(Vec::new())
        }
    }

    #[async_trait]
    impl RetrievalUrlProvider for MockWarehouse {
        async fn generate_retrieval_url(&self, asset_name: &str) -> Result<String, WarehouseError> {
            Ok(format!("https://signed.example.com/{}", asset_name))
        }
    }

    struct RecordingLauncher {
        launched: Mutex<Vec<String>>,
    }

    impl VideoLauncher for RecordingLauncher {
        fn launch(&self, playback_url: &str) -> anyhow::Result<()> {
            self.launched.lock().unwrap().push(playback_url.to_string());
            Ok(())
        }
    }

    fn create_test_orchestrator() -> (AppOrchestrator, Arc<RecordingLauncher>) {
        let launcher = Arc::new(RecordingLauncher {
            launched: Mutex::new(Vec::new()),
        });
        let orchestrator = AppOrchestrator::build(
            Arc::new(MockWarehouse),
            Arc::new(MockWarehouse),
            launcher.clone(),
            ServiceSettings::default(),
        );
        (orchestrator, launcher)
    }

    fn found_outcome() -> SearchOutcome {
        SearchOutcome::Found(vec![
            VideoEntry {
                asset_name: "a1".to_string(),
                start_offset: Duration::from_secs(3),
                segment_length: None,
                playback: Playback::Unavailable("HTTP 500".to_string()),
            },
            VideoEntry {
                asset_name: "a2".to_string(),
                start_offset: Duration::from_secs(42),
                segment_length: None,
                playback: Playback::Ready("https://signed.example.com/a2".to_string()),
            },
        ])
    }

    #[test]
    fn test_build_uses_default_query() {
        let (orchestrator, _) = create_test_orchestrator();

        assert_eq!(orchestrator.query, "customers");
        assert!(!orchestrator.is_searching);
        assert!(orchestrator.outcome.is_none());
        assert_eq!(orchestrator.status, "Ready");
    }

    #[test]
    fn test_query_changed_updates_query() {
        let (mut orchestrator, _) = create_test_orchestrator();

        let _ = orchestrator.update(OrchestratorMessage::QueryChanged("forklift".to_string()));

        assert_eq!(orchestrator.query, "forklift");
    }

    #[test]
    fn test_search_requested_shows_fetching_status() {
        let (mut orchestrator, _) = create_test_orchestrator();

        let _ = orchestrator.update(OrchestratorMessage::SearchRequested);

        assert!(orchestrator.is_searching);
        assert_eq!(orchestrator.status, "Fetching results...");
    }

    #[test]
    fn test_empty_outcome_renders_no_results_found() {
        let (mut orchestrator, _) = create_test_orchestrator();
        orchestrator.is_searching = true;

        let _ = orchestrator.update(OrchestratorMessage::SearchCompleted(SearchOutcome::Empty));

        assert!(!orchestrator.is_searching);
        assert_eq!(orchestrator.status, "No results found.");
    }

    #[test]
    fn test_failed_outcome_is_not_reported_as_empty() {
        let (mut orchestrator, _) = create_test_orchestrator();

        let _ = orchestrator.update(OrchestratorMessage::SearchCompleted(SearchOutcome::Failed(
            "request to searchIndexEndpoint timed out".to_string(),
        )));

        assert_eq!(
            orchestrator.status,
            "Search failed: request to searchIndexEndpoint timed out"
        );
    }

    #[test]
    fn test_play_launches_url_seeked_to_own_offset() {
        let (mut orchestrator, launcher) = create_test_orchestrator();
        let _ = orchestrator.update(OrchestratorMessage::SearchCompleted(found_outcome()));

        let _ = orchestrator.update(OrchestratorMessage::VideoGrid(VideoGridMessage::Play(1)));

        assert_eq!(
            *launcher.launched.lock().unwrap(),
            vec!["https://signed.example.com/a2#t=42".to_string()]
        );
    }

    #[test]
    fn test_play_unavailable_entry_does_nothing() {
        let (mut orchestrator, launcher) = create_test_orchestrator();
        let _ = orchestrator.update(OrchestratorMessage::SearchCompleted(found_outcome()));

        let _ = orchestrator.update(OrchestratorMessage::VideoGrid(VideoGridMessage::Play(0)));
        let _ = orchestrator.update(OrchestratorMessage::VideoGrid(VideoGridMessage::Play(9)));

        assert!(launcher.launched.lock().unwrap().is_empty());
    }

    #[test]
    fn test_logo_failure_keeps_placeholder() {
        let (mut orchestrator, _) = create_test_orchestrator();

        let _ = orchestrator.update(OrchestratorMessage::LogoLoaded(Err("404".to_string())));

        assert!(orchestrator.logo.is_none());
    }

    #[test]
    fn test_window_title_and_header_title_are_separate() {
        let (orchestrator, _) = create_test_orchestrator();

        assert_eq!(orchestrator.get_window_title(), "VisionAI Video Search");
        assert_eq!(orchestrator.settings.page_title, "Simmons Video Search");
    }
}
