pub const APPLICATION_NAME: &str = "vision-video-search";
pub const APPLICATION_TITLE: &str = "VisionAI Video Search";

pub const LOG_TAG_MAIN: &str = "[MAIN]";
pub const LOG_TAG_APP: &str = "[APP]";
pub const LOG_TAG_ORCHESTRATOR: &str = "[ORCHESTRATOR]";
pub const LOG_TAG_SEARCH: &str = "[SEARCH]";
pub const LOG_TAG_RESOLVER: &str = "[RESOLVER]";
pub const LOG_TAG_TIMESTAMP: &str = "[TIMESTAMP]";
pub const LOG_TAG_WAREHOUSE: &str = "[WAREHOUSE]";
pub const LOG_TAG_SETTINGS: &str = "[SETTINGS]";
pub const LOG_TAG_AUTH: &str = "[AUTH]";
pub const LOG_TAG_PLAYER: &str = "[PLAYER]";
pub const LOG_TAG_LOGO: &str = "[LOGO]";

pub const DEFAULT_PROJECT_ID: &str = "applied-ai-practice00";
pub const DEFAULT_PROJECT_NUMBER: &str = "653524927160";
pub const DEFAULT_REGION: &str = "us-central1";
pub const DEFAULT_INDEX_ENDPOINT_ID: &str = "ie-17121567812913042082";
pub const DEFAULT_CORPUS_ID: &str = "9012545256067295047";
pub const DEFAULT_INDEX_ID: &str = "index-7912126009553124814";

pub const DEFAULT_QUERY: &str = "customers";
pub const DEFAULT_PAGE_TITLE: &str = "Simmons Video Search";
pub const DEFAULT_LOGO_URL: &str =
    "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcTEzx_ldJvB_IKoIwn1HQKxrlToO5C1cyddSA&s";
pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;

pub const SEARCH_PAGE_SIZE: u32 = 10;
pub const GRID_COLUMNS: usize = 2;
pub const TITLE_MAX_CHARS: usize = 20;

pub const WAREHOUSE_HOST_PROD: &str = "warehouse-visionai.googleapis.com";
pub const WAREHOUSE_HOST_STAGING: &str = "staging-warehouse-visionai.sandbox.googleapis.com";
pub const WAREHOUSE_HOST_AUTOPUSH: &str = "autopush-warehouse-visionai.sandbox.googleapis.com";
pub const WAREHOUSE_HOST_DEV: &str = "dev-warehouse-visionai.sandbox.googleapis.com";
pub const WAREHOUSE_API_VERSION: &str = "v1";

pub const ACCESS_TOKEN_ENV_VAR: &str = "VISIONAI_ACCESS_TOKEN";
pub const GCLOUD_COMMAND: &str = "gcloud";

pub const SETTINGS_FILE_NAME: &str = "settings.json";

pub const USER_MESSAGE_FETCHING: &str = "Fetching results...";
pub const USER_MESSAGE_NO_RESULTS: &str = "No results found.";
pub const USER_MESSAGE_READY: &str = "Ready";
pub const USER_MESSAGE_SEARCH_LABEL: &str = "Enter your search term:";
