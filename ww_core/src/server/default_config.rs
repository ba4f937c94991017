pub const DEFAULT_SERVER_BACKEND_HOST: &str = "0.0.0.0";
pub const DEFAULT_SERVER_BACKEND_PORT: &str = "3000";
pub const DEFAULT_SERVER_BACKEND_PROTOCOL: &str = "http";

pub const DEFAULT_DATABASE_URL: &str = "sqlite://writewisp.db?mode=rwc";

pub const DEFAULT_COMPLETION_BASE_URL: &str = "https://integrate.api.nvidia.com/v1";
pub const DEFAULT_COMPLETION_MODEL: &str = "meta/llama-3.1-70b-instruct";

pub const DEFAULT_LOG_FILTER: &str = "info";

pub const DEFAULT_BATCH_COUNT: usize = 3;
pub const MAX_BATCH_COUNT: usize = 10;

pub const DEFAULT_JOURNAL_USERNAME: &str = "Writer";
