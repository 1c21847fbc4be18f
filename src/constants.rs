/// Token endpoint used for the client-credentials grant
pub const DEFAULT_AUTH_URL: &str = "https://auth.emsicloud.com/connect/token";
/// Base URL of the Skills Classification REST API
pub const DEFAULT_BASE_URL: &str = "https://skills.emsicloud.com";
/// OAuth scope requested with every token
pub const DEFAULT_SCOPE: &str = "emsi_open";
/// Version alias understood by the API as "most recent release"
pub const DEFAULT_VERSION: &str = "latest";
/// Default timeout in seconds for a single HTTP exchange
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Nominal token lifetime in seconds when the auth server does not say
pub const DEFAULT_TOKEN_LIFETIME_SECS: u64 = 3600;
/// Endpoint called to check whether the current token is still accepted
pub const TOKEN_CHECK_ENDPOINT: &str = "versions";
/// User agent string sent with every request
pub const USER_AGENT: &str = "skills-client/0.1.0";
/// Response header carrying the remaining extraction quota
pub const RATE_LIMIT_REMAINING_HEADER: &str = "x-rate-limit-remaining";
/// Response header carrying the quota reset time
pub const RATE_LIMIT_RESET_HEADER: &str = "x-rate-limit-reset";
