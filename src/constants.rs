pub const DEFAULT_API_URL: &str = "https://api.clubhub.example.com";
pub const CONFIG_FILE: &str = ".clubhub-cli-config.json";
pub const TOKEN_ENV_VAR: &str = "CLUBHUB_TOKEN";

// REST endpoint paths
pub const CLUB_LIST_PATH: &str = "/club/list";
pub const MY_CLUB_LIST_PATH: &str = "/club/my-list";
pub const CLUB_JOIN_PATH: &str = "/club/join";
pub const USER_INFO_UPDATE_PATH: &str = "/user/info";

// Cache key prefixes; a full key is [prefix, search, page]
pub const QUERY_KEY_CLUB_LIST: &str = "clubList";
pub const QUERY_KEY_MY_CLUB_LIST: &str = "myClubList";

// How long success/info notifications stay on screen
pub const NOTIFICATION_SECS: u64 = 3;
