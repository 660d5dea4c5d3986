// Roster service paths, relative to the configured base URL

pub const CHAMPIONS_ENDPOINT: &str = "/champions";
pub const SELECTION_ENDPOINT: &str = "/selection";
pub const RANDOMIZE_TEAMS_ENDPOINT: &str = "/teams/randomize";

pub fn url(base: &str, endpoint: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), endpoint)
}
