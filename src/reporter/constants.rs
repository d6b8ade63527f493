/// Base URL for the status dashboard API.
pub const STATUSPAGE_API_BASE: &str = "https://api.statuspage.io";
