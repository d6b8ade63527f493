/// Base URL for the Cloudflare API.
pub const CLOUDFLARE_API_BASE: &str = "https://api.cloudflare.com/client/v4";
