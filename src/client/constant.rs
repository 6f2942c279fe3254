pub const SITE_NAME: &str = "ProConnect";
