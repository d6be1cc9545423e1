pub const API_NAME: &str = "[vehicles-api]";
