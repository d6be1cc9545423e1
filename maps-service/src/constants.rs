pub const API_NAME: &str = "[maps-service]";
