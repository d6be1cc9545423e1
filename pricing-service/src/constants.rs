pub const API_NAME: &str = "[pricing-service]";
