pub const DEFAULT_SERVER_BACKEND_HOST: &str = "0.0.0.0";
pub const DEFAULT_SERVER_BACKEND_PORT: &str = "3000";
pub const DEFAULT_SERVER_BACKEND_PROTOCOL: &str = "http";
pub const DEFAULT_CLIENT_BASE_URL: &str = "http://localhost:3000";

pub const SERVICE_NAME: &str = "FinGuru API";
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SERVICE_FEATURES: [&str; 4] = [
    "Multilingual financial advice",
    "Gemini AI integration",
    "Conversation management",
    "User profile tracking",
];
