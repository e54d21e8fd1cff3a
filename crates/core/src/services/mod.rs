pub mod analytics_service;
pub mod history_service;
