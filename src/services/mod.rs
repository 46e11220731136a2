pub mod http_helpers;
pub mod motivation_service;
pub mod quiz_service;
pub mod session_service;
