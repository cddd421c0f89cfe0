pub mod config_service;
pub mod http_gateway;
pub mod paths;
pub mod storage;

pub use crate::config_service::ConfigService;
pub use crate::http_gateway::HttpGateway;
pub use crate::paths::NovaPaths;
pub use crate::storage::FileSessionStorage;
