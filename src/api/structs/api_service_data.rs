//! Shared data context for API request handlers.

use std::sync::Arc;
use crate::config::structs::api_server_config::ApiServerConfig;
use crate::statistics::structs::statistics_manager::StatisticsManager;

/// Shared application data available to all API request handlers.
///
/// Injected into Actix-web's application data; both fields are `Arc`s so
/// every worker shares the same coordinator.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(data: Data<Arc<ApiServiceData>>) -> HttpResponse {
///     let manager = &data.statistics_manager;
///     let limit = data.api_server_config.max_body_size;
///     // ...
/// }
/// ```
#[derive(Debug)]
pub struct ApiServiceData {
    /// Coordinator answering every request.
    pub statistics_manager: Arc<StatisticsManager>,

    /// Configuration of this API server instance.
    pub api_server_config: Arc<ApiServerConfig>,
}
