/// Per-server state shared by the request handlers.
pub mod http_service_data;
