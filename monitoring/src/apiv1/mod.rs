pub mod metric_service_client;
