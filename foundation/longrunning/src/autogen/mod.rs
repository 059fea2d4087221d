pub mod operations_client;
