pub mod apiv1;
pub mod client;
