pub mod fulfillment;
pub mod return_service;
