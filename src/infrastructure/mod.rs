pub mod artifact;
pub mod models;
pub mod return_repo;
