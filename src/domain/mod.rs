pub mod eligibility;
pub mod errors;
pub mod identifier;
pub mod ports;
pub mod returns;
