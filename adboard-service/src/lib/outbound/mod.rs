pub mod alerting;
pub mod repositories;
