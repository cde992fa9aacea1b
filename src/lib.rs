// Library for tests to access modules

pub mod config;
pub mod feeding_repo;
pub mod models;
pub mod routes;
pub mod stats;
