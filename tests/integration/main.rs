//! HTTP-level integration tests against a real PostgreSQL database.


mod aggregate_test;
mod category_test;
mod upload_test;
