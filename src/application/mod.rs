// Application layer - Filtering, projection and aggregation use cases
pub mod dashboard_service;
pub mod filter;
pub mod perspective;
pub mod shot_repository;
pub mod shot_store;
pub mod styling;
pub mod summary;
pub mod zones;
