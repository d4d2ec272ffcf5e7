// Domain layer - Shots, court geometry and view models
pub mod court;
pub mod error;
pub mod shot;
pub mod view;
