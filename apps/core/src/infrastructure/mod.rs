// Infrastructure layer module
// Contains slot storage adapters and the seed data set
// Follows Hexagonal Architecture

pub mod repositories;
pub mod seed;
