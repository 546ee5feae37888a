// Domain layer module exports
// Entities, views and repository contracts; independent of
// infrastructure concerns

pub mod club;
pub mod division;
pub mod errors;
pub mod repositories;
pub mod season;
pub mod team;
pub mod user;

pub use errors::DomainError;
