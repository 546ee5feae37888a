// Infrastructure layer: storage adapters implementing the domain
// repository contracts.

pub mod repositories;
