// Repository contracts (ports) the registries operate against.
// One trait per entity, implemented by the infrastructure layer.

pub mod club_repository;
pub mod division_repository;
pub mod season_repository;
pub mod team_repository;
pub mod user_repository;

pub use club_repository::ClubRepository;
pub use division_repository::DivisionRepository;
pub use season_repository::SeasonRepository;
pub use team_repository::TeamRepository;
pub use user_repository::UserRepository;
