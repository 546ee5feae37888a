// The registries. Each one takes its store contract and the lower
// registries it projects through as constructor parameters; no container.

pub mod club_service;
pub mod division_service;
pub mod season_service;
pub mod team_service;
pub mod user_service;

pub use club_service::ClubService;
pub use division_service::DivisionService;
pub use season_service::SeasonService;
pub use team_service::TeamService;
pub use user_service::UserService;
