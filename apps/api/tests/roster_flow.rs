//! Full-wiring test over the in-memory repositories: one season through
//! division setup, club creation, team numbering and placement.

use std::sync::Arc;

use chessleague_api::api::AppState;
use chessleague_api::auth::BcryptPasswordHasher;
use chessleague_api::domain::repositories::TeamRepository;
use chessleague_api::infrastructure::repositories::memory::{
    MemoryClubRepository, MemoryDivisionRepository, MemorySeasonRepository, MemoryTeamRepository,
    MemoryUserRepository,
};

fn setup() -> (AppState, Arc<MemoryTeamRepository>) {
    let team_repo = Arc::new(MemoryTeamRepository::new());
    let state = AppState::new(
        Arc::new(MemorySeasonRepository::new()),
        Arc::new(MemoryDivisionRepository::new()),
        Arc::new(MemoryClubRepository::new()),
        team_repo.clone(),
        Arc::new(MemoryUserRepository::new()),
        Arc::new(BcryptPasswordHasher::with_cost(4)),
    );
    (state, team_repo)
}

#[tokio::test]
async fn season_to_placed_teams_lifecycle() {
    let (state, team_repo) = setup();

    // Season with two levels of divisions
    state.seasons.create_season("2024/25").await.expect("season");
    state
        .divisions
        .create_division("2024/25", "Stadtliga", 1)
        .await
        .expect("division");
    let division_view = state
        .divisions
        .create_division("2024/25", "Bezirksliga A", 2)
        .await
        .expect("division");

    let grouped = state
        .divisions
        .divisions_of_season_by_level("2024/25")
        .await
        .expect("grouping");
    assert_eq!(grouped.keys().copied().collect::<Vec<_>>(), vec![1, 2]);

    // A club fields three teams
    state.clubs.create_club("Kreuzberg").await.expect("club");
    state.teams.create_teams("Kreuzberg", 3).await.expect("teams");

    let available = state.teams.teams_of_club("Kreuzberg").await.expect("teams");
    assert_eq!(
        available.iter().map(|t| t.number).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
    assert_eq!(available[0].name(), "Kreuzberg 1");

    // Operator places the first team into Bezirksliga A
    let division = state
        .divisions
        .get_division(division_view.id)
        .await
        .expect("lookup")
        .expect("division stored");
    let first = team_repo
        .find_available_by_club_and_number("Kreuzberg", 1)
        .await
        .expect("lookup")
        .expect("available");
    team_repo
        .assign_division(first.id, &division)
        .await
        .expect("placed");

    // Placement must not alter club or number, and the team leaves the
    // available list
    let placed = state
        .teams
        .teams_of_division(&division_view)
        .await
        .expect("teams");
    assert_eq!(placed.len(), 1);
    let team = placed.iter().next().expect("one team");
    assert_eq!(team.club.name, "Kreuzberg");
    assert_eq!(team.number, 1);
    assert_eq!(team.division.as_ref(), Some(&division_view));

    let available = state.teams.teams_of_club("Kreuzberg").await.expect("teams");
    assert_eq!(
        available.iter().map(|t| t.number).collect::<Vec<_>>(),
        vec![2, 3]
    );

    assert_eq!(
        state
            .teams
            .count_teams_of_division(&division_view)
            .await
            .expect("count"),
        1
    );

    // Growing the batch only fills the gap above the placed number
    state.teams.create_teams("Kreuzberg", 4).await.expect("teams");
    let available = state.teams.teams_of_club("Kreuzberg").await.expect("teams");
    assert_eq!(
        available.iter().map(|t| t.number).collect::<Vec<_>>(),
        vec![2, 3, 4]
    );
}

#[tokio::test]
async fn operator_account_lifecycle() {
    let (state, _) = setup();

    state.users.create_user("arbiter", "king-g4").await.expect("user");
    state
        .users
        .change_password("arbiter", "king-g4", "rook-a8")
        .await
        .expect("rotated");

    use chessleague_api::domain::errors::DomainError;
    assert_eq!(
        state
            .users
            .change_password("arbiter", "king-g4", "anything")
            .await,
        Err(DomainError::WrongPassword)
    );
}
