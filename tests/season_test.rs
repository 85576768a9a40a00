//! End-to-end tests over a snapshot document: voting, penalties and standings

use chrono::NaiveDate;
use matchday::{
    models::Snapshot,
    stats::{aggregate_player_stats, compute_fantasy_credits, hall_of_fame, HallOfFame},
    voting::{
        compute_eligible_matches, compute_penalties, eligible_ratees, finalize_vote, pardon,
        submit_vote, VoteState,
    },
    MatchId, MatchdayError, PlayerId,
};

const SEASON: &str = r#"{
  "players": [
    { "id": "ana", "name": "Ana Ruiz", "role": "Portero", "gamePoints": 12 },
    { "id": "bea", "name": "Beatriz Gil", "nickname": "Bea", "role": "Defensa Central" },
    { "id": "cris", "name": "Cristina Soto", "role": "Delantero", "gamePoints": 37 },
    { "id": "dani", "name": "Daniela Paz", "role": "Entrenador", "isAdmin": true }
  ],
  "matches": [
    {
      "id": "m1", "date": "2024-01-01", "status": "FINALIZADO", "opponent": "Rayo Norte",
      "opponentScore": 0, "ratingStatus": "OPEN",
      "playerStatuses": [
        { "playerId": "ana", "attendanceStatus": "CONFIRMED", "quartersPlayed": 4 },
        { "playerId": "bea", "attendanceStatus": "CONFIRMED", "quartersPlayed": 4 },
        { "playerId": "cris", "attendanceStatus": "CONFIRMED", "quartersPlayed": 4,
          "goalsPlay": 1, "yellowCards": 1 },
        { "playerId": "dani", "attendanceStatus": "CONFIRMED" }
      ]
    },
    {
      "id": "m2", "date": "2024-01-08", "status": "FINALIZADO", "opponent": "Atlético Sur",
      "opponentScore": 2, "ratingStatus": "OPEN",
      "playerStatuses": [
        { "playerId": "ana", "attendanceStatus": "CONFIRMED", "quartersPlayed": 4 },
        { "playerId": "bea", "attendanceStatus": "CONFIRMED", "quartersPlayed": 2 },
        { "playerId": "cris", "attendanceStatus": "ABSENT" }
      ]
    },
    {
      "id": "m3", "date": "2024-01-15", "status": "FINALIZADO", "opponent": "Unión Este",
      "opponentScore": 1, "ratingStatus": "OPEN",
      "playerStatuses": [
        { "playerId": "ana", "attendanceStatus": "CONFIRMED", "quartersPlayed": 4 },
        { "playerId": "bea", "attendanceStatus": "CONFIRMED", "quartersPlayed": 4 }
      ]
    },
    {
      "id": "m4", "date": "2024-01-22", "status": "PROGRAMADO", "opponent": "Deportivo Oeste"
    }
  ]
}"#;

fn pid(id: &str) -> PlayerId {
    PlayerId::from(id)
}

fn season() -> Snapshot {
    Snapshot::from_json(SEASON).unwrap()
}

/// Rate every eligible teammate with `stars` and finalize.
fn vote_all(snapshot: &mut Snapshot, match_id: &str, rater: &str, stars: u8) {
    let roster = snapshot.roster();
    let m = snapshot.find_match_mut(&MatchId::from(match_id)).unwrap();
    let rater = pid(rater);
    let eligible = eligible_ratees(m, &roster, &rater).unwrap();
    for ratee in &eligible {
        submit_vote(m, &roster, &rater, ratee, stars).unwrap();
    }
    finalize_vote(m, &rater, &eligible).unwrap();
}

#[test]
fn test_snapshot_parses_with_defaults() {
    let snapshot = season();
    assert_eq!(snapshot.players.len(), 4);
    assert_eq!(snapshot.matches.len(), 4);

    let m4 = snapshot.find_match(&MatchId::from("m4")).unwrap();
    assert!(m4.player_statuses.is_empty());
    assert!(!m4.is_rating_open());
}

#[test]
fn test_staff_and_benched_players_are_not_ratees() {
    let snapshot = season();
    let roster = snapshot.roster();
    let m1 = snapshot.find_match(&MatchId::from("m1")).unwrap();

    let ratees = eligible_ratees(m1, &roster, &pid("ana")).unwrap();
    assert_eq!(ratees, vec![pid("bea"), pid("cris")]);
}

#[test]
fn test_missed_vote_cascades_until_pardoned() {
    let mut snapshot = season();
    vote_all(&mut snapshot, "m2", "ana", 4);
    vote_all(&mut snapshot, "m3", "ana", 4);

    let report = compute_penalties(&snapshot.matches, &pid("ana"));
    let locked: Vec<&str> = report.locked_ids().map(|id| id.as_str()).collect();
    assert_eq!(locked, vec!["m1", "m2", "m3"]);
    assert_eq!(report.missed, vec![MatchId::from("m1")]);

    let m1 = snapshot.find_match_mut(&MatchId::from("m1")).unwrap();
    assert!(pardon(m1, &pid("ana")));
    assert!(compute_penalties(&snapshot.matches, &pid("ana")).is_empty());
}

#[test]
fn test_voting_room_states() {
    let mut snapshot = season();
    vote_all(&mut snapshot, "m2", "bea", 3);
    let today = NaiveDate::from_ymd_opt(2024, 1, 20).unwrap();

    let room = compute_eligible_matches(&snapshot.matches, &pid("bea"), today);
    let states: Vec<(&str, VoteState)> = room
        .iter()
        .map(|e| (e.fixture.id.as_str(), e.state))
        .collect();

    // Most recent first; m1 is past the expiry window, m2 sits under m1's lock
    assert_eq!(
        states,
        vec![
            ("m3", VoteState::PendingVote),
            ("m2", VoteState::Locked),
            ("m1", VoteState::Expired),
        ]
    );

    let cris_room = compute_eligible_matches(&snapshot.matches, &pid("cris"), today);
    assert_eq!(cris_room[0].state, VoteState::NotParticipated);
}

#[test]
fn test_closed_match_rejects_votes() {
    let mut snapshot = season();
    let roster = snapshot.roster();
    let m1 = snapshot.find_match_mut(&MatchId::from("m1")).unwrap();
    m1.rating_status = matchday::models::RatingStatus::Closed;

    let result = submit_vote(m1, &roster, &pid("ana"), &pid("bea"), 5);
    assert!(matches!(result, Err(MatchdayError::Validation { .. })));
    assert!(m1.ratings.is_empty());
}

#[test]
fn test_season_standings() {
    let mut snapshot = season();
    vote_all(&mut snapshot, "m1", "ana", 4);
    vote_all(&mut snapshot, "m1", "bea", 2);

    let stats = aggregate_player_stats(&snapshot.matches, &snapshot.players);
    let cris = stats.iter().find(|s| s.player_id == pid("cris")).unwrap();
    assert_eq!(cris.matches_played, 1);
    assert_eq!(cris.avg_rating, 3.0);
    assert_eq!((cris.wins, cris.draws, cris.losses), (1, 0, 0));

    let bea = stats.iter().find(|s| s.player_id == pid("bea")).unwrap();
    assert_eq!(bea.name, "Bea");
    assert_eq!((bea.wins, bea.draws, bea.losses), (1, 0, 2));

    let credits = compute_fantasy_credits(&stats, &snapshot.matches);
    let cris_credits = credits.iter().find(|c| c.player_id == pid("cris")).unwrap();
    // 2 (pj) + 3 (goal) - 2 (yellow) + round(3.7) + podium for m1
    assert_eq!(cris_credits.breakdown.base, 3);
    assert_eq!(cris_credits.breakdown.arcade, 4);
    assert_eq!(cris_credits.breakdown.clean_sheets, 0);
}

#[test]
fn test_hall_of_fame_gate() {
    let mut snapshot = season();
    vote_all(&mut snapshot, "m1", "bea", 5);
    vote_all(&mut snapshot, "m1", "dani", 3);
    let stats = aggregate_player_stats(&snapshot.matches, &snapshot.players);

    // ana skipped m1, which locks her latest played match m3
    match hall_of_fame(&stats, &snapshot.matches, &pid("ana")) {
        HallOfFame::Hidden(reason) => assert_eq!(reason.code(), "PENALTY_LOCKED"),
        HallOfFame::Visible(_) => panic!("expected the hall of fame to be hidden"),
    }

    // cris last played m1, where the vote is still missing too
    assert!(!hall_of_fame(&stats, &snapshot.matches, &pid("cris")).is_visible());

    // dani voted on m1, her only match; ana and cris tie on 4.0
    let board = hall_of_fame(&stats, &snapshot.matches, &pid("dani"));
    assert!(board.is_visible());
    let ranked: Vec<&str> = board.entries().iter().map(|e| e.player_id.as_str()).collect();
    assert_eq!(ranked, vec!["ana", "cris", "bea"]);
    assert_eq!(board.entries()[0].avg_rating, 4.0);
    assert_eq!(board.entries()[2].rank, 3);
}
