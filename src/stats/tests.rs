//! Unit tests for statistics aggregation and fantasy credits

use super::*;
use crate::{
    cli::types::PlayerId,
    config::CreditRules,
    models::{AttendanceStatus, Match, MatchStatus, Player},
};

fn pid(id: &str) -> PlayerId {
    PlayerId::from(id)
}

fn players() -> Vec<Player> {
    let mut striker = Player::new("p3", "Carla", "Delantero");
    striker.game_points = 37;
    vec![
        Player::new("p1", "Ana", "Portero"),
        Player::new("p2", "Bea", "Lateral Izquierdo"),
        striker,
        Player::new("p4", "Dani", "Mediocentro"),
    ]
}

fn confirm(m: &mut Match, id: &str) {
    let status = m.status_entry(&pid(id));
    status.attendance_status = AttendanceStatus::Confirmed;
    status.quarters_played = 4;
}

fn rate(m: &mut Match, rater: &str, ratee: &str, stars: u8) {
    m.ratings
        .entry(pid(rater))
        .or_default()
        .insert(pid(ratee), stars);
}

fn stats_for<'a>(stats: &'a [PlayerStats], id: &str) -> &'a PlayerStats {
    stats.iter().find(|s| s.player_id.as_str() == id).unwrap()
}

#[cfg(test)]
mod aggregate_tests {
    use super::*;

    #[test]
    fn test_average_rating_ignores_unrated_matches() {
        let mut first = Match::new("m1", "2024-01-01", MatchStatus::Finalizado);
        confirm(&mut first, "p3");
        rate(&mut first, "p1", "p3", 4);
        rate(&mut first, "p2", "p3", 2);

        let mut second = Match::new("m2", "2024-01-08", MatchStatus::Finalizado);
        confirm(&mut second, "p3");

        let stats = aggregate_player_stats(&[first, second], &players());
        let carla = stats_for(&stats, "p3");
        assert_eq!(carla.avg_rating, 3.0);
        assert_eq!(carla.votes_received, 2);
        assert_eq!(carla.matches_played, 2);
    }

    #[test]
    fn test_no_votes_means_zero_average() {
        let stats = aggregate_player_stats(&[], &players());
        assert_eq!(stats.len(), 4);
        for s in &stats {
            assert_eq!(s.avg_rating, 0.0);
            assert_eq!(s.matches_played, 0);
            assert_eq!(s.amount_paid, 0.0);
        }
    }

    #[test]
    fn test_counters_accumulate_across_matches() {
        let mut first = Match::new("m1", "2024-01-01", MatchStatus::Finalizado);
        confirm(&mut first, "p4");
        {
            let s = first.status_entry(&pid("p4"));
            s.goals_play = 1;
            s.goals_header = 1;
            s.assists = 2;
            s.yellow_cards = 1;
            s.bad_throw_ins = 3;
            s.amount_paid = 7.5;
        }

        let mut second = Match::new("m2", "2024-01-08", MatchStatus::Finalizado);
        confirm(&mut second, "p4");
        {
            let s = second.status_entry(&pid("p4"));
            s.goals_set_piece = 1;
            s.red_cards = 1;
            s.own_goals = 1;
            s.penalties_missed = 1;
            s.major_errors = 1;
            s.quarters_played = 2;
            s.amount_paid = 7.5;
        }

        let stats = aggregate_player_stats(&[first, second], &players());
        let dani = stats_for(&stats, "p4");
        assert_eq!(dani.total_goals(), 3);
        assert_eq!(dani.assists, 2);
        assert_eq!(dani.yellow_cards, 1);
        assert_eq!(dani.red_cards, 1);
        assert_eq!(dani.own_goals, 1);
        assert_eq!(dani.penalties_missed, 1);
        assert_eq!(dani.bad_throw_ins, 3);
        assert_eq!(dani.major_errors, 1);
        assert_eq!(dani.quarters_played, 6);
        assert_eq!(dani.amount_paid, 15.0);
    }

    #[test]
    fn test_win_draw_loss_only_for_finished_confirmed_matches() {
        let mut win = Match::new("m1", "2024-01-01", MatchStatus::Finalizado);
        confirm(&mut win, "p1");
        confirm(&mut win, "p3");
        win.status_entry(&pid("p3")).goals_play = 2;
        win.opponent_score = 1;

        let mut draw = Match::new("m2", "2024-01-08", MatchStatus::Finalizado);
        confirm(&mut draw, "p1");
        draw.opponent_score = 0;

        let mut loss = Match::new("m3", "2024-01-15", MatchStatus::Finalizado);
        confirm(&mut loss, "p1");
        loss.opponent_score = 3;

        let mut upcoming = Match::new("m4", "2024-01-22", MatchStatus::Programado);
        confirm(&mut upcoming, "p1");

        let mut absent = Match::new("m5", "2024-01-29", MatchStatus::Finalizado);
        absent.status_entry(&pid("p1")).attendance_status = AttendanceStatus::Absent;
        absent.opponent_score = 4;

        let mut suspended = Match::new("m6", "2024-02-05", MatchStatus::Suspendido);
        confirm(&mut suspended, "p1");

        let stats = aggregate_player_stats(
            &[win, draw, loss, upcoming, absent, suspended],
            &players(),
        );
        let ana = stats_for(&stats, "p1");
        assert_eq!(ana.matches_played, 3);
        assert_eq!((ana.wins, ana.draws, ana.losses), (1, 1, 1));
    }

    #[test]
    fn test_unplayed_fixtures_earn_no_appearance_credits() {
        let mut upcoming = Match::new("m1", "2024-01-01", MatchStatus::Programado);
        confirm(&mut upcoming, "p4");
        let mut suspended = Match::new("m2", "2024-01-08", MatchStatus::Suspendido);
        confirm(&mut suspended, "p4");

        let matches = vec![upcoming, suspended];
        let stats = aggregate_player_stats(&matches, &players());
        assert_eq!(stats_for(&stats, "p4").matches_played, 0);

        let credits = compute_fantasy_credits(&stats, &matches);
        let dani = credits.iter().find(|c| c.player_id.as_str() == "p4").unwrap();
        assert_eq!(dani.credits, 0);
    }

    #[test]
    fn test_stats_follow_player_order() {
        let stats = aggregate_player_stats(&[], &players());
        let ids: Vec<&str> = stats.iter().map(|s| s.player_id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p2", "p3", "p4"]);
        assert_eq!(stats[2].game_points, 37);
    }
}

#[cfg(test)]
mod credit_tests {
    use super::*;

    fn credits_for<'a>(credits: &'a [FantasyCredits], id: &str) -> &'a FantasyCredits {
        credits.iter().find(|c| c.player_id.as_str() == id).unwrap()
    }

    #[test]
    fn test_credit_arithmetic() {
        let mut m = Match::new("m1", "2024-01-01", MatchStatus::Finalizado);
        confirm(&mut m, "p3");
        {
            let s = m.status_entry(&pid("p3"));
            s.goals_play = 1;
            s.yellow_cards = 1;
        }
        m.opponent_score = 2;
        let matches = vec![m];

        let stats = aggregate_player_stats(&matches, &players());
        let credits = compute_fantasy_credits(&stats, &matches);
        let carla = credits_for(&credits, "p3");

        // 2 (pj) + 3 (goal) - 2 (yellow) + round(37 / 10)
        assert_eq!(carla.credits, 7);
        assert_eq!(carla.breakdown.base, 3);
        assert_eq!(carla.breakdown.arcade, 4);
        assert_eq!(carla.breakdown.clean_sheets, 0);
        assert_eq!(carla.breakdown.rating_podiums, 0);
    }

    #[test]
    fn test_every_base_item_weighs_in() {
        let mut s = PlayerStats::new(&Player::new("p4", "Dani", "Mediocentro"));
        s.matches_played = 3;
        s.goals_play = 1;
        s.goals_header = 1;
        s.goals_penalty = 1;
        s.goals_set_piece = 1;
        s.assists = 1;
        s.yellow_cards = 1;
        s.red_cards = 1;
        s.own_goals = 1;
        s.penalties_missed = 1;
        s.bad_throw_ins = 1;
        s.bad_free_kicks = 1;
        s.major_errors = 1;

        let credits = compute_fantasy_credits(&[s], &[]);
        // 6 + 3 + 5 + 3 + 4 + 2 - 2 - 5 - 5 - 3 - 1 - 1 - 2
        assert_eq!(credits[0].credits, 4);
    }

    #[test]
    fn test_arcade_points_round_half_up() {
        let mut s = PlayerStats::new(&Player::new("p4", "Dani", "Mediocentro"));
        s.game_points = 35;
        assert_eq!(compute_fantasy_credits(&[s.clone()], &[])[0].credits, 4);
        s.game_points = 34;
        assert_eq!(compute_fantasy_credits(&[s], &[])[0].credits, 3);
    }

    #[test]
    fn test_clean_sheet_only_for_defensive_roles() {
        let mut shutout = Match::new("m1", "2024-01-01", MatchStatus::Finalizado);
        for id in ["p1", "p2", "p3"] {
            confirm(&mut shutout, id);
        }
        shutout.opponent_score = 0;

        // Not finished yet, so no bonus either
        let mut scheduled = Match::new("m2", "2024-01-08", MatchStatus::Programado);
        confirm(&mut scheduled, "p1");

        let matches = vec![shutout, scheduled];
        let stats = aggregate_player_stats(&matches, &players());
        let credits = compute_fantasy_credits(&stats, &matches);

        assert_eq!(credits_for(&credits, "p1").breakdown.clean_sheets, 5);
        assert_eq!(credits_for(&credits, "p2").breakdown.clean_sheets, 5);
        assert_eq!(credits_for(&credits, "p3").breakdown.clean_sheets, 0);
        assert_eq!(credits_for(&credits, "p4").breakdown.clean_sheets, 0);
    }

    #[test]
    fn test_rating_podium_per_match() {
        let mut m = Match::new("m1", "2024-01-01", MatchStatus::Finalizado);
        for id in ["p1", "p2", "p3", "p4"] {
            confirm(&mut m, id);
        }
        m.opponent_score = 1;
        rate(&mut m, "p4", "p1", 5);
        rate(&mut m, "p4", "p2", 3);
        rate(&mut m, "p4", "p3", 4);
        rate(&mut m, "p1", "p4", 2);

        let ranking = match_rating_ranking(&m);
        let order: Vec<&str> = ranking.iter().map(|e| e.player_id.as_str()).collect();
        assert_eq!(order, vec!["p1", "p3", "p2", "p4"]);

        let matches = vec![m];
        let stats = aggregate_player_stats(&matches, &players());
        let credits = compute_fantasy_credits(&stats, &matches);
        assert_eq!(credits_for(&credits, "p1").breakdown.rating_podiums, 5);
        assert_eq!(credits_for(&credits, "p3").breakdown.rating_podiums, 3);
        assert_eq!(credits_for(&credits, "p2").breakdown.rating_podiums, 1);
        assert_eq!(credits_for(&credits, "p4").breakdown.rating_podiums, 0);
    }

    #[test]
    fn test_podium_tie_break_prefers_lower_player_id() {
        let mut m = Match::new("m1", "2024-01-01", MatchStatus::Finalizado);
        for id in ["p4", "p2", "p3"] {
            confirm(&mut m, id);
        }
        rate(&mut m, "p1", "p4", 4);
        rate(&mut m, "p1", "p2", 4);
        rate(&mut m, "p1", "p3", 4);

        let ranking = match_rating_ranking(&m);
        let order: Vec<&str> = ranking.iter().map(|e| e.player_id.as_str()).collect();
        assert_eq!(order, vec!["p2", "p3", "p4"]);
    }

    #[test]
    fn test_unrated_and_unfinished_matches_award_no_podium() {
        let mut open = Match::new("m1", "2024-01-01", MatchStatus::Programado);
        confirm(&mut open, "p2");
        rate(&mut open, "p1", "p2", 5);

        let mut unrated = Match::new("m2", "2024-01-08", MatchStatus::Finalizado);
        confirm(&mut unrated, "p3");
        unrated.opponent_score = 1;

        assert!(match_rating_ranking(&unrated).is_empty());

        let matches = vec![open, unrated];
        let stats = aggregate_player_stats(&matches, &players());
        let credits = compute_fantasy_credits(&stats, &matches);
        assert!(credits.iter().all(|c| c.breakdown.rating_podiums == 0));
    }

    #[test]
    fn test_credits_sorted_descending_with_id_tie_break() {
        let mut a = PlayerStats::new(&Player::new("b", "B", "Delantero"));
        a.matches_played = 1;
        let mut b = PlayerStats::new(&Player::new("a", "A", "Delantero"));
        b.matches_played = 1;
        let mut c = PlayerStats::new(&Player::new("c", "C", "Delantero"));
        c.matches_played = 5;

        let credits = compute_fantasy_credits(&[a, b, c], &[]);
        let order: Vec<&str> = credits.iter().map(|c| c.player_id.as_str()).collect();
        assert_eq!(order, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_custom_rules() {
        let mut s = PlayerStats::new(&Player::new("p4", "Dani", "Mediocentro"));
        s.matches_played = 2;
        let rules = CreditRules {
            per_match_played: 10,
            ..CreditRules::default()
        };
        assert_eq!(compute_fantasy_credits_with(&[s], &[], &rules)[0].credits, 20);
    }
}

#[cfg(test)]
mod hall_of_fame_tests {
    use super::*;

    /// Three finished matches, p1 and p2 play all, p2 votes everything.
    fn season() -> Vec<Match> {
        ["2024-01-01", "2024-01-08", "2024-01-15"]
            .iter()
            .enumerate()
            .map(|(idx, date)| {
                let mut m = Match::new(format!("m{}", idx + 1), *date, MatchStatus::Finalizado);
                confirm(&mut m, "p1");
                confirm(&mut m, "p2");
                rate(&mut m, "p2", "p1", 4);
                rate(&mut m, "p1", "p2", 5);
                m.finished_voters.insert(pid("p1"));
                m.finished_voters.insert(pid("p2"));
                m
            })
            .collect()
    }

    #[test]
    fn test_visible_ranking_orders_by_average() {
        let matches = season();
        let stats = aggregate_player_stats(&matches, &players());
        let hof = hall_of_fame(&stats, &matches, &pid("p1"));

        assert!(hof.is_visible());
        let entries = hof.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].player_id, pid("p2"));
        assert_eq!(entries[0].rank, 1);
        assert_eq!(entries[1].player_id, pid("p1"));
        assert_eq!(entries[1].avg_rating, 4.0);
    }

    #[test]
    fn test_locked_viewer_sees_nothing_others_unaffected() {
        let mut matches = season();
        matches[2].finished_voters.remove(&pid("p1"));
        let stats = aggregate_player_stats(&matches, &players());

        let hof = hall_of_fame(&stats, &matches, &pid("p1"));
        assert!(!hof.is_visible());
        assert!(hof.entries().is_empty());
        match hof {
            HallOfFame::Hidden(reason) => {
                assert_eq!(reason.code(), "PENALTY_LOCKED");
                let HiddenReason::PenaltyLocked { match_id, .. } = reason;
                assert_eq!(match_id.as_str(), "m3");
            }
            _ => panic!("Expected hidden hall of fame"),
        }

        assert!(hall_of_fame(&stats, &matches, &pid("p2")).is_visible());
    }

    #[test]
    fn test_old_lock_outside_latest_match_does_not_hide() {
        let mut matches = season();
        matches.push({
            let mut m = Match::new("m4", "2024-01-22", MatchStatus::Finalizado);
            confirm(&mut m, "p1");
            m.finished_voters.insert(pid("p1"));
            m
        });
        // Miss on m1 locks m1..m3; latest played match m4 stays clear
        matches[0].finished_voters.remove(&pid("p1"));

        let stats = aggregate_player_stats(&matches, &players());
        assert!(hall_of_fame(&stats, &matches, &pid("p1")).is_visible());
        assert!(visibility_lock(&matches, &pid("p1")).is_none());
    }

    #[test]
    fn test_pardon_restores_visibility() {
        let mut matches = season();
        matches[2].finished_voters.remove(&pid("p1"));
        assert!(visibility_lock(&matches, &pid("p1")).is_some());

        crate::voting::pardon(&mut matches[2], &pid("p1"));
        assert!(visibility_lock(&matches, &pid("p1")).is_none());
    }

    #[test]
    fn test_viewer_without_matches_sees_ranking() {
        let matches = season();
        let stats = aggregate_player_stats(&matches, &players());
        assert!(hall_of_fame(&stats, &matches, &pid("p4")).is_visible());
    }
}
