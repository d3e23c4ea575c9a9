//! Property tests for the table lookups and ballot arithmetic.

use proptest::prelude::*;

use resistance_engine::{
    mission_table, spy_quota, GameEngine, GameRng, TeamVote, TeamVoteCycle, TeamVoteVerdict,
    MAX_PLAYERS, MIN_PLAYERS, MISSION_COUNT,
};

fn handles(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("p{i}")).collect()
}

fn new_game(count: usize, seed: u64) -> GameEngine {
    let mut rng = GameRng::new(seed);
    GameEngine::new(count, handles(count), &mut rng).expect("valid setup")
}

proptest! {
    /// Every seed partitions every table into exactly quota spies and
    /// the rest Resistance, with no overlap.
    #[test]
    fn spy_quota_partition_holds(
        count in MIN_PLAYERS..=MAX_PLAYERS,
        seed in any::<u64>(),
    ) {
        let game = new_game(count, seed);
        let spies = game.spies();
        let resistance = game.resistance_members();

        prop_assert_eq!(spies.len(), spy_quota(count));
        prop_assert_eq!(spies.len() + resistance.len(), count);
        for spy in &spies {
            prop_assert!(!resistance.contains(spy));
        }
    }

    /// Five missions exist for every count and team sizes never exceed
    /// the table.
    #[test]
    fn mission_table_is_well_formed(count in MIN_PLAYERS..=MAX_PLAYERS) {
        let table = mission_table(count);

        prop_assert_eq!(table.len(), MISSION_COUNT);
        for mission in table {
            prop_assert!(mission.team_size >= 2);
            prop_assert!(mission.team_size <= count);
            prop_assert!((1..=2).contains(&mission.fails_needed));
        }
    }

    /// A complete ballot approves iff approvals form a strict majority.
    #[test]
    fn complete_ballot_tallies_by_strict_majority(
        count in MIN_PLAYERS..=MAX_PLAYERS,
        seed in any::<u64>(),
        approval_bits in any::<u16>(),
    ) {
        let mut game = new_game(count, seed);
        let leader = game.current_leader().to_string();
        let team_size = game.current_mission_config().unwrap().team_size;
        let members = handles(count);
        let team: Vec<&str> = members.iter().take(team_size).map(String::as_str).collect();
        prop_assert!(game.propose_team(&leader, &team));

        let mut approvals = 0usize;
        for (i, player) in members.iter().enumerate() {
            let vote = if (approval_bits >> i) & 1 != 0 {
                approvals += 1;
                TeamVote::Approve
            } else {
                TeamVote::Reject
            };
            prop_assert!(game.cast_team_vote(player, vote));
        }

        let expected = if approvals > count - approvals {
            TeamVoteVerdict::Approved
        } else {
            TeamVoteVerdict::Rejected
        };
        prop_assert_eq!(game.tally_team_vote(), Some(expected));
    }

    /// Every rejection advances the leader by exactly one seat, mod n,
    /// and bumps the counter by exactly one.
    #[test]
    fn rejection_advances_leader_by_one(
        count in MIN_PLAYERS..=MAX_PLAYERS,
        seed in any::<u64>(),
        rounds in 1usize..4,
    ) {
        let mut game = new_game(count, seed);
        let members = handles(count);

        for round in 0..rounds {
            let leader = game.current_leader().to_string();
            prop_assert_eq!(&leader, &format!("p{}", round % count));

            let team_size = game.current_mission_config().unwrap().team_size;
            let team: Vec<&str> =
                members.iter().take(team_size).map(String::as_str).collect();
            prop_assert!(game.propose_team(&leader, &team));

            for player in &members {
                prop_assert!(game.cast_team_vote(player, TeamVote::Reject));
            }

            match game.resolve_team_vote_cycle() {
                TeamVoteCycle::Rejected { new_leader, rejections } => {
                    prop_assert_eq!(rejections as usize, round + 1);
                    prop_assert_eq!(new_leader, format!("p{}", (round + 1) % count));
                }
                other => {
                    prop_assert!(false, "unexpected report: {:?}", other);
                }
            }
        }
    }
}
