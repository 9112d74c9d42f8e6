//! Whole games played through the session API

use lingo::dictionary::Dictionary;
use lingo::game::{GameSession, GuessOutcome, Phase, SessionRules};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::{Duration, Instant};

fn answer(session: &GameSession<'_, StdRng>) -> String {
    session.current_word().unwrap().word.clone()
}

#[test]
fn perfect_game_wins_the_grand_prize() {
    let dictionary = Dictionary::embedded();
    let now = Instant::now();
    let mut session =
        GameSession::new(&dictionary, SessionRules::default(), StdRng::seed_from_u64(11), now)
            .unwrap();

    while session.phase() == Phase::Classic {
        let word = answer(&session);
        let outcome = session.guess(&word, now).unwrap();
        assert!(matches!(outcome, GuessOutcome::Solved { .. }));
    }
    assert_eq!(session.phase(), Phase::AwaitingFinal);
    assert_eq!(session.completed().len(), 12);
    assert_eq!(session.total_score(), 21_000);

    session.start_final(now).unwrap();
    for stage in 4..=7 {
        assert_eq!(session.final_stage(), stage);
        assert_eq!(session.current_word().unwrap().length, stage);
        let word = answer(&session);
        let outcome = session.guess(&word, now).unwrap();
        if stage < 7 {
            assert!(matches!(outcome, GuessOutcome::StageCleared { .. }));
        } else {
            let GuessOutcome::GameWon { reward, .. } = outcome else {
                panic!("expected a win, got {outcome:?}");
            };
            assert!(reward.grand_prize);
            assert_eq!(reward.points, 42_000);
        }
    }
    assert_eq!(session.phase(), Phase::Finished);
}

#[test]
fn slow_player_loses_every_word() {
    let dictionary = Dictionary::embedded();
    let start = Instant::now();
    let rules = SessionRules {
        row_time_limit: Some(Duration::from_secs(15)),
        ..SessionRules::default()
    };
    let mut session =
        GameSession::new(&dictionary, rules, StdRng::seed_from_u64(5), start).unwrap();

    let mut now = start;
    while session.phase() == Phase::Classic {
        now += Duration::from_secs(16);
        let word = answer(&session);
        let outcome = session.guess(&word, now).unwrap();
        assert!(matches!(outcome, GuessOutcome::Burned { response: None, .. }));
    }

    assert_eq!(session.total_score(), 0);
    assert!(session.completed().iter().all(|w| !w.solved));
}
