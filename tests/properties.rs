//! Properties that hold for every (secret, guess) pair, not just the
//! fixtures in the unit tests.

use proptest::prelude::*;

use wyrdl::{evaluate, Session, Status, Verdict, Word, WyrdlError};

fn word() -> impl Strategy<Value = Word> {
    proptest::collection::vec(proptest::char::range('A', 'Z'), 5)
        .prop_map(|letters| Word::new(&letters.into_iter().collect::<String>()).unwrap())
}

proptest! {
    #[test]
    fn guessing_the_secret_grades_all_correct(secret in word()) {
        let result = evaluate(&secret, &secret);
        prop_assert!(result.verdicts().iter().all(|&v| v == Verdict::Correct));
    }

    #[test]
    fn correct_marks_exactly_the_positional_matches(secret in word(), guess in word()) {
        let result = evaluate(&secret, &guess);
        for ((s, g), &v) in secret.chars().zip(guess.chars()).zip(result.verdicts()) {
            prop_assert_eq!(v == Verdict::Correct, s == g);
        }
    }

    #[test]
    fn verdicts_never_outnumber_secret_copies(secret in word(), guess in word()) {
        let result = evaluate(&secret, &guess);
        for letter in 'A'..='Z' {
            let claimed = result
                .iter()
                .filter(|&(c, v)| c == letter && v != Verdict::Absent)
                .count();
            let copies = secret.chars().filter(|&c| c == letter).count();
            prop_assert!(claimed <= copies);
        }
    }

    #[test]
    fn evaluation_is_deterministic(secret in word(), guess in word()) {
        prop_assert_eq!(evaluate(&secret, &guess), evaluate(&secret, &guess));
    }

    #[test]
    fn exactly_the_exact_match_wins(secret in word(), guess in word()) {
        let mut session = Session::new(secret);
        let status = session.submit_guess(&guess).unwrap();
        if guess == secret {
            prop_assert_eq!(status, Status::Won);
        } else {
            prop_assert_eq!(status, Status::InProgress);
        }
    }

    #[test]
    fn knowledge_never_downgrades(
        secret in word(),
        guesses in proptest::collection::vec(word(), 1..8),
    ) {
        let mut session = Session::new(secret).max_attempts(guesses.len());
        let mut previous = session.knowledge().clone();

        for guess in &guesses {
            if session.status() != Status::InProgress {
                break;
            }
            session.submit_guess(guess).unwrap();

            let current = session.knowledge().clone();
            for letter in 'A'..='Z' {
                prop_assert!(current.best(letter) >= previous.best(letter));
            }
            previous = current;
        }
    }

    #[test]
    fn the_attempt_budget_is_exact(
        secret in word(),
        guesses in proptest::collection::vec(word(), 1..12),
        budget in 1_usize..6,
    ) {
        let mut session = Session::new(secret).max_attempts(budget);

        for guess in &guesses {
            if session.status() == Status::InProgress {
                session.submit_guess(guess).unwrap();
            } else {
                prop_assert!(matches!(
                    session.submit_guess(guess),
                    Err(WyrdlError::SessionClosed)
                ));
            }
        }

        prop_assert!(session.history().len() <= budget);
        match session.status() {
            Status::Lost => prop_assert_eq!(session.history().len(), budget),
            Status::Won => {
                prop_assert_eq!(session.history().last().unwrap().guess(), &secret);
            }
            Status::InProgress => prop_assert!(session.history().len() < budget),
        }
    }
}
