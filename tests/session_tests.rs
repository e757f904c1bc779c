use boggle::core::{Die, FisherYates};
use boggle::dictionary::WordStore;
use boggle::game::{GameSession, NUMBER_OF_DICE, STANDARD_DICE, SessionConfig};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn embedded_session(seed: u64) -> GameSession {
    GameSession::new(
        WordStore::embedded().expect("embedded dictionary"),
        SessionConfig::new(Some(seed)),
    )
}

#[test]
fn scenario_from_small_dictionary() {
    let store = WordStore::from_words(["cat", "car", "can", "dog"]);
    let session = GameSession::new(store, SessionConfig::new(Some(0)));

    let similar: Vec<_> = session.similar_words_for("cat").into_iter().collect();
    assert_eq!(similar, ["can", "car", "cat"]);
    assert!(session.dictionary().contains("cat"));
    assert!(!session.dictionary().contains("bat"));
}

#[test]
fn short_words_are_never_legal() {
    let session = embedded_session(1);
    assert!(session.dictionary().contains("at"));
    assert!(!session.is_legal_word("at"));
    assert!(!session.is_legal_word("zzqx"));
    assert!(session.is_legal_word("Queen"));
}

#[test]
fn reroll_faces_come_from_standard_dice() {
    let mut session = embedded_session(2);

    for _ in 0..20 {
        session.reroll_dice();
        let faces = session.current_dice_faces();
        assert_eq!(faces.len(), NUMBER_OF_DICE);

        for face in &faces {
            assert!(
                STANDARD_DICE.iter().flatten().any(|f| f == face),
                "unexpected face {face}"
            );
        }
    }
}

#[test]
fn same_seed_same_boards() {
    let mut a = embedded_session(77);
    let mut b = embedded_session(77);

    for _ in 0..5 {
        assert_eq!(a.current_dice_faces(), b.current_dice_faces());
        a.reroll_dice();
        b.reroll_dice();
    }
}

#[test]
fn custom_dice_set() {
    let dice = vec![
        Die::new(["A"]).unwrap(),
        Die::new(["B"]).unwrap(),
        Die::new(["C"]).unwrap(),
    ];
    let mut session = GameSession::with_dice(
        WordStore::from_words(["abc"]),
        dice,
        FisherYates,
        StdRng::seed_from_u64(4),
    );

    session.reroll_dice();
    let mut faces = session.current_dice_faces();
    faces.sort();
    assert_eq!(faces, ["A", "B", "C"]);
}
