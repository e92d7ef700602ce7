use rand::seq::IndexedRandom;

pub const WIN_MESSAGES: [&str; 10] = [
    "Splendid!",
    "Magnificent!",
    "Outstanding!",
    "Brilliant!",
    "Excellent!",
    "Great job!",
    "Well done!",
    "Fantastic!",
    "Amazing!",
    "Superb!",
];

pub const LOSS_MESSAGES: [&str; 10] = [
    "Nice try!",
    "So close!",
    "Good effort!",
    "Better luck next time!",
    "Keep going!",
    "Don't give up!",
    "Almost had it!",
    "Honorable attempt!",
    "Great effort!",
    "You'll get it!",
];

// deliberately not on the daily seed; the same outcome should not greet a
// player with the same words every session

pub fn random_win_message() -> &'static str {
    WIN_MESSAGES.choose(&mut rand::rng()).copied().unwrap_or(WIN_MESSAGES[0])
}

pub fn random_loss_message() -> &'static str {
    LOSS_MESSAGES
        .choose(&mut rand::rng())
        .copied()
        .unwrap_or(LOSS_MESSAGES[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_come_from_the_pools() {
        for _ in 0..20 {
            assert!(WIN_MESSAGES.contains(&random_win_message()));
            assert!(LOSS_MESSAGES.contains(&random_loss_message()));
        }
    }
}
