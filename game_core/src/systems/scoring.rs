use crate::{Config, Contact, Score, Side};

/// Settle an exit: flip the serve toward the side that conceded and, once the
/// stage keeps score, credit the other side. Returns who scored.
pub fn award_point(
    contact: Contact,
    score: &mut Score,
    player1_serving: &mut bool,
    config: &Config,
) -> Option<Side> {
    let winner = match contact {
        Contact::RightExit => {
            *player1_serving = false;
            Side::Left
        }
        Contact::LeftExit => {
            *player1_serving = true;
            Side::Right
        }
        _ => return None,
    };

    if !config.stage.keeps_score() {
        return None;
    }
    score.increment(winner);
    log::info!("{winner:?} player scores, now {}", score.display());
    Some(winner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Stage;

    #[test]
    fn test_left_player_scores_when_ball_exits_right() {
        let config = Config::new();
        let mut score = Score::new();
        let mut serving = true;

        let scored = award_point(Contact::RightExit, &mut score, &mut serving, &config);

        assert_eq!(scored, Some(Side::Left));
        assert_eq!(score, Score { left: 1, right: 0 });
        assert!(!serving, "Serve goes to the right side after it concedes");
    }

    #[test]
    fn test_right_player_scores_when_ball_exits_left() {
        let config = Config::new();
        let mut score = Score::new();
        let mut serving = false;

        let scored = award_point(Contact::LeftExit, &mut score, &mut serving, &config);

        assert_eq!(scored, Some(Side::Right));
        assert_eq!(score, Score { left: 0, right: 1 });
        assert!(serving);
    }

    #[test]
    fn test_no_points_before_scoring_stage() {
        let config = Config {
            stage: Stage::BallPhysics,
            ..Config::new()
        };
        let mut score = Score::new();
        let mut serving = false;

        let scored = award_point(Contact::LeftExit, &mut score, &mut serving, &config);

        assert_eq!(scored, None);
        assert_eq!(score, Score::new());
        assert!(serving, "Serve still alternates without scoring");
    }

    #[test]
    fn test_bounces_do_not_score() {
        let config = Config::new();
        let mut score = Score::new();
        let mut serving = false;

        for contact in [Contact::TopWall, Contact::BottomWall, Contact::LeftPaddle, Contact::RightPaddle] {
            assert_eq!(award_point(contact, &mut score, &mut serving, &config), None);
        }
        assert_eq!(score, Score::new());
        assert!(!serving);
    }

    #[test]
    fn test_multiple_scores_accumulate() {
        let config = Config::new();
        let mut score = Score::new();
        let mut serving = false;

        award_point(Contact::RightExit, &mut score, &mut serving, &config);
        award_point(Contact::RightExit, &mut score, &mut serving, &config);
        award_point(Contact::LeftExit, &mut score, &mut serving, &config);

        assert_eq!(score, Score { left: 2, right: 1 });
    }
}
