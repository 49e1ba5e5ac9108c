//! Dice and action-category tallies.

use gmlens_types::{ActionCategory, ActionKind, GameplayMetrics, MessageKind, SessionData};

use crate::classify::MessageClassification;
use crate::config::Thresholds;

/// Tally dice outcomes and categorized activity.
///
/// Category counters are fed from two channels: the action scalar of each
/// chat classification, and the explicit action records. Both increment
/// independently, so an event logged through both channels counts twice.
pub fn analyze_gameplay(
    session: &SessionData,
    classifications: &[MessageClassification],
    thresholds: &Thresholds,
) -> GameplayMetrics {
    let mut metrics = GameplayMetrics::default();
    let mut successful_rolls = 0u32;

    for (msg, classification) in session.chat_logs.iter().zip(classifications) {
        if msg.kind == MessageKind::Dice
            && let Some(dice) = &msg.dice_result
        {
            metrics.dice_rolls += 1;
            if dice.result >= thresholds.dice_success {
                successful_rolls += 1;
            }
        }

        match classification.action {
            Some(ActionCategory::Combat) => metrics.combat_encounters += 1,
            Some(ActionCategory::Investigation) => metrics.investigation_actions += 1,
            Some(ActionCategory::Social) => metrics.social_interactions += 1,
            Some(ActionCategory::Magic) => metrics.magic_usage += 1,
            Some(ActionCategory::Movement) | None => {}
        }
    }

    for action in &session.player_actions {
        match action.action_type {
            ActionKind::Attack => metrics.combat_encounters += 1,
            ActionKind::Investigation => metrics.investigation_actions += 1,
            ActionKind::Interaction => metrics.social_interactions += 1,
            ActionKind::Magic => metrics.magic_usage += 1,
            ActionKind::Move | ActionKind::Skill => {}
        }
    }

    metrics.success_rate = if metrics.dice_rolls > 0 {
        successful_rolls as f64 / metrics.dice_rolls as f64
    } else {
        0.0
    };

    metrics
}
