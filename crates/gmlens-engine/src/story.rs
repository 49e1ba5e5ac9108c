//! Narrative phase inference, pacing judgment, and story beat extraction.

use gmlens_types::{PacingRate, SessionData, StoryPhase, StoryProgressAnalysis};

use crate::classify::{MessageClassification, Sentiment};
use crate::config::AnalysisConfig;

const KEY_EVENT_SNIPPET: usize = 50;
const PLOT_HOOK_SNIPPET: usize = 30;

/// Infer session-level story progress from per-message classifications.
///
/// `classifications` must be parallel to `session.chat_logs`.
pub fn analyze_story(
    session: &SessionData,
    classifications: &[MessageClassification],
    config: &AnalysisConfig,
) -> StoryProgressAnalysis {
    let thresholds = &config.thresholds;

    let mut votes = [0usize; StoryPhase::ALL.len()];
    let mut key_events = Vec::new();
    let mut plot_hooks = Vec::new();

    for (msg, classification) in session.chat_logs.iter().zip(classifications) {
        // One vote per message, cast for its last-matched phase.
        if let Some(phase) = classification.phase {
            votes[phase_index(phase)] += 1;
        }

        let is_notable = classification.sentiment != Sentiment::Neutral
            || classification.action.is_some();
        if msg.message.chars().count() > thresholds.key_event_min_len && is_notable {
            key_events.push(format!(
                "{}: {}...",
                msg.player_name,
                snippet(&msg.message, KEY_EVENT_SNIPPET)
            ));
        }

        let lowered = msg.message.to_lowercase();
        if config
            .lexicons
            .plot_hooks
            .iter()
            .any(|hook| lowered.contains(hook))
        {
            plot_hooks.push(format!("{}...", snippet(&msg.message, PLOT_HOOK_SNIPPET)));
        }
    }

    // Highest vote wins; ties resolve to the earliest-declared phase because
    // only a strictly greater count displaces the current winner.
    let mut current_phase = StoryPhase::Setup;
    let mut best_votes = 0;
    for phase in StoryPhase::ALL {
        let phase_votes = votes[phase_index(phase)];
        if phase_votes > best_votes {
            current_phase = phase;
            best_votes = phase_votes;
        }
    }

    let expected_messages = session.session_time as f64 / thresholds.pacing_block_ms as f64
        * thresholds.expected_messages_per_block;
    let actual_messages = session.chat_logs.len() as f64;
    let progress_rate = if actual_messages > expected_messages * thresholds.fast_pacing_factor {
        PacingRate::Fast
    } else if actual_messages < expected_messages * thresholds.slow_pacing_factor {
        PacingRate::Slow
    } else {
        PacingRate::Normal
    };

    // `unresolved` reads the earliest hooks raised, before the recency
    // truncation applied to `plot_hooks`. The two lists differ on purpose.
    let unresolved: Vec<String> = plot_hooks
        .iter()
        .take(thresholds.unresolved_kept)
        .cloned()
        .collect();

    StoryProgressAnalysis {
        current_phase,
        progress_rate,
        key_events: keep_last(key_events, thresholds.key_events_kept),
        plot_hooks: keep_last(plot_hooks, thresholds.plot_hooks_kept),
        unresolved,
    }
}

fn phase_index(phase: StoryPhase) -> usize {
    StoryPhase::ALL
        .iter()
        .position(|p| *p == phase)
        .unwrap_or(0)
}

fn snippet(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

fn keep_last(mut items: Vec<String>, count: usize) -> Vec<String> {
    let overflow = items.len().saturating_sub(count);
    items.drain(..overflow);
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify_message;
    use chrono::{TimeZone, Utc};
    use gmlens_types::{ChatMessage, MessageKind};

    fn chat(text: &str) -> ChatMessage {
        ChatMessage {
            timestamp: Utc.timestamp_millis_opt(0).unwrap(),
            player_name: "Mira".to_string(),
            message: text.to_string(),
            kind: MessageKind::Ic,
            dice_result: None,
        }
    }

    fn analyze(messages: Vec<ChatMessage>, session_time: i64) -> StoryProgressAnalysis {
        let config = AnalysisConfig::default();
        let session = SessionData {
            chat_logs: messages,
            player_actions: Vec::new(),
            session_time,
            players: Vec::new(),
            scenario_info: None,
        };
        let classifications: Vec<_> = session
            .chat_logs
            .iter()
            .map(|m| classify_message(m, &config.lexicons))
            .collect();
        analyze_story(&session, &classifications, &config)
    }

    #[test]
    fn empty_session_defaults_to_setup() {
        let result = analyze(Vec::new(), 0);
        assert_eq!(result.current_phase, StoryPhase::Setup);
        assert_eq!(result.progress_rate, PacingRate::Normal);
        assert!(result.key_events.is_empty());
        assert!(result.plot_hooks.is_empty());
        assert!(result.unresolved.is_empty());
    }

    #[test]
    fn majority_phase_wins() {
        let result = analyze(
            vec![
                chat("the final battle begins"),
                chat("another battle rages"),
                chat("we examine the evidence"),
            ],
            3_600_000,
        );
        assert_eq!(result.current_phase, StoryPhase::Climax);
    }

    #[test]
    fn phase_tie_resolves_to_earliest_declared() {
        // One vote for climax, one for setup: setup is declared first.
        let result = analyze(
            vec![chat("a fierce battle"), chat("the opening scene")],
            3_600_000,
        );
        assert_eq!(result.current_phase, StoryPhase::Setup);
    }

    #[test]
    fn pacing_compares_against_thirty_messages_per_half_hour() {
        // 1 hour expects 60 messages. 2 actual < 30 reads slow.
        let slow = analyze(vec![chat("hm"), chat("ok")], 3_600_000);
        assert_eq!(slow.progress_rate, PacingRate::Slow);

        // 91 actual > 90 reads fast.
        let fast_messages: Vec<ChatMessage> = (0..91).map(|_| chat("hm")).collect();
        let fast = analyze(fast_messages, 3_600_000);
        assert_eq!(fast.progress_rate, PacingRate::Fast);

        // 60 actual sits inside the normal band.
        let normal_messages: Vec<ChatMessage> = (0..60).map(|_| chat("hm")).collect();
        let normal = analyze(normal_messages, 3_600_000);
        assert_eq!(normal.progress_rate, PacingRate::Normal);
    }

    #[test]
    fn key_events_need_length_and_signal() {
        let long_notable = format!("I attack the cultist. {}", "x".repeat(100));
        let long_flat = "y".repeat(120);
        let result = analyze(
            vec![chat(&long_notable), chat(&long_flat), chat("I attack")],
            3_600_000,
        );
        // Only the long message with an action scalar qualifies.
        assert_eq!(result.key_events.len(), 1);
        assert!(result.key_events[0].starts_with("Mira: "));
        assert!(result.key_events[0].ends_with("..."));
    }

    #[test]
    fn key_events_keep_the_most_recent_five() {
        let notable = format!("I attack the horde. {}", "x".repeat(100));
        let messages: Vec<ChatMessage> = (0..7).map(|_| chat(&notable)).collect();
        let result = analyze(messages, 3_600_000);
        assert_eq!(result.key_events.len(), 5);
    }

    #[test]
    fn plot_hooks_are_recent_but_unresolved_are_earliest() {
        let hooks = [
            "a secret about the mayor",
            "a clue in the cellar",
            "the mystery deepens",
            "another secret door",
            "one more clue appears",
        ];
        let result = analyze(hooks.iter().map(|h| chat(h)).collect(), 3_600_000);

        // plot_hooks keeps the last three raised.
        assert_eq!(result.plot_hooks.len(), 3);
        assert!(result.plot_hooks[0].starts_with("the mystery deepens"));
        assert!(result.plot_hooks[2].starts_with("one more clue appears"));

        // unresolved keeps the first three raised.
        assert_eq!(result.unresolved.len(), 3);
        assert!(result.unresolved[0].starts_with("a secret about the mayor"));
        assert!(result.unresolved[2].starts_with("the mystery deepens"));
    }

    #[test]
    fn hook_snippets_are_truncated_to_thirty_chars() {
        let long_hook = format!("the secret {}", "z".repeat(60));
        let result = analyze(vec![chat(&long_hook)], 3_600_000);
        assert_eq!(result.plot_hooks[0].chars().count(), 33); // 30 + "..."
    }
}
