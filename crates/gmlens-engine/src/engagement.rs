//! Per-player and table-wide participation metrics.

use std::collections::BTreeMap;

use gmlens_types::{
    EngagementLevel, InteractionQuality, PlayerEngagementAnalysis, PlayerMetrics, RoleplayQuality,
    SessionData,
};

use crate::config::AnalysisConfig;

/// Compute engagement metrics for every non-GM player and the table overall.
pub fn analyze_engagement(
    session: &SessionData,
    config: &AnalysisConfig,
) -> PlayerEngagementAnalysis {
    let thresholds = &config.thresholds;
    let total_messages = session.chat_logs.len();

    let mut individual = BTreeMap::new();
    let mut quiet_players = Vec::new();
    let mut dominating_players = Vec::new();
    let mut participation_sum = 0.0;
    let mut rated_players = 0usize;

    for player in &session.players {
        if player.is_gm {
            continue;
        }

        let message_lengths: Vec<usize> = session
            .chat_logs
            .iter()
            .filter(|msg| msg.player_name == player.character_name)
            .map(|msg| msg.message.chars().count())
            .collect();
        let message_count = message_lengths.len();
        let action_count = session
            .player_actions
            .iter()
            .filter(|action| action.player_name == player.character_name)
            .count();

        let average_message_length = if message_count > 0 {
            message_lengths.iter().sum::<usize>() as f64 / message_count as f64
        } else {
            0.0
        };
        let participation_rate = if total_messages > 0 {
            message_count as f64 / total_messages as f64
        } else {
            0.0
        };

        let roleplay_quality = if average_message_length > thresholds.high_roleplay_len
            && message_count > thresholds.high_roleplay_count
        {
            RoleplayQuality::High
        } else if average_message_length > thresholds.medium_roleplay_len
            && message_count > thresholds.medium_roleplay_count
        {
            RoleplayQuality::Medium
        } else {
            RoleplayQuality::Low
        };

        if participation_rate < thresholds.quiet_participation {
            quiet_players.push(player.character_name.clone());
        }
        if participation_rate > thresholds.dominating_participation {
            dominating_players.push(player.character_name.clone());
        }

        participation_sum += participation_rate;
        rated_players += 1;

        individual.insert(
            player.character_name.clone(),
            PlayerMetrics {
                message_count,
                action_count,
                average_message_length,
                participation_rate,
                roleplay_quality,
                last_activity: player.last_activity,
            },
        );
    }

    let average_participation = if rated_players > 0 {
        participation_sum / rated_players as f64
    } else {
        0.0
    };
    let overall = if average_participation > thresholds.high_engagement {
        EngagementLevel::High
    } else if average_participation < thresholds.low_engagement {
        EngagementLevel::Low
    } else {
        EngagementLevel::Medium
    };

    let interaction_quality = rate_interaction_quality(session, config);

    PlayerEngagementAnalysis {
        overall,
        individual,
        quiet_players,
        dominating_players,
        interaction_quality,
    }
}

/// Fraction of messages that address someone else: a second-person token or
/// another participant's character name.
fn rate_interaction_quality(session: &SessionData, config: &AnalysisConfig) -> InteractionQuality {
    let thresholds = &config.thresholds;
    let interaction_messages = session
        .chat_logs
        .iter()
        .filter(|msg| {
            let text = msg.message.to_lowercase();
            let second_person = config
                .lexicons
                .second_person
                .iter()
                .any(|token| text.contains(token));
            let names_other_player = session.players.iter().any(|p| {
                p.character_name != msg.player_name && msg.message.contains(&p.character_name)
            });
            second_person || names_other_player
        })
        .count();

    let interaction_rate = if session.chat_logs.is_empty() {
        0.0
    } else {
        interaction_messages as f64 / session.chat_logs.len() as f64
    };

    if interaction_rate > thresholds.excellent_interaction {
        InteractionQuality::Excellent
    } else if interaction_rate > thresholds.good_interaction {
        InteractionQuality::Good
    } else if interaction_rate < thresholds.poor_interaction {
        InteractionQuality::Poor
    } else {
        InteractionQuality::Fair
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use gmlens_types::{ChatMessage, MessageKind, Player};

    fn player(character: &str, is_gm: bool) -> Player {
        Player {
            name: format!("{} (player)", character),
            character_name: character.to_string(),
            is_gm,
            join_time: Utc.timestamp_millis_opt(0).unwrap(),
            last_activity: Utc.timestamp_millis_opt(60_000).unwrap(),
        }
    }

    fn chat(from: &str, text: &str) -> ChatMessage {
        ChatMessage {
            timestamp: Utc.timestamp_millis_opt(0).unwrap(),
            player_name: from.to_string(),
            message: text.to_string(),
            kind: MessageKind::Ic,
            dice_result: None,
        }
    }

    fn session(players: Vec<Player>, chat_logs: Vec<ChatMessage>) -> SessionData {
        SessionData {
            chat_logs,
            player_actions: Vec::new(),
            session_time: 3_600_000,
            players,
            scenario_info: None,
        }
    }

    #[test]
    fn gm_is_excluded_from_individual_metrics() {
        let session = session(
            vec![player("GM", true), player("Mira", false)],
            vec![chat("GM", "the door creaks open"), chat("Mira", "I step in")],
        );
        let result = analyze_engagement(&session, &AnalysisConfig::default());
        assert!(!result.individual.contains_key("GM"));
        assert!(result.individual.contains_key("Mira"));
        assert!(!result.quiet_players.contains(&"GM".to_string()));
        assert!(!result.dominating_players.contains(&"GM".to_string()));
    }

    #[test]
    fn participation_rate_is_share_of_all_messages() {
        let session = session(
            vec![player("Mira", false), player("Dorn", false)],
            vec![
                chat("Mira", "one"),
                chat("Mira", "two"),
                chat("Mira", "three"),
                chat("Dorn", "four"),
            ],
        );
        let result = analyze_engagement(&session, &AnalysisConfig::default());
        let mira = &result.individual["Mira"];
        assert_eq!(mira.message_count, 3);
        assert!((mira.participation_rate - 0.75).abs() < f64::EPSILON);
        // 0.75 > 0.3: Mira dominates the table.
        assert_eq!(result.dominating_players, vec!["Mira".to_string()]);
    }

    #[test]
    fn silent_player_is_quiet_with_zero_rates() {
        let session = session(
            vec![player("Mira", false), player("Dorn", false)],
            vec![chat("Mira", "hello")],
        );
        let result = analyze_engagement(&session, &AnalysisConfig::default());
        let dorn = &result.individual["Dorn"];
        assert_eq!(dorn.message_count, 0);
        assert_eq!(dorn.average_message_length, 0.0);
        assert_eq!(dorn.participation_rate, 0.0);
        assert_eq!(dorn.roleplay_quality, RoleplayQuality::Low);
        assert!(result.quiet_players.contains(&"Dorn".to_string()));
    }

    #[test]
    fn roleplay_quality_bands_check_length_then_volume() {
        let long_line = "a".repeat(60);
        let chats: Vec<ChatMessage> = (0..6).map(|_| chat("Mira", &long_line)).collect();
        let session = session(vec![player("Mira", false)], chats);
        let result = analyze_engagement(&session, &AnalysisConfig::default());
        assert_eq!(
            result.individual["Mira"].roleplay_quality,
            RoleplayQuality::High
        );

        let medium_line = "b".repeat(30);
        let chats: Vec<ChatMessage> = (0..3).map(|_| chat("Dorn", &medium_line)).collect();
        let session = self::session(vec![player("Dorn", false)], chats);
        let result = analyze_engagement(&session, &AnalysisConfig::default());
        assert_eq!(
            result.individual["Dorn"].roleplay_quality,
            RoleplayQuality::Medium
        );
    }

    #[test]
    fn empty_roster_defaults_to_low_overall_and_no_nan() {
        let session = session(Vec::new(), Vec::new());
        let result = analyze_engagement(&session, &AnalysisConfig::default());
        assert_eq!(result.overall, EngagementLevel::Low);
        assert!(result.individual.is_empty());
        assert!(result.quiet_players.is_empty());
        assert!(result.dominating_players.is_empty());
    }

    #[test]
    fn interaction_counts_second_person_and_character_names() {
        let session = session(
            vec![player("Mira", false), player("Dorn", false)],
            vec![
                chat("Mira", "Dorn, watch the door"),
                chat("Dorn", "are you sure?"),
                chat("Mira", "fine"),
                chat("Dorn", "moving on"),
            ],
        );
        // 2 of 4 messages interact: 0.5 > 0.3 is excellent.
        let result = analyze_engagement(&session, &AnalysisConfig::default());
        assert_eq!(result.interaction_quality, InteractionQuality::Excellent);
    }

    #[test]
    fn no_interaction_reads_as_poor() {
        let session = session(
            vec![player("Mira", false), player("Dorn", false)],
            vec![chat("Mira", "hm"), chat("Dorn", "ok")],
        );
        let result = analyze_engagement(&session, &AnalysisConfig::default());
        assert_eq!(result.interaction_quality, InteractionQuality::Poor);
    }
}
