//! Built-in sample session for demos and tests.

use chrono::{DateTime, TimeZone, Utc};
use gmlens_types::{
    ActionKind, ChatMessage, DiceResult, MessageKind, Player, PlayerAction, ScenarioInfo,
    SessionData,
};

fn at(base: DateTime<Utc>, offset_ms: i64) -> DateTime<Utc> {
    base + chrono::Duration::milliseconds(offset_ms)
}

/// A small, fully deterministic one-hour mystery session: one GM, three
/// players, four chat messages, one structured action. Fixed timestamps so
/// repeated runs produce identical reports.
pub fn sample_session() -> SessionData {
    let start = Utc.with_ymd_and_hms(2026, 3, 7, 18, 0, 0).unwrap();

    let players = vec![
        Player {
            name: "GM".to_string(),
            character_name: "GM".to_string(),
            is_gm: true,
            join_time: start,
            last_activity: at(start, 3_600_000),
        },
        Player {
            name: "Alex".to_string(),
            character_name: "Mira".to_string(),
            is_gm: false,
            join_time: start,
            last_activity: at(start, 3_300_000),
        },
        Player {
            name: "Sam".to_string(),
            character_name: "Dorn".to_string(),
            is_gm: false,
            join_time: start,
            last_activity: at(start, 3_000_000),
        },
        Player {
            name: "Kim".to_string(),
            character_name: "Vex".to_string(),
            is_gm: false,
            join_time: start,
            last_activity: at(start, 3_480_000),
        },
    ];

    let chat_logs = vec![
        ChatMessage {
            timestamp: at(start, 600_000),
            player_name: "GM".to_string(),
            message: "The session begins in the city archive".to_string(),
            kind: MessageKind::System,
            dice_result: None,
        },
        ChatMessage {
            timestamp: at(start, 800_000),
            player_name: "Mira".to_string(),
            message: "I want to investigate the shelves for clues".to_string(),
            kind: MessageKind::Ic,
            dice_result: None,
        },
        ChatMessage {
            timestamp: at(start, 1_000_000),
            player_name: "Dorn".to_string(),
            message: "Mira, you should check the desk as well".to_string(),
            kind: MessageKind::Ic,
            dice_result: None,
        },
        ChatMessage {
            timestamp: at(start, 1_200_000),
            player_name: "Mira".to_string(),
            message: "2d6+3".to_string(),
            kind: MessageKind::Dice,
            dice_result: Some(DiceResult {
                formula: "2d6+3".to_string(),
                result: 9,
                details: "[3,4]+3=9".to_string(),
            }),
        },
    ];

    let player_actions = vec![PlayerAction {
        timestamp: at(start, 900_000),
        player_name: "Mira".to_string(),
        action_type: ActionKind::Investigation,
        target: Some("archive shelves".to_string()),
        result: Some("found a torn ledger page".to_string()),
        success: Some(true),
    }];

    SessionData {
        chat_logs,
        player_actions,
        session_time: 3_600_000,
        players,
        scenario_info: Some(ScenarioInfo {
            title: "The Archive Affair".to_string(),
            genre: "mystery".to_string(),
            expected_duration: 4 * 60 * 60 * 1000,
            current_phase: "investigation".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_session_matches_its_advertised_shape() {
        let session = sample_session();
        assert_eq!(session.chat_logs.len(), 4);
        assert_eq!(session.player_actions.len(), 1);
        assert_eq!(session.players.iter().filter(|p| !p.is_gm).count(), 3);
        assert_eq!(session.session_time, 3_600_000);
        assert_eq!(
            session.chat_logs[3].dice_result.as_ref().map(|d| d.result),
            Some(9)
        );
    }

    #[test]
    fn sample_session_is_deterministic() {
        let a = serde_json::to_string(&sample_session()).unwrap();
        let b = serde_json::to_string(&sample_session()).unwrap();
        assert_eq!(a, b);
    }
}
