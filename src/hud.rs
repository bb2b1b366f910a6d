//! HUD text
//!
//! Turns a [`HudSnapshot`] into the lines the text renderer prints. During
//! play that is the counters, the oxygen clock, the capsule prompt and any
//! banner; after the session ends only the outcome banner is shown.

use crate::sim::{GamePhase, HudSnapshot, Message};

pub const GAME_OVER_BANNER: &str = "GAME OVER";
pub const WON_BANNER: &str = "YOU'VE WON!!";

/// Banner text for a capsule message
pub fn message_text(message: Message) -> &'static str {
    match message {
        Message::ExtraLife => "Extra Life",
        Message::DamageUp => "Damage Increased",
        Message::SpeedUp => "Speed Increased",
        Message::InsufficientPoints => "Insufficient Points",
    }
}

/// `MM:SS` for a non-negative number of seconds (fraction truncated)
pub fn format_clock(secs: f64) -> String {
    let whole = secs.max(0.0).floor() as u64;
    format!("{:02}:{:02}", whole / 60, whole % 60)
}

/// Lines to draw this frame, top to bottom
pub fn hud_lines(hud: &HudSnapshot) -> Vec<String> {
    match hud.phase {
        GamePhase::GameOver => return vec![GAME_OVER_BANNER.to_string()],
        GamePhase::Won => return vec![WON_BANNER.to_string()],
        GamePhase::Playing => {}
    }

    let mut lines = vec![
        format!("Lives = {}", hud.lives),
        format_clock(hud.oxygen_secs),
        format!("Bullets = {}/{}", hud.shots, hud.max_shots),
        format!("Pieces = {}/{}", hud.pieces, hud.piece_total),
        format!("Points: {}", hud.points),
    ];

    if let Some(price) = hud.upgrade_price {
        lines.push(format!("Press [E] to get a random upgrade. ({price})"));
    }
    if let Some(message) = hud.message {
        lines.push(message_text(message).to_string());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GameState;

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(600.0), "10:00");
        assert_eq!(format_clock(599.9), "09:59");
        assert_eq!(format_clock(61.0), "01:01");
        assert_eq!(format_clock(0.4), "00:00");
        assert_eq!(format_clock(-3.0), "00:00");
    }

    #[test]
    fn test_playing_lines() {
        let state = GameState::new(4);
        let lines = hud_lines(&state.hud());
        assert_eq!(
            lines,
            vec!["Lives = 3", "10:00", "Bullets = 6/6", "Pieces = 0/5", "Points: 0"]
        );
    }

    #[test]
    fn test_prompt_and_banner() {
        let mut hud = GameState::new(4).hud();
        hud.upgrade_price = Some(300);
        hud.message = Some(Message::InsufficientPoints);
        let lines = hud_lines(&hud);
        assert!(lines.contains(&"Press [E] to get a random upgrade. (300)".to_string()));
        assert_eq!(lines.last().map(String::as_str), Some("Insufficient Points"));
    }

    #[test]
    fn test_terminal_shows_only_banner() {
        let mut hud = GameState::new(4).hud();
        hud.phase = GamePhase::Won;
        assert_eq!(hud_lines(&hud), vec![WON_BANNER]);
        hud.phase = GamePhase::GameOver;
        assert_eq!(hud_lines(&hud), vec![GAME_OVER_BANNER]);
    }
}
