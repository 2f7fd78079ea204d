//! HUD and overlay text
//!
//! Text is rendered by the page (DOM elements over the canvas); this module
//! only decides what the text says.

use super::vertex::colors;
use crate::sim::GameStatus;

/// Centered message drawn over the dimmed screen when a run ends
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayText {
    pub title: &'static str,
    /// 0xRRGGBB
    pub title_color: u32,
    pub lines: Vec<String>,
}

/// Score counter text
pub fn score_text(score: u32) -> String {
    format!("Score: {}", score)
}

/// One-line status shown next to the score
pub fn status_text(status: GameStatus) -> &'static str {
    match status {
        GameStatus::Playing => "",
        GameStatus::Lost => "GAME OVER - Press R to restart",
        GameStatus::Won => "YOU WIN! - Press R to restart",
    }
}

/// Overlay for a finished run, `None` while playing
pub fn overlay_text(status: GameStatus, score: u32) -> Option<OverlayText> {
    match status {
        GameStatus::Playing => None,
        GameStatus::Lost => Some(OverlayText {
            title: "GAME OVER",
            title_color: colors::LOST_TITLE,
            lines: vec!["Press R to restart".to_string()],
        }),
        GameStatus::Won => Some(OverlayText {
            title: "YOU WIN!",
            title_color: colors::WON_TITLE,
            lines: vec![
                format!("Final Score: {}", score),
                "Press R to restart".to_string(),
            ],
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_text() {
        assert_eq!(score_text(0), "Score: 0");
        assert_eq!(score_text(300), "Score: 300");
    }

    #[test]
    fn test_status_text() {
        assert_eq!(status_text(GameStatus::Playing), "");
        assert!(status_text(GameStatus::Lost).starts_with("GAME OVER"));
        assert!(status_text(GameStatus::Won).starts_with("YOU WIN!"));
    }

    #[test]
    fn test_overlay_text() {
        assert_eq!(overlay_text(GameStatus::Playing, 100), None);

        let lost = overlay_text(GameStatus::Lost, 100).unwrap();
        assert_eq!(lost.title, "GAME OVER");
        assert_eq!(lost.lines, vec!["Press R to restart"]);

        let won = overlay_text(GameStatus::Won, 500).unwrap();
        assert_eq!(won.title, "YOU WIN!");
        assert_eq!(won.title_color, colors::WON_TITLE);
        assert_eq!(won.lines[0], "Final Score: 500");
    }
}
