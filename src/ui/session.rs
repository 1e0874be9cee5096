//! Game session management for the Othello GUI

use crate::{AiMind, Disc, GameState, MoveResult, TilePoint};
use std::sync::mpsc::{channel, Receiver};
use std::thread;
use std::time::{Duration, Instant};

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs AI
    PvE { human_color: Disc },
    /// Player vs Player (hotseat)
    PvP,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE {
            human_color: Disc::Black,
        }
    }
}

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// Main game session: core state plus everything the GUI tracks around it
pub struct GameSession {
    pub state: GameState,
    pub mode: GameMode,
    pub last_move: Option<TilePoint>,
    pub move_history: Vec<(TilePoint, Disc)>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub suggested_move: Option<TilePoint>,
    pub message: Option<String>,

    // AI configuration
    ai_mind: AiMind,
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub last_move_duration: Option<Duration>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            last_move_duration: None,
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) -> Duration {
        let duration = self.elapsed();
        self.last_move_duration = Some(duration);
        self.start_time = None;
        duration
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }

    pub fn set_ai_time(&mut self, duration: Duration) {
        self.ai_thinking_time = Some(duration);
    }
}

impl GameSession {
    pub fn new(mode: GameMode) -> Self {
        Self {
            state: GameState::new_standard(),
            mode,
            last_move: None,
            move_history: Vec::new(),
            last_ai_result: None,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            suggested_move: None,
            message: None,
            ai_mind: AiMind::default(),
        }
    }

    pub fn reset(&mut self) {
        self.state = GameState::new_standard();
        self.last_move = None;
        self.move_history.clear();
        self.last_ai_result = None;
        self.ai_state = AiState::Idle;
        self.move_timer = MoveTimer::default();
        self.suggested_move = None;
        self.message = None;
    }

    /// Legal moves for the side to move, for highlighting and click checks
    pub fn legal_moves(&self) -> Vec<TilePoint> {
        if self.state.is_game_over() {
            return Vec::new();
        }
        self.state.playable_tiles(self.state.current_turn())
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human_color } => self.state.current_turn() == human_color,
            GameMode::PvP => true,
        }
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human_color } => self.state.current_turn() != human_color,
            GameMode::PvP => false,
        }
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Attempt to place a disc at the given tile for the human player
    pub fn try_place_disc(&mut self, pt: TilePoint) -> Result<(), String> {
        if self.state.is_game_over() {
            return Err("Game is over".to_string());
        }

        if self.is_ai_thinking() {
            return Err("AI is thinking".to_string());
        }

        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        self.execute_move(pt).map_err(|e| e.to_string())
    }

    /// Execute a move for the side to move (human or AI)
    fn execute_move(&mut self, pt: TilePoint) -> crate::game::Result<()> {
        let mover = self.state.current_turn();
        self.state.place_piece(mover, pt, false)?;

        // Record move
        self.move_history.push((pt, mover));
        self.last_move = Some(pt);
        self.suggested_move = None;
        self.message = None;

        // Stop timer
        self.move_timer.stop();

        // Announce passes and game end
        if self.state.is_game_over() {
            self.message = Some("Game over".to_string());
        } else if self.state.current_turn() == mover {
            let passer = self.state.player(mover.opponent());
            let name = passer.map_or("Opponent", |p| p.name.as_str());
            self.message = Some(format!("{} has no moves - turn passes", name));
        }

        self.move_timer.start();
        Ok(())
    }

    /// Start AI thinking on a background thread
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.state.is_game_over() {
            return;
        }

        let state = self.state.clone();
        let side = self.state.current_turn();
        let mind = self.ai_mind;

        let (tx, rx) = channel();

        thread::spawn(move || {
            let result = mind.choose_move(side, &state);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking and apply its move
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking {
                receiver,
                start_time,
            } => match receiver.try_recv() {
                Ok(result) => Some((result, start_time.elapsed())),
                Err(std::sync::mpsc::TryRecvError::Empty) => None,
                Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some((move_result, elapsed)) = result {
            self.ai_state = AiState::Idle;
            self.last_ai_result = Some(move_result);
            self.move_timer.set_ai_time(elapsed);

            if let Some(pt) = move_result.best_move {
                if let Err(err) = self.execute_move(pt) {
                    self.message = Some(err.to_string());
                }
            } else {
                self.message = Some("AI could not find a move".to_string());
            }
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Request move suggestion for PvP mode
    pub fn request_suggestion(&mut self) {
        if self.state.is_game_over() || self.is_ai_thinking() {
            return;
        }

        let side = self.state.current_turn();
        let result = self.ai_mind.choose_move(side, &self.state);

        self.suggested_move = result.best_move;
        self.last_ai_result = Some(result);
    }

    /// Undo the last move (for PvE, the human + AI pair)
    pub fn undo(&mut self) {
        if self.move_history.is_empty() || self.is_ai_thinking() {
            return;
        }

        let undo_count = match self.mode {
            GameMode::PvE { .. } if self.move_history.len() >= 2 => 2,
            _ => 1,
        };

        // Simple undo: reset and replay. Replaying full moves reproduces
        // flips, passes and turn order deterministically.
        let moves_to_keep = self.move_history.len().saturating_sub(undo_count);
        let moves: Vec<_> = self.move_history.drain(..moves_to_keep).collect();

        self.state = GameState::new_standard();
        self.move_history.clear();
        self.last_move = None;
        self.suggested_move = None;
        self.message = None;

        for (pt, side) in moves {
            if self.state.place_piece(side, pt, false).is_ok() {
                self.move_history.push((pt, side));
                self.last_move = Some(pt);
            }
        }

        self.move_timer.start();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_turn_in_pve() {
        let session = GameSession::new(GameMode::PvE {
            human_color: Disc::Black,
        });
        assert!(session.is_human_turn());
        assert!(!session.is_ai_turn());
    }

    #[test]
    fn test_pvp_is_always_human() {
        let mut session = GameSession::new(GameMode::PvP);
        assert!(session.is_human_turn());
        session.try_place_disc(TilePoint::new(3, 4)).unwrap();
        assert!(session.is_human_turn());
        assert!(!session.is_ai_turn());
    }

    #[test]
    fn test_try_place_disc_records_history() {
        let mut session = GameSession::new(GameMode::PvP);
        session.try_place_disc(TilePoint::new(3, 4)).unwrap();

        assert_eq!(session.move_history, vec![(TilePoint::new(3, 4), Disc::Black)]);
        assert_eq!(session.last_move, Some(TilePoint::new(3, 4)));
        assert_eq!(session.state.current_turn(), Disc::White);
    }

    #[test]
    fn test_try_place_disc_rejects_illegal() {
        let mut session = GameSession::new(GameMode::PvP);
        assert!(session.try_place_disc(TilePoint::new(1, 1)).is_err());
        assert!(session.move_history.is_empty());
    }

    #[test]
    fn test_undo_replays_to_previous_position() {
        let mut session = GameSession::new(GameMode::PvP);
        session.try_place_disc(TilePoint::new(3, 4)).unwrap();
        let after_first = session.state.clone();
        session.try_place_disc(TilePoint::new(3, 3)).unwrap();

        session.undo();
        assert_eq!(session.state, after_first);
        assert_eq!(session.move_history.len(), 1);
    }

    #[test]
    fn test_legal_moves_match_state() {
        let session = GameSession::new(GameMode::PvP);
        assert_eq!(
            session.legal_moves(),
            session.state.playable_tiles(Disc::Black)
        );
    }
}
