//! UCI-style text front end.
//!
//! Keeps the current position, routes `go` to the selected engine, and
//! reports every rejected input as an `info string` line so the core never
//! sees a half-built position.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::engines::engine_negamax::NegamaxEngine;
use crate::engines::engine_random::RandomEngine;
use crate::engines::engine_trait::{Engine, GoParams};
use crate::game_state::chess_types::GameState;
use crate::move_generation::legal_move_apply::{make_move, validate_move};
use crate::search::negamax::{DEFAULT_SEARCH_DEPTH, MAX_SEARCH_DEPTH};
use crate::utils::long_algebraic::{move_to_long_algebraic, parse_long_algebraic};
use crate::utils::render_game_state::render_game_state;

const UCI_ENGINE_NAME: &str = "DS Chess";
const UCI_ENGINE_AUTHOR: &str = "DS Chess developers";
const DEFAULT_SKILL_LEVEL: u8 = 2;
const MAX_SKILL_LEVEL: u8 = 2;

pub fn run_stdio_loop() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut uci = UciState::new();

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = uci.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

pub struct UciState {
    game_state: GameState,
    engine: Box<dyn Engine>,
    skill_level: u8,
    depth: u8,
}

impl Default for UciState {
    fn default() -> Self {
        Self::new()
    }
}

impl UciState {
    pub fn new() -> Self {
        Self {
            game_state: GameState::new_game(),
            engine: build_engine(DEFAULT_SKILL_LEVEL, DEFAULT_SEARCH_DEPTH),
            skill_level: DEFAULT_SKILL_LEVEL,
            depth: DEFAULT_SEARCH_DEPTH,
        }
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    /// Handle one input line. Returns `true` on `quit`.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let cmd = trimmed.split_whitespace().next().unwrap_or_default();

        match cmd {
            "uci" => {
                writeln!(out, "id name {}", UCI_ENGINE_NAME)?;
                writeln!(out, "id author {}", UCI_ENGINE_AUTHOR)?;
                writeln!(
                    out,
                    "option name Skill Level type spin default {} min 1 max {}",
                    DEFAULT_SKILL_LEVEL, MAX_SKILL_LEVEL
                )?;
                writeln!(
                    out,
                    "option name Depth type spin default {} min 1 max {}",
                    DEFAULT_SEARCH_DEPTH, MAX_SEARCH_DEPTH
                )?;
                writeln!(out, "uciok")?;
            }
            "isready" => {
                writeln!(out, "readyok")?;
            }
            "setoption" => {
                if let Err(err) = self.handle_setoption(trimmed) {
                    debug!(%err, "setoption rejected");
                    writeln!(out, "info string setoption error: {}", err)?;
                }
            }
            "ucinewgame" => {
                self.game_state = GameState::new_game();
                self.engine.new_game();
            }
            "position" => {
                if let Err(err) = self.handle_position(trimmed) {
                    debug!(%err, "position rejected");
                    writeln!(out, "info string position error: {}", err)?;
                }
            }
            "go" => {
                if let Err(err) = self.handle_go(trimmed, out) {
                    writeln!(out, "info string go error: {}", err)?;
                    writeln!(out, "bestmove 0000")?;
                }
            }
            "d" => {
                writeln!(out, "{}", render_game_state(&self.game_state))?;
                writeln!(out, "Fen: {}", self.game_state.get_fen())?;
            }
            "quit" => {
                return Ok(true);
            }
            other => {
                debug!(command = other, "ignoring unknown command");
            }
        }

        Ok(false)
    }

    fn handle_setoption(&mut self, line: &str) -> Result<(), String> {
        let mut name_tokens = Vec::<&str>::new();
        let mut value_tokens = Vec::<&str>::new();
        let mut mode = "";

        for tok in line.split_whitespace().skip(1) {
            match tok {
                "name" => mode = "name",
                "value" => mode = "value",
                _ if mode == "name" => name_tokens.push(tok),
                _ if mode == "value" => value_tokens.push(tok),
                _ => {}
            }
        }

        let name = name_tokens.join(" ");
        let value = value_tokens.join(" ");

        if name.eq_ignore_ascii_case("Skill Level") {
            let parsed = value
                .parse::<u8>()
                .map_err(|_| format!("invalid Skill Level value '{}'", value))?;
            if !(1..=MAX_SKILL_LEVEL).contains(&parsed) {
                return Err(format!("Skill Level must be between 1 and {MAX_SKILL_LEVEL}"));
            }
            self.skill_level = parsed;
            self.engine = build_engine(self.skill_level, self.depth);
            self.engine.new_game();
        } else if name.eq_ignore_ascii_case("Depth") {
            // Checked here so the value survives skill changes whichever engine is active.
            let parsed = value
                .trim()
                .parse::<u8>()
                .map_err(|_| format!("invalid Depth value '{}'", value))?;
            if !(1..=MAX_SEARCH_DEPTH).contains(&parsed) {
                return Err(format!("Depth must be between 1 and {MAX_SEARCH_DEPTH}"));
            }
            self.engine.set_option("Depth", &value)?;
            self.depth = parsed;
        } else {
            self.engine.set_option(&name, &value)?;
        }

        Ok(())
    }

    /// Build the new position off to the side; the current one is replaced
    /// only if every listed move was accepted.
    fn handle_position(&mut self, line: &str) -> Result<(), String> {
        let mut tokens = line.split_whitespace().skip(1).peekable();

        let mut base_state = match tokens.next() {
            Some("startpos") => GameState::new_game(),
            Some("fen") => {
                let mut fen_parts = Vec::<&str>::new();
                while let Some(next) = tokens.next_if(|tok| *tok != "moves") {
                    fen_parts.push(next);
                }
                if fen_parts.is_empty() {
                    return Err("missing FEN after 'position fen'".to_owned());
                }
                GameState::from_fen(&fen_parts.join(" ")).map_err(|e| e.to_string())?
            }
            Some(other) => return Err(format!("unsupported position token '{}'", other)),
            None => return Err("incomplete position command".to_owned()),
        };

        if tokens.next_if_eq(&"moves").is_some() {
            for lan in tokens {
                let mv = parse_long_algebraic(lan, &base_state).map_err(|e| e.to_string())?;
                validate_move(&mut base_state, mv).map_err(|e| format!("illegal move {lan}: {e:?}"))?;
                make_move(&mut base_state, mv).map_err(|e| format!("illegal move {lan}: {e:?}"))?;
            }
        }

        self.game_state = base_state;
        Ok(())
    }

    fn handle_go(&mut self, line: &str, out: &mut impl Write) -> Result<(), String> {
        let params = parse_go_params(line)?;
        let result = self.engine.choose_move(&self.game_state, &params)?;

        for info in &result.info_lines {
            writeln!(out, "{}", info).map_err(|e| e.to_string())?;
        }

        let lan = match result.best_move {
            Some(best_move) => move_to_long_algebraic(best_move).map_err(|e| e.to_string())?,
            None => "0000".to_owned(),
        };
        writeln!(out, "bestmove {}", lan).map_err(|e| e.to_string())?;

        Ok(())
    }
}

fn parse_go_params(line: &str) -> Result<GoParams, String> {
    let mut params = GoParams::default();
    let mut tokens = line.split_whitespace().skip(1);

    while let Some(tok) = tokens.next() {
        if tok == "depth" {
            let raw = tokens.next().ok_or("missing value after 'depth'")?;
            params.depth = Some(
                raw.parse::<u8>()
                    .map_err(|_| format!("invalid depth '{}'", raw))?,
            );
        }
    }

    Ok(params)
}

fn build_engine(skill_level: u8, depth: u8) -> Box<dyn Engine> {
    match skill_level {
        1 => Box::new(RandomEngine::new()),
        _ => Box::new(NegamaxEngine::new(depth)),
    }
}
