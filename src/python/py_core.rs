//! Value conversions between Python and the engine.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::actors::Token;
use crate::board::CellContent;
use crate::core::{Direction, GameMode, GamePhase, TokenId};

/// Cell codes used by `GameSession.board_grid`.
pub const CELL_EMPTY: i8 = 0;
pub const CELL_OBSTACLE: i8 = 1;
pub const CELL_COIN: i8 = 2;
pub const CELL_MAGNET: i8 = 3;

pub(crate) fn cell_code(content: CellContent) -> i8 {
    match content {
        CellContent::Empty => CELL_EMPTY,
        CellContent::Obstacle => CELL_OBSTACLE,
        CellContent::Coin(_) => CELL_COIN,
        CellContent::Magnet => CELL_MAGNET,
    }
}

pub(crate) fn parse_direction(name: &str) -> PyResult<Direction> {
    name.parse().map_err(|e| PyValueError::new_err(format!("{}", e)))
}

pub(crate) fn parse_mode(name: &str) -> PyResult<GameMode> {
    name.parse().map_err(|e| PyValueError::new_err(format!("{}", e)))
}

pub(crate) fn parse_token(index: usize) -> PyResult<TokenId> {
    match index {
        0 => Ok(TokenId::A),
        1 => Ok(TokenId::B),
        _ => Err(PyValueError::new_err(format!("token index must be 0 or 1, got {}", index))),
    }
}

pub(crate) fn phase_name(phase: GamePhase) -> &'static str {
    match phase {
        GamePhase::NotStarted => "not-started",
        GamePhase::InProgress => "in-progress",
        GamePhase::Ended => "ended",
    }
}

/// Read-only copy of a token's state.
#[pyclass(name = "Token", frozen)]
#[derive(Clone, Debug)]
pub struct PyToken {
    pub(crate) token: Token,
    pub(crate) invulnerable: bool,
}

#[pymethods]
impl PyToken {
    /// 0 for token A, 1 for token B.
    #[getter]
    fn index(&self) -> usize {
        self.token.id().index()
    }

    #[getter]
    fn symbol(&self) -> char {
        self.token.symbol()
    }

    /// `(row, col)`.
    #[getter]
    fn position(&self) -> (usize, usize) {
        let p = self.token.position();
        (p.row, p.col)
    }

    #[getter]
    fn score(&self) -> u32 {
        self.token.score()
    }

    #[getter]
    fn lives(&self) -> u32 {
        self.token.lives()
    }

    /// `"left"` or `"right"`.
    #[getter]
    fn facing(&self) -> &'static str {
        match self.token.facing() {
            crate::core::Facing::Left => "left",
            crate::core::Facing::Right => "right",
        }
    }

    #[getter]
    fn magnet_active(&self) -> bool {
        self.token.magnet_active()
    }

    #[getter]
    fn magnet_moves_left(&self) -> u32 {
        self.token.magnet_moves_left()
    }

    #[getter]
    fn invulnerable(&self) -> bool {
        self.invulnerable
    }

    fn __repr__(&self) -> String {
        let p = self.token.position();
        format!(
            "Token({}, pos=({}, {}), score={}, lives={})",
            self.token.symbol(),
            p.row,
            p.col,
            self.token.score(),
            self.token.lives()
        )
    }
}
