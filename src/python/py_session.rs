//! Session bindings for Python.

use numpy::{PyArray1, PyArray2, PyArrayMethods};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{EndReason, GameConfig, TokenId};
use crate::rules::GameResult;
use crate::session::GameSession;

use super::py_core::{cell_code, parse_direction, parse_mode, parse_token, phase_name, PyToken};

/// Python wrapper for GameSession.
///
/// Time for the invulnerability window is measured on a monotonic clock
/// from the moment the session is created.
#[pyclass(name = "GameSession")]
pub struct PyGameSession {
    inner: GameSession,
}

#[pymethods]
impl PyGameSession {
    /// Create a session.
    ///
    /// # Arguments
    /// - seed: RNG seed for reproducible boards and AI choices
    /// - mode: if given, start a game in this mode right away
    /// - board_size: side length of the square board
    /// - legacy: use the older independent-density board layout
    #[new]
    #[pyo3(signature = (seed = 42, mode = None, board_size = 8, legacy = false))]
    fn new(seed: u64, mode: Option<&str>, board_size: usize, legacy: bool) -> PyResult<Self> {
        let base = if legacy { GameConfig::legacy() } else { GameConfig::default() };
        let config = base.with_board_size(board_size);
        let mut inner = GameSession::new(config, seed).map_err(|e| PyValueError::new_err(format!("{}", e)))?;
        if let Some(mode) = mode {
            inner.new_game(parse_mode(mode)?);
        }
        Ok(Self { inner })
    }

    /// Start a new game.
    ///
    /// `mode` is `"human-vs-human"` or `"human-vs-ai"`.
    #[pyo3(signature = (mode = "human-vs-ai"))]
    fn new_game(&mut self, mode: &str) -> PyResult<()> {
        self.inner.new_game(parse_mode(mode)?);
        Ok(())
    }

    /// Run one frame with the held direction, if any.
    ///
    /// Returns True if a move was applied.
    #[pyo3(signature = (direction = None))]
    fn tick(&mut self, direction: Option<&str>) -> PyResult<bool> {
        let input = direction.map(parse_direction).transpose()?;
        Ok(self.inner.tick(input))
    }

    /// Apply a move for the current token directly.
    fn apply_move(&mut self, direction: &str) -> PyResult<bool> {
        Ok(self.inner.apply_move(parse_direction(direction)?))
    }

    /// Board contents as an int8 array of shape `(size, size)`.
    fn board_grid<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<i8>>> {
        let snapshot = self.inner.snapshot();
        let n = snapshot.board_size;
        let cells: Vec<i8> = snapshot.board.cells().map(|c| cell_code(snapshot.board.content(c))).collect();
        PyArray1::from_vec_bound(py, cells)
            .reshape([n, n])
            .map_err(|e| PyErr::new::<PyValueError, _>(format!("{}", e)))
    }

    /// Coin positions and values as `(row, col, value)`.
    fn coins(&self) -> Vec<(usize, usize, u32)> {
        self.inner
            .board()
            .map(|b| b.coins().map(|c| (c.coord.row, c.coord.col, c.value)).collect())
            .unwrap_or_default()
    }

    /// Token state by index (0 or 1).
    fn token(&self, index: usize) -> PyResult<PyToken> {
        let id = parse_token(index)?;
        let snapshot = self.inner.snapshot();
        let view = &snapshot.tokens[id];
        Ok(PyToken { token: view.token.clone(), invulnerable: view.invulnerable })
    }

    /// Hazard `(row, col)`, or None before the first game.
    #[getter]
    fn hazard(&self) -> Option<(usize, usize)> {
        self.inner.hazard().map(|h| (h.position().row, h.position().col))
    }

    #[getter]
    fn board_size(&self) -> usize {
        self.inner.config().board_size
    }

    /// Index of the token to move.
    #[getter]
    fn current_turn(&self) -> usize {
        self.inner.current_turn().index()
    }

    /// `"not-started"`, `"in-progress"` or `"ended"`.
    #[getter]
    fn phase(&self) -> &'static str {
        phase_name(self.inner.phase())
    }

    #[getter]
    fn mode(&self) -> &'static str {
        self.inner.mode().name()
    }

    /// `"coins-exhausted"`, `"out-of-lives"` or None.
    #[getter]
    fn end_reason(&self) -> Option<&'static str> {
        self.inner.end_reason().map(|r| match r {
            EndReason::CoinsExhausted => "coins-exhausted",
            EndReason::OutOfLives { .. } => "out-of-lives",
        })
    }

    /// Winning token index, or None while playing or on a draw.
    #[getter]
    fn winner(&self) -> Option<usize> {
        match self.inner.result()? {
            GameResult::Winner(token) => Some(token.index()),
            GameResult::Draw => None,
        }
    }

    #[getter]
    fn is_draw(&self) -> bool {
        self.inner.result() == Some(GameResult::Draw)
    }

    fn __repr__(&self) -> String {
        let score = |id| self.inner.token(id).map_or(0, |t| t.score());
        format!(
            "GameSession(phase={}, turn={}, score={}-{})",
            phase_name(self.inner.phase()),
            self.inner.current_turn().symbol(),
            score(TokenId::A),
            score(TokenId::B)
        )
    }
}
