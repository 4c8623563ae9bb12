//! Python bindings for the coin-chase engine.
//!
//! Exposes the session to a pygame front end. The front end polls
//! keyboard input once per frame, passes it to `tick`, and draws from the
//! getters and `board_grid`.
//!
//! # Quick Start
//!
//! ```python
//! import coin_chase as cc
//!
//! session = cc.GameSession(seed=42, mode="human-vs-ai")
//!
//! while session.phase != "ended":
//!     session.tick("right")   # or None when no key is held
//!     grid = session.board_grid()  # int8 (size, size)
//!
//! print(session.winner)
//! session.new_game("human-vs-human")
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_session;

pub use py_core::*;
pub use py_session::*;

/// coin_chase: a turn-based coin collecting game with a pursuing hazard.
#[pymodule]
fn coin_chase(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyToken>()?;
    m.add_class::<PyGameSession>()?;

    m.add("EMPTY", CELL_EMPTY)?;
    m.add("OBSTACLE", CELL_OBSTACLE)?;
    m.add("COIN", CELL_COIN)?;
    m.add("MAGNET", CELL_MAGNET)?;

    Ok(())
}
