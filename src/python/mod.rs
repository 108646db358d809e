//! Python bindings.
//!
//! # Quick Start
//!
//! ```python
//! import time
//! import colour_addict as ca
//!
//! game = ca.Game(seed=7)
//! while not game.is_over:
//!     game.tick(int(time.monotonic() * 1000))
//!     playable = game.playable()
//!     if playable:
//!         game.play(playable[0])
//!     else:
//!         game.draw()
//! print(game.winner)
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_game;

pub use py_core::*;
pub use py_game::*;

/// colour_addict: the Colour Addict card game.
#[pymodule]
fn colour_addict(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyPlayerId>()?;
    m.add_class::<PyCard>()?;
    m.add_class::<PyAction>()?;
    m.add_class::<PyGame>()?;
    Ok(())
}
