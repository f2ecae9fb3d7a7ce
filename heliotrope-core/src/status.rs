//! Status board shared with the host
//!
//! The host renders one small text block per tick: an iteration counter
//! and the current status line. Writers publish with last-write-wins
//! semantics; there is no history and no separate error state.

use alloc::rc::Rc;
use core::cell::RefCell;
use core::fmt::{self, Write as _};

use heapless::String;

/// Capacity of the status line in bytes
pub const MAX_STATUS_LEN: usize = 64;
/// Capacity of the rendered display block in bytes
pub const MAX_RENDER_LEN: usize = 96;

#[derive(Default)]
struct BoardState {
    iteration: u32,
    status: String<MAX_STATUS_LEN>,
}

/// Cheaply cloneable handle to the shared status text
///
/// Clones share one underlying buffer: the array controller announces
/// moves on it while the host bumps the tick counter and renders it.
#[derive(Clone, Default)]
pub struct StatusBoard {
    state: Rc<RefCell<BoardState>>,
}

impl StatusBoard {
    /// Create an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the tick counter
    pub fn bump_iteration(&self) {
        let mut state = self.state.borrow_mut();
        state.iteration = state.iteration.wrapping_add(1);
    }

    /// Ticks counted so far
    pub fn iteration(&self) -> u32 {
        self.state.borrow().iteration
    }

    /// Replace the status line
    ///
    /// Text beyond the line capacity is silently truncated.
    pub fn set_status(&self, args: fmt::Arguments<'_>) {
        let mut state = self.state.borrow_mut();
        state.status.clear();
        let _ = state.status.write_fmt(args);
    }

    /// Current status line
    pub fn status(&self) -> String<MAX_STATUS_LEN> {
        self.state.borrow().status.clone()
    }

    /// Render the display block the host shows each tick
    pub fn render(&self) -> String<MAX_RENDER_LEN> {
        let state = self.state.borrow();
        let mut out = String::new();
        let _ = write!(
            out,
            "Iteration: {}\nCurrent status: {}",
            state.iteration, state.status
        );
        out
    }
}
