use std::cell::Cell;
use std::rc::Rc;

/// Liveness flag owned by one running frame loop.
#[derive(Clone, Debug)]
pub struct LoopToken(Rc<Cell<bool>>);

impl LoopToken {
    pub fn is_live(&self) -> bool {
        self.0.get()
    }
}

/// Start/stop switch for the animation-frame loop.
///
/// Every `start` issues a fresh token and `stop` kills the current one, so a
/// loop whose callback is still queued after `stop` can never be revived by a
/// later `start`.
#[derive(Debug, Default)]
pub struct LoopSwitch {
    current: Option<LoopToken>,
}

impl LoopSwitch {
    /// Token for a new loop, or `None` while one is already running.
    pub fn start(&mut self) -> Option<LoopToken> {
        if self.is_running() {
            return None;
        }
        let token = LoopToken(Rc::new(Cell::new(true)));
        self.current = Some(token.clone());
        Some(token)
    }

    pub fn stop(&mut self) {
        if let Some(token) = self.current.take() {
            token.0.set(false);
        }
    }

    pub fn is_running(&self) -> bool {
        self.current.as_ref().is_some_and(LoopToken::is_live)
    }
}
