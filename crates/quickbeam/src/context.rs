//! Evaluation context configuration

use std::cell::Cell;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::builtins::Builtins;
use crate::error::EvalError;

/// Configuration and state for evaluation.
///
/// This is passed through all evaluation calls and controls
/// behavior like recursion limits, interruption, and which builtins
/// resolve when a name is not bound in any scope.
#[derive(Debug, Clone)]
pub struct EvalContext {
    /// Maximum call depth (stack overflow protection)
    pub max_call_depth: usize,

    /// Interrupt flag - set to true to abort evaluation
    pub interrupt: Arc<AtomicBool>,

    /// Builtins consulted after environment lookup fails
    pub builtins: Builtins,

    /// Current call depth
    call_depth: Cell<usize>,
}

impl Default for EvalContext {
    fn default() -> Self {
        Self {
            max_call_depth: 1000,
            interrupt: Arc::new(AtomicBool::new(false)),
            builtins: Builtins::standard(),
            call_depth: Cell::new(0),
        }
    }
}

impl EvalContext {
    /// Create a new context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context with a custom call depth limit.
    pub fn with_max_call_depth(max_depth: usize) -> Self {
        Self {
            max_call_depth: max_depth,
            ..Default::default()
        }
    }

    /// Replace the builtin registry (builder style).
    pub fn with_builtins(mut self, builtins: Builtins) -> Self {
        self.builtins = builtins;
        self
    }

    /// Check if evaluation has been interrupted.
    pub fn is_interrupted(&self) -> bool {
        self.interrupt.load(Ordering::Relaxed)
    }

    /// Request interruption of evaluation.
    pub fn interrupt(&self) {
        self.interrupt.store(true, Ordering::Relaxed);
    }

    /// Reset the interrupt flag.
    pub fn reset_interrupt(&self) {
        self.interrupt.store(false, Ordering::Relaxed);
    }

    // ═══════════════════════════════════════════════════════════════════
    // Call Depth Tracking (Stack Overflow Protection)
    // ═══════════════════════════════════════════════════════════════════

    /// Enter a function call. Returns error if max depth exceeded.
    ///
    /// The depth is restored when the returned guard is dropped, on every
    /// exit path of the call.
    pub fn enter_call(&self) -> Result<CallGuard<'_>, EvalError> {
        let depth = self.call_depth.get();
        if depth >= self.max_call_depth {
            return Err(EvalError::StackOverflow {
                depth,
                max: self.max_call_depth,
            });
        }
        self.call_depth.set(depth + 1);
        Ok(CallGuard { ctx: self })
    }

    /// Get current call depth.
    pub fn call_depth(&self) -> usize {
        self.call_depth.get()
    }
}

/// RAII guard that leaves a function call when dropped.
pub struct CallGuard<'a> {
    ctx: &'a EvalContext,
}

impl Drop for CallGuard<'_> {
    fn drop(&mut self) {
        let depth = self.ctx.call_depth.get();
        self.ctx.call_depth.set(depth.saturating_sub(1));
    }
}
