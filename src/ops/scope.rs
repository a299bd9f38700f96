//! Scope demonstration - session-scoped vs call-local state.
//!
//! The original demo mutated a hidden module-level counter; here the
//! session counter lives in an explicit [`ScopeSession`] the app owns and
//! passes into the handler, so nothing is global.

/// Session-scoped state for the scope demo. One per app session,
/// never reset.
#[derive(Debug, Default)]
pub struct ScopeSession {
    global_count: u32,
}

/// Result of one scope-demo invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeReport {
    /// Session-scoped counter, incremented on every invocation.
    pub global_count: u32,
    /// Call-local counter, starts fresh each invocation.
    pub local_count: u32,
    /// Derived inside a nested closure: local + 10.
    pub nested_value: u32,
}

impl ScopeSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the demonstration once.
    pub fn run(&mut self) -> ScopeReport {
        self.global_count += 1;

        let mut local_count = 0;
        local_count += 1;

        // The nested closure captures the local by reference, the same
        // illustration the original made with an inner function.
        let nested = || local_count + 10;

        ScopeReport {
            global_count: self.global_count,
            local_count,
            nested_value: nested(),
        }
    }

    /// Current session counter without running the demo.
    pub fn global_count(&self) -> u32 {
        self.global_count
    }
}

// =============================================================================
// Tests
// =============================================================================
