//! Alpha compositing stack
//!
//! Nested faded panels multiply their opacities. The stack holds the
//! cumulative product at each level so popping restores the outer value
//! exactly.

/// Maximum number of nested alpha levels
pub const ALPHA_STACK_DEPTH: usize = 8;

/// Fixed-depth stack of cumulative opacity
#[derive(Debug, Clone)]
pub struct AlphaStack {
    levels: [f32; ALPHA_STACK_DEPTH],
    depth: usize,
    /// Pushes that did not fit; matched by pops before real levels are popped
    overflow: usize,
}

impl Default for AlphaStack {
    fn default() -> Self {
        Self::new()
    }
}

impl AlphaStack {
    /// Create an empty stack (current alpha 1.0)
    pub const fn new() -> Self {
        Self {
            levels: [1.0; ALPHA_STACK_DEPTH],
            depth: 0,
            overflow: 0,
        }
    }

    /// Cumulative alpha of all active levels, in `[0, 1]`
    pub fn current(&self) -> f32 {
        if self.depth == 0 {
            1.0
        } else {
            self.levels[self.depth - 1]
        }
    }

    /// Number of active levels (excluding overflowed pushes)
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Enter a level with the given opacity
    pub fn push(&mut self, alpha: f32) {
        if self.depth == ALPHA_STACK_DEPTH {
            self.overflow += 1;
            log::warn!("Alpha stack overflow (depth {}), ignoring push", ALPHA_STACK_DEPTH);
            return;
        }

        let alpha = if alpha.is_nan() { 1.0 } else { alpha.clamp(0.0, 1.0) };
        self.levels[self.depth] = (self.current() * alpha).clamp(0.0, 1.0);
        self.depth += 1;
    }

    /// Leave the innermost level; no-op at the base
    pub fn pop(&mut self) {
        if self.overflow > 0 {
            self.overflow -= 1;
        } else if self.depth > 0 {
            self.depth -= 1;
        }
    }

    /// Drop every level
    pub fn reset(&mut self) {
        self.depth = 0;
        self.overflow = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_nested_alpha_multiplies() {
        let mut stack = AlphaStack::new();
        stack.push(0.5);
        stack.push(0.5);
        assert_relative_eq!(stack.current(), 0.25);

        stack.pop();
        assert_relative_eq!(stack.current(), 0.5);
        stack.pop();
        assert_relative_eq!(stack.current(), 1.0);
    }

    #[test]
    fn test_pop_past_base_is_noop() {
        let mut stack = AlphaStack::new();
        stack.pop();
        stack.pop();
        assert_eq!(stack.depth(), 0);
        assert_relative_eq!(stack.current(), 1.0);

        stack.push(0.3);
        assert_relative_eq!(stack.current(), 0.3);
    }

    #[test]
    fn test_out_of_range_alpha_is_clamped() {
        let mut stack = AlphaStack::new();
        stack.push(4.0);
        assert_relative_eq!(stack.current(), 1.0);
        stack.push(-2.0);
        assert_relative_eq!(stack.current(), 0.0);
        stack.push(f32::NAN);
        assert_relative_eq!(stack.current(), 0.0);
    }

    #[test]
    fn test_overflow_keeps_pairs_balanced() {
        let mut stack = AlphaStack::new();
        for _ in 0..ALPHA_STACK_DEPTH {
            stack.push(0.9);
        }
        let full = stack.current();

        stack.push(0.1);
        stack.push(0.1);
        assert_relative_eq!(stack.current(), full);

        stack.pop();
        stack.pop();
        assert_relative_eq!(stack.current(), full);

        stack.pop();
        assert_eq!(stack.depth(), ALPHA_STACK_DEPTH - 1);
    }
}
