//! Reveal animation scheduling.
//!
//! Cards in a group stagger their reveal by index; list boxes slide in
//! from alternating sides. The DOM layer applies these as a transition
//! delay and a modifier class.

/// Transition delay for the `index`-th element of a staggered group.
pub fn stagger_delay_ms(index: usize, step_ms: u32) -> u32 {
    index as u32 * step_ms
}

/// Odd-indexed list boxes enter from the right, even-indexed from the
/// left.
pub fn slides_from_right(index: usize) -> bool {
    index % 2 == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_grows_by_index() {
        assert_eq!(stagger_delay_ms(0, 50), 0);
        assert_eq!(stagger_delay_ms(1, 50), 50);
        assert_eq!(stagger_delay_ms(3, 100), 300);
    }

    #[test]
    fn test_sides_alternate() {
        assert!(!slides_from_right(0));
        assert!(slides_from_right(1));
        assert!(!slides_from_right(2));
        assert!(slides_from_right(3));
    }
}
