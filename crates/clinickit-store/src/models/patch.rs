//! Three-state patch field.

/// Presence marker for a clearable field in a partial update.
///
/// Distinguishes "field omitted from the form" from "field explicitly
/// cleared", which a plain `Option` cannot express.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    /// Leave the stored value untouched.
    Keep,
    /// Replace the stored value.
    Set(T),
    /// Remove the stored value.
    Clear,
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Keep
    }
}

impl<T> Patch<T> {
    pub fn is_keep(&self) -> bool {
        matches!(self, Patch::Keep)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_keep() {
        assert!(Patch::<String>::default().is_keep());
        assert!(!Patch::Set("x".to_string()).is_keep());
        assert!(!Patch::<String>::Clear.is_keep());
    }
}
