//! Membership tests: syntactic sugar for `In`/`NotIn` checks.

/// Membership checks against a finite list of candidates.
///
/// Equality is value equality; two absent values (`None == None`) compare
/// equal, so `None.is_in(&[None, Some(1)])` holds.
pub trait Membership: PartialEq + Sized {
    /// True iff the value equals any element of `range`.
    fn is_in(&self, range: &[Self]) -> bool {
        range.iter().any(|candidate| candidate == self)
    }

    /// Exact logical negation of [`Membership::is_in`].
    fn not_in(&self, range: &[Self]) -> bool {
        !self.is_in(range)
    }
}

impl<T: PartialEq> Membership for T {}
