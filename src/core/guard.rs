//! Guard predicates for controlling transitions.
//!
//! Guards are boolean functions that decide whether a candidate transition
//! may be taken. They see the driven object only through a shared borrow,
//! so they cannot mutate it.

/// Predicate signature for a bound guard.
pub type GuardFn<O, E> = dyn Fn(&O, &E) -> bool + Send + Sync;

enum Predicate<O, E> {
    Always,
    Bound(Box<GuardFn<O, E>>),
}

/// Predicate that determines if a transition can execute.
///
/// A guard must be stable: evaluating it twice against the same owner and
/// event within one processing step must give the same answer. The machine
/// relies on this between its eligibility scan and its commit pass.
///
/// # Example
///
/// ```rust
/// use mealy::core::Guard;
///
/// struct Dialog {
///     initial_cseq: u32,
/// }
///
/// let same_cseq = Guard::new(|d: &Dialog, cseq: &u32| *cseq == d.initial_cseq);
/// let dialog = Dialog { initial_cseq: 7 };
///
/// assert!(same_cseq.evaluate(&dialog, &7));
/// assert!(!same_cseq.evaluate(&dialog, &8));
/// assert!(Guard::always().evaluate(&dialog, &8));
/// ```
pub struct Guard<O, E> {
    predicate: Predicate<O, E>,
}

impl<O, E> Guard<O, E> {
    /// A guard that always passes.
    pub fn always() -> Self {
        Guard {
            predicate: Predicate::Always,
        }
    }

    /// Create a guard from a predicate function.
    ///
    /// The predicate must be deterministic and free of side effects.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&O, &E) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Predicate::Bound(Box::new(predicate)),
        }
    }

    /// Check if the guard allows the transition.
    pub fn evaluate(&self, owner: &O, event: &E) -> bool {
        match &self.predicate {
            Predicate::Always => true,
            Predicate::Bound(predicate) => predicate(owner, event),
        }
    }
}

impl<O: 'static, E: 'static> Guard<O, E> {
    /// Passes when both guards pass. `other` is not evaluated if `self` fails.
    ///
    /// ```rust
    /// use mealy::core::Guard;
    ///
    /// let positive = Guard::new(|_: &(), n: &i32| *n > 0);
    /// let even = Guard::new(|_: &(), n: &i32| n % 2 == 0);
    /// let both = positive.and(even);
    ///
    /// assert!(both.evaluate(&(), &4));
    /// assert!(!both.evaluate(&(), &3));
    /// assert!(!both.evaluate(&(), &-2));
    /// ```
    pub fn and(self, other: Guard<O, E>) -> Self {
        Guard::new(move |owner, event| self.evaluate(owner, event) && other.evaluate(owner, event))
    }

    /// Passes when either guard passes. `other` is not evaluated if `self` passes.
    pub fn or(self, other: Guard<O, E>) -> Self {
        Guard::new(move |owner, event| self.evaluate(owner, event) || other.evaluate(owner, event))
    }
}

impl<O: 'static, E: 'static> std::ops::Not for Guard<O, E> {
    type Output = Self;

    /// Inverts the guard.
    fn not(self) -> Self {
        Guard::new(move |owner, event| !self.evaluate(owner, event))
    }
}

impl<O, E> Default for Guard<O, E> {
    fn default() -> Self {
        Self::always()
    }
}

impl<O, E> std::fmt::Debug for Guard<O, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.predicate {
            Predicate::Always => f.write_str("Guard::Always"),
            Predicate::Bound(_) => f.write_str("Guard::Bound"),
        }
    }
}
