use std::fmt;
use std::sync::Arc;

/// An immutable boolean test over subjects of one element kind.
///
/// A matcher pairs a pure test function with whatever parameters it captured
/// at construction time (which may themselves be matchers). Construction is
/// cheap and happens once per pass definition; evaluation may happen
/// millions of times. Cloning shares the underlying test, and a matcher
/// never holds per-match state, so one value can serve any number of worker
/// threads concurrently.
pub struct Matcher<T> {
    test: Arc<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T> Matcher<T> {
    pub fn new(test: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        Self {
            test: Arc::new(test),
        }
    }

    /// Evaluate against one subject. "No match" is an ordinary `false`,
    /// never an error.
    pub fn matches(&self, subject: &T) -> bool {
        (self.test)(subject)
    }
}

impl<T> Clone for Matcher<T> {
    fn clone(&self) -> Self {
        Self {
            test: Arc::clone(&self.test),
        }
    }
}

impl<T> fmt::Debug for Matcher<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matcher").finish_non_exhaustive()
    }
}

/// The universal accept matcher: true for every subject of the kind.
pub fn always<T>() -> Matcher<T> {
    Matcher::new(|_| true)
}
