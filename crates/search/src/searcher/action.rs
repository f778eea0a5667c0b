/// Actions an observer can take during a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the search now and return the fallback result.
    StopEarly,

    /// Abandon the remaining candidates of the current family.
    ///
    /// Ignored on events that are not tied to a family's candidates.
    SkipFamily,

    /// Treat a validated candidate as not a match and keep searching.
    ///
    /// Only meaningful on [`Event::Accepted`](super::Event::Accepted); ignored
    /// elsewhere. Use this to exclude answers the caller already knows are
    /// wrong, such as a candidate rejected by an external check.
    Discard,
}
