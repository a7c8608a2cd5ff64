//! Ordered route sequence

use super::Direction;

/// A fixed, ordered sequence of route identifiers.
///
/// The sequence never changes after construction; the active position is
/// derived by locating the active route inside it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteSequence {
    routes: Vec<String>,
}

impl RouteSequence {
    /// Build a sequence from routes in navigation order
    pub fn new<I, S>(routes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            routes: routes.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of routes in the sequence
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Route at `index`, if in range
    pub fn get(&self, index: usize) -> Option<&str> {
        self.routes.get(index).map(String::as_str)
    }

    /// Position of `route` in the sequence, if present
    pub fn position(&self, route: &str) -> Option<usize> {
        self.routes.iter().position(|r| r == route)
    }

    /// Route adjacent to `index` in the given direction
    pub fn neighbor(&self, index: usize, direction: Direction) -> Option<&str> {
        match direction {
            Direction::Up => index.checked_sub(1).and_then(|i| self.get(i)),
            Direction::Down => index.checked_add(1).and_then(|i| self.get(i)),
        }
    }

    /// Route before `index`
    pub fn previous(&self, index: usize) -> Option<&str> {
        self.neighbor(index, Direction::Up)
    }

    /// Route after `index`
    pub fn next(&self, index: usize) -> Option<&str> {
        self.neighbor(index, Direction::Down)
    }
}

impl<S: Into<String>> FromIterator<S> for RouteSequence {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
