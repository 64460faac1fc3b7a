use crate::Cost;

/// A route through the Graph: the sequence of Nodes taken and the total Cost of
/// walking them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<P> {
    steps: Vec<P>,
    cost: Cost,
}

impl<P> Path<P> {
    /// Creates a Path from the given steps and total Cost.
    pub fn new(steps: Vec<P>, cost: Cost) -> Path<P> {
        Path { steps, cost }
    }

    /// The total Cost of the Path
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// The number of steps in the Path
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// `true` if the Path has no steps
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Returns an Iterator over the Path
    pub fn iter(&self) -> std::slice::Iter<'_, P> {
        self.steps.iter()
    }

    /// The steps of the Path as a slice
    pub fn steps(&self) -> &[P] {
        &self.steps
    }
}

use std::ops::Index;

impl<P> Index<usize> for Path<P> {
    type Output = P;
    fn index(&self, index: usize) -> &P {
        &self.steps[index]
    }
}

impl<'a, P> IntoIterator for &'a Path<P> {
    type Item = &'a P;
    type IntoIter = std::slice::Iter<'a, P>;
    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

impl<P: PartialEq> PartialEq<Vec<P>> for Path<P> {
    fn eq(&self, rhs: &Vec<P>) -> bool {
        self.steps == *rhs
    }
}

impl<'a, P: PartialEq> PartialEq<&'a [P]> for Path<P> {
    fn eq(&self, rhs: &&'a [P]) -> bool {
        self.steps == *rhs
    }
}

use std::fmt;
impl<P: fmt::Display> fmt::Display for Path<P> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Path[Cost = {}]: ", self.cost)?;
        if self.steps.is_empty() {
            write!(fmt, "<empty>")
        } else {
            write!(fmt, "{}", self.steps[0])?;
            for p in self.steps.iter().skip(1) {
                write!(fmt, " -> {}", p)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {

    use super::Path;

    #[test]
    fn index() {
        let path = Path::new(vec![4, 2, 0], 42);

        assert_eq!(path[0], 4);
        assert_eq!(path[1], 2);
        assert_eq!(path[2], 0);
    }

    #[test]
    fn display() {
        let path = Path::new(vec![4, 2, 0], 42);

        assert_eq!(&format!("{}", path), "Path[Cost = 42]: 4 -> 2 -> 0");
    }

    #[test]
    fn display_empty() {
        let path = Path::new(Vec::<i32>::new(), 0);

        assert_eq!(&format!("{}", path), "Path[Cost = 0]: <empty>");
    }
}
