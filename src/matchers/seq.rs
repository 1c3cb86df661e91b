use std::fmt::Debug;

use itertools::Itertools;

use crate::MatchArg;

/// This struct is created by the [`elements`] function and the
/// [`elements_are!`] macro. See their documentation for more.
///
/// [`elements`]: fn.elements.html
/// [`elements_are!`]: ../macro.elements_are.html
pub struct ElementsMatchArg<T> {
    matchers: Vec<Box<dyn MatchArg<T>>>,
}
impl<T: Debug> MatchArg<Vec<T>> for ElementsMatchArg<T> {
    fn matches(&self, arg: &Vec<T>) -> Result<(), String> {
        if arg.len() != self.matchers.len() {
            return Err(format!(
                "{:?} has {} elements, expected {}",
                arg,
                arg.len(),
                self.matchers.len()
            ));
        }
        for (index, (value, matcher)) in arg.iter().zip(&self.matchers).enumerate() {
            if let Err(err) = matcher.matches(value) {
                return Err(format!("element #{}: {}", index, err));
            }
        }
        Ok(())
    }

    fn describe(&self) -> String {
        let descriptions = self.matchers.iter().map(|m| m.describe());
        format!("elements_are![{}]", descriptions.format(", "))
    }
}

/// Matches a vector whose elements match the given matchers, in order.
/// Usually constructed with the [`elements_are!`] macro.
///
/// [`elements_are!`]: ../macro.elements_are.html
pub fn elements<T>(matchers: Vec<Box<dyn MatchArg<T>>>) -> ElementsMatchArg<T> {
    ElementsMatchArg { matchers }
}

/// Matches a vector elementwise against a list of matchers:
///
/// ```rust
/// # use standin::MatchArg;
/// # use standin::elements_are;
/// # use standin::matchers::{ANY, eq};
///
/// assert!(elements_are![eq(1), ANY].matches(&vec![1, 5]).is_ok());
/// ```
#[macro_export]
macro_rules! elements_are {
    ($($m:expr),* $(,)?) => {
        $crate::matchers::elements(vec![
            $(Box::new($m) as Box<dyn $crate::MatchArg<_>>),*
        ])
    };
}

/// This struct is created by the [`elements_are_array`] function.
/// See its documentation for more.
///
/// [`elements_are_array`]: fn.elements_are_array.html
pub struct ElementsAreArrayMatchArg<T> {
    expected: Vec<T>,
}
impl<T: PartialEq + Debug> MatchArg<Vec<T>> for ElementsAreArrayMatchArg<T> {
    fn matches(&self, arg: &Vec<T>) -> Result<(), String> {
        if arg.len() != self.expected.len() {
            return Err(format!(
                "{:?} has {} elements, expected {}",
                arg,
                arg.len(),
                self.expected.len()
            ));
        }
        for (index, (value, expected)) in arg.iter().zip(&self.expected).enumerate() {
            if value != expected {
                return Err(format!(
                    "element #{}: {:?} is not equal to {:?}",
                    index, value, expected
                ));
            }
        }
        Ok(())
    }

    fn describe(&self) -> String {
        format!("elements_are_array({:?})", self.expected)
    }
}

/// Matches a vector whose elements are equal to the given ones, in order.
pub fn elements_are_array<T: PartialEq + Debug + Clone>(
    expected: &[T],
) -> ElementsAreArrayMatchArg<T> {
    ElementsAreArrayMatchArg {
        expected: expected.to_vec(),
    }
}

/// This struct is created by the [`container_eq`] function.
/// See its documentation for more.
///
/// [`container_eq`]: fn.container_eq.html
pub struct ContainerEqMatchArg<C>(C);
impl<C: PartialEq + Debug> MatchArg<C> for ContainerEqMatchArg<C> {
    fn matches(&self, arg: &C) -> Result<(), String> {
        if *arg == self.0 {
            Ok(())
        } else {
            Err(format!("{:?} is not equal to {:?}", arg, self.0))
        }
    }

    fn describe(&self) -> String {
        format!("container_eq({:?})", self.0)
    }
}

/// Matches a container equal to the expected one as a whole. Unlike the
/// bare-value matcher it doesn't require `Eq`, so containers of
/// floating-point values are accepted.
pub fn container_eq<C: PartialEq + Debug>(expected: C) -> ContainerEqMatchArg<C> {
    ContainerEqMatchArg(expected)
}
