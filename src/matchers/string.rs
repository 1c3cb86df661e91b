use std::fmt::Debug;
use std::marker::PhantomData;

use regex::Regex;

use crate::MatchArg;

/// This struct is created by the [`contains_regex`] and [`matches_regex`]
/// functions. See their documentation for more.
///
/// [`contains_regex`]: fn.contains_regex.html
/// [`matches_regex`]: fn.matches_regex.html
pub struct RegexMatchArg<T> {
    regex: Regex,
    pattern: String,
    full: bool,
    _phantom: PhantomData<T>,
}
impl<T: AsRef<str> + Debug> MatchArg<T> for RegexMatchArg<T> {
    fn matches(&self, arg: &T) -> Result<(), String> {
        if self.regex.is_match(arg.as_ref()) {
            Ok(())
        } else if self.full {
            Err(format!("{:?} doesn't match regex {:?}", arg, self.pattern))
        } else {
            Err(format!(
                "{:?} doesn't contain match of regex {:?}",
                arg, self.pattern
            ))
        }
    }

    fn describe(&self) -> String {
        if self.full {
            format!("matches_regex({:?})", self.pattern)
        } else {
            format!("contains_regex({:?})", self.pattern)
        }
    }
}

/// Matches a string containing a match of the given regular expression.
///
/// Panics if the pattern is invalid: matchers are built inside tests,
/// so a malformed pattern is a bug in the test itself.
pub fn contains_regex<T: AsRef<str> + Debug>(pattern: &str) -> RegexMatchArg<T> {
    RegexMatchArg {
        regex: Regex::new(pattern).expect("invalid regular expression"),
        pattern: pattern.to_owned(),
        full: false,
        _phantom: PhantomData,
    }
}

/// Matches a string entirely matched by the given regular expression.
///
/// Panics if the pattern is invalid, see [`contains_regex`].
///
/// [`contains_regex`]: fn.contains_regex.html
pub fn matches_regex<T: AsRef<str> + Debug>(pattern: &str) -> RegexMatchArg<T> {
    RegexMatchArg {
        regex: Regex::new(&format!("^(?:{})$", pattern)).expect("invalid regular expression"),
        pattern: pattern.to_owned(),
        full: true,
        _phantom: PhantomData,
    }
}

macro_rules! substring_matcher {
    ($func_name:ident, $class_name:ident, $method:ident, $msg:expr) => {
        pub struct $class_name<T> {
            fragment: String,
            _phantom: PhantomData<T>,
        }
        impl<T: AsRef<str> + Debug> MatchArg<T> for $class_name<T> {
            fn matches(&self, arg: &T) -> Result<(), String> {
                if arg.as_ref().$method(&self.fragment[..]) {
                    Ok(())
                } else {
                    Err(format!(concat!("{:?} ", $msg, " {:?}"), arg, self.fragment))
                }
            }

            fn describe(&self) -> String {
                format!(concat!(stringify!($func_name), "({:?})"), self.fragment)
            }
        }

        /// Matches a string by the
        #[doc = stringify!($method)]
        /// relation over the given fragment.
        pub fn $func_name<T: AsRef<str> + Debug>(fragment: &str) -> $class_name<T> {
            $class_name {
                fragment: fragment.to_owned(),
                _phantom: PhantomData,
            }
        }
    };
}

substring_matcher!(starts_with, StartsWithMatchArg, starts_with, "doesn't start with");
substring_matcher!(ends_with, EndsWithMatchArg, ends_with, "doesn't end with");
substring_matcher!(has_substr, HasSubstrMatchArg, contains, "doesn't contain");

/// This struct is created by the [`eq_ignore_case`] and [`ne_ignore_case`]
/// functions. See their documentation for more.
///
/// [`eq_ignore_case`]: fn.eq_ignore_case.html
/// [`ne_ignore_case`]: fn.ne_ignore_case.html
pub struct CaseMatchArg<T> {
    other: String,
    negated: bool,
    _phantom: PhantomData<T>,
}
impl<T: AsRef<str> + Debug> MatchArg<T> for CaseMatchArg<T> {
    fn matches(&self, arg: &T) -> Result<(), String> {
        let equal = arg.as_ref().eq_ignore_ascii_case(&self.other);
        if equal != self.negated {
            Ok(())
        } else if self.negated {
            Err(format!(
                "{:?} is equal to {:?} ignoring case",
                arg, self.other
            ))
        } else {
            Err(format!(
                "{:?} is not equal to {:?} ignoring case",
                arg, self.other
            ))
        }
    }

    fn describe(&self) -> String {
        if self.negated {
            format!("ne_ignore_case({:?})", self.other)
        } else {
            format!("eq_ignore_case({:?})", self.other)
        }
    }
}

/// Matches a string equal to `other` up to ASCII case.
pub fn eq_ignore_case<T: AsRef<str> + Debug>(other: &str) -> CaseMatchArg<T> {
    CaseMatchArg {
        other: other.to_owned(),
        negated: false,
        _phantom: PhantomData,
    }
}

/// Matches a string different from `other` up to ASCII case.
pub fn ne_ignore_case<T: AsRef<str> + Debug>(other: &str) -> CaseMatchArg<T> {
    CaseMatchArg {
        other: other.to_owned(),
        negated: true,
        _phantom: PhantomData,
    }
}
