use std::fmt::Debug;
use std::marker::PhantomData;
use std::ops::Deref;

use crate::MatchArg;

/// This struct is created by the [`field_of`] function. See its documentation for more.
///
/// [`field_of`]: fn.field_of.html
pub struct FieldMatchArg<O, T, G, M>
where
    G: Fn(&O) -> &T,
    M: MatchArg<T>,
{
    getter: G,
    matcher: M,
    _phantom: PhantomData<(O, T)>,
}
impl<O, T: Debug, G, M> MatchArg<O> for FieldMatchArg<O, T, G, M>
where
    G: Fn(&O) -> &T,
    M: MatchArg<T>,
{
    fn matches(&self, arg: &O) -> Result<(), String> {
        let field = (self.getter)(arg);
        self.matcher
            .matches(field)
            .map_err(|err| format!("field {:?}: {}", field, err))
    }

    fn describe(&self) -> String {
        format!("field_of({})", self.matcher.describe())
    }
}

/// Matches an object whose field, extracted by `getter`, matches
/// another matcher.
///
/// # Example
/// ```rust
/// # use standin::MatchArg;
/// # use standin::matchers::{eq, field_of};
///
/// struct Point { x: i32 }
/// let point = Point { x: 4 };
/// assert!(field_of(|p: &Point| &p.x, eq(4)).matches(&point).is_ok());
/// ```
pub fn field_of<O, T: Debug, G, M>(getter: G, matcher: M) -> FieldMatchArg<O, T, G, M>
where
    G: Fn(&O) -> &T,
    M: MatchArg<T>,
{
    FieldMatchArg {
        getter,
        matcher,
        _phantom: PhantomData,
    }
}

/// This struct is created by the [`result_of`] function. See its documentation for more.
///
/// [`result_of`]: fn.result_of.html
pub struct ResultOfMatchArg<O, T, F, M>
where
    F: Fn(&O) -> T,
    M: MatchArg<T>,
{
    func: F,
    matcher: M,
    _phantom: PhantomData<(O, T)>,
}
impl<O, T: Debug, F, M> MatchArg<O> for ResultOfMatchArg<O, T, F, M>
where
    F: Fn(&O) -> T,
    M: MatchArg<T>,
{
    fn matches(&self, arg: &O) -> Result<(), String> {
        let value = (self.func)(arg);
        self.matcher
            .matches(&value)
            .map_err(|err| format!("result {:?}: {}", value, err))
    }

    fn describe(&self) -> String {
        format!("result_of({})", self.matcher.describe())
    }
}

/// Matches an object for which `func` returns a value matching another
/// matcher. Use it for accessor methods where [`field_of`] doesn't apply.
///
/// [`field_of`]: fn.field_of.html
pub fn result_of<O, T: Debug, F, M>(func: F, matcher: M) -> ResultOfMatchArg<O, T, F, M>
where
    F: Fn(&O) -> T,
    M: MatchArg<T>,
{
    ResultOfMatchArg {
        func,
        matcher,
        _phantom: PhantomData,
    }
}

/// This struct is created by the [`deref`] function. See its documentation for more.
///
/// [`deref`]: fn.deref.html
pub struct DerefMatchArg<M>(M);
impl<P: Deref, M: MatchArg<P::Target>> MatchArg<P> for DerefMatchArg<M>
where
    P::Target: Sized,
{
    fn matches(&self, arg: &P) -> Result<(), String> {
        self.0.matches(&**arg)
    }

    fn describe(&self) -> String {
        format!("deref({})", self.0.describe())
    }
}

/// Matches a reference or smart pointer whose pointee matches another
/// matcher.
///
/// # Example
/// ```rust
/// # use standin::MatchArg;
/// # use standin::matchers::{deref, eq};
///
/// assert!(deref(eq(4)).matches(&&4).is_ok());
/// ```
pub fn deref<M>(matcher: M) -> DerefMatchArg<M> {
    DerefMatchArg(matcher)
}

/// This struct is created by the [`same_instance`] function.
/// See its documentation for more.
///
/// [`same_instance`]: fn.same_instance.html
pub struct SameInstanceMatchArg<T: 'static>(&'static T);
impl<T: Debug + 'static> MatchArg<&'static T> for SameInstanceMatchArg<T> {
    fn matches(&self, arg: &&'static T) -> Result<(), String> {
        if std::ptr::eq(*arg, self.0) {
            Ok(())
        } else {
            Err(format!(
                "{:?} is not the same instance as {:?}",
                arg, self.0
            ))
        }
    }

    fn describe(&self) -> String {
        format!("same_instance({:?})", self.0)
    }
}

/// Matches a reference to exactly the given object. Comparison is by
/// address, not by value.
pub fn same_instance<T: Debug>(object: &'static T) -> SameInstanceMatchArg<T> {
    SameInstanceMatchArg(object)
}

/// This struct is created by the [`cast`] function. See its documentation for more.
///
/// [`cast`]: fn.cast.html
pub struct CastMatchArg<T, U, M: MatchArg<U>> {
    matcher: M,
    _phantom: PhantomData<(T, U)>,
}
impl<T, U, M> MatchArg<T> for CastMatchArg<T, U, M>
where
    T: Clone + Into<U> + Debug,
    U: Debug,
    M: MatchArg<U>,
{
    fn matches(&self, arg: &T) -> Result<(), String> {
        self.matcher.matches(&arg.clone().into())
    }

    fn describe(&self) -> String {
        format!("cast({})", self.matcher.describe())
    }
}

/// Applies a matcher written for type `U` to arguments of type `T`,
/// converting each argument with `Into` first.
///
/// # Example
/// ```rust
/// # use standin::MatchArg;
/// # use standin::matchers::{cast, eq};
///
/// assert!(cast::<i32, i64, _>(eq(42i64)).matches(&42).is_ok());
/// ```
pub fn cast<T, U, M>(matcher: M) -> CastMatchArg<T, U, M>
where
    T: Clone + Into<U> + Debug,
    U: Debug,
    M: MatchArg<U>,
{
    CastMatchArg {
        matcher,
        _phantom: PhantomData,
    }
}
