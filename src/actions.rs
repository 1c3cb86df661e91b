//! Composable reactions for use with `and_call`.
//!
//! Methods with side effects often need more than returning a canned
//! value: writing through an out-parameter, notifying a callback the
//! caller passed in, or chaining several effects for one call. The
//! functions here build such reactions as ordinary closures, so they
//! can be mixed freely with hand-written ones.
//!
//! ```rust,ignore
//! scenario.expect(
//!     device.configure_call(ANY, ANY)
//!         .and_call(with_second(|retries| retries + 1)),
//! );
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Reaction returning `value` and ignoring the call argument.
/// Useful as the final step of [`do_all`].
///
/// [`do_all`]: fn.do_all.html
pub fn ret<A, R>(value: R) -> impl FnOnce(A) -> R {
    move |_| value
}

/// Adapts a parameterless closure to a single-argument method.
pub fn without_args<A, R, F>(func: F) -> impl FnOnce(A) -> R
where
    F: FnOnce() -> R,
{
    move |_| func()
}

/// Feeds the first (and only) argument to `func`. This is an identity
/// adapter kept for symmetry with [`with_first`] and [`with_second`].
///
/// [`with_first`]: fn.with_first.html
/// [`with_second`]: fn.with_second.html
pub fn with_arg<A, R, F>(func: F) -> impl FnOnce(A) -> R
where
    F: FnOnce(A) -> R,
{
    move |arg| func(arg)
}

/// Feeds only the first argument of a two-argument method to `func`.
pub fn with_first<A0, A1, R, F>(func: F) -> impl FnOnce(A0, A1) -> R
where
    F: FnOnce(A0) -> R,
{
    move |arg0, _| func(arg0)
}

/// Feeds only the second argument of a two-argument method to `func`.
pub fn with_second<A0, A1, R, F>(func: F) -> impl FnOnce(A0, A1) -> R
where
    F: FnOnce(A1) -> R,
{
    move |_, arg1| func(arg1)
}

/// Stores `value` into a shared cell when the call is performed,
/// ignoring the call argument.
pub fn assign<T, A>(slot: &Rc<Cell<T>>, value: T) -> impl FnOnce(A) {
    let slot = Rc::clone(slot);
    move |_| slot.set(value)
}

/// Writes `value` through a cell received as the call argument.
/// This is the counterpart of an out-parameter: the caller passes a
/// cell, the reaction fills it.
pub fn set_slot<T>(value: T) -> impl FnOnce(Rc<Cell<T>>) {
    move |slot| slot.set(value)
}

/// Replaces the contents of a buffer received as the call argument
/// with the given values.
pub fn fill_with<T: Clone>(values: &[T]) -> impl FnOnce(Rc<RefCell<Vec<T>>>) {
    let values = values.to_vec();
    move |buf| {
        let mut buf = buf.borrow_mut();
        buf.clear();
        buf.extend(values);
    }
}

/// Stores `error` into a shared error cell and returns `result`.
/// The error cell plays the role of a process-wide error indicator,
/// injected explicitly instead of being global.
pub fn set_error_and_return<E, A, R>(
    slot: &Rc<Cell<E>>,
    error: E,
    result: R,
) -> impl FnOnce(A) -> R {
    let slot = Rc::clone(slot);
    move |_| {
        slot.set(error);
        result
    }
}

/// Invokes the callback received as the call argument, passing it
/// `value`.
pub fn invoke_arg<T>(value: T) -> impl FnOnce(fn(T)) {
    move |callback| callback(value)
}

/// Performs `first` for its side effect, then `second` for the result.
/// The call argument is cloned so both steps receive it.
pub fn do_all<A, R, F1, F2>(first: F1, second: F2) -> impl FnOnce(A) -> R
where
    A: Clone,
    F1: FnOnce(A),
    F2: FnOnce(A) -> R,
{
    move |arg| {
        first(arg.clone());
        second(arg)
    }
}

/// Performs `func` and discards its result, so a value-returning
/// closure can react to a method returning unit.
pub fn ignore_result<A, R, F>(func: F) -> impl FnOnce(A)
where
    F: FnOnce(A) -> R,
{
    move |arg| {
        func(arg);
    }
}
