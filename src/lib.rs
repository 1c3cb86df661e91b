//! Scenario-based mocking with explicit, hand-written mock objects.
//!
//! A `Scenario` owns an ordered list of expectations. Mock structs
//! implement the mocked trait by reporting every performed call to the
//! scenario, which finds a matching expectation (most recently added
//! first) and hands back the reaction to run. Unmatched calls panic
//! with a report of the active expectations; expectations left
//! unsatisfied panic when the scenario is dropped.

use std::any::Any;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::fmt::Write;
use std::marker::PhantomData;
use std::ops::DerefMut;
use std::rc::Rc;

use itertools::Itertools;

#[macro_use]
mod colors;
pub mod actions;
pub mod cardinality;
pub mod matchers;

use crate::cardinality::{Cardinality, CardinalityCheckResult};

macro_rules! define_actions {
    ($action_clone:ident { $($Arg:ident),* }) => {
        type $action_clone<$($Arg,)* T> = Rc<RefCell<dyn FnMut($($Arg,)*) -> T>>;
    }
}

define_actions!(ActionClone0 { });
define_actions!(ActionClone1 { Arg0 });
define_actions!(ActionClone2 { Arg0, Arg1 });
define_actions!(ActionClone3 { Arg0, Arg1, Arg2 });
define_actions!(ActionClone4 { Arg0, Arg1, Arg2, Arg3 });

/// Pattern against which performed calls are tested: which mock object,
/// which method, and matchers for every argument.
pub trait CallMatch {
    fn matches_args(&self, call: &Call) -> bool;
    fn matches(&self, call: &Call) -> bool {
        self.matches_target(call) && self.matches_method(call) && self.matches_args(call)
    }
    fn matches_target(&self, call: &Call) -> bool {
        self.get_mock_id() == call.method_data.mock_id
    }
    fn matches_method(&self, call: &Call) -> bool {
        self.get_mock_type_id() == call.method_data.mock_type_id
            && self.get_method_name() == call.method_data.method_name
    }
    fn validate(&self, call: &Call) -> Vec<Result<(), String>>;
    fn get_mock_id(&self) -> usize;
    fn get_mock_type_id(&self) -> usize;
    fn get_method_name(&self) -> &'static str;
    fn describe(&self) -> String;
}

pub trait Expectation {
    fn call_match(&self) -> &dyn CallMatch;
    fn is_satisfied(&self) -> bool;
    fn satisfy(&mut self, call: Call, mock_name: &str) -> Box<dyn Satisfy>;
    fn describe(&self) -> String;

    /// Whether this expectation can consume the call. Composite
    /// expectations may stop matching before they leave the scenario's
    /// expectation list.
    fn matches_call(&self, call: &Call) -> bool {
        self.call_match().matches(call)
    }
}

pub struct ExpectationNever<CM: CallMatch> {
    call_match: CM,
}
impl<CM: CallMatch> Expectation for ExpectationNever<CM> {
    fn call_match(&self) -> &dyn CallMatch {
        &self.call_match
    }
    fn is_satisfied(&self) -> bool {
        true
    }
    fn satisfy(&mut self, _call: Call, mock_name: &str) -> Box<dyn Satisfy> {
        panic!(
            "{}.{} should never be called",
            mock_name,
            self.call_match().get_method_name()
        );
    }
    fn describe(&self) -> String {
        format!("{} should never be called", self.call_match.describe())
    }
}

/// Deferred action execution. The boxed result is downcast back to the
/// method return type by the mock stub which recorded the call.
pub trait Satisfy {
    fn satisfy(self: Box<Self>) -> Box<dyn Any>;
}

macro_rules! define_all {
    (
        ($call_match:ident, $reaction:ident,
          $action_clone:ident,
          $satisfy:ident, $satisfy_clone:ident,
          $expectation:ident, $expectation_times:ident)
        { $(($n:tt, $arg:ident, $Arg:ident)),* }
    ) => {
        struct $satisfy<$($Arg,)* Res, F: FnOnce($($Arg,)*) -> Res> {
            action: F,
            $($arg: $Arg,)*
        }

        impl<$($Arg,)* Res: 'static, F: FnOnce($($Arg,)*) -> Res> Satisfy
        for $satisfy<$($Arg,)* Res, F> {
            fn satisfy(self: Box<Self>) -> Box<dyn Any> {
                let result = (self.action)($(self.$arg,)*);
                Box::new(result)
            }
        }

        struct $satisfy_clone<$($Arg,)* Res> {
            action: $action_clone<$($Arg,)* Res>,
            $($arg: $Arg,)*
        }

        impl<$($Arg,)* Res: 'static> Satisfy for $satisfy_clone<$($Arg,)* Res> {
            fn satisfy(self: Box<Self>) -> Box<dyn Any> {
                let result = self.action.borrow_mut().deref_mut()($(self.$arg,)*);
                Box::new(result)
            }
        }

        #[must_use]
        pub struct $call_match<$($Arg,)* Res> {
            mock_id: usize,
            mock_type_id: usize,
            method_name: &'static str,
            $($arg: Box<dyn MatchArg<$Arg>>,)*
            _phantom: PhantomData<Res>,
        }

        impl<$($Arg: 'static,)* Res> $call_match<$($Arg,)* Res> {
            pub fn new(
                mock_id: usize,
                mock_type_id: usize,
                method_name: &'static str,
                $($arg: Box<dyn MatchArg<$Arg>>,)*
            ) -> Self {
                $call_match {
                    mock_id,
                    mock_type_id,
                    method_name,
                    $($arg,)*
                    _phantom: PhantomData,
                }
            }

            fn get_args_ref(call: &Call) -> &($($Arg,)*) {
                call.args_ref()
                    .downcast_ref::<($($Arg,)*)>()
                    .expect("call argument tuple has unexpected type")
            }

            #[allow(unused_mut)]
            fn get_args(mut call: Call) -> Box<($($Arg,)*)> {
                call.take_args()
                    .downcast::<($($Arg,)*)>()
                    .ok()
                    .expect("call argument tuple has unexpected type")
            }
        }

        #[must_use]
        pub struct $reaction<$($Arg,)* Res> {
            call_match: $call_match<$($Arg,)* Res>,
            action: $action_clone<$($Arg,)* Res>,
        }
        impl<$($Arg,)* Res> $reaction<$($Arg,)* Res> {
            pub fn times<C: Cardinality + 'static>(self, cardinality: C) -> $expectation_times<$($Arg,)* Res> {
                $expectation_times::new(self.call_match, self.action, Box::new(cardinality))
            }
        }

        #[must_use]
        pub struct $expectation_times<$($Arg,)* Res> {
            action: $action_clone<$($Arg,)* Res>,
            call_match: $call_match<$($Arg,)* Res>,
            cardinality: Box<dyn Cardinality>,
            count: u32,
        }

        impl<$($Arg,)* Res> $expectation_times<$($Arg,)* Res> {
            fn new(
                call_match: $call_match<$($Arg,)* Res>,
                action: $action_clone<$($Arg,)* Res>,
                cardinality: Box<dyn Cardinality>,
            ) -> Self {
                $expectation_times {
                    call_match,
                    action,
                    cardinality,
                    count: 0,
                }
            }
        }

        impl<$($Arg: 'static,)* Res: 'static> Expectation for $expectation_times<$($Arg,)* Res> {
            fn call_match(&self) -> &dyn CallMatch {
                &self.call_match
            }
            fn is_satisfied(&self) -> bool {
                self.cardinality.check(self.count) == CardinalityCheckResult::Satisfied
            }
            fn satisfy(&mut self, call: Call, mock_name: &str) -> Box<dyn Satisfy> {
                self.count += 1;
                if self.cardinality.check(self.count) == CardinalityCheckResult::Wrong {
                    panic!(
                        "{}.{} is called for the {} time, but expected to be {}",
                        mock_name,
                        self.call_match().get_method_name(),
                        format_ordinal(self.count),
                        self.cardinality.describe_upper_bound()
                    );
                }
                let ($($arg,)*) = *$call_match::<$($Arg,)* Res>::get_args(call);
                let action = self.action.clone();
                Box::new(
                    $satisfy_clone {
                        action,
                        $($arg,)*
                    }
                )
            }
            fn describe(&self) -> String {
                format!(
                    "{} must be {}, called {} times",
                    self.call_match.describe(),
                    self.cardinality.describe(),
                    self.count
                )
            }
        }

        #[must_use]
        pub struct $expectation<$($Arg,)* Res, F: FnOnce($($Arg,)*) -> Res> {
            call_match: $call_match<$($Arg,)* Res>,
            action: Option<F>,
        }

        impl<$($Arg: 'static,)* Res: 'static, F: FnOnce($($Arg,)*) -> Res + 'static> Expectation
        for $expectation<$($Arg,)* Res, F> {
            fn call_match(&self) -> &dyn CallMatch {
                &self.call_match
            }
            fn is_satisfied(&self) -> bool {
                self.action.is_none()
            }
            fn satisfy(&mut self, call: Call, mock_name: &str) -> Box<dyn Satisfy> {
                match self.action.take() {
                    Some(action) => {
                        let ($($arg,)*) = *$call_match::<$($Arg,)* Res>::get_args(call);
                        Box::new(
                            $satisfy {
                                action,
                                $($arg,)*
                            }
                        )
                    }
                    None => {
                        panic!(
                            "{}.{} was already called earlier",
                            mock_name,
                            self.call_match().get_method_name()
                        );
                    }
                }
            }
            fn describe(&self) -> String {
                self.call_match.describe()
            }
        }

        impl<$($Arg: 'static,)* Res: 'static> $call_match<$($Arg,)* Res> {
            pub fn and_return(self, result: Res)
            -> $expectation<$($Arg,)* Res, impl FnOnce($($Arg,)*) -> Res> {
                #[allow(unused_variables)]
                $expectation {
                    call_match: self,
                    action: Some(move |$($arg,)*| result),
                }
            }

            pub fn and_panic(self, msg: String)
            -> $expectation<$($Arg,)* Res, impl FnOnce($($Arg,)*) -> Res> {
                #[allow(unused_variables)]
                $expectation {
                    call_match: self,
                    action: Some(move |$($arg,)*| -> Res { panic!("{}", msg) }),
                }
            }

            pub fn and_call<F>(self, func: F)
            -> $expectation<$($Arg,)* Res, impl FnOnce($($Arg,)*) -> Res>
            where
                F: FnOnce($($Arg,)*) -> Res + 'static,
            {
                $expectation {
                    call_match: self,
                    action: Some(func),
                }
            }

            pub fn never(self) -> ExpectationNever<Self> {
                ExpectationNever { call_match: self }
            }
        }

        impl<$($Arg: 'static,)* Res: Clone + 'static> $call_match<$($Arg,)* Res> {
            pub fn and_return_clone(self, result: Res) -> $reaction<$($Arg,)* Res> {
                #[allow(unused_variables)]
                $reaction {
                    call_match: self,
                    action: Rc::new(RefCell::new(move |$($arg,)*| result.clone())),
                }
            }
        }

        impl<$($Arg: 'static,)* Res> $call_match<$($Arg,)* Res> {
            pub fn and_call_clone<F>(self, func: F) -> $reaction<$($Arg,)* Res>
            where
                F: FnMut($($Arg,)*) -> Res + 'static,
            {
                $reaction {
                    call_match: self,
                    action: Rc::new(RefCell::new(func)),
                }
            }
        }

        impl<$($Arg: 'static,)* Res: Default + 'static> $call_match<$($Arg,)* Res> {
            pub fn and_return_default(self) -> $reaction<$($Arg,)* Res> {
                #[allow(unused_variables)]
                $reaction {
                    call_match: self,
                    action: Rc::new(RefCell::new(|$($arg,)*| Res::default())),
                }
            }
        }

        impl<$($Arg: 'static,)* Res> CallMatch for $call_match<$($Arg,)* Res> {
            #[allow(unused_variables)]
            fn matches_args(&self, call: &Call) -> bool {
                assert!(
                    call.method_data.mock_type_id == self.mock_type_id
                        && call.method_data.method_name == self.method_name
                );

                let __args = Self::get_args_ref(call);

                true $(&& self.$arg.matches(&__args.$n).is_ok())*
            }
            #[allow(unused_variables)]
            fn validate(&self, call: &Call) -> Vec<Result<(), String>> {
                let __args = Self::get_args_ref(call);
                vec![$(self.$arg.matches(&__args.$n)),*]
            }
            fn get_mock_id(&self) -> usize {
                self.mock_id
            }
            fn get_mock_type_id(&self) -> usize {
                self.mock_type_id
            }
            fn get_method_name(&self) -> &'static str {
                self.method_name
            }
            fn describe(&self) -> String {
                let args: &[&dyn std::fmt::Display] = &[$(&self.$arg.describe()),*];
                format!("{}({})", self.get_method_name(), args.iter().format(", "))
            }
        }
    }
}

define_all!((CallMatch0, Reaction0, ActionClone0, Satisfy0, SatisfyClone0, Expectation0, ExpectationTimes0) {
});
define_all!((CallMatch1, Reaction1, ActionClone1, Satisfy1, SatisfyClone1, Expectation1, ExpectationTimes1) {
    (0, arg0, Arg0)
});
define_all!((CallMatch2, Reaction2, ActionClone2, Satisfy2, SatisfyClone2, Expectation2, ExpectationTimes2) {
    (0, arg0, Arg0), (1, arg1, Arg1)
});
define_all!((CallMatch3, Reaction3, ActionClone3, Satisfy3, SatisfyClone3, Expectation3, ExpectationTimes3) {
    (0, arg0, Arg0), (1, arg1, Arg1), (2, arg2, Arg2)
});
define_all!((CallMatch4, Reaction4, ActionClone4, Satisfy4, SatisfyClone4, Expectation4, ExpectationTimes4) {
    (0, arg0, Arg0), (1, arg1, Arg1), (2, arg2, Arg2), (3, arg3, Arg3)
});

/// Argument matcher
///
/// Basically it is predicate telling whether argument
/// value satisfies to some criteria. However, in case
/// of mismatch it explains what and why doesn't match.
pub trait MatchArg<T> {
    fn matches(&self, arg: &T) -> Result<(), String>;
    fn describe(&self) -> String;
}

/// Matches argument with value of same type using equality.
impl<T: Eq + Debug> MatchArg<T> for T {
    fn matches(&self, arg: &T) -> Result<(), String> {
        if self == arg {
            Ok(())
        } else {
            Err(format!("{:?} is not equal to {:?}", arg, self))
        }
    }

    fn describe(&self) -> String {
        format!("{:?}", self)
    }
}

/// Expectations which must be satisfied in exactly the order
/// they were added.
#[derive(Default)]
pub struct Sequence {
    expectations: Vec<Box<dyn Expectation>>,
}
impl Sequence {
    pub fn new() -> Self {
        Sequence {
            expectations: Vec::new(),
        }
    }

    pub fn expect<E: Expectation + 'static>(&mut self, expectation: E) {
        assert!(!expectation.is_satisfied());
        self.expectations.push(Box::new(expectation));
    }
}
impl Expectation for Sequence {
    fn call_match(&self) -> &dyn CallMatch {
        self.expectations[0].call_match()
    }
    fn is_satisfied(&self) -> bool {
        self.expectations.is_empty()
    }
    fn satisfy(&mut self, call: Call, mock_name: &str) -> Box<dyn Satisfy> {
        let (res, remove) = {
            let exp = &mut self.expectations[0];
            let res = exp.satisfy(call, mock_name);
            (res, exp.is_satisfied())
        };

        if remove {
            self.expectations.remove(0);
        }

        res
    }
    fn describe(&self) -> String {
        self.expectations[0].describe()
    }

    // An exhausted sequence has no head expectation to delegate to, so
    // it must not match anything while it waits for drop-time cleanup.
    fn matches_call(&self, call: &Call) -> bool {
        !self.expectations.is_empty() && self.expectations[0].matches_call(call)
    }
}

/// Contract for hand-written mock structs: they are created by `Scenario`
/// and keep a reference to its internals to report performed calls.
pub trait Mock {
    fn new(id: usize, scenario_int: Rc<RefCell<ScenarioInternals>>) -> Self;
    fn mocked_class_name() -> &'static str;
}

pub struct ScenarioInternals {
    expectations: Vec<Box<dyn Expectation>>,

    next_mock_id: usize,

    /// Mapping from mock ID to mock name.
    mock_names: HashMap<usize, Rc<String>>,
    /// Set of used mock names used to quickly check for conflicts.
    allocated_names: HashSet<Rc<String>>,
}

impl ScenarioInternals {
    fn get_next_mock_id(&mut self) -> usize {
        let id = self.next_mock_id;
        self.next_mock_id += 1;
        id
    }

    pub fn create_mock<T: Mock>(int: &Rc<RefCell<Self>>) -> T {
        let mut internals = int.borrow_mut();
        let mock_id = internals.get_next_mock_id();
        internals.generate_name_for_class(mock_id, T::mocked_class_name());
        T::new(mock_id, int.clone())
    }

    pub fn create_named_mock<T: Mock>(int: &Rc<RefCell<Self>>, name: String) -> T {
        let mut internals = int.borrow_mut();
        let mock_id = internals.get_next_mock_id();
        internals.register_name(mock_id, name);
        T::new(mock_id, int.clone())
    }

    fn generate_name_for_class(&mut self, mock_id: usize, class_name: &str) {
        for i in 0.. {
            let name = format!("{}#{}", class_name, i);
            if !self.allocated_names.contains(&name) {
                let name_rc = Rc::new(name);
                self.mock_names.insert(mock_id, name_rc.clone());
                self.allocated_names.insert(name_rc);
                break;
            }
        }
    }

    fn register_name(&mut self, mock_id: usize, name: String) {
        if self.allocated_names.contains(&name) {
            panic!("Mock name {} already used", name);
        }
        let name_rc = Rc::new(name);
        self.mock_names.insert(mock_id, name_rc.clone());
        self.allocated_names.insert(name_rc);
    }
}

pub struct Scenario {
    internals: Rc<RefCell<ScenarioInternals>>,
}

impl Scenario {
    pub fn new() -> Self {
        Scenario {
            internals: Rc::new(RefCell::new(ScenarioInternals {
                expectations: Vec::new(),
                next_mock_id: 0,

                mock_names: HashMap::new(),
                allocated_names: HashSet::new(),
            })),
        }
    }

    pub fn create_mock<T: Mock>(&self) -> T {
        ScenarioInternals::create_mock::<T>(&self.internals)
    }

    pub fn create_named_mock<T: Mock>(&self, name: String) -> T {
        ScenarioInternals::create_named_mock::<T>(&self.internals, name)
    }

    pub fn expect<C: Expectation + 'static>(&self, call: C) {
        self.internals
            .borrow_mut()
            .expectations
            .push(Box::new(call));
    }

    /// Verify that all current expectations are satisfied and
    /// start over from clean state.
    pub fn checkpoint(&self) {
        self.verify_expectations();
        self.internals.borrow_mut().expectations.clear();
    }

    fn verify_expectations(&self) {
        let int = self.internals.borrow();
        let expectations = &int.expectations;
        let mock_names = &int.mock_names;
        let mut active_expectations = expectations.iter().filter(|e| !e.is_satisfied()).peekable();
        if active_expectations.peek().is_some() {
            let mut s = String::from("Some expectations are not satisfied:\n");
            for expectation in active_expectations {
                let mock_name = mock_names
                    .get(&expectation.call_match().get_mock_id())
                    .expect("mock name is not registered");
                s.push_str(&format!("`{}.{}`\n", mock_name, expectation.describe()));
            }
            panic!("{}", s);
        }
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Scenario {
    fn drop(&mut self) {
        // Test is already failed, so it isn't necessary to check remaining
        // expectations. And if we do, then panic-during-drop will cause
        // test to fail with uncomprehensive message like:
        // "(signal: 4, SIGILL: illegal instruction)"
        if std::thread::panicking() {
            return;
        }

        self.verify_expectations();
    }
}

/// Performed call: method identity plus the argument tuple, type-erased.
/// Arguments are dropped normally if the call is never satisfied, e.g.
/// when matching fails and the scenario panics.
pub struct Call {
    pub method_data: MethodData,
    args: Option<Box<dyn Any>>,
    format_args: fn(&dyn Any) -> String,
}
impl Call {
    pub fn args_ref(&self) -> &dyn Any {
        self.args
            .as_deref()
            .expect("call arguments are already consumed")
    }

    pub fn take_args(&mut self) -> Box<dyn Any> {
        self.args
            .take()
            .expect("call arguments are already consumed")
    }
}

pub struct MethodData {
    /// Unique ID of mock object
    pub mock_id: usize,

    /// Unique ID of mock class
    pub mock_type_id: usize,

    /// Called method name
    pub method_name: &'static str,
}

macro_rules! define_verify {
    (
        $verify:ident { $(($n:tt, $arg:ident, $Arg:ident)),* }
    ) => {
        pub fn $verify<$($Arg: Debug + 'static,)* Res: 'static>(
            &mut self, method_data: MethodData$(, $arg: $Arg)*
        ) -> impl FnOnce() -> Res {
            #[allow(unused_variables)]
            fn format_args<$($Arg: Debug + 'static,)*>(args: &dyn Any) -> String {
                let __args = args
                    .downcast_ref::<($($Arg,)*)>()
                    .expect("call argument tuple has unexpected type");
                let args_debug: &[&dyn Debug] = &[$(&__args.$n),*];
                format!("{:?}", args_debug.iter().format(", "))
            }
            let call = Call {
                method_data,
                args: Some(Box::new(($($arg,)*))),
                format_args: format_args::<$($Arg,)*>,
            };
            let action = self.verify(call);
            move || {
                *action
                    .satisfy()
                    .downcast::<Res>()
                    .ok()
                    .expect("action result has unexpected type")
            }
        }
    }
}

impl ScenarioInternals {
    define_verify!(verify0 { });
    define_verify!(verify1 { (0, arg0, Arg0) });
    define_verify!(verify2 { (0, arg0, Arg0), (1, arg1, Arg1) });
    define_verify!(verify3 { (0, arg0, Arg0), (1, arg1, Arg1), (2, arg2, Arg2) });
    define_verify!(verify4 { (0, arg0, Arg0), (1, arg1, Arg1), (2, arg2, Arg2), (3, arg3, Arg3) });

    /// Verify call performed on mock object.
    /// Returns closure which returns result upon call.
    /// Closure returned instead of actual result, because expectation may
    /// use user-provided closure as action, and that closure may want to
    /// use scenario object to create mocks or establish expectations, so
    /// we need to release scenario borrow before calling expectation action.
    fn verify(&mut self, call: Call) -> Box<dyn Satisfy> {
        for expectation in self.expectations.iter_mut().rev() {
            if expectation.matches_call(&call) {
                let mock_name = self
                    .mock_names
                    .get(&call.method_data.mock_id)
                    .expect("mock name is not registered")
                    .clone();
                return expectation.satisfy(call, &mock_name);
            }
        }

        // No expectations exactly matching call are found. However this may be
        // because of unexpected argument values. So check active expectations
        // with matching target (i.e. mock and method) and validate arguments.
        let mock_name = self
            .mock_names
            .get(&call.method_data.mock_id)
            .expect("mock name is not registered");

        let mut msg = String::new();
        msg.push_str("\n\n");
        write!(
            &mut msg,
            concat!(
                colored!(red: "error:"),
                " ",
                colored!(bold: "unexpected call to `{}.{}({})`\n\n")
            ),
            mock_name,
            call.method_data.method_name,
            (call.format_args)(call.args_ref())
        )
        .unwrap();

        if self.expectations.is_empty() {
            msg.push_str("no call are expected");
            panic!("{}", msg);
        }

        let mut target_first_match = true;
        for expectation in self.expectations.iter().rev() {
            if !expectation.is_satisfied() && expectation.call_match().matches_method(&call) {
                if target_first_match {
                    write!(
                        &mut msg,
                        concat!(
                            colored!(green: "note: "),
                            "here are active expectations for {}.{}\n"
                        ),
                        mock_name, call.method_data.method_name
                    )
                    .unwrap();
                    target_first_match = false;
                }

                write!(
                    &mut msg,
                    "\n  expectation `{}.{}`:\n",
                    mock_name,
                    expectation.describe()
                )
                .unwrap();
                for (index, res) in expectation.call_match().validate(&call).iter().enumerate() {
                    if let Err(ref err) = *res {
                        write!(
                            &mut msg,
                            concat!("    arg #{}: ", colored!(bold: "{}"), "\n"),
                            index, err
                        )
                        .unwrap();
                    }
                }
            }
        }

        if target_first_match {
            write!(
                &mut msg,
                concat!(
                    colored!(green: "note: "),
                    "there are no active expectations for {}.{}\n"
                ),
                mock_name, call.method_data.method_name
            )
            .unwrap();
        }

        let mut method_first_match = true;
        for expectation in self.expectations.iter().rev() {
            if !expectation.is_satisfied()
                && !expectation.call_match().matches_target(&call)
                && expectation.call_match().matches_method(&call)
                && expectation.call_match().matches_args(&call)
            {
                if method_first_match {
                    msg.push_str(concat!(
                        colored!(green: "note: "),
                        "there are matching expectations for another mock objects\n"
                    ));
                    method_first_match = false;
                }

                let other_mock_id = &expectation.call_match().get_mock_id();
                let other_mock_name = self
                    .mock_names
                    .get(other_mock_id)
                    .expect("mock name is not registered");
                write!(
                    &mut msg,
                    concat!("\n  expectation `", colored!(bold: "{}"), ".{}`\n"),
                    other_mock_name,
                    expectation.describe()
                )
                .unwrap();
            }
        }

        msg.push('\n');
        panic!("{}", msg);
    }
}

fn format_ordinal(n: u32) -> String {
    // 11, 12 and 13 take "th" despite their last digit.
    if let 11..=13 = n % 100 {
        return format!("{}th", n);
    }
    match n % 10 {
        1 => format!("{}st", n),
        2 => format!("{}nd", n),
        3 => format!("{}rd", n),
        _ => format!("{}th", n),
    }
}
