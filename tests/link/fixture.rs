//! Shared fixture exercising every expectation, reaction and matcher
//! kind against a hand-written mock. The fixture is included from two
//! test binaries so that every generic type involved is instantiated
//! and linked in two independent compilation units.

use std::cell::{Cell, RefCell};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};

use standin::actions;
use standin::matchers::{
    and, any, cast, check, container_eq, contains_regex, deref, elements_are_array, ends_with,
    eq, eq_ignore_case, field_of, float_eq, ge, gt, has_substr, in_range, le, lt, matches_regex,
    nan_sensitive_float_eq, ne, ne_ignore_case, none, not, or, result_of, same_instance, some,
    starts_with, ANY,
};
use standin::{arg, check as check_pat, elements_are};
use standin::{CallMatch0, CallMatch1, CallMatch2, MatchArg, MethodData, Mock, Scenario,
              ScenarioInternals};

#[derive(Debug)]
pub struct Gauge {
    pub level: i32,
}

impl Gauge {
    pub fn level(&self) -> i32 {
        self.level
    }
}

pub trait Device {
    fn log(&self, line: &'static str);
    fn render(&self, template: &'static str) -> &'static str;
    fn parse(&self, input: &'static str) -> i32;
    fn counter(&self) -> &'static i32;
    fn lookup(&self, key: Option<&'static str>) -> Option<&'static str>;
    fn subscribe(&self, callback: fn(&'static str));
    fn observe(&self, value: &'static i32);
    fn inspect(&self, gauge: &'static Gauge);
    fn set_ratio(&self, ratio: f32);
    fn set_scale(&self, scale: f64);
    fn push_all(&self, values: Vec<i32>);
    fn fill(&self, slot: Rc<Cell<i32>>);
    fn fill_buf(&self, buf: Rc<RefCell<Vec<i32>>>);
    fn check_level(&self, level: i32) -> bool;
    fn configure(&self, name: &'static str, retries: i32) -> i32;
}

const DEVICE_TYPE_ID: usize = 0;

pub struct DeviceMock {
    scenario: Rc<RefCell<ScenarioInternals>>,
    mock_id: usize,
}

impl Mock for DeviceMock {
    fn new(id: usize, scenario_int: Rc<RefCell<ScenarioInternals>>) -> Self {
        DeviceMock {
            scenario: scenario_int,
            mock_id: id,
        }
    }

    fn mocked_class_name() -> &'static str {
        "Device"
    }
}

impl DeviceMock {
    fn method_data(&self, method_name: &'static str) -> MethodData {
        MethodData {
            mock_id: self.mock_id,
            mock_type_id: DEVICE_TYPE_ID,
            method_name,
        }
    }

    pub fn log_call<A0>(&self, line: A0) -> CallMatch1<&'static str, ()>
    where
        A0: MatchArg<&'static str> + 'static,
    {
        CallMatch1::new(self.mock_id, DEVICE_TYPE_ID, "log", Box::new(line))
    }

    pub fn render_call<A0>(&self, template: A0) -> CallMatch1<&'static str, &'static str>
    where
        A0: MatchArg<&'static str> + 'static,
    {
        CallMatch1::new(self.mock_id, DEVICE_TYPE_ID, "render", Box::new(template))
    }

    pub fn parse_call<A0>(&self, input: A0) -> CallMatch1<&'static str, i32>
    where
        A0: MatchArg<&'static str> + 'static,
    {
        CallMatch1::new(self.mock_id, DEVICE_TYPE_ID, "parse", Box::new(input))
    }

    pub fn counter_call(&self) -> CallMatch0<&'static i32> {
        CallMatch0::new(self.mock_id, DEVICE_TYPE_ID, "counter")
    }

    pub fn lookup_call<A0>(&self, key: A0) -> CallMatch1<Option<&'static str>, Option<&'static str>>
    where
        A0: MatchArg<Option<&'static str>> + 'static,
    {
        CallMatch1::new(self.mock_id, DEVICE_TYPE_ID, "lookup", Box::new(key))
    }

    pub fn subscribe_call<A0>(&self, callback: A0) -> CallMatch1<fn(&'static str), ()>
    where
        A0: MatchArg<fn(&'static str)> + 'static,
    {
        CallMatch1::new(self.mock_id, DEVICE_TYPE_ID, "subscribe", Box::new(callback))
    }

    pub fn observe_call<A0>(&self, value: A0) -> CallMatch1<&'static i32, ()>
    where
        A0: MatchArg<&'static i32> + 'static,
    {
        CallMatch1::new(self.mock_id, DEVICE_TYPE_ID, "observe", Box::new(value))
    }

    pub fn inspect_call<A0>(&self, gauge: A0) -> CallMatch1<&'static Gauge, ()>
    where
        A0: MatchArg<&'static Gauge> + 'static,
    {
        CallMatch1::new(self.mock_id, DEVICE_TYPE_ID, "inspect", Box::new(gauge))
    }

    pub fn set_ratio_call<A0>(&self, ratio: A0) -> CallMatch1<f32, ()>
    where
        A0: MatchArg<f32> + 'static,
    {
        CallMatch1::new(self.mock_id, DEVICE_TYPE_ID, "set_ratio", Box::new(ratio))
    }

    pub fn set_scale_call<A0>(&self, scale: A0) -> CallMatch1<f64, ()>
    where
        A0: MatchArg<f64> + 'static,
    {
        CallMatch1::new(self.mock_id, DEVICE_TYPE_ID, "set_scale", Box::new(scale))
    }

    pub fn push_all_call<A0>(&self, values: A0) -> CallMatch1<Vec<i32>, ()>
    where
        A0: MatchArg<Vec<i32>> + 'static,
    {
        CallMatch1::new(self.mock_id, DEVICE_TYPE_ID, "push_all", Box::new(values))
    }

    pub fn fill_call<A0>(&self, slot: A0) -> CallMatch1<Rc<Cell<i32>>, ()>
    where
        A0: MatchArg<Rc<Cell<i32>>> + 'static,
    {
        CallMatch1::new(self.mock_id, DEVICE_TYPE_ID, "fill", Box::new(slot))
    }

    pub fn fill_buf_call<A0>(&self, buf: A0) -> CallMatch1<Rc<RefCell<Vec<i32>>>, ()>
    where
        A0: MatchArg<Rc<RefCell<Vec<i32>>>> + 'static,
    {
        CallMatch1::new(self.mock_id, DEVICE_TYPE_ID, "fill_buf", Box::new(buf))
    }

    pub fn check_level_call<A0>(&self, level: A0) -> CallMatch1<i32, bool>
    where
        A0: MatchArg<i32> + 'static,
    {
        CallMatch1::new(self.mock_id, DEVICE_TYPE_ID, "check_level", Box::new(level))
    }

    pub fn configure_call<A0, A1>(&self, name: A0, retries: A1) -> CallMatch2<&'static str, i32, i32>
    where
        A0: MatchArg<&'static str> + 'static,
        A1: MatchArg<i32> + 'static,
    {
        CallMatch2::new(
            self.mock_id,
            DEVICE_TYPE_ID,
            "configure",
            Box::new(name),
            Box::new(retries),
        )
    }
}

impl Device for DeviceMock {
    fn log(&self, line: &'static str) {
        let method_data = self.method_data("log");
        let action = self.scenario.borrow_mut().verify1(method_data, line);
        action()
    }

    fn render(&self, template: &'static str) -> &'static str {
        let method_data = self.method_data("render");
        let action = self.scenario.borrow_mut().verify1(method_data, template);
        action()
    }

    fn parse(&self, input: &'static str) -> i32 {
        let method_data = self.method_data("parse");
        let action = self.scenario.borrow_mut().verify1(method_data, input);
        action()
    }

    fn counter(&self) -> &'static i32 {
        let method_data = self.method_data("counter");
        let action = self.scenario.borrow_mut().verify0(method_data);
        action()
    }

    fn lookup(&self, key: Option<&'static str>) -> Option<&'static str> {
        let method_data = self.method_data("lookup");
        let action = self.scenario.borrow_mut().verify1(method_data, key);
        action()
    }

    fn subscribe(&self, callback: fn(&'static str)) {
        let method_data = self.method_data("subscribe");
        let action = self.scenario.borrow_mut().verify1(method_data, callback);
        action()
    }

    fn observe(&self, value: &'static i32) {
        let method_data = self.method_data("observe");
        let action = self.scenario.borrow_mut().verify1(method_data, value);
        action()
    }

    fn inspect(&self, gauge: &'static Gauge) {
        let method_data = self.method_data("inspect");
        let action = self.scenario.borrow_mut().verify1(method_data, gauge);
        action()
    }

    fn set_ratio(&self, ratio: f32) {
        let method_data = self.method_data("set_ratio");
        let action = self.scenario.borrow_mut().verify1(method_data, ratio);
        action()
    }

    fn set_scale(&self, scale: f64) {
        let method_data = self.method_data("set_scale");
        let action = self.scenario.borrow_mut().verify1(method_data, scale);
        action()
    }

    fn push_all(&self, values: Vec<i32>) {
        let method_data = self.method_data("push_all");
        let action = self.scenario.borrow_mut().verify1(method_data, values);
        action()
    }

    fn fill(&self, slot: Rc<Cell<i32>>) {
        let method_data = self.method_data("fill");
        let action = self.scenario.borrow_mut().verify1(method_data, slot);
        action()
    }

    fn fill_buf(&self, buf: Rc<RefCell<Vec<i32>>>) {
        let method_data = self.method_data("fill_buf");
        let action = self.scenario.borrow_mut().verify1(method_data, buf);
        action()
    }

    fn check_level(&self, level: i32) -> bool {
        let method_data = self.method_data("check_level");
        let action = self.scenario.borrow_mut().verify1(method_data, level);
        action()
    }

    fn configure(&self, name: &'static str, retries: i32) -> i32 {
        let method_data = self.method_data("configure");
        let action = self
            .scenario
            .borrow_mut()
            .verify2(method_data, name, retries);
        action()
    }
}

/// Delegation target for reactions calling a method on a captured object.
pub struct Probe {
    offset: i32,
}

impl Probe {
    pub fn new(offset: i32) -> Self {
        Probe { offset }
    }

    pub fn measure(&self, input: &'static str) -> i32 {
        input.len() as i32 + self.offset
    }
}

fn parse_one(_input: &'static str) -> i32 {
    1
}

fn reject_all() -> impl FnOnce(i32) -> bool {
    |_| false
}

fn accept_above(threshold: i32) -> impl FnOnce(i32) -> bool {
    move |level| level > threshold
}

fn accept_either(first: i32, second: i32) -> impl FnOnce(i32) -> bool {
    move |level| level == first || level == second
}

/// Runs a one-shot scenario checking `level` against `matcher`.
fn level_accepted<M: MatchArg<i32> + 'static>(matcher: M, level: i32) -> bool {
    let scenario = Scenario::new();
    let device = scenario.create_mock::<DeviceMock>();
    scenario.expect(device.check_level_call(matcher).and_return(true));
    device.check_level(level)
}

/// Runs a one-shot scenario checking `line` against `matcher`.
/// Panics on mismatch.
fn line_accepted<M: MatchArg<&'static str> + 'static>(matcher: M, line: &'static str) {
    let scenario = Scenario::new();
    let device = scenario.create_mock::<DeviceMock>();
    scenario.expect(device.log_call(matcher).and_return(()));
    device.log(line);
}

#[test]
fn returns_fixed_value() {
    let scenario = Scenario::new();
    let device = scenario.create_mock::<DeviceMock>();

    scenario.expect(device.parse_call(ANY).and_return(1));
    assert_eq!(device.parse("anything"), 1);
}

#[test]
fn returns_absent_value() {
    let scenario = Scenario::new();
    let device = scenario.create_mock::<DeviceMock>();

    scenario.expect(device.lookup_call(ANY).and_return(None));
    assert_eq!(device.lookup(Some("key")), None);
}

#[test]
fn returns_static_reference() {
    static COUNTER: i32 = 7;

    let scenario = Scenario::new();
    let device = scenario.create_mock::<DeviceMock>();

    scenario.expect(device.counter_call().and_return(&COUNTER));
    assert!(std::ptr::eq(device.counter(), &COUNTER));
}

#[test]
fn returns_reference_value_unchanged() {
    static RENDERED: &str = "rendered";

    let scenario = Scenario::new();
    let device = scenario.create_mock::<DeviceMock>();

    scenario.expect(device.render_call(ANY).and_return(RENDERED));
    assert!(std::ptr::eq(device.render("template"), RENDERED));
}

#[test]
fn assigns_shared_cell() {
    let slot = Rc::new(Cell::new(0));

    let scenario = Scenario::new();
    let device = scenario.create_mock::<DeviceMock>();

    scenario.expect(device.log_call(ANY).and_call(actions::assign(&slot, 5)));
    device.log("ignored");
    assert_eq!(slot.get(), 5);
}

#[test]
fn writes_through_out_param() {
    let slot = Rc::new(Cell::new(0));

    let scenario = Scenario::new();
    let device = scenario.create_mock::<DeviceMock>();

    scenario.expect(device.fill_call(ANY).and_call(actions::set_slot(3)));
    device.fill(Rc::clone(&slot));
    assert_eq!(slot.get(), 3);
}

#[test]
fn fills_buffer() {
    let buf = Rc::new(RefCell::new(vec![9]));

    let scenario = Scenario::new();
    let device = scenario.create_mock::<DeviceMock>();

    scenario.expect(device.fill_buf_call(ANY).and_call(actions::fill_with(&[1, 2, 3])));
    device.fill_buf(Rc::clone(&buf));
    assert_eq!(*buf.borrow(), vec![1, 2, 3]);
}

#[test]
fn sets_error_and_returns() {
    let errno = Rc::new(Cell::new(0));

    let scenario = Scenario::new();
    let device = scenario.create_mock::<DeviceMock>();

    scenario.expect(
        device
            .parse_call(ANY)
            .and_call(actions::set_error_and_return(&errno, 7, -1)),
    );
    assert_eq!(device.parse("bad input"), -1);
    assert_eq!(errno.get(), 7);
}

#[test]
fn calls_free_function() {
    let scenario = Scenario::new();
    let device = scenario.create_mock::<DeviceMock>();

    scenario.expect(device.parse_call(ANY).and_call(parse_one));
    assert_eq!(device.parse("anything"), 1);
}

#[test]
fn calls_method_on_captured_object() {
    let probe = Probe::new(10);

    let scenario = Scenario::new();
    let device = scenario.create_mock::<DeviceMock>();

    scenario.expect(
        device
            .parse_call(ANY)
            .and_call(move |input| probe.measure(input)),
    );
    assert_eq!(device.parse("abc"), 13);
}

#[test]
fn calls_without_args() {
    let scenario = Scenario::new();
    let device = scenario.create_mock::<DeviceMock>();

    scenario.expect(device.parse_call(ANY).and_call(actions::without_args(|| 2)));
    assert_eq!(device.parse("ignored"), 2);
}

#[test]
fn invokes_callback_argument() {
    static SEEN_LINES: AtomicUsize = AtomicUsize::new(0);
    fn record_line(line: &'static str) {
        assert_eq!(line, "hello");
        SEEN_LINES.fetch_add(1, Ordering::SeqCst);
    }

    let scenario = Scenario::new();
    let device = scenario.create_mock::<DeviceMock>();

    let before = SEEN_LINES.load(Ordering::SeqCst);
    scenario.expect(
        device
            .subscribe_call(ANY)
            .and_call(actions::invoke_arg("hello")),
    );
    device.subscribe(record_line);
    assert_eq!(SEEN_LINES.load(Ordering::SeqCst), before + 1);
}

#[test]
fn selects_argument() {
    let scenario = Scenario::new();
    let device = scenario.create_mock::<DeviceMock>();

    scenario.expect(
        device
            .parse_call(ANY)
            .and_call(actions::with_arg(|input: &'static str| input.len() as i32)),
    );
    assert_eq!(device.parse("abcd"), 4);
}

#[test]
fn selects_first_argument() {
    let scenario = Scenario::new();
    let device = scenario.create_mock::<DeviceMock>();

    scenario.expect(
        device
            .configure_call(ANY, ANY)
            .and_call(actions::with_first(|name: &'static str| name.len() as i32)),
    );
    assert_eq!(device.configure("abc", 9), 3);
}

#[test]
fn selects_second_argument() {
    let scenario = Scenario::new();
    let device = scenario.create_mock::<DeviceMock>();

    scenario.expect(
        device
            .configure_call(ANY, ANY)
            .and_call(actions::with_second(|retries: i32| retries + 1)),
    );
    assert_eq!(device.configure("db", 2), 3);
}

#[test]
fn performs_both_actions() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);

    let scenario = Scenario::new();
    let device = scenario.create_mock::<DeviceMock>();

    scenario.expect(device.parse_call(ANY).and_call(actions::do_all(
        move |input: &'static str| sink.borrow_mut().push(input),
        actions::ret(3),
    )));
    assert_eq!(device.parse("logged"), 3);
    assert_eq!(*seen.borrow(), vec!["logged"]);
}

#[test]
fn falls_back_to_default_result() {
    let scenario = Scenario::new();
    let device = scenario.create_mock::<DeviceMock>();

    scenario.expect(device.parse_call(ANY).and_return_default().times(..));
    assert_eq!(device.parse("first"), 0);
    assert_eq!(device.parse("second"), 0);
}

#[test]
fn discards_result() {
    let scenario = Scenario::new();
    let device = scenario.create_mock::<DeviceMock>();

    scenario.expect(
        device
            .log_call(ANY)
            .and_call(actions::ignore_result(|line: &'static str| line.len())),
    );
    device.log("discarded");
}

#[test]
fn panics_on_call() {
    let scenario = Scenario::new();
    let device = scenario.create_mock::<DeviceMock>();

    scenario.expect(device.parse_call(ANY).and_panic("parse failure".to_owned()));
    let result = catch_unwind(AssertUnwindSafe(|| device.parse("boom")));
    assert!(result.is_err());
}

#[test]
fn user_reaction_without_params() {
    let scenario = Scenario::new();
    let device = scenario.create_mock::<DeviceMock>();

    scenario.expect(device.check_level_call(ANY).and_call(reject_all()));
    assert!(!device.check_level(100));
}

#[test]
fn user_reaction_with_param() {
    let scenario = Scenario::new();
    let device = scenario.create_mock::<DeviceMock>();

    scenario.expect(device.check_level_call(ANY).and_call(accept_above(10)));
    assert!(device.check_level(11));
}

#[test]
fn user_reaction_with_two_params() {
    let scenario = Scenario::new();
    let device = scenario.create_mock::<DeviceMock>();

    scenario.expect(device.check_level_call(ANY).and_call(accept_either(1, 2)));
    assert!(device.check_level(1));
}

#[test]
fn matches_value_exactly() {
    let scenario = Scenario::new();
    let device = scenario.create_mock::<DeviceMock>();

    scenario.expect(device.parse_call("input").and_return(1));
    assert_eq!(device.parse("input"), 1);
}

#[test]
fn matches_relations() {
    assert!(level_accepted(eq(5), 5));
    assert!(level_accepted(ne(5), 6));
    assert!(level_accepted(ge(10), 10));
    assert!(level_accepted(gt(10), 11));
    assert!(level_accepted(le(3), 3));
    assert!(level_accepted(lt(3), 2));
    assert!(level_accepted(in_range(0..10), 4));
}

#[test]
fn matches_pinned_type() {
    let scenario = Scenario::new();
    let device = scenario.create_mock::<DeviceMock>();

    scenario.expect(device.configure_call(ANY, eq::<i32>(5)).and_return(0));
    assert_eq!(device.configure("db", 5), 0);
}

#[test]
fn matches_present_value() {
    let scenario = Scenario::new();
    let device = scenario.create_mock::<DeviceMock>();

    scenario.expect(device.lookup_call(some(ANY)).and_return(Some("found")));
    assert_eq!(device.lookup(Some("key")), Some("found"));
}

#[test]
fn matches_absent_value() {
    let scenario = Scenario::new();
    let device = scenario.create_mock::<DeviceMock>();

    scenario.expect(device.lookup_call(none()).and_return(None));
    assert_eq!(device.lookup(None), None);
}

#[test]
fn matches_by_pattern() {
    let scenario = Scenario::new();
    let device = scenario.create_mock::<DeviceMock>();

    scenario.expect(device.lookup_call(arg!(Some(_))).and_return(None));
    assert_eq!(device.lookup(Some("key")), None);
}

#[test]
fn matches_same_instance() {
    static LEVEL: i32 = 7;

    let scenario = Scenario::new();
    let device = scenario.create_mock::<DeviceMock>();

    scenario.expect(device.observe_call(same_instance(&LEVEL)).and_return(()));
    device.observe(&LEVEL);
}

#[test]
fn matches_pointee() {
    static LEVEL: i32 = 7;

    let scenario = Scenario::new();
    let device = scenario.create_mock::<DeviceMock>();

    scenario.expect(device.observe_call(deref(eq(7))).and_return(()));
    device.observe(&LEVEL);
}

#[test]
fn matches_approximate_float() {
    let scenario = Scenario::new();
    let device = scenario.create_mock::<DeviceMock>();

    scenario.expect(device.set_ratio_call(float_eq(0.25f32)).and_return(()));
    device.set_ratio(0.25);
}

#[test]
fn matches_approximate_double() {
    let scenario = Scenario::new();
    let device = scenario.create_mock::<DeviceMock>();

    scenario.expect(device.set_scale_call(float_eq(2.5f64)).and_return(()));
    device.set_scale(2.5);
}

#[test]
fn matches_nan_aware_float() {
    let scenario = Scenario::new();
    let device = scenario.create_mock::<DeviceMock>();

    scenario.expect(
        device
            .set_ratio_call(nan_sensitive_float_eq(f32::NAN))
            .and_return(()),
    );
    device.set_ratio(f32::NAN);
}

#[test]
fn matches_nan_aware_double() {
    let scenario = Scenario::new();
    let device = scenario.create_mock::<DeviceMock>();

    scenario.expect(
        device
            .set_scale_call(nan_sensitive_float_eq(f64::NAN))
            .and_return(()),
    );
    device.set_scale(f64::NAN);
}

#[test]
fn matches_string_fragments() {
    line_accepted(starts_with("warn"), "warn: low");
    line_accepted(ends_with("done"), "all done");
    line_accepted(has_substr("mid"), "a mid b");
}

#[test]
fn matches_regular_expressions() {
    line_accepted(matches_regex(r"\d{4}"), "2026");
    line_accepted(contains_regex(r"v\d+"), "release v12");
}

#[test]
fn matches_ignoring_case() {
    line_accepted(eq_ignore_case("HELLO"), "hello");
    line_accepted(ne_ignore_case("bye"), "later");
}

#[test]
fn matches_sequence_elementwise() {
    let scenario = Scenario::new();
    let device = scenario.create_mock::<DeviceMock>();

    scenario.expect(
        device
            .push_all_call(elements_are![eq(1), ANY, gt(2)])
            .and_return(()),
    );
    device.push_all(vec![1, 9, 3]);
}

#[test]
fn matches_sequence_against_array() {
    let scenario = Scenario::new();
    let device = scenario.create_mock::<DeviceMock>();

    scenario.expect(
        device
            .push_all_call(elements_are_array(&[1, 2, 3]))
            .and_return(()),
    );
    device.push_all(vec![1, 2, 3]);
}

#[test]
fn matches_container_as_whole() {
    let scenario = Scenario::new();
    let device = scenario.create_mock::<DeviceMock>();

    scenario.expect(device.push_all_call(container_eq(vec![1, 2, 3])).and_return(()));
    device.push_all(vec![1, 2, 3]);
}

#[test]
fn matches_struct_field() {
    static GAUGE: Gauge = Gauge { level: 0 };

    let scenario = Scenario::new();
    let device = scenario.create_mock::<DeviceMock>();

    scenario.expect(
        device
            .inspect_call(field_of(|g: &&'static Gauge| &g.level, eq(0)))
            .and_return(()),
    );
    device.inspect(&GAUGE);
}

#[test]
fn matches_struct_field_through_pointer() {
    static GAUGE: Gauge = Gauge { level: 0 };

    let scenario = Scenario::new();
    let device = scenario.create_mock::<DeviceMock>();

    scenario.expect(
        device
            .inspect_call(deref(field_of(|g: &Gauge| &g.level, eq(0))))
            .and_return(()),
    );
    device.inspect(&GAUGE);
}

#[test]
fn matches_accessor_result() {
    static GAUGE: Gauge = Gauge { level: 1 };

    let scenario = Scenario::new();
    let device = scenario.create_mock::<DeviceMock>();

    scenario.expect(
        device
            .inspect_call(result_of(|g: &&'static Gauge| g.level(), eq(1)))
            .and_return(()),
    );
    device.inspect(&GAUGE);
}

#[test]
fn matches_by_predicate() {
    assert!(level_accepted(check(|level: &i32| *level > 0), 1));
    assert!(level_accepted(check_pat!(|level: &i32| *level % 2 == 0), 4));
}

#[test]
fn combines_matchers() {
    assert!(level_accepted(and(gt(0), lt(10)), 5));
    assert!(level_accepted(or(eq(0), eq(100)), 100));
    assert!(level_accepted(not(in_range(0..10)), 42));
}

#[test]
fn adapts_matcher_type() {
    let scenario = Scenario::new();
    let device = scenario.create_mock::<DeviceMock>();

    scenario.expect(
        device
            .configure_call(ANY, cast::<i32, i64, _>(eq(42i64)))
            .and_return(0),
    );
    assert_eq!(device.configure("db", 42), 0);
}

#[test]
fn matches_any_value() {
    let scenario = Scenario::new();
    let device = scenario.create_mock::<DeviceMock>();

    scenario.expect(
        device
            .configure_call(any::<&'static str>(), any::<i32>())
            .and_return(0),
    );
    assert_eq!(device.configure("anything", -3), 0);
}
