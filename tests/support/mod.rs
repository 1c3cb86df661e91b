#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use standin::{CallMatch0, CallMatch1, MatchArg, MethodData, Mock, ScenarioInternals};

pub trait Journal {
    fn note(&self, entry: i32);
    fn consume(&self, data: Rc<String>);
    fn flush(&self) -> i32;
}

const JOURNAL_TYPE_ID: usize = 0;

pub struct JournalMock {
    scenario: Rc<RefCell<ScenarioInternals>>,
    mock_id: usize,
}

impl Mock for JournalMock {
    fn new(id: usize, scenario_int: Rc<RefCell<ScenarioInternals>>) -> Self {
        JournalMock {
            scenario: scenario_int,
            mock_id: id,
        }
    }

    fn mocked_class_name() -> &'static str {
        "Journal"
    }
}

impl JournalMock {
    pub fn note_call<A0>(&self, entry: A0) -> CallMatch1<i32, ()>
    where
        A0: MatchArg<i32> + 'static,
    {
        CallMatch1::new(self.mock_id, JOURNAL_TYPE_ID, "note", Box::new(entry))
    }

    pub fn consume_call<A0>(&self, data: A0) -> CallMatch1<Rc<String>, ()>
    where
        A0: MatchArg<Rc<String>> + 'static,
    {
        CallMatch1::new(self.mock_id, JOURNAL_TYPE_ID, "consume", Box::new(data))
    }

    pub fn flush_call(&self) -> CallMatch0<i32> {
        CallMatch0::new(self.mock_id, JOURNAL_TYPE_ID, "flush")
    }
}

impl Journal for JournalMock {
    fn note(&self, entry: i32) {
        let method_data = MethodData {
            mock_id: self.mock_id,
            mock_type_id: JOURNAL_TYPE_ID,
            method_name: "note",
        };
        let action = self.scenario.borrow_mut().verify1(method_data, entry);
        action()
    }

    fn consume(&self, data: Rc<String>) {
        let method_data = MethodData {
            mock_id: self.mock_id,
            mock_type_id: JOURNAL_TYPE_ID,
            method_name: "consume",
        };
        let action = self.scenario.borrow_mut().verify1(method_data, data);
        action()
    }

    fn flush(&self) -> i32 {
        let method_data = MethodData {
            mock_id: self.mock_id,
            mock_type_id: JOURNAL_TYPE_ID,
            method_name: "flush",
        };
        let action = self.scenario.borrow_mut().verify0(method_data);
        action()
    }
}
