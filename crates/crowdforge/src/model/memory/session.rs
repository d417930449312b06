use crate::ids::AccountAddress;
use std::cell::RefCell;

thread_local! {
    static SESSION: RefCell<Option<AccountAddress>> = const { RefCell::new(None) };
}

///
/// Session
///
/// The wallet connection, or the absence of one. Derived queries that need
/// an account short-circuit to their negative answer when nothing is
/// connected.
///

pub struct Session;

impl Session {
    #[must_use]
    pub fn account() -> Option<AccountAddress> {
        SESSION.with_borrow(Clone::clone)
    }

    pub fn connect(address: impl Into<AccountAddress>) {
        SESSION.with_borrow_mut(|cell| *cell = Some(address.into()));
    }

    pub fn disconnect() {
        SESSION.with_borrow_mut(|cell| *cell = None);
    }

    #[must_use]
    pub fn is_connected() -> bool {
        SESSION.with_borrow(Option::is_some)
    }
}
