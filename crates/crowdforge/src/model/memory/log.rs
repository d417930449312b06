use crate::log::Level;
use std::cell::RefCell;

thread_local! {
    static LOG: RefCell<Vec<LogEntry>> = const { RefCell::new(Vec::new()) };
}

// oldest entries are dropped past this point
const MAX_ENTRIES: usize = 1_000;

///
/// LogEntry
///

#[derive(Clone, Debug)]
pub(crate) struct LogEntry {
    pub level: Level,
    pub topic: Option<String>,
    pub message: String,
}

///
/// LogStore
///
/// In-process tail of everything the `log!` macro emitted, so callers and
/// tests can observe what was logged without scraping stdout.
///

pub(crate) struct LogStore;

impl LogStore {
    pub(crate) fn append(topic: Option<&str>, level: Level, message: &str) {
        LOG.with_borrow_mut(|entries| {
            if entries.len() == MAX_ENTRIES {
                entries.remove(0);
            }

            entries.push(LogEntry {
                level,
                topic: topic.map(ToString::to_string),
                message: message.to_string(),
            });
        });
    }

    #[must_use]
    pub(crate) fn export() -> Vec<LogEntry> {
        LOG.with_borrow(Clone::clone)
    }

    /// Number of entries at exactly this level.
    #[must_use]
    pub(crate) fn count_at(level: Level) -> usize {
        LOG.with_borrow(|entries| entries.iter().filter(|e| e.level == level).count())
    }

    #[cfg(test)]
    pub(crate) fn clear() {
        LOG.with_borrow_mut(Vec::clear);
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_and_counts() {
        LogStore::clear();

        LogStore::append(Some("Cache"), Level::Info, "filled");
        LogStore::append(None, Level::Warn, "contract.call error");

        assert_eq!(LogStore::count_at(Level::Warn), 1);
        assert_eq!(LogStore::export().len(), 2);
        assert_eq!(LogStore::export()[1].message, "contract.call error");
    }

    #[test]
    fn caps_the_tail() {
        LogStore::clear();

        for i in 0..(MAX_ENTRIES + 5) {
            LogStore::append(None, Level::Debug, &format!("entry {i}"));
        }

        let entries = LogStore::export();
        assert_eq!(entries.len(), MAX_ENTRIES);
        assert_eq!(entries[0].message, "entry 5");
    }
}
