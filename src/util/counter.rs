/// A simple monotonically increasing id counter.
///
/// Used for clause ids (debugging/tie-breaking only, per spec.md §3 — "a
/// monotonically increasing numeric id for debugging/tie-breaking"). A
/// per-engine counter replaces the process-wide `itertools.count()`
/// globals the Python reference uses (`cnt`, `rec_count` in
/// `original_source/resolution.py`) — see spec.md §9, "Global counters."
#[derive(Debug, Default, Clone)]
pub struct Counter {
    next: u64,
}

impl Counter {
    pub fn new() -> Self {
        Self { next: 0 }
    }

    pub fn next(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }
}
