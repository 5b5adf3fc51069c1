use std::collections::VecDeque;

/// Deferred mutation-thread work, retried once per host tick until it reports completion.
///
/// Tasks are plain values; the owner decides how to attempt them. This keeps the queue free of
/// closures that would need to borrow the owner while it is being mutated.
#[derive(Debug, Clone)]
pub struct RetryQueue<T> {
    pending: VecDeque<T>,
}

impl<T> Default for RetryQueue<T> {
    fn default() -> Self {
        Self {
            pending: VecDeque::new(),
        }
    }
}

impl<T> RetryQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `task` for the next tick.
    pub fn push(&mut self, task: T) {
        self.pending.push_back(task);
    }

    /// Queue `task` unless an equal task is already pending.
    pub fn push_unique(&mut self, task: T)
    where
        T: PartialEq,
    {
        if !self.pending.contains(&task) {
            self.pending.push_back(task);
        }
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Attempt every pending task in order. Tasks for which `attempt` returns `false` stay queued.
    ///
    /// Returns the number of tasks that completed.
    pub fn run(&mut self, mut attempt: impl FnMut(&T) -> bool) -> usize {
        let before = self.pending.len();
        self.pending.retain(|task| !attempt(task));
        before - self.pending.len()
    }

    /// Move every task of `other` to the back of this queue.
    pub fn append(&mut self, other: &mut Self) {
        self.pending.append(&mut other.pending);
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
