use super::task::TaskId;
use uuid::Uuid;

/// Largest integer that survives a round trip through an IEEE-754 double,
/// so ids stay exact for any JSON reader of the slot.
pub const MAX_TASK_ID: TaskId = (1 << 53) - 1;

/// Source of ids for newly accepted tasks
pub trait IdSource {
    fn next_id(&mut self) -> TaskId;
}

/// Random ids taken from UUID v4 bits. Never zero.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_id(&mut self) -> TaskId {
        let bits = Uuid::new_v4().as_u128() as u64;
        (bits & MAX_TASK_ID).max(1)
    }
}

/// Deterministic ids counting up from a starting value
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: TaskId,
}

#[cfg(test)]
impl SequentialIds {
    pub fn starting_at(next: TaskId) -> Self {
        Self { next }
    }
}

#[cfg(test)]
impl IdSource for SequentialIds {
    fn next_id(&mut self) -> TaskId {
        let id = self.next;
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_random_ids_in_range() {
        let mut ids = RandomIds;
        for _ in 0..1000 {
            let id = ids.next_id();
            assert!(id >= 1);
            assert!(id <= MAX_TASK_ID);
        }
    }

    #[test]
    fn test_random_ids_do_not_repeat() {
        let mut ids = RandomIds;
        let seen: HashSet<TaskId> = (0..10_000).map(|_| ids.next_id()).collect();
        assert_eq!(seen.len(), 10_000);
    }

    #[test]
    fn test_sequential_ids() {
        let mut ids = SequentialIds::starting_at(5);
        assert_eq!(ids.next_id(), 5);
        assert_eq!(ids.next_id(), 6);
    }
}
