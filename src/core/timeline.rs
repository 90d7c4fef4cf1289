use super::state::Ticks;

/// One contiguous run of a process on the CPU.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slice {
    pub id: String,
    pub start: Ticks,
    pub end: Ticks,
}

impl Slice {
    pub fn duration(&self) -> Ticks {
        self.end - self.start
    }
}

/// Gantt-style timeline, in dispatch order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timeline {
    slices: Vec<Slice>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, id: String, start: Ticks, end: Ticks) {
        debug_assert!(start < end, "Slice for {id} must be non-empty");
        if let Some(last) = self.slices.last() {
            debug_assert!(
                last.end <= start,
                "Slice for {id} at {start} overlaps {} ending at {}",
                last.id,
                last.end
            );
        }
        self.slices.push(Slice { id, start, end });
    }

    pub fn slices(&self) -> &[Slice] {
        &self.slices
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slice> {
        self.slices.iter()
    }

    pub fn len(&self) -> usize {
        self.slices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    // Clock value once the last slice finishes
    pub fn makespan(&self) -> Ticks {
        self.slices.last().map_or(0, |s| s.end)
    }

    pub fn busy_ticks(&self) -> Ticks {
        self.slices.iter().map(Slice::duration).sum()
    }

    pub fn idle_ticks(&self) -> Ticks {
        self.makespan() - self.busy_ticks()
    }
}
