// Compare selection - at most three listings picked for side-by-side view
//
// Toggled by presence: a fourth id is silently ignored while three are
// selected, it neither errors nor evicts.

pub const MAX_COMPARE: usize = 3;

/// Ordered set of selected service ids, capped at [`MAX_COMPARE`]
#[derive(Debug, Clone, Default)]
pub struct CompareSelection {
    ids: Vec<i64>,
}

impl CompareSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove the id if present, otherwise add it while below the cap
    pub fn toggle(&mut self, id: i64) {
        if let Some(pos) = self.ids.iter().position(|&existing| existing == id) {
            self.ids.remove(pos);
        } else if self.ids.len() < MAX_COMPARE {
            self.ids.push(id);
        }
    }

    pub fn contains(&self, id: i64) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.ids.len() >= MAX_COMPARE
    }

    /// Selected ids in selection order
    pub fn ids(&self) -> &[i64] {
        &self.ids
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}
