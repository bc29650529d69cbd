//! Active pointer tracking
//!
//! At most two contacts are tracked; further pointers are ignored entirely
//! (their move/up events find no tracked entry and fall through).

/// One tracked contact
#[derive(Clone, Copy, Debug)]
pub struct Pointer {
    pub id: u32,
    pub x: f32,
    pub y: f32,
    pub start_x: f32,
    pub start_y: f32,
}

impl Pointer {
    pub fn new(id: u32, x: f32, y: f32) -> Self {
        Self {
            id,
            x,
            y,
            start_x: x,
            start_y: y,
        }
    }

    /// Distance moved since contact start
    pub fn travel(&self) -> f32 {
        let dx = self.x - self.start_x;
        let dy = self.y - self.start_y;
        (dx * dx + dy * dy).sqrt()
    }
}

const MAX_POINTERS: usize = 2;

/// Fixed-capacity set of live contacts
#[derive(Default)]
pub struct PointerTracker {
    pointers: Vec<Pointer>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self {
            pointers: Vec::with_capacity(MAX_POINTERS),
        }
    }

    /// Track a new contact; returns false when already at capacity or the id
    /// is already tracked
    pub fn add(&mut self, id: u32, x: f32, y: f32) -> bool {
        if self.pointers.len() >= MAX_POINTERS || self.find(id).is_some() {
            return false;
        }
        self.pointers.push(Pointer::new(id, x, y));
        true
    }

    /// Update a tracked contact's position; returns false for untracked ids
    pub fn update(&mut self, id: u32, x: f32, y: f32) -> bool {
        match self.pointers.iter_mut().find(|p| p.id == id) {
            Some(p) => {
                p.x = x;
                p.y = y;
                true
            }
            None => false,
        }
    }

    /// Remove a contact; returns it if it was tracked
    pub fn remove(&mut self, id: u32) -> Option<Pointer> {
        let idx = self.pointers.iter().position(|p| p.id == id)?;
        Some(self.pointers.remove(idx))
    }

    pub fn find(&self, id: u32) -> Option<&Pointer> {
        self.pointers.iter().find(|p| p.id == id)
    }

    pub fn count(&self) -> usize {
        self.pointers.len()
    }

    pub fn first(&self) -> Option<&Pointer> {
        self.pointers.first()
    }

    /// Mean position of all tracked contacts
    pub fn centroid(&self) -> (f32, f32) {
        if self.pointers.is_empty() {
            return (0.0, 0.0);
        }
        let n = self.pointers.len() as f32;
        let sx: f32 = self.pointers.iter().map(|p| p.x).sum();
        let sy: f32 = self.pointers.iter().map(|p| p.y).sum();
        (sx / n, sy / n)
    }

    /// Distance between the two tracked contacts (0 when fewer than two)
    pub fn spread(&self) -> f32 {
        if self.pointers.len() < 2 {
            return 0.0;
        }
        let a = &self.pointers[0];
        let b = &self.pointers[1];
        let dx = a.x - b.x;
        let dy = a.y - b.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Reset every contact's start position to its current position
    pub fn rebase_starts(&mut self) {
        for p in self.pointers.iter_mut() {
            p.start_x = p.x;
            p.start_y = p.y;
        }
    }

    pub fn clear(&mut self) {
        self.pointers.clear();
    }
}
