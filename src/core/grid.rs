//! Cell grid - Structure of Arrays for per-cell state
//!
//! Instead of: Vec<Cell { toggled, color }>
//! We have:    toggled[], colors[]  // linear memory, zero-copy color blits
//!
//! Both arrays are allocated together at construction and never resize.
//! Colors are ABGR-packed for direct ImageData consumption by the host.

const BG_COLOR: u32 = 0xFF000000;

/// SoA grid of toggle flags and packed cell colors
pub struct CellGrid {
    width: u32,
    height: u32,
    size: usize,

    pub toggled: Vec<u8>, // 0 = off, 1 = on
    pub colors: Vec<u32>, // ABGR packed color
}

impl CellGrid {
    pub fn new(width: u32, height: u32) -> Self {
        // Widened before multiplying; u32 * u32 can overflow for
        // dimensions that are individually representable.
        let size = width as usize * height as usize;

        Self {
            width,
            height,
            size,
            toggled: vec![0; size],
            colors: vec![BG_COLOR; size],
        }
    }

    // === Dimensions ===
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    // === Index conversion ===
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        (y * self.width + x) as usize
    }

    #[inline]
    pub fn coords(&self, idx: usize) -> (u32, u32) {
        let x = (idx as u32) % self.width;
        let y = (idx as u32) / self.width;
        (x, y)
    }

    // === Bounds checking ===
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32
    }

    // === Toggle access ===
    #[inline]
    pub fn is_toggled(&self, x: u32, y: u32) -> bool {
        self.toggled[self.index(x, y)] == 1
    }

    /// Flip the toggle flag at (x, y) and return the new state
    #[inline]
    pub fn flip(&mut self, x: u32, y: u32) -> bool {
        let idx = self.index(x, y);
        self.toggled[idx] ^= 1;
        self.toggled[idx] == 1
    }

    // === Color access ===
    #[inline]
    pub fn get_color(&self, x: u32, y: u32) -> u32 {
        self.colors[self.index(x, y)]
    }

    #[inline]
    pub fn set_color(&mut self, x: u32, y: u32, c: u32) {
        let idx = self.index(x, y);
        self.colors[idx] = c;
    }

    // === Raw pointer for JS interop ===
    pub fn colors_ptr(&self) -> *const u32 {
        self.colors.as_ptr()
    }
}
