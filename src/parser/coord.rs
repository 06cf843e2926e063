/// A position in the input, tracked character by character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coord {
    /// Character index, starting at 0.
    pub index: usize,
    /// Line number, starting at 1.
    pub line: usize,
    /// Column number, starting at 1, resetting to 1 after a newline.
    pub col: usize,
}

impl Coord {
    pub fn start() -> Self {
        Self { index: 0, line: 1, col: 1 }
    }

    /// Counts a newline character.
    pub fn newline(&mut self) {
        self.index += 1;
        self.line += 1;
        self.col = 1;
    }

    /// Counts any other character.
    pub fn advance(&mut self) {
        self.index += 1;
        self.col += 1;
    }
}

impl Default for Coord {
    fn default() -> Self {
        Self::start()
    }
}
