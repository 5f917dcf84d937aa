//! モバイルメニューの開閉

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuToggle {
    open: bool,
}

impl MenuToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }
}
