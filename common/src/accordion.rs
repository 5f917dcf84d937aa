//! アコーディオン（同時に開けるのは1項目まで）

use crate::error::{check_index, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accordion {
    expanded: Option<usize>,
    len: usize,
}

impl Accordion {
    /// 先頭項目を開いた状態で作成
    pub fn new(len: usize) -> Self {
        Self {
            expanded: if len > 0 { Some(0) } else { None },
            len,
        }
    }

    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }

    /// 開いている項目なら閉じ、それ以外なら開く
    pub fn toggle(&mut self, index: usize) -> Result<()> {
        check_index(index, self.len)?;
        self.expanded = if self.expanded == Some(index) {
            None
        } else {
            Some(index)
        };
        Ok(())
    }
}
