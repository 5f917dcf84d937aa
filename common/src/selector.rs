//! カルーセルのインデックス選択
//!
//! 外側（スライド）と内側（スライド内の画像）の2段インデックスを管理する。
//! 外側が変わるたびに内側は0に戻る。

use crate::error::{check_index, Error, Result};
use crate::types::Slide;

/// 固定長リスト上の循環インデックス
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cycle {
    index: usize,
    len: usize,
}

impl Cycle {
    /// 長さ0は不可
    pub fn new(len: usize) -> Result<Self> {
        if len == 0 {
            return Err(Error::Content("選択対象が空です".into()));
        }
        Ok(Self { index: 0, len })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.len;
    }

    pub fn prev(&mut self) {
        self.index = (self.index + self.len - 1) % self.len;
    }

    pub fn jump_to(&mut self, index: usize) -> Result<()> {
        check_index(index, self.len)?;
        self.index = index;
        Ok(())
    }
}

/// カルーセル状態（スライド + 画像）
#[derive(Debug, Clone, PartialEq)]
pub struct Carousel {
    slides: Vec<Slide>,
    outer: Cycle,
    inner: usize,
}

impl Carousel {
    /// スライドが1枚以上あること、各スライドに画像が1枚以上あること
    pub fn new(slides: Vec<Slide>) -> Result<Self> {
        if let Some(empty) = slides.iter().find(|s| s.images.is_empty()) {
            return Err(Error::Content(format!(
                "スライド {} に画像がありません",
                empty.id
            )));
        }
        let outer = Cycle::new(slides.len())
            .map_err(|_| Error::Content("スライドがありません".into()))?;
        Ok(Self { slides, outer, inner: 0 })
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn slide_index(&self) -> usize {
        self.outer.index()
    }

    pub fn image_index(&self) -> usize {
        self.inner
    }

    pub fn current_slide(&self) -> &Slide {
        &self.slides[self.outer.index()]
    }

    /// 現在のスライドの画像枚数（呼び出しごとに再計算）
    pub fn image_count(&self) -> usize {
        self.current_slide().images.len()
    }

    /// 表示する画像URL
    pub fn current_image(&self) -> &str {
        self.current_slide().image_at(self.inner)
    }

    pub fn next_slide(&mut self) {
        self.outer.next();
        self.inner = 0;
    }

    pub fn prev_slide(&mut self) {
        self.outer.prev();
        self.inner = 0;
    }

    pub fn jump_to_slide(&mut self, index: usize) -> Result<()> {
        self.outer.jump_to(index)?;
        self.inner = 0;
        Ok(())
    }

    pub fn next_image(&mut self) {
        let len = self.image_count();
        self.inner = (self.inner + 1) % len;
    }

    pub fn prev_image(&mut self) {
        let len = self.image_count();
        self.inner = (self.inner + len - 1) % len;
    }

    pub fn jump_to_image(&mut self, index: usize) -> Result<()> {
        check_index(index, self.image_count())?;
        self.inner = index;
        Ok(())
    }
}

/// 読み込み失敗を考慮した画像URL
///
/// `failed` に記録されたURLと一致する場合のみ fallback を返す。
/// fallback 自体の失敗では再度 fallback を要求しない。
pub fn resolve_image_src<'a>(requested: &'a str, failed: Option<&str>, fallback: &'a str) -> &'a str {
    match failed {
        Some(url) if url == requested => fallback,
        _ => requested,
    }
}

/// 読み込みに失敗した `src` を失敗として記録すべきか
pub fn should_fall_back(src: &str, fallback: &str) -> bool {
    !src.is_empty() && src != fallback
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slide(id: u32, images: usize) -> Slide {
        Slide {
            id,
            title: format!("Slide {}", id),
            date: String::new(),
            description: String::new(),
            images: (0..images).map(|i| format!("{}-{}.jpg", id, i)).collect(),
            fallback_url: format!("fallback-{}", id),
        }
    }

    fn carousel(counts: &[usize]) -> Carousel {
        let slides = counts
            .iter()
            .enumerate()
            .map(|(i, &n)| slide(i as u32 + 1, n))
            .collect();
        Carousel::new(slides).expect("カルーセル作成失敗")
    }

    #[test]
    fn test_cycle_wraparound() {
        let mut c = Cycle::new(3).unwrap();
        c.prev();
        assert_eq!(c.index(), 2);
        c.next();
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn test_cycle_single() {
        let mut c = Cycle::new(1).unwrap();
        c.next();
        assert_eq!(c.index(), 0);
        c.prev();
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn test_cycle_empty() {
        assert!(matches!(Cycle::new(0), Err(Error::Content(_))));
    }

    #[test]
    fn test_cycle_jump_out_of_range() {
        let mut c = Cycle::new(4).unwrap();
        c.jump_to(2).unwrap();
        let err = c.jump_to(4).unwrap_err();
        assert!(matches!(err, Error::OutOfRange { index: 4, len: 4 }));
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn test_carousel_rejects_empty() {
        assert!(matches!(Carousel::new(vec![]), Err(Error::Content(_))));
    }

    #[test]
    fn test_carousel_rejects_slide_without_images() {
        let err = Carousel::new(vec![slide(1, 2), slide(2, 0)]).unwrap_err();
        assert!(format!("{}", err).contains("スライド 2"));
    }

    /// スライド移動で画像インデックスが0に戻る
    #[test]
    fn test_slide_change_resets_image() {
        let mut c = carousel(&[3, 3, 3]);
        c.next_image();
        c.next_image();
        assert_eq!(c.image_index(), 2);
        c.next_slide();
        assert_eq!(c.image_index(), 0);

        c.next_image();
        c.prev_slide();
        assert_eq!(c.image_index(), 0);

        c.next_image();
        c.jump_to_slide(2).unwrap();
        assert_eq!(c.slide_index(), 2);
        assert_eq!(c.image_index(), 0);
    }

    /// 画像枚数はスライドごとに再計算
    #[test]
    fn test_image_wraparound_per_slide() {
        let mut c = carousel(&[2, 5]);
        c.prev_image();
        assert_eq!(c.image_index(), 1);
        c.next_slide();
        c.prev_image();
        assert_eq!(c.image_index(), 4);
        c.next_image();
        assert_eq!(c.image_index(), 0);
    }

    #[test]
    fn test_jump_to_image() {
        let mut c = carousel(&[3]);
        c.jump_to_image(2).unwrap();
        assert_eq!(c.current_image(), "1-2.jpg");
        let err = c.jump_to_image(3).unwrap_err();
        assert!(matches!(err, Error::OutOfRange { index: 3, len: 3 }));
        assert_eq!(c.image_index(), 2);
    }

    /// 範囲外のスライド指定は状態を変えない
    #[test]
    fn test_jump_to_slide_out_of_range_keeps_state() {
        let mut c = carousel(&[2, 2]);
        c.next_image();
        assert!(c.jump_to_slide(5).is_err());
        assert_eq!(c.slide_index(), 0);
        assert_eq!(c.image_index(), 1);
    }

    #[test]
    fn test_single_image_navigation_is_noop() {
        let mut c = carousel(&[1]);
        c.next_image();
        c.prev_image();
        assert_eq!(c.image_index(), 0);
        assert_eq!(c.current_image(), "1-0.jpg");
        assert!(!c.current_slide().has_gallery_controls());
    }

    #[test]
    fn test_resolve_image_src() {
        assert_eq!(resolve_image_src("a.jpg", None, "fb"), "a.jpg");
        assert_eq!(resolve_image_src("a.jpg", Some("a.jpg"), "fb"), "fb");
        // 別画像の失敗記録は無関係
        assert_eq!(resolve_image_src("b.jpg", Some("a.jpg"), "fb"), "b.jpg");
    }

    #[test]
    fn test_should_fall_back() {
        assert!(should_fall_back("a.jpg", "fb"));
        assert!(!should_fall_back("fb", "fb"));
        assert!(!should_fall_back("", "fb"));
    }
}
