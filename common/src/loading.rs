//! マウント直後のローディング表示
//!
//! 一定時間後に一度だけ `loading = false` になる。アンマウント後は変化しない。

use std::time::Duration;

/// 既定の表示時間
pub const DEFAULT_LOADING_DELAY: Duration = Duration::from_millis(800);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Loading { elapsed: Duration },
    Ready,
    Unmounted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadingGate {
    delay: Duration,
    phase: Phase,
}

impl LoadingGate {
    /// マウント時に作成
    pub fn mount(delay: Duration) -> Self {
        Self {
            delay,
            phase: Phase::Loading { elapsed: Duration::ZERO },
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading { .. })
    }

    /// タイマー満了。状態が変わった場合のみ true
    pub fn expire(&mut self) -> bool {
        if self.is_loading() {
            self.phase = Phase::Ready;
            true
        } else {
            false
        }
    }

    /// 経過時間を加算し、遅延に達したら満了させる
    pub fn advance(&mut self, dt: Duration) -> bool {
        if let Phase::Loading { elapsed } = self.phase {
            let elapsed = elapsed.saturating_add(dt);
            if elapsed >= self.delay {
                return self.expire();
            }
            self.phase = Phase::Loading { elapsed };
        }
        false
    }

    /// 以後の満了は無視される
    pub fn unmount(&mut self) {
        self.phase = Phase::Unmounted;
    }
}
