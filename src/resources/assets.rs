//! Sprite sheet readiness bookkeeping.
//!
//! The start trigger stays disabled until every expected sheet reported
//! itself loaded. A sheet that never loads keeps it disabled for good.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetReadiness {
    loaded: u32,
    expected: u32,
}

impl AssetReadiness {
    pub fn new(expected: u32) -> Self {
        Self {
            loaded: 0,
            expected,
        }
    }

    /// Count one more loaded asset.
    pub fn mark_loaded(&mut self) {
        self.loaded = (self.loaded + 1).min(self.expected);
    }

    pub fn loaded(&self) -> u32 {
        self.loaded
    }

    pub fn all_ready(&self) -> bool {
        self.loaded == self.expected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ready_only_after_all_loaded() {
        let mut readiness = AssetReadiness::new(2);
        assert!(!readiness.all_ready());
        readiness.mark_loaded();
        assert!(!readiness.all_ready());
        readiness.mark_loaded();
        assert!(readiness.all_ready());
        readiness.mark_loaded();
        assert_eq!(readiness.loaded(), 2);
    }
}
