//! Fading highlights on the input box after gameplay events.

/// Seconds a flash takes to fade out.
pub const FLASH_SECONDS: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlashKind {
    Scored,
    Striked,
    Invalid,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Flash {
    remaining: f32,
    duration: f32,
}

impl Flash {
    pub fn new(duration: f32) -> Self {
        Self {
            remaining: 0.0,
            duration: duration.max(f32::EPSILON),
        }
    }

    pub fn start(&mut self) {
        self.remaining = self.duration;
    }

    pub fn update(&mut self, delta_seconds: f32) {
        self.remaining = (self.remaining - delta_seconds.max(0.0)).max(0.0);
    }

    pub fn is_active(&self) -> bool {
        self.remaining > 0.0
    }

    /// 1.0 right after `start`, easing out to 0.0.
    pub fn intensity(&self) -> f32 {
        let t = self.remaining / self.duration;
        t * t
    }
}

/// One flash per event kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Flashes {
    scored: Flash,
    striked: Flash,
    invalid: Flash,
}

impl Default for Flashes {
    fn default() -> Self {
        Self::new(FLASH_SECONDS)
    }
}

impl Flashes {
    pub fn new(duration: f32) -> Self {
        Self {
            scored: Flash::new(duration),
            striked: Flash::new(duration),
            invalid: Flash::new(duration),
        }
    }

    pub fn start(&mut self, kind: FlashKind) {
        self.get_mut(kind).start();
    }

    pub fn update(&mut self, delta_seconds: f32) {
        self.scored.update(delta_seconds);
        self.striked.update(delta_seconds);
        self.invalid.update(delta_seconds);
    }

    pub fn get(&self, kind: FlashKind) -> &Flash {
        match kind {
            FlashKind::Scored => &self.scored,
            FlashKind::Striked => &self.striked,
            FlashKind::Invalid => &self.invalid,
        }
    }

    fn get_mut(&mut self, kind: FlashKind) -> &mut Flash {
        match kind {
            FlashKind::Scored => &mut self.scored,
            FlashKind::Striked => &mut self.striked,
            FlashKind::Invalid => &mut self.invalid,
        }
    }

    /// The most visible active flash.
    pub fn strongest(&self) -> Option<(FlashKind, f32)> {
        [FlashKind::Striked, FlashKind::Scored, FlashKind::Invalid]
            .into_iter()
            .map(|kind| (kind, self.get(kind).intensity()))
            .filter(|&(_, intensity)| intensity > 0.0)
            .fold(None, |best, candidate| match best {
                Some((_, i)) if i >= candidate.1 => best,
                _ => Some(candidate),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flash_fades_out() {
        let mut flash = Flash::new(0.5);
        assert!(!flash.is_active());
        assert_eq!(flash.intensity(), 0.0);

        flash.start();
        assert_eq!(flash.intensity(), 1.0);

        flash.update(0.25);
        assert_eq!(flash.intensity(), 0.25);

        flash.update(1.0);
        assert!(!flash.is_active());
        assert_eq!(flash.intensity(), 0.0);
    }

    #[test]
    fn test_strongest_prefers_newest() {
        let mut flashes = Flashes::new(1.0);
        assert_eq!(flashes.strongest(), None);

        flashes.start(FlashKind::Scored);
        flashes.update(0.5);
        flashes.start(FlashKind::Invalid);
        assert_eq!(flashes.strongest(), Some((FlashKind::Invalid, 1.0)));
    }

    #[test]
    fn test_strike_wins_ties() {
        let mut flashes = Flashes::new(1.0);
        flashes.start(FlashKind::Scored);
        flashes.start(FlashKind::Striked);
        assert_eq!(flashes.strongest().map(|(kind, _)| kind), Some(FlashKind::Striked));
    }
}
