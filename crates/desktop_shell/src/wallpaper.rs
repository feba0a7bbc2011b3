//! Time-of-day wallpaper selection for the desktop backdrop.

/// Backdrop palette bands across the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallpaperTone {
    Dawn,
    Day,
    Dusk,
    Night,
}

impl WallpaperTone {
    /// Stable token consumed by the backdrop stylesheet.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Dawn => "dawn",
            Self::Day => "day",
            Self::Dusk => "dusk",
            Self::Night => "night",
        }
    }
}

/// Picks the backdrop tone for a local hour (0-23).
pub fn wallpaper_for_hour(hour: u32) -> WallpaperTone {
    match hour {
        5..=7 => WallpaperTone::Dawn,
        8..=16 => WallpaperTone::Day,
        17..=19 => WallpaperTone::Dusk,
        _ => WallpaperTone::Night,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tones_change_at_band_boundaries() {
        assert_eq!(wallpaper_for_hour(4), WallpaperTone::Night);
        assert_eq!(wallpaper_for_hour(5), WallpaperTone::Dawn);
        assert_eq!(wallpaper_for_hour(8), WallpaperTone::Day);
        assert_eq!(wallpaper_for_hour(16), WallpaperTone::Day);
        assert_eq!(wallpaper_for_hour(17), WallpaperTone::Dusk);
        assert_eq!(wallpaper_for_hour(20), WallpaperTone::Night);
        assert_eq!(wallpaper_for_hour(23), WallpaperTone::Night);
    }
}
