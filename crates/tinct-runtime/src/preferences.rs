#![forbid(unsafe_code)]

//! Persisted theme preferences.
//!
//! The user's theme choice is stored as a set of independent boolean flags,
//! one per choice, plus the ephemeral private-browsing flag. Several flags may
//! be set at once after an interrupted settings write or an old migration; the
//! [`selector`](crate::selector) decides which one wins. Nothing else in the
//! crate branches on raw flags.

use std::sync::atomic::{AtomicBool, AtomicU16, Ordering};

use bitflags::bitflags;
use tinct_palette::Accent;

bitflags! {
    /// Stored theme-choice flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ThemeFlags: u16 {
        const VIOLET        = 1 << 0;
        const BLUE          = 1 << 1;
        const PINK          = 1 << 2;
        const GREEN         = 1 << 3;
        const RED           = 1 << 4;
        const ORANGE        = 1 << 5;
        const YELLOW        = 1 << 6;
        const CYAN          = 1 << 7;
        const PURPLE        = 1 << 8;
        /// True-black dark theme.
        const BLACK         = 1 << 9;
        /// Follow the device light/dark setting.
        const FOLLOW_DEVICE = 1 << 10;
        /// Go dark when the device saves battery.
        const AUTO_BATTERY  = 1 << 11;
        const DARK          = 1 << 12;
        const LIGHT         = 1 << 13;
    }
}

impl Default for ThemeFlags {
    fn default() -> Self {
        Self::empty()
    }
}

impl ThemeFlags {
    /// Every accent flag.
    pub const ACCENTS: ThemeFlags = ThemeFlags::VIOLET
        .union(ThemeFlags::BLUE)
        .union(ThemeFlags::PINK)
        .union(ThemeFlags::GREEN)
        .union(ThemeFlags::RED)
        .union(ThemeFlags::ORANGE)
        .union(ThemeFlags::YELLOW)
        .union(ThemeFlags::CYAN)
        .union(ThemeFlags::PURPLE);

    /// Flag storing the choice of `accent`.
    pub const fn accent(accent: Accent) -> ThemeFlags {
        ThemeFlags::from_bits_retain(1 << accent.index())
    }
}

/// Backing store for theme flags.
///
/// Implementations are shared between surfaces and may be written from a
/// settings screen while a surface reads them, so every method takes `&self`.
pub trait PreferenceStore: Send + Sync {
    /// Whether every bit of `flag` is set.
    fn flag(&self, flag: ThemeFlags) -> bool;

    fn set_flag(&self, flag: ThemeFlags, value: bool);

    /// Ephemeral private-browsing flag. Never persisted across launches.
    fn private_browsing_active(&self) -> bool;
}

/// One consistent read of a [`PreferenceStore`].
///
/// A resolution reads the store exactly once through [`ThemePreferences::snapshot`]
/// and works from the copy, so a concurrent settings write cannot split one
/// decision across two states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ThemePreferences {
    pub flags: ThemeFlags,
    pub private_browsing: bool,
}

impl ThemePreferences {
    pub const fn new(flags: ThemeFlags, private_browsing: bool) -> Self {
        Self {
            flags,
            private_browsing,
        }
    }

    pub fn snapshot(store: &dyn PreferenceStore) -> Self {
        let flags = ThemeFlags::all()
            .iter()
            .filter(|&flag| store.flag(flag))
            .fold(ThemeFlags::empty(), |acc, flag| acc | flag);
        Self {
            flags,
            private_browsing: store.private_browsing_active(),
        }
    }

    #[inline]
    pub fn has(&self, flag: ThemeFlags) -> bool {
        self.flags.contains(flag)
    }

    /// Same flags with the private-browsing state replaced.
    #[must_use]
    pub const fn with_private_browsing(self, private_browsing: bool) -> Self {
        Self {
            flags: self.flags,
            private_browsing,
        }
    }
}

/// A theme choice as offered on a settings screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeChoice {
    Light,
    Dark,
    Black,
    FollowDevice,
    AutoBattery,
    Accent(Accent),
}

impl ThemeChoice {
    pub const fn flag(self) -> ThemeFlags {
        match self {
            ThemeChoice::Light => ThemeFlags::LIGHT,
            ThemeChoice::Dark => ThemeFlags::DARK,
            ThemeChoice::Black => ThemeFlags::BLACK,
            ThemeChoice::FollowDevice => ThemeFlags::FOLLOW_DEVICE,
            ThemeChoice::AutoBattery => ThemeFlags::AUTO_BATTERY,
            ThemeChoice::Accent(accent) => ThemeFlags::accent(accent),
        }
    }

    /// Store this choice and clear every other theme flag.
    ///
    /// Clears first so a reader racing the write sees at most this choice
    /// missing, never two choices set.
    pub fn write_exclusive(self, store: &dyn PreferenceStore) {
        let mine = self.flag();
        for flag in ThemeFlags::all().iter() {
            if flag != mine {
                store.set_flag(flag, false);
            }
        }
        store.set_flag(mine, true);
        tracing::debug!(choice = ?self, "theme choice stored");
    }
}

/// In-memory [`PreferenceStore`] backed by atomics.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    flags: AtomicU16,
    private_browsing: AtomicBool,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_flags(flags: ThemeFlags) -> Self {
        Self {
            flags: AtomicU16::new(flags.bits()),
            private_browsing: AtomicBool::new(false),
        }
    }

    pub fn flags(&self) -> ThemeFlags {
        ThemeFlags::from_bits_truncate(self.flags.load(Ordering::Acquire))
    }

    pub fn set_private_browsing(&self, active: bool) {
        self.private_browsing.store(active, Ordering::Release);
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn flag(&self, flag: ThemeFlags) -> bool {
        self.flags().contains(flag)
    }

    fn set_flag(&self, flag: ThemeFlags, value: bool) {
        if value {
            self.flags.fetch_or(flag.bits(), Ordering::AcqRel);
        } else {
            self.flags.fetch_and(!flag.bits(), Ordering::AcqRel);
        }
    }

    fn private_browsing_active(&self) -> bool {
        self.private_browsing.load(Ordering::Acquire)
    }
}
