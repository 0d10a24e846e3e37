#![forbid(unsafe_code)]

//! Live palette shared with the rendering layer.
//!
//! Consumers keep one [`LivePalette`] handle and read it every frame. When the
//! active theme changes the whole [`PaletteSnapshot`] is swapped in one atomic
//! store, so a reader sees either the old palette or the new one and never a
//! mix of the two. The snapshot's `generation` lets consumers skip work when
//! nothing changed since their last read.
//!
//! ```
//! use tinct_palette::{LivePalette, ThemeVariant, palette_for};
//!
//! let live = LivePalette::for_variant(ThemeVariant::Light);
//! assert_eq!(live.generation(), 0);
//!
//! assert!(live.replace(ThemeVariant::Dark, *palette_for(ThemeVariant::Dark)));
//! assert_eq!(live.load().variant, ThemeVariant::Dark);
//! assert_eq!(live.generation(), 1);
//! ```

use std::sync::Arc;

use arc_swap::{ArcSwap, Guard};

use crate::palette::PaletteModel;
use crate::registry::palette_for;
use crate::variant::ThemeVariant;

/// One immutable palette together with the variant it was built for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteSnapshot {
    pub variant: ThemeVariant,
    pub palette: PaletteModel,
    /// Bumped on every effective replacement.
    pub generation: u64,
}

/// Wait-free readable, wholesale-replaceable palette.
pub struct LivePalette {
    inner: ArcSwap<PaletteSnapshot>,
}

impl LivePalette {
    pub fn new(variant: ThemeVariant, palette: PaletteModel) -> Self {
        Self {
            inner: ArcSwap::from_pointee(PaletteSnapshot {
                variant,
                palette,
                generation: 0,
            }),
        }
    }

    /// Live palette seeded from the built-in registry.
    pub fn for_variant(variant: ThemeVariant) -> Self {
        Self::new(variant, *palette_for(variant))
    }

    /// Owned snapshot of the current palette.
    pub fn load(&self) -> Arc<PaletteSnapshot> {
        self.inner.load_full()
    }

    /// Short-lived borrow without touching the reference count.
    pub fn load_ref(&self) -> Guard<Arc<PaletteSnapshot>> {
        self.inner.load()
    }

    pub fn generation(&self) -> u64 {
        self.inner.load().generation
    }

    pub fn variant(&self) -> ThemeVariant {
        self.inner.load().variant
    }

    /// Swap in a new palette. Returns `false` and leaves the generation alone
    /// when `variant` and `palette` equal the current snapshot.
    pub fn replace(&self, variant: ThemeVariant, palette: PaletteModel) -> bool {
        let mut changed = false;
        self.inner.rcu(|current| {
            if current.variant == variant && current.palette == palette {
                changed = false;
                Arc::clone(current)
            } else {
                changed = true;
                Arc::new(PaletteSnapshot {
                    variant,
                    palette,
                    generation: current.generation + 1,
                })
            }
        });
        if changed {
            tracing::debug!(variant = %variant, "live palette replaced");
        }
        changed
    }
}

impl std::fmt::Debug for LivePalette {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let snapshot = self.inner.load();
        f.debug_struct("LivePalette")
            .field("variant", &snapshot.variant)
            .field("generation", &snapshot.generation)
            .finish()
    }
}
