#![forbid(unsafe_code)]

//! Per-surface theme management.
//!
//! A [`ThemeManager`] is owned by exactly one UI surface. It tracks the
//! surface's [`BrowsingMode`], derives the [`ThemeStyle`] to apply before the
//! surface becomes visible, keeps a shared [`LivePalette`] in step with the
//! selected variant, and colors the system bars.
//!
//! # Mode transitions
//!
//! Switching between normal and private browsing restarts the surface, since
//! most style resources only take effect from a cold style context.
//! [`ThemeManager::set_browsing_mode`] therefore guards hard:
//!
//! - same mode: nothing happens;
//! - mode-locked surface (embedded in another app): ignored;
//! - finishing surface: ignored;
//! - restart already scheduled: the new mode is persisted for the restart
//!   to pick up, but no second restart is requested.
//!
//! Ignored transitions are logged at `debug` and reported through
//! [`TransitionOutcome`], never as errors.
//!
//! # Resolution
//!
//! Every resolution reads the preference store once into a
//! [`ThemePreferences`] snapshot and works from it. A preference write racing
//! a resolution is seen by the next one.

use std::fmt;
use std::sync::Arc;

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};
use tinct_palette::{Accent, Color, LivePalette, PaletteModel, ThemeVariant, palette_for};

use crate::appearance::OsAppearance;
use crate::attributes::{
    AttributeId, ResourceId, StyleContext, resolve_attribute_detailed, resource_color,
};
use crate::config::ThemeConfig;
use crate::preferences::{PreferenceStore, ThemePreferences};
use crate::selector::{Selection, explain_selection, os_variant, select_theme};
use crate::system_bars::{BarAppearance, SystemBarConfig, SystemBarInputs, compute_system_bars};

/// Normal or private browsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "snake_case"))]
pub enum BrowsingMode {
    #[default]
    Normal,
    Private,
}

impl BrowsingMode {
    pub const fn is_private(self) -> bool {
        matches!(self, BrowsingMode::Private)
    }

    pub const fn name(self) -> &'static str {
        match self {
            BrowsingMode::Normal => "normal",
            BrowsingMode::Private => "private",
        }
    }
}

impl fmt::Display for BrowsingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Concrete style the host applies to a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeStyle {
    /// Base light/dark style; the OS picks the night-mode resources.
    Normal,
    Black,
    Private,
    Accent(Accent),
}

impl ThemeStyle {
    pub const fn name(self) -> &'static str {
        match self {
            ThemeStyle::Normal => "normal",
            ThemeStyle::Black => "black",
            ThemeStyle::Private => "private",
            ThemeStyle::Accent(accent) => accent.name(),
        }
    }
}

impl fmt::Display for ThemeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The UI surface a [`ThemeManager`] is bound to.
pub trait SurfaceHost: StyleContext {
    /// Tear the surface down and recreate it.
    fn restart(&mut self);

    fn is_mode_locked(&self) -> bool;

    fn set_mode_locked(&mut self, locked: bool);

    /// The surface is closing and will not be shown again.
    fn is_finishing(&self) -> bool;

    /// Record `mode` where the restarted surface will find it.
    fn persist_browsing_mode(&mut self, mode: BrowsingMode);

    /// Mode recorded by [`persist_browsing_mode`](Self::persist_browsing_mode)
    /// before the last restart.
    fn restored_browsing_mode(&self) -> Option<BrowsingMode>;

    fn apply_style(&mut self, style: ThemeStyle);

    fn apply_system_bars(&mut self, bars: &SystemBarConfig);

    /// Redraw after the live palette changed.
    fn reflow(&mut self) {}
}

/// Result of [`ThemeManager::set_browsing_mode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionOutcome {
    /// Mode persisted and a restart requested.
    Restarted,
    /// Mode persisted; the restart already pending will apply it.
    Coalesced,
    Unchanged,
    ModeLocked,
    Finishing,
}

impl TransitionOutcome {
    /// Whether the requested mode is now the surface's mode.
    pub const fn is_applied(self) -> bool {
        matches!(
            self,
            TransitionOutcome::Restarted
                | TransitionOutcome::Coalesced
                | TransitionOutcome::Unchanged
        )
    }
}

/// Theme state machine for one surface.
pub struct ThemeManager<H: SurfaceHost> {
    host: H,
    preferences: Arc<dyn PreferenceStore>,
    appearance: Arc<dyn OsAppearance>,
    config: ThemeConfig,
    mode: BrowsingMode,
    restart_pending: bool,
    palette: Arc<LivePalette>,
}

impl<H: SurfaceHost> ThemeManager<H> {
    pub fn new(
        host: H,
        preferences: Arc<dyn PreferenceStore>,
        appearance: Arc<dyn OsAppearance>,
        config: ThemeConfig,
        mode: BrowsingMode,
    ) -> Self {
        let prefs = snapshot_for(preferences.as_ref(), mode);
        let variant = select_theme(&prefs, appearance.as_ref(), true);
        tracing::debug!(mode = %mode, variant = %variant, "theme manager created");
        Self {
            host,
            preferences,
            appearance,
            config,
            mode,
            restart_pending: false,
            palette: Arc::new(LivePalette::for_variant(variant)),
        }
    }

    /// Manager for a surface that may have been restarted by a transition.
    ///
    /// Picks up the mode persisted on the host, or the configured default.
    pub fn restore(
        host: H,
        preferences: Arc<dyn PreferenceStore>,
        appearance: Arc<dyn OsAppearance>,
        config: ThemeConfig,
    ) -> Self {
        let fallback = config.default_mode;
        let mode = host.restored_browsing_mode().unwrap_or(fallback);
        Self::new(host, preferences, appearance, config, mode)
    }

    pub fn current_mode(&self) -> BrowsingMode {
        self.mode
    }

    pub fn restart_pending(&self) -> bool {
        self.restart_pending
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Shared handle for the rendering layer.
    pub fn palette(&self) -> Arc<LivePalette> {
        Arc::clone(&self.palette)
    }

    /// Style for the current mode and preferences.
    ///
    /// Private browsing always gets the private style. Otherwise an accent or
    /// black choice picks its own style and everything else is the base style.
    pub fn current_style(&self) -> ThemeStyle {
        self.style_for(&self.snapshot())
    }

    /// Variant the surface should render.
    pub fn active_variant(&self) -> ThemeVariant {
        self.select(&self.snapshot()).variant
    }

    /// Request a browsing-mode switch. See the module docs for the guards.
    pub fn set_browsing_mode(&mut self, mode: BrowsingMode) -> TransitionOutcome {
        let _span = tracing::debug_span!(
            "tinct.theme.transition",
            from = %self.mode,
            to = %mode,
        )
        .entered();

        let outcome = if mode == self.mode {
            TransitionOutcome::Unchanged
        } else if self.host.is_mode_locked() {
            TransitionOutcome::ModeLocked
        } else if self.host.is_finishing() {
            TransitionOutcome::Finishing
        } else {
            self.mode = mode;
            self.host.persist_browsing_mode(mode);
            if self.restart_pending {
                TransitionOutcome::Coalesced
            } else {
                self.restart_pending = true;
                self.host.restart();
                TransitionOutcome::Restarted
            }
        };

        tracing::debug!(outcome = ?outcome, "browsing mode transition");
        outcome
    }

    /// Pin the surface to its current mode.
    pub fn lock_mode(&mut self) {
        self.host.set_mode_locked(true);
    }

    /// Apply style, palette and system bars before the surface is shown.
    ///
    /// Clears any pending restart: a resumed surface is the restarted one.
    pub fn on_resume(&mut self, override_status_bar_color: bool) -> SystemBarConfig {
        let _span = tracing::debug_span!("tinct.theme.resume", mode = %self.mode).entered();
        self.restart_pending = false;

        let prefs = self.snapshot();
        let style = self.style_for(&prefs);
        self.host.apply_style(style);
        self.refresh_palette_from(&prefs);
        self.apply_bars_from(&prefs, override_status_bar_color)
    }

    /// Re-evaluate after an OS appearance change or a preference write.
    ///
    /// Style resources are not hot-swapped; a changed style is applied on the
    /// next resume.
    pub fn on_theme_inputs_changed(&mut self, override_status_bar_color: bool) -> SystemBarConfig {
        let _span = tracing::debug_span!("tinct.theme.reconcile", mode = %self.mode).entered();
        let prefs = self.snapshot();
        self.refresh_palette_from(&prefs);
        self.apply_bars_from(&prefs, override_status_bar_color)
    }

    /// Swap the live palette to the selected variant. Returns whether it
    /// changed; the host is asked to reflow only then.
    pub fn refresh_palette(&mut self) -> bool {
        let prefs = self.snapshot();
        self.refresh_palette_from(&prefs)
    }

    /// Color the system bars for the current state and hand them to the host.
    pub fn apply_status_bar_theme(&mut self, override_status_bar_color: bool) -> SystemBarConfig {
        let prefs = self.snapshot();
        self.apply_bars_from(&prefs, override_status_bar_color)
    }

    /// Resolve `attr` against the host's style, degrading to the fallback
    /// table and then to [`ResourceId::TRANSPARENT`].
    pub fn resolve_attribute(&self, attr: AttributeId) -> ResourceId {
        resolve_attribute_detailed(attr, &self.host, self.config.miss_severity()).resource()
    }

    /// [`resolve_attribute`](Self::resolve_attribute) mapped to a color from
    /// the live palette.
    pub fn resolve_attribute_color(&self, attr: AttributeId) -> Color {
        let snapshot = self.palette.load_ref();
        self.attribute_color(attr, &snapshot.palette)
    }

    fn attribute_color(&self, attr: AttributeId, palette: &PaletteModel) -> Color {
        resource_color(self.resolve_attribute(attr), &self.host, palette)
    }

    fn snapshot(&self) -> ThemePreferences {
        snapshot_for(self.preferences.as_ref(), self.mode)
    }

    fn select(&self, prefs: &ThemePreferences) -> Selection {
        explain_selection(prefs, self.appearance.as_ref(), true)
    }

    /// Accent or black chosen, ignoring browsing mode.
    fn forced_dark(&self, prefs: &ThemePreferences) -> Option<ThemeVariant> {
        let chosen = explain_selection(prefs, self.appearance.as_ref(), false).variant;
        matches!(chosen, ThemeVariant::Accent(_) | ThemeVariant::Black).then_some(chosen)
    }

    fn style_for(&self, prefs: &ThemePreferences) -> ThemeStyle {
        if self.mode.is_private() {
            return ThemeStyle::Private;
        }
        match self.forced_dark(prefs) {
            Some(ThemeVariant::Accent(accent)) => ThemeStyle::Accent(accent),
            Some(ThemeVariant::Black) => ThemeStyle::Black,
            _ => ThemeStyle::Normal,
        }
    }

    fn refresh_palette_from(&mut self, prefs: &ThemePreferences) -> bool {
        let selection = self.select(prefs);
        tracing::trace!(
            variant = %selection.variant,
            step = selection.step.name(),
            "theme selected"
        );
        let changed = self
            .palette
            .replace(selection.variant, *palette_for(selection.variant));
        if changed {
            self.host.reflow();
        }
        changed
    }

    fn apply_bars_from(
        &mut self,
        prefs: &ThemePreferences,
        override_status_bar_color: bool,
    ) -> SystemBarConfig {
        let _span = tracing::debug_span!("tinct.theme.system_bars").entered();
        let variant = self.select(prefs).variant;
        let palette = palette_for(variant);
        let appearance = BarAppearance::decide(
            self.mode.is_private(),
            self.forced_dark(prefs).is_some(),
            os_variant(self.appearance.as_ref()) == ThemeVariant::Dark,
        );
        let inputs = SystemBarInputs {
            appearance,
            palette,
            theme_status_bar_color: self.attribute_color(AttributeId::STATUS_BAR_COLOR, palette),
            override_status_bar_color,
            capability_level: self.appearance.capability_level(),
            floor: self.config.capability_floor(),
        };
        let bars = compute_system_bars(&inputs);
        tracing::debug!(
            appearance = ?appearance,
            status = %bars.status_bar_color,
            navigation = %bars.navigation_bar_color,
            "system bars applied"
        );
        self.host.apply_system_bars(&bars);
        bars
    }
}

/// Store contents with the private-browsing flag taken from `mode`.
fn snapshot_for(store: &dyn PreferenceStore, mode: BrowsingMode) -> ThemePreferences {
    ThemePreferences::snapshot(store).with_private_browsing(mode.is_private())
}

impl<H: SurfaceHost + fmt::Debug> fmt::Debug for ThemeManager<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeManager")
            .field("host", &self.host)
            .field("mode", &self.mode)
            .field("restart_pending", &self.restart_pending)
            .field("palette", &self.palette)
            .finish_non_exhaustive()
    }
}
