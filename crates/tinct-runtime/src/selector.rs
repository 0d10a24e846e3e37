#![forbid(unsafe_code)]

//! Theme selection.
//!
//! [`select_theme`] maps a preference snapshot and the OS appearance to exactly
//! one [`ThemeVariant`]. The rules live in [`PRECEDENCE`], an ordered table of
//! steps evaluated top to bottom; the first step that matches decides.
//!
//! | Step            | Matches when                          | Result            |
//! |-----------------|---------------------------------------|-------------------|
//! | `Private`       | `allow_private` and private browsing  | `Private`         |
//! | `Accent(a)`     | accent flag for `a` (in `Accent::ALL`) | `Accent(a)`       |
//! | `Black`         | black flag                            | `Black`           |
//! | `FollowDevice`  | follow-device flag                    | OS light/dark     |
//! | `AutoBattery`   | auto-battery flag                     | OS light/dark     |
//! | `ExplicitDark`  | dark flag                             | `Dark`            |
//! | `ExplicitLight` | light flag                            | `Light`           |
//! | `Default`       | always                                | `Light`           |
//!
//! Selection is pure: no caching, no logging, same inputs give the same
//! variant. Callers re-run it on every resume, OS appearance change and
//! preference write.

use tinct_palette::{Accent, ThemeVariant};

use crate::appearance::{AppearanceMode, OsAppearance};
use crate::preferences::{ThemeFlags, ThemePreferences};

/// One row of the precedence table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrecedenceStep {
    Private,
    Accent(Accent),
    Black,
    FollowDevice,
    AutoBattery,
    ExplicitDark,
    ExplicitLight,
    Default,
}

/// Selection rules, highest priority first.
pub const PRECEDENCE: [PrecedenceStep; 16] = [
    PrecedenceStep::Private,
    PrecedenceStep::Accent(Accent::Violet),
    PrecedenceStep::Accent(Accent::Blue),
    PrecedenceStep::Accent(Accent::Pink),
    PrecedenceStep::Accent(Accent::Green),
    PrecedenceStep::Accent(Accent::Red),
    PrecedenceStep::Accent(Accent::Orange),
    PrecedenceStep::Accent(Accent::Yellow),
    PrecedenceStep::Accent(Accent::Cyan),
    PrecedenceStep::Accent(Accent::Purple),
    PrecedenceStep::Black,
    PrecedenceStep::FollowDevice,
    PrecedenceStep::AutoBattery,
    PrecedenceStep::ExplicitDark,
    PrecedenceStep::ExplicitLight,
    PrecedenceStep::Default,
];

/// Everything a step may look at.
#[derive(Clone, Copy)]
pub struct SelectionInput<'a> {
    pub preferences: &'a ThemePreferences,
    pub os: &'a dyn OsAppearance,
    /// `false` for callers that want a non-private preview (settings screens).
    pub allow_private: bool,
}

impl std::fmt::Debug for SelectionInput<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionInput")
            .field("preferences", self.preferences)
            .field("appearance_mode", &self.os.appearance_mode())
            .field("allow_private", &self.allow_private)
            .finish()
    }
}

impl PrecedenceStep {
    /// The variant this step selects, or `None` if it does not match.
    pub fn evaluate(self, input: &SelectionInput<'_>) -> Option<ThemeVariant> {
        let prefs = input.preferences;
        match self {
            PrecedenceStep::Private => {
                (input.allow_private && prefs.private_browsing).then_some(ThemeVariant::Private)
            }
            PrecedenceStep::Accent(accent) => prefs
                .has(ThemeFlags::accent(accent))
                .then_some(ThemeVariant::Accent(accent)),
            PrecedenceStep::Black => prefs.has(ThemeFlags::BLACK).then_some(ThemeVariant::Black),
            PrecedenceStep::FollowDevice => prefs
                .has(ThemeFlags::FOLLOW_DEVICE)
                .then(|| os_variant(input.os)),
            PrecedenceStep::AutoBattery => prefs
                .has(ThemeFlags::AUTO_BATTERY)
                .then(|| os_variant(input.os)),
            PrecedenceStep::ExplicitDark => {
                prefs.has(ThemeFlags::DARK).then_some(ThemeVariant::Dark)
            }
            PrecedenceStep::ExplicitLight => {
                prefs.has(ThemeFlags::LIGHT).then_some(ThemeVariant::Light)
            }
            PrecedenceStep::Default => Some(ThemeVariant::Light),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            PrecedenceStep::Private => "private",
            PrecedenceStep::Accent(_) => "accent",
            PrecedenceStep::Black => "black",
            PrecedenceStep::FollowDevice => "follow_device",
            PrecedenceStep::AutoBattery => "auto_battery",
            PrecedenceStep::ExplicitDark => "explicit_dark",
            PrecedenceStep::ExplicitLight => "explicit_light",
            PrecedenceStep::Default => "default",
        }
    }
}

/// Light or dark as dictated by the OS appearance mode.
pub fn os_variant(os: &dyn OsAppearance) -> ThemeVariant {
    let dark = match os.appearance_mode() {
        AppearanceMode::ForceLight => false,
        AppearanceMode::ForceDark => true,
        AppearanceMode::FollowSystem | AppearanceMode::AutoBattery => os.is_system_dark(),
    };
    if dark {
        ThemeVariant::Dark
    } else {
        ThemeVariant::Light
    }
}

/// A selected variant and the step that chose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selection {
    pub variant: ThemeVariant,
    pub step: PrecedenceStep,
}

/// Select the one variant that applies.
pub fn select_theme(
    preferences: &ThemePreferences,
    os: &dyn OsAppearance,
    allow_private: bool,
) -> ThemeVariant {
    explain_selection(preferences, os, allow_private).variant
}

/// Like [`select_theme`], also reporting which step matched.
pub fn explain_selection(
    preferences: &ThemePreferences,
    os: &dyn OsAppearance,
    allow_private: bool,
) -> Selection {
    let input = SelectionInput {
        preferences,
        os,
        allow_private,
    };
    PRECEDENCE
        .iter()
        .find_map(|&step| {
            step.evaluate(&input)
                .map(|variant| Selection { variant, step })
        })
        .unwrap_or(Selection {
            variant: ThemeVariant::Light,
            step: PrecedenceStep::Default,
        })
}
