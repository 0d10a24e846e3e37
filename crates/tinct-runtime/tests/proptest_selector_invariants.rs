//! Property-based tests for theme selection.
//!
//! 1. **Determinism**: any flag combination selects one variant, the same one
//!    on every call.
//! 2. **Accent over black**: an accent flag always beats the black flag.
//! 3. **Black over device**: black beats follow-device and auto-battery.
//! 4. **Private gate**: with private browsing set, `allow_private` alone
//!    decides between Private and the non-private selection.
//! 5. **First match**: the reported step is the first table row that matches.

use proptest::prelude::*;
use tinct_palette::{Accent, ThemeVariant};
use tinct_runtime::{
    AppearanceMode, PRECEDENCE, PrecedenceStep, StaticAppearance, ThemeFlags, ThemePreferences,
    explain_selection, select_theme, selector::SelectionInput,
};

fn flags_strategy() -> impl Strategy<Value = ThemeFlags> {
    any::<u16>().prop_map(ThemeFlags::from_bits_truncate)
}

fn mode_strategy() -> impl Strategy<Value = AppearanceMode> {
    prop_oneof![
        Just(AppearanceMode::ForceLight),
        Just(AppearanceMode::ForceDark),
        Just(AppearanceMode::FollowSystem),
        Just(AppearanceMode::AutoBattery),
    ]
}

fn os_strategy() -> impl Strategy<Value = StaticAppearance> {
    (mode_strategy(), any::<bool>(), 16u32..40).prop_map(|(mode, dark, level)| StaticAppearance {
        mode,
        system_dark: dark,
        capability_level: level,
    })
}

fn accent_strategy() -> impl Strategy<Value = Accent> {
    (0..Accent::ALL.len()).prop_map(|i| Accent::ALL[i])
}

#[test]
fn fixed_scenarios() {
    let force_light = StaticAppearance::light().with_mode(AppearanceMode::ForceLight);
    assert_eq!(
        select_theme(&ThemePreferences::default(), &force_light, true),
        ThemeVariant::Light
    );

    let force_dark = StaticAppearance::light().with_mode(AppearanceMode::ForceDark);
    let blue_black = ThemePreferences::new(ThemeFlags::BLUE | ThemeFlags::BLACK, false);
    assert_eq!(
        select_theme(&blue_black, &force_dark, true),
        ThemeVariant::Accent(Accent::Blue)
    );
}

proptest! {
    #[test]
    fn selection_is_deterministic(
        flags in flags_strategy(),
        private in any::<bool>(),
        allow_private in any::<bool>(),
        os in os_strategy(),
    ) {
        let prefs = ThemePreferences::new(flags, private);
        let first = explain_selection(&prefs, &os, allow_private);
        for _ in 0..3 {
            prop_assert_eq!(explain_selection(&prefs, &os, allow_private), first);
        }
        prop_assert!(ThemeVariant::ALL.contains(&first.variant));
    }

    #[test]
    fn accent_beats_black(
        accent in accent_strategy(),
        extra in flags_strategy(),
        os in os_strategy(),
    ) {
        let flags = (extra - ThemeFlags::ACCENTS) | ThemeFlags::accent(accent) | ThemeFlags::BLACK;
        let prefs = ThemePreferences::new(flags, false);
        prop_assert_eq!(
            select_theme(&prefs, &os, true),
            ThemeVariant::Accent(accent)
        );
    }

    #[test]
    fn black_beats_device_settings(extra in flags_strategy(), os in os_strategy()) {
        let flags = (extra - ThemeFlags::ACCENTS)
            | ThemeFlags::BLACK
            | ThemeFlags::FOLLOW_DEVICE
            | ThemeFlags::AUTO_BATTERY;
        let prefs = ThemePreferences::new(flags, false);
        prop_assert_eq!(select_theme(&prefs, &os, true), ThemeVariant::Black);
    }

    #[test]
    fn private_gate_is_the_only_difference(flags in flags_strategy(), os in os_strategy()) {
        let private = ThemePreferences::new(flags, true);
        let public = ThemePreferences::new(flags, false);
        prop_assert_eq!(select_theme(&private, &os, true), ThemeVariant::Private);
        prop_assert_eq!(
            select_theme(&private, &os, false),
            select_theme(&public, &os, true)
        );
    }

    #[test]
    fn winner_is_first_matching_row(
        flags in flags_strategy(),
        private in any::<bool>(),
        os in os_strategy(),
    ) {
        let prefs = ThemePreferences::new(flags, private);
        let selection = explain_selection(&prefs, &os, true);
        let input = SelectionInput { preferences: &prefs, os: &os, allow_private: true };
        let position = PRECEDENCE.iter().position(|s| *s == selection.step).unwrap();
        for step in &PRECEDENCE[..position] {
            prop_assert_eq!(step.evaluate(&input), None, "{:?} should not match", step);
        }
        prop_assert_eq!(selection.step.evaluate(&input), Some(selection.variant));
    }

    #[test]
    fn no_theme_flags_means_light(private in any::<bool>(), os in os_strategy()) {
        let prefs = ThemePreferences::new(ThemeFlags::empty(), private);
        let selection = explain_selection(&prefs, &os, false);
        prop_assert_eq!(selection.variant, ThemeVariant::Light);
        prop_assert_eq!(selection.step, PrecedenceStep::Default);
    }
}
