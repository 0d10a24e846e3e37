#![forbid(unsafe_code)]

//! Log policy for attribute resolution and theme transitions.
//!
//! - An attribute unknown to both the live style and the fallback table emits
//!   exactly one WARN (or one ERROR with `strict_attributes`) and resolves to
//!   the transparent sentinel.
//! - A fallback hit is logged at DEBUG only.
//! - Transition and system-bar events are emitted inside their
//!   `tinct.theme.*` spans.
//!
//! Run:
//!   cargo test -p tinct-runtime --test attribute_miss_logging

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tinct_palette::Color;
use tinct_runtime::{
    AttributeId, BrowsingMode, EmptyStyleContext, MemoryPreferenceStore, ResourceId,
    StaticAppearance, StyleContext, SurfaceHost, SystemBarConfig, ThemeConfig, ThemeManager,
    ThemeStyle, resolve_attribute, resolve_attribute_color,
};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;

const UNKNOWN: AttributeId = AttributeId(0x7f04_7777);

// ============================================================================
// Test Infrastructure
// ============================================================================

#[derive(Debug, Clone)]
#[allow(dead_code)]
struct CapturedEvent {
    level: tracing::Level,
    fields: HashMap<String, String>,
    parent_span_name: Option<String>,
}

struct EventCapture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

struct EventCaptureHandle {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl EventCaptureHandle {
    fn events(&self) -> Vec<CapturedEvent> {
        self.events.lock().unwrap().clone()
    }

    fn at_level(&self, level: tracing::Level) -> Vec<CapturedEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.level == level)
            .collect()
    }

    fn with_message(&self, needle: &str) -> Vec<CapturedEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.fields.get("message").is_some_and(|m| m.contains(needle)))
            .collect()
    }
}

struct FieldVisitor(Vec<(String, String)>);

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.0.push((field.name().to_string(), format!("{value:?}")));
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.0.push((field.name().to_string(), value.to_string()));
    }
}

impl<S> tracing_subscriber::Layer<S> for EventCapture
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, ctx: tracing_subscriber::layer::Context<'_, S>) {
        let mut visitor = FieldVisitor(Vec::new());
        event.record(&mut visitor);

        let parent_span_name = ctx
            .current_span()
            .id()
            .and_then(|id| ctx.span(id))
            .map(|span_ref| span_ref.name().to_string());

        self.events.lock().unwrap().push(CapturedEvent {
            level: *event.metadata().level(),
            fields: visitor.0.into_iter().collect(),
            parent_span_name,
        });
    }
}

fn with_captured_events<F>(f: F) -> EventCaptureHandle
where
    F: FnOnce(),
{
    let events = Arc::new(Mutex::new(Vec::new()));
    let layer = EventCapture {
        events: events.clone(),
    };
    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::filter::LevelFilter::TRACE)
        .with(layer);
    tracing::subscriber::with_default(subscriber, f);
    EventCaptureHandle { events }
}

#[derive(Debug, Default)]
struct Host {
    restarts: usize,
    persisted: Option<BrowsingMode>,
}

impl StyleContext for Host {
    fn resolve(&self, attr: AttributeId) -> Option<ResourceId> {
        (attr == AttributeId::TEXT_PRIMARY).then_some(ResourceId(0x7f08_0042))
    }

    fn color(&self, resource: ResourceId) -> Option<Color> {
        (resource == ResourceId(0x7f08_0042)).then_some(Color::hex(0xfbfbfe))
    }
}

impl SurfaceHost for Host {
    fn restart(&mut self) {
        self.restarts += 1;
    }
    fn is_mode_locked(&self) -> bool {
        false
    }
    fn set_mode_locked(&mut self, _locked: bool) {}
    fn is_finishing(&self) -> bool {
        false
    }
    fn persist_browsing_mode(&mut self, mode: BrowsingMode) {
        self.persisted = Some(mode);
    }
    fn restored_browsing_mode(&self) -> Option<BrowsingMode> {
        self.persisted
    }
    fn apply_style(&mut self, _style: ThemeStyle) {}
    fn apply_system_bars(&mut self, _bars: &SystemBarConfig) {}
}

fn manager(config: ThemeConfig) -> ThemeManager<Host> {
    ThemeManager::new(
        Host::default(),
        Arc::new(MemoryPreferenceStore::new()),
        Arc::new(StaticAppearance::light()),
        config,
        BrowsingMode::Normal,
    )
}

// ============================================================================
// Attribute misses
// ============================================================================

#[test]
fn unknown_attribute_warns_exactly_once() {
    let mut resolved = ResourceId::NONE;
    let handle = with_captured_events(|| {
        resolved = resolve_attribute(UNKNOWN, &EmptyStyleContext);
    });

    assert_eq!(resolved, ResourceId::TRANSPARENT);
    let warnings = handle.at_level(tracing::Level::WARN);
    assert_eq!(warnings.len(), 1, "expected one warning, got {warnings:?}");
    assert_eq!(
        warnings[0].fields.get("attr").map(String::as_str),
        Some("attr:0x7f047777")
    );
}

#[test]
fn unknown_attribute_color_is_transparent_with_one_warning() {
    let mut color = Color::WHITE;
    let handle = with_captured_events(|| {
        let palette = tinct_palette::palette_for(tinct_palette::ThemeVariant::Dark);
        color = resolve_attribute_color(UNKNOWN, &EmptyStyleContext, palette);
    });

    assert_eq!(color, Color::TRANSPARENT);
    assert_eq!(handle.at_level(tracing::Level::WARN).len(), 1);
}

#[test]
fn fallback_hit_logs_debug_only() {
    let handle = with_captured_events(|| {
        let _ = resolve_attribute(AttributeId::LAYER2, &EmptyStyleContext);
    });

    assert!(handle.at_level(tracing::Level::WARN).is_empty());
    assert_eq!(handle.with_message("fallback table").len(), 1);
}

#[test]
fn live_hit_is_silent() {
    let m = manager(ThemeConfig::default());
    let handle = with_captured_events(|| {
        assert_eq!(
            m.resolve_attribute_color(AttributeId::TEXT_PRIMARY),
            Color::hex(0xfbfbfe)
        );
    });
    assert!(handle.events().is_empty(), "{:?}", handle.events());
}

#[test]
fn strict_config_escalates_to_error() {
    let m = manager(ThemeConfig {
        strict_attributes: true,
        ..ThemeConfig::default()
    });
    let handle = with_captured_events(|| {
        assert_eq!(m.resolve_attribute(UNKNOWN), ResourceId::TRANSPARENT);
    });

    assert!(handle.at_level(tracing::Level::WARN).is_empty());
    assert_eq!(handle.at_level(tracing::Level::ERROR).len(), 1);
}

// ============================================================================
// Span placement
// ============================================================================

#[test]
fn transition_events_sit_in_transition_span() {
    let mut m = manager(ThemeConfig::default());
    let handle = with_captured_events(|| {
        m.set_browsing_mode(BrowsingMode::Private);
        m.set_browsing_mode(BrowsingMode::Private);
    });

    let transitions = handle.with_message("browsing mode transition");
    assert_eq!(transitions.len(), 2);
    for event in &transitions {
        assert_eq!(event.level, tracing::Level::DEBUG);
        assert_eq!(
            event.parent_span_name.as_deref(),
            Some("tinct.theme.transition")
        );
    }
    assert_eq!(
        transitions[0].fields.get("outcome").map(String::as_str),
        Some("Restarted")
    );
    assert_eq!(
        transitions[1].fields.get("outcome").map(String::as_str),
        Some("Unchanged")
    );
}

#[test]
fn resume_logs_selection_and_bars() {
    let mut m = manager(ThemeConfig::default());
    let handle = with_captured_events(|| {
        m.on_resume(false);
    });

    let selected = handle.with_message("theme selected");
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].level, tracing::Level::TRACE);
    assert_eq!(
        selected[0].fields.get("step").map(String::as_str),
        Some("default")
    );

    let bars = handle.with_message("system bars applied");
    assert_eq!(bars.len(), 1);
    assert_eq!(
        bars[0].parent_span_name.as_deref(),
        Some("tinct.theme.system_bars")
    );
    assert!(handle.at_level(tracing::Level::WARN).is_empty());
}
