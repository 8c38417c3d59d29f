//! Portfolio page demo
//!
//! Lays out a five-section single-page portfolio on an in-memory surface,
//! registers a reveal group per section, then simulates a reader scrolling
//! to the bottom at 60 fps while the coordinator drives the animations.
//!
//! Run with: cargo run -p portfolio
//! Set RUST_LOG=debug to watch individual transitions start and settle.

use anyhow::Result;
use unveil_animation::{Easing, Transition};
use unveil_core::{
    MemoryPrefs, MemorySurface, NodeId, Rect, RenderSurface, StyleMap, StyleProperty,
    ThemePreference, Viewport,
};
use unveil_reveal::{Group, RevealCoordinator, RevealSpec, Threshold};

const FRAME_MS: f32 = 1000.0 / 60.0;
const SECTION_HEIGHT: f32 = 700.0;
const PAGE_WIDTH: f32 = 1200.0;

/// Advances a simulated scroll position over ticks, standing in for the
/// browser's scroll events.
struct ScrollTimeline {
    target: f32,
    per_frame: f32,
}

impl ScrollTimeline {
    /// Reach `target` over `duration_ms` of frames.
    fn new(target: f32, duration_ms: f32) -> Self {
        Self {
            target,
            per_frame: target / (duration_ms / FRAME_MS),
        }
    }

    /// Move the viewport one frame along; true until the target is reached.
    fn advance(&self, viewport: &mut Viewport) -> bool {
        if viewport.scroll_y >= self.target {
            return false;
        }
        viewport.scroll_by(self.per_frame.min(self.target - viewport.scroll_y));
        true
    }
}

struct Section {
    name: &'static str,
    container: NodeId,
    items: Vec<NodeId>,
}

/// Stack the five sections vertically, each with a handful of child items
/// (headings, cards, skill bars) that reveal as a staggered cascade.
fn build_page(surface: &mut MemorySurface) -> Vec<Section> {
    let names = ["about", "projects", "skills", "education", "contact"];
    names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let top = 600.0 + i as f32 * SECTION_HEIGHT;
            let container = surface.insert(Rect::new(0.0, top, PAGE_WIDTH, SECTION_HEIGHT));
            let item_count = if *name == "skills" { 6 } else { 3 };
            let items = (0..item_count)
                .map(|j| {
                    surface.insert(Rect::new(
                        60.0,
                        top + 80.0 + j as f32 * 90.0,
                        PAGE_WIDTH - 120.0,
                        70.0,
                    ))
                })
                .collect();
            Section {
                name,
                container,
                items,
            }
        })
        .collect()
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Theme preference survives page loads through the "darkMode" key.
    let mut theme = ThemePreference::load(MemoryPrefs::new());
    tracing::info!(mode = ?theme.mode(), "theme loaded");
    theme.toggle();
    tracing::info!(mode = ?theme.mode(), "theme toggled");

    let mut surface = MemorySurface::new();
    let sections = build_page(&mut surface);
    let page_bottom = 600.0 + sections.len() as f32 * SECTION_HEIGHT;

    let mut coordinator = RevealCoordinator::new();
    for section in &sections {
        // Skill bars cascade; other sections reveal as one block.
        let (spec, stagger) = match section.name {
            "skills" => (RevealSpec::fade_up(20.0).with_duration(600.0), 100.0),
            "contact" => (
                RevealSpec::scale_in(0.9).with_duration(600.0).reverse_on_exit(true),
                0.0,
            ),
            _ => (RevealSpec::fade_up(20.0).with_duration(600.0), 0.0),
        };
        coordinator.register(
            &mut surface,
            Group::new(section.container)
                .elements(section.items.iter().copied())
                .stagger(stagger),
            spec,
            Threshold::ratio(0.2),
        )?;
    }
    tracing::info!(groups = coordinator.group_count(), "page registered");

    // A one-off hover emphasis tween rides the coordinator's scheduler:
    // the first project card swells to 1.05x while the page scrolls.
    let hover_card = sections[1].items[0];
    let scheduler = coordinator.scheduler_handle();
    let mut hover = scheduler.add(Transition::new(
        StyleMap::new().with(StyleProperty::Scale, 1.0),
        StyleMap::new().with(StyleProperty::Scale, 1.05),
        200.0,
        0.0,
        Easing::EaseOut,
    ));

    // Scroll from top to bottom over ~8 seconds, then idle until every
    // transition has settled.
    let mut viewport = Viewport::new(PAGE_WIDTH, 800.0);
    let timeline = ScrollTimeline::new(page_bottom - viewport.height, 8000.0);
    let mut t = 0.0;
    loop {
        let scrolling = timeline.advance(&mut viewport);
        let active = coordinator.tick(&mut surface, &viewport, FRAME_MS);
        if let Some(id) = hover {
            if let Some(value) = scheduler.value(id) {
                surface.apply_style(hover_card, &value);
            }
            if scheduler.is_finished(id) {
                scheduler.remove(id);
                hover = None;
                tracing::debug!(node = ?hover_card, "hover emphasis settled");
            }
        }
        t += FRAME_MS;
        if !active && !scrolling {
            break;
        }
        if t > 30_000.0 {
            anyhow::bail!("reveal never settled");
        }
    }

    for section in &sections {
        let opacity = section
            .items
            .iter()
            .filter_map(|n| surface.style(*n).and_then(|s| s.get(StyleProperty::Opacity)))
            .fold(f32::INFINITY, f32::min);
        tracing::info!(
            section = section.name,
            min_opacity = opacity,
            "section revealed"
        );
    }
    tracing::info!(
        elapsed_ms = t,
        style_writes = surface.style_writes(),
        "scroll-through finished"
    );
    Ok(())
}
