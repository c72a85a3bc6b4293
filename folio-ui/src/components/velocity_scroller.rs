//! Velocity scroller: `num_copies` copies of the marquee content on a track that
//! scrolls forever at a constant velocity.

use crate::frame_loop;
use dioxus::prelude::*;
use folio_motion::config::{DEFAULT_NUM_COPIES, DEFAULT_VELOCITY};
use folio_motion::content::{MarqueeBlock, MarqueeContent, Segment};
use folio_motion::scroller::{copies_needed, track_style, VelocityScroller as ScrollState};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_SCROLLER_ID: AtomicUsize = AtomicUsize::new(0);

type SharedScroll = Rc<RefCell<Option<ScrollState>>>;

/// DOM id of the first block of copy `copy`. The gap between copy 0 and copy 1
/// is the wrap distance.
pub fn copy_anchor_id(id: &str, copy: usize) -> String {
    format!("{id}-copy-{copy}")
}

/// DOM id of the track itself.
pub fn track_id(id: &str) -> String {
    format!("{id}-track")
}

#[derive(Props, Clone, PartialEq)]
pub struct VelocityScrollerProps {
    pub content: MarqueeContent,
    /// Pixels per second, read when the scroll loop starts
    #[props(default = DEFAULT_VELOCITY)]
    pub velocity: f64,
    #[props(default = DEFAULT_NUM_COPIES)]
    pub num_copies: usize,
    /// Class applied to every block
    #[props(default = String::new())]
    pub class_name: String,
}

/// Scrolling track. Owns its frame loop: the task is cancelled on unmount and
/// `use_drop` halts the scroll state so no late frame moves the track.
#[component]
pub fn VelocityScroller(props: VelocityScrollerProps) -> Element {
    let id = use_hook(|| {
        format!(
            "folio-scroller-{}",
            NEXT_SCROLLER_ID.fetch_add(1, Ordering::Relaxed)
        )
    });
    let translate_x = use_signal(|| 0.0_f64);
    let state: SharedScroll = use_hook(|| Rc::new(RefCell::new(None)));

    let loop_state = state.clone();
    let loop_id = id.clone();
    let velocity = props.velocity;
    let num_copies = props.num_copies;
    use_effect(move || {
        let state = loop_state.clone();
        let id = loop_id.clone();
        spawn(async move {
            run_scroll_loop(state, id, velocity, num_copies, translate_x).await;
        });
    });

    use_drop(move || {
        if let Some(scroll) = state.borrow_mut().as_mut() {
            log::debug!("scroller halted at position {:.1}px", scroll.position());
            scroll.halt();
        }
    });

    let style = track_style(translate_x());
    let track = track_id(&id);

    rsx! {
        div {
            id: "{track}",
            style: "{style}",
            MarqueeCopies {
                id: id.clone(),
                content: props.content.clone(),
                num_copies: props.num_copies,
                class_name: props.class_name.clone(),
            }
        }
    }
}

/// Advances the scroll once per animation frame until halted. A motionless
/// track stops after its first frame.
async fn run_scroll_loop(
    state: SharedScroll,
    id: String,
    velocity: f64,
    num_copies: usize,
    mut translate_x: Signal<f64>,
) {
    let mut coverage_checked = false;

    while let Some(timestamp) = frame_loop::next_frame().await {
        let now = frame_loop::to_seconds(timestamp);
        let copy_width = measure_copy_width(&id);
        if !coverage_checked {
            coverage_checked = check_coverage(num_copies, copy_width);
        }

        let next = {
            let mut guard = state.borrow_mut();
            let scroll = guard.get_or_insert_with(|| {
                log::debug!("scroller {id} started at {now:.3}s, {velocity} px/s");
                ScrollState::new(velocity)
            });
            if scroll.is_halted() {
                None
            } else {
                scroll.advance(now);
                Some(scroll.translate_x(copy_width))
            }
        };

        let Some(next) = next else {
            break;
        };
        if *translate_x.peek() != next {
            translate_x.set(next);
        }
        if velocity == 0.0 {
            log::debug!("scroller {id} is static, stopping its frame loop");
            break;
        }
    }
}

/// Distance between the first blocks of copy 0 and copy 1, or the whole track
/// when there is only one copy. Measured every frame, so resizes are picked up.
fn measure_copy_width(id: &str) -> f64 {
    let first = frame_loop::element_left(&copy_anchor_id(id, 0));
    let second = frame_loop::element_left(&copy_anchor_id(id, 1));
    match (first, second) {
        (Some(first), Some(second)) if second > first => second - first,
        _ => frame_loop::element_width(&track_id(id)).unwrap_or(0.0),
    }
}

/// Warns once the layout is measurable if the copies cannot cover the viewport.
/// Returns whether the check could run.
fn check_coverage(num_copies: usize, copy_width: f64) -> bool {
    if copy_width <= 0.0 {
        return false;
    }
    let Some(viewport) = frame_loop::viewport_width() else {
        return false;
    };
    let needed = copies_needed(viewport, copy_width);
    if num_copies < needed {
        log::warn!(
            "scroller has {num_copies} copies but needs {needed} to cover a {viewport:.0}px viewport; a gap will show"
        );
    }
    true
}

/// A block as placed on the track.
#[derive(Debug, Clone, PartialEq)]
struct PlacedBlock {
    key: String,
    /// Measurement id, set on the first block of copies 0 and 1 only
    anchor: Option<String>,
    /// Repeats are hidden from screen readers
    hidden: bool,
    block: MarqueeBlock,
}

fn placed_blocks(id: &str, content: &MarqueeContent, num_copies: usize) -> Vec<PlacedBlock> {
    content
        .repeated(num_copies)
        .map(|placed| PlacedBlock {
            key: placed.key(),
            anchor: (placed.index == 0 && placed.copy < 2)
                .then(|| copy_anchor_id(id, placed.copy)),
            hidden: placed.copy > 0,
            block: placed.block.clone(),
        })
        .collect()
}

#[derive(Props, Clone, PartialEq)]
struct MarqueeCopiesProps {
    id: String,
    content: MarqueeContent,
    num_copies: usize,
    class_name: String,
}

/// The copies themselves, split out so a new translation does not rebuild them.
#[component]
fn MarqueeCopies(props: MarqueeCopiesProps) -> Element {
    let placed = placed_blocks(&props.id, &props.content, props.num_copies);

    rsx! {
        for item in placed {
            span {
                key: "{item.key}",
                id: item.anchor.clone(),
                class: "{props.class_name}",
                style: "flex-shrink: 0; padding-right: 0.5em;",
                "aria-hidden": if item.hidden { "true" } else { "false" },
                {render_block(&item.block)}
            }
        }
    }
}

fn render_block(block: &MarqueeBlock) -> Element {
    rsx! {
        for segment in block.segments.iter() {
            {render_segment(segment)}
        }
    }
}

fn render_segment(segment: &Segment) -> Element {
    match segment {
        Segment::Text { text } => rsx! {
            span { "{text}" }
        },
        Segment::Link { label, href } => rsx! {
            a {
                href: "{href}",
                style: "color: inherit; text-decoration: underline;",
                "{label}"
            }
        },
    }
}
