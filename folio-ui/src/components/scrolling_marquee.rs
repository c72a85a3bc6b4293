//! Scrolling marquee: a velocity scroller inside a delayed fade + clip-path reveal.

use super::velocity_scroller::VelocityScroller;
use crate::frame_loop;
use dioxus::prelude::*;
use folio_motion::config::MarqueeConfig;
use folio_motion::content::{MarqueeBlock, MarqueeContent};
use folio_motion::entrance::{EntranceConfig, EntranceFrame, EntranceTransition, Phase};

#[derive(Props, Clone, PartialEq)]
pub struct ScrollingMarqueeProps {
    pub content: MarqueeContent,
    #[props(default)]
    pub config: MarqueeConfig,
}

/// Marquee strip that reveals itself after the entrance delay. The scroll runs
/// in the inner `VelocityScroller` from mount, during the entrance as well.
#[component]
pub fn ScrollingMarquee(props: ScrollingMarqueeProps) -> Element {
    let entrance = use_signal(|| EntranceFrame::HIDDEN);
    let phase = use_signal(|| Phase::Entering);

    let config = props.config.entrance;
    use_effect(move || {
        spawn(async move {
            run_entrance(config, entrance, phase).await;
        });
    });

    let strip_style = entrance().style();
    let label = props
        .content
        .blocks()
        .iter()
        .map(MarqueeBlock::plain_text)
        .collect::<Vec<_>>()
        .join(" ");

    rsx! {
        div {
            class: "{props.config.class_name}",
            role: "marquee",
            "aria-label": "{label}",
            "data-phase": phase().as_str(),
            style: "overflow: hidden; width: 100%; {strip_style}",
            VelocityScroller {
                content: props.content.clone(),
                velocity: props.config.velocity,
                num_copies: props.config.num_copies,
                class_name: props.config.scroller_class_name.clone(),
            }
        }
    }
}

/// Samples the entrance once per animation frame until it settles.
async fn run_entrance(
    config: EntranceConfig,
    mut entrance: Signal<EntranceFrame>,
    mut phase: Signal<Phase>,
) {
    let mut started: Option<EntranceTransition> = None;

    while let Some(timestamp) = frame_loop::next_frame().await {
        let now = frame_loop::to_seconds(timestamp);
        let transition = *started.get_or_insert_with(|| EntranceTransition::new(config, now));

        let frame = transition.sample(now);
        if *entrance.peek() != frame {
            entrance.set(frame);
        }
        if transition.phase(now) == Phase::Steady {
            log::debug!("marquee entrance settled at {now:.3}s");
            phase.set(Phase::Steady);
            return;
        }
    }

    // No animation frames to drive the reveal: show the strip as is.
    entrance.set(EntranceFrame::VISIBLE);
    phase.set(Phase::Steady);
}
