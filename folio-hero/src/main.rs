//! Portfolio landing page.
//!
//! Data flow:
//! 1. `build.rs` copies `fixtures/marquee.json` into OUT_DIR.
//! 2. `include_str!` embeds it into the WASM binary.
//! 3. On mount: parse the hero config, then check once per animation frame
//!    until the document has finished loading.
//! 4. Swap the LoadingIndicator for the hero and its ScrollingMarquee.

use dioxus::prelude::*;
use dioxus_logger::tracing::{error, info, Level};
use folio_motion::config::HeroConfig;
use folio_ui::components::{ErrorDisplay, LoadingIndicator, ScrollingMarquee};
use folio_ui::frame_loop;
use folio_ui::state::{AppState, ErrorReport};

// Hero marquee content and options, embedded at compile time.
const MARQUEE_JSON: &str = include_str!(concat!(env!("OUT_DIR"), "/marquee.json"));

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    info!("Starting folio hero");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("folio-root"))
        .launch(App);
}

fn load_hero() -> anyhow::Result<HeroConfig> {
    HeroConfig::from_json(MARQUEE_JSON)
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Effect: parse config, wait for the document, end the loading phase ───
    use_effect(move || {
        match load_hero() {
            Ok(hero) => state.hero.set(Some(hero)),
            Err(err) => {
                error!("{err:#}");
                state.error.set(Some(ErrorReport::from_anyhow(&err)));
            }
        }

        spawn(async move {
            while !frame_loop::document_ready() {
                if frame_loop::next_frame().await.is_none() {
                    break;
                }
            }
            info!("Document ready, showing hero");
            state.loading.set(false);
        });
    });

    // ─── Render ───
    rsx! {
        div {
            style: "margin: 0 auto; font-family: system-ui, -apple-system, sans-serif; color: #222;",

            if let Some(report) = state.error.read().as_ref() {
                ErrorDisplay { report: report.clone() }
            }

            if *state.loading.read() {
                LoadingIndicator {}
            } else {
                HeroSection {}
            }
        }
    }
}

/// Heading plus the scrolling marquee, once the config is available.
#[component]
fn HeroSection() -> Element {
    let state = use_context::<AppState>();
    let Some(hero) = state.hero.read().clone() else {
        return rsx! {};
    };

    rsx! {
        section {
            style: "min-height: 100vh; display: flex; flex-direction: column; justify-content: center; gap: 32px; overflow: hidden;",
            h1 {
                style: "margin: 0 auto; max-width: 900px; padding: 0 16px; font-size: clamp(32px, 6vw, 72px); line-height: 1.05;",
                "Hi, I build things for the web."
            }
            ScrollingMarquee {
                content: hero.content,
                config: hero.marquee,
            }
        }
    }
}
