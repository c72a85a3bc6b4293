//! Loading indicator component.

use dioxus::prelude::*;

/// Fixed fraction of the viewport the placeholder occupies, centered.
pub(crate) const CONTAINER_STYLE: &str =
    "width: 90vw; height: 90vh; margin: 0 auto; display: flex; justify-content: center; align-items: center; color: #666;";

pub(crate) const ICON_STYLE: &str =
    "width: 48px; height: 48px; animation: folio-spin 0.9s linear infinite;";

const SPIN_KEYFRAMES: &str =
    "@keyframes folio-spin { from { transform: rotate(0deg); } to { transform: rotate(360deg); } }";

/// Centered spinning icon shown while the page loads. Takes no props and keeps no state.
#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        div {
            role: "status",
            "aria-live": "polite",
            style: CONTAINER_STYLE,
            style { "{SPIN_KEYFRAMES}" }
            svg {
                style: ICON_STYLE,
                view_box: "0 0 24 24",
                fill: "none",
                circle {
                    cx: "12",
                    cy: "12",
                    r: "10",
                    stroke: "currentColor",
                    stroke_width: "3",
                    opacity: "0.25",
                }
                path {
                    d: "M12 2a10 10 0 0 1 10 10",
                    stroke: "currentColor",
                    stroke_width: "3",
                    stroke_linecap: "round",
                }
            }
            span {
                style: "position: absolute; width: 1px; height: 1px; overflow: hidden; clip: rect(0 0 0 0);",
                "Loading..."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;

    fn first_render() -> String {
        let mut dom = VirtualDom::new(LoadingIndicator);
        format!("{:?}", dom.rebuild_to_vec().edits)
    }

    #[test]
    fn test_renders_identically_every_time() {
        let first = first_render();
        assert!(!first.is_empty());
        for _ in 0..3 {
            assert_eq!(first_render(), first);
        }
    }

    #[test]
    fn test_container_is_centered_viewport_fraction() {
        assert!(CONTAINER_STYLE.contains("width: 90vw"));
        assert!(CONTAINER_STYLE.contains("height: 90vh"));
        assert!(CONTAINER_STYLE.contains("justify-content: center"));
        assert!(CONTAINER_STYLE.contains("align-items: center"));
    }

    #[test]
    fn test_icon_uses_declared_keyframes() {
        assert!(ICON_STYLE.contains("folio-spin"));
        assert!(ICON_STYLE.contains("infinite"));
        assert!(SPIN_KEYFRAMES.starts_with("@keyframes folio-spin"));
    }
}
