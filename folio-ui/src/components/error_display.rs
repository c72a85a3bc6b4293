//! Load failure notice.

use crate::state::ErrorReport;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub report: ErrorReport,
}

/// Headline of the failure with its causes listed underneath.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            role: "alert",
            style: "max-width: 640px; margin: 16px auto; padding: 12px 16px; border-left: 4px solid #C62828; background: #FFF5F5; color: #7F1D1D;",
            p {
                style: "margin: 0; font-weight: 600;",
                "{props.report.message}"
            }
            if !props.report.causes.is_empty() {
                ul {
                    style: "margin: 6px 0 0 0; padding-left: 18px; font-size: 13px;",
                    for cause in props.report.causes.iter() {
                        li { "{cause}" }
                    }
                }
            }
        }
    }
}
