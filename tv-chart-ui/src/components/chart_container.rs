//! Titled panel holding one embedded chart.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id vegaEmbed renders into
    pub id: String,
    /// Panel heading
    pub title: String,
    /// Spec document the chart is built from, shown as a caption
    #[props(default = String::new())]
    pub source: String,
    /// Whether the initial load pass is still running
    #[props(default = false)]
    pub loading: bool,
    /// Whether the spec failed to embed
    #[props(default = false)]
    pub unavailable: bool,
    /// Optional minimum height in pixels
    #[props(default = 320)]
    pub min_height: u32,
}

/// A panel for one chart. The header carries a status badge while the chart is
/// loading or after it failed to embed.
///
/// The inner `div` is left empty for vegaEmbed; nothing Dioxus renders goes inside it.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; position: relative; width: 100%; padding: 8px; box-sizing: border-box; border: 1px solid #e0e0e0; border-radius: 4px;",
        props.min_height
    );
    let badge = if props.unavailable {
        Some(("unavailable", "background: #FFEBEE; color: #C62828;"))
    } else if props.loading {
        Some(("loading", "background: #ECEFF1; color: #546E7A;"))
    } else {
        None
    };

    rsx! {
        section {
            style: "{style}",
            aria_busy: "{props.loading}",
            header {
                style: "display: flex; justify-content: space-between; align-items: baseline; gap: 8px; margin-bottom: 8px;",
                h3 {
                    style: "margin: 0; font-size: 16px;",
                    "{props.title}"
                }
                if let Some((text, colors)) = badge {
                    span {
                        style: "padding: 1px 8px; border-radius: 10px; font-size: 11px; {colors}",
                        "{text}"
                    }
                }
            }
            div {
                id: "{props.id}",
                style: "width: 100%;",
            }
            if !props.source.is_empty() {
                small {
                    style: "display: block; margin-top: 4px; color: #888; font-size: 11px;",
                    "{props.source}"
                }
            }
        }
    }
}
