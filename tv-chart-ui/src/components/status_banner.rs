//! Page-level notice for configuration errors and charts that failed to load.

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    /// The dashboard cannot run at all
    #[default]
    Error,
    /// Some charts are missing but the rest of the page works
    Warning,
}

impl Tone {
    fn style(self) -> &'static str {
        match self {
            Tone::Error => "background: #FFEBEE; color: #C62828; border: 1px solid #EF9A9A;",
            Tone::Warning => "background: #FFF8E1; color: #8D6E00; border: 1px solid #FFE082;",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct StatusBannerProps {
    pub heading: String,
    #[props(default)]
    pub tone: Tone,
    /// One bullet per item, e.g. the titles of the charts that failed
    #[props(default)]
    pub details: Vec<String>,
}

#[component]
pub fn StatusBanner(props: StatusBannerProps) -> Element {
    let role = match props.tone {
        Tone::Error => "alert",
        Tone::Warning => "status",
    };
    let style = format!(
        "padding: 10px 16px; margin: 8px 0; border-radius: 4px; font-size: 14px; {}",
        props.tone.style()
    );

    rsx! {
        div {
            role: "{role}",
            style: "{style}",
            strong { "{props.heading}" }
            if !props.details.is_empty() {
                ul {
                    style: "margin: 6px 0 0 0; padding-left: 20px;",
                    for item in props.details.iter() {
                        li { key: "{item}", "{item}" }
                    }
                }
            }
        }
    }
}
