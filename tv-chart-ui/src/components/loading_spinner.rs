//! Loading spinner component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct LoadingSpinnerProps {
    #[props(default = "Loading visualisations...".to_string())]
    pub message: String,
}

/// Simple loading indicator shown while the charts are embedded.
#[component]
pub fn LoadingSpinner(props: LoadingSpinnerProps) -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 16px; color: #666;",
            "{props.message}"
        }
    }
}
