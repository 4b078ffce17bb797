//! Year range slider with its value label.

use dioxus::prelude::*;
use tv_dash::config::YearRange;

#[derive(Props, Clone, PartialEq)]
pub struct YearSliderProps {
    /// DOM id of the range input
    pub id: String,
    /// DOM id of the label showing the current year
    pub label_id: String,
    pub range: YearRange,
    /// Fired on every `input` event while dragging
    pub on_input: EventHandler<()>,
}

/// Range input for the year filter.
///
/// The slider value and the label text are written once here and then owned
/// by the browser: the dashboard reads the slider from the DOM and updates the
/// label itself, so neither is bound to a signal.
#[component]
pub fn YearSlider(props: YearSliderProps) -> Element {
    let YearRange { min, max, initial } = props.range;

    rsx! {
        label {
            style: "font-weight: bold; display: flex; gap: 8px; align-items: center;",
            r#for: "{props.id}",
            "Year: "
            input {
                id: "{props.id}",
                r#type: "range",
                min: "{min}",
                max: "{max}",
                step: "1",
                value: "{initial}",
                oninput: move |_| props.on_input.call(()),
            }
            span {
                id: "{props.label_id}",
                style: "min-width: 3em; font-variant-numeric: tabular-nums;",
                "{initial}"
            }
        }
    }
}
