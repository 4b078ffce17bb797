//! Trade direction dropdown.

use dioxus::prelude::*;
use tv_dash::TradeDirection;

#[derive(Props, Clone, PartialEq)]
pub struct TradeTypeSelectorProps {
    /// DOM id of the select element
    pub id: String,
    #[props(default)]
    pub initial: TradeDirection,
    /// Fired on `change`
    pub on_change: EventHandler<()>,
}

/// Dropdown for the trade direction. Option values are the signal tokens.
#[component]
pub fn TradeTypeSelector(props: TradeTypeSelectorProps) -> Element {
    rsx! {
        label {
            style: "font-weight: bold;",
            r#for: "{props.id}",
            "Trade: "
            select {
                id: "{props.id}",
                onchange: move |_| props.on_change.call(()),
                for direction in TradeDirection::ALL {
                    option {
                        key: "{direction.token()}",
                        value: direction.token(),
                        selected: direction == props.initial,
                        "{direction.label()}"
                    }
                }
            }
        }
    }
}
