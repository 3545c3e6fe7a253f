//! A component for displaying a converted amount.

use dioxus::prelude::*;
use rates::format::format_display_with;

use crate::app_state::AppState;

/// Renders `value` in the session's number style, optionally followed by a code.
///
/// The tooltip carries the unrounded value.
#[component]
pub fn Amount(value: f64, #[props(optional)] code: Option<&'static str>) -> Element {
    let app_state = use_context::<AppState>();
    let text = format_display_with(value, &app_state.number_style);
    let tooltip = if value.is_finite() {
        value.to_string()
    } else {
        "0".to_string()
    };

    rsx! {
        span {
            title: "{tooltip}",
            "{text}"
            if let Some(code) = code {
                "\u{a0}{code}"
            }
        }
    }
}
