// ui/src/components/amount_field.rs
use dioxus::prelude::*;
use rates::keypad::ActiveField;

use crate::app_state_mut::AppStateMut;
use crate::hooks::use_is_touch_device::use_is_touch_device;

/// An editable amount buffer. Focusing it makes it the keypad's target.
///
/// On touch devices the soft keyboard is suppressed so the on-screen keypad
/// is the only input.
#[component]
pub fn AmountField(field: ActiveField, code: &'static str, dark: bool) -> Element {
    let mut state = use_context::<AppStateMut>();
    let is_touch_device = use_is_touch_device();

    let amounts = state.amounts.read();
    let value = amounts.buffer(field).to_string();
    let is_active = amounts.active == field;
    drop(amounts);

    let ring = if is_active {
        "box-shadow: 0 0 0 4px var(--pico-primary-focus);"
    } else {
        ""
    };
    let (background, color) = if dark {
        (
            "var(--pico-contrast-background)",
            "var(--pico-contrast-inverse)",
        )
    } else {
        ("var(--pico-card-background-color)", "var(--pico-color)")
    };

    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 1rem; margin-top: 0.75rem; padding: 0.75rem 1.25rem; border-radius: 1rem; border: 1px solid var(--pico-muted-border-color); background: {background}; color: {color}; {ring}",
            span {
                style: "font-size: 0.875rem; font-weight: 600; letter-spacing: 0.05em;",
                "{code}"
            }
            input {
                r#type: "text",
                class: "amount-input",
                style: "margin: 0; border: none; background: transparent; box-shadow: none; text-align: right; font-size: 2rem; font-weight: 600; color: inherit;",
                inputmode: if is_touch_device() { "none" } else { "decimal" },
                value: "{value}",
                onfocus: move |_| state.focus(field),
                oninput: move |event| state.set_amount(field, &event.value()),
            }
        }
    }
}
