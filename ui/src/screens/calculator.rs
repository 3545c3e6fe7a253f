//=============================================================================
// File: src/screens/calculator.rs
//=============================================================================
use dioxus::prelude::*;
use rates::convert::Conversion;
use rates::keypad::ActiveField;

use crate::app_state_mut::AppStateMut;
use crate::components::amount::Amount;
use crate::components::amount_field::AmountField;
use crate::components::currency_chooser::CurrencyChooser;
use crate::components::keypad::NumericKeypad;
use crate::components::pico::Card;

const LABEL_STYLE: &str = "display: flex; align-items: center; justify-content: space-between; font-size: 0.75rem; text-transform: uppercase; letter-spacing: 0.1em; color: var(--pico-muted-color);";
const RESULT_STYLE: &str = "display: flex; align-items: center; gap: 1rem; margin-top: 0.75rem; padding: 0.75rem 1.25rem; border-radius: 1rem; border: 1px solid var(--pico-muted-border-color);";

/// A read-only converted amount with its "1 X = r DZD" footnote.
#[component]
fn ResultRow(
    code: &'static str,
    result: f64,
    rate_code: &'static str,
    rate: f64,
    dark: bool,
) -> Element {
    let colors = if dark {
        "background: var(--pico-contrast-background); color: var(--pico-contrast-inverse);"
    } else {
        ""
    };
    rsx! {
        div {
            style: "{RESULT_STYLE} {colors}",
            span {
                style: "font-size: 0.875rem; font-weight: 600; letter-spacing: 0.05em;",
                "{code}"
            }
            div {
                style: "width: 100%; text-align: right; font-size: 2rem; font-weight: 600;",
                Amount { value: result }
            }
        }
        small {
            style: "display: block; margin-top: 0.5rem; color: var(--pico-muted-color);",
            "1 {rate_code} = "
            Amount { value: rate, code: "DZD" }
        }
    }
}

#[component]
pub fn CalculatorScreen() -> Element {
    let mut state = use_context::<AppStateMut>();

    let rate_map = state.rate_map.read();
    let amounts = state.amounts.read();
    let to_currency = *state.to_currency.read();
    let from_currency = *state.from_currency.read();

    let outbound = Conversion::from_dzd(&amounts.dzd, to_currency, &rate_map);
    let inbound = Conversion::to_dzd(&amounts.foreign, from_currency, &rate_map);
    let active_label = match amounts.active {
        ActiveField::Dzd => "DZD amount".to_string(),
        ActiveField::Foreign => format!("{} amount", from_currency.code()),
    };
    drop(amounts);
    drop(rate_map);

    rsx! {
        section {
            style: "display: grid; grid-template-columns: minmax(0, 1.2fr) minmax(0, 0.8fr); gap: 2rem; overflow-y: auto;",
            div {
                // DZD -> foreign
                Card {
                    div {
                        style: "{LABEL_STYLE}",
                        span { "From" }
                        span { "Algerian Dinar" }
                    }
                    AmountField { field: ActiveField::Dzd, code: "DZD", dark: true }
                    div {
                        style: "{LABEL_STYLE} margin-top: 1.5rem;",
                        span { "To" }
                        CurrencyChooser { selected: state.to_currency }
                    }
                    ResultRow {
                        code: to_currency.code(),
                        result: outbound.result,
                        rate_code: to_currency.code(),
                        rate: outbound.rate,
                        dark: false,
                    }
                }
                // foreign -> DZD
                Card {
                    div {
                        style: "{LABEL_STYLE}",
                        span { "From" }
                        CurrencyChooser { selected: state.from_currency }
                    }
                    AmountField { field: ActiveField::Foreign, code: from_currency.code(), dark: false }
                    div {
                        style: "{LABEL_STYLE} margin-top: 1.5rem;",
                        span { "To" }
                        span { "Algerian Dinar" }
                    }
                    ResultRow {
                        code: "DZD",
                        result: inbound.result,
                        rate_code: from_currency.code(),
                        rate: inbound.rate,
                        dark: true,
                    }
                }
            }
            aside {
                Card {
                    p {
                        style: "margin-bottom: 0.25rem; text-transform: uppercase; letter-spacing: 0.1em; color: var(--pico-muted-color);",
                        "Keypad"
                    }
                    small {
                        style: "display: block; margin-bottom: 1rem; color: var(--pico-muted-color);",
                        "Tap to enter values. Active field is highlighted."
                    }
                    NumericKeypad {
                        on_key_press: move |key| state.press_key(key),
                    }
                    div {
                        style: "{LABEL_STYLE} margin-top: 1rem; padding: 0.75rem 1rem; border-radius: 1rem; background: var(--pico-card-sectioning-background-color);",
                        span { "Active field" }
                        strong { "{active_label}" }
                    }
                }
            }
        }
    }
}
