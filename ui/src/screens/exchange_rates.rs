//=============================================================================
// File: src/screens/exchange_rates.rs
//=============================================================================
use dioxus::prelude::*;
use rates::currency::CurrencyCode;
use rates::input::coerce_rate;
use rates::rate_map::BaseRates;

use crate::app_state_mut::AppStateMut;
use crate::components::amount::Amount;
use crate::components::pico::Button;
use crate::components::pico::Card;
use crate::components::pico::Grid;

/// A base-rate input: "1 EUR equals [ ] Algerian Dinar".
#[component]
fn BaseRateInput(code: &'static str, value: f64, on_change: EventHandler<f64>) -> Element {
    rsx! {
        label {
            small {
                style: "text-transform: uppercase; letter-spacing: 0.1em; color: var(--pico-muted-color);",
                "1 {code} equals"
            }
            input {
                r#type: "number",
                min: "0",
                step: "0.01",
                style: "text-align: right; font-size: 1.5rem; font-weight: 600;",
                value: "{value}",
                oninput: move |event| on_change.call(coerce_rate(&event.value())),
            }
            small {
                style: "color: var(--pico-muted-color);",
                "Algerian Dinar"
            }
        }
    }
}

#[component]
pub fn RatesScreen() -> Element {
    let mut state = use_context::<AppStateMut>();
    let base = *state.base_rates.read();
    let defaults = BaseRates::default();
    let reset_title = format!(
        "Restore {} and {} DZD",
        defaults.dzd_per_euro, defaults.dzd_per_usd
    );
    let rows = state.rate_map.read().rows().collect::<Vec<_>>();

    rsx! {
        section {
            style: "overflow-y: auto;",
            Card {
                Grid {
                    div {
                        h3 { "Base Market Rates" }
                        p {
                            style: "color: var(--pico-muted-color);",
                            "Set the current market parity for EUR/DZD and USD/DZD. These drive the calculator and every other currency derives from one of them."
                        }
                        BaseRateInput {
                            code: CurrencyCode::EUR.code(),
                            value: base.dzd_per_euro,
                            on_change: move |rate| state.set_dzd_per_euro(rate),
                        }
                        BaseRateInput {
                            code: CurrencyCode::USD.code(),
                            value: base.dzd_per_usd,
                            on_change: move |rate| state.set_dzd_per_usd(rate),
                        }
                        Button {
                            outline: true,
                            disabled: base.is_default(),
                            title: reset_title,
                            on_click: move |_| state.reset_base_rates(),
                            "Reset to defaults"
                        }
                    }
                    div {
                        h3 { "Snapshot" }
                        table {
                            tbody {
                                for (code , rate) in [("EUR", base.dzd_per_euro), ("USD", base.dzd_per_usd)] {
                                    tr { key: "{code}",
                                        td { "1\u{a0}{code} =" }
                                        td {
                                            style: "text-align: right; font-weight: 600;",
                                            Amount { value: rate, code: "DZD" }
                                        }
                                    }
                                }
                            }
                        }
                        small {
                            style: "color: var(--pico-muted-color);",
                            "Rates persist on this device and sync instantly with the calculator."
                        }
                    }
                }
            }
            Card {
                header {
                    style: "display: flex; justify-content: space-between; align-items: center;",
                    h3 { style: "margin: 0;", "Derived Currency Table" }
                    small { style: "text-transform: uppercase; letter-spacing: 0.1em;", "live from inputs" }
                }
                div {
                    class: "overflow-auto",
                    table {
                        class: "striped",
                        thead {
                            tr {
                                th { "Currency" }
                                th { style: "text-align: right;", "1 unit in DZD" }
                                th { style: "text-align: right;", "1 DZD in unit" }
                                th { style: "text-align: right;", "Anchor" }
                            }
                        }
                        tbody {
                            for row in rows {
                                tr { key: "{row.definition.code.code()}",
                                    td {
                                        strong { "{row.definition.code.code()}" }
                                        small {
                                            style: "padding-left: 0.5rem; color: var(--pico-muted-color);",
                                            "{row.definition.name}"
                                        }
                                    }
                                    td { style: "text-align: right; font-weight: 600;",
                                        Amount { value: row.dzd_per_unit }
                                    }
                                    td { style: "text-align: right;",
                                        Amount { value: row.units_per_dzd }
                                    }
                                    td { style: "text-align: right; color: var(--pico-muted-color);",
                                        "{row.definition.anchor}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
