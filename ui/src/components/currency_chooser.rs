// ui/src/components/currency_chooser.rs
#![allow(non_snake_case)]

use dioxus::prelude::*;
use rates::currency::CurrencyCode;

#[derive(PartialEq, Clone, Copy, Debug)]
pub struct CurrencyInfo {
    pub code: CurrencyCode,
    pub short_name: &'static str,
    pub long_name: &'static str,
}

impl From<CurrencyCode> for CurrencyInfo {
    fn from(code: CurrencyCode) -> Self {
        Self {
            code,
            short_name: code.code(),
            long_name: code.name(),
        }
    }
}

impl CurrencyInfo {
    /// True when `filter` occurs in the code or name, ignoring case.
    pub fn matches(&self, filter: &str) -> bool {
        let filter_lower = filter.trim().to_lowercase();
        self.long_name.to_lowercase().contains(&filter_lower)
            || self.short_name.to_lowercase().contains(&filter_lower)
    }
}

/// Every currency but DZD, sorted by code.
pub fn picker_currencies() -> Vec<CurrencyInfo> {
    CurrencyCode::foreign().into_iter().map(CurrencyInfo::from).collect()
}

#[derive(Props, PartialEq, Clone)]
pub struct CurrencyChooserProps {
    /// The currently selected currency.
    pub selected: Signal<CurrencyCode>,
}

/// A dropdown with a search box for picking the foreign currency of a panel.
pub fn CurrencyChooser(props: CurrencyChooserProps) -> Element {
    let mut is_open = use_signal(|| false);
    let mut filter_text = use_signal(|| "".to_string());

    let mut selected_signal = props.selected;
    let selected = *selected_signal.read();
    let selected_info = CurrencyInfo::from(selected);

    let filtered = picker_currencies()
        .into_iter()
        .filter(|info| info.matches(&filter_text.read()))
        .collect::<Vec<_>>();

    rsx! {
        div {
            div {
                style: "position: relative;",
                div {
                    class: "secondary",
                    style: "
                        display: flex;
                        align-items: center;
                        gap: 0.25rem;
                        padding: 0.2rem 0.6rem;
                        border: 1px solid var(--pico-secondary-border);
                        border-radius: 999px;
                        font-size: 0.8rem;
                        letter-spacing: 0.08em;
                        cursor: pointer;
                        ",
                    title: "Choose currency.",
                    onclick: move |_| {
                        filter_text.set("".to_string());
                        is_open.toggle();
                    },
                    span { "{selected_info.short_name} · {selected_info.long_name}" }
                    span { "↓" }
                }
                if is_open() {
                    // Backdrop to catch clicks outside the dropdown
                    div {
                        style: "position: fixed; top: 0; left: 0; width: 100vw; height: 100vh; z-index: 9; background: transparent;",
                        onclick: move |_| is_open.set(false),
                    }
                    div {
                        // Stop click propagation to prevent the backdrop from closing the dropdown
                        onclick: |e| e.stop_propagation(),
                        style: "
                            position: absolute;
                            right: 0;
                            min-width: 16rem;
                            z-index: 10;
                            background-color: var(--pico-card-background-color);
                            border: 1px solid var(--pico-card-border-color);
                            border-radius: var(--pico-border-radius);
                            padding: 0.5rem;
                            margin-top: 0.25rem;
                        ",
                        input {
                            r#type: "text",
                            placeholder: "Search currencies...",
                            value: "{filter_text}",
                            oninput: move |evt| filter_text.set(evt.value()),
                            style: "margin-bottom: 0.5rem; width: 100%;",
                            onmounted: move |mounted| {
                                spawn(async move {
                                    mounted.data.set_focus(true).await.ok();
                                });
                            },
                        }
                        ul {
                            role: "listbox",
                            style: "list-style: none; margin: 0; padding: 0; max-height: 250px; overflow-y: auto;",
                            {
                                filtered
                                    .into_iter()
                                    .map(|info| {
                                        let is_selected = info.code == selected;
                                        let display_label = format!("{} · {}", info.short_name, info.long_name);
                                        rsx! {
                                            li {
                                                key: "{info.short_name}",
                                                role: "option",
                                                style: "display: flex; align-items: center; cursor: pointer; padding: 0.3rem; white-space: nowrap;",
                                                onclick: move |_| {
                                                    selected_signal.set(info.code);
                                                    is_open.set(false);
                                                },
                                                span {
                                                    style: if is_selected { "width: 1.5rem;" } else { "width: 1.5rem; visibility: hidden;" },
                                                    "✓"
                                                }
                                                span { "{display_label}" }
                                            }
                                        }
                                    })
                            }
                        }
                    }
                }
            }
        }
    }
}
