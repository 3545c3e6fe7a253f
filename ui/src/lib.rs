// The client-side Dioxus application logic.

use dioxus::prelude::*;
use dioxus_logger::tracing::info;
use dioxus_logger::tracing::Level;

mod app_state;
mod app_state_mut;
mod components;
pub mod hooks;
mod screens;
pub mod storage;

use app_state::AppState;
use app_state_mut::AppStateMut;
use components::pico::Container;
use rates::currency::CurrencyCode;
use rates::persist;
use rates::prefs::user_prefs::UserPrefs;
use rates::rate_map::RateMap;
use screens::calculator::CalculatorScreen;
use screens::exchange_rates::RatesScreen;
use strum::IntoEnumIterator;

/// Enum to represent the different screens in our application.
#[derive(Clone, Copy, PartialEq, Default, Debug, strum::EnumIter)]
enum Screen {
    #[default]
    Calculator,
    Rates,
}

impl Screen {
    /// Helper to get the display name for each screen.
    fn name(&self) -> &'static str {
        match self {
            Screen::Calculator => "Calculator",
            Screen::Rates => "Rates",
        }
    }
}

/// Log level for the launchers, from `DINAR_DESK_LOG`.
pub fn log_level() -> Level {
    UserPrefs::from_env().log_level().into()
}

/// The navigation tabs component.
#[component]
fn Tabs(active_screen: Signal<Screen>) -> Element {
    rsx! {
        nav {
            class: "tab-menu",
            ul {
                for screen in Screen::iter() {
                    li {
                        a {
                            href: "#",
                            class: if active_screen() == screen { "active-tab" } else { "" },
                            "aria-current": if active_screen() == screen { "page" } else { "false" },
                            onclick: move |event| {
                                event.prevent_default();
                                active_screen.set(screen);
                            },
                            "{screen.name()}"
                        }
                    }
                }
            }
        }
    }
}

//=============================================================================
// MAIN APPLICATION COMPONENT
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let responsive_css = r#"
    * { box-sizing: border-box; }

    html, body {
        min-height: 100%;
        margin: 0;
        padding: 0;
        background-color: var(--pico-muted-border-color);
    }

    .app-main-container {
        max-width: 72rem;
        margin: 2rem auto;
        padding: 0 1rem;
    }

    .app-main-container header {
        display: flex;
        flex-wrap: wrap;
        gap: 1rem;
        align-items: center;
        justify-content: space-between;
        border-bottom: 1px solid var(--pico-muted-border-color);
        margin-bottom: 1.5rem;
    }

    .tab-menu ul { gap: 0.25rem; }

    .tab-menu a {
        border-radius: 999px;
        padding: 0.4rem 1rem;
    }

    .tab-menu a.active-tab {
        color: var(--pico-primary) !important;
        background: color-mix(in srgb, var(--pico-primary), transparent 90%);
        text-decoration: none;
    }

    .tab-menu a:not(.active-tab) {
        color: var(--pico-muted-color);
    }

    .amount-input:focus { outline: none; }

    @media (max-width: 768px) {
        .app-main-container section { grid-template-columns: 1fr !important; }
    }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css",
        }
        style {
            "{responsive_css}"
        }
        AppBody {}
    }
}

/// Loads prefs and persisted state once, then provides both as context.
#[component]
fn AppBody() -> Element {
    let app_state = use_hook(|| AppState::new(storage::load_prefs()));
    use_context_provider(|| app_state.clone());

    let store = use_signal(|| storage::open_store(&app_state.prefs));
    let base_rates = use_signal(|| persist::load_base_rates(&*store.peek()));
    let amounts = use_signal(|| persist::load_amounts(&*store.peek()));
    let rate_map = use_memo(move || RateMap::derive(&base_rates.read()));
    let to_currency = use_signal(|| CurrencyCode::USD);
    let from_currency = use_signal(|| CurrencyCode::EUR);

    use_hook(|| {
        info!(
            "loaded base rates {:?}, amounts {:?}",
            *base_rates.peek(),
            *amounts.peek()
        );
    });

    use_context_provider(|| AppStateMut {
        base_rates,
        rate_map,
        amounts,
        to_currency,
        from_currency,
        store,
    });

    let active_screen = use_signal(Screen::default);

    rsx! {
        div {
            class: "app-main-container",
            Container {
                header {
                    div {
                        h1 { style: "margin: 0;", "Dinar Desk" }
                        p {
                            style: "margin: 0; color: var(--pico-muted-color);",
                            "Quick conversions between Algerian Dinar and your frequently used currencies."
                        }
                    }
                    Tabs { active_screen }
                }
                div {
                    class: "content",
                    match active_screen() {
                        Screen::Calculator => rsx! {
                            CalculatorScreen {}
                        },
                        Screen::Rates => rsx! {
                            RatesScreen {}
                        },
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn calculator_is_the_first_tab() {
        assert_eq!(Screen::default(), Screen::Calculator);
        assert_eq!(
            Screen::iter().map(|s| s.name()).collect::<Vec<_>>(),
            vec!["Calculator", "Rates"]
        );
    }
}
