// ui/src/components/keypad.rs
use dioxus::prelude::*;
use rates::keypad::KeypadKey;
use rates::keypad::KEYPAD_LAYOUT;

/// The calculator keypad. Accepts clicks and, while focused, the hardware keyboard.
#[component]
pub fn NumericKeypad(on_key_press: EventHandler<KeypadKey>) -> Element {
    let mut active_key_local = use_signal::<Option<KeypadKey>>(|| None);

    let handle_key_down = move |event: Event<KeyboardData>| {
        let event_key_string = event.data.key().to_string();

        if let Some(key) = KeypadKey::from_keyboard(&event_key_string) {
            active_key_local.set(Some(key));
            on_key_press.call(key);
            event.prevent_default();
            event.stop_propagation();
        }
    };

    let handle_animation_end = move |_: Event<AnimationData>| {
        active_key_local.set(None);
    };

    rsx! {
        style {
            {
                r#" .key-flash { animation: keyFlash 0.25s ease-out; } @keyframes keyFlash { 0% { background-color: var(--pico-secondary-border); transform: scale(1.0); } 50% { background-color: var(--pico-background-inverse); color: var(--pico-color-inverse); transform: scale(0.96); } 100% { background-color: var(--pico-background-color); color: var(--pico-color-text); transform: scale(1.0); } } "#
            }
        }
        div {
            tabindex: "0",
            onkeydown: handle_key_down,
            class: "numeric-keypad",
            style: "display: grid; grid-template-columns: repeat(3, 1fr); gap: 0.5rem; padding: 0.75rem; border-radius: var(--pico-border-radius); border: 1.5px solid var(--pico-muted-border-color);",

            for key in KEYPAD_LAYOUT {
                {
                    let is_active = *active_key_local.read() == Some(key);
                    let (variant, span) = match key {
                        KeypadKey::Clear => ("contrast", "grid-column: 1 / -1;"),
                        KeypadKey::Backspace => ("contrast outline", ""),
                        _ => ("secondary outline", ""),
                    };
                    let class = if is_active {
                        format!("{variant} key-flash")
                    } else {
                        variant.to_string()
                    };
                    rsx! {
                        button {
                            key: "{key}",
                            class: "{class}",
                            style: "font-size: 1.25rem; padding: 0.75rem; margin: 0; {span}",
                            onanimationend: handle_animation_end,
                            onclick: move |_| {
                                active_key_local.set(Some(key));
                                on_key_press.call(key);
                            },
                            "{key}"
                        }
                    }
                }
            }
        }
    }
}
