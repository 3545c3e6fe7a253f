//=============================================================================
// File: src/hooks/use_is_touch_device.rs
//=============================================================================

// Touch devices get the on-screen keypad instead of the soft keyboard.
// Each platform answers "is this a touch device?" differently.

#[cfg(target_arch = "wasm32")]
pub use self::wasm32::*;

#[cfg(feature = "dioxus-desktop")]
pub use self::desktop::*;

#[cfg(any(target_os = "android", target_os = "ios"))]
pub use self::mobile::*;

// Fallback for any other platform where touch is not applicable.
#[cfg(all(
    not(target_arch = "wasm32"),
    not(feature = "dioxus-desktop"),
    not(any(target_os = "android", target_os = "ios"))
))]
pub use self::fallback::*;

/// # Desktop Implementation
/// Asks the webview through `dioxus_desktop::use_window`.
#[cfg(feature = "dioxus-desktop")]
mod desktop {
    use dioxus::prelude::*;
    use dioxus_desktop::use_window;
    use serde_json::Value;

    pub fn use_is_touch_device() -> Signal<bool> {
        let mut is_touch_device = use_signal(|| false);
        let window = use_window();

        use_effect(move || {
            let window = window.clone();
            spawn(async move {
                let js_code = "return navigator.maxTouchPoints > 0;";
                if let Ok(Ok(Value::Bool(has_touch))) =
                    window.webview.evaluate_script_with_return(js_code).await
                {
                    is_touch_device.set(has_touch);
                }
            });
        });

        is_touch_device
    }
}

/// # WebAssembly (WASM) Implementation
/// Queries `navigator.maxTouchPoints` through `web_sys`.
#[cfg(target_arch = "wasm32")]
mod wasm32 {
    use dioxus::prelude::*;

    pub fn use_is_touch_device() -> Signal<bool> {
        let mut is_touch_device = use_signal(|| false);

        use_effect(move || {
            if let Some(window) = web_sys::window() {
                let has_touch = window.navigator().max_touch_points() > 0;
                is_touch_device.set(has_touch);
            }
        });

        is_touch_device
    }
}

/// # Mobile Implementation
/// Mobile platforms are always touch-enabled.
#[cfg(any(target_os = "android", target_os = "ios"))]
mod mobile {
    use dioxus::prelude::*;

    pub fn use_is_touch_device() -> Signal<bool> {
        use_signal(|| true)
    }
}

#[cfg(all(
    not(target_arch = "wasm32"),
    not(feature = "dioxus-desktop"),
    not(any(target_os = "android", target_os = "ios"))
))]
mod fallback {
    use dioxus::prelude::*;

    pub fn use_is_touch_device() -> Signal<bool> {
        use_signal(|| false)
    }
}
