//! A set of reusable, lifetime-free Dioxus components for the Pico.css framework.
//! To use, ensure you have pico.min.css linked in your main application.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::prelude::*;

//=============================================================================
// Layout Components
//=============================================================================

/// A centered container for your content.
/// Wraps content in a `<main class="container">` element.
#[component]
pub fn Container(children: Element) -> Element {
    rsx! { main { class: "container", {children} } }
}

/// A responsive grid layout.
#[component]
pub fn Grid(children: Element) -> Element {
    rsx! { div { class: "grid", {children} } }
}

//=============================================================================
// Content Components
//=============================================================================

/// A card for grouping related content.
/// Wraps content in an `<article>` element.
#[component]
pub fn Card(children: Element) -> Element {
    rsx! { article { {children} } }
}

//=============================================================================
// Interactive Components
//=============================================================================

#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    children: Element,
    on_click: EventHandler<MouseEvent>,
    #[props(default = false)]
    outline: bool,
    #[props(default = false)]
    disabled: bool,
    #[props(optional, into)]
    title: Option<String>,
}

/// A secondary-themed pico button.
pub fn Button(props: ButtonProps) -> Element {
    let class_str = if props.outline {
        "secondary outline"
    } else {
        "secondary"
    };
    rsx! {
        button {
            class: "{class_str}",
            title: props.title.clone().unwrap_or_default(),
            disabled: props.disabled,
            onclick: move |evt| props.on_click.call(evt),
            {props.children}
        }
    }
}
