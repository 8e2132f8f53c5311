//! A set of reusable, lifetime-free components for the "glass" look used
//! throughout the page. Styling lives in `assets/css/portfolio.css`.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::prelude::*;

//=============================================================================
// Layout Components
//=============================================================================

/// Width-limited, centered column.
#[component]
pub fn Container(
    #[props(default)] wide: bool,
    #[props(default)] class: String,
    children: Element,
) -> Element {
    let width = if wide { "container container-wide" } else { "container" };
    rsx! { div { class: "{width} {class}", {children} } }
}

/// A responsive grid; `columns` is the column count on wide screens.
#[component]
pub fn Grid(#[props(default = 2)] columns: u8, children: Element) -> Element {
    rsx! { div { class: "grid grid-{columns}", {children} } }
}

//=============================================================================
// Content Components
//=============================================================================

/// A translucent card. Hovering lifts it slightly.
#[component]
pub fn Card(#[props(default)] class: String, children: Element) -> Element {
    rsx! { article { class: "glass card {class}", {children} } }
}

/// A small rounded label, e.g. a technology tag.
#[component]
pub fn Pill(label: String) -> Element {
    rsx! { span { class: "glass pill", "{label}" } }
}

#[derive(Props, PartialEq, Clone)]
pub struct CheckListProps {
    items: Vec<String>,
}

/// Bullet list using a check mark in the accent color.
pub fn CheckList(props: CheckListProps) -> Element {
    rsx! {
        ul {
            class: "check-list",
            for item in props.items.iter() {
                li {
                    span { class: "accent", "✓" }
                    span { "{item}" }
                }
            }
        }
    }
}

//=============================================================================
// Interactive Components
//=============================================================================

#[derive(PartialEq, Clone, Default)]
pub enum PillStyle {
    #[default]
    Glass,
    Gradient,
}

impl PillStyle {
    fn to_class(&self) -> &'static str {
        match self {
            PillStyle::Glass => "glass pill-button",
            PillStyle::Gradient => "gradient pill-button",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct PillLinkProps {
    href: String,
    children: Element,
    #[props(default)]
    style: PillStyle,
    /// Open in a new tab with `rel="noopener noreferrer"`.
    #[props(default = false)]
    external: bool,
}

/// A pill-shaped link used for calls to action.
pub fn PillLink(props: PillLinkProps) -> Element {
    let target = props.external.then_some("_blank");
    let rel = props.external.then_some("noopener noreferrer");
    rsx! {
        a {
            class: props.style.to_class(),
            href: "{props.href}",
            target,
            rel,
            {props.children}
        }
    }
}
