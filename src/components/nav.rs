use yew::prelude::*;
use yew::virtual_dom::AttrValue;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// Section-jump targets shown in the nav, as (element id, label).
pub const NAV_LINKS: [(&str, &str); 4] = [
    ("solution", "How it works"),
    ("feature", "Features"),
    ("collective", "Community"),
    ("join", "Join"),
];

/// Smoothly scrolls the element with `id` into view. Missing ids are ignored.
pub fn scroll_to_section(id: &str) {
    let element = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id));
    if let Some(element) = element {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub brand: AttrValue,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Jumping closes the mobile menu too.
    let jump = {
        let menu_open = menu_open.clone();
        move |id: &'static str| {
            let menu_open = menu_open.clone();
            Callback::from(move |_: MouseEvent| {
                scroll_to_section(id);
                menu_open.set(false);
            })
        }
    };

    html! {
        <>
            <nav class="top-nav">
                <div class="nav-brand">{ props.brand.clone() }</div>
                <div class="nav-links">
                    { for NAV_LINKS.iter().map(|(id, label)| html! {
                        <button class="nav-link" onclick={jump(*id)}>{ *label }</button>
                    }) }
                </div>
                <button class="burger-menu" onclick={toggle_menu}>
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </nav>
            {
                if *menu_open {
                    html! {
                        <div class="mobile-menu">
                            { for NAV_LINKS.iter().map(|(id, label)| html! {
                                <button class="mobile-menu-link" onclick={jump(*id)}>{ *label }</button>
                            }) }
                            <button class="cta-button-paper" onclick={jump("join")}>
                                {"Request early access"}
                            </button>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_targets_are_unique_section_ids() {
        let mut ids: Vec<&str> = NAV_LINKS.iter().map(|(id, _)| *id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), NAV_LINKS.len());
        assert!(ids.contains(&"join"));
    }
}
