use yew::prelude::*;
use yew_router::prelude::*;
use web_sys::window;
use crate::{Route, styles};

#[derive(Properties, PartialEq)]
pub struct BaseProps {
    pub children: Html,
}

fn handle_theme_toggle(dark_mode: bool) {
    let Some(window) = window() else {
        return;
    };
    if let Some(html) = window.document().and_then(|d| d.document_element()) {
        html.set_class_name(if dark_mode { "dark" } else { "light" });
    }
    if let Some(storage) = window.local_storage().ok().flatten() {
        let _ = storage.set_item("theme", if dark_mode { "dark" } else { "light" });
    }
}

#[function_component(Base)]
pub fn base(props: &BaseProps) -> Html {
    let dark_mode = use_state(|| window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item("theme").ok().flatten())
        .map_or(true, |theme| theme == "dark")
    );

    let toggle_theme = {
        let dark_mode = dark_mode.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let new_mode = !*dark_mode;
            handle_theme_toggle(new_mode);
            dark_mode.set(new_mode);
        })
    };

    let theme_icon = if *dark_mode { html! { "☀️" } } else { html! { "🌙" } };

    html! {
        <div class={if *dark_mode { "dark h-full bg-gray-900" } else { "h-full bg-gray-50" }}>
            <nav class={styles::NAV}>
                <div class="w-full mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="h-16 flex items-center justify-between relative">
                        <Link<Route> to={Route::Home} classes={styles::NAV_BRAND}>{"Boards"}</Link<Route>>
                        <div class={styles::NAV_ITEMS}>
                            <Link<Route> to={Route::Home} classes={styles::NAV_LINK}>{"Communities"}</Link<Route>>
                            <Link<Route> to={Route::Apply} classes={styles::NAV_LINK}>{"Apply"}</Link<Route>>
                            <button class={classes!(styles::BUTTON_PRIMARY, "hidden", "sm:inline-flex")} disabled=true>
                                {"Connect to Kick.com"}
                            </button>
                            <button onclick={toggle_theme} class={styles::BUTTON_ICON}>{theme_icon}</button>
                        </div>
                    </div>
                </div>
            </nav>
            <main class="pt-16 min-h-screen">{props.children.clone()}</main>
            <footer class={styles::FOOTER}>
                <div class="w-full mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="h-16 flex items-center justify-center">
                        <span class={styles::TEXT_SMALL}>{"Built by DegenTy • Copyright © 2025"}</span>
                    </div>
                </div>
            </footer>
        </div>
    }
}
