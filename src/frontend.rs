use std::rc::Rc;

use serde_json::json;
use web_sys::window;
use yew::prelude::*;

use crate::config::SiteConfig;
use crate::cursor::CursorEvent;
use crate::hooks::{
    use_cursor_variant, use_document_title, use_loading_gate, use_menu, use_mouse_position,
    use_theme,
};
use crate::loading::LoadingPhase;
use crate::log::{log_event, LogLevel};
use crate::menu::MenuAction;
use crate::profile::Profile;
use crate::sections::{
    About, Contact, CursorFollower, Experience, Footer, Header, Hero, LoadingScreen, MenuOverlay,
    Projects, Site,
};

#[derive(Properties, PartialEq)]
struct AppProps {
    site: Site,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let site = props.site.clone();
    let config = Rc::clone(&site.config);

    use_document_title(format!("{} | Portfolio", site.profile.name));
    let phase = use_loading_gate(Rc::clone(&config));
    let theme = use_theme(Rc::clone(&config));
    let menu = use_menu(Rc::clone(&config));
    let cursor = use_cursor_variant();
    let pointer = use_mouse_position();

    // Stable across pointer-driven renders so sections with unchanged props skip rendering.
    let on_cursor = use_callback(cursor.dispatcher(), |event: CursorEvent, dispatcher| {
        dispatcher.dispatch(event)
    });
    let on_navigate = use_callback(menu.dispatcher(), |href: String, dispatcher| {
        dispatcher.dispatch(MenuAction::Select(href))
    });
    let on_toggle_menu = use_callback(menu.dispatcher(), |(), dispatcher| {
        dispatcher.dispatch(MenuAction::Toggle)
    });
    let on_close_menu = use_callback(menu.dispatcher(), |(), dispatcher| {
        dispatcher.dispatch(MenuAction::Close)
    });

    if phase == LoadingPhase::Splash {
        return html! { <LoadingScreen brand={site.profile.brand.clone()} /> };
    }

    html! {
        <>
            <a class="skip-link" href="#about">{"Skip to main content"}</a>
            <CursorFollower variant={*cursor} position={pointer} />
            <Header
                brand={site.profile.brand.clone()}
                theme={theme.theme}
                menu_open={menu.open}
                on_toggle_theme={theme.toggle.clone()}
                on_toggle_menu={on_toggle_menu}
                on_navigate={on_navigate.clone()}
                on_cursor={on_cursor.clone()}
            />
            <MenuOverlay open={menu.open} stagger={config.menu_stagger} on_select={on_navigate.clone()} on_close={on_close_menu} />
            <main id="content" class="page-shell">
                <Hero site={site.clone()} on_cursor={on_cursor.clone()} on_navigate={on_navigate} />
                <About site={site.clone()} on_cursor={on_cursor.clone()} />
                <Experience site={site.clone()} />
                <Projects site={site.clone()} pointer={pointer} on_cursor={on_cursor.clone()} />
                <Contact site={site.clone()} on_cursor={on_cursor} />
            </main>
            <Footer site={site} />
        </>
    }
}

pub fn run() {
    let config = Rc::new(SiteConfig::from_build_env());

    let profile = match Profile::embedded() {
        Ok(profile) => Rc::new(profile),
        Err(error) => {
            log_event(
                config.log_level,
                LogLevel::Info,
                "profile_invalid",
                json!({ "error": error.to_string() }),
            );
            return;
        }
    };

    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("app"))
    else {
        log_event(
            config.log_level,
            LogLevel::Info,
            "app_mount_failed",
            json!({ "reason": "missing #app mount point" }),
        );
        return;
    };

    log_event(
        config.log_level,
        LogLevel::Info,
        "app_mounted",
        json!({
            "base_path": config.base_path,
            "loading_ms": config.loading_duration.as_millis() as u64,
        }),
    );

    yew::Renderer::<App>::with_root_and_props(
        root,
        AppProps {
            site: Site { config, profile },
        },
    )
    .render();
}
