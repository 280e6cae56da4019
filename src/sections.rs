use std::rc::Rc;
use std::time::Duration;

use serde_json::json;
use web_sys::{Event, MouseEvent};
use yew::prelude::*;

use crate::config::SiteConfig;
use crate::cursor::{follower_style, CursorEvent, CursorVariant};
use crate::hooks::{use_reveal, use_typewriter};
use crate::image::ImageSource;
use crate::log::{log_event, LogLevel};
use crate::menu::{stagger_delay, NAV_LINKS};
use crate::pointer::{pointer_preview_position, viewport_size, PointerPosition};
use crate::profile::{skill_icon, Profile};
use crate::theme::Theme;

#[derive(Clone)]
pub struct Site {
    pub config: Rc<SiteConfig>,
    pub profile: Rc<Profile>,
}

impl PartialEq for Site {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.config, &other.config) && Rc::ptr_eq(&self.profile, &other.profile)
    }
}

fn hover_handlers(
    on_cursor: &Callback<CursorEvent>,
    variant: CursorVariant,
) -> (Callback<MouseEvent>, Callback<MouseEvent>) {
    let enter = {
        let on_cursor = on_cursor.clone();
        Callback::from(move |_: MouseEvent| on_cursor.emit(CursorEvent::Enter(variant)))
    };
    let leave = {
        let on_cursor = on_cursor.clone();
        Callback::from(move |_: MouseEvent| on_cursor.emit(CursorEvent::Leave))
    };
    (enter, leave)
}

fn anchor_click(on_navigate: &Callback<String>, href: &'static str) -> Callback<MouseEvent> {
    let on_navigate = on_navigate.clone();
    Callback::from(move |event: MouseEvent| {
        event.prevent_default();
        on_navigate.emit(href.to_string());
    })
}

#[derive(Properties, PartialEq)]
pub struct FallbackImageProps {
    pub src: AttrValue,
    pub placeholder: AttrValue,
    pub alt: AttrValue,
    pub log_level: LogLevel,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(FallbackImage)]
pub fn fallback_image(props: &FallbackImageProps) -> Html {
    let image = use_state(|| ImageSource::new(props.src.to_string(), props.placeholder.to_string()));

    let onerror = {
        let image = image.clone();
        let log_level = props.log_level;
        let src = props.src.clone();
        Callback::from(move |_: Event| {
            let mut next = (*image).clone();
            if next.on_error() {
                log_event(
                    log_level,
                    LogLevel::Info,
                    "image_fallback",
                    json!({ "src": src.as_str() }),
                );
                image.set(next);
            }
        })
    };

    html! {
        <img
            class={props.class.clone()}
            src={image.src().to_string()}
            alt={props.alt.clone()}
            loading="lazy"
            onerror={onerror}
        />
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealSectionProps {
    pub id: AttrValue,
    pub threshold: f64,
    pub duration: Duration,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(RevealSection)]
pub fn reveal_section(props: &RevealSectionProps) -> Html {
    let node = use_node_ref();
    let state = use_reveal(node.clone(), props.threshold);

    html! {
        <section
            id={props.id.clone()}
            ref={node}
            class={classes!("section-block", props.class.clone(), state.is_revealed().then_some("is-revealed"))}
            style={state.style(props.duration)}
        >
            {props.children.clone()}
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct CursorFollowerProps {
    pub variant: CursorVariant,
    pub position: PointerPosition,
}

#[function_component(CursorFollower)]
pub fn cursor_follower(props: &CursorFollowerProps) -> Html {
    html! {
        <div
            class={classes!("cursor-follower", props.variant.class_name())}
            style={follower_style(props.variant, props.position)}
            aria-hidden="true"
        />
    }
}

#[derive(Properties, PartialEq)]
pub struct LoadingScreenProps {
    pub brand: AttrValue,
}

#[function_component(LoadingScreen)]
pub fn loading_screen(props: &LoadingScreenProps) -> Html {
    html! {
        <div class="loading-screen" role="status" aria-live="polite">
            <p class="loading-brand">{props.brand.clone()}</p>
            <div class="loading-bar" aria-hidden="true"><span /></div>
            <span class="sr-only">{"Loading portfolio"}</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub brand: AttrValue,
    pub theme: Theme,
    pub menu_open: bool,
    pub on_toggle_theme: Callback<()>,
    pub on_toggle_menu: Callback<()>,
    pub on_navigate: Callback<String>,
    pub on_cursor: Callback<CursorEvent>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let on_theme = {
        let on_toggle_theme = props.on_toggle_theme.clone();
        Callback::from(move |_: MouseEvent| on_toggle_theme.emit(()))
    };
    let on_menu = {
        let on_toggle_menu = props.on_toggle_menu.clone();
        Callback::from(move |_: MouseEvent| on_toggle_menu.emit(()))
    };
    let (onmouseenter, onmouseleave) = hover_handlers(&props.on_cursor, CursorVariant::Text);

    html! {
        <header class="site-header">
            <a
                class="brand"
                href="#home"
                onclick={anchor_click(&props.on_navigate, "#home")}
                onmouseenter={onmouseenter}
                onmouseleave={onmouseleave}
            >
                {props.brand.clone()}
            </a>
            <nav class="header-nav" aria-label="Sections">
                <ul>
                    { for NAV_LINKS.iter().skip(1).map(|link| html! {
                        <li>
                            <a href={link.href} onclick={anchor_click(&props.on_navigate, link.href)}>
                                {link.label}
                            </a>
                        </li>
                    }) }
                </ul>
            </nav>
            <div class="header-actions">
                <button
                    class="theme-toggle"
                    type="button"
                    aria-label={props.theme.toggle_label()}
                    aria-pressed={props.theme.pressed().to_string()}
                    onclick={on_theme}
                >
                    <i class={props.theme.icon()} aria-hidden="true"></i>
                </button>
                <button
                    class={classes!("menu-toggle", props.menu_open.then_some("is-open"))}
                    type="button"
                    aria-label={if props.menu_open { "Close menu" } else { "Open menu" }}
                    aria-expanded={props.menu_open.to_string()}
                    aria-controls="menu-overlay"
                    onclick={on_menu}
                >
                    <span /><span />
                </button>
            </div>
        </header>
    }
}

#[derive(Properties, PartialEq)]
pub struct MenuOverlayProps {
    pub open: bool,
    pub stagger: Duration,
    pub on_select: Callback<String>,
    pub on_close: Callback<()>,
}

#[function_component(MenuOverlay)]
pub fn menu_overlay(props: &MenuOverlayProps) -> Html {
    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div
            id="menu-overlay"
            class={classes!("menu-overlay", props.open.then_some("is-open"))}
            aria-hidden={(!props.open).to_string()}
            onclick={on_backdrop}
        >
            <nav aria-label="Menu">
                <ul>
                    { for NAV_LINKS.iter().enumerate().map(|(index, link)| {
                        let delay = if props.open {
                            stagger_delay(index, props.stagger).as_millis()
                        } else {
                            0
                        };
                        html! {
                            <li style={format!("transition-delay: {delay}ms;")}>
                                <a href={link.href} onclick={anchor_click(&props.on_select, link.href)}>
                                    <span class="menu-index">{format!("0{}", index + 1)}</span>
                                    {link.label}
                                </a>
                            </li>
                        }
                    }) }
                </ul>
            </nav>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub site: Site,
    #[prop_or_default]
    pub on_cursor: Callback<CursorEvent>,
    #[prop_or_default]
    pub on_navigate: Callback<String>,
}

#[function_component(Hero)]
pub fn hero(props: &SectionProps) -> Html {
    let config = &props.site.config;
    let profile = &props.site.profile;
    let tagline = use_typewriter(AttrValue::from(profile.tagline.clone()), config.typewriter_delay);
    let (text_enter, text_leave) = hover_handlers(&props.on_cursor, CursorVariant::Text);

    html! {
        <section id="home" class="hero">
            <div class="hero-portrait">
                <FallbackImage
                    src={config.asset_url(&profile.image)}
                    placeholder={profile.placeholder_image.clone()}
                    alt={profile.name.clone()}
                    log_level={config.log_level}
                />
            </div>
            <div class="hero-copy">
                <h1 onmouseenter={text_enter} onmouseleave={text_leave}>{profile.name.clone()}</h1>
                <p class="hero-title">{profile.title.clone()}</p>
                <p class="hero-tagline" aria-label={profile.tagline.clone()}>
                    {tagline}<span class="caret" aria-hidden="true" />
                </p>
                <div class="hero-actions">
                    <a class="button primary" href="#projects" onclick={anchor_click(&props.on_navigate, "#projects")}>
                        {"See Projects"}
                    </a>
                    <a class="button outline" href={config.asset_url(&profile.resume)} download="">
                        {"Resume"}
                    </a>
                </div>
            </div>
        </section>
    }
}

#[function_component(About)]
pub fn about(props: &SectionProps) -> Html {
    let config = &props.site.config;
    let profile = &props.site.profile;
    let (text_enter, text_leave) = hover_handlers(&props.on_cursor, CursorVariant::Text);

    html! {
        <RevealSection id="about" threshold={config.reveal_threshold} duration={config.reveal_duration}>
            <h2 onmouseenter={text_enter} onmouseleave={text_leave}>{"About Me"}</h2>
            <p class="bio">{profile.bio.clone()}</p>
            <p class="muted">{profile.location.clone()}</p>
            <h3 id="skills">{"Skills & Tech Stack"}</h3>
            <ul class="skill-grid">
                { for profile.skills.iter().map(|skill| match skill_icon(skill) {
                    Some(icon) => html! {
                        <li class="skill" title={skill.clone()}>
                            <i class={icon} aria-hidden="true"></i>
                            <span class="skill-label">{skill.clone()}</span>
                        </li>
                    },
                    None => html! {
                        <li class="skill chip">{skill.clone()}</li>
                    },
                }) }
            </ul>
        </RevealSection>
    }
}

#[function_component(Experience)]
pub fn experience(props: &SectionProps) -> Html {
    let config = &props.site.config;
    let profile = &props.site.profile;

    html! {
        <RevealSection id="experience" threshold={config.reveal_threshold} duration={config.reveal_duration}>
            <h2>{"Experience"}</h2>
            <ol class="timeline">
                { for profile.experience.iter().map(|entry| html! {
                    <li class="timeline-entry">
                        <div class="timeline-heading">
                            <h3>{entry.role.clone()}</h3>
                            <span class="muted">{format!("{} · {}", entry.company, entry.period)}</span>
                        </div>
                        <ul>
                            { for entry.bullets.iter().map(|bullet| html! { <li>{bullet.clone()}</li> }) }
                        </ul>
                    </li>
                }) }
            </ol>
        </RevealSection>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectsProps {
    pub site: Site,
    pub pointer: PointerPosition,
    pub on_cursor: Callback<CursorEvent>,
}

#[function_component(Projects)]
pub fn projects(props: &ProjectsProps) -> Html {
    let config = &props.site.config;
    let profile = &props.site.profile;
    let hovered = use_state(|| None::<usize>);

    let cards = profile.projects.iter().enumerate().map(|(index, project)| {
        let onmouseenter = {
            let hovered = hovered.clone();
            let on_cursor = props.on_cursor.clone();
            Callback::from(move |_: MouseEvent| {
                hovered.set(Some(index));
                on_cursor.emit(CursorEvent::Enter(CursorVariant::Hidden));
            })
        };
        let onmouseleave = {
            let hovered = hovered.clone();
            let on_cursor = props.on_cursor.clone();
            Callback::from(move |_: MouseEvent| {
                hovered.set(None);
                on_cursor.emit(CursorEvent::Leave);
            })
        };

        html! {
            <li>
                <a
                    class={classes!("project-card", format!("accent-{}", project.accent))}
                    href={project.link.clone()}
                    target="_blank"
                    rel="noopener noreferrer"
                    onmouseenter={onmouseenter}
                    onmouseleave={onmouseleave}
                >
                    <div class="project-heading">
                        <h3>{project.title.clone()}</h3>
                        <span class="muted">{project.year.to_string()}</span>
                    </div>
                    <p>{project.description.clone()}</p>
                    <ul class="tech-list">
                        { for project.tech.iter().map(|tech| html! { <li>{tech.clone()}</li> }) }
                    </ul>
                    <span class="sr-only">{" (opens in a new tab)"}</span>
                </a>
            </li>
        }
    });

    let preview = (*hovered).and_then(|index| profile.projects.get(index)).map(|project| {
        let position = pointer_preview_position(props.pointer, viewport_size());
        html! {
            <aside
                class="hover-preview is-visible"
                style={format!("--preview-x: {:.2}px; --preview-y: {:.2}px;", position.x, position.y)}
                aria-hidden="true"
            >
                <FallbackImage
                    key={project.title.clone()}
                    class={classes!("hover-preview-media")}
                    src={config.asset_url(&project.image)}
                    placeholder={profile.placeholder_image.clone()}
                    alt={format!("{} preview", project.title)}
                    log_level={config.log_level}
                />
            </aside>
        }
    });

    html! {
        <RevealSection id="projects" threshold={config.reveal_threshold} duration={config.reveal_duration}>
            <h2>{"Projects"}</h2>
            <ul class="project-grid">{ for cards }</ul>
            { preview.unwrap_or_default() }
        </RevealSection>
    }
}

#[function_component(Contact)]
pub fn contact(props: &SectionProps) -> Html {
    let config = &props.site.config;
    let profile = &props.site.profile;
    let links = profile.contact_links(config.messaging_url.as_deref());
    let (text_enter, text_leave) = hover_handlers(&props.on_cursor, CursorVariant::Text);

    html! {
        <RevealSection id="contact" class={classes!("contact")} threshold={config.reveal_threshold} duration={config.reveal_duration}>
            <h2 onmouseenter={text_enter} onmouseleave={text_leave}>{"Let's Connect"}</h2>
            <p class="contact-email">{profile.email.clone()}</p>
            <ul class="contact-links">
                { for links.into_iter().map(|link| html! {
                    <li>
                        <a href={link.href.clone()} target="_blank" rel="noopener noreferrer" aria-label={link.label.clone()}>
                            <i class={link.icon} aria-hidden="true"></i>
                            <span class="contact-label">{link.label.clone()}</span>
                        </a>
                    </li>
                }) }
            </ul>
        </RevealSection>
    }
}

#[function_component(Footer)]
pub fn footer(props: &SectionProps) -> Html {
    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <footer class="site-footer">
            <p class="muted">{format!("© {year} {}", props.site.profile.name)}</p>
        </footer>
    }
}
