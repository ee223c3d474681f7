mod background;
mod contact;
mod effects;
mod gallery;
mod observer;

use crate::catalog::{fetch_catalog, load_catalog_with, Gallery, GalleryAction, TechFilter};
use crate::config::{SiteConfig, INTRO_DURATION_MS, LOADER_HIDE_DELAY_MS, SECTION_THRESHOLD};
use crate::scroll::{back_to_top_visible, SectionNav, SECTIONS};
use crate::stats::{StatsView, STAT_TILES};
use crate::telemetry::{log_event, LogLevel};
use crate::theme::{
    apply_theme, apply_theme_with_transition, document_theme, resolve_theme, toggle_theme,
    WebStorage,
};
use background::ParticleCanvas;
use contact::ContactForm;
use effects::{Counter, CustomCursor, Reveal, SparkBurst, TypedHeadline};
use gallery::{ProjectGallery, ProjectModal};
use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use observer::{Retention, VisibilityObserver};
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, KeyboardEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

fn viewport_size() -> (f64, f64) {
    let Some(win) = window() else {
        return (1280.0, 720.0);
    };

    let width = win
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(720.0);

    (width, height)
}

/// True when the click landed on `node` itself rather than on one of its children.
fn clicked_directly(event: &MouseEvent, node: &NodeRef) -> bool {
    let (Some(target), Some(element)) = (event.target(), node.get()) else {
        return false;
    };

    JsValue::from(target) == JsValue::from(element)
}

fn set_scroll_locked(locked: bool) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body
            .style()
            .set_property("overflow", if locked { "hidden" } else { "" });
    }
}

fn mark_body_loaded() {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body.class_list().add_1("loaded");
    }
}

fn scroll_to_top() {
    if let Some(win) = window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        win.scroll_to_with_scroll_to_options(&options);
    }
}

impl Reducible for Gallery {
    type Action = GalleryAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
struct StatsModalProps {
    view: Option<StatsView>,
    on_close: Callback<()>,
}

#[function_component(StatsModal)]
fn stats_modal(props: &StatsModalProps) -> Html {
    let overlay = use_node_ref();

    let on_overlay_click = {
        let overlay = overlay.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |event: MouseEvent| {
            if clicked_directly(&event, &overlay) {
                on_close.emit(());
            }
        })
    };
    let on_close = props.on_close.reform(|_: MouseEvent| ());

    let display = if props.view.is_some() { "display: flex;" } else { "display: none;" };
    let title = props.view.as_ref().map(|view| view.title).unwrap_or_default();
    let rows = props.view.as_ref().map(|view| view.rows).unwrap_or_default();

    html! {
        <div
            id="statsModal"
            class="modal"
            style={display}
            ref={overlay}
            onclick={on_overlay_click}
            role="dialog"
            aria-modal="true"
            aria-labelledby="statsTitle"
        >
            <div class="modal-content">
                <button
                    id="closeStatsModal"
                    type="button"
                    class="modal-close"
                    aria-label="Cerrar"
                    onclick={on_close}
                >
                    {"×"}
                </button>
                <h3 id="statsTitle">{title}</h3>
                <div id="statsList">
                    { for rows.iter().map(|row| html! { <div class="item">{*row}</div> }) }
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SideNavProps {
    nav: SectionNav,
}

#[function_component(SideNav)]
fn side_nav(props: &SideNavProps) -> Html {
    html! {
        <nav id="sideNav" aria-label="Secciones">
            { for SECTIONS.iter().map(|(id, label)| html! {
                <a
                    href={format!("#{id}")}
                    class={classes!("dot", props.nav.is_active(id).then_some("active"))}
                    data-section={*id}
                    aria-label={*label}
                />
            }) }
        </nav>
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: Rc<SiteConfig>,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let config = props.config.clone();
    let theme = use_state(|| resolve_theme(&WebStorage::local(), document_theme()));
    let gallery = use_reducer_eq(Gallery::default);
    let stats = use_state(|| None::<StatsView>);
    let section_nav = use_state(SectionNav::default);
    let show_back_to_top = use_state(|| false);
    let loader_hidden = use_state(|| false);
    let intro_done = use_state(|| false);

    {
        let current = *theme;
        use_effect_with((), move |_| {
            apply_theme(current);
            || ()
        });
    }

    {
        let gallery = gallery.clone();
        let config = config.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let projects = load_catalog_with(&config, fetch_catalog(&config.data_path)).await;
                gallery.dispatch(GalleryAction::Load(projects));
            });
            || ()
        });
    }

    {
        let loader_hidden = loader_hidden.clone();
        let intro_done = intro_done.clone();
        use_effect_with((), move |_| {
            let loader = Timeout::new(LOADER_HIDE_DELAY_MS, move || loader_hidden.set(true));
            let intro = Timeout::new(INTRO_DURATION_MS, move || {
                mark_body_loaded();
                intro_done.set(true);
            });
            move || {
                drop(loader);
                drop(intro);
            }
        });
    }

    {
        let gallery = gallery.clone();
        let show_back_to_top = show_back_to_top.clone();
        use_effect_with((), move |_| {
            let mut listeners = Vec::new();

            if let Some(win) = window() {
                listeners.push(EventListener::new(&win, "keydown", move |event| {
                    let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                        return;
                    };
                    if event.key() == "Escape" {
                        gallery.dispatch(GalleryAction::Close);
                    }
                }));

                let scroll_win = win.clone();
                listeners.push(EventListener::new(&win, "scroll", move |_| {
                    let scroll_y = scroll_win.scroll_y().unwrap_or(0.0);
                    show_back_to_top.set(back_to_top_visible(scroll_y));
                }));
            }

            move || drop(listeners)
        });
    }

    {
        let section_nav = section_nav.clone();
        use_effect_with((), move |_| {
            let document = window().and_then(|w| w.document());
            let observer = document.and_then(|document| {
                let observer = VisibilityObserver::new(SECTION_THRESHOLD, move |section| {
                    let mut next = SectionNav::default();
                    next.activate(&section.id());
                    section_nav.set(next);
                    Retention::Keep
                })?;
                for (id, _) in SECTIONS {
                    if let Some(section) = document.get_element_by_id(id) {
                        observer.observe(&section);
                    }
                }
                Some(observer)
            });
            move || drop(observer)
        });
    }

    {
        let locked = gallery.is_open() || stats.is_some();
        use_effect_with(locked, move |&locked| {
            set_scroll_locked(locked);
            || ()
        });
    }

    let on_toggle = {
        let theme = theme.clone();
        let log_level = config.log_level;
        Callback::from(move |_| {
            let next = toggle_theme(&mut WebStorage::local(), *theme);
            apply_theme_with_transition(next);
            theme.set(next);
            log_event(
                log_level,
                LogLevel::Debug,
                "theme_changed",
                serde_json::json!({ "theme": next.as_str() }),
            );
        })
    };

    let on_filter = {
        let gallery = gallery.clone();
        let log_level = config.log_level;
        Callback::from(move |filter: TechFilter| {
            log_event(
                log_level,
                LogLevel::Debug,
                "filter_applied",
                serde_json::json!({ "tag": filter.as_attr() }),
            );
            gallery.dispatch(GalleryAction::Filter(filter));
        })
    };

    let on_open = {
        let gallery = gallery.clone();
        let log_level = config.log_level;
        Callback::from(move |index: usize| {
            log_event(
                log_level,
                LogLevel::Debug,
                "modal_opened",
                serde_json::json!({ "index": index }),
            );
            gallery.dispatch(GalleryAction::Open(index));
        })
    };

    let on_close_project = {
        let gallery = gallery.clone();
        Callback::from(move |_| gallery.dispatch(GalleryAction::Close))
    };
    let on_next = {
        let gallery = gallery.clone();
        Callback::from(move |_| gallery.dispatch(GalleryAction::Next))
    };
    let on_previous = {
        let gallery = gallery.clone();
        Callback::from(move |_| gallery.dispatch(GalleryAction::Previous))
    };

    let on_close_stats = {
        let stats = stats.clone();
        Callback::from(move |_| stats.set(None))
    };

    let on_back_to_top = Callback::from(|_: MouseEvent| scroll_to_top());

    html! {
        <>
            <div id="loader" class={classes!("loader", (*loader_hidden).then_some("hidden"))} />
            if !*intro_done {
                <div class="intro" aria-hidden="true">
                    <span class="intro-logo">{"JS"}</span>
                </div>
            }
            <ParticleCanvas config={config.clone()} />
            <CustomCursor />
            <SparkBurst />
            <SideNav nav={(*section_nav).clone()} />

            <header class="site-header">
                <button
                    id="themeToggle"
                    class="theme-toggle"
                    type="button"
                    aria-label={(*theme).toggle_label()}
                    onclick={on_toggle}
                >
                    {(*theme).icon()}
                </button>
            </header>

            <main>
                <section id="inicio" class="section hero">
                    <TypedHeadline text={config.headline.clone()} speed_ms={config.type_speed_ms} />
                    <Reveal>
                        <p class="hero-lead">
                            {"Desarrollo web, electrónica y prototipos impresos en 3D."}
                        </p>
                    </Reveal>
                </section>

                <section id="proyectos" class="section">
                    <Reveal>
                        <h2>{"Proyectos"}</h2>
                    </Reveal>
                    <ProjectGallery gallery={(*gallery).clone()} {on_filter} {on_open} />
                </section>

                <section id="stats" class="section">
                    <Reveal>
                        <h2>{"Stats"}</h2>
                    </Reveal>
                    <div class="stats-grid">
                        { for STAT_TILES.iter().map(|tile| {
                            let stats = stats.clone();
                            let view = StatsView::from(tile);
                            html! {
                                <div
                                    class="stat"
                                    role="button"
                                    tabindex="0"
                                    data-type={tile.category}
                                    onclick={Callback::from(move |_| stats.set(Some(view.clone())))}
                                >
                                    <Counter target={tile.target} />
                                    if let Some(label) = tile.label {
                                        <p>{label}</p>
                                    }
                                </div>
                            }
                        }) }
                    </div>
                </section>

                <section id="contacto" class="section">
                    <Reveal>
                        <h2>{"Contacto"}</h2>
                    </Reveal>
                    <ContactForm config={config.clone()} />
                </section>
            </main>

            <ProjectModal
                project={gallery.current().cloned()}
                on_close={on_close_project}
                {on_next}
                {on_previous}
            />
            <StatsModal view={(*stats).clone()} on_close={on_close_stats} />

            <button
                id="backToTop"
                type="button"
                class={classes!("back-to-top", (*show_back_to_top).then_some("visible"))}
                aria-label="Volver arriba"
                onclick={on_back_to_top}
            >
                {"↑"}
            </button>
        </>
    }
}

pub fn run() {
    console_error_panic_hook::set_once();

    let config = Rc::new(SiteConfig::from_build_env());
    log_event(
        config.log_level,
        LogLevel::Info,
        "app_start",
        serde_json::json!({ "data_path": config.data_path.as_str() }),
    );

    let props = AppProps { config };
    match window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("app"))
    {
        Some(root) => yew::Renderer::<App>::with_root_and_props(root, props).render(),
        None => yew::Renderer::<App>::with_props(props).render(),
    };
}
