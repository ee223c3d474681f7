use super::clicked_directly;
use super::observer::{mark_visible, Retention, VisibilityObserver};
use crate::catalog::{available_filters, Gallery, Project, TechFilter};
use crate::config::CARD_REVEAL_THRESHOLD;
use web_sys::Element;
use yew::prelude::*;

fn tag_badges(technologies: &[String]) -> Html {
    html! {
        { for technologies.iter().map(|tag| html! { <span class="tag">{tag.clone()}</span> }) }
    }
}

fn filter_label(filter: &TechFilter) -> String {
    match filter {
        TechFilter::All => "Todos".to_string(),
        TechFilter::Tag(tag) => tag.clone(),
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectGalleryProps {
    pub gallery: Gallery,
    pub on_filter: Callback<TechFilter>,
    pub on_open: Callback<usize>,
}

#[function_component(ProjectGallery)]
pub fn project_gallery(props: &ProjectGalleryProps) -> Html {
    let grid = use_node_ref();
    let observer = use_mut_ref(|| None::<VisibilityObserver>);

    {
        let grid = grid.clone();
        let observer = observer.clone();
        use_effect_with(props.gallery.displayed_indices().to_vec(), move |_| {
            let mut slot = observer.borrow_mut();
            if slot.is_none() {
                *slot = VisibilityObserver::new(CARD_REVEAL_THRESHOLD, |card| {
                    mark_visible(card);
                    Retention::Keep
                });
            }

            if let (Some(observer), Some(grid)) = (slot.as_ref(), grid.cast::<Element>()) {
                let children = grid.children();
                let cards: Vec<Element> = (0..children.length())
                    .filter_map(|index| children.item(index))
                    .collect();
                observer.retarget(&cards);
            }
            || ()
        });
    }

    let active = props.gallery.filter().clone();
    let filters = available_filters(props.gallery.projects());

    html! {
        <>
            <div class="filters" role="toolbar" aria-label="Filtrar proyectos">
                { for filters.into_iter().map(|filter| {
                    let is_active = filter == active;
                    let on_filter = props.on_filter.clone();
                    let attr = filter.as_attr().to_string();
                    let label = filter_label(&filter);
                    html! {
                        <button
                            type="button"
                            class={classes!("filter-btn", is_active.then_some("active"))}
                            data-tech={attr}
                            aria-pressed={is_active.to_string()}
                            onclick={Callback::from(move |_| on_filter.emit(filter.clone()))}
                        >
                            {label}
                        </button>
                    }
                }) }
            </div>
            <div id="gridProyectos" class="grid" ref={grid}>
                { for props.gallery.displayed().map(|(index, project)| {
                    let on_open = props.on_open.clone();
                    html! {
                        <div
                            key={index}
                            class="card"
                            role="button"
                            tabindex="0"
                            onclick={Callback::from(move |_| on_open.emit(index))}
                        >
                            <h3>{project.title.clone()}</h3>
                            <p>{project.description.clone()}</p>
                            <div class="badges">{tag_badges(&project.technologies)}</div>
                        </div>
                    }
                }) }
            </div>
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectModalProps {
    pub project: Option<Project>,
    pub on_close: Callback<()>,
    pub on_next: Callback<()>,
    pub on_previous: Callback<()>,
}

#[function_component(ProjectModal)]
pub fn project_modal(props: &ProjectModalProps) -> Html {
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
    let on_next = props.on_next.reform(|_: MouseEvent| ());
    let on_previous = props.on_previous.reform(|_: MouseEvent| ());

    let display = if props.project.is_some() { "display: flex;" } else { "display: none;" };
    let (title, description, technologies, image) = match props.project.as_ref() {
        Some(project) => (
            project.title.clone(),
            project.description.clone(),
            project.technologies.clone(),
            project.image_src().to_string(),
        ),
        None => Default::default(),
    };

    html! {
        <div
            id="projectModal"
            class="modal"
            style={display}
            ref={overlay}
            onclick={on_overlay_click}
            role="dialog"
            aria-modal="true"
            aria-labelledby="modalTitle"
        >
            <div class="modal-content">
                <button id="closeModal" type="button" class="modal-close" aria-label="Cerrar" onclick={on_close}>
                    {"×"}
                </button>
                <img id="modalImg" src={image} alt={title.clone()} />
                <h3 id="modalTitle">{title}</h3>
                <p id="modalDesc">{description}</p>
                <div id="modalTech" class="badges">{tag_badges(&technologies)}</div>
                <div class="modal-nav">
                    <button id="prevProject" type="button" aria-label="Proyecto anterior" onclick={on_previous}>
                        {"‹"}
                    </button>
                    <button id="nextProject" type="button" aria-label="Proyecto siguiente" onclick={on_next}>
                        {"›"}
                    </button>
                </div>
            </div>
        </div>
    }
}
