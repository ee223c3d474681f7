use super::observer::{Retention, VisibilityObserver};
use super::viewport_size;
use crate::config::{
    COUNTER_THRESHOLD, CURSOR_PULSE_MS, REVEAL_THRESHOLD, SPARK_COUNT, SPARK_DELAY_MS,
    SPARK_LIFETIME_MS,
};
use crate::counter::{CounterAnimation, CounterFrame};
use crate::cursor::{spark_burst, CursorAction, CursorState, Spark, INTERACTIVE_SELECTOR};
use crate::typewriter::Typewriter;
use gloo_events::EventListener;
use gloo_render::{request_animation_frame, AnimationFrame};
use gloo_timers::callback::Timeout;
use js_sys::Math;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, MouseEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Wraps its children in a block that fades in the first time it scrolls into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_state(|| false);

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with((), move |_| {
            let observer = node.cast::<Element>().and_then(|element| {
                let observer = VisibilityObserver::new(REVEAL_THRESHOLD, move |_| {
                    visible.set(true);
                    Retention::Release
                })?;
                observer.observe(&element);
                Some(observer)
            });
            move || drop(observer)
        });
    }

    html! {
        <div
            ref={node}
            class={classes!("reveal", (*visible).then_some("visible"), props.class.clone())}
        >
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CounterProps {
    pub target: u64,
}

#[function_component(Counter)]
pub fn counter(props: &CounterProps) -> Html {
    let node = use_node_ref();
    let shown = use_state(|| 0_u64);
    let frame = use_mut_ref(|| None::<AnimationFrame>);

    {
        let node = node.clone();
        let shown = shown.clone();
        let frame = frame.clone();
        use_effect_with(props.target, move |&target| {
            let observer = node.cast::<Element>().and_then(|element| {
                let observer = VisibilityObserver::new(COUNTER_THRESHOLD, move |_| {
                    run_counter(CounterAnimation::new(target), shown.clone(), frame.clone());
                    Retention::Release
                })?;
                observer.observe(&element);
                Some(observer)
            });
            move || drop(observer)
        });
    }

    html! {
        <span ref={node} class="number" data-target={props.target.to_string()}>
            {*shown}
        </span>
    }
}

fn run_counter(
    mut animation: CounterAnimation,
    shown: UseStateHandle<u64>,
    frame: Rc<RefCell<Option<AnimationFrame>>>,
) {
    let tick = animation.tick();
    shown.set(tick.value());

    if let CounterFrame::Running(_) = tick {
        let next_frame = frame.clone();
        let handle = request_animation_frame(move |_| run_counter(animation, shown, next_frame));
        *frame.borrow_mut() = Some(handle);
    }
}

#[derive(Properties, PartialEq)]
pub struct TypedHeadlineProps {
    pub text: AttrValue,
    pub speed_ms: u32,
}

#[function_component(TypedHeadline)]
pub fn typed_headline(props: &TypedHeadlineProps) -> Html {
    let typewriter = {
        let text = props.text.clone();
        use_state(move || Typewriter::new(text.as_str()))
    };

    {
        let handle = typewriter.clone();
        let speed_ms = props.speed_ms;
        use_effect_with((*typewriter).clone(), move |current| {
            let mut next = current.clone();
            let timeout = (!next.is_done()).then(|| {
                Timeout::new(speed_ms, move || {
                    next.tick();
                    handle.set(next);
                })
            });
            move || drop(timeout)
        });
    }

    html! {
        <h1 class="hero-title">
            <span class="headline">{typewriter.visible().to_string()}</span>
            <span class="type-caret" aria-hidden="true">{"|"}</span>
        </h1>
    }
}

impl Reducible for CursorState {
    type Action = CursorAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        next.apply(action);
        Rc::new(next)
    }
}

#[function_component(CustomCursor)]
pub fn custom_cursor() -> Html {
    let cursor = use_reducer(|| {
        let (width, height) = viewport_size();
        CursorState::centered(width, height)
    });
    let pulse = use_mut_ref(|| None::<Timeout>);

    {
        let cursor = cursor.clone();
        use_effect_with((), move |_| {
            let mut listeners = Vec::new();

            if let Some(document) = window().and_then(|w| w.document()) {
                let on_move = cursor.clone();
                listeners.push(EventListener::new(&document, "mousemove", move |event| {
                    let Some(event) = event.dyn_ref::<MouseEvent>() else {
                        return;
                    };
                    on_move.dispatch(CursorAction::Move {
                        x: f64::from(event.client_x()),
                        y: f64::from(event.client_y()),
                    });
                }));

                let on_hover = cursor.clone();
                listeners.push(EventListener::new(&document, "mouseover", move |event| {
                    let over_interactive = event
                        .target()
                        .and_then(|target| target.dyn_into::<Element>().ok())
                        .and_then(|element| element.closest(INTERACTIVE_SELECTOR).ok().flatten())
                        .is_some();
                    on_hover.dispatch(CursorAction::Hover(over_interactive));
                }));

                let on_click = cursor.clone();
                listeners.push(EventListener::new(&document, "click", move |_| {
                    on_click.dispatch(CursorAction::Pulse);
                    let settle = on_click.clone();
                    *pulse.borrow_mut() = Some(Timeout::new(CURSOR_PULSE_MS, move || {
                        settle.dispatch(CursorAction::Settle);
                    }));
                }));
            }

            move || drop(listeners)
        });
    }

    html! {
        <div
            class={classes!("cursor", cursor.active.then_some("active"))}
            style={cursor.style()}
            aria-hidden="true"
        />
    }
}

#[function_component(SparkBurst)]
pub fn spark_burst_layer() -> Html {
    let sparks = use_state(Vec::<Spark>::new);

    {
        let sparks = sparks.clone();
        use_effect_with((), move |_| {
            let cleanup = Rc::new(RefCell::new(None::<Timeout>));
            let cleanup_slot = cleanup.clone();
            let spawn = Timeout::new(SPARK_DELAY_MS, move || {
                sparks.set(spark_burst(SPARK_COUNT, Math::random));
                *cleanup_slot.borrow_mut() = Some(Timeout::new(SPARK_LIFETIME_MS, move || {
                    sparks.set(Vec::new());
                }));
            });

            move || {
                drop(spawn);
                cleanup.borrow_mut().take();
            }
        });
    }

    let (width, height) = viewport_size();
    let (origin_x, origin_y) = (width / 2.0, height / 2.0);

    html! {
        <div class="sparks" aria-hidden="true">
            { for sparks.iter().map(|spark| html! {
                <div class="spark" style={spark.style(origin_x, origin_y)} />
            }) }
        </div>
    }
}
