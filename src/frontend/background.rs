use super::viewport_size;
use crate::config::SiteConfig;
use crate::particles::{capped_pixel_ratio, Camera, PointCloud, PARTICLE_COLOR, PARTICLE_OPACITY};
use crate::telemetry::{log_event, LogLevel};
use gloo_events::EventListener;
use gloo_render::{request_animation_frame, AnimationFrame};
use js_sys::Math;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

struct ParticleScene {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    cloud: PointCloud,
    camera: Camera,
    width: f64,
    height: f64,
    pixel_ratio: f64,
}

impl ParticleScene {
    /// Returns `None` when the canvas cannot provide a 2D drawing context.
    fn new(canvas: HtmlCanvasElement) -> Option<Self> {
        let context = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        let (width, height) = viewport_size();

        let mut scene = Self {
            canvas,
            context,
            cloud: PointCloud::random(Math::random),
            camera: Camera::for_viewport(width, height),
            width,
            height,
            pixel_ratio: 1.0,
        };
        scene.resize();
        Some(scene)
    }

    fn resize(&mut self) {
        let (width, height) = viewport_size();
        let device_pixel_ratio = window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
        let pixel_ratio = capped_pixel_ratio(device_pixel_ratio);

        self.width = width;
        self.height = height;
        self.pixel_ratio = pixel_ratio;
        self.camera.resize(width, height);
        self.canvas.set_width((width * pixel_ratio) as u32);
        self.canvas.set_height((height * pixel_ratio) as u32);
    }

    fn draw(&mut self) {
        self.cloud.advance();

        let context = &self.context;
        let _ = context.set_transform(self.pixel_ratio, 0.0, 0.0, self.pixel_ratio, 0.0, 0.0);
        context.clear_rect(0.0, 0.0, self.width, self.height);
        context.set_global_alpha(PARTICLE_OPACITY);
        context.set_fill_style_str(PARTICLE_COLOR);

        for point in self.cloud.rotated() {
            if let Some(projected) = self.camera.project(point, self.width, self.height) {
                let half = projected.size / 2.0;
                context.fill_rect(
                    projected.x - half,
                    projected.y - half,
                    projected.size,
                    projected.size,
                );
            }
        }
    }
}

/// Keeps the render loop and resize listener alive; dropping it stops both.
struct BackgroundLoop {
    frame: Rc<RefCell<Option<AnimationFrame>>>,
    _resize: EventListener,
}

impl Drop for BackgroundLoop {
    fn drop(&mut self) {
        self.frame.borrow_mut().take();
    }
}

fn render_frame(scene: Rc<RefCell<ParticleScene>>, frame: Rc<RefCell<Option<AnimationFrame>>>) {
    let next_scene = scene.clone();
    let next_frame = frame.clone();
    let handle = request_animation_frame(move |_| render_frame(next_scene, next_frame));
    *frame.borrow_mut() = Some(handle);

    scene.borrow_mut().draw();
}

fn start(canvas: HtmlCanvasElement) -> Option<BackgroundLoop> {
    let scene = Rc::new(RefCell::new(ParticleScene::new(canvas)?));
    let win = window()?;

    let resize_scene = scene.clone();
    let resize = EventListener::new(&win, "resize", move |_| {
        resize_scene.borrow_mut().resize();
    });

    let frame = Rc::new(RefCell::new(None));
    render_frame(scene, frame.clone());

    Some(BackgroundLoop {
        frame,
        _resize: resize,
    })
}

#[derive(Properties, PartialEq)]
pub struct ParticleCanvasProps {
    pub config: Rc<SiteConfig>,
}

#[function_component(ParticleCanvas)]
pub fn particle_canvas(props: &ParticleCanvasProps) -> Html {
    let canvas = use_node_ref();

    {
        let canvas = canvas.clone();
        let log_level = props.config.log_level;
        use_effect_with((), move |_| {
            let running = canvas.cast::<HtmlCanvasElement>().and_then(start);
            if running.is_none() {
                log_event(
                    log_level,
                    LogLevel::Warn,
                    "background_skipped",
                    serde_json::json!({ "reason": "no 2d canvas context" }),
                );
            }
            move || drop(running)
        });
    }

    html! { <canvas id="bg3d" ref={canvas} aria-hidden="true" /> }
}
