use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Date;
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement, ResizeObserver, Window};
use yew::prelude::*;

use crate::config;
use crate::error::MotionError;
use crate::hooks::frame::FrameLoop;
use crate::motion::particles::{FieldConfig, HoleSpec, ParticleField, Surface};

#[derive(Properties, PartialEq, Clone)]
pub struct SandParticlesProps {
    #[prop_or(config::SAND_PARTICLE_COUNT)]
    pub count: usize,
    #[prop_or(config::SAND_SPAWN_BAND)]
    pub spawn_band: f64,
    /// Region kept clear of sand, as fractions of the canvas.
    #[prop_or_default]
    pub hole: Option<HoleSpec>,
    #[prop_or(config::SAND_COLOR)]
    pub color: (u8, u8, u8),
    /// Fixed seed for reproducible layouts; defaults to the current time.
    #[prop_or_default]
    pub seed: Option<u64>,
    #[prop_or_default]
    pub class: Classes,
}

/// Follows the canvas container's size, or the window's where
/// `ResizeObserver` is missing.
enum ResizeWatch {
    Container {
        observer: ResizeObserver,
        _callback: Closure<dyn FnMut()>,
    },
    Window {
        window: Window,
        callback: Closure<dyn FnMut()>,
    },
}

impl ResizeWatch {
    fn attach(window: &Window, container: &Element, callback: Closure<dyn FnMut()>) -> Result<Self, MotionError> {
        match ResizeObserver::new(callback.as_ref().unchecked_ref()) {
            Ok(observer) => {
                observer.observe(container);
                Ok(ResizeWatch::Container {
                    observer,
                    _callback: callback,
                })
            }
            Err(err) => {
                log::debug!("ResizeObserver unavailable, following window resize: {:?}", err);
                window.add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref())?;
                Ok(ResizeWatch::Window {
                    window: window.clone(),
                    callback,
                })
            }
        }
    }

    fn detach(self) {
        match self {
            ResizeWatch::Container { observer, .. } => observer.disconnect(),
            ResizeWatch::Window { window, callback } => {
                let _ = window.remove_event_listener_with_callback("resize", callback.as_ref().unchecked_ref());
            }
        }
    }
}

struct RunningSand {
    frame_loop: FrameLoop,
    resize: ResizeWatch,
}

impl RunningSand {
    fn stop(self) {
        self.frame_loop.stop();
        self.resize.detach();
    }
}

fn surface_context(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, MotionError> {
    canvas
        .get_context("2d")
        .map_err(|err| MotionError::Surface(format!("{:?}", err)))?
        .ok_or_else(|| MotionError::Surface("2d context not available".to_string()))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| MotionError::Surface("unexpected context type".to_string()))
}

fn css_box(canvas: &HtmlCanvasElement) -> Surface {
    Surface {
        width: f64::from(canvas.client_width().max(0)),
        height: f64::from(canvas.client_height().max(0)),
    }
}

/// Sizes the backing store to the canvas' CSS box at device resolution.
fn fit_canvas(window: &Window, canvas: &HtmlCanvasElement, context: &CanvasRenderingContext2d) -> Surface {
    let ratio = window.device_pixel_ratio().max(1.0);
    let surface = css_box(canvas);
    canvas.set_width((surface.width * ratio).round() as u32);
    canvas.set_height((surface.height * ratio).round() as u32);
    // Resizing the backing store resets the transform.
    let _ = context.set_transform(ratio, 0.0, 0.0, ratio, 0.0, 0.0);
    surface
}

fn draw(context: &CanvasRenderingContext2d, field: &ParticleField, fill: &str) {
    let surface = field.surface();
    context.clear_rect(0.0, 0.0, surface.width, surface.height);
    context.set_fill_style_str(fill);
    for particle in field.particles() {
        context.set_global_alpha(particle.opacity);
        context.fill_rect(particle.x, particle.y, particle.size, particle.size);
    }
    context.set_global_alpha(1.0);
}

fn start(canvas_ref: &NodeRef, props: &SandParticlesProps) -> Result<RunningSand, MotionError> {
    let canvas = canvas_ref
        .cast::<HtmlCanvasElement>()
        .ok_or(MotionError::Detached)?;
    let window = web_sys::window().ok_or(MotionError::Unsupported("window"))?;
    let context = surface_context(&canvas)?;
    let surface = fit_canvas(&window, &canvas, &context);

    let seed = props.seed.unwrap_or_else(|| Date::now() as u64);
    let mut rng = fastrand::Rng::with_seed(seed);
    let field = ParticleField::seed(
        surface,
        FieldConfig {
            count: props.count,
            spawn_band: props.spawn_band,
            hole: props.hole.map(|hole| hole.resolve(surface)),
        },
        &mut rng,
    );
    log::debug!(
        "seeded {} sand particles on {}x{}",
        field.particles().len(),
        surface.width,
        surface.height
    );
    let field = Rc::new(RefCell::new(field));

    let (r, g, b) = props.color;
    let fill = format!("rgb({}, {}, {})", r, g, b);
    let frame_loop = {
        let field = field.clone();
        let context = context.clone();
        FrameLoop::start(move |elapsed_ms| {
            let mut field = field.borrow_mut();
            field.advance(elapsed_ms);
            draw(&context, &field, &fill);
        })
    };

    let container: Element = canvas
        .parent_element()
        .unwrap_or_else(|| canvas.clone().into());
    let on_resize = {
        let window = window.clone();
        Closure::<dyn FnMut()>::new(move || {
            if !css_box(&canvas).differs_from(field.borrow().surface()) {
                return;
            }
            let surface = fit_canvas(&window, &canvas, &context);
            field.borrow_mut().resize(surface);
        })
    };
    let resize = ResizeWatch::attach(&window, &container, on_resize)?;

    Ok(RunningSand { frame_loop, resize })
}

/// Drifting sand drawn on a canvas that fills its positioned parent.
#[function_component(SandParticles)]
pub fn sand_particles(props: &SandParticlesProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |props: &SandParticlesProps| {
                let teardown: Box<dyn FnOnce()> = match start(&canvas_ref, props) {
                    Ok(running) => Box::new(move || running.stop()),
                    Err(MotionError::Detached) => {
                        log::debug!("sand canvas not attached, skipping animation");
                        Box::new(|| ())
                    }
                    Err(err) => {
                        log::warn!("sand particles disabled: {}", err);
                        Box::new(|| ())
                    }
                };
                move || teardown()
            },
            props.clone(),
        );
    }

    html! {
        <canvas
            ref={canvas_ref}
            class={classes!("sand-particles", props.class.clone())}
            aria-hidden="true"
            style="position: absolute; inset: 0; width: 100%; height: 100%; pointer-events: none;"
        />
    }
}
