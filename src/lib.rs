#![cfg(target_arch = "wasm32")]
use crate::core::constants::{PARTICLE_COUNT, PARTICLE_SPREAD};
use crate::core::geometry;
use crate::core::SceneState;
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;

fn canvas_aspect(canvas: &web::HtmlCanvasElement) -> f64 {
    canvas.width().max(1) as f64 / canvas.height().max(1) as f64
}

// Keep the canvas backing store and camera aspect in step with the window
fn wire_canvas_resize(canvas: &web::HtmlCanvasElement, scene: Rc<RefCell<SceneState>>) {
    let Some(window) = web::window() else {
        return;
    };
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
        scene.borrow_mut().camera.set_viewport(
            canvas_resize.width() as f64,
            canvas_resize.height() as f64,
        );
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-3d starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    dom::sync_canvas_backing_size(&canvas);

    let built = Instant::now();
    let scene = Rc::new(RefCell::new(SceneState::new(canvas_aspect(&canvas))));
    let particles = geometry::scatter_particles(
        &mut StdRng::from_entropy(),
        PARTICLE_COUNT,
        PARTICLE_SPREAD,
    );
    log::info!(
        "[scene] {} particles, {} solids in {:?}",
        particles.len(),
        scene.borrow().geometries.len(),
        built.elapsed()
    );

    // Nothing animates until the loading screen starts fading
    let loaded = Rc::new(RefCell::new(false));
    overlay::schedule_dismiss(&document, loaded.clone());

    let queued_project = Rc::new(RefCell::new(None));
    events::wire_page(&events::PageWiring {
        window: window.clone(),
        document: document.clone(),
        scene: scene.clone(),
        queued_project: queued_project.clone(),
    });
    wire_canvas_resize(&canvas, scene.clone());

    // Listeners may borrow the scene while the adapter request is pending
    let initial = scene.borrow().clone();
    let gpu = frame::init_gpu(&canvas, &initial, &particles).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        loaded,
        queued_project,
        animator: core::Animator::default(),
        clock: Box::new(frame::WallClock),
        canvas,
        gpu,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
