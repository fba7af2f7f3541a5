use crate::core::tween::ProjectTarget;
use crate::core::{Animator, Clock, SceneState};
use crate::render;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Wall-clock epoch seconds, as `Date.now() / 1000`.
pub struct WallClock;

impl Clock for WallClock {
    fn now_secs(&self) -> f64 {
        js_sys::Date::now() * 0.001
    }
}

pub struct FrameContext<'a> {
    pub scene: Rc<RefCell<SceneState>>,
    pub loaded: Rc<RefCell<bool>>,
    pub queued_project: Rc<RefCell<Option<ProjectTarget>>>,
    pub animator: Animator,
    pub clock: Box<dyn Clock>,

    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let loaded = *self.loaded.borrow();
        let snap = {
            let mut scene = self.scene.borrow_mut();
            let mut queued = self.queued_project.borrow_mut();
            if !self
                .animator
                .step_with_clock(&mut scene, loaded, self.clock.as_ref(), &mut queued)
            {
                return;
            }
            scene.snapshot()
        };

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            match g.render(&snap) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => g.reconfigure(),
                Err(e) => log::error!("render error: {:?}", e),
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    scene: &SceneState,
    particles: &[crate::core::geometry::ParticleVertex],
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, scene, particles).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        // Reschedule first; the frame body returns early until the page is loaded
        request_frame(&tick_clone);
        frame_ctx_tick.borrow_mut().frame();
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
