//! Leptos component wrapping the particle-field canvas.
//!
//! The component owns a full-viewport canvas and wires up the animation
//! loop, debounced resize handling, and throttled pointer tracking. An
//! animation tick runs via `requestAnimationFrame`, stepping the simulation
//! and rendering in the same tick. All state shared between the loop and the
//! event handlers lives in `Rc<RefCell<...>>`/`Rc<Cell<...>>`; everything
//! runs on the single browser thread, so there is no locking.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::field::ParticleField;
use super::render;
use super::sizing::{self, SurfaceMetrics};
use super::theme::FieldTheme;

/// Trailing-edge debounce applied to window resize events, in milliseconds.
/// A burst of resize events collapses to one resize after the burst settles.
const RESIZE_DEBOUNCE_MS: i32 = 120;

/// Cancellation handles and coalescing flags for the scheduled callbacks.
/// Teardown cancels whatever is pending here before dropping the closures.
#[derive(Default)]
struct Scheduler {
	/// Handle of the next animation-loop frame.
	raf_id: Cell<Option<i32>>,
	/// Handle of the pending resize-debounce timer.
	debounce_id: Cell<Option<i32>>,
	/// Handle of the pending pointer-throttle frame.
	throttle_id: Cell<Option<i32>>,
	/// Set while a pointer-throttle frame is pending; further mousemove
	/// events update the pointer but schedule nothing.
	move_scheduled: Cell<bool>,
}

/// Renders the animated particle background on a viewport-filling canvas.
///
/// Mounting starts the animation loop; it stops only when the component is
/// torn down, which cancels the pending frame and timer and removes all
/// window listeners. If the canvas or its 2d context is unavailable the
/// animator silently stays off: the background is decorative and must never
/// block the page.
#[component]
pub fn ParticleFieldCanvas() -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

	let field: Rc<RefCell<Option<ParticleField>>> = Rc::new(RefCell::new(None));
	let scheduler: Rc<Scheduler> = Rc::new(Scheduler::default());
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_body: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let on_resize: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let on_move: Rc<RefCell<Option<Closure<dyn FnMut(MouseEvent)>>>> = Rc::new(RefCell::new(None));
	let on_leave: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let unthrottle: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

	let (field_init, scheduler_init) = (field.clone(), scheduler.clone());
	let (animate_init, resize_body_init, on_resize_init) =
		(animate.clone(), resize_body.clone(), on_resize.clone());
	let (on_move_init, on_leave_init, unthrottle_init) =
		(on_move.clone(), on_leave.clone(), unthrottle.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().unwrap();

		let Ok(Some(ctx)) = canvas.get_context("2d") else {
			return;
		};
		let Ok(ctx) = ctx.dyn_into::<CanvasRenderingContext2d>() else {
			return;
		};

		// Size eagerly once, then build the particle set for those
		// dimensions.
		let metrics = SurfaceMetrics::read(&window);
		sizing::apply(metrics, &canvas, &ctx);
		*field_init.borrow_mut() = Some(ParticleField::new(
			metrics.width,
			metrics.height,
			js_sys::Math::random,
		));

		// Debounced resize body: re-derive metrics, resize the backing
		// store, and rebuild the particle set for the new dimensions.
		let (field_rs, canvas_rs, ctx_rs) = (field_init.clone(), canvas.clone(), ctx.clone());
		*resize_body_init.borrow_mut() = Some(Closure::new(move || {
			let win: Window = web_sys::window().unwrap();
			let metrics = SurfaceMetrics::read(&win);
			sizing::apply(metrics, &canvas_rs, &ctx_rs);
			if let Some(ref mut f) = *field_rs.borrow_mut() {
				f.reset(metrics.width, metrics.height, js_sys::Math::random);
			}
		}));

		// The "resize" listener just restarts the trailing-edge timer.
		let (scheduler_rs, body_rs) = (scheduler_init.clone(), resize_body_init.clone());
		*on_resize_init.borrow_mut() = Some(Closure::new(move || {
			let win: Window = web_sys::window().unwrap();
			if let Some(id) = scheduler_rs.debounce_id.take() {
				win.clear_timeout_with_handle(id);
			}
			if let Some(ref cb) = *body_rs.borrow() {
				scheduler_rs.debounce_id.set(
					win.set_timeout_with_callback_and_timeout_and_arguments_0(
						cb.as_ref().unchecked_ref(),
						RESIZE_DEBOUNCE_MS,
					)
					.ok(),
				);
			}
		}));
		if let Some(ref cb) = *on_resize_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		// Pointer throttle: the flag is cleared one frame after it was set,
		// so a burst of mousemove events schedules at most one callback per
		// frame while the coordinates keep updating immediately.
		let scheduler_ut = scheduler_init.clone();
		*unthrottle_init.borrow_mut() = Some(Closure::new(move || {
			scheduler_ut.move_scheduled.set(false);
			scheduler_ut.throttle_id.set(None);
		}));

		let (field_mv, scheduler_mv, unthrottle_mv) = (
			field_init.clone(),
			scheduler_init.clone(),
			unthrottle_init.clone(),
		);
		*on_move_init.borrow_mut() = Some(Closure::new(move |ev: MouseEvent| {
			if let Some(ref mut f) = *field_mv.borrow_mut() {
				f.pointer = Some((ev.client_x() as f64, ev.client_y() as f64));
			}
			if scheduler_mv.move_scheduled.get() {
				return;
			}
			scheduler_mv.move_scheduled.set(true);
			if let Some(ref cb) = *unthrottle_mv.borrow() {
				let id = web_sys::window()
					.unwrap()
					.request_animation_frame(cb.as_ref().unchecked_ref());
				scheduler_mv.throttle_id.set(id.ok());
			}
		}));
		if let Some(ref cb) = *on_move_init.borrow() {
			let _ =
				window.add_event_listener_with_callback("mousemove", cb.as_ref().unchecked_ref());
		}

		let field_lv = field_init.clone();
		*on_leave_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut f) = *field_lv.borrow_mut() {
				f.pointer = None;
			}
		}));
		if let Some(ref cb) = *on_leave_init.borrow() {
			let _ = window.add_event_listener_with_callback("mouseout", cb.as_ref().unchecked_ref());
		}

		// Animation loop: step then render, one tick per frame, each tick
		// re-scheduling the next.
		let theme = FieldTheme::default();
		let (field_anim, scheduler_anim, animate_inner) = (
			field_init.clone(),
			scheduler_init.clone(),
			animate_init.clone(),
		);
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut f) = *field_anim.borrow_mut() {
				f.step();
				render::render(f, &ctx, &theme);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				let id = web_sys::window()
					.unwrap()
					.request_animation_frame(cb.as_ref().unchecked_ref());
				scheduler_anim.raf_id.set(id.ok());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			scheduler_init
				.raf_id
				.set(window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
		}
	});

	// `on_cleanup` demands `Send + Sync`, but everything here is wasm
	// single-threaded `Rc` state; `SendWrapper` satisfies the bound without
	// changing behavior on the one browser thread.
	let cleanup_state = send_wrapper::SendWrapper::new((
		field,
		scheduler,
		animate,
		resize_body,
		on_resize,
		on_move,
		on_leave,
		unthrottle,
	));
	on_cleanup(move || {
		let (field, scheduler, animate, resize_body, on_resize, on_move, on_leave, unthrottle) =
			cleanup_state.take();
		let Some(window) = web_sys::window() else {
			return;
		};

		if let Some(id) = scheduler.raf_id.take() {
			let _ = window.cancel_animation_frame(id);
		}
		if let Some(id) = scheduler.throttle_id.take() {
			let _ = window.cancel_animation_frame(id);
		}
		if let Some(id) = scheduler.debounce_id.take() {
			window.clear_timeout_with_handle(id);
		}

		if let Some(cb) = on_resize.borrow_mut().take() {
			let _ =
				window.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}
		if let Some(cb) = on_move.borrow_mut().take() {
			let _ = window
				.remove_event_listener_with_callback("mousemove", cb.as_ref().unchecked_ref());
		}
		if let Some(cb) = on_leave.borrow_mut().take() {
			let _ =
				window.remove_event_listener_with_callback("mouseout", cb.as_ref().unchecked_ref());
		}

		// With the frame and timer handles cancelled nothing can invoke
		// these again, so the closures can drop with the component.
		animate.borrow_mut().take();
		resize_body.borrow_mut().take();
		unthrottle.borrow_mut().take();
		field.borrow_mut().take();
	});

	view! {
		<canvas node_ref=canvas_ref class="bg-canvas" />
	}
}
