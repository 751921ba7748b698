//! winit host: drives an [`AnimationSession`] from window events.
//!
//! Redraw requests are the frame callback, `Resized` is the resize
//! notification and closing the window tears the session down.

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::ActiveEventLoop,
    window::{Window, WindowId},
};

use crate::canvas::Canvas;
use crate::config::Config;
use crate::error::AppError;
use crate::gpu::GpuState;
use crate::schedule::{FrameHandle, FrameHost, ListenerId};
use crate::session::AnimationSession;

/// [`FrameHost`] backed by a winit window.
///
/// Requesting a frame asks the window for a redraw; the handle is held until
/// the redraw arrives. winit cannot withdraw a redraw request, so
/// cancelling only forgets the handle and the redraw then finds nothing to
/// deliver.
pub struct WindowHost {
    window: Arc<Window>,
    next_id: u64,
    pending: Option<FrameHandle>,
    listener: Option<ListenerId>,
}

impl WindowHost {
    pub fn new(window: Arc<Window>) -> Self {
        Self {
            window,
            next_id: 0,
            pending: None,
            listener: None,
        }
    }

    /// Take the frame handle due at this redraw.
    pub fn take_pending(&mut self) -> Option<FrameHandle> {
        self.pending.take()
    }

    /// Whether `Resized` events are forwarded to the session.
    pub fn is_listening(&self) -> bool {
        self.listener.is_some()
    }
}

impl FrameHost for WindowHost {
    fn request_frame(&mut self) -> FrameHandle {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.pending = Some(handle);
        self.window.request_redraw();
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
        }
    }

    fn add_resize_listener(&mut self) -> ListenerId {
        self.next_id += 1;
        let id = ListenerId(self.next_id);
        self.listener = Some(id);
        id
    }

    fn remove_resize_listener(&mut self, id: ListenerId) {
        if self.listener == Some(id) {
            self.listener = None;
        }
    }
}

pub(crate) struct App {
    config: Config,
    window: Option<Arc<Window>>,
    gpu_state: Option<GpuState>,
    session: Option<AnimationSession<Canvas, WindowHost>>,
    error: Option<AppError>,
}

impl App {
    pub(crate) fn new(config: Config) -> Self {
        Self {
            config,
            window: None,
            gpu_state: None,
            session: None,
            error: None,
        }
    }

    /// The error that stopped the event loop, if any.
    pub(crate) fn into_result(self) -> Result<(), AppError> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), AppError> {
        let window_config = &self.config.window;
        let window_attrs = Window::default_attributes()
            .with_title(window_config.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                window_config.width,
                window_config.height,
            ));

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        let mut gpu_state = pollster::block_on(GpuState::new(
            window.clone(),
            window_config.clear_color,
        ))?;

        let size = window.inner_size();
        let canvas = Canvas::new(size.width as f32, size.height as f32)
            .with_opacity(window_config.opacity);
        let host = WindowHost::new(window.clone());
        let session = AnimationSession::mount(canvas, host, self.config.field.clone());

        // Show the mount frame right away rather than waiting for the next.
        if let Err(e) = gpu_state.render(session.surface()) {
            log::warn!("Failed to present first frame: {:?}", e);
        }

        self.window = Some(window);
        self.gpu_state = Some(gpu_state);
        self.session = Some(session);
        Ok(())
    }

    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(session) = &mut self.session {
            session.teardown();
        }
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init(event_loop) {
                log::error!("{}", e);
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                self.shutdown(event_loop);
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.resize(physical_size);
                }
                if let Some(session) = &mut self.session {
                    if session.host().is_listening() {
                        session.on_resize(physical_size.width as f32, physical_size.height as f32);
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                let (Some(session), Some(gpu_state)) = (&mut self.session, &mut self.gpu_state) else {
                    return;
                };

                // Redraws without a pending handle (expose events, a frame
                // cancelled by teardown) only re-present.
                if let Some(handle) = session.host_mut().take_pending() {
                    session.on_frame(handle);
                }

                match gpu_state.render(session.surface()) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        log::warn!("Surface lost, reconfiguring");
                        gpu_state.reconfigure();
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of GPU memory, exiting");
                        session.teardown();
                        event_loop.exit();
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        // Session first: it still holds the window through its host.
        self.session = None;
        self.gpu_state = None;
        self.window = None;
    }
}
