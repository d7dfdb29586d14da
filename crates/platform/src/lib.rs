//! Platform layer: windowing & event loop.
//! A1: create a window and process basic events.
//! A3: drive the renderer with continuous redraws for the orbit camera.

use std::sync::Arc;

use anyhow::Result;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use asset::InterleavedBuffer;
use renderer::GpuState;

const WINDOW_TITLE: &str = "Veles3D";

struct ViewerApp {
    backends: wgpu::Backends,
    width: u32,
    height: u32,
    mesh: InterleavedBuffer,
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        event_loop.set_control_flow(ControlFlow::Poll);

        let attrs = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(PhysicalSize::new(self.width, self.height));
        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .expect("Failed to create window"),
        );
        log::info!(
            "Window created: {}x{}",
            window.inner_size().width,
            window.inner_size().height
        );

        let gpu = pollster::block_on(GpuState::new(window.clone(), self.backends, &self.mesh));
        self.window = Some(window);
        self.gpu = Some(gpu);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested. Exiting event loop.");
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                log::info!("Resized: {}x{}", new_size.width, new_size.height);
                if let Some(gpu) = self.gpu.as_mut() {
                    gpu.resize(new_size.width, new_size.height);
                }
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                // Сам resize придёт отдельным событием.
                log::info!("Scale factor changed: {scale_factor:.3}");
            }
            WindowEvent::RedrawRequested => {
                let Some(gpu) = self.gpu.as_mut() else {
                    return;
                };
                match gpu.render() {
                    Ok(()) => {}
                    Err(err) if GpuState::is_surface_lost(&err) => {
                        log::warn!("Surface lost/outdated, recreating.");
                        gpu.recreate_surface();
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of GPU memory. Exiting event loop.");
                        event_loop.exit();
                    }
                    Err(err) => {
                        log::warn!("Surface error: {err:?}");
                    }
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        // The orbit camera animates every frame.
        if let Some(window) = self.window.as_ref() {
            window.request_redraw();
        }
    }
}

/// Open a window and render the mesh until the window is closed.
pub fn run_viewer(
    backends: wgpu::Backends,
    width: u32,
    height: u32,
    mesh: InterleavedBuffer,
) -> Result<()> {
    let event_loop: EventLoop<()> = EventLoop::new()?;

    let mut app = ViewerApp {
        backends,
        width: width.max(1),
        height: height.max(1),
        mesh,
        window: None,
        gpu: None,
    };
    event_loop.run_app(&mut app)?;
    Ok(())
}
