use glfw::{Action, Context, Key, WindowEvent, WindowMode};
use log::{debug, info};
use std::time::{Duration, Instant};

use super::r#trait::WindowEngine;
use crate::error::FireworksError;
use crate::physic_engine::{Color, Rect};
use crate::renderer_engine::DrawTarget;

pub type WindowEvents = glfw::GlfwReceiver<(f64, WindowEvent)>;

/// Fenêtre GLFW de taille fixe.
///
/// Pas de shader : chaque rectangle est un `glClear` restreint par un scissor.
/// Les coordonnées de la simulation (origine en haut à gauche, y vers le bas)
/// sont converties vers celles du framebuffer (origine en bas à gauche).
pub struct GlfwWindowEngine {
    glfw: glfw::Glfw,
    window: glfw::PWindow,
    events: WindowEvents,
    width: i32,
    height: i32,
    /// Facteur framebuffer / fenêtre (écrans HiDPI)
    scale: (f32, f32),
    start: Instant,
}

impl GlfwWindowEngine {
    pub fn init(width: i32, height: i32, title: &str) -> Result<Self, FireworksError> {
        // Les erreurs GLFW sont journalisées, l'échec remonte par les valeurs de retour
        let mut glfw = glfw::init(|err: glfw::Error, description: String| {
            log::error!("GLFW {err:?}: {description}")
        })
            .map_err(|e| FireworksError::ResourceInit(format!("GLFW init failed: {e:?}")))?;

        glfw.window_hint(glfw::WindowHint::Resizable(false));

        let (mut window, events) = glfw
            .create_window(width as u32, height as u32, title, WindowMode::Windowed)
            .ok_or_else(|| {
                FireworksError::ResourceInit(format!("unable to create a {width}x{height} window"))
            })?;

        window.make_current();
        window.set_key_polling(true);
        window.set_close_polling(true);

        // load OpenGL function pointers
        gl::load_with(|s| window.get_proc_address(s) as *const _);

        let (fb_w, fb_h) = window.get_framebuffer_size();
        let scale = (fb_w as f32 / width as f32, fb_h as f32 / height as f32);

        info!(
            "✅ OpenGL context ready for '{}' ({}x{}, framebuffer {}x{})",
            title, width, height, fb_w, fb_h
        );

        Ok(Self {
            glfw,
            window,
            events,
            width,
            height,
            scale,
            start: Instant::now(),
        })
    }

    pub fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }
}

impl DrawTarget for GlfwWindowEngine {
    fn draw_filled_rect(&mut self, rect: Rect, color: Color) {
        if rect.is_empty() {
            return;
        }
        let (sx, sy) = self.scale;
        let fb_h = self.height as f32 * sy;
        let [r, g, b] = color.to_f32();

        unsafe {
            gl::Enable(gl::SCISSOR_TEST);
            gl::Scissor(
                (rect.x as f32 * sx) as i32,
                (fb_h - (rect.y + rect.h) as f32 * sy) as i32,
                (rect.w as f32 * sx).ceil() as i32,
                (rect.h as f32 * sy).ceil() as i32,
            );
            gl::ClearColor(r, g, b, 1.0);
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }
    }
}

impl WindowEngine for GlfwWindowEngine {
    fn poll_quit(&mut self) -> bool {
        self.glfw.poll_events();
        for (_, event) in glfw::flush_messages(&self.events) {
            match event {
                WindowEvent::Key(Key::Escape, _, Action::Press, _) | WindowEvent::Close => {
                    self.window.set_should_close(true);
                }
                _ => {}
            }
        }
        self.window.should_close()
    }

    fn clear(&mut self, color: Color) {
        let [r, g, b] = color.to_f32();
        unsafe {
            gl::Disable(gl::SCISSOR_TEST);
            gl::ClearColor(r, g, b, 1.0);
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }
    }

    fn present_frame(&mut self) {
        self.window.swap_buffers();
    }

    fn now_millis(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    fn sleep_millis(&mut self, ms: u64) {
        std::thread::sleep(Duration::from_millis(ms));
    }

    fn set_title(&mut self, title: &str) {
        self.window.set_title(title);
    }

    fn close(&mut self) {
        self.window.set_should_close(true);
        debug!("GLFW window closed");
    }
}
