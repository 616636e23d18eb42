//! `ApplicationHandler` implementation for the winit event loop.

use classdock_webview::WindowSignal;
use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::Key;
use winit::window::WindowId;

use super::core::ClassdockApp;
use super::keys::{self, Mods};

impl ApplicationHandler for ClassdockApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) {
            event_loop.exit();
            return;
        }

        self.poll_view_events();
        self.update_window_title();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    self.handle_resize();
                }
            }

            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                if let Some(views) = self.views.as_ref() {
                    views.runtime().set_scale_factor(scale_factor);
                }
                self.send_window_signal(WindowSignal::ScaleFactorChanged);
            }

            WindowEvent::ModifiersChanged(new_modifiers) => {
                self.modifiers = new_modifiers.state();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_keyboard_input(event);
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            event_loop.exit();
            return;
        }
        self.poll_and_schedule(event_loop);
    }
}

impl ClassdockApp {
    fn handle_resize(&mut self) {
        let maximized = self
            .window
            .as_ref()
            .is_some_and(|window| window.is_maximized());
        let signal = resize_signal(self.was_maximized, maximized);
        self.was_maximized = maximized;
        self.send_window_signal(signal);
    }

    fn send_window_signal(&mut self, signal: WindowSignal) {
        if let Some(views) = self.views.as_mut() {
            views.handle_window_signal(signal);
        }
    }

    fn handle_keyboard_input(&mut self, event: KeyEvent) {
        let KeyEvent {
            logical_key, state, ..
        } = event;
        if state != ElementState::Pressed {
            return;
        }

        let key_name = match &logical_key {
            Key::Named(named) => format!("{named:?}"),
            Key::Character(c) => c.to_string(),
            _ => return,
        };

        let mods = Mods {
            ctrl: self.modifiers.control_key(),
            alt: self.modifiers.alt_key(),
            shift: self.modifiers.shift_key(),
            super_key: self.modifiers.super_key(),
        };
        if let Some(action) = keys::resolve(&keys::normalize(&key_name), mods) {
            self.dispatch(action);
        }
    }
}

/// Which host signal a resize represents, given the maximize state before
/// and after.
fn resize_signal(was_maximized: bool, maximized: bool) -> WindowSignal {
    match (was_maximized, maximized) {
        (false, true) => WindowSignal::Maximized,
        (true, false) => WindowSignal::Unmaximized,
        _ => WindowSignal::Resized,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maximize_transitions_are_distinguished() {
        assert_eq!(resize_signal(false, true), WindowSignal::Maximized);
        assert_eq!(resize_signal(true, false), WindowSignal::Unmaximized);
        assert_eq!(resize_signal(false, false), WindowSignal::Resized);
        assert_eq!(resize_signal(true, true), WindowSignal::Resized);
    }
}
