// app/mod.rs - Application Shell
//
// Elm-style wiring for the splash screen: a message enum, an update loop
// that forwards into the state holder, and a frame subscription that only
// runs while something is animating.

pub mod state;

use std::time::{Duration, Instant};

use iced::widget::image;
use iced::{Element, Subscription, Task, Theme};
use log::{debug, info};

use crate::assets;
use crate::constants::motion;
use crate::profile::DisplayProfile;
use crate::ui;
use state::SplashState;

#[derive(Debug, Clone)]
pub enum Message {
    /// The view joined the display tree; fired exactly once at startup
    Appeared,
    /// Frame tick while an animation is live
    Tick(Instant),
    /// The toggle button was activated (pointer or keyboard)
    TogglePressed,
    Exit,
}

pub struct SplashApp {
    state: SplashState,
    background: Option<image::Handle>,
    profile: DisplayProfile,
}

impl SplashApp {
    pub fn new(profile: DisplayProfile) -> (Self, Task<Message>) {
        let app = Self {
            state: SplashState::new(),
            background: assets::background_handle(),
            profile,
        };
        // The appear signal rides the startup task so it fires exactly once,
        // after the window exists.
        (app, Task::done(Message::Appeared))
    }

    pub fn title(&self) -> String {
        format!("Simple - {}", self.profile)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Appeared => {
                info!("splash appeared, starting entrance");
                self.state.appear(Instant::now());
            }
            Message::Tick(now) => {
                self.state.tick(now);
            }
            Message::TogglePressed => {
                self.state.toggle(Instant::now());
                debug!("toggle -> {}", self.state.is_pressed());
            }
            Message::Exit => {
                info!("exit requested");
                return iced::exit();
            }
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        ui::view(&self.state, self.background.as_ref())
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let mut subs = vec![];

        if self.state.is_animating() {
            subs.push(iced::time::every(Duration::from_millis(motion::TICK_MS)).map(Message::Tick));
        }

        subs.push(iced::keyboard::on_key_press(|key, _modifiers| {
            match key.as_ref() {
                iced::keyboard::Key::Named(iced::keyboard::key::Named::Enter)
                | iced::keyboard::Key::Named(iced::keyboard::key::Named::Space) => {
                    Some(Message::TogglePressed)
                }
                iced::keyboard::Key::Named(iced::keyboard::key::Named::Escape) => {
                    Some(Message::Exit)
                }
                _ => None,
            }
        }));

        Subscription::batch(subs)
    }

    /// The splash always presents dark, whatever the host prefers.
    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}
