// SPDX-License-Identifier: MPL-2.0
//! Demo application showing every toast state.
//!
//! The `App` owns the notification store and the toaster rendering it. Each
//! control creates a toast through the store; the toaster is synced right
//! after so new toasts appear without waiting for the next tick.

mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::ui::notifications::{
    self, Description, PendingPromise, Position, PromiseOptions, PromiseStep, Span, Store,
    ToastId, ToastOptions, ToastState, Toaster,
};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::{Duration, Instant};

pub const WINDOW_DEFAULT_WIDTH: f32 = 800.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 600.0;
pub const MIN_WINDOW_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 400.0;

/// How long the simulated upload takes.
const UPLOAD_DELAY: Duration = Duration::from_secs(2);

/// Root Iced application state.
pub struct App {
    store: Store,
    toaster: Toaster,
    position: Position,
    uploads: Vec<(u64, PendingPromise<u32, String>)>,
    next_job: u64,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("position", &self.position)
            .field("toasts", &self.store.live_count())
            .field("uploads", &self.uploads.len())
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_override(flags.config_dir.clone());
        let (config, config_warning) = config::load();
        if let Some(warning) = config_warning {
            tracing::warn!("{warning}");
        }

        let app = Self::with_config(&config, &flags);
        tracing::info!(position = %app.position, "toaster demo started");
        (app, Task::none())
    }

    /// Builds the application from an already loaded configuration.
    #[must_use]
    pub fn with_config(config: &Config, flags: &Flags) -> Self {
        let store = Store::with_defaults(config.store_defaults());
        if let Some(position) = flags.position {
            store.set_default_position(position);
        }
        let position = store.defaults().position;

        Self {
            toaster: Toaster::new(store.clone()),
            store,
            position,
            uploads: Vec::new(),
            next_job: 0,
        }
    }

    fn title(&self) -> String {
        match self.store.live_count() {
            0 => "Iced Toaster".to_string(),
            count => format!("Iced Toaster ({count})"),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.toaster.is_active())
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        if let Message::Tick(now) = message {
            self.toaster.update(notifications::Message::Tick(now));
            return Task::none();
        }

        // The tick subscription is off while nothing is shown, so bring the
        // logical clock up to date before scheduling anything.
        self.toaster.tick(Instant::now());

        let task = match message {
            Message::Show(state) => {
                self.store.create(sample(state));
                Task::none()
            }
            Message::StartUpload { fail } => self.start_upload(fail),
            Message::UploadFinished { job, result } => {
                if let Some(index) = self.uploads.iter().position(|(id, _)| *id == job) {
                    let (_, pending) = self.uploads.swap_remove(index);
                    pending.settle(&self.store, &result);
                }
                Task::none()
            }
            Message::Clear => {
                self.store.clear(None);
                Task::none()
            }
            Message::PositionSelected(position) => {
                self.position = position;
                self.toaster.set_position(position);
                Task::none()
            }
            Message::Toaster(message) => {
                self.toaster.update(message);
                Task::none()
            }
            Message::Tick(_) => Task::none(),
        };

        self.toaster.sync();
        task
    }

    fn start_upload(&mut self, fail: bool) -> Task<Message> {
        let job = self.next_job;
        self.next_job += 1;

        let pending = self.store.begin_promise(upload_options());
        tracing::debug!(job, id = %pending.id(), fail, "upload started");
        self.uploads.push((job, pending));

        Task::perform(simulate_upload(fail), move |result| Message::UploadFinished {
            job,
            result,
        })
    }
}

async fn simulate_upload(fail: bool) -> Result<u32, String> {
    tokio::time::sleep(UPLOAD_DELAY).await;
    if fail {
        Err("Network unreachable".to_string())
    } else {
        Ok(3)
    }
}

fn upload_options() -> PromiseOptions<u32, String> {
    PromiseOptions::new(
        ToastOptions::new().title("Uploading"),
        PromiseStep::computed(|count: &u32| {
            ToastOptions::new()
                .title("Uploaded")
                .description(format!("{count} photos are now in the shared album."))
        }),
        PromiseStep::computed(|error: &String| {
            ToastOptions::new()
                .title("Upload failed")
                .description(error.clone())
        }),
    )
}

/// Sample toast for each state.
fn sample(state: ToastState) -> ToastOptions {
    let options = ToastOptions::new().state(state);
    match state {
        ToastState::Success => options
            .title("Saved")
            .description("photo.png was written to disk."),
        ToastState::Loading => options
            .id(ToastId::from_key("working"))
            .title("Working")
            .persistent(),
        ToastState::Error => options.title("Export failed").description(Description::Rich(vec![
            Span::new("Could not write "),
            Span::new("photo.png").strong(),
            Span::new(": permission denied."),
        ])),
        ToastState::Warning => options
            .title("Low disk space")
            .description("Less than 1 GB is left on this volume."),
        ToastState::Info => options
            .title("Update available")
            .description("Version 0.2 is ready to install."),
        ToastState::Action => options
            .title("Photo deleted")
            .description("It was moved to the trash.")
            .button("Undo", || tracing::info!("undo requested")),
    }
}
