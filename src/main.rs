// SPDX-License-Identifier: MPL-2.0
//! Demo window for the toaster.
//!
//! ```text
//! iced_toaster [--position bottom-center] [--config path/to/toaster.toml]
//! ```

use iced::widget::{button, column, row, text, Container, Stack};
use iced::{Element, Length, Subscription, Task};
use iced_toaster::config::{self, ToasterConfig};
use iced_toaster::root::{self, MountGuard};
use iced_toaster::toast::{Content, Position, ToastOptions, ToastType};
use iced_toaster::toaster::{PromiseMessage, PromiseMessages};
use iced_toaster::{ui, ToastStore};
use std::cell::RefCell;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default)]
struct Flags {
    position: Option<Position>,
    config: Option<PathBuf>,
}

#[derive(Debug, Clone)]
enum Message {
    Show(ToastType),
    Save,
    SaveFinished,
    DismissAll,
    Toaster(ui::Message),
}

struct Demo {
    store: ToastStore,
    _root: Option<MountGuard>,
    saves: u32,
}

impl Demo {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let mut config = match flags.config.as_deref() {
            Some(path) => config::load_from_path(path),
            None => config::load(),
        }
        .unwrap_or_else(|err| {
            info!(%err, "using default toaster configuration");
            ToasterConfig::default()
        });
        if flags.position.is_some() {
            config.position = flags.position;
        }

        let store = ToastStore::new(config);
        let root = root::mount(store.clone())
            .inspect_err(|err| warn!(%err, "free toast functions unavailable"))
            .ok();

        (
            Self {
                store,
                _root: root,
                saves: 0,
            },
            Task::none(),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Show(kind) => {
                let content = match kind {
                    ToastType::Blank => Content::from("Hello from the toaster"),
                    ToastType::Success => "Everything went fine".into(),
                    ToastType::Error => "Something went wrong".into(),
                    ToastType::Loading => "Working on it...".into(),
                    ToastType::Custom => Content::dynamic(|toast| {
                        if toast.paused() {
                            "Paused while hovered".to_string()
                        } else {
                            "Custom content, hover me".to_string()
                        }
                    }),
                };
                if let Err(err) = root::active().map(|t| t.create(kind, content, ToastOptions::new()))
                {
                    warn!(%err, "toast dropped");
                }
                Task::none()
            }
            Message::Save => {
                self.saves += 1;
                let succeeds = self.saves % 2 == 1;
                let attempt = async move {
                    tokio::time::sleep(Duration::from_millis(1500)).await;
                    if succeeds {
                        Ok(3)
                    } else {
                        Err("disk full".to_string())
                    }
                };
                let messages = PromiseMessages::new(
                    "Saving...",
                    PromiseMessage::from_value(|files: &u32| format!("Saved {files} files")),
                    PromiseMessage::from_value(|err: &String| format!("Could not save: {err}")),
                );
                match root::promise(attempt, messages, ToastOptions::new()) {
                    Ok(tracked) => Task::perform(tracked, |_| Message::SaveFinished),
                    Err(err) => {
                        warn!(%err, "save not tracked");
                        Task::none()
                    }
                }
            }
            Message::SaveFinished => Task::none(),
            Message::DismissAll => {
                if let Err(err) = root::dismiss(None) {
                    warn!(%err, "dismiss failed");
                }
                Task::none()
            }
            Message::Toaster(message) => {
                ui::update(&self.store, message);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let kinds = [
            ("Blank", ToastType::Blank),
            ("Success", ToastType::Success),
            ("Error", ToastType::Error),
            ("Loading", ToastType::Loading),
            ("Custom", ToastType::Custom),
        ];
        let buttons = kinds.into_iter().fold(row![].spacing(8), |row, (label, kind)| {
            row.push(button(text(label)).on_press(Message::Show(kind)))
        });

        let content = Container::new(
            column![
                text("iced_toaster").size(24),
                buttons,
                row![
                    button(text("Save")).on_press(Message::Save),
                    button(text("Dismiss all")).on_press(Message::DismissAll),
                ]
                .spacing(8),
            ]
            .spacing(16),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill);

        let toasts = ui::overlay(&self.store.snapshot(), &self.store.config()).map(Message::Toaster);

        Stack::new().push(content).push(toasts).into()
    }

    fn subscription(&self) -> Subscription<Message> {
        ui::subscription(&self.store).map(Message::Toaster)
    }
}

fn parse_flags() -> Flags {
    let mut args = pico_args::Arguments::from_env();
    let position = args
        .opt_value_from_str("--position")
        .unwrap_or_else(|err| {
            warn!(%err, "ignoring --position");
            None
        });
    let config = args
        .opt_value_from_os_str("--config", |s| Ok::<_, String>(PathBuf::from(s)))
        .unwrap_or_else(|err| {
            warn!(%err, "ignoring --config");
            None
        });
    Flags { position, config }
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("iced_toaster=info")),
        )
        .init();

    // iced 0.14 wants a `Fn` boot; the flags are consumed on the first call.
    let flags = RefCell::new(Some(parse_flags()));
    let boot = move || Demo::new(flags.borrow_mut().take().unwrap_or_default());

    iced::application(boot, Demo::update, Demo::view)
        .title("iced_toaster demo")
        .subscription(Demo::subscription)
        .run()
}
