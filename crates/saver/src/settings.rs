/// Settings window (iced)
///
/// Lets the user pick the multi-monitor mode and persists it to config.json.
use aerial_core::config::{load_config, save_config, MultiMonitorMode, SaverConfig};
use iced::{
    widget::{Button, Column, Container, PickList, Row, Text},
    Alignment, Element, Length, Sandbox, Settings,
};

const MODES: &[MultiMonitorMode] = &MultiMonitorMode::ALL;

#[derive(Debug, Clone)]
pub enum Message {
    ModeSelected(MultiMonitorMode),
    Save,
}

pub struct SettingsWindow {
    config: SaverConfig,
    saved_config: SaverConfig,
    status_message: String,
}

impl Sandbox for SettingsWindow {
    type Message = Message;

    fn new() -> Self {
        let config = load_config();
        SettingsWindow {
            saved_config: config.clone(),
            config,
            status_message: String::new(),
        }
    }

    fn title(&self) -> String {
        String::from("Aerial - Screensaver Settings")
    }

    fn update(&mut self, message: Message) {
        match message {
            Message::ModeSelected(mode) => {
                self.config.multi_monitor_mode = mode;
                self.status_message = if self.config == self.saved_config {
                    String::new()
                } else {
                    "Unsaved changes".to_string()
                };
            }

            Message::Save => match save_config(&self.config) {
                Ok(()) => {
                    self.saved_config = self.config.clone();
                    self.status_message = "Settings saved".to_string();
                }
                Err(e) => {
                    tracing::error!("Failed to save settings: {:#}", e);
                    self.status_message = format!("Failed to save settings: {}", e);
                }
            },
        }
    }

    fn view(&self) -> Element<Message> {
        let mode_picker = PickList::new(
            MODES,
            Some(self.config.multi_monitor_mode),
            Message::ModeSelected,
        )
        .width(Length::Fill);

        let footer = Row::new()
            .spacing(10)
            .align_items(Alignment::Center)
            .push(Button::new(Text::new("Save")).on_press(Message::Save))
            .push(Text::new(self.status_message.as_str()).size(14));

        let content = Column::new()
            .spacing(15)
            .padding(20)
            .push(Text::new("Multi-monitor mode").size(18))
            .push(mode_picker)
            .push(footer);

        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

/// Open the settings window and block until it is closed
pub fn run() -> iced::Result {
    tracing::info!("Opening settings window");

    SettingsWindow::run(Settings {
        window: iced::window::Settings {
            size: iced::Size::new(480.0, 200.0),
            position: iced::window::Position::Centered,
            resizable: false,
            ..Default::default()
        },
        ..Default::default()
    })
}
