// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo window.
//!
//! A small control panel for pushing toasts, with the toast column layered
//! on top through a `Stack`.

use super::Message;
use crate::config::ToastSettings;
use crate::toast::{DisplayMode, Manager, Severity, Toast};
use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{button, Column, Container, Row, Stack, Text};
use iced::{alignment, Element, Length};

const SEVERITIES: [Severity; 4] = [
    Severity::Info,
    Severity::Success,
    Severity::Warning,
    Severity::Error,
];

const DISPLAY_MODES: [DisplayMode; 4] = [
    DisplayMode::None,
    DisplayMode::Linear,
    DisplayMode::Circular,
    DisplayMode::Both,
];

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub toasts: &'a Manager,
    pub severity: Severity,
    pub display_mode: DisplayMode,
}

/// Renders the control panel with the toast overlay on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let panel = Container::new(control_panel(&ctx))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Left)
        .align_y(alignment::Vertical::Top)
        .padding(spacing::LG);

    let overlay = Toast::view_overlay(ctx.toasts).map(Message::Toast);

    Stack::new().push(panel).push(overlay).into()
}

fn control_panel<'a>(ctx: &ViewContext<'a>) -> Column<'a, Message> {
    let severity_row = Row::with_children(SEVERITIES.iter().map(|&severity| {
        choice(
            severity_label(severity),
            severity == ctx.severity,
            Message::SelectSeverity(severity),
        )
    }))
    .spacing(spacing::XS);

    let mode_row = Row::with_children(DISPLAY_MODES.iter().map(|&mode| {
        choice(
            display_mode_label(mode),
            mode == ctx.display_mode,
            Message::SelectDisplayMode(mode),
        )
    }))
    .spacing(spacing::XS);

    let actions = Row::new()
        .spacing(spacing::XS)
        .push(button(Text::new("Push")).on_press(Message::Push))
        .push(button(Text::new("Push in 2s")).on_press(Message::PushDelayed))
        .push(edit_button(ctx.toasts))
        .push(clear_button(ctx.toasts));

    Column::new()
        .spacing(spacing::MD)
        .push(Text::new("Toast playground").size(typography::BODY_LG))
        .push(Text::new("Severity").size(typography::CAPTION))
        .push(severity_row)
        .push(Text::new("Progress").size(typography::CAPTION))
        .push(mode_row)
        .push(actions)
        .push(Text::new(settings_summary(ctx.toasts.settings())).size(typography::CAPTION))
        .push(Text::new(format!("{} visible", ctx.toasts.len())).size(typography::CAPTION))
}

fn choice<'a>(label: &'a str, selected: bool, message: Message) -> Element<'a, Message> {
    let style = if selected {
        button::primary
    } else {
        button::secondary
    };
    button(Text::new(label).size(typography::BODY))
        .on_press(message)
        .style(style)
        .into()
}

fn edit_button(toasts: &Manager) -> Element<'_, Message> {
    let edit = button(Text::new("Edit first"));
    if toasts.is_empty() {
        edit.into()
    } else {
        edit.on_press(Message::EditFirst).into()
    }
}

fn clear_button(toasts: &Manager) -> Element<'_, Message> {
    let clear = button(Text::new("Clear")).style(button::danger);
    if toasts.is_empty() {
        clear.into()
    } else {
        clear.on_press(Message::ClearAll).into()
    }
}

pub(super) fn severity_label(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "Info",
        Severity::Success => "Success",
        Severity::Warning => "Warning",
        Severity::Error => "Error",
    }
}

fn display_mode_label(mode: DisplayMode) -> &'static str {
    match mode {
        DisplayMode::None => "None",
        DisplayMode::Linear => "Bar",
        DisplayMode::Circular => "Ring",
        DisplayMode::Both => "Both",
    }
}

fn settings_summary(settings: &ToastSettings) -> String {
    let mode = match (settings.stacked, settings.turn) {
        (true, _) => "stack",
        (false, true) => "queue, one at a time",
        (false, false) => "queue, all at once",
    };
    format!(
        "{} ms countdown, {mode}, {:?}, {:?}",
        settings.duration.as_millis(),
        settings.direction,
        settings.position
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn summary_describes_ordering_mode() {
        let stacked = ToastSettings::default();
        assert!(settings_summary(&stacked).contains("stack"));

        let race = ToastSettings {
            stacked: false,
            turn: false,
            duration: Duration::from_millis(1500),
            ..ToastSettings::default()
        };
        let summary = settings_summary(&race);
        assert!(summary.starts_with("1500 ms"));
        assert!(summary.contains("all at once"));
    }
}
