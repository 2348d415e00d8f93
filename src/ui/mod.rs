// ui/mod.rs - Scene Construction
//
// `view` is a pure function of the splash state. It produces the immutable
// widget tree that iced's runtime diffs and renders; nothing in here mutates
// anything.

pub mod theme;

use iced::widget::{button, column, container, image, row, stack, text, vertical_space};
use iced::{font, Alignment, ContentFit, Element, Font, Length, Padding};

use crate::app::state::SplashState;
use crate::app::Message;
use crate::constants::{layout, motion};

const THIN: Font = Font {
    weight: font::Weight::Thin,
    ..Font::DEFAULT
};

const LIGHT: Font = Font {
    weight: font::Weight::Light,
    ..Font::DEFAULT
};

/// Builds the whole scene: background texture under the centered foreground
/// column.
pub fn view<'a>(
    state: &'a SplashState,
    background: Option<&image::Handle>,
) -> Element<'a, Message> {
    stack![backdrop(background), foreground(state)]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Full-bleed background: the texture cropped to fill the window, or the
/// flat themed fill when the asset is missing.
fn backdrop<'a>(background: Option<&image::Handle>) -> Element<'a, Message> {
    match background {
        Some(handle) => image(handle.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => container(text(""))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(theme::backdrop)
            .into(),
    }
}

fn foreground(state: &SplashState) -> Element<'_, Message> {
    column![
        vertical_space(),
        title_block(state),
        vertical_space(),
        toggle_button(state),
        vertical_space().height(layout::BOTTOM_SPACER),
    ]
    .align_x(Alignment::Center)
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(Padding::from([0.0, layout::EDGE_PADDING]))
    .into()
}

fn title_block(state: &SplashState) -> Element<'_, Message> {
    let lift = state.offset();
    let headroom = motion::ENTRANCE_OFFSET.abs();

    let block = column![
        text(state.title())
            .size(layout::TITLE_SIZE)
            .font(THIN)
            .color(theme::palette::INK),
        text(tracked(state.subtitle(), 2))
            .size(layout::BODY_SIZE)
            .font(LIGHT)
            .color(theme::palette::INK_SOFT),
    ]
    .spacing(layout::TITLE_BLOCK_SPACING)
    .align_x(Alignment::Center);

    // Trade top padding for bottom padding so a negative offset lifts the
    // block without resizing it.
    container(block)
        .padding(Padding {
            top: (headroom + lift).max(0.0),
            bottom: (headroom - lift).max(0.0),
            right: 0.0,
            left: 0.0,
        })
        .into()
}

fn toggle_button(state: &SplashState) -> Element<'_, Message> {
    // The spring scale is applied to the button's own metrics; iced has no
    // free transform on finished widgets.
    let scale = state.scale();

    let inner = row![
        text(state.icon().glyph())
            .size(layout::ICON_SIZE * scale)
            .color(theme::palette::INK),
        text(tracked(state.label(), 1))
            .size(layout::BODY_SIZE * scale)
            .font(LIGHT)
            .color(theme::palette::INK),
    ]
    .spacing(layout::BUTTON_ROW_SPACING * scale)
    .align_y(Alignment::Center);

    button(inner)
        .padding(Padding::from([
            layout::BUTTON_PAD_Y * scale,
            layout::BUTTON_PAD_X * scale,
        ]))
        .style(theme::pill)
        .on_press(Message::TogglePressed)
        .into()
}

/// Interleaves hair spaces to approximate positive letter tracking, which
/// the text widget does not expose.
fn tracked(copy: &str, amount: usize) -> String {
    let spacer = "\u{200A}".repeat(amount);
    let mut out = String::with_capacity(copy.len() * (amount + 1));
    let mut chars = copy.chars().peekable();
    while let Some(c) = chars.next() {
        out.push(c);
        if chars.peek().is_some() {
            out.push_str(&spacer);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::tracked;

    #[test]
    fn tracked_preserves_copy() {
        let spaced = tracked("Begin", 1);
        let stripped: String = spaced.chars().filter(|c| *c != '\u{200A}').collect();
        assert_eq!(stripped, "Begin");
    }

    #[test]
    fn tracked_adds_no_trailing_spacer() {
        assert!(!tracked("Simple", 2).ends_with('\u{200A}'));
        assert_eq!(tracked("", 2), "");
        assert_eq!(tracked("x", 2), "x");
    }
}
