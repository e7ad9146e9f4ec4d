//! Cross-component theming scenarios: scheme switches, override retention,
//! and instance isolation.

use glint_kit::prelude::*;

fn button_props(widget: Widget) -> glint_core::ButtonProps {
    match widget {
        Widget::Button(props) => props,
        other => panic!("expected a button, got {other:?}"),
    }
}

fn text_props(widget: Widget) -> glint_core::TextProps {
    match widget {
        Widget::Text(props) => props,
        other => panic!("expected text, got {other:?}"),
    }
}

#[test]
fn button_brand_roles_are_scheme_invariant() {
    let theme = ThemeState::new(ColorScheme::Light);

    let before = button_props(button("Save").build(&theme));
    assert_eq!(before.bgcolor, Some(Color::from_hex(0x2196F3)));
    assert_eq!(before.color, Some(Color::from_hex(0xFFFFFF)));

    theme.set_scheme(ColorScheme::Dark);

    let after = button_props(button("Save").build(&theme));
    assert_eq!(after.bgcolor, before.bgcolor);
    assert_eq!(after.color, before.color);
}

#[test]
fn text_foreground_flips_with_the_scheme() {
    let theme = ThemeState::new(ColorScheme::Light);

    let before = text_props(text("x").build(&theme));
    theme.set_scheme(ColorScheme::Dark);
    let after = text_props(text("x").build(&theme));

    assert_eq!(before.color, Some(Color::from_hex(0x212121)));
    assert_eq!(after.color, Some(Color::from_hex(0xFFFFFF)));
}

#[test]
fn explicit_button_background_survives_scheme_switch() {
    let theme = ThemeState::new(ColorScheme::Light);
    let custom = Color::from_hex(0x6A1B9A);

    let before = button_props(button("Go").bgcolor(custom).build(&theme));
    theme.set_scheme(ColorScheme::Dark);
    let after = button_props(button("Go").bgcolor(custom).build(&theme));

    assert_eq!(before.bgcolor, Some(custom));
    assert_eq!(after.bgcolor, Some(custom));
}

#[test]
fn independent_theme_states_style_independently() {
    let light = ThemeState::new(ColorScheme::Light);
    let dark = ThemeState::new(ColorScheme::Dark);

    let on_light = text_props(caption("note").build(&light));
    let on_dark = text_props(caption("note").build(&dark));

    assert_eq!(on_light.color, Some(Color::from_hex(0x757575)));
    assert_eq!(on_dark.color, Some(Color::from_hex(0xE0E0E0)));
}

#[test]
fn outlined_card_border_tracks_current_palette() {
    let theme = ThemeState::new(ColorScheme::Light);

    let unwrap_border = |widget: Widget| {
        let Widget::Card(wrapper) = widget else {
            panic!("expected a card");
        };
        let Widget::Container(frame) = *wrapper.content else {
            panic!("expected a frame");
        };
        frame.border.expect("outlined card must carry a border")
    };

    let light_border = unwrap_border(outlined_card("B").build(&theme));
    assert_eq!(light_border.color, Color::from_hex(0x757575));

    theme.set_scheme(ColorScheme::Dark);
    let dark_border = unwrap_border(outlined_card("B").build(&theme));
    assert_eq!(dark_border.color, Color::from_hex(0xE0E0E0));
}

#[test]
fn page_assembly_round_trip() {
    let theme = ThemeState::new(ColorScheme::Dark);

    let page = scrollable_page(vec![
        heading("Inbox", HeadingLevel::H1).build(&theme),
        titled_card("Welcome", "You have 3 unread messages.")
            .action(button("Open").build(&theme))
            .build(&theme),
        caption("Synced just now").build(&theme),
    ])
    .build();

    let Widget::Container(frame) = page else {
        panic!("expected the padded page frame");
    };
    let Widget::Column(column) = *frame.content.unwrap() else {
        panic!("expected the scroll column");
    };
    assert_eq!(column.children.len(), 3);
    assert_eq!(column.scroll, Some(ScrollMode::Auto));

    // The card in the middle resolved the dark surface.
    let Widget::Card(wrapper) = &column.children[1] else {
        panic!("expected the card");
    };
    let Widget::Container(card_frame) = (*wrapper.content).clone() else {
        panic!("expected the card frame");
    };
    assert_eq!(card_frame.bgcolor, Some(Color::from_hex(0x424242)));
}
