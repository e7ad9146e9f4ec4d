//! Themed input factories: text field, dropdown, checkbox.
//!
//! All three share the same color contract: content text in `text_primary`,
//! the interactive accent (border or fill) in `primary`.

use glint_core::{Callback, CheckboxProps, Color, DropdownProps, TextFieldProps, Widget};
use glint_theme::{ColorRole, ThemeState};

/// Builder for a themed single-line text input.
pub struct TextField {
    label: String,
    hint_text: Option<String>,
    value: String,
    on_change: Option<Callback<String>>,
    width: Option<f32>,
    color: Option<Color>,
    border_color: Option<Color>,
}

impl TextField {
    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint_text = Some(hint.into());
        self
    }

    /// Pre-fill the input value.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn on_change<F>(mut self, handler: F) -> Self
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.on_change = Some(Callback::new(handler));
        self
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = Some(color);
        self
    }

    pub fn build(self, theme: &ThemeState) -> Widget {
        let palette = theme.palette();
        Widget::TextField(TextFieldProps {
            label: self.label,
            hint_text: self.hint_text,
            value: self.value,
            on_change: self.on_change,
            width: self.width,
            color: Some(self.color.unwrap_or(palette.text_primary)),
            border_color: Some(self.border_color.unwrap_or(palette.primary)),
        })
    }
}

/// Create a text field builder.
pub fn text_field(label: impl Into<String>) -> TextField {
    TextField {
        label: label.into(),
        hint_text: None,
        value: String::new(),
        on_change: None,
        width: None,
        color: None,
        border_color: None,
    }
}

/// Builder for a themed dropdown.
pub struct Dropdown {
    label: String,
    options: Vec<String>,
    on_change: Option<Callback<String>>,
    width: Option<f32>,
    color: Option<Color>,
    border_color: Option<Color>,
}

impl Dropdown {
    pub fn on_change<F>(mut self, handler: F) -> Self
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.on_change = Some(Callback::new(handler));
        self
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = Some(color);
        self
    }

    pub fn build(self, theme: &ThemeState) -> Widget {
        let palette = theme.palette();
        Widget::Dropdown(DropdownProps {
            label: self.label,
            options: self.options,
            on_change: self.on_change,
            width: self.width,
            color: Some(self.color.unwrap_or(palette.text_primary)),
            border_color: Some(self.border_color.unwrap_or(palette.primary)),
        })
    }
}

/// Create a dropdown builder from a label and its options.
pub fn dropdown<I, S>(label: impl Into<String>, options: I) -> Dropdown
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Dropdown {
        label: label.into(),
        options: options.into_iter().map(Into::into).collect(),
        on_change: None,
        width: None,
        color: None,
        border_color: None,
    }
}

/// Builder for a themed checkbox.
pub struct Checkbox {
    label: String,
    value: bool,
    on_change: Option<Callback<bool>>,
    fill_color: Option<Color>,
}

impl Checkbox {
    /// Set the initial checked state.
    pub fn value(mut self, checked: bool) -> Self {
        self.value = checked;
        self
    }

    pub fn on_change<F>(mut self, handler: F) -> Self
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.on_change = Some(Callback::new(handler));
        self
    }

    pub fn fill_color(mut self, color: Color) -> Self {
        self.fill_color = Some(color);
        self
    }

    pub fn build(self, theme: &ThemeState) -> Widget {
        Widget::Checkbox(CheckboxProps {
            label: self.label,
            value: self.value,
            on_change: self.on_change,
            fill_color: Some(self.fill_color.unwrap_or(theme.color(ColorRole::Primary))),
        })
    }
}

/// Create a checkbox builder, unchecked by default.
pub fn checkbox(label: impl Into<String>) -> Checkbox {
    Checkbox {
        label: label.into(),
        value: false,
        on_change: None,
        fill_color: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_theme::ColorScheme;

    #[test]
    fn test_text_field_resolves_theme_colors() {
        let theme = ThemeState::new(ColorScheme::Light);
        let Widget::TextField(props) = text_field("Name").hint("Jane").build(&theme) else {
            panic!("expected a text field");
        };
        assert_eq!(props.label, "Name");
        assert_eq!(props.hint_text.as_deref(), Some("Jane"));
        assert_eq!(props.color, Some(Color::from_hex(0x212121)));
        assert_eq!(props.border_color, Some(Color::from_hex(0x2196F3)));
    }

    #[test]
    fn test_text_field_colors_follow_scheme() {
        let theme = ThemeState::new(ColorScheme::Dark);
        let Widget::TextField(props) = text_field("Name").build(&theme) else {
            panic!("expected a text field");
        };
        assert_eq!(props.color, Some(Color::WHITE));
        // Brand border is scheme-invariant.
        assert_eq!(props.border_color, Some(Color::from_hex(0x2196F3)));
    }

    #[test]
    fn test_dropdown_collects_options() {
        let theme = ThemeState::new(ColorScheme::Light);
        let Widget::Dropdown(props) =
            dropdown("Size", ["S", "M", "L"]).width(160.0).build(&theme)
        else {
            panic!("expected a dropdown");
        };
        assert_eq!(props.options, vec!["S", "M", "L"]);
        assert_eq!(props.width, Some(160.0));
        assert_eq!(props.border_color, Some(Color::from_hex(0x2196F3)));
    }

    #[test]
    fn test_checkbox_defaults_and_fill() {
        let theme = ThemeState::new(ColorScheme::Light);
        let Widget::Checkbox(props) = checkbox("Agree").build(&theme) else {
            panic!("expected a checkbox");
        };
        assert!(!props.value);
        assert_eq!(props.fill_color, Some(Color::from_hex(0x2196F3)));

        let Widget::Checkbox(checked) = checkbox("Agree").value(true).build(&theme) else {
            panic!("expected a checkbox");
        };
        assert!(checked.value);
    }

    #[test]
    fn test_empty_label_is_legal() {
        let theme = ThemeState::new(ColorScheme::Light);
        let Widget::TextField(props) = text_field("").build(&theme) else {
            panic!("expected a text field");
        };
        assert_eq!(props.label, "");
    }
}
