//! Accessibility-object (AX) associations.
//!
//! Platform accessibility APIs expose elements as typed AX objects. The
//! table below records, per AX object, the element shapes that produce it
//! and the ARIA roles it corresponds to. Widget-typed objects mark elements
//! as interactive even when no ARIA role concept covers them (`<summary>`
//! is the canonical case).

use super::{AttributeRequirement, ElementSchema};

/// Category of an AX object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxType {
    /// Interactive control.
    Widget,
    /// Non-interactive content or container.
    Structure,
    /// Dialog-like surface.
    Window,
}

/// One accessibility-object definition.
#[derive(Debug, Clone, Copy)]
pub struct AxObject {
    /// Platform AX object name.
    pub name: &'static str,
    /// Category.
    pub kind: AxType,
    /// Element shapes that produce this object.
    pub concepts: &'static [ElementSchema],
    /// ARIA roles this object corresponds to.
    pub related_roles: &'static [&'static str],
}

const fn ax(
    name: &'static str,
    kind: AxType,
    concepts: &'static [ElementSchema],
    related_roles: &'static [&'static str],
) -> AxObject {
    AxObject {
        name,
        kind,
        concepts,
        related_roles,
    }
}

/// All AX objects, sorted by name.
pub(crate) const AX_OBJECTS: &[AxObject] = &[
    ax("AbbrRole", AxType::Structure, &[ElementSchema::of("abbr", &[])], &[]),
    ax("AlertDialogRole", AxType::Window, &[], &["alertdialog"]),
    ax("AlertRole", AxType::Structure, &[], &["alert"]),
    ax(
        "ArticleRole",
        AxType::Structure,
        &[ElementSchema::of("article", &[])],
        &["article"],
    ),
    ax(
        "BannerRole",
        AxType::Structure,
        &[ElementSchema::of("header", &[])],
        &["banner"],
    ),
    ax(
        "ButtonRole",
        AxType::Widget,
        &[ElementSchema::of("button", &[])],
        &["button"],
    ),
    ax(
        "CheckBoxRole",
        AxType::Widget,
        &[ElementSchema::of(
            "input",
            &[AttributeRequirement::value("type", "checkbox")],
        )],
        &["checkbox"],
    ),
    ax(
        "ColorWellRole",
        AxType::Widget,
        &[ElementSchema::of(
            "input",
            &[AttributeRequirement::value("type", "color")],
        )],
        &[],
    ),
    ax(
        "ComboBoxRole",
        AxType::Widget,
        &[ElementSchema::of("select", &[])],
        &["combobox"],
    ),
    ax(
        "DateRole",
        AxType::Widget,
        &[ElementSchema::of(
            "input",
            &[AttributeRequirement::value("type", "date")],
        )],
        &[],
    ),
    ax(
        "DateTimeRole",
        AxType::Widget,
        &[ElementSchema::of(
            "input",
            &[AttributeRequirement::value("type", "datetime-local")],
        )],
        &[],
    ),
    ax(
        "DetailsRole",
        AxType::Structure,
        &[ElementSchema::of("details", &[])],
        &[],
    ),
    ax(
        "DialogRole",
        AxType::Window,
        &[ElementSchema::of("dialog", &[])],
        &["dialog"],
    ),
    ax(
        "DisclosureTriangleRole",
        AxType::Widget,
        &[ElementSchema::of("summary", &[])],
        &[],
    ),
    ax(
        "FigureRole",
        AxType::Structure,
        &[ElementSchema::of("figure", &[])],
        &["figure"],
    ),
    ax(
        "FooterRole",
        AxType::Structure,
        &[ElementSchema::of("footer", &[])],
        &["contentinfo"],
    ),
    ax(
        "FormRole",
        AxType::Structure,
        &[ElementSchema::of("form", &[])],
        &["form"],
    ),
    ax(
        "HeadingRole",
        AxType::Structure,
        &[
            ElementSchema::of("h1", &[]),
            ElementSchema::of("h2", &[]),
            ElementSchema::of("h3", &[]),
            ElementSchema::of("h4", &[]),
            ElementSchema::of("h5", &[]),
            ElementSchema::of("h6", &[]),
        ],
        &["heading"],
    ),
    ax(
        "ImageRole",
        AxType::Structure,
        &[ElementSchema::of("img", &[])],
        &["img"],
    ),
    ax(
        "InputTimeRole",
        AxType::Widget,
        &[ElementSchema::of(
            "input",
            &[AttributeRequirement::value("type", "time")],
        )],
        &[],
    ),
    ax(
        "LinkRole",
        AxType::Widget,
        &[ElementSchema::of(
            "a",
            &[AttributeRequirement::present("href")],
        )],
        &["link"],
    ),
    ax(
        "ListBoxOptionRole",
        AxType::Widget,
        &[ElementSchema::of("option", &[])],
        &["option"],
    ),
    ax(
        "ListBoxRole",
        AxType::Widget,
        &[ElementSchema::of("datalist", &[])],
        &["listbox"],
    ),
    ax(
        "ListItemRole",
        AxType::Structure,
        &[ElementSchema::of("li", &[])],
        &["listitem"],
    ),
    ax(
        "ListRole",
        AxType::Structure,
        &[ElementSchema::of("ol", &[]), ElementSchema::of("ul", &[])],
        &["list"],
    ),
    ax(
        "MainRole",
        AxType::Structure,
        &[ElementSchema::of("main", &[])],
        &["main"],
    ),
    ax(
        "MarqueeRole",
        AxType::Structure,
        &[ElementSchema::of("marquee", &[])],
        &["marquee"],
    ),
    ax("MenuBarRole", AxType::Structure, &[], &["menubar"]),
    ax(
        "MenuItemRole",
        AxType::Widget,
        &[ElementSchema::of("menuitem", &[])],
        &["menuitem"],
    ),
    ax(
        "MenuRole",
        AxType::Structure,
        &[ElementSchema::of("menu", &[])],
        &["menu"],
    ),
    ax(
        "MeterRole",
        AxType::Structure,
        &[ElementSchema::of("meter", &[])],
        &["meter"],
    ),
    ax(
        "NavigationRole",
        AxType::Structure,
        &[ElementSchema::of("nav", &[])],
        &["navigation"],
    ),
    ax(
        "PopUpButtonRole",
        AxType::Widget,
        &[ElementSchema::of("select", &[])],
        &[],
    ),
    ax(
        "ProgressIndicatorRole",
        AxType::Structure,
        &[ElementSchema::of("progress", &[])],
        &["progressbar"],
    ),
    ax(
        "RadioButtonRole",
        AxType::Widget,
        &[ElementSchema::of(
            "input",
            &[AttributeRequirement::value("type", "radio")],
        )],
        &["radio"],
    ),
    ax(
        "RowRole",
        AxType::Structure,
        &[ElementSchema::of("tr", &[])],
        &["row"],
    ),
    ax(
        "SearchBoxRole",
        AxType::Widget,
        &[ElementSchema::of(
            "input",
            &[AttributeRequirement::value("type", "search")],
        )],
        &["searchbox"],
    ),
    ax(
        "SliderRole",
        AxType::Widget,
        &[ElementSchema::of(
            "input",
            &[AttributeRequirement::value("type", "range")],
        )],
        &["slider"],
    ),
    ax(
        "SpinButtonRole",
        AxType::Widget,
        &[ElementSchema::of(
            "input",
            &[AttributeRequirement::value("type", "number")],
        )],
        &["spinbutton"],
    ),
    ax("SwitchRole", AxType::Widget, &[], &["switch"]),
    ax("TabRole", AxType::Widget, &[], &["tab"]),
    ax(
        "TableRole",
        AxType::Structure,
        &[ElementSchema::of("table", &[])],
        &["table"],
    ),
    ax(
        "TextAreaRole",
        AxType::Widget,
        &[ElementSchema::of("textarea", &[])],
        &["textbox"],
    ),
    ax(
        "TextFieldRole",
        AxType::Widget,
        &[
            ElementSchema::of("input", &[]),
            ElementSchema::of("input", &[AttributeRequirement::value("type", "text")]),
        ],
        &["textbox"],
    ),
    ax("ToggleButtonRole", AxType::Widget, &[], &["button"]),
    ax("TreeRole", AxType::Widget, &[], &["tree"]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted_by_name() {
        for pair in AX_OBJECTS.windows(2) {
            assert!(pair[0].name < pair[1].name, "{} >= {}", pair[0].name, pair[1].name);
        }
    }

    #[test]
    fn summary_is_a_widget_concept() {
        let widget_elements: Vec<&str> = AX_OBJECTS
            .iter()
            .filter(|o| o.kind == AxType::Widget)
            .flat_map(|o| o.concepts.iter().map(|c| c.element))
            .collect();
        assert!(widget_elements.contains(&"summary"));
    }

    #[test]
    fn checkbox_input_maps_to_checkbox_role() {
        let row = AX_OBJECTS
            .iter()
            .find(|o| o.name == "CheckBoxRole")
            .unwrap();
        assert!(row.related_roles.contains(&"checkbox"));
        assert_eq!(row.concepts[0].element, "input");
    }
}
