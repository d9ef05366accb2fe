// 🪟 UI Toolkit Factories
// Each factory produces a matched family of widgets; families never mix

use serde::{Deserialize, Serialize};

// ============================================================================
// FAMILIES
// ============================================================================

/// The two widget families a factory can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UiFamily {
    Windows,
    MacOs,
}

impl UiFamily {
    pub fn name(&self) -> &'static str {
        match self {
            UiFamily::Windows => "Windows",
            UiFamily::MacOs => "Mac",
        }
    }
}

// ============================================================================
// PRODUCTS
// ============================================================================

/// A button styled for one family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
    family: UiFamily,
}

impl Button {
    pub fn family(&self) -> UiFamily {
        self.family
    }

    pub fn render(&self) -> &'static str {
        match self.family {
            UiFamily::Windows => "Windows-style button with blue theme",
            UiFamily::MacOs => "Mac-style button with rounded corners",
        }
    }
}

/// A text box styled for one family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBox {
    family: UiFamily,
}

impl TextBox {
    pub fn family(&self) -> UiFamily {
        self.family
    }

    pub fn render(&self) -> &'static str {
        match self.family {
            UiFamily::Windows => "Windows-style textbox with gray border",
            UiFamily::MacOs => "Mac-style textbox with subtle shadow",
        }
    }
}

// ============================================================================
// FACTORY
// ============================================================================

/// Bound to one family at construction; every product it yields carries that
/// family, so mixed pairs cannot be produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiFactory {
    family: UiFamily,
}

impl UiFactory {
    pub fn for_family(family: UiFamily) -> Self {
        UiFactory { family }
    }

    pub fn family(&self) -> UiFamily {
        self.family
    }

    pub fn create_button(&self) -> Button {
        Button {
            family: self.family,
        }
    }

    pub fn create_text_box(&self) -> TextBox {
        TextBox {
            family: self.family,
        }
    }
}

// ============================================================================
// DEMO
// ============================================================================

/// Console walkthrough: both factories render their button/text-box pair.
pub fn run() -> anyhow::Result<()> {
    println!("   Creating UI components using Abstract Factory Pattern...");

    let windows_factory = UiFactory::for_family(UiFamily::Windows);
    let windows_button = windows_factory.create_button();
    let windows_text_box = windows_factory.create_text_box();

    let mac_factory = UiFactory::for_family(UiFamily::MacOs);
    let mac_button = mac_factory.create_button();
    let mac_text_box = mac_factory.create_text_box();

    println!("   Windows Button: {}", windows_button.render());
    println!("   Windows TextBox: {}", windows_text_box.render());
    println!("   Mac Button: {}", mac_button.render());
    println!("   Mac TextBox: {}", mac_text_box.render());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_products_share_their_factory_family() {
        for family in [UiFamily::Windows, UiFamily::MacOs] {
            let factory = UiFactory::for_family(family);
            assert_eq!(factory.create_button().family(), family);
            assert_eq!(factory.create_text_box().family(), family);
        }
    }

    #[test]
    fn test_families_render_distinct_widgets() {
        let windows = UiFactory::for_family(UiFamily::Windows);
        let mac = UiFactory::for_family(UiFamily::MacOs);

        assert_ne!(windows.create_button().render(), mac.create_button().render());
        assert_ne!(
            windows.create_text_box().render(),
            mac.create_text_box().render()
        );
    }
}
