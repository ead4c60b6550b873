use crate::element::Element;

/// Contents of the element detail modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementDetail {
    pub name: String,
    pub category: String,
    /// Atomic mass with its unit suffix.
    pub mass: String,
    pub state: String,
    pub electron: String,
    pub discovered: String,
    pub discoverer: String,
}

impl ElementDetail {
    pub fn from_element(element: &Element) -> Self {
        Self {
            name: element.name.clone(),
            category: element.category.clone(),
            mass: element.mass_label(),
            state: element.state.label().to_string(),
            electron: element.electron.clone(),
            discovered: element.discovered.clone(),
            discoverer: element.discoverer.clone(),
        }
    }

    pub fn attribution(&self) -> String {
        format!("Discovered in {} by {}", self.discovered, self.discoverer)
    }
}

impl From<&Element> for ElementDetail {
    fn from(element: &Element) -> Self {
        Self::from_element(element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Phase;

    #[test]
    fn copies_fields_verbatim_except_mass_unit() {
        let element = Element {
            number: 1,
            symbol: "H".to_string(),
            name: "Hydrogen".to_string(),
            row: 1,
            col: 1,
            category: "nonmetal".to_string(),
            state: Phase::Gas,
            mass: 1.008,
            electron: "1s1".to_string(),
            discovered: "1766".to_string(),
            discoverer: "Cavendish".to_string(),
        };

        let detail = ElementDetail::from(&element);

        assert_eq!(detail.name, "Hydrogen");
        assert_eq!(detail.category, "nonmetal");
        assert_eq!(detail.mass, "1.008 u");
        assert_eq!(detail.state, "Gas");
        assert_eq!(detail.electron, "1s1");
        assert_eq!(detail.discovered, "1766");
        assert_eq!(detail.discoverer, "Cavendish");
        assert_eq!(detail.attribution(), "Discovered in 1766 by Cavendish");
    }

    #[test]
    fn whole_number_mass_has_no_fraction() {
        let element = Element {
            number: 43,
            symbol: "Tc".to_string(),
            name: "Technetium".to_string(),
            row: 5,
            col: 7,
            category: "transition-metal".to_string(),
            state: Phase::Solid,
            mass: 98.0,
            electron: "[Kr] 4d5 5s2".to_string(),
            discovered: "1937".to_string(),
            discoverer: "Perrier and Segrè".to_string(),
        };

        assert_eq!(ElementDetail::from_element(&element).mass, "98 u");
    }
}
