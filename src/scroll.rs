use crate::config::BACK_TO_TOP_OFFSET;

/// Page sections in document order, as `(id, side-nav label)`.
pub const SECTIONS: &[(&str, &str)] = &[
    ("inicio", "Inicio"),
    ("proyectos", "Proyectos"),
    ("stats", "Stats"),
    ("contacto", "Contacto"),
];

pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_OFFSET
}

/// Last-intersected-wins highlighting for the side navigation dots.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct SectionNav {
    active: Option<String>,
}

impl SectionNav {
    pub fn activate(&mut self, section_id: &str) {
        self.active = Some(section_id.to_string());
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_active(&self, dot_section: &str) -> bool {
        self.active.as_deref() == Some(dot_section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_to_top_appears_strictly_past_offset() {
        assert!(!back_to_top_visible(0.0));
        assert!(!back_to_top_visible(300.0));
        assert!(back_to_top_visible(300.5));
    }

    #[test]
    fn latest_section_wins() {
        let mut nav = SectionNav::default();
        assert_eq!(nav.active(), None);

        nav.activate("proyectos");
        nav.activate("stats");

        assert!(nav.is_active("stats"));
        assert!(!nav.is_active("proyectos"));
        let active_dots = SECTIONS.iter().filter(|(id, _)| nav.is_active(id)).count();
        assert_eq!(active_dots, 1);
    }
}
