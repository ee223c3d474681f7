pub const STATS_TITLE_FALLBACK: &str = "Detalle";

const STATS_DATA: &[(&str, &[&str])] = &[
    ("proyectos", &["Sensor de huella", "Web personal"]),
    (
        "tecnologias",
        &[
            "HTML",
            "CSS",
            "JavaScript",
            "Arduino",
            "ESP32",
            "Impresión 3D",
            "Git",
            "EmailJS",
            "Unity",
        ],
    ),
    (
        "desarrollo",
        &["Casco Iron Man", "Webs modernas", "Videojuego Unity"],
    ),
];

/// Detail rows for a category; unknown categories have none.
pub fn stat_details(category: &str) -> &'static [&'static str] {
    STATS_DATA
        .iter()
        .find(|(key, _)| *key == category)
        .map(|(_, details)| *details)
        .unwrap_or(&[])
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct StatTile {
    pub category: &'static str,
    pub label: Option<&'static str>,
    pub target: u64,
}

impl StatTile {
    pub fn title(&self) -> &'static str {
        self.label
            .filter(|label| !label.trim().is_empty())
            .unwrap_or(STATS_TITLE_FALLBACK)
    }

    pub fn details(&self) -> &'static [&'static str] {
        stat_details(self.category)
    }
}

pub const STAT_TILES: &[StatTile] = &[
    StatTile {
        category: "proyectos",
        label: Some("Proyectos"),
        target: 12,
    },
    StatTile {
        category: "tecnologias",
        label: Some("Tecnologías"),
        target: 9,
    },
    StatTile {
        category: "desarrollo",
        label: Some("En desarrollo"),
        target: 3,
    },
];

/// What the stats modal shows once a tile has been clicked.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct StatsView {
    pub title: &'static str,
    pub rows: &'static [&'static str],
}

impl From<&StatTile> for StatsView {
    fn from(tile: &StatTile) -> Self {
        Self {
            title: tile.title(),
            rows: tile.details(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_category_lists_rows_in_order() {
        assert_eq!(stat_details("proyectos"), &["Sensor de huella", "Web personal"]);
        assert_eq!(stat_details("tecnologias").len(), 9);
        assert_eq!(stat_details("desarrollo")[0], "Casco Iron Man");
    }

    #[test]
    fn unknown_category_renders_no_rows() {
        let tile = StatTile {
            category: "premios",
            label: Some("Premios"),
            target: 0,
        };

        let view = StatsView::from(&tile);
        assert_eq!(view.title, "Premios");
        assert!(view.rows.is_empty());
    }

    #[test]
    fn missing_label_uses_fallback_title() {
        let tile = StatTile {
            category: "proyectos",
            label: None,
            target: 2,
        };
        assert_eq!(tile.title(), "Detalle");

        let blank = StatTile {
            label: Some("  "),
            ..tile
        };
        assert_eq!(blank.title(), "Detalle");
    }

    #[test]
    fn every_tile_resolves_to_a_category() {
        for tile in STAT_TILES {
            assert!(!tile.details().is_empty(), "{} has no rows", tile.category);
        }
    }
}
