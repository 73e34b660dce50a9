//! Card and floating-gradient color palettes, four per theme.

/// Colors for one palette: three card gradients and four floating stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// `(start, end)` gradient of each deck card.
    pub cards: [(&'static str, &'static str); 3],
    /// Stops of the floating background gradient.
    pub float: [&'static str; 4],
}

impl Palette {
    /// CSS custom properties this palette sets on the document root.
    #[must_use]
    pub fn css_variables(&self) -> Vec<(String, String)> {
        let cards = self.cards.iter().enumerate().flat_map(|(i, (start, end))| {
            [
                (format!("--card{i}-start"), (*start).to_owned()),
                (format!("--card{i}-end"), (*end).to_owned()),
            ]
        });
        let float = self
            .float
            .iter()
            .enumerate()
            .map(|(i, stop)| (format!("--float-stop{i}"), (*stop).to_owned()));
        cards.chain(float).collect()
    }
}

/// Palettes for the light theme.
pub const LIGHT_PALETTES: [Palette; 4] = [
    Palette {
        cards: [
            ("rgba(102, 126, 234, 0.25)", "rgba(118, 75, 162, 0.25)"),
            ("rgba(240, 147, 251, 0.25)", "rgba(245, 87, 108, 0.25)"),
            ("rgba(79, 172, 254, 0.00)", "rgba(0, 242, 254, 0.25)"),
        ],
        float: [
            "rgba(157, 102, 234, 0.763)",
            "rgba(0, 200, 255, 0.14)",
            "rgba(79, 172, 254, 0.04)",
            "rgba(118, 75, 162, 0.02)",
        ],
    },
    // peach, mint, cyan
    Palette {
        cards: [
            ("rgba(255, 175, 189, 0.25)", "rgba(255, 195, 160, 0.25)"),
            ("rgba(196, 255, 247, 0.25)", "rgba(168, 237, 234, 0.25)"),
            ("rgba(129, 236, 236, 0.10)", "rgba(116, 185, 255, 0.25)"),
        ],
        float: [
            "rgba(0, 255, 98, 0.76)",
            "rgba(168, 237, 233, 0.15)",
            "rgba(116, 185, 255, 0.08)",
            "rgba(99, 110, 114, 0.04)",
        ],
    },
    // gold, indigo, green
    Palette {
        cards: [
            ("rgba(255, 204, 112, 0.25)", "rgba(255, 159, 67, 0.25)"),
            ("rgba(108, 92, 231, 0.20)", "rgba(162, 155, 254, 0.25)"),
            ("rgba(85, 239, 196, 0.15)", "rgba(0, 206, 201, 0.25)"),
        ],
        float: [
            "rgb(255, 166, 0)",
            "rgba(162, 155, 254, 0.13)",
            "rgba(0, 206, 201, 0.10)",
            "rgba(45, 52, 54, 0.04)",
        ],
    },
    // coral, blue, pink
    Palette {
        cards: [
            ("rgba(255, 118, 117, 0.25)", "rgba(214, 48, 49, 0.25)"),
            ("rgba(9, 132, 227, 0.20)", "rgba(0, 206, 201, 0.25)"),
            ("rgba(253, 121, 168, 0.20)", "rgba(232, 67, 147, 0.25)"),
        ],
        float: [
            "rgba(255, 0, 0, 0.84)",
            "rgba(9, 133, 227, 0.12)",
            "rgba(232, 67, 147, 0.08)",
            "rgba(99, 110, 114, 0.04)",
        ],
    },
];

/// Palettes for the dark theme, same hues with adjusted alpha.
pub const DARK_PALETTES: [Palette; 4] = [
    Palette {
        cards: [
            ("rgba(102, 126, 234, 0.18)", "rgba(118, 75, 162, 0.22)"),
            ("rgba(240, 147, 251, 0.18)", "rgba(245, 87, 108, 0.22)"),
            ("rgba(79, 172, 254, 0.00)", "rgba(0, 242, 254, 0.18)"),
        ],
        float: [
            "rgba(157, 102, 234, 0.50)",
            "rgba(0, 200, 255, 0.32)",
            "rgba(79, 172, 254, 0.10)",
            "rgba(118, 75, 162, 0.08)",
        ],
    },
    Palette {
        cards: [
            ("rgba(255, 175, 189, 0.18)", "rgba(255, 195, 160, 0.22)"),
            ("rgba(196, 255, 247, 0.16)", "rgba(168, 237, 234, 0.22)"),
            ("rgba(129, 236, 236, 0.08)", "rgba(116, 185, 255, 0.18)"),
        ],
        float: [
            "rgba(0, 255, 98, 0.42)",
            "rgba(168, 237, 233, 0.28)",
            "rgba(116, 185, 255, 0.14)",
            "rgba(99, 110, 114, 0.10)",
        ],
    },
    Palette {
        cards: [
            ("rgba(255, 204, 112, 0.18)", "rgba(255, 159, 67, 0.22)"),
            ("rgba(108, 92, 231, 0.16)", "rgba(162, 155, 254, 0.22)"),
            ("rgba(85, 239, 196, 0.12)", "rgba(0, 206, 201, 0.20)"),
        ],
        float: [
            "rgb(255, 166, 0)",
            "rgba(162, 155, 254, 0.26)",
            "rgba(0, 206, 201, 0.18)",
            "rgba(45, 52, 54, 0.12)",
        ],
    },
    Palette {
        cards: [
            ("rgba(255, 118, 117, 0.18)", "rgba(214, 48, 49, 0.22)"),
            ("rgba(9, 132, 227, 0.16)", "rgba(0, 206, 201, 0.22)"),
            ("rgba(253, 121, 168, 0.16)", "rgba(232, 67, 147, 0.22)"),
        ],
        float: [
            "rgba(255, 0, 0, 0.48)",
            "rgba(9, 133, 227, 0.24)",
            "rgba(232, 67, 147, 0.20)",
            "rgba(99, 110, 114, 0.12)",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_variables_cover_cards_and_stops() {
        let vars = LIGHT_PALETTES[2].css_variables();
        assert_eq!(vars.len(), 10);
        assert_eq!(vars[0].0, "--card0-start");
        assert_eq!(vars[5].0, "--card2-end");
        assert_eq!(vars[6], ("--float-stop0".into(), "rgb(255, 166, 0)".into()));
        assert_eq!(vars[9].0, "--float-stop3");
    }

    #[test]
    fn dark_and_light_differ() {
        for (light, dark) in LIGHT_PALETTES.iter().zip(DARK_PALETTES.iter()) {
            assert_ne!(light, dark);
        }
    }
}
