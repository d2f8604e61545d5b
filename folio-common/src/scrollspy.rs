//! Scroll-position math for the navbar.
//!
//! Pure geometry: which section link is active at a given scroll offset,
//! whether the navbar shows a shadow, and where an anchor scroll should
//! land. The DOM layer feeds in measured offsets.

/// Scroll depth past which the navbar gains a drop shadow.
pub const NAVBAR_SHADOW_THRESHOLD: f64 = 100.0;

/// Lead distance: a section counts as active slightly before its top
/// reaches the viewport top.
pub const ACTIVE_LEAD: f64 = 100.0;

/// Measured geometry of one `section[id]` element.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    /// Document-space offset of the section top.
    pub top: f64,
    pub height: f64,
}

pub fn navbar_elevated(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SHADOW_THRESHOLD
}

/// The section containing the current scroll position, with `ACTIVE_LEAD`
/// of lookahead. Sections are expected in document order.
pub fn active_section(sections: &[SectionBounds], scroll_y: f64) -> Option<&str> {
    sections
        .iter()
        .find(|s| {
            let lead_top = s.top - ACTIVE_LEAD;
            scroll_y > lead_top && scroll_y <= lead_top + s.height
        })
        .map(|s| s.id.as_str())
}

/// Anchor scroll destination: the section top minus the fixed navbar.
pub fn anchor_target_y(section_top: f64, navbar_height: f64) -> f64 {
    section_top - navbar_height
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionBounds> {
        vec![
            SectionBounds {
                id: "about".to_string(),
                top: 600.0,
                height: 400.0,
            },
            SectionBounds {
                id: "projects".to_string(),
                top: 1000.0,
                height: 800.0,
            },
        ]
    }

    #[test]
    fn test_shadow_threshold() {
        assert!(!navbar_elevated(0.0));
        assert!(!navbar_elevated(100.0));
        assert!(navbar_elevated(100.5));
    }

    #[test]
    fn test_active_section_selection() {
        let s = sections();
        assert_eq!(active_section(&s, 0.0), None);
        // Lead: "about" activates at top - 100.
        assert_eq!(active_section(&s, 501.0), Some("about"));
        assert_eq!(active_section(&s, 900.0), Some("about"));
        assert_eq!(active_section(&s, 901.0), Some("projects"));
        assert_eq!(active_section(&s, 1700.0), Some("projects"));
        // Past the last section nothing is active.
        assert_eq!(active_section(&s, 1701.0), None);
    }

    #[test]
    fn test_anchor_target_offsets_navbar() {
        assert_eq!(anchor_target_y(600.0, 64.0), 536.0);
    }
}
