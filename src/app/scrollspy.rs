//! Scroll-spy: map a scroll position to the section it falls in, and track
//! which sections have been revealed at least once.

use super::content::Section;

/// Probe offset below the top of the viewport, so a section counts as active
/// slightly before its top edge reaches the top of the window.
pub const PROBE_OFFSET: i32 = 100;

/// Bottom margin subtracted from the viewport when deciding reveals, so a
/// section lights up only once it is meaningfully on screen.
pub const REVEAL_MARGIN: i32 = 50;

/// Vertical extent of one rendered section within the scrolled content,
/// measured from the top of the content (scroll position 0).
#[derive(Debug, Clone, Copy)]
pub struct SectionSpan {
    pub section: Section,
    pub top: i32,
    pub height: i32,
}

impl SectionSpan {
    fn contains(&self, y: i32) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// The first span (in document order) containing the probe point, if any.
pub fn active_section(spans: &[SectionSpan], scroll_pos: i32) -> Option<Section> {
    let probe = scroll_pos + PROBE_OFFSET;
    spans.iter().find(|s| s.contains(probe)).map(|s| s.section)
}

/// One-way visibility tracker: once a section has entered the viewport it is
/// permanently marked revealed, it never reverts.
pub struct RevealTracker {
    revealed: [bool; Section::ALL.len()],
}

impl RevealTracker {
    pub fn new() -> Self {
        Self {
            revealed: [false; Section::ALL.len()],
        }
    }

    pub fn is_revealed(&self, section: Section) -> bool {
        self.revealed[section.index()]
    }

    /// Mark every span whose top is inside the (margin-reduced) viewport as
    /// revealed. Returns the sections that just became visible.
    pub fn sweep(
        &mut self,
        spans: &[SectionSpan],
        scroll_pos: i32,
        viewport_height: i32,
    ) -> Vec<Section> {
        let bottom = scroll_pos + viewport_height - REVEAL_MARGIN;
        let mut newly = Vec::new();
        for span in spans {
            if span.top < bottom && !self.revealed[span.section.index()] {
                self.revealed[span.section.index()] = true;
                newly.push(span.section);
            }
        }
        newly
    }
}

impl Default for RevealTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans() -> Vec<SectionSpan> {
        // Seven consecutive 600px sections, in document order.
        Section::ALL
            .iter()
            .enumerate()
            .map(|(i, &section)| SectionSpan {
                section,
                top: i as i32 * 600,
                height: 600,
            })
            .collect()
    }

    #[test]
    fn test_probe_within_skills_span() {
        let spans = spans();
        // Skills is the fourth section: [1800, 2400). Probe = scroll + 100.
        assert_eq!(active_section(&spans, 1800), Some(Section::Skills));
        assert_eq!(active_section(&spans, 2200), Some(Section::Skills));
    }

    #[test]
    fn test_probe_at_top_of_page() {
        assert_eq!(active_section(&spans(), 0), Some(Section::About));
    }

    #[test]
    fn test_probe_past_end_is_none() {
        assert_eq!(active_section(&spans(), 7 * 600), None);
    }

    #[test]
    fn test_span_boundaries_are_half_open() {
        let spans = spans();
        // Probe exactly at a section's top belongs to that section, not the
        // previous one.
        assert_eq!(active_section(&spans, 600 - PROBE_OFFSET), Some(Section::Education));
        assert_eq!(active_section(&spans, 599 - PROBE_OFFSET), Some(Section::About));
    }

    #[test]
    fn test_reveal_is_one_way() {
        let spans = spans();
        let mut tracker = RevealTracker::new();

        let newly = tracker.sweep(&spans, 0, 700);
        assert_eq!(newly, vec![Section::About, Section::Education]);
        assert!(tracker.is_revealed(Section::About));
        assert!(!tracker.is_revealed(Section::Skills));

        // Scrolling back up never un-reveals
        tracker.sweep(&spans, 4000, 700);
        let newly = tracker.sweep(&spans, 0, 700);
        assert!(newly.is_empty());
        assert!(tracker.is_revealed(Section::Contact));
    }

    #[test]
    fn test_reveal_respects_margin() {
        let spans = spans();
        let mut tracker = RevealTracker::new();

        // Education starts at 600; viewport bottom minus margin is exactly 600,
        // which is not past the top yet.
        let newly = tracker.sweep(&spans, 0, 600 + REVEAL_MARGIN);
        assert_eq!(newly, vec![Section::About]);
    }
}
