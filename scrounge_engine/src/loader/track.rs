//! Object boundary tracking for the marker-driven record dialects.

/// What one scanned line did to the object boundary state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Boundary {
    /// A record opened on this line; the partial record must reset.
    pub entered: bool,
    /// The current record closed on this line; commit or discard now.
    pub exited: bool,
}

/// Tiny state machine that watches scanned lines for record boundaries.
///
/// Observably two states, outside and inside a record. Brace depth is kept
/// so that a nested single-line sub-object (`"name": {"str": "Rat"}`) does
/// not end the record, while a whole object on one line both enters and
/// exits. The file-level array wrapper lines (`[`, `]`) carry no braces and
/// cause no transition, and a stray close marker outside any record is
/// ignored.
#[derive(Debug, Default)]
pub struct ObjectTracker {
    depth: usize,
}

impl ObjectTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a record is being assembled.
    pub fn inside(&self) -> bool {
        self.depth > 0
    }

    /// Feed one line and report any boundary events it produced.
    pub fn observe(&mut self, line: &str) -> Boundary {
        let mut boundary = Boundary::default();
        for ch in line.chars() {
            match ch {
                '{' => {
                    if self.depth == 0 {
                        boundary.entered = true;
                    }
                    self.depth += 1;
                },
                '}' if self.depth > 0 => {
                    self.depth -= 1;
                    if self.depth == 0 {
                        boundary.exited = true;
                    }
                },
                _ => {},
            }
        }
        boundary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multi_line_object_enters_then_exits() {
        let mut tracker = ObjectTracker::new();
        assert_eq!(tracker.observe("{"), Boundary { entered: true, exited: false });
        assert!(tracker.inside());
        assert_eq!(tracker.observe("\"id\": \"rat\","), Boundary::default());
        assert_eq!(tracker.observe("},"), Boundary { entered: false, exited: true });
        assert!(!tracker.inside());
    }

    #[test]
    fn one_line_object_enters_and_exits() {
        let mut tracker = ObjectTracker::new();
        let boundary = tracker.observe("{\"id\":\"rat\",\"name\":{\"str\":\"Rat\"},\"hp\":5}");
        assert!(boundary.entered);
        assert!(boundary.exited);
        assert!(!tracker.inside());
    }

    #[test]
    fn nested_sub_object_keeps_record_open() {
        let mut tracker = ObjectTracker::new();
        tracker.observe("{");
        let boundary = tracker.observe("\"name\": { \"str\": \"Rat\" },");
        assert_eq!(boundary, Boundary::default());
        assert!(tracker.inside());
    }

    #[test]
    fn array_wrapper_lines_cause_no_transition() {
        let mut tracker = ObjectTracker::new();
        assert_eq!(tracker.observe("["), Boundary::default());
        assert_eq!(tracker.observe("]"), Boundary::default());
        assert!(!tracker.inside());
    }

    #[test]
    fn stray_close_outside_is_ignored() {
        let mut tracker = ObjectTracker::new();
        assert_eq!(tracker.observe("}"), Boundary::default());
        assert!(!tracker.inside());
    }
}
