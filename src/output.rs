//! Output formatting for CLI display.
//!
//! Provides the [`PrettyPrint`] trait for human-readable output
//! as an alternative to JSON serialization.

use crate::Space;

/// Trait for human-readable key-value output.
///
/// Implemented by entity types to provide formatted output
/// suitable for terminal display when `--json` is not specified.
pub trait PrettyPrint {
    /// Returns a formatted string for terminal display.
    fn pretty_print(&self) -> String;
}

impl PrettyPrint for Space {
    fn pretty_print(&self) -> String {
        let header = format!("Space #{}", self.id);
        let divider = "─".repeat(header.len().max(30));

        let mut lines = vec![
            header,
            divider,
            format!("Title:          {}", self.title),
        ];

        if let Some(ref uid) = self.uid {
            lines.push(format!("UID:            {}", uid));
        }

        if let Some(ref access) = self.access {
            lines.push(format!("Access:         {}", access));
        }

        if let Some(ref path) = self.path {
            lines.push(format!("Path:           {}", path));
        }

        if let Some(external_id) = self.external_id {
            lines.push(format!("External ID:    {}", external_id));
        }

        if let Some(ref created) = self.created {
            lines.push(format!("Created:        {}", created.format("%Y-%m-%d %H:%M:%S UTC")));
        }

        if let Some(timeline) = self.timeline() {
            lines.push(format!(
                "Timeline:       {:02}:00-{:02}:00, {} work days",
                timeline.start_hour,
                timeline.end_hour,
                timeline.work_days.len()
            ));
        }

        if self.archived {
            lines.push("Archived:       yes".to_string());
        }

        lines.join("\n")
    }
}
