//! Test data fixtures for the mock server.
//!
//! Provides factory functions for creating realistic test data.

use chrono::{TimeZone, Utc};

use crate::{Space, SpaceSettings, Timeline};

/// Collection of fixture factories for test data.
pub struct Fixtures;

/// Default scenario with interconnected test data.
pub struct DefaultScenario {
    pub spaces: Vec<Space>,
}

impl Fixtures {
    /// Create a minimal space with required fields only.
    pub fn minimal_space(id: u64, title: &str) -> Space {
        Space {
            id,
            uid: Some(format!("space-{id}")),
            title: title.to_string(),
            updated: None,
            created: None,
            archived: false,
            access: Some("for_everyone".to_string()),
            for_everyone_access_role_id: None,
            entity_type: Some("space".to_string()),
            path: Some(id.to_string()),
            sort_order: Some(id as f64),
            parent_entity_uid: None,
            company_id: Some(1),
            allowed_card_type_ids: None,
            external_id: None,
            settings: None,
        }
    }

    /// Create a space with a working-hours timeline.
    pub fn space_with_timeline(id: u64, title: &str) -> Space {
        let mut space = Self::minimal_space(id, title);
        space.settings = Some(SpaceSettings {
            timeline: Some(Timeline {
                start_hour: 9,
                end_hour: 18,
                work_days: ["1", "2", "3", "4", "5"].map(String::from).to_vec(),
                planning_units: 1,
                calculate_resources_by: 1,
            }),
        });
        space
    }

    /// Create a space nested under another.
    pub fn child_space(id: u64, title: &str, parent: &Space) -> Space {
        let mut space = Self::minimal_space(id, title);
        space.parent_entity_uid = parent.uid.clone();
        space.path = parent.path.as_ref().map(|p| format!("{p}.{id}"));
        space
    }

    /// Create an archived space.
    pub fn archived_space(id: u64, title: &str) -> Space {
        let mut space = Self::minimal_space(id, title);
        space.archived = true;
        space
    }

    /// The data the default mock server starts with.
    ///
    /// - Space 1 "Engineering" with a timeline
    /// - Space 2 "Backend", nested under space 1
    /// - Space 3 "Legacy", archived
    pub fn default_scenario() -> DefaultScenario {
        let created = Utc.with_ymd_and_hms(2024, 1, 10, 8, 0, 0).single();

        let mut engineering = Self::space_with_timeline(1, "Engineering");
        engineering.created = created;
        engineering.updated = created;

        let backend = Self::child_space(2, "Backend", &engineering);
        let legacy = Self::archived_space(3, "Legacy");

        DefaultScenario {
            spaces: vec![engineering, backend, legacy],
        }
    }
}
