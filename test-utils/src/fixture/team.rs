//! Team fixtures for creating in-memory test data.

use entity::team;
use uuid::Uuid;

/// Default test team name.
pub const DEFAULT_NAME: &str = "Null Pointers";

/// Creates a team entity model with default values.
///
/// # Default Values
/// - id / university_id: nil UUID
/// - name: `"Null Pointers"`
/// - description / social_links / avatar_url: `None`
pub fn entity() -> team::Model {
    entity_builder().build()
}

/// Creates a builder for a team entity model starting from the defaults.
pub fn entity_builder() -> TeamEntityBuilder {
    TeamEntityBuilder {
        model: team::Model {
            id: Uuid::nil(),
            name: DEFAULT_NAME.to_string(),
            description: None,
            university_id: Uuid::nil(),
            social_links: None,
            avatar_url: None,
        },
    }
}

pub struct TeamEntityBuilder {
    model: team::Model,
}

impl TeamEntityBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.model.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.model.description = Some(description.into());
        self
    }

    pub fn social_links(mut self, social_links: impl Into<String>) -> Self {
        self.model.social_links = Some(social_links.into());
        self
    }

    pub fn avatar_url(mut self, avatar_url: impl Into<String>) -> Self {
        self.model.avatar_url = Some(avatar_url.into());
        self
    }

    pub fn build(self) -> team::Model {
        self.model
    }
}
