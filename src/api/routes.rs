use std::fmt;
use std::str::FromStr;

use reqwest::Method;

pub const PUBLIC_TOOLS: &str = "/api/tools";

/// Verb used when saving an existing record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateVerb {
    Put,
    Patch,
}

impl UpdateVerb {
    pub fn method(self) -> Method {
        match self {
            UpdateVerb::Put => Method::PUT,
            UpdateVerb::Patch => Method::PATCH,
        }
    }
}

/// A REST collection and how records in it are saved.
#[derive(Debug, PartialEq, Eq)]
pub struct Resource {
    /// Singular label, also the `type` sent to auto-generate-seo.
    pub singular: &'static str,
    /// Key a wrapped collection response may use.
    pub plural: &'static str,
    pub collection: &'static str,
    pub update: UpdateVerb,
    pub auto_seo: bool,
}

pub static COMMANDS: Resource = Resource {
    singular: "command",
    plural: "commands",
    collection: "/api/admin/commands",
    update: UpdateVerb::Put,
    auto_seo: true,
};

pub static TOOLS: Resource = Resource {
    singular: "tool",
    plural: "tools",
    collection: "/api/admin/tools",
    update: UpdateVerb::Patch,
    auto_seo: true,
};

pub static LESSONS: Resource = Resource {
    singular: "lesson",
    plural: "lessons",
    collection: "/api/tutorials/lessons",
    update: UpdateVerb::Put,
    auto_seo: false,
};

pub static TUTORIALS: Resource = Resource {
    singular: "tutorial",
    plural: "tutorials",
    collection: "/api/tutorials",
    update: UpdateVerb::Put,
    auto_seo: false,
};

pub static SECTIONS: Resource = Resource {
    singular: "section",
    plural: "sections",
    collection: "/api/tutorials/sections",
    update: UpdateVerb::Put,
    auto_seo: false,
};

impl Resource {
    pub fn member(&self, id: &str) -> String {
        format!("{}/{}", self.collection, id)
    }

    pub fn auto_seo_path(&self) -> String {
        format!("{}/auto-generate-seo", self.collection)
    }

    /// `new` goes to the collection with POST, anything else to `/{id}`.
    pub fn submit_target(&self, id: &EntityId) -> (Method, String) {
        match id {
            EntityId::New => (Method::POST, self.collection.to_string()),
            EntityId::Existing(id) => (self.update.method(), self.member(id)),
        }
    }
}

/// Identifier as it appears on an edit screen: the literal `new` or a record id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityId {
    New,
    Existing(String),
}

impl EntityId {
    pub fn is_new(&self) -> bool {
        matches!(self, EntityId::New)
    }
}

impl From<&str> for EntityId {
    fn from(raw: &str) -> Self {
        if raw == "new" {
            EntityId::New
        } else {
            EntityId::Existing(raw.to_string())
        }
    }
}

impl FromStr for EntityId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(EntityId::from(s))
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::New => f.write_str("new"),
            EntityId::Existing(id) => f.write_str(id),
        }
    }
}
