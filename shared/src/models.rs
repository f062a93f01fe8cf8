use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Design {
    pub id: String,
    pub name: String,
    pub image_reference: String,
    #[serde(default)]
    pub vote_count: u32,
}

impl Design {
    pub fn new(id: impl Into<String>, name: impl Into<String>, image_reference: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image_reference: image_reference.into(),
            vote_count: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VoteRequest {
    pub target_id: String,
    #[serde(default)]
    pub previous_id: Option<String>,
}

impl VoteRequest {
    /// An empty `previous_id` means "no previous vote".
    pub fn previous(&self) -> Option<&str> {
        self.previous_id.as_deref().filter(|id| !id.is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RetractRequest {
    pub previous_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VoteResponse {
    pub success: bool,
    pub designs: Vec<Design>,
    pub message: String,
}
