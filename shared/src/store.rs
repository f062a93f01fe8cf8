use std::collections::HashMap;
use thiserror::Error;
use crate::models::{Design, VoteResponse};

pub const INVALID_DESIGN_MESSAGE: &str = "Invalid design ID";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Duplicate design id: {0}")] DuplicateId(String),
    #[error("Need at least 1 design")] Empty,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VotingError {
    #[error("Unknown design: {0:?}")] UnknownDesign(String),
}

/// In-memory set of designs, keyed by id and kept in insertion order.
///
/// The key set is fixed once built; only `vote_count` ever changes.
#[derive(Debug, Clone)]
pub struct DesignStore {
    designs: Vec<Design>,
    index: HashMap<String, usize>,
}

impl DesignStore {
    pub fn new(seed: Vec<Design>) -> Result<Self, StoreError> {
        if seed.is_empty() {
            return Err(StoreError::Empty);
        }

        let mut index = HashMap::with_capacity(seed.len());
        for (pos, design) in seed.iter().enumerate() {
            if index.insert(design.id.clone(), pos).is_some() {
                return Err(StoreError::DuplicateId(design.id.clone()));
            }
        }
        Ok(Self { designs: seed, index })
    }

    pub fn seeded() -> Self {
        let designs = default_designs();
        let index = designs.iter()
            .enumerate()
            .map(|(pos, design)| (design.id.clone(), pos))
            .collect();
        Self { designs, index }
    }

    pub fn list(&self) -> &[Design] { &self.designs }

    pub fn get(&self, id: &str) -> Option<&Design> {
        self.index.get(id).map(|&pos| &self.designs[pos])
    }

    pub fn contains(&self, id: &str) -> bool { self.index.contains_key(id) }

    pub fn len(&self) -> usize { self.designs.len() }

    pub fn total_votes(&self) -> u64 {
        self.designs.iter().map(|d| u64::from(d.vote_count)).sum()
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut Design> {
        self.index.get(id).copied().map(move |pos| &mut self.designs[pos])
    }

    /// Removes one vote from `id`, never going below zero.
    pub fn retract(&mut self, id: &str) -> Result<&Design, VotingError> {
        let design = self.get_mut(id)
            .ok_or_else(|| VotingError::UnknownDesign(id.to_string()))?;
        design.vote_count = design.vote_count.saturating_sub(1);
        Ok(&*design)
    }

    /// Retracts `previous_id` (when known) and then counts a vote for `target_id`.
    ///
    /// An unknown or empty `previous_id` is treated as no previous vote. The
    /// retraction stays applied even when `target_id` turns out to be unknown.
    /// With `target_id == previous_id` the retraction runs first, so the pair
    /// nets to zero unless the floor absorbed it.
    pub fn cast(&mut self, target_id: &str, previous_id: Option<&str>) -> Result<&Design, VotingError> {
        if let Some(previous) = previous_id.filter(|id| !id.is_empty() && self.contains(id)) {
            self.retract(previous)?;
        }

        let design = self.get_mut(target_id)
            .ok_or_else(|| VotingError::UnknownDesign(target_id.to_string()))?;
        design.vote_count = design.vote_count.saturating_add(1);
        Ok(&*design)
    }

    pub fn vote(&mut self, target_id: &str, previous_id: Option<&str>) -> VoteResponse {
        let outcome = self.cast(target_id, previous_id)
            .map(|design| format!("Vote recorded for {}", design.name));
        self.respond(outcome)
    }

    pub fn withdraw(&mut self, previous_id: &str) -> VoteResponse {
        let outcome = self.retract(previous_id)
            .map(|design| format!("Vote removed from {}", design.name));
        self.respond(outcome)
    }

    fn respond(&self, outcome: Result<String, VotingError>) -> VoteResponse {
        let (success, message) = match outcome {
            Ok(message) => (true, message),
            Err(VotingError::UnknownDesign(_)) => (false, INVALID_DESIGN_MESSAGE.to_string()),
        };
        VoteResponse { success, designs: self.designs.clone(), message }
    }
}

pub fn default_designs() -> Vec<Design> {
    vec![
        Design::new("design_1", "Classic Chili", "https://images.unsplash.com/photo-1583224964811-e9c0c9a6c0e3?w=800"),
        Design::new("design_2", "Spicy Verde", "https://images.unsplash.com/photo-1574484284002-952d92456975?w=800"),
        Design::new("design_3", "White Bean Chili", "https://images.unsplash.com/photo-1551183053-bf91a1d81141?w=800"),
        Design::new("design_4", "Texas Red", "https://images.unsplash.com/photo-1604908176997-125f25cc6f3d?w=800"),
    ]
}
