#[cfg(test)]
mod tests {
    use crate::error::{Error, ErrorCode};
    use crate::models::{Design, VoteRequest, VoteResponse};
    use crate::store::{DesignStore, StoreError, VotingError, INVALID_DESIGN_MESSAGE};

    fn store(ids: &[&str]) -> DesignStore {
        DesignStore::new(
            ids.iter()
                .map(|id| Design::new(*id, format!("Design {id}"), format!("/img/{id}.png")))
                .collect(),
        )
        .unwrap()
    }

    fn counts(store: &DesignStore) -> Vec<(String, u32)> {
        store.list().iter().map(|d| (d.id.clone(), d.vote_count)).collect()
    }

    fn count(store: &DesignStore, id: &str) -> u32 {
        store.get(id).unwrap().vote_count
    }

    #[test]
    fn test_construction() {
        assert!(matches!(DesignStore::new(Vec::new()), Err(StoreError::Empty)));

        let dup = vec![Design::new("A", "a", "a.png"), Design::new("A", "b", "b.png")];
        assert!(matches!(DesignStore::new(dup), Err(StoreError::DuplicateId(id)) if id == "A"));

        let s = store(&["C", "A", "B"]);
        let ids: Vec<_> = s.list().iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, ["C", "A", "B"]);
        assert!(s.list().iter().all(|d| d.vote_count == 0));
        assert!(s.contains("A"));
        assert!(!s.contains("D"));
    }

    #[test]
    fn test_default_seed() {
        let s = DesignStore::seeded();
        assert_eq!(s.len(), 4);
        assert_eq!(s.list()[0].id, "design_1");
        assert_eq!(s.get("design_4").unwrap().name, "Texas Red");
        assert_eq!(s.total_votes(), 0);
    }

    #[test]
    fn test_vote_increments_only_target() {
        let mut s = store(&["A", "B", "C"]);
        for id in ["A", "B", "C"] {
            let before = counts(&s);
            let response = s.vote(id, None);
            assert!(response.success);
            for (i, (other, c)) in counts(&s).into_iter().enumerate() {
                let expected = if other == id { before[i].1 + 1 } else { before[i].1 };
                assert_eq!(c, expected, "count for {other} after voting {id}");
            }
        }
    }

    #[test]
    fn test_vote_change() {
        let mut s = store(&["A", "B"]);
        s.vote("A", None);
        s.vote("A", None);

        let response = s.vote("B", Some("A"));
        assert!(response.success);
        assert_eq!(count(&s, "A"), 1);
        assert_eq!(count(&s, "B"), 1);
    }

    #[test]
    fn test_unknown_target() {
        let mut s = store(&["A", "B"]);
        s.vote("A", None);

        let response = s.vote("nonexistent", None);
        assert!(!response.success);
        assert_eq!(response.message, INVALID_DESIGN_MESSAGE);
        assert_eq!(counts(&s), [("A".to_string(), 1), ("B".to_string(), 0)]);
        assert_eq!(response.designs, s.list());
    }

    #[test]
    fn test_unknown_target_keeps_retraction() {
        let mut s = store(&["A", "B"]);
        s.vote("B", None);
        let response = s.vote("Z", Some("B"));
        assert!(!response.success);
        assert_eq!(count(&s, "B"), 0);
    }

    #[test]
    fn test_retraction_floor() {
        let mut s = store(&["A", "B"]);
        let response = s.vote("B", Some("A"));
        assert!(response.success);
        assert_eq!(count(&s, "A"), 0);
        assert_eq!(count(&s, "B"), 1);

        assert_eq!(s.retract("A").unwrap().vote_count, 0);
    }

    #[test]
    fn test_unknown_or_empty_previous_ignored() {
        let mut s = store(&["A", "B"]);
        s.vote("B", None);

        assert!(s.vote("A", Some("missing")).success);
        assert!(s.vote("A", Some("")).success);
        assert_eq!(count(&s, "A"), 2);
        assert_eq!(count(&s, "B"), 1);
    }

    #[test]
    fn test_self_vote_change() {
        let mut s = store(&["A"]);
        s.vote("A", None);
        s.vote("A", Some("A"));
        assert_eq!(count(&s, "A"), 1, "re-vote for the same design nets to zero");

        let mut s = store(&["A"]);
        s.vote("A", Some("A"));
        assert_eq!(count(&s, "A"), 1, "floor absorbs retraction from zero");
    }

    #[test]
    fn test_cast_errors() {
        let mut s = store(&["A"]);
        assert_eq!(s.cast("A", None).unwrap().vote_count, 1);
        assert_eq!(s.cast("Q", None).unwrap_err(), VotingError::UnknownDesign("Q".into()));
        assert!(matches!(s.retract("Q"), Err(VotingError::UnknownDesign(_))));
    }

    #[test]
    fn test_withdraw() {
        let mut s = store(&["A", "B"]);
        s.vote("A", None);

        let response = s.withdraw("A");
        assert!(response.success);
        assert_eq!(response.message, "Vote removed from Design A");
        assert_eq!(count(&s, "A"), 0);

        let response = s.withdraw("Z");
        assert!(!response.success);
        assert_eq!(response.message, INVALID_DESIGN_MESSAGE);
    }

    #[test]
    fn test_worked_example() {
        let mut s = store(&["A", "B"]);

        let r = s.vote("A", None);
        assert!(r.success);
        assert_eq!(r.message, "Vote recorded for Design A");
        assert_eq!(counts(&s), [("A".to_string(), 1), ("B".to_string(), 0)]);

        let r = s.vote("B", Some("A"));
        assert!(r.success);
        assert_eq!(counts(&s), [("A".to_string(), 0), ("B".to_string(), 1)]);

        let r = s.vote("Z", Some("B"));
        assert!(!r.success);
        assert_eq!(r.message, INVALID_DESIGN_MESSAGE);
        assert_eq!(counts(&s), [("A".to_string(), 0), ("B".to_string(), 0)]);
    }

    #[test]
    fn test_wire_shapes() {
        let req: VoteRequest = serde_json::from_str(r#"{"target_id":"A"}"#).unwrap();
        assert_eq!(req.previous(), None);
        let req: VoteRequest = serde_json::from_str(r#"{"target_id":"A","previous_id":""}"#).unwrap();
        assert_eq!(req.previous(), None);
        let req: VoteRequest = serde_json::from_str(r#"{"target_id":"A","previous_id":null}"#).unwrap();
        assert_eq!(req.previous(), None);
        let req: VoteRequest = serde_json::from_str(r#"{"target_id":"A","previous_id":"B"}"#).unwrap();
        assert_eq!(req.previous(), Some("B"));

        let mut s = store(&["A"]);
        let value = serde_json::to_value(s.vote("A", None)).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["designs"][0]["id"], "A");
        assert_eq!(value["designs"][0]["image_reference"], "/img/A.png");
        assert_eq!(value["designs"][0]["vote_count"], 1);

        let parsed: VoteResponse = serde_json::from_value(value).unwrap();
        assert_eq!(parsed.designs, s.list());
    }

    #[test]
    fn test_error_display() {
        let plain = Error::new(ErrorCode::SystemError, "Design store unavailable");
        assert_eq!(plain.to_string(), "Internal system error: Design store unavailable");

        let detailed = Error::with_details(ErrorCode::NotFound, "Missing", "/api/x");
        assert_eq!(detailed.to_string(), "Resource not found: Missing (/api/x)");
    }
}
