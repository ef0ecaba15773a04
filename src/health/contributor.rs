//! Composite health contributor.

use super::indicator::HealthIndicator;
use super::status::{Health, Status};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

/// Named group of health indicators reported together.
///
/// Member names are the template registration names. Aggregation is
/// worst-of: any down member makes the group down, otherwise any unknown
/// member makes it unknown.
pub struct CompositeContributor {
    members: BTreeMap<String, Arc<HealthIndicator>>,
}

impl CompositeContributor {
    /// Well-known group label the composite is surfaced under.
    pub const GROUP: &'static str = "pubsub";

    pub fn new(members: BTreeMap<String, Arc<HealthIndicator>>) -> Self {
        Self { members }
    }

    /// Member names as an unordered set.
    pub fn names(&self) -> BTreeSet<String> {
        self.members.keys().cloned().collect()
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Member indicator by name.
    pub fn get(&self, name: &str) -> Option<&Arc<HealthIndicator>> {
        self.members.get(name)
    }

    /// Iterate members in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Arc<HealthIndicator>)> {
        self.members.iter()
    }

    /// Probe every member, keyed by member name.
    pub async fn check_all(&self) -> BTreeMap<String, Health> {
        let mut results = BTreeMap::new();
        for (name, indicator) in &self.members {
            results.insert(name.clone(), indicator.check().await);
        }
        results
    }

    /// Probe every member and aggregate into one group status.
    pub async fn check(&self) -> Health {
        let results = self.check_all().await;

        let mut aggregate = Status::Up;
        for health in results.values() {
            match health.status {
                Status::Down => {
                    aggregate = Status::Down;
                    break;
                }
                Status::Unknown => aggregate = Status::Unknown,
                Status::Up => {}
            }
        }

        let mut health = Health {
            status: aggregate,
            details: BTreeMap::new(),
        };
        for (name, member) in &results {
            health = health.with_detail(name, member.status.to_string());
        }
        health
    }
}
