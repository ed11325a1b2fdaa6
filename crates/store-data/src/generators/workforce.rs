//! Workforce partitioning across departments.

use std::collections::VecDeque;

use rand::Rng;
use serde::Serialize;

use crate::config::IdBlock;
use crate::errors::ConfigError;

/// Generated worker assignment row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedWorker {
    #[serde(rename = "worker_id")]
    pub id: i64,
    #[serde(rename = "department_name")]
    pub department: String,
}

/// A worker-to-department partition, exposed both as assignment rows and as
/// per-department member lists.
///
/// The two views always agree: rows are ordered by worker id, groups follow
/// the department list order with members in assignment order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkforcePartition {
    workers: Vec<GeneratedWorker>,
    groups: Vec<(String, Vec<i64>)>,
}

impl WorkforcePartition {
    /// Builds a partition from explicit department groups.
    ///
    /// Assignment rows are derived from the groups and ordered by worker id.
    pub fn from_groups(groups: Vec<(String, Vec<i64>)>) -> Self {
        let mut workers: Vec<GeneratedWorker> = groups
            .iter()
            .flat_map(|(department, members)| {
                members.iter().map(move |&id| GeneratedWorker {
                    id,
                    department: department.clone(),
                })
            })
            .collect();
        workers.sort_by_key(|worker| worker.id);
        Self { workers, groups }
    }

    /// Assignment rows, ordered by worker id.
    pub fn workers(&self) -> &[GeneratedWorker] {
        &self.workers
    }

    /// Department groups in department-list order.
    pub fn groups(&self) -> &[(String, Vec<i64>)] {
        &self.groups
    }

    /// The department a worker was assigned to, if the worker exists.
    pub fn department_of(&self, worker_id: i64) -> Option<&str> {
        self.workers
            .iter()
            .find(|worker| worker.id == worker_id)
            .map(|worker| worker.department.as_str())
    }

    /// Total number of assigned workers.
    pub fn len(&self) -> usize {
        self.workers.len()
    }

    /// Returns true if the partition holds no workers.
    pub fn is_empty(&self) -> bool {
        self.workers.is_empty()
    }
}

/// Configuration for workforce partitioning.
#[derive(Debug, Clone)]
pub struct WorkforceConfig {
    /// Contiguous worker id block to partition.
    pub worker_ids: IdBlock,
}

impl Default for WorkforceConfig {
    fn default() -> Self {
        Self {
            worker_ids: IdBlock::new(800, 40),
        }
    }
}

/// Partitions a worker id block across departments, guaranteeing that no
/// department ends up empty.
pub struct WorkforceGenerator {
    config: WorkforceConfig,
}

impl WorkforceGenerator {
    /// Creates a new workforce generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: WorkforceConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: WorkforceConfig) -> Self {
        Self { config }
    }

    /// Assigns every worker a uniformly drawn department, then rebalances
    /// until no department is empty.
    ///
    /// Each rebalancing step moves one random worker out of the currently
    /// largest department (first such department on ties) into one empty
    /// department, in the order the empty departments were discovered. The
    /// donor always holds at least two workers, so a step never creates a
    /// new empty department and the loop terminates.
    pub fn generate(
        &self,
        departments: &[String],
        rng: &mut impl Rng,
    ) -> Result<WorkforcePartition, ConfigError> {
        if departments.is_empty() {
            return Err(ConfigError::NoDepartments);
        }

        let worker_ids = self.config.worker_ids.ids();
        if worker_ids.len() < departments.len() {
            return Err(ConfigError::TooFewWorkers {
                workers: worker_ids.len(),
                departments: departments.len(),
            });
        }

        // One independent uniform draw per worker.
        let mut members: Vec<Vec<i64>> = vec![Vec::new(); departments.len()];
        for worker_id in worker_ids {
            let department = rng.gen_range(0..departments.len());
            members[department].push(worker_id);
        }

        // Rebalancing can only shrink occupied departments, never empty them,
        // so the set of departments needing repair is fixed up front.
        let mut empty: VecDeque<usize> = members
            .iter()
            .enumerate()
            .filter(|(_, group)| group.is_empty())
            .map(|(department, _)| department)
            .collect();

        while let Some(department) = empty.pop_front() {
            let donor = largest_group(&members);
            let pick = rng.gen_range(0..members[donor].len());
            let moved = members[donor].remove(pick);
            members[department].push(moved);
        }

        let covered = members.iter().filter(|group| !group.is_empty()).count();
        assert_eq!(
            covered,
            departments.len(),
            "rebalancing must leave every department covered"
        );
        assert!(
            members.iter().all(|group| !group.is_empty()),
            "rebalancing must leave no department empty"
        );
        let total: usize = members.iter().map(Vec::len).sum();
        assert_eq!(
            total, self.config.worker_ids.count,
            "rebalancing must not change the workforce size"
        );

        let groups = departments.iter().cloned().zip(members).collect();
        Ok(WorkforcePartition::from_groups(groups))
    }
}

impl Default for WorkforceGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Index of the department currently holding the most workers.
///
/// Ties resolve to the earliest department in list order, which keeps the
/// rebalancing deterministic for a given draw sequence.
fn largest_group(members: &[Vec<i64>]) -> usize {
    let mut largest = 0;
    for (index, group) in members.iter().enumerate() {
        if group.len() > members[largest].len() {
            largest = index;
        }
    }
    largest
}
