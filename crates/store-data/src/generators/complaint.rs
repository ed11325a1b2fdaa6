//! Complaint generation between workers of the same department.

use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

use crate::generators::workforce::WorkforcePartition;

/// Generated complaint row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GeneratedComplaint {
    pub complainer_id: i64,
    pub complained_on_id: i64,
    #[serde(rename = "department_name")]
    pub department: String,
    pub reason: String,
}

/// Configuration for complaint generation.
#[derive(Debug, Clone)]
pub struct ComplaintConfig {
    /// Reasons drawn uniformly, one per complaint.
    pub reasons: Vec<String>,
    /// Upper bound on distinct targets per complainer.
    pub max_targets_per_worker: usize,
}

impl Default for ComplaintConfig {
    fn default() -> Self {
        Self {
            reasons: default_reasons(),
            max_targets_per_worker: 4,
        }
    }
}

/// Generates complaints scoped to department boundaries.
pub struct ComplaintGenerator {
    config: ComplaintConfig,
}

impl ComplaintGenerator {
    /// Creates a new complaint generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: ComplaintConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: ComplaintConfig) -> Self {
        Self { config }
    }

    /// Generates complaints for every worker against same-department
    /// colleagues.
    ///
    /// Each worker files against zero to `max_targets_per_worker` colleagues,
    /// drawn without replacement, so a pair appears at most once per
    /// direction. Workers alone in their department file nothing.
    pub fn generate(
        &self,
        partition: &WorkforcePartition,
        rng: &mut impl Rng,
    ) -> Vec<GeneratedComplaint> {
        let mut complaints = Vec::new();

        for (department, members) in partition.groups() {
            for &complainer_id in members {
                let eligible: Vec<i64> = members
                    .iter()
                    .copied()
                    .filter(|&id| id != complainer_id)
                    .collect();
                if eligible.is_empty() {
                    continue;
                }

                let max_targets = self.config.max_targets_per_worker.min(eligible.len());
                let target_count = rng.gen_range(0..=max_targets);

                for &complained_on_id in eligible.choose_multiple(rng, target_count) {
                    let reason = &self.config.reasons[rng.gen_range(0..self.config.reasons.len())];

                    complaints.push(GeneratedComplaint {
                        complainer_id,
                        complained_on_id,
                        department: department.clone(),
                        reason: reason.clone(),
                    });
                }
            }
        }

        // Deduplicate on the full record; sampling without replacement already
        // precludes repeats, so this is a safety net that keeps record order.
        let mut seen = HashSet::new();
        complaints.retain(|c| seen.insert(c.clone()));

        complaints
    }
}

impl Default for ComplaintGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn default_reasons() -> Vec<String> {
    vec![
        "Inventory mistake".into(),
        "Unprofessional behavior".into(),
        "Wrong product".into(),
        "Bad communication".into(),
        "Safety violation".into(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn partition() -> WorkforcePartition {
        WorkforcePartition::from_groups(vec![
            ("Kayaks".to_string(), vec![800, 801, 802, 803, 804]),
            ("E-Bikes".to_string(), vec![805, 806]),
            ("Headlamps".to_string(), vec![807]),
        ])
    }

    #[test]
    fn test_no_self_complaints() {
        let complaint_gen = ComplaintGenerator::new();
        let mut rng = rand::thread_rng();

        let complaints = complaint_gen.generate(&partition(), &mut rng);

        for complaint in &complaints {
            assert_ne!(complaint.complainer_id, complaint.complained_on_id);
        }
    }

    #[test]
    fn test_complaints_stay_inside_departments() {
        let complaint_gen = ComplaintGenerator::new();
        let partition = partition();
        let mut rng = rand::thread_rng();

        let complaints = complaint_gen.generate(&partition, &mut rng);

        for complaint in &complaints {
            assert_eq!(
                partition.department_of(complaint.complainer_id),
                Some(complaint.department.as_str())
            );
            assert_eq!(
                partition.department_of(complaint.complained_on_id),
                Some(complaint.department.as_str())
            );
        }
    }

    #[test]
    fn test_at_most_one_complaint_per_directed_pair() {
        let complaint_gen = ComplaintGenerator::new();
        let mut rng = rand::thread_rng();

        let complaints = complaint_gen.generate(&partition(), &mut rng);

        let mut pairs = HashSet::new();
        for complaint in &complaints {
            assert!(
                pairs.insert((complaint.complainer_id, complaint.complained_on_id)),
                "pair {} -> {} filed twice",
                complaint.complainer_id,
                complaint.complained_on_id
            );
        }
    }

    #[test]
    fn test_target_cap_is_respected() {
        let complaint_gen = ComplaintGenerator::new();
        let mut rng = rand::thread_rng();

        let complaints = complaint_gen.generate(&partition(), &mut rng);

        let mut per_complainer: HashMap<i64, usize> = HashMap::new();
        for complaint in &complaints {
            *per_complainer.entry(complaint.complainer_id).or_default() += 1;
        }
        for (complainer, count) in per_complainer {
            assert!(count <= 4, "worker {complainer} filed {count} complaints");
        }
    }

    #[test]
    fn test_lone_worker_files_nothing() {
        let complaint_gen = ComplaintGenerator::new();
        let mut rng = rand::thread_rng();

        let complaints = complaint_gen.generate(&partition(), &mut rng);

        // Worker 807 is alone in Headlamps.
        for complaint in &complaints {
            assert_ne!(complaint.complainer_id, 807);
            assert_ne!(complaint.complained_on_id, 807);
        }
    }

    #[test]
    fn test_reasons_come_from_the_configured_list() {
        let complaint_gen = ComplaintGenerator::with_config(ComplaintConfig {
            reasons: vec!["Missed handoff".to_string()],
            max_targets_per_worker: 4,
        });

        let mut total = 0;
        for seed in 0..5 {
            let mut rng = StdRng::seed_from_u64(seed);
            let complaints = complaint_gen.generate(&partition(), &mut rng);
            total += complaints.len();
            for complaint in &complaints {
                assert_eq!(complaint.reason, "Missed handoff");
            }
        }
        assert!(total > 0);
    }

    #[test]
    fn test_same_seed_reproduces_complaints() {
        let complaint_gen = ComplaintGenerator::new();
        let partition = partition();

        let mut rng_a = StdRng::seed_from_u64(21);
        let mut rng_b = StdRng::seed_from_u64(21);

        assert_eq!(
            complaint_gen.generate(&partition, &mut rng_a),
            complaint_gen.generate(&partition, &mut rng_b)
        );
    }
}
